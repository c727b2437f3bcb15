use super::subscription::{Subscribers, Subscription};
use crate::action::Action;
use parking_lot::{Mutex, ReentrantMutex, RwLock};
use std::cell::Cell;
use std::collections::VecDeque;
use std::sync::Arc;

type Reducer<S> = Arc<dyn Fn(&S, &Action) -> S + Send + Sync>;

/// A thread-safe store: one state value, one reducer, ordered subscribers.
///
/// Every [`dispatch`](Store::dispatch) runs the reducer synchronously,
/// replaces the state, then notifies subscribers in registration order.
/// Cloning a store yields another handle to the same state.
pub struct Store<S> {
    state: Arc<RwLock<S>>,
    reducer: Reducer<S>,
    subscribers: Arc<Mutex<Subscribers<S>>>,
    // Held for a whole dispatch; the flag marks that one is in progress.
    dispatch_lock: Arc<ReentrantMutex<Cell<bool>>>,
    pending: Arc<Mutex<VecDeque<Action>>>,
}

impl<S: Clone + Send + Sync + 'static> Store<S> {
    /// Create a store with the given initial state and reducer.
    pub fn new<R>(initial: S, reducer: R) -> Self
    where
        R: Fn(&S, &Action) -> S + Send + Sync + 'static,
    {
        Self {
            state: Arc::new(RwLock::new(initial)),
            reducer: Arc::new(reducer),
            subscribers: Arc::new(Mutex::new(Subscribers::new())),
            dispatch_lock: Arc::new(ReentrantMutex::new(Cell::new(false))),
            pending: Arc::new(Mutex::new(VecDeque::new())),
        }
    }

    /// Get a clone of the current state.
    pub fn get_state(&self) -> S {
        self.state.read().clone()
    }

    /// Read state without cloning it.
    pub fn read<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&S) -> R,
    {
        f(&*self.state.read())
    }

    /// Select a value derived from the current state.
    pub fn select<T, F>(&self, selector: F) -> T
    where
        F: FnOnce(&S) -> T,
    {
        self.read(selector)
    }

    /// Run `action` through the reducer and notify subscribers.
    ///
    /// Dispatches from different threads are serialized. A dispatch made
    /// from inside a subscriber is queued and runs once every subscriber
    /// has seen the current state, so each subscriber observes states in
    /// dispatch order.
    pub fn dispatch(&self, action: impl Into<Action>) {
        let action = action.into();
        let busy = self.dispatch_lock.lock();
        if busy.replace(true) {
            tracing::trace!(kind = action.kind(), "dispatch queued");
            self.pending.lock().push_back(action);
            return;
        }
        let _reset = scopeguard::guard((), |()| {
            busy.set(false);
            self.pending.lock().clear();
        });

        let mut current = Some(action);
        while let Some(action) = current {
            self.apply(&action);
            current = self.pending.lock().pop_front();
        }
    }

    fn apply(&self, action: &Action) {
        let next = (self.reducer)(&*self.state.read(), action);
        *self.state.write() = next.clone();

        let subscribers = self.subscribers.lock().snapshot();
        tracing::debug!(
            kind = action.kind(),
            subscribers = subscribers.len(),
            "dispatch"
        );
        for subscriber in subscribers {
            subscriber(&next);
        }
    }

    /// Subscribe to state changes.
    ///
    /// The callback is called with the new state after every dispatch.
    /// Dropping the returned [`Subscription`] unsubscribes it.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&S) + Send + Sync + 'static,
    {
        let id = self.subscribers.lock().insert(Arc::new(callback));
        let subscribers = Arc::downgrade(&self.subscribers);

        Subscription::new(id, move || {
            if let Some(subscribers) = subscribers.upgrade() {
                subscribers.lock().remove(id);
                tracing::trace!(id, "unsubscribed");
            }
        })
    }

    /// Watch a selected value, calling `callback` only when it changes.
    ///
    /// The selector is evaluated after every dispatch and compared with the
    /// previous selection.
    pub fn watch<T, Sel, F>(&self, selector: Sel, callback: F) -> Subscription
    where
        T: Clone + PartialEq + Send + 'static,
        Sel: Fn(&S) -> T + Send + Sync + 'static,
        F: Fn(&T) + Send + Sync + 'static,
    {
        let last = Mutex::new(self.read(&selector));

        self.subscribe(move |state| {
            let selected = selector(state);
            let changed = {
                let mut last = last.lock();
                if *last == selected {
                    false
                } else {
                    *last = selected.clone();
                    true
                }
            };
            if changed {
                callback(&selected);
            }
        })
    }

    /// Number of live subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.lock().len()
    }
}

impl<S> Clone for Store<S> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            reducer: Arc::clone(&self.reducer),
            subscribers: Arc::clone(&self.subscribers),
            dispatch_lock: Arc::clone(&self.dispatch_lock),
            pending: Arc::clone(&self.pending),
        }
    }
}
