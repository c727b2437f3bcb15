use std::sync::Arc;

pub(crate) type Callback<S> = Arc<dyn Fn(&S) + Send + Sync>;

/// Registered callbacks, kept in registration order.
pub(crate) struct Subscribers<S> {
    next_id: u64,
    entries: Vec<(u64, Callback<S>)>,
}

impl<S> Subscribers<S> {
    pub(crate) fn new() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }

    pub(crate) fn insert(&mut self, callback: Callback<S>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push((id, callback));
        id
    }

    pub(crate) fn remove(&mut self, id: u64) {
        self.entries.retain(|(entry, _)| *entry != id);
    }

    /// Callbacks to notify for one dispatch.
    ///
    /// Taken before any callback runs, so subscribing or unsubscribing from
    /// inside a callback affects the next dispatch, not the current one.
    pub(crate) fn snapshot(&self) -> Vec<Callback<S>> {
        self.entries.iter().map(|(_, cb)| Arc::clone(cb)).collect()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Handle to a registered subscriber.
///
/// The subscriber is removed when the handle is dropped or
/// [`unsubscribe`](Subscription::unsubscribe)d. Use
/// [`detach`](Subscription::detach) to keep it for the life of the store.
#[must_use = "dropping a Subscription unsubscribes it; call `detach` to keep it"]
pub struct Subscription {
    id: u64,
    cancel: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Subscription {
    pub(crate) fn new(id: u64, cancel: impl FnOnce() + Send + Sync + 'static) -> Self {
        Self {
            id,
            cancel: Some(Box::new(cancel)),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    /// Remove the subscriber. It is never invoked again.
    pub fn unsubscribe(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }

    /// Keep the subscriber registered without holding the handle.
    pub fn detach(mut self) {
        self.cancel = None;
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.cancel.is_some())
            .finish()
    }
}
