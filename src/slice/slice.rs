use crate::action::Action;
use serde::Serialize;
use std::fmt::Debug;

/// A named slice of root state.
///
/// `reduce` must be pure: it receives the current substate and returns the
/// next one. Actions the slice does not recognize return the state unchanged.
pub trait Slice: Send + Sync + 'static {
    type State: Clone + Debug + PartialEq + Serialize + Send + Sync + 'static;

    /// Key under which this slice's state lives in the root state.
    fn name(&self) -> &str;

    fn initial_state(&self) -> Self::State;

    fn reduce(&self, state: &Self::State, action: &Action) -> Self::State;
}

/// A slice defined by an initial value and an update function.
pub struct FnSlice<T, F> {
    name: String,
    initial: T,
    update: F,
}

impl<T, F> Slice for FnSlice<T, F>
where
    T: Clone + Debug + PartialEq + Serialize + Send + Sync + 'static,
    F: Fn(&T, &Action) -> T + Send + Sync + 'static,
{
    type State = T;

    fn name(&self) -> &str {
        &self.name
    }

    fn initial_state(&self) -> T {
        self.initial.clone()
    }

    fn reduce(&self, state: &T, action: &Action) -> T {
        (self.update)(state, action)
    }
}

/// Create a slice from its name, initial state and update function.
///
/// # Example
///
/// ```
/// use slicebox::{fn_slice, StoreBuilder};
///
/// let store = StoreBuilder::new()
///     .slice(fn_slice("clicks", 0u32, |n: &u32, action| match action.kind() {
///         "click" => n + 1,
///         _ => *n,
///     }))
///     .build()
///     .unwrap();
///
/// store.dispatch("click");
/// assert_eq!(store.select(|root| root.get::<u32>("clicks").copied()), Some(1));
/// ```
pub fn fn_slice<T, F>(name: impl Into<String>, initial: T, update: F) -> FnSlice<T, F>
where
    T: Clone + Debug + PartialEq + Serialize + Send + Sync + 'static,
    F: Fn(&T, &Action) -> T + Send + Sync + 'static,
{
    FnSlice {
        name: name.into(),
        initial,
        update,
    }
}
