use super::{RootState, Store};
use crate::action::Action;
use crate::error::StoreError;
use crate::slice::{AnySlice, SliceState};
use indexmap::IndexMap;
use std::sync::Arc;

/// Builder for a store composed from named slices.
///
/// # Example
///
/// ```
/// use slicebox::slices::{auth::AuthSlice, counter::{self, CounterSlice}};
/// use slicebox::StoreBuilder;
///
/// let store = StoreBuilder::new()
///     .slice(CounterSlice)
///     .slice(AuthSlice)
///     .build()
///     .unwrap();
///
/// store.dispatch(counter::increment());
/// assert_eq!(store.select(counter::select_counter), Some(1));
/// ```
#[derive(Default)]
pub struct StoreBuilder {
    slices: Vec<Box<dyn AnySlice>>,
}

impl StoreBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a slice under its own name.
    pub fn slice(mut self, slice: impl AnySlice + 'static) -> Self {
        self.slices.push(Box::new(slice));
        self
    }

    /// Register an already boxed slice.
    pub fn boxed(mut self, slice: Box<dyn AnySlice>) -> Self {
        self.slices.push(slice);
        self
    }

    pub fn build(self) -> Result<Store<RootState>, StoreError> {
        configure_store(self.slices)
    }
}

/// Compose `slices` into one store.
///
/// The root state starts as each slice's initial state keyed by slice name.
/// Every dispatch is offered to every slice in registration order.
pub fn configure_store(slices: Vec<Box<dyn AnySlice>>) -> Result<Store<RootState>, StoreError> {
    if slices.is_empty() {
        return Err(StoreError::NoSlices);
    }

    let mut initial: IndexMap<String, Arc<dyn SliceState>> = IndexMap::with_capacity(slices.len());
    for slice in &slices {
        let name = slice.name();
        if name.is_empty() || name.contains('/') {
            return Err(StoreError::InvalidSliceName {
                name: name.to_string(),
            });
        }
        if initial.contains_key(name) {
            return Err(StoreError::DuplicateSlice {
                name: name.to_string(),
            });
        }
        initial.insert(name.to_string(), slice.initial());
    }

    tracing::info!(
        slices = ?initial.keys().collect::<Vec<_>>(),
        "store configured"
    );

    let root = RootState { slices: initial };
    Ok(Store::new(root, move |state: &RootState, action: &Action| {
        reduce_root(&slices, state, action)
    }))
}

fn reduce_root(slices: &[Box<dyn AnySlice>], state: &RootState, action: &Action) -> RootState {
    let mut next: IndexMap<String, Arc<dyn SliceState>> = IndexMap::with_capacity(slices.len());
    for slice in slices {
        let name = slice.name();
        let substate = match state.slices.get(name) {
            Some(current) => slice.reduce(current, action),
            None => slice.initial(),
        };
        next.insert(name.to_string(), substate);
    }
    RootState { slices: next }
}
