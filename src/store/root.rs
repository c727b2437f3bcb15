use crate::slice::SliceState;
use indexmap::IndexMap;
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Root state of a slice-composed store: slice name to that slice's state.
///
/// Cloning is cheap; substates are shared and only replaced when their
/// slice actually changes them.
#[derive(Clone, Default)]
pub struct RootState {
    pub(crate) slices: IndexMap<String, Arc<dyn SliceState>>,
}

impl RootState {
    /// The state of slice `name`, if it exists and has type `T`.
    pub fn get<T: Any>(&self, name: &str) -> Option<&T> {
        self.slices.get(name)?.as_any().downcast_ref::<T>()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.slices.contains_key(name)
    }

    /// Slice names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.slices.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.slices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    /// Whether `self` and `other` hold the very same allocation for slice `name`.
    pub fn shares_slice(&self, other: &RootState, name: &str) -> bool {
        match (self.slices.get(name), other.slices.get(name)) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// JSON snapshot keyed by slice name.
    pub fn to_json(&self) -> Value {
        Value::Object(
            self.slices
                .iter()
                .map(|(name, state)| (name.clone(), state.to_json()))
                .collect(),
        )
    }
}

impl PartialEq for RootState {
    fn eq(&self, other: &Self) -> bool {
        self.slices.len() == other.slices.len()
            && self.slices.iter().all(|(name, state)| {
                other
                    .slices
                    .get(name)
                    .is_some_and(|theirs| state.dyn_eq(&**theirs))
            })
    }
}

impl fmt::Debug for RootState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.slices.iter()).finish()
    }
}

impl Serialize for RootState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(
            self.slices
                .iter()
                .map(|(name, state)| (name, state.to_json())),
        )
    }
}
