use super::Slice;
use crate::action::Action;
use serde::Serialize;
use serde_json::Value;
use std::any::Any;
use std::fmt::Debug;
use std::sync::Arc;

/// Type-erased slice state held in a root state.
pub trait SliceState: Any + Debug + Send + Sync {
    fn as_any(&self) -> &dyn Any;

    /// JSON snapshot of the state.
    fn to_json(&self) -> Value;

    fn dyn_eq(&self, other: &dyn SliceState) -> bool;
}

impl<T> SliceState for T
where
    T: Any + Debug + PartialEq + Serialize + Send + Sync,
{
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or_else(|error| {
            tracing::warn!(
                state = std::any::type_name::<T>(),
                %error,
                "slice state failed to serialize; using null"
            );
            Value::Null
        })
    }

    fn dyn_eq(&self, other: &dyn SliceState) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .is_some_and(|other| other == self)
    }
}

/// Type-erased [`Slice`], as registered with a root store.
pub trait AnySlice: Send + Sync {
    fn name(&self) -> &str;

    fn initial(&self) -> Arc<dyn SliceState>;

    /// Reduce `current` by `action`.
    ///
    /// Returns `current` itself (same allocation) when the transition is an identity.
    fn reduce(&self, current: &Arc<dyn SliceState>, action: &Action) -> Arc<dyn SliceState>;
}

impl<S: Slice> AnySlice for S {
    fn name(&self) -> &str {
        Slice::name(self)
    }

    fn initial(&self) -> Arc<dyn SliceState> {
        Arc::new(self.initial_state())
    }

    fn reduce(&self, current: &Arc<dyn SliceState>, action: &Action) -> Arc<dyn SliceState> {
        let Some(state) = current.as_any().downcast_ref::<S::State>() else {
            tracing::warn!(
                slice = Slice::name(self),
                "slice state has unexpected type; keeping it unchanged"
            );
            return Arc::clone(current);
        };

        let next = Slice::reduce(self, state, action);
        if &next == state {
            tracing::trace!(slice = Slice::name(self), kind = action.kind(), "identity transition");
            Arc::clone(current)
        } else {
            Arc::new(next)
        }
    }
}
