use thiserror::Error;

/// Errors raised while configuring a store.
///
/// Dispatch itself never fails; these only surface from
/// [`StoreBuilder::build`](crate::store::StoreBuilder::build).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("store configuration requires at least one slice")]
    NoSlices,

    #[error("slice '{name}' is registered more than once")]
    DuplicateSlice { name: String },

    #[error("invalid slice name '{name}': must be non-empty and contain no '/'")]
    InvalidSliceName { name: String },
}
