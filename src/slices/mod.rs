//! The application's slices and the store that composes them.
//!
//! - [`counter`] - a counter value and its visibility flag
//! - [`auth`] - the session flag gating the header navigation
//! - [`legacy`] - the counter as a single flat reducer, without slices

pub mod auth;
pub mod counter;
pub mod legacy;

use crate::error::StoreError;
use crate::store::{RootState, Store, StoreBuilder};

/// The application store: `counter` and `auth` composed into one root state.
pub fn app_store() -> Result<Store<RootState>, StoreError> {
    StoreBuilder::new()
        .slice(counter::CounterSlice)
        .slice(auth::AuthSlice)
        .build()
}
