//! # Slicebox
//!
//! A reducer-driven state container composed from independent slices.
//!
//! ## Slices
//!
//! Each slice owns a named subtree of state and a pure update function:
//! - `Slice` - a typed slice with an initial state and `reduce`
//! - `fn_slice` - a slice built from an initial value and a closure
//!
//! ## Store
//!
//! - `Store<S>` - thread-safe container: `get_state`, `dispatch`, `subscribe`
//! - `StoreBuilder` - composes slices into a `Store<RootState>`
//! - Dispatch is synchronous and total; unknown actions leave state unchanged
//! - Subscribers run after every dispatch, in registration order
//!
//! ```
//! use slicebox::slices::{self, auth, counter};
//!
//! let store = slices::app_store().unwrap();
//! store.dispatch(counter::increment());
//! store.dispatch(counter::increase_by_amount(5));
//! store.dispatch(auth::login());
//!
//! assert_eq!(store.select(counter::select_counter), Some(6));
//! assert_eq!(store.select(auth::select_is_authenticated), Some(true));
//! ```

pub mod action;
pub mod error;
pub mod slice;
pub mod slices;
pub mod store;

// Re-export main types for convenience
pub use action::Action;
pub use error::StoreError;
pub use slice::{fn_slice, AnySlice, FnSlice, Slice, SliceState};
pub use store::{configure_store, RootState, Store, StoreBuilder, Subscription};
