//! State containers.
//!
//! - [`Store`] - a reducer-driven container with ordered subscribers
//! - [`RootState`] - the state of a store composed from named slices
//! - [`StoreBuilder`] / [`configure_store`] - compose slices into one root store

mod builder;
mod root;
mod store;
mod subscription;

pub use builder::{configure_store, StoreBuilder};
pub use root::RootState;
pub use store::Store;
pub use subscription::Subscription;
