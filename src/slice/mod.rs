//! Slices: independently owned, named subtrees of state with a pure update function.
//!
//! - [`Slice`] - the typed trait a slice implements
//! - [`fn_slice`] - a slice built from an initial value and a closure
//! - [`AnySlice`] / [`SliceState`] - the type-erased forms a root store composes

mod erased;
mod slice;

pub use erased::{AnySlice, SliceState};
pub use slice::{fn_slice, FnSlice, Slice};
