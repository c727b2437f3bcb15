//! Actions: tagged data values describing a requested state transition.
//!
//! Slices generate their kinds as `"<slice>/<case>"`. A bare `"<case>"`
//! kind is offered to every slice.

mod action;

pub use action::Action;
