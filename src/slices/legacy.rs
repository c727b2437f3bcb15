//! The counter as a single flat reducer over un-prefixed kinds.
//!
//! This predates slices: there is no auth state, and kind names are
//! global (`increase_by_value`, `toggle_counter`).

use super::counter::CounterState;
use crate::action::Action;
use crate::store::Store;

pub fn reduce(state: &CounterState, action: &Action) -> CounterState {
    match action.kind() {
        "increment" => CounterState {
            counter: state.counter.wrapping_add(1),
            ..*state
        },
        "decrement" => CounterState {
            counter: state.counter.wrapping_sub(1),
            ..*state
        },
        "increase_by_value" => match action.payload_i64() {
            Some(amount) => CounterState {
                counter: state.counter.wrapping_add(amount),
                ..*state
            },
            None => *state,
        },
        "toggle_counter" => CounterState {
            is_shown: !state.is_shown,
            ..*state
        },
        _ => *state,
    }
}

/// A flat store over [`CounterState`].
pub fn store() -> Store<CounterState> {
    Store::new(CounterState::default(), reduce)
}
