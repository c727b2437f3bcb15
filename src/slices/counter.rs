use crate::action::Action;
use crate::slice::Slice;
use crate::store::RootState;
use serde::{Deserialize, Serialize};

pub const NAME: &str = "counter";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CounterState {
    pub counter: i64,
    pub is_shown: bool,
}

impl Default for CounterState {
    fn default() -> Self {
        Self {
            counter: 0,
            is_shown: true,
        }
    }
}

/// Transitions understood by the counter slice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CounterAction {
    Increment,
    Decrement,
    IncreaseByAmount(i64),
    ToggleCounter,
}

impl CounterAction {
    fn case(self) -> &'static str {
        match self {
            CounterAction::Increment => "increment",
            CounterAction::Decrement => "decrement",
            CounterAction::IncreaseByAmount(_) => "increaseByAmount",
            CounterAction::ToggleCounter => "toggleCounter",
        }
    }

    /// Parse an action addressed to this slice.
    ///
    /// `increaseByAmount` without an integer payload is not a counter action.
    pub fn from_action(action: &Action) -> Option<Self> {
        match action.case_for(NAME)? {
            "increment" => Some(CounterAction::Increment),
            "decrement" => Some(CounterAction::Decrement),
            "increaseByAmount" => action.payload_i64().map(CounterAction::IncreaseByAmount),
            "toggleCounter" => Some(CounterAction::ToggleCounter),
            _ => None,
        }
    }

    /// Apply to `state`. Counter arithmetic wraps at the `i64` bounds.
    pub fn apply(self, state: &CounterState) -> CounterState {
        match self {
            CounterAction::Increment => CounterState {
                counter: state.counter.wrapping_add(1),
                ..*state
            },
            CounterAction::Decrement => CounterState {
                counter: state.counter.wrapping_sub(1),
                ..*state
            },
            CounterAction::IncreaseByAmount(amount) => CounterState {
                counter: state.counter.wrapping_add(amount),
                ..*state
            },
            CounterAction::ToggleCounter => CounterState {
                is_shown: !state.is_shown,
                ..*state
            },
        }
    }
}

impl From<CounterAction> for Action {
    fn from(action: CounterAction) -> Self {
        let kind = format!("{NAME}/{}", action.case());
        match action {
            CounterAction::IncreaseByAmount(amount) => Action::with_payload(kind, amount),
            _ => Action::new(kind),
        }
    }
}

pub struct CounterSlice;

impl Slice for CounterSlice {
    type State = CounterState;

    fn name(&self) -> &str {
        NAME
    }

    fn initial_state(&self) -> CounterState {
        CounterState::default()
    }

    fn reduce(&self, state: &CounterState, action: &Action) -> CounterState {
        match CounterAction::from_action(action) {
            Some(action) => action.apply(state),
            None => *state,
        }
    }
}

pub fn increment() -> Action {
    CounterAction::Increment.into()
}

pub fn decrement() -> Action {
    CounterAction::Decrement.into()
}

pub fn increase_by_amount(amount: i64) -> Action {
    CounterAction::IncreaseByAmount(amount).into()
}

pub fn toggle_counter() -> Action {
    CounterAction::ToggleCounter.into()
}

pub fn select_counter(root: &RootState) -> Option<i64> {
    root.get::<CounterState>(NAME).map(|state| state.counter)
}

pub fn select_is_shown(root: &RootState) -> Option<bool> {
    root.get::<CounterState>(NAME).map(|state| state.is_shown)
}
