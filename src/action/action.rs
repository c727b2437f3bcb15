use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A dispatched action: a kind plus an optional plain-data payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Action {
    kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    payload: Option<Value>,
}

impl Action {
    /// Create an action without a payload.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            payload: None,
        }
    }

    /// Create an action carrying a payload.
    pub fn with_payload(kind: impl Into<String>, payload: impl Into<Value>) -> Self {
        Self {
            kind: kind.into(),
            payload: Some(payload.into()),
        }
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn payload(&self) -> Option<&Value> {
        self.payload.as_ref()
    }

    /// The payload as an integer, if it is one.
    pub fn payload_i64(&self) -> Option<i64> {
        self.payload.as_ref().and_then(Value::as_i64)
    }

    /// The case name this action addresses within `slice`.
    ///
    /// `"counter/increment"` yields `Some("increment")` for `counter` and
    /// `None` for any other slice. An un-prefixed kind is returned as is.
    pub fn case_for(&self, slice: &str) -> Option<&str> {
        match self.kind.split_once('/') {
            Some((prefix, case)) if prefix == slice => Some(case),
            Some(_) => None,
            None => Some(&self.kind),
        }
    }
}

impl From<&str> for Action {
    fn from(kind: &str) -> Self {
        Action::new(kind)
    }
}

impl From<String> for Action {
    fn from(kind: String) -> Self {
        Action::new(kind)
    }
}
