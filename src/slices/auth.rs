use crate::action::Action;
use crate::slice::Slice;
use crate::store::RootState;
use serde::{Deserialize, Serialize};

pub const NAME: &str = "auth";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthState {
    pub is_authenticated: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthAction {
    Login,
    Logout,
}

impl AuthAction {
    pub fn from_action(action: &Action) -> Option<Self> {
        match action.case_for(NAME)? {
            "login" => Some(AuthAction::Login),
            "logout" => Some(AuthAction::Logout),
            _ => None,
        }
    }
}

impl From<AuthAction> for Action {
    fn from(action: AuthAction) -> Self {
        match action {
            AuthAction::Login => Action::new(format!("{NAME}/login")),
            AuthAction::Logout => Action::new(format!("{NAME}/logout")),
        }
    }
}

pub struct AuthSlice;

impl Slice for AuthSlice {
    type State = AuthState;

    fn name(&self) -> &str {
        NAME
    }

    fn initial_state(&self) -> AuthState {
        AuthState::default()
    }

    fn reduce(&self, state: &AuthState, action: &Action) -> AuthState {
        match AuthAction::from_action(action) {
            Some(AuthAction::Login) => AuthState {
                is_authenticated: true,
            },
            Some(AuthAction::Logout) => AuthState {
                is_authenticated: false,
            },
            None => *state,
        }
    }
}

pub fn login() -> Action {
    AuthAction::Login.into()
}

pub fn logout() -> Action {
    AuthAction::Logout.into()
}

pub fn select_is_authenticated(root: &RootState) -> Option<bool> {
    root.get::<AuthState>(NAME).map(|state| state.is_authenticated)
}
