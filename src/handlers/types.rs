//! Handler actions, outcomes and user-facing messages

use std::fmt;

pub const LOGIN_SUCCESS_MESSAGE: &str = "Login successful!";
pub const REGISTER_SUCCESS_MESSAGE: &str = "Registered successfully";
pub const BACKEND_SESSION_ERROR_PREFIX: &str = "Backend session error: ";

/// The two user-triggerable actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Login,
    Register,
}

impl Action {
    /// Name the action is registered under with the host's dispatcher
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Action::Login => "loginUser",
            Action::Register => "registerUser",
        }
    }

    /// Resolve an action from its registered name or its short form
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "loginUser" | "login" => Some(Action::Login),
            "registerUser" | "register" => Some(Action::Register),
            _ => None,
        }
    }

    #[must_use]
    pub fn success_message(self) -> &'static str {
        match self {
            Action::Login => LOGIN_SUCCESS_MESSAGE,
            Action::Register => REGISTER_SUCCESS_MESSAGE,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What a handler showed the user and where it sent them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerOutcome {
    pub notification: String,
    pub navigated_to: Option<String>,
}

impl HandlerOutcome {
    #[must_use]
    pub fn established(notification: &str, path: &str) -> Self {
        Self {
            notification: notification.to_string(),
            navigated_to: Some(path.to_string()),
        }
    }

    #[must_use]
    pub fn failed(notification: String) -> Self {
        Self {
            notification,
            navigated_to: None,
        }
    }

    /// A session was established and the user was navigated away
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.navigated_to.is_some()
    }
}
