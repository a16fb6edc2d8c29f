use crate::api::{CommandError, LoginRequest};
use leptos::*;

#[derive(Clone, Copy)]
pub struct LoginFormState {
    pub username: RwSignal<String>,
    pub password: RwSignal<String>,
}

impl Default for LoginFormState {
    fn default() -> Self {
        Self {
            username: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
        }
    }
}

impl LoginFormState {
    pub fn set_username(&self, raw: &str) {
        self.username.set(normalize_input(raw));
    }

    pub fn set_password(&self, raw: &str) {
        self.password.set(normalize_input(raw));
    }

    pub fn to_request(&self) -> LoginRequest {
        LoginRequest {
            username: self.username.get_untracked(),
            password: self.password.get_untracked(),
        }
    }
}

/// Input values are stored trimmed, keystroke by keystroke.
pub fn normalize_input(raw: &str) -> String {
    raw.trim().to_string()
}

pub fn can_submit(username: &str, password: &str, loading: bool) -> bool {
    !username.is_empty() && !password.is_empty() && !loading
}

/// Text shown in the error banner: the server's error code when it sent one.
pub fn failure_message(error: &CommandError) -> String {
    error
        .code()
        .map(str::to_string)
        .unwrap_or_else(|| error.to_string())
}
