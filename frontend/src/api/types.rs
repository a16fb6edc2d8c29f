use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Envelope posted to the command endpoint: `{ "cmd": <name>, "data": <payload> }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "cmd", content = "data")]
pub enum Command {
    Login(LoginRequest),
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Login(_) => "Login",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CommandFailure {
    #[serde(default)]
    pub code: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum CommandEnvelope {
    Success { data: Value },
    Failure { error: CommandFailure },
}

/// Opaque result of a successful login. Passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Session(Value);

impl Session {
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }
}

impl From<Value> for Session {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CommandError {
    #[error("{code}")]
    Rejected { code: String },
    /// The server answered with a body that carries no structured error code.
    #[error("{0}")]
    Failed(Value),
    #[error("Unexpected response status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Request failed: {0}")]
    Request(String),
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl CommandError {
    /// Structured error code reported by the command endpoint, if any.
    pub fn code(&self) -> Option<&str> {
        match self {
            CommandError::Rejected { code } => Some(code),
            _ => None,
        }
    }
}

/// Splits a decoded response body into the command's data or its failure.
pub(crate) fn interpret_body(body: Value) -> Result<Value, CommandError> {
    match serde_json::from_value::<CommandEnvelope>(body.clone()) {
        Ok(CommandEnvelope::Success { data }) => Ok(data),
        Ok(CommandEnvelope::Failure {
            error: CommandFailure { code: Some(code) },
        }) if !code.is_empty() => Err(CommandError::Rejected { code }),
        _ => Err(CommandError::Failed(body)),
    }
}
