use std::path::PathBuf;

use crate::state::StateKey;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Authentication failed: bridge rejected the stored credential. Delete the credentials file and re-run to pair again.")]
    AuthenticationFailed,

    #[error("No color '{0}'")]
    ColorNotFound(String),

    #[error("Invalid state '{0}'. Only these states are allowed: {allowed}", allowed = StateKey::ALL.join(", "))]
    InvalidStateKey(String),

    #[error("No maximum defined for state '{0}'; only bri, sat and hue accept percentages")]
    NoMaximumDefined(StateKey),

    #[error("Could not load profile {}", .0.display())]
    ProfileNotFound(PathBuf),

    #[error("Invalid command {0}")]
    InvalidCommand(String),

    #[error("{0}")]
    InvalidInput(String),

    #[error("Bridge error {error_type}: {description}")]
    Bridge {
        error_type: i32,
        description: String,
    },

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl AppError {
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::AuthenticationFailed => 2,
            AppError::ProfileNotFound(_) => 3,
            _ => 1,
        }
    }
}
