//! Core error types for syncd-core.
//!
//! Rule functions themselves are total; errors come from configuration
//! handling and from action preconditions (logging twice in one day,
//! joining the Current while already in it, and so on).

use std::path::PathBuf;
use thiserror::Error;
use uuid::Uuid;

/// Core error type for syncd-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Action precondition and input validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Action precondition and input validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// The habit was already logged on the current calendar day
    #[error("'{habit}' is already logged for today")]
    AlreadyLoggedToday { habit: String },

    /// Daily win text is below the minimum length gate
    #[error("Daily win too short: {len} characters (minimum {min})")]
    WinTooShort { len: usize, min: usize },

    /// No habit with the given id in the viewer's collection
    #[error("Unknown habit: {0}")]
    UnknownHabit(Uuid),

    /// No friend with the given id
    #[error("Unknown friend: {0}")]
    UnknownFriend(Uuid),

    /// Attempted to join the Current while a session is already active
    #[error("A focus session is already active")]
    SessionAlreadyActive,

    /// Attempted to leave the Current while idle
    #[error("No focus session is active")]
    NoActiveSession,

    /// Action requires the Sync Matrix to be unlocked
    #[error("Sync Matrix is locked: {prompt}")]
    MatrixLocked { prompt: String },

    /// Jolts are only for friends with incomplete habits
    #[error("{name} has nothing left to complete today")]
    NothingToJolt { name: String },

    /// Invalid field value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
