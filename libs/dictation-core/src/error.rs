//! Error types for dictation-core.

use thiserror::Error;

/// Result type alias using SettingsError.
pub type Result<T> = std::result::Result<T, SettingsError>;

/// Errors raised when judge settings are out of range.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SettingsError {
    #[error("similarity threshold must be within 0.0..=1.0, got {value}")]
    SimilarityThreshold { value: f64 },

    #[error("close threshold must be within 0..=100, got {value}")]
    CloseThreshold { value: u32 },
}

/// Errors reported by a speech engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpeechError {
    #[error("speech engine unavailable: {0}")]
    Unavailable(String),

    #[error("failed to start utterance: {0}")]
    Start(String),

    #[error("failed to stop utterance: {0}")]
    Stop(String),
}
