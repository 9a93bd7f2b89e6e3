//! Error types for descriptor composition and settings loading.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T, E = ComposeError> = std::result::Result<T, E>;

/// Failures raised while composing a build descriptor.
///
/// Every variant is raised synchronously at the point the bad input is seen.
/// Composition is pure, so none of them are worth retrying.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ComposeError {
    /// The invariant part of the configuration is malformed.
    #[error("invalid base configuration for '{field}': {reason}")]
    InvalidBaseConfig { field: String, reason: String },

    /// An overlay producer was handed options it cannot turn into a fragment.
    #[error("invalid options for overlay '{producer}': {reason}")]
    InvalidOverlayOptions {
        producer: &'static str,
        reason: String,
    },
}

impl ComposeError {
    pub(crate) fn base(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidBaseConfig {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn overlay(producer: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidOverlayOptions {
            producer,
            reason: reason.into(),
        }
    }
}

/// Failures raised while locating or reading project settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("unsupported settings format: {0}")]
    UnsupportedFormat(String),

    #[error("invalid settings value for '{field}'{}", .hint.as_ref().map(|h| format!(": {h}")).unwrap_or_default())]
    InvalidValue { field: String, hint: Option<String> },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_error_names_the_field() {
        let err = ComposeError::base("entry", "at least one entry bundle is required");
        let msg = err.to_string();
        assert!(msg.contains("'entry'"));
        assert!(msg.contains("at least one entry bundle"));
    }

    #[test]
    fn overlay_error_names_the_producer() {
        let err = ComposeError::overlay("dev_server", "port must be a positive integer");
        assert_eq!(
            err.to_string(),
            "invalid options for overlay 'dev_server': port must be a positive integer"
        );
    }

    #[test]
    fn invalid_value_renders_optional_hint() {
        let with_hint = SettingsError::InvalidValue {
            field: "dev_server_port".to_string(),
            hint: Some("expected an integer".to_string()),
        };
        assert_eq!(
            with_hint.to_string(),
            "invalid settings value for 'dev_server_port': expected an integer"
        );

        let bare = SettingsError::InvalidValue {
            field: "entry".to_string(),
            hint: None,
        };
        assert_eq!(bare.to_string(), "invalid settings value for 'entry'");
    }
}
