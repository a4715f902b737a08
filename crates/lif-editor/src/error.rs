//! Editor error types.
//!
//! Every failure is non-fatal and leaves the editor state untouched. Errors
//! carry a category (`ErrorKind`) plus user-facing title and message so the
//! host can show them without formatting anything itself.

use std::path::PathBuf;

use lif_model::ModelError;
use thiserror::Error;

/// Broad category of an editor error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required identifier or list was empty.
    Validation,
    /// The referenced node, edge, layout or action does not exist.
    NotFound,
    /// A document could not be parsed or serialized.
    Parse,
    /// The configuration file could not be read or written.
    Config,
}

#[derive(Debug, Error)]
pub enum EditorError {
    /// Domain object failed validation.
    #[error(transparent)]
    Invalid(#[from] ModelError),

    #[error("Node or station not found: {id}")]
    NodeNotFound { id: String },

    #[error("Edge not found: {id}")]
    EdgeNotFound { id: String },

    #[error("Layout not found: {id}")]
    LayoutNotFound { id: String },

    #[error("Action not found: {action_type}")]
    ActionNotFound { action_type: String },

    /// Import input is not a LIF document.
    #[error("Failed to parse LIF document")]
    Parse {
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize {what}")]
    Serialize {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to {operation} config file: {path}")]
    ConfigIo {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file: {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize config")]
    ConfigSerialize {
        #[source]
        source: toml::ser::Error,
    },
}

impl EditorError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Invalid(_) => ErrorKind::Validation,
            Self::NodeNotFound { .. }
            | Self::EdgeNotFound { .. }
            | Self::LayoutNotFound { .. }
            | Self::ActionNotFound { .. } => ErrorKind::NotFound,
            Self::Parse { .. } | Self::Serialize { .. } => ErrorKind::Parse,
            Self::ConfigIo { .. } | Self::ConfigParse { .. } | Self::ConfigSerialize { .. } => {
                ErrorKind::Config
            }
        }
    }

    /// Short title for a notification.
    pub fn title(&self) -> &'static str {
        match self.kind() {
            ErrorKind::Validation | ErrorKind::Parse | ErrorKind::Config => "Error",
            ErrorKind::NotFound => "Not found",
        }
    }

    /// Get a user-friendly message for this error.
    pub fn user_message(&self) -> String {
        match self {
            Self::Invalid(ModelError::EmptyInteractionNodes { .. }) => {
                "Interaction nodes cannot be empty".to_string()
            }
            Self::Invalid(error) => error.to_string(),
            Self::NodeNotFound { id } => {
                format!("Node '{id}' could not be deleted because it was not found")
            }
            Self::EdgeNotFound { id } => {
                format!("Edge '{id}' could not be deleted because it was not found")
            }
            Self::LayoutNotFound { id } => format!("Layout '{id}' does not exist"),
            Self::ActionNotFound { action_type } => {
                format!("Action '{action_type}' could not be deleted because it was not found")
            }
            Self::Parse { .. } => "The selected file is not a valid LIF document.".to_string(),
            Self::Serialize { what, .. } => format!("An error occurred while exporting the {what}."),
            Self::ConfigIo {
                operation, path, ..
            } => format!("Could not {} the config file at {}", operation, path.display()),
            Self::ConfigParse { path, .. } => {
                format!("The config file at {} is not valid TOML", path.display())
            }
            Self::ConfigSerialize { .. } => {
                "An error occurred while saving the configuration.".to_string()
            }
        }
    }

    /// Get a suggestion for how to resolve this error.
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::Invalid(ModelError::EmptyInteractionNodes { .. }) => {
                Some("Select at least one node the station interacts with.".into())
            }
            Self::Invalid(_) => Some("Enter an identifier before saving.".into()),
            Self::Parse { .. } => {
                Some("Make sure you selected a LIF JSON file exported by a LIF editor.".into())
            }
            Self::ConfigParse { .. } => {
                Some("Fix the file or delete it to restore the default settings.".into())
            }
            _ => None,
        }
    }
}

/// Result type alias for editor operations.
pub type Result<T> = std::result::Result<T, EditorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_follow_variants() {
        assert_eq!(
            EditorError::from(ModelError::EmptyNodeId).kind(),
            ErrorKind::Validation
        );
        assert_eq!(
            EditorError::EdgeNotFound { id: "A_B".into() }.kind(),
            ErrorKind::NotFound
        );
    }

    #[test]
    fn station_message_matches_notification_text() {
        let error = EditorError::from(ModelError::EmptyInteractionNodes {
            station_id: "S1".into(),
        });
        assert_eq!(error.title(), "Error");
        assert_eq!(error.user_message(), "Interaction nodes cannot be empty");
        assert!(error.suggestion().is_some());
    }
}
