use thiserror::Error;

/// Structural problems detected on domain objects before they enter the editor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("Node ID cannot be empty")]
    EmptyNodeId,
    #[error("Station ID cannot be empty")]
    EmptyStationId,
    #[error("Interaction nodes of station {station_id} cannot be empty")]
    EmptyInteractionNodes { station_id: String },
    #[error("Action type cannot be empty")]
    EmptyActionType,
}

pub type Result<T> = std::result::Result<T, ModelError>;
