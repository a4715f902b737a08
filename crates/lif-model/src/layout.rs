//! Layout types as they appear in a LIF document.
//!
//! Field names follow the LIF JSON schema (`camelCase`). Optional LIF fields
//! are `Option` and skipped on output so that an imported document
//! serializes back unchanged.

use serde::{Deserialize, Serialize};

use crate::action::Action;
use crate::error::{ModelError, Result};

/// Build the identifier of the directed edge `start -> end`.
pub fn edge_id(start_node_id: &str, end_node_id: &str) -> String {
    format!("{start_node_id}_{end_node_id}")
}

/// One layout (map level) of a LIF document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    pub layout_id: String,
    #[serde(default)]
    pub layout_name: String,
    #[serde(default)]
    pub layout_version: String,
    #[serde(default)]
    pub layout_level_id: String,
    #[serde(default)]
    pub layout_description: String,
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub edges: Vec<Edge>,
    #[serde(default)]
    pub stations: Vec<Station>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_image: Option<BackgroundImage>,
}

impl Layout {
    /// Create an empty layout.
    pub fn new(layout_id: impl Into<String>, layout_name: impl Into<String>) -> Self {
        Self {
            layout_id: layout_id.into(),
            layout_name: layout_name.into(),
            layout_version: "1.0.0".to_string(),
            layout_level_id: "1".to_string(),
            layout_description: String::new(),
            nodes: Vec::new(),
            edges: Vec::new(),
            stations: Vec::new(),
            background_image: None,
        }
    }

    /// Copy the descriptive fields of `other` without touching the entity arrays.
    pub fn apply_metadata(&mut self, other: &Layout) {
        self.layout_name = other.layout_name.clone();
        self.layout_version = other.layout_version.clone();
        self.layout_level_id = other.layout_level_id.clone();
        self.layout_description = other.layout_description.clone();
        self.background_image = other.background_image.clone();
    }

    /// A copy carrying only the descriptive fields.
    pub fn metadata_only(&self) -> Layout {
        let mut layout = Layout::new(self.layout_id.clone(), String::new());
        layout.apply_metadata(self);
        layout
    }
}

/// Position of a node in meters, y axis pointing up.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NodePosition {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleTypeNodeProperty {
    pub vehicle_type_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theta: Option<f64>,
    #[serde(default)]
    pub actions: Vec<Action>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub node_id: String,
    #[serde(default)]
    pub node_name: String,
    #[serde(default)]
    pub node_description: String,
    #[serde(default)]
    pub map_id: String,
    pub node_position: NodePosition,
    #[serde(default)]
    pub vehicle_type_node_properties: Vec<VehicleTypeNodeProperty>,
}

impl Node {
    pub fn new(node_id: impl Into<String>, x: f64, y: f64) -> Self {
        let node_id = node_id.into();
        Self {
            node_name: node_id.clone(),
            node_id,
            node_description: String::new(),
            map_id: String::new(),
            node_position: NodePosition { x, y },
            vehicle_type_node_properties: Vec::new(),
        }
    }

    /// A node is complete once it carries at least one vehicle type property.
    pub fn is_complete(&self) -> bool {
        !self.vehicle_type_node_properties.is_empty()
    }

    pub fn validate(&self) -> Result<()> {
        if self.node_id.is_empty() {
            return Err(ModelError::EmptyNodeId);
        }
        Ok(())
    }
}

/// Position and orientation of a station, y axis pointing up.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StationPosition {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub theta: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Station {
    pub station_id: String,
    #[serde(default)]
    pub interaction_node_ids: Vec<String>,
    #[serde(default)]
    pub station_name: String,
    #[serde(default)]
    pub station_description: String,
    #[serde(default)]
    pub station_height: f64,
    pub station_position: StationPosition,
}

impl Station {
    pub fn new(
        station_id: impl Into<String>,
        interaction_node_ids: Vec<String>,
        position: StationPosition,
    ) -> Self {
        let station_id = station_id.into();
        Self {
            station_name: station_id.clone(),
            station_id,
            interaction_node_ids,
            station_description: String::new(),
            station_height: 0.0,
            station_position: position,
        }
    }

    /// A station is complete once it references at least one interaction node.
    pub fn is_complete(&self) -> bool {
        !self.interaction_node_ids.is_empty()
    }

    pub fn validate(&self) -> Result<()> {
        if self.station_id.is_empty() {
            return Err(ModelError::EmptyStationId);
        }
        if self.interaction_node_ids.is_empty() {
            return Err(ModelError::EmptyInteractionNodes {
                station_id: self.station_id.clone(),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrientationType {
    Global,
    Tangential,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RotationType {
    None,
    Ccw,
    Cw,
    Both,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadRestriction {
    pub unloaded: bool,
    pub loaded: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub load_set_names: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlPoint {
    pub x: f64,
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

/// NURBS trajectory of an edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trajectory {
    pub degree: f64,
    #[serde(default)]
    pub knot_vector: Vec<f64>,
    #[serde(default)]
    pub control_points: Vec<ControlPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleTypeEdgeProperty {
    pub vehicle_type_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_orientation: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orientation_type: Option<OrientationType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation_allowed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation_at_start_node_allowed: Option<RotationType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation_at_end_node_allowed: Option<RotationType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_speed: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_rotation_speed: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub load_restriction: Option<LoadRestriction>,
    #[serde(default)]
    pub actions: Vec<Action>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trajectory: Option<Trajectory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reentry_allowed: Option<bool>,
}

/// Directed connection between two nodes or stations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    pub edge_id: String,
    #[serde(default)]
    pub edge_name: String,
    #[serde(default)]
    pub edge_description: String,
    pub start_node_id: String,
    pub end_node_id: String,
    #[serde(default, alias = "vehicleTypeEdge")]
    pub vehicle_type_edge_properties: Vec<VehicleTypeEdgeProperty>,
}

impl Edge {
    /// A bare edge from `start` to `end` with the derived identifier.
    pub fn between(start_node_id: &str, end_node_id: &str) -> Self {
        let id = edge_id(start_node_id, end_node_id);
        Self {
            edge_name: id.clone(),
            edge_id: id,
            edge_description: String::new(),
            start_node_id: start_node_id.to_string(),
            end_node_id: end_node_id.to_string(),
            vehicle_type_edge_properties: Vec::new(),
        }
    }

    /// An edge is complete once it carries at least one vehicle type entry.
    pub fn is_complete(&self) -> bool {
        !self.vehicle_type_edge_properties.is_empty()
    }
}

/// Background image drawn beneath a layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackgroundImage {
    /// Image payload, usually a data URL.
    #[serde(default)]
    pub image: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub natural_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub natural_height: Option<f64>,
}

impl Default for BackgroundImage {
    /// The empty placeholder shown when a layout has no image.
    fn default() -> Self {
        Self {
            image: String::new(),
            x: 0.0,
            y: 0.0,
            width: 10.0,
            height: 10.0,
            natural_width: None,
            natural_height: None,
        }
    }
}

impl BackgroundImage {
    pub fn has_image(&self) -> bool {
        !self.image.is_empty()
    }
}
