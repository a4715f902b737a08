//! Editor-side wrappers around domain objects.
//!
//! The editor keeps every layout as id-keyed maps of visualization entities
//! and edges. Rendering positions use a y axis pointing down, the LIF format
//! uses y pointing up; [`Position::from_domain`] and [`Position::to_domain`]
//! convert between the two.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::layout::{BackgroundImage, Edge, Node, Station};

/// Rendering position of an entity (y axis pointing down).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Rendering position of a domain coordinate.
    pub fn from_domain(x: f64, y: f64) -> Self {
        Self { x, y: -y }
    }

    /// Domain coordinate `(x, y)` of this rendering position.
    pub fn to_domain(self) -> (f64, f64) {
        (self.x, -self.y)
    }

    /// Round both axes to millimeter precision.
    pub fn rounded(self) -> Self {
        Self {
            x: round_millis(self.x),
            y: round_millis(self.y),
        }
    }
}

fn round_millis(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Display color category, derived from completeness only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayColor {
    CompleteNode,
    IncompleteNode,
    CompleteStation,
    IncompleteStation,
    CompleteEdge,
    IncompleteEdge,
}

impl DisplayColor {
    pub fn for_node(node: &Node) -> Self {
        if node.is_complete() {
            DisplayColor::CompleteNode
        } else {
            DisplayColor::IncompleteNode
        }
    }

    pub fn for_station(station: &Station) -> Self {
        if station.is_complete() {
            DisplayColor::CompleteStation
        } else {
            DisplayColor::IncompleteStation
        }
    }

    pub fn for_edge(edge: &Edge) -> Self {
        if edge.is_complete() {
            DisplayColor::CompleteEdge
        } else {
            DisplayColor::IncompleteEdge
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(
            self,
            DisplayColor::CompleteNode | DisplayColor::CompleteStation | DisplayColor::CompleteEdge
        )
    }
}

/// Which kind of domain object a visualization entity wraps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    #[serde(rename = "vda5050Node")]
    Node,
    #[serde(rename = "vda5050Station")]
    Station,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Node => "vda5050Node",
            EntityKind::Station => "vda5050Station",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The domain object wrapped by a visualization entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum GraphEntity {
    #[serde(rename = "vda5050Node")]
    Node(Node),
    #[serde(rename = "vda5050Station")]
    Station(Station),
}

impl GraphEntity {
    pub fn kind(&self) -> EntityKind {
        match self {
            GraphEntity::Node(_) => EntityKind::Node,
            GraphEntity::Station(_) => EntityKind::Station,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            GraphEntity::Node(node) => &node.node_id,
            GraphEntity::Station(station) => &station.station_id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            GraphEntity::Node(node) => &node.node_name,
            GraphEntity::Station(station) => &station.station_name,
        }
    }

    pub fn color(&self) -> DisplayColor {
        match self {
            GraphEntity::Node(node) => DisplayColor::for_node(node),
            GraphEntity::Station(station) => DisplayColor::for_station(station),
        }
    }

    /// Domain `(x, y)` of the wrapped object.
    pub fn domain_xy(&self) -> (f64, f64) {
        match self {
            GraphEntity::Node(node) => (node.node_position.x, node.node_position.y),
            GraphEntity::Station(station) => {
                (station.station_position.x, station.station_position.y)
            }
        }
    }

    /// Overwrite the domain position from a rendering position.
    ///
    /// Station orientation is left untouched.
    pub fn sync_position(&mut self, position: Position) {
        let (x, y) = position.to_domain();
        match self {
            GraphEntity::Node(node) => {
                node.node_position.x = x;
                node.node_position.y = y;
            }
            GraphEntity::Station(station) => {
                station.station_position.x = x;
                station.station_position.y = y;
            }
        }
    }

    pub fn as_node(&self) -> Option<&Node> {
        match self {
            GraphEntity::Node(node) => Some(node),
            GraphEntity::Station(_) => None,
        }
    }

    pub fn as_station(&self) -> Option<&Station> {
        match self {
            GraphEntity::Station(station) => Some(station),
            GraphEntity::Node(_) => None,
        }
    }
}

/// A node or station as held by the editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualizationNode {
    pub name: String,
    pub draggable: bool,
    pub color: DisplayColor,
    pub entity: GraphEntity,
}

impl VisualizationNode {
    pub fn new(entity: GraphEntity, draggable: bool) -> Self {
        Self {
            name: entity.name().to_string(),
            draggable,
            color: entity.color(),
            entity,
        }
    }

    pub fn kind(&self) -> EntityKind {
        self.entity.kind()
    }

    pub fn id(&self) -> &str {
        self.entity.id()
    }
}

/// An edge as held by the editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualizationEdge {
    pub source: String,
    pub target: String,
    pub color: DisplayColor,
    pub edge: Edge,
}

impl VisualizationEdge {
    pub fn new(edge: Edge) -> Self {
        Self {
            source: edge.start_node_id.clone(),
            target: edge.end_node_id.clone(),
            color: DisplayColor::for_edge(&edge),
            edge,
        }
    }

    pub fn touches(&self, id: &str) -> bool {
        self.source == id || self.target == id
    }
}

/// Frozen or live editor state of one layout.
///
/// `nodes` and `positions` always share the same key set.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LayoutSnapshot {
    pub nodes: BTreeMap<String, VisualizationNode>,
    pub edges: BTreeMap<String, VisualizationEdge>,
    pub positions: BTreeMap<String, Position>,
    pub background_image: BackgroundImage,
}

impl LayoutSnapshot {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty() && self.positions.is_empty()
    }

    /// Empty all maps and reset the background to the placeholder.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
        self.positions.clear();
        self.background_image = BackgroundImage::default();
    }

    /// Write every rendering position back into its wrapped domain object.
    pub fn sync_positions(&mut self) {
        for (id, node) in self.nodes.iter_mut() {
            if let Some(position) = self.positions.get(id) {
                node.entity.sync_position(*position);
            }
        }
    }

    /// Remove every edge starting or ending at `id`, returning how many were removed.
    pub fn remove_edges_touching(&mut self, id: &str) -> usize {
        let before = self.edges.len();
        self.edges.retain(|_, edge| !edge.touches(id));
        before - self.edges.len()
    }

    /// True when every edge endpoint refers to an entity in this snapshot.
    pub fn edges_are_connected(&self) -> bool {
        self.edges.values().all(|edge| {
            self.nodes.contains_key(&edge.source) && self.nodes.contains_key(&edge.target)
        })
    }

    /// True when the entity and position maps share the same keys.
    pub fn positions_match_nodes(&self) -> bool {
        self.nodes.len() == self.positions.len()
            && self.nodes.keys().all(|id| self.positions.contains_key(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::StationPosition;

    #[test]
    fn domain_conversion_flips_y() {
        let position = Position::from_domain(1.5, 2.0);
        assert_eq!(position, Position::new(1.5, -2.0));
        assert_eq!(position.to_domain(), (1.5, 2.0));
    }

    #[test]
    fn rounding_keeps_three_decimals() {
        let position = Position::new(1.23456, -7.0004).rounded();
        assert_eq!(position, Position::new(1.235, -7.0));
    }

    #[test]
    fn sync_position_keeps_station_theta() {
        let mut entity = GraphEntity::Station(Station::new(
            "S1",
            vec!["N1".to_string()],
            StationPosition {
                x: 0.0,
                y: 0.0,
                theta: 1.25,
            },
        ));
        entity.sync_position(Position::new(3.0, -4.0));
        let station = entity.as_station().expect("station");
        assert_eq!(station.station_position.x, 3.0);
        assert_eq!(station.station_position.y, 4.0);
        assert_eq!(station.station_position.theta, 1.25);
    }

    #[test]
    fn entity_kind_follows_variant() {
        let node = VisualizationNode::new(GraphEntity::Node(Node::new("N1", 0.0, 0.0)), false);
        assert_eq!(node.kind(), EntityKind::Node);
        assert_eq!(node.color, DisplayColor::IncompleteNode);
        assert_eq!(node.kind().to_string(), "vda5050Node");
    }

    #[test]
    fn remove_edges_touching_counts_removed() {
        let mut snapshot = LayoutSnapshot::default();
        for (a, b) in [("A", "B"), ("B", "A"), ("B", "C")] {
            let edge = VisualizationEdge::new(Edge::between(a, b));
            snapshot.edges.insert(edge.edge.edge_id.clone(), edge);
        }
        assert_eq!(snapshot.remove_edges_touching("A"), 2);
        assert_eq!(snapshot.edges.keys().collect::<Vec<_>>(), vec!["B_C"]);
    }
}
