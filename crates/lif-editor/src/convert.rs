//! Conversion between LIF documents and the editor's visualization state.
//!
//! Import turns every layout into a [`LayoutSnapshot`]; export projects the
//! live state and the snapshots back into a fresh [`Lif`] document. Both
//! directions go through the [`ToVisualization`] and [`ToDomain`] traits.

use std::collections::BTreeMap;

use lif_model::{
    Edge, GraphEntity, Layout, LayoutSnapshot, Lif, MetaInformation, Node, Position, Station,
    VisualizationEdge, VisualizationNode,
};
use tracing::{info, instrument, warn};

use crate::error::{EditorError, Result};
use crate::notify::StoreEvent;
use crate::store::LayoutStore;

/// Trait for domain types that can be turned into editor state.
pub trait ToVisualization {
    /// The editor-side type.
    type Visualization;

    fn to_visualization(&self) -> Self::Visualization;
}

/// Trait for editor types that can be projected back into the domain.
pub trait ToDomain {
    /// The domain-side type.
    type Domain;

    fn to_domain(&self) -> Self::Domain;
}

impl ToVisualization for Node {
    type Visualization = (VisualizationNode, Position);

    fn to_visualization(&self) -> Self::Visualization {
        let position = Position::from_domain(self.node_position.x, self.node_position.y);
        (
            VisualizationNode::new(GraphEntity::Node(self.clone()), false),
            position,
        )
    }
}

impl ToVisualization for Station {
    type Visualization = (VisualizationNode, Position);

    fn to_visualization(&self) -> Self::Visualization {
        let position = Position::from_domain(self.station_position.x, self.station_position.y);
        (
            VisualizationNode::new(GraphEntity::Station(self.clone()), false),
            position,
        )
    }
}

impl ToVisualization for Edge {
    type Visualization = VisualizationEdge;

    fn to_visualization(&self) -> Self::Visualization {
        VisualizationEdge::new(self.clone())
    }
}

impl ToVisualization for Layout {
    type Visualization = LayoutSnapshot;

    fn to_visualization(&self) -> Self::Visualization {
        let mut snapshot = LayoutSnapshot {
            background_image: self.background_image.clone().unwrap_or_default(),
            ..LayoutSnapshot::default()
        };
        let entities = self
            .nodes
            .iter()
            .map(ToVisualization::to_visualization)
            .chain(self.stations.iter().map(ToVisualization::to_visualization));
        for (node, position) in entities {
            let id = node.id().to_string();
            snapshot.positions.insert(id.clone(), position);
            if let Some(replaced) = snapshot.nodes.insert(id, node) {
                warn!(
                    layout_id = %self.layout_id,
                    id = %replaced.id(),
                    kind = %replaced.kind(),
                    "duplicate entity id, earlier entry replaced"
                );
            }
        }
        for edge in &self.edges {
            snapshot
                .edges
                .insert(edge.edge_id.clone(), edge.to_visualization());
        }
        snapshot
    }
}

/// Domain arrays projected from a snapshot.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LayoutEntities {
    pub nodes: Vec<Node>,
    pub stations: Vec<Station>,
    pub edges: Vec<Edge>,
}

impl ToDomain for LayoutSnapshot {
    type Domain = LayoutEntities;

    /// Project entities in map order. Positions are not reconciled here.
    fn to_domain(&self) -> Self::Domain {
        let mut entities = LayoutEntities::default();
        for node in self.nodes.values() {
            match &node.entity {
                GraphEntity::Node(n) => entities.nodes.push(n.clone()),
                GraphEntity::Station(s) => entities.stations.push(s.clone()),
            }
        }
        entities.edges = self.edges.values().map(|e| e.edge.clone()).collect();
        entities
    }
}

/// File name used when saving a LIF export.
pub fn lif_file_name(meta: &MetaInformation) -> String {
    format!("lif_file_{}.json", meta.project_identification)
}

/// File name used when saving a ROS route graph export.
pub fn geo_file_name(meta: &MetaInformation) -> String {
    format!("ros_geograph_file_{}.json", meta.project_identification)
}

impl LayoutStore {
    /// Build a complete LIF document from the editor state.
    ///
    /// Live positions are written back into their domain objects first. The
    /// returned document shares nothing with the store.
    #[instrument(skip(self))]
    pub fn to_document(&mut self, include_background: bool) -> Lif {
        self.live.sync_positions();
        let active = self.active_layout_id.as_deref();

        let layouts = self
            .layouts
            .iter()
            .map(|layout| {
                let mut out = layout.clone();
                let source = if active == Some(layout.layout_id.as_str()) {
                    Some(&self.live)
                } else {
                    self.snapshots.get(&layout.layout_id)
                };
                if let Some(snapshot) = source {
                    let entities = snapshot.to_domain();
                    out.nodes = entities.nodes;
                    out.stations = entities.stations;
                    out.edges = entities.edges;
                    if snapshot.background_image.has_image() {
                        out.background_image = Some(snapshot.background_image.clone());
                    }
                }
                if !include_background {
                    out.background_image = None;
                }
                out
            })
            .collect();

        Lif {
            meta_information: self.meta_information.clone(),
            layouts,
        }
    }

    /// Replace the whole editor state with a document and activate its first layout.
    #[instrument(skip_all, fields(layouts = lif.layouts.len()))]
    pub fn from_document(&mut self, lif: Lif) {
        let snapshots: BTreeMap<String, LayoutSnapshot> = lif
            .layouts
            .iter()
            .map(|layout| (layout.layout_id.clone(), layout.to_visualization()))
            .collect();
        let first = lif.layouts.first().map(|l| l.layout_id.clone());
        let layout_count = lif.layouts.len();

        self.meta_information = lif.meta_information;
        self.layouts = lif.layouts;
        self.snapshots = snapshots;
        self.active_layout_id = None;
        self.live.clear();

        info!(
            project = %self.meta_information.project_identification,
            layouts = layout_count,
            "document loaded"
        );
        if let Some(first) = first {
            self.switch_layout(&first);
        }
        self.emit(StoreEvent::DocumentLoaded {
            layouts: layout_count,
        });
    }

    /// Parse a LIF JSON document and load it.
    ///
    /// A parse failure leaves the store untouched. It is logged but not
    /// shown to the user; the caller decides whether to surface it.
    #[instrument(skip_all, fields(bytes = data.len()))]
    pub fn load_json(&mut self, data: &str) -> Result<()> {
        let lif: Lif = serde_json::from_str(data).map_err(|source| {
            warn!(error = %source, "ignoring invalid LIF document");
            EditorError::Parse { source }
        })?;
        self.from_document(lif);
        Ok(())
    }

    /// Pretty-printed LIF export, optionally stamping the export time.
    pub fn to_lif_json(&mut self, include_background: bool) -> Result<String> {
        if self.config.export.touch_timestamp {
            self.meta_information.touch();
        }
        let lif = self.to_document(include_background);
        serde_json::to_string_pretty(&lif).map_err(|source| {
            self.report(EditorError::Serialize {
                what: "LIF document",
                source,
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lif_model::{
        BackgroundImage, DisplayColor, EntityKind, StationPosition, VehicleTypeNodeProperty,
    };

    fn layout() -> Layout {
        let mut layout = Layout::new("L1", "Ground");
        let mut node = Node::new("N1", 1.0, 2.0);
        node.vehicle_type_node_properties.push(VehicleTypeNodeProperty {
            vehicle_type_id: "forklift".into(),
            theta: None,
            actions: Vec::new(),
        });
        layout.nodes.push(node);
        layout.stations.push(Station::new(
            "S1",
            vec!["N1".into()],
            StationPosition {
                x: 3.0,
                y: 4.0,
                theta: 0.5,
            },
        ));
        layout.edges.push(Edge::between("N1", "S1"));
        layout
    }

    #[test]
    fn layout_to_visualization_flips_y() {
        let snapshot = layout().to_visualization();
        assert_eq!(snapshot.positions["N1"], Position::new(1.0, -2.0));
        assert_eq!(snapshot.positions["S1"], Position::new(3.0, -4.0));
        assert_eq!(snapshot.nodes["N1"].color, DisplayColor::CompleteNode);
        assert_eq!(snapshot.nodes["S1"].color, DisplayColor::CompleteStation);
        assert_eq!(snapshot.edges["N1_S1"].color, DisplayColor::IncompleteEdge);
        assert!(snapshot.nodes.values().all(|n| !n.draggable));
        assert!(snapshot.positions_match_nodes());
    }

    #[test]
    fn station_sharing_node_id_replaces_node() {
        let mut layout = layout();
        layout.stations.push(Station::new(
            "N1",
            vec!["S1".into()],
            StationPosition {
                x: 9.0,
                y: 9.0,
                theta: 0.0,
            },
        ));
        let snapshot = layout.to_visualization();
        assert_eq!(snapshot.nodes.len(), 2);
        assert_eq!(snapshot.nodes["N1"].kind(), EntityKind::Station);
        assert_eq!(snapshot.positions["N1"], Position::new(9.0, -9.0));
        assert!(snapshot.positions_match_nodes());
    }

    #[test]
    fn snapshot_to_domain_splits_entities() {
        let entities = layout().to_visualization().to_domain();
        assert_eq!(entities.nodes.len(), 1);
        assert_eq!(entities.stations.len(), 1);
        assert_eq!(entities.edges.len(), 1);
        assert_eq!(entities.stations[0].station_position.theta, 0.5);
    }

    #[test]
    fn missing_background_becomes_placeholder() {
        let snapshot = layout().to_visualization();
        assert_eq!(snapshot.background_image, BackgroundImage::default());
    }

    #[test]
    fn file_names_use_project_identification() {
        let meta = MetaInformation {
            project_identification: "hall7".into(),
            ..MetaInformation::default()
        };
        assert_eq!(lif_file_name(&meta), "lif_file_hall7.json");
        assert_eq!(geo_file_name(&meta), "ros_geograph_file_hall7.json");
    }
}
