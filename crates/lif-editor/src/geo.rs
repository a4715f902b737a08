//! ROS route graph export.

use std::collections::HashMap;

use lif_model::{EdgeProperties, Feature, Lif, NodeProperties, RosGeoJson};
use tracing::{debug, instrument, warn};

use crate::error::{EditorError, Result};
use crate::store::LayoutStore;

/// Build the route graph of one layout of `lif`.
///
/// The layout with `active_layout_id` is exported, or the first layout when
/// there is no match. Nodes are numbered from zero in array order and edges
/// continue the sequence. Edges whose endpoints are not nodes of the layout
/// are skipped.
#[instrument(skip(lif))]
pub fn to_geo_export(lif: &Lif, active_layout_id: Option<&str>) -> RosGeoJson {
    let mut geo = RosGeoJson::new();
    let layout = active_layout_id
        .and_then(|id| lif.layout(id))
        .or_else(|| lif.layouts.first());
    let Some(layout) = layout else {
        return geo;
    };

    let mut index: HashMap<&str, (usize, [f64; 2])> = HashMap::new();
    for (id, node) in layout.nodes.iter().enumerate() {
        let coordinates = [node.node_position.x, node.node_position.y];
        index.insert(&node.node_id, (id, coordinates));
        geo.features.push(Feature::node(
            NodeProperties {
                id,
                frame: layout.layout_name.clone(),
            },
            coordinates[0],
            coordinates[1],
        ));
    }

    let mut next_id = layout.nodes.len();
    for edge in &layout.edges {
        let endpoints = (
            index.get(edge.start_node_id.as_str()),
            index.get(edge.end_node_id.as_str()),
        );
        let (Some(&(startid, start)), Some(&(endid, end))) = endpoints else {
            warn!(
                edge_id = %edge.edge_id,
                start = %edge.start_node_id,
                end = %edge.end_node_id,
                "skipping edge with unknown endpoint"
            );
            continue;
        };
        geo.features.push(Feature::edge(
            EdgeProperties {
                id: next_id,
                startid,
                endid,
                cost: 0.0,
                overridable: true,
            },
            start,
            end,
        ));
        next_id += 1;
    }

    debug!(
        layout_id = %layout.layout_id,
        features = geo.features.len(),
        "built route graph"
    );
    geo
}

impl LayoutStore {
    /// Route graph of the active layout.
    pub fn to_geo_export(&mut self) -> RosGeoJson {
        let lif = self.to_document(false);
        to_geo_export(&lif, self.active_layout_id.as_deref())
    }

    /// Pretty-printed route graph of the active layout.
    pub fn to_geo_json(&mut self) -> Result<String> {
        let geo = self.to_geo_export();
        serde_json::to_string_pretty(&geo).map_err(|source| {
            self.report(EditorError::Serialize {
                what: "route graph",
                source,
            })
        })
    }
}
