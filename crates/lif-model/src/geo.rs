//! ROS route graph in GeoJSON form.
//!
//! Nodes become `Point` features, edges become `MultiLineString` features
//! referencing node ids.

use serde::{Deserialize, Serialize};

/// Coordinate reference system written into every export.
pub const GEO_CRS_NAME: &str = "urn:ogc:def:crs:EPSG::3857";
/// Name of the exported feature collection.
pub const GEO_COLLECTION_NAME: &str = "graph";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosGeoJson {
    pub crs: Crs,
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub features: Vec<Feature>,
}

impl RosGeoJson {
    /// An empty collection with the fixed CRS and name.
    pub fn new() -> Self {
        Self {
            crs: Crs::default(),
            kind: "FeatureCollection".to_string(),
            name: GEO_COLLECTION_NAME.to_string(),
            features: Vec::new(),
        }
    }

    pub fn node_features(&self) -> impl Iterator<Item = (&NodeProperties, &Geometry)> {
        self.features.iter().filter_map(|feature| match &feature.properties {
            FeatureProperties::Node(props) => Some((props, &feature.geometry)),
            FeatureProperties::Edge(_) => None,
        })
    }

    pub fn edge_features(&self) -> impl Iterator<Item = (&EdgeProperties, &Geometry)> {
        self.features.iter().filter_map(|feature| match &feature.properties {
            FeatureProperties::Edge(props) => Some((props, &feature.geometry)),
            FeatureProperties::Node(_) => None,
        })
    }
}

impl Default for RosGeoJson {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Crs {
    #[serde(rename = "type")]
    pub kind: String,
    pub properties: CrsProperties,
}

impl Default for Crs {
    fn default() -> Self {
        Self {
            kind: "name".to_string(),
            properties: CrsProperties {
                name: GEO_CRS_NAME.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrsProperties {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(rename = "type")]
    pub kind: String,
    pub properties: FeatureProperties,
    pub geometry: Geometry,
}

impl Feature {
    pub fn node(properties: NodeProperties, x: f64, y: f64) -> Self {
        Self {
            kind: "Feature".to_string(),
            properties: FeatureProperties::Node(properties),
            geometry: Geometry::Point {
                coordinates: [x, y],
            },
        }
    }

    pub fn edge(properties: EdgeProperties, start: [f64; 2], end: [f64; 2]) -> Self {
        Self {
            kind: "Feature".to_string(),
            properties: FeatureProperties::Edge(properties),
            geometry: Geometry::MultiLineString {
                coordinates: vec![vec![start, end]],
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeatureProperties {
    Edge(EdgeProperties),
    Node(NodeProperties),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeProperties {
    pub id: usize,
    /// Name of the layout the node belongs to.
    pub frame: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeProperties {
    pub id: usize,
    pub startid: usize,
    pub endid: usize,
    pub cost: f64,
    pub overridable: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Point { coordinates: [f64; 2] },
    MultiLineString { coordinates: Vec<Vec<[f64; 2]>> },
}
