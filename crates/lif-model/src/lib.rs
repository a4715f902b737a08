//! Data model for the LIF layout editor.
//!
//! - `layout`, `action`, `lif` - the VDA 5050 Layout Interchange Format
//! - `visualization` - editor wrappers (entities, edges, per-layout snapshots)
//! - `geo` - ROS route graph GeoJSON export shapes

pub mod action;
pub mod error;
pub mod geo;
pub mod layout;
pub mod lif;
pub mod visualization;

pub use action::{Action, ActionParameter, BlockingType, RequirementType};
pub use error::{ModelError, Result};
pub use geo::{
    Crs, CrsProperties, EdgeProperties, Feature, FeatureProperties, GEO_COLLECTION_NAME,
    GEO_CRS_NAME, Geometry, NodeProperties, RosGeoJson,
};
pub use layout::{
    BackgroundImage, ControlPoint, Edge, Layout, LoadRestriction, Node, NodePosition,
    OrientationType, RotationType, Station, StationPosition, Trajectory, VehicleTypeEdgeProperty,
    VehicleTypeNodeProperty, edge_id,
};
pub use lif::{LIF_VERSION, Lif, MetaInformation};
pub use visualization::{
    DisplayColor, EntityKind, GraphEntity, LayoutSnapshot, Position, VisualizationEdge,
    VisualizationNode,
};
