//! Editing core for VDA 5050 LIF layouts.
//!
//! [`LayoutStore`] holds the editable state of every layout, the `convert`
//! and `geo` modules move it in and out of LIF and ROS GeoJSON documents, and
//! [`HistoryManager`] records snapshots for undo/redo.

pub mod config;
pub mod convert;
pub mod error;
pub mod geo;
pub mod history;
pub mod notify;
pub mod store;

pub use config::{DefaultLayoutSettings, EditorConfig, ExportSettings, HistorySettings};
pub use convert::{LayoutEntities, ToDomain, ToVisualization, geo_file_name, lif_file_name};
pub use error::{EditorError, ErrorKind, Result};
pub use geo::to_geo_export;
pub use history::{DEFAULT_HISTORY_CAPACITY, HistoryManager, HistoryState};
pub use notify::{
    Message, Notifier, Observer, RecordingNotifier, StoreEvent, TracingNotifier, Viewport,
};
pub use store::LayoutStore;
