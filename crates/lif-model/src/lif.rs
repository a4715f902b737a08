//! Root LIF document type.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::layout::Layout;

/// Current LIF format version written by the editor.
pub const LIF_VERSION: &str = "1.0.0";

/// Top-level LIF document: meta information plus ordered layouts.
///
/// This is the unit of import and export.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lif {
    #[serde(default)]
    pub meta_information: MetaInformation,
    #[serde(default)]
    pub layouts: Vec<Layout>,
}

impl Lif {
    pub fn layout(&self, layout_id: &str) -> Option<&Layout> {
        self.layouts.iter().find(|layout| layout.layout_id == layout_id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaInformation {
    /// Human-readable name of the project.
    #[serde(default)]
    pub project_identification: String,

    /// Creator of the file (company or person).
    #[serde(default)]
    pub creator: String,

    /// ISO-8601 UTC timestamp of the last export.
    #[serde(default)]
    pub export_timestamp: String,

    /// Semantic version of the LIF format.
    #[serde(default = "default_lif_version")]
    pub lif_version: String,
}

fn default_lif_version() -> String {
    LIF_VERSION.to_string()
}

impl Default for MetaInformation {
    fn default() -> Self {
        Self {
            project_identification: String::new(),
            creator: String::new(),
            export_timestamp: String::new(),
            lif_version: default_lif_version(),
        }
    }
}

impl MetaInformation {
    /// Stamp the export timestamp with the current time.
    pub fn touch(&mut self) {
        self.export_timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
    }

    /// Parse the export timestamp.
    pub fn exported_at(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.export_timestamp)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}
