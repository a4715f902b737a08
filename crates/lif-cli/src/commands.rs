//! Command implementations.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use lif_editor::{EditorConfig, LayoutStore, ToVisualization, geo_file_name, lif_file_name};
use lif_model::BackgroundImage;
use tracing::{info, info_span};

/// What to write for `lif convert`.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    pub input: PathBuf,
    pub output_dir: Option<PathBuf>,
    pub include_background: bool,
    pub touch: bool,
}

/// Per-layout counts printed by `lif inspect`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutSummary {
    pub layout_id: String,
    pub name: String,
    pub level_id: String,
    pub nodes: usize,
    pub stations: usize,
    pub edges: usize,
    /// Entities and edges still missing required properties.
    pub incomplete: usize,
    pub has_background: bool,
}

/// Result of `lif inspect`.
#[derive(Debug, Clone)]
pub struct InspectResult {
    pub project: String,
    pub creator: String,
    pub exported_at: Option<String>,
    pub layouts: Vec<LayoutSummary>,
}

/// Read a LIF file into a fresh store.
pub fn load_store(config: &EditorConfig, input: &Path) -> Result<LayoutStore> {
    let data = fs::read_to_string(input).with_context(|| format!("read {}", input.display()))?;
    let mut store = LayoutStore::new(config.clone());
    store
        .load_json(&data)
        .with_context(|| format!("load {}", input.display()))?;
    Ok(store)
}

fn output_path(input: &Path, output_dir: Option<&Path>, file_name: &str) -> Result<PathBuf> {
    let dir = match output_dir {
        Some(dir) => dir.to_path_buf(),
        None => input.parent().map(Path::to_path_buf).unwrap_or_default(),
    };
    if !dir.as_os_str().is_empty() {
        fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    }
    Ok(dir.join(file_name))
}

/// Re-export a LIF file and return the written path.
pub fn run_convert(config: &EditorConfig, options: &ConvertOptions) -> Result<PathBuf> {
    let span = info_span!("convert", input = %options.input.display());
    let _guard = span.enter();

    let mut config = config.clone();
    config.export.touch_timestamp |= options.touch;
    let include_background = options.include_background && config.export.include_background;

    let mut store = load_store(&config, &options.input)?;
    let json = store.to_lif_json(include_background)?;
    let path = output_path(
        &options.input,
        options.output_dir.as_deref(),
        &lif_file_name(store.meta_information()),
    )?;
    fs::write(&path, json).with_context(|| format!("write {}", path.display()))?;

    info!(
        path = %path.display(),
        layouts = store.layouts().len(),
        include_background,
        "LIF export written"
    );
    Ok(path)
}

/// Export the route graph of one layout and return the written path.
pub fn run_geo(
    config: &EditorConfig,
    input: &Path,
    layout: Option<&str>,
    output_dir: Option<&Path>,
) -> Result<PathBuf> {
    let span = info_span!("geo", input = %input.display());
    let _guard = span.enter();

    let mut store = load_store(config, input)?;
    if let Some(layout_id) = layout {
        if store.layout(layout_id).is_none() {
            bail!("layout '{layout_id}' not found in {}", input.display());
        }
        store.switch_layout(layout_id);
    }
    let json = store.to_geo_json()?;
    let path = output_path(input, output_dir, &geo_file_name(store.meta_information()))?;
    fs::write(&path, json).with_context(|| format!("write {}", path.display()))?;

    info!(path = %path.display(), layout = ?store.active_layout_id(), "route graph written");
    Ok(path)
}

/// Summarize every layout of a LIF file.
pub fn run_inspect(config: &EditorConfig, input: &Path) -> Result<InspectResult> {
    let mut store = load_store(config, input)?;
    let lif = store.to_document(true);

    let layouts = lif
        .layouts
        .iter()
        .map(|layout| {
            let snapshot = layout.to_visualization();
            let incomplete = snapshot
                .nodes
                .values()
                .map(|node| node.color)
                .chain(snapshot.edges.values().map(|edge| edge.color))
                .filter(|color| !color.is_complete())
                .count();
            LayoutSummary {
                layout_id: layout.layout_id.clone(),
                name: layout.layout_name.clone(),
                level_id: layout.layout_level_id.clone(),
                nodes: layout.nodes.len(),
                stations: layout.stations.len(),
                edges: layout.edges.len(),
                incomplete,
                has_background: layout
                    .background_image
                    .as_ref()
                    .is_some_and(BackgroundImage::has_image),
            }
        })
        .collect();

    let meta = lif.meta_information;
    Ok(InspectResult {
        exported_at: meta
            .exported_at()
            .map(|at| at.format("%Y-%m-%d %H:%M:%S UTC").to_string()),
        project: meta.project_identification,
        creator: meta.creator,
        layouts,
    })
}
