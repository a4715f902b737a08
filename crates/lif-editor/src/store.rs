//! The layout store: single source of truth for the editor.
//!
//! The store owns the document's meta information, the list of layouts, one
//! frozen [`LayoutSnapshot`] per inactive layout and the live state of the
//! active layout. Only the live state is ever edited; switching layouts
//! freezes it into its snapshot and thaws the target.
//!
//! Failed operations leave the store untouched and report the error through
//! the [`Notifier`] before returning it.

use std::collections::BTreeMap;

use lif_model::{
    Action, BackgroundImage, Edge, EntityKind, GraphEntity, Layout, LayoutSnapshot,
    MetaInformation, Node, Position, Station, VisualizationEdge, VisualizationNode,
};
use tracing::{debug, info, warn};

use crate::config::EditorConfig;
use crate::error::{EditorError, Result};
use crate::history::HistoryState;
use crate::notify::{Notifier, Observer, StoreEvent, TracingNotifier, Viewport};

pub struct LayoutStore {
    pub(crate) config: EditorConfig,
    pub(crate) meta_information: MetaInformation,
    /// Layouts in document order. Entity arrays are only read when a layout has no snapshot.
    pub(crate) layouts: Vec<Layout>,
    /// Frozen state per layout id. The active layout's entry is stale while it is live.
    pub(crate) snapshots: BTreeMap<String, LayoutSnapshot>,
    pub(crate) live: LayoutSnapshot,
    pub(crate) active_layout_id: Option<String>,
    pub(crate) actions: Vec<Action>,
    notifier: Box<dyn Notifier>,
    viewport: Option<Box<dyn Viewport>>,
    observers: Vec<Observer>,
}

impl Default for LayoutStore {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl std::fmt::Debug for LayoutStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayoutStore")
            .field("active_layout_id", &self.active_layout_id)
            .field("layouts", &self.layouts.len())
            .field("nodes", &self.live.nodes.len())
            .field("edges", &self.live.edges.len())
            .finish_non_exhaustive()
    }
}

impl LayoutStore {
    /// Create a store holding the configured default layout, already active.
    pub fn new(config: EditorConfig) -> Self {
        let layout = config.default_layout.to_layout();
        let active_layout_id = Some(layout.layout_id.clone());
        Self {
            config,
            meta_information: MetaInformation::default(),
            layouts: vec![layout],
            snapshots: BTreeMap::new(),
            live: LayoutSnapshot::default(),
            active_layout_id,
            actions: Vec::new(),
            notifier: Box::new(TracingNotifier),
            viewport: None,
            observers: Vec::new(),
        }
    }

    /// Replace the notifier used to report failed operations.
    pub fn with_notifier(mut self, notifier: Box<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    /// Attach the viewport that is fitted after every layout switch.
    pub fn with_viewport(mut self, viewport: Box<dyn Viewport>) -> Self {
        self.viewport = Some(viewport);
        self
    }

    /// Register a callback invoked after every successful change.
    pub fn subscribe(&mut self, observer: Observer) {
        self.observers.push(observer);
    }

    pub(crate) fn emit(&self, event: StoreEvent) {
        for observer in &self.observers {
            observer(&event);
        }
    }

    /// Log and show an error to the user, then hand it back to the caller.
    pub(crate) fn report(&self, error: EditorError) -> EditorError {
        warn!(error = %error, "editor operation failed");
        self.notifier.show_message(error.title(), &error.user_message());
        error
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn meta_information(&self) -> &MetaInformation {
        &self.meta_information
    }

    /// Layouts in document order.
    ///
    /// Entity arrays here may be stale; [`to_document`](Self::to_document)
    /// returns current content.
    pub fn layouts(&self) -> &[Layout] {
        &self.layouts
    }

    pub fn layout(&self, layout_id: &str) -> Option<&Layout> {
        self.layouts.iter().find(|l| l.layout_id == layout_id)
    }

    pub fn active_layout_id(&self) -> Option<&str> {
        self.active_layout_id.as_deref()
    }

    /// Live state of the active layout.
    pub fn live(&self) -> &LayoutSnapshot {
        &self.live
    }

    pub fn nodes(&self) -> &BTreeMap<String, VisualizationNode> {
        &self.live.nodes
    }

    pub fn edges(&self) -> &BTreeMap<String, VisualizationEdge> {
        &self.live.edges
    }

    pub fn positions(&self) -> &BTreeMap<String, Position> {
        &self.live.positions
    }

    pub fn background_image(&self) -> &BackgroundImage {
        &self.live.background_image
    }

    /// Frozen state of an inactive layout.
    pub fn snapshot(&self, layout_id: &str) -> Option<&LayoutSnapshot> {
        self.snapshots.get(layout_id)
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    // =========================================================================
    // Nodes and stations
    // =========================================================================

    /// Insert or replace a node in the live layout.
    ///
    /// An existing position for the id is kept; otherwise the node's own
    /// coordinates seed the rendering position.
    pub fn create_node(&mut self, node: Node) -> Result<()> {
        if let Err(error) = node.validate() {
            return Err(self.report(error.into()));
        }
        self.insert_entity(GraphEntity::Node(node), false);
        Ok(())
    }

    /// Insert or replace a station in the live layout. Stations are draggable.
    pub fn create_station(&mut self, station: Station) -> Result<()> {
        if let Err(error) = station.validate() {
            return Err(self.report(error.into()));
        }
        self.insert_entity(GraphEntity::Station(station), true);
        Ok(())
    }

    fn insert_entity(&mut self, mut entity: GraphEntity, draggable: bool) {
        let id = entity.id().to_string();
        let position = match self.live.positions.get(&id) {
            Some(position) => *position,
            None => {
                let (x, y) = entity.domain_xy();
                Position::new(x, y).rounded()
            }
        };
        entity.sync_position(position);

        let node = VisualizationNode::new(entity, draggable);
        debug!(id = %id, kind = %node.kind(), x = position.x, y = position.y, "entity stored");
        self.live.nodes.insert(id.clone(), node);
        self.live.positions.insert(id.clone(), position);
        self.emit(StoreEvent::EntityChanged { id });
    }

    /// Remove a node or station together with every edge touching it.
    pub fn delete_node(&mut self, id: &str) -> Result<()> {
        if !self.live.nodes.contains_key(id) && !self.live.positions.contains_key(id) {
            return Err(self.report(EditorError::NodeNotFound { id: id.to_string() }));
        }
        self.live.nodes.remove(id);
        self.live.positions.remove(id);
        let edges_removed = self.live.remove_edges_touching(id);
        debug!(id, edges_removed, "entity deleted");
        self.emit(StoreEvent::EntityRemoved {
            id: id.to_string(),
            edges_removed,
        });
        Ok(())
    }

    /// Same as [`delete_node`](Self::delete_node); nodes and stations share one id space.
    pub fn delete_station(&mut self, id: &str) -> Result<()> {
        self.delete_node(id)
    }

    /// Set the rendering position of an entity, as after a drag.
    pub fn move_node(&mut self, id: &str, position: Position) -> Result<()> {
        if !self.live.nodes.contains_key(id) {
            return Err(self.report(EditorError::NodeNotFound { id: id.to_string() }));
        }
        self.live.positions.insert(id.to_string(), position);
        self.emit(StoreEvent::EntityMoved { id: id.to_string() });
        Ok(())
    }

    /// Make `id` the only draggable entity.
    pub fn set_draggable(&mut self, id: &str) -> Result<()> {
        if !self.live.nodes.contains_key(id) {
            return Err(self.report(EditorError::NodeNotFound { id: id.to_string() }));
        }
        for (node_id, node) in self.live.nodes.iter_mut() {
            node.draggable = node_id == id;
        }
        self.emit(StoreEvent::DraggableChanged);
        Ok(())
    }

    /// Make every entity non-draggable.
    pub fn disable_drag(&mut self) {
        for node in self.live.nodes.values_mut() {
            node.draggable = false;
        }
        self.emit(StoreEvent::DraggableChanged);
    }

    pub fn entity_kind(&self, id: &str) -> Option<EntityKind> {
        self.live.nodes.get(id).map(VisualizationNode::kind)
    }

    pub fn is_node(&self, id: &str) -> bool {
        self.entity_kind(id) == Some(EntityKind::Node)
    }

    pub fn is_station(&self, id: &str) -> bool {
        self.entity_kind(id) == Some(EntityKind::Station)
    }

    // =========================================================================
    // Edges
    // =========================================================================

    /// Insert or replace the edge `source -> target`, returning its id.
    ///
    /// Endpoints are not checked against the entity map.
    pub fn create_edge(&mut self, source: &str, target: &str) -> String {
        let edge = VisualizationEdge::new(Edge::between(source, target));
        let id = edge.edge.edge_id.clone();
        debug!(id = %id, source, target, "edge stored");
        self.live.edges.insert(id.clone(), edge);
        self.emit(StoreEvent::EdgeChanged { id: id.clone() });
        id
    }

    /// Insert or replace an edge carrying its full properties.
    ///
    /// The display color is recomputed from the vehicle-type properties.
    /// Endpoints are not checked against the entity map.
    pub fn put_edge(&mut self, edge: Edge) {
        let edge = VisualizationEdge::new(edge);
        let id = edge.edge.edge_id.clone();
        debug!(id = %id, complete = edge.color.is_complete(), "edge properties stored");
        self.live.edges.insert(id.clone(), edge);
        self.emit(StoreEvent::EdgeChanged { id });
    }

    pub fn delete_edge(&mut self, id: &str) -> Result<()> {
        if self.live.edges.remove(id).is_none() {
            return Err(self.report(EditorError::EdgeNotFound { id: id.to_string() }));
        }
        debug!(id, "edge deleted");
        self.emit(StoreEvent::EdgeRemoved { id: id.to_string() });
        Ok(())
    }

    /// Replace every outgoing edge of `source` with one edge per target.
    ///
    /// Incoming edges are kept. An empty target list removes all outgoing edges.
    pub fn update_edges<I, S>(&mut self, source: &str, targets: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.live.edges.retain(|_, edge| edge.source != source);
        let mut count = 0usize;
        for target in targets {
            let edge = VisualizationEdge::new(Edge::between(source, target.as_ref()));
            self.live.edges.insert(edge.edge.edge_id.clone(), edge);
            count += 1;
        }
        debug!(source, count, "outgoing edges replaced");
        self.emit(StoreEvent::EdgesReplaced {
            source: source.to_string(),
        });
    }

    /// Targets of every edge starting at `source`.
    pub fn outgoing_targets(&self, source: &str) -> Vec<String> {
        self.live
            .edges
            .values()
            .filter(|edge| edge.source == source)
            .map(|edge| edge.target.clone())
            .collect()
    }

    // =========================================================================
    // Layouts
    // =========================================================================

    /// Make `layout_id` the live layout.
    ///
    /// The current live state (with positions written back into its domain
    /// objects) is frozen into the active layout's snapshot first. A target
    /// without a snapshot starts empty.
    pub fn switch_layout(&mut self, layout_id: &str) {
        if let Some(active) = self.active_layout_id.take() {
            self.live.sync_positions();
            self.snapshots.insert(active, self.live.clone());
        }
        self.live = self.snapshots.get(layout_id).cloned().unwrap_or_default();
        self.active_layout_id = Some(layout_id.to_string());

        info!(
            layout_id,
            nodes = self.live.nodes.len(),
            edges = self.live.edges.len(),
            "switched layout"
        );
        if let Some(viewport) = &self.viewport {
            viewport.fit_to_contents();
        }
        self.emit(StoreEvent::LayoutSwitched {
            layout_id: layout_id.to_string(),
        });
    }

    /// Add or update layout metadata, then make that layout live.
    ///
    /// Entity arrays on `layout` are ignored. A background image with data
    /// replaces the live background after the switch.
    pub fn save_layout(&mut self, layout: &Layout) {
        match self
            .layouts
            .iter_mut()
            .find(|l| l.layout_id == layout.layout_id)
        {
            Some(existing) => existing.apply_metadata(layout),
            None => self.layouts.push(layout.metadata_only()),
        }
        self.switch_layout(&layout.layout_id);

        if let Some(background) = layout.background_image.as_ref().filter(|b| b.has_image()) {
            self.live.background_image = background.clone();
        }
        info!(layout_id = %layout.layout_id, name = %layout.layout_name, "layout saved");
        self.emit(StoreEvent::LayoutSaved {
            layout_id: layout.layout_id.clone(),
        });
    }

    /// Remove a layout and its snapshot. Deleting the active layout empties the live state.
    pub fn delete_layout(&mut self, layout_id: &str) -> Result<()> {
        let Some(index) = self.layouts.iter().position(|l| l.layout_id == layout_id) else {
            return Err(self.report(EditorError::LayoutNotFound {
                id: layout_id.to_string(),
            }));
        };
        self.layouts.remove(index);
        self.snapshots.remove(layout_id);
        if self.active_layout_id.as_deref() == Some(layout_id) {
            self.active_layout_id = None;
            self.live.clear();
        }
        info!(layout_id, "layout deleted");
        self.emit(StoreEvent::LayoutDeleted {
            layout_id: layout_id.to_string(),
        });
        Ok(())
    }

    /// Set the background of the live layout.
    ///
    /// The active layout's metadata follows, so an image-less background
    /// also removes the image from exports.
    pub fn set_background_image(&mut self, background: BackgroundImage) {
        if let Some(active) = self.active_layout_id.as_deref()
            && let Some(layout) = self.layouts.iter_mut().find(|l| l.layout_id == active)
        {
            layout.background_image = background.has_image().then(|| background.clone());
        }
        self.live.background_image = background;
        self.emit(StoreEvent::BackgroundChanged);
    }

    pub fn set_meta_information(&mut self, meta_information: MetaInformation) {
        self.meta_information = meta_information;
        self.emit(StoreEvent::MetaInformationChanged);
    }

    // =========================================================================
    // Action catalog
    // =========================================================================

    pub fn create_action(&mut self, action: Action) -> Result<()> {
        if let Err(error) = action.validate() {
            return Err(self.report(error.into()));
        }
        debug!(action_type = %action.action_type, "action created");
        self.actions.push(action);
        self.emit(StoreEvent::ActionsChanged);
        Ok(())
    }

    /// Remove the first action with the given type.
    pub fn delete_action(&mut self, action_type: &str) -> Result<()> {
        let Some(index) = self
            .actions
            .iter()
            .position(|a| a.action_type == action_type)
        else {
            return Err(self.report(EditorError::ActionNotFound {
                action_type: action_type.to_string(),
            }));
        };
        self.actions.remove(index);
        self.emit(StoreEvent::ActionsChanged);
        Ok(())
    }

    // =========================================================================
    // History
    // =========================================================================

    /// Deep copy of the live state for the undo history.
    pub fn history_state(&self) -> HistoryState {
        self.live.clone()
    }

    /// Replace the live state with a recorded one.
    pub fn restore_state(&mut self, state: &HistoryState) {
        self.live = state.clone();
        debug!(nodes = self.live.nodes.len(), "state restored");
        self.emit(StoreEvent::StateRestored);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::RecordingNotifier;
    use lif_model::{DisplayColor, StationPosition};

    fn store_with_notifier() -> (LayoutStore, RecordingNotifier) {
        let notifier = RecordingNotifier::new();
        let store = LayoutStore::default().with_notifier(Box::new(notifier.clone()));
        (store, notifier)
    }

    #[test]
    fn new_store_has_active_default_layout() {
        let store = LayoutStore::default();
        assert_eq!(store.active_layout_id(), Some("entry"));
        assert_eq!(store.layouts().len(), 1);
        assert!(store.live().is_empty());
    }

    #[test]
    fn create_node_seeds_rounded_position() {
        let mut store = LayoutStore::default();
        store
            .create_node(Node::new("N1", 1.23456, 2.0))
            .expect("create node");

        assert_eq!(store.positions()["N1"], Position::new(1.235, 2.0));
        let node = store.nodes()["N1"].entity.as_node().expect("node");
        assert_eq!(node.node_position.x, 1.235);
        assert_eq!(node.node_position.y, -2.0);
        assert!(!store.nodes()["N1"].draggable);
    }

    #[test]
    fn recreating_node_keeps_position() {
        let mut store = LayoutStore::default();
        store.create_node(Node::new("N1", 0.0, 0.0)).expect("create");
        store
            .move_node("N1", Position::new(5.0, 6.0))
            .expect("move");
        let mut renamed = Node::new("N1", 100.0, 100.0);
        renamed.node_name = "Dock".into();
        store.create_node(renamed).expect("update");

        assert_eq!(store.positions()["N1"], Position::new(5.0, 6.0));
        assert_eq!(store.nodes()["N1"].name, "Dock");
    }

    #[test]
    fn empty_node_id_is_rejected_and_notified() {
        let (mut store, notifier) = store_with_notifier();
        let error = store
            .create_node(Node::new("", 0.0, 0.0))
            .expect_err("empty id");
        assert_eq!(error.kind(), crate::ErrorKind::Validation);
        assert!(store.nodes().is_empty());
        assert_eq!(
            notifier.last().map(|m| m.description),
            Some("Node ID cannot be empty".to_string())
        );
    }

    #[test]
    fn station_without_interactions_is_rejected() {
        let (mut store, notifier) = store_with_notifier();
        store.create_node(Node::new("N1", 1.0, 2.0)).expect("create node");
        let nodes_before = store.nodes().clone();
        let positions_before = store.positions().clone();

        let station = Station::new("S1", Vec::new(), StationPosition::default());
        let error = store.create_station(station).expect_err("no interactions");
        assert_eq!(error.kind(), crate::ErrorKind::Validation);
        assert_eq!(store.nodes(), &nodes_before);
        assert_eq!(store.positions(), &positions_before);
        let message = notifier.last().expect("message");
        assert_eq!(message.title, "Error");
        assert_eq!(message.description, "Interaction nodes cannot be empty");
    }

    #[test]
    fn put_edge_with_vehicle_properties_is_complete() {
        let mut store = LayoutStore::default();
        let id = store.create_edge("A", "B");
        assert!(!store.edges()[&id].color.is_complete());

        let mut edge = store.edges()[&id].edge.clone();
        edge.vehicle_type_edge_properties.push(
            serde_json::from_value(serde_json::json!({ "vehicleTypeId": "agv" }))
                .expect("edge property"),
        );
        store.put_edge(edge);

        let stored = &store.edges()[&id];
        assert_eq!(stored.color, DisplayColor::CompleteEdge);
        assert_eq!(stored.edge.vehicle_type_edge_properties.len(), 1);
        assert_eq!(store.edges().len(), 1);
    }

    #[test]
    fn stations_are_draggable() {
        let mut store = LayoutStore::default();
        let station = Station::new("S1", vec!["N1".into()], StationPosition::default());
        store.create_station(station).expect("create station");
        assert!(store.nodes()["S1"].draggable);
        assert!(store.is_station("S1"));
        assert!(!store.is_node("S1"));
    }

    #[test]
    fn delete_node_cascades_to_edges() {
        let mut store = LayoutStore::default();
        for id in ["A", "B", "C"] {
            store.create_node(Node::new(id, 0.0, 0.0)).expect("create");
        }
        store.create_edge("A", "B");
        store.create_edge("B", "A");
        store.create_edge("B", "C");

        store.delete_node("A").expect("delete");
        assert_eq!(store.edges().keys().collect::<Vec<_>>(), vec!["B_C"]);
        assert!(!store.positions().contains_key("A"));
    }

    #[test]
    fn delete_station_removes_station_and_edges() {
        let mut store = LayoutStore::default();
        let station = Station::new("S", vec!["A".into()], StationPosition::default());
        store.create_station(station).expect("create");
        store.create_edge("S", "A");
        store.delete_station("S").expect("delete");
        assert!(store.nodes().is_empty());
        assert!(store.edges().is_empty());
    }

    #[test]
    fn delete_missing_node_reports_not_found() {
        let (mut store, notifier) = store_with_notifier();
        let error = store.delete_node("ghost").expect_err("missing");
        assert_eq!(error.kind(), crate::ErrorKind::NotFound);
        assert_eq!(notifier.messages().len(), 1);
    }

    #[test]
    fn update_edges_replaces_only_outgoing() {
        let mut store = LayoutStore::default();
        store.create_edge("A", "B");
        store.create_edge("C", "A");
        store.update_edges("A", ["C", "D"]);

        let mut targets = store.outgoing_targets("A");
        targets.sort();
        assert_eq!(targets, vec!["C", "D"]);
        assert!(store.edges().contains_key("C_A"));
        assert!(!store.edges().contains_key("A_B"));

        store.update_edges("A", Vec::<String>::new());
        assert!(store.outgoing_targets("A").is_empty());
        assert!(store.edges().contains_key("C_A"));
    }

    #[test]
    fn create_edge_twice_keeps_one_edge() {
        let mut store = LayoutStore::default();
        assert_eq!(store.create_edge("A", "B"), "A_B");
        store.create_edge("A", "B");
        assert_eq!(store.edges().len(), 1);
    }

    #[test]
    fn delete_missing_edge_is_an_error() {
        let (mut store, _) = store_with_notifier();
        assert!(store.delete_edge("A_B").is_err());
    }

    #[test]
    fn set_draggable_is_exclusive() {
        let mut store = LayoutStore::default();
        store.create_node(Node::new("A", 0.0, 0.0)).expect("create");
        let station = Station::new("S", vec!["A".into()], StationPosition::default());
        store.create_station(station).expect("create");

        store.set_draggable("A").expect("draggable");
        assert!(store.nodes()["A"].draggable);
        assert!(!store.nodes()["S"].draggable);

        store.disable_drag();
        assert!(store.nodes().values().all(|n| !n.draggable));
    }

    #[test]
    fn switching_preserves_each_layout() {
        let mut store = LayoutStore::default();
        store.create_node(Node::new("A", 1.0, 1.0)).expect("create");
        store.save_layout(&Layout::new("L2", "Second"));
        assert!(store.live().is_empty());
        store.create_node(Node::new("B", 2.0, 2.0)).expect("create");

        store.switch_layout("entry");
        assert!(store.nodes().contains_key("A"));
        assert!(!store.nodes().contains_key("B"));

        store.switch_layout("L2");
        assert!(store.nodes().contains_key("B"));
    }

    #[test]
    fn switch_to_active_layout_is_idempotent() {
        let mut store = LayoutStore::default();
        store.create_node(Node::new("A", 1.0, 1.0)).expect("create");
        store.create_edge("A", "A");
        let before = store.live().clone();

        store.switch_layout("entry");
        assert_eq!(store.live(), &before);
    }

    #[test]
    fn save_existing_layout_updates_metadata() {
        let mut store = LayoutStore::default();
        let mut layout = Layout::new("entry", "Renamed");
        layout.layout_level_id = "2".into();
        store.save_layout(&layout);

        assert_eq!(store.layouts().len(), 1);
        assert_eq!(store.layouts()[0].layout_name, "Renamed");
        assert_eq!(store.layouts()[0].layout_level_id, "2");
    }

    #[test]
    fn save_layout_applies_background_with_image() {
        let mut store = LayoutStore::default();
        let mut layout = Layout::new("L2", "Second");
        layout.background_image = Some(BackgroundImage {
            image: "data:image/png;base64,AAAA".into(),
            ..BackgroundImage::default()
        });
        store.save_layout(&layout);
        assert!(store.background_image().has_image());
    }

    #[test]
    fn delete_active_layout_clears_live_state() {
        let mut store = LayoutStore::default();
        store.create_node(Node::new("A", 0.0, 0.0)).expect("create");
        store.delete_layout("entry").expect("delete");
        assert!(store.layouts().is_empty());
        assert_eq!(store.active_layout_id(), None);
        assert!(store.live().is_empty());
    }

    #[test]
    fn actions_can_be_created_and_deleted() {
        let (mut store, notifier) = store_with_notifier();
        store.create_action(Action::new("pick")).expect("create");
        store.create_action(Action::new("drop")).expect("create");
        store.delete_action("pick").expect("delete");
        assert_eq!(store.actions().len(), 1);

        assert!(store.create_action(Action::new("")).is_err());
        assert!(store.delete_action("pick").is_err());
        assert_eq!(notifier.messages().len(), 2);
    }

    #[test]
    fn restore_state_replaces_live_state() {
        let mut store = LayoutStore::default();
        store.create_node(Node::new("A", 0.0, 0.0)).expect("create");
        let state = store.history_state();
        store.create_node(Node::new("B", 0.0, 0.0)).expect("create");

        store.restore_state(&state);
        assert_eq!(store.nodes().len(), 1);
        assert_eq!(store.active_layout_id(), Some("entry"));
    }

    #[test]
    fn observers_receive_events() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        let mut store = LayoutStore::default();
        store.subscribe(Box::new(move |event| sink.borrow_mut().push(event.clone())));

        store.create_edge("A", "B");
        store.delete_edge("A_B").expect("delete");
        assert_eq!(
            *events.borrow(),
            vec![
                StoreEvent::EdgeChanged { id: "A_B".into() },
                StoreEvent::EdgeRemoved { id: "A_B".into() },
            ]
        );
    }
}
