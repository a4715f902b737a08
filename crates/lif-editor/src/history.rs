//! Bounded linear undo/redo history of editor snapshots.

use std::collections::BTreeMap;

use lif_model::{BackgroundImage, LayoutSnapshot, Position, VisualizationEdge, VisualizationNode};
use tracing::trace;

use crate::config::EditorConfig;
use crate::store::LayoutStore;

/// Snapshots kept when no capacity is configured.
pub const DEFAULT_HISTORY_CAPACITY: usize = 50;

/// One recorded editor state.
pub type HistoryState = LayoutSnapshot;

/// Linear undo/redo stack.
///
/// Taking a snapshot after undoing drops the redo branch. When the stack is
/// full the oldest snapshot is evicted.
#[derive(Debug, Clone)]
pub struct HistoryManager {
    history: Vec<HistoryState>,
    /// Index of the current snapshot, `None` while empty.
    cursor: Option<usize>,
    capacity: usize,
}

impl Default for HistoryManager {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}

impl HistoryManager {
    /// Create an empty history holding at most `capacity` snapshots (at least one).
    pub fn new(capacity: usize) -> Self {
        Self {
            history: Vec::new(),
            cursor: None,
            capacity: capacity.max(1),
        }
    }

    /// Create an empty history sized by the editor configuration.
    pub fn from_config(config: &EditorConfig) -> Self {
        Self::new(config.history.capacity)
    }

    /// Record a deep copy of the given state as the newest snapshot.
    pub fn take_snapshot(
        &mut self,
        nodes: &BTreeMap<String, VisualizationNode>,
        edges: &BTreeMap<String, VisualizationEdge>,
        positions: &BTreeMap<String, Position>,
        background_image: &BackgroundImage,
    ) {
        self.push(HistoryState {
            nodes: nodes.clone(),
            edges: edges.clone(),
            positions: positions.clone(),
            background_image: background_image.clone(),
        });
    }

    /// Record the live state of `store`.
    pub fn record(&mut self, store: &LayoutStore) {
        self.push(store.history_state());
    }

    fn push(&mut self, state: HistoryState) {
        let keep = self.cursor.map_or(0, |cursor| cursor + 1);
        self.history.truncate(keep);
        self.history.push(state);

        if self.history.len() > self.capacity {
            self.history.remove(0);
        } else {
            self.cursor = Some(keep);
        }
        trace!(len = self.history.len(), cursor = ?self.cursor, "snapshot recorded");
    }

    /// Step back one snapshot and return it.
    pub fn undo(&mut self) -> Option<&HistoryState> {
        match self.cursor {
            Some(cursor) if cursor > 0 => {
                self.cursor = Some(cursor - 1);
                self.current_state()
            }
            _ => None,
        }
    }

    /// Step forward one snapshot and return it.
    pub fn redo(&mut self) -> Option<&HistoryState> {
        match self.cursor {
            Some(cursor) if cursor + 1 < self.history.len() => {
                self.cursor = Some(cursor + 1);
                self.current_state()
            }
            _ => None,
        }
    }

    pub fn current_state(&self) -> Option<&HistoryState> {
        self.cursor.and_then(|cursor| self.history.get(cursor))
    }

    pub fn clear(&mut self) {
        self.history.clear();
        self.cursor = None;
    }

    pub fn can_undo(&self) -> bool {
        self.cursor.is_some_and(|cursor| cursor > 0)
    }

    pub fn can_redo(&self) -> bool {
        self.cursor.is_some_and(|cursor| cursor + 1 < self.history.len())
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lif_model::{GraphEntity, Node};

    fn state(ids: &[&str]) -> HistoryState {
        let mut state = HistoryState::default();
        for id in ids {
            let node = VisualizationNode::new(GraphEntity::Node(Node::new(*id, 0.0, 0.0)), false);
            state.nodes.insert((*id).to_string(), node);
            state.positions.insert((*id).to_string(), Position::default());
        }
        state
    }

    fn take(history: &mut HistoryManager, s: &HistoryState) {
        history.take_snapshot(&s.nodes, &s.edges, &s.positions, &s.background_image);
    }

    #[test]
    fn empty_history_cannot_move() {
        let mut history = HistoryManager::default();
        assert!(history.is_empty());
        assert_eq!(history.cursor(), None);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert!(history.undo().is_none());
        assert!(history.redo().is_none());
        assert!(history.current_state().is_none());
    }

    #[test]
    fn undo_then_redo_returns_snapshots() {
        let mut history = HistoryManager::default();
        let (a, b, c) = (state(&["A"]), state(&["A", "B"]), state(&["A", "B", "C"]));
        take(&mut history, &a);
        take(&mut history, &b);
        take(&mut history, &c);

        assert_eq!(history.undo(), Some(&b));
        assert_eq!(history.undo(), Some(&a));
        assert!(!history.can_undo());
        assert_eq!(history.redo(), Some(&b));
        assert_eq!(history.redo(), Some(&c));
        assert!(!history.can_redo());
    }

    #[test]
    fn new_snapshot_truncates_redo_branch() {
        let mut history = HistoryManager::default();
        let (s0, s1, s2, s3) = (state(&["A"]), state(&["B"]), state(&["C"]), state(&["D"]));
        take(&mut history, &s0);
        take(&mut history, &s1);
        take(&mut history, &s2);
        history.undo();
        history.undo();
        take(&mut history, &s3);

        assert_eq!(history.len(), 2);
        assert!(!history.can_redo());
        assert_eq!(history.current_state(), Some(&s3));
        assert_eq!(history.undo(), Some(&s0));
        assert!(!history.can_undo());
        assert_eq!(history.redo(), Some(&s3));
        assert!(history.redo().is_none());
    }

    #[test]
    fn default_capacity_drops_first_of_51_snapshots() {
        let mut history = HistoryManager::default();
        let states: Vec<_> = (0..=DEFAULT_HISTORY_CAPACITY)
            .map(|i| state(&[format!("S{i}").as_str()]))
            .collect();
        for s in &states {
            take(&mut history, s);
        }

        assert_eq!(history.len(), DEFAULT_HISTORY_CAPACITY);
        assert_eq!(history.current_state(), states.last());
        while history.undo().is_some() {}
        assert_eq!(history.cursor(), Some(0));
        assert_eq!(history.current_state(), Some(&states[1]));
    }

    #[test]
    fn capacity_evicts_oldest() {
        let mut history = HistoryManager::new(3);
        for id in ["A", "B", "C", "D"] {
            take(&mut history, &state(&[id]));
        }
        assert_eq!(history.len(), 3);
        assert_eq!(history.cursor(), Some(2));
        history.undo();
        assert_eq!(history.undo(), Some(&state(&["B"])));
        assert!(!history.can_undo());
    }

    #[test]
    fn snapshots_are_independent_of_source() {
        let mut history = HistoryManager::default();
        let mut source = state(&["A"]);
        take(&mut history, &source);
        source.nodes.clear();
        assert_eq!(history.current_state(), Some(&state(&["A"])));
    }

    #[test]
    fn capacity_comes_from_config() {
        let mut config = EditorConfig::default();
        config.history.capacity = 4;
        assert_eq!(HistoryManager::from_config(&config).capacity(), 4);
    }

    #[test]
    fn clear_resets_cursor() {
        let mut history = HistoryManager::default();
        take(&mut history, &state(&["A"]));
        history.clear();
        assert!(history.is_empty());
        assert_eq!(history.cursor(), None);
    }
}
