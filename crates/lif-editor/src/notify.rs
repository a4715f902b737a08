//! Host callbacks: user notifications, viewport control and change events.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::warn;

/// Shows a short message to the user.
pub trait Notifier {
    fn show_message(&self, title: &str, description: &str);
}

/// Notifier that only writes the message to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn show_message(&self, title: &str, description: &str) {
        warn!(title, "{description}");
    }
}

/// A message captured by [`RecordingNotifier`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub title: String,
    pub description: String,
}

/// Notifier that keeps every message for later inspection.
///
/// Clones share the same message list.
#[derive(Debug, Default, Clone)]
pub struct RecordingNotifier {
    messages: Rc<RefCell<Vec<Message>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<Message> {
        self.messages.borrow().clone()
    }

    pub fn last(&self) -> Option<Message> {
        self.messages.borrow().last().cloned()
    }
}

impl Notifier for RecordingNotifier {
    fn show_message(&self, title: &str, description: &str) {
        self.messages.borrow_mut().push(Message {
            title: title.to_string(),
            description: description.to_string(),
        });
    }
}

/// The rendering surface showing the live layout.
pub trait Viewport {
    /// Zoom and pan so every entity is visible.
    fn fit_to_contents(&self);
}

/// A change to the store, delivered to subscribers after it happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    /// A node or station was inserted or replaced.
    EntityChanged { id: String },
    EntityRemoved { id: String, edges_removed: usize },
    EntityMoved { id: String },
    EdgeChanged { id: String },
    EdgeRemoved { id: String },
    /// The outgoing edges of `source` were replaced.
    EdgesReplaced { source: String },
    DraggableChanged,
    LayoutSwitched { layout_id: String },
    LayoutSaved { layout_id: String },
    LayoutDeleted { layout_id: String },
    DocumentLoaded { layouts: usize },
    StateRestored,
    BackgroundChanged,
    MetaInformationChanged,
    ActionsChanged,
}

/// Subscriber callback.
pub type Observer = Box<dyn Fn(&StoreEvent)>;
