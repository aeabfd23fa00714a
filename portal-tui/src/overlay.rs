//! Zoom overlay and the key-listener registry it hooks into.

use crate::input::KeyPress;
use crate::scan::{ScanImage, ScanSide};
use std::sync::Arc;

pub type ListenerId = u64;

/// What a registered key listener does when its key fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenerAction {
    DismissZoom,
}

/// Temporary key bindings installed by transient UI elements.
#[derive(Debug, Default)]
pub struct KeyListeners {
    next_id: ListenerId,
    listeners: Vec<(ListenerId, KeyPress, ListenerAction)>,
}

impl KeyListeners {
    pub fn register(&mut self, key: KeyPress, action: ListenerAction) -> ListenerId {
        self.next_id += 1;
        self.listeners.push((self.next_id, key, action));
        self.next_id
    }

    /// Returns false if the listener was already gone.
    pub fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _, _)| *lid != id);
        self.listeners.len() != before
    }

    /// Most recently registered listener for `key`.
    pub fn lookup(&self, key: KeyPress) -> Option<ListenerAction> {
        self.listeners
            .iter()
            .rev()
            .find(|(_, k, _)| *k == key)
            .map(|(_, _, action)| *action)
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

/// Full-screen view of one scan.
#[derive(Debug, Clone)]
pub struct ZoomOverlay {
    pub side: ScanSide,
    pub image: Arc<ScanImage>,
    listener: ListenerId,
}

impl ZoomOverlay {
    pub(crate) fn open(
        side: ScanSide,
        image: Arc<ScanImage>,
        listeners: &mut KeyListeners,
    ) -> Self {
        let listener = listeners.register(KeyPress::Escape, ListenerAction::DismissZoom);
        Self {
            side,
            image,
            listener,
        }
    }

    /// Show a different scan without touching the installed listener.
    pub(crate) fn replace(&mut self, side: ScanSide, image: Arc<ScanImage>) {
        self.side = side;
        self.image = image;
    }

    pub(crate) fn close(self, listeners: &mut KeyListeners) {
        listeners.remove(self.listener);
    }
}
