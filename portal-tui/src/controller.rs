//! The catalog controller.
//!
//! Owns the selection state, the display model, the schematic viewer host and
//! the zoom overlay. Every mutation goes through an `InputEvent` or a probe
//! completion; operations that change the selection hand back the probes the
//! caller must dispatch.

use crate::display::{DisplayModel, ImageSlot, SchematicSlot};
use crate::input::{InputEvent, KeyPress, SCROLL_STEP};
use crate::overlay::{KeyListeners, ListenerAction, ZoomOverlay};
use crate::probe::{ProbeCompletion, ProbeOutcome, ProbeTarget, ProbeTicket};
use crate::scan::ScanSide;
use crate::schematic::{ViewerFactory, ViewerHost};
use catalog::{Catalog, CatalogState, Direction, SelectionChange};

pub struct CatalogController {
    state: CatalogState,
    display: DisplayModel,
    viewer: ViewerHost,
    /// Bumped on every display refresh; probes from older generations are stale.
    generation: u64,
    zoom: Option<ZoomOverlay>,
    listeners: KeyListeners,
}

impl CatalogController {
    pub fn new(catalog: Catalog, factory: Box<dyn ViewerFactory>) -> Self {
        let state = CatalogState::new(catalog);
        let display = DisplayModel::blank(state.nav_enabled());
        Self {
            state,
            display,
            viewer: ViewerHost::new(factory),
            generation: 0,
            zoom: None,
            listeners: KeyListeners::default(),
        }
    }

    pub fn state(&self) -> &CatalogState {
        &self.state
    }

    pub fn display(&self) -> &DisplayModel {
        &self.display
    }

    pub fn viewer(&self) -> &ViewerHost {
        &self.viewer
    }

    pub fn zoom(&self) -> Option<&ZoomOverlay> {
        self.zoom.as_ref()
    }

    pub fn listeners(&self) -> &KeyListeners {
        &self.listeners
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn handle(&mut self, event: InputEvent) -> Vec<ProbeTicket> {
        match event {
            InputEvent::SearchChanged(term) => {
                self.set_search_term(&term);
                Vec::new()
            }
            InputEvent::Navigate(direction) => self.navigate(direction),
            InputEvent::ActivateItem(row) => self.select_by_filtered_index(row),
            InputEvent::ActivateImage(side) => {
                self.open_zoom(side);
                Vec::new()
            }
            InputEvent::ClickOverlay => {
                self.dismiss_zoom();
                Vec::new()
            }
            InputEvent::Key(key) => {
                self.handle_key(key);
                Vec::new()
            }
        }
    }

    pub fn set_search_term(&mut self, term: &str) {
        let change = self.state.set_search_term(term);
        tracing::debug!(
            term = %term,
            matches = self.state.filtered_len(),
            "Search term applied"
        );
        if change == SelectionChange::Cleared {
            self.clear_display();
        }
        self.display.nav_enabled = self.state.nav_enabled();
    }

    pub fn select_by_filtered_index(&mut self, row: usize) -> Vec<ProbeTicket> {
        match self.state.select_by_filtered_index(row) {
            SelectionChange::Selected(_) => self.refresh(),
            _ => Vec::new(),
        }
    }

    pub fn navigate(&mut self, direction: Direction) -> Vec<ProbeTicket> {
        match self.state.navigate(direction) {
            SelectionChange::Selected(_) => self.refresh(),
            _ => Vec::new(),
        }
    }

    fn refresh(&mut self) -> Vec<ProbeTicket> {
        self.generation += 1;
        self.viewer.clear();
        self.display.nav_enabled = self.state.nav_enabled();

        let Some(entry) = self.state.selected_entry().cloned() else {
            self.clear_display();
            return Vec::new();
        };
        tracing::info!(board = %entry.name, generation = self.generation, "Board selected");

        self.display.show_entry(&entry);

        let mut probes = vec![
            ProbeTicket::new(self.generation, &entry.name, ProbeTarget::Scan(ScanSide::Front)),
            ProbeTicket::new(self.generation, &entry.name, ProbeTarget::Scan(ScanSide::Back)),
        ];
        if entry.has_schematic {
            probes.push(ProbeTicket::new(
                self.generation,
                &entry.name,
                ProbeTarget::Schematic,
            ));
        }
        probes
    }

    fn clear_display(&mut self) {
        self.generation += 1;
        self.viewer.clear();
        self.dismiss_zoom();
        self.display = DisplayModel::blank(self.state.nav_enabled());
    }

    /// Apply a probe result if it still belongs to the current selection.
    /// Returns whether the display changed.
    pub fn apply(&mut self, completion: ProbeCompletion) -> bool {
        let ProbeCompletion { ticket, outcome } = completion;

        let current = self.state.selected_entry().map(|e| e.name.as_str());
        if ticket.generation != self.generation || current != Some(ticket.entry.as_str()) {
            tracing::debug!(
                board = %ticket.entry,
                generation = ticket.generation,
                current_generation = self.generation,
                "Discarding stale probe result"
            );
            return false;
        }

        match (ticket.target, outcome) {
            (ProbeTarget::Scan(side), ProbeOutcome::Scan(image)) => {
                *self.display.slot_mut(side) = ImageSlot::Loaded(image);
            }
            (ProbeTarget::Scan(side), ProbeOutcome::Missing(reason)) => {
                tracing::debug!(path = %ticket.path, reason = %reason, "Scan unavailable");
                *self.display.slot_mut(side) = ImageSlot::Missing;
            }
            (ProbeTarget::Schematic, ProbeOutcome::Schematic(bytes)) => {
                self.display.schematic = match self.viewer.mount(&ticket.path, bytes) {
                    Ok(()) => SchematicSlot::Mounted,
                    Err(e) => {
                        tracing::info!(path = %ticket.path, "Schematic viewer failed: {}", e);
                        SchematicSlot::Unavailable
                    }
                };
            }
            (ProbeTarget::Schematic, ProbeOutcome::Missing(reason)) => {
                tracing::info!(path = %ticket.path, reason = %reason, "Schematic unavailable");
                self.display.schematic = SchematicSlot::Unavailable;
            }
            (target, _) => {
                tracing::warn!(?target, "Probe outcome does not match its target");
                return false;
            }
        }
        true
    }

    /// Open the zoom overlay on a loaded scan. Returns false if the slot has no
    /// image.
    pub fn open_zoom(&mut self, side: ScanSide) -> bool {
        let Some(image) = self.display.slot(side).image().cloned() else {
            return false;
        };

        match self.zoom.as_mut() {
            Some(overlay) => overlay.replace(side, image),
            None => self.zoom = Some(ZoomOverlay::open(side, image, &mut self.listeners)),
        }
        true
    }

    /// Close the zoom overlay. Safe to call when none is open.
    pub fn dismiss_zoom(&mut self) -> bool {
        match self.zoom.take() {
            Some(overlay) => {
                overlay.close(&mut self.listeners);
                true
            }
            None => false,
        }
    }

    /// Returns whether anything handled the key.
    pub fn handle_key(&mut self, key: KeyPress) -> bool {
        if let Some(action) = self.listeners.lookup(key) {
            return match action {
                ListenerAction::DismissZoom => self.dismiss_zoom(),
            };
        }

        let delta = match key {
            KeyPress::ScrollUp => -SCROLL_STEP,
            KeyPress::ScrollDown => SCROLL_STEP,
            KeyPress::Escape => return false,
        };
        match self.viewer.current_mut() {
            Some(viewer) => {
                viewer.scroll(delta);
                true
            }
            None => false,
        }
    }
}
