//! What the screen should show, independent of how it is drawn.

use crate::scan::{ScanImage, ScanSide};
use catalog::{info_lines, CatalogEntry, NO_SELECTION_TITLE};
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub enum ImageSlot {
    /// Nothing selected.
    #[default]
    Empty,
    /// Probe in flight; the placeholder stays visible meanwhile.
    Pending,
    /// Probe failed or the bytes were not an image.
    Missing,
    Loaded(Arc<ScanImage>),
}

impl ImageSlot {
    pub fn image(&self) -> Option<&Arc<ScanImage>> {
        match self {
            ImageSlot::Loaded(image) => Some(image),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SchematicSlot {
    #[default]
    Unavailable,
    Probing,
    /// A viewer is live in the viewer host.
    Mounted,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum InfoPanel {
    #[default]
    Placeholder,
    Entry(Vec<(&'static str, String)>),
}

#[derive(Debug, Clone)]
pub struct DisplayModel {
    pub title: String,
    pub front: ImageSlot,
    pub back: ImageSlot,
    pub schematic: SchematicSlot,
    pub info: InfoPanel,
    pub nav_enabled: bool,
}

impl DisplayModel {
    pub fn blank(nav_enabled: bool) -> Self {
        Self {
            title: NO_SELECTION_TITLE.to_string(),
            front: ImageSlot::Empty,
            back: ImageSlot::Empty,
            schematic: SchematicSlot::Unavailable,
            info: InfoPanel::Placeholder,
            nav_enabled,
        }
    }

    /// Reset every slot for a freshly selected entry.
    pub fn show_entry(&mut self, entry: &CatalogEntry) {
        self.title = entry.name.clone();
        self.front = ImageSlot::Pending;
        self.back = ImageSlot::Pending;
        self.schematic = if entry.has_schematic {
            SchematicSlot::Probing
        } else {
            SchematicSlot::Unavailable
        };
        self.info = InfoPanel::Entry(info_lines(entry));
    }

    pub fn slot(&self, side: ScanSide) -> &ImageSlot {
        match side {
            ScanSide::Front => &self.front,
            ScanSide::Back => &self.back,
        }
    }

    pub fn slot_mut(&mut self, side: ScanSide) -> &mut ImageSlot {
        match side {
            ScanSide::Front => &mut self.front,
            ScanSide::Back => &mut self.back,
        }
    }
}

impl Default for DisplayModel {
    fn default() -> Self {
        Self::blank(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_entry_without_schematic() {
        let mut display = DisplayModel::default();
        display.show_entry(&CatalogEntry::new("DMG-A03", false, false, "A03"));
        assert_eq!(display.title, "DMG-A03");
        assert!(matches!(display.front, ImageSlot::Pending));
        assert!(matches!(display.back, ImageSlot::Pending));
        assert_eq!(display.schematic, SchematicSlot::Unavailable);
        assert!(matches!(display.info, InfoPanel::Entry(_)));
    }

    #[test]
    fn test_show_entry_with_schematic_probes() {
        let mut display = DisplayModel::default();
        display.show_entry(&CatalogEntry::new("DMG-A02", true, true, "A02"));
        assert_eq!(display.schematic, SchematicSlot::Probing);
    }

    #[test]
    fn test_blank_state() {
        let display = DisplayModel::blank(false);
        assert_eq!(display.title, NO_SELECTION_TITLE);
        assert_eq!(display.info, InfoPanel::Placeholder);
        assert!(display.slot(ScanSide::Front).image().is_none());
        assert!(!display.nav_enabled);
    }
}
