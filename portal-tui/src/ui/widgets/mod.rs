pub mod entry_list;
pub mod header;
pub mod info_panel;
pub mod scan_view;
pub mod schematic_panel;
pub mod zoom_overlay;

pub use entry_list::EntryList;
pub use header::Header;
pub use info_panel::InfoPanelWidget;
pub use scan_view::ScanView;
pub use schematic_panel::SchematicPanel;
pub use zoom_overlay::ZoomOverlayWidget;
