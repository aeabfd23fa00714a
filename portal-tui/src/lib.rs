//! Terminal browser for the PCB scan and schematic archive.
//!
//! The [`controller::CatalogController`] holds all state; the `ui` module
//! draws it and feeds it input events, and [`probe::ProbeDispatcher`] fetches
//! assets in the background.

pub mod config;
pub mod controller;
pub mod display;
pub mod input;
pub mod overlay;
pub mod probe;
pub mod report;
pub mod scan;
pub mod schematic;
pub mod ui;

pub use controller::CatalogController;
pub use input::InputEvent;
