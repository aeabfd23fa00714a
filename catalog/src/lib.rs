//! Board catalog core.
//!
//! Holds the fixed table of board revisions, the search filter, the
//! selection/navigation state machine and the asset path conventions. Nothing
//! in here touches the terminal or the network, so the same state can drive
//! any display surface.

pub mod builtin;
pub mod entry;
pub mod filter;
pub mod info;
pub mod paths;
pub mod selection;

pub use entry::{Catalog, CatalogEntry, CatalogError};
pub use filter::{filter_indices, matches_term};
pub use info::{info_lines, NO_SELECTION_MESSAGE, NO_SELECTION_TITLE, SCHEMATIC_MARKER};
pub use paths::{path_for, AssetKind};
pub use selection::{CatalogState, Direction, Selection, SelectionChange};
