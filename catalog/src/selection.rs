//! Search, selection and navigation over the catalog.
//!
//! `CatalogState` is the selection state machine: it starts `Unselected`,
//! moves to `Selected` through an explicit selection or a navigation step, and
//! falls back to `Unselected` when a new search term filters the selected
//! board out. The filtered view is always recomputed from the full table.

use crate::entry::{Catalog, CatalogEntry};
use crate::filter::filter_indices;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

/// Index into the full catalog of the board shown in detail, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Unselected,
    Selected(usize),
}

/// Outcome of a state change, so the display knows whether to refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionChange {
    /// Selection is the same entry as before (it may sit at a new row).
    Unchanged,
    /// An entry was (re)selected; carries its catalog index.
    Selected(usize),
    /// The previous selection was filtered out.
    Cleared,
}

#[derive(Debug, Clone)]
pub struct CatalogState {
    catalog: Catalog,
    filtered: Vec<usize>,
    search_term: String,
    selection: Selection,
}

impl CatalogState {
    pub fn new(catalog: Catalog) -> Self {
        let filtered = (0..catalog.len()).collect();
        Self {
            catalog,
            filtered,
            search_term: String::new(),
            selection: Selection::Unselected,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Catalog indices of the filtered view, in table order.
    pub fn filtered_indices(&self) -> &[usize] {
        &self.filtered
    }

    pub fn filtered_entries(&self) -> impl Iterator<Item = &CatalogEntry> + '_ {
        self.filtered.iter().filter_map(|&i| self.catalog.get(i))
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn selected_entry(&self) -> Option<&CatalogEntry> {
        match self.selection {
            Selection::Selected(index) => self.catalog.get(index),
            Selection::Unselected => None,
        }
    }

    /// Row of the selected entry in the filtered view.
    pub fn selected_filtered_index(&self) -> Option<usize> {
        let name = &self.selected_entry()?.name;
        self.filtered_position(name)
    }

    /// Previous/next controls are usable whenever the filtered view has rows.
    pub fn nav_enabled(&self) -> bool {
        !self.filtered.is_empty()
    }

    fn filtered_position(&self, name: &str) -> Option<usize> {
        self.filtered
            .iter()
            .position(|&i| self.catalog.get(i).is_some_and(|e| e.name == name))
    }

    pub fn set_search_term(&mut self, term: &str) -> SelectionChange {
        self.search_term = term.to_string();
        self.filtered = filter_indices(self.catalog.entries(), term);

        let Some(name) = self.selected_entry().map(|e| e.name.clone()) else {
            return SelectionChange::Unchanged;
        };

        if self.filtered_position(&name).is_some() {
            SelectionChange::Unchanged
        } else {
            self.selection = Selection::Unselected;
            SelectionChange::Cleared
        }
    }

    /// Select the row `filtered_index` of the filtered view. Out-of-range rows
    /// are ignored.
    pub fn select_by_filtered_index(&mut self, filtered_index: usize) -> SelectionChange {
        match self.filtered.get(filtered_index) {
            Some(&index) => {
                self.selection = Selection::Selected(index);
                SelectionChange::Selected(index)
            }
            None => SelectionChange::Unchanged,
        }
    }

    /// Step through the filtered view, wrapping at both ends. Without a
    /// selection, `Next` enters at the first row and `Previous` at the last.
    pub fn navigate(&mut self, direction: Direction) -> SelectionChange {
        let len = self.filtered.len();
        if len == 0 {
            return SelectionChange::Unchanged;
        }

        let target = match self.selected_filtered_index() {
            None => match direction {
                Direction::Next => 0,
                Direction::Previous => len - 1,
            },
            Some(current) => match direction {
                Direction::Next => (current + 1) % len,
                Direction::Previous => (current + len - 1) % len,
            },
        };

        self.select_by_filtered_index(target)
    }
}

impl Default for CatalogState {
    fn default() -> Self {
        Self::new(Catalog::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three() -> CatalogState {
        CatalogState::new(
            Catalog::new(vec![
                CatalogEntry::new("A", true, false, "alpha board"),
                CatalogEntry::new("B", false, false, "beta board"),
                CatalogEntry::new("C", false, true, "gamma board"),
            ])
            .unwrap(),
        )
    }

    fn selected_name(state: &CatalogState) -> Option<&str> {
        state.selected_entry().map(|e| e.name.as_str())
    }

    #[test]
    fn test_initial_state_unselected_and_unfiltered() {
        let state = three();
        assert_eq!(state.selection(), Selection::Unselected);
        assert_eq!(state.filtered_indices(), &[0, 1, 2]);
        assert!(state.nav_enabled());
    }

    #[test]
    fn test_select_out_of_range_is_noop() {
        let mut state = three();
        assert_eq!(state.select_by_filtered_index(3), SelectionChange::Unchanged);
        assert_eq!(state.selection(), Selection::Unselected);
    }

    #[test]
    fn test_select_uses_filtered_row() {
        let mut state = three();
        state.set_search_term("gamma");
        assert_eq!(state.select_by_filtered_index(0), SelectionChange::Selected(2));
        assert_eq!(selected_name(&state), Some("C"));
    }

    #[test]
    fn test_previous_from_unselected_selects_last() {
        let mut state = three();
        state.navigate(Direction::Previous);
        assert_eq!(selected_name(&state), Some("C"));
        state.navigate(Direction::Next);
        assert_eq!(selected_name(&state), Some("A"));
    }

    #[test]
    fn test_next_from_unselected_selects_first() {
        let mut state = three();
        state.navigate(Direction::Next);
        assert_eq!(selected_name(&state), Some("A"));
        state.navigate(Direction::Previous);
        assert_eq!(selected_name(&state), Some("C"));
    }

    #[test]
    fn test_navigate_empty_filter_is_noop() {
        let mut state = three();
        state.set_search_term("nothing matches");
        assert!(!state.nav_enabled());
        assert_eq!(state.navigate(Direction::Next), SelectionChange::Unchanged);
        assert_eq!(state.selection(), Selection::Unselected);
    }

    #[test]
    fn test_navigate_single_entry_stays_selected() {
        let mut state = three();
        state.set_search_term("beta");
        state.navigate(Direction::Next);
        assert_eq!(selected_name(&state), Some("B"));
        state.navigate(Direction::Next);
        assert_eq!(selected_name(&state), Some("B"));
        state.navigate(Direction::Previous);
        assert_eq!(selected_name(&state), Some("B"));
    }

    #[test]
    fn test_filter_keeps_visible_selection_at_new_row() {
        let mut state = three();
        state.select_by_filtered_index(2);
        assert_eq!(state.set_search_term("a board"), SelectionChange::Unchanged);
        // "alpha board", "beta board", "gamma board" all contain "a board"
        assert_eq!(state.selected_filtered_index(), Some(2));

        assert_eq!(state.set_search_term("gamma"), SelectionChange::Unchanged);
        assert_eq!(state.selected_filtered_index(), Some(0));
        assert_eq!(selected_name(&state), Some("C"));
    }

    #[test]
    fn test_filter_clears_hidden_selection() {
        let mut state = three();
        state.select_by_filtered_index(0);
        // "b" alone would still match every "... board" description
        assert_eq!(state.set_search_term("beta"), SelectionChange::Cleared);
        assert_eq!(state.selection(), Selection::Unselected);
        assert_eq!(state.filtered_indices(), &[1]);
    }

    #[test]
    fn test_filter_is_not_cumulative() {
        let mut state = three();
        state.set_search_term("alpha");
        assert_eq!(state.filtered_indices(), &[0]);
        state.set_search_term("gamma");
        assert_eq!(state.filtered_indices(), &[2]);
        state.set_search_term("");
        assert_eq!(state.filtered_indices(), &[0, 1, 2]);
    }
}
