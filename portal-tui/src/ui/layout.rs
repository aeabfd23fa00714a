//! Screen layout and mouse hit-testing.

use catalog::Direction;
use ratatui::layout::{self, Constraint, Layout, Rect};

/// Width of the board list column, borders included.
const LIST_WIDTH: u16 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortalLayout {
    pub header: Rect,
    pub list: Rect,
    pub front: Rect,
    pub back: Rect,
    pub schematic: Rect,
    pub info: Rect,
    pub status: Rect,
}

pub fn portal_layout(area: Rect) -> PortalLayout {
    let rows = Layout::default()
        .direction(layout::Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    let body = Layout::default()
        .direction(layout::Direction::Horizontal)
        .constraints([Constraint::Length(LIST_WIDTH), Constraint::Min(0)])
        .split(rows[1]);

    let right = Layout::default()
        .direction(layout::Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(body[1]);

    let scans = Layout::default()
        .direction(layout::Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(right[0]);

    let lower = Layout::default()
        .direction(layout::Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(right[1]);

    PortalLayout {
        header: rows[0],
        list: body[0],
        front: scans[0],
        back: scans[1],
        schematic: lower[0],
        info: lower[1],
        status: rows[2],
    }
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

/// Where things landed in the last frame.
#[derive(Debug, Clone, Default)]
pub struct HitMap {
    pub list: Rect,
    /// First list row visible after scrolling.
    pub list_offset: usize,
    pub list_len: usize,
    pub front: Rect,
    pub back: Rect,
    pub schematic: Rect,
    /// Header controls; clicks on them only count while navigation is enabled.
    pub prev: Rect,
    pub next: Rect,
    pub nav_enabled: bool,
}

impl HitMap {
    pub fn new(layout: &PortalLayout, list_offset: usize, list_len: usize) -> Self {
        Self {
            list: layout.list,
            list_offset,
            list_len,
            front: layout.front,
            back: layout.back,
            schematic: layout.schematic,
            ..Default::default()
        }
    }

    pub fn with_nav_controls(mut self, prev: Rect, next: Rect, nav_enabled: bool) -> Self {
        self.prev = prev;
        self.next = next;
        self.nav_enabled = nav_enabled;
        self
    }

    pub fn nav_at(&self, column: u16, row: u16) -> Option<Direction> {
        if !self.nav_enabled {
            return None;
        }
        if contains(self.prev, column, row) {
            Some(Direction::Previous)
        } else if contains(self.next, column, row) {
            Some(Direction::Next)
        } else {
            None
        }
    }

    /// Filtered-list row under the cursor, ignoring the list border.
    pub fn list_row_at(&self, column: u16, row: u16) -> Option<usize> {
        if self.list.width < 2 || self.list.height < 2 {
            return None;
        }
        let inner = Rect::new(
            self.list.x + 1,
            self.list.y + 1,
            self.list.width - 2,
            self.list.height - 2,
        );
        if !contains(inner, column, row) {
            return None;
        }
        let index = (row - inner.y) as usize + self.list_offset;
        (index < self.list_len).then_some(index)
    }

    pub fn scan_at(&self, column: u16, row: u16) -> Option<crate::scan::ScanSide> {
        use crate::scan::ScanSide;
        if contains(self.front, column, row) {
            Some(ScanSide::Front)
        } else if contains(self.back, column, row) {
            Some(ScanSide::Back)
        } else {
            None
        }
    }

    pub fn in_schematic(&self, column: u16, row: u16) -> bool {
        contains(self.schematic, column, row)
    }
}
