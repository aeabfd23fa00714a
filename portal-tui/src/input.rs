//! Input events and their terminal key/mouse bindings.

use crate::scan::ScanSide;
use crate::ui::layout::HitMap;
use catalog::Direction;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// Keys that transient UI elements can bind to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPress {
    Escape,
    ScrollUp,
    ScrollDown,
}

/// Everything the controller reacts to, independent of the terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    SearchChanged(String),
    Navigate(Direction),
    ActivateItem(usize),
    ActivateImage(ScanSide),
    ClickOverlay,
    Key(KeyPress),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    Input(InputEvent),
    ToggleTheme,
    Quit,
}

/// Lines scrolled by PageUp / PageDown in the schematic panel.
pub const SCROLL_STEP: i32 = 10;

/// Map a key event, given the current search text.
pub fn map_key(key: KeyEvent, search: &str) -> Option<AppAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let event = match key.code {
        KeyCode::Char('c') | KeyCode::Char('q') if ctrl => return Some(AppAction::Quit),
        KeyCode::Char('u') if ctrl => InputEvent::SearchChanged(String::new()),
        KeyCode::Char(c) if !ctrl => {
            let mut term = search.to_string();
            term.push(c);
            InputEvent::SearchChanged(term)
        }
        KeyCode::Backspace => {
            let mut term = search.to_string();
            term.pop()?;
            InputEvent::SearchChanged(term)
        }
        KeyCode::Left | KeyCode::Up => InputEvent::Navigate(Direction::Previous),
        KeyCode::Right | KeyCode::Down => InputEvent::Navigate(Direction::Next),
        KeyCode::F(5) => return Some(AppAction::ToggleTheme),
        KeyCode::F(2) => InputEvent::ActivateImage(ScanSide::Front),
        KeyCode::F(3) => InputEvent::ActivateImage(ScanSide::Back),
        KeyCode::PageUp => InputEvent::Key(KeyPress::ScrollUp),
        KeyCode::PageDown => InputEvent::Key(KeyPress::ScrollDown),
        KeyCode::Esc => InputEvent::Key(KeyPress::Escape),
        _ => return None,
    };
    Some(AppAction::Input(event))
}

/// Map a mouse event against the areas of the last rendered frame.
pub fn map_mouse(event: MouseEvent, hits: &HitMap, overlay_open: bool) -> Option<InputEvent> {
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if overlay_open {
                return Some(InputEvent::ClickOverlay);
            }
            if let Some(direction) = hits.nav_at(event.column, event.row) {
                return Some(InputEvent::Navigate(direction));
            }
            if let Some(row) = hits.list_row_at(event.column, event.row) {
                return Some(InputEvent::ActivateItem(row));
            }
            hits.scan_at(event.column, event.row)
                .map(InputEvent::ActivateImage)
        }
        MouseEventKind::ScrollUp if hits.in_schematic(event.column, event.row) => {
            Some(InputEvent::Key(KeyPress::ScrollUp))
        }
        MouseEventKind::ScrollDown if hits.in_schematic(event.column, event.row) => {
            Some(InputEvent::Key(KeyPress::ScrollDown))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::layout::Rect;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_typing_extends_search() {
        assert_eq!(
            map_key(key(KeyCode::Char('a')), "DMG-"),
            Some(AppAction::Input(InputEvent::SearchChanged("DMG-a".to_string())))
        );
    }

    #[test]
    fn test_backspace_on_empty_search_is_ignored() {
        assert_eq!(map_key(key(KeyCode::Backspace), ""), None);
        assert_eq!(
            map_key(key(KeyCode::Backspace), "ab"),
            Some(AppAction::Input(InputEvent::SearchChanged("a".to_string())))
        );
    }

    #[test]
    fn test_arrows_navigate() {
        assert_eq!(
            map_key(key(KeyCode::Left), ""),
            Some(AppAction::Input(InputEvent::Navigate(Direction::Previous)))
        );
        assert_eq!(
            map_key(key(KeyCode::Down), ""),
            Some(AppAction::Input(InputEvent::Navigate(Direction::Next)))
        );
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(map_key(ctrl('c'), ""), Some(AppAction::Quit));
        assert_eq!(map_key(ctrl('q'), ""), Some(AppAction::Quit));
        assert_eq!(
            map_key(ctrl('u'), "abc"),
            Some(AppAction::Input(InputEvent::SearchChanged(String::new())))
        );
    }

    #[test]
    fn test_f5_toggles_theme() {
        assert_eq!(map_key(key(KeyCode::F(5)), ""), Some(AppAction::ToggleTheme));
    }

    #[test]
    fn test_function_keys_zoom() {
        assert_eq!(
            map_key(key(KeyCode::F(3)), ""),
            Some(AppAction::Input(InputEvent::ActivateImage(ScanSide::Back)))
        );
    }

    #[test]
    fn test_click_routes_to_overlay_when_open() {
        let hits = HitMap::default();
        assert_eq!(map_mouse(click(5, 5), &hits, true), Some(InputEvent::ClickOverlay));
    }

    #[test]
    fn test_click_on_list_row() {
        let hits = HitMap {
            list: Rect::new(0, 2, 20, 10),
            list_offset: 3,
            list_len: 15,
            ..Default::default()
        };
        // first row inside the border is y = 3
        assert_eq!(map_mouse(click(4, 4), &hits, false), Some(InputEvent::ActivateItem(4)));
    }

    #[test]
    fn test_click_on_scan() {
        let hits = HitMap {
            front: Rect::new(20, 2, 30, 10),
            back: Rect::new(50, 2, 30, 10),
            ..Default::default()
        };
        assert_eq!(
            map_mouse(click(60, 5), &hits, false),
            Some(InputEvent::ActivateImage(ScanSide::Back))
        );
        assert_eq!(map_mouse(click(100, 50), &hits, false), None);
    }

    #[test]
    fn test_click_on_header_controls() {
        let hits = HitMap::default().with_nav_controls(
            Rect::new(1, 1, 6, 1),
            Rect::new(50, 1, 6, 1),
            true,
        );
        assert_eq!(
            map_mouse(click(2, 1), &hits, false),
            Some(InputEvent::Navigate(Direction::Previous))
        );
        assert_eq!(
            map_mouse(click(55, 1), &hits, false),
            Some(InputEvent::Navigate(Direction::Next))
        );
        // overlay swallows the click
        assert_eq!(map_mouse(click(2, 1), &hits, true), Some(InputEvent::ClickOverlay));
    }

    #[test]
    fn test_disabled_header_controls_ignore_clicks() {
        let hits = HitMap::default().with_nav_controls(
            Rect::new(1, 1, 6, 1),
            Rect::new(50, 1, 6, 1),
            false,
        );
        assert_eq!(map_mouse(click(2, 1), &hits, false), None);
    }
}
