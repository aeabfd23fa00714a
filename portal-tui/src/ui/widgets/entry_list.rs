use crate::ui::theme::Theme;
use catalog::{CatalogEntry, SCHEMATIC_MARKER};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, StatefulWidget},
};

/// The filtered board list. Boards with a schematic carry the marker.
pub struct EntryList<'a> {
    pub entries: Vec<&'a CatalogEntry>,
    pub theme: &'a Theme,
}

impl StatefulWidget for EntryList<'_> {
    type State = ListState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut ListState) {
        let theme = self.theme;
        let title = format!(" Boards ({}) ", self.entries.len());

        let items: Vec<ListItem> = self
            .entries
            .iter()
            .map(|entry| {
                let marker = if entry.has_schematic {
                    Span::styled(
                        format!("{} ", SCHEMATIC_MARKER),
                        Style::default().fg(theme.schematic_marker),
                    )
                } else {
                    Span::raw("   ")
                };
                ListItem::new(Line::from(vec![
                    marker,
                    Span::styled(entry.name.clone(), Style::default().fg(theme.text_primary)),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.panel_border)),
            )
            .highlight_style(
                Style::default()
                    .fg(theme.list_highlight)
                    .bg(theme.list_highlight_bg)
                    .add_modifier(Modifier::BOLD),
            );

        StatefulWidget::render(list, area, buf, state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect()
    }

    #[test]
    fn test_marker_only_on_schematic_boards() {
        let theme = Theme::dark();
        let a = CatalogEntry::new("DMG-A02", true, true, "");
        let b = CatalogEntry::new("DMG-A03", false, false, "");
        let area = Rect::new(0, 0, 20, 4);
        let mut buf = Buffer::empty(area);
        let mut state = ListState::default();

        EntryList {
            entries: vec![&a, &b],
            theme: &theme,
        }
        .render(area, &mut buf, &mut state);

        assert!(row_text(&buf, 1).contains(SCHEMATIC_MARKER));
        assert!(row_text(&buf, 1).contains("DMG-A02"));
        assert!(!row_text(&buf, 2).contains(SCHEMATIC_MARKER));
        assert!(row_text(&buf, 2).contains("DMG-A03"));
    }

    #[test]
    fn test_selected_row_is_highlighted() {
        let theme = Theme::dark();
        let a = CatalogEntry::new("A", false, false, "");
        let b = CatalogEntry::new("B", false, false, "");
        let area = Rect::new(0, 0, 20, 4);
        let mut buf = Buffer::empty(area);
        let mut state = ListState::default().with_selected(Some(1));

        EntryList {
            entries: vec![&a, &b],
            theme: &theme,
        }
        .render(area, &mut buf, &mut state);

        assert_eq!(buf[(4, 2)].bg, theme.list_highlight_bg);
        assert_ne!(buf[(4, 1)].bg, theme.list_highlight_bg);
    }
}
