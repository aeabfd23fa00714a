use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Title bar with the search field and the previous/next controls.
pub struct Header<'a> {
    pub title: &'a str,
    pub search: &'a str,
    pub matches: usize,
    pub total: usize,
    pub nav_enabled: bool,
    pub theme: &'a Theme,
}

const PREV_LABEL: &str = "\u{25c0} Prev";
const NEXT_LABEL: &str = "Next \u{25b6}";

impl Header<'_> {
    fn block(&self) -> Block<'static> {
        let theme = self.theme;
        Block::default()
            .title(Span::styled(
                format!(" {} ", self.title),
                Style::default().fg(theme.title).add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.panel_border))
    }

    /// Everything up to and including the separator before the next control.
    fn leading_spans(&self) -> Vec<Span<'static>> {
        let theme = self.theme;
        let nav_style = self.nav_style();
        vec![
            Span::styled(PREV_LABEL, nav_style),
            Span::styled(" \u{2502} ", Style::default().fg(theme.muted)),
            Span::styled("Search: ", Style::default().fg(theme.text_secondary)),
            Span::styled(
                format!("{}\u{258f}", self.search),
                Style::default().fg(theme.text_primary),
            ),
            Span::styled(
                format!("  {}/{} boards ", self.matches, self.total),
                Style::default().fg(theme.muted),
            ),
            Span::styled("\u{2502} ", Style::default().fg(theme.muted)),
        ]
    }

    fn nav_style(&self) -> Style {
        if self.nav_enabled {
            Style::default()
                .fg(self.theme.info)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.theme.panel_border_dimmed)
        }
    }

    /// Screen areas of the previous and next controls when drawn into `area`.
    pub fn controls(&self, area: Rect) -> (Rect, Rect) {
        let inner = self.block().inner(area);
        let clip = |offset: usize, width: usize| {
            let x = inner.x.saturating_add(offset as u16).min(inner.right());
            let width = (width as u16).min(inner.right().saturating_sub(x));
            Rect::new(x, inner.y, width, inner.height.min(1))
        };

        let prev = clip(0, Span::raw(PREV_LABEL).width());
        let next_offset: usize = self.leading_spans().iter().map(Span::width).sum();
        let next = clip(next_offset, Span::raw(NEXT_LABEL).width());
        (prev, next)
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = self.block();
        let inner = block.inner(area);
        block.render(area, buf);

        let mut spans = self.leading_spans();
        spans.push(Span::styled(NEXT_LABEL, self.nav_style()));
        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect()
    }

    #[test]
    fn test_header_shows_title_and_search() {
        let theme = Theme::dark();
        let area = Rect::new(0, 0, 70, 3);
        let mut buf = Buffer::empty(area);
        Header {
            title: "DMG-A02",
            search: "a0",
            matches: 5,
            total: 15,
            nav_enabled: true,
            theme: &theme,
        }
        .render(area, &mut buf);

        assert!(row_text(&buf, 0).contains("DMG-A02"));
        let body = row_text(&buf, 1);
        assert!(body.contains("Search: a0"));
        assert!(body.contains("5/15 boards"));
    }

    #[test]
    fn test_disabled_nav_is_dimmed() {
        let theme = Theme::dark();
        let area = Rect::new(0, 0, 70, 3);
        let mut buf = Buffer::empty(area);
        Header {
            title: "Select a PCB Model",
            search: "zzz",
            matches: 0,
            total: 15,
            nav_enabled: false,
            theme: &theme,
        }
        .render(area, &mut buf);

        // first cell inside the border is the "◀" of the previous control
        assert_eq!(buf[(1, 1)].fg, theme.panel_border_dimmed);
    }

    #[test]
    fn test_controls_cover_drawn_labels() {
        let theme = Theme::dark();
        let area = Rect::new(0, 0, 80, 3);
        let header = Header {
            title: "DMG-A02",
            search: "dmg",
            matches: 15,
            total: 15,
            nav_enabled: true,
            theme: &theme,
        };
        let (prev, next) = header.controls(area);
        let mut buf = Buffer::empty(area);
        header.render(area, &mut buf);

        let text = |r: Rect| -> String {
            (r.x..r.x + r.width).map(|x| buf[(x, r.y)].symbol()).collect()
        };
        assert_eq!(text(prev), PREV_LABEL);
        assert_eq!(text(next), NEXT_LABEL);
        assert!(next.x > prev.x + prev.width);
    }
}
