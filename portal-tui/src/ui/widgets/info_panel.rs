use crate::display::InfoPanel;
use crate::ui::theme::Theme;
use catalog::NO_SELECTION_MESSAGE;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

const RULE: &str = "\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}";

pub struct InfoPanelWidget<'a> {
    pub info: &'a InfoPanel,
    pub theme: &'a Theme,
}

impl Widget for InfoPanelWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let block = Block::default()
            .title(" Board Info ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.panel_border));

        let lines: Vec<Line> = match self.info {
            InfoPanel::Placeholder => vec![Line::styled(
                NO_SELECTION_MESSAGE,
                Style::default().fg(theme.muted),
            )],
            InfoPanel::Entry(rows) => rows
                .iter()
                .map(|(label, value)| match (label.is_empty(), value.is_empty()) {
                    (true, true) => Line::styled(RULE, Style::default().fg(theme.muted)),
                    (true, false) => {
                        Line::styled(value.clone(), Style::default().fg(theme.text_secondary))
                    }
                    (false, true) => Line::styled(
                        format!("{}:", label),
                        Style::default().fg(theme.info).add_modifier(Modifier::BOLD),
                    ),
                    (false, false) => Line::from(vec![
                        Span::styled(
                            format!("{}: ", label),
                            Style::default().fg(theme.info).add_modifier(Modifier::BOLD),
                        ),
                        Span::styled(value.clone(), Style::default().fg(theme.text_primary)),
                    ]),
                })
                .collect(),
        };

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
