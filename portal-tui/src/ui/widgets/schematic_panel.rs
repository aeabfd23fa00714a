use super::scan_view::{render_message, LOADING_MESSAGE};
use crate::display::SchematicSlot;
use crate::schematic::SchematicViewer;
use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Widget},
};

pub const NO_SCHEMATIC_MESSAGE: &str = "No schematic available";

pub struct SchematicPanel<'a> {
    pub slot: SchematicSlot,
    pub viewer: Option<&'a dyn SchematicViewer>,
    pub theme: &'a Theme,
}

impl Widget for SchematicPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let border = match self.slot {
            SchematicSlot::Mounted => theme.panel_border_focus,
            _ => theme.panel_border_dimmed,
        };
        let block = Block::default()
            .title(" Schematic [PgUp/PgDn] ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border));

        let inner = block.inner(area);
        block.render(area, buf);

        let muted = Style::default().fg(theme.muted);
        match (self.slot, self.viewer) {
            (SchematicSlot::Mounted, Some(viewer)) => viewer.render(inner, buf, theme),
            (SchematicSlot::Probing, _) => render_message(LOADING_MESSAGE, muted, inner, buf),
            _ => render_message(NO_SCHEMATIC_MESSAGE, muted, inner, buf),
        }
    }
}
