use super::scan_view::{render_message, render_scan};
use crate::overlay::ZoomOverlay;
use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear, Widget},
};

pub const DISMISS_HINT: &str = "Esc or click anywhere to close";

/// Full-screen view of one scan, drawn over everything else.
pub struct ZoomOverlayWidget<'a> {
    pub overlay: &'a ZoomOverlay,
    pub theme: &'a Theme,
}

impl Widget for ZoomOverlayWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        Clear.render(area, buf);

        let block = Block::default()
            .title(format!(
                " {} scan: {} ",
                self.overlay.side.label(),
                self.overlay.image.path
            ))
            .borders(Borders::ALL)
            .border_style(
                Style::default()
                    .fg(theme.panel_border_focus)
                    .add_modifier(Modifier::BOLD),
            )
            .style(Style::default().bg(theme.overlay_bg));

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height < 2 {
            return;
        }
        let image_area = Rect::new(inner.x, inner.y, inner.width, inner.height - 1);
        let hint_area = Rect::new(inner.x, inner.y + inner.height - 1, inner.width, 1);

        render_scan(&self.overlay.image, image_area, buf);
        render_message(
            DISMISS_HINT,
            Style::default().fg(theme.overlay_hint),
            hint_area,
            buf,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overlay::KeyListeners;
    use crate::scan::{ScanImage, ScanSide};
    use image::{Rgb, RgbImage};
    use std::sync::Arc;

    #[test]
    fn test_overlay_covers_screen_and_shows_hint() {
        let theme = Theme::dark();
        let mut listeners = KeyListeners::default();
        let image = Arc::new(ScanImage::from_rgb(
            "A/scans/front.png",
            RgbImage::from_pixel(4, 4, Rgb([0, 255, 0])),
        ));
        let overlay = ZoomOverlay::open(ScanSide::Front, image, &mut listeners);

        let area = Rect::new(0, 0, 40, 12);
        let mut buf = Buffer::empty(area);
        buf.set_string(5, 5, "underneath", Style::default());
        ZoomOverlayWidget {
            overlay: &overlay,
            theme: &theme,
        }
        .render(area, &mut buf);

        let rendered: String = buf.content.iter().map(|c| c.symbol()).collect();
        assert!(!rendered.contains("underneath"));
        assert!(rendered.contains(DISMISS_HINT));
        assert!(rendered.contains("Front scan"));
    }
}
