use crate::display::ImageSlot;
use crate::scan::{ScanImage, ScanSide};
use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget},
};

const UPPER_HALF_BLOCK: &str = "\u{2580}";

pub const NO_IMAGE_MESSAGE: &str = "No image available";
pub const LOADING_MESSAGE: &str = "Loading\u{2026}";

/// Largest rectangle with the image's aspect ratio that fits `area`, centered.
///
/// A half-block cell holds two pixels stacked vertically, so the pixel grid
/// is `width x 2*height`.
fn fit(image: &ScanImage, area: Rect) -> Rect {
    if image.width() == 0 || image.height() == 0 || area.width == 0 || area.height == 0 {
        return Rect::new(area.x, area.y, 0, 0);
    }
    let grid_w = area.width as f32;
    let grid_h = area.height as f32 * 2.0;
    let scale = (grid_w / image.width() as f32).min(grid_h / image.height() as f32);

    let w = ((image.width() as f32 * scale).round() as u16).clamp(1, area.width);
    let h = (((image.height() as f32 * scale) / 2.0).round() as u16).clamp(1, area.height);
    Rect::new(
        area.x + (area.width - w) / 2,
        area.y + (area.height - h) / 2,
        w,
        h,
    )
}

/// Draw a scan with upper-half blocks: the foreground is the top pixel and
/// the background the bottom one.
pub(crate) fn render_scan(image: &ScanImage, area: Rect, buf: &mut Buffer) {
    let target = fit(image, area);
    if target.width == 0 || target.height == 0 {
        return;
    }
    let rows = target.height as f32 * 2.0;
    for cy in 0..target.height {
        for cx in 0..target.width {
            let fx = (cx as f32 + 0.5) / target.width as f32;
            let top = image.sample(fx, (cy as f32 * 2.0 + 0.5) / rows);
            let bottom = image.sample(fx, (cy as f32 * 2.0 + 1.5) / rows);
            buf[(target.x + cx, target.y + cy)]
                .set_symbol(UPPER_HALF_BLOCK)
                .set_fg(Color::Rgb(top[0], top[1], top[2]))
                .set_bg(Color::Rgb(bottom[0], bottom[1], bottom[2]));
        }
    }
}

pub(crate) fn render_message(message: &str, style: Style, area: Rect, buf: &mut Buffer) {
    if area.height == 0 {
        return;
    }
    let y = area.y + area.height / 2;
    Paragraph::new(Line::styled(message.to_string(), style))
        .alignment(Alignment::Center)
        .render(Rect::new(area.x, y, area.width, 1), buf);
}

/// One scan panel. Clicking it (or F2/F3) opens the zoom overlay.
pub struct ScanView<'a> {
    pub side: ScanSide,
    pub slot: &'a ImageSlot,
    pub theme: &'a Theme,
}

impl Widget for ScanView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let key = match self.side {
            ScanSide::Front => "F2",
            ScanSide::Back => "F3",
        };
        let border = if self.slot.image().is_some() {
            theme.panel_border
        } else {
            theme.panel_border_dimmed
        };
        let block = Block::default()
            .title(format!(" {} scan [{}] ", self.side.label(), key))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border));

        let inner = block.inner(area);
        block.render(area, buf);

        let muted = Style::default().fg(theme.muted);
        match self.slot {
            ImageSlot::Loaded(image) => render_scan(image, inner, buf),
            ImageSlot::Pending => render_message(LOADING_MESSAGE, muted, inner, buf),
            ImageSlot::Missing | ImageSlot::Empty => {
                render_message(NO_IMAGE_MESSAGE, muted, inner, buf)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};
    use std::sync::Arc;

    fn text(buf: &Buffer) -> String {
        buf.content.iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_fit_keeps_aspect_ratio() {
        let image = ScanImage::from_rgb("x", RgbImage::new(100, 100));
        // 40x10 cells is a 40x20 pixel grid
        let target = fit(&image, Rect::new(0, 0, 40, 10));
        assert_eq!((target.width, target.height), (20, 10));
        assert_eq!(target.x, 10);
    }

    #[test]
    fn test_loaded_scan_draws_half_blocks() {
        let theme = Theme::dark();
        let mut img = RgbImage::from_pixel(2, 2, Rgb([10, 20, 30]));
        img.put_pixel(0, 1, Rgb([200, 0, 0]));
        img.put_pixel(1, 1, Rgb([200, 0, 0]));
        let slot = ImageSlot::Loaded(Arc::new(ScanImage::from_rgb("x", img)));

        let area = Rect::new(0, 0, 4, 3);
        let mut buf = Buffer::empty(area);
        ScanView {
            side: ScanSide::Front,
            slot: &slot,
            theme: &theme,
        }
        .render(area, &mut buf);

        // inner area is 2x1 cells, i.e. the 2x2 image exactly
        let cell = &buf[(1, 1)];
        assert_eq!(cell.symbol(), UPPER_HALF_BLOCK);
        assert_eq!(cell.fg, Color::Rgb(10, 20, 30));
        assert_eq!(cell.bg, Color::Rgb(200, 0, 0));
    }

    #[test]
    fn test_placeholders() {
        let theme = Theme::dark();
        let area = Rect::new(0, 0, 30, 5);

        let mut buf = Buffer::empty(area);
        ScanView {
            side: ScanSide::Back,
            slot: &ImageSlot::Pending,
            theme: &theme,
        }
        .render(area, &mut buf);
        assert!(text(&buf).contains("Loading"));

        let mut buf = Buffer::empty(area);
        ScanView {
            side: ScanSide::Back,
            slot: &ImageSlot::Missing,
            theme: &theme,
        }
        .render(area, &mut buf);
        assert!(text(&buf).contains(NO_IMAGE_MESSAGE));
        assert!(text(&buf).contains("Back scan"));
    }
}
