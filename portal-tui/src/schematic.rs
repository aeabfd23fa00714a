//! Schematic viewer host.
//!
//! The viewer itself is a pluggable component: it is handed the schematic
//! path and bytes, draws itself into a panel, and reports when it could not
//! make sense of the file. The host keeps at most one viewer alive and always
//! tears the old one down before creating the next.

use crate::ui::theme::Theme;
use asset_client::Bytes;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub trait SchematicViewer: Send {
    fn path(&self) -> &str;

    /// Set when the viewer could not render the file.
    fn error(&self) -> Option<&str>;

    fn scroll(&mut self, delta: i32);

    fn render(&self, area: Rect, buf: &mut Buffer, theme: &Theme);

    /// Release whatever the viewer holds. Called exactly once, before drop.
    fn teardown(&mut self) {}
}

pub trait ViewerFactory: Send {
    fn create(&self, path: &str, contents: Bytes) -> Box<dyn SchematicViewer>;
}

pub struct ViewerHost {
    factory: Box<dyn ViewerFactory>,
    current: Option<Box<dyn SchematicViewer>>,
    mounted_total: u64,
}

impl ViewerHost {
    pub fn new(factory: Box<dyn ViewerFactory>) -> Self {
        Self {
            factory,
            current: None,
            mounted_total: 0,
        }
    }

    /// Replace the live viewer with one for `path`.
    ///
    /// On failure no viewer is left mounted and the viewer's error is returned.
    pub fn mount(&mut self, path: &str, contents: Bytes) -> Result<(), String> {
        self.clear();

        let mut viewer = self.factory.create(path, contents);
        if let Some(err) = viewer.error() {
            let err = err.to_string();
            viewer.teardown();
            return Err(err);
        }

        self.mounted_total += 1;
        tracing::debug!(path = %path, "Schematic viewer mounted");
        self.current = Some(viewer);
        Ok(())
    }

    pub fn clear(&mut self) {
        if let Some(mut viewer) = self.current.take() {
            tracing::debug!(path = %viewer.path(), "Schematic viewer torn down");
            viewer.teardown();
        }
    }

    pub fn current(&self) -> Option<&dyn SchematicViewer> {
        self.current.as_deref()
    }

    pub fn current_mut(&mut self) -> Option<&mut (dyn SchematicViewer + 'static)> {
        self.current.as_deref_mut()
    }

    pub fn is_mounted(&self) -> bool {
        self.current.is_some()
    }

    /// Number of viewers successfully mounted over the session.
    pub fn mounted_total(&self) -> u64 {
        self.mounted_total
    }
}

impl Drop for ViewerHost {
    fn drop(&mut self) {
        self.clear();
    }
}

/// Shows a schematic as scrollable text.
pub struct TextSchematicViewer {
    path: String,
    lines: Vec<String>,
    offset: usize,
    error: Option<String>,
}

impl TextSchematicViewer {
    pub fn new(path: &str, contents: &[u8]) -> Self {
        let (lines, error) = match std::str::from_utf8(contents) {
            Ok(text) if text.trim().is_empty() => (Vec::new(), Some("empty schematic file".to_string())),
            Ok(text) => (text.lines().map(str::to_string).collect(), None),
            Err(e) => (Vec::new(), Some(format!("not a text schematic: {}", e))),
        };
        Self {
            path: path.to_string(),
            lines,
            offset: 0,
            error,
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

impl SchematicViewer for TextSchematicViewer {
    fn path(&self) -> &str {
        &self.path
    }

    fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn scroll(&mut self, delta: i32) {
        let max = self.lines.len().saturating_sub(1);
        let next = self.offset as i64 + delta as i64;
        self.offset = next.clamp(0, max as i64) as usize;
    }

    fn render(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        if area.height == 0 {
            return;
        }

        let mut lines = vec![Line::from(vec![
            Span::styled(
                self.path.clone(),
                Style::default()
                    .fg(theme.info)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {} lines", self.lines.len()),
                Style::default().fg(theme.muted),
            ),
        ])];

        let body_height = area.height.saturating_sub(1) as usize;
        lines.extend(
            self.lines
                .iter()
                .skip(self.offset)
                .take(body_height)
                .map(|l| Line::styled(l.clone(), Style::default().fg(theme.text_primary))),
        );

        Paragraph::new(lines).render(area, buf);
    }

    fn teardown(&mut self) {
        self.lines.clear();
        self.offset = 0;
    }
}

pub struct TextViewerFactory;

impl ViewerFactory for TextViewerFactory {
    fn create(&self, path: &str, contents: Bytes) -> Box<dyn SchematicViewer> {
        Box::new(TextSchematicViewer::new(path, &contents))
    }
}
