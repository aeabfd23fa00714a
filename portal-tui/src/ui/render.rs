use super::layout::{portal_layout, HitMap};
use super::theme::Theme;
use super::widgets::{EntryList, Header, InfoPanelWidget, ScanView, SchematicPanel, ZoomOverlayWidget};
use crate::controller::CatalogController;
use crate::scan::ScanSide;
use ratatui::{
    style::Style,
    text::{Line, Span},
    widgets::{ListState, Paragraph},
    Frame,
};

const KEY_HINTS: &str =
    " \u{2190}/\u{2192} navigate  F2/F3 zoom  PgUp/PgDn scroll  Ctrl+U clear  F5 theme  Ctrl+Q quit";

/// Draw one frame and return where each clickable area ended up.
pub fn draw(
    frame: &mut Frame,
    controller: &CatalogController,
    list_state: &mut ListState,
    theme: &Theme,
    source: &str,
) -> HitMap {
    let layout = portal_layout(frame.area());
    let state = controller.state();
    let display = controller.display();

    let header = Header {
        title: &display.title,
        search: state.search_term(),
        matches: state.filtered_len(),
        total: state.catalog().len(),
        nav_enabled: display.nav_enabled,
        theme,
    };
    let (prev, next) = header.controls(layout.header);
    frame.render_widget(header, layout.header);

    list_state.select(state.selected_filtered_index());
    frame.render_stateful_widget(
        EntryList {
            entries: state.filtered_entries().collect(),
            theme,
        },
        layout.list,
        list_state,
    );

    for (side, area) in [(ScanSide::Front, layout.front), (ScanSide::Back, layout.back)] {
        frame.render_widget(
            ScanView {
                side,
                slot: display.slot(side),
                theme,
            },
            area,
        );
    }

    frame.render_widget(
        SchematicPanel {
            slot: display.schematic,
            viewer: controller.viewer().current(),
            theme,
        },
        layout.schematic,
    );

    frame.render_widget(
        InfoPanelWidget {
            info: &display.info,
            theme,
        },
        layout.info,
    );

    let status = Line::from(vec![
        Span::styled(KEY_HINTS, Style::default().fg(theme.muted)),
        Span::styled(
            format!("  \u{2502} {} \u{2502} {}", source, theme.name()),
            Style::default().fg(theme.text_secondary),
        ),
    ]);
    frame.render_widget(Paragraph::new(status), layout.status);

    if let Some(overlay) = controller.zoom() {
        frame.render_widget(ZoomOverlayWidget { overlay, theme }, frame.area());
    }

    HitMap::new(&layout, list_state.offset(), state.filtered_len())
        .with_nav_controls(prev, next, display.nav_enabled)
}
