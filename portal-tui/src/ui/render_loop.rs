use super::layout::HitMap;
use super::render::draw;
use super::theme::Theme;
use crate::controller::CatalogController;
use crate::input::{map_key, map_mouse, AppAction};
use crate::probe::{ProbeCompletion, ProbeDispatcher};
use crate::schematic::TextViewerFactory;
use asset_client::AssetSource;
use catalog::Catalog;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, widgets::ListState, Terminal};
use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedReceiver;

type PortalTerminal = Terminal<CrosstermBackend<Stdout>>;

/// What woke the event loop.
enum Wake {
    Terminal(Event),
    Probe(ProbeCompletion),
    Tick,
}

pub async fn run_app(
    catalog: Catalog,
    source: Arc<dyn AssetSource>,
    theme: Theme,
) -> anyhow::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_portal(&mut terminal, catalog, source, theme).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

async fn run_portal(
    terminal: &mut PortalTerminal,
    catalog: Catalog,
    source: Arc<dyn AssetSource>,
    mut theme: Theme,
) -> anyhow::Result<()> {
    let source_label = source.describe();
    let (dispatcher, mut completions) = ProbeDispatcher::new(source);
    let mut controller = CatalogController::new(catalog, Box::new(TextViewerFactory));
    let mut list_state = ListState::default();
    let mut hits = HitMap::default();
    let mut term_events = EventStream::new();

    // Max frame rate (~30fps); input and probe results wake the loop early.
    let mut tick = tokio::time::interval(Duration::from_millis(33));

    tracing::info!(
        boards = controller.state().catalog().len(),
        source = %source_label,
        "Portal started"
    );

    loop {
        terminal.draw(|f| {
            hits = draw(f, &controller, &mut list_state, &theme, &source_label);
        })?;

        let wake = tokio::select! {
            biased;

            maybe_event = term_events.next() => {
                match maybe_event {
                    Some(Ok(ev)) => Wake::Terminal(ev),
                    Some(Err(e)) => {
                        tracing::warn!("Terminal event error: {}", e);
                        Wake::Tick
                    }
                    None => {
                        tracing::info!("Terminal event stream closed");
                        return Ok(());
                    }
                }
            }

            Some(completion) = completions.recv() => Wake::Probe(completion),

            _ = tick.tick() => Wake::Tick,
        };

        let action = match wake {
            Wake::Terminal(Event::Key(key)) => map_key(key, controller.state().search_term()),
            Wake::Terminal(Event::Mouse(mouse)) => {
                map_mouse(mouse, &hits, controller.zoom().is_some()).map(AppAction::Input)
            }
            Wake::Probe(completion) => {
                apply_completions(&mut controller, completion, &mut completions);
                None
            }
            Wake::Terminal(_) | Wake::Tick => None,
        };

        match action {
            Some(AppAction::Quit) => {
                tracing::info!("Quit requested");
                return Ok(());
            }
            Some(AppAction::ToggleTheme) => {
                theme.toggle();
                tracing::debug!(theme = theme.name(), "Theme toggled");
            }
            Some(AppAction::Input(event)) => {
                let probes = controller.handle(event);
                dispatcher.dispatch(probes);
            }
            None => {}
        }
    }
}

/// Apply one completion plus whatever else is already queued.
fn apply_completions(
    controller: &mut CatalogController,
    first: ProbeCompletion,
    completions: &mut UnboundedReceiver<ProbeCompletion>,
) {
    controller.apply(first);
    while let Ok(next) = completions.try_recv() {
        controller.apply(next);
    }
}
