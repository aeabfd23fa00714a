//! Asynchronous asset probes.
//!
//! Each probe runs as its own tokio task and reports back over a channel. The
//! ticket it carries lets the controller recognise results that belong to an
//! earlier selection and drop them.

use crate::scan::{ScanImage, ScanSide};
use asset_client::{AssetSource, Bytes};
use catalog::{path_for, AssetKind};
use std::sync::Arc;
use tokio::sync::mpsc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProbeTarget {
    Scan(ScanSide),
    Schematic,
}

impl ProbeTarget {
    pub fn kind(&self) -> AssetKind {
        match self {
            ProbeTarget::Scan(side) => side.kind(),
            ProbeTarget::Schematic => AssetKind::Schematic,
        }
    }
}

/// Identifies which selection a probe was issued for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeTicket {
    pub generation: u64,
    pub entry: String,
    pub target: ProbeTarget,
    pub path: String,
}

impl ProbeTicket {
    pub fn new(generation: u64, entry: &str, target: ProbeTarget) -> Self {
        Self {
            generation,
            entry: entry.to_string(),
            target,
            path: path_for(entry, target.kind()),
        }
    }
}

#[derive(Debug, Clone)]
pub enum ProbeOutcome {
    Scan(Arc<ScanImage>),
    Schematic(Bytes),
    /// Absent, unreachable or undecodable.
    Missing(String),
}

#[derive(Debug, Clone)]
pub struct ProbeCompletion {
    pub ticket: ProbeTicket,
    pub outcome: ProbeOutcome,
}

/// Fetch (and for scans, decode) the asset named by `ticket`.
pub async fn run_probe(source: &dyn AssetSource, ticket: ProbeTicket) -> ProbeCompletion {
    let outcome = match source.fetch(&ticket.path).await {
        Ok(bytes) => match ticket.target {
            ProbeTarget::Schematic => ProbeOutcome::Schematic(bytes),
            ProbeTarget::Scan(_) => decode_scan(&ticket.path, bytes).await,
        },
        Err(e) if e.is_not_found() => {
            tracing::debug!(path = %ticket.path, "Asset not present");
            ProbeOutcome::Missing(e.to_string())
        }
        Err(e) => {
            tracing::warn!(path = %ticket.path, "Asset probe failed: {}", e);
            ProbeOutcome::Missing(e.to_string())
        }
    };

    ProbeCompletion { ticket, outcome }
}

async fn decode_scan(path: &str, bytes: Bytes) -> ProbeOutcome {
    let owned_path = path.to_string();
    let decoded =
        tokio::task::spawn_blocking(move || ScanImage::decode(&owned_path, &bytes)).await;
    match decoded {
        Ok(Ok(image)) => ProbeOutcome::Scan(Arc::new(image)),
        Ok(Err(e)) => {
            tracing::debug!(path = %path, "{}", e);
            ProbeOutcome::Missing(e.to_string())
        }
        Err(e) => {
            tracing::warn!(path = %path, "Scan decode task failed: {}", e);
            ProbeOutcome::Missing(e.to_string())
        }
    }
}

/// Spawns probe tasks against one asset source.
#[derive(Clone)]
pub struct ProbeDispatcher {
    source: Arc<dyn AssetSource>,
    tx: mpsc::UnboundedSender<ProbeCompletion>,
}

impl ProbeDispatcher {
    pub fn new(
        source: Arc<dyn AssetSource>,
    ) -> (Self, mpsc::UnboundedReceiver<ProbeCompletion>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { source, tx }, rx)
    }

    pub fn dispatch(&self, tickets: Vec<ProbeTicket>) {
        for ticket in tickets {
            let source = Arc::clone(&self.source);
            let tx = self.tx.clone();
            tracing::debug!(
                generation = ticket.generation,
                path = %ticket.path,
                "Dispatching probe"
            );
            tokio::spawn(async move {
                let completion = run_probe(source.as_ref(), ticket).await;
                // Receiver gone means the UI is shutting down.
                let _ = tx.send(completion);
            });
        }
    }
}
