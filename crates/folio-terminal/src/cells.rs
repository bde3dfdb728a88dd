//! Live command cells.
//!
//! A cell is a scrollback slot whose content arrives later from the
//! network. It starts `Pending` and transitions at most once, to `Resolved`
//! or `Failed`. Fetches run off the dispatch path; their results come back
//! as [`CellUpdate`] messages and are dropped if the cell has been
//! unmounted (by `clear`, Ctrl-L or a theme change) in the meantime.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;
use tokio::sync::mpsc::UnboundedSender;

use folio_net::Fetcher;
use folio_types::config::FetchConfig;
use folio_types::error::{FolioError, Result};

use crate::session::LineId;

/// Which remote resource a cell fetches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FetchKind {
    Joke,
    Waifu,
}

impl FetchKind {
    pub fn url(self, endpoints: &FetchConfig) -> &str {
        match self {
            Self::Joke => &endpoints.joke_url,
            Self::Waifu => &endpoints.waifu_url,
        }
    }

    /// Shown while the cell is pending.
    pub fn loading_text(self) -> &'static str {
        match self {
            Self::Joke => "Fetching a joke for you...",
            Self::Waifu => "Fetching waifu...",
        }
    }

    /// Shown when the fetch fails, whatever the cause.
    pub fn failure_text(self) -> &'static str {
        match self {
            Self::Joke => "Failed to fetch joke",
            Self::Waifu => "Failed to fetch waifu image",
        }
    }

    /// Turn the response document into a payload.
    pub fn decode(self, doc: &Value) -> Result<CellPayload> {
        match self {
            Self::Joke => decode_joke(doc).map(CellPayload::Joke),
            Self::Waifu => {
                let url = str_field(doc, "url")?;
                Ok(CellPayload::Image { url })
            }
        }
    }
}

/// A joke as served by JokeAPI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Joke {
    Single(String),
    TwoPart { setup: String, delivery: String },
}

/// Resolved content of a cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellPayload {
    Joke(Joke),
    /// Image reference; the host decides how to show it.
    Image { url: String },
}

/// Lifecycle of a cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellState {
    Pending(FetchKind),
    Resolved(CellPayload),
    /// Holds the user-facing failure text.
    Failed(String),
}

impl CellState {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending(_))
    }
}

/// Completion message posted by a background fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellUpdate {
    pub cell: LineId,
    /// Payload, or the user-facing failure text.
    pub result: std::result::Result<CellPayload, String>,
}

/// Starts the fetch behind a freshly mounted cell.
pub trait CellSpawner {
    fn spawn(&self, cell: LineId, kind: FetchKind);
}

/// Spawns each fetch as a tokio task and posts the outcome to a channel.
///
/// Must be used from inside a tokio runtime.
pub struct TokioCellSpawner {
    fetcher: Arc<dyn Fetcher>,
    endpoints: FetchConfig,
    tx: UnboundedSender<CellUpdate>,
}

impl TokioCellSpawner {
    pub fn new(
        fetcher: Arc<dyn Fetcher>,
        endpoints: FetchConfig,
        tx: UnboundedSender<CellUpdate>,
    ) -> Self {
        Self {
            fetcher,
            endpoints,
            tx,
        }
    }
}

impl CellSpawner for TokioCellSpawner {
    fn spawn(&self, cell: LineId, kind: FetchKind) {
        let fetcher = Arc::clone(&self.fetcher);
        let url = kind.url(&self.endpoints).to_string();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = match fetcher.get_json(&url).await.and_then(|doc| kind.decode(&doc)) {
                Ok(payload) => Ok(payload),
                Err(e) => {
                    log::warn!("{kind:?} cell {} failed: {e}", cell.get());
                    Err(kind.failure_text().to_string())
                }
            };
            // The receiver is gone only when the host is shutting down.
            if tx.send(CellUpdate { cell, result }).is_err() {
                log::trace!("cell {} finished after shutdown", cell.get());
            }
        });
    }
}

/// States of the currently mounted cells.
#[derive(Debug, Default)]
pub(crate) struct CellTable {
    cells: HashMap<LineId, CellState>,
}

impl CellTable {
    pub(crate) fn mount(&mut self, cell: LineId, kind: FetchKind) {
        self.cells.insert(cell, CellState::Pending(kind));
    }

    pub(crate) fn get(&self, cell: LineId) -> Option<&CellState> {
        self.cells.get(&cell)
    }

    /// Apply a completion. Returns false for unmounted or settled cells.
    pub(crate) fn settle(&mut self, update: CellUpdate) -> bool {
        let Some(state) = self.cells.get_mut(&update.cell) else {
            log::trace!("discarding update for unmounted cell {}", update.cell.get());
            return false;
        };
        if !state.is_pending() {
            log::trace!("cell {} already settled", update.cell.get());
            return false;
        }
        *state = match update.result {
            Ok(payload) => CellState::Resolved(payload),
            Err(text) => CellState::Failed(text),
        };
        true
    }

    pub(crate) fn unmount_all(&mut self) {
        self.cells.clear();
    }

    pub(crate) fn len(&self) -> usize {
        self.cells.len()
    }
}

fn decode_joke(doc: &Value) -> Result<Joke> {
    if doc.get("error").and_then(Value::as_bool) == Some(true) {
        let message = doc
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("unknown error");
        return Err(FolioError::Fetch(format!("joke service: {message}")));
    }
    match doc.get("type").and_then(Value::as_str) {
        Some("single") => Ok(Joke::Single(str_field(doc, "joke")?)),
        Some("twopart") => Ok(Joke::TwoPart {
            setup: str_field(doc, "setup")?,
            delivery: str_field(doc, "delivery")?,
        }),
        other => Err(FolioError::Fetch(format!("unexpected joke type: {other:?}"))),
    }
}

fn str_field(doc: &Value, field: &str) -> Result<String> {
    doc.get(field)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| FolioError::Fetch(format!("missing string field '{field}'")))
}
