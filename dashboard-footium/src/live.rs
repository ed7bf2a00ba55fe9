//! Footium live-score feed client
//!
//! Opens one SSE stream per match id and broadcasts normalized updates.
//! Every frame carries a full match snapshot; there is no incremental
//! merging. The feed does not reconnect on its own — on transport failure
//! it emits a disconnected state and ends, leaving the retry decision to
//! the caller.

use std::collections::HashMap;

use futures_util::StreamExt;
use serde::Deserialize;
use tokio::sync::{broadcast, mpsc};
use tracing::{debug, error, info, warn};

use dashboard_core::{DashboardResult, LiveMatch};

/// Base URL for the live match score SSE endpoint
const FOOTIUM_LIVE_BASE: &str = "https://live.api.footium.club/api/sse/all_live_match_scores";

/// Capacity of the update broadcast channel
const UPDATE_CHANNEL_CAPACITY: usize = 256;

/// Normalized update from the live feed
#[derive(Debug, Clone)]
pub enum LiveUpdate {
    /// Full replacement of the match snapshot
    Snapshot(LiveMatch),
    /// Transport state change
    ConnectionState {
        connected: bool,
        error: Option<String>,
    },
}

/// One envelope of the feed's JSON array payload
#[derive(Debug, Clone, Deserialize)]
struct UpdateEnvelope {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    value: HashMap<String, serde_json::Value>,
}

/// Configuration for the live feed connection
#[derive(Debug, Clone)]
pub struct LiveFeedConfig {
    pub base_url: String,
}

impl Default for LiveFeedConfig {
    fn default() -> Self {
        Self {
            base_url: FOOTIUM_LIVE_BASE.to_string(),
        }
    }
}

/// Live-score feed client, scoped to one match id
pub struct LiveScoreFeed {
    config: LiveFeedConfig,
    match_id: String,
    /// Channel to broadcast updates to subscribers
    update_tx: broadcast::Sender<LiveUpdate>,
    /// Held while the connection task runs; dropping it tears the task down
    shutdown_tx: Option<mpsc::Sender<()>>,
}

impl LiveScoreFeed {
    /// Create a feed for one match id
    pub fn new(match_id: impl Into<String>) -> (Self, broadcast::Receiver<LiveUpdate>) {
        Self::with_config(match_id, LiveFeedConfig::default())
    }

    pub fn with_config(
        match_id: impl Into<String>,
        config: LiveFeedConfig,
    ) -> (Self, broadcast::Receiver<LiveUpdate>) {
        let (update_tx, update_rx) = broadcast::channel(UPDATE_CHANNEL_CAPACITY);
        (
            Self {
                config,
                match_id: match_id.into(),
                update_tx,
                shutdown_tx: None,
            },
            update_rx,
        )
    }

    pub fn match_id(&self) -> &str {
        &self.match_id
    }

    pub fn subscribe(&self) -> broadcast::Receiver<LiveUpdate> {
        self.update_tx.subscribe()
    }

    /// Open the SSE stream and spawn the connection task
    pub fn start(&mut self) -> DashboardResult<()> {
        let (shutdown_tx, shutdown_rx) = mpsc::channel::<()>(1);
        self.shutdown_tx = Some(shutdown_tx);

        let url = format!("{}/{}", self.config.base_url, self.match_id);
        let match_id = self.match_id.clone();
        let update_tx = self.update_tx.clone();

        tokio::spawn(async move {
            Self::connection_task(url, match_id, update_tx, shutdown_rx).await;
        });

        Ok(())
    }

    /// Tear the connection down; safe to call more than once
    pub async fn close(&mut self) {
        if let Some(shutdown_tx) = self.shutdown_tx.take() {
            let _ = shutdown_tx.send(()).await;
        }
    }

    async fn connection_task(
        url: String,
        match_id: String,
        update_tx: broadcast::Sender<LiveUpdate>,
        mut shutdown_rx: mpsc::Receiver<()>,
    ) {
        info!("[Live feed] Connecting to {}", url);

        let client = reqwest::Client::new();
        let response = match client
            .get(&url)
            .header("Accept", "text/event-stream")
            .send()
            .await
        {
            Ok(r) => r,
            Err(e) => {
                error!("[Live feed] Connection failed: {}", e);
                let _ = update_tx.send(LiveUpdate::ConnectionState {
                    connected: false,
                    error: Some(format!("Connection to live match feed failed: {e}")),
                });
                return;
            }
        };

        if !response.status().is_success() {
            let status = response.status();
            error!("[Live feed] Server rejected stream: {}", status);
            let _ = update_tx.send(LiveUpdate::ConnectionState {
                connected: false,
                error: Some(format!("Live feed returned status {status}")),
            });
            return;
        }

        let _ = update_tx.send(LiveUpdate::ConnectionState {
            connected: true,
            error: None,
        });

        let mut stream = response.bytes_stream();
        let mut frames = SseFrameBuffer::new();

        loop {
            tokio::select! {
                // Close requested, or the feed handle was dropped
                _ = shutdown_rx.recv() => {
                    info!("[Live feed] Shutting down stream for match {}", match_id);
                    break;
                }

                chunk = stream.next() => {
                    match chunk {
                        Some(Ok(bytes)) => {
                            for data in frames.push(&bytes) {
                                Self::handle_frame(&data, &match_id, &update_tx);
                            }
                        }
                        Some(Err(e)) => {
                            error!("[Live feed] Stream error: {}", e);
                            let _ = update_tx.send(LiveUpdate::ConnectionState {
                                connected: false,
                                error: Some(format!("Connection to live match feed failed: {e}")),
                            });
                            return;
                        }
                        None => {
                            info!("[Live feed] Stream ended for match {}", match_id);
                            break;
                        }
                    }
                }
            }
        }

        let _ = update_tx.send(LiveUpdate::ConnectionState {
            connected: false,
            error: None,
        });
    }

    /// Handle one SSE data frame: a JSON array of update envelopes. Only
    /// the first envelope is consulted; an UPDATE carrying a value keyed by
    /// our match id replaces the snapshot wholesale.
    fn handle_frame(data: &str, match_id: &str, update_tx: &broadcast::Sender<LiveUpdate>) {
        let envelopes: Vec<UpdateEnvelope> = match serde_json::from_str(data) {
            Ok(envelopes) => envelopes,
            Err(e) => {
                debug!("[Live feed] Unparseable frame: {} (error: {})", data, e);
                return;
            }
        };

        let Some(envelope) = envelopes.first() else {
            return;
        };

        if envelope.kind != "UPDATE" {
            debug!("[Live feed] Ignoring envelope of type {}", envelope.kind);
            return;
        }

        let Some(value) = envelope.value.get(match_id) else {
            return;
        };

        match serde_json::from_value::<LiveMatch>(value.clone()) {
            Ok(snapshot) => {
                let _ = update_tx.send(LiveUpdate::Snapshot(snapshot));
            }
            Err(e) => {
                warn!("[Live feed] Snapshot for {} failed to parse: {}", match_id, e);
            }
        }
    }
}

/// Accumulates raw SSE bytes and yields complete `data:` payloads.
///
/// Events are delimited by a blank line (LF or CRLF line endings); an
/// event's payload is the newline-joined content of its `data:` lines.
/// Bytes are kept raw until a full event has arrived, so a multi-byte
/// character split across transport chunks decodes intact.
struct SseFrameBuffer {
    buf: Vec<u8>,
}

impl SseFrameBuffer {
    fn new() -> Self {
        Self { buf: Vec::new() }
    }

    fn push(&mut self, chunk: &[u8]) -> Vec<String> {
        self.buf.extend_from_slice(chunk);

        let mut frames = Vec::new();
        while let Some((boundary, delimiter_len)) = Self::find_boundary(&self.buf) {
            let event: Vec<u8> = self.buf.drain(..boundary + delimiter_len).collect();
            let event = String::from_utf8_lossy(&event);
            let data: Vec<&str> = event
                .lines()
                .filter_map(|line| {
                    let line = line.trim_end_matches('\r');
                    line.strip_prefix("data:").map(|rest| rest.trim_start())
                })
                .collect();
            if !data.is_empty() {
                frames.push(data.join("\n"));
            }
        }
        frames
    }

    /// Position and length of the earliest event delimiter (blank line)
    fn find_boundary(buf: &[u8]) -> Option<(usize, usize)> {
        for i in 0..buf.len().saturating_sub(1) {
            if buf[i] == b'\n' && buf[i + 1] == b'\n' {
                return Some((i, 2));
            }
            if buf[i..].starts_with(b"\r\n\r\n") {
                return Some((i, 4));
            }
        }
        None
    }
}
