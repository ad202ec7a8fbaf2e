//! Terrain mesh loading.
//!
//! The fetch and OBJ parse run off the update loop (a browser microtask on
//! the web, a worker thread natively) and report back over an mpsc channel
//! polled from `update()`. Progress events are advisory; the final message
//! is always a `Success` or `Error`.

use crate::mesh::{parse_obj, TerrainMesh};
use eframe::egui;
use std::sync::mpsc::{channel, Receiver, Sender};
use web_time::Instant;

/// Outcome messages for a terrain load.
pub enum TerrainLoadResult {
    Success {
        mesh: TerrainMesh,
        fetch_ms: f64,
        parse_ms: f64,
    },
    Progress {
        loaded: u64,
        total: Option<u64>,
    },
    Error(String),
}

/// Channel bridging the async terrain load to the synchronous UI loop.
pub struct TerrainLoadChannel {
    sender: Sender<TerrainLoadResult>,
    receiver: Receiver<TerrainLoadResult>,
}

impl Default for TerrainLoadChannel {
    fn default() -> Self {
        Self::new()
    }
}

impl TerrainLoadChannel {
    pub fn new() -> Self {
        let (sender, receiver) = channel();
        Self { sender, receiver }
    }

    /// Starts the load. Fire-and-forget: no cancellation, no retry.
    #[cfg(target_arch = "wasm32")]
    pub fn load(&self, ctx: egui::Context, url: String) {
        let sender = self.sender.clone();

        wasm_bindgen_futures::spawn_local(async move {
            let result = load_terrain(&url, &sender, &ctx).await;
            let _ = sender.send(result);
            ctx.request_repaint();
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(&self, ctx: egui::Context, url: String) {
        let sender = self.sender.clone();

        std::thread::spawn(move || {
            let result = load_terrain(&url, &sender, &ctx);
            let _ = sender.send(result);
            ctx.request_repaint();
        });
    }

    /// Non-blocking check for the next load message.
    pub fn try_recv(&self) -> Option<TerrainLoadResult> {
        self.receiver.try_recv().ok()
    }
}

#[cfg(target_arch = "wasm32")]
async fn load_terrain(
    url: &str,
    sender: &Sender<TerrainLoadResult>,
    ctx: &egui::Context,
) -> TerrainLoadResult {
    let fetch_start = Instant::now();
    let bytes = match super::fetch::fetch_bytes(url, |loaded, total| {
        let _ = sender.send(TerrainLoadResult::Progress { loaded, total });
        ctx.request_repaint();
    })
    .await
    {
        Ok(bytes) => bytes,
        Err(e) => return TerrainLoadResult::Error(e),
    };
    let fetch_ms = fetch_start.elapsed().as_secs_f64() * 1000.0;

    parse_terrain(&bytes, fetch_ms)
}

#[cfg(not(target_arch = "wasm32"))]
fn load_terrain(
    url: &str,
    sender: &Sender<TerrainLoadResult>,
    ctx: &egui::Context,
) -> TerrainLoadResult {
    let fetch_start = Instant::now();
    let bytes = match super::fetch::fetch_bytes_blocking(url, |loaded, total| {
        let _ = sender.send(TerrainLoadResult::Progress { loaded, total });
        ctx.request_repaint();
    }) {
        Ok(bytes) => bytes,
        Err(e) => return TerrainLoadResult::Error(e),
    };
    let fetch_ms = fetch_start.elapsed().as_secs_f64() * 1000.0;

    parse_terrain(&bytes, fetch_ms)
}

fn parse_terrain(bytes: &[u8], fetch_ms: f64) -> TerrainLoadResult {
    let parse_start = Instant::now();
    match parse_obj(bytes) {
        Ok(mesh) => TerrainLoadResult::Success {
            mesh,
            fetch_ms,
            parse_ms: parse_start.elapsed().as_secs_f64() * 1000.0,
        },
        Err(e) => TerrainLoadResult::Error(e),
    }
}
