//! Point-of-interest loading.
//!
//! Fetches the GeoJSON feature collection and extracts point features off
//! the update loop, reporting the outcome over an mpsc channel.

use crate::geo::{parse_point_features, PointFeature};
use eframe::egui;
use std::sync::mpsc::{channel, Receiver, Sender};

/// Outcome of a points load.
pub enum PointsLoadResult {
    Success(Vec<PointFeature>),
    Error(String),
}

/// Channel bridging the async points load to the synchronous UI loop.
pub struct PointsLoadChannel {
    sender: Sender<PointsLoadResult>,
    receiver: Receiver<PointsLoadResult>,
}

impl Default for PointsLoadChannel {
    fn default() -> Self {
        Self::new()
    }
}

impl PointsLoadChannel {
    pub fn new() -> Self {
        let (sender, receiver) = channel();
        Self { sender, receiver }
    }

    /// Starts the load. Fire-and-forget: no cancellation, no retry.
    #[cfg(target_arch = "wasm32")]
    pub fn load(&self, ctx: egui::Context, url: String) {
        let sender = self.sender.clone();

        wasm_bindgen_futures::spawn_local(async move {
            let bytes = super::fetch::fetch_bytes(&url, |_, _| {}).await;
            let _ = sender.send(parse_points(bytes));
            ctx.request_repaint();
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(&self, ctx: egui::Context, url: String) {
        let sender = self.sender.clone();

        std::thread::spawn(move || {
            let bytes = super::fetch::fetch_bytes_blocking(&url, |_, _| {});
            let _ = sender.send(parse_points(bytes));
            ctx.request_repaint();
        });
    }

    /// Non-blocking check for a completed load.
    pub fn try_recv(&self) -> Option<PointsLoadResult> {
        self.receiver.try_recv().ok()
    }
}

fn parse_points(bytes: Result<Vec<u8>, String>) -> PointsLoadResult {
    let bytes = match bytes {
        Ok(bytes) => bytes,
        Err(e) => return PointsLoadResult::Error(e),
    };

    let text = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            return PointsLoadResult::Error(format!("Feature collection is not UTF-8: {}", e))
        }
    };

    match parse_point_features(&text) {
        Ok(features) => PointsLoadResult::Success(features),
        Err(e) => PointsLoadResult::Error(e),
    }
}
