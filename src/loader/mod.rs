//! Asynchronous content loading.
//!
//! Loads are async but egui's `update()` runs synchronously each frame, so
//! each load owns an mpsc channel: the task runs off the update loop (a
//! browser microtask on the web, a worker thread natively) and posts tagged
//! results that `update()` drains with `try_recv`. The two loads are
//! independent; neither outcome affects the other.

mod apply;
mod fetch;
mod points;
mod terrain;

pub use apply::{apply_points_result, apply_terrain_result};
pub use points::{PointsLoadChannel, PointsLoadResult};
pub use terrain::{TerrainLoadChannel, TerrainLoadResult};
