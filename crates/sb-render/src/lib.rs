//! Replay engine: rebuilds a raster surface from a list of drawing actions.

pub mod paint;
pub mod replay;
pub mod surface;

pub use paint::{paint_action, paint_segment};
pub use replay::{render, replay_into};
pub use surface::Surface;
