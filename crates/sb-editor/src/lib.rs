pub mod board;
pub mod commands;
pub mod config;
pub mod input;
pub mod shortcuts;
pub mod tools;

pub use board::{EXPORT_FILENAME, SketchBoard};
pub use commands::ActionLog;
pub use config::BoardConfig;
