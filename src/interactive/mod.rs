//! Interactive TUI interface

pub mod app;
pub mod geometry;
pub mod rendering;

pub use app::{App, run_tui};
pub use geometry::BoardGeometry;
