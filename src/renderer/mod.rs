//! Rendering interface
//!
//! The simulation hands a [`Snapshot`] to a [`Renderer`] once per frame.
//! Renderers have no feedback into the game.

pub mod json;
pub mod log_view;
pub mod snapshot;

pub use json::JsonRenderer;
pub use log_view::LogRenderer;
pub use snapshot::{ObstacleView, Snapshot};

pub trait Renderer {
    fn present(&mut self, snapshot: &Snapshot);
}
