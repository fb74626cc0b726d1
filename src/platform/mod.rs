//! Platform abstraction layer
//!
//! Narrow interfaces between the simulation and its host:
//! - Input events from the keyboard/pointer layer
//! - Frame timing
//! - Frame scheduling (one callback per display refresh)

pub mod input;
pub mod scheduler;
pub mod time;

pub use input::{InputEvent, InputQueue};
pub use scheduler::{FrameScheduler, HeadlessScheduler, TickCallback};
pub use time::FrameClock;
