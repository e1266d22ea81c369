//! Text shell
//!
//! Screen selection by name and a plain-text rendering of each screen.

pub mod navigation;
pub mod render;

pub use navigation::{Navigator, Screen};
pub use render::{render, View};
