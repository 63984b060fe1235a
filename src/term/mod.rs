//! Crossterm frontend for the engine.
//!
//! Thin adapter: input maps keys to commands, the view lays out spans, the
//! renderer flushes them. No game rules live here.

pub mod input;
pub mod renderer;
pub mod view;

pub use input::{map_key, Cursor, UiCommand};
pub use renderer::TerminalRenderer;
