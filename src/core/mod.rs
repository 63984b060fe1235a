//! Core module - pure game logic with no external dependencies on UI or I/O.
//!
//! - [`matrix`]: fixed-size (row, column) container with bounds-checked access
//! - [`rng`]: seeded LCG for deterministic queue refills
//! - [`side_queue`]: the four always-populated strips of upcoming squares
//! - [`main_field`]: throw geometry, combination scan, legality queries
//! - [`scoring`]: score function for destroyed combinations
//! - [`snapshot`]: single-slot undo state
//! - [`scene`]: orchestrator, state machine, and events

pub mod error;
pub mod main_field;
pub mod matrix;
pub mod rng;
pub mod scene;
pub mod scoring;
pub mod side_queue;
pub mod snapshot;

pub use error::GameError;
pub use main_field::{Combination, Line, MainField};
pub use matrix::Matrix;
pub use rng::SimpleRng;
pub use scene::{DestroyedSquare, MovingSquare, Scene};
pub use scoring::combination_score;
pub use side_queue::SideQueue;
