//! Terminal brick-throwing puzzle.
//!
//! A central square field receives squares thrown from four peripheral
//! queues. Each throw slides a square from its side-queue slot onto the
//! adjacent lane of the main field; fully occupied rows and columns are
//! destroyed for points. The engine in [`core`] is pure and deterministic;
//! [`term`] is the crossterm frontend used by the default binary.
//!
//! # Example
//!
//! ```
//! use tui_bricks::core::Scene;
//! use tui_bricks::types::{FieldSetting, GameStatus, Side};
//!
//! let mut scene = Scene::new(FieldSetting::default()).unwrap();
//! assert_eq!(scene.status(), GameStatus::Playing);
//!
//! // Throw the first square of the top queue onto the field.
//! let placed = scene.throw_square(Side::Top, 0).unwrap();
//! assert!(placed);
//!
//! // One-step undo.
//! assert!(scene.back_to_previous_state());
//! ```

pub mod core;
pub mod term;
pub mod types;
