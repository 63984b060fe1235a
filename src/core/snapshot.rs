//! Single-slot undo state.
//!
//! A deep copy of everything one committed throw can change: the main field,
//! all four side queues (slots and RNG state, so refill sequences replay
//! identically after an undo), and the score. Exactly one snapshot is kept;
//! each committed throw overwrites it and undo consumes it.

use crate::core::main_field::MainField;
use crate::core::side_queue::SideQueue;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneSnapshot {
    pub(crate) field: MainField,
    pub(crate) queues: [SideQueue; 4],
    pub(crate) score: u32,
}

impl SceneSnapshot {
    pub(crate) fn capture(field: &MainField, queues: &[SideQueue; 4], score: u32) -> Self {
        Self {
            field: field.clone(),
            queues: queues.clone(),
            score,
        }
    }
}
