//! Scene orchestrator and game state machine.
//!
//! Owns the main field, the four side queues, the score, and the single undo
//! snapshot. All mutation goes through `throw_square`, `back_to_previous_state`
//! and `restart`; observers subscribe through explicit listener lists and are
//! invoked synchronously, in registration order, within the triggering call.

use crate::core::error::GameError;
use crate::core::main_field::MainField;
use crate::core::matrix::Matrix;
use crate::core::scoring::combination_score;
use crate::core::side_queue::SideQueue;
use crate::core::snapshot::SceneSnapshot;
use crate::types::{Cell, FieldSetting, GameStatus, Side, SquareKind, WinRule};

/// One destroyed cell, as reported to `CombinationDestroyed` listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DestroyedSquare {
    pub row: usize,
    pub col: usize,
    pub kind: SquareKind,
}

/// Transient cursor describing the square of the most recent committed throw,
/// for animation cues only. Carries no state the engine depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovingSquare {
    pub side: Side,
    pub pos_idx: usize,
    /// Edge cell where the square entered the field.
    pub entry: (usize, usize),
    /// Cell where the square came to rest.
    pub target: (usize, usize),
    pub kind: SquareKind,
}

type ScoreListener = Box<dyn FnMut(u32)>;
type CombinationListener = Box<dyn FnMut(&[DestroyedSquare])>;
type SignalListener = Box<dyn FnMut()>;

#[derive(Default)]
struct Listeners {
    score_updated: Vec<ScoreListener>,
    combination_destroyed: Vec<CombinationListener>,
    game_over: Vec<SignalListener>,
    game_won: Vec<SignalListener>,
}

pub struct Scene {
    settings: FieldSetting,
    field: MainField,
    queues: [SideQueue; 4],
    score: u32,
    status: GameStatus,
    snapshot: Option<SceneSnapshot>,
    moving: Option<MovingSquare>,
    listeners: Listeners,
}

impl Scene {
    /// Validate `settings` and build a fresh scene in the `Playing` state.
    pub fn new(settings: FieldSetting) -> Result<Self, GameError> {
        if settings.horz_dimension != settings.vert_dimension {
            return Err(GameError::NonSquareField {
                horz: settings.horz_dimension,
                vert: settings.vert_dimension,
            });
        }
        if settings.horz_dimension == 0 {
            return Err(GameError::EmptyField);
        }
        if settings.side_dimension == 0 || settings.side_dimension > settings.horz_dimension {
            return Err(GameError::BadSideDimension {
                side: settings.side_dimension,
                field: settings.horz_dimension,
            });
        }

        Ok(Self {
            settings,
            field: MainField::new(settings.horz_dimension),
            queues: Self::build_queues(&settings),
            score: 0,
            status: GameStatus::Playing,
            snapshot: None,
            moving: None,
            listeners: Listeners::default(),
        })
    }

    fn build_queues(settings: &FieldSetting) -> [SideQueue; 4] {
        Side::ALL.map(|side| {
            SideQueue::new(side, settings.side_dimension, queue_seed(settings.seed, side))
        })
    }

    pub fn settings(&self) -> &FieldSetting {
        &self.settings
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Read-only view of the main field occupancy.
    pub fn main_field(&self) -> &Matrix<Cell> {
        self.field.matrix()
    }

    /// Read-only view of one side queue's current squares.
    pub fn side_matrix(&self, side: Side) -> &[SquareKind] {
        self.queues[side.index()].slots()
    }

    /// Square of the most recent committed throw, if any. Replaced by the
    /// next throw, cleared by undo and restart.
    pub fn moving_square(&self) -> Option<&MovingSquare> {
        self.moving.as_ref()
    }

    pub fn on_score_updated(&mut self, listener: impl FnMut(u32) + 'static) {
        self.listeners.score_updated.push(Box::new(listener));
    }

    pub fn on_combination_destroyed(
        &mut self,
        listener: impl FnMut(&[DestroyedSquare]) + 'static,
    ) {
        self.listeners
            .combination_destroyed
            .push(Box::new(listener));
    }

    pub fn on_game_over(&mut self, listener: impl FnMut() + 'static) {
        self.listeners.game_over.push(Box::new(listener));
    }

    pub fn on_game_won(&mut self, listener: impl FnMut() + 'static) {
        self.listeners.game_won.push(Box::new(listener));
    }

    /// Throw the square at `(side, pos_idx)` onto the main field.
    ///
    /// Returns `Ok(false)` without any mutation when the move is rejected:
    /// the lane entry is blocked, or the game is no longer `Playing`.
    /// Out-of-range `pos_idx` is a contract violation and surfaces as an
    /// error. A successful throw commits a snapshot for undo, resolves
    /// combinations, updates the score, refills the queue slot, evaluates the
    /// terminal conditions, and returns `Ok(true)`.
    pub fn throw_square(&mut self, side: Side, pos_idx: usize) -> Result<bool, GameError> {
        if self.status != GameStatus::Playing {
            return Ok(false);
        }

        let queue = &self.queues[side.index()];
        queue.peek(pos_idx)?;

        if !self.field.can_place(side, pos_idx)? {
            return Ok(false);
        }

        self.snapshot = Some(SceneSnapshot::capture(
            &self.field,
            &self.queues,
            self.score,
        ));

        let kind = self.queues[side.index()].consume_and_refill(pos_idx)?;
        let entry = self.field.entry_cell(side, pos_idx)?;
        let target = self.field.place(side, pos_idx, kind)?;
        self.moving = Some(MovingSquare {
            side,
            pos_idx,
            entry,
            target,
            kind,
        });

        self.resolve_combinations()?;
        self.evaluate_terminal();

        Ok(true)
    }

    /// Remove every completed line, update the score, and notify listeners.
    fn resolve_combinations(&mut self) -> Result<(), GameError> {
        let combos = self.field.find_combinations();
        if combos.is_empty() {
            return Ok(());
        }

        // Union of all completed lines; a cell on a completed row and a
        // completed column is reported once.
        let mut destroyed: Vec<DestroyedSquare> = Vec::new();
        for combo in &combos {
            for &(row, col) in &combo.cells {
                if destroyed.iter().any(|d| d.row == row && d.col == col) {
                    continue;
                }
                if let Some(kind) = self.field.cell(row, col)? {
                    destroyed.push(DestroyedSquare { row, col, kind });
                }
            }
        }

        let coords: Vec<(usize, usize)> = destroyed.iter().map(|d| (d.row, d.col)).collect();
        self.field.clear(&coords)?;

        self.score = self
            .score
            .saturating_add(combination_score(combos.len(), destroyed.len()));

        for listener in &mut self.listeners.combination_destroyed {
            listener(&destroyed);
        }
        let score = self.score;
        for listener in &mut self.listeners.score_updated {
            listener(score);
        }

        Ok(())
    }

    /// Win first, then game over; at most one fires per throw.
    fn evaluate_terminal(&mut self) {
        if self.win_rule_met() {
            self.status = GameStatus::Won;
            for listener in &mut self.listeners.game_won {
                listener();
            }
            return;
        }

        if !self.field.has_legal_move(self.settings.side_dimension) {
            self.status = GameStatus::GameOver;
            for listener in &mut self.listeners.game_over {
                listener();
            }
        }
    }

    fn win_rule_met(&self) -> bool {
        match self.settings.win_rule {
            WinRule::ScoreAtLeast(target) => self.score >= target,
            WinRule::FieldFilled => self.field.is_full(),
        }
    }

    /// Revert the last committed throw: main field, score, and queue contents
    /// (including refill sequences). Single use; returns `false` when there
    /// is nothing to restore or the game is no longer `Playing`.
    pub fn back_to_previous_state(&mut self) -> bool {
        if self.status != GameStatus::Playing {
            return false;
        }
        let Some(snapshot) = self.snapshot.take() else {
            return false;
        };

        self.field = snapshot.field;
        self.queues = snapshot.queues;
        self.score = snapshot.score;
        self.moving = None;

        let score = self.score;
        for listener in &mut self.listeners.score_updated {
            listener(score);
        }
        true
    }

    /// Full reset: empty field, queues regenerated from the configured seed,
    /// score zeroed, snapshot discarded, state back to `Playing`.
    pub fn restart(&mut self) {
        self.field.reset();
        self.queues = Self::build_queues(&self.settings);
        self.score = 0;
        self.status = GameStatus::Playing;
        self.snapshot = None;
        self.moving = None;

        for listener in &mut self.listeners.score_updated {
            listener(0);
        }
    }
}

/// Derive an independent RNG seed for each side from the scene seed.
fn queue_seed(seed: u32, side: Side) -> u32 {
    seed.wrapping_add((side.index() as u32 + 1).wrapping_mul(0x9E37_79B9))
}
