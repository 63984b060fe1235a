//! Core types shared across the application
//!
//! Pure data types with no external dependencies: side identifiers, square
//! kinds, game status, and the immutable field configuration consumed at
//! scene construction.

/// Default main-field dimension (the field is always square).
pub const DEFAULT_FIELD_DIMENSION: usize = 10;

/// Default number of slots per side queue.
pub const DEFAULT_SIDE_DIMENSION: usize = 10;

/// Points awarded per destroyed cell, before the line multiplier.
pub const CELL_SCORE: u32 = 10;

/// Default score target for the `ScoreAtLeast` win rule.
pub const DEFAULT_WIN_SCORE: u32 = 1000;

/// One of the four peripheral queues bordering the main field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Top,
    Left,
    Bottom,
    Right,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::Top, Side::Left, Side::Bottom, Side::Right];

    /// Stable index used to address per-side storage.
    pub fn index(self) -> usize {
        match self {
            Side::Top => 0,
            Side::Left => 1,
            Side::Bottom => 2,
            Side::Right => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Side::Top => "top",
            Side::Left => "left",
            Side::Bottom => "bottom",
            Side::Right => "right",
        }
    }
}

/// Visual/type identity of a placeable square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SquareKind {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Violet,
}

impl SquareKind {
    pub const ALL: [SquareKind; 6] = [
        SquareKind::Red,
        SquareKind::Orange,
        SquareKind::Yellow,
        SquareKind::Green,
        SquareKind::Blue,
        SquareKind::Violet,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SquareKind::Red => "red",
            SquareKind::Orange => "orange",
            SquareKind::Yellow => "yellow",
            SquareKind::Green => "green",
            SquareKind::Blue => "blue",
            SquareKind::Violet => "violet",
        }
    }
}

/// Cell on the main field (None = empty, Some = placed square kind).
pub type Cell = Option<SquareKind>;

/// Lifecycle state of one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    GameOver,
    Won,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, GameStatus::GameOver | GameStatus::Won)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GameStatus::Playing => "playing",
            GameStatus::GameOver => "game over",
            GameStatus::Won => "won",
        }
    }
}

/// Swappable win predicate.
///
/// The winning rule is deliberately isolated from the rest of the state
/// machine so the policy can change without touching the throw pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WinRule {
    /// Win once the score reaches the given threshold.
    ScoreAtLeast(u32),
    /// Win once every cell of the main field is occupied.
    FieldFilled,
}

/// Immutable configuration consumed at scene construction.
///
/// `horz_dimension` and `vert_dimension` must be equal (square field) and
/// `side_dimension` must fit within the field; `Scene::new` validates this.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSetting {
    pub horz_dimension: usize,
    pub vert_dimension: usize,
    pub side_dimension: usize,
    /// Seed for the deterministic queue refill sequences.
    pub seed: u32,
    pub win_rule: WinRule,
}

impl Default for FieldSetting {
    fn default() -> Self {
        Self {
            horz_dimension: DEFAULT_FIELD_DIMENSION,
            vert_dimension: DEFAULT_FIELD_DIMENSION,
            side_dimension: DEFAULT_SIDE_DIMENSION,
            seed: 1,
            win_rule: WinRule::ScoreAtLeast(DEFAULT_WIN_SCORE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn side_indices_are_stable_and_distinct() {
        let mut seen = [false; 4];
        for side in Side::ALL {
            assert!(!seen[side.index()]);
            seen[side.index()] = true;
        }
    }

    #[test]
    fn default_setting_is_square() {
        let setting = FieldSetting::default();
        assert_eq!(setting.horz_dimension, setting.vert_dimension);
        assert!(setting.side_dimension <= setting.horz_dimension);
    }

    #[test]
    fn terminal_statuses() {
        assert!(!GameStatus::Playing.is_terminal());
        assert!(GameStatus::GameOver.is_terminal());
        assert!(GameStatus::Won.is_terminal());
    }
}
