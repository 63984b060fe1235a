//! Score calculation for destroyed combinations.
//!
//! A clear is worth `cells * CELL_SCORE * lines`: the per-cell base payout
//! multiplied by the number of simultaneously completed lines, so multi-line
//! clears are rewarded super-linearly.

use crate::types::CELL_SCORE;

/// Points for destroying `cells` unique cells across `lines` completed lines.
pub fn combination_score(lines: usize, cells: usize) -> u32 {
    if lines == 0 || cells == 0 {
        return 0;
    }
    (cells as u32)
        .saturating_mul(CELL_SCORE)
        .saturating_mul(lines as u32)
}
