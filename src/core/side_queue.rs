//! One bordering strip of upcoming squares.
//!
//! Every slot is always populated: consuming a square immediately draws a
//! replacement from the queue's own seeded RNG, so the queue is logically
//! infinite and the whole queue (slots plus RNG state) can be cloned into an
//! undo snapshot to replay refills identically.

use crate::core::error::GameError;
use crate::core::rng::SimpleRng;
use crate::types::{Side, SquareKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SideQueue {
    side: Side,
    slots: Vec<SquareKind>,
    rng: SimpleRng,
}

impl SideQueue {
    /// Create a queue of `len` slots, filled from the seeded distribution.
    pub fn new(side: Side, len: usize, seed: u32) -> Self {
        let mut queue = Self {
            side,
            slots: Vec::with_capacity(len),
            rng: SimpleRng::new(seed),
        };
        for _ in 0..len {
            let kind = queue.draw_kind();
            queue.slots.push(kind);
        }
        queue
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Read-only view of the current slot contents.
    pub fn slots(&self) -> &[SquareKind] {
        &self.slots
    }

    /// The square currently at `pos_idx`, without consuming it.
    pub fn peek(&self, pos_idx: usize) -> Result<SquareKind, GameError> {
        self.slots
            .get(pos_idx)
            .copied()
            .ok_or(GameError::SlotOutOfRange {
                side: self.side,
                index: pos_idx,
                len: self.slots.len(),
            })
    }

    /// Take the square at `pos_idx` and regenerate the slot.
    pub fn consume_and_refill(&mut self, pos_idx: usize) -> Result<SquareKind, GameError> {
        let taken = self.peek(pos_idx)?;
        let fresh = self.draw_kind();
        self.slots[pos_idx] = fresh;
        Ok(taken)
    }

    fn draw_kind(&mut self) -> SquareKind {
        let idx = self.rng.next_range(SquareKind::ALL.len() as u32) as usize;
        SquareKind::ALL[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_queue_populates_every_slot() {
        let queue = SideQueue::new(Side::Top, 8, 3);
        assert_eq!(queue.len(), 8);
        assert_eq!(queue.slots().len(), 8);
    }

    #[test]
    fn peek_does_not_consume() {
        let queue = SideQueue::new(Side::Left, 4, 5);
        let first = queue.peek(2).unwrap();
        assert_eq!(queue.peek(2).unwrap(), first);
    }

    #[test]
    fn consume_returns_peeked_square_and_refills() {
        let mut queue = SideQueue::new(Side::Bottom, 4, 9);
        let peeked = queue.peek(1).unwrap();
        let taken = queue.consume_and_refill(1).unwrap();
        assert_eq!(taken, peeked);
        // Slot is still populated afterwards.
        assert_eq!(queue.len(), 4);
        let _ = queue.peek(1).unwrap();
    }

    #[test]
    fn out_of_range_slot_is_an_error() {
        let mut queue = SideQueue::new(Side::Right, 4, 1);
        assert_eq!(
            queue.peek(4),
            Err(GameError::SlotOutOfRange {
                side: Side::Right,
                index: 4,
                len: 4
            })
        );
        assert!(queue.consume_and_refill(9).is_err());
    }

    #[test]
    fn same_seed_gives_same_sequence() {
        let mut a = SideQueue::new(Side::Top, 6, 77);
        let mut b = SideQueue::new(Side::Top, 6, 77);
        assert_eq!(a.slots(), b.slots());
        for _ in 0..20 {
            assert_eq!(a.consume_and_refill(0).unwrap(), b.consume_and_refill(0).unwrap());
        }
        assert_eq!(a.slots(), b.slots());
    }
}
