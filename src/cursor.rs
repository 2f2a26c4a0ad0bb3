use num_traits::{PrimInt, Signed};

use crate::tier::Tier;

// A value-semantic position in an imaginary sequence. A cursor owns all the
// state it needs to produce its current element and to move to the next one;
// equality decides whether two cursors denote the same position. Operations
// beyond this minimum live in the extension traits below, so invoking an
// operation a cursor does not support is a missing-bound compile error, never
// a runtime branch.
pub trait Cursor: Clone + PartialEq {
    type Item;

    // The capability tier, as a compile-time constant so that generic
    // consumers can pick a traversal strategy without inspecting state.
    const TIER: Tier;

    // Produce the element at the current position.
    fn current(&self) -> Self::Item;

    // Move to the next position.
    fn advance(&mut self);

    // Move to the next position, returning the cursor as it was before the
    // move.
    fn advance_copy(&mut self) -> Self {
        let before = self.clone();
        self.advance();
        before
    }
}

pub trait BidirectionalCursor: Cursor {
    // Move to the previous position.
    fn retreat(&mut self);

    fn retreat_copy(&mut self) -> Self {
        let before = self.clone();
        self.retreat();
        before
    }
}

// Cursors with constant-time positional arithmetic. Ordering compares
// positions along the sequence.
pub trait RandomAccessCursor: BidirectionalCursor + PartialOrd {
    type Delta: PrimInt + Signed;

    // Move by delta positions, negative meaning backwards.
    fn seek(&mut self, delta: Self::Delta);

    // The number of advances that takes start to self.
    fn distance_from(&self, start: &Self) -> Self::Delta;

    fn seek_back(&mut self, delta: Self::Delta) {
        self.seek(-delta);
    }

    // A copy of this cursor moved forward by delta.
    fn ahead(&self, delta: Self::Delta) -> Self {
        let mut cpy = self.clone();
        cpy.seek(delta);
        cpy
    }

    // A copy of this cursor moved backward by delta.
    fn behind(&self, delta: Self::Delta) -> Self {
        let mut cpy = self.clone();
        cpy.seek(-delta);
        cpy
    }

    // The element delta positions away, without moving this cursor.
    fn peek_at(&self, delta: Self::Delta) -> Self::Item {
        let mut cpy = self.clone();
        cpy.seek(delta);
        cpy.current()
    }
}
