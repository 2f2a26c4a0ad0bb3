use std::cmp::Ordering;

use num_traits::{NumCast, ToPrimitive};

use crate::cursor::{BidirectionalCursor, Cursor, RandomAccessCursor};
use crate::tier::Tier;

// Overlays a monotonic counter on another cursor. Every move steps the inner
// cursor and the counter in lockstep, but equality, ordering and distance
// consult the counter alone. Pairing a cursor at count 0 against a copy at
// count n therefore bounds a traversal of exactly n elements, even when the
// inner cursor has no reachable end position of its own (a pull cursor, say).
#[derive(Debug, Clone, Copy)]
pub struct CountCursor<C> {
    inner: C,
    count: isize,
}

impl<C> CountCursor<C> {
    pub fn new(inner: C) -> Self {
        Self::with_count(inner, 0)
    }

    pub fn with_count(inner: C, count: isize) -> Self {
        CountCursor { inner, count }
    }

    pub fn count(&self) -> isize {
        self.count
    }

    pub fn inner(&self) -> &C {
        &self.inner
    }

    pub fn into_inner(self) -> C {
        self.inner
    }
}

// Counts only; the inner cursors' own notion of equality is deliberately
// ignored.
impl<C, D> PartialEq<CountCursor<D>> for CountCursor<C> {
    fn eq(&self, other: &CountCursor<D>) -> bool {
        self.count == other.count
    }
}

impl<C, D> PartialOrd<CountCursor<D>> for CountCursor<C> {
    fn partial_cmp(&self, other: &CountCursor<D>) -> Option<Ordering> {
        self.count.partial_cmp(&other.count)
    }
}

impl<C: Cursor> Cursor for CountCursor<C> {
    type Item = C::Item;
    const TIER: Tier = C::TIER;

    fn current(&self) -> C::Item {
        self.inner.current()
    }

    fn advance(&mut self) {
        self.inner.advance();
        self.count += 1;
    }
}

impl<C: BidirectionalCursor> BidirectionalCursor for CountCursor<C> {
    fn retreat(&mut self) {
        self.inner.retreat();
        self.count -= 1;
    }
}

impl<C: RandomAccessCursor> RandomAccessCursor for CountCursor<C> {
    type Delta = C::Delta;

    fn seek(&mut self, delta: C::Delta) {
        self.inner.seek(delta);
        self.count += delta.to_isize().expect("cursor offset does not fit in a count");
    }

    // The difference of the counts, not of the inner cursors.
    fn distance_from(&self, start: &Self) -> C::Delta {
        <C::Delta as NumCast>::from(self.count - start.count)
            .expect("count difference does not fit in the inner cursor's delta type")
    }
}
