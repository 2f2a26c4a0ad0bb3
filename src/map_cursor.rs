use std::cmp::Ordering;

use crate::cursor::{BidirectionalCursor, Cursor, RandomAccessCursor};
use crate::tier::Tier;

// A pure element transform, with the output as an associated type so that
// wrapper types can name it. Any cloneable Fn(In) -> Out qualifies through
// the blanket impl.
pub trait Transform<In>: Clone {
    type Output;

    fn apply(&self, input: In) -> Self::Output;
}

impl<In, Out, F> Transform<In> for F
where
    F: Fn(In) -> Out + Clone,
{
    type Output = Out;

    fn apply(&self, input: In) -> Out {
        self(input)
    }
}

// Wraps a cursor and a transform. Position, equality and ordering belong
// entirely to the inner cursor; only the produced element changes, and it is
// recomputed on every access rather than cached, so a dereference always
// reflects the inner cursor's present element.
pub struct MapCursor<C: Cursor, F: Transform<C::Item>> {
    inner: C,
    func: F,
    // Landing slot for current_ref(): the freshly mapped element has to live
    // somewhere addressable before it can be borrowed. Not propagated by
    // clone.
    slot: Option<F::Output>,
}

impl<C: Cursor, F: Transform<C::Item>> MapCursor<C, F> {
    pub fn new(inner: C, func: F) -> Self {
        MapCursor {
            inner,
            func,
            slot: None,
        }
    }

    pub fn inner(&self) -> &C {
        &self.inner
    }

    pub fn inner_mut(&mut self) -> &mut C {
        &mut self.inner
    }

    pub fn into_inner(self) -> C {
        self.inner
    }

    // Map the current element and borrow the result in place. The borrow is
    // served from a slot inside the cursor and goes stale on the next
    // current_ref() call; the borrow checker enforces that.
    pub fn current_ref(&mut self) -> &F::Output {
        let mapped = self.func.apply(self.inner.current());
        self.slot.insert(mapped)
    }
}

impl<C: Cursor, F: Transform<C::Item>> Clone for MapCursor<C, F> {
    fn clone(&self) -> Self {
        // The slot's content belongs to current_ref() borrows of the source
        // and does not travel, which also spares F::Output a Clone bound.
        MapCursor {
            inner: self.inner.clone(),
            func: self.func.clone(),
            slot: None,
        }
    }
}

// The transforms play no role in comparisons, so cursors mapped through
// different transforms still compare by position.
impl<C, D, F, G> PartialEq<MapCursor<D, G>> for MapCursor<C, F>
where
    C: Cursor + PartialEq<D>,
    D: Cursor,
    F: Transform<C::Item>,
    G: Transform<D::Item>,
{
    fn eq(&self, other: &MapCursor<D, G>) -> bool {
        self.inner == other.inner
    }
}

impl<C, F> PartialOrd for MapCursor<C, F>
where
    C: Cursor + PartialOrd,
    F: Transform<C::Item>,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.inner.partial_cmp(&other.inner)
    }
}

impl<C: Cursor, F: Transform<C::Item>> Cursor for MapCursor<C, F> {
    type Item = F::Output;
    const TIER: Tier = C::TIER;

    fn current(&self) -> F::Output {
        self.func.apply(self.inner.current())
    }

    fn advance(&mut self) {
        self.inner.advance();
    }
}

impl<C: BidirectionalCursor, F: Transform<C::Item>> BidirectionalCursor for MapCursor<C, F> {
    fn retreat(&mut self) {
        self.inner.retreat();
    }
}

impl<C: RandomAccessCursor, F: Transform<C::Item>> RandomAccessCursor for MapCursor<C, F> {
    type Delta = C::Delta;

    fn seek(&mut self, delta: C::Delta) {
        self.inner.seek(delta);
    }

    fn distance_from(&self, start: &Self) -> C::Delta {
        self.inner.distance_from(&start.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_cursor::ValueCursor;

    #[test]
    fn dereference_recomputes_every_time() {
        let mut cur = MapCursor::new(ValueCursor::new(10i32), |x: i32| x * 2);
        assert_eq!(cur.current(), 20);

        // Mutating the inner cursor's element between two accesses changes
        // the second result; nothing is cached.
        *cur.inner_mut().get_mut() = 25;
        assert_eq!(cur.current(), 50);
    }

    #[test]
    fn positions_forward_to_inner() {
        let start = MapCursor::new(ValueCursor::new(0i32), |x: i32| x + 100);
        let mut cur = start.clone();
        cur.advance();
        cur.advance();
        assert_eq!(cur.current(), 102);
        cur.retreat();
        assert_eq!(cur.current(), 101);

        cur.seek(5);
        assert_eq!(cur.current(), 106);
        assert_eq!(cur.inner().get(), &6);

        assert_eq!(cur.distance_from(&start), 6);
        assert_eq!(cur.peek_at(-2), 104);
        assert!(start < cur);
    }

    #[test]
    fn equality_ignores_the_transform() {
        // Different transforms, same position: equal.
        let a = MapCursor::new(ValueCursor::new(4i32), |x: i32| x * 2);
        let b = MapCursor::new(ValueCursor::new(4i32), |x: i32| x * 3);
        let c = MapCursor::new(ValueCursor::new(5i32), |x: i32| x * 2);
        assert!(a == b);
        assert!(a != c);
    }

    #[test]
    fn tier_forwards_from_inner() {
        // Can't name the closure type, so check through a local binding.
        fn tier_of<C: Cursor>(_: &C) -> Tier {
            C::TIER
        }
        let cur = MapCursor::new(ValueCursor::new(1u16), |x: u16| x);
        assert_eq!(tier_of(&cur), Tier::RandomAccess);
    }

    #[test]
    fn current_ref_borrows_the_mapped_element() {
        let mut cur = MapCursor::new(ValueCursor::new(3i32), |x: i32| x + 1);
        assert_eq!(*cur.current_ref(), 4);
        cur.advance();
        assert_eq!(*cur.current_ref(), 5);
    }

    #[test]
    fn mapping_to_an_uncloneable_element_composes() {
        // No Clone, no Default.
        struct Opaque(i32);

        let inner = MapCursor::new(ValueCursor::new(2i32), |x: i32| Opaque(x * 10));
        let mut outer = MapCursor::new(inner, |o: Opaque| o.0 + 1);
        assert_eq!(outer.current(), 21);
        outer.advance();
        assert_eq!(outer.current(), 31);
        assert_eq!(outer.current_ref(), &31);

        // Cloning the outer cursor is still possible; the slot stays behind.
        let clone = outer.clone();
        assert_eq!(clone.current(), 31);
    }
}
