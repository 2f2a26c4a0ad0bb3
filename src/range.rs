use crate::count_cursor::CountCursor;
use crate::cursor::{Cursor, RandomAccessCursor};
use crate::map_cursor::{MapCursor, Transform};
use crate::step::Step;
use crate::value_cursor::ValueCursor;

// The half-open span [begin, end). The two cursors may be of different
// concrete types as long as a begin-side cursor compares against an end-side
// one. Traversal and the usual sequence algorithms are delegated to the
// standard iterator machinery through iter().
#[derive(Debug, Clone)]
pub struct Range<B, E = B> {
    begin: B,
    end: E,
}

impl<B, E> Range<B, E> {
    pub fn new(begin: B, end: E) -> Self {
        Range { begin, end }
    }

    pub fn begin(&self) -> B
    where
        B: Clone,
    {
        self.begin.clone()
    }

    pub fn end(&self) -> E
    where
        E: Clone,
    {
        self.end.clone()
    }

    // Wrap both endpoints in mapping cursors over func. Mapping an already
    // mapped range composes.
    pub fn map<F>(self, func: F) -> Range<MapCursor<B, F>, MapCursor<E, F>>
    where
        B: Cursor,
        E: Cursor,
        F: Transform<B::Item> + Transform<E::Item>,
    {
        Range::new(
            MapCursor::new(self.begin, func.clone()),
            MapCursor::new(self.end, func),
        )
    }
}

impl<B, E> Range<B, E>
where
    B: Cursor + PartialEq<E>,
    E: Clone,
{
    pub fn iter(&self) -> RangeIter<B, E> {
        RangeIter {
            cur: self.begin.clone(),
            end: self.end.clone(),
        }
    }

    // The remaining operations are thin conveniences over iter().

    pub fn fold<A, Op>(&self, init: A, op: Op) -> A
    where
        Op: FnMut(A, B::Item) -> A,
    {
        self.iter().fold(init, op)
    }

    pub fn all<P>(&self, pred: P) -> bool
    where
        P: FnMut(B::Item) -> bool,
    {
        self.iter().all(pred)
    }

    pub fn any<P>(&self, pred: P) -> bool
    where
        P: FnMut(B::Item) -> bool,
    {
        self.iter().any(pred)
    }

    // The number of elements in the span, by walking it. Random access
    // ranges can use distance() instead.
    pub fn count(&self) -> usize {
        self.iter().count()
    }

    pub fn find<P>(&self, pred: P) -> Option<B::Item>
    where
        P: FnMut(&B::Item) -> bool,
    {
        self.iter().find(pred)
    }

    pub fn position<P>(&self, pred: P) -> Option<usize>
    where
        P: FnMut(B::Item) -> bool,
    {
        self.iter().position(pred)
    }
}

impl<C: RandomAccessCursor> Range<C, C> {
    // Constant time, in contrast to the linear count().
    pub fn distance(&self) -> C::Delta {
        self.end.distance_from(&self.begin)
    }
}

// Walks [begin, end) by compare-produce-advance.
#[derive(Debug, Clone)]
pub struct RangeIter<B, E> {
    cur: B,
    end: E,
}

impl<B, E> Iterator for RangeIter<B, E>
where
    B: Cursor + PartialEq<E>,
{
    type Item = B::Item;

    fn next(&mut self) -> Option<B::Item> {
        if self.cur == self.end {
            None
        } else {
            let item = self.cur.current();
            self.cur.advance();
            Some(item)
        }
    }
}

impl<B, E> IntoIterator for Range<B, E>
where
    B: Cursor + PartialEq<E>,
{
    type Item = B::Item;
    type IntoIter = RangeIter<B, E>;

    fn into_iter(self) -> RangeIter<B, E> {
        RangeIter {
            cur: self.begin,
            end: self.end,
        }
    }
}

impl<'a, B, E> IntoIterator for &'a Range<B, E>
where
    B: Cursor + PartialEq<E>,
    E: Clone,
{
    type Item = B::Item;
    type IntoIter = RangeIter<B, E>;

    fn into_iter(self) -> RangeIter<B, E> {
        self.iter()
    }
}

// The value range [begin, end).
pub fn value_range<T: Step + Clone>(begin: T, end: T) -> Range<ValueCursor<T>> {
    Range::new(ValueCursor::new(begin), ValueCursor::new(end))
}

// The first n elements produced from cursor, bounded by the counting overlay.
pub fn count_range<C: Cursor>(cursor: C, n: isize) -> Range<CountCursor<C>> {
    assert!(n >= 0, "count range length must be non-negative");
    Range::new(
        CountCursor::new(cursor.clone()),
        CountCursor::with_count(cursor, n),
    )
}
