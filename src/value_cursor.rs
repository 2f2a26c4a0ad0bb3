use std::cmp::Ordering;

use crate::cursor::{BidirectionalCursor, Cursor, RandomAccessCursor};
use crate::step::{Jump, Step, StepBack};
use crate::tier::Tier;

// Holds one element by value and moves by applying the element's own step
// operations, as if it pointed into an imaginary sequence of all T values.
// The cursor is exactly as capable as its element: any type with Step and
// equality makes a forward cursor, StepBack upgrades it to bidirectional, and
// Jump to random access. A large, non-trivial element type is legal but
// probably a bad idea, since cursors are copied freely.
#[derive(Debug, Clone, Copy)]
pub struct ValueCursor<T> {
    value: T,
}

impl<T> ValueCursor<T> {
    pub fn new(value: T) -> Self {
        ValueCursor { value }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn get_mut(&mut self) -> &mut T {
        &mut self.value
    }

    pub fn into_inner(self) -> T {
        self.value
    }
}

// Equality and ordering compare the stored elements, including across element
// types when the elements themselves compare.
impl<T, U> PartialEq<ValueCursor<U>> for ValueCursor<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &ValueCursor<U>) -> bool {
        self.value == other.value
    }
}

impl<T, U> PartialOrd<ValueCursor<U>> for ValueCursor<T>
where
    T: PartialOrd<U>,
{
    fn partial_cmp(&self, other: &ValueCursor<U>) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<T: Step + Clone> Cursor for ValueCursor<T> {
    type Item = T;
    const TIER: Tier = T::TIER;

    fn current(&self) -> T {
        self.value.clone()
    }

    fn advance(&mut self) {
        self.value.step();
    }
}

impl<T: StepBack + Clone> BidirectionalCursor for ValueCursor<T> {
    fn retreat(&mut self) {
        self.value.step_back();
    }
}

impl<T: Jump + Clone> RandomAccessCursor for ValueCursor<T> {
    type Delta = T::Delta;

    fn seek(&mut self, delta: T::Delta) {
        self.value.jump(delta);
    }

    fn distance_from(&self, start: &Self) -> T::Delta {
        self.value.delta_from(&start.value)
    }
}
