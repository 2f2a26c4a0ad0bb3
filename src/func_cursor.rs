use crate::cursor::Cursor;
use crate::tier::Tier;

// Drives a cursor with a zero-argument callable: the callable produces the
// next element and the cursor keeps the most recent one. The callable is
// invoked once at construction, so the first element is available without a
// prior advance. Stateful closures are the intended use; a clone gets its own
// copy of the closure state and never shares it with the original.
#[derive(Debug, Clone)]
pub struct PullCursor<F, V> {
    func: F,
    value: V,
}

impl<F, V> PullCursor<F, V>
where
    F: FnMut() -> V,
{
    pub fn new(mut func: F) -> Self {
        let value = func();
        PullCursor { func, value }
    }
}

impl<F, V> PullCursor<F, V> {
    pub fn get(&self) -> &V {
        &self.value
    }

    pub fn into_inner(self) -> V {
        self.value
    }
}

// Equality compares the produced elements; the callables play no role.
impl<F, G, V, W> PartialEq<PullCursor<G, W>> for PullCursor<F, V>
where
    V: PartialEq<W>,
{
    fn eq(&self, other: &PullCursor<G, W>) -> bool {
        self.value == other.value
    }
}

impl<F, V> Cursor for PullCursor<F, V>
where
    F: FnMut() -> V + Clone,
    V: Clone + PartialEq,
{
    type Item = V;
    const TIER: Tier = Tier::Forward;

    fn current(&self) -> V {
        self.value.clone()
    }

    fn advance(&mut self) {
        self.value = (self.func)();
    }
}

// Drives a cursor with an in-place callable of shape fn(&mut V): advancing
// hands the callable the current element to overwrite. Unlike PullCursor the
// caller supplies the first element directly, so element types that cannot be
// produced out of thin air need no special handling.
#[derive(Debug, Clone)]
pub struct MutateCursor<F, V> {
    func: F,
    value: V,
}

impl<F, V> MutateCursor<F, V>
where
    F: FnMut(&mut V),
{
    pub fn new(func: F, initial: V) -> Self {
        MutateCursor {
            func,
            value: initial,
        }
    }
}

impl<F, V> MutateCursor<F, V> {
    pub fn get(&self) -> &V {
        &self.value
    }

    pub fn get_mut(&mut self) -> &mut V {
        &mut self.value
    }

    pub fn into_inner(self) -> V {
        self.value
    }
}

impl<F, G, V, W> PartialEq<MutateCursor<G, W>> for MutateCursor<F, V>
where
    V: PartialEq<W>,
{
    fn eq(&self, other: &MutateCursor<G, W>) -> bool {
        self.value == other.value
    }
}

impl<F, V> Cursor for MutateCursor<F, V>
where
    F: FnMut(&mut V) + Clone,
    V: Clone + PartialEq,
{
    type Item = V;
    const TIER: Tier = Tier::Forward;

    fn current(&self) -> V {
        self.value.clone()
    }

    fn advance(&mut self) {
        (self.func)(&mut self.value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pull_produces_on_construction() {
        let mut n = 0i32;
        let cur = PullCursor::new(move || {
            n += 1;
            n * n
        });
        // The first element is there before any advance.
        assert_eq!(cur.current(), 1);
    }

    #[test]
    fn pull_advances_through_the_sequence() {
        let mut n = 0i32;
        let mut cur = PullCursor::new(move || {
            n += 1;
            n * n
        });
        let mut seen = Vec::new();
        for _ in 0..5 {
            seen.push(cur.current());
            cur.advance();
        }
        assert_eq!(seen, [1, 4, 9, 16, 25]);
    }

    #[test]
    fn pull_clone_is_independent() {
        let mut n = 0u32;
        let mut a = PullCursor::new(move || {
            n += 1;
            n
        });
        let mut b = a.clone();

        a.advance();
        assert_eq!(a.current(), 2);
        // The clone kept its own closure state and element.
        assert_eq!(b.current(), 1);
        b.advance();
        assert_eq!(b.current(), 2);
        assert!(a == b);
    }

    #[test]
    fn pull_equality_compares_elements() {
        let a = PullCursor::new(|| 7);
        let b = PullCursor::new(|| 7);
        let c = PullCursor::new(|| 8);
        assert!(a == b);
        assert!(a != c);
    }

    #[test]
    fn mutate_steps_in_place() {
        // The initial element is handed in directly, so a type without a
        // default value works as-is.
        #[derive(Debug, Clone, PartialEq)]
        struct Acc(u64);

        let mut cur = MutateCursor::new(|v: &mut Acc| v.0 *= 3, Acc(1));
        assert_eq!(cur.current(), Acc(1));
        cur.advance();
        cur.advance();
        assert_eq!(cur.current(), Acc(9));
        assert_eq!(cur.get(), &Acc(9));
        assert_eq!(cur.into_inner(), Acc(9));
    }

    #[test]
    fn mutate_postfix_copy() {
        let mut cur = MutateCursor::new(|v: &mut i32| *v += 10, 5);
        let before = cur.advance_copy();
        assert_eq!(before.current(), 5);
        assert_eq!(cur.current(), 15);
    }
}
