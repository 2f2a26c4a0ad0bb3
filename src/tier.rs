// The positional capability of an element or cursor type. Tiers are totally
// ordered: every bidirectional cursor is also a forward cursor, and every
// random access cursor is also bidirectional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    Forward,
    Bidirectional,
    RandomAccess,
}

impl Tier {
    pub fn is_bidirectional(self) -> bool {
        self >= Tier::Bidirectional
    }

    pub fn is_random_access(self) -> bool {
        self >= Tier::RandomAccess
    }
}
