use num_traits::{PrimInt, Signed};

use crate::tier::Tier;

// Minimum contract for an element driven by a value cursor: it can step to
// its successor and be compared for equality. TIER reports the strongest
// positional capability the type supports so that generic code can read the
// deduced tier as a compile-time constant; implementations that also provide
// StepBack or Jump must raise it to match, since cursors report it verbatim.
pub trait Step: PartialEq + Sized {
    const TIER: Tier = Tier::Forward;

    fn step(&mut self);
}

// Elements that can also step back to their predecessor.
pub trait StepBack: Step {
    fn step_back(&mut self);
}

// Elements with constant-time offset arithmetic. Delta is always a signed
// type wide enough to span the element's full range: a signed element is its
// own delta, an unsigned element gets the signed type of equal width.
pub trait Jump: StepBack + PartialOrd {
    type Delta: PrimInt + Signed;

    // Move by delta steps, negative meaning backwards.
    fn jump(&mut self, delta: Self::Delta);

    // The number of steps that takes earlier to self, as defined by the
    // element's own subtraction.
    fn delta_from(&self, earlier: &Self) -> Self::Delta;
}

macro_rules! jump_signed {
    ($($T:ty),+) => {
        $(
            impl Step for $T {
                const TIER: Tier = Tier::RandomAccess;
                fn step(&mut self) {
                    *self += 1;
                }
            }
            impl StepBack for $T {
                fn step_back(&mut self) {
                    *self -= 1;
                }
            }
            impl Jump for $T {
                type Delta = $T;
                fn jump(&mut self, delta: $T) {
                    *self = self.checked_add(delta).expect("cursor offset overflow");
                }
                fn delta_from(&self, earlier: &Self) -> $T {
                    self.wrapping_sub(*earlier)
                }
            }
        )+
    };
}

macro_rules! jump_unsigned {
    ($($T:ty => $Delta:ty),+) => {
        $(
            impl Step for $T {
                const TIER: Tier = Tier::RandomAccess;
                fn step(&mut self) {
                    *self += 1;
                }
            }
            impl StepBack for $T {
                fn step_back(&mut self) {
                    *self -= 1;
                }
            }
            impl Jump for $T {
                type Delta = $Delta;
                fn jump(&mut self, delta: $Delta) {
                    *self = self
                        .checked_add_signed(delta)
                        .expect("cursor offset overflow");
                }
                // Equal-width wrapping subtraction reinterpreted as signed
                // gives the correct difference whenever the difference is
                // representable at all.
                fn delta_from(&self, earlier: &Self) -> $Delta {
                    self.wrapping_sub(*earlier) as $Delta
                }
            }
        )+
    };
}

jump_signed!(i8, i16, i32, i64, i128, isize);

jump_unsigned!(
    u8 => i8,
    u16 => i16,
    u32 => i32,
    u64 => i64,
    u128 => i128,
    usize => isize
);
