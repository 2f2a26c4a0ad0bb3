pub use count_cursor::CountCursor;
pub use cursor::{BidirectionalCursor, Cursor, RandomAccessCursor};
pub use func_cursor::{MutateCursor, PullCursor};
pub use map_cursor::{MapCursor, Transform};
pub use range::{count_range, value_range, Range, RangeIter};
pub use step::{Jump, Step, StepBack};
pub use tier::Tier;
pub use value_cursor::ValueCursor;

mod count_cursor;
mod cursor;
mod func_cursor;
mod map_cursor;
mod range;
mod step;
mod tier;
mod value_cursor;
