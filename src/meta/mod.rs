//! Meta rules that act across the whole rule tree.
//!
//! Currently the no-repeat rule: existence queries consult a
//! [`RepetitionOracle`] to skip moves that would revisit a recorded state.

mod no_repeat;

pub use no_repeat::{NeverRepeats, NoRepeat, PositionHistory, RepetitionOracle};
