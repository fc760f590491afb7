//! Capability bitset propagated through the rule tree at compile time.
//!
//! Each generator reports the dynamic features its subtree needs. The
//! interpreter ORs them together once per game and uses the result to decide
//! which auxiliary state-tracking structures (repetition history, hidden
//! information views, ...) to allocate.

use std::ops::{BitAnd, BitOr, BitOrAssign};

use serde::{Deserialize, Serialize};

/// Set of capabilities a rule subtree requires.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameFlags(pub u64);

impl GameFlags {
    pub const STOCHASTIC: GameFlags = GameFlags(1 << 0);
    pub const HIDDEN_INFO: GameFlags = GameFlags(1 << 1);
    pub const SIMULTANEOUS_MOVES: GameFlags = GameFlags(1 << 2);
    /// Moves read the origin site of a piece.
    pub const USES_FROM_POSITIONS: GameFlags = GameFlags(1 << 3);
    pub const REPETITION_POSITIONAL_IN_GAME: GameFlags = GameFlags(1 << 4);
    pub const REPETITION_SITUATIONAL_IN_GAME: GameFlags = GameFlags(1 << 5);
    pub const REPETITION_POSITIONAL_IN_TURN: GameFlags = GameFlags(1 << 6);
    pub const REPETITION_SITUATIONAL_IN_TURN: GameFlags = GameFlags(1 << 7);

    const NAMED: [(GameFlags, &'static str); 8] = [
        (Self::STOCHASTIC, "stochastic"),
        (Self::HIDDEN_INFO, "hidden-info"),
        (Self::SIMULTANEOUS_MOVES, "simultaneous"),
        (Self::USES_FROM_POSITIONS, "from-positions"),
        (Self::REPETITION_POSITIONAL_IN_GAME, "repeat-positional-game"),
        (Self::REPETITION_SITUATIONAL_IN_GAME, "repeat-situational-game"),
        (Self::REPETITION_POSITIONAL_IN_TURN, "repeat-positional-turn"),
        (Self::REPETITION_SITUATIONAL_IN_TURN, "repeat-situational-turn"),
    ];

    const REPETITION: GameFlags = GameFlags(
        Self::REPETITION_POSITIONAL_IN_GAME.0
            | Self::REPETITION_SITUATIONAL_IN_GAME.0
            | Self::REPETITION_POSITIONAL_IN_TURN.0
            | Self::REPETITION_SITUATIONAL_IN_TURN.0,
    );

    /// No capabilities.
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Raw bit pattern.
    #[must_use]
    pub const fn bits(self) -> u64 {
        self.0
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Check that every bit of `other` is set in `self`.
    #[must_use]
    pub const fn contains(self, other: GameFlags) -> bool {
        self.0 & other.0 == other.0
    }

    /// Check whether any bit of `other` is set in `self`.
    #[must_use]
    pub const fn intersects(self, other: GameFlags) -> bool {
        self.0 & other.0 != 0
    }

    /// Whether the interpreter must keep a history of visited states.
    #[must_use]
    pub const fn needs_repetition_history(self) -> bool {
        self.intersects(Self::REPETITION)
    }
}

impl BitOr for GameFlags {
    type Output = GameFlags;

    fn bitor(self, rhs: GameFlags) -> GameFlags {
        GameFlags(self.0 | rhs.0)
    }
}

impl BitOrAssign for GameFlags {
    fn bitor_assign(&mut self, rhs: GameFlags) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for GameFlags {
    type Output = GameFlags;

    fn bitand(self, rhs: GameFlags) -> GameFlags {
        GameFlags(self.0 & rhs.0)
    }
}

impl std::fmt::Display for GameFlags {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        let mut known = GameFlags::empty();
        f.write_str("{")?;
        for (flag, name) in Self::NAMED {
            if self.contains(flag) {
                if !first {
                    f.write_str(", ")?;
                }
                f.write_str(name)?;
                first = false;
            }
            known |= flag;
        }
        let unknown = self.0 & !known.0;
        if unknown != 0 {
            if !first {
                f.write_str(", ")?;
            }
            write!(f, "{unknown:#x}")?;
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_union() {
        let flags = GameFlags::STOCHASTIC | GameFlags::USES_FROM_POSITIONS;
        assert!(flags.contains(GameFlags::STOCHASTIC));
        assert!(flags.contains(GameFlags::USES_FROM_POSITIONS));
        assert!(!flags.contains(GameFlags::HIDDEN_INFO));
        assert!(!flags.is_empty());
        assert!(GameFlags::empty().is_empty());
    }

    #[test]
    fn test_empty_is_contained_everywhere() {
        assert!(GameFlags::empty().contains(GameFlags::empty()));
        assert!(GameFlags::STOCHASTIC.contains(GameFlags::empty()));
    }

    #[test]
    fn test_needs_repetition_history() {
        assert!(!GameFlags::STOCHASTIC.needs_repetition_history());
        assert!(GameFlags::REPETITION_SITUATIONAL_IN_TURN.needs_repetition_history());
    }

    #[test]
    fn test_flags_display() {
        let flags = GameFlags::HIDDEN_INFO | GameFlags::SIMULTANEOUS_MOVES;
        assert_eq!(flags.to_string(), "{hidden-info, simultaneous}");
        assert_eq!(GameFlags::empty().to_string(), "{}");
        assert_eq!(GameFlags(1 << 40).to_string(), "{0x10000000000}");
    }
}
