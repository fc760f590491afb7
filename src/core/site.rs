//! Board sites.
//!
//! A `Site` is the integer index of a board location. Generated moves carry
//! a target site, which directional existence queries (`can_move_to`) match
//! against.

use serde::{Deserialize, Serialize};

/// Index of a board location.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Site(pub u32);

impl Site {
    /// Target of moves that do not land anywhere on the board (passes).
    pub const OFF_BOARD: Site = Site(u32::MAX);

    /// Create a new site.
    #[must_use]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Get the site as a vector index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Check whether this site lies on the board.
    #[must_use]
    pub const fn is_on_board(self) -> bool {
        self.0 != u32::MAX
    }
}

impl From<u32> for Site {
    fn from(index: u32) -> Self {
        Self(index)
    }
}

impl std::fmt::Display for Site {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_on_board() {
            write!(f, "{}", self.0)
        } else {
            f.write_str("off")
        }
    }
}
