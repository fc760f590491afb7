//! Consequential chains: forced follow-up moves.
//!
//! A `Then` wraps a nested generator subtree. Every move produced by the
//! owning generator references the chain; the chain itself is evaluated only
//! when the move is applied, which happens outside this crate. For static
//! analysis it is transparent: `preprocess`, `game_flags`, and `is_static`
//! delegate to the wrapped generator.

use std::fmt;

use super::generator::MoveGenerator;
use super::set::MoveSet;
use crate::core::{Context, Game, GameFlags};

/// Consequential chain attached to a generator.
#[derive(Debug)]
pub struct Then {
    moves: Box<dyn MoveGenerator>,
}

impl Then {
    /// Wrap a generator as a chain.
    pub fn new(moves: impl MoveGenerator + 'static) -> Self {
        Self {
            moves: Box::new(moves),
        }
    }

    pub fn from_boxed(moves: Box<dyn MoveGenerator>) -> Self {
        Self { moves }
    }

    /// The wrapped generator.
    #[must_use]
    pub fn moves(&self) -> &dyn MoveGenerator {
        self.moves.as_ref()
    }

    /// Evaluate the follow-up moves for the state reached after applying the
    /// owning move.
    pub fn eval(&self, ctx: &Context) -> MoveSet {
        self.moves.eval(ctx)
    }

    pub fn preprocess(&self, game: &Game) {
        self.moves.preprocess(game);
    }

    pub fn game_flags(&self, game: &Game) -> GameFlags {
        self.moves.game_flags(game)
    }

    pub fn is_static(&self) -> bool {
        self.moves.is_static()
    }
}

impl fmt::Display for Then {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[then: {}]", self.moves)
    }
}
