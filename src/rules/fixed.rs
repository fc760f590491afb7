//! Fixed: a constant list of moves.

use std::fmt;

use crate::core::{Context, Game, GameFlags};
use crate::moves::{GeneratorBase, Move, MoveGenerator, MoveSet, MovesCursor};

/// Yields the same moves, in the same order, for every snapshot.
///
/// The compiler uses it for rules whose options are known up front (menus
/// of choices, setup placements). Its own move set never changes, so it is
/// static unless a dynamic chain is attached.
#[derive(Debug, Default)]
pub struct Fixed {
    base: GeneratorBase,
    moves: Vec<Move>,
    flags: GameFlags,
}

impl Fixed {
    pub fn new(moves: impl IntoIterator<Item = Move>) -> Self {
        Self {
            base: GeneratorBase::new(),
            moves: moves.into_iter().collect(),
            flags: GameFlags::empty(),
        }
    }

    /// Declare the capabilities this node needs.
    #[must_use]
    pub fn with_flags(mut self, flags: GameFlags) -> Self {
        self.flags = flags;
        self
    }

    fn generate(&self) -> impl Iterator<Item = Move> + '_ {
        self.moves.iter().map(|mv| self.base.stamp(mv.clone()))
    }
}

impl MoveGenerator for Fixed {
    fn base(&self) -> &GeneratorBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut GeneratorBase {
        &mut self.base
    }

    fn eval(&self, _ctx: &Context) -> MoveSet {
        let mut moves = self.base.move_set();
        moves.extend(self.generate());
        moves
    }

    fn cursor<'a>(&'a self, ctx: &'a Context) -> MovesCursor<'a> {
        MovesCursor::lazy(ctx, self.generate())
    }

    fn own_flags(&self, _game: &Game) -> GameFlags {
        self.flags
    }

    fn is_static(&self) -> bool {
        self.base.then_is_static()
    }
}

impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, mv) in self.moves.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{mv}")?;
        }
        self.base.fmt_then(f)
    }
}
