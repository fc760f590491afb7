//! Or: the union of several generators.

use std::fmt;

use log::trace;

use crate::core::{Context, Game, GameFlags};
use crate::moves::{GeneratorBase, MoveGenerator, MoveSet, MovesCursor};

/// Yields the moves of every constituent, constituent by constituent, in
/// declaration order.
///
/// The cursor is lazy: a constituent is not evaluated until every earlier
/// one is exhausted.
#[derive(Debug, Default)]
pub struct Or {
    base: GeneratorBase,
    constituents: Vec<Box<dyn MoveGenerator>>,
}

impl Or {
    pub fn new(constituents: Vec<Box<dyn MoveGenerator>>) -> Self {
        Self {
            base: GeneratorBase::new(),
            constituents,
        }
    }

    /// Append a constituent.
    #[must_use]
    pub fn with(mut self, constituent: impl MoveGenerator + 'static) -> Self {
        self.constituents.push(Box::new(constituent));
        self
    }

    #[must_use]
    pub fn constituents(&self) -> &[Box<dyn MoveGenerator>] {
        &self.constituents
    }
}

impl MoveGenerator for Or {
    fn base(&self) -> &GeneratorBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut GeneratorBase {
        &mut self.base
    }

    fn eval(&self, ctx: &Context) -> MoveSet {
        let mut moves = self.base.move_set();
        for constituent in &self.constituents {
            moves.extend(
                constituent
                    .eval(ctx)
                    .into_iter()
                    .map(|mv| self.base.stamp(mv)),
            );
        }
        moves
    }

    fn cursor<'a>(&'a self, ctx: &'a Context) -> MovesCursor<'a> {
        let moves = self
            .constituents
            .iter()
            .flat_map(move |constituent| constituent.cursor(ctx))
            .map(move |mv| self.base.stamp(mv));
        MovesCursor::lazy(ctx, moves)
    }

    fn own_flags(&self, game: &Game) -> GameFlags {
        self.constituents
            .iter()
            .fold(GameFlags::empty(), |flags, c| flags | c.game_flags(game))
    }

    fn preprocess(&self, game: &Game) {
        trace!("preprocessing or with {} constituents", self.constituents.len());
        for constituent in &self.constituents {
            constituent.preprocess(game);
        }
        self.base.preprocess(game);
    }

    fn is_static(&self) -> bool {
        self.constituents.iter().all(|c| c.is_static()) && self.base.then_is_static()
    }
}

impl fmt::Display for Or {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("or(")?;
        for (i, constituent) in self.constituents.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{constituent}")?;
        }
        f.write_str(")")?;
        self.base.fmt_then(f)
    }
}
