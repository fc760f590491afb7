//! Place: put a new piece on any empty site.

use std::fmt;

use crate::core::Context;
use crate::moves::{GeneratorBase, Move, MoveGenerator, MoveSet, MovesCursor};

/// Yields one `Add` move per empty site, in ascending site order.
///
/// Generates lazily: an existence query that matches at site k never looks
/// at sites beyond k.
#[derive(Debug, Default)]
pub struct Place {
    base: GeneratorBase,
}

impl Place {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn generate<'a>(&'a self, ctx: &'a Context) -> impl Iterator<Item = Move> + 'a {
        let mover = ctx.mover();
        ctx.sites()
            .filter(move |&site| ctx.is_empty(site))
            .map(move |site| self.base.stamp(Move::add(mover, site)))
    }
}

impl MoveGenerator for Place {
    fn base(&self) -> &GeneratorBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut GeneratorBase {
        &mut self.base
    }

    fn eval(&self, ctx: &Context) -> MoveSet {
        let mut moves = self.base.move_set();
        moves.extend(self.generate(ctx));
        moves
    }

    fn cursor<'a>(&'a self, ctx: &'a Context) -> MovesCursor<'a> {
        MovesCursor::lazy(ctx, self.generate(ctx))
    }
}

impl fmt::Display for Place {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("place")?;
        self.base.fmt_then(f)
    }
}
