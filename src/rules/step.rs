//! Step: move one of the mover's pieces to an adjacent empty site.

use std::fmt;
use std::sync::OnceLock;

use log::trace;

use crate::core::{Context, Game, GameFlags, Neighbours, Site};
use crate::moves::{GeneratorBase, Move, MoveGenerator, MoveSet, MovesCursor};

/// Yields one `Step` move per (own piece, adjacent empty site) pair.
///
/// Order: origin sites ascending, then neighbours in adjacency order.
///
/// The board's adjacency comes from the `Game` and is captured once by
/// `preprocess`; a step generator that was never preprocessed yields no
/// moves.
#[derive(Debug, Default)]
pub struct Step {
    base: GeneratorBase,
    adjacency: OnceLock<Vec<Neighbours>>,
}

impl Step {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the board adjacency has been captured.
    #[must_use]
    pub fn is_preprocessed(&self) -> bool {
        self.adjacency.get().is_some()
    }

    fn neighbours(&self, site: Site) -> &[Site] {
        self.adjacency
            .get()
            .and_then(|adjacency| adjacency.get(site.index()))
            .map(|n| n.as_slice())
            .unwrap_or(&[])
    }

    fn generate<'a>(&'a self, ctx: &'a Context) -> impl Iterator<Item = Move> + 'a {
        if !self.is_preprocessed() {
            trace!("step evaluated before preprocessing; no moves generated");
        }
        let mover = ctx.mover();
        ctx.sites_of(mover).flat_map(move |from| {
            self.neighbours(from)
                .iter()
                .copied()
                .filter(move |&to| ctx.is_empty(to))
                .map(move |to| self.base.stamp(Move::step(mover, from, to)))
        })
    }
}

impl MoveGenerator for Step {
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

    fn own_flags(&self, _game: &Game) -> GameFlags {
        GameFlags::USES_FROM_POSITIONS
    }

    fn preprocess(&self, game: &Game) {
        let adjacency: Vec<Neighbours> = (0..game.site_count() as u32)
            .map(|i| game.neighbours(Site::new(i)).iter().copied().collect())
            .collect();
        if self.adjacency.set(adjacency).is_err() {
            trace!("step already preprocessed; keeping captured adjacency");
        }
        self.base.preprocess(game);
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("step")?;
        self.base.fmt_then(f)
    }
}
