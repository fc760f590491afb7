//! Single-pass move cursors.
//!
//! Existence queries (`can_move`, `can_move_to`) walk a `MovesCursor`
//! instead of forcing a full evaluation. Generators choose how the cursor is
//! fed:
//!
//! - [`MovesCursor::eager`]: wraps the fully materialised result of one
//!   `eval` call. This is the default for every generator.
//! - [`MovesCursor::lazy`]: wraps an iterator that produces moves on demand.
//!   A generator may use it as long as the produced order equals its `eval`
//!   order, and a match at position k never forces generation past k.
//!
//! A cursor is created fresh per query and cannot be restarted.

use std::fmt;
use std::iter::Peekable;

use super::generated::Move;
use super::set::MoveSet;
use crate::core::Context;
use crate::error::{Error, Result};

type MoveSource<'a> = Box<dyn Iterator<Item = Move> + 'a>;

/// Single-pass enumeration over a generator's moves for one snapshot.
pub struct MovesCursor<'a> {
    ctx: &'a Context,
    source: Peekable<MoveSource<'a>>,
    lazy: bool,
}

impl<'a> MovesCursor<'a> {
    /// Cursor over an already evaluated move set.
    #[must_use]
    pub fn eager(ctx: &'a Context, moves: MoveSet) -> Self {
        Self {
            ctx,
            source: (Box::new(moves.into_iter()) as MoveSource<'a>).peekable(),
            lazy: false,
        }
    }

    /// Cursor over moves generated on demand.
    #[must_use]
    pub fn lazy(ctx: &'a Context, moves: impl Iterator<Item = Move> + 'a) -> Self {
        Self {
            ctx,
            source: (Box::new(moves) as MoveSource<'a>).peekable(),
            lazy: true,
        }
    }

    /// Snapshot this cursor enumerates moves for.
    #[must_use]
    pub fn context(&self) -> &'a Context {
        self.ctx
    }

    /// Whether moves are produced on demand.
    #[must_use]
    pub fn is_lazy(&self) -> bool {
        self.lazy
    }

    /// Whether another move is available.
    ///
    /// On a lazy cursor this generates (and buffers) the next move.
    pub fn has_next(&mut self) -> bool {
        self.source.peek().is_some()
    }

    /// Advance to the next move.
    ///
    /// Fails with [`Error::CursorExhausted`] once every move has been
    /// returned.
    pub fn next_move(&mut self) -> Result<Move> {
        self.source.next().ok_or(Error::CursorExhausted)
    }

    /// Existential query: true at the first remaining move for which
    /// `predicate(ctx, move)` holds. Moves after the match are not produced.
    ///
    /// Only moves not yet returned by `next_move` (or iteration) are seen,
    /// on eager and lazy cursors alike. A move buffered by `has_next` still
    /// counts as remaining.
    pub fn probe<P>(&mut self, mut predicate: P) -> bool
    where
        P: FnMut(&Context, &Move) -> bool,
    {
        let ctx = self.ctx;
        self.source.any(|mv| predicate(ctx, &mv))
    }
}

impl Iterator for MovesCursor<'_> {
    type Item = Move;

    fn next(&mut self) -> Option<Move> {
        self.source.next()
    }
}

impl fmt::Debug for MovesCursor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MovesCursor")
            .field("lazy", &self.lazy)
            .finish_non_exhaustive()
    }
}
