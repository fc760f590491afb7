//! No-repeat filtering for existence queries.
//!
//! `NoRepeat` owns no history. It turns each candidate move into a yes/no
//! question for a [`RepetitionOracle`], which the caller passes explicitly.
//! How states are recorded and compared is up to the oracle; the crate ships
//! [`NeverRepeats`] for games without the meta rule and [`PositionHistory`]
//! for hash-based histories.

use log::trace;
use rustc_hash::FxHashSet;

use crate::core::{Context, GameFlags, RepetitionType};
use crate::moves::{Move, MoveGenerator};

/// Answers whether applying a move would revisit a recorded state.
pub trait RepetitionOracle {
    fn would_repeat(&self, ctx: &Context, mv: &Move) -> bool;
}

impl<F> RepetitionOracle for F
where
    F: Fn(&Context, &Move) -> bool,
{
    fn would_repeat(&self, ctx: &Context, mv: &Move) -> bool {
        self(ctx, mv)
    }
}

/// Oracle for games without a no-repeat rule: nothing ever repeats.
#[derive(Clone, Copy, Debug, Default)]
pub struct NeverRepeats;

impl RepetitionOracle for NeverRepeats {
    fn would_repeat(&self, _ctx: &Context, _mv: &Move) -> bool {
        false
    }
}

/// The no-repeat filter.
#[derive(Clone, Copy, Debug)]
pub struct NoRepeat;

impl NoRepeat {
    /// Whether `mv` is allowed, i.e. does not revisit a recorded state.
    pub fn allows(oracle: &dyn RepetitionOracle, ctx: &Context, mv: &Move) -> bool {
        let allowed = !oracle.would_repeat(ctx, mv);
        if !allowed {
            trace!("move {mv} filtered: would repeat a recorded state");
        }
        allowed
    }

    /// True iff `generator` has a move for `ctx` that the oracle allows.
    /// Stops at the first allowed move.
    pub fn can_move<G>(generator: &G, ctx: &Context, oracle: &dyn RepetitionOracle) -> bool
    where
        G: MoveGenerator + ?Sized,
    {
        generator
            .cursor(ctx)
            .probe(|c, mv| Self::allows(oracle, c, mv))
    }

    /// Capability the interpreter must provision for this rule.
    #[must_use]
    pub fn flags(kind: RepetitionType) -> GameFlags {
        kind.flag()
    }
}

/// Hash-based state history.
///
/// Records the hash of every visited snapshot and reports a repetition when
/// the snapshot reached by a move has been recorded. Computing that
/// successor is move application, which lives outside this crate, so the
/// caller supplies it.
///
/// Positional kinds compare piece placement only; situational kinds also
/// compare the player to move. The "in turn" kinds are expected to be
/// cleared with [`PositionHistory::clear`] at every turn boundary.
pub struct PositionHistory<S> {
    kind: RepetitionType,
    seen: FxHashSet<u64>,
    successor: S,
}

impl<S> PositionHistory<S>
where
    S: Fn(&Context, &Move) -> Context,
{
    pub fn new(kind: RepetitionType, successor: S) -> Self {
        Self {
            kind,
            seen: FxHashSet::default(),
            successor,
        }
    }

    #[must_use]
    pub fn kind(&self) -> RepetitionType {
        self.kind
    }

    fn hash(&self, ctx: &Context) -> u64 {
        if self.kind.is_situational() {
            ctx.situation_hash()
        } else {
            ctx.position_hash()
        }
    }

    /// Record a visited snapshot.
    pub fn record(&mut self, ctx: &Context) {
        let hash = self.hash(ctx);
        self.seen.insert(hash);
    }

    /// Whether `ctx` has been recorded.
    #[must_use]
    pub fn contains(&self, ctx: &Context) -> bool {
        self.seen.contains(&self.hash(ctx))
    }

    /// Number of distinct recorded states.
    #[must_use]
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    /// Forget every recorded state.
    pub fn clear(&mut self) {
        self.seen.clear();
    }
}

impl<S> RepetitionOracle for PositionHistory<S>
where
    S: Fn(&Context, &Move) -> Context,
{
    fn would_repeat(&self, ctx: &Context, mv: &Move) -> bool {
        let next = (self.successor)(ctx, mv);
        self.contains(&next)
    }
}

impl<S> std::fmt::Debug for PositionHistory<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PositionHistory")
            .field("kind", &self.kind)
            .field("recorded", &self.seen.len())
            .finish_non_exhaustive()
    }
}
