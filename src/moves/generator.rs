//! The move generator contract.
//!
//! Every rule node of the compiled tree implements [`MoveGenerator`]. The set
//! of node kinds is open: the crate ships the variants in [`crate::rules`],
//! and interpreters add their own by implementing the trait.
//!
//! ## Per-state queries
//!
//! - `eval`: full evaluation, returns a fresh [`MoveSet`]
//! - `cursor`: single-pass enumeration (eager by default, lazy per variant)
//! - `can_move_to` / `can_move`: existential queries over the cursor
//!
//! ## One-time static analysis
//!
//! - `preprocess`: per-game setup, recursing into the chain
//! - `game_flags`: own capabilities OR the chain's
//! - `is_static`: whether the legal-move set can never change
//!
//! Shared node attributes (chain, decision flag, deferred-apply flag) live in
//! [`GeneratorBase`], which each variant embeds and exposes through
//! `base()` / `base_mut()`.

use std::fmt;
use std::sync::Arc;

use log::{trace, warn};

use super::cursor::MovesCursor;
use super::generated::Move;
use super::set::MoveSet;
use super::then::Then;
use crate::core::{Context, Game, GameFlags, Site};
use crate::error::{Error, Result};
use crate::meta::{NoRepeat, RepetitionOracle};

/// Attributes shared by every generator.
#[derive(Debug, Default)]
pub struct GeneratorBase {
    then: Option<Arc<Then>>,
    decision: bool,
    apply_after_all_moves: bool,
}

impl GeneratorBase {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn then(&self) -> Option<&Arc<Then>> {
        self.then.as_ref()
    }

    /// Attach the consequential chain. A chain can be attached only once.
    pub fn attach_then(&mut self, then: Then) -> Result<()> {
        if self.then.is_some() {
            warn!("rejected second consequential chain: {then}");
            return Err(Error::ThenAlreadyAttached);
        }
        self.then = Some(Arc::new(then));
        Ok(())
    }

    #[must_use]
    pub fn is_decision(&self) -> bool {
        self.decision
    }

    pub fn mark_decision(&mut self) {
        self.decision = true;
    }

    #[must_use]
    pub fn applies_after_all_moves(&self) -> bool {
        self.apply_after_all_moves
    }

    pub fn mark_apply_after_all_moves(&mut self) {
        self.apply_after_all_moves = true;
    }

    /// Empty move set bound to this node's chain.
    #[must_use]
    pub fn move_set(&self) -> MoveSet {
        MoveSet::new(self.then.clone())
    }

    /// Bind a freshly generated move to this node: append the chain and
    /// carry the decision flag.
    #[must_use]
    pub fn stamp(&self, mut mv: Move) -> Move {
        if let Some(then) = &self.then {
            mv.push_consequent(Arc::clone(then));
        }
        if self.decision {
            mv.mark_decision();
        }
        mv
    }

    /// Preprocess the chain, if any.
    pub fn preprocess(&self, game: &Game) {
        if let Some(then) = &self.then {
            trace!("preprocessing consequential chain for {}", game.name());
            then.preprocess(game);
        }
    }

    /// Flags contributed by the chain, if any.
    #[must_use]
    pub fn then_flags(&self, game: &Game) -> GameFlags {
        self.then
            .as_ref()
            .map_or(GameFlags::empty(), |then| then.game_flags(game))
    }

    /// Staticness when the node's own moves are static: true unless a
    /// dynamic chain is attached.
    #[must_use]
    pub fn then_is_static(&self) -> bool {
        self.then.as_ref().map_or(true, |then| then.is_static())
    }

    /// Write the chain's rendering, if any.
    pub fn fmt_then(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.then {
            Some(then) => write!(f, "{then}"),
            None => Ok(()),
        }
    }
}

/// A node of the compiled rule tree that produces legal moves.
///
/// Implementors provide `base`, `base_mut`, and `eval`; everything else has
/// a default that variants override where their semantics differ.
///
/// `Display` renders the node itself for diagnostics; `MoveSet`'s `Display`
/// renders the moves of one evaluation.
pub trait MoveGenerator: fmt::Debug + fmt::Display + Send + Sync {
    /// Shared node attributes.
    fn base(&self) -> &GeneratorBase;

    fn base_mut(&mut self) -> &mut GeneratorBase;

    /// Compute the legal moves for `ctx`.
    ///
    /// Deterministic for a fixed snapshot. Never fails on a well-formed
    /// snapshot. Each call returns a new, independently owned set.
    fn eval(&self, ctx: &Context) -> MoveSet;

    /// Single-pass cursor over the moves for `ctx`.
    ///
    /// The default evaluates fully and walks the result. Variants that can
    /// generate on demand override this with [`MovesCursor::lazy`], keeping
    /// the `eval` order.
    fn cursor<'a>(&'a self, ctx: &'a Context) -> MovesCursor<'a> {
        MovesCursor::eager(ctx, self.eval(ctx))
    }

    /// True iff some move for `ctx` targets `target`. Stops at the first
    /// match.
    fn can_move_to(&self, ctx: &Context, target: Site) -> bool {
        self.cursor(ctx).probe(|_, mv| mv.to() == target)
    }

    /// True iff some move for `ctx` would not revisit a state recorded by
    /// `oracle`. Stops at the first such move.
    fn can_move(&self, ctx: &Context, oracle: &dyn RepetitionOracle) -> bool {
        NoRepeat::can_move(self, ctx, oracle)
    }

    /// Capabilities of this node alone, excluding the chain.
    fn own_flags(&self, _game: &Game) -> GameFlags {
        GameFlags::empty()
    }

    /// Capabilities of the whole subtree: own flags OR the chain's flags.
    fn game_flags(&self, game: &Game) -> GameFlags {
        self.own_flags(game) | self.base().then_flags(game)
    }

    /// One-time per-game setup. Recurses into the chain.
    fn preprocess(&self, game: &Game) {
        self.base().preprocess(game);
    }

    /// Whether the legal-move set never changes during a game.
    ///
    /// The default follows the chain when one is attached and is false
    /// otherwise.
    // NOTE: with a chain attached this ignores the node's own dependency on
    // the state. Kept as is; see DESIGN.md.
    fn is_static(&self) -> bool {
        self.base().then().map_or(false, |then| then.is_static())
    }

    /// Whether this node only constrains other moves rather than producing
    /// playable ones.
    fn is_constraint_moves(&self) -> bool {
        false
    }

    fn then(&self) -> Option<&Arc<Then>> {
        self.base().then()
    }

    /// Attach the consequential chain. Fails if one is already attached.
    fn attach_then(&mut self, then: Then) -> Result<()> {
        self.base_mut().attach_then(then)
    }

    fn is_decision(&self) -> bool {
        self.base().is_decision()
    }

    /// Surface this node's moves as an explicit player choice. Never reset.
    fn mark_decision(&mut self) {
        self.base_mut().mark_decision();
    }

    /// Whether this node's consequences wait until every player's move of a
    /// simultaneous turn has been collected.
    fn applies_after_all_moves(&self) -> bool {
        self.base().applies_after_all_moves()
    }

    fn mark_apply_after_all_moves(&mut self) {
        self.base_mut().mark_apply_after_all_moves();
    }
}

impl MoveGenerator for Box<dyn MoveGenerator> {
    fn base(&self) -> &GeneratorBase {
        self.as_ref().base()
    }

    fn base_mut(&mut self) -> &mut GeneratorBase {
        self.as_mut().base_mut()
    }

    fn eval(&self, ctx: &Context) -> MoveSet {
        self.as_ref().eval(ctx)
    }

    fn cursor<'a>(&'a self, ctx: &'a Context) -> MovesCursor<'a> {
        self.as_ref().cursor(ctx)
    }

    fn can_move_to(&self, ctx: &Context, target: Site) -> bool {
        self.as_ref().can_move_to(ctx, target)
    }

    fn can_move(&self, ctx: &Context, oracle: &dyn RepetitionOracle) -> bool {
        self.as_ref().can_move(ctx, oracle)
    }

    fn own_flags(&self, game: &Game) -> GameFlags {
        self.as_ref().own_flags(game)
    }

    fn game_flags(&self, game: &Game) -> GameFlags {
        self.as_ref().game_flags(game)
    }

    fn preprocess(&self, game: &Game) {
        self.as_ref().preprocess(game);
    }

    fn is_static(&self) -> bool {
        self.as_ref().is_static()
    }

    fn is_constraint_moves(&self) -> bool {
        self.as_ref().is_constraint_moves()
    }
}
