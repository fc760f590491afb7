//! A rule tree bound to its game, ready for per-state queries.
//!
//! `CompiledRules::compile` runs the one-time static analysis (preprocess,
//! capability flags, staticness) before any snapshot is evaluated, then
//! serves the per-state entry points the interpreter uses.

use log::debug;

use crate::core::{Context, Game, GameFlags, Site};
use crate::meta::{NeverRepeats, RepetitionOracle};
use crate::moves::{MoveGenerator, MoveSet, MovesCursor};

/// Root generator plus the results of its one-time analysis.
#[derive(Debug)]
pub struct CompiledRules {
    game: Game,
    root: Box<dyn MoveGenerator>,
    flags: GameFlags,
    is_static: bool,
}

impl CompiledRules {
    /// Preprocess `root` for `game` and cache its analysis.
    pub fn compile(game: Game, root: impl MoveGenerator + 'static) -> Self {
        Self::compile_boxed(game, Box::new(root))
    }

    pub fn compile_boxed(game: Game, root: Box<dyn MoveGenerator>) -> Self {
        root.preprocess(&game);
        let flags = game.flags() | root.game_flags(&game);
        let is_static = root.is_static();
        debug!(
            "compiled rules for {}: root={}, flags={}, static={}",
            game.name(),
            root,
            flags,
            is_static
        );
        Self {
            game,
            root,
            flags,
            is_static,
        }
    }

    #[must_use]
    pub fn game(&self) -> &Game {
        &self.game
    }

    #[must_use]
    pub fn root(&self) -> &dyn MoveGenerator {
        self.root.as_ref()
    }

    /// Capabilities of the game definition and the whole rule tree.
    #[must_use]
    pub fn flags(&self) -> GameFlags {
        self.flags
    }

    #[must_use]
    pub fn is_static(&self) -> bool {
        self.is_static
    }

    /// Whether the interpreter must record visited states.
    #[must_use]
    pub fn needs_repetition_history(&self) -> bool {
        self.flags.needs_repetition_history()
    }

    /// All legal moves for `ctx`.
    pub fn legal_moves(&self, ctx: &Context) -> MoveSet {
        self.root.eval(ctx)
    }

    pub fn cursor<'a>(&'a self, ctx: &'a Context) -> MovesCursor<'a> {
        self.root.cursor(ctx)
    }

    pub fn can_move_to(&self, ctx: &Context, target: Site) -> bool {
        self.root.can_move_to(ctx, target)
    }

    /// Whether the mover has a legal move.
    ///
    /// The oracle is only consulted when the game has a no-repeat rule.
    pub fn can_move(&self, ctx: &Context, oracle: &dyn RepetitionOracle) -> bool {
        if self.game.no_repeat().is_some() {
            self.root.can_move(ctx, oracle)
        } else {
            self.root.can_move(ctx, &NeverRepeats)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameConfig, PlayerId, RepetitionType};
    use crate::moves::Move;
    use crate::rules::{Fixed, Or, Pass, Place, Step};

    fn game(config: GameConfig) -> Game {
        Game::new(config).unwrap()
    }

    #[test]
    fn test_compile_preprocesses_root() {
        let rules = CompiledRules::compile(game(GameConfig::new("g", 2, 3).line()), Step::new());

        let mut ctx = Context::new(rules.game());
        ctx.set_owner(Site::new(1), Some(PlayerId::new(0)));
        assert_eq!(rules.legal_moves(&ctx).to_string(), "1-0, 1-2");
    }

    #[test]
    fn test_flags_include_game_definition() {
        let rules = CompiledRules::compile(
            game(GameConfig::new("g", 2, 3).with_no_repeat(RepetitionType::PositionalInGame)),
            Place::new(),
        );

        assert!(rules.flags().contains(GameFlags::REPETITION_POSITIONAL_IN_GAME));
        assert!(rules.needs_repetition_history());
    }

    #[test]
    fn test_no_history_without_meta_rule() {
        let rules = CompiledRules::compile(game(GameConfig::new("g", 2, 3)), Place::new());
        assert!(!rules.needs_repetition_history());
    }

    #[test]
    fn test_oracle_ignored_without_meta_rule() {
        let rules = CompiledRules::compile(game(GameConfig::new("g", 2, 3)), Place::new());
        let ctx = Context::new(rules.game());
        let always = |_: &Context, _: &Move| true;

        assert!(rules.can_move(&ctx, &always));
    }

    #[test]
    fn test_oracle_used_with_meta_rule() {
        let rules = CompiledRules::compile(
            game(GameConfig::new("g", 2, 3).with_no_repeat(RepetitionType::SituationalInTurn)),
            Place::new(),
        );
        let ctx = Context::new(rules.game());
        let always = |_: &Context, _: &Move| true;

        assert!(!rules.can_move(&ctx, &always));
        assert!(rules.can_move(&ctx, &NeverRepeats));
    }

    #[test]
    fn test_static_analysis_cached() {
        let p = PlayerId::new(0);
        let rules = CompiledRules::compile(
            game(GameConfig::new("g", 2, 3)),
            Or::default().with(Fixed::new([Move::select(p, Site::new(0))])),
        );
        assert!(rules.is_static());

        let dynamic = CompiledRules::compile(game(GameConfig::new("g", 2, 3)), Pass::new());
        assert!(!dynamic.is_static());
    }
}
