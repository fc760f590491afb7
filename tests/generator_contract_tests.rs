//! Generator contract integration tests.
//!
//! These tests verify the behaviour every rule node shares: indexed access
//! into an evaluation, rendering, chain attachment and delegation, and the
//! set-once decision / deferred-apply flags.

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use rule_movegen::core::{Context, Game, GameConfig, GameFlags, PlayerId, Site};
use rule_movegen::moves::{GeneratorBase, Move, MoveGenerator, MoveSet, Then};
use rule_movegen::rules::{Fixed, Or, Pass, Place, Step};
use rule_movegen::Error;

fn game() -> Game {
    Game::new(GameConfig::new("contract", 2, 6).line()).unwrap()
}

fn labelled(label: &str, target: u32) -> Move {
    Move::select(PlayerId::new(0), Site::new(target)).with_label(label)
}

/// Generator that counts how often it is preprocessed.
#[derive(Debug, Default)]
struct PreprocessProbe {
    base: GeneratorBase,
    calls: Arc<AtomicUsize>,
}

impl fmt::Display for PreprocessProbe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("probe")
    }
}

impl MoveGenerator for PreprocessProbe {
    fn base(&self) -> &GeneratorBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut GeneratorBase {
        &mut self.base
    }

    fn eval(&self, _ctx: &Context) -> MoveSet {
        self.base.move_set()
    }

    fn preprocess(&self, game: &Game) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.base.preprocess(game);
    }
}

// =============================================================================
// Scenarios
// =============================================================================

/// Two moves, no chain.
#[test]
fn test_scenario_two_moves_without_chain() {
    let node = Fixed::new([labelled("A", 3), labelled("B", 5)]);
    let ctx = Context::new(&game());

    let moves = node.eval(&ctx);
    assert_eq!(moves.count(), 2);
    assert!(node.can_move_to(&ctx, Site::new(5)));
    assert!(!node.can_move_to(&ctx, Site::new(9)));
    assert_eq!(moves.to_string(), "A, B");
}

/// One move whose node carries a chain yielding another move.
#[test]
fn test_scenario_chain_flags_and_rendering() {
    let game = game();
    let inner = Fixed::new([labelled("D", 1)]).with_flags(GameFlags::STOCHASTIC);
    let mut node = Fixed::new([labelled("C", 0)]).with_flags(GameFlags::HIDDEN_INFO);
    node.attach_then(Then::new(inner)).unwrap();

    assert_eq!(
        node.game_flags(&game),
        GameFlags::HIDDEN_INFO | GameFlags::STOCHASTIC
    );

    let ctx = Context::new(&game);
    let moves = node.eval(&ctx);
    assert_eq!(moves.to_string(), "C[then: D]");

    // The chain is attached to the move, not evaluated with it.
    let c = moves.get(0).unwrap();
    assert_eq!(c.consequents().len(), 1);
    assert_eq!(c.consequents()[0].eval(&ctx).to_string(), "D");
}

/// The deferred-apply flag round-trips and survives evaluation.
#[test]
fn test_scenario_apply_after_all_moves() {
    let mut node = Place::new();
    assert!(!node.applies_after_all_moves());

    node.mark_apply_after_all_moves();
    assert!(node.applies_after_all_moves());

    let ctx = Context::new(&game());
    let _ = node.eval(&ctx);
    let _ = node.can_move_to(&ctx, Site::new(0));
    assert!(node.applies_after_all_moves());

    node.mark_apply_after_all_moves();
    assert!(node.applies_after_all_moves());
}

// =============================================================================
// Indexed access
// =============================================================================

#[test]
fn test_count_matches_moves_for_every_variant() {
    let game = game();
    let mut ctx = Context::new(&game);
    ctx.set_owner(Site::new(2), Some(PlayerId::new(0)));
    ctx.set_owner(Site::new(4), Some(PlayerId::new(1)));

    let nodes: Vec<Box<dyn MoveGenerator>> = vec![
        Box::new(Pass::new()),
        Box::new(Place::new()),
        Box::new(Step::new()),
        Box::new(Fixed::new([labelled("x", 1)])),
        Box::new(Or::default().with(Place::new()).with(Pass::new())),
    ];

    for node in &nodes {
        node.preprocess(&game);
        let moves = node.eval(&ctx);
        assert_eq!(moves.count(), moves.moves().len(), "{node}");
        for i in 0..moves.count() {
            assert_eq!(moves.get(i).unwrap(), &moves.moves()[i], "{node}");
        }
        assert!(matches!(
            moves.get(moves.count()),
            Err(Error::IndexOutOfRange { .. })
        ));
    }
}

/// Results of an earlier evaluation are not touched by a later one.
#[test]
fn test_evaluations_are_independent() {
    let node = Place::new();
    let mut ctx = Context::new(&game());
    let before = node.eval(&ctx);

    ctx.set_owner(Site::new(0), Some(PlayerId::new(1)));
    let after = node.eval(&ctx);

    assert_eq!(before.count(), 6);
    assert_eq!(after.count(), 5);
    assert_eq!(before.get(0).unwrap().to(), Site::new(0));
}

// =============================================================================
// Chain delegation
// =============================================================================

#[test]
fn test_chain_attached_once() {
    let mut node = Pass::new();
    node.attach_then(Then::new(Place::new())).unwrap();

    let err = node.attach_then(Then::new(Pass::new())).unwrap_err();
    assert!(matches!(err, Error::ThenAlreadyAttached));
    assert_eq!(node.to_string(), "pass[then: place]");
}

#[test]
fn test_game_flags_include_chain() {
    let game = game();
    let mut node = Pass::new();
    assert!(node.game_flags(&game).is_empty());

    node.attach_then(Then::new(Step::new())).unwrap();
    assert_eq!(node.game_flags(&game), GameFlags::USES_FROM_POSITIONS);
}

#[test]
fn test_preprocess_recurses_into_chain() {
    let calls = Arc::new(AtomicUsize::new(0));
    let probe = PreprocessProbe {
        base: GeneratorBase::new(),
        calls: Arc::clone(&calls),
    };
    let mut node = Place::new();
    node.attach_then(Then::new(probe)).unwrap();

    node.preprocess(&game());
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_preprocess_twice_keeps_chain_behaviour() {
    let game = game();
    let mut node = Pass::new();
    node.attach_then(Then::new(Step::new())).unwrap();

    let mut ctx = Context::new(&game);
    ctx.set_owner(Site::new(3), Some(PlayerId::new(0)));

    node.preprocess(&game);
    let once = node.then().unwrap().eval(&ctx).to_string();
    node.preprocess(&game);
    let twice = node.then().unwrap().eval(&ctx).to_string();

    assert_eq!(once, "3-2, 3-4");
    assert_eq!(once, twice);
}

// =============================================================================
// Staticness
// =============================================================================

#[test]
fn test_static_default_without_chain() {
    assert!(!Pass::new().is_static());
    assert!(!Place::new().is_static());
}

/// A dynamic node with a static chain reports the chain's staticness.
/// This pins the delegating default; see DESIGN.md.
#[test]
fn test_static_default_follows_chain() {
    let mut node = Place::new();
    node.attach_then(Then::new(Fixed::new([labelled("k", 0)]))).unwrap();
    assert!(node.is_static());

    let mut dynamic_chain = Place::new();
    dynamic_chain.attach_then(Then::new(Pass::new())).unwrap();
    assert!(!dynamic_chain.is_static());
}

#[test]
fn test_composite_static_requires_every_part() {
    let fixed = || Fixed::new([labelled("k", 0)]);

    let mut node = Or::default().with(fixed()).with(fixed());
    assert!(node.is_static());

    node.attach_then(Then::new(Pass::new())).unwrap();
    assert!(!node.is_static());
}

// =============================================================================
// Decision flag
// =============================================================================

#[test]
fn test_decision_marks_generated_moves() {
    let ctx = Context::new(&game());
    let mut node = Place::new();
    assert!(!node.is_decision());
    assert!(node.eval(&ctx).iter().all(|m| !m.is_decision()));

    node.mark_decision();
    node.mark_decision();
    assert!(node.is_decision());
    assert!(node.eval(&ctx).iter().all(|m| m.is_decision()));
    assert!(node.cursor(&ctx).all(|m| m.is_decision()));
}

#[test]
fn test_constraint_moves_default() {
    assert!(!Place::new().is_constraint_moves());
}
