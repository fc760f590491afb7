//! # rule-movegen
//!
//! Move-generation core of a general rule interpreter for abstract games.
//!
//! Given a compiled tree of rule nodes and a game-state snapshot, the core
//! produces the legal moves, attaches forced follow-up moves (consequential
//! chains) to them, and exposes the static-analysis hooks the interpreter
//! uses to decide what to track per state.
//!
//! ## Design Principles
//!
//! 1. **Open Variant Set**: Rule nodes implement the `MoveGenerator` trait.
//!    The crate ships a handful of variants; interpreters add their own.
//!
//! 2. **Fresh Results**: Every evaluation returns an independently owned
//!    `MoveSet`. Nothing is overwritten behind a caller's back.
//!
//! 3. **Explicit Capabilities**: History lookups go through a
//!    `RepetitionOracle` passed to the query, never through shared state.
//!
//! ## Evaluation Model
//!
//! - **Eager**: `eval` materialises all moves in generation order.
//!
//! - **Lazy**: existence queries (`can_move`, `can_move_to`) walk a
//!   `MovesCursor` and stop at the first match. Variants that can generate
//!   on demand do so without materialising the rest.
//!
//! - **Static analysis**: `preprocess`, `game_flags`, and `is_static` run
//!   once per game, before any snapshot is evaluated.
//!
//! ## Modules
//!
//! - `core`: Sites, players, capability flags, game definition, snapshots
//! - `moves`: Moves, move sets, cursors, chains, the generator contract
//! - `meta`: No-repeat filtering and repetition oracles
//! - `rules`: Rule variants and the compiled rule tree
//!
//! ## Example
//!
//! ```
//! use rule_movegen::{CompiledRules, Context, Game, GameConfig, NeverRepeats, Or, Pass, Place, Site};
//!
//! let game = Game::new(GameConfig::new("tic", 2, 9)).unwrap();
//! let rules = CompiledRules::compile(game, Or::default().with(Place::new()).with(Pass::new()));
//!
//! let ctx = Context::new(rules.game());
//! assert_eq!(rules.legal_moves(&ctx).count(), 10);
//! assert!(rules.can_move_to(&ctx, Site::new(4)));
//! assert!(rules.can_move(&ctx, &NeverRepeats));
//! ```

pub mod error;
pub mod core;
pub mod moves;
pub mod meta;
pub mod rules;

// Re-export commonly used types
pub use crate::error::{Error, Result};

pub use crate::core::{
    Context, Game, GameConfig, GameFlags, ModeType, Neighbours, PlayerId, RepetitionType, Site,
};

pub use crate::moves::{GeneratorBase, Move, MoveGenerator, MoveKind, MoveSet, MovesCursor, Then};

pub use crate::meta::{NeverRepeats, NoRepeat, PositionHistory, RepetitionOracle};

pub use crate::rules::{CompiledRules, Fixed, Or, Pass, Place, Priority, Step};
