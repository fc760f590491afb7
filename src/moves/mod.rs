//! Move generation contract.
//!
//! - [`Move`]: an atomic legal action with a target site and the chains it
//!   triggers
//! - [`MoveSet`]: the moves of one evaluation, in generation order
//! - [`MovesCursor`]: single-pass, short-circuiting enumeration
//! - [`Then`]: consequential chain attached to a generator
//! - [`MoveGenerator`] / [`GeneratorBase`]: the node contract and its shared
//!   attributes

mod generated;
mod set;
mod cursor;
mod then;
mod generator;

pub use generated::{Move, MoveKind};
pub use set::MoveSet;
pub use cursor::MovesCursor;
pub use then::Then;
pub use generator::{GeneratorBase, MoveGenerator};
