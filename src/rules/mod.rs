//! Rule variants and the compiled rule tree.
//!
//! Each variant implements [`MoveGenerator`](crate::moves::MoveGenerator):
//!
//! - [`Pass`]: a single pass move (default eager cursor)
//! - [`Place`]: add a piece on any empty site (lazy)
//! - [`Step`]: move a piece to an adjacent empty site (lazy, preprocessed)
//! - [`Fixed`]: a constant move list (lazy, static)
//! - [`Or`]: union of constituents (lazy)
//! - [`Priority`]: first constituent with moves (lazy)
//!
//! [`CompiledRules`] binds a root generator to its `Game` and runs the
//! one-time static analysis.

mod pass;
mod place;
mod step;
mod fixed;
mod or;
mod priority;
mod compiled;

pub use pass::Pass;
pub use place::Place;
pub use step::Step;
pub use fixed::Fixed;
pub use or::Or;
pub use priority::Priority;
pub use compiled::CompiledRules;
