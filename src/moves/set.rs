//! The moves produced by one evaluation.

use std::fmt;
use std::sync::Arc;

use super::generated::Move;
use super::then::Then;
use crate::error::{Error, Result};

/// Moves produced by one call to `MoveGenerator::eval`, in generation order.
///
/// Each evaluation returns a fresh, independently owned set, so results of an
/// earlier evaluation stay valid after the generator is evaluated again.
/// Generation order is the canonical order for indexed access and rendering.
#[derive(Clone, Debug, Default)]
pub struct MoveSet {
    moves: Vec<Move>,
    then: Option<Arc<Then>>,
}

impl MoveSet {
    /// Create an empty set bound to the producing node's chain.
    #[must_use]
    pub fn new(then: Option<Arc<Then>>) -> Self {
        Self {
            moves: Vec::new(),
            then,
        }
    }

    pub fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    /// The moves, in generation order.
    #[must_use]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Number of moves.
    #[must_use]
    pub fn count(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Move at index `n`.
    ///
    /// Fails with [`Error::IndexOutOfRange`] when `n >= count()`.
    pub fn get(&self, n: usize) -> Result<&Move> {
        self.moves.get(n).ok_or(Error::IndexOutOfRange {
            index: n,
            count: self.moves.len(),
        })
    }

    /// Consequential chain of the generator that produced this set.
    #[must_use]
    pub fn then(&self) -> Option<&Arc<Then>> {
        self.then.as_ref()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<Move> {
        self.moves
    }
}

impl Extend<Move> for MoveSet {
    fn extend<I: IntoIterator<Item = Move>>(&mut self, iter: I) {
        self.moves.extend(iter);
    }
}

impl IntoIterator for MoveSet {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}

impl<'a> IntoIterator for &'a MoveSet {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

/// Diagnostic rendering: moves joined with `", "`, followed by the chain.
/// Not meant to be parsed back.
impl fmt::Display for MoveSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, mv) in self.moves.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{mv}")?;
        }
        if let Some(then) = &self.then {
            write!(f, "{then}")?;
        }
        Ok(())
    }
}
