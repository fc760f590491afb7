//! Error types for move generation and game configuration.

use thiserror::Error;

/// Crate-wide error type.
///
/// Evaluation itself is infallible on a well-formed snapshot; errors only
/// surface from indexed access, cursor misuse, tree construction, and
/// configuration loading.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("move index {index} out of range (count is {count})")]
    IndexOutOfRange { index: usize, count: usize },

    #[error("move cursor is exhausted")]
    CursorExhausted,

    #[error("a consequential chain is already attached to this generator")]
    ThenAlreadyAttached,

    #[error("invalid player count {0} (expected 1..=255)")]
    InvalidPlayerCount(usize),

    #[error("invalid site count {0} (a game needs at least one site)")]
    InvalidSiteCount(usize),

    #[error("adjacency of site {site} refers to site {neighbour}, but the board has {site_count} sites")]
    AdjacencyOutOfRange {
        site: usize,
        neighbour: usize,
        site_count: usize,
    },

    #[error("adjacency lists cover {got} sites, expected {expected}")]
    AdjacencyLength { expected: usize, got: usize },

    #[error("failed to parse game configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
