//! Core types: sites, players, capability flags, game definition, and the
//! state snapshot that move generation reads.
//!
//! None of these know about rule nodes; the `moves` and `rules` modules
//! build on top of them.

pub mod site;
pub mod player;
pub mod flags;
pub mod game;
pub mod context;

pub use site::Site;
pub use player::PlayerId;
pub use flags::GameFlags;
pub use game::{Game, GameConfig, ModeType, Neighbours, RepetitionType};
pub use context::Context;
