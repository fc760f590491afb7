//! Compiled game definition.
//!
//! A `Game` is the immutable rule definition the compiler hands to the
//! move-generation core. It is consulted only during one-time preprocessing
//! (`MoveGenerator::preprocess`, `MoveGenerator::game_flags`), never during
//! per-state evaluation.
//!
//! Games are configured through `GameConfig`, either with the builder
//! methods or from JSON:
//!
//! ```
//! use rule_movegen::core::{Game, ModeType};
//!
//! let game = Game::from_json(r#"{
//!     "name": "line-4",
//!     "player_count": 2,
//!     "site_count": 4,
//!     "adjacency": [[1], [0, 2], [1, 3], [2]]
//! }"#).unwrap();
//!
//! assert_eq!(game.site_count(), 4);
//! assert_eq!(game.mode(), ModeType::Alternating);
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::flags::GameFlags;
use super::site::Site;
use crate::error::{Error, Result};

/// Neighbours of one site. Most boards have at most eight.
pub type Neighbours = SmallVec<[Site; 8]>;

/// How players take turns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModeType {
    /// One player moves at a time.
    #[default]
    Alternating,
    /// All players choose a move each turn; moves are applied together.
    Simultaneous,
}

/// Which states count as a repetition for the no-repeat meta rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RepetitionType {
    /// Same piece placement, anywhere in the game.
    PositionalInGame,
    /// Same placement and same player to move, anywhere in the game.
    SituationalInGame,
    /// Same placement within the current turn.
    PositionalInTurn,
    /// Same placement and player to move within the current turn.
    SituationalInTurn,
}

impl RepetitionType {
    /// Whether the player to move is part of the compared state.
    #[must_use]
    pub const fn is_situational(self) -> bool {
        matches!(self, Self::SituationalInGame | Self::SituationalInTurn)
    }

    /// Capability flag the interpreter needs to track this kind of history.
    #[must_use]
    pub const fn flag(self) -> GameFlags {
        match self {
            Self::PositionalInGame => GameFlags::REPETITION_POSITIONAL_IN_GAME,
            Self::SituationalInGame => GameFlags::REPETITION_SITUATIONAL_IN_GAME,
            Self::PositionalInTurn => GameFlags::REPETITION_POSITIONAL_IN_TURN,
            Self::SituationalInTurn => GameFlags::REPETITION_SITUATIONAL_IN_TURN,
        }
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameConfig {
    /// Human-readable name (for debugging/display).
    pub name: String,

    /// Number of players (1-255).
    pub player_count: usize,

    /// Number of board sites.
    pub site_count: usize,

    /// Neighbours of each site. Empty means no connectivity is defined.
    #[serde(default)]
    pub adjacency: Vec<Neighbours>,

    #[serde(default)]
    pub mode: ModeType,

    /// No-repeat meta rule, if the game forbids revisiting states.
    #[serde(default)]
    pub no_repeat: Option<RepetitionType>,

    /// Game contains chance elements.
    #[serde(default)]
    pub stochastic: bool,

    /// Players do not see the whole state.
    #[serde(default)]
    pub hidden_info: bool,
}

impl GameConfig {
    /// Create a configuration with no connectivity and no meta rules.
    pub fn new(name: impl Into<String>, player_count: usize, site_count: usize) -> Self {
        Self {
            name: name.into(),
            player_count,
            site_count,
            adjacency: Vec::new(),
            mode: ModeType::Alternating,
            no_repeat: None,
            stochastic: false,
            hidden_info: false,
        }
    }

    /// Connect the sites as a line: `0 - 1 - ... - (n-1)`.
    #[must_use]
    pub fn line(mut self) -> Self {
        let n = self.site_count;
        self.adjacency = (0..n)
            .map(|i| {
                let mut neighbours = Neighbours::new();
                if i > 0 {
                    neighbours.push(Site::new(i as u32 - 1));
                }
                if i + 1 < n {
                    neighbours.push(Site::new(i as u32 + 1));
                }
                neighbours
            })
            .collect();
        self
    }

    /// Set explicit adjacency lists.
    #[must_use]
    pub fn with_adjacency(mut self, adjacency: Vec<Neighbours>) -> Self {
        self.adjacency = adjacency;
        self
    }

    /// Mark the game as simultaneous-move.
    #[must_use]
    pub fn simultaneous(mut self) -> Self {
        self.mode = ModeType::Simultaneous;
        self
    }

    /// Forbid moves that revisit a recorded state.
    #[must_use]
    pub fn with_no_repeat(mut self, kind: RepetitionType) -> Self {
        self.no_repeat = Some(kind);
        self
    }

    #[must_use]
    pub fn stochastic(mut self) -> Self {
        self.stochastic = true;
        self
    }

    #[must_use]
    pub fn hidden_info(mut self) -> Self {
        self.hidden_info = true;
        self
    }

    fn validate(&self) -> Result<()> {
        if self.player_count == 0 || self.player_count > 255 {
            return Err(Error::InvalidPlayerCount(self.player_count));
        }
        if self.site_count == 0 || self.site_count >= u32::MAX as usize {
            return Err(Error::InvalidSiteCount(self.site_count));
        }
        if !self.adjacency.is_empty() && self.adjacency.len() != self.site_count {
            return Err(Error::AdjacencyLength {
                expected: self.site_count,
                got: self.adjacency.len(),
            });
        }
        for (site, neighbours) in self.adjacency.iter().enumerate() {
            if let Some(bad) = neighbours.iter().find(|n| n.index() >= self.site_count) {
                return Err(Error::AdjacencyOutOfRange {
                    site,
                    neighbour: bad.index(),
                    site_count: self.site_count,
                });
            }
        }
        Ok(())
    }
}

/// Immutable, validated game definition.
#[derive(Clone, Debug)]
pub struct Game {
    config: GameConfig,
}

impl Game {
    /// Validate a configuration and build the game.
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Parse a JSON configuration and build the game.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: GameConfig = serde_json::from_str(json)?;
        Self::new(config)
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.config.name
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.config.player_count
    }

    #[must_use]
    pub fn site_count(&self) -> usize {
        self.config.site_count
    }

    #[must_use]
    pub fn mode(&self) -> ModeType {
        self.config.mode
    }

    #[must_use]
    pub fn no_repeat(&self) -> Option<RepetitionType> {
        self.config.no_repeat
    }

    /// Neighbours of a site. Empty for unknown sites or unconnected boards.
    #[must_use]
    pub fn neighbours(&self, site: Site) -> &[Site] {
        self.config
            .adjacency
            .get(site.index())
            .map(|n| n.as_slice())
            .unwrap_or(&[])
    }

    /// Capabilities implied by the game definition itself rather than by any
    /// rule node: play mode, chance, hidden information, and meta rules.
    #[must_use]
    pub fn flags(&self) -> GameFlags {
        let mut flags = GameFlags::empty();
        if self.config.mode == ModeType::Simultaneous {
            flags |= GameFlags::SIMULTANEOUS_MOVES;
        }
        if self.config.stochastic {
            flags |= GameFlags::STOCHASTIC;
        }
        if self.config.hidden_info {
            flags |= GameFlags::HIDDEN_INFO;
        }
        if let Some(kind) = self.config.no_repeat {
            flags |= kind.flag();
        }
        flags
    }
}
