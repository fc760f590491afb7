//! State snapshot consumed by move generation.
//!
//! A `Context` is the read-only view of the current game state handed to
//! `MoveGenerator::eval`: who owns each site, who is to move, and the turn
//! counter. It stays unmodified for the duration of one evaluation call.
//!
//! Site ownership uses an `im` persistent vector so snapshots clone in O(1),
//! which is what search code over copied states relies on. Mutators exist so
//! callers (and tests) can build snapshots; applying moves is not part of
//! this crate.

use std::hash::{Hash, Hasher};

use im::Vector;
use rustc_hash::FxHasher;

use super::game::Game;
use super::player::PlayerId;
use super::site::Site;

/// Read-only game state snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Context {
    player_count: usize,

    /// Owner of the piece on each site, `None` when empty.
    sites: Vector<Option<PlayerId>>,

    /// Player to move.
    mover: PlayerId,

    /// Player who made the previous move.
    prev_mover: PlayerId,

    /// Turn number (starts at 1).
    turn_number: u32,
}

impl Context {
    /// Create an empty board for `game` with player 0 to move.
    #[must_use]
    pub fn new(game: &Game) -> Self {
        Self::with_size(game.player_count(), game.site_count())
    }

    /// Create an empty board without a game definition.
    #[must_use]
    pub fn with_size(player_count: usize, site_count: usize) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        Self {
            player_count,
            sites: std::iter::repeat(None).take(site_count).collect(),
            mover: PlayerId::new(0),
            prev_mover: PlayerId::new(0),
            turn_number: 1,
        }
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.player_count
    }

    #[must_use]
    pub fn site_count(&self) -> usize {
        self.sites.len()
    }

    #[must_use]
    pub fn mover(&self) -> PlayerId {
        self.mover
    }

    #[must_use]
    pub fn prev_mover(&self) -> PlayerId {
        self.prev_mover
    }

    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Owner of the piece on `site`, `None` if empty or off the board.
    #[must_use]
    pub fn owner(&self, site: Site) -> Option<PlayerId> {
        self.sites.get(site.index()).copied().flatten()
    }

    /// Whether `site` is on the board and empty.
    #[must_use]
    pub fn is_empty(&self, site: Site) -> bool {
        site.index() < self.sites.len() && self.owner(site).is_none()
    }

    /// Iterate over all sites in ascending order.
    pub fn sites(&self) -> impl Iterator<Item = Site> + '_ {
        (0..self.sites.len() as u32).map(Site::new)
    }

    /// Iterate over the sites occupied by `player`, ascending.
    pub fn sites_of(&self, player: PlayerId) -> impl Iterator<Item = Site> + '_ {
        self.sites
            .iter()
            .enumerate()
            .filter(move |(_, owner)| **owner == Some(player))
            .map(|(i, _)| Site::new(i as u32))
    }

    // === Snapshot construction ===

    /// Put a piece of `player` on `site` (or clear it with `None`).
    ///
    /// Out-of-board sites are ignored.
    pub fn set_owner(&mut self, site: Site, owner: Option<PlayerId>) {
        if site.index() < self.sites.len() {
            self.sites.set(site.index(), owner);
        }
    }

    /// Set the player to move, remembering the previous one.
    pub fn set_mover(&mut self, player: PlayerId) {
        self.prev_mover = self.mover;
        self.mover = player;
    }

    /// Advance to the next turn.
    pub fn advance_turn(&mut self) {
        self.turn_number += 1;
    }

    // === Hashing ===

    /// Hash of the piece placement only.
    #[must_use]
    pub fn position_hash(&self) -> u64 {
        let mut hasher = FxHasher::default();
        self.sites.hash(&mut hasher);
        hasher.finish()
    }

    /// Hash of the piece placement and the player to move.
    #[must_use]
    pub fn situation_hash(&self) -> u64 {
        let mut hasher = FxHasher::default();
        self.sites.hash(&mut hasher);
        self.mover.hash(&mut hasher);
        hasher.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_context_is_empty() {
        let ctx = Context::with_size(2, 4);

        assert_eq!(ctx.site_count(), 4);
        assert_eq!(ctx.mover(), PlayerId::new(0));
        assert_eq!(ctx.turn_number(), 1);
        assert!(ctx.sites().all(|s| ctx.is_empty(s)));
    }

    #[test]
    fn test_owner_and_sites_of() {
        let mut ctx = Context::with_size(2, 5);
        ctx.set_owner(Site::new(1), Some(PlayerId::new(0)));
        ctx.set_owner(Site::new(3), Some(PlayerId::new(0)));
        ctx.set_owner(Site::new(4), Some(PlayerId::new(1)));

        let mine: Vec<_> = ctx.sites_of(PlayerId::new(0)).collect();
        assert_eq!(mine, vec![Site::new(1), Site::new(3)]);
        assert_eq!(ctx.owner(Site::new(4)), Some(PlayerId::new(1)));
        assert!(!ctx.is_empty(Site::new(4)));
        assert!(!ctx.is_empty(Site::OFF_BOARD));
    }

    #[test]
    fn test_set_owner_off_board_ignored() {
        let mut ctx = Context::with_size(2, 2);
        ctx.set_owner(Site::new(9), Some(PlayerId::new(1)));
        assert_eq!(ctx.owner(Site::new(9)), None);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut ctx = Context::with_size(2, 3);
        let snapshot = ctx.clone();
        ctx.set_owner(Site::new(0), Some(PlayerId::new(1)));

        assert!(snapshot.is_empty(Site::new(0)));
        assert!(!ctx.is_empty(Site::new(0)));
    }

    #[test]
    fn test_set_mover_tracks_previous() {
        let mut ctx = Context::with_size(3, 1);
        ctx.set_mover(PlayerId::new(2));

        assert_eq!(ctx.mover(), PlayerId::new(2));
        assert_eq!(ctx.prev_mover(), PlayerId::new(0));
    }

    #[test]
    fn test_position_vs_situation_hash() {
        let mut a = Context::with_size(2, 3);
        a.set_owner(Site::new(1), Some(PlayerId::new(0)));
        let mut b = a.clone();
        b.set_mover(PlayerId::new(1));

        assert_eq!(a.position_hash(), b.position_hash());
        assert_ne!(a.situation_hash(), b.situation_hash());
    }

    #[test]
    #[should_panic(expected = "Must have at least 1 player")]
    fn test_zero_players() {
        let _ = Context::with_size(0, 3);
    }
}
