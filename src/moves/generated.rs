//! Generated moves: the atomic legal actions produced by generators.
//!
//! A move records what happens (`MoveKind`), where it lands (`to`), where the
//! piece came from for movements (`from`), and who makes it. It also carries
//! the consequential chains of the generators that produced it, innermost
//! first, so that move application (outside this crate) can trigger them.

use std::fmt;
use std::sync::Arc;

use smallvec::SmallVec;

use super::then::Then;
use crate::core::{PlayerId, Site};

/// What a move does.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MoveKind {
    /// Put a new piece on `to`.
    Add,
    /// Move a piece from `from` to `to`.
    Step,
    /// Select `to` without changing it (choices, votes, ...).
    Select,
    /// Do nothing.
    Pass,
}

/// A legal action produced by one evaluation of a generator.
#[derive(Clone)]
pub struct Move {
    kind: MoveKind,
    from: Option<Site>,
    to: Site,
    mover: PlayerId,
    label: Option<String>,
    decision: bool,
    consequents: SmallVec<[Arc<Then>; 1]>,
}

impl Move {
    fn new(kind: MoveKind, mover: PlayerId, from: Option<Site>, to: Site) -> Self {
        Self {
            kind,
            from,
            to,
            mover,
            label: None,
            decision: false,
            consequents: SmallVec::new(),
        }
    }

    /// Place a piece of `mover` on `to`.
    #[must_use]
    pub fn add(mover: PlayerId, to: Site) -> Self {
        Self::new(MoveKind::Add, mover, None, to)
    }

    /// Move a piece from `from` to `to`.
    #[must_use]
    pub fn step(mover: PlayerId, from: Site, to: Site) -> Self {
        Self::new(MoveKind::Step, mover, Some(from), to)
    }

    /// Select a site.
    #[must_use]
    pub fn select(mover: PlayerId, to: Site) -> Self {
        Self::new(MoveKind::Select, mover, None, to)
    }

    /// Pass. The target is `Site::OFF_BOARD`.
    #[must_use]
    pub fn pass(mover: PlayerId) -> Self {
        Self::new(MoveKind::Pass, mover, None, Site::OFF_BOARD)
    }

    /// Attach a display label, used instead of the default rendering.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn kind(&self) -> MoveKind {
        self.kind
    }

    #[must_use]
    pub fn from(&self) -> Option<Site> {
        self.from
    }

    /// Movement target, matched by directional existence queries.
    #[must_use]
    pub fn to(&self) -> Site {
        self.to
    }

    #[must_use]
    pub fn mover(&self) -> PlayerId {
        self.mover
    }

    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Whether this move must be surfaced as an explicit player choice.
    #[must_use]
    pub fn is_decision(&self) -> bool {
        self.decision
    }

    /// Chains to trigger when this move is applied, innermost generator first.
    #[must_use]
    pub fn consequents(&self) -> &[Arc<Then>] {
        &self.consequents
    }

    pub(crate) fn mark_decision(&mut self) {
        self.decision = true;
    }

    pub(crate) fn push_consequent(&mut self, then: Arc<Then>) {
        self.consequents.push(then);
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
            && self.from == other.from
            && self.to == other.to
            && self.mover == other.mover
            && self.label == other.label
            && self.decision == other.decision
            && self.consequents.len() == other.consequents.len()
            && self
                .consequents
                .iter()
                .zip(other.consequents.iter())
                .all(|(a, b)| Arc::ptr_eq(a, b))
    }
}

impl Eq for Move {}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Move")
            .field("kind", &self.kind)
            .field("from", &self.from)
            .field("to", &self.to)
            .field("mover", &self.mover)
            .field("label", &self.label)
            .field("decision", &self.decision)
            .field("consequents", &self.consequents.len())
            .finish()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(label) = &self.label {
            return f.write_str(label);
        }
        match (self.kind, self.from) {
            (MoveKind::Step, Some(from)) => write!(f, "{}-{}", from, self.to),
            (MoveKind::Add, _) => write!(f, "+{}", self.to),
            (MoveKind::Pass, _) => f.write_str("pass"),
            _ => write!(f, "{}", self.to),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_targets() {
        let p = PlayerId::new(1);

        assert_eq!(Move::add(p, Site::new(4)).to(), Site::new(4));
        assert_eq!(Move::step(p, Site::new(1), Site::new(2)).from(), Some(Site::new(1)));
        assert_eq!(Move::pass(p).to(), Site::OFF_BOARD);
        assert_eq!(Move::select(p, Site::new(0)).mover(), p);
    }

    #[test]
    fn test_move_display() {
        let p = PlayerId::new(0);

        assert_eq!(Move::add(p, Site::new(3)).to_string(), "+3");
        assert_eq!(Move::step(p, Site::new(1), Site::new(2)).to_string(), "1-2");
        assert_eq!(Move::select(p, Site::new(6)).to_string(), "6");
        assert_eq!(Move::pass(p).to_string(), "pass");
        assert_eq!(Move::add(p, Site::new(3)).with_label("A").to_string(), "A");
    }

    #[test]
    fn test_move_kinds_match_constructors() {
        let p = PlayerId::new(0);

        assert_eq!(Move::add(p, Site::new(0)).kind(), MoveKind::Add);
        assert_eq!(Move::step(p, Site::new(0), Site::new(1)).kind(), MoveKind::Step);
        assert_eq!(Move::select(p, Site::new(0)).kind(), MoveKind::Select);
        assert_eq!(Move::pass(p).kind(), MoveKind::Pass);
    }

    #[test]
    fn test_move_equality() {
        let p = PlayerId::new(0);
        let a = Move::add(p, Site::new(1));

        assert_eq!(a, Move::add(p, Site::new(1)));
        assert_ne!(a, Move::add(p, Site::new(2)));
        assert_ne!(a, Move::select(p, Site::new(1)));

        let mut decided = a.clone();
        decided.mark_decision();
        assert_ne!(a, decided);
        assert!(decided.is_decision());
    }

    #[test]
    fn test_fresh_move_has_no_consequents() {
        let mv = Move::add(PlayerId::new(0), Site::new(0));
        assert!(mv.consequents().is_empty());
        assert!(!mv.is_decision());
    }
}
