//! Priority: the moves of the first constituent that has any.

use std::fmt;

use crate::core::{Context, Game, GameFlags};
use crate::moves::{GeneratorBase, MoveGenerator, MoveSet, MovesCursor};

/// Tries constituents in declaration order and yields the moves of the
/// first one that produces at least one move (e.g. "capture if you can,
/// otherwise move").
#[derive(Debug, Default)]
pub struct Priority {
    base: GeneratorBase,
    constituents: Vec<Box<dyn MoveGenerator>>,
}

impl Priority {
    pub fn new(constituents: Vec<Box<dyn MoveGenerator>>) -> Self {
        Self {
            base: GeneratorBase::new(),
            constituents,
        }
    }

    /// Append a lower-priority constituent.
    #[must_use]
    pub fn with(mut self, constituent: impl MoveGenerator + 'static) -> Self {
        self.constituents.push(Box::new(constituent));
        self
    }

    #[must_use]
    pub fn constituents(&self) -> &[Box<dyn MoveGenerator>] {
        &self.constituents
    }
}

impl MoveGenerator for Priority {
    fn base(&self) -> &GeneratorBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut GeneratorBase {
        &mut self.base
    }

    fn eval(&self, ctx: &Context) -> MoveSet {
        let mut moves = self.base.move_set();
        if let Some(chosen) = self
            .constituents
            .iter()
            .map(|c| c.eval(ctx))
            .find(|set| !set.is_empty())
        {
            moves.extend(chosen.into_iter().map(|mv| self.base.stamp(mv)));
        }
        moves
    }

    /// Lazy: each constituent is probed for a first move only until one has
    /// any, and the chosen one is then streamed.
    fn cursor<'a>(&'a self, ctx: &'a Context) -> MovesCursor<'a> {
        let chosen = self
            .constituents
            .iter()
            .map(move |c| c.cursor(ctx))
            .find_map(|mut cursor| cursor.has_next().then_some(cursor));
        let moves = chosen
            .into_iter()
            .flatten()
            .map(move |mv| self.base.stamp(mv));
        MovesCursor::lazy(ctx, moves)
    }

    fn own_flags(&self, game: &Game) -> GameFlags {
        self.constituents
            .iter()
            .fold(GameFlags::empty(), |flags, c| flags | c.game_flags(game))
    }

    fn preprocess(&self, game: &Game) {
        for constituent in &self.constituents {
            constituent.preprocess(game);
        }
        self.base.preprocess(game);
    }

    fn is_static(&self) -> bool {
        self.constituents.iter().all(|c| c.is_static()) && self.base.then_is_static()
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("priority(")?;
        for (i, constituent) in self.constituents.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{constituent}")?;
        }
        f.write_str(")")?;
        self.base.fmt_then(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{PlayerId, Site};
    use crate::rules::{Pass, Place};

    #[test]
    fn test_priority_takes_first_non_empty() {
        let ctx = Context::with_size(2, 2);
        let node = Priority::default().with(Place::new()).with(Pass::new());
        assert_eq!(node.eval(&ctx).to_string(), "+0, +1");
    }

    #[test]
    fn test_priority_falls_back() {
        let mut ctx = Context::with_size(2, 1);
        ctx.set_owner(Site::new(0), Some(PlayerId::new(1)));

        let node = Priority::default().with(Place::new()).with(Pass::new());
        assert_eq!(node.eval(&ctx).to_string(), "pass");
        assert!(node.can_move_to(&ctx, Site::OFF_BOARD));
    }

    #[test]
    fn test_priority_empty() {
        let ctx = Context::with_size(2, 1);
        let node = Priority::default();

        assert!(node.eval(&ctx).is_empty());
        assert!(!node.cursor(&ctx).has_next());
        assert!(node.is_static());
    }

    #[test]
    fn test_priority_display() {
        let node = Priority::default().with(Place::new()).with(Pass::new());
        assert_eq!(node.to_string(), "priority(place; pass)");
    }
}
