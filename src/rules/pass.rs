//! Pass: the mover does nothing.

use std::fmt;

use crate::core::Context;
use crate::moves::{GeneratorBase, Move, MoveGenerator, MoveSet};

/// Yields a single pass move for the player to move.
///
/// Uses the default eager cursor.
#[derive(Debug, Default)]
pub struct Pass {
    base: GeneratorBase,
}

impl Pass {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl MoveGenerator for Pass {
    fn base(&self) -> &GeneratorBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut GeneratorBase {
        &mut self.base
    }

    fn eval(&self, ctx: &Context) -> MoveSet {
        let mut moves = self.base.move_set();
        moves.push(self.base.stamp(Move::pass(ctx.mover())));
        moves
    }
}

impl fmt::Display for Pass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("pass")?;
        self.base.fmt_then(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{PlayerId, Site};

    #[test]
    fn test_pass_single_move() {
        let mut ctx = Context::with_size(2, 3);
        ctx.set_mover(PlayerId::new(1));

        let moves = Pass::new().eval(&ctx);
        assert_eq!(moves.count(), 1);
        assert_eq!(moves.get(0).unwrap(), &Move::pass(PlayerId::new(1)));
        assert!(Pass::new().can_move_to(&ctx, Site::OFF_BOARD));
        assert!(!Pass::new().can_move_to(&ctx, Site::new(0)));
    }

    #[test]
    fn test_pass_is_not_static() {
        assert!(!Pass::new().is_static());
    }
}
