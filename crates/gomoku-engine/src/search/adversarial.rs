//! Depth-limited minimax with single-sided cutoffs and forced-win checks.

use gomoku_core::{Point, Side};

use crate::combo::ForcedWinOracle;
use crate::eval::ScoreModel;
use crate::ordering::MoveOrdering;
use crate::position::Position;
use crate::score::Score;
use crate::search::control::SearchControl;
use crate::search::counters::Counters;
use crate::search::{Cancelled, SearchResult};

/// Search state threaded through `evaluate` calls.
pub(super) struct SearchContext<'a, O, F> {
    pub ordering: &'a mut O,
    pub oracle: &'a mut F,
    pub control: &'a SearchControl,
    pub counters: &'a Counters,
    /// The side that asked for the search; every value is from its view.
    pub maximizer: Side,
    /// Depth of the current iterative-deepening iteration.
    pub depth: u8,
}

impl<O: MoveOrdering, F: ForcedWinOracle> SearchContext<'_, O, F> {
    /// The sentinel for a proven result in favor of `side`.
    #[inline]
    fn proven_for(&self, side: Side) -> Score {
        if side == self.maximizer {
            Score::Win
        } else {
            Score::Loss
        }
    }

    /// Scan the root candidates at `self.depth`.
    ///
    /// Returns this depth's result, or [`Cancelled`] if the clock ran out
    /// before every candidate was scored.
    pub(super) fn search_root<S: ScoreModel>(
        &mut self,
        position: &mut Position<S>,
        candidates: &[Point],
    ) -> Result<SearchResult, Cancelled> {
        let depth = self.depth;
        let side = self.maximizer;
        let mut result = SearchResult::at_depth(depth);
        let mut extreme = Score::Loss;

        for &point in candidates {
            let value = {
                let mut played = position.play(point, side);
                evaluate(self, &mut *played, depth - 1, side.opponent(), None, Some(extreme))?
            };
            self.counters.finish_candidate();

            if value >= extreme {
                extreme = value;
                result.push(point, value);
                if extreme == Score::Win {
                    break;
                }
            }
        }
        Ok(result)
    }
}

/// Value of the position for the maximizer, `level` plies from the horizon,
/// with `side` to move.
///
/// The bounds are the caller's running extreme and are single-sided: a
/// maximizing frame only looks at `caller_min` (its minimizing caller's best
/// so far) and returns the first child value above it; a minimizing frame
/// only looks at `caller_max` and returns the first child value below it.
/// This is deliberately not a two-sided alpha-beta window.
pub(super) fn evaluate<S, O, F>(
    ctx: &mut SearchContext<'_, O, F>,
    position: &mut Position<S>,
    level: u8,
    side: Side,
    caller_min: Option<Score>,
    caller_max: Option<Score>,
) -> Result<Score, Cancelled>
where
    S: ScoreModel,
    O: MoveOrdering,
    F: ForcedWinOracle,
{
    if ctx.control.should_stop() {
        return Err(Cancelled);
    }

    // Forced-win checks on the two plies below the root, looking twice the
    // iteration depth ahead.
    if level + 2 == ctx.depth || level + 1 == ctx.depth {
        let budget = ctx.depth.saturating_mul(2);
        if ctx
            .oracle
            .can_force_win(position.board_mut(), side, budget)
            .is_some()
        {
            return Ok(ctx.proven_for(side));
        }
    }

    if level == 0 {
        ctx.counters.count_leaf();
        return Ok(Score::Heuristic(position.scores().current()));
    }

    let expansion = ctx.ordering.expand(position.board(), side);
    if !expansion.five_attacks.is_empty() {
        return Ok(ctx.proven_for(side));
    }

    let maximizing = side == ctx.maximizer;
    let mut extreme = if maximizing { Score::Loss } else { Score::Win };

    for point in expansion.candidates {
        let mut played = position.play(point, side);
        if maximizing {
            let value = evaluate(
                ctx,
                &mut *played,
                level - 1,
                side.opponent(),
                None,
                Some(extreme),
            )?;
            if caller_min.is_some_and(|bound| value > bound) {
                return Ok(value);
            }
            if value > extreme {
                extreme = value;
                if extreme == Score::Win {
                    return Ok(extreme);
                }
            }
        } else {
            let value = evaluate(
                ctx,
                &mut *played,
                level - 1,
                side.opponent(),
                Some(extreme),
                None,
            )?;
            if caller_max.is_some_and(|bound| value < bound) {
                return Ok(value);
            }
            if value < extreme {
                extreme = value;
                if extreme == Score::Loss {
                    return Ok(extreme);
                }
            }
        }
    }

    Ok(extreme)
}
