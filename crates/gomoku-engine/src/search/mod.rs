//! Move search: shortcuts, forced-win pre-scan and iterative deepening.

mod adversarial;
pub mod control;
pub mod counters;

use std::sync::Arc;

use gomoku_core::{Board, Point, Side, opening_move};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

use crate::combo::{ComboSearcher, ForcedWinOracle};
use crate::config::{MIN_SEARCH_DEPTH, SearchConfig};
use crate::eval::{PatternScore, ScoreModel};
use crate::ordering::{MoveOrdering, ThreatOrdering};
use crate::position::Position;
use crate::score::Score;

use adversarial::SearchContext;
use control::SearchControl;
use counters::Counters;

/// The time budget ran out in the middle of a depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("search time budget exhausted")]
pub struct Cancelled;

/// Outcome of a search.
///
/// Entries are appended whenever a root move ties or improves on the best so
/// far; the last entry is the chosen move.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResult {
    entries: Vec<(Point, Score)>,
    depth: u8,
}

impl SearchResult {
    /// A result decided without deepening.
    pub fn single(point: Point, score: Score) -> Self {
        Self {
            entries: vec![(point, score)],
            depth: 0,
        }
    }

    pub(crate) fn at_depth(depth: u8) -> Self {
        Self {
            entries: Vec::new(),
            depth,
        }
    }

    pub(crate) fn push(&mut self, point: Point, score: Score) {
        self.entries.push((point, score));
    }

    pub fn entries(&self) -> &[(Point, Score)] {
        &self.entries
    }

    /// The chosen move and its value.
    pub fn best(&self) -> Option<(Point, Score)> {
        self.entries.last().copied()
    }

    pub fn best_move(&self) -> Option<Point> {
        self.best().map(|(point, _)| point)
    }

    pub fn score(&self) -> Option<Score> {
        self.best().map(|(_, score)| score)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Deepest completed iteration, or 0 for a shortcut result.
    pub fn depth(&self) -> u8 {
        self.depth
    }
}

/// Single-threaded searcher owning the game position.
///
/// Collaborators are type parameters so tests can swap in stubs; the
/// defaults are the production pattern score, threat ordering and
/// continuous-four oracle.
pub struct Searcher<S = PatternScore, O = ThreatOrdering, F = ComboSearcher> {
    position: Position<S>,
    ordering: O,
    oracle: F,
    config: SearchConfig,
    counters: Arc<Counters>,
    rng: StdRng,
}

impl Searcher {
    /// A searcher with the production collaborators.
    pub fn new(board: Board, config: SearchConfig) -> Self {
        Self::with_parts(
            board,
            config,
            PatternScore::new(),
            ThreatOrdering::new(config.branch_limit),
            ComboSearcher::new(),
        )
    }
}

impl<S, O, F> Searcher<S, O, F>
where
    S: ScoreModel,
    O: MoveOrdering,
    F: ForcedWinOracle,
{
    pub fn with_parts(
        board: Board,
        config: SearchConfig,
        scores: S,
        ordering: O,
        oracle: F,
    ) -> Self {
        Self {
            position: Position::new(board, scores),
            ordering,
            oracle,
            config,
            counters: Arc::new(Counters::new()),
            rng: StdRng::from_os_rng(),
        }
    }

    /// Replace the random source with a seeded one.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn board(&self) -> &Board {
        self.position.board()
    }

    pub fn position(&self) -> &Position<S> {
        &self.position
    }

    /// Commit a move to the owned board.
    pub fn place(&mut self, point: Point, side: Side) {
        self.position.place(point, side);
    }

    /// Replace the owned board.
    pub fn set_board(&mut self, board: Board) {
        *self.position.board_mut() = board;
    }

    pub fn ordering(&self) -> &O {
        &self.ordering
    }

    pub fn oracle(&self) -> &F {
        &self.oracle
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: SearchConfig) {
        self.ordering.set_branch_limit(config.branch_limit);
        self.config = config;
    }

    /// Shared progress counters, readable from another thread.
    pub fn counters(&self) -> Arc<Counters> {
        Arc::clone(&self.counters)
    }

    /// Pick a move for `side`. See [`search_with`](Self::search_with).
    pub fn search(&mut self, side: Side, allow_opening_book: bool) -> Option<SearchResult> {
        self.search_with(side, allow_opening_book, |_, _| {})
    }

    /// Pick a move for `side`, reporting every completed depth to `on_iter`.
    ///
    /// Returns `None` only when the game is already decided. Otherwise the
    /// result comes from the first shortcut that applies (opening heuristic,
    /// a single candidate, a forced win) or from the deepest iteration that
    /// finished within the time budget. If no iteration finished, the result
    /// is empty. The board is left exactly as it was.
    pub fn search_with<C>(
        &mut self,
        side: Side,
        allow_opening_book: bool,
        mut on_iter: C,
    ) -> Option<SearchResult>
    where
        C: FnMut(u8, &SearchResult),
    {
        let control = SearchControl::new(self.config.time_budget);

        if self.position.board().winner().is_some() {
            debug!("position already has five in a row");
            return None;
        }

        let Self {
            position,
            ordering,
            oracle,
            config,
            counters,
            rng,
        } = self;

        position.rescore(side);
        counters.reset();
        oracle.reset();

        if allow_opening_book
            && let Some(point) = opening_move(position.board(), rng)
        {
            debug!(%point, "opening move");
            return Some(SearchResult::single(point, Score::ZERO));
        }

        let candidates = ordering.expand(position.board(), side).candidates;
        if let [only] = candidates.as_slice() {
            debug!(point = %only, "single candidate");
            return Some(SearchResult::single(*only, Score::ZERO));
        }

        for budget in (1..=config.combo_depth).step_by(2) {
            oracle.reset();
            if let Some(point) = oracle.can_force_win(position.board_mut(), side, budget) {
                debug!(%point, budget, "forced win at root");
                return Some(SearchResult::single(point, Score::Win));
            }
        }

        counters.set_all_candidates(candidates.len());
        let mut result = SearchResult::default();

        for depth in (MIN_SEARCH_DEPTH..=config.search_depth).step_by(2) {
            let mut ctx = SearchContext {
                ordering: &mut *ordering,
                oracle: &mut *oracle,
                control: &control,
                counters: &**counters,
                maximizer: side,
                depth,
            };
            match ctx.search_root(position, &candidates) {
                Ok(completed) => result = completed,
                Err(Cancelled) => {
                    debug!(depth, elapsed = ?control.elapsed(), "depth interrupted");
                    break;
                }
            }

            debug!(
                depth,
                best = ?result.best(),
                leaves = counters.snapshot().evaluated_leaves,
                "depth complete"
            );
            on_iter(depth, &result);

            if control.should_stop_iterating() {
                break;
            }
        }

        Some(result)
    }
}
