//! Forced-win ("combo") search.
//!
//! A victory-by-continuous-fours search: the attacker may only play moves
//! that complete five or make a four (solid or broken), and the defender may only answer with
//! the single cell that stops the four. Any four with two completions is a
//! win.

use std::collections::HashMap;

use gomoku_core::{Board, LINE_DIRECTIONS, Point, Side};
use tracing::trace;

/// Bounded search proving a forced win.
pub trait ForcedWinOracle {
    /// Drop everything cached from earlier queries.
    fn reset(&mut self);

    /// A first move that forces a win for `side` within `ply_budget` plies
    /// (attacker and defender moves both count), or `None`.
    ///
    /// `board` is mutated during the query and restored before returning.
    fn can_force_win(&mut self, board: &mut Board, side: Side, ply_budget: u8) -> Option<Point>;
}

/// Continuous-four searcher with a per-budget result cache.
///
/// Cached answers are keyed by (position hash, attacker) and are only valid
/// for the budget they were computed at; asking with a different budget
/// clears the cache.
#[derive(Debug, Default)]
pub struct ComboSearcher {
    budget: Option<u8>,
    cache: HashMap<(u64, Side), Option<Point>>,
    nodes: u64,
}

impl ComboSearcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attack nodes visited since the last reset.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    fn attack(&mut self, board: &mut Board, side: Side, budget: u8) -> Option<Point> {
        self.nodes += 1;
        if budget == 0 {
            return None;
        }

        let candidates = board.neighbor_candidates();
        if let Some(&win) = candidates.iter().find(|&&p| board.makes_five(p, side)) {
            return Some(win);
        }
        if budget < 3 {
            return None;
        }
        let defender = side.opponent();
        if candidates.iter().any(|&p| board.makes_five(p, defender)) {
            return None;
        }

        for point in candidates {
            let mut attacked = board.scoped(point, side);
            let wins = match completions(&attacked, point, side).as_slice() {
                [] => false,
                [block] => {
                    let mut defended = attacked.scoped(*block, defender);
                    self.attack(&mut defended, side, budget - 2).is_some()
                }
                _ => true,
            };
            if wins {
                return Some(point);
            }
        }
        None
    }
}

/// Vacant cells that complete a five for `side` through the stone at `point`.
///
/// Scans every line within four cells, so broken fours (`X.XXX`) count.
fn completions(board: &Board, point: Point, side: Side) -> Vec<Point> {
    let mut found = Vec::new();
    for &dir in &LINE_DIRECTIONS {
        for steps in (-4..=4).filter(|&s| s != 0) {
            if let Some(p) = point.offset(dir, steps)
                && board.is_vacant(p)
                && board.makes_five(p, side)
                && !found.contains(&p)
            {
                found.push(p);
            }
        }
    }
    found
}

impl ForcedWinOracle for ComboSearcher {
    fn reset(&mut self) {
        self.budget = None;
        self.cache.clear();
        self.nodes = 0;
    }

    fn can_force_win(&mut self, board: &mut Board, side: Side, ply_budget: u8) -> Option<Point> {
        if self.budget != Some(ply_budget) {
            self.cache.clear();
            self.budget = Some(ply_budget);
        }
        let key = (board.hash(), side);
        if let Some(&cached) = self.cache.get(&key) {
            return cached;
        }
        let found = self.attack(board, side, ply_budget);
        if let Some(point) = found {
            trace!(%side, %point, ply_budget, "forced win");
        }
        self.cache.insert(key, found);
        found
    }
}
