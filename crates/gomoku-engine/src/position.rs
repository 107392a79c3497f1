//! Board plus score accumulator, mutated together through move guards.

use std::ops::{Deref, DerefMut};

use gomoku_core::{Board, Placement, Point, Side};

use crate::eval::ScoreModel;

/// The board and its incrementally maintained score.
///
/// The two only change together, through [`play`](Position::play), whose
/// guard reverts both when dropped.
#[derive(Debug, Clone)]
pub struct Position<S> {
    board: Board,
    scores: S,
}

impl<S: ScoreModel> Position<S> {
    pub fn new(board: Board, scores: S) -> Self {
        Self { board, scores }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for lookaheads that restore it before returning.
    ///
    /// Changes made here bypass the score model.
    #[inline]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[inline]
    pub fn scores(&self) -> &S {
        &self.scores
    }

    /// Recompute the score model from scratch for `maximizer`.
    pub fn rescore(&mut self, maximizer: Side) {
        self.scores.init(&self.board, maximizer);
    }

    /// Commit a stone permanently, keeping the score in step.
    pub fn place(&mut self, point: Point, side: Side) {
        let previous = self.board.get(point);
        self.scores.on_move(&self.board, point, side, previous);
        self.board.place(point, side);
    }

    /// Play `side` at `point`; the returned guard undoes it on drop.
    pub fn play(&mut self, point: Point, side: Side) -> Played<'_, S> {
        let previous = self.board.get(point);
        self.scores.on_move(&self.board, point, side, previous);
        let placement = self.board.apply(point, side);
        Played {
            position: self,
            placement: Some(placement),
        }
    }
}

/// A move in progress. Dereferences to the [`Position`] it was played on.
///
/// Dropping the guard reverts the score and the board, so every exit path
/// (normal return, cutoff, or `?` on cancellation) leaves the position as it
/// was before [`Position::play`].
pub struct Played<'a, S: ScoreModel> {
    position: &'a mut Position<S>,
    placement: Option<Placement>,
}

impl<S: ScoreModel> Deref for Played<'_, S> {
    type Target = Position<S>;

    fn deref(&self) -> &Position<S> {
        self.position
    }
}

impl<S: ScoreModel> DerefMut for Played<'_, S> {
    fn deref_mut(&mut self) -> &mut Position<S> {
        self.position
    }
}

impl<S: ScoreModel> Drop for Played<'_, S> {
    fn drop(&mut self) {
        if let Some(placement) = self.placement.take() {
            let Position { board, scores } = &mut *self.position;
            scores.on_move(board, placement.point(), placement.previous(), placement.placed());
            board.undo(placement);
        }
    }
}
