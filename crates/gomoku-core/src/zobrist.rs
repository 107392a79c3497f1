//! Zobrist hashing keys for position deduplication.

#[cfg(test)]
use crate::board::Board;
use crate::point::Point;
use crate::side::Side;

/// Zobrist key for each (player, cell) pair. Indexed by `[Side::index()][Point::index()]`.
pub(crate) static STONE_CELL: [[u64; Point::COUNT]; Side::PLAYERS] = {
    let mut table = [[0u64; Point::COUNT]; Side::PLAYERS];
    let mut state = SEED;
    let mut side = 0;
    while side < Side::PLAYERS {
        let mut cell = 0;
        while cell < Point::COUNT {
            let (val, next) = xorshift64(state);
            table[side][cell] = val;
            state = next;
            cell += 1;
        }
        side += 1;
    }
    table
};

const SEED: u64 = 0x474f_4d4f_4b55_2121; // "GOMOKU!!"

/// Xorshift64 PRNG. Returns (value, next_state).
const fn xorshift64(mut state: u64) -> (u64, u64) {
    state ^= state << 13;
    state ^= state >> 7;
    state ^= state << 17;
    (state, state)
}

/// Key contribution of `side` standing on `point`. Zero for `Empty`.
#[inline]
pub(crate) fn key(point: Point, side: Side) -> u64 {
    match side {
        Side::Empty => 0,
        stone => STONE_CELL[stone.index()][point.index()],
    }
}

/// Compute the hash of a board from scratch.
#[cfg(test)]
pub(crate) fn hash_from_scratch(board: &Board) -> u64 {
    Point::all().fold(0, |hash, p| hash ^ key(p, board.get(p)))
}
