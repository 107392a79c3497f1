//! Candidate generation and move ordering.
//!
//! Candidates are the empty cells touching a stone. Forcing situations narrow
//! the set; quiet positions are sorted by pattern gain and truncated.

use gomoku_core::{Board, LINE_DIRECTIONS, LineShape, Point, Side};

/// Candidates for one node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Expansion {
    /// Cells where the side to move completes five right now.
    pub five_attacks: Vec<Point>,
    /// Moves to search, best first.
    pub candidates: Vec<Point>,
}

/// Produces the ordered candidate moves for a side.
pub trait MoveOrdering {
    fn expand(&mut self, board: &Board, side: Side) -> Expansion;

    /// Cap on quiet candidates. Orderings without one ignore it.
    fn set_branch_limit(&mut self, _limit: usize) {}
}

/// What a single move does for one player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Threat {
    None,
    Four,
    OpenFour,
    Five,
}

/// Value of a run shape for the quiet-move gain, indexed by
/// `[min(length, 4)][open_ends]`.
const SHAPE_GAIN: [[i32; 3]; 5] = [
    [0, 0, 0],
    [0, 1, 10],
    [0, 10, 100],
    [0, 100, 1_000],
    [0, 1_000, 10_000],
];

fn shape_gain(shape: LineShape) -> i32 {
    if shape.is_five() {
        return 100_000;
    }
    SHAPE_GAIN[shape.length.min(4) as usize][shape.open_ends.min(2) as usize]
}

/// Classify `point` for `side` and return the threat plus its pattern gain.
fn classify(board: &Board, point: Point, side: Side) -> (Threat, i32) {
    let mut threat = Threat::None;
    let mut gain = 0;
    for dir in LINE_DIRECTIONS {
        let shape = board.line_shape(point, side, dir);
        let here = if shape.is_five() {
            Threat::Five
        } else if shape.is_open_four() {
            Threat::OpenFour
        } else if shape.is_four() {
            Threat::Four
        } else {
            Threat::None
        };
        threat = threat.max(here);
        gain += shape_gain(shape);
    }
    (threat, gain)
}

/// Threat-first ordering over neighbor candidates.
///
/// Priority, first non-empty wins:
/// 1. own five-completions
/// 2. blocks against the opponent's five
/// 3. own open fours
/// 4. blocks against the opponent's open four, plus own fours
/// 5. every neighbor sorted by attack + defence gain, truncated to the
///    branch limit
#[derive(Debug, Clone)]
pub struct ThreatOrdering {
    branch_limit: usize,
}

impl ThreatOrdering {
    pub fn new(branch_limit: usize) -> Self {
        Self { branch_limit }
    }
}

impl MoveOrdering for ThreatOrdering {
    fn set_branch_limit(&mut self, limit: usize) {
        self.branch_limit = limit;
    }

    fn expand(&mut self, board: &Board, side: Side) -> Expansion {
        if board.is_empty() {
            return Expansion {
                five_attacks: Vec::new(),
                candidates: vec![Point::CENTER],
            };
        }

        let opponent = side.opponent();
        let mut own_fives = Vec::new();
        let mut their_fives = Vec::new();
        let mut own_open_fours = Vec::new();
        let mut own_fours = Vec::new();
        let mut their_open_fours = Vec::new();
        let mut scored = Vec::new();

        for point in board.neighbor_candidates() {
            let (attack, attack_gain) = classify(board, point, side);
            let (defence, defence_gain) = classify(board, point, opponent);
            match attack {
                Threat::Five => own_fives.push(point),
                Threat::OpenFour => own_open_fours.push(point),
                Threat::Four => own_fours.push(point),
                Threat::None => {}
            }
            match defence {
                Threat::Five => their_fives.push(point),
                Threat::OpenFour => their_open_fours.push(point),
                Threat::Four | Threat::None => {}
            }
            scored.push((point, attack_gain + defence_gain));
        }

        let candidates = if !own_fives.is_empty() {
            own_fives.clone()
        } else if !their_fives.is_empty() {
            their_fives
        } else if !own_open_fours.is_empty() {
            own_open_fours
        } else if !their_open_fours.is_empty() {
            let counters: Vec<Point> = own_fours
                .into_iter()
                .filter(|p| !their_open_fours.contains(p))
                .collect();
            let mut forced = their_open_fours;
            forced.extend(counters);
            forced
        } else {
            // Stable sort keeps index order among equal gains.
            scored.sort_by(|a, b| b.1.cmp(&a.1));
            scored.truncate(self.branch_limit);
            scored.into_iter().map(|(point, _)| point).collect()
        };

        Expansion {
            five_attacks: own_fives,
            candidates,
        }
    }
}
