//! Search and evaluation for the gomoku engine.

pub mod combo;
pub mod config;
pub mod eval;
pub mod ordering;
pub mod position;
pub mod score;
pub mod search;

pub use combo::{ComboSearcher, ForcedWinOracle};
pub use config::{ConfigError, SearchConfig};
pub use eval::{PatternScore, ScoreModel};
pub use ordering::{Expansion, MoveOrdering, ThreatOrdering};
pub use position::{Played, Position};
pub use score::Score;
pub use search::control::SearchControl;
pub use search::counters::{CounterSnapshot, Counters};
pub use search::{Cancelled, SearchResult, Searcher};
