//! Piskvork protocol handling for the gomoku engine.

pub mod command;
pub mod engine;
pub mod error;

pub use command::{BoardEntry, Command, InfoSetting};
pub use engine::GomokuEngine;
pub use error::ProtocolError;
