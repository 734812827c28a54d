#[macro_use]
mod logging;

pub mod board;
pub mod engine;
mod position;
pub mod search;
mod sync;

pub use board::{Board, Color, Move, Piece, Square};
pub use engine::{Engine, EngineError, EngineOptions, EngineOptionsUpdate, OptionError, SearchJob};
pub use position::Position;
pub use search::{evaluate_position, valid_moves, MoveEvaluation, MATE_SCORE};
pub use sync::ThinkingFlag;
