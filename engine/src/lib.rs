//! Tic-tac-toe on a 3x3 board with an agent that always plays a
//! game-theoretically optimal move, found by exhaustive minimax.
//!
//! ```
//! use tictactoe_engine::{Board, Move, Side, best_move};
//!
//! let mut board: Board = "XOX/OOX/...".parse().unwrap();
//! let result = best_move(&mut board, Side::Agent);
//! assert_eq!(result.best, Some(Move::new(2, 1)));
//! assert_eq!(result.score, 1);
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod game_state;
pub mod logger;
pub mod minimax;
pub mod session_rng;
pub mod types;
mod win_detector;

pub use board::{Board, ScopedMove};
pub use error::{GameError, IllegalMoveError, InvalidBoardError};
pub use game_state::{AgentTurn, GameState};
pub use minimax::{MoveChoice, SearchResult, best_move, choose_move};
pub use session_rng::SessionRng;
pub use types::{BOARD_SIZE, CELL_COUNT, CORNERS, Cell, FirstPlayerMode, GameResult, Move, Side};
pub use win_detector::LINES;
