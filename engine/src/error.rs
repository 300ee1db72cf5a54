//! Error types shared by the board model and the game state machine.

use thiserror::Error;

use crate::types::{Move, Side};

/// A move that cannot be played on the current board.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMoveError {
    #[error("cell {mv} is already taken by the {by}")]
    Occupied { mv: Move, by: Side },

    #[error("cell {mv} is outside the 3x3 grid")]
    OutOfBounds { mv: Move },
}

impl IllegalMoveError {
    pub fn mv(&self) -> Move {
        match self {
            IllegalMoveError::Occupied { mv, .. } | IllegalMoveError::OutOfBounds { mv } => *mv,
        }
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    #[error("game is already over")]
    GameOver,

    #[error("it is not the {side}'s turn")]
    NotYourTurn { side: Side },

    #[error(transparent)]
    IllegalMove(#[from] IllegalMoveError),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidBoardError {
    #[error("expected 9 cells, got {got} in '{context}'")]
    Length { got: usize, context: String },

    #[error("invalid character '{character}' at cell {position} in '{context}'")]
    Character {
        character: char,
        position: usize,
        context: String,
    },
}
