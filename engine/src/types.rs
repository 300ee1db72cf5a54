use std::fmt;

use serde::{Deserialize, Serialize};

use crate::session_rng::SessionRng;

pub const BOARD_SIZE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    User,
    Agent,
}

impl Side {
    /// Contribution of a completed line to the board score.
    pub const fn weight(self) -> i32 {
        match self {
            Side::User => -1,
            Side::Agent => 1,
        }
    }

    pub const fn opponent(self) -> Side {
        match self {
            Side::User => Side::Agent,
            Side::Agent => Side::User,
        }
    }

    pub const fn is_maximizing(self) -> bool {
        matches!(self, Side::Agent)
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::User => write!(f, "user"),
            Side::Agent => write!(f, "agent"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Side),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    pub fn side(self) -> Option<Side> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(side) => Some(side),
        }
    }
}

/// Grid coordinates of a cell, row first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

const KEYPAD: [Move; CELL_COUNT] = [
    Move::new(0, 0),
    Move::new(0, 1),
    Move::new(0, 2),
    Move::new(1, 0),
    Move::new(1, 1),
    Move::new(1, 2),
    Move::new(2, 0),
    Move::new(2, 1),
    Move::new(2, 2),
];

pub const CORNERS: [Move; 4] = [
    Move::new(0, 0),
    Move::new(0, 2),
    Move::new(2, 0),
    Move::new(2, 2),
];

impl Move {
    /// Builds a move without bounds checking. Off-grid moves are never legal
    /// on a [`Board`](crate::Board); use [`Move::checked`] at input boundaries.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn checked(row: usize, col: usize) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Self::new(row, col))
        } else {
            None
        }
    }

    /// Maps keypad numbering, 1 top-left through 9 bottom-right.
    pub fn from_keypad(key: u8) -> Option<Self> {
        let index = usize::from(key).checked_sub(1)?;
        KEYPAD.get(index).copied()
    }

    pub fn keypad(self) -> u8 {
        (self.row * BOARD_SIZE + self.col + 1) as u8
    }

    pub fn is_on_board(self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    UserWins,
    AgentWins,
    Draw,
    InProgress,
}

impl GameResult {
    pub fn is_terminal(self) -> bool {
        self != GameResult::InProgress
    }

    pub fn winner(self) -> Option<Side> {
        match self {
            GameResult::UserWins => Some(Side::User),
            GameResult::AgentWins => Some(Side::Agent),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FirstPlayerMode {
    User,
    Agent,
    Random,
}

impl FirstPlayerMode {
    pub fn resolve(self, rng: &mut SessionRng) -> Side {
        match self {
            FirstPlayerMode::User => Side::User,
            FirstPlayerMode::Agent => Side::Agent,
            FirstPlayerMode::Random => {
                if rng.random_bool() {
                    Side::User
                } else {
                    Side::Agent
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_are_opposite() {
        assert_eq!(Side::User.weight(), -1);
        assert_eq!(Side::Agent.weight(), 1);
        assert_eq!(Side::User.opponent(), Side::Agent);
        assert_eq!(Side::Agent.opponent(), Side::User);
    }

    #[test]
    fn test_keypad_lookup_is_row_major() {
        assert_eq!(Move::from_keypad(1), Some(Move::new(0, 0)));
        assert_eq!(Move::from_keypad(3), Some(Move::new(0, 2)));
        assert_eq!(Move::from_keypad(5), Some(Move::new(1, 1)));
        assert_eq!(Move::from_keypad(7), Some(Move::new(2, 0)));
        assert_eq!(Move::from_keypad(9), Some(Move::new(2, 2)));
        assert_eq!(Move::from_keypad(0), None);
        assert_eq!(Move::from_keypad(10), None);
        for key in 1..=9 {
            assert_eq!(Move::from_keypad(key).map(Move::keypad), Some(key));
        }
    }

    #[test]
    fn test_checked_rejects_off_grid() {
        assert_eq!(Move::checked(2, 2), Some(Move::new(2, 2)));
        assert_eq!(Move::checked(3, 0), None);
        assert_eq!(Move::checked(0, 3), None);
    }

    #[test]
    fn test_fixed_first_player_modes() {
        let mut rng = SessionRng::new(7);
        assert_eq!(FirstPlayerMode::User.resolve(&mut rng), Side::User);
        assert_eq!(FirstPlayerMode::Agent.resolve(&mut rng), Side::Agent);
    }

    #[test]
    fn test_random_first_player_is_reproducible_from_seed() {
        let mut a = SessionRng::new(1234);
        let mut b = SessionRng::new(1234);
        for _ in 0..16 {
            assert_eq!(
                FirstPlayerMode::Random.resolve(&mut a),
                FirstPlayerMode::Random.resolve(&mut b)
            );
        }
    }
}
