use std::fmt;
use std::ops::{Deref, DerefMut};
use std::str::FromStr;

use crate::error::{IllegalMoveError, InvalidBoardError};
use crate::types::{BOARD_SIZE, CELL_COUNT, Cell, GameResult, Move, Side};
use crate::win_detector::{check_win, check_win_with_line};

/// The 3x3 grid. Cells only ever go from empty to occupied through
/// [`Board::apply`]; the one exception is a [`ScopedMove`] undoing its own
/// trial placement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [[Cell; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    pub fn cell(&self, mv: Move) -> Option<Cell> {
        self.cells.get(mv.row)?.get(mv.col).copied()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell; BOARD_SIZE]> {
        self.cells.iter()
    }

    pub fn is_legal(&self, mv: Move) -> bool {
        self.cell(mv) == Some(Cell::Empty)
    }

    /// Places `side` on `mv`. Leaves the board untouched when the cell is
    /// taken or off the grid.
    pub fn apply(&mut self, mv: Move, side: Side) -> Result<(), IllegalMoveError> {
        match self.cell(mv) {
            None => Err(IllegalMoveError::OutOfBounds { mv }),
            Some(Cell::Occupied(by)) => Err(IllegalMoveError::Occupied { mv, by }),
            Some(Cell::Empty) => {
                self.cells[mv.row][mv.col] = Cell::Occupied(side);
                Ok(())
            }
        }
    }

    /// Applies a trial move that is undone when the returned guard drops.
    pub fn scoped(&mut self, mv: Move, side: Side) -> Result<ScopedMove<'_>, IllegalMoveError> {
        self.apply(mv, side)?;
        Ok(ScopedMove { board: self, mv })
    }

    /// Empty cells in row-major order. Search visits candidates in exactly
    /// this order, which fixes its tie-break.
    pub fn free_cells(&self) -> Vec<Move> {
        let mut moves = Vec::with_capacity(CELL_COUNT);
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                if cell.is_empty() {
                    moves.push(Move::new(row, col));
                }
            }
        }
        moves
    }

    pub fn occupied_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| !cell.is_empty())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.occupied_count() == 0
    }

    pub fn is_full(&self) -> bool {
        self.occupied_count() == CELL_COUNT
    }

    pub fn winner(&self, side: Side) -> bool {
        check_win(&self.cells, side)
    }

    pub fn winning_line(&self, side: Side) -> Option<[Move; 3]> {
        check_win_with_line(&self.cells, side)
    }

    /// Boards where both sides hold a line are not rejected; the user's line
    /// is reported first.
    pub fn result(&self) -> GameResult {
        if self.winner(Side::User) {
            GameResult::UserWins
        } else if self.winner(Side::Agent) {
            GameResult::AgentWins
        } else if self.is_full() {
            GameResult::Draw
        } else {
            GameResult::InProgress
        }
    }

    /// -1 for a user line, +1 for an agent line, 0 otherwise.
    pub fn score(&self) -> i32 {
        if self.winner(Side::User) {
            Side::User.weight()
        } else if self.winner(Side::Agent) {
            Side::Agent.weight()
        } else {
            0
        }
    }
}

/// A trial placement held for the lifetime of the guard.
pub struct ScopedMove<'a> {
    board: &'a mut Board,
    mv: Move,
}

impl ScopedMove<'_> {
    pub fn mv(&self) -> Move {
        self.mv
    }
}

impl Deref for ScopedMove<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for ScopedMove<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for ScopedMove<'_> {
    fn drop(&mut self) {
        self.board.cells[self.mv.row][self.mv.col] = Cell::Empty;
    }
}

fn cell_char(cell: Cell) -> char {
    match cell {
        Cell::Empty => '.',
        Cell::Occupied(Side::User) => 'X',
        Cell::Occupied(Side::Agent) => 'O',
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for &cell in row {
                write!(f, "{}", cell_char(cell))?;
            }
        }
        Ok(())
    }
}

/// Compact notation: `X` user, `O` agent, `.` `_` `-` empty. Whitespace,
/// `/` and `|` are separators and ignored.
impl FromStr for Board {
    type Err = InvalidBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
        let mut count = 0;

        for character in s.chars() {
            if character.is_whitespace() || character == '/' || character == '|' {
                continue;
            }
            let cell = match character {
                'X' | 'x' => Cell::Occupied(Side::User),
                'O' | 'o' => Cell::Occupied(Side::Agent),
                '.' | '_' | '-' => Cell::Empty,
                _ => {
                    return Err(InvalidBoardError::Character {
                        character,
                        position: count,
                        context: s.to_string(),
                    });
                }
            };
            if count < CELL_COUNT {
                cells[count / BOARD_SIZE][count % BOARD_SIZE] = cell;
            }
            count += 1;
        }

        if count != CELL_COUNT {
            return Err(InvalidBoardError::Length {
                got: count,
                context: s.to_string(),
            });
        }

        Ok(Self { cells })
    }
}
