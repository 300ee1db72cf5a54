use crate::board::Board;
use crate::error::GameError;
use crate::minimax::{MoveChoice, choose_move};
use crate::session_rng::SessionRng;
use crate::types::{GameResult, Move, Side};

/// One game from the empty board to a terminal result.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    first: Side,
    current: Side,
    status: GameResult,
    last_move: Option<Move>,
    moves_played: usize,
}

/// The agent's half-move as it was played.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgentTurn {
    pub mv: Move,
    pub choice: MoveChoice,
    pub status: GameResult,
}

impl GameState {
    pub fn new(first: Side) -> Self {
        Self {
            board: Board::new(),
            first,
            current: first,
            status: GameResult::InProgress,
            last_move: None,
            moves_played: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn first_player(&self) -> Side {
        self.first
    }

    pub fn current_side(&self) -> Side {
        self.current
    }

    pub fn status(&self) -> GameResult {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    pub fn place_mark(&mut self, side: Side, mv: Move) -> Result<GameResult, GameError> {
        if self.status.is_terminal() {
            return Err(GameError::GameOver);
        }

        if side != self.current {
            return Err(GameError::NotYourTurn { side });
        }

        self.board.apply(mv, side)?;
        self.last_move = Some(mv);
        self.moves_played += 1;
        self.status = self.board.result();

        if !self.status.is_terminal() {
            self.current = side.opponent();
        }

        Ok(self.status)
    }

    /// Computes and plays the agent's move.
    pub fn play_agent_turn(&mut self, rng: &mut SessionRng) -> Result<AgentTurn, GameError> {
        if self.status.is_terminal() {
            return Err(GameError::GameOver);
        }

        if self.current != Side::Agent {
            return Err(GameError::NotYourTurn { side: Side::Agent });
        }

        let choice = choose_move(&mut self.board, Side::Agent, rng);
        // A non-terminal board always has a free cell, so the search found one.
        let mv = choice.mv().ok_or(GameError::GameOver)?;
        let status = self.place_mark(Side::Agent, mv)?;

        Ok(AgentTurn { mv, choice, status })
    }
}
