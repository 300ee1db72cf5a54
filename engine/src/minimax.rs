use crate::board::Board;
use crate::session_rng::SessionRng;
use crate::types::{CELL_COUNT, CORNERS, Move, Side};

/// Outcome of a full-depth search. `best` is `None` when the searched board
/// was already terminal, in which case `score` is that board's score.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchResult {
    pub best: Option<Move>,
    pub score: i32,
    pub nodes: u64,
}

/// Exhaustive minimax for `side_to_move`. The agent maximises, the user
/// minimises, and the first candidate in row-major order wins ties.
///
/// Trial moves are placed on `board` itself and undone before returning, so
/// the board compares equal to its input afterwards.
pub fn best_move(board: &mut Board, side_to_move: Side) -> SearchResult {
    let mut nodes = 0;
    let (best, score) = minimax(board, side_to_move, &mut nodes);
    SearchResult { best, score, nodes }
}

fn minimax(board: &mut Board, side: Side, nodes: &mut u64) -> (Option<Move>, i32) {
    *nodes += 1;

    // Every child is entered right after its move, so a line completed by
    // the side that just moved ends the branch here.
    if board.result().is_terminal() {
        return (None, board.score());
    }

    let mut best_move = None;
    let mut best_score = if side.is_maximizing() {
        i32::MIN
    } else {
        i32::MAX
    };

    for mv in board.free_cells() {
        let Ok(mut trial) = board.scoped(mv, side) else {
            continue;
        };
        let (_, score) = minimax(&mut trial, side.opponent(), nodes);
        drop(trial);

        let improves = if side.is_maximizing() {
            score > best_score
        } else {
            score < best_score
        };
        if improves {
            best_move = Some(mv);
            best_score = score;
        }
    }

    (best_move, best_score)
}

/// What the agent decided for one turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveChoice {
    /// Random corner on an empty board; all four are equivalent.
    Opening(Move),
    Searched(SearchResult),
}

impl MoveChoice {
    pub fn mv(&self) -> Option<Move> {
        match self {
            MoveChoice::Opening(mv) => Some(*mv),
            MoveChoice::Searched(result) => result.best,
        }
    }
}

/// Picks a move for `side`. The agent's opening on an empty board is a
/// random corner instead of a full-tree search.
pub fn choose_move(board: &mut Board, side: Side, rng: &mut SessionRng) -> MoveChoice {
    if side == Side::Agent
        && board.free_cells().len() == CELL_COUNT
        && let Some(&corner) = rng.pick(&CORNERS)
    {
        return MoveChoice::Opening(corner);
    }
    MoveChoice::Searched(best_move(board, side))
}
