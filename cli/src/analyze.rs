use std::io::{self, Write};
use std::time::Instant;

use thiserror::Error;
use tictactoe_engine::{best_move, log, Board, InvalidBoardError, SearchResult, Side};

use crate::config::MarkerConfig;
use crate::game::result_message;
use crate::render::render_board;

#[derive(Error, Debug)]
pub enum AnalyzeError {
    #[error(transparent)]
    Board(#[from] InvalidBoardError),

    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),
}

fn describe_value(score: i32) -> &'static str {
    match score.signum() {
        1 => "agent wins with best play",
        -1 => "user wins with best play",
        _ => "draw with best play",
    }
}

/// Prints the position given in board notation together with the optimal
/// move for `side` and its minimax value.
pub fn analyze_position<W: Write>(
    board_text: &str,
    side: Side,
    markers: &MarkerConfig,
    output: &mut W,
) -> Result<SearchResult, AnalyzeError> {
    let mut board: Board = board_text.parse()?;
    write!(output, "{}", render_board(&board, markers))?;

    let status = board.result();
    if status.is_terminal() {
        writeln!(output, "{}", result_message(status))?;
    } else {
        writeln!(output, "{} to move.", side)?;
    }

    let started = Instant::now();
    let result = best_move(&mut board, side);
    log!(
        "Analyzed {} for {}: {} nodes in {:?}",
        board_text,
        side,
        result.nodes,
        started.elapsed()
    );

    match result.best {
        Some(mv) => writeln!(
            output,
            "Best move: {} (keypad {}), value {:+} ({}), {} positions searched.",
            mv,
            mv.keypad(),
            result.score,
            describe_value(result.score),
            result.nodes
        )?,
        None => writeln!(output, "No move to make, value {:+}.", result.score)?,
    }

    Ok(result)
}
