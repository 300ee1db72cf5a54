use std::io::{self, BufRead, Write};
use std::time::Instant;

use thiserror::Error;
use tictactoe_engine::{
    log, FirstPlayerMode, GameError, GameResult, GameState, MoveChoice, SessionRng, Side,
};

use crate::config::MarkerConfig;
use crate::input::{parse_command, parse_yes_no, Command};
use crate::render::{render_board, render_keypad_help};

const MOVE_PROMPT: &str = "Select a number between 1 and 9: ";
const TAKEN_PROMPT: &str = "That square is already taken. Select another one: ";
const START_PROMPT: &str = "Do you want to start? (y/n): ";

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Game(#[from] GameError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    Finished(GameResult),
    Quit,
}

pub struct GameOptions {
    /// `None` asks the player.
    pub first_player: Option<FirstPlayerMode>,
    pub markers: MarkerConfig,
}

fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

fn ask_first_player<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<Option<Side>> {
    loop {
        write!(output, "{}", START_PROMPT)?;
        output.flush()?;
        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        match parse_yes_no(&line) {
            Some(true) => return Ok(Some(Side::User)),
            Some(false) => return Ok(Some(Side::Agent)),
            None => continue,
        }
    }
}

/// Plays one game on the given console streams.
pub fn run_game<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    options: &GameOptions,
    rng: &mut SessionRng,
) -> Result<SessionOutcome, SessionError> {
    let first = match options.first_player {
        Some(mode) => mode.resolve(rng),
        None => match ask_first_player(input, output)? {
            Some(side) => side,
            None => return Ok(SessionOutcome::Quit),
        },
    };
    log!("Starting game, seed {}, {} moves first", rng.seed(), first);

    let mut state = GameState::new(first);
    write!(output, "{}", render_keypad_help())?;

    while !state.is_over() {
        match state.current_side() {
            Side::Agent => {
                let started = Instant::now();
                let turn = state.play_agent_turn(rng)?;
                match turn.choice {
                    MoveChoice::Opening(mv) => log!("Agent opens in corner {}", mv),
                    MoveChoice::Searched(result) => log!(
                        "Agent plays {} with value {} after {} nodes in {:?}",
                        turn.mv,
                        result.score,
                        result.nodes,
                        started.elapsed()
                    ),
                }
                writeln!(output, "\nThe computer plays {}.", turn.mv.keypad())?;
            }
            Side::User => {
                write!(output, "{}", render_board(state.board(), &options.markers))?;
                let mut prompt = MOVE_PROMPT;
                loop {
                    write!(output, "{}", prompt)?;
                    output.flush()?;
                    let Some(line) = read_line(input)? else {
                        log!("Input closed, leaving game");
                        return Ok(SessionOutcome::Quit);
                    };
                    match parse_command(&line) {
                        Ok(Command::Quit) => {
                            log!("Player quit after {} moves", state.moves_played());
                            return Ok(SessionOutcome::Quit);
                        }
                        Ok(Command::Place(mv)) => match state.place_mark(Side::User, mv) {
                            Ok(_) => {
                                log!("User plays {}", mv);
                                break;
                            }
                            Err(GameError::IllegalMove(e)) => {
                                log!("Rejected user move: {}", e);
                                prompt = TAKEN_PROMPT;
                            }
                            Err(e) => return Err(e.into()),
                        },
                        Err(e) => {
                            writeln!(output, "{}.", e)?;
                            prompt = MOVE_PROMPT;
                        }
                    }
                }
            }
        }
    }

    let status = state.status();
    write!(output, "{}", render_board(state.board(), &options.markers))?;
    writeln!(output, "{}", result_message(status))?;
    log!("Game over after {} moves: {:?}", state.moves_played(), status);

    Ok(SessionOutcome::Finished(status))
}

pub fn result_message(status: GameResult) -> &'static str {
    match status {
        GameResult::UserWins => "The user wins!",
        GameResult::AgentWins => "The computer wins!",
        GameResult::Draw => "Draw!",
        GameResult::InProgress => "The game is still in progress.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn play(script: &str, first_player: Option<FirstPlayerMode>, seed: u64) -> (SessionOutcome, String) {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        let options = GameOptions {
            first_player,
            markers: MarkerConfig::default(),
        };
        let mut rng = SessionRng::new(seed);
        let outcome = run_game(&mut input, &mut output, &options, &mut rng).unwrap();
        (outcome, String::from_utf8(output).unwrap())
    }

    fn every_key_repeated() -> String {
        (0..6)
            .flat_map(|_| 1..=9)
            .map(|k| format!("{}\n", k))
            .collect()
    }

    #[test]
    fn test_quit_at_first_prompt() {
        let (outcome, output) = play("q\n", Some(FirstPlayerMode::User), 1);
        assert_eq!(outcome, SessionOutcome::Quit);
        assert!(output.contains(MOVE_PROMPT));
    }

    #[test]
    fn test_end_of_input_quits() {
        let (outcome, _) = play("", Some(FirstPlayerMode::User), 1);
        assert_eq!(outcome, SessionOutcome::Quit);
        let (outcome, _) = play("", None, 1);
        assert_eq!(outcome, SessionOutcome::Quit);
    }

    #[test]
    fn test_bad_input_is_reported_and_prompt_repeats() {
        let (outcome, output) = play("abc\n0\n\nq\n", Some(FirstPlayerMode::User), 1);
        assert_eq!(outcome, SessionOutcome::Quit);
        assert!(output.contains("'abc' is not a number."));
        assert!(output.contains("0 is not between 1 and 9."));
        assert!(output.contains("no input given."));
        assert_eq!(output.matches(MOVE_PROMPT).count(), 4);
    }

    #[test]
    fn test_taken_square_prompts_again() {
        let (outcome, output) = play("5\n5\nq\n", Some(FirstPlayerMode::User), 1);
        assert_eq!(outcome, SessionOutcome::Quit);
        assert!(output.contains("The computer plays 1."));
        assert!(output.contains(TAKEN_PROMPT));
    }

    #[test]
    fn test_asks_who_starts_until_answered() {
        let (outcome, output) = play("maybe\nn\nq\n", None, 1);
        assert_eq!(outcome, SessionOutcome::Quit);
        assert_eq!(output.matches(START_PROMPT).count(), 2);
        assert!(output.contains("The computer plays"));
    }

    #[test]
    fn test_user_first_game_never_ends_in_user_win() {
        let (outcome, output) = play(&every_key_repeated(), Some(FirstPlayerMode::User), 3);
        match outcome {
            SessionOutcome::Finished(GameResult::AgentWins) => {
                assert!(output.contains("The computer wins!"))
            }
            SessionOutcome::Finished(GameResult::Draw) => assert!(output.contains("Draw!")),
            other => panic!("unexpected outcome {other:?}\n{output}"),
        }
    }

    #[test]
    fn test_agent_first_game_never_ends_in_user_win() {
        for seed in [1, 2, 3, 4] {
            let (outcome, _) = play(&every_key_repeated(), Some(FirstPlayerMode::Agent), seed);
            assert!(matches!(
                outcome,
                SessionOutcome::Finished(GameResult::AgentWins | GameResult::Draw)
            ));
        }
    }

    #[test]
    fn test_result_messages() {
        assert_eq!(result_message(GameResult::UserWins), "The user wins!");
        assert_eq!(result_message(GameResult::AgentWins), "The computer wins!");
        assert_eq!(result_message(GameResult::Draw), "Draw!");
    }
}
