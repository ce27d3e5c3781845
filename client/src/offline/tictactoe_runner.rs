use std::io::{BufRead, Write};

use tictactoe_common::games::SessionRng;
use tictactoe_common::games::tictactoe::{GameStatus, TicTacToeGameState};
use tictactoe_common::log;

use crate::board_view::{describe_result, render_board};
use crate::command::{HELP_TEXT, PlayerCommand, parse_command};

fn write_line<W: Write>(output: &mut W, text: &str) -> Result<(), String> {
    writeln!(output, "{}", text).map_err(|e| format!("Failed to write output: {}", e))
}

fn describe_opponent(state: &TicTacToeGameState) -> String {
    match state.computer_mark {
        Some(mark) => format!("Computer plays {} on {} difficulty.", mark, state.difficulty),
        None => "Two players, no computer.".to_string(),
    }
}

/// Drives one interactive session until `quit` or end of input.
pub fn run_tictactoe_game<R: BufRead, W: Write>(
    state: &mut TicTacToeGameState,
    rng: &mut SessionRng,
    input: &mut R,
    output: &mut W,
) -> Result<(), String> {
    write_line(output, &describe_opponent(state))?;
    write_line(output, "Type help for commands.")?;

    let mut needs_redraw = true;
    let mut line = String::new();

    loop {
        while let Some(index) = state.play_computer_move(rng)? {
            write_line(output, &format!("Computer plays {}.", index + 1))?;
            needs_redraw = true;
        }

        if needs_redraw {
            write_line(output, &render_board(&state.board))?;
            if let Some(result) = describe_result(state.status(), state.winning_line()) {
                write_line(output, &result)?;
                write_line(output, "Type reset to play again or quit to leave.")?;
            }
            needs_redraw = false;
        }

        if state.status() == GameStatus::InProgress {
            write!(output, "Player {}> ", state.current_mark)
                .and_then(|_| output.flush())
                .map_err(|e| format!("Failed to write output: {}", e))?;
        }

        line.clear();
        let read = input
            .read_line(&mut line)
            .map_err(|e| format!("Failed to read input: {}", e))?;
        if read == 0 {
            log!("Input closed, leaving game");
            return Ok(());
        }

        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                write_line(output, &e)?;
                continue;
            }
        };

        match command {
            PlayerCommand::Place(index) => match state.place_mark(index) {
                Ok(()) => needs_redraw = true,
                Err(e) => write_line(output, &e)?,
            },
            PlayerCommand::Reset => {
                state.reset();
                write_line(output, "New game.")?;
                needs_redraw = true;
            }
            PlayerCommand::ToggleComputer => {
                state.toggle_computer();
                write_line(output, &describe_opponent(state))?;
                needs_redraw = true;
            }
            PlayerCommand::SetDifficulty(difficulty) => {
                state.set_difficulty(difficulty);
                write_line(output, &describe_opponent(state))?;
                needs_redraw = true;
            }
            PlayerCommand::Help => write_line(output, HELP_TEXT)?,
            PlayerCommand::Quit => return Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tictactoe_common::games::tictactoe::{Difficulty, Mark};

    fn run_script(state: &mut TicTacToeGameState, script: &str) -> String {
        let mut rng = SessionRng::new(3);
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        run_tictactoe_game(state, &mut rng, &mut input, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_two_player_game_announces_winner() {
        let mut state = TicTacToeGameState::new(Difficulty::Normal, None);
        let output = run_script(&mut state, "1\n4\n2\n5\n3\nquit\n");

        assert!(output.contains("Player X wins! (1-2-3)"));
        assert_eq!(state.winner(), Some(Mark::X));
    }

    #[test]
    fn test_invalid_input_is_reported_and_game_continues() {
        let mut state = TicTacToeGameState::new(Difficulty::Normal, None);
        let output = run_script(&mut state, "5\n5\nbanana\n");

        assert!(output.contains("Cell is already marked"));
        assert!(output.contains("Unknown command 'banana'"));
        assert_eq!(state.current_mark, Mark::O);
    }

    #[test]
    fn test_hard_computer_answers_and_blocks() {
        let mut state = TicTacToeGameState::new(Difficulty::Hard, Some(Mark::O));
        let output = run_script(&mut state, "1\n2\n");

        assert!(output.contains("Computer plays 5."));
        assert!(output.contains("Computer plays 3."));
        assert_eq!(state.board.get(2), Some(Mark::O));
    }

    #[test]
    fn test_draw_is_announced() {
        let mut state = TicTacToeGameState::new(Difficulty::Normal, None);
        let output = run_script(&mut state, "1\n2\n3\n5\n4\n6\n8\n7\n9\n");

        assert!(output.contains("It's a draw!"));
    }

    #[test]
    fn test_reset_and_toggle_clear_board() {
        let mut state = TicTacToeGameState::new(Difficulty::Normal, None);
        let output = run_script(&mut state, "5\nreset\ncomputer\ndifficulty hard\n");

        assert!(output.contains("New game."));
        assert!(output.contains("Computer plays O on hard difficulty."));
        assert_eq!(state.computer_mark, Some(Mark::O));
        assert_eq!(state.difficulty, Difficulty::Hard);
        assert_eq!(state.board.count(Mark::Empty), 9);
    }

    #[test]
    fn test_computer_as_x_opens_the_game() {
        let mut state = TicTacToeGameState::new(Difficulty::Hard, Some(Mark::X));
        let output = run_script(&mut state, "");

        assert!(output.contains("Computer plays 1."));
        assert_eq!(state.board.get(0), Some(Mark::X));
    }
}
