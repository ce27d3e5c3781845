use tictactoe_common::games::tictactoe::{Difficulty, Mark, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerCommand {
    Place(usize),
    Reset,
    ToggleComputer,
    SetDifficulty(Difficulty),
    Help,
    Quit,
}

pub const HELP_TEXT: &str = "\
Commands:
  1-9              place your mark on that cell
  <row> <col>      place by row and column (1-3 each)
  reset            start a new game
  computer         toggle the computer opponent (resets the game)
  difficulty <d>   normal or hard (resets the game)
  help             show this text
  quit             leave";

/// Blank lines parse to `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<PlayerCommand>, String> {
    let words: Vec<&str> = line.split_whitespace().collect();

    let command = match words.as_slice() {
        [] => return Ok(None),
        ["q" | "quit" | "exit"] => PlayerCommand::Quit,
        ["r" | "reset"] => PlayerCommand::Reset,
        ["c" | "computer"] => PlayerCommand::ToggleComputer,
        ["h" | "help" | "?"] => PlayerCommand::Help,
        ["d" | "difficulty", level] => PlayerCommand::SetDifficulty(level.parse()?),
        [cell] => PlayerCommand::Place(parse_cell_number(cell)?),
        [row, col] => PlayerCommand::Place(parse_row_col(row, col)?),
        _ => return Err(format!("Unknown command '{}', type help", line.trim())),
    };

    Ok(Some(command))
}

fn parse_cell_number(word: &str) -> Result<usize, String> {
    match word.parse::<usize>() {
        Ok(n @ 1..=9) => Ok(n - 1),
        _ => Err(format!("Unknown command '{}', type help", word)),
    }
}

fn parse_row_col(row: &str, col: &str) -> Result<usize, String> {
    let parse = |word: &str| match word.parse::<usize>() {
        Ok(n @ 1..=3) => Ok(n - 1),
        _ => Err(format!("Row and column must be 1-3, got '{}'", word)),
    };
    Position::new(parse(col)?, parse(row)?)
        .to_index()
        .ok_or_else(|| "Position out of bounds".to_string())
}

pub fn parse_player_mark(value: &str) -> Result<Mark, String> {
    match value.trim().to_ascii_uppercase().as_str() {
        "X" => Ok(Mark::X),
        "O" => Ok(Mark::O),
        other => Err(format!("Mark must be X or O, got '{}'", other)),
    }
}
