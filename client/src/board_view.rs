use tictactoe_common::games::tictactoe::{Board, GameStatus, Mark, WinningLine};

/// Draws the grid with free cells numbered 1-9.
pub fn render_board(board: &Board) -> String {
    let rows: Vec<String> = board
        .cells()
        .chunks(3)
        .enumerate()
        .map(|(row, cells)| {
            let symbols: Vec<String> = cells
                .iter()
                .enumerate()
                .map(|(col, &mark)| match mark {
                    Mark::Empty => (row * 3 + col + 1).to_string(),
                    _ => mark.to_string(),
                })
                .collect();
            format!(" {} ", symbols.join(" | "))
        })
        .collect();
    rows.join("\n---+---+---\n")
}

pub fn describe_result(status: GameStatus, line: Option<WinningLine>) -> Option<String> {
    let winner = match status {
        GameStatus::InProgress => return None,
        GameStatus::Draw => return Some("It's a draw!".to_string()),
        GameStatus::XWon => Mark::X,
        GameStatus::OWon => Mark::O,
    };

    Some(match line {
        Some(line) => {
            let [a, b, c] = line.cells.map(|index| index + 1);
            format!("Player {} wins! ({}-{}-{})", winner, a, b, c)
        }
        None => format!("Player {} wins!", winner),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_numbers_free_cells() {
        let board = Board::parse("X.O/.X./...").unwrap();
        let expected = " X | 2 | O \n---+---+---\n 4 | X | 6 \n---+---+---\n 7 | 8 | 9 ";
        assert_eq!(render_board(&board), expected);
    }

    #[test]
    fn test_describe_result() {
        assert_eq!(describe_result(GameStatus::InProgress, None), None);
        assert_eq!(
            describe_result(GameStatus::Draw, None),
            Some("It's a draw!".to_string())
        );
        let line = WinningLine::new(Mark::O, [2, 4, 6]);
        assert_eq!(
            describe_result(GameStatus::OWon, Some(line)),
            Some("Player O wins! (3-5-7)".to_string())
        );
    }
}
