use super::board::Board;
use super::types::Mark;
use super::win_detector::WIN_PATTERNS;

/// Checks that a board is reachable with X moving first: X leads O by at
/// most one move and at most one mark owns a complete line.
pub fn validate_board(board: &Board) -> Result<(), String> {
    let x_count = board.count(Mark::X);
    let o_count = board.count(Mark::O);

    if x_count < o_count || x_count > o_count + 1 {
        return Err(format!(
            "Mark counts out of turn order: {} X, {} O",
            x_count, o_count
        ));
    }

    let cells = board.cells();
    let line_owner = |mark: Mark| {
        WIN_PATTERNS
            .iter()
            .any(|pattern| pattern.iter().all(|&index| cells[index] == mark))
    };

    let x_won = line_owner(Mark::X);
    let o_won = line_owner(Mark::O);

    if x_won && o_won {
        return Err("Both X and O have a complete line".to_string());
    }
    if x_won && x_count == o_count {
        return Err("O moved after X had already won".to_string());
    }
    if o_won && x_count > o_count {
        return Err("X moved after O had already won".to_string());
    }

    Ok(())
}
