use tictactoe_common::games::SessionRng;
use tictactoe_common::games::tictactoe::{
    Board, Difficulty, Mark, Outcome, evaluate, select_move, validate_board,
};
use tictactoe_common::log;

pub struct SuggestRequest {
    pub board: String,
    pub mark: Option<Mark>,
    pub difficulty: Difficulty,
    pub allow_unreachable: bool,
}

/// Returns the 0-based index the selector picks, or a note that the board
/// has no free cell.
pub fn suggest_move(request: &SuggestRequest, rng: &mut SessionRng) -> Result<String, String> {
    let board = Board::parse(&request.board)?;
    if !request.allow_unreachable {
        validate_board(&board)?;
    }

    let mark = request.mark.unwrap_or_else(|| board.next_mark());
    if let outcome @ (Outcome::Win(_) | Outcome::Draw) = evaluate(&board) {
        log!("Board {} is already decided: {:?}", board, outcome);
    }

    Ok(match select_move(&board, request.difficulty, mark, rng) {
        Some(index) => index.to_string(),
        None => "no move available".to_string(),
    })
}
