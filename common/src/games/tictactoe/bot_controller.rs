use crate::games::SessionRng;
use super::board::{Board, get_available_moves};
use super::types::{Difficulty, Mark, Outcome};
use super::win_detector::evaluate;

const WIN_SCORE: i32 = 1;
const LOSS_SCORE: i32 = -1;
const DRAW_SCORE: i32 = 0;

/// Picks the next cell for `automated_mark`, or `None` when the board is full.
pub fn select_move(
    board: &Board,
    difficulty: Difficulty,
    automated_mark: Mark,
    rng: &mut SessionRng,
) -> Option<usize> {
    match difficulty {
        Difficulty::Normal => calculate_random_move(board, rng),
        Difficulty::Hard => calculate_minimax_move(board, automated_mark),
    }
}

pub fn calculate_random_move(board: &Board, rng: &mut SessionRng) -> Option<usize> {
    let available_moves = get_available_moves(board);
    if available_moves.is_empty() {
        return None;
    }
    let idx = rng.random_range(0..available_moves.len());
    Some(available_moves[idx])
}

/// Full-depth search. Each root child is searched with an open window so its
/// value is exact; ties keep the lowest index.
pub fn calculate_minimax_move(board: &Board, bot_mark: Mark) -> Option<usize> {
    let opponent_mark = bot_mark.opponent()?;
    let available_moves = get_available_moves(board);

    if available_moves.is_empty() {
        return None;
    }

    let mut board = *board;
    let mut best_move = None;
    let mut best_score = i32::MIN;

    for index in available_moves {
        board.place(index, bot_mark);
        let score = minimax(&mut board, false, bot_mark, opponent_mark, i32::MIN, i32::MAX);
        board.clear(index);

        if score > best_score {
            best_score = score;
            best_move = Some(index);
        }
    }

    best_move
}

fn terminal_score(board: &Board, bot_mark: Mark) -> Option<i32> {
    match evaluate(board) {
        Outcome::InProgress => None,
        Outcome::Draw => Some(DRAW_SCORE),
        Outcome::Win(winner) if winner == bot_mark => Some(WIN_SCORE),
        Outcome::Win(_) => Some(LOSS_SCORE),
    }
}

fn minimax(
    board: &mut Board,
    is_maximizing: bool,
    bot_mark: Mark,
    opponent_mark: Mark,
    mut alpha: i32,
    mut beta: i32,
) -> i32 {
    if let Some(score) = terminal_score(board, bot_mark) {
        return score;
    }

    let moves = get_available_moves(board);

    if is_maximizing {
        let mut max_eval = i32::MIN;
        for index in moves {
            board.place(index, bot_mark);
            let eval = minimax(board, false, bot_mark, opponent_mark, alpha, beta);
            board.clear(index);

            max_eval = max_eval.max(eval);
            alpha = alpha.max(eval);
            if beta <= alpha {
                break;
            }
        }
        max_eval
    } else {
        let mut min_eval = i32::MAX;
        for index in moves {
            board.place(index, opponent_mark);
            let eval = minimax(board, true, bot_mark, opponent_mark, alpha, beta);
            board.clear(index);

            min_eval = min_eval.min(eval);
            beta = beta.min(eval);
            if beta <= alpha {
                break;
            }
        }
        min_eval
    }
}
