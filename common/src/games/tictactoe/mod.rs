mod board;
mod bot_controller;
mod game_state;
mod types;
mod validate;
mod win_detector;

pub use board::{Board, get_available_moves};
pub use bot_controller::{calculate_minimax_move, calculate_random_move, select_move};
pub use game_state::{DEFAULT_COMPUTER_MARK, TicTacToeGameState};
pub use types::{
    BOARD_SIDE, CELL_COUNT, Difficulty, GameStatus, Mark, Outcome, Position, WinningLine,
};
pub use validate::validate_board;
pub use win_detector::{WIN_PATTERNS, check_win, check_win_with_line, evaluate};
