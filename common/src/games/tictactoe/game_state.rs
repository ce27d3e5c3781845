use crate::games::SessionRng;
use crate::log;
use super::board::Board;
use super::bot_controller::select_move;
use super::types::{CELL_COUNT, Difficulty, GameStatus, Mark, WinningLine};
use super::win_detector::{check_win_with_line, evaluate};

pub const DEFAULT_COMPUTER_MARK: Mark = Mark::O;

#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    pub board: Board,
    pub current_mark: Mark,
    pub difficulty: Difficulty,
    /// Mark played by the computer, `None` for two humans.
    pub computer_mark: Option<Mark>,
    pub status: GameStatus,
    pub last_move: Option<usize>,
}

impl TicTacToeGameState {
    pub fn new(difficulty: Difficulty, computer_mark: Option<Mark>) -> Self {
        Self {
            board: Board::new(),
            current_mark: Mark::X,
            difficulty,
            computer_mark,
            status: GameStatus::InProgress,
            last_move: None,
        }
    }

    pub fn place_mark(&mut self, index: usize) -> Result<(), String> {
        if self.is_computer_turn() {
            return Err("Not your turn".to_string());
        }
        self.apply_move(index)
    }

    /// Lets the computer move when it holds the current mark. Returns the
    /// chosen cell, or `None` when it is a human's turn or nothing is left.
    pub fn play_computer_move(&mut self, rng: &mut SessionRng) -> Result<Option<usize>, String> {
        if !self.is_computer_turn() {
            return Ok(None);
        }

        let Some(index) = select_move(&self.board, self.difficulty, self.current_mark, rng) else {
            return Ok(None);
        };

        self.apply_move(index)?;
        log!(
            "Computer ({}, {}) played cell {}",
            self.board.get(index).unwrap_or_default(),
            self.difficulty,
            index
        );
        Ok(Some(index))
    }

    fn apply_move(&mut self, index: usize) -> Result<(), String> {
        if self.status != GameStatus::InProgress {
            return Err("Game is already over".to_string());
        }

        if index >= CELL_COUNT {
            return Err("Position out of bounds".to_string());
        }

        if !self.board.is_empty_at(index) {
            return Err("Cell is already marked".to_string());
        }

        self.board.place(index, self.current_mark);
        self.last_move = Some(index);

        self.status = evaluate(&self.board).into();

        if self.status == GameStatus::InProgress {
            self.switch_turn();
        } else {
            log!("Game over: {:?}", self.status);
        }

        Ok(())
    }

    fn switch_turn(&mut self) {
        if let Some(next) = self.current_mark.opponent() {
            self.current_mark = next;
        }
    }

    pub fn reset(&mut self) {
        self.board = Board::new();
        self.current_mark = Mark::X;
        self.status = GameStatus::InProgress;
        self.last_move = None;
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        self.reset();
    }

    /// Switches between a human and the computer for the second seat.
    pub fn toggle_computer(&mut self) {
        self.computer_mark = match self.computer_mark {
            Some(_) => None,
            None => Some(DEFAULT_COMPUTER_MARK),
        };
        self.reset();
    }

    pub fn is_computer_turn(&self) -> bool {
        self.status == GameStatus::InProgress && self.computer_mark == Some(self.current_mark)
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn winner(&self) -> Option<Mark> {
        match self.status {
            GameStatus::XWon => Some(Mark::X),
            GameStatus::OWon => Some(Mark::O),
            _ => None,
        }
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        check_win_with_line(&self.board)
    }
}
