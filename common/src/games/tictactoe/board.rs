use super::types::{CELL_COUNT, Mark, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Reads nine cell symbols (`X`, `O`, and `.`, `_` or `-` for empty).
    /// Whitespace and the `|` and `/` separators are skipped, so both
    /// `"XO./.X./..O"` and `"X O _ | _ X _ | _ _ O"` are accepted.
    pub fn parse(input: &str) -> Result<Self, String> {
        let mut cells = [Mark::Empty; CELL_COUNT];
        let mut count = 0;

        for symbol in input.chars() {
            if symbol.is_whitespace() || symbol == '|' || symbol == '/' {
                continue;
            }
            let mark = Mark::from_symbol(symbol)
                .ok_or_else(|| format!("Invalid cell symbol '{}'", symbol))?;
            if count == CELL_COUNT {
                return Err(format!("Board has more than {} cells", CELL_COUNT));
            }
            cells[count] = mark;
            count += 1;
        }

        if count != CELL_COUNT {
            return Err(format!(
                "Board must have exactly {} cells, got {}",
                CELL_COUNT, count
            ));
        }

        Ok(Self { cells })
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    pub fn get_at(&self, pos: Position) -> Option<Mark> {
        pos.to_index().and_then(|index| self.get(index))
    }

    pub fn set(&mut self, index: usize, mark: Mark) -> Result<(), String> {
        let cell = self
            .cells
            .get_mut(index)
            .ok_or_else(|| format!("Cell index {} out of bounds", index))?;
        *cell = mark;
        Ok(())
    }

    pub fn is_empty_at(&self, index: usize) -> bool {
        self.get(index) == Some(Mark::Empty)
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == mark).count()
    }

    /// Mark whose turn it is when X moved first and turns alternated.
    pub fn next_mark(&self) -> Mark {
        if self.count(Mark::X) > self.count(Mark::O) {
            Mark::O
        } else {
            Mark::X
        }
    }

    pub(crate) fn place(&mut self, index: usize, mark: Mark) {
        self.cells[index] = mark;
    }

    pub(crate) fn clear(&mut self, index: usize) {
        self.cells[index] = Mark::Empty;
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.cells.chunks(3).enumerate() {
            if i > 0 {
                write!(f, "/")?;
            }
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}

pub fn get_available_moves(board: &Board) -> Vec<usize> {
    board
        .cells
        .iter()
        .enumerate()
        .filter(|(_, cell)| **cell == Mark::Empty)
        .map(|(index, _)| index)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_separators_and_placeholders() {
        let board = Board::parse("XO_/.x-/ | o . .").unwrap();

        assert_eq!(board.get(0), Some(Mark::X));
        assert_eq!(board.get(1), Some(Mark::O));
        assert_eq!(board.get(4), Some(Mark::X));
        assert_eq!(board.get(6), Some(Mark::O));
        assert_eq!(board.count(Mark::Empty), 5);
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        assert!(Board::parse("XO").is_err());
        assert!(Board::parse("XOXOXOXOXO").is_err());
    }

    #[test]
    fn test_parse_rejects_unknown_symbol() {
        let err = Board::parse("XOZ......").unwrap_err();
        assert!(err.contains('Z'));
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        let board = Board::parse("XO./.X./..O").unwrap();
        assert_eq!(board.to_string(), "XO./.X./..O");
        assert_eq!(Board::parse(&board.to_string()).unwrap(), board);
    }

    #[test]
    fn test_available_moves_in_row_major_order() {
        let board = Board::parse("X.O/.X./O..").unwrap();
        assert_eq!(get_available_moves(&board), vec![1, 3, 5, 7, 8]);
    }

    #[test]
    fn test_set_out_of_bounds_is_rejected() {
        let mut board = Board::new();
        assert!(board.set(9, Mark::X).is_err());
        assert!(board.set(8, Mark::X).is_ok());
        assert_eq!(board.get_at(Position::new(2, 2)), Some(Mark::X));
    }

    #[test]
    fn test_next_mark_follows_alternation() {
        assert_eq!(Board::new().next_mark(), Mark::X);
        assert_eq!(Board::parse("X........").unwrap().next_mark(), Mark::O);
        assert_eq!(Board::parse("XO.......").unwrap().next_mark(), Mark::X);
    }
}
