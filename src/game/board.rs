pub const BOARD_SIZE: usize = 15;
pub const WIN_LENGTH: usize = 5;

/// Horizontal, vertical, diagonal (\) and anti-diagonal (/).
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Black,
    White,
}

/// A board coordinate. Row 0 is the top, column 0 the left edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }

    /// Whether the coordinate lies on the board
    pub fn in_bounds(self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    /// Step `k` cells along `(dr, dc)`, or `None` once off the board.
    fn offset(self, (dr, dc): (isize, isize), k: isize) -> Option<Position> {
        let row = self.row.checked_add_signed(dr * k)?;
        let col = self.col.checked_add_signed(dc * k)?;
        let pos = Position { row, col };
        pos.in_bounds().then_some(pos)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Get the cell at a specific position.
    /// Out-of-range coordinates read as `Cell::Empty`.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Cell::Empty;
        }
        self.cells[row][col]
    }

    /// Overwrite a cell. Callers check bounds first.
    pub(super) fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.row][pos.col] = cell;
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&cell| cell != Cell::Empty))
    }

    /// Number of non-empty cells
    pub fn stone_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell != Cell::Empty)
            .count()
    }

    /// All empty cells in row-major order
    pub fn empty_cells(&self) -> impl Iterator<Item = Position> + '_ {
        (0..BOARD_SIZE)
            .flat_map(|row| (0..BOARD_SIZE).map(move |col| Position::new(row, col)))
            .filter(|pos| self.cells[pos.row][pos.col] == Cell::Empty)
    }

    /// Check if the last move at (row, col) completed five in a row
    pub fn check_win(&self, row: usize, col: usize) -> bool {
        self.winning_line(row, col).is_some()
    }

    /// The full run through (row, col) if it is at least `WIN_LENGTH` long.
    ///
    /// Only the lines passing through the given cell are scanned, so this is
    /// meant to be called with the cell that was just played.
    pub fn winning_line(&self, row: usize, col: usize) -> Option<Vec<Position>> {
        let cell = self.get(row, col);
        if cell == Cell::Empty {
            return None;
        }
        let origin = Position::new(row, col);

        DIRECTIONS.iter().find_map(|&dir| {
            let forward = self.run_length(origin, dir, cell);
            let backward = self.run_length(origin, (-dir.0, -dir.1), cell);
            if forward + backward + 1 < WIN_LENGTH {
                return None;
            }
            let line = (-(backward as isize)..=forward as isize)
                .filter_map(|k| origin.offset(dir, k))
                .collect();
            Some(line)
        })
    }

    /// Count matching cells from `origin` along `dir`, excluding `origin`.
    fn run_length(&self, origin: Position, dir: (isize, isize), cell: Cell) -> usize {
        let mut count = 0;
        let mut k = 1;
        while let Some(pos) = origin.offset(dir, k) {
            if self.cells[pos.row][pos.col] != cell {
                break;
            }
            count += 1;
            k += 1;
        }
        count
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(cells: &[(usize, usize)], cell: Cell) -> Board {
        let mut board = Board::new();
        for &(row, col) in cells {
            board.set(Position::new(row, col), cell);
        }
        board
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                assert_eq!(board.get(row, col), Cell::Empty);
            }
        }
        assert_eq!(board.stone_count(), 0);
        assert_eq!(board.empty_cells().count(), BOARD_SIZE * BOARD_SIZE);
    }

    #[test]
    fn test_out_of_range_reads_empty() {
        let mut board = Board::new();
        board.set(Position::new(14, 14), Cell::Black);
        assert_eq!(board.get(15, 0), Cell::Empty);
        assert_eq!(board.get(0, 15), Cell::Empty);
        assert_eq!(board.get(usize::MAX, usize::MAX), Cell::Empty);
        assert_eq!(board.get(14, 14), Cell::Black);
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                assert!(!board.is_full());
                board.set(Position::new(row, col), Cell::White);
            }
        }
        assert!(board.is_full());
        assert_eq!(board.stone_count(), BOARD_SIZE * BOARD_SIZE);
    }

    #[test]
    fn test_horizontal_win() {
        let board = board_with(&[(3, 4), (3, 5), (3, 6), (3, 7), (3, 8)], Cell::Black);
        // Check from the middle of the line
        assert!(board.check_win(3, 6));
        assert!(board.check_win(3, 4));
    }

    #[test]
    fn test_vertical_win() {
        let board = board_with(&[(10, 0), (11, 0), (12, 0), (13, 0), (14, 0)], Cell::White);
        assert!(board.check_win(14, 0));
    }

    #[test]
    fn test_diagonal_down_win() {
        let board = board_with(&[(0, 0), (1, 1), (2, 2), (3, 3), (4, 4)], Cell::Black);
        assert!(board.check_win(2, 2));
    }

    #[test]
    fn test_diagonal_up_win() {
        let board = board_with(&[(4, 10), (5, 9), (6, 8), (7, 7), (8, 6)], Cell::White);
        assert!(board.check_win(8, 6));
        assert!(board.check_win(4, 10));
    }

    #[test]
    fn test_no_win_with_four() {
        let board = board_with(&[(7, 3), (7, 4), (7, 5), (7, 6)], Cell::Black);
        assert!(!board.check_win(7, 5));
    }

    #[test]
    fn test_line_broken_by_other_color() {
        let mut board = board_with(&[(7, 3), (7, 4), (7, 6), (7, 7)], Cell::Black);
        board.set(Position::new(7, 5), Cell::White);
        assert!(!board.check_win(7, 4));
        assert!(!board.check_win(7, 5));
    }

    #[test]
    fn test_overline_counts_as_win() {
        let cells: Vec<_> = (0..6).map(|col| (0, col)).collect();
        let board = board_with(&cells, Cell::Black);
        let line = board.winning_line(0, 2).unwrap();
        assert_eq!(line.len(), 6);
    }

    #[test]
    fn test_winning_line_positions() {
        let board = board_with(&[(2, 6), (3, 5), (4, 4), (5, 3), (6, 2)], Cell::White);
        let line = board.winning_line(4, 4).unwrap();
        assert_eq!(
            line,
            vec![
                Position::new(2, 6),
                Position::new(3, 5),
                Position::new(4, 4),
                Position::new(5, 3),
                Position::new(6, 2),
            ]
        );
    }

    #[test]
    fn test_empty_cell_never_wins() {
        let board = Board::new();
        assert!(!board.check_win(7, 7));
        assert!(!board.check_win(20, 20));
    }
}
