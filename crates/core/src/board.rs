//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell is empty or holds the color
//! identity of a locked piece. Uses a flat array for cache locality and
//! zero allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19
//! (top to bottom). Rows above the grid (y < 0) are never stored.

use arrayvec::ArrayVec;

use crate::pieces::Pattern;
use crate::types::{Cell, PieceKind, GRID_HEIGHT, GRID_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (GRID_WIDTH as usize) * (GRID_HEIGHT as usize);

/// Row indices cleared by a single pass, top to bottom
pub type ClearedRows = ArrayVec<usize, { GRID_HEIGHT as usize }>;

/// A copied-out 2D view of the grid, `[row][column]`
pub type Grid = [[Cell; GRID_WIDTH as usize]; GRID_HEIGHT as usize];

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= GRID_WIDTH as i8 || y < 0 || y >= GRID_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (GRID_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        GRID_WIDTH
    }

    pub fn height(&self) -> u8 {
        GRID_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Whether a falling mino may sit at (x, y).
    ///
    /// Side walls and the floor are solid. Rows above the grid are open;
    /// inside the grid the cell must be empty.
    pub fn is_open(&self, x: i8, y: i8) -> bool {
        if x < 0 || x >= GRID_WIDTH as i8 || y >= GRID_HEIGHT as i8 {
            return false;
        }
        y < 0 || !self.is_occupied(x, y)
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= GRID_HEIGHT as usize {
            return false;
        }
        let start = y * GRID_WIDTH as usize;
        let end = start + GRID_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Check if a row is completely empty
    pub fn is_row_empty(&self, y: usize) -> bool {
        if y >= GRID_HEIGHT as usize {
            return false;
        }
        let start = y * GRID_WIDTH as usize;
        let end = start + GRID_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| cell.is_none())
    }

    /// Remove every full row, compacting the survivors downwards in order and
    /// refilling the top with empty rows.
    ///
    /// Returns the removed row indices (as they were before the pass),
    /// top to bottom.
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared_rows = ClearedRows::new();
        let width = GRID_WIDTH as usize;
        let mut write_y = GRID_HEIGHT as usize;

        for read_y in (0..GRID_HEIGHT as usize).rev() {
            if self.is_row_full(read_y) {
                cleared_rows.push(read_y);
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    let dst_start = write_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, dst_start);
                }
            }
        }

        self.cells[..write_y * width].fill(None);

        cleared_rows.reverse();
        cleared_rows
    }

    /// Write `kind` into every occupied pattern cell at origin (x, y).
    ///
    /// Cells above the grid are discarded; the count of discarded cells is
    /// returned. Cells outside the side walls or below the floor are skipped
    /// as well (a validated piece never has any).
    pub fn lock_pattern(&mut self, pattern: &Pattern, x: i8, y: i8, kind: PieceKind) -> u8 {
        let mut hidden = 0u8;
        for (dx, dy) in pattern.minos() {
            let py = y.saturating_add(dy);
            if py < 0 {
                hidden += 1;
                continue;
            }
            self.set(x.saturating_add(dx), py, Some(kind));
        }
        hidden
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Copy the board into a 2D `[row][column]` grid
    pub fn write_grid(&self, out: &mut Grid) {
        let width = GRID_WIDTH as usize;
        for (y, row) in out.iter_mut().enumerate() {
            row.copy_from_slice(&self.cells[y * width..(y + 1) * width]);
        }
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Create from a 2D grid
    pub fn from_grid(grid: &Grid) -> Self {
        let mut board = Self::new();
        let width = GRID_WIDTH as usize;
        for (y, row) in grid.iter().enumerate() {
            board.cells[y * width..(y + 1) * width].copy_from_slice(row);
        }
        board
    }

    /// Convert to a 2D grid
    pub fn to_grid(&self) -> Grid {
        let mut grid = [[None; GRID_WIDTH as usize]; GRID_HEIGHT as usize];
        self.write_grid(&mut grid);
        grid
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

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(9, 0), Some(9));
        assert_eq!(Board::index(0, 1), Some(10));
        assert_eq!(Board::index(9, 19), Some(199));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(10, 0), None);
        assert_eq!(Board::index(0, 20), None);
    }

    #[test]
    fn test_open_cells_above_grid() {
        let board = Board::new();
        assert!(board.is_open(0, -3));
        assert!(board.is_open(9, -1));
        assert!(!board.is_open(-1, -1));
        assert!(!board.is_open(10, -1));
        assert!(!board.is_open(0, 20));
    }

    #[test]
    fn test_lock_pattern_discards_hidden_cells() {
        let mut board = Board::new();
        let pattern = Pattern::canonical(PieceKind::T);

        // T at y = -1: the top mino is hidden, the bottom row lands on row 0.
        let hidden = board.lock_pattern(&pattern, 4, -1, PieceKind::T);

        assert_eq!(hidden, 1);
        assert_eq!(board.filled_count(), 3);
        for x in 4..7 {
            assert_eq!(board.get(x, 0), Some(Some(PieceKind::T)));
        }
    }

    #[test]
    fn test_lock_pattern_at_coordinate_limits() {
        let mut board = Board::new();
        let pattern = Pattern::canonical(PieceKind::O);

        assert_eq!(board.lock_pattern(&pattern, i8::MAX, 0, PieceKind::O), 0);
        assert_eq!(board.lock_pattern(&pattern, 0, i8::MAX, PieceKind::O), 0);
        assert_eq!(board.lock_pattern(&pattern, 0, i8::MIN, PieceKind::O), 4);
        assert_eq!(board.filled_count(), 0);
    }

    #[test]
    fn test_clear_full_rows_reports_top_to_bottom() {
        let mut board = Board::new();
        for y in [12, 19] {
            for x in 0..GRID_WIDTH as i8 {
                board.set(x, y, Some(PieceKind::Z));
            }
        }
        board.set(0, 15, Some(PieceKind::O));

        let cleared = board.clear_full_rows();

        assert_eq!(cleared.as_slice(), &[12, 19]);
        // Row 15 dropped by one (only row 19 was below it).
        assert_eq!(board.get(0, 16), Some(Some(PieceKind::O)));
        assert_eq!(board.filled_count(), 1);
    }

    #[test]
    fn test_grid_roundtrip() {
        let mut grid: Grid = [[None; GRID_WIDTH as usize]; GRID_HEIGHT as usize];
        grid[5][3] = Some(PieceKind::O);
        grid[10][7] = Some(PieceKind::L);

        let board = Board::from_grid(&grid);

        assert_eq!(board.get(3, 5), Some(Some(PieceKind::O)));
        assert_eq!(board.to_grid(), grid);
    }
}
