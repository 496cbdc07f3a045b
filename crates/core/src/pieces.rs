//! Pieces module - tetromino patterns and matrix rotation
//!
//! Each piece identity has a canonical occupancy matrix (1x4, 2x3 or 2x2).
//! Rotation transposes the matrix clockwise about its bounding box; there are
//! no wall kicks, so a rotation that does not fit is simply rejected by the
//! caller.

use thiserror::Error;

use crate::rng::PieceSource;
use crate::types::{PieceKind, GRID_WIDTH};

/// Offset of a single mino inside a pattern: (column, row)
pub type MinoOffset = (i8, i8);

/// Largest pattern side length
const MAX_SIDE: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("pattern is {rows}x{cols}, patterns are at most 4x4")]
    TooLarge { rows: usize, cols: usize },
}

/// Occupancy matrix of a piece, stored in a fixed 4x4 buffer.
///
/// Only the top-left `rows x cols` region is meaningful; everything outside
/// it is always `false`, so derived equality compares occupancy exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern {
    rows: u8,
    cols: u8,
    bits: [[bool; MAX_SIDE]; MAX_SIDE],
}

impl Pattern {
    /// Canonical spawn orientation for a piece kind
    pub fn canonical(kind: PieceKind) -> Self {
        match kind {
            PieceKind::I => Self::pack(&[&[1, 1, 1, 1]]),
            PieceKind::J => Self::pack(&[&[1, 0, 0], &[1, 1, 1]]),
            PieceKind::L => Self::pack(&[&[0, 0, 1], &[1, 1, 1]]),
            PieceKind::O => Self::pack(&[&[1, 1], &[1, 1]]),
            PieceKind::S => Self::pack(&[&[0, 1, 1], &[1, 1, 0]]),
            PieceKind::T => Self::pack(&[&[0, 1, 0], &[1, 1, 1]]),
            PieceKind::Z => Self::pack(&[&[1, 1, 0], &[0, 1, 1]]),
        }
    }

    /// Build a pattern from row slices of 0/1 values.
    ///
    /// Fails if the matrix is taller or wider than four cells.
    pub fn from_rows(rows: &[&[u8]]) -> Result<Self, PatternError> {
        let height = rows.len();
        let width = rows.iter().map(|r| r.len()).max().unwrap_or(0);
        if height > MAX_SIDE || width > MAX_SIDE {
            return Err(PatternError::TooLarge {
                rows: height,
                cols: width,
            });
        }
        Ok(Self::pack(rows))
    }

    /// `rows` must fit in 4x4; anything beyond is ignored.
    fn pack(rows: &[&[u8]]) -> Self {
        let mut bits = [[false; MAX_SIDE]; MAX_SIDE];
        let mut width = 0;

        for (r, row) in rows.iter().take(MAX_SIDE).enumerate() {
            width = width.max(row.len().min(MAX_SIDE));
            for (c, &v) in row.iter().take(MAX_SIDE).enumerate() {
                bits[r][c] = v != 0;
            }
        }

        Self {
            rows: rows.len().min(MAX_SIDE) as u8,
            cols: width as u8,
            bits,
        }
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Whether (row, col) is occupied; out-of-range queries are `false`
    pub fn is_filled(&self, row: u8, col: u8) -> bool {
        row < self.rows && col < self.cols && self.bits[row as usize][col as usize]
    }

    /// Occupied cells as (column, row) offsets, row-major order
    pub fn minos(&self) -> impl Iterator<Item = MinoOffset> + '_ {
        (0..self.rows).flat_map(move |r| {
            (0..self.cols)
                .filter(move |&c| self.bits[r as usize][c as usize])
                .map(move |c| (c as i8, r as i8))
        })
    }

    /// Clockwise rotation: `new[c][rows - 1 - r] = old[r][c]`.
    ///
    /// The bounding box swaps from R x C to C x R.
    pub fn rotated_cw(&self) -> Self {
        let rows = self.rows as usize;
        let mut bits = [[false; MAX_SIDE]; MAX_SIDE];
        for r in 0..rows {
            for c in 0..self.cols as usize {
                if self.bits[r][c] {
                    bits[c][rows - 1 - r] = true;
                }
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            bits,
        }
    }
}

/// A piece instance: identity, current pattern and grid origin.
///
/// `(x, y)` is the column/row of the pattern's top-left corner. `y` may be
/// negative while the piece is above the visible grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub kind: PieceKind,
    pub pattern: Pattern,
    pub x: i8,
    pub y: i8,
}

impl Tetromino {
    /// Create a piece in its canonical orientation, horizontally centered on row 0
    pub fn new(kind: PieceKind) -> Self {
        let pattern = Pattern::canonical(kind);
        Self {
            kind,
            pattern,
            x: spawn_column(&pattern),
            y: 0,
        }
    }

    /// Create a piece whose identity is drawn from `source`
    pub fn spawn_from<S: PieceSource + ?Sized>(source: &mut S) -> Self {
        Self::new(source.next_kind())
    }

    /// Color identity written into the grid when this piece locks
    pub fn color(&self) -> PieceKind {
        self.kind
    }

    /// Replace the pattern with its clockwise rotation (position unchanged)
    pub fn rotate(&mut self) {
        self.pattern = self.pattern.rotated_cw();
    }

    /// Copy of this piece rotated clockwise
    pub fn rotated(&self) -> Self {
        Self {
            pattern: self.pattern.rotated_cw(),
            ..*self
        }
    }

    /// Copy of this piece moved by (dx, dy)
    ///
    /// Saturates at the `i8` range; callers validate the move first.
    pub fn translated(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
            ..*self
        }
    }

    /// Absolute (column, row) of every occupied cell.
    ///
    /// Offsets are non-negative, so a saturated coordinate always lands past
    /// the right wall or below the floor.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.pattern
            .minos()
            .map(move |(c, r)| (self.x.saturating_add(c), self.y.saturating_add(r)))
    }
}

/// `GRID_WIDTH / 2 - cols / 2` with floor division
fn spawn_column(pattern: &Pattern) -> i8 {
    (GRID_WIDTH / 2) as i8 - (pattern.cols() / 2) as i8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_dimensions() {
        let dims: Vec<(u8, u8)> = PieceKind::ALL
            .iter()
            .map(|&k| {
                let p = Pattern::canonical(k);
                (p.rows(), p.cols())
            })
            .collect();
        assert_eq!(
            dims,
            vec![(1, 4), (2, 3), (2, 3), (2, 2), (2, 3), (2, 3), (2, 3)]
        );
    }

    #[test]
    fn every_piece_has_four_minos() {
        for kind in PieceKind::ALL {
            let mut pattern = Pattern::canonical(kind);
            for _ in 0..4 {
                assert_eq!(pattern.minos().count(), 4, "{:?}", kind);
                pattern = pattern.rotated_cw();
            }
        }
    }

    #[test]
    fn spawn_columns_are_centered() {
        assert_eq!(Tetromino::new(PieceKind::I).x, 3);
        assert_eq!(Tetromino::new(PieceKind::T).x, 4);
        assert_eq!(Tetromino::new(PieceKind::O).x, 4);
        assert!(PieceKind::ALL.iter().all(|&k| Tetromino::new(k).y == 0));
    }

    #[test]
    fn t_rotates_clockwise() {
        // .#.      #.
        // ###  ->  ##
        //          #.
        let rotated = Pattern::canonical(PieceKind::T).rotated_cw();
        assert_eq!(rotated, Pattern::from_rows(&[&[1, 0], &[1, 1], &[1, 0]]).unwrap());
    }

    #[test]
    fn l_rotates_clockwise() {
        // ..#      #.
        // ###  ->  #.
        //          ##
        let rotated = Pattern::canonical(PieceKind::L).rotated_cw();
        assert_eq!(rotated, Pattern::from_rows(&[&[1, 0], &[1, 0], &[1, 1]]).unwrap());
    }

    #[test]
    fn rotation_keeps_origin() {
        let piece = Tetromino::new(PieceKind::S).translated(2, 5);
        let rotated = piece.rotated();
        assert_eq!((rotated.x, rotated.y), (piece.x, piece.y));
        assert_eq!(rotated.kind, piece.kind);
    }

    #[test]
    fn translation_saturates() {
        let piece = Tetromino::new(PieceKind::O).translated(i8::MAX, i8::MIN);
        assert_eq!((piece.x, piece.y), (i8::MAX, i8::MIN));
        assert!(piece.cells().all(|(x, _)| x == i8::MAX));
    }

    #[test]
    fn o_rotation_is_invisible() {
        let o = Pattern::canonical(PieceKind::O);
        assert_eq!(o.rotated_cw(), o);
    }

    #[test]
    fn from_rows_rejects_oversized_input() {
        assert_eq!(
            Pattern::from_rows(&[&[1, 1, 1, 1, 1]]),
            Err(PatternError::TooLarge { rows: 1, cols: 5 })
        );
        let tall: [&[u8]; 5] = [&[1], &[1], &[1], &[1], &[1]];
        assert_eq!(
            Pattern::from_rows(&tall),
            Err(PatternError::TooLarge { rows: 5, cols: 1 })
        );
    }

    #[test]
    fn from_rows_accepts_four_by_four() {
        let p = Pattern::from_rows(&[
            &[1, 0, 0, 0],
            &[0, 0, 0, 0],
            &[0, 0, 0, 0],
            &[0, 0, 0, 1],
        ])
        .unwrap();
        assert_eq!((p.rows(), p.cols()), (4, 4));
        assert!(p.is_filled(0, 0));
        assert!(p.is_filled(3, 3));
        assert_eq!(p.minos().count(), 2);
    }
}
