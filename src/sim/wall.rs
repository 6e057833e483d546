//! Brick wall layout
//!
//! Bricks are laid out row-major. Strength and point value come from a
//! per-band table; every band covers `ROWS_PER_BAND` rows.

use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::config::GameConfig;

/// Strength and score for one band of rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Band {
    pub strength: u8,
    pub value: u32,
}

/// Rows covered by each band
pub const ROWS_PER_BAND: usize = 2;

/// Bands from the top row down. Strength never increases going down.
pub const ROW_BANDS: [Band; 4] = [
    Band { strength: 4, value: 7 },
    Band { strength: 3, value: 5 },
    Band { strength: 2, value: 3 },
    Band { strength: 1, value: 1 },
];

/// Band for a row; rows past the table reuse the last band
pub fn band_for_row(row: usize) -> Band {
    let index = (row / ROWS_PER_BAND).min(ROW_BANDS.len() - 1);
    ROW_BANDS[index]
}

/// A single brick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    pub rect: Rect,
    /// Hits remaining; 0 means destroyed
    pub strength: u8,
    /// Score awarded when destroyed
    pub value: u32,
}

impl Brick {
    #[inline]
    pub fn is_live(&self) -> bool {
        self.strength > 0
    }
}

/// Fixed-shape grid of bricks
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrickWall {
    rows: usize,
    columns: usize,
    /// Row-major storage, `rows * columns` long
    bricks: Vec<Brick>,
}

impl BrickWall {
    /// Create and build a wall
    pub fn new(config: &GameConfig) -> Self {
        let mut wall = Self {
            rows: 0,
            columns: 0,
            bricks: Vec::new(),
        };
        wall.build(config);
        wall
    }

    /// Replace the grid with a fresh layout
    pub fn build(&mut self, config: &GameConfig) {
        let width = config.brick_width();
        let height = config.brick_height;
        let gap = config.brick_gap;

        self.rows = config.brick_rows;
        self.columns = config.brick_columns;
        self.bricks.clear();
        self.bricks.reserve(self.rows * self.columns);

        for row in 0..self.rows {
            let band = band_for_row(row);
            let y = config.wall_top + row as f32 * (height + gap);
            for col in 0..self.columns {
                let x = config.left_bound() + gap / 2.0 + col as f32 * (width + gap);
                self.bricks.push(Brick {
                    rect: Rect::new(x, y, width, height),
                    strength: band.strength,
                    value: band.value,
                });
            }
        }

        log::debug!("Built brick wall: {} rows x {} columns", self.rows, self.columns);
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn brick(&self, row: usize, col: usize) -> Option<&Brick> {
        if row >= self.rows || col >= self.columns {
            return None;
        }
        self.bricks.get(row * self.columns + col)
    }

    pub fn brick_mut(&mut self, row: usize, col: usize) -> Option<&mut Brick> {
        if row >= self.rows || col >= self.columns {
            return None;
        }
        self.bricks.get_mut(row * self.columns + col)
    }

    /// All bricks with their (row, col), row-major
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &Brick)> {
        let columns = self.columns;
        self.bricks
            .iter()
            .enumerate()
            .map(move |(i, brick)| (i / columns, i % columns, brick))
    }

    /// First live brick overlapping `rect`, scanning row-major
    pub fn first_overlap(&self, rect: &Rect) -> Option<(usize, usize)> {
        self.iter()
            .find(|(_, _, brick)| brick.is_live() && brick.rect.overlaps(rect))
            .map(|(row, col, _)| (row, col))
    }

    /// Number of live bricks
    pub fn remaining(&self) -> usize {
        self.bricks.iter().filter(|b| b.is_live()).count()
    }

    pub fn is_cleared(&self) -> bool {
        self.remaining() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bands_by_row() {
        let config = GameConfig::default();
        let wall = BrickWall::new(&config);
        let strengths: Vec<u8> = (0..8).map(|r| wall.brick(r, 0).unwrap().strength).collect();
        assert_eq!(strengths, vec![4, 4, 3, 3, 2, 2, 1, 1]);
        assert_eq!(wall.brick(0, 0).unwrap().value, 7);
        assert_eq!(wall.brick(7, 13).unwrap().value, 1);
    }

    #[test]
    fn test_strength_never_increases_down_the_wall() {
        for row in 1..20 {
            assert!(band_for_row(row).strength <= band_for_row(row - 1).strength);
        }
        assert_eq!(band_for_row(100), ROW_BANDS[3]);
    }

    #[test]
    fn test_bricks_do_not_overlap_and_stay_in_playfield() {
        let config = GameConfig::default();
        let wall = BrickWall::new(&config);
        let bricks: Vec<_> = wall.iter().map(|(_, _, b)| b.rect).collect();
        for (i, a) in bricks.iter().enumerate() {
            assert!(a.left() >= config.left_bound());
            assert!(a.right() <= config.right_bound());
            for b in &bricks[i + 1..] {
                assert!(!a.overlaps(b));
            }
        }
    }

    #[test]
    fn test_out_of_range_lookup() {
        let wall = BrickWall::new(&GameConfig::default());
        assert!(wall.brick(8, 0).is_none());
        assert!(wall.brick(0, 14).is_none());
    }

    #[test]
    fn test_rebuild_restores_destroyed_bricks() {
        let config = GameConfig::default();
        let mut wall = BrickWall::new(&config);
        let total = wall.remaining();
        wall.brick_mut(3, 4).unwrap().strength = 0;
        wall.brick_mut(0, 0).unwrap().strength = 0;
        assert_eq!(wall.remaining(), total - 2);

        wall.build(&config);
        assert_eq!(wall.remaining(), total);
        assert_eq!(wall.brick(3, 4).unwrap().strength, 3);
    }

    #[test]
    fn test_first_overlap_is_row_major() {
        let config = GameConfig::default();
        let wall = BrickWall::new(&config);
        let upper = wall.brick(0, 2).unwrap().rect;
        let lower = wall.brick(1, 2).unwrap().rect;
        // Spans the gap between two rows
        let probe = Rect::new(upper.left() + 5.0, upper.bottom() - 2.0, 4.0, lower.top() - upper.bottom() + 4.0);
        assert_eq!(wall.first_overlap(&probe), Some((0, 2)));
    }
}
