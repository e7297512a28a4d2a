//! Compile-time constants for the quadrant (2D) and octant (3D) encodings.
//!
//! # Coordinate Layout
//!
//! Every cell is addressed by its lower-left (front) corner on the finest
//! grid, regardless of its own level:
//!
//! ```text
//! Level 0 (root):      Level 1:             Level 2:
//! ┌───────────────┐    ┌───────┬───────┐    ┌───┬───┬───┬───┐
//! │               │    │   2   │   3   │    │10 │11 │14 │15 │
//! │               │    │       │       │    ├───┼───┼───┼───┤
//! │       0       │    ├───────┼───────┤    │ 8 │ 9 │12 │13 │
//! │               │    │   0   │   1   │    ├───┼───┼───┼───┤
//! │               │    │       │       │    │ 2 │ 3 │ 6 │ 7 │
//! └───────────────┘    └───────┴───────┘    ├───┼───┼───┼───┤
//!                                           │ 0 │ 1 │ 4 │ 5 │
//!                                           └───┴───┴───┴───┘
//! ```
//!
//! Numbers are uniform-grid (Morton) indices at that level. Cell side length
//! at level `l` is `2^(MAX_LEVEL - l)` finest units.
//!
//! # Morton Code
//!
//! ```text
//! code = ... y1 x1 y0 x0          (2D, x in the lowest bit)
//! code = ... z1 y1 x1 z0 y0 x0    (3D)
//! ```
//!
//! The maximum level is chosen so that a finest-level code always fits in a
//! `u64`: `2 * 30 = 60` bits for quadrants, `3 * 19 = 57` bits for octants.

/// A refinement level. 0 is the root, each increment halves the side length.
pub type Level = u8;

/// Branch index of a cell within its parent, in `0..2^DIM`.
pub type ChildIndex = u8;

/// A coordinate on the finest grid.
pub type Coord = u32;

/// Maximum refinement level of quadrants.
pub const QUADRANT_MAX_LEVEL: Level = 30;

/// Maximum refinement level of octants.
pub const OCTANT_MAX_LEVEL: Level = 19;

/// Maximum refinement level for a spatial dimension.
///
/// Only 2 and 3 dimensions are supported; anything else fails const
/// evaluation.
pub const fn max_level(dim: usize) -> Level {
  match dim {
    2 => QUADRANT_MAX_LEVEL,
    3 => OCTANT_MAX_LEVEL,
    _ => panic!("only 2D quadrants and 3D octants are supported"),
  }
}

/// Number of children of a cell in `dim` dimensions.
#[inline]
pub const fn branching(dim: usize) -> usize {
  1 << dim
}

/// Side length, in finest units, of a cell at `level`.
#[inline]
pub const fn cell_len(dim: usize, level: Level) -> Coord {
  1 << (max_level(dim) - level)
}

#[cfg(test)]
#[path = "constants_test.rs"]
mod constants_test;
