//! Cell module - quadrant/octant values addressed by Morton code and level.
//!
//! A cell is a plain `Copy` value: finest-grid corner coordinates plus a
//! refinement level. Every derived cell (parent, children, common ancestor)
//! is returned by value, so writing the result over one of the inputs can
//! never observe a half-updated cell, and a payload stored next to a cell is
//! never touched by these operators.
//!
//! # Module Structure
//!
//! - [`morton`]: Morton codec, total order, uniform-grid indices
//! - [`relations`]: sibling/parent/ancestor predicates and derived cells
//! - [`anchor`]: conversion to and from glam vectors

pub mod anchor;
pub mod morton;
pub mod relations;

#[cfg(test)]
pub(crate) mod reference;

use std::cmp::Ordering;

use crate::constants::{branching, cell_len, max_level, Coord, Level};

/// Axis-aligned cell of a `D`-dimensional linear tree.
///
/// Coordinates are the cell's corner on the finest grid and are always
/// multiples of the cell's side length.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Cell<const D: usize> {
  /// Corner coordinates on the finest grid (x, y[, z]).
  pub coords: [Coord; D],
  /// Refinement level (0 = root).
  pub level: Level,
}

/// Two-dimensional cell.
pub type Quadrant = Cell<2>;

/// Three-dimensional cell.
pub type Octant = Cell<3>;

impl<const D: usize> Cell<D> {
  /// Number of children per cell (4 or 8).
  pub const CHILDREN: usize = branching(D);

  /// Deepest admissible level.
  pub const MAX_LEVEL: Level = max_level(D);

  /// Side length of the root cell in finest units.
  pub const ROOT_LEN: Coord = cell_len(D, 0);

  /// Create a cell from its corner coordinates and level.
  ///
  /// The result is not checked; use [`Cell::is_valid`] when the input is
  /// untrusted.
  #[inline]
  pub const fn new(coords: [Coord; D], level: Level) -> Self {
    Self { coords, level }
  }

  /// The root cell covering the whole domain.
  #[inline]
  pub const fn root() -> Self {
    Self {
      coords: [0; D],
      level: 0,
    }
  }

  /// Side length of a cell at `level`.
  #[inline]
  pub const fn side_len_at(level: Level) -> Coord {
    cell_len(D, level)
  }

  /// Side length of this cell.
  #[inline]
  pub const fn side_len(&self) -> Coord {
    cell_len(D, self.level)
  }

  /// Level in range, every coordinate inside the root and aligned to the
  /// cell's side length.
  pub fn is_valid(&self) -> bool {
    if self.level > Self::MAX_LEVEL {
      return false;
    }
    let mask = self.side_len() - 1;
    self
      .coords
      .iter()
      .all(|&c| c < Self::ROOT_LEN && (c & mask) == 0)
  }

  /// Same coordinates and same level.
  #[inline]
  pub fn is_equal(&self, other: &Self) -> bool {
    self == other
  }

  #[inline]
  pub(crate) fn assert_valid(&self) {
    assert!(self.is_valid(), "invalid cell {:?}", self);
  }
}

impl<const D: usize> PartialOrd for Cell<D> {
  #[inline]
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

/// Morton order, ancestors before descendants.
impl<const D: usize> Ord for Cell<D> {
  #[inline]
  fn cmp(&self, other: &Self) -> Ordering {
    self.compare(other)
  }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;
