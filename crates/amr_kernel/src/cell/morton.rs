//! Morton (Z-order) codec and the total order over cells.
//!
//! The order compares the interleaved finest-level codes first and breaks
//! ties by level, so an ancestor sorts directly before its first descendant.

use std::cmp::Ordering;

use super::Cell;
use crate::constants::{ChildIndex, Coord, Level};

/// Interleave the low `bits` bits of every coordinate, axis 0 lowest.
#[inline]
fn interleave<const D: usize>(coords: &[Coord; D], bits: Level) -> u64 {
  let mut code = 0u64;
  for bit in 0..bits as usize {
    for (axis, &c) in coords.iter().enumerate() {
      code |= (((c >> bit) & 1) as u64) << (bit * D + axis);
    }
  }
  code
}

/// Inverse of [`interleave`].
#[inline]
fn deinterleave<const D: usize>(code: u64, bits: Level) -> [Coord; D] {
  let mut coords = [0; D];
  for bit in 0..bits as usize {
    for (axis, c) in coords.iter_mut().enumerate() {
      *c |= (((code >> (bit * D + axis)) & 1) as Coord) << bit;
    }
  }
  coords
}

impl<const D: usize> Cell<D> {
  /// Number of finest-level cells covered by a cell at `level`.
  #[inline]
  pub(crate) fn finest_span(level: Level) -> u64 {
    1u64 << (D * (Self::MAX_LEVEL - level) as usize)
  }

  /// Interleaved code of the cell's corner on the finest grid.
  #[inline]
  pub fn morton_code(&self) -> u64 {
    interleave(&self.coords, Self::MAX_LEVEL)
  }

  /// Compare two cells in Morton order, then by level.
  ///
  /// Works on the raw coordinates: the axis holding the most significant
  /// differing bit decides, higher axes winning ties since they sit above
  /// lower axes in the interleaved code.
  pub fn compare(&self, other: &Self) -> Ordering {
    debug_assert!(self.is_valid() && other.is_valid());

    let mut axis = 0;
    let mut seen = self.coords[0] ^ other.coords[0];
    for a in 1..D {
      let diff = self.coords[a] ^ other.coords[a];
      if diff > (seen & !diff) {
        axis = a;
      }
      seen |= diff;
    }

    if seen == 0 {
      return self.level.cmp(&other.level);
    }
    self.coords[axis].cmp(&other.coords[axis])
  }

  /// Cell at position `index` of the uniform grid at `level`.
  ///
  /// # Panics
  /// If `level` exceeds [`Cell::MAX_LEVEL`] or `index` is outside
  /// `0..CHILDREN^level`.
  pub fn from_uniform_index(level: Level, index: u64) -> Self {
    assert!(
      level <= Self::MAX_LEVEL,
      "level {} exceeds maximum {}",
      level,
      Self::MAX_LEVEL
    );
    assert!(
      index < 1u64 << (D * level as usize),
      "index {} outside uniform grid of level {}",
      index,
      level
    );

    let shift = Self::MAX_LEVEL - level;
    let mut coords = deinterleave::<D>(index, level);
    for c in coords.iter_mut() {
      *c <<= shift;
    }
    Self { coords, level }
  }

  /// Overwrite this cell with the uniform-grid cell at `index`.
  ///
  /// Only the coordinates and level change; a payload kept beside the cell
  /// is left alone.
  #[inline]
  pub fn set_from_uniform_index(&mut self, level: Level, index: u64) {
    *self = Self::from_uniform_index(level, index);
  }

  /// Uniform-grid index of this cell's ancestor (or itself) at `level`.
  pub fn linear_id(&self, level: Level) -> u64 {
    self.assert_valid();
    assert!(
      level <= self.level,
      "linear id requested below the cell's own level"
    );
    self.morton_code() >> (D * (Self::MAX_LEVEL - level) as usize)
  }

  /// Which child of its parent this cell is.
  ///
  /// # Panics
  /// For the root cell, which has no parent.
  pub fn child_id(&self) -> ChildIndex {
    self.assert_valid();
    assert!(self.level > 0, "the root cell has no child id");

    let bit = self.side_len();
    self
      .coords
      .iter()
      .enumerate()
      .fold(0, |id, (axis, &c)| {
        id | ((((c & bit) != 0) as ChildIndex) << axis)
      })
  }

  /// First descendant at `level` (shares the corner).
  pub fn first_descendant(&self, level: Level) -> Self {
    self.assert_valid();
    assert!(level >= self.level && level <= Self::MAX_LEVEL);
    Self {
      coords: self.coords,
      level,
    }
  }

  /// Last descendant at `level` (opposite corner).
  pub fn last_descendant(&self, level: Level) -> Self {
    self.assert_valid();
    assert!(level >= self.level && level <= Self::MAX_LEVEL);
    let offset = self.side_len() - Self::side_len_at(level);
    let mut coords = self.coords;
    for c in coords.iter_mut() {
      *c += offset;
    }
    Self { coords, level }
  }

  /// True iff `next` begins exactly where `self` ends on the finest grid.
  pub fn is_next(&self, next: &Self) -> bool {
    self.assert_valid();
    next.assert_valid();
    self.morton_code() + Self::finest_span(self.level) == next.morton_code()
  }
}

#[cfg(test)]
#[path = "morton_test.rs"]
mod morton_test;
