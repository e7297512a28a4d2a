//! Relationship predicates and derived cells.
//!
//! All of these work directly on coordinate bits. Slower reference versions
//! that walk the tree level by level live in the test-only `reference`
//! module and are checked against these.

use smallvec::SmallVec;

use super::Cell;
use crate::constants::{ChildIndex, Coord, Level};

impl<const D: usize> Cell<D> {
  /// True iff `other` is a different cell with the same parent.
  pub fn is_sibling(&self, other: &Self) -> bool {
    self.assert_valid();
    other.assert_valid();

    if self.level == 0 || self.level != other.level || self == other {
      return false;
    }
    // Only the bit of the shared level may differ.
    let keep = !self.side_len();
    self
      .coords
      .iter()
      .zip(other.coords.iter())
      .all(|(&a, &b)| (a ^ b) & keep == 0)
  }

  /// True iff `child` is one level below `self` and inside it.
  pub fn is_parent(&self, child: &Self) -> bool {
    self.assert_valid();
    child.assert_valid();

    if self.level + 1 != child.level {
      return false;
    }
    let clear = !child.side_len();
    self
      .coords
      .iter()
      .zip(child.coords.iter())
      .all(|(&p, &c)| p == c & clear)
  }

  /// True iff `self` strictly contains `descendant`.
  pub fn is_ancestor(&self, descendant: &Self) -> bool {
    self.assert_valid();
    descendant.assert_valid();

    if self.level >= descendant.level {
      return false;
    }
    let shift = Self::MAX_LEVEL - self.level;
    self
      .coords
      .iter()
      .zip(descendant.coords.iter())
      .all(|(&a, &d)| (a ^ d) >> shift == 0)
  }

  /// The cell one level up.
  ///
  /// # Panics
  /// For the root cell.
  pub fn parent(&self) -> Self {
    self.assert_valid();
    assert!(self.level > 0, "the root cell has no parent");

    let clear = !self.side_len();
    let mut coords = self.coords;
    for c in coords.iter_mut() {
      *c &= clear;
    }
    Self {
      coords,
      level: self.level - 1,
    }
  }

  /// Child number `id`; bit `a` of `id` selects the upper half along axis `a`.
  ///
  /// # Panics
  /// For cells at [`Cell::MAX_LEVEL`] or `id >= CHILDREN`.
  pub fn child(&self, id: ChildIndex) -> Self {
    self.assert_valid();
    assert!(
      self.level < Self::MAX_LEVEL,
      "cannot refine below level {}",
      Self::MAX_LEVEL
    );
    assert!((id as usize) < Self::CHILDREN, "child id {} out of range", id);

    let level: Level = self.level + 1;
    let bit = Self::side_len_at(level);
    let mut coords = self.coords;
    for (axis, c) in coords.iter_mut().enumerate() {
      if (id >> axis) & 1 == 1 {
        *c |= bit;
      }
    }
    Self { coords, level }
  }

  /// All children in Morton order.
  pub fn children(&self) -> SmallVec<[Self; 8]> {
    (0..Self::CHILDREN as ChildIndex)
      .map(|id| self.child(id))
      .collect()
  }

  /// Smallest cell containing (or equal to) both `self` and `other`.
  pub fn nearest_common_ancestor(&self, other: &Self) -> Self {
    self.assert_valid();
    other.assert_valid();

    let diverged = self
      .coords
      .iter()
      .zip(other.coords.iter())
      .fold(0, |acc, (&a, &b)| acc | (a ^ b));
    // Number of low bits below the highest divergence.
    let bits = Coord::BITS - diverged.leading_zeros();
    let keep = Coord::MAX << bits;

    let level = (Self::MAX_LEVEL - bits as Level)
      .min(self.level)
      .min(other.level);
    let mut coords = self.coords;
    for c in coords.iter_mut() {
      *c &= keep;
    }
    Self { coords, level }
  }
}

#[cfg(test)]
#[path = "relations_test.rs"]
mod relations_test;
