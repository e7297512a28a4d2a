//! Linear tree module - sorted leaf sequences of a single root cell.
//!
//! A linear tree stores only its leaves, in Morton order. Structure is
//! implicit: containment and adjacency are recovered from the cells
//! themselves. Each leaf carries a payload handle whose lifetime is managed
//! by a [`DataLifecycle`] supplied by the owner of the tree.
//!
//! # Module Structure
//!
//! - [`data`]: payload lifecycle capability and a slab-backed pool
//! - [`diagnostics`]: sortedness checks and the relation dump
//! - [`complete`]: minimal completion of the gap between two cells

pub mod complete;
pub mod data;
pub mod diagnostics;

pub use complete::{complete_region, region_cells};
pub use data::{DataKey, DataLifecycle, PooledData, TreeIndex};
pub use diagnostics::{classify, Relation};

use crate::cell::Cell;
use crate::constants::Level;

/// A cell together with its payload handle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Leaf<const D: usize, T> {
  pub cell: Cell<D>,
  pub data: T,
}

/// Leaves of one root cell, in insertion order.
///
/// Insertion order is expected to be Morton order; [`LinearTree::is_sorted`]
/// and friends verify that after construction.
#[derive(Clone, Debug)]
pub struct LinearTree<const D: usize, T = ()> {
  leaves: Vec<Leaf<D, T>>,
  /// Leaf count for every level `0..=MAX_LEVEL`.
  per_level: Vec<usize>,
  /// Deepest level present (0 when empty).
  max_level: Level,
}

impl<const D: usize, T> LinearTree<D, T> {
  /// Create an empty tree.
  pub fn new() -> Self {
    Self {
      leaves: Vec::new(),
      per_level: vec![0; Cell::<D>::MAX_LEVEL as usize + 1],
      max_level: 0,
    }
  }

  /// Append a leaf.
  ///
  /// # Panics
  /// If `cell` is not valid.
  pub fn push(&mut self, cell: Cell<D>, data: T) {
    cell.assert_valid();
    self.per_level[cell.level as usize] += 1;
    self.max_level = self.max_level.max(cell.level);
    self.leaves.push(Leaf { cell, data });
  }

  /// Number of leaves.
  #[inline]
  pub fn len(&self) -> usize {
    self.leaves.len()
  }

  /// Check if empty.
  #[inline]
  pub fn is_empty(&self) -> bool {
    self.leaves.is_empty()
  }

  /// All leaves in order.
  #[inline]
  pub fn leaves(&self) -> &[Leaf<D, T>] {
    &self.leaves
  }

  /// Iterate over the cells, skipping payloads.
  pub fn cells(&self) -> impl Iterator<Item = &Cell<D>> + '_ {
    self.leaves.iter().map(|leaf| &leaf.cell)
  }

  /// Number of leaves at `level`.
  #[inline]
  pub fn quadrants_per_level(&self, level: Level) -> usize {
    self.per_level.get(level as usize).copied().unwrap_or(0)
  }

  /// Deepest level present in the tree.
  #[inline]
  pub fn max_level(&self) -> Level {
    self.max_level
  }

  /// Release every payload through `lifecycle` and empty the tree.
  pub fn release<L>(&mut self, lifecycle: &mut L)
  where
    L: DataLifecycle<D, Data = T>,
  {
    for leaf in self.leaves.drain(..) {
      lifecycle.free_data(&leaf.cell, leaf.data);
    }
    self.per_level.iter_mut().for_each(|count| *count = 0);
    self.max_level = 0;
  }
}

impl<const D: usize, T> Default for LinearTree<D, T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<const D: usize> FromIterator<Cell<D>> for LinearTree<D> {
  fn from_iter<I: IntoIterator<Item = Cell<D>>>(iter: I) -> Self {
    let mut tree = Self::new();
    for cell in iter {
      tree.push(cell, ());
    }
    tree
  }
}
