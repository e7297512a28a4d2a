//! Per-cell payload lifecycle.
//!
//! The kernel never decides what a payload is. Whoever owns the tree hands
//! in a [`DataLifecycle`]; the kernel calls `init_data` once for every cell
//! it materializes and `free_data` once for every cell it drops.

use slab::Slab;

use crate::cell::Cell;

/// 0-based index of a tree within its forest.
pub type TreeIndex = u32;

/// Allocation and release of per-cell payloads.
pub trait DataLifecycle<const D: usize> {
  /// Handle stored next to each cell.
  type Data;

  /// Allocate and initialize the payload of a freshly created cell.
  fn init_data(&mut self, which_tree: TreeIndex, cell: &Cell<D>) -> Self::Data;

  /// Payload for an included region endpoint. Defaults to a fresh payload.
  fn init_endpoint_data(&mut self, which_tree: TreeIndex, cell: &Cell<D>) -> Self::Data {
    self.init_data(which_tree, cell)
  }

  /// Release a payload. Called exactly once per handle.
  fn free_data(&mut self, cell: &Cell<D>, data: Self::Data);
}

/// No payload at all.
impl<const D: usize> DataLifecycle<D> for () {
  type Data = ();

  #[inline]
  fn init_data(&mut self, _which_tree: TreeIndex, _cell: &Cell<D>) {}

  #[inline]
  fn free_data(&mut self, _cell: &Cell<D>, _data: ()) {}
}

/// Key of a payload living in a [`PooledData`] pool.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct DataKey(usize);

impl DataKey {
  /// Get the raw slot index.
  pub fn raw(&self) -> usize {
    self.0
  }
}

/// Slab-backed payload pool with a user init callback.
///
/// Allocation and release are amortized O(1); released slots are reused.
pub struct PooledData<T, F> {
  pool: Slab<T>,
  init_fn: F,
}

impl<T, F> PooledData<T, F> {
  /// Create an empty pool that fills new payloads with `init_fn`.
  pub fn new(init_fn: F) -> Self {
    Self {
      pool: Slab::new(),
      init_fn,
    }
  }

  /// Number of live payloads.
  pub fn len(&self) -> usize {
    self.pool.len()
  }

  /// Check if no payload is live.
  pub fn is_empty(&self) -> bool {
    self.pool.is_empty()
  }

  #[inline]
  pub fn get(&self, key: DataKey) -> Option<&T> {
    self.pool.get(key.0)
  }

  #[inline]
  pub fn get_mut(&mut self, key: DataKey) -> Option<&mut T> {
    self.pool.get_mut(key.0)
  }
}

impl<const D: usize, T, F> DataLifecycle<D> for PooledData<T, F>
where
  F: FnMut(TreeIndex, &Cell<D>) -> T,
{
  type Data = DataKey;

  fn init_data(&mut self, which_tree: TreeIndex, cell: &Cell<D>) -> DataKey {
    let value = (self.init_fn)(which_tree, cell);
    DataKey(self.pool.insert(value))
  }

  fn free_data(&mut self, cell: &Cell<D>, key: DataKey) {
    assert!(
      self.pool.try_remove(key.0).is_some(),
      "payload {:?} of {:?} released twice",
      key,
      cell
    );
  }
}

#[cfg(test)]
#[path = "data_test.rs"]
mod data_test;
