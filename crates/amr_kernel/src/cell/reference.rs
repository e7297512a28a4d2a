//! Descriptive, slower versions of the cell predicates.
//!
//! These walk up the tree one level at a time using plain integer division
//! instead of bit tricks. Only compiled for tests, where they serve as the
//! oracle for the fast versions.

use std::cmp::Ordering;

use super::Cell;
use crate::constants::ChildIndex;

pub fn parent<const D: usize>(q: &Cell<D>) -> Cell<D> {
  assert!(q.level > 0);
  let size = Cell::<D>::side_len_at(q.level - 1);
  let mut coords = q.coords;
  for c in coords.iter_mut() {
    *c = *c / size * size;
  }
  Cell::new(coords, q.level - 1)
}

pub fn child_id<const D: usize>(q: &Cell<D>) -> ChildIndex {
  let size = q.side_len();
  let mut id = 0;
  for (axis, &c) in q.coords.iter().enumerate() {
    id += ((c / size % 2) as ChildIndex) * (1 << axis);
  }
  id
}

pub fn compare<const D: usize>(a: &Cell<D>, b: &Cell<D>) -> Ordering {
  (a.morton_code(), a.level).cmp(&(b.morton_code(), b.level))
}

pub fn is_sibling<const D: usize>(a: &Cell<D>, b: &Cell<D>) -> bool {
  if a == b || a.level != b.level || a.level == 0 {
    return false;
  }
  parent(a) == parent(b)
}

pub fn is_parent<const D: usize>(p: &Cell<D>, c: &Cell<D>) -> bool {
  c.level > 0 && parent(c) == *p
}

pub fn is_ancestor<const D: usize>(a: &Cell<D>, d: &Cell<D>) -> bool {
  if a.level >= d.level {
    return false;
  }
  let mut s = *d;
  while s.level > a.level {
    s = parent(&s);
  }
  s == *a
}

pub fn nearest_common_ancestor<const D: usize>(a: &Cell<D>, b: &Cell<D>) -> Cell<D> {
  let mut s1 = *a;
  let mut s2 = *b;
  while s1.level > s2.level {
    s1 = parent(&s1);
  }
  while s2.level > s1.level {
    s2 = parent(&s2);
  }
  while s1 != s2 {
    s1 = parent(&s1);
    s2 = parent(&s2);
  }
  s1
}
