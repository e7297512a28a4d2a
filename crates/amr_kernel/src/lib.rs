//! amr_kernel - quadrant/octant algebra for linear adaptive trees
//!
//! This crate provides the single-process kernel of a forest-of-trees
//! adaptive mesh refinement library: cells addressed by Morton code and
//! level, the relations between them, and the construction of minimal
//! linear trees between two boundary cells.
//!
//! # Features
//!
//! - **Morton codec**: total order, uniform-grid indices, child ids
//! - **Relations**: sibling/parent/ancestor predicates and derived cells,
//!   each cross-checked in tests against a slow reference version
//! - **Linear trees**: sortedness/overlap/gap checks and a relation dump
//! - **Region completion**: minimal gap-free cover between two cells
//!   (Sundar, Sampath & Biros 2008, Algorithm 2)
//!
//! Everything is generic over the dimension: [`Quadrant`] for 2D and
//! [`Octant`] for 3D.
//!
//! # Example
//!
//! ```
//! use amr_kernel::{region_cells, Quadrant};
//!
//! // Level 2 cells 1 and 14 of the 4x4 grid.
//! let q1 = Quadrant::from_uniform_index(2, 1);
//! let q2 = Quadrant::from_uniform_index(2, 14);
//!
//! let cells = region_cells(&q1, true, &q2, true);
//! assert_eq!(cells.len(), 8);
//! assert!(cells.windows(2).all(|pair| pair[0].is_next(&pair[1])));
//! ```

pub mod constants;
pub use constants::{ChildIndex, Coord, Level, OCTANT_MAX_LEVEL, QUADRANT_MAX_LEVEL};

// Cell values, Morton order and relations
pub mod cell;
pub use cell::{Cell, Octant, Quadrant};

// Linear trees and region completion
pub mod linear_tree;
pub use linear_tree::{
  classify, complete_region, region_cells, DataKey, DataLifecycle, Leaf, LinearTree, PooledData,
  Relation, TreeIndex,
};

#[cfg(test)]
mod test_utils;
