//! Domain layer: tree structures and the basis construction
//!
//! This layer is independent of external concerns (no I/O, no CLI).

pub mod arena;
pub mod basis;
pub mod composition;
pub mod display;
pub mod error;
pub mod newick;

pub use arena::{NodeData, TreeArena, TreeNode};
pub use basis::{phylogenetic_basis, BasisMap};
pub use error::{DomainError, TreeResult};
