//! Orthonormal ILR bases for the Aitchison simplex from bifurcating
//! phylogenetic trees.
//!
//! A rooted, strictly bifurcating tree induces a sequential binary
//! partition of its leaves: every internal node splits the leaves beneath
//! it into a left and a right clade, and each split yields one isometric
//! log-ratio basis vector. [`phylogenetic_basis`] walks the tree and
//! returns the full name-to-vector mapping.
//!
//! ```
//! use phylobasis::{newick, phylogenetic_basis};
//!
//! let tree = newick::parse("(x,y)z;").unwrap();
//! let basis = phylogenetic_basis(&tree).unwrap();
//! assert!((basis["z"][0] - 0.80442968).abs() < 1e-8);
//! ```

pub mod cli;
pub mod domain;
pub mod util;

pub use domain::arena::{NodeData, TreeArena, TreeNode};
pub use domain::basis::{phylogenetic_basis, BasisMap};
pub use domain::composition::{closure, clr_inv};
pub use domain::error::{DomainError, TreeResult};
pub use domain::newick;
