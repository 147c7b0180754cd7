//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent violations of the structural preconditions
/// the basis construction relies on. They are fatal: no partial basis
/// can be produced from a malformed tree.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("not a bifurcating tree: node '{name}' has {count} children")]
    NotBifurcating { name: String, count: usize },

    #[error("non-unique node name: '{0}'")]
    DuplicateName(String),

    #[error("invalid newick at byte {position}: {message}")]
    InvalidNewick { position: usize, message: String },

    #[error("tree has no root node")]
    EmptyTree,

    #[error("tree refers to a node that is not in the arena")]
    MissingNode,
}

/// Result type for tree operations.
pub type TreeResult<T> = Result<T, DomainError>;
