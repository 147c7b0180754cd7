//! Sequential binary partition of a bifurcating tree into an orthonormal
//! basis of the Aitchison simplex.
//!
//! Every internal node of a strictly bifurcating tree splits the leaves
//! beneath it into a left and a right clade. Each split contributes one
//! ILR basis vector; the full set is the sequential binary partition (SBP)
//! basis induced by the tree.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use generational_arena::Index;
use tracing::{debug, instrument};

use crate::domain::arena::TreeArena;
use crate::domain::composition::clr_inv;
use crate::domain::error::{DomainError, TreeResult};

/// Mapping from internal-node name to its basis vector in the simplex.
pub type BasisMap = BTreeMap<String, Vec<f64>>;

/// Determines the orthonormal basis induced by a bifurcating tree.
///
/// Returns one entry per internal node; each vector has length D (the total
/// leaf count of the tree), strictly positive components, and unit sum.
/// Node names must be unique across the whole tree, leaves included in the
/// naming space of the input but only internal names appear as keys.
///
/// The engine recurses, so the call stack grows with tree height. Subtree
/// leaf counting underneath is stack-based.
///
/// # Errors
///
/// * [`DomainError::NotBifurcating`] if any node has a child count other
///   than 0 or 2
/// * [`DomainError::DuplicateName`] if two internal nodes share a name
/// * [`DomainError::EmptyTree`] if the arena has no root
#[instrument(level = "debug", skip(tree))]
pub fn phylogenetic_basis(tree: &TreeArena) -> TreeResult<BasisMap> {
    let root = tree.root().ok_or(DomainError::EmptyTree)?;
    let total = tree.subtree_leaf_count(root);

    let (basis, _num_leaves) = sequential_binary_partition(tree, root, 0, 0, total)?;
    Ok(basis)
}

/// One partition step: returns the basis entries for every internal node of
/// the subtree at `node_idx`, plus the subtree's leaf count.
///
/// `lead` and `trail` are running totals of leaves already assigned to
/// sibling clades on the path to the root: `lead` counts leaves lying to the
/// left of this subtree in the tree's leaf ordering, `trail` those to the
/// right. They position this split's nonzero coordinates at the slots of
/// its own leaves, so `lead + r + s + trail == total` at every node.
fn sequential_binary_partition(
    tree: &TreeArena,
    node_idx: Index,
    lead: usize,
    trail: usize,
    total: usize,
) -> TreeResult<(BasisMap, usize)> {
    let node = tree.get_node(node_idx).ok_or(DomainError::MissingNode)?;

    let (left, right) = match node.children.as_slice() {
        [] => return Ok((BasisMap::new(), 1)),
        &[left, right] => (left, right),
        other => {
            return Err(DomainError::NotBifurcating {
                name: node.data.name.clone(),
                count: other.len(),
            })
        }
    };

    // The left recursion must know how many leaves its sibling will claim
    // to its right before that sibling has been visited.
    let right_leaves = tree.subtree_leaf_count(right);

    let (left_basis, r) =
        sequential_binary_partition(tree, left, lead, trail + right_leaves, total)?;
    let (right_basis, s) = sequential_binary_partition(tree, right, lead + r, trail, total)?;
    debug!(name = %node.data.name, r, s, "partition");

    // Canonical SBP/ILR coefficients: unit norm in Aitchison geometry,
    // left clade positive, right clade negative.
    let a = (s as f64 / (r as f64 * (r + s) as f64)).sqrt();
    let b = -(r as f64 / (s as f64 * (r + s) as f64)).sqrt();

    let mut coords = vec![0.0; total];
    coords[lead..lead + r].fill(a);
    coords[lead + r..lead + r + s].fill(b);

    let mut basis = merge_bases(left_basis, right_basis)?;
    basis.insert(node.data.name.clone(), clr_inv(&coords));

    Ok((basis, r + s))
}

/// Merges the basis mappings of two sibling subtrees, failing on the first
/// name present in both.
///
/// This is the sole place tree-wide name uniqueness is enforced. Because it
/// runs once per internal node bottom-up, any duplicate is caught at the
/// lowest merge where the collision becomes visible, before the top-level
/// result is returned.
fn merge_bases(mut x: BasisMap, y: BasisMap) -> TreeResult<BasisMap> {
    for (name, vector) in y {
        match x.entry(name) {
            Entry::Vacant(slot) => {
                slot.insert(vector);
            }
            Entry::Occupied(slot) => return Err(DomainError::DuplicateName(slot.key().clone())),
        }
    }
    Ok(x)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn singleton(name: &str) -> BasisMap {
        BasisMap::from([(name.to_string(), vec![0.5, 0.5])])
    }

    #[test]
    fn test_merge_bases_disjoint() {
        let merged = merge_bases(singleton("a"), singleton("b")).unwrap();
        assert_eq!(merged.len(), 2);
        assert!(merged.contains_key("a") && merged.contains_key("b"));
    }

    #[test]
    fn test_merge_bases_collision() {
        let err = merge_bases(singleton("a"), singleton("a")).unwrap_err();
        assert!(matches!(err, DomainError::DuplicateName(name) if name == "a"));
    }

    #[test]
    fn test_empty_tree_is_rejected() {
        let tree = TreeArena::new();
        assert!(matches!(
            phylogenetic_basis(&tree),
            Err(DomainError::EmptyTree)
        ));
    }
}
