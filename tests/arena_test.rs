//! Tests for the arena-based tree structure

use phylobasis::domain::arena::{NodeData, TreeArena};
use phylobasis::domain::display::TreeRender;
use phylobasis::util::testing;

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

//      root
//      /  \
//     a    d
//    / \
//   b   c
fn sample_tree() -> TreeArena {
    let mut tree = TreeArena::new();
    let root = tree.insert_node(NodeData::named("root"), None);
    let a = tree.insert_node(NodeData::named("a"), Some(root));
    tree.insert_node(NodeData::named("b"), Some(a));
    tree.insert_node(NodeData::named("c"), Some(a));
    tree.insert_node(NodeData::named("d"), Some(root));
    tree
}

#[test]
fn given_tree_when_inserting_nodes_then_hierarchy_is_wired() {
    let tree = sample_tree();

    assert_eq!(tree.node_count(), 5);
    assert_eq!(tree.depth(), 3);

    let root = tree.get_node(tree.root().unwrap()).unwrap();
    assert!(root.parent.is_none());
    assert_eq!(root.children.len(), 2);

    let a = tree.get_node(root.children[0]).unwrap();
    assert_eq!(a.parent, tree.root());
}

#[test]
fn given_tree_when_iterating_preorder_then_parent_comes_before_children() {
    let tree = sample_tree();

    let names: Vec<String> = tree.iter().map(|(_, n)| n.data.name.clone()).collect();
    assert_eq!(names, vec!["root", "a", "b", "c", "d"]);
}

#[test]
fn given_tree_when_iterating_postorder_then_leaves_come_before_parents() {
    let tree = sample_tree();

    let names: Vec<String> = tree
        .iter_postorder()
        .map(|(_, n)| n.data.name.clone())
        .collect();
    assert_eq!(names, vec!["b", "c", "a", "d", "root"]);
}

#[test]
fn given_tree_when_counting_subtree_leaves_then_counts_match_clades() {
    let tree = sample_tree();
    let root_idx = tree.root().unwrap();

    assert_eq!(tree.subtree_leaf_count(root_idx), 3);

    let root = tree.get_node(root_idx).unwrap();
    assert_eq!(tree.subtree_leaf_count(root.children[0]), 2);
    assert_eq!(tree.subtree_leaf_count(root.children[1]), 1);
}

#[test]
fn given_empty_tree_when_querying_then_returns_empty_results() {
    let tree = TreeArena::new();

    assert!(tree.root().is_none());
    assert_eq!(tree.depth(), 0);
    assert!(tree.leaf_names().is_empty());
    assert_eq!(tree.iter().count(), 0);
}

#[test]
fn given_tree_when_rendering_then_all_names_appear() {
    let tree = sample_tree();

    let rendered = tree.to_tree_string().to_string();
    for name in ["root", "a", "b", "c", "d"] {
        assert!(rendered.contains(name), "missing '{name}' in:\n{rendered}");
    }
}
