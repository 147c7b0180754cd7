//! Newick reader tests

use phylobasis::domain::error::DomainError;
use phylobasis::domain::newick;
use phylobasis::util::testing;
use rstest::rstest;

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

// ============================================================
// Structure Tests
// ============================================================

#[test]
fn given_nested_tree_when_parsing_then_returns_correct_hierarchy() {
    let tree = newick::parse("((b,c)a, d)root;").unwrap();

    assert_eq!(tree.node_count(), 5);
    assert_eq!(tree.depth(), 3);

    let root = tree.get_node(tree.root().unwrap()).unwrap();
    assert_eq!(root.data.name, "root");
    assert_eq!(root.children.len(), 2);

    let left = tree.get_node(root.children[0]).unwrap();
    assert_eq!(left.data.name, "a");
    assert!(!left.is_leaf());

    let right = tree.get_node(root.children[1]).unwrap();
    assert_eq!(right.data.name, "d");
    assert!(right.is_leaf());
}

#[test]
fn given_nested_tree_when_parsing_then_leaves_keep_reading_order() {
    let tree = newick::parse("((b,c)a, d)root;").unwrap();

    assert_eq!(tree.leaf_names(), vec!["b", "c", "d"]);
}

#[test]
fn given_multifurcating_tree_when_parsing_then_accepts_any_arity() {
    // Arity is a basis-construction concern, not a reader concern
    let tree = newick::parse("(a,b,c,d)root;").unwrap();

    let root = tree.get_node(tree.root().unwrap()).unwrap();
    assert_eq!(root.children.len(), 4);
}

#[test]
fn given_unnamed_internal_node_when_parsing_then_name_is_empty() {
    let tree = newick::parse("((x,y),z)root;").unwrap();

    let root = tree.get_node(tree.root().unwrap()).unwrap();
    let inner = tree.get_node(root.children[0]).unwrap();
    assert_eq!(inner.data.name, "");
}

// ============================================================
// Branch Length and Filler Tests
// ============================================================

#[test]
fn given_branch_lengths_when_parsing_then_lengths_are_attached() {
    let tree = newick::parse("(x:0.1,y:2)z:1.5;").unwrap();

    let root = tree.get_node(tree.root().unwrap()).unwrap();
    assert_eq!(root.data.branch_length, Some(1.5));

    let x = tree.get_node(root.children[0]).unwrap();
    assert_eq!(x.data.branch_length, Some(0.1));

    let y = tree.get_node(root.children[1]).unwrap();
    assert_eq!(y.data.branch_length, Some(2.0));
}

#[rstest]
#[case("(x,y)z;")]
#[case("(x,y)z")]
#[case(" ( x , y ) z ; ")]
#[case("[comment](x,y[another])z;")]
#[case("(x,\n y)z;\n")]
fn given_filler_variants_when_parsing_then_structure_is_unchanged(#[case] source: &str) {
    let tree = newick::parse(source).unwrap();

    assert_eq!(tree.leaf_names(), vec!["x", "y"]);
    let root = tree.get_node(tree.root().unwrap()).unwrap();
    assert_eq!(root.data.name, "z");
}

// ============================================================
// Error Tests
// ============================================================

#[rstest]
#[case("", 0)]
#[case("(x,y)z; junk", 8)]
#[case("(x,,y)z;", 3)]
fn given_malformed_input_when_parsing_then_reports_position(
    #[case] source: &str,
    #[case] expected_position: usize,
) {
    let err = newick::parse(source).unwrap_err();

    match err {
        DomainError::InvalidNewick { position, .. } => assert_eq!(position, expected_position),
        other => panic!("expected InvalidNewick, got {other}"),
    }
}

#[test]
fn given_unbalanced_group_when_parsing_then_reports_error() {
    assert!(newick::parse("((x,y)z;").is_err());
}
