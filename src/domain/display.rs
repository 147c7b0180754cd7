//! Terminal rendering of arena trees via termtree.

use generational_arena::Index;
use termtree::Tree;

use crate::domain::arena::TreeArena;

pub trait TreeRender {
    fn to_tree_string(&self) -> Tree<String>;
}

impl TreeRender for TreeArena {
    fn to_tree_string(&self) -> Tree<String> {
        if let Some(root_idx) = self.root() {
            let mut tree = Tree::new(node_label(self, root_idx));

            fn build_tree(arena: &TreeArena, node_idx: Index, parent_tree: &mut Tree<String>) {
                if let Some(node) = arena.get_node(node_idx) {
                    for &child_idx in &node.children {
                        let mut child_tree = Tree::new(node_label(arena, child_idx));
                        build_tree(arena, child_idx, &mut child_tree);
                        parent_tree.push(child_tree);
                    }
                }
            }

            build_tree(self, root_idx, &mut tree);
            tree
        } else {
            Tree::new("Empty tree".to_string())
        }
    }
}

fn node_label(tree: &TreeArena, idx: Index) -> String {
    tree.get_node(idx)
        .map(|node| node.data.to_string())
        .unwrap_or_default()
}
