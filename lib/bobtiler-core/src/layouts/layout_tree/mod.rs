pub use container::{ContainerArena, ContainerKind, ContainerNode, NodeKey};
pub use layout_tree::*;
pub use layout_tree_iterator::LayoutTreeIterator;
pub use serialize::*;

mod container;
mod layout_tree;
mod layout_tree_iterator;
mod serialize;

pub type ContainerId = u64;

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::layouts::Direction;
    use crate::metadata::Metadata;
    use std::collections::HashSet;

    pub const ROOT_ID: ContainerId = 1000;

    pub fn new_metadata(id: i64) -> Metadata {
        Metadata::new(format!("Tab {id}"), id)
    }

    pub fn new_tree() -> LayoutTree {
        LayoutTree::with_root_id(ROOT_ID, new_metadata(1))
    }

    pub fn assert_is_window(node: &ContainerNode) -> &Metadata {
        match node.kind() {
            ContainerKind::Window(attrs) => attrs,
            _ => panic!("Expected {:?} to be a window", node),
        }
    }

    pub fn assert_is_split(node: &ContainerNode) -> Direction {
        match node.kind() {
            ContainerKind::Split(direction) => *direction,
            _ => panic!("Expected {:?} to be a split", node),
        }
    }

    pub fn child_nodes<'a>(
        tree: &'a LayoutTree,
        node: &'a ContainerNode,
    ) -> Vec<&'a ContainerNode> {
        tree.children(node).collect()
    }

    /// Checks every structural invariant that must hold between operations.
    pub fn assert_well_formed(tree: &LayoutTree) {
        let nodes = tree.traverse().unwrap();
        assert_eq!(nodes.len(), tree.len(), "arena holds unreachable nodes");
        assert_eq!(nodes[0].parent_id(), None);

        let mut seen = HashSet::new();
        for node in &nodes {
            assert!(seen.insert(node.id()), "duplicate id {}", node.id());
            assert!(node.id() <= tree.prev_id());

            match node.kind() {
                ContainerKind::Window(_) => assert!(node.children().is_empty()),
                ContainerKind::Split(_) => assert!(node.children().len() >= 2),
            }

            for child in tree.children(node) {
                assert_eq!(child.parent_id(), Some(node.id()));
            }
        }
    }
}
