use crate::layouts::layout_tree::container::{ContainerArena, ContainerNode, NodeKey};

/// Walks the window leaves of a tree from left to right.
pub struct LayoutTreeIterator<'a> {
    nodes: &'a ContainerArena,
    stack: Vec<NodeKey>,
}

impl<'a> LayoutTreeIterator<'a> {
    pub fn new(nodes: &'a ContainerArena, root: NodeKey) -> Self {
        Self {
            nodes,
            stack: vec![root],
        }
    }
}

impl<'a> Iterator for LayoutTreeIterator<'a> {
    type Item = &'a ContainerNode;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(key) = self.stack.pop() {
            let Some(node) = self.nodes.get(key) else {
                continue;
            };

            if node.is_window() {
                return Some(node);
            }

            self.stack.extend(node.children().iter().rev().copied());
        }

        None
    }
}
