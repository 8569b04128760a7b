use crate::layouts::layout_tree::container::ContainerNode;
use crate::layouts::layout_tree::ContainerId;
use crate::layouts::{LayoutError, LayoutResult};
use slotmap::{new_key_type, SlotMap};
use std::ops::Index;

new_key_type! {
    /// Stable handle to a slot in a [`ContainerArena`].
    pub struct NodeKey;
}

/// Storage for every node of a layout tree.
///
/// Nodes refer to their children by [`NodeKey`]. Overwriting the content of a
/// slot with [`ContainerArena::replace`] keeps the key, so whoever holds it
/// (usually the parent's child list) sees the new content with no relinking.
#[derive(Debug, Default)]
pub struct ContainerArena {
    nodes: SlotMap<NodeKey, ContainerNode>,
}

impl ContainerArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn insert(&mut self, node: ContainerNode) -> NodeKey {
        self.nodes.insert(node)
    }

    pub fn get(&self, key: NodeKey) -> Option<&ContainerNode> {
        self.nodes.get(key)
    }

    pub(in crate::layouts::layout_tree) fn get_mut(
        &mut self,
        key: NodeKey,
    ) -> Option<&mut ContainerNode> {
        self.nodes.get_mut(key)
    }

    /// Overwrites the node stored at `key`, returning the previous content.
    pub(in crate::layouts::layout_tree) fn replace(
        &mut self,
        key: NodeKey,
        node: ContainerNode,
    ) -> Option<ContainerNode> {
        self.nodes
            .get_mut(key)
            .map(|slot| std::mem::replace(slot, node))
    }

    /// Frees a single slot without touching its children.
    pub(in crate::layouts::layout_tree) fn take(&mut self, key: NodeKey) -> Option<ContainerNode> {
        self.nodes.remove(key)
    }

    pub fn add_child(&mut self, parent: NodeKey, child: NodeKey) {
        if let Some(parent) = self.nodes.get_mut(parent) {
            parent.add_child(child);
        }
    }

    /// Detaches the direct child of `parent` whose id is `window_id`.
    ///
    /// Only direct children are looked at. The detached subtree stays in the
    /// arena until [`ContainerArena::discard`] is called on the returned key.
    pub fn remove_child(
        &mut self,
        parent: NodeKey,
        window_id: ContainerId,
    ) -> LayoutResult<NodeKey> {
        let index = self
            .nodes
            .get(parent)
            .and_then(|node| {
                node.children().iter().position(|child| {
                    self.nodes
                        .get(*child)
                        .is_some_and(|child| child.id() == window_id)
                })
            })
            .ok_or(LayoutError::WindowNotFound(window_id))?;

        let node = self
            .nodes
            .get_mut(parent)
            .ok_or(LayoutError::WindowNotFound(window_id))?;
        Ok(node.children.remove(index))
    }

    /// Pre-order list of the subtree rooted at `key`, children left to right.
    pub fn traverse(&self, key: NodeKey) -> Vec<NodeKey> {
        let mut result = Vec::new();
        let mut stack = vec![key];

        while let Some(current) = stack.pop() {
            let Some(node) = self.nodes.get(current) else {
                continue;
            };
            result.push(current);

            // Reversed so the leftmost child is popped first
            stack.extend(node.children().iter().rev().copied());
        }

        result
    }

    /// Frees `key` and everything below it.
    pub fn discard(&mut self, key: NodeKey) {
        for key in self.traverse(key) {
            self.nodes.remove(key);
        }
    }
}

impl Index<NodeKey> for ContainerArena {
    type Output = ContainerNode;

    fn index(&self, key: NodeKey) -> &Self::Output {
        &self.nodes[key]
    }
}
