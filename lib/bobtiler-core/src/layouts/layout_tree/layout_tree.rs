use crate::config::DumpFormat;
use crate::layouts::layout_tree::container::{
    ContainerArena, ContainerKind, ContainerNode, NodeKey,
};
use crate::layouts::layout_tree::layout_tree_iterator::LayoutTreeIterator;
use crate::layouts::layout_tree::serialize::serialize_tree;
use crate::layouts::layout_tree::ContainerId;
use crate::layouts::{Direction, LayoutError, LayoutResult};
use crate::metadata::Metadata;
use log::{debug, trace, warn};
use std::fmt::Write;
use std::time::{SystemTime, UNIX_EPOCH};

/// Tree of window and split containers.
///
/// The tree owns every node through a [`ContainerArena`]. Splitting a window
/// or collapsing a split rewrites the affected slot in place, so a node's id
/// and its position in its parent's child list never change.
#[derive(Debug)]
pub struct LayoutTree {
    nodes: ContainerArena,
    root: NodeKey,
    prev_id: ContainerId,
}

impl LayoutTree {
    /// Creates a tree holding a single window, with a root id taken from the
    /// current time in milliseconds.
    pub fn new(attrs: Metadata) -> Self {
        let id = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis() as ContainerId)
            .unwrap_or_default();

        Self::with_root_id(id, attrs)
    }

    pub fn with_root_id(id: ContainerId, attrs: Metadata) -> Self {
        let mut nodes = ContainerArena::new();
        let root = nodes.insert(ContainerNode::new_window(id, None, attrs));

        Self {
            nodes,
            root,
            prev_id: id,
        }
    }

    pub fn root(&self) -> &ContainerNode {
        &self.nodes[self.root]
    }

    pub fn root_id(&self) -> ContainerId {
        self.root().id()
    }

    /// The most recently allocated id.
    pub fn prev_id(&self) -> ContainerId {
        self.prev_id
    }

    /// Number of containers in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn children<'a>(
        &'a self,
        node: &'a ContainerNode,
    ) -> impl Iterator<Item = &'a ContainerNode> + 'a {
        node.children()
            .iter()
            .filter_map(move |child| self.nodes.get(*child))
    }

    /// Id that `count` more allocations would end on, without committing it.
    fn reserve_ids(&self, count: u64) -> LayoutResult<ContainerId> {
        self.prev_id
            .checked_add(count)
            .ok_or(LayoutError::IdsExhausted(self.prev_id))
    }

    fn find_key(&self, id: ContainerId) -> Option<NodeKey> {
        let mut stack = vec![self.root];

        while let Some(key) = stack.pop() {
            let node = self.nodes.get(key)?;
            if node.id() == id {
                return Some(key);
            }

            stack.extend(node.children().iter().copied());
        }

        None
    }

    pub fn find_container(&self, id: ContainerId) -> Option<&ContainerNode> {
        self.find_key(id).and_then(|key| self.nodes.get(key))
    }

    /// Inserts a window under the container `parent_id` and returns the new
    /// window's id.
    ///
    /// When the parent is a window it becomes a split in `direction`, keeping
    /// its id and parent. Its old metadata moves into a new first child and the
    /// inserted window becomes the second child. When the parent is already a
    /// split the window is appended to it.
    pub fn add_window(
        &mut self,
        parent_id: ContainerId,
        direction: Direction,
        attrs: Metadata,
    ) -> LayoutResult<ContainerId> {
        let key = self
            .find_key(parent_id)
            .ok_or(LayoutError::ParentNotFound(parent_id))?;

        let (existing, grandparent_id) = {
            let node = &self.nodes[key];
            (node.metadata().cloned(), node.parent_id())
        };

        match existing {
            Some(existing) => {
                let child_id = self.reserve_ids(2)?;
                let window_id = child_id - 1;
                self.prev_id = child_id;

                let new_window = self
                    .nodes
                    .insert(ContainerNode::new_window(window_id, Some(parent_id), attrs));
                let new_child = self
                    .nodes
                    .insert(ContainerNode::new_window(child_id, Some(parent_id), existing));

                let mut split = ContainerNode::new_split(parent_id, grandparent_id, direction);
                split.add_child(new_child);
                split.add_child(new_window);

                self.nodes.replace(key, split);

                debug!("Split window {parent_id} {direction:?} into [{child_id}, {window_id}]");
                Ok(window_id)
            }
            None => {
                let window_id = self.reserve_ids(1)?;
                self.prev_id = window_id;

                let new_window = self
                    .nodes
                    .insert(ContainerNode::new_window(window_id, Some(parent_id), attrs));
                self.nodes.add_child(key, new_window);

                trace!("Added window {window_id} to split {parent_id}");
                Ok(window_id)
            }
        }
    }

    /// Removes the container `window_id` along with everything below it.
    ///
    /// A split left with a single child is collapsed into that child.
    pub fn remove_window(&mut self, window_id: ContainerId) -> LayoutResult<()> {
        if window_id == self.root_id() {
            return Err(LayoutError::CannotRemoveRoot(window_id));
        }

        let mut stack = vec![self.root];

        while let Some(key) = stack.pop() {
            match self.nodes.remove_child(key, window_id) {
                Ok(removed) => {
                    self.nodes.discard(removed);

                    let node = &self.nodes[key];
                    if node.is_split() && node.children().len() == 1 {
                        self.collapse(key);
                    }

                    trace!("Removed window {window_id}");
                    return Ok(());
                }
                Err(_) => {
                    if let Some(node) = self.nodes.get(key) {
                        stack.extend(node.children().iter().copied());
                    }
                }
            }
        }

        Err(LayoutError::WindowNotFound(window_id))
    }

    /// Replaces the split at `key` with the content of its only child.
    ///
    /// The slot keeps its own id and parent; the adopted children are
    /// re-parented to it.
    fn collapse(&mut self, key: NodeKey) {
        let Some(&survivor_key) = self.nodes[key].children().first() else {
            return;
        };
        let Some(survivor) = self.nodes.take(survivor_key) else {
            return;
        };

        let id = self.nodes[key].id();
        let parent = self.nodes[key].parent_id();
        let survivor_id = survivor.id();
        let (kind, children) = survivor.into_parts();

        for child in &children {
            if let Some(child) = self.nodes.get_mut(*child) {
                child.set_parent(Some(id));
            }
        }

        self.nodes
            .replace(key, ContainerNode::from_parts(id, parent, kind, children));

        debug!("Collapsed split {id} into the content of {survivor_id}");
    }

    /// Replaces the metadata of the container `window_id`.
    ///
    /// Splits have no metadata, so updating one succeeds without storing anything.
    pub fn update_attrs(&mut self, window_id: ContainerId, attrs: Metadata) -> LayoutResult<()> {
        let node = self
            .find_key(window_id)
            .and_then(|key| self.nodes.get_mut(key))
            .ok_or(LayoutError::WindowNotFound(window_id))?;

        match node.kind_mut() {
            ContainerKind::Window(current) => {
                *current = attrs;
                trace!("Updated metadata of window {window_id}");
            }
            ContainerKind::Split(_) => {
                warn!("Container {window_id} is a split, dropping metadata update");
            }
        }

        Ok(())
    }

    /// Every container in pre-order, children left to right.
    pub fn traverse(&self) -> LayoutResult<Vec<&ContainerNode>> {
        if self.nodes.get(self.root).is_none() {
            return Err(LayoutError::WindowNotFound(self.prev_id));
        }

        Ok(self
            .nodes
            .traverse(self.root)
            .into_iter()
            .filter_map(|key| self.nodes.get(key))
            .collect())
    }

    /// The window leaves, left to right.
    pub fn windows(&self) -> LayoutTreeIterator<'_> {
        LayoutTreeIterator::new(&self.nodes, self.root)
    }

    pub fn serialize(&self) -> LayoutResult<serde_yaml::Value> {
        serde_yaml::to_value(serialize_tree(self))
            .map_err(|e| LayoutError::Serialize(e.to_string()))
    }

    pub fn dump(&self, format: DumpFormat) -> LayoutResult<String> {
        let serialized = serialize_tree(self);
        match format {
            DumpFormat::Yaml => serde_yaml::to_string(&serialized)
                .map_err(|e| LayoutError::Serialize(e.to_string())),
            DumpFormat::Json => serde_json::to_string_pretty(&serialized)
                .map_err(|e| LayoutError::Serialize(e.to_string())),
        }
    }

    /// Indented outline of the tree, one container per line.
    pub fn debug_layout(&self) -> String {
        let mut output = String::new();
        let mut stack = vec![(self.root, 0usize)];

        while let Some((key, depth)) = stack.pop() {
            let Some(node) = self.nodes.get(key) else {
                continue;
            };

            let indent = "  ".repeat(depth);
            let _ = match node.kind() {
                ContainerKind::Window(attrs) => {
                    writeln!(output, "{indent}window {} \"{}\"", node.id(), attrs.name)
                }
                ContainerKind::Split(direction) => {
                    writeln!(output, "{indent}split {} {:?}", node.id(), direction)
                }
            };

            stack.extend(node.children().iter().rev().map(|child| (*child, depth + 1)));
        }

        output
    }
}
