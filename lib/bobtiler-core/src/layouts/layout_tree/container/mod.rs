pub use container_arena::*;

use crate::layouts::layout_tree::ContainerId;
use crate::layouts::Direction;
use crate::metadata::Metadata;

mod container_arena;

#[derive(Debug, Clone, PartialEq)]
pub enum ContainerKind {
    /// A leaf holding the window's metadata. Never has children.
    Window(Metadata),
    /// An internal node dividing its space among its children along a direction.
    Split(Direction),
}

/// One element of the layout. Children are handles into the owning
/// [`ContainerArena`], so a node can be rewritten in its slot without any other
/// node noticing.
#[derive(Debug, Clone, PartialEq)]
pub struct ContainerNode {
    id: ContainerId,
    parent: Option<ContainerId>,
    kind: ContainerKind,
    children: Vec<NodeKey>,
}

impl ContainerNode {
    pub fn new_window(id: ContainerId, parent: Option<ContainerId>, attrs: Metadata) -> Self {
        Self {
            id,
            parent,
            kind: ContainerKind::Window(attrs),
            children: Vec::new(),
        }
    }

    pub fn new_split(id: ContainerId, parent: Option<ContainerId>, direction: Direction) -> Self {
        Self {
            id,
            parent,
            kind: ContainerKind::Split(direction),
            children: Vec::new(),
        }
    }

    pub fn id(&self) -> ContainerId {
        self.id
    }

    pub fn parent_id(&self) -> Option<ContainerId> {
        self.parent
    }

    pub(super) fn set_parent(&mut self, parent: Option<ContainerId>) {
        self.parent = parent;
    }

    pub fn kind(&self) -> &ContainerKind {
        &self.kind
    }

    pub(super) fn kind_mut(&mut self) -> &mut ContainerKind {
        &mut self.kind
    }

    pub fn children(&self) -> &[NodeKey] {
        &self.children
    }

    pub fn is_window(&self) -> bool {
        matches!(self.kind, ContainerKind::Window(_))
    }

    pub fn is_split(&self) -> bool {
        matches!(self.kind, ContainerKind::Split(_))
    }

    pub fn metadata(&self) -> Option<&Metadata> {
        match &self.kind {
            ContainerKind::Window(attrs) => Some(attrs),
            ContainerKind::Split(_) => None,
        }
    }

    pub fn direction(&self) -> Option<Direction> {
        match self.kind {
            ContainerKind::Split(direction) => Some(direction),
            ContainerKind::Window(_) => None,
        }
    }

    /// Appends a child handle. The kind is not checked; only splits should get children.
    pub fn add_child(&mut self, child: NodeKey) {
        self.children.push(child);
    }

    pub(super) fn into_parts(self) -> (ContainerKind, Vec<NodeKey>) {
        (self.kind, self.children)
    }

    pub(super) fn from_parts(
        id: ContainerId,
        parent: Option<ContainerId>,
        kind: ContainerKind,
        children: Vec<NodeKey>,
    ) -> Self {
        Self {
            id,
            parent,
            kind,
            children,
        }
    }
}
