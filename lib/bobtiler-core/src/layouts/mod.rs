use crate::layouts::layout_tree::ContainerId;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use thiserror::Error;

pub mod layout_tree;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Horizontal,
    Vertical,
}

impl Direction {
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Horizontal => Direction::Vertical,
            Direction::Vertical => Direction::Horizontal,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("Parent container not found: {0}")]
    ParentNotFound(ContainerId),

    #[error("Window not found: {0}")]
    WindowNotFound(ContainerId),

    #[error("Cannot remove the root container: {0}")]
    CannotRemoveRoot(ContainerId),

    #[error("No container ids left after {0}")]
    IdsExhausted(ContainerId),

    #[error("Failed to serialize layout: {0}")]
    Serialize(String),
}

pub type LayoutResult<T> = Result<T, LayoutError>;
