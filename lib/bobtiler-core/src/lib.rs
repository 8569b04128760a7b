pub mod config;
pub mod layouts;
pub mod metadata;
pub mod paths;

pub use config::{Config, DumpFormat};
pub use layouts::layout_tree::{
    serialize_tree, ContainerId, ContainerKind, ContainerNode, LayoutTree, NodeKey,
    SerializedContainer, SerializedContainerKind, SerializedLayoutTree,
};
pub use layouts::{Direction, LayoutError, LayoutResult};
pub use metadata::Metadata;

pub fn version() -> &'static str {
    option_env!("VERSION").unwrap_or("v0.0.0-dev")
}

#[derive(Debug)]
pub enum BobTilerFatalError {
    Error(String),
    Layout(LayoutError),
}

pub type BobTilerResult<T> = Result<T, BobTilerFatalError>;

impl From<LayoutError> for BobTilerFatalError {
    fn from(error: LayoutError) -> Self {
        BobTilerFatalError::Layout(error)
    }
}

impl From<&str> for BobTilerFatalError {
    fn from(value: &str) -> Self {
        BobTilerFatalError::Error(value.to_owned())
    }
}

impl From<String> for BobTilerFatalError {
    fn from(error: String) -> Self {
        BobTilerFatalError::Error(error)
    }
}

impl std::fmt::Display for BobTilerFatalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BobTilerFatalError::Error(message) => write!(f, "{message}"),
            BobTilerFatalError::Layout(error) => write!(f, "{error}"),
        }
    }
}
