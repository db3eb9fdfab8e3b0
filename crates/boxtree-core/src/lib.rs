// crates/boxtree-core/src/lib.rs
pub mod geometry;
pub mod node;
pub mod tree;

pub use geometry::*;
pub use node::*;
pub use tree::*;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("Node not found: {0}")]
    NodeNotFound(NodeId),
}

pub type Result<T> = std::result::Result<T, LayoutError>;
