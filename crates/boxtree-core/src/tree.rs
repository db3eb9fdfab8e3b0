// crates/boxtree-core/src/tree.rs
use std::collections::HashMap;

use crate::{LayoutError, Node, NodeId, NodeOverrides, Result};

/// Arena owning every node of one or more layout trees.
///
/// Children are owned by the arena and listed in insertion order on their
/// parent; `Node::parent` is a plain handle used for lookups only.
#[derive(Debug, Clone, Default)]
pub struct LayoutTree {
    nodes: Vec<Node>,
    /// Number of layout passes run so far, keyed by the root they were run on.
    passes: HashMap<NodeId, u32>,
}

impl LayoutTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            passes: HashMap::new(),
        }
    }

    /// Create a node from the defaults plus `overrides`, appending it to
    /// `parent`'s children when a parent is given.
    pub fn create_node(
        &mut self,
        overrides: NodeOverrides,
        parent: Option<NodeId>,
    ) -> Result<NodeId> {
        if let Some(parent_id) = parent {
            if !self.contains(parent_id) {
                return Err(LayoutError::NodeNotFound(parent_id));
            }
        }

        let id = self.nodes.len() as NodeId;
        let mut node = Node {
            parent,
            ..Node::default()
        };
        overrides.apply(&mut node);
        self.nodes.push(node);

        if let Some(parent_id) = parent {
            self.node_mut(parent_id)?.children.push(id);
        }

        Ok(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        (id as usize) < self.nodes.len()
    }

    pub fn node(&self, id: NodeId) -> Result<&Node> {
        self.nodes
            .get(id as usize)
            .ok_or(LayoutError::NodeNotFound(id))
    }

    pub fn node_mut(&mut self, id: NodeId) -> Result<&mut Node> {
        self.nodes
            .get_mut(id as usize)
            .ok_or(LayoutError::NodeNotFound(id))
    }

    pub fn parent(&self, id: NodeId) -> Result<Option<NodeId>> {
        Ok(self.node(id)?.parent)
    }

    pub fn children(&self, id: NodeId) -> Result<&[NodeId]> {
        Ok(&self.node(id)?.children)
    }

    /// Every node in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(index, node)| (index as NodeId, node))
    }

    /// Parent chain of `id`, nearest first. Empty for a root.
    pub fn ancestors(&self, id: NodeId) -> Result<Vec<NodeId>> {
        let mut ancestors = Vec::new();
        let mut current = self.node(id)?.parent;
        while let Some(parent_id) = current {
            ancestors.push(parent_id);
            current = self.node(parent_id)?.parent;
        }
        Ok(ancestors)
    }

    pub fn depth(&self, id: NodeId) -> Result<usize> {
        Ok(self.ancestors(id)?.len())
    }

    /// `id` and its whole subtree in pre-order.
    pub fn descendants(&self, id: NodeId) -> Result<Vec<NodeId>> {
        let mut order = Vec::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            order.push(current);
            stack.extend(self.node(current)?.children.iter().rev());
        }
        Ok(order)
    }

    /// How many layout passes have been run on `root`.
    pub fn layout_passes(&self, root: NodeId) -> u32 {
        self.passes.get(&root).copied().unwrap_or(0)
    }

    /// Count a new layout pass on `root` and return the updated total.
    pub fn record_layout_pass(&mut self, root: NodeId) -> u32 {
        let passes = self.passes.entry(root).or_insert(0);
        *passes += 1;
        *passes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LayoutDirection, SizeBehavior};
    use glam::Vec2;

    #[test]
    fn test_default_construction() {
        let mut tree = LayoutTree::new();
        let id = tree.create_node(NodeOverrides::new(), None).unwrap();
        let node = tree.node(id).unwrap();

        assert_eq!(node.position, Vec2::ZERO);
        assert_eq!(node.size, Vec2::ZERO);
        assert_eq!(node.size_behavior, SizeBehavior::Fit);
        assert_eq!(node.layout_direction, LayoutDirection::LeftToRight);
        assert_eq!(node.padding, Vec2::ZERO);
        assert_eq!(node.children_gap, 0.0);
        assert!(node.children().is_empty());
        assert_eq!(node.parent(), None);
    }

    #[test]
    fn test_attachment_preserves_order() {
        let mut tree = LayoutTree::new();
        let root = tree.create_node(NodeOverrides::new(), None).unwrap();
        let first = tree.create_node(NodeOverrides::new(), Some(root)).unwrap();
        let second = tree.create_node(NodeOverrides::new(), Some(root)).unwrap();
        let third = tree.create_node(NodeOverrides::new(), Some(root)).unwrap();

        assert_eq!(tree.children(root).unwrap(), &[first, second, third]);
        for child in [first, second, third] {
            assert_eq!(tree.parent(child).unwrap(), Some(root));
        }
    }

    #[test]
    fn test_attachment_leaves_other_nodes_alone() {
        let mut tree = LayoutTree::new();
        let root = tree.create_node(NodeOverrides::new(), None).unwrap();
        let branch = tree.create_node(NodeOverrides::new(), Some(root)).unwrap();
        let leaf = tree.create_node(NodeOverrides::new(), Some(branch)).unwrap();

        assert_eq!(tree.children(root).unwrap(), &[branch]);
        assert_eq!(tree.children(branch).unwrap(), &[leaf]);
        assert!(tree.children(leaf).unwrap().is_empty());
    }

    #[test]
    fn test_unknown_parent_is_rejected() {
        let mut tree = LayoutTree::new();
        let result = tree.create_node(NodeOverrides::new(), Some(7));

        assert_eq!(result, Err(LayoutError::NodeNotFound(7)));
        assert!(tree.is_empty());
    }

    #[test]
    fn test_ancestors_and_depth() {
        let mut tree = LayoutTree::new();
        let root = tree.create_node(NodeOverrides::new(), None).unwrap();
        let branch = tree.create_node(NodeOverrides::new(), Some(root)).unwrap();
        let leaf = tree.create_node(NodeOverrides::new(), Some(branch)).unwrap();

        assert_eq!(tree.ancestors(leaf).unwrap(), vec![branch, root]);
        assert_eq!(tree.depth(leaf).unwrap(), 2);
        assert_eq!(tree.depth(root).unwrap(), 0);
    }

    #[test]
    fn test_descendants_are_pre_order() {
        let mut tree = LayoutTree::new();
        let root = tree.create_node(NodeOverrides::new(), None).unwrap();
        let a = tree.create_node(NodeOverrides::new(), Some(root)).unwrap();
        let b = tree.create_node(NodeOverrides::new(), Some(root)).unwrap();
        let a1 = tree.create_node(NodeOverrides::new(), Some(a)).unwrap();
        let a2 = tree.create_node(NodeOverrides::new(), Some(a)).unwrap();
        let b1 = tree.create_node(NodeOverrides::new(), Some(b)).unwrap();

        assert_eq!(tree.descendants(root).unwrap(), vec![root, a, a1, a2, b, b1]);
        assert_eq!(tree.descendants(b).unwrap(), vec![b, b1]);
    }

    #[test]
    fn test_layout_pass_counter() {
        let mut tree = LayoutTree::new();
        let root = tree.create_node(NodeOverrides::new(), None).unwrap();

        assert_eq!(tree.layout_passes(root), 0);
        assert_eq!(tree.record_layout_pass(root), 1);
        assert_eq!(tree.record_layout_pass(root), 2);
        assert_eq!(tree.layout_passes(root), 2);
    }
}
