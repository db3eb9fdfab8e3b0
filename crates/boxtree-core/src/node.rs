// crates/boxtree-core/src/node.rs
use glam::Vec2;
use serde::Serialize;

use crate::{Axis, Rect};

pub type NodeId = u32;

/// How layout treats a node's own size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SizeBehavior {
    /// Size is whatever the caller set; layout never touches it.
    Fixed,
    /// Size is derived from the children, padding and gaps.
    #[default]
    Fit,
    /// Size is taken from the leftover space of the parent.
    Grow,
}

/// How a node arranges its own children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayoutDirection {
    #[default]
    LeftToRight,
    TopToBottom,
}

impl LayoutDirection {
    pub fn main_axis(self) -> Axis {
        match self {
            LayoutDirection::LeftToRight => Axis::X,
            LayoutDirection::TopToBottom => Axis::Y,
        }
    }

    pub fn cross_axis(self) -> Axis {
        self.main_axis().cross()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,

    pub position: Vec2,
    pub size: Vec2,
    pub size_behavior: SizeBehavior,
    pub layout_direction: LayoutDirection,
    pub padding: Vec2,
    pub children_gap: f32,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            parent: None,
            children: Vec::new(),
            position: Vec2::ZERO,
            size: Vec2::ZERO,
            size_behavior: SizeBehavior::Fit,
            layout_direction: LayoutDirection::LeftToRight,
            padding: Vec2::ZERO,
            children_gap: 0.0,
        }
    }
}

impl Node {
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.position, self.size)
    }

    /// Size left for children once padding is taken off both sides.
    pub fn inner_size(&self) -> Vec2 {
        self.size - 2.0 * self.padding
    }

    /// Total main-axis spacing between children. Zero with fewer than two children.
    pub fn total_gap(&self) -> f32 {
        self.children_gap * self.children.len().saturating_sub(1) as f32
    }
}

/// Field values that replace a new node's defaults.
///
/// Each field replaces the default as a whole: a `padding` override sets both
/// components, there is no per-component merge.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NodeOverrides {
    pub position: Option<Vec2>,
    pub size: Option<Vec2>,
    pub size_behavior: Option<SizeBehavior>,
    pub layout_direction: Option<LayoutDirection>,
    pub padding: Option<Vec2>,
    pub children_gap: Option<f32>,
}

impl NodeOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(mut self, position: Vec2) -> Self {
        self.position = Some(position);
        self
    }

    pub fn size(mut self, size: Vec2) -> Self {
        self.size = Some(size);
        self
    }

    pub fn size_behavior(mut self, size_behavior: SizeBehavior) -> Self {
        self.size_behavior = Some(size_behavior);
        self
    }

    pub fn layout_direction(mut self, layout_direction: LayoutDirection) -> Self {
        self.layout_direction = Some(layout_direction);
        self
    }

    pub fn padding(mut self, padding: Vec2) -> Self {
        self.padding = Some(padding);
        self
    }

    pub fn children_gap(mut self, children_gap: f32) -> Self {
        self.children_gap = Some(children_gap);
        self
    }

    pub(crate) fn apply(self, node: &mut Node) {
        if let Some(position) = self.position {
            node.position = position;
        }
        if let Some(size) = self.size {
            node.size = size;
        }
        if let Some(size_behavior) = self.size_behavior {
            node.size_behavior = size_behavior;
        }
        if let Some(layout_direction) = self.layout_direction {
            node.layout_direction = layout_direction;
        }
        if let Some(padding) = self.padding {
            node.padding = padding;
        }
        if let Some(children_gap) = self.children_gap {
            node.children_gap = children_gap;
        }
    }
}
