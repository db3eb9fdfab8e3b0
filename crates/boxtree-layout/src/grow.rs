// crates/boxtree-layout/src/grow.rs
//! Top-down pass handing leftover space to `Grow` children.

use boxtree_core::{LayoutTree, NodeId, Result, SizeBehavior};
use glam::Vec2;

/// Space inside `id` not taken by padding, children or gaps.
///
/// Children are summed along the main axis and maxed along the cross axis.
pub fn remaining_size(tree: &LayoutTree, id: NodeId) -> Result<Vec2> {
    let node = tree.node(id)?;
    let main = node.layout_direction.main_axis();
    let cross = main.cross();

    let mut used = main.vec(node.total_gap());
    for &child_id in node.children() {
        let child_size = tree.node(child_id)?.size;
        *main.get_mut(&mut used) += main.get(child_size);
        let cross_used = cross.get_mut(&mut used);
        *cross_used = cross_used.max(cross.get(child_size));
    }

    Ok(node.inner_size() - used)
}

/// Every `Grow` child gets the full remaining main-axis space and fills the
/// cross axis. Siblings do not share: two grow children both get all of it.
pub fn distribute_grow_space(tree: &mut LayoutTree, id: NodeId) -> Result<()> {
    let remaining = remaining_size(tree, id)?;
    let node = tree.node(id)?;
    let main = node.layout_direction.main_axis();
    let cross = main.cross();
    let cross_fill = cross.get(node.inner_size());
    let child_count = node.children().len();

    for index in 0..child_count {
        let child_id = tree.children(id)?[index];
        let child = tree.node_mut(child_id)?;
        if child.size_behavior == SizeBehavior::Grow {
            *main.get_mut(&mut child.size) += main.get(remaining);
            *cross.get_mut(&mut child.size) = cross_fill;
        }
        distribute_grow_space(tree, child_id)?;
    }

    Ok(())
}
