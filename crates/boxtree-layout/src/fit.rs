// crates/boxtree-layout/src/fit.rs
//! Bottom-up sizing pass.
//!
//! Each node is finished only after its whole subtree, and as it finishes it
//! folds its size into the parent's running total: summed along the parent's
//! main axis, maxed along the cross axis. Sizes accumulate in place, so a
//! second run over the same tree adds on top of the first.

use boxtree_core::{LayoutTree, NodeId, Result, SizeBehavior};

pub fn compute_fit_sizes(tree: &mut LayoutTree, id: NodeId) -> Result<()> {
    let child_count = tree.children(id)?.len();
    for index in 0..child_count {
        let child_id = tree.children(id)?[index];
        compute_fit_sizes(tree, child_id)?;
    }

    let node = tree.node_mut(id)?;
    if node.size_behavior == SizeBehavior::Fit {
        node.size += 2.0 * node.padding;
        let gap = node.total_gap();
        *node.layout_direction.main_axis().get_mut(&mut node.size) += gap;
    }

    propagate_to_parent(tree, id)
}

/// Fold a finished node's size into its parent, unless the parent is fixed.
fn propagate_to_parent(tree: &mut LayoutTree, id: NodeId) -> Result<()> {
    let node = tree.node(id)?;
    let size = node.size;
    let Some(parent_id) = node.parent() else {
        return Ok(());
    };

    let parent = tree.node_mut(parent_id)?;
    if parent.size_behavior == SizeBehavior::Fixed {
        return Ok(());
    }

    let main = parent.layout_direction.main_axis();
    let cross = main.cross();
    *main.get_mut(&mut parent.size) += main.get(size);
    let cross_extent = cross.get_mut(&mut parent.size);
    *cross_extent = cross_extent.max(cross.get(size));

    Ok(())
}
