// crates/boxtree-layout/src/position.rs
//! Top-down placement pass. Children are stacked along the parent's main axis
//! from its padded origin and sit flush against the padded edge on the cross
//! axis. Positions are added to, not assigned, so callers can pre-offset nodes.

use boxtree_core::{LayoutTree, NodeId, Result};

pub fn assign_positions(tree: &mut LayoutTree, id: NodeId) -> Result<()> {
    let node = tree.node(id)?;
    let main = node.layout_direction.main_axis();
    let origin = node.position + node.padding;
    let gap = node.children_gap;
    let child_count = node.children().len();

    let mut offset = 0.0;
    for index in 0..child_count {
        let child_id = tree.children(id)?[index];
        let child = tree.node_mut(child_id)?;
        child.position += origin + main.vec(offset);
        offset += main.get(child.size) + gap;

        assign_positions(tree, child_id)?;
    }

    Ok(())
}
