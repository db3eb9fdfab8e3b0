// crates/boxtree-layout/src/lib.rs

use boxtree_core::{LayoutTree, NodeId, Result};
use tracing::{debug, trace, warn};

pub mod fit;
pub mod grow;
pub mod position;

pub use fit::*;
pub use grow::*;
pub use position::*;

/// Summary of one layout run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutStats {
    /// Nodes in the laid-out subtree, root included.
    pub node_count: usize,
    /// Passes run on this root so far, this one included.
    pub pass: u32,
}

pub trait LayoutEngine {
    fn compute_layout(&mut self, tree: &mut LayoutTree, root: NodeId) -> Result<LayoutStats>;
}

/// Three-phase box layout: fit sizes bottom-up, hand out grow space top-down,
/// then place children top-down.
///
/// The phases mutate the tree in place and accumulate into existing sizes and
/// positions, so running the engine twice on the same tree does not give the
/// same result twice. Rebuild the tree before laying it out again.
#[derive(Debug)]
pub struct BoxLayoutEngine {
    debug: bool,
}

impl BoxLayoutEngine {
    pub fn new() -> Self {
        Self { debug: false }
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    fn trace_phase(&self, tree: &LayoutTree, root: NodeId, phase: &str) -> Result<()> {
        if !self.debug {
            return Ok(());
        }

        for id in tree.descendants(root)? {
            let node = tree.node(id)?;
            debug!(
                "[{}] node {} ({:?}, {:?}): pos={:?} size={:?}",
                phase, id, node.size_behavior, node.layout_direction, node.position, node.size
            );
        }
        Ok(())
    }
}

impl Default for BoxLayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutEngine for BoxLayoutEngine {
    fn compute_layout(&mut self, tree: &mut LayoutTree, root: NodeId) -> Result<LayoutStats> {
        let node_count = tree.descendants(root)?.len();
        let pass = tree.record_layout_pass(root);
        if pass > 1 {
            warn!(
                "Node {} laid out {} times; sizes and positions accumulate across passes",
                root, pass
            );
        }

        trace!("Fit sizes for {} nodes under {}", node_count, root);
        compute_fit_sizes(tree, root)?;
        self.trace_phase(tree, root, "FIT")?;

        trace!("Distribute grow space under {}", root);
        distribute_grow_space(tree, root)?;
        self.trace_phase(tree, root, "GROW")?;

        trace!("Assign positions under {}", root);
        assign_positions(tree, root)?;
        self.trace_phase(tree, root, "POSITION")?;

        debug!("Layout pass {} completed for {} nodes", pass, node_count);
        Ok(LayoutStats { node_count, pass })
    }
}

/// Run a full layout pass on `root` with the default engine.
pub fn layout(tree: &mut LayoutTree, root: NodeId) -> Result<()> {
    BoxLayoutEngine::new().compute_layout(tree, root)?;
    Ok(())
}
