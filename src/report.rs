// src/report.rs
//! Human and machine readable dumps of a laid-out tree.

use std::collections::HashMap;
use std::fmt::Write;

use boxtree_core::{LayoutError, LayoutTree, Node, NodeId, Rect};
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ReportError>;

/// Box-drawing outline of the subtree under `root`.
pub fn render_tree(
    tree: &LayoutTree,
    root: NodeId,
    labels: &HashMap<NodeId, String>,
    show_layout: bool,
) -> Result<String> {
    let mut output = String::new();
    render_tree_node(&mut output, tree, root, labels, show_layout, 0, true)?;
    Ok(output)
}

fn render_tree_node(
    output: &mut String,
    tree: &LayoutTree,
    id: NodeId,
    labels: &HashMap<NodeId, String>,
    show_layout: bool,
    depth: usize,
    is_last: bool,
) -> Result<()> {
    let node = tree.node(id)?;

    let tree_char = if depth == 0 {
        ""
    } else if is_last {
        "└── "
    } else {
        "├── "
    };
    let indent = if depth == 0 {
        String::new()
    } else {
        "│   ".repeat(depth - 1) + tree_char
    };

    let _ = write!(output, "{}{}", indent, label_for(labels, id));
    let _ = write!(
        output,
        " [{:?} {:?}]",
        node.size_behavior, node.layout_direction
    );
    if show_layout {
        let _ = write!(
            output,
            " pos:({:.0},{:.0}) size:({:.0},{:.0})",
            node.position.x, node.position.y, node.size.x, node.size.y
        );
    }
    output.push('\n');

    let child_count = node.children().len();
    for (i, &child_id) in node.children().iter().enumerate() {
        render_tree_node(
            output,
            tree,
            child_id,
            labels,
            show_layout,
            depth + 1,
            i == child_count - 1,
        )?;
    }

    Ok(())
}

/// One block per node in pre-order with every layout field spelled out.
pub fn render_detailed(
    tree: &LayoutTree,
    root: NodeId,
    labels: &HashMap<NodeId, String>,
) -> Result<String> {
    let mut output = String::new();
    let _ = writeln!(output, "Layout passes: {}", tree.layout_passes(root));

    for id in tree.descendants(root)? {
        let node = tree.node(id)?;
        let depth = tree.depth(id)?;
        let pad = "  ".repeat(depth);

        let _ = writeln!(output, "{}{} (#{})", pad, label_for(labels, id), id);
        let _ = writeln!(output, "{}  parent: {:?}", pad, node.parent());
        let _ = writeln!(output, "{}  size behavior: {:?}", pad, node.size_behavior);
        let _ = writeln!(output, "{}  direction: {:?}", pad, node.layout_direction);
        let _ = writeln!(
            output,
            "{}  padding: ({}, {}) gap: {}",
            pad, node.padding.x, node.padding.y, node.children_gap
        );
        let _ = writeln!(
            output,
            "{}  position: ({}, {})",
            pad, node.position.x, node.position.y
        );
        let _ = writeln!(output, "{}  size: ({}, {})", pad, node.size.x, node.size.y);
    }

    Ok(output)
}

#[derive(Serialize)]
struct TreeReport<'a> {
    root: NodeId,
    passes: u32,
    nodes: Vec<NodeEntry<'a>>,
}

#[derive(Serialize)]
struct NodeEntry<'a> {
    id: NodeId,
    label: Option<&'a str>,
    rect: Rect,
    #[serde(flatten)]
    node: &'a Node,
}

/// Pretty JSON listing of the subtree under `root` in pre-order.
pub fn render_json(
    tree: &LayoutTree,
    root: NodeId,
    labels: &HashMap<NodeId, String>,
) -> Result<String> {
    let nodes = tree
        .descendants(root)?
        .into_iter()
        .map(|id| -> Result<NodeEntry> {
            let node = tree.node(id)?;
            Ok(NodeEntry {
                id,
                label: labels.get(&id).map(String::as_str),
                rect: node.rect(),
                node,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let report = TreeReport {
        root,
        passes: tree.layout_passes(root),
        nodes,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

fn label_for(labels: &HashMap<NodeId, String>, id: NodeId) -> String {
    labels
        .get(&id)
        .cloned()
        .unwrap_or_else(|| format!("Node {}", id))
}
