// src/demo.rs
use std::collections::HashMap;

use boxtree_core::{LayoutDirection, LayoutTree, NodeId, NodeOverrides, Result, SizeBehavior};
use glam::Vec2;

pub const DEFAULT_CANVAS: Vec2 = Vec2::new(720.0, 480.0);
pub const DEFAULT_FONT_SIZE: f32 = 16.0;

const APP_PADDING: f32 = 20.0;
const APP_CHILDREN_GAP: f32 = 20.0;
const MENU_ITEM_COUNT: u32 = 5;

/// A built tree plus a display label for each node.
#[derive(Debug, Clone)]
pub struct DemoScene {
    pub tree: LayoutTree,
    pub root: NodeId,
    pub labels: HashMap<NodeId, String>,
}

impl DemoScene {
    pub fn label(&self, id: NodeId) -> Option<&str> {
        self.labels.get(&id).map(String::as_str)
    }

    fn add(
        &mut self,
        label: impl Into<String>,
        overrides: NodeOverrides,
        parent: Option<NodeId>,
    ) -> Result<NodeId> {
        let id = self.tree.create_node(overrides, parent)?;
        self.labels.insert(id, label.into());
        Ok(id)
    }

    /// Text leaf whose size is seeded from a monospace estimate, standing in
    /// for real font measurement.
    fn add_text(&mut self, text: &str, font_size: f32, parent: NodeId) -> Result<NodeId> {
        let id = self.add(format!("Text \"{}\"", text), NodeOverrides::new(), Some(parent))?;
        self.tree.node_mut(id)?.size = estimate_text_size(text, font_size);
        Ok(id)
    }
}

/// Half an em per character, one em tall.
pub fn estimate_text_size(text: &str, font_size: f32) -> Vec2 {
    Vec2::new(text.chars().count() as f32 * font_size * 0.5, font_size)
}

/// A fixed app panel holding a title and a growing context-menu section with
/// five menu items.
pub fn build_context_menu_scene(canvas: Vec2) -> Result<DemoScene> {
    let mut scene = DemoScene {
        tree: LayoutTree::with_capacity(16),
        root: 0,
        labels: HashMap::new(),
    };

    let app = scene.add(
        "App",
        NodeOverrides::new()
            .size(Vec2::new(
                canvas.x - APP_PADDING * 2.0 - APP_CHILDREN_GAP,
                canvas.y - APP_PADDING * 2.0,
            ))
            .size_behavior(SizeBehavior::Fixed)
            .padding(Vec2::splat(APP_PADDING))
            .children_gap(APP_CHILDREN_GAP)
            .layout_direction(LayoutDirection::LeftToRight),
        None,
    )?;
    scene.root = app;

    scene.add_text("TS LAYOUT", 32.0, app)?;

    let section = scene.add(
        "ContextMenuSection",
        NodeOverrides::new()
            .size_behavior(SizeBehavior::Grow)
            .layout_direction(LayoutDirection::TopToBottom)
            .children_gap(10.0),
        Some(app),
    )?;
    scene.add_text("Context Menu", DEFAULT_FONT_SIZE, section)?;

    let menu = scene.add(
        "ContextMenu",
        NodeOverrides::new()
            .layout_direction(LayoutDirection::TopToBottom)
            .padding(Vec2::splat(10.0))
            .children_gap(10.0),
        Some(section),
    )?;

    for i in 1..=MENU_ITEM_COUNT {
        let item = scene.add(
            format!("MenuItem {}", i),
            NodeOverrides::new()
                .padding(Vec2::splat(10.0))
                .children_gap(10.0)
                .size_behavior(SizeBehavior::Grow),
            Some(menu),
        )?;
        scene.add_text(&format!("Action - {}", i.pow(i)), DEFAULT_FONT_SIZE, item)?;
    }

    Ok(scene)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimate_text_size() {
        assert_eq!(estimate_text_size("Context Menu", 16.0), Vec2::new(96.0, 16.0));
        assert_eq!(estimate_text_size("", 16.0), Vec2::new(0.0, 16.0));
        assert_eq!(estimate_text_size("TS LAYOUT", 32.0), Vec2::new(144.0, 32.0));
    }

    #[test]
    fn test_scene_shape() {
        let scene = build_context_menu_scene(DEFAULT_CANVAS).unwrap();

        // app, title, section, section title, menu, 5 items with a text each
        assert_eq!(scene.tree.len(), 15);
        assert_eq!(scene.label(scene.root), Some("App"));
        assert_eq!(scene.tree.children(scene.root).unwrap().len(), 2);
        assert_eq!(
            scene.tree.node(scene.root).unwrap().size,
            Vec2::new(660.0, 440.0)
        );

        let labels: Vec<_> = scene.labels.values().collect();
        assert!(labels.iter().any(|l| l.as_str() == "Text \"Action - 3125\""));
    }
}
