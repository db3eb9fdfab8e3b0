// crates/boxtree-core/src/geometry.rs
use glam::Vec2;
use serde::Serialize;

/// One of the two layout axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    pub fn cross(self) -> Self {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }

    /// Component of `v` along this axis.
    pub fn get(self, v: Vec2) -> f32 {
        match self {
            Axis::X => v.x,
            Axis::Y => v.y,
        }
    }

    pub fn get_mut(self, v: &mut Vec2) -> &mut f32 {
        match self {
            Axis::X => &mut v.x,
            Axis::Y => &mut v.y,
        }
    }

    /// Vector with `value` on this axis and zero on the cross axis.
    pub fn vec(self, value: f32) -> Vec2 {
        match self {
            Axis::X => Vec2::new(value, 0.0),
            Axis::Y => Vec2::new(0.0, value),
        }
    }
}

/// Final box of a node, as read by renderers after layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub position: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self { position, size }
    }

    pub fn right(&self) -> f32 {
        self.position.x + self.size.x
    }

    pub fn bottom(&self) -> f32 {
        self.position.y + self.size.y
    }

    /// Half-open containment: the left and top edges are inside, the right and bottom are not.
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.position.x
            && point.x < self.right()
            && point.y >= self.position.y
            && point.y < self.bottom()
    }
}
