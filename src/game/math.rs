//! Vector helpers and axis-aligned bounding boxes
//!
//! Everything in the arena is an axis-aligned square centered on its
//! position, so a min/max box is all the collision code needs.

use macroquad::math::Vec2;

/// Unit vector in the direction of `v`.
///
/// Returns `None` for the zero vector or any non-finite input. Callers treat
/// that as an indeterminate direction and skip whatever depended on it.
pub fn normalize(v: Vec2) -> Option<Vec2> {
    v.try_normalize()
}

/// Axis-aligned bounding box in world coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Box of the given size with its center at `center`
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self::new(center - half, center + half)
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// True when the two boxes share a region of non-zero area.
    /// Boxes that only touch along an edge do not intersect.
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }
}
