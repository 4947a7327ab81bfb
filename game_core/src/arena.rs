use glam::Vec2;

use crate::config::Config;

/// Axis-aligned bounding box in canvas coordinates (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Box from a top-left corner and a size
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Strict overlap: boxes that only share an edge do not overlap
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }

    /// Penetration depth on each axis, if the boxes overlap
    pub fn overlap_depth(&self, other: &Aabb) -> Option<Vec2> {
        if !self.overlaps(other) {
            return None;
        }
        let depth = self.max.min(other.max) - self.min.max(other.min);
        Some(depth)
    }
}

/// Static strip along the bottom of the canvas
#[derive(Debug, Clone, Copy)]
pub struct Floor {
    pub bounds: Aabb,
}

impl Floor {
    pub fn new(canvas_width: f32, canvas_height: f32, height: f32) -> Self {
        Self {
            bounds: Aabb::from_pos_size(
                Vec2::new(0.0, canvas_height - height),
                Vec2::new(canvas_width, height),
            ),
        }
    }

    pub fn top(&self) -> f32 {
        self.bounds.min.y
    }
}

/// Play field: canvas extent plus the floor
#[derive(Debug, Clone, Copy)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
    pub floor: Floor,
}

impl Arena {
    pub fn new(config: &Config) -> Self {
        Self {
            width: config.canvas_width,
            height: config.canvas_height,
            floor: Floor::new(config.canvas_width, config.canvas_height, config.floor_height),
        }
    }

    /// Wrap an x coordinate once a box of `width` leaves either side
    pub fn wrap_x(&self, x: f32, width: f32) -> f32 {
        if x + width < 0.0 {
            self.width
        } else if x > self.width {
            -width
        } else {
            x
        }
    }

    /// True once a box has fully left the canvas horizontally
    pub fn is_outside_x(&self, bounds: &Aabb) -> bool {
        bounds.max.x < 0.0 || bounds.min.x > self.width
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}
