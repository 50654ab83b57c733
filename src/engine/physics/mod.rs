// Top-down physics backed by rapier2d: sprite bodies and the walled world

pub mod body;
mod world;

pub use body::Body;
pub use world::PhysicsWorld;

use glam::Vec2;

/// Axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Rectangle with its top-left corner at the origin
    pub fn from_size(width: f32, height: f32) -> Self {
        Self::new(Vec2::ZERO, Vec2::new(width, height))
    }

    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self::new(center - half, center + half)
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_from_center_size() {
        let rect = Rect::from_center_size(Vec2::new(10.0, 10.0), Vec2::new(4.0, 2.0));
        assert_eq!(rect.min, Vec2::new(8.0, 9.0));
        assert_eq!(rect.max, Vec2::new(12.0, 11.0));
        assert_eq!(rect.size(), Vec2::new(4.0, 2.0));
        assert_eq!(rect.center(), Vec2::new(10.0, 10.0));
    }

    #[test]
    fn test_rect_from_size() {
        let rect = Rect::from_size(100.0, 50.0);
        assert_eq!(rect.min, Vec2::ZERO);
        assert_eq!(rect.center(), Vec2::new(50.0, 25.0));
    }
}
