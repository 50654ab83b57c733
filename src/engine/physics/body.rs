use super::Rect;
use glam::Vec2;
use rapier2d::prelude::RigidBodyHandle;

/// A sprite's view of its rigid body.
///
/// `position` is the sprite's center; the collision box of `size` is centered
/// on it. Screen coordinates: +x right, +y down. Game code writes the velocity
/// here; once the body is added to a [`PhysicsWorld`](super::PhysicsWorld)
/// the world pushes it to the rigid body on every step and copies the solved
/// position and velocity back.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    position: Vec2,
    velocity: Vec2,
    size: Vec2,
    collide_world_bounds: bool,

    /// Set when the body is added to a world
    handle: Option<RigidBodyHandle>,
}

impl Body {
    /// Create a body whose collision box matches the sprite frame
    pub fn new(position: Vec2, frame_size: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            size: frame_size,
            collide_world_bounds: false,
            handle: None,
        }
    }

    /// Resize the collision box, keeping it centered on the sprite
    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.size = Vec2::new(width.max(0.0), height.max(0.0));
        self
    }

    /// Keep the body inside the world rectangle
    pub fn with_world_bounds(mut self) -> Self {
        self.collide_world_bounds = true;
        self
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    pub fn set_velocity_x(&mut self, x: f32) {
        self.velocity.x = x;
    }

    pub fn set_velocity_y(&mut self, y: f32) {
        self.velocity.y = y;
    }

    /// Size of the collision box
    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn collides_with_world_bounds(&self) -> bool {
        self.collide_world_bounds
    }

    /// World-space collision box
    pub fn bounds(&self) -> Rect {
        Rect::from_center_size(self.position, self.size)
    }

    /// Rigid body backing this sprite, if it has been added to a world
    pub fn handle(&self) -> Option<RigidBodyHandle> {
        self.handle
    }

    pub(super) fn attach(&mut self, handle: RigidBodyHandle) {
        self.handle = Some(handle);
    }

    /// Copy the solved state back from the rigid body
    pub(super) fn sync(&mut self, position: Vec2, velocity: Vec2) {
        self.position = position;
        self.velocity = velocity;
    }
}
