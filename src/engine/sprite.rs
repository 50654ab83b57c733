// Animated sprite with a physics body and a color tint

use super::animation::AnimationPlayer;
use super::physics::Body;
use glam::Vec2;

/// RGB color multiplied over a sprite, as `0xRRGGBB`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tint(pub u32);

/// A game object the player sees: body, animation and tint
#[derive(Debug)]
pub struct Sprite {
    pub body: Body,
    pub anims: AnimationPlayer,
    tint: Option<Tint>,
}

impl Sprite {
    pub fn new(body: Body, anims: AnimationPlayer) -> Self {
        Self {
            body,
            anims,
            tint: None,
        }
    }

    pub fn velocity(&self) -> Vec2 {
        self.body.velocity()
    }

    pub fn set_velocity(&mut self, velocity: Vec2) {
        self.body.set_velocity(velocity);
    }

    pub fn set_velocity_x(&mut self, x: f32) {
        self.body.set_velocity_x(x);
    }

    pub fn set_velocity_y(&mut self, y: f32) {
        self.body.set_velocity_y(y);
    }

    /// Stop all movement
    pub fn halt(&mut self) {
        self.body.set_velocity(Vec2::ZERO);
    }

    pub fn tint(&self) -> Option<Tint> {
        self.tint
    }

    pub fn set_tint(&mut self, tint: Tint) {
        self.tint = Some(tint);
    }

    pub fn clear_tint(&mut self) {
        self.tint = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sprite() -> Sprite {
        Sprite::new(
            Body::new(Vec2::ZERO, Vec2::new(32.0, 32.0)),
            AnimationPlayer::new(),
        )
    }

    #[test]
    fn test_tint() {
        let mut sprite = sprite();
        assert_eq!(sprite.tint(), None);

        sprite.set_tint(Tint(0x00AA00));
        assert_eq!(sprite.tint(), Some(Tint(0x00AA00)));

        sprite.clear_tint();
        assert_eq!(sprite.tint(), None);
    }

    #[test]
    fn test_halt() {
        let mut sprite = sprite();
        sprite.set_velocity(Vec2::new(10.0, -3.0));
        sprite.halt();
        assert_eq!(sprite.velocity(), Vec2::ZERO);
    }
}
