// Hero states
//
// Transition graph (initial state: idle):
//
//   idle  -> swing | dash | hurt | move | circular   (input)
//   move  -> swing | dash | hurt | idle | circular   (input)
//   swing -> idle                                     (swing animation done)
//   dash  -> idle                                     (dash cooldown elapsed)
//   hurt  -> idle                                     (hurt recovery elapsed)
//   circular -> idle                                  (spin animation done)

use super::animations::{swing_key, walk_key, CIRCULAR_ATTACK};
use super::direction::Direction;
use super::HeroContext;
use crate::engine::fsm::{State, StateMap, Transitions};
use crate::engine::input::{Action, InputState};
use crate::engine::sprite::Tint;
use crate::engine::timer::TimerId;
use crate::error::Result;
use glam::Vec2;
use log::debug;

pub const IDLE: &str = "idle";
pub const MOVE: &str = "move";
pub const SWING: &str = "swing";
pub const DASH: &str = "dash";
pub const HURT: &str = "hurt";
pub const CIRCULAR: &str = "circular";

/// Green while dashing
pub const DASH_TINT: Tint = Tint(0x00AA00);
/// Red while hurt
pub const HURT_TINT: Tint = Tint(0xFF0000);

/// The full hero state set
pub fn hero_states() -> StateMap<HeroContext> {
    StateMap::new()
        .with(IDLE, IdleState)
        .with(MOVE, MoveState)
        .with(SWING, SwingState::default())
        .with(DASH, DashState::default())
        .with(HURT, HurtState::default())
        .with(CIRCULAR, CircularState::default())
}

/// Attack, dash and hurt presses, checked in that order
fn action_target(input: &InputState) -> Option<&'static str> {
    if input.just_down(Action::Attack) {
        Some(SWING)
    } else if input.just_down(Action::Dash) {
        Some(DASH)
    } else if input.just_down(Action::Hurt) {
        Some(HURT)
    } else {
        None
    }
}

/// Standing still, showing the first walk frame for the facing direction
pub struct IdleState;

impl State<HeroContext> for IdleState {
    fn enter(&mut self, ctx: &mut HeroContext) -> Result<()> {
        ctx.sprite.halt();
        ctx.sprite.anims.play_from_start(&walk_key(ctx.direction))?;
        ctx.sprite.anims.stop();
        Ok(())
    }

    fn execute(&mut self, ctx: &mut HeroContext, fsm: &mut Transitions<'_>) -> Result<()> {
        let input = &ctx.input;

        if let Some(target) = action_target(input) {
            return Ok(fsm.transition(target)?);
        }

        if input.any_movement_down() {
            return Ok(fsm.transition(MOVE)?);
        }

        if input.just_down(Action::Spin) {
            return Ok(fsm.transition(CIRCULAR)?);
        }

        Ok(())
    }
}

/// Walking while any directional key is held
pub struct MoveState;

impl State<HeroContext> for MoveState {
    fn execute(&mut self, ctx: &mut HeroContext, fsm: &mut Transitions<'_>) -> Result<()> {
        let input = &ctx.input;

        if let Some(target) = action_target(input) {
            return Ok(fsm.transition(target)?);
        }

        if !input.any_movement_down() {
            return Ok(fsm.transition(IDLE)?);
        }

        if input.just_down(Action::Spin) {
            return Ok(fsm.transition(CIRCULAR)?);
        }

        // Opposite keys are not cancelled: up beats down, left beats right.
        // The horizontal axis is resolved last, so it decides the facing.
        let mut heading = Vec2::ZERO;
        if input.is_down(Action::MoveUp) {
            heading.y = -1.0;
            ctx.direction = Direction::Up;
        } else if input.is_down(Action::MoveDown) {
            heading.y = 1.0;
            ctx.direction = Direction::Down;
        }
        if input.is_down(Action::MoveLeft) {
            heading.x = -1.0;
            ctx.direction = Direction::Left;
        } else if input.is_down(Action::MoveRight) {
            heading.x = 1.0;
            ctx.direction = Direction::Right;
        }

        ctx.sprite
            .set_velocity(heading.normalize_or_zero() * ctx.stats.base_speed);
        ctx.sprite.anims.play(&walk_key(ctx.direction))?;
        Ok(())
    }
}

/// Sword swing toward the facing direction
#[derive(Debug, Default)]
pub struct SwingState {
    /// Clip whose completion ends the swing
    clip: Option<String>,
}

impl State<HeroContext> for SwingState {
    fn enter(&mut self, ctx: &mut HeroContext) -> Result<()> {
        ctx.sprite.halt();
        let clip = swing_key(ctx.direction);
        ctx.sprite.anims.play_from_start(&clip)?;
        self.clip = Some(clip);
        Ok(())
    }

    fn execute(&mut self, ctx: &mut HeroContext, fsm: &mut Transitions<'_>) -> Result<()> {
        if let Some(clip) = &self.clip {
            if ctx.sprite.anims.take_completed(clip) {
                return Ok(fsm.transition(IDLE)?);
            }
        }
        Ok(())
    }

    fn exit(&mut self, _ctx: &mut HeroContext) -> Result<()> {
        self.clip = None;
        Ok(())
    }
}

/// Swing while lunging forward at dash speed
#[derive(Debug, Default)]
pub struct DashState {
    cooldown: Option<TimerId>,
}

impl State<HeroContext> for DashState {
    fn enter(&mut self, ctx: &mut HeroContext) -> Result<()> {
        ctx.sprite.halt();
        ctx.sprite.anims.play_from_start(&swing_key(ctx.direction))?;
        ctx.sprite.set_tint(DASH_TINT);
        ctx.sprite
            .set_velocity(ctx.direction.unit() * ctx.stats.dash_speed());

        self.cooldown = Some(ctx.timers.schedule_after(ctx.stats.dash_cooldown));
        Ok(())
    }

    fn execute(&mut self, ctx: &mut HeroContext, fsm: &mut Transitions<'_>) -> Result<()> {
        if self.cooldown.is_some_and(|id| ctx.timers.take_fired(id)) {
            self.cooldown = None;
            ctx.sprite.clear_tint();
            return Ok(fsm.transition(IDLE)?);
        }
        Ok(())
    }

    fn exit(&mut self, ctx: &mut HeroContext) -> Result<()> {
        // Only set when something forced the hero out before the cooldown
        if let Some(id) = self.cooldown.take() {
            ctx.timers.cancel(id);
            ctx.sprite.clear_tint();
        }
        Ok(())
    }
}

/// Knocked back away from the facing direction
#[derive(Debug, Default)]
pub struct HurtState {
    recovery: Option<TimerId>,
}

impl State<HeroContext> for HurtState {
    fn enter(&mut self, ctx: &mut HeroContext) -> Result<()> {
        ctx.sprite.halt();
        ctx.sprite.anims.play_from_start(&walk_key(ctx.direction))?;
        ctx.sprite.anims.stop();
        ctx.sprite.set_tint(HURT_TINT);

        let knockback = ctx.direction.opposite().unit() * ctx.stats.knockback_speed();
        debug!("Hero hurt, knocked back {:?}", knockback);
        ctx.sprite.set_velocity(knockback);

        self.recovery = Some(ctx.timers.schedule_after(ctx.stats.hurt_recovery));
        Ok(())
    }

    fn execute(&mut self, ctx: &mut HeroContext, fsm: &mut Transitions<'_>) -> Result<()> {
        if self.recovery.is_some_and(|id| ctx.timers.take_fired(id)) {
            self.recovery = None;
            ctx.sprite.clear_tint();
            return Ok(fsm.transition(IDLE)?);
        }
        Ok(())
    }

    fn exit(&mut self, ctx: &mut HeroContext) -> Result<()> {
        if let Some(id) = self.recovery.take() {
            ctx.timers.cancel(id);
            ctx.sprite.clear_tint();
        }
        Ok(())
    }
}

/// Spin attack, played in place
#[derive(Debug, Default)]
pub struct CircularState {
    spinning: bool,
}

impl State<HeroContext> for CircularState {
    fn enter(&mut self, ctx: &mut HeroContext) -> Result<()> {
        ctx.sprite.halt();
        ctx.sprite.anims.play_from_start(CIRCULAR_ATTACK)?;
        self.spinning = true;
        Ok(())
    }

    fn execute(&mut self, ctx: &mut HeroContext, fsm: &mut Transitions<'_>) -> Result<()> {
        if self.spinning && ctx.sprite.anims.take_completed(CIRCULAR_ATTACK) {
            return Ok(fsm.transition(IDLE)?);
        }
        Ok(())
    }

    fn exit(&mut self, _ctx: &mut HeroContext) -> Result<()> {
        self.spinning = false;
        Ok(())
    }
}
