// Hero entity
//
// The hero owns its state machine together with everything the states act on:
// - `direction`: facing direction and its unit vectors
// - `stats`: speed and timing values
// - `animations`: sprite-sheet clips played by the states
// - `states`: the six hero states and their transition rules

pub mod animations;
pub mod direction;
pub mod states;
pub mod stats;

pub use direction::Direction;
pub use stats::{HeroStats, BASE_STATS};

use crate::engine::animation::{AnimationClip, AnimationPlayer};
use crate::engine::fsm::StateMachine;
use crate::engine::input::InputState;
use crate::engine::physics::Body;
use crate::engine::sprite::{Sprite, Tint};
use crate::engine::timer::Timers;
use crate::error::Result;
use glam::Vec2;
use log::info;
use std::time::Duration;

/// Everything a hero state can read or change
#[derive(Debug)]
pub struct HeroContext {
    pub sprite: Sprite,
    pub direction: Direction,
    pub stats: HeroStats,
    /// Keyboard state for the current tick
    pub input: InputState,
    /// The hero's own delayed continuations
    pub timers: Timers,
}

/// Player-controlled hero driven by a state machine
#[derive(Debug)]
pub struct Hero {
    ctx: HeroContext,
    fsm: StateMachine<HeroContext>,
}

impl Hero {
    /// Spawn a hero with the standard clips, entering the idle state
    pub fn new(position: Vec2, direction: Direction, stats: HeroStats) -> Result<Self> {
        Self::with_clips(position, direction, stats, animations::hero_clips())
    }

    /// Spawn a hero with a custom set of animation clips
    pub fn with_clips(
        position: Vec2,
        direction: Direction,
        stats: HeroStats,
        clips: Vec<AnimationClip>,
    ) -> Result<Self> {
        stats.validate()?;

        // Collision box is half the sprite frame, centered
        let frame = Vec2::new(stats.frame_width, stats.frame_height);
        let body = Body::new(position, frame)
            .with_size(frame.x / 2.0, frame.y / 2.0)
            .with_world_bounds();

        let mut ctx = HeroContext {
            sprite: Sprite::new(body, AnimationPlayer::with_clips(clips)?),
            direction,
            stats,
            input: InputState::new(),
            timers: Timers::new(),
        };
        let fsm = StateMachine::new(states::IDLE, states::hero_states(), &mut ctx)?;

        info!(
            "Hero spawned at ({}, {}) facing {}",
            position.x, position.y, direction
        );

        Ok(Self { ctx, fsm })
    }

    /// Advance one tick: timers, animation, then the active state
    pub fn update(&mut self, input: &InputState, dt: Duration) -> Result<()> {
        self.ctx.timers.advance(dt);
        self.ctx.sprite.anims.update(dt.as_secs_f32());
        self.ctx.input.clone_from(input);
        self.fsm.step(&mut self.ctx)
    }

    /// Force a transition from outside the states (e.g. when hit by an enemy)
    pub fn transition(&mut self, name: &str) -> Result<()> {
        self.fsm.transition(name, &mut self.ctx)
    }

    /// Name of the active state
    pub fn state(&self) -> &str {
        self.fsm.current_state()
    }

    pub fn state_names(&self) -> impl Iterator<Item = &str> {
        self.fsm.state_names()
    }

    pub fn direction(&self) -> Direction {
        self.ctx.direction
    }

    pub fn velocity(&self) -> Vec2 {
        self.ctx.sprite.velocity()
    }

    pub fn position(&self) -> Vec2 {
        self.ctx.sprite.body.position()
    }

    pub fn tint(&self) -> Option<Tint> {
        self.ctx.sprite.tint()
    }

    pub fn sprite(&self) -> &Sprite {
        &self.ctx.sprite
    }

    pub fn body(&self) -> &Body {
        &self.ctx.sprite.body
    }

    /// Mutable body access for the physics world
    pub fn body_mut(&mut self) -> &mut Body {
        &mut self.ctx.sprite.body
    }

    pub fn timers(&self) -> &Timers {
        &self.ctx.timers
    }
}
