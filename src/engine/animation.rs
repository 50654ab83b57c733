// Sprite animation playback

use crate::error::ConfigError;
use std::collections::HashMap;

/// A single animation clip over sprite-sheet frames
#[derive(Debug, Clone)]
pub struct AnimationClip {
    /// Key the clip is played by (e.g., "walk-down", "circular-attack")
    pub key: String,
    /// Sprite-sheet frame indices, in playback order
    pub frames: Vec<u32>,
    /// Duration of each frame in seconds
    pub frame_duration: f32,
    /// Whether the animation loops
    pub looping: bool,
}

impl AnimationClip {
    /// Create a new animation clip
    pub fn new(key: &str, frames: Vec<u32>, fps: f32, looping: bool) -> Self {
        Self {
            key: key.to_string(),
            frames,
            frame_duration: 1.0 / fps,
            looping,
        }
    }

    /// Create a looping animation
    pub fn looping(key: &str, frames: Vec<u32>, fps: f32) -> Self {
        Self::new(key, frames, fps, true)
    }

    /// Create a one-shot animation (plays once)
    pub fn one_shot(key: &str, frames: Vec<u32>, fps: f32) -> Self {
        Self::new(key, frames, fps, false)
    }

    /// Consecutive sprite-sheet frames `start..=end`
    pub fn frame_range(start: u32, end: u32) -> Vec<u32> {
        (start..=end).collect()
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Reject clips the player could not step through
    fn validate(&self) -> Result<(), ConfigError> {
        let reason = if self.frames.is_empty() {
            "no frames"
        } else if !(self.frame_duration.is_finite() && self.frame_duration > 0.0) {
            "frame rate must be positive"
        } else {
            return Ok(());
        };

        Err(ConfigError::InvalidAnimation {
            key: self.key.clone(),
            reason: reason.to_string(),
        })
    }
}

/// Plays one clip at a time out of a set of registered clips.
///
/// When a one-shot clip reaches its end the player records a completion that
/// can be consumed once with [`take_completed`](Self::take_completed).
#[derive(Debug, Default)]
pub struct AnimationPlayer {
    /// All available animations
    clips: HashMap<String, AnimationClip>,
    /// Currently playing animation key
    current_animation: String,
    /// Index into the current clip's frame list
    frame_index: usize,
    /// Time elapsed in current frame
    frame_timer: f32,
    /// Whether the animation is playing
    playing: bool,
    /// One-shot clip that finished and has not been taken yet
    completed: Option<String>,
}

impl AnimationPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a player with the given clips registered
    pub fn with_clips(
        clips: impl IntoIterator<Item = AnimationClip>,
    ) -> Result<Self, ConfigError> {
        let mut player = Self::new();
        for clip in clips {
            player.add_clip(clip)?;
        }
        Ok(player)
    }

    /// Register an animation clip. Clips without frames or with a
    /// non-positive frame rate are rejected.
    pub fn add_clip(&mut self, clip: AnimationClip) -> Result<(), ConfigError> {
        clip.validate()?;
        self.clips.insert(clip.key.clone(), clip);
        Ok(())
    }

    /// Play an animation, unless it is already playing
    pub fn play(&mut self, key: &str) -> Result<(), ConfigError> {
        if self.playing && self.current_animation == key {
            return Ok(());
        }
        self.play_from_start(key)
    }

    /// Play an animation from the beginning, even if it's the same
    pub fn play_from_start(&mut self, key: &str) -> Result<(), ConfigError> {
        if !self.clips.contains_key(key) {
            return Err(ConfigError::MissingAnimation(key.to_string()));
        }

        self.current_animation = key.to_string();
        self.frame_index = 0;
        self.frame_timer = 0.0;
        self.playing = true;
        self.completed = None;
        Ok(())
    }

    /// Stop and reset the current animation to its first frame
    pub fn stop(&mut self) {
        self.playing = false;
        self.frame_index = 0;
        self.frame_timer = 0.0;
    }

    /// Update the animation (called every tick)
    pub fn update(&mut self, dt: f32) {
        if !self.playing {
            return;
        }

        let Some(clip) = self.clips.get(&self.current_animation) else {
            return;
        };

        self.frame_timer += dt;

        while self.frame_timer >= clip.frame_duration {
            self.frame_timer -= clip.frame_duration;
            self.frame_index += 1;

            if self.frame_index >= clip.frame_count() {
                if clip.looping {
                    self.frame_index = 0;
                } else {
                    // Stay on last frame
                    self.frame_index = clip.frame_count().saturating_sub(1);
                    self.playing = false;
                    self.completed = Some(clip.key.clone());
                    break;
                }
            }
        }
    }

    /// Consume the completion of `key`. Returns true once per completed play.
    pub fn take_completed(&mut self, key: &str) -> bool {
        if self.completed.as_deref() == Some(key) {
            self.completed = None;
            true
        } else {
            false
        }
    }

    /// Get the current animation key
    pub fn current_animation(&self) -> &str {
        &self.current_animation
    }

    /// Sprite-sheet frame currently shown
    pub fn current_frame(&self) -> Option<u32> {
        self.clips
            .get(&self.current_animation)
            .and_then(|clip| clip.frames.get(self.frame_index))
            .copied()
    }

    /// Check if the animation is playing
    pub fn is_playing(&self) -> bool {
        self.playing
    }
}
