/// Game loop timing
///
/// Implements a fixed timestep: each rendered frame reports how many fixed
/// updates are due, so game logic always advances in `FIXED_TIMESTEP` steps
/// regardless of the frame rate.
use std::time::{Duration, Instant};

/// Fixed update step (60 updates per second)
pub const FIXED_TIMESTEP: Duration = Duration::from_micros(16_667); // ~1/60 second

/// Maximum number of updates per frame to prevent spiral of death
const MAX_UPDATES_PER_FRAME: u32 = 5;

/// Game loop timing state
pub struct GameLoop {
    /// Accumulated time for fixed timestep updates
    accumulator: Duration,

    /// Time of last frame
    last_frame_time: Instant,
}

impl GameLoop {
    /// Create a new game loop
    pub fn new() -> Self {
        Self {
            accumulator: Duration::ZERO,
            last_frame_time: Instant::now(),
        }
    }

    /// Begin a new frame, returns the number of fixed updates to run
    pub fn begin_frame(&mut self) -> u32 {
        let now = Instant::now();
        let frame_time = now.duration_since(self.last_frame_time);
        self.last_frame_time = now;

        self.accumulator += frame_time;

        let mut updates = 0;
        while self.accumulator >= FIXED_TIMESTEP && updates < MAX_UPDATES_PER_FRAME {
            self.accumulator -= FIXED_TIMESTEP;
            updates += 1;
        }

        // Drop time we could not catch up on instead of carrying it forward
        if updates == MAX_UPDATES_PER_FRAME && self.accumulator >= FIXED_TIMESTEP {
            log::debug!(
                "Game loop fell behind, skipping {:?}",
                self.accumulator
            );
            self.accumulator = Duration::ZERO;
        }

        updates
    }

    /// Get the fixed timestep for updates
    pub fn fixed_timestep(&self) -> Duration {
        FIXED_TIMESTEP
    }
}

impl Default for GameLoop {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_fixed_timestep() {
        let game_loop = GameLoop::new();
        assert_eq!(game_loop.fixed_timestep(), FIXED_TIMESTEP);
        assert!((game_loop.fixed_timestep().as_secs_f32() - 1.0 / 60.0).abs() < 0.0001);
    }

    #[test]
    fn test_update_accumulation() {
        let mut game_loop = GameLoop::new();

        thread::sleep(FIXED_TIMESTEP * 2);

        let updates = game_loop.begin_frame();
        assert!(updates >= 1);
        assert!(updates <= MAX_UPDATES_PER_FRAME);
    }

    #[test]
    fn test_max_updates_limit() {
        let mut game_loop = GameLoop::new();

        // Simulate a very long frame (300ms)
        thread::sleep(Duration::from_millis(300));

        let updates = game_loop.begin_frame();
        // Capped even though 300ms would allow 18 updates
        assert_eq!(updates, MAX_UPDATES_PER_FRAME);

        // The backlog was dropped rather than replayed next frame
        let next = game_loop.begin_frame();
        assert!(next < MAX_UPDATES_PER_FRAME);
    }
}
