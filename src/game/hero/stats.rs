// Hero stats - tuning values shared by every hero state

use crate::error::ConfigError;
use std::time::Duration;

/// Fixed tuning values for the hero
#[derive(Debug, Clone, PartialEq)]
pub struct HeroStats {
    // Movement
    /// Walking speed (pixels/second)
    pub base_speed: f32,
    /// Dash speed as a multiple of `base_speed`
    pub dash_multiplier: f32,
    /// Knockback speed as a multiple of `base_speed`
    pub knockback_multiplier: f32,

    // Timing
    /// How long a dash lasts before the hero is back to idle
    pub dash_cooldown: Duration,
    /// How long the hero stays hurt
    pub hurt_recovery: Duration,

    // Dimensions
    /// Sprite frame width in pixels
    pub frame_width: f32,
    /// Sprite frame height in pixels
    pub frame_height: f32,
}

pub const BASE_STATS: HeroStats = HeroStats {
    base_speed: 100.0,
    dash_multiplier: 3.0,
    knockback_multiplier: 2.0,

    dash_cooldown: Duration::from_millis(300),
    hurt_recovery: Duration::from_millis(250),

    frame_width: 32.0,
    frame_height: 32.0,
};

impl Default for HeroStats {
    fn default() -> Self {
        BASE_STATS
    }
}

impl HeroStats {
    pub fn dash_speed(&self) -> f32 {
        self.base_speed * self.dash_multiplier
    }

    pub fn knockback_speed(&self) -> f32 {
        self.base_speed * self.knockback_multiplier
    }

    /// Reject stats the states cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let speeds = [
            ("base_speed", self.base_speed),
            ("dash_multiplier", self.dash_multiplier),
            ("knockback_multiplier", self.knockback_multiplier),
            ("frame_width", self.frame_width),
            ("frame_height", self.frame_height),
        ];
        for (stat, value) in speeds {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidStat {
                    stat,
                    reason: format!("must be a positive number, got {}", value),
                });
            }
        }

        let timers = [
            ("dash_cooldown", self.dash_cooldown),
            ("hurt_recovery", self.hurt_recovery),
        ];
        for (stat, value) in timers {
            if value.is_zero() {
                return Err(ConfigError::InvalidStat {
                    stat,
                    reason: "must be longer than zero".to_string(),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_stats() {
        let stats = HeroStats::default();
        assert_eq!(stats.base_speed, 100.0);
        assert_eq!(stats.dash_cooldown, Duration::from_millis(300));
        assert_eq!(stats.hurt_recovery, Duration::from_millis(250));
        assert!(stats.validate().is_ok());
    }

    #[test]
    fn test_derived_speeds() {
        let stats = HeroStats::default();
        assert_eq!(stats.dash_speed(), 300.0);
        assert_eq!(stats.knockback_speed(), 200.0);
    }

    #[test]
    fn test_validate_rejects_non_positive_speed() {
        let stats = HeroStats {
            base_speed: 0.0,
            ..BASE_STATS
        };
        assert!(matches!(
            stats.validate(),
            Err(ConfigError::InvalidStat {
                stat: "base_speed",
                ..
            })
        ));
    }

    #[test]
    fn test_validate_rejects_zero_timer() {
        let stats = HeroStats {
            hurt_recovery: Duration::ZERO,
            ..BASE_STATS
        };
        assert!(matches!(
            stats.validate(),
            Err(ConfigError::InvalidStat {
                stat: "hurt_recovery",
                ..
            })
        ));
    }
}
