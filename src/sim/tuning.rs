//! Data-driven game balance
//!
//! Every physics constant the simulation reads lives in [`Tuning`], so a host
//! can load overrides from settings without touching simulation code.

use serde::{Deserialize, Serialize};

use super::world::ConfigError;
use crate::consts::*;

/// How overlapping platform landings are resolved within a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LandingMode {
    /// Walk platforms in list order; each landing snaps y and later platforms
    /// are tested against the snapped position.
    #[default]
    FirstMatch,
    /// Test every platform against the same post-gravity position and land
    /// on the highest matching top. Independent of platform order.
    Highest,
}

/// Which way a newly fired bolt travels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BoltAim {
    /// Always to the right
    #[default]
    Rightward,
    /// In the direction the player last moved
    Facing,
}

/// Physics and projectile balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Downward acceleration (units/tick²)
    pub gravity: f32,
    /// Horizontal movement per tick while a direction is held
    pub player_speed: f32,
    /// Upward velocity applied on jump (units/tick)
    pub jump_strength: f32,
    pub player_width: f32,
    pub player_height: f32,
    /// Bolt travel per tick
    pub bolt_speed: f32,
    /// Bolt expires once it has traveled this far
    pub bolt_max_distance: f32,
    pub bolt_width: f32,
    pub bolt_height: f32,
    pub landing: LandingMode,
    pub bolt_aim: BoltAim,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            player_speed: PLAYER_SPEED,
            jump_strength: JUMP_STRENGTH,
            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            bolt_speed: BOLT_SPEED,
            bolt_max_distance: BOLT_MAX_DISTANCE,
            bolt_width: BOLT_WIDTH,
            bolt_height: BOLT_HEIGHT,
            landing: LandingMode::default(),
            bolt_aim: BoltAim::default(),
        }
    }
}

impl Tuning {
    /// Check every value is finite and in a usable range
    pub fn validate(&self) -> Result<(), ConfigError> {
        let checks: [(&'static str, f32, bool); 9] = [
            ("gravity", self.gravity, self.gravity >= 0.0),
            ("player_speed", self.player_speed, self.player_speed >= 0.0),
            ("jump_strength", self.jump_strength, self.jump_strength >= 0.0),
            ("player_width", self.player_width, self.player_width > 0.0),
            ("player_height", self.player_height, self.player_height > 0.0),
            ("bolt_speed", self.bolt_speed, self.bolt_speed > 0.0),
            ("bolt_max_distance", self.bolt_max_distance, self.bolt_max_distance > 0.0),
            ("bolt_width", self.bolt_width, self.bolt_width > 0.0),
            ("bolt_height", self.bolt_height, self.bolt_height > 0.0),
        ];
        match checks.iter().find(|&&(_, value, ok)| !value.is_finite() || !ok) {
            Some(&(field, _, _)) => Err(ConfigError::InvalidTuning { field }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let tuning = Tuning::default();
        assert!(tuning.validate().is_ok());
        assert_eq!(tuning.gravity, 0.8);
        assert_eq!(tuning.jump_strength, 15.0);
        assert_eq!(tuning.landing, LandingMode::FirstMatch);
        assert_eq!(tuning.bolt_aim, BoltAim::Rightward);
    }

    #[test]
    fn test_validate_names_field() {
        let tuning = Tuning {
            bolt_speed: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(ConfigError::InvalidTuning { field: "bolt_speed" })
        ));

        let tuning = Tuning {
            gravity: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(ConfigError::InvalidTuning { field: "gravity" })
        ));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let tuning: Tuning =
            serde_json::from_str(r#"{ "gravity": 0.5, "bolt_aim": "Facing" }"#).unwrap();
        assert_eq!(tuning.gravity, 0.5);
        assert_eq!(tuning.bolt_aim, BoltAim::Facing);
        assert_eq!(tuning.player_speed, PLAYER_SPEED);
    }
}
