//! World geometry: bounds plus the fixed, ordered platform list
//!
//! Geometry is validated once when the world is built and never changes
//! afterwards, so per-tick code can rely on it without re-checking.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::rect::Rect;
use crate::consts::*;

/// Errors raised while validating configuration at startup
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("world size must be finite and positive, got {width}x{height}")]
    InvalidWorldSize { width: f32, height: f32 },

    #[error("player ({player_width}x{player_height}) does not fit in a {world_width}x{world_height} world")]
    PlayerTooLarge {
        player_width: f32,
        player_height: f32,
        world_width: f32,
        world_height: f32,
    },

    #[error("platform {index} has a non-finite or empty rectangle")]
    InvalidPlatform { index: usize },

    #[error("tuning value `{field}` is out of range")]
    InvalidTuning { field: &'static str },

    #[error("invalid geometry json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Static world description supplied by the geometry collaborator
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct World {
    width: f32,
    height: f32,
    platforms: Vec<Rect>,
}

/// Unvalidated wire form of [`World`]
#[derive(Debug, Deserialize)]
struct WorldDef {
    width: f32,
    height: f32,
    #[serde(default)]
    platforms: Vec<Rect>,
}

impl World {
    /// Build a world, rejecting malformed bounds or platforms
    pub fn new(width: f32, height: f32, platforms: Vec<Rect>) -> Result<Self, ConfigError> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(ConfigError::InvalidWorldSize { width, height });
        }
        if let Some(index) = platforms.iter().position(|p| !p.is_well_formed()) {
            return Err(ConfigError::InvalidPlatform { index });
        }
        Ok(Self {
            width,
            height,
            platforms,
        })
    }

    /// Parse and validate a world from JSON
    ///
    /// ```json
    /// { "width": 800, "height": 400,
    ///   "platforms": [{ "left": 0, "top": 360, "width": 800, "height": 40 }] }
    /// ```
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let def: WorldDef = serde_json::from_str(json)?;
        Self::new(def.width, def.height, def.platforms)
    }

    /// The stock level: a ground strip across the world and three floating blocks
    pub fn default_level() -> Self {
        Self {
            width: WORLD_WIDTH,
            height: WORLD_HEIGHT,
            platforms: vec![
                Rect::new(0.0, WORLD_HEIGHT - GROUND_HEIGHT, WORLD_WIDTH, GROUND_HEIGHT),
                Rect::new(150.0, 280.0, 100.0, 20.0),
                Rect::new(320.0, 220.0, 120.0, 20.0),
                Rect::new(520.0, 160.0, 100.0, 20.0),
            ],
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Platforms in resolution order
    #[inline]
    pub fn platforms(&self) -> &[Rect] {
        &self.platforms
    }

    /// True if `x` lies inside the horizontal world span (edges inclusive)
    #[inline]
    pub fn contains_x(&self, x: f32) -> bool {
        (0.0..=self.width).contains(&x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_bad_bounds() {
        assert!(matches!(
            World::new(0.0, 400.0, vec![]),
            Err(ConfigError::InvalidWorldSize { .. })
        ));
        assert!(matches!(
            World::new(800.0, f32::NAN, vec![]),
            Err(ConfigError::InvalidWorldSize { .. })
        ));
        assert!(matches!(
            World::new(-1.0, 400.0, vec![]),
            Err(ConfigError::InvalidWorldSize { .. })
        ));
    }

    #[test]
    fn test_rejects_bad_platform() {
        let platforms = vec![
            Rect::new(0.0, 360.0, 800.0, 40.0),
            Rect::new(10.0, 10.0, -5.0, 10.0),
        ];
        assert!(matches!(
            World::new(800.0, 400.0, platforms),
            Err(ConfigError::InvalidPlatform { index: 1 })
        ));
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "width": 640, "height": 480,
            "platforms": [
                { "left": 0, "top": 440, "width": 640, "height": 40 },
                { "left": 100, "top": 300, "width": 80, "height": 16 }
            ]
        }"#;
        let world = World::from_json(json).unwrap();
        assert_eq!(world.width(), 640.0);
        assert_eq!(world.height(), 480.0);
        assert_eq!(world.platforms().len(), 2);
        assert_eq!(world.platforms()[1], Rect::new(100.0, 300.0, 80.0, 16.0));
    }

    #[test]
    fn test_from_json_without_platforms() {
        let world = World::from_json(r#"{ "width": 100, "height": 50 }"#).unwrap();
        assert!(world.platforms().is_empty());
    }

    #[test]
    fn test_from_json_errors() {
        assert!(matches!(World::from_json("not json"), Err(ConfigError::Json(_))));
        assert!(matches!(
            World::from_json(r#"{ "width": 0, "height": 50 }"#),
            Err(ConfigError::InvalidWorldSize { .. })
        ));
    }

    #[test]
    fn test_default_level_ground_spans_world() {
        let world = World::default_level();
        let ground = world.platforms()[0];
        assert_eq!(ground.left, 0.0);
        assert_eq!(ground.width, world.width());
        assert_eq!(ground.bottom(), world.height());
        assert!(World::new(world.width(), world.height(), world.platforms().to_vec()).is_ok());
    }

    #[test]
    fn test_contains_x() {
        let world = World::new(100.0, 100.0, vec![]).unwrap();
        assert!(world.contains_x(0.0));
        assert!(world.contains_x(100.0));
        assert!(!world.contains_x(-0.1));
        assert!(!world.contains_x(100.1));
    }
}
