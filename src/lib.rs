//! Bolt Jumper - a side-view platformer simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (player kinematics, platform collision, bolt)
//! - `settings`: Key bindings and tuning overrides persisted by the browser shell
//! - `platform`: Browser shell (wasm32 only): page geometry, key events, frame loop

pub mod platform;
pub mod settings;
pub mod sim;

pub use settings::Settings;
pub use sim::{ConfigError, GameState, InputState, Tuning, World, tick};

/// Game configuration constants
///
/// Distances are in world units (pixels in the browser shell), velocities in
/// units per tick and accelerations in units per tick squared.
pub mod consts {
    /// Nominal tick rate of the frame source (Hz)
    pub const TICK_HZ: f32 = 60.0;
    /// Fixed simulation step matching one tick at `TICK_HZ`
    pub const SIM_DT: f32 = 1.0 / TICK_HZ;
    /// Maximum ticks run for one frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame delta accepted by the stepper (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Default world dimensions
    pub const WORLD_WIDTH: f32 = 800.0;
    pub const WORLD_HEIGHT: f32 = 400.0;

    /// Player defaults
    pub const PLAYER_WIDTH: f32 = 40.0;
    pub const PLAYER_HEIGHT: f32 = 40.0;
    pub const PLAYER_SPEED: f32 = 5.0;
    pub const JUMP_STRENGTH: f32 = 15.0;
    pub const GRAVITY: f32 = 0.8;

    /// Lightning bolt defaults
    pub const BOLT_WIDTH: f32 = 30.0;
    pub const BOLT_HEIGHT: f32 = 10.0;
    pub const BOLT_SPEED: f32 = 10.0;
    /// Roughly five 50-unit paces
    pub const BOLT_MAX_DISTANCE: f32 = 250.0;

    /// Height of the ground strip in the default level
    pub const GROUND_HEIGHT: f32 = 40.0;
}
