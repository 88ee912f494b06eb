//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per tick, no wall-clock reads
//! - Input read from a snapshot taken at tick start
//! - Platforms resolved in their fixed list order
//! - No rendering or platform dependencies

pub mod input;
pub mod player;
pub mod projectile;
pub mod rect;
pub mod state;
pub mod tick;
pub mod tuning;
pub mod view;
pub mod world;

pub use input::{Control, InputMap, InputState, KeyBindings};
pub use player::{Facing, Player, PlayerStep, advance_player};
pub use projectile::{Bolt, ExpireReason, advance_bolt, fire};
pub use rect::Rect;
pub use state::{GameState, SimEvent};
pub use tick::{FixedStep, tick};
pub use tuning::{BoltAim, LandingMode, Tuning};
pub use view::{FrameView, bottom_offset};
pub use world::{ConfigError, World};
