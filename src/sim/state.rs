//! Game state and core simulation types
//!
//! Everything the tick reads or writes lives here; there are no globals.

use serde::{Deserialize, Serialize};

use super::player::{Facing, Player};
use super::projectile::{Bolt, ExpireReason};
use super::tuning::{BoltAim, Tuning};
use super::world::{ConfigError, World};

/// Notable transitions during a tick, for presentation shells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimEvent {
    /// Player left the ground
    Jumped,
    /// Player touched down after being airborne
    Landed,
    /// A bolt was launched
    BoltFired { direction: Facing },
    /// The bolt in flight vanished
    BoltExpired { reason: ExpireReason },
}

/// Complete simulation state
#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    /// Static geometry, fixed at init
    pub world: World,
    /// Balance values, fixed at init
    pub tuning: Tuning,
    pub player: Player,
    pub bolt: Bolt,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Fire requested since the last tick
    fire_pending: bool,
    /// Events raised by the most recent tick
    #[serde(skip)]
    pub events: Vec<SimEvent>,
}

impl GameState {
    /// Validate configuration and spawn the player on the floor
    pub fn new(world: World, tuning: Tuning) -> Result<Self, ConfigError> {
        if let Err(e) = tuning.validate() {
            log::warn!("Rejected tuning: {}", e);
            return Err(e);
        }
        if tuning.player_width > world.width() || tuning.player_height > world.height() {
            let e = ConfigError::PlayerTooLarge {
                player_width: tuning.player_width,
                player_height: tuning.player_height,
                world_width: world.width(),
                world_height: world.height(),
            };
            log::warn!("Rejected world: {}", e);
            return Err(e);
        }

        log::info!(
            "Simulation ready: {}x{} world, {} platforms",
            world.width(),
            world.height(),
            world.platforms().len()
        );

        Ok(Self {
            player: Player::spawn(&world, &tuning),
            bolt: Bolt::new(&tuning),
            world,
            tuning,
            time_ticks: 0,
            fire_pending: false,
            events: Vec::new(),
        })
    }

    /// Default level with default tuning
    pub fn with_default_level() -> Result<Self, ConfigError> {
        Self::new(World::default_level(), Tuning::default())
    }

    /// Queue a fire request; applied at the start of the next tick
    pub fn request_fire(&mut self) {
        self.fire_pending = true;
    }

    /// True if a fire request is waiting for the next tick
    pub fn fire_pending(&self) -> bool {
        self.fire_pending
    }

    pub(crate) fn take_fire_request(&mut self) -> bool {
        std::mem::take(&mut self.fire_pending)
    }

    /// Direction the next bolt would travel
    pub fn aim(&self) -> Facing {
        match self.tuning.bolt_aim {
            BoltAim::Rightward => Facing::Right,
            BoltAim::Facing => self.player.facing,
        }
    }

    /// Try to launch a bolt right now, recording the event
    pub fn fire_now(&mut self) -> bool {
        let direction = self.aim();
        let fired = self.bolt.fire(&self.player, direction);
        if fired {
            log::debug!("Bolt fired {:?} at tick {}", direction, self.time_ticks);
            self.events.push(SimEvent::BoltFired { direction });
        }
        fired
    }
}
