//! The lightning bolt: a single projectile with at most one in flight
//!
//! Lifecycle is idle -> active (on fire) -> idle (on range or leaving the
//! world). The bolt deactivates itself; nothing outside removes it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::player::{Facing, Player};
use super::rect::Rect;
use super::tuning::Tuning;
use super::world::World;

/// Why an active bolt stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpireReason {
    /// Left the horizontal world span
    OutOfBounds,
    /// Traveled its maximum distance
    Range,
}

/// The player's lightning bolt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bolt {
    pub active: bool,
    /// Top-left corner
    pub pos: Vec2,
    pub direction: Facing,
    pub distance_traveled: f32,
    pub speed: f32,
    pub max_distance: f32,
    pub width: f32,
    pub height: f32,
}

impl Bolt {
    /// An idle bolt sized and tuned from `tuning`
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            active: false,
            pos: Vec2::ZERO,
            direction: Facing::Right,
            distance_traveled: 0.0,
            speed: tuning.bolt_speed,
            max_distance: tuning.bolt_max_distance,
            width: tuning.bolt_width,
            height: tuning.bolt_height,
        }
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.width, self.height)
    }

    /// Launch from the player's side, centered vertically on the player
    ///
    /// Does nothing and returns `false` while a bolt is already in flight.
    pub fn fire(&mut self, player: &Player, direction: Facing) -> bool {
        if self.active {
            return false;
        }

        self.active = true;
        self.direction = direction;
        self.pos.x = match direction {
            Facing::Right => player.right(),
            Facing::Left => player.pos.x - self.width,
        };
        self.pos.y = player.pos.y + player.height / 2.0 - self.height / 2.0;
        self.distance_traveled = 0.0;
        true
    }

    /// Move one tick; returns the reason if the bolt expired on this tick
    pub fn advance(&mut self, world: &World) -> Option<ExpireReason> {
        if !self.active {
            return None;
        }

        self.pos.x += self.speed * self.direction.sign();
        self.distance_traveled += self.speed;

        let reason = if !world.contains_x(self.pos.x) {
            ExpireReason::OutOfBounds
        } else if self.distance_traveled >= self.max_distance {
            ExpireReason::Range
        } else {
            return None;
        };

        self.active = false;
        Some(reason)
    }
}

/// Fire `bolt` from `player` unless one is already in flight
pub fn fire(player: &Player, bolt: &mut Bolt, direction: Facing) -> bool {
    bolt.fire(player, direction)
}

/// Advance `bolt` one tick against the world bounds
pub fn advance_bolt(bolt: &mut Bolt, world: &World) -> Option<ExpireReason> {
    bolt.advance(world)
}
