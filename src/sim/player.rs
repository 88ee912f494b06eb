//! Player kinematics and platform collision
//!
//! One call to [`Player::advance`] per tick: gravity, horizontal input,
//! world clamp, landing resolution, floor fallback, then jump.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::input::InputState;
use super::rect::Rect;
use super::tuning::{LandingMode, Tuning};
use super::world::World;

/// Horizontal direction, used for bolt aim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// -1.0 for left, +1.0 for right
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }
}

/// What happened to the player during one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerStep {
    /// Became grounded this tick after being airborne
    pub landed: bool,
    /// Left the ground with a jump impulse this tick
    pub jumped: bool,
}

/// The player entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner, y measured downward from the world top
    pub pos: Vec2,
    /// Vertical velocity (positive is down)
    pub vel_y: f32,
    /// Resting on a platform or the floor after this tick's motion
    pub grounded: bool,
    /// Has an upward impulse that has not landed yet
    pub jumping: bool,
    /// Last horizontal direction held
    pub facing: Facing,
    pub width: f32,
    pub height: f32,
}

impl Player {
    /// Create a player standing on the world floor at the left edge
    pub fn spawn(world: &World, tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(0.0, world.height() - tuning.player_height),
            vel_y: 0.0,
            grounded: false,
            jumping: false,
            facing: Facing::default(),
            width: tuning.player_width,
            height: tuning.player_height,
        }
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.width, self.height)
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.height
    }

    /// Advance the player by one tick
    pub fn advance(&mut self, input: &InputState, world: &World, tuning: &Tuning) -> PlayerStep {
        let was_grounded = self.grounded;

        // Gravity is unconditional; grounding is re-derived below
        self.vel_y += tuning.gravity;
        self.pos.y += self.vel_y;

        if input.move_left {
            self.pos.x -= tuning.player_speed;
        }
        if input.move_right {
            self.pos.x += tuning.player_speed;
        }
        match input.horizontal() {
            -1 => self.facing = Facing::Left,
            1 => self.facing = Facing::Right,
            _ => {}
        }

        let max_x = (world.width() - self.width).max(0.0);
        self.pos.x = self.pos.x.clamp(0.0, max_x);

        self.grounded = false;
        match tuning.landing {
            LandingMode::FirstMatch => {
                // Later platforms see the y snapped by earlier ones
                for platform in world.platforms() {
                    if self.lands_on(platform) {
                        self.snap_bottom_to(platform.top);
                    }
                }
            }
            LandingMode::Highest => {
                let highest = world
                    .platforms()
                    .iter()
                    .filter(|p| self.lands_on(p))
                    .map(|p| p.top)
                    .min_by(f32::total_cmp);
                if let Some(top) = highest {
                    self.snap_bottom_to(top);
                }
            }
        }

        // Safety net when no ground platform covers the floor
        if self.bottom() > world.height() {
            self.snap_bottom_to(world.height());
        }

        let mut step = PlayerStep {
            landed: self.grounded && !was_grounded,
            jumped: false,
        };

        if input.jump && self.grounded && !self.jumping {
            self.vel_y = -tuning.jump_strength;
            self.grounded = false;
            self.jumping = true;
            step.jumped = true;
        }

        step
    }

    /// Falling (or resting) with the current bounds overlapping the platform's
    /// top surface
    fn lands_on(&self, platform: &Rect) -> bool {
        self.vel_y >= 0.0
            && self.bottom() >= platform.top
            && self.pos.y < platform.bottom()
            && self.bounds().overlaps_horizontally(platform)
    }

    fn snap_bottom_to(&mut self, surface: f32) {
        self.pos.y = surface - self.height;
        self.vel_y = 0.0;
        self.grounded = true;
        self.jumping = false;
    }
}

/// Advance `player` one tick against the world's platforms and bounds
pub fn advance_player(
    player: &mut Player,
    input: &InputState,
    world: &World,
    tuning: &Tuning,
) -> PlayerStep {
    player.advance(input, world, tuning)
}
