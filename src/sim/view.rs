//! Render-facing snapshot of the simulation
//!
//! Positions stay in top-origin world coordinates. Renderers that anchor
//! elements from the bottom (CSS `bottom`) convert with [`bottom_offset`].

use serde::Serialize;

use super::rect::Rect;
use super::state::GameState;

/// Distance from the world bottom to the bottom edge of a box at `top`
#[inline]
pub fn bottom_offset(top: f32, height: f32, world_height: f32) -> f32 {
    world_height - top - height
}

/// Everything a renderer needs after a tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FrameView {
    pub world_height: f32,
    pub player: Rect,
    pub bolt: Rect,
    pub bolt_active: bool,
}

impl FrameView {
    pub fn capture(state: &GameState) -> Self {
        Self {
            world_height: state.world.height(),
            player: state.player.bounds(),
            bolt: state.bolt.bounds(),
            bolt_active: state.bolt.active,
        }
    }

    /// Player position as (left, bottom offset)
    pub fn player_anchor(&self) -> (f32, f32) {
        (
            self.player.left,
            bottom_offset(self.player.top, self.player.height, self.world_height),
        )
    }

    /// Bolt position as (left, bottom offset)
    pub fn bolt_anchor(&self) -> (f32, f32) {
        (
            self.bolt.left,
            bottom_offset(self.bolt.top, self.bolt.height, self.world_height),
        )
    }
}
