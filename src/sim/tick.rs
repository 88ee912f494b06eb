//! Fixed-step simulation tick
//!
//! One call to [`tick`] is one simulation step. The physics is expressed in
//! per-tick units, so a host that wants speed independent of display refresh
//! drives it through [`FixedStep`].

use super::input::InputState;
use super::state::{GameState, SimEvent};
use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};

/// Advance the game state by one tick
///
/// Order: queued fire (using the pre-tick player position), player, bolt.
pub fn tick(state: &mut GameState, input: &InputState) {
    state.events.clear();
    state.time_ticks += 1;

    let requested = state.take_fire_request();
    if requested || input.fire {
        state.fire_now();
    }

    let step = state.player.advance(input, &state.world, &state.tuning);
    if step.landed {
        log::debug!("Landed at y={} on tick {}", state.player.pos.y, state.time_ticks);
        state.events.push(SimEvent::Landed);
    }
    if step.jumped {
        log::debug!("Jumped from y={} on tick {}", state.player.pos.y, state.time_ticks);
        state.events.push(SimEvent::Jumped);
    }

    if let Some(reason) = state.bolt.advance(&state.world) {
        log::debug!(
            "Bolt expired ({:?}) at x={} on tick {}",
            reason,
            state.bolt.pos.x,
            state.time_ticks
        );
        state.events.push(SimEvent::BoltExpired { reason });
    }
}

/// Converts variable frame times into whole ticks at a fixed rate
#[derive(Debug, Clone)]
pub struct FixedStep {
    step: f32,
    max_substeps: u32,
    accumulator: f32,
}

impl Default for FixedStep {
    fn default() -> Self {
        Self::new(SIM_DT, MAX_SUBSTEPS)
    }
}

impl FixedStep {
    pub fn new(step: f32, max_substeps: u32) -> Self {
        Self {
            step,
            max_substeps,
            accumulator: 0.0,
        }
    }

    /// Number of ticks owed for a frame that took `frame_dt` seconds
    pub fn ticks_for(&mut self, frame_dt: f32) -> u32 {
        // Cap long frames (tab switches), ignore clock jumps backwards and
        // garbage timestamps
        let dt = if frame_dt.is_finite() {
            frame_dt.clamp(0.0, MAX_FRAME_DT)
        } else {
            0.0
        };
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= self.step && substeps < self.max_substeps {
            self.accumulator -= self.step;
            substeps += 1;
        }
        if substeps == self.max_substeps {
            // Drop time we could not catch up on
            self.accumulator = self.accumulator.min(self.step);
        }
        substeps
    }

    /// Run every tick owed for this frame; returns the events of all of them
    pub fn run(
        &mut self,
        state: &mut GameState,
        input: &InputState,
        frame_dt: f32,
    ) -> Vec<SimEvent> {
        let mut events = Vec::new();
        for _ in 0..self.ticks_for(frame_dt) {
            tick(state, input);
            events.extend_from_slice(&state.events);
        }
        events
    }

    /// Seconds accumulated toward the next tick
    pub fn pending(&self) -> f32 {
        self.accumulator
    }
}
