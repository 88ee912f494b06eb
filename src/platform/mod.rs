//! Platform abstraction layer
//!
//! Browser shell around the simulation (wasm32 only):
//! - World geometry read from the page once at startup
//! - Key events fed into the input map
//! - `requestAnimationFrame` loop driving the fixed-step ticker
//! - Element positions written back after each frame
//!
//! Natively the simulation is driven directly (see `main.rs`).

/// Page element ids the shell binds to
pub mod ids {
    pub const CONTAINER: &str = "game-container";
    pub const PLAYER: &str = "player";
    pub const BOLT: &str = "lightning-bolt";
    /// Platform elements, in collision resolution order
    pub const PLATFORMS: [&str; 4] = ["ground", "block-1", "block-2", "block-3"];
}

#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
pub use web::run;
