//! Bolt Jumper entry point
//!
//! The browser build starts from the wasm-bindgen start hook in `platform`.
//! Natively this runs a short scripted session headlessly and logs a trace,
//! optionally against a level loaded from a JSON file given as the first
//! argument.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use bolt_jumper::sim::{FrameView, GameState, InputState, Tuning, World, tick};

    env_logger::init();
    log::info!("Bolt Jumper (native) starting...");

    let world = match std::env::args().nth(1) {
        Some(path) => match std::fs::read_to_string(&path) {
            Ok(json) => match World::from_json(&json) {
                Ok(world) => world,
                Err(e) => {
                    log::error!("Invalid level {}: {}", path, e);
                    std::process::exit(1);
                }
            },
            Err(e) => {
                log::error!("Cannot read {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => World::default_level(),
    };

    let mut state = match GameState::new(world, Tuning::default()) {
        Ok(state) => state,
        Err(e) => {
            log::error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Walk right, hop, fire and drift back left
    let script: [(u32, InputState); 4] = [
        (
            40,
            InputState {
                move_right: true,
                ..Default::default()
            },
        ),
        (
            30,
            InputState {
                move_right: true,
                jump: true,
                ..Default::default()
            },
        ),
        (
            30,
            InputState {
                fire: true,
                ..Default::default()
            },
        ),
        (
            60,
            InputState {
                move_left: true,
                ..Default::default()
            },
        ),
    ];

    for (ticks, input) in script {
        for _ in 0..ticks {
            tick(&mut state, &input);
            for event in &state.events {
                log::info!("tick {:>4}: {:?}", state.time_ticks, event);
            }
        }
    }

    let view = FrameView::capture(&state);
    log::info!(
        "Finished after {} ticks: player at ({:.1}, {:.1}) grounded={}, bolt active={}",
        state.time_ticks,
        view.player.left,
        view.player.top,
        state.player.grounded,
        view.bolt_active
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is the platform start hook, this is just to satisfy the compiler
}
