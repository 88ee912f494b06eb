//! Invariants that must hold for any input sequence

use bolt_jumper::sim::{
    Bolt, Facing, GameState, InputState, LandingMode, Rect, SimEvent, Tuning, World, tick,
};
use proptest::prelude::*;

fn input_strategy() -> impl Strategy<Value = InputState> {
    (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
        |(move_left, move_right, jump, fire)| InputState {
            move_left,
            move_right,
            jump,
            fire,
        },
    )
}

fn platform_strategy() -> impl Strategy<Value = Rect> {
    (0.0f32..760.0, 40.0f32..380.0, 20.0f32..200.0, 4.0f32..30.0)
        .prop_map(|(left, top, width, height)| Rect::new(left, top, width, height))
}

fn landing_strategy() -> impl Strategy<Value = LandingMode> {
    prop_oneof![Just(LandingMode::FirstMatch), Just(LandingMode::Highest)]
}

proptest! {
    #[test]
    fn player_stays_inside_world(
        inputs in prop::collection::vec(input_strategy(), 1..300),
        platforms in prop::collection::vec(platform_strategy(), 0..6),
        landing in landing_strategy(),
    ) {
        let world = World::new(800.0, 400.0, platforms).unwrap();
        let tuning = Tuning { landing, ..Default::default() };
        let mut state = GameState::new(world, tuning).unwrap();

        for input in &inputs {
            tick(&mut state, input);
            let p = &state.player;
            prop_assert!(p.pos.x >= 0.0);
            prop_assert!(p.pos.x <= 800.0 - p.width);
            prop_assert!(p.bottom() <= 400.0);
            prop_assert!(p.pos.y.is_finite() && p.vel_y.is_finite());
            prop_assert!(!(p.grounded && p.jumping));
        }
    }

    #[test]
    fn airborne_jump_input_only_adds_gravity(
        inputs in prop::collection::vec(input_strategy(), 1..200),
    ) {
        // No platforms: the floor is the only surface
        let world = World::new(800.0, 400.0, vec![]).unwrap();
        let mut state = GameState::new(world, Tuning::default()).unwrap();

        for input in &inputs {
            let before = state.player.clone();
            tick(&mut state, input);
            let after = &state.player;

            let jumped = state.events.contains(&SimEvent::Jumped);
            prop_assert_eq!(jumped, after.jumping && after.vel_y == -15.0);
            if jumped {
                prop_assert!(input.jump);
            }
            if !before.grounded && !after.grounded && !jumped {
                // Still in the air: velocity only changed by gravity
                prop_assert!((after.vel_y - (before.vel_y + 0.8)).abs() < 1e-3);
            }
        }
    }

    #[test]
    fn grounded_without_jump_lands_or_only_adds_gravity(
        inputs in prop::collection::vec(input_strategy(), 1..300),
        platforms in prop::collection::vec(platform_strategy(), 0..6),
        landing in landing_strategy(),
    ) {
        let world = World::new(800.0, 400.0, platforms).unwrap();
        let tuning = Tuning { landing, ..Default::default() };
        let mut state = GameState::new(world, tuning).unwrap();

        for input in &inputs {
            let before = state.player.clone();
            tick(&mut state, input);
            let after = &state.player;

            if before.grounded && !input.jump {
                // Either caught by a surface this tick, or walked off an edge
                let caught = after.grounded && after.vel_y == 0.0;
                let falling = (after.vel_y - (before.vel_y + 0.8)).abs() < 1e-3;
                prop_assert!(caught || falling);
                prop_assert!(!after.jumping);
            }
        }
    }

    #[test]
    fn at_most_one_bolt_and_expiry_is_one_way(
        inputs in prop::collection::vec(input_strategy(), 1..300),
        extra_fires in prop::collection::vec(any::<bool>(), 300),
    ) {
        let mut state = GameState::with_default_level().unwrap();

        for (i, input) in inputs.iter().enumerate() {
            if extra_fires[i] {
                state.request_fire();
            }
            let was_active = state.bolt.active;
            tick(&mut state, input);

            let fired = state
                .events
                .iter()
                .filter(|e| matches!(e, SimEvent::BoltFired { .. }))
                .count();
            prop_assert!(fired <= 1);
            if was_active {
                prop_assert_eq!(fired, 0);
            }

            let bolt = &state.bolt;
            if bolt.active {
                prop_assert!(bolt.pos.x >= 0.0 && bolt.pos.x <= 800.0);
                prop_assert!(bolt.distance_traveled < bolt.max_distance);
            }
        }
    }

    #[test]
    fn fire_while_active_leaves_bolt_unchanged(
        x in 0.0f32..760.0,
        y in 0.0f32..360.0,
        ticks in 1usize..24,
        facing in prop_oneof![Just(Facing::Left), Just(Facing::Right)],
    ) {
        let world = World::default_level();
        let tuning = Tuning::default();
        let mut state = GameState::new(world, tuning.clone()).unwrap();
        state.player.pos = glam::Vec2::new(400.0, 200.0);

        let mut bolt = Bolt::new(&tuning);
        prop_assert!(bolt.fire(&state.player, Facing::Right));
        for _ in 0..ticks {
            bolt.advance(&state.world);
        }
        prop_assert!(bolt.active);

        let before = bolt.clone();
        state.player.pos = glam::Vec2::new(x, y);
        prop_assert!(!bolt.fire(&state.player, facing));
        prop_assert_eq!(bolt, before);
    }
}
