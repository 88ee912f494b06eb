//! Input state for the simulation
//!
//! Key events arrive asynchronously from the host. [`InputMap`] is the single
//! writer that records them; the tick only ever sees an [`InputState`] copy
//! taken once at tick start.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Logical controls the simulation understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Control {
    MoveLeft,
    MoveRight,
    Jump,
    Fire,
}

/// Pressed/released snapshot for one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    pub move_left: bool,
    pub move_right: bool,
    pub jump: bool,
    /// Fire held; raises a fire request at tick start
    pub fire: bool,
}

impl InputState {
    pub fn set(&mut self, control: Control, pressed: bool) {
        match control {
            Control::MoveLeft => self.move_left = pressed,
            Control::MoveRight => self.move_right = pressed,
            Control::Jump => self.jump = pressed,
            Control::Fire => self.fire = pressed,
        }
    }

    /// Net horizontal direction: -1, 0 or +1
    pub fn horizontal(&self) -> i8 {
        self.move_right as i8 - self.move_left as i8
    }
}

/// Key names (as reported by `KeyboardEvent.key`) bound to each control
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub move_left: Vec<String>,
    pub move_right: Vec<String>,
    pub jump: Vec<String>,
    pub fire: Vec<String>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            move_left: vec!["ArrowLeft".into()],
            move_right: vec!["ArrowRight".into()],
            jump: vec!["ArrowUp".into()],
            // "Spacebar" is what older browsers report
            fire: vec![" ".into(), "Spacebar".into()],
        }
    }
}

impl KeyBindings {
    /// Control bound to a key, if any
    pub fn control_for(&self, key: &str) -> Option<Control> {
        [
            (Control::MoveLeft, &self.move_left),
            (Control::MoveRight, &self.move_right),
            (Control::Jump, &self.jump),
            (Control::Fire, &self.fire),
        ]
        .into_iter()
        .find(|(_, keys)| keys.iter().any(|k| k == key))
        .map(|(control, _)| control)
    }

    /// Replace the keys bound to a control
    pub fn rebind(&mut self, control: Control, keys: Vec<String>) {
        match control {
            Control::MoveLeft => self.move_left = keys,
            Control::MoveRight => self.move_right = keys,
            Control::Jump => self.jump = keys,
            Control::Fire => self.fire = keys,
        }
    }
}

/// Live key-state map updated by key-down/key-up events
#[derive(Debug, Clone, Default)]
pub struct InputMap {
    bindings: KeyBindings,
    held: HashSet<String>,
}

impl InputMap {
    pub fn new(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            held: HashSet::new(),
        }
    }

    /// Record a key press; returns the bound control
    pub fn key_down(&mut self, key: &str) -> Option<Control> {
        self.held.insert(key.to_owned());
        self.bindings.control_for(key)
    }

    /// Record a key release; returns the bound control
    pub fn key_up(&mut self, key: &str) -> Option<Control> {
        self.held.remove(key);
        self.bindings.control_for(key)
    }

    /// Forget every held key (e.g. when the page loses focus)
    pub fn release_all(&mut self) {
        self.held.clear();
    }

    /// Consistent copy of the current control state
    pub fn snapshot(&self) -> InputState {
        let mut state = InputState::default();
        for key in &self.held {
            if let Some(control) = self.bindings.control_for(key) {
                state.set(control, true);
            }
        }
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings() {
        let bindings = KeyBindings::default();
        assert_eq!(bindings.control_for("ArrowLeft"), Some(Control::MoveLeft));
        assert_eq!(bindings.control_for("ArrowRight"), Some(Control::MoveRight));
        assert_eq!(bindings.control_for("ArrowUp"), Some(Control::Jump));
        assert_eq!(bindings.control_for(" "), Some(Control::Fire));
        assert_eq!(bindings.control_for("Spacebar"), Some(Control::Fire));
        assert_eq!(bindings.control_for("x"), None);
    }

    #[test]
    fn test_snapshot_tracks_press_and_release() {
        let mut map = InputMap::default();
        map.key_down("ArrowLeft");
        map.key_down("ArrowUp");
        let snap = map.snapshot();
        assert!(snap.move_left);
        assert!(snap.jump);
        assert!(!snap.move_right);

        map.key_up("ArrowLeft");
        let snap = map.snapshot();
        assert!(!snap.move_left);
        assert!(snap.jump);
    }

    #[test]
    fn test_snapshot_is_a_copy() {
        let mut map = InputMap::default();
        map.key_down("ArrowRight");
        let snap = map.snapshot();
        map.key_up("ArrowRight");
        assert!(snap.move_right);
        assert!(!map.snapshot().move_right);
    }

    #[test]
    fn test_either_fire_key_holds_fire() {
        let mut map = InputMap::default();
        map.key_down(" ");
        map.key_down("Spacebar");
        map.key_up(" ");
        assert!(map.snapshot().fire);
        map.key_up("Spacebar");
        assert!(!map.snapshot().fire);
    }

    #[test]
    fn test_release_all() {
        let mut map = InputMap::default();
        map.key_down("ArrowLeft");
        map.key_down("ArrowRight");
        map.release_all();
        assert_eq!(map.snapshot(), InputState::default());
    }

    #[test]
    fn test_rebind() {
        let mut bindings = KeyBindings::default();
        bindings.rebind(Control::Jump, vec!["w".into()]);
        let mut map = InputMap::new(bindings);
        assert_eq!(map.key_down("w"), Some(Control::Jump));
        assert_eq!(map.key_down("ArrowUp"), None);
        assert!(map.snapshot().jump);
    }

    #[test]
    fn test_horizontal() {
        let both = InputState {
            move_left: true,
            move_right: true,
            ..Default::default()
        };
        assert_eq!(both.horizontal(), 0);
        let left = InputState {
            move_left: true,
            ..Default::default()
        };
        assert_eq!(left.horizontal(), -1);

        let mut right = InputState::default();
        right.set(Control::MoveRight, true);
        assert_eq!(right.horizontal(), 1);
    }
}
