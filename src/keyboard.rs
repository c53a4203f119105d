//! Physical key tracking for the overlay.
//!
//! The overlay never takes focus, so key state comes from raw device events
//! as well as the (rare) window key events. Both feed the same held-key
//! table, which is sampled once per frame into a [`KeySnapshot`].

use winit::event::ElementState;
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::input::{Key, KeySnapshot};

/// Physical keys bound to each logical overlay key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBindings {
    pub toggle_menu: Vec<KeyCode>,
    pub up: Vec<KeyCode>,
    pub down: Vec<KeyCode>,
    pub left: Vec<KeyCode>,
    pub right: Vec<KeyCode>,
    pub confirm: Vec<KeyCode>,
    pub trigger_effect: Vec<KeyCode>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            toggle_menu: vec![KeyCode::Insert],
            up: vec![KeyCode::ArrowUp],
            down: vec![KeyCode::ArrowDown],
            left: vec![KeyCode::ArrowLeft],
            right: vec![KeyCode::ArrowRight],
            confirm: vec![KeyCode::Enter, KeyCode::NumpadEnter],
            trigger_effect: vec![KeyCode::KeyK],
        }
    }
}

impl KeyBindings {
    fn codes(&self, key: Key) -> &[KeyCode] {
        match key {
            Key::ToggleMenu => &self.toggle_menu,
            Key::Up => &self.up,
            Key::Down => &self.down,
            Key::Left => &self.left,
            Key::Right => &self.right,
            Key::Confirm => &self.confirm,
            Key::TriggerEffect => &self.trigger_effect,
        }
    }

    /// Every logical key bound to `code`.
    pub fn lookup(&self, code: KeyCode) -> impl Iterator<Item = Key> + '_ {
        Key::ALL
            .into_iter()
            .filter(move |key| self.codes(*key).contains(&code))
    }
}

/// Held state of every bound physical key
#[derive(Debug, Clone, Default)]
pub struct KeyTracker {
    bindings: KeyBindings,
    held: Vec<KeyCode>,
    // Keys dropped by `release_all` that have not been released since.
    suppressed: Vec<KeyCode>,
}

impl KeyTracker {
    pub fn new(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            held: Vec::new(),
            suppressed: Vec::new(),
        }
    }

    pub fn handle(&mut self, physical_key: PhysicalKey, state: ElementState) {
        let PhysicalKey::Code(code) = physical_key else {
            return;
        };
        if self.bindings.lookup(code).next().is_none() {
            return;
        }
        match state {
            ElementState::Pressed => {
                if !self.held.contains(&code) && !self.suppressed.contains(&code) {
                    self.held.push(code);
                }
            }
            ElementState::Released => {
                self.held.retain(|c| *c != code);
                self.suppressed.retain(|c| *c != code);
            }
        }
    }

    /// Forget held keys, e.g. when the host stops delivering events.
    ///
    /// A forgotten key stays up until its release is seen, so auto-repeat of
    /// a key that is still physically down cannot start a new hold.
    pub fn release_all(&mut self) {
        for code in self.held.drain(..) {
            if !self.suppressed.contains(&code) {
                self.suppressed.push(code);
            }
        }
    }

    pub fn snapshot(&self) -> KeySnapshot {
        self.held
            .iter()
            .flat_map(|code| self.bindings.lookup(*code))
            .fold(KeySnapshot::default(), |snap, key| snap.with(key))
    }
}
