use std::time::Instant;

use crate::config::Cooldowns;
use crate::effect::TransientEffect;
use crate::menu::{MenuAction, MenuItem, ITEM_COUNT};
use crate::state::ConfigState;

// ============================================================================
// KEYS
// ============================================================================

/// Logical keys the overlay reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ToggleMenu,
    Up,
    Down,
    Left,
    Right,
    Confirm,
    TriggerEffect,
}

impl Key {
    pub const ALL: [Key; 7] = [
        Key::ToggleMenu,
        Key::Up,
        Key::Down,
        Key::Left,
        Key::Right,
        Key::Confirm,
        Key::TriggerEffect,
    ];
}

/// Down/up state of every logical key for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeySnapshot {
    down: [bool; Key::ALL.len()],
}

impl KeySnapshot {
    pub fn with(mut self, key: Key) -> Self {
        self.down[key as usize] = true;
        self
    }

    pub fn is_down(&self, key: Key) -> bool {
        self.down[key as usize]
    }

    /// Down now but not in `previous`.
    pub fn rising(&self, previous: &KeySnapshot, key: Key) -> bool {
        self.is_down(key) && !previous.is_down(key)
    }
}

// ============================================================================
// COOLDOWNS
// ============================================================================

/// Granularity of an action, which sets how long until the next one of the
/// same kind may fire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionClass {
    Toggle,
    Navigate,
    Step,
    Fine,
}

impl ActionClass {
    const COUNT: usize = 4;
}

#[derive(Debug, Clone, Default)]
struct CooldownGate {
    ready_at: [Option<Instant>; ActionClass::COUNT],
}

impl CooldownGate {
    fn is_ready(&self, class: ActionClass, now: Instant) -> bool {
        self.ready_at[class as usize].map_or(true, |at| now >= at)
    }

    fn arm(&mut self, class: ActionClass, now: Instant, cooldowns: &Cooldowns) {
        let wait = match class {
            ActionClass::Toggle => cooldowns.toggle,
            ActionClass::Navigate => cooldowns.navigate,
            ActionClass::Step => cooldowns.step,
            ActionClass::Fine => cooldowns.fine,
        };
        self.ready_at[class as usize] = Some(now + wait);
    }
}

// ============================================================================
// CONTROLLER
// ============================================================================

/// Edge-triggered input state machine.
///
/// Sampled once per frame, after drawing. Each action fires on the rising
/// edge of its key only, and is dropped while its class is cooling down.
#[derive(Debug, Clone)]
pub struct InputController {
    previous: KeySnapshot,
    gate: CooldownGate,
    cooldowns: Cooldowns,
    effect_origin: (i32, i32),
}

impl InputController {
    /// `effect_origin` is where the trigger key starts the transient effect.
    pub fn new(cooldowns: Cooldowns, effect_origin: (i32, i32)) -> Self {
        Self {
            previous: KeySnapshot::default(),
            gate: CooldownGate::default(),
            cooldowns,
            effect_origin,
        }
    }

    pub fn process(
        &mut self,
        keys: KeySnapshot,
        state: &mut ConfigState,
        effect: &mut TransientEffect,
        now: Instant,
    ) {
        let previous = self.previous;
        let rising = |key| keys.rising(&previous, key);

        if rising(Key::ToggleMenu) && self.try_fire(ActionClass::Toggle, now) {
            state.menu_open = !state.menu_open;
            tracing::debug!(open = state.menu_open, "settings menu toggled");
        }

        if rising(Key::TriggerEffect) {
            let (x, y) = self.effect_origin;
            effect.start(x, y, now);
            tracing::debug!(x, y, "transient effect triggered");
        }

        if state.menu_open {
            if rising(Key::Up) && self.try_fire(ActionClass::Navigate, now) {
                state.menu_selection = (state.menu_selection + ITEM_COUNT - 1) % ITEM_COUNT;
            }
            if rising(Key::Down) && self.try_fire(ActionClass::Navigate, now) {
                state.menu_selection = (state.menu_selection + 1) % ITEM_COUNT;
            }

            let actions = [
                (Key::Left, MenuAction::Decrease),
                (Key::Right, MenuAction::Increase),
                (Key::Confirm, MenuAction::Confirm),
            ];
            for (key, action) in actions {
                if rising(key) {
                    self.dispatch(action, state, now);
                }
            }
        }

        self.previous = keys;
    }

    fn dispatch(&mut self, action: MenuAction, state: &mut ConfigState, now: Instant) {
        let Some(item) = MenuItem::from_index(state.menu_selection) else {
            return;
        };
        let mut candidate = state.clone();
        let Some(class) = item.apply(action, &mut candidate) else {
            return;
        };
        if self.try_fire(class, now) {
            *state = candidate;
            tracing::debug!(?item, ?action, "setting changed");
        }
    }

    fn try_fire(&mut self, class: ActionClass, now: Instant) -> bool {
        if !self.gate.is_ready(class, now) {
            tracing::trace!(?class, "action dropped during cooldown");
            return false;
        }
        self.gate.arm(class, now, &self.cooldowns);
        true
    }
}
