//! The settings menu table: one row per configurable field, with its label
//! and the handler the input controller dispatches to.

use crate::input::ActionClass;
use crate::state::{
    step_clamped, step_unbounded, ConfigState, COLOR_CHANNEL_RANGE, RETICLE_GAP_RANGE,
    RETICLE_SIZE_RANGE, SCOPE_RADIUS_RANGE,
};

/// Step applied to the scope radius and offsets per key press.
pub const SCOPE_STEP: i32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    ReticleEnabled,
    ReticleSize,
    ReticleGap,
    ReticleShape,
    ColorR,
    ColorG,
    ColorB,
    Rainbow,
    Watermark,
    Scope,
    ScopeRadius,
    ScopeOffsetX,
    ScopeOffsetY,
}

pub const ITEM_COUNT: usize = MenuItem::ALL.len();

/// What a Left, Right or Confirm edge asks of the selected row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Decrease,
    Increase,
    Confirm,
}

impl MenuItem {
    pub const ALL: [MenuItem; 13] = [
        MenuItem::ReticleEnabled,
        MenuItem::ReticleSize,
        MenuItem::ReticleGap,
        MenuItem::ReticleShape,
        MenuItem::ColorR,
        MenuItem::ColorG,
        MenuItem::ColorB,
        MenuItem::Rainbow,
        MenuItem::Watermark,
        MenuItem::Scope,
        MenuItem::ScopeRadius,
        MenuItem::ScopeOffsetX,
        MenuItem::ScopeOffsetY,
    ];

    pub fn from_index(index: usize) -> Option<MenuItem> {
        Self::ALL.get(index).copied()
    }

    pub fn label(self, state: &ConfigState) -> String {
        match self {
            MenuItem::ReticleEnabled => format!("Crosshair: {}", on_off(state.reticle_enabled)),
            MenuItem::ReticleSize => format!("Crosshair Size: {}", state.reticle_size),
            MenuItem::ReticleGap => format!("Crosshair Gap: {}", state.reticle_gap),
            MenuItem::ReticleShape => format!("Crosshair Shape: {}", state.reticle_shape.name()),
            MenuItem::ColorR => format!("Color R: {}", state.color_r),
            MenuItem::ColorG => format!("Color G: {}", state.color_g),
            MenuItem::ColorB => format!("Color B: {}", state.color_b),
            MenuItem::Rainbow => format!("Rainbow: {}", on_off(state.rainbow_enabled)),
            MenuItem::Watermark => format!("Watermark: {}", on_off(state.watermark_enabled)),
            MenuItem::Scope => format!("Scope Overlay: {}", on_off(state.scope_enabled)),
            MenuItem::ScopeRadius => format!("Scope Radius: {}", state.scope_radius),
            MenuItem::ScopeOffsetX => format!("Scope Offset X: {}", state.scope_offset_x),
            MenuItem::ScopeOffsetY => format!("Scope Offset Y: {}", state.scope_offset_y),
        }
    }

    /// Apply `action` to the field behind this row.
    ///
    /// Returns the cooldown class when the row responds to the action, or
    /// `None` when the action does not apply (e.g. Left on a boolean row) or
    /// leaves the value unchanged because it is already at its bound.
    pub fn apply(self, action: MenuAction, state: &mut ConfigState) -> Option<ActionClass> {
        let delta = match action {
            MenuAction::Decrease => -1,
            MenuAction::Increase => 1,
            MenuAction::Confirm => 0,
        };

        match (self, action) {
            (MenuItem::ReticleEnabled, MenuAction::Confirm) => {
                state.reticle_enabled = !state.reticle_enabled;
                Some(ActionClass::Toggle)
            }
            (MenuItem::Rainbow, MenuAction::Confirm) => {
                state.rainbow_enabled = !state.rainbow_enabled;
                Some(ActionClass::Toggle)
            }
            (MenuItem::Watermark, MenuAction::Confirm) => {
                state.watermark_enabled = !state.watermark_enabled;
                Some(ActionClass::Toggle)
            }
            (MenuItem::Scope, MenuAction::Confirm) => {
                state.scope_enabled = !state.scope_enabled;
                Some(ActionClass::Toggle)
            }
            (_, MenuAction::Confirm) => None,
            (MenuItem::ReticleEnabled | MenuItem::Rainbow | MenuItem::Watermark | MenuItem::Scope, _) => {
                None
            }

            (MenuItem::ReticleSize, _) => {
                step_clamped(&mut state.reticle_size, delta, RETICLE_SIZE_RANGE)
                    .then_some(ActionClass::Step)
            }
            (MenuItem::ReticleGap, _) => {
                step_clamped(&mut state.reticle_gap, delta, RETICLE_GAP_RANGE)
                    .then_some(ActionClass::Step)
            }
            (MenuItem::ReticleShape, _) => {
                state.reticle_shape = if delta < 0 {
                    state.reticle_shape.prev()
                } else {
                    state.reticle_shape.next()
                };
                Some(ActionClass::Step)
            }
            (MenuItem::ColorR, _) => {
                step_clamped(&mut state.color_r, delta, COLOR_CHANNEL_RANGE)
                    .then_some(ActionClass::Fine)
            }
            (MenuItem::ColorG, _) => {
                step_clamped(&mut state.color_g, delta, COLOR_CHANNEL_RANGE)
                    .then_some(ActionClass::Fine)
            }
            (MenuItem::ColorB, _) => {
                step_clamped(&mut state.color_b, delta, COLOR_CHANNEL_RANGE)
                    .then_some(ActionClass::Fine)
            }
            (MenuItem::ScopeRadius, _) => {
                step_clamped(&mut state.scope_radius, delta * SCOPE_STEP, SCOPE_RADIUS_RANGE)
                    .then_some(ActionClass::Step)
            }
            (MenuItem::ScopeOffsetX, _) => {
                step_unbounded(&mut state.scope_offset_x, delta * SCOPE_STEP)
                    .then_some(ActionClass::Step)
            }
            (MenuItem::ScopeOffsetY, _) => {
                step_unbounded(&mut state.scope_offset_y, delta * SCOPE_STEP)
                    .then_some(ActionClass::Step)
            }
        }
    }
}

fn on_off(flag: bool) -> &'static str {
    if flag {
        "ON"
    } else {
        "OFF"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ReticleShape;

    #[test]
    fn table_has_thirteen_rows_in_order() {
        assert_eq!(ITEM_COUNT, 13);
        assert_eq!(MenuItem::from_index(0), Some(MenuItem::ReticleEnabled));
        assert_eq!(MenuItem::from_index(10), Some(MenuItem::ScopeRadius));
        assert_eq!(MenuItem::from_index(12), Some(MenuItem::ScopeOffsetY));
        assert_eq!(MenuItem::from_index(13), None);
    }

    #[test]
    fn boolean_rows_only_respond_to_confirm() {
        let mut state = ConfigState::default();
        for item in [MenuItem::ReticleEnabled, MenuItem::Rainbow, MenuItem::Watermark, MenuItem::Scope] {
            let before = state.clone();
            assert_eq!(item.apply(MenuAction::Increase, &mut state), None);
            assert_eq!(item.apply(MenuAction::Decrease, &mut state), None);
            assert_eq!(state, before);
            assert_eq!(item.apply(MenuAction::Confirm, &mut state), Some(ActionClass::Toggle));
            assert_ne!(state, before);
        }
        assert!(!state.reticle_enabled);
        assert!(state.rainbow_enabled);
        assert!(!state.watermark_enabled);
        assert!(state.scope_enabled);
    }

    #[test]
    fn numeric_rows_ignore_confirm() {
        let mut state = ConfigState::default();
        let before = state.clone();
        for item in MenuItem::ALL.into_iter().skip(1).take(6) {
            assert_eq!(item.apply(MenuAction::Confirm, &mut state), None);
        }
        assert_eq!(state, before);
    }

    #[test]
    fn every_bounded_field_stays_in_range() {
        let cases = [
            (MenuItem::ReticleSize, RETICLE_SIZE_RANGE),
            (MenuItem::ReticleGap, RETICLE_GAP_RANGE),
            (MenuItem::ColorR, COLOR_CHANNEL_RANGE),
            (MenuItem::ColorG, COLOR_CHANNEL_RANGE),
            (MenuItem::ColorB, COLOR_CHANNEL_RANGE),
            (MenuItem::ScopeRadius, SCOPE_RADIUS_RANGE),
        ];
        let read = |item: MenuItem, s: &ConfigState| match item {
            MenuItem::ReticleSize => s.reticle_size,
            MenuItem::ReticleGap => s.reticle_gap,
            MenuItem::ColorR => s.color_r,
            MenuItem::ColorG => s.color_g,
            MenuItem::ColorB => s.color_b,
            _ => s.scope_radius,
        };
        for (item, (lo, hi)) in cases {
            let mut state = ConfigState::default();
            for _ in 0..400 {
                item.apply(MenuAction::Increase, &mut state);
                assert!(read(item, &state) <= hi);
            }
            assert_eq!(read(item, &state), hi, "{item:?} ceiling");
            for _ in 0..400 {
                item.apply(MenuAction::Decrease, &mut state);
                assert!(read(item, &state) >= lo);
            }
            assert_eq!(read(item, &state), lo, "{item:?} floor");
        }
    }

    #[test]
    fn scope_rows_move_in_steps_of_five() {
        let mut state = ConfigState::default();
        MenuItem::ScopeRadius.apply(MenuAction::Increase, &mut state);
        assert_eq!(state.scope_radius, 105);
        MenuItem::ScopeOffsetX.apply(MenuAction::Decrease, &mut state);
        MenuItem::ScopeOffsetX.apply(MenuAction::Decrease, &mut state);
        MenuItem::ScopeOffsetY.apply(MenuAction::Increase, &mut state);
        assert_eq!((state.scope_offset_x, state.scope_offset_y), (-10, 5));
    }

    #[test]
    fn shape_row_cycles() {
        let mut state = ConfigState::default();
        MenuItem::ReticleShape.apply(MenuAction::Decrease, &mut state);
        assert_eq!(state.reticle_shape, ReticleShape::Cross);
        MenuItem::ReticleShape.apply(MenuAction::Increase, &mut state);
        MenuItem::ReticleShape.apply(MenuAction::Increase, &mut state);
        assert_eq!(state.reticle_shape, ReticleShape::Circle);
    }

    #[test]
    fn labels_reflect_state() {
        let state = ConfigState::default();
        assert_eq!(MenuItem::ReticleEnabled.label(&state), "Crosshair: ON");
        assert_eq!(MenuItem::ReticleShape.label(&state), "Crosshair Shape: Plus");
        assert_eq!(MenuItem::ColorG.label(&state), "Color G: 160");
        assert_eq!(MenuItem::Scope.label(&state), "Scope Overlay: OFF");
        assert_eq!(MenuItem::ScopeOffsetY.label(&state), "Scope Offset Y: 0");
    }

    #[test]
    fn rows_at_a_bound_do_not_respond() {
        let mut state = ConfigState {
            scope_radius: 300,
            color_b: 255,
            reticle_gap: 0,
            ..ConfigState::default()
        };
        assert_eq!(MenuItem::ScopeRadius.apply(MenuAction::Increase, &mut state), None);
        assert_eq!(MenuItem::ColorB.apply(MenuAction::Increase, &mut state), None);
        assert_eq!(MenuItem::ReticleGap.apply(MenuAction::Decrease, &mut state), None);
        assert_eq!(
            MenuItem::ScopeRadius.apply(MenuAction::Decrease, &mut state),
            Some(ActionClass::Step)
        );
        assert_eq!(state.scope_radius, 295);
    }
}
