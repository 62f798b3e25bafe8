//! Mouse interaction handling for the run button, separate from painting so
//! it can be exercised without a GUI context.

use egui::{Pos2, Rect};

use crate::state::RunButtonState;

/// Outcome of feeding a mouse event to the button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonResponse {
    /// The event landed outside the button; default widget behavior applies.
    Ignored,
    /// Mouse-down landed on the button; the widget captures the pointer.
    Captured,
    /// Mouse-up landed on the button; the owner should re-run and release
    /// the pointer.
    Released,
}

/// Primary-button press at `pos`.
pub fn on_mouse_down(state: &mut RunButtonState, button_rect: Rect, pos: Pos2) -> ButtonResponse {
    if !button_rect.contains(pos) {
        return ButtonResponse::Ignored;
    }
    state.activated = true;
    ButtonResponse::Captured
}

/// Primary-button release at `pos`.
pub fn on_mouse_up(state: &mut RunButtonState, button_rect: Rect, pos: Pos2) -> ButtonResponse {
    if !button_rect.contains(pos) {
        return ButtonResponse::Ignored;
    }
    state.activated = false;
    ButtonResponse::Released
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::vec2;

    fn button_rect() -> Rect {
        Rect::from_min_size(Pos2::new(10.0, 100.0), vec2(80.0, 18.0))
    }

    #[test]
    fn down_inside_activates_and_captures() {
        let mut state = RunButtonState::default();
        let inside = Pos2::new(50.0, 110.0);

        let response = on_mouse_down(&mut state, button_rect(), inside);

        assert_eq!(response, ButtonResponse::Captured);
        assert!(state.activated);
    }

    #[test]
    fn up_inside_deactivates_and_releases() {
        let mut state = RunButtonState { activated: true };
        let inside = Pos2::new(50.0, 110.0);

        let response = on_mouse_up(&mut state, button_rect(), inside);

        assert_eq!(response, ButtonResponse::Released);
        assert!(!state.activated);
    }

    #[test]
    fn full_click_cycle_toggles_through_activated() {
        let mut state = RunButtonState::default();
        let inside = Pos2::new(12.0, 101.0);

        assert_eq!(
            on_mouse_down(&mut state, button_rect(), inside),
            ButtonResponse::Captured
        );
        assert!(state.activated);
        assert_eq!(
            on_mouse_up(&mut state, button_rect(), inside),
            ButtonResponse::Released
        );
        assert!(!state.activated);
    }

    #[test]
    fn events_outside_never_change_state() {
        let mut state = RunButtonState::default();
        let outside = Pos2::new(50.0, 60.0);

        assert_eq!(
            on_mouse_down(&mut state, button_rect(), outside),
            ButtonResponse::Ignored
        );
        assert!(!state.activated);

        state.activated = true;
        assert_eq!(
            on_mouse_up(&mut state, button_rect(), outside),
            ButtonResponse::Ignored
        );
        assert!(state.activated);
    }
}
