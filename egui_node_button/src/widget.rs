//! Main node widget.

use egui::{self, Rect, Sense};

use crate::interactions::{on_mouse_down, on_mouse_up, ButtonResponse};
use crate::node_rendering::{draw_node_chrome, draw_pins, draw_run_button, layout_node};
use crate::state::RunButtonState;
use crate::theme::NodeButtonTheme;
use crate::types::NodeButtonDisplay;

/// What one frame of the widget reported back to the host.
pub struct NodeButtonOutput {
    /// The button was released this frame; the host should re-solve the node.
    pub rerun_requested: bool,
    /// Button visual state after this frame's input.
    pub activated: bool,
    pub node_rect: Rect,
    pub button_rect: Rect,
}

pub struct RunButtonNode<'a> {
    state: &'a mut RunButtonState,
    theme: &'a NodeButtonTheme,
}

impl<'a> RunButtonNode<'a> {
    pub fn new(state: &'a mut RunButtonState, theme: &'a NodeButtonTheme) -> Self {
        Self { state, theme }
    }

    /// Show the node. Clicks outside the button rectangle fall through to
    /// the host's default canvas behavior (selection, dragging).
    pub fn show(&mut self, ui: &mut egui::Ui, display: &NodeButtonDisplay) -> NodeButtonOutput {
        let id = display.id;
        ui.push_id(id, |ui| self.show_inner(ui, display)).inner
    }

    fn show_inner(&mut self, ui: &mut egui::Ui, display: &NodeButtonDisplay) -> NodeButtonOutput {
        let provisional = layout_node(
            egui::Pos2::ZERO,
            display.inputs.len(),
            display.outputs.len(),
            self.theme,
        );
        let (response, painter) =
            ui.allocate_painter(provisional.node_rect.size(), Sense::click_and_drag());
        let layout = layout_node(
            response.rect.min,
            display.inputs.len(),
            display.outputs.len(),
            self.theme,
        );

        // Input is handled before painting so this frame already shows the
        // new button state.
        let mut rerun_requested = false;
        let pressed = ui.input(|i| i.pointer.primary_pressed());
        let released = ui.input(|i| i.pointer.primary_released());
        let pointer = ui.input(|i| i.pointer.interact_pos());
        if let Some(pos) = pointer {
            if pressed
                && on_mouse_down(self.state, layout.button_rect, pos) == ButtonResponse::Captured
            {
                ui.ctx().request_repaint();
            }
            if released
                && on_mouse_up(self.state, layout.button_rect, pos) == ButtonResponse::Released
            {
                rerun_requested = true;
                ui.ctx().request_repaint();
            }
        }

        draw_node_chrome(&painter, &layout, self.theme, &display.title);
        draw_pins(&painter, &layout, self.theme, &display.inputs, &display.outputs);
        draw_run_button(
            &painter,
            &layout,
            self.theme,
            self.state.activated,
            &display.button_label,
        );

        NodeButtonOutput {
            rerun_requested,
            activated: self.state.activated,
            node_rect: layout.node_rect,
            button_rect: layout.button_rect,
        }
    }
}
