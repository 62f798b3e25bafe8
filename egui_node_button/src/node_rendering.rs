//! Node layout computation and drawing primitives.

use egui::{self, Align2, Pos2, Rect, Stroke, StrokeKind, Vec2};

use crate::theme::NodeButtonTheme;
use crate::types::PinInfo;

/// Pre-computed layout for a node with a button strip.
pub struct NodeLayout {
    /// Overall bounds, already grown by the button strip.
    pub node_rect: Rect,
    /// The clickable button rectangle, inset inside the strip.
    pub button_rect: Rect,
    pub header_h: f32,
    pub pin_start_y: f32,
    pub pin_row_h: f32,
    pub pin_r: f32,
    pub pin_margin: f32,
    pub rounding: f32,
    pub node_w: f32,
}

/// Compute the node layout at `origin`.
///
/// The node's normal bounds (header plus pin rows) are grown by the strip
/// height first; the button rectangle is the bottom strip inset by the
/// theme's margin on each side.
pub fn layout_node(
    origin: Pos2,
    input_count: usize,
    output_count: usize,
    theme: &NodeButtonTheme,
) -> NodeLayout {
    let rows = input_count.max(output_count) as f32;
    let content_h = theme.header_height + rows * theme.pin_row_height;

    let node_rect = Rect::from_min_size(
        origin,
        Vec2::new(theme.node_width, content_h + theme.button_strip_height),
    );
    let strip = Rect::from_min_max(
        Pos2::new(node_rect.min.x, node_rect.max.y - theme.button_strip_height),
        node_rect.max,
    );
    let button_rect = strip.shrink(theme.button_inset);

    NodeLayout {
        node_rect,
        button_rect,
        header_h: theme.header_height,
        pin_start_y: origin.y + theme.header_height,
        pin_row_h: theme.pin_row_height,
        pin_r: theme.pin_radius,
        pin_margin: theme.pin_margin,
        rounding: theme.node_rounding,
        node_w: theme.node_width,
    }
}

/// Draw the node body and header.
pub(crate) fn draw_node_chrome(
    painter: &egui::Painter,
    layout: &NodeLayout,
    theme: &NodeButtonTheme,
    title: &str,
) {
    painter.rect_filled(layout.node_rect, layout.rounding, theme.node_body_color);

    let header_rect = Rect::from_min_size(
        layout.node_rect.min,
        Vec2::new(layout.node_w, layout.header_h),
    );
    painter.rect_filled(
        header_rect,
        egui::CornerRadius {
            nw: layout.rounding as u8,
            ne: layout.rounding as u8,
            sw: 0,
            se: 0,
        },
        theme.header_color,
    );
    painter.text(
        header_rect.center(),
        Align2::CENTER_CENTER,
        title,
        egui::FontId::proportional(12.0),
        theme.header_text_color,
    );
}

/// Draw input and output pins.
pub(crate) fn draw_pins(
    painter: &egui::Painter,
    layout: &NodeLayout,
    theme: &NodeButtonTheme,
    input_pins: &[PinInfo],
    output_pins: &[PinInfo],
) {
    for (i, pin) in input_pins.iter().enumerate() {
        let cy = layout.pin_start_y + i as f32 * layout.pin_row_h + layout.pin_row_h / 2.0;
        let p = Pos2::new(layout.node_rect.min.x + layout.pin_margin, cy);
        painter.circle_filled(p, layout.pin_r, theme.pin_color);
        painter.text(
            p + Vec2::new(layout.pin_r + 4.0, 0.0),
            Align2::LEFT_CENTER,
            &pin.display_name,
            egui::FontId::proportional(10.0),
            theme.pin_label_color,
        );
    }

    for (i, pin) in output_pins.iter().enumerate() {
        let cy = layout.pin_start_y + i as f32 * layout.pin_row_h + layout.pin_row_h / 2.0;
        let p = Pos2::new(
            layout.node_rect.min.x + layout.node_w - layout.pin_margin,
            cy,
        );
        painter.circle_filled(p, layout.pin_r, theme.pin_color);
        painter.text(
            p + Vec2::new(-layout.pin_r - 4.0, 0.0),
            Align2::RIGHT_CENTER,
            &pin.display_name,
            egui::FontId::proportional(10.0),
            theme.pin_label_color,
        );
    }
}

/// Draw the button capsule with the palette for the current state.
pub(crate) fn draw_run_button(
    painter: &egui::Painter,
    layout: &NodeLayout,
    theme: &NodeButtonTheme,
    activated: bool,
    label: &str,
) {
    let (fill, outline, text) = if activated {
        (
            theme.button_active_fill,
            theme.button_active_outline,
            theme.button_active_text,
        )
    } else {
        (
            theme.button_idle_fill,
            theme.button_idle_outline,
            theme.button_idle_text,
        )
    };

    painter.rect_filled(layout.button_rect, theme.button_rounding, fill);
    painter.rect_stroke(
        layout.button_rect,
        theme.button_rounding,
        Stroke::new(1.0, outline),
        StrokeKind::Inside,
    );
    painter.text(
        layout.button_rect.center(),
        Align2::CENTER_CENTER,
        label,
        egui::FontId::proportional(11.0),
        text,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_grown_by_the_strip_height() {
        let theme = NodeButtonTheme::default();
        let layout = layout_node(Pos2::new(10.0, 20.0), 1, 4, &theme);

        let content_h = theme.header_height + 4.0 * theme.pin_row_height;
        assert_eq!(
            layout.node_rect.height(),
            content_h + theme.button_strip_height
        );
        assert_eq!(layout.node_rect.width(), theme.node_width);
    }

    #[test]
    fn button_rect_is_the_inset_bottom_strip() {
        let theme = NodeButtonTheme::default();
        let layout = layout_node(Pos2::new(0.0, 0.0), 1, 1, &theme);

        let strip_top = layout.node_rect.max.y - theme.button_strip_height;
        assert_eq!(layout.button_rect.min.y, strip_top + theme.button_inset);
        assert_eq!(
            layout.button_rect.max.y,
            layout.node_rect.max.y - theme.button_inset
        );
        assert_eq!(
            layout.button_rect.min.x,
            layout.node_rect.min.x + theme.button_inset
        );
        assert_eq!(
            layout.button_rect.max.x,
            layout.node_rect.max.x - theme.button_inset
        );
        assert!(layout.button_rect.height() > 0.0);
    }
}
