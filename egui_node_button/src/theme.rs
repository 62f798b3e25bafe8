//! Theming for the node widget.

use egui::Color32;

/// Theme configuration for the node widget.
pub struct NodeButtonTheme {
    /// Node width in pixels.
    pub node_width: f32,
    /// Header height in pixels.
    pub header_height: f32,
    /// Pin row height in pixels.
    pub pin_row_height: f32,
    /// Pin circle radius.
    pub pin_radius: f32,
    /// Pin margin from node edge.
    pub pin_margin: f32,
    /// Corner rounding for the node body.
    pub node_rounding: f32,
    /// Height of the button strip grown under the node body.
    pub button_strip_height: f32,
    /// Inset of the button rectangle inside the strip, per side.
    pub button_inset: f32,
    /// Corner rounding for the button capsule.
    pub button_rounding: f32,
    /// Node body color.
    pub node_body_color: Color32,
    /// Header color.
    pub header_color: Color32,
    /// Header text color.
    pub header_text_color: Color32,
    /// Pin circle color.
    pub pin_color: Color32,
    /// Pin label color.
    pub pin_label_color: Color32,
    /// Button fill while idle.
    pub button_idle_fill: Color32,
    /// Button outline while idle.
    pub button_idle_outline: Color32,
    /// Button label color while idle.
    pub button_idle_text: Color32,
    /// Button fill while activated (mouse held down).
    pub button_active_fill: Color32,
    /// Button outline while activated.
    pub button_active_outline: Color32,
    /// Button label color while activated.
    pub button_active_text: Color32,
}

impl Default for NodeButtonTheme {
    fn default() -> Self {
        Self {
            node_width: 180.0,
            header_height: 24.0,
            pin_row_height: 20.0,
            pin_radius: 5.0,
            pin_margin: 12.0,
            node_rounding: 4.0,
            button_strip_height: 22.0,
            button_inset: 2.0,
            button_rounding: 3.0,
            node_body_color: Color32::from_rgb(45, 45, 50),
            header_color: Color32::from_rgb(60, 80, 60),
            header_text_color: Color32::WHITE,
            pin_color: Color32::from_rgb(150, 150, 150),
            pin_label_color: Color32::from_rgb(200, 200, 200),
            button_idle_fill: Color32::from_rgb(35, 35, 35),
            button_idle_outline: Color32::from_rgb(10, 10, 10),
            button_idle_text: Color32::WHITE,
            button_active_fill: Color32::from_rgb(120, 120, 120),
            button_active_outline: Color32::from_rgb(70, 70, 70),
            button_active_text: Color32::from_rgb(20, 20, 20),
        }
    }
}
