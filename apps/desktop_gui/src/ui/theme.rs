use eframe::egui::{self, Color32};
use shared::domain::VisualState;

pub const ACCENT: Color32 = Color32::from_rgb(37, 99, 235);
pub const MUTED_TEXT: Color32 = Color32::from_rgb(107, 114, 128);
pub const CODE_BACKGROUND: Color32 = Color32::from_rgb(17, 24, 39);
pub const CODE_TEXT: Color32 = Color32::from_rgb(229, 231, 235);
pub const CODE_HIGHLIGHT: Color32 = Color32::from_rgba_premultiplied(64, 64, 0, 64);
pub const ERROR_TEXT: Color32 = Color32::from_rgb(220, 38, 38);

pub fn bar_color(state: VisualState) -> Color32 {
    match state {
        VisualState::Default => Color32::from_rgb(59, 130, 246),
        VisualState::Comparing => Color32::from_rgb(250, 204, 21),
        VisualState::Swapping => Color32::from_rgb(239, 68, 68),
        VisualState::Overwriting => Color32::from_rgb(249, 115, 22),
        VisualState::Pivot => Color32::from_rgb(168, 85, 247),
        VisualState::HighlightedMin => Color32::from_rgb(236, 72, 153),
        VisualState::HighlightedCurrent => Color32::from_rgb(20, 184, 166),
        VisualState::Sorted => Color32::from_rgb(34, 197, 94),
        VisualState::Found => Color32::from_rgb(22, 163, 74),
        VisualState::Discarded => Color32::from_rgb(156, 163, 175),
    }
}

pub fn state_label(state: VisualState) -> &'static str {
    match state {
        VisualState::Default => "Unsorted",
        VisualState::Comparing => "Comparing",
        VisualState::Swapping => "Swapping",
        VisualState::Overwriting => "Writing",
        VisualState::Pivot => "Pivot",
        VisualState::HighlightedMin => "Minimum",
        VisualState::HighlightedCurrent => "Current",
        VisualState::Sorted => "Sorted",
        VisualState::Found => "Found",
        VisualState::Discarded => "Discarded",
    }
}

pub fn apply(ctx: &egui::Context) {
    ctx.set_visuals(egui::Visuals::light());
}
