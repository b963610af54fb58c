use crate::domain::sentiment::SentimentOutcome;
use eframe::egui::{self, Color32};

/// Colors and frames for the reading view
pub struct DesignSystem;

impl DesignSystem {
    // Page and section surfaces
    const PAGE: Color32 = Color32::from_rgb(18, 20, 24);
    const SECTION: Color32 = Color32::from_rgb(28, 31, 37);
    const RULE: Color32 = Color32::from_rgb(52, 57, 66);
    const LINK: Color32 = Color32::from_rgb(110, 168, 254);

    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(232, 234, 237);
    pub const TEXT_SECONDARY: Color32 = Color32::from_gray(168);
    pub const TEXT_MUTED: Color32 = Color32::from_gray(112);

    /// Notices and failure lines
    pub const WARNING: Color32 = Color32::from_rgb(255, 167, 38);
    pub const DANGER: Color32 = Color32::from_rgb(239, 83, 80);
    pub const INFO: Color32 = Color32::from_rgb(79, 195, 247);

    /// Matplotlib's default bar blue
    pub const BAR_FILL: Color32 = Color32::from_rgb(31, 119, 180);

    pub const SPACING_SMALL: f32 = 8.0;

    pub fn theme() -> egui::Visuals {
        let mut visuals = egui::Visuals::dark();
        visuals.panel_fill = Self::PAGE;
        visuals.window_fill = Self::SECTION;
        visuals.hyperlink_color = Self::LINK;
        visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, Self::RULE);
        visuals.widgets.noninteractive.fg_stroke = egui::Stroke::new(1.0, Self::TEXT_PRIMARY);
        visuals.selection.bg_fill = Self::LINK.linear_multiply(0.25);
        visuals
    }

    /// One framed block per preference term.
    pub fn card_frame() -> egui::Frame {
        egui::Frame::NONE
            .fill(Self::SECTION)
            .corner_radius(6.0)
            .stroke(egui::Stroke::new(1.0, Self::RULE))
            .inner_margin(egui::Margin::same(14))
    }

    pub fn main_frame() -> egui::Frame {
        egui::Frame::NONE
            .fill(Self::PAGE)
            .inner_margin(egui::Margin::symmetric(24, 16))
    }

    /// Green, red or gray; failures and empty outcomes use the neutral gray.
    pub fn sentiment_color(outcome: &SentimentOutcome) -> Color32 {
        Color32::from_hex(outcome.color_hex()).unwrap_or(Self::TEXT_SECONDARY)
    }
}
