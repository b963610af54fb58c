use crate::domain::entities::EntityCount;
use crate::interfaces::design_system::DesignSystem;
use eframe::egui;
use egui_plot::{Bar, BarChart, GridInput, GridMark, Plot};

pub const CHART_TITLE: &str = "Top Entities";
pub const CHART_WIDTH: f32 = 400.0;
pub const CHART_HEIGHT: f32 = 200.0;

/// One mark per whole number inside the visible range.
fn integer_marks(input: GridInput) -> Vec<GridMark> {
    let (min, max) = input.bounds;
    let start = min.ceil().max(0.0) as i64;
    let end = max.floor() as i64;
    (start..=end)
        .map(|v| GridMark {
            value: v as f64,
            step_size: 1.0,
        })
        .collect()
}

/// Horizontal bars, most frequent entity at the top.
pub fn render_entity_chart(ui: &mut egui::Ui, id: impl std::hash::Hash, counts: &[EntityCount]) {
    ui.label(
        egui::RichText::new(CHART_TITLE)
            .strong()
            .color(DesignSystem::TEXT_PRIMARY),
    );

    let rows = counts.len();
    let max_count = counts.iter().map(|c| c.count).max().unwrap_or(0) as f64;

    // Row 0 is drawn at the highest y position
    let bars: Vec<Bar> = counts
        .iter()
        .enumerate()
        .map(|(i, c)| {
            Bar::new((rows - 1 - i) as f64, c.count as f64)
                .name(&c.text)
                .width(0.6)
                .fill(DesignSystem::BAR_FILL)
        })
        .collect();

    let labels: Vec<String> = counts.iter().rev().map(|c| c.text.clone()).collect();

    Plot::new(egui::Id::new(("entity_chart", id)))
        .width(CHART_WIDTH)
        .height(CHART_HEIGHT)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show_x(false)
        .show_y(false)
        .x_axis_label("Frequency")
        .include_x(0.0)
        .include_x(max_count + 0.5)
        .include_y(-0.5)
        .include_y(rows as f64 - 0.5)
        .x_grid_spacer(integer_marks)
        .y_grid_spacer(integer_marks)
        .y_axis_formatter(move |mark, _range| {
            let index = mark.value.round();
            if (mark.value - index).abs() > f64::EPSILON || index < 0.0 {
                return String::new();
            }
            labels.get(index as usize).cloned().unwrap_or_default()
        })
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(CHART_TITLE, bars).horizontal());
        });
}
