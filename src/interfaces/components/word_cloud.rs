use crate::domain::word_cloud::{DISPLAY_WIDTH, WordCloud};
use eframe::egui;
use egui::epaint::TextShape;
use std::f32::consts::FRAC_PI_2;

fn rgb(color: [u8; 3]) -> egui::Color32 {
    egui::Color32::from_rgb(color[0], color[1], color[2])
}

/// Paint a laid-out cloud scaled down to the fixed display width.
pub fn render_word_cloud(ui: &mut egui::Ui, cloud: &WordCloud) {
    let scale = DISPLAY_WIDTH / cloud.width.max(1) as f32;
    let size = egui::vec2(DISPLAY_WIDTH, cloud.height as f32 * scale);
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::hover());

    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 0.0, rgb(cloud.background));

    for word in &cloud.words {
        let font = egui::FontId::proportional(word.font_size * scale);
        let color = rgb(word.color);
        let galley = painter.layout_no_wrap(word.text.clone(), font, color);

        if word.vertical {
            // Rotating about the anchor turns the baseline upwards from the box's bottom-left
            let anchor = rect.min + egui::vec2(word.x, word.y + word.height) * scale;
            painter.add(TextShape::new(anchor, galley, color).with_angle(-FRAC_PI_2));
        } else {
            let anchor = rect.min + egui::vec2(word.x, word.y) * scale;
            painter.galley(anchor, galley, color);
        }
    }

    if !cloud.is_empty() {
        response.on_hover_text(cloud.top_words(10).join(", "));
    }
}
