use crate::application::enrichment::ArticleReport;
use crate::domain::article::MISSING_URL;
use crate::domain::entities::EntityOutcome;
use crate::interfaces::components::entity_chart::render_entity_chart;
use crate::interfaces::components::word_cloud::render_word_cloud;
use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

/// Collapsible section for one article.
pub fn render_article(ui: &mut egui::Ui, id: impl std::hash::Hash + Copy, report: &ArticleReport) {
    let article = &report.article;

    egui::CollapsingHeader::new(article.section_label())
        .id_salt(("article", id))
        .show(ui, |ui| {
            ui.label(
                egui::RichText::new(article.display_title())
                    .size(18.0)
                    .strong()
                    .color(DesignSystem::TEXT_PRIMARY),
            );
            ui.label(egui::RichText::new(report.byline()).color(DesignSystem::TEXT_SECONDARY));
            ui.label(egui::RichText::new(report.published_line()).color(DesignSystem::TEXT_SECONDARY));

            match article.url.as_deref().filter(|u| !u.is_empty()) {
                Some(url) => {
                    ui.hyperlink_to("Read Article", url);
                }
                None => {
                    ui.label(MISSING_URL);
                }
            }

            ui.add_space(DesignSystem::SPACING_SMALL);
            ui.label(
                egui::RichText::new(report.sentiment_line())
                    .strong()
                    .color(DesignSystem::sentiment_color(&report.sentiment)),
            );
            if let Some(reason) = report.sentiment.failure_reason() {
                ui.label(
                    egui::RichText::new(format!("(scoring failed: {})", reason))
                        .small()
                        .color(DesignSystem::TEXT_MUTED),
                );
            }

            ui.add_space(DesignSystem::SPACING_SMALL);
            render_word_cloud(ui, &report.word_cloud);

            ui.add_space(DesignSystem::SPACING_SMALL);
            match &report.entities {
                EntityOutcome::Skipped => {}
                EntityOutcome::NoEntities => {
                    ui.label(EntityOutcome::NO_ENTITIES_NOTICE);
                }
                EntityOutcome::Chart(counts) => render_entity_chart(ui, id, counts),
            }
        });
}
