use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

/// Framed section with a heading, used for each search term
pub struct Card {
    heading: Option<String>,
    notice: Option<String>,
}

impl Default for Card {
    fn default() -> Self {
        Self::new()
    }
}

impl Card {
    pub fn new() -> Self {
        Self {
            heading: None,
            notice: None,
        }
    }

    pub fn heading(mut self, heading: impl Into<String>) -> Self {
        self.heading = Some(heading.into());
        self
    }

    /// Replace the contents with a single highlighted line.
    pub fn notice(mut self, notice: Option<impl Into<String>>) -> Self {
        self.notice = notice.map(Into::into);
        self
    }

    pub fn show<R>(
        self,
        ui: &mut egui::Ui,
        add_contents: impl FnOnce(&mut egui::Ui) -> R,
    ) -> egui::InnerResponse<Option<R>> {
        DesignSystem::card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());

            if let Some(heading) = self.heading {
                ui.label(
                    egui::RichText::new(heading)
                        .size(20.0)
                        .color(DesignSystem::TEXT_PRIMARY)
                        .strong(),
                );
                ui.add_space(DesignSystem::SPACING_SMALL);
            }

            match self.notice {
                Some(notice) => {
                    ui.label(
                        egui::RichText::new(notice)
                            .size(16.0)
                            .strong()
                            .color(DesignSystem::WARNING),
                    );
                    None
                }
                None => Some(add_contents(ui)),
            }
        })
    }
}
