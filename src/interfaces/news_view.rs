use crate::application::aggregator::{NO_ARTICLES_NOTICE, TermResults};
use crate::application::client::{ClientEvent, SearchClient};
use crate::application::worker::SearchEvent;
use crate::domain::preferences::{ResultCount, SearchRequest};
use crate::interfaces::article_view::render_article;
use crate::interfaces::components::card::Card;
use crate::interfaces::components::status::render_status_pill;
use crate::interfaces::design_system::DesignSystem;
use eframe::egui;
use std::collections::VecDeque;
use std::time::Duration;
use tracing::{error, info};

const MAX_LOG_LINES: usize = 500;

enum TermState {
    Queued,
    Loading,
    Done(TermResults),
}

struct TermSection {
    term: String,
    state: TermState,
}

/// Desktop front end: preference input, search settings and results.
pub struct NewsDeskApp {
    client: SearchClient,
    preferences: String,
    verified_only: bool,
    count: u8,
    verified_sources_hint: String,
    sections: Vec<TermSection>,
    generation: u64,
    searching: bool,
    logs: VecDeque<String>,
}

impl NewsDeskApp {
    pub fn new(client: SearchClient, default_count: ResultCount, verified_sources: &[String]) -> Self {
        Self {
            client,
            preferences: String::new(),
            verified_only: false,
            count: default_count.get() as u8,
            verified_sources_hint: format!(
                "Only search these sources: {}",
                verified_sources.join(", ")
            ),
            sections: Vec::new(),
            generation: 0,
            searching: false,
            logs: VecDeque::new(),
        }
    }

    fn drain_events(&mut self) {
        while let Some(event) = self.client.poll_next() {
            match event {
                ClientEvent::Log(line) => {
                    self.logs.push_back(line);
                    if self.logs.len() > MAX_LOG_LINES {
                        self.logs.pop_front();
                    }
                }
                ClientEvent::Search(event) if event.generation() == self.generation => {
                    self.apply(event)
                }
                ClientEvent::Search(_) => {}
            }
        }
    }

    fn apply(&mut self, event: SearchEvent) {
        match event {
            SearchEvent::TermStarted { index, .. } => {
                if let Some(section) = self.sections.get_mut(index) {
                    section.state = TermState::Loading;
                }
            }
            SearchEvent::TermCompleted { index, results, .. } => {
                if let Some(section) = self.sections.get_mut(index) {
                    section.state = TermState::Done(results);
                }
            }
            SearchEvent::SearchFinished { .. } => self.searching = false,
        }
    }

    fn submit(&mut self) {
        let request = SearchRequest::from_input(
            &self.preferences,
            self.verified_only,
            ResultCount::clamped(self.count as i64),
        );

        if request.is_empty() {
            self.sections.clear();
            self.searching = false;
            return;
        }

        let sections = request
            .terms
            .iter()
            .map(|term| TermSection {
                term: term.clone(),
                state: TermState::Queued,
            })
            .collect();

        match self.client.submit(request) {
            Ok(generation) => {
                info!("Submitted search #{}", generation);
                self.generation = generation;
                self.sections = sections;
                self.searching = true;
            }
            Err(e) => error!("{}", e),
        }
    }

    fn render_controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Preferences");
            let response = ui.add(
                egui::TextEdit::singleline(&mut self.preferences)
                    .hint_text("e.g. climate, space, elections")
                    .desired_width(360.0),
            );
            let entered =
                response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

            ui.checkbox(&mut self.verified_only, "Verified sources only")
                .on_hover_text(self.verified_sources_hint.as_str());

            ui.menu_button("Search Settings", |ui| {
                ui.label("Results per preference");
                ui.add(egui::DragValue::new(&mut self.count).range(ResultCount::MIN..=ResultCount::MAX));
                ui.separator();
                if ui.button("Clear cached results").clicked() {
                    if let Err(e) = self.client.clear_cache() {
                        error!("{}", e);
                    }
                }
            });

            if ui.button("Search").clicked() || entered {
                self.submit();
            }

            if self.searching {
                ui.spinner();
            }
        });
    }

    fn render_results(&self, ui: &mut egui::Ui) {
        for (term_index, section) in self.sections.iter().enumerate() {
            let heading = format!("News Articles with {}", section.term);

            match &section.state {
                TermState::Queued | TermState::Loading => {
                    Card::new().heading(heading).notice(None::<String>).show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.spinner();
                            let status = match section.state {
                                TermState::Queued => "Waiting...",
                                _ => "Fetching articles...",
                            };
                            ui.label(egui::RichText::new(status).color(DesignSystem::TEXT_MUTED));
                        });
                    });
                }
                TermState::Done(results) => {
                    let notice = results.is_empty().then_some(NO_ARTICLES_NOTICE);
                    Card::new().heading(results.heading()).notice(notice).show(ui, |ui| {
                        if results.from_cache {
                            render_status_pill(ui, "cached", DesignSystem::INFO);
                        }
                        for (article_index, report) in results.reports.iter().enumerate() {
                            render_article(
                                ui,
                                (self.generation, term_index, article_index),
                                report,
                            );
                        }
                    });
                    if let Some(failure) = &results.failure {
                        ui.label(
                            egui::RichText::new(failure)
                                .small()
                                .color(DesignSystem::DANGER),
                        )
                        .on_hover_text("The search failed; showing no articles for this term");
                    }
                }
            }

            ui.add_space(DesignSystem::SPACING_SMALL);
            ui.separator();
        }
    }

    fn render_logs(&self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Logs")
            .default_open(false)
            .show(ui, |ui| {
                egui::ScrollArea::vertical()
                    .id_salt("log_scroll")
                    .max_height(160.0)
                    .auto_shrink([false, true])
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        for line in &self.logs {
                            let color = if line.contains("ERROR") {
                                DesignSystem::DANGER
                            } else if line.contains("WARN") {
                                DesignSystem::WARNING
                            } else {
                                DesignSystem::TEXT_SECONDARY
                            };
                            ui.label(egui::RichText::new(line.trim_end()).monospace().color(color));
                        }
                    });
            });
    }
}

impl eframe::App for NewsDeskApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_events();

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.add_space(DesignSystem::SPACING_SMALL);
            ui.heading("Newsdesk");
            self.render_controls(ui);
            ui.add_space(DesignSystem::SPACING_SMALL);
        });

        egui::TopBottomPanel::bottom("logs")
            .resizable(true)
            .show(ctx, |ui| self.render_logs(ui));

        egui::CentralPanel::default()
            .frame(DesignSystem::main_frame())
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| self.render_results(ui));
            });

        let poll = if self.searching {
            Duration::from_millis(50)
        } else {
            Duration::from_millis(500)
        };
        ctx.request_repaint_after(poll);
    }
}

impl Drop for NewsDeskApp {
    fn drop(&mut self) {
        if let Err(e) = self.client.shutdown() {
            error!("{}", e);
        }
    }
}
