use crate::app::LessonApp;
use crate::model::VocabularyItem;
use crate::ui::UserAction;
use crate::ui::helpers::{EMERALD, big_button, feedback_box, stage_header};
use crate::ui::layout::centered_panel;
use egui::{Context, RichText};

pub fn ui_vocabulary(app: &LessonApp, item: &VocabularyItem, ctx: &Context) -> Option<UserAction> {
    let mut action = None;
    let max_width = 620.0;

    centered_panel(ctx, 420.0, max_width, |ui| {
        let width = ui.available_width();
        if let Some(progress) = app.stage_progress() {
            stage_header(ui, "📍", &progress, width);
        }

        ui.vertical_centered(|ui| {
            ui.label(RichText::new(&item.word).size(36.0).strong());
            ui.label(RichText::new(item.part_of_speech.to_uppercase()).small().weak());
            ui.add_space(18.0);

            if !app.is_answered() {
                ui.label(RichText::new("Do you know this word?").italics());
                ui.add_space(10.0);
                if big_button(ui, "Reveal Meaning", 240.0, 40.0) {
                    action = Some(UserAction::Reveal);
                }
            } else {
                feedback_box(ui, EMERALD, "Meaning", &item.definition);
                ui.add_space(8.0);
                ui.label(RichText::new(format!("\"{}\"", item.example)).italics());
                ui.add_space(16.0);
                let width = ui.available_width();
                if big_button(ui, "Next Word ➡", width, 40.0) {
                    action = Some(UserAction::Advance);
                }
            }
        });
    });

    action
}
