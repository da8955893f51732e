use crate::app::LessonApp;
use crate::model::GrammarExercise;
use crate::ui::UserAction;
use crate::ui::helpers::{BLUE, PURPLE, big_button, feedback_box, option_button, stage_header};
use crate::ui::layout::centered_panel;
use egui::{Context, RichText};

pub fn ui_grammar(app: &LessonApp, exercise: &GrammarExercise, ctx: &Context) -> Option<UserAction> {
    let mut action = None;

    centered_panel(ctx, 500.0, 640.0, |ui| {
        let width = ui.available_width();
        if let Some(progress) = app.stage_progress() {
            stage_header(ui, "🧠", &progress, width);
        }

        ui.label(
            RichText::new(exercise.topic.to_uppercase())
                .small()
                .strong()
                .color(PURPLE),
        );
        ui.label(RichText::new(format!("💬 {}", exercise.instruction)).weak());
        ui.add_space(12.0);

        // sentence with the gap filled by the current pick
        if let Some(sentence) = app.sentence_view() {
            ui.horizontal_wrapped(|ui| {
                ui.label(RichText::new(&sentence.before).size(18.0));
                ui.label(
                    RichText::new(format!(" {} ", sentence.gap))
                        .size(18.0)
                        .strong()
                        .underline()
                        .color(BLUE),
                );
                ui.label(RichText::new(&sentence.after).size(18.0));
            });
        }
        ui.add_space(16.0);

        let options = app.option_views();
        let button_w = if options.is_empty() {
            width
        } else {
            (width - 8.0 * (options.len() as f32 - 1.0)) / options.len() as f32
        };
        ui.horizontal(|ui| {
            for option in &options {
                if option_button(ui, option, option.text.clone(), button_w) {
                    action = Some(UserAction::Choose(option.index));
                }
            }
        });

        if app.is_answered() {
            ui.add_space(14.0);
            feedback_box(ui, BLUE, "GRAMMAR TIP:", &exercise.explanation);
            ui.add_space(10.0);
            if big_button(ui, "Next Challenge ➡", width, 40.0) {
                action = Some(UserAction::Advance);
            }
        }
    });

    action
}
