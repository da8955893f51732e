use crate::app::LessonApp;
use crate::model::{ComprehensionQuestion, Feedback};
use crate::ui::UserAction;
use crate::ui::helpers::{EMERALD, RED, big_button, feedback_box, option_button, stage_header};
use crate::ui::layout::centered_panel;
use egui::{Context, RichText};

pub fn ui_story(app: &LessonApp, question: &ComprehensionQuestion, ctx: &Context) -> Option<UserAction> {
    let mut action = None;

    centered_panel(ctx, 520.0, 640.0, |ui| {
        let width = ui.available_width();
        if let Some(progress) = app.stage_progress() {
            stage_header(ui, "📘", &progress, width);
        }

        ui.label(RichText::new(&question.prompt).size(20.0).strong());
        ui.add_space(12.0);

        for option in app.option_views() {
            if option_button(ui, &option, option.lettered(), width) {
                action = Some(UserAction::Choose(option.index));
            }
            ui.add_space(4.0);
        }

        if let Some(feedback) = app.feedback() {
            ui.add_space(12.0);
            ui.separator();
            let (accent, title) = match feedback {
                Feedback::Correct => (EMERALD, "✔ Excellent!"),
                Feedback::Incorrect => (RED, "⚠ Not quite right."),
            };
            feedback_box(ui, accent, title, &question.explanation);
            ui.add_space(10.0);
            if big_button(ui, "Continue ➡", width, 40.0) {
                action = Some(UserAction::Advance);
            }
        }
    });

    action
}
