use crate::model::{Rank, Stage};
use crate::ui::UserAction;
use crate::ui::helpers::{EMERALD, big_button};
use crate::ui::layout::centered_panel;
use egui::{Color32, Context, RichText};

pub fn ui_summary(score: u32, rank: Rank, ctx: &Context) -> Option<UserAction> {
    let mut action = None;

    centered_panel(ctx, 440.0, 440.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new(format!("⭐ {score}"))
                    .size(48.0)
                    .strong()
                    .color(Color32::from_rgb(234, 179, 8)),
            );
            ui.add_space(8.0);
            ui.heading(RichText::new(Stage::Summary.title()).size(32.0).strong());
            ui.add_space(16.0);

            ui.label(RichText::new("YOUR RANK").small().strong().weak());
            ui.label(RichText::new(rank.label()).size(28.0).strong().color(EMERALD));
            ui.add_space(16.0);

            ui.label(
                "Great job! You reviewed vocabulary, analyzed the story, \
                 and practiced complex grammar.",
            );
            ui.label(RichText::new("\"Stay curious, stay weird, keep practicing English!\"").italics());
            ui.add_space(24.0);

            if big_button(ui, "⟲ Restart Lesson", 220.0, 40.0) {
                action = Some(UserAction::Restart);
            }
        });
    });

    action
}
