use crate::model::Stage;
use crate::ui::UserAction;
use crate::ui::helpers::{EMERALD, big_button};
use crate::ui::layout::centered_panel;
use egui::{Context, RichText};

pub fn ui_intro(ctx: &Context) -> Option<UserAction> {
    let mut action = None;

    centered_panel(ctx, 360.0, 620.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("📖").size(56.0));
            ui.add_space(8.0);
            ui.heading(RichText::new(Stage::Intro.title()).size(40.0).strong());
            ui.label(
                RichText::new("ESL MYSTERY CLASS")
                    .monospace()
                    .strong()
                    .color(EMERALD),
            );
            ui.add_space(18.0);
            ui.label("Join Dipper, Mabel, Wendy, and Soos!");
            ui.label(
                "We will learn new vocabulary, check your understanding of the episode, \
                 and practice English grammar.",
            );
            ui.add_space(12.0);
            ui.horizontal(|ui| {
                ui.label(RichText::new("🧠 Level A1+ / A2").strong());
                ui.add_space(16.0);
                ui.label(RichText::new("🔄 ~45 Minutes").strong());
            });
            ui.add_space(24.0);

            if big_button(ui, "Start The Adventure", 280.0, 44.0) {
                action = Some(UserAction::Start);
            }
        });
    });

    action
}
