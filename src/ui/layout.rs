use crate::model::Stage;
use egui::{CentralPanel, Color32, Context, Frame, RichText, Ui, Visuals};

pub fn top_panel(score: u32, ctx: &Context) {
    egui::TopBottomPanel::top("header_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            ui.label(
                RichText::new("GF")
                    .strong()
                    .color(Color32::WHITE)
                    .background_color(Color32::from_rgb(5, 150, 105)),
            );
            ui.label(RichText::new("ESL Learning Hub").strong());

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(RichText::new(format!("⭐ {score} pts")).strong());
            });
        });
    });
}

pub fn bottom_panel(ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        // ----------- THEME BUTTONS -----------
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("🌙 Dark mode").clicked() {
                ctx.set_visuals(Visuals::dark());
            }
            if ui.button("☀ Light mode").clicked() {
                ctx.set_visuals(Visuals::light());
            }
        });
    });
}

/// Panel centred both ways, content capped at `max_width`.
pub fn centered_panel(ctx: &Context, est_height: f32, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        let extra = ((ui.available_height() - est_height) / 2.0).max(0.0);
        ui.add_space(extra);
        ui.vertical_centered(|ui| {
            Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(16, 16))
                .show(ui, |ui| {
                    let w = ui.available_width().min(max_width);
                    ui.set_width(w);
                    inner(ui);
                });
        });
        ui.add_space(extra);
    });
}

/// Drawn if the current index has no item behind it.
pub fn loading_panel(ctx: &Context, stage: Stage) {
    log::debug!("no item to draw for {stage}");
    centered_panel(ctx, 60.0, 400.0, |ui| {
        ui.label(RichText::new(format!("Loading {}...", stage.title())).weak());
    });
}
