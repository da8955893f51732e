// src/ui/helpers.rs
use crate::view_models::{OptionState, OptionView, StageProgress};
use egui::{Button, Color32, Frame, ProgressBar, RichText, Ui, Vec2};

pub const EMERALD: Color32 = Color32::from_rgb(16, 185, 129);
pub const RED: Color32 = Color32::from_rgb(220, 38, 38);
pub const PURPLE: Color32 = Color32::from_rgb(147, 51, 234);
pub const BLUE: Color32 = Color32::from_rgb(59, 130, 246);

pub fn big_button(ui: &mut Ui, label: &str, width: f32, height: f32) -> bool {
    ui.add(Button::new(label).min_size(Vec2::new(width, height)))
        .clicked()
}

/// Title, "Card 2/6" counter and bar above every question card.
pub fn stage_header(ui: &mut Ui, icon: &str, progress: &StageProgress, width: f32) {
    ui.horizontal(|ui| {
        ui.heading(format!("{icon} {}", progress.stage.title()));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(RichText::new(progress.label()).monospace().weak());
        });
    });
    ui.add_space(6.0);
    ui.add(
        ProgressBar::new(progress.fraction())
            .desired_width(width)
            .fill(EMERALD),
    );
    ui.add_space(12.0);
}

/// Option button coloured by its state; only clickable while open.
pub fn option_button(ui: &mut Ui, option: &OptionView, label: String, width: f32) -> bool {
    let text = RichText::new(label);
    let button = match option.state {
        OptionState::Open => Button::new(text),
        OptionState::Correct => Button::new(text.color(Color32::WHITE).strong()).fill(EMERALD),
        OptionState::WrongPick => Button::new(text.color(Color32::WHITE)).fill(RED),
        OptionState::Dimmed => Button::new(text.weak()),
    };
    ui.add_enabled(option.enabled(), button.min_size(Vec2::new(width, 36.0)))
        .clicked()
}

/// Coloured box with a bold title and a body line.
pub fn feedback_box(ui: &mut Ui, accent: Color32, title: &str, body: &str) {
    Frame::default()
        .stroke(egui::Stroke::new(2.0, accent))
        .inner_margin(egui::Margin::symmetric(12, 10))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(title).strong().color(accent));
            ui.label(body);
        });
}
