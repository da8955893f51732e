mod helpers;
pub mod layout;
pub mod views;

use crate::app::{CurrentItem, LessonApp};
use eframe::{App, Frame};
use egui::Context;
use layout::{bottom_panel, loading_panel, top_panel};

/// Something the learner clicked during this frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UserAction {
    Start,
    Reveal,
    Choose(usize),
    Advance,
    Restart,
}

impl LessonApp {
    /// Forwards a click to the state machine.
    pub fn dispatch(&mut self, action: UserAction) {
        match action {
            UserAction::Start => {
                self.start();
            }
            UserAction::Reveal => {
                self.reveal();
            }
            UserAction::Choose(option) => {
                self.choose_option(option);
            }
            UserAction::Advance => {
                self.advance();
            }
            UserAction::Restart => self.restart(),
        }
    }
}

impl App for LessonApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // HEADER WITH RUNNING SCORE
        top_panel(self.score(), ctx);

        // BOTTOM PANEL, DARK OR LIGHT THEME
        bottom_panel(ctx);

        // Views only read; the clicked action is applied after drawing
        let action = match self.current_item() {
            Some(CurrentItem::Intro) => views::intro::ui_intro(ctx),
            Some(CurrentItem::Vocabulary(item)) => views::vocabulary::ui_vocabulary(self, item, ctx),
            Some(CurrentItem::Story(question)) => views::story::ui_story(self, question, ctx),
            Some(CurrentItem::Grammar(exercise)) => views::grammar::ui_grammar(self, exercise, ctx),
            Some(CurrentItem::Summary { score, rank }) => {
                views::summary::ui_summary(score, rank, ctx)
            }
            None => {
                loading_panel(ctx, self.stage());
                None
            }
        };

        if let Some(action) = action {
            self.dispatch(action);
            ctx.request_repaint();
        }
    }
}
