use super::*;

impl LessonApp {
    /// Leaves the intro screen and opens the first vocabulary card.
    pub fn start(&mut self) -> bool {
        if self.state.stage != Stage::Intro {
            log::debug!("start ignored in {}", self.state.stage);
            return false;
        }
        self.enter_stage(Stage::Vocabulary);
        true
    }

    /// Moves past an answered item: next item of the same stage, or the
    /// first item of the next stage once this one is exhausted.
    pub fn advance(&mut self) -> bool {
        if self.state.feedback.is_none() {
            log::debug!(
                "advance ignored: {} item {} not answered",
                self.state.stage,
                self.state.index
            );
            return false;
        }
        let Some(len) = self.content.stage_len(self.state.stage) else {
            return false;
        };

        // stale verdicts must never leak into the next item
        self.state.feedback = None;
        self.state.selected_option = None;

        if self.state.index + 1 < len {
            self.state.index += 1;
            return true;
        }

        match self.state.stage.next() {
            Some(next) => self.enter_stage(next),
            None => self.state.index = 0,
        }
        true
    }

    fn enter_stage(&mut self, stage: Stage) {
        self.state.stage = stage;
        self.state.index = 0;
        self.state.feedback = None;
        self.state.selected_option = None;
        log::info!("entering {} with score {}", stage, self.state.score);
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::app;
    use super::*;

    #[test]
    fn start_only_from_intro() {
        let mut app = app(2, 1, 1);
        assert!(app.start());
        assert_eq!(app.state().stage, Stage::Vocabulary);
        assert_eq!(app.state().index, 0);

        app.reveal();
        app.advance();
        assert_eq!(app.state().index, 1);
        assert!(!app.start());
        assert_eq!(app.state().stage, Stage::Vocabulary);
        assert_eq!(app.state().index, 1);
    }

    #[test]
    fn advance_requires_feedback() {
        let mut app = app(3, 1, 1);
        app.start();
        assert!(!app.advance());
        assert_eq!(app.state().index, 0);
    }

    #[test]
    fn advance_within_stage_increments_index_and_clears_answer() {
        let mut app = app(1, 3, 1);
        app.start();
        app.reveal();
        app.advance();
        app.choose_option(2);
        assert!(app.advance());
        assert_eq!(app.state().stage, Stage::Story);
        assert_eq!(app.state().index, 1);
        assert_eq!(app.state().feedback, None);
        assert_eq!(app.state().selected_option, None);
    }

    #[test]
    fn advance_from_last_item_moves_to_next_stage() {
        let mut app = app(2, 1, 1);
        app.start();
        app.reveal();
        app.advance();
        app.reveal();
        assert!(app.advance());
        assert_eq!(app.state().stage, Stage::Story);
        assert_eq!(app.state().index, 0);

        app.choose_option(0);
        app.advance();
        assert_eq!(app.state().stage, Stage::Grammar);
        assert_eq!(app.state().index, 0);

        app.choose_option(0);
        app.advance();
        assert_eq!(app.state().stage, Stage::Summary);
        assert_eq!(app.state().index, 0);
        assert!(!app.advance());
        assert_eq!(app.state().stage, Stage::Summary);
    }

    #[test]
    fn six_revealed_cards_land_on_first_story_question() {
        let mut app = app(6, 4, 4);
        app.start();
        for _ in 0..6 {
            assert!(app.reveal());
            assert!(app.advance());
        }
        assert_eq!(app.state().score, 60);
        assert_eq!(app.state().stage, Stage::Story);
        assert_eq!(app.state().index, 0);
        assert_eq!(app.state().feedback, None);
    }
}
