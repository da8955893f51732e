use super::*;

impl LessonApp {
    /// Commits the verdict for the current item.
    ///
    /// Only the first call per item counts: while feedback is pending any
    /// further call is ignored, so repeated input cannot score twice.
    pub fn select_answer(&mut self, choice_is_correct: bool) -> bool {
        if !self.state.stage.is_question_stage() {
            log::debug!("answer ignored: no question in {}", self.state.stage);
            return false;
        }
        if self.state.feedback.is_some() {
            log::debug!(
                "answer ignored: {} item {} already answered",
                self.state.stage,
                self.state.index
            );
            return false;
        }

        if choice_is_correct {
            self.state.score += POINTS_PER_CORRECT;
            self.state.feedback = Some(Feedback::Correct);
        } else {
            self.state.feedback = Some(Feedback::Incorrect);
        }
        log::debug!(
            "{} item {} answered {:?}, score {}",
            self.state.stage,
            self.state.index,
            self.state.feedback,
            self.state.score
        );
        true
    }

    /// "Reveal Meaning" on a vocabulary card. Counts as a correct answer
    /// without an option index.
    pub fn reveal(&mut self) -> bool {
        if self.state.stage != Stage::Vocabulary {
            log::debug!("reveal ignored in {}", self.state.stage);
            return false;
        }
        self.select_answer(true)
    }

    /// Picks option `option` of the current Story or Grammar item.
    pub fn choose_option(&mut self, option: usize) -> bool {
        if self.state.feedback.is_some() {
            log::debug!("option {option} ignored: answer already committed");
            return false;
        }

        let correct = match self.current_item() {
            Some(CurrentItem::Story(q)) if option < q.options.len() => q.is_correct(option),
            Some(CurrentItem::Grammar(ex)) if option < ex.options.len() => ex.is_correct(option),
            _ => {
                log::debug!(
                    "option {option} ignored: not available in {} item {}",
                    self.state.stage,
                    self.state.index
                );
                return false;
            }
        };

        self.state.selected_option = Some(option);
        self.select_answer(correct)
    }
}
