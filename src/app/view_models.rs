use super::*;

impl LessonApp {
    /// Counter and bar data for the current question stage.
    pub fn stage_progress(&self) -> Option<StageProgress> {
        let total = self.content.stage_len(self.state.stage)?;
        Some(StageProgress {
            stage: self.state.stage,
            index: self.state.index,
            total,
        })
    }

    /// Options of the current Story or Grammar item with their highlight.
    /// Empty for the other stages.
    pub fn option_views(&self) -> Vec<OptionView> {
        let (options, correct): (&[String], Vec<bool>) = match self.current_item() {
            Some(CurrentItem::Story(q)) => (
                q.options.as_slice(),
                (0..q.options.len()).map(|i| q.is_correct(i)).collect(),
            ),
            Some(CurrentItem::Grammar(ex)) => (
                ex.options.as_slice(),
                (0..ex.options.len()).map(|i| ex.is_correct(i)).collect(),
            ),
            _ => return Vec::new(),
        };

        // the lock follows the verdict, a pick index may be absent
        let answered = self.state.feedback.is_some();
        let selected = self.state.selected_option;
        options
            .iter()
            .enumerate()
            .map(|(index, text)| {
                let state = if !answered {
                    OptionState::Open
                } else if correct[index] {
                    OptionState::Correct
                } else if selected == Some(index) {
                    OptionState::WrongPick
                } else {
                    OptionState::Dimmed
                };
                OptionView {
                    index,
                    text: text.clone(),
                    state,
                }
            })
            .collect()
    }

    /// Grammar sentence split at its blank, gap showing the picked option.
    pub fn sentence_view(&self) -> Option<SentenceView> {
        let Some(CurrentItem::Grammar(ex)) = self.current_item() else {
            return None;
        };
        let (before, after) = ex.sentence_parts();
        let gap = self
            .state
            .selected_option
            .and_then(|i| ex.options.get(i))
            .map(String::as_str)
            .unwrap_or("?");
        Some(SentenceView {
            before: before.to_owned(),
            gap: gap.to_owned(),
            after: after.to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::app;
    use super::*;

    fn states(app: &LessonApp) -> Vec<OptionState> {
        app.option_views().iter().map(|o| o.state).collect()
    }

    #[test]
    fn no_options_outside_story_and_grammar() {
        let mut app = app(1, 1, 1);
        assert!(app.option_views().is_empty());
        app.start();
        assert!(app.option_views().is_empty());
        assert!(app.sentence_view().is_none());
    }

    #[test]
    fn options_stay_open_until_a_pick() {
        let mut app = app(1, 1, 1);
        app.start();
        app.reveal();
        app.advance();
        assert_eq!(
            states(&app),
            vec![OptionState::Open, OptionState::Open, OptionState::Open]
        );
    }

    #[test]
    fn verdict_without_pick_locks_every_option() {
        let mut app = app(1, 1, 1);
        app.start();
        app.reveal();
        app.advance();
        assert!(app.select_answer(false));
        assert_eq!(app.state().selected_option, None);
        assert_eq!(
            states(&app),
            vec![OptionState::Dimmed, OptionState::Correct, OptionState::Dimmed]
        );
        assert!(app.option_views().iter().all(|o| !o.enabled()));
        assert!(!app.choose_option(0));
    }

    #[test]
    fn wrong_pick_marks_pick_and_answer() {
        let mut app = app(1, 1, 1);
        app.start();
        app.reveal();
        app.advance();
        app.choose_option(2);
        assert_eq!(
            states(&app),
            vec![
                OptionState::Dimmed,
                OptionState::Correct,
                OptionState::WrongPick
            ]
        );
        assert!(app.option_views().iter().all(|o| !o.enabled()));
    }

    #[test]
    fn right_pick_dims_the_rest() {
        let mut app = app(1, 1, 1);
        app.start();
        app.reveal();
        app.advance();
        app.choose_option(1);
        assert_eq!(
            states(&app),
            vec![OptionState::Dimmed, OptionState::Correct, OptionState::Dimmed]
        );
    }

    #[test]
    fn sentence_gap_shows_pick() {
        let mut app = app(1, 1, 1);
        app.start();
        app.reveal();
        app.advance();
        app.choose_option(1);
        app.advance();

        let view = app.sentence_view().unwrap();
        assert_eq!(view.before, "It ");
        assert_eq!(view.gap, "?");
        assert_eq!(view.after, " belonged to the author.");

        app.choose_option(0);
        assert_eq!(app.sentence_view().unwrap().gap, "should've");
    }

    #[test]
    fn progress_tracks_index() {
        let mut app = app(3, 1, 1);
        assert!(app.stage_progress().is_none());
        app.start();
        app.reveal();
        app.advance();
        let p = app.stage_progress().unwrap();
        assert_eq!(p.label(), "Card 2/3");
    }
}
