// src/view_models.rs

use crate::model::Stage;

/// Position inside a question stage, as shown above each card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StageProgress {
    pub stage: Stage,
    pub index: usize, // 0-based
    pub total: usize,
}

impl StageProgress {
    /// Fraction of the stage already behind the learner.
    pub fn fraction(&self) -> f32 {
        if self.total == 0 {
            0.0
        } else {
            self.index as f32 / self.total as f32
        }
    }

    pub fn label(&self) -> String {
        let noun = match self.stage {
            Stage::Vocabulary => "Card",
            Stage::Story => "Question",
            Stage::Grammar => "Task",
            Stage::Intro | Stage::Summary => "Step",
        };
        format!("{noun} {}/{}", self.index + 1, self.total)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionState {
    /// Nothing picked yet.
    Open,
    /// The right answer, shown once something is picked.
    Correct,
    /// The learner's pick, and it was wrong.
    WrongPick,
    Dimmed,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionView {
    pub index: usize,
    pub text: String,
    pub state: OptionState,
}

impl OptionView {
    /// "A. text", "B. text", ... as used for comprehension questions.
    pub fn lettered(&self) -> String {
        let letter = u8::try_from(self.index)
            .ok()
            .filter(|i| *i < 26)
            .map(|i| char::from(b'A' + i))
            .unwrap_or('?');
        format!("{letter}. {}", self.text)
    }

    pub fn enabled(&self) -> bool {
        self.state == OptionState::Open
    }
}

/// Grammar sentence with its gap filled by the current pick (or `?`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SentenceView {
    pub before: String,
    pub gap: String,
    pub after: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_label_and_fraction() {
        let p = StageProgress {
            stage: Stage::Vocabulary,
            index: 0,
            total: 6,
        };
        assert_eq!(p.label(), "Card 1/6");
        assert_eq!(p.fraction(), 0.0);

        let p = StageProgress {
            stage: Stage::Grammar,
            index: 2,
            total: 4,
        };
        assert_eq!(p.label(), "Task 3/4");
        assert_eq!(p.fraction(), 0.5);
    }

    #[test]
    fn options_are_lettered() {
        let view = OptionView {
            index: 2,
            text: "To hide from zombies.".into(),
            state: OptionState::Open,
        };
        assert_eq!(view.lettered(), "C. To hide from zombies.");
        assert!(view.enabled());
    }
}
