use serde::Deserialize;
use std::fmt;

/// Points awarded for every answer committed as correct.
pub const POINTS_PER_CORRECT: u32 = 10;

/// Marker that stands for the gap in a grammar sentence.
pub const BLANK_MARKER: &str = "_____";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum Stage {
    Intro,
    Vocabulary,
    Story,
    Grammar,
    Summary,
}

impl Default for Stage {
    fn default() -> Self {
        Stage::Intro
    }
}

impl Stage {
    /// Stage reached when the current one runs out of items.
    /// `None` for Summary: it only leaves through a restart.
    pub fn next(self) -> Option<Stage> {
        match self {
            Stage::Intro => Some(Stage::Vocabulary),
            Stage::Vocabulary => Some(Stage::Story),
            Stage::Story => Some(Stage::Grammar),
            Stage::Grammar => Some(Stage::Summary),
            Stage::Summary => None,
        }
    }

    /// Stages that hold questions and accept answers.
    pub fn is_question_stage(self) -> bool {
        matches!(self, Stage::Vocabulary | Stage::Story | Stage::Grammar)
    }

    pub fn title(self) -> &'static str {
        match self {
            Stage::Intro => "Into the Bunker",
            Stage::Vocabulary => "Vocabulary Check",
            Stage::Story => "Story Comprehension",
            Stage::Grammar => "Grammar Lab",
            Stage::Summary => "Class Complete!",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Intro => "intro",
            Stage::Vocabulary => "vocabulary",
            Stage::Story => "story",
            Stage::Grammar => "grammar",
            Stage::Summary => "summary",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Feedback {
    Correct,
    Incorrect,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct VocabularyItem {
    pub word: String,
    pub definition: String,
    #[serde(rename = "type", alias = "part_of_speech")]
    pub part_of_speech: String,
    pub example: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ComprehensionQuestion {
    #[serde(alias = "question")]
    pub prompt: String,
    pub options: Vec<String>,
    #[serde(rename = "correct", alias = "correct_option_index")]
    pub correct_option_index: usize,
    pub explanation: String,
}

impl ComprehensionQuestion {
    pub fn is_correct(&self, option: usize) -> bool {
        option == self.correct_option_index
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GrammarExercise {
    pub topic: String,
    pub instruction: String,
    #[serde(rename = "sentence", alias = "sentence_template")]
    pub sentence_template: String,
    pub options: Vec<String>,
    #[serde(rename = "correct", alias = "correct_option")]
    pub correct_option: String,
    pub explanation: String,
}

impl GrammarExercise {
    /// Exact text comparison against the expected option, no normalisation.
    pub fn is_correct(&self, option: usize) -> bool {
        self.options
            .get(option)
            .is_some_and(|text| *text == self.correct_option)
    }

    /// Splits the template around its blank: (before, after).
    pub fn sentence_parts(&self) -> (&str, &str) {
        self.sentence_template
            .split_once(BLANK_MARKER)
            .unwrap_or((self.sentence_template.as_str(), ""))
    }
}

/// The three read-only sequences a lesson is built from.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LessonContent {
    pub vocabulary: Vec<VocabularyItem>,
    #[serde(alias = "comprehension_questions")]
    pub comprehension: Vec<ComprehensionQuestion>,
    #[serde(alias = "grammar_exercises")]
    pub grammar: Vec<GrammarExercise>,
}

impl LessonContent {
    /// Number of items in the sequence backing `stage`.
    /// Intro and Summary have no sequence.
    pub fn stage_len(&self, stage: Stage) -> Option<usize> {
        match stage {
            Stage::Vocabulary => Some(self.vocabulary.len()),
            Stage::Story => Some(self.comprehension.len()),
            Stage::Grammar => Some(self.grammar.len()),
            Stage::Intro | Stage::Summary => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LessonState {
    pub stage: Stage,
    pub index: usize,
    pub score: u32,
    pub selected_option: Option<usize>,
    pub feedback: Option<Feedback>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum Rank {
    Tourist,
    PineTree,
    MysteryHunter,
    JournalAuthor,
}

impl Rank {
    pub fn from_score(score: u32) -> Self {
        if score > 150 {
            Rank::JournalAuthor
        } else if score > 100 {
            Rank::MysteryHunter
        } else if score > 50 {
            Rank::PineTree
        } else {
            Rank::Tourist
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Rank::Tourist => "Tourist",
            Rank::PineTree => "Pine Tree",
            Rank::MysteryHunter => "Mystery Hunter",
            Rank::JournalAuthor => "Journal Author",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_bands_use_strict_thresholds() {
        assert_eq!(Rank::from_score(0), Rank::Tourist);
        assert_eq!(Rank::from_score(50).label(), "Tourist");
        assert_eq!(Rank::from_score(51).label(), "Pine Tree");
        assert_eq!(Rank::from_score(100).label(), "Pine Tree");
        assert_eq!(Rank::from_score(101).label(), "Mystery Hunter");
        assert_eq!(Rank::from_score(150).label(), "Mystery Hunter");
        assert_eq!(Rank::from_score(151).label(), "Journal Author");
    }

    #[test]
    fn stage_order_ends_at_summary() {
        let mut stage = Stage::Intro;
        let mut visited = vec![stage];
        while let Some(next) = stage.next() {
            visited.push(next);
            stage = next;
        }
        assert_eq!(
            visited,
            vec![
                Stage::Intro,
                Stage::Vocabulary,
                Stage::Story,
                Stage::Grammar,
                Stage::Summary
            ]
        );
    }

    #[test]
    fn grammar_answer_is_exact_text_match() {
        let ex = GrammarExercise {
            topic: "Modals".into(),
            instruction: "Choose the correct word.".into(),
            sentence_template: "It _____ belonged to the author.".into(),
            options: vec!["must've".into(), "Must've".into(), "must have".into()],
            correct_option: "must've".into(),
            explanation: String::new(),
        };
        assert!(ex.is_correct(0));
        assert!(!ex.is_correct(1));
        assert!(!ex.is_correct(2));
        assert!(!ex.is_correct(7));
        assert_eq!(ex.sentence_parts(), ("It ", " belonged to the author."));
    }
}
