use crate::data::read_lesson_embedded;
use crate::error::Result;
use crate::model::{
    ComprehensionQuestion, Feedback, GrammarExercise, LessonContent, LessonState, POINTS_PER_CORRECT,
    Rank, Stage, VocabularyItem,
};
use std::sync::Arc;

// State machine, split by concern
pub mod actions;
pub mod navigation;
pub mod queries;
pub mod resets;
pub mod view_models;

// View models used by the renderer
pub use crate::view_models::{OptionState, OptionView, SentenceView, StageProgress};

/// What the learner is looking at right now, tied to the item it belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CurrentItem<'a> {
    Intro,
    Vocabulary(&'a VocabularyItem),
    Story(&'a ComprehensionQuestion),
    Grammar(&'a GrammarExercise),
    Summary { score: u32, rank: Rank },
}

/// One learner going through one lesson.
///
/// The content is shared and never mutated; every transition works on
/// `state` only.
pub struct LessonApp {
    content: Arc<LessonContent>,
    state: LessonState,
}

impl LessonApp {
    pub fn new(content: Arc<LessonContent>) -> Self {
        Self {
            content,
            state: LessonState::default(),
        }
    }

    /// Session over the lesson compiled into the binary.
    pub fn from_embedded() -> Result<Self> {
        Ok(Self::new(Arc::new(read_lesson_embedded()?)))
    }

    pub fn content(&self) -> &LessonContent {
        &self.content
    }

    pub fn state(&self) -> &LessonState {
        &self.state
    }
}
