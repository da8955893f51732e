use super::*;

impl LessonApp {
    /// Item behind the current stage and index.
    ///
    /// Returns `None` only if the index does not point into the stage's
    /// sequence, which transitions never leave behind.
    pub fn current_item(&self) -> Option<CurrentItem<'_>> {
        let i = self.state.index;
        match self.state.stage {
            Stage::Intro => Some(CurrentItem::Intro),
            Stage::Vocabulary => self.content.vocabulary.get(i).map(CurrentItem::Vocabulary),
            Stage::Story => self.content.comprehension.get(i).map(CurrentItem::Story),
            Stage::Grammar => self.content.grammar.get(i).map(CurrentItem::Grammar),
            Stage::Summary => Some(CurrentItem::Summary {
                score: self.state.score,
                rank: self.rank(),
            }),
        }
    }

    pub fn stage(&self) -> Stage {
        self.state.stage
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn rank(&self) -> Rank {
        Rank::from_score(self.state.score)
    }

    pub fn feedback(&self) -> Option<Feedback> {
        self.state.feedback
    }

    pub fn is_answered(&self) -> bool {
        self.state.feedback.is_some()
    }

    /// Highest score reachable with this content.
    pub fn max_score(&self) -> u32 {
        let items = self.content.vocabulary.len()
            + self.content.comprehension.len()
            + self.content.grammar.len();
        u32::try_from(items)
            .unwrap_or(u32::MAX)
            .saturating_mul(POINTS_PER_CORRECT)
    }
}
