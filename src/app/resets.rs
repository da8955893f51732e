use super::*;

impl LessonApp {
    /// Throws the whole session away and builds a fresh one over the same
    /// content. Allowed from any stage.
    pub fn restart(&mut self) {
        log::info!(
            "restarting lesson from {} with score {}",
            self.state.stage,
            self.state.score
        );
        *self = LessonApp::new(Arc::clone(&self.content));
    }
}
