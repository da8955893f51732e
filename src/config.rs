// src/config.rs

use crate::data::{read_lesson_embedded, read_lesson_from_path};
use crate::error::Result;
use crate::model::LessonContent;
use std::path::PathBuf;

pub const CONTENT_ENV: &str = "BUNKER_LESSON_CONTENT";
pub const TITLE_ENV: &str = "BUNKER_LESSON_TITLE";
pub const DEFAULT_TITLE: &str = "Into the Bunker";

/// Settings for the desktop shell. The lesson core itself takes none.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LessonConfig {
    /// YAML lesson to load instead of the embedded one.
    pub content_path: Option<PathBuf>,
    pub window_title: String,
}

impl Default for LessonConfig {
    fn default() -> Self {
        Self {
            content_path: None,
            window_title: DEFAULT_TITLE.to_owned(),
        }
    }
}

impl LessonConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let value = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_owned())
                .filter(|v| !v.is_empty())
        };

        let mut config = Self::default();
        if let Some(path) = value(CONTENT_ENV) {
            config.content_path = Some(PathBuf::from(path));
        }
        if let Some(title) = value(TITLE_ENV) {
            config.window_title = title;
        }
        config
    }

    pub fn load_content(&self) -> Result<LessonContent> {
        match &self.content_path {
            Some(path) => {
                log::info!("loading lesson from {}", path.display());
                read_lesson_from_path(path)
            }
            None => read_lesson_embedded(),
        }
    }
}
