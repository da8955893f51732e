// src/error.rs

use std::path::PathBuf;
use thiserror::Error;

/// Everything that can make a lesson refuse to start.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read lesson content from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse lesson content: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("lesson section '{section}' is empty")]
    EmptySection { section: &'static str },

    #[error("{section} item {item} has {count} options, at least 2 are required")]
    TooFewOptions {
        section: &'static str,
        item: usize,
        count: usize,
    },

    #[error("comprehension question {item}: correct index {index} is out of range for {count} options")]
    CorrectIndexOutOfRange {
        item: usize,
        index: usize,
        count: usize,
    },

    #[error("grammar exercise {item}: correct option '{correct}' is not one of its options")]
    CorrectOptionMissing { item: usize, correct: String },

    #[error("grammar exercise {item}: sentence must contain exactly one blank, found {count}")]
    BlankMarkerCount { item: usize, count: usize },
}

pub type Result<T> = std::result::Result<T, ContentError>;
