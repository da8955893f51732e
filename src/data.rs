// src/data.rs

use crate::error::{ContentError, Result};
use crate::model::{BLANK_MARKER, LessonContent};
use std::path::Path;

/// Lesson compiled into the binary.
const EMBEDDED_LESSON: &str = include_str!("data/lesson.yaml");

/// Loads the lesson embedded at build time and validates it.
pub fn read_lesson_embedded() -> Result<LessonContent> {
    read_lesson_from_str(EMBEDDED_LESSON)
}

/// Reads a lesson from a YAML file on disk.
pub fn read_lesson_from_path(path: &Path) -> Result<LessonContent> {
    let text = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("read {} bytes of lesson content from {}", text.len(), path.display());
    read_lesson_from_str(&text)
}

pub fn read_lesson_from_str(yaml: &str) -> Result<LessonContent> {
    let content: LessonContent = serde_yaml::from_str(yaml)?;
    validate(&content)?;
    log::info!(
        "lesson loaded: {} vocabulary, {} comprehension, {} grammar",
        content.vocabulary.len(),
        content.comprehension.len(),
        content.grammar.len()
    );
    Ok(content)
}

/// Checks every load-time guarantee. An error here means the lesson must not start.
pub fn validate(content: &LessonContent) -> Result<()> {
    if content.vocabulary.is_empty() {
        return Err(ContentError::EmptySection {
            section: "vocabulary",
        });
    }
    if content.comprehension.is_empty() {
        return Err(ContentError::EmptySection {
            section: "comprehension",
        });
    }
    if content.grammar.is_empty() {
        return Err(ContentError::EmptySection { section: "grammar" });
    }

    for (item, q) in content.comprehension.iter().enumerate() {
        if q.options.len() < 2 {
            return Err(ContentError::TooFewOptions {
                section: "comprehension",
                item,
                count: q.options.len(),
            });
        }
        if q.correct_option_index >= q.options.len() {
            return Err(ContentError::CorrectIndexOutOfRange {
                item,
                index: q.correct_option_index,
                count: q.options.len(),
            });
        }
    }

    for (item, ex) in content.grammar.iter().enumerate() {
        if ex.options.len() < 2 {
            return Err(ContentError::TooFewOptions {
                section: "grammar",
                item,
                count: ex.options.len(),
            });
        }
        if !ex.options.iter().any(|opt| *opt == ex.correct_option) {
            return Err(ContentError::CorrectOptionMissing {
                item,
                correct: ex.correct_option.clone(),
            });
        }
        let blanks = ex.sentence_template.matches(BLANK_MARKER).count();
        if blanks != 1 {
            return Err(ContentError::BlankMarkerCount {
                item,
                count: blanks,
            });
        }
    }

    Ok(())
}

/// Smallest lesson that passes validation.
#[cfg(test)]
pub(crate) const MINIMAL_LESSON: &str = r#"
vocabulary:
  - word: Vanish
    definition: To disappear suddenly.
    type: Verb
    example: The author vanished without a trace.
comprehension:
  - question: Who was the Unknown Man?
    options: [The author, A Shape Shifter]
    correct: 1
    explanation: It was a Shape Shifter.
grammar:
  - topic: Modals
    instruction: Choose the correct word.
    sentence: It _____ belonged to the author.
    options: ["must've", "can't"]
    correct: "must've"
    explanation: Past deduction.
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_lesson_is_valid() {
        let content = read_lesson_embedded().expect("embedded lesson must load");
        assert_eq!(content.vocabulary.len(), 6);
        assert_eq!(content.comprehension.len(), 4);
        assert_eq!(content.grammar.len(), 4);
        assert_eq!(content.vocabulary[0].part_of_speech, "Verb");
    }

    #[test]
    fn minimal_lesson_parses() {
        let content = read_lesson_from_str(MINIMAL_LESSON).unwrap();
        assert_eq!(content.comprehension[0].prompt, "Who was the Unknown Man?");
        assert_eq!(content.comprehension[0].correct_option_index, 1);
        assert_eq!(content.grammar[0].correct_option, "must've");
    }

    #[test]
    fn empty_section_is_rejected() {
        let mut content = read_lesson_from_str(MINIMAL_LESSON).unwrap();
        content.grammar.clear();
        assert!(matches!(
            validate(&content),
            Err(ContentError::EmptySection { section: "grammar" })
        ));
    }

    #[test]
    fn out_of_range_correct_index_is_rejected() {
        let mut content = read_lesson_from_str(MINIMAL_LESSON).unwrap();
        content.comprehension[0].correct_option_index = 2;
        assert!(matches!(
            validate(&content),
            Err(ContentError::CorrectIndexOutOfRange { item: 0, index: 2, count: 2 })
        ));
    }

    #[test]
    fn single_option_question_is_rejected() {
        let mut content = read_lesson_from_str(MINIMAL_LESSON).unwrap();
        content.comprehension[0].options.truncate(1);
        content.comprehension[0].correct_option_index = 0;
        assert!(matches!(
            validate(&content),
            Err(ContentError::TooFewOptions { section: "comprehension", .. })
        ));
    }

    #[test]
    fn missing_correct_option_is_rejected() {
        let mut content = read_lesson_from_str(MINIMAL_LESSON).unwrap();
        content.grammar[0].correct_option = "Must've".into();
        assert!(matches!(
            validate(&content),
            Err(ContentError::CorrectOptionMissing { item: 0, .. })
        ));
    }

    #[test]
    fn blank_marker_must_appear_once() {
        let mut content = read_lesson_from_str(MINIMAL_LESSON).unwrap();
        content.grammar[0].sentence_template = "No gap here.".into();
        assert!(matches!(
            validate(&content),
            Err(ContentError::BlankMarkerCount { item: 0, count: 0 })
        ));
        content.grammar[0].sentence_template = "_____ and _____".into();
        assert!(matches!(
            validate(&content),
            Err(ContentError::BlankMarkerCount { item: 0, count: 2 })
        ));
    }

    #[test]
    fn malformed_yaml_is_a_parse_error() {
        assert!(matches!(
            read_lesson_from_str("vocabulary: [unclosed"),
            Err(ContentError::Parse(_))
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = read_lesson_from_path(Path::new("/definitely/not/here/lesson.yaml"));
        assert!(matches!(err, Err(ContentError::Io { .. })));
    }
}
