//! Embedded curriculum catalog
//!
//! Chapters, the placement assessment, and the five-level test ladder all
//! ship inside the binary. [`Catalog::load`] parses and validates the
//! embedded data once at startup; a validation failure means the build
//! itself is broken, so the caller treats it as fatal.

pub mod data;
pub mod markdown;
pub mod model;

use std::collections::BTreeSet;

use thiserror::Error;
use tracing::debug;

use crate::progress::MAX_LEVEL;

pub use self::model::{Chapter, CodeBlock, ContentBlock, LevelSpec, Question, answer_key};

/// Number of questions in the placement assessment.
pub const ASSESSMENT_SIZE: usize = 10;

/// Errors raised while loading or validating the embedded curriculum
#[derive(Debug, Error)]
pub enum CatalogError {
    /// An embedded JSON manifest failed to parse
    #[error("Failed to parse embedded {file}: {source}")]
    Parse {
        /// Which embedded file was being parsed
        file: &'static str,
        source: serde_json::Error,
    },

    /// A chapter listed in the manifest has no markdown body
    #[error("Chapter '{0}' has no markdown body")]
    MissingBody(String),

    /// Two chapters share the same id
    #[error("Duplicate chapter id '{0}'")]
    DuplicateChapter(String),

    /// A question's answer index points outside its options
    #[error("{context} question {id}: answer index {answer} out of bounds for {options} options")]
    AnswerOutOfBounds {
        /// Which quiz the question belongs to
        context: String,
        id: u32,
        answer: usize,
        options: usize,
    },

    /// A question offers fewer than two options
    #[error("{context} question {id}: needs at least two options")]
    TooFewOptions { context: String, id: u32 },

    /// A quiz has no questions at all
    #[error("{0} has no questions")]
    EmptyQuiz(String),

    /// The ladder must define one spec per level
    #[error("Level bank must define {expected} levels, found {found}")]
    LevelCount { expected: u8, found: usize },

    /// A level spec is numbered out of sequence
    #[error("Level {found} listed where level {expected} was expected")]
    LevelOutOfOrder { expected: u8, found: u8 },

    /// The placement assessment has a fixed size
    #[error("Placement assessment must have {expected} questions, found {found}")]
    AssessmentSize { expected: usize, found: usize },
}

/// The full embedded curriculum, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Catalog {
    chapters: Vec<Chapter>,
    levels: Vec<LevelSpec>,
    assessment: Vec<Question>,
}

impl Catalog {
    /// Load and validate the embedded curriculum.
    pub fn load() -> Result<Self, CatalogError> {
        let catalog = Self {
            chapters: data::load_chapters()?,
            levels: data::load_levels()?,
            assessment: data::load_assessment()?,
        };
        catalog.validate()?;
        debug!(
            chapters = catalog.chapters.len(),
            levels = catalog.levels.len(),
            "curriculum catalog loaded"
        );
        Ok(catalog)
    }

    /// All chapters in curriculum order.
    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    /// Look up a chapter by its slug.
    pub fn chapter(&self, id: &str) -> Option<&Chapter> {
        self.chapters.iter().find(|c| c.id == id)
    }

    /// All ladder levels, ordered 1 through 5.
    pub fn levels(&self) -> &[LevelSpec] {
        &self.levels
    }

    /// Look up a ladder level by number.
    pub fn level(&self, level: u8) -> Option<&LevelSpec> {
        self.levels.iter().find(|l| l.level == level)
    }

    /// The placement assessment question bank.
    pub fn assessment(&self) -> &[Question] {
        &self.assessment
    }

    /// Answer key for the placement assessment, in question order.
    pub fn assessment_key(&self) -> Vec<usize> {
        answer_key(&self.assessment)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = BTreeSet::new();
        for chapter in &self.chapters {
            if !seen.insert(chapter.id.as_str()) {
                return Err(CatalogError::DuplicateChapter(chapter.id.clone()));
            }
            if chapter.body.is_empty() {
                return Err(CatalogError::MissingBody(chapter.id.clone()));
            }
        }

        if self.assessment.len() != ASSESSMENT_SIZE {
            return Err(CatalogError::AssessmentSize {
                expected: ASSESSMENT_SIZE,
                found: self.assessment.len(),
            });
        }
        validate_questions("Assessment", &self.assessment)?;

        if self.levels.len() != MAX_LEVEL as usize {
            return Err(CatalogError::LevelCount {
                expected: MAX_LEVEL,
                found: self.levels.len(),
            });
        }
        for (index, level) in self.levels.iter().enumerate() {
            let expected = index as u8 + 1;
            if level.level != expected {
                return Err(CatalogError::LevelOutOfOrder { expected, found: level.level });
            }
            validate_questions(&format!("Level {}", level.level), &level.questions)?;
        }

        Ok(())
    }
}

fn validate_questions(context: &str, questions: &[Question]) -> Result<(), CatalogError> {
    if questions.is_empty() {
        return Err(CatalogError::EmptyQuiz(context.to_string()));
    }
    for question in questions {
        if question.options.len() < 2 {
            return Err(CatalogError::TooFewOptions {
                context: context.to_string(),
                id: question.id,
            });
        }
        if question.answer >= question.options.len() {
            return Err(CatalogError::AnswerOutOfBounds {
                context: context.to_string(),
                id: question.id,
                answer: question.answer,
                options: question.options.len(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_catalog_loads() {
        let catalog = Catalog::load().unwrap();
        assert_eq!(catalog.chapters().len(), 10);
        assert_eq!(catalog.levels().len(), 5);
        assert_eq!(catalog.assessment().len(), ASSESSMENT_SIZE);
    }

    #[test]
    fn chapter_lookup_by_slug() {
        let catalog = Catalog::load().unwrap();
        let chapter = catalog.chapter("functions-and-scope").unwrap();
        assert_eq!(chapter.title, "Functions & Scope");
        assert!(catalog.chapter("no-such-chapter").is_none());
    }

    #[test]
    fn level_lookup_by_number() {
        let catalog = Catalog::load().unwrap();
        assert_eq!(catalog.level(2).unwrap().name, "Core Logic");
        assert!(catalog.level(0).is_none());
        assert!(catalog.level(6).is_none());
    }

    #[test]
    fn assessment_key_matches_bank() {
        let catalog = Catalog::load().unwrap();
        assert_eq!(catalog.assessment_key(), vec![0, 0, 1, 1, 3, 1, 0, 0, 2, 1]);
    }

    #[test]
    fn every_chapter_has_a_body() {
        let catalog = Catalog::load().unwrap();
        for chapter in catalog.chapters() {
            assert!(!chapter.body.is_empty(), "chapter '{}' has no body", chapter.id);
            assert!(chapter.word_count() > 0, "chapter '{}' body is blank", chapter.id);
        }
    }

    #[test]
    fn every_level_has_ten_questions() {
        let catalog = Catalog::load().unwrap();
        for level in catalog.levels() {
            assert_eq!(level.questions.len(), 10, "level {} bank size", level.level);
        }
    }

    #[test]
    fn validation_rejects_out_of_bounds_answer() {
        let mut catalog = Catalog::load().unwrap();
        catalog.levels[0].questions[0].answer = 99;
        let err = catalog.validate().unwrap_err();
        assert!(matches!(err, CatalogError::AnswerOutOfBounds { answer: 99, .. }));
    }

    #[test]
    fn validation_rejects_duplicate_chapter_ids() {
        let mut catalog = Catalog::load().unwrap();
        let clone = catalog.chapters[0].clone();
        catalog.chapters.push(clone);
        let err = catalog.validate().unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateChapter(_)));
    }

    #[test]
    fn validation_rejects_misnumbered_levels() {
        let mut catalog = Catalog::load().unwrap();
        catalog.levels[2].level = 9;
        let err = catalog.validate().unwrap_err();
        assert!(matches!(err, CatalogError::LevelOutOfOrder { expected: 3, found: 9 }));
    }
}
