//! Content model for the embedded curriculum
//!
//! Chapters, quiz questions, and the ladder levels share one representation
//! regardless of which screen renders them. Everything here is plain data;
//! loading and validation live in the sibling modules.

use serde::{Deserialize, Serialize};

/// A curriculum chapter with its parsed body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chapter {
    /// Stable slug used for completion tracking (e.g. "functions-and-scope")
    pub id: String,
    /// Display title
    pub title: String,
    /// Suggested study time in minutes
    pub estimated_minutes: u32,
    /// Takeaways listed under the body
    pub key_points: Vec<String>,
    /// Parsed markdown body
    #[serde(default, skip_serializing)]
    pub body: Vec<ContentBlock>,
}

impl Chapter {
    /// Word count across the body, used by the CLI listing.
    pub fn word_count(&self) -> usize {
        self.body.iter().map(|block| block.word_count()).sum()
    }

    /// Body text with block structure and markup stripped.
    pub fn plain_text(&self) -> String {
        self.body.iter().filter_map(|block| block.plain_text()).collect::<Vec<_>>().join("\n\n")
    }
}

/// A multiple-choice question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    pub prompt: String,
    /// Ordered options; always at least two
    pub options: Vec<String>,
    /// Index of the correct option
    pub answer: usize,
}

impl Question {
    /// Whether the given selection (None = skipped) is the correct option.
    pub fn is_correct(&self, selection: Option<usize>) -> bool {
        selection == Some(self.answer)
    }
}

/// Collect the answer key from a question bank, in question order.
pub fn answer_key(questions: &[Question]) -> Vec<usize> {
    questions.iter().map(|q| q.answer).collect()
}

/// One rung of the test ladder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelSpec {
    /// Ladder position, 1 through 5
    pub level: u8,
    /// Short name (e.g. "Core Logic")
    pub name: String,
    /// Single-glyph marker shown on the level card
    pub icon: String,
    pub description: String,
    pub questions: Vec<Question>,
}

/// A block of chapter content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ContentBlock {
    /// A heading (level 1-6)
    Heading { level: u8, text: String },
    /// A paragraph of text
    Paragraph(String),
    /// A code block with optional language annotation
    Code(CodeBlock),
    /// An unordered list
    UnorderedList(Vec<String>),
    /// An ordered list
    OrderedList(Vec<String>),
    /// A horizontal rule
    HorizontalRule,
}

impl ContentBlock {
    /// Estimate word count for this block
    pub fn word_count(&self) -> usize {
        match self {
            ContentBlock::Heading { text, .. } => text.split_whitespace().count(),
            ContentBlock::Paragraph(text) => text.split_whitespace().count(),
            ContentBlock::Code(code) => code.code.split_whitespace().count() / 3, // Code reads slower
            ContentBlock::UnorderedList(items) | ContentBlock::OrderedList(items) => {
                items.iter().map(|s| s.split_whitespace().count()).sum()
            }
            ContentBlock::HorizontalRule => 0,
        }
    }

    /// Get plain text representation (if applicable)
    pub fn plain_text(&self) -> Option<String> {
        match self {
            ContentBlock::Heading { text, .. } => Some(text.clone()),
            ContentBlock::Paragraph(text) => Some(text.clone()),
            ContentBlock::Code(code) => Some(code.code.clone()),
            ContentBlock::UnorderedList(items) | ContentBlock::OrderedList(items) => {
                Some(items.join("\n"))
            }
            ContentBlock::HorizontalRule => None,
        }
    }
}

/// A code block with language annotation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodeBlock {
    /// The actual code content
    pub code: String,
    /// Programming language (for syntax highlighting)
    pub language: Option<String>,
}

impl CodeBlock {
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into(), language: None }
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(answer: usize) -> Question {
        Question {
            id: 1,
            prompt: "Which keyword declares a constant?".into(),
            options: vec!["var".into(), "let".into(), "const".into()],
            answer,
        }
    }

    #[test]
    fn question_correctness() {
        let q = question(2);
        assert!(q.is_correct(Some(2)));
        assert!(!q.is_correct(Some(0)));
        assert!(!q.is_correct(None));
    }

    #[test]
    fn answer_key_preserves_order() {
        let bank = vec![question(2), question(0), question(1)];
        assert_eq!(answer_key(&bank), vec![2, 0, 1]);
    }

    #[test]
    fn content_block_word_count() {
        let para = ContentBlock::Paragraph("Closures capture their enclosing scope.".into());
        assert_eq!(para.word_count(), 5);

        let code = ContentBlock::Code(CodeBlock::new("const x = 5;"));
        assert!(code.word_count() < 4); // Code counts less
    }

    #[test]
    fn chapter_plain_text_skips_rules() {
        let chapter = Chapter {
            id: "test".into(),
            title: "Test".into(),
            estimated_minutes: 5,
            key_points: vec![],
            body: vec![
                ContentBlock::Heading { level: 1, text: "Scope".into() },
                ContentBlock::HorizontalRule,
                ContentBlock::Paragraph("Block scope wins.".into()),
            ],
        };
        let text = chapter.plain_text();
        assert!(text.contains("Scope"));
        assert!(text.contains("Block scope wins."));
    }

    #[test]
    fn code_block_builder() {
        let code = CodeBlock::new("console.log('hi');").with_language("js");
        assert_eq!(code.language, Some("js".into()));
    }
}
