//! Embedded curriculum data
//!
//! The curriculum ships inside the binary, so the app needs no data files
//! at runtime. JSON manifests carry structure; chapter bodies are markdown
//! files matched to their manifest entry by slug.

use super::CatalogError;
use super::markdown::parse_markdown_content;
use super::model::{Chapter, LevelSpec, Question};

const CHAPTERS_JSON: &str = include_str!("../../content/chapters.json");
const LEVELS_JSON: &str = include_str!("../../content/levels.json");
const ASSESSMENT_JSON: &str = include_str!("../../content/assessment.json");

/// Chapter bodies keyed by slug. Order matches the manifest but lookup
/// goes by slug, so reordering here is harmless.
const CHAPTER_BODIES: &[(&str, &str)] = &[
    (
        "javascript-basics-and-syntax",
        include_str!("../../content/chapters/01-javascript-basics-and-syntax.md"),
    ),
    (
        "variables-data-types-and-operators",
        include_str!("../../content/chapters/02-variables-data-types-and-operators.md"),
    ),
    ("functions-and-scope", include_str!("../../content/chapters/03-functions-and-scope.md")),
    ("arrays-and-objects", include_str!("../../content/chapters/04-arrays-and-objects.md")),
    ("dom-manipulation", include_str!("../../content/chapters/05-dom-manipulation.md")),
    ("es6-features", include_str!("../../content/chapters/06-es6-features.md")),
    (
        "asynchronous-javascript",
        include_str!("../../content/chapters/07-asynchronous-javascript.md"),
    ),
    (
        "browser-apis-and-events",
        include_str!("../../content/chapters/08-browser-apis-and-events.md"),
    ),
    ("node-js-basics", include_str!("../../content/chapters/09-node-js-basics.md")),
    ("full-stack-javascript", include_str!("../../content/chapters/10-full-stack-javascript.md")),
];

pub(super) fn load_chapters() -> Result<Vec<Chapter>, CatalogError> {
    let mut chapters: Vec<Chapter> = serde_json::from_str(CHAPTERS_JSON)
        .map_err(|source| CatalogError::Parse { file: "chapters.json", source })?;

    for chapter in &mut chapters {
        let markdown = CHAPTER_BODIES
            .iter()
            .find(|(slug, _)| *slug == chapter.id)
            .map(|(_, body)| *body)
            .ok_or_else(|| CatalogError::MissingBody(chapter.id.clone()))?;
        chapter.body = parse_markdown_content(markdown);
    }

    Ok(chapters)
}

pub(super) fn load_levels() -> Result<Vec<LevelSpec>, CatalogError> {
    serde_json::from_str(LEVELS_JSON)
        .map_err(|source| CatalogError::Parse { file: "levels.json", source })
}

pub(super) fn load_assessment() -> Result<Vec<Question>, CatalogError> {
    serde_json::from_str(ASSESSMENT_JSON)
        .map_err(|source| CatalogError::Parse { file: "assessment.json", source })
}
