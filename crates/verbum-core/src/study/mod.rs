//! The study data model consumed by viewers and exporters.
//!
//! A [`StudyResult`] is a sum type keyed by mode: exactly one payload exists
//! and consumers branch on the variant. It serializes with a `type`
//! discriminator (`"passage"` / `"book"`) next to the payload fields.

pub mod book;
pub mod passage;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::request::{StudyMode, StudyRequest, Translation};

pub use book::{BookIntro, BookPayload, BookStudy};
pub use passage::{PassagePayload, PassageStudy};

/// Provenance of a study. Always reflects the request, never the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyMeta {
    pub reference: String,
    pub translation: Translation,
    pub generated_at: DateTime<Utc>,
}

impl StudyMeta {
    /// Builds the meta block for `request`, stamped at `generated_at`.
    pub fn for_request(request: &StudyRequest, generated_at: DateTime<Utc>) -> Self {
        Self {
            reference: request.subject().to_string(),
            translation: request.translation(),
            generated_at,
        }
    }
}

/// A generated study.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum StudyResult {
    Passage(PassageStudy),
    Book(BookStudy),
}

impl StudyResult {
    pub fn mode(&self) -> StudyMode {
        match self {
            Self::Passage(_) => StudyMode::Passage,
            Self::Book(_) => StudyMode::Book,
        }
    }

    pub fn meta(&self) -> &StudyMeta {
        match self {
            Self::Passage(study) => &study.meta,
            Self::Book(study) => &study.meta,
        }
    }

    pub fn as_passage(&self) -> Option<&PassageStudy> {
        match self {
            Self::Passage(study) => Some(study),
            Self::Book(_) => None,
        }
    }

    pub fn as_book(&self) -> Option<&BookStudy> {
        match self {
            Self::Book(study) => Some(study),
            Self::Passage(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::Depth;

    const PASSAGE_FIXTURE: &str = include_str!("../../tests/fixtures/passage.json");
    const BOOK_FIXTURE: &str = include_str!("../../tests/fixtures/book.json");

    fn passage_result() -> StudyResult {
        let request =
            StudyRequest::passage("Mateus 3:11", Translation::Nvi, Depth::Detailed).unwrap();
        let payload: PassagePayload = serde_json::from_str(PASSAGE_FIXTURE).unwrap();
        StudyResult::Passage(payload.into_study(StudyMeta::for_request(&request, Utc::now())))
    }

    fn book_result() -> StudyResult {
        let request = StudyRequest::book("Romanos", Translation::Arc).unwrap();
        let payload: BookPayload = serde_json::from_str(BOOK_FIXTURE).unwrap();
        StudyResult::Book(payload.into_study(StudyMeta::for_request(&request, Utc::now())))
    }

    #[test]
    fn test_passage_variant_serialization() {
        let value = serde_json::to_value(passage_result()).unwrap();
        assert_eq!(value["type"], "passage");
        assert_eq!(value["meta"]["reference"], "Mateus 3:11");
        assert_eq!(value["meta"]["translation"], "NVI");
        assert!(value.get("summary").is_some());
        assert!(value.get("sermon").is_some());
        assert!(value.get("bookIntro").is_none());
    }

    #[test]
    fn test_book_variant_serialization() {
        let value = serde_json::to_value(book_result()).unwrap();
        assert_eq!(value["type"], "book");
        assert!(value.get("bookIntro").is_some());
        for absent in ["summary", "content", "sermon", "slides"] {
            assert!(value.get(absent).is_none(), "{absent} must be absent");
        }
    }

    #[test]
    fn test_result_roundtrip_keeps_variant() {
        let original = book_result();
        let json = serde_json::to_string(&original).unwrap();
        let restored: StudyResult = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.mode(), StudyMode::Book);
        assert_eq!(restored, original);
    }

    #[test]
    fn test_accessors_follow_variant() {
        let passage = passage_result();
        assert!(passage.as_passage().is_some());
        assert!(passage.as_book().is_none());
        assert_eq!(passage.meta().translation, Translation::Nvi);

        let book = book_result();
        assert_eq!(book.mode(), StudyMode::Book);
        assert_eq!(
            book.as_book().unwrap().book_intro.general_id.name,
            "Romanos"
        );
    }
}
