//! Payload of a passage study.

use serde::{Deserialize, Serialize};

use super::StudyMeta;

/// A full exegetical study of one passage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PassageStudy {
    pub meta: StudyMeta,
    pub summary: StudySummary,
    pub content: StudyContent,
    pub sermon: SermonOutline,
    pub slides: Vec<Slide>,
}

/// The part of a passage study produced by the model. `meta` is never taken
/// from the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PassagePayload {
    pub summary: StudySummary,
    pub content: StudyContent,
    pub sermon: SermonOutline,
    pub slides: Vec<Slide>,
}

impl PassagePayload {
    pub fn into_study(self, meta: StudyMeta) -> PassageStudy {
        PassageStudy {
            meta,
            summary: self.summary,
            content: self.content,
            sermon: self.sermon,
            slides: self.slides,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudySummary {
    pub executive: String,
    /// Verse or short quote summarizing the passage, fit for a cover.
    pub key_quote: String,
    pub preaching_points: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyContent {
    pub text_base: String,
    pub intro_definition: String,
    pub context_literary: String,
    pub context_historical: String,
    pub parallels: Vec<ParallelPassage>,
    pub lexical_analysis: Vec<LexicalEntry>,
    #[serde(default)]
    pub intertextuality: String,
    pub interpretations: Vec<InterpretiveTradition>,
    pub theologians: Vec<TheologianView>,
    pub implications: String,
    #[serde(default)]
    pub study_questions: Vec<String>,
    pub bibliography: Vec<BibliographicEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParallelPassage {
    pub reference: String,
    pub text: String,
    /// Synoptic, OT quote, thematic parallel...
    pub correlation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LexicalEntry {
    pub word: String,
    pub lemma: String,
    #[serde(default)]
    pub transliteration: String,
    #[serde(default)]
    pub morphology: String,
    pub meaning: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterpretiveTradition {
    pub tradition: String,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TheologianView {
    pub name: String,
    pub era: String,
    pub view: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BibliographicEntry {
    pub author: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    pub annotation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SermonOutline {
    pub title: String,
    /// The verses the sermon is built on.
    pub text_focus: String,
    pub introduction: String,
    pub points: Vec<SermonPoint>,
    pub conclusion: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SermonPoint {
    pub title: String,
    pub explanation: String,
    pub illustration: String,
    pub application: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slide {
    pub title: String,
    pub bullets: Vec<String>,
    #[serde(default)]
    pub image_hint: String,
}
