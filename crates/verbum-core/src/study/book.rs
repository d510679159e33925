//! Payload of a book introduction: eighteen fixed sections.

use serde::{Deserialize, Serialize};

use super::StudyMeta;

/// An introductory survey of a whole biblical book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookStudy {
    pub meta: StudyMeta,
    #[serde(rename = "bookIntro")]
    pub book_intro: BookIntro,
}

/// The part of a book study produced by the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookPayload {
    #[serde(rename = "bookIntro")]
    pub book_intro: BookIntro,
}

impl BookPayload {
    pub fn into_study(self, meta: StudyMeta) -> BookStudy {
        BookStudy {
            meta,
            book_intro: self.book_intro,
        }
    }
}

/// The eighteen sections, in presentation order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookIntro {
    pub general_id: GeneralIdentification,
    pub authorship: Authorship,
    pub dating: Dating,
    pub recipients: Recipients,
    pub context_cultural: CulturalContext,
    pub context_canonical: CanonicalContext,
    pub purpose: Purpose,
    pub themes: Vec<String>,
    pub central_message: String,
    pub structure: LiteraryStructure,
    pub style: LiteraryStyle,
    pub characters: Vec<Character>,
    pub theology: Theology,
    pub key_passages: Vec<KeyPassage>,
    pub redemptive_plan: RedemptivePlan,
    pub application: Application,
    pub interpretation_challenges: InterpretationChallenges,
    pub conclusion: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneralIdentification {
    pub name: String,
    pub original_name: String,
    pub canon_position: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Authorship {
    pub author_traditional: String,
    pub internal_evidence: String,
    pub external_evidence: String,
    pub academic_debate: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dating {
    pub approximate_date: String,
    pub historical_context: String,
    pub contemporary_events: String,
    pub arguments: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipients {
    pub target_audience: String,
    pub location: String,
    pub social_conditions: String,
    pub spiritual_situation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CulturalContext {
    pub political_panorama: String,
    pub culture_customs: String,
    pub economic_social: String,
    pub neighbors_relation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalContext {
    pub relation_prev_next: String,
    pub continuity_rupture: String,
    pub promise_fulfillment: String,
    pub narrative_preparation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Purpose {
    pub main_objective: String,
    pub problems_addressed: String,
    pub intent: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiteraryStructure {
    pub sections: Vec<String>,
    pub progression: String,
    pub genre: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiteraryStyle {
    pub literary_features: String,
    pub keywords: Vec<String>,
    pub techniques: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub name: String,
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theology {
    pub doctrines: Vec<String>,
    pub contributions: String,
    pub controversies: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyPassage {
    pub reference: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RedemptivePlan {
    pub christ_pointer: String,
    pub salvation_relation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    pub principles: Vec<String>,
    pub church_relevance: String,
    pub pastoral_implications: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterpretationChallenges {
    pub difficult_texts: Vec<String>,
    pub hermeneutic_problems: String,
}
