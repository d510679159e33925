use std::sync::OnceLock;

use super::{SchemaNode, array, object, string, string_array, strict_object};

/// Names of the eighteen book-introduction sections, in order.
pub const BOOK_SECTIONS: [&str; 18] = [
    "general_id",
    "authorship",
    "dating",
    "recipients",
    "context_cultural",
    "context_canonical",
    "purpose",
    "themes",
    "central_message",
    "structure",
    "style",
    "characters",
    "theology",
    "key_passages",
    "redemptive_plan",
    "application",
    "interpretation_challenges",
    "conclusion",
];

/// Contract for a book introduction: meta plus `bookIntro` with all
/// eighteen sections required.
pub fn book_schema() -> &'static SchemaNode {
    static SCHEMA: OnceLock<SchemaNode> = OnceLock::new();
    SCHEMA.get_or_init(build)
}

fn build() -> SchemaNode {
    strict_object(vec![
        (
            "meta",
            object(
                vec![
                    ("reference", string()),
                    ("translation", string()),
                    ("generated_at", string()),
                ],
                &["reference"],
            ),
        ),
        ("bookIntro", book_intro()),
    ])
}

fn strings(names: &[&'static str]) -> SchemaNode {
    strict_object(names.iter().map(|name| (*name, string())).collect())
}

fn book_intro() -> SchemaNode {
    strict_object(vec![
        (
            "general_id",
            strings(&["name", "original_name", "canon_position"]),
        ),
        (
            "authorship",
            strings(&[
                "author_traditional",
                "internal_evidence",
                "external_evidence",
                "academic_debate",
            ]),
        ),
        (
            "dating",
            strings(&[
                "approximate_date",
                "historical_context",
                "contemporary_events",
                "arguments",
            ]),
        ),
        (
            "recipients",
            strings(&[
                "target_audience",
                "location",
                "social_conditions",
                "spiritual_situation",
            ]),
        ),
        (
            "context_cultural",
            strings(&[
                "political_panorama",
                "culture_customs",
                "economic_social",
                "neighbors_relation",
            ]),
        ),
        (
            "context_canonical",
            strings(&[
                "relation_prev_next",
                "continuity_rupture",
                "promise_fulfillment",
                "narrative_preparation",
            ]),
        ),
        (
            "purpose",
            strings(&["main_objective", "problems_addressed", "intent"]),
        ),
        ("themes", string_array()),
        ("central_message", string()),
        (
            "structure",
            strict_object(vec![
                ("sections", string_array()),
                ("progression", string()),
                ("genre", string()),
            ]),
        ),
        (
            "style",
            strict_object(vec![
                ("literary_features", string()),
                ("keywords", string_array()),
                ("techniques", string()),
            ]),
        ),
        ("characters", array(strings(&["name", "role"]))),
        (
            "theology",
            strict_object(vec![
                ("doctrines", string_array()),
                ("contributions", string()),
                ("controversies", string()),
            ]),
        ),
        (
            "key_passages",
            array(strings(&["reference", "description"])),
        ),
        (
            "redemptive_plan",
            strings(&["christ_pointer", "salvation_relation"]),
        ),
        (
            "application",
            strict_object(vec![
                ("principles", string_array()),
                ("church_relevance", string()),
                ("pastoral_implications", string()),
            ]),
        ),
        (
            "interpretation_challenges",
            strict_object(vec![
                ("difficult_texts", string_array()),
                ("hermeneutic_problems", string()),
            ]),
        ),
        ("conclusion", string()),
    ])
}
