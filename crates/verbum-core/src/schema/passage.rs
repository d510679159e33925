use std::sync::OnceLock;

use super::{SchemaNode, array, object, string, string_array, strict_object};

/// Contract for a passage study: meta, summary, content, sermon, slides.
pub fn passage_schema() -> &'static SchemaNode {
    static SCHEMA: OnceLock<SchemaNode> = OnceLock::new();
    SCHEMA.get_or_init(build)
}

fn build() -> SchemaNode {
    strict_object(vec![
        ("meta", meta()),
        ("summary", summary()),
        ("content", content()),
        ("sermon", sermon()),
        ("slides", slides()),
    ])
}

pub(super) fn meta() -> SchemaNode {
    object(
        vec![
            ("reference", string()),
            ("translation", string()),
            ("generated_at", string()),
        ],
        &["reference", "translation"],
    )
}

fn summary() -> SchemaNode {
    strict_object(vec![
        ("executive", string()),
        (
            "key_quote",
            string().describe(
                "A verse from the text OR a short inspirational quote summarizing the core message, suitable for a book cover.",
            ),
        ),
        ("preaching_points", string_array()),
    ])
}

fn content() -> SchemaNode {
    object(
        vec![
            ("text_base", string()),
            ("intro_definition", string()),
            ("context_literary", string()),
            ("context_historical", string()),
            ("parallels", array(parallel())),
            ("lexical_analysis", array(lexical_entry())),
            ("intertextuality", string()),
            ("interpretations", array(interpretation())),
            ("theologians", array(theologian())),
            ("implications", string()),
            ("study_questions", string_array()),
            ("bibliography", array(bibliography_entry())),
        ],
        &[
            "text_base",
            "intro_definition",
            "context_literary",
            "context_historical",
            "parallels",
            "lexical_analysis",
            "interpretations",
            "theologians",
            "implications",
            "bibliography",
        ],
    )
}

fn parallel() -> SchemaNode {
    strict_object(vec![
        ("reference", string()),
        ("text", string()),
        (
            "correlation",
            string().describe("Relationship type: Synoptic, OT Quote, thematic parallel"),
        ),
    ])
}

fn lexical_entry() -> SchemaNode {
    object(
        vec![
            ("word", string()),
            ("lemma", string()),
            ("transliteration", string()),
            (
                "morphology",
                string().describe(
                    "Strict morphological breakdown: part of speech, tense, voice, mood, case, gender, number (e.g. 'Verbo Aoristo Indicativo Ativo, 3ª Sing')",
                ),
            ),
            (
                "meaning",
                string().describe(
                    "Definition and at least 2 distinct semantic nuances or translation options",
                ),
            ),
        ],
        &["word", "lemma", "meaning"],
    )
}

fn interpretation() -> SchemaNode {
    strict_object(vec![
        (
            "tradition",
            string().describe(
                "Name of the tradition (e.g. Judaica, Patrística, Reformada, Dispensacionalista)",
            ),
        ),
        ("summary", string()),
    ])
}

fn theologian() -> SchemaNode {
    strict_object(vec![
        ("name", string()),
        (
            "era",
            string().describe(
                "Historical period or century (e.g. 'Patrística (Séc IV)', 'Reforma (Séc XVI)', 'Contemporâneo')",
            ),
        ),
        (
            "view",
            string().describe("Summary of their specific view on this passage"),
        ),
    ])
}

fn bibliography_entry() -> SchemaNode {
    object(
        vec![
            ("author", string()),
            ("title", string()),
            ("publisher", string()),
            ("year", string()),
            (
                "annotation",
                string().describe("Brief comment on why this source is valuable"),
            ),
        ],
        &["author", "title", "annotation"],
    )
}

fn sermon() -> SchemaNode {
    strict_object(vec![
        (
            "title",
            string().describe("Um título atraente, homilético e bíblico para o sermão."),
        ),
        (
            "text_focus",
            string().describe(
                "MANDATORY: the specific verses the sermon focuses on (e.g. 'João 3:16' or 'Versículos 10 a 14'). Defines the sermon scope.",
            ),
        ),
        (
            "introduction",
            string().describe("Gancho inicial e proposição do sermão"),
        ),
        ("points", array(sermon_point())),
        ("conclusion", string().describe("Resumo e apelo final")),
    ])
}

fn sermon_point() -> SchemaNode {
    strict_object(vec![
        ("title", string()),
        (
            "explanation",
            string().describe(
                "Explicação exegética. REGRA ESTRITA: cada afirmação termina com a referência bíblica exata entre parênteses. Ex: '...isto justifica o pecador (Rm 3:24)'.",
            ),
        ),
        (
            "illustration",
            string().describe("Ilustração prática ou metáfora."),
        ),
        (
            "application",
            string().describe(
                "Aplicação direta. REGRA ESTRITA: fundamente o imperativo com o versículo entre parênteses. Ex: '...devemos orar sempre (1 Ts 5:17)'.",
            ),
        ),
    ])
}

fn slides() -> SchemaNode {
    array(object(
        vec![
            ("title", string()),
            ("bullets", string_array()),
            ("image_hint", string()),
        ],
        &["title", "bullets"],
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::SchemaType;

    const FIXTURE: &str = include_str!("../../tests/fixtures/passage.json");

    #[test]
    fn test_all_sections_required() {
        let schema = passage_schema();
        assert_eq!(
            schema.required(),
            &["meta", "summary", "content", "sermon", "slides"]
        );
    }

    #[test]
    fn test_render_critical_fields_are_required() {
        let schema = passage_schema();
        assert!(schema.lookup("sermon").unwrap().is_required("text_focus"));
        assert!(schema.lookup("summary").unwrap().is_required("key_quote"));
        assert!(
            schema
                .lookup("content.theologians")
                .unwrap()
                .items()
                .unwrap()
                .is_required("era")
        );
    }

    #[test]
    fn test_array_items_declare_required_fields() {
        let schema = passage_schema();
        for path in [
            "content.parallels",
            "content.lexical_analysis",
            "content.interpretations",
            "content.theologians",
            "content.bibliography",
            "sermon.points",
            "slides",
        ] {
            let node = schema.lookup(path).unwrap();
            assert_eq!(node.kind(), SchemaType::Array, "{path}");
            let items = node.items().unwrap();
            assert_eq!(items.kind(), SchemaType::Object, "{path}");
            assert!(!items.required().is_empty(), "{path}");
        }
    }

    #[test]
    fn test_fixture_satisfies_schema() {
        let value: serde_json::Value = serde_json::from_str(FIXTURE).unwrap();
        passage_schema().validate(&value).unwrap();
    }

    #[test]
    fn test_missing_era_is_rejected() {
        let mut value: serde_json::Value = serde_json::from_str(FIXTURE).unwrap();
        value["content"]["theologians"][0]
            .as_object_mut()
            .unwrap()
            .remove("era");
        let violation = passage_schema().validate(&value).unwrap_err();
        assert_eq!(violation.path, "content.theologians[0].era");
    }

    #[test]
    fn test_static_instance_is_shared() {
        assert!(std::ptr::eq(passage_schema(), passage_schema()));
    }
}
