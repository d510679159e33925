//! Prompt Builder: turns a [`StudyRequest`] into the instruction pair sent
//! to the model, together with the schema that constrains the answer.

mod fragments;

pub use fragments::DepthFragments;

use minijinja::Environment;
use serde::Serialize;
use thiserror::Error;
use verbum_core::request::{StudyMode, StudyRequest};
use verbum_core::schema::{BOOK_SECTIONS, SchemaNode, schema_for};

const PASSAGE_SYSTEM: &str = include_str!("templates/passage_system.jinja");
const PASSAGE_USER: &str = include_str!("templates/passage_user.jinja");
const BOOK_SYSTEM: &str = include_str!("templates/book_system.jinja");
const BOOK_USER: &str = include_str!("templates/book_user.jinja");

/// Display titles of the book-introduction sections, aligned with
/// [`BOOK_SECTIONS`].
pub const BOOK_SECTION_TITLES: [&str; 18] = [
    "Identificação Geral",
    "Autoria (Evidências internas/externas)",
    "Datação",
    "Destinatários",
    "Contexto Histórico e Cultural",
    "Contexto Bíblico e Canônico",
    "Propósito do Livro",
    "Temas Principais",
    "Mensagem Central",
    "Estrutura Literária",
    "Estilo e Características",
    "Principais Personagens",
    "Questões Teológicas",
    "Passagens-Chave",
    "Plano Redentivo (Cristocêntrico)",
    "Aplicações Práticas",
    "Desafios de Interpretação",
    "Conclusão",
];

/// A template failed to render.
#[derive(Error, Debug)]
#[error("Failed to render prompt template: {0}")]
pub struct PromptError(#[from] minijinja::Error);

/// Everything needed for one generation call, minus sampling settings.
#[derive(Debug, Clone)]
pub struct StudyPrompt {
    pub mode: StudyMode,
    pub system_instruction: String,
    pub user_instruction: String,
    pub schema: &'static SchemaNode,
}

#[derive(Serialize)]
struct PassageSystemContext<'a> {
    depth: &'a str,
    tone: &'a str,
    directive: &'a str,
    translation: &'a str,
}

#[derive(Serialize)]
struct PassageUserContext<'a> {
    subject: &'a str,
    translation: &'a str,
    lexical: &'a str,
    theology: &'a str,
    sermon: &'a str,
}

#[derive(Serialize)]
struct BookSystemContext {
    section_count: usize,
}

#[derive(Serialize)]
struct BookUserContext<'a> {
    subject: &'a str,
    translation: &'a str,
    sections: &'a [&'a str],
}

/// Renders study prompts from the bundled Jinja templates.
pub struct PromptBuilder {
    env: Environment<'static>,
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PromptBuilder {
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        Self { env }
    }

    /// Builds the prompt for `request`, branching on its mode.
    ///
    /// Pure: the same request always yields the same prompt.
    pub fn build(&self, request: &StudyRequest) -> Result<StudyPrompt, PromptError> {
        let (system_instruction, user_instruction) = match request.mode() {
            StudyMode::Passage => self.passage(request)?,
            StudyMode::Book => self.book(request)?,
        };

        Ok(StudyPrompt {
            mode: request.mode(),
            system_instruction,
            user_instruction,
            schema: schema_for(request.mode()),
        })
    }

    fn passage(&self, request: &StudyRequest) -> Result<(String, String), PromptError> {
        let fragments = DepthFragments::for_depth(request.depth());
        let translation = request.translation();

        let system = self.env.render_str(
            PASSAGE_SYSTEM,
            PassageSystemContext {
                depth: request.depth().code(),
                tone: fragments.tone,
                directive: fragments.directive,
                translation: translation.as_ref(),
            },
        )?;
        let user = self.env.render_str(
            PASSAGE_USER,
            PassageUserContext {
                subject: request.subject(),
                translation: translation.as_ref(),
                lexical: fragments.lexical,
                theology: fragments.theology,
                sermon: fragments.sermon,
            },
        )?;
        Ok((system, user))
    }

    fn book(&self, request: &StudyRequest) -> Result<(String, String), PromptError> {
        let system = self.env.render_str(
            BOOK_SYSTEM,
            BookSystemContext {
                section_count: BOOK_SECTIONS.len(),
            },
        )?;
        let user = self.env.render_str(
            BOOK_USER,
            BookUserContext {
                subject: request.subject(),
                translation: request.translation().as_ref(),
                sections: &BOOK_SECTION_TITLES,
            },
        )?;
        Ok((system, user))
    }
}
