//! The request model: what the caller wants generated.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::error::{Result, StudyError};

/// Supported Bible translations.
///
/// Portuguese: NVI, ARC, ACF, KJA, NVT, NAA. English: KJV, NIV, ESV.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "UPPERCASE", try_from = "String")]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum Translation {
    #[default]
    Nvi,
    Arc,
    Acf,
    Kja,
    Nvt,
    Naa,
    Kjv,
    Niv,
    Esv,
}

impl TryFrom<String> for Translation {
    type Error = strum::ParseError;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.trim().parse()
    }
}

impl Translation {
    /// Whether this is one of the English translations.
    pub fn is_english(&self) -> bool {
        matches!(self, Self::Kjv | Self::Niv | Self::Esv)
    }
}

/// Depth of a passage study.
///
/// Only meaningful in passage mode. Parsing never fails: unknown codes fall
/// back to [`Depth::Detailed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, EnumIter)]
#[serde(from = "String")]
pub enum Depth {
    #[serde(rename = "rapido")]
    Quick,
    #[default]
    #[serde(rename = "detalhado")]
    Detailed,
    #[serde(rename = "academico")]
    Academic,
    #[serde(rename = "sermao")]
    Sermon,
}

impl Depth {
    /// Lenient parse of a depth code. Accepts the Portuguese wire codes and
    /// their English names.
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_lowercase().as_str() {
            "rapido" | "rápido" | "quick" => Self::Quick,
            "academico" | "acadêmico" | "academic" => Self::Academic,
            "sermao" | "sermão" | "sermon" => Self::Sermon,
            _ => Self::Detailed,
        }
    }

    /// The wire code used in requests and prompts.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Quick => "rapido",
            Self::Detailed => "detalhado",
            Self::Academic => "academico",
            Self::Sermon => "sermao",
        }
    }
}

impl From<String> for Depth {
    fn from(value: String) -> Self {
        Self::from_code(&value)
    }
}

impl std::str::FromStr for Depth {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::from_code(s))
    }
}

impl std::fmt::Display for Depth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Which study is generated.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum StudyMode {
    /// Exegetical study of one scripture reference.
    #[default]
    Passage,
    /// Eighteen-section introduction to a whole book.
    Book,
}

/// An immutable request for a study.
///
/// `subject` is a passage reference ("Mateus 3:11") in passage mode and a
/// book name ("Romanos") in book mode. `depth` is kept in book mode but not
/// used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawStudyRequest")]
pub struct StudyRequest {
    subject: String,
    translation: Translation,
    depth: Depth,
    mode: StudyMode,
}

/// Wire shape of [`StudyRequest`]; deserialization goes through
/// [`StudyRequest::new`].
#[derive(Deserialize)]
struct RawStudyRequest {
    subject: String,
    translation: Translation,
    #[serde(default)]
    depth: Depth,
    #[serde(default)]
    mode: StudyMode,
}

impl TryFrom<RawStudyRequest> for StudyRequest {
    type Error = StudyError;

    fn try_from(raw: RawStudyRequest) -> Result<Self> {
        Self::new(raw.subject, raw.translation, raw.depth, raw.mode)
    }
}

impl StudyRequest {
    /// Creates a request, trimming the subject.
    ///
    /// # Errors
    ///
    /// Returns [`StudyError::InvalidRequest`] if the subject is blank.
    pub fn new(
        subject: impl Into<String>,
        translation: Translation,
        depth: Depth,
        mode: StudyMode,
    ) -> Result<Self> {
        let subject = subject.into().trim().to_string();
        if subject.is_empty() {
            return Err(StudyError::invalid_request(match mode {
                StudyMode::Passage => "informe uma passagem bíblica",
                StudyMode::Book => "informe o nome de um livro bíblico",
            }));
        }
        Ok(Self {
            subject,
            translation,
            depth,
            mode,
        })
    }

    /// Shorthand for a passage-mode request.
    pub fn passage(subject: impl Into<String>, translation: Translation, depth: Depth) -> Result<Self> {
        Self::new(subject, translation, depth, StudyMode::Passage)
    }

    /// Shorthand for a book-mode request. Depth is left at its default.
    pub fn book(subject: impl Into<String>, translation: Translation) -> Result<Self> {
        Self::new(subject, translation, Depth::default(), StudyMode::Book)
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn translation(&self) -> Translation {
        self.translation
    }

    pub fn depth(&self) -> Depth {
        self.depth
    }

    pub fn mode(&self) -> StudyMode {
        self.mode
    }
}
