//! Structural contracts for model output.
//!
//! A [`SchemaNode`] is plain data: a type tag, nested properties and a
//! required set. The same node is sent to the generation service (via
//! [`SchemaNode::to_json`]) and used to check what comes back (via
//! [`SchemaNode::validate`]).
//!
//! Two static instances exist, built once on first use:
//! [`passage_schema`] and [`book_schema`].

mod book;
mod passage;

use std::fmt;

use serde_json::{Map, Value};

pub use book::{BOOK_SECTIONS, book_schema};
pub use passage::passage_schema;

use crate::request::StudyMode;

/// Primitive shape of a schema node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaType {
    String,
    Array,
    Object,
}

impl SchemaType {
    /// Type name in the generation service's schema dialect.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "STRING",
            Self::Array => "ARRAY",
            Self::Object => "OBJECT",
        }
    }
}

/// A named property of an object node. Order is preserved.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaProperty {
    pub name: &'static str,
    pub node: SchemaNode,
}

/// One node of a structural contract.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaNode {
    kind: SchemaType,
    description: Option<&'static str>,
    items: Option<Box<SchemaNode>>,
    properties: Vec<SchemaProperty>,
    required: Vec<&'static str>,
}

// ============================================================================
// Builders
// ============================================================================

/// A string leaf.
pub fn string() -> SchemaNode {
    SchemaNode {
        kind: SchemaType::String,
        description: None,
        items: None,
        properties: Vec::new(),
        required: Vec::new(),
    }
}

/// An array of `items`.
pub fn array(items: SchemaNode) -> SchemaNode {
    SchemaNode {
        kind: SchemaType::Array,
        description: None,
        items: Some(Box::new(items)),
        properties: Vec::new(),
        required: Vec::new(),
    }
}

/// An array of strings.
pub fn string_array() -> SchemaNode {
    array(string())
}

/// An object with ordered `properties`, of which `required` must be present.
///
/// Every required name must be one of the declared properties.
pub fn object(
    properties: Vec<(&'static str, SchemaNode)>,
    required: &[&'static str],
) -> SchemaNode {
    debug_assert!(
        required
            .iter()
            .all(|name| properties.iter().any(|(prop, _)| prop == name)),
        "required field not declared as property"
    );
    SchemaNode {
        kind: SchemaType::Object,
        description: None,
        items: None,
        properties: properties
            .into_iter()
            .map(|(name, node)| SchemaProperty { name, node })
            .collect(),
        required: required.to_vec(),
    }
}

/// An object whose properties are all required.
pub fn strict_object(properties: Vec<(&'static str, SchemaNode)>) -> SchemaNode {
    let required: Vec<&'static str> = properties.iter().map(|(name, _)| *name).collect();
    object(properties, &required)
}

impl SchemaNode {
    /// Attaches a description that guides the model.
    pub fn describe(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }

    pub fn kind(&self) -> SchemaType {
        self.kind
    }

    pub fn description(&self) -> Option<&'static str> {
        self.description
    }

    pub fn items(&self) -> Option<&SchemaNode> {
        self.items.as_deref()
    }

    pub fn properties(&self) -> &[SchemaProperty] {
        &self.properties
    }

    pub fn required(&self) -> &[&'static str] {
        &self.required
    }

    pub fn is_required(&self, name: &str) -> bool {
        self.required.iter().any(|field| *field == name)
    }

    /// Looks up a direct property by name.
    pub fn property(&self, name: &str) -> Option<&SchemaNode> {
        self.properties
            .iter()
            .find(|prop| prop.name == name)
            .map(|prop| &prop.node)
    }

    /// Follows a dotted path of property names (`items` are traversed
    /// implicitly for arrays), e.g. `content.theologians.era`.
    pub fn lookup(&self, path: &str) -> Option<&SchemaNode> {
        path.split('.').try_fold(self, |node, segment| {
            let node = match node.kind {
                SchemaType::Array => node.items()?,
                _ => node,
            };
            node.property(segment)
        })
    }

    // ============================================================================
    // Service dialect
    // ============================================================================

    /// Renders the node as the generation service's `responseSchema` JSON.
    pub fn to_json(&self) -> Value {
        let mut map = Map::new();
        map.insert("type".into(), Value::from(self.kind.as_str()));
        if let Some(description) = self.description {
            map.insert("description".into(), Value::from(description));
        }
        if let Some(items) = &self.items {
            map.insert("items".into(), items.to_json());
        }
        if !self.properties.is_empty() {
            let properties: Map<String, Value> = self
                .properties
                .iter()
                .map(|prop| (prop.name.to_string(), prop.node.to_json()))
                .collect();
            map.insert("properties".into(), Value::Object(properties));
            map.insert(
                "propertyOrdering".into(),
                Value::from(
                    self.properties
                        .iter()
                        .map(|prop| prop.name)
                        .collect::<Vec<_>>(),
                ),
            );
        }
        if !self.required.is_empty() {
            map.insert("required".into(), Value::from(self.required.clone()));
        }
        Value::Object(map)
    }

    // ============================================================================
    // Validation
    // ============================================================================

    /// Checks `value` against this node.
    ///
    /// Types, required fields and array items are checked recursively.
    /// Undeclared keys are tolerated. A `null` counts as absent.
    ///
    /// # Errors
    ///
    /// Returns the first violation found, depth-first in declaration order.
    pub fn validate(&self, value: &Value) -> Result<(), SchemaViolation> {
        self.validate_at(value, &mut String::new())
    }

    fn validate_at(&self, value: &Value, path: &mut String) -> Result<(), SchemaViolation> {
        match self.kind {
            SchemaType::String => {
                if !value.is_string() {
                    return Err(SchemaViolation::new(path, type_mismatch("string", value)));
                }
            }
            SchemaType::Array => {
                let Some(elements) = value.as_array() else {
                    return Err(SchemaViolation::new(path, type_mismatch("array", value)));
                };
                if let Some(items) = &self.items {
                    for (index, element) in elements.iter().enumerate() {
                        let len = path.len();
                        path.push_str(&format!("[{index}]"));
                        items.validate_at(element, path)?;
                        path.truncate(len);
                    }
                }
            }
            SchemaType::Object => {
                let Some(fields) = value.as_object() else {
                    return Err(SchemaViolation::new(path, type_mismatch("object", value)));
                };
                for prop in &self.properties {
                    let len = path.len();
                    if !path.is_empty() {
                        path.push('.');
                    }
                    path.push_str(prop.name);
                    match fields.get(prop.name) {
                        None | Some(Value::Null) => {
                            if self.is_required(prop.name) {
                                return Err(SchemaViolation::new(path, "missing required field"));
                            }
                        }
                        Some(field) => prop.node.validate_at(field, path)?,
                    }
                    path.truncate(len);
                }
            }
        }
        Ok(())
    }
}

fn type_mismatch(expected: &str, found: &Value) -> String {
    let found = match found {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    };
    format!("expected {expected}, found {found}")
}

/// First mismatch between a value and a schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaViolation {
    /// Location, e.g. `content.theologians[2].era`. Empty for the root.
    pub path: String,
    pub reason: String,
}

impl SchemaViolation {
    fn new(path: &str, reason: impl Into<String>) -> Self {
        Self {
            path: path.to_string(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for SchemaViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "at root: {}", self.reason)
        } else {
            write!(f, "at `{}`: {}", self.path, self.reason)
        }
    }
}

impl std::error::Error for SchemaViolation {}

/// The schema that governs `mode`.
pub fn schema_for(mode: StudyMode) -> &'static SchemaNode {
    match mode {
        StudyMode::Passage => passage_schema(),
        StudyMode::Book => book_schema(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn person() -> SchemaNode {
        object(
            vec![
                ("name", string()),
                ("tags", string_array()),
                (
                    "quotes",
                    array(strict_object(vec![("text", string()), ("source", string())])),
                ),
                ("nickname", string()),
            ],
            &["name", "tags", "quotes"],
        )
    }

    #[test]
    fn test_valid_value_passes() {
        let value = json!({
            "name": "Agostinho",
            "tags": ["Patrística"],
            "quotes": [{"text": "Tolle, lege", "source": "Confissões"}],
            "extra": 1
        });
        assert!(person().validate(&value).is_ok());
    }

    #[test]
    fn test_missing_required_field() {
        let value = json!({"name": "Calvino", "quotes": []});
        let violation = person().validate(&value).unwrap_err();
        assert_eq!(violation.path, "tags");
        assert_eq!(violation.reason, "missing required field");
    }

    #[test]
    fn test_null_counts_as_absent() {
        let value = json!({"name": "Lutero", "tags": null, "quotes": []});
        assert_eq!(person().validate(&value).unwrap_err().path, "tags");

        let value = json!({"name": "Lutero", "tags": [], "quotes": [], "nickname": null});
        assert!(person().validate(&value).is_ok());
    }

    #[test]
    fn test_nested_item_path() {
        let value = json!({
            "name": "Wesley",
            "tags": [],
            "quotes": [
                {"text": "a", "source": "b"},
                {"text": "c"}
            ]
        });
        let violation = person().validate(&value).unwrap_err();
        assert_eq!(violation.path, "quotes[1].source");
        assert_eq!(violation.to_string(), "at `quotes[1].source`: missing required field");
    }

    #[test]
    fn test_type_mismatch() {
        let value = json!({"name": 42, "tags": [], "quotes": []});
        let violation = person().validate(&value).unwrap_err();
        assert_eq!(violation.path, "name");
        assert_eq!(violation.reason, "expected string, found number");

        let violation = person().validate(&json!([])).unwrap_err();
        assert_eq!(violation.to_string(), "at root: expected object, found array");
    }

    #[test]
    fn test_to_json_dialect() {
        let json = person().describe("A theologian").to_json();
        assert_eq!(json["type"], "OBJECT");
        assert_eq!(json["description"], "A theologian");
        assert_eq!(json["properties"]["tags"]["type"], "ARRAY");
        assert_eq!(json["properties"]["tags"]["items"]["type"], "STRING");
        assert_eq!(json["required"], json!(["name", "tags", "quotes"]));
        assert_eq!(
            json["propertyOrdering"],
            json!(["name", "tags", "quotes", "nickname"])
        );
        assert!(json["properties"]["name"].get("required").is_none());
    }

    #[test]
    fn test_lookup_traverses_arrays() {
        let schema = person();
        assert_eq!(schema.lookup("quotes.source").unwrap().kind(), SchemaType::String);
        assert!(schema.lookup("quotes.missing").is_none());
    }

    #[test]
    fn test_schema_for_mode() {
        assert!(std::ptr::eq(schema_for(StudyMode::Passage), passage_schema()));
        assert!(std::ptr::eq(schema_for(StudyMode::Book), book_schema()));
    }
}
