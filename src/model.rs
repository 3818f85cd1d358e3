//! Feature schema model
//!
//! The object graph handed to the generator core by an external front end:
//! features containing commands and properties, each carrying a `DataType`
//! and optional declarative `Constraints`.

use serde::{Deserialize, Serialize};

use crate::error::{GeneratorError, Result};

/// The closed set of scalar data kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BasicType {
    String,
    Integer,
    Real,
    Boolean,
    Date,
    Time,
    Timestamp,
}

impl std::fmt::Display for BasicType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            BasicType::String => "String",
            BasicType::Integer => "Integer",
            BasicType::Real => "Real",
            BasicType::Boolean => "Boolean",
            BasicType::Date => "Date",
            BasicType::Time => "Time",
            BasicType::Timestamp => "Timestamp",
        };
        write!(f, "{}", name)
    }
}

/// A data type: one of the seven scalar kinds, a list, or a structure.
///
/// Structures may be anonymous, in which case a synthesized unique name
/// identifies them; their fields may reference the structure's own name,
/// directly or through another anonymous structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum DataType {
    String,
    Integer,
    Real,
    Boolean,
    Date,
    Time,
    Timestamp,
    List(Box<DataType>),
    Structure(StructureType),
}

impl DataType {
    /// Project the scalar kind, if this is not a List or Structure
    pub fn basic_kind(&self) -> Option<BasicType> {
        match self {
            DataType::String => Some(BasicType::String),
            DataType::Integer => Some(BasicType::Integer),
            DataType::Real => Some(BasicType::Real),
            DataType::Boolean => Some(BasicType::Boolean),
            DataType::Date => Some(BasicType::Date),
            DataType::Time => Some(BasicType::Time),
            DataType::Timestamp => Some(BasicType::Timestamp),
            DataType::List(_) | DataType::Structure(_) => None,
        }
    }

    /// Whether this is one of the seven scalar kinds
    pub fn is_scalar(&self) -> bool {
        self.basic_kind().is_some()
    }
}

impl std::fmt::Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataType::List(element) => write!(f, "List<{}>", element),
            DataType::Structure(s) => write!(f, "Structure({})", s.name),
            other => match other.basic_kind() {
                Some(kind) => write!(f, "{}", kind),
                None => unreachable!(),
            },
        }
    }
}

/// A named aggregate of typed fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructureType {
    /// Structure name; synthesized for anonymous structures
    pub name: String,
    /// Ordered field sequence
    pub fields: Vec<StructureField>,
}

/// A single field of a structure type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructureField {
    pub name: String,
    pub data_type: DataType,
}

/// Declarative constraints attached to a property or parameter.
///
/// Every field is optional and independent; absence means "no check of that
/// kind". Challenge values are kept textual; parsing happens at guard
/// synthesis time against the concrete data kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Constraints {
    pub maximal_length: Option<String>,
    pub minimal_length: Option<String>,
    pub length: Option<String>,
    pub minimal_inclusive: Option<String>,
    pub minimal_exclusive: Option<String>,
    pub maximal_inclusive: Option<String>,
    pub maximal_exclusive: Option<String>,
    pub pattern: Option<String>,
    pub fully_qualified_identifier: Option<String>,
}

impl Constraints {
    /// True if no constraint field is populated
    pub fn is_empty(&self) -> bool {
        self == &Constraints::default()
    }
}

/// The kinds of fully qualified identifiers a String value may be tagged with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IdentifierKind {
    FeatureIdentifier,
    CommandIdentifier,
    CommandParameterIdentifier,
    CommandResponseIdentifier,
    IntermediateResponseIdentifier,
    DefinedExecutionErrorIdentifier,
    PropertyIdentifier,
    TypeIdentifier,
    MetadataIdentifier,
}

impl IdentifierKind {
    /// Parse an identifier-kind tag.
    ///
    /// A tag outside the closed set is an unsupported-input error at
    /// generation time, surfaced with the property for context.
    pub fn parse(tag: &str, property: &str) -> Result<Self> {
        match tag {
            "FeatureIdentifier" => Ok(IdentifierKind::FeatureIdentifier),
            "CommandIdentifier" => Ok(IdentifierKind::CommandIdentifier),
            "CommandParameterIdentifier" => Ok(IdentifierKind::CommandParameterIdentifier),
            "CommandResponseIdentifier" => Ok(IdentifierKind::CommandResponseIdentifier),
            "IntermediateResponseIdentifier" => Ok(IdentifierKind::IntermediateResponseIdentifier),
            "DefinedExecutionErrorIdentifier" => Ok(IdentifierKind::DefinedExecutionErrorIdentifier),
            "PropertyIdentifier" => Ok(IdentifierKind::PropertyIdentifier),
            "TypeIdentifier" => Ok(IdentifierKind::TypeIdentifier),
            "MetadataIdentifier" => Ok(IdentifierKind::MetadataIdentifier),
            other => Err(GeneratorError::UnknownIdentifierKind {
                property: property.to_string(),
                kind: other.to_string(),
            }),
        }
    }

    /// The tag name as it appears in schemas
    pub fn tag(&self) -> &'static str {
        match self {
            IdentifierKind::FeatureIdentifier => "FeatureIdentifier",
            IdentifierKind::CommandIdentifier => "CommandIdentifier",
            IdentifierKind::CommandParameterIdentifier => "CommandParameterIdentifier",
            IdentifierKind::CommandResponseIdentifier => "CommandResponseIdentifier",
            IdentifierKind::IntermediateResponseIdentifier => "IntermediateResponseIdentifier",
            IdentifierKind::DefinedExecutionErrorIdentifier => "DefinedExecutionErrorIdentifier",
            IdentifierKind::PropertyIdentifier => "PropertyIdentifier",
            IdentifierKind::TypeIdentifier => "TypeIdentifier",
            IdentifierKind::MetadataIdentifier => "MetadataIdentifier",
        }
    }
}

impl std::fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// A named collection of commands and properties describing an addressable
/// capability
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feature {
    /// Fully qualified feature identifier, if already assigned
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub commands: Vec<Command>,
    #[serde(default)]
    pub properties: Vec<Property>,
}

/// A named command with typed parameters and responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Command {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    #[serde(default)]
    pub responses: Vec<Parameter>,
}

/// A typed command parameter or response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub data_type: DataType,
    #[serde(default)]
    pub constraints: Option<Constraints>,
}

/// A typed, readable property of a feature
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Property {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub data_type: DataType,
    #[serde(default)]
    pub constraints: Option<Constraints>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_kind_projection() {
        assert_eq!(DataType::Integer.basic_kind(), Some(BasicType::Integer));
        assert_eq!(DataType::Timestamp.basic_kind(), Some(BasicType::Timestamp));
        assert_eq!(DataType::List(Box::new(DataType::String)).basic_kind(), None);
    }

    #[test]
    fn test_structural_equality() {
        let a = DataType::Structure(StructureType {
            name: "Point".to_string(),
            fields: vec![
                StructureField { name: "x".to_string(), data_type: DataType::Real },
                StructureField { name: "y".to_string(), data_type: DataType::Real },
            ],
        });
        let b = a.clone();
        assert_eq!(a, b);

        // Field order matters
        let c = DataType::Structure(StructureType {
            name: "Point".to_string(),
            fields: vec![
                StructureField { name: "y".to_string(), data_type: DataType::Real },
                StructureField { name: "x".to_string(), data_type: DataType::Real },
            ],
        });
        assert_ne!(a, c);
    }

    #[test]
    fn test_identifier_kind_parse() {
        let kind = IdentifierKind::parse("FeatureIdentifier", "Target").unwrap();
        assert_eq!(kind, IdentifierKind::FeatureIdentifier);

        let err = IdentifierKind::parse("ServerIdentifier", "Target").unwrap_err();
        assert!(err.to_string().contains("ServerIdentifier"));
    }

    #[test]
    fn test_constraints_roundtrip() {
        let json = r#"{"maximal_length": "10", "pattern": "^[A-Z]+$"}"#;
        let constraints: Constraints = serde_json::from_str(json).unwrap();
        assert_eq!(constraints.maximal_length.as_deref(), Some("10"));
        assert_eq!(constraints.pattern.as_deref(), Some("^[A-Z]+$"));
        assert!(constraints.minimal_length.is_none());
        assert!(!constraints.is_empty());
        assert!(Constraints::default().is_empty());
    }
}
