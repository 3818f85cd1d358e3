//! Identifier validator
//!
//! Applies to String values tagged with a `FullyQualifiedIdentifier`
//! constraint. The tag maps into the closed `IdentifierKind` set; a tag
//! outside that set is a fatal, unsupported-input error at generation time.
//! Each kind owns an anchored grammar for fully qualified identifiers:
//!
//! ```text
//! originator/category/Feature/vN[/Kind/Identifier]
//! ```

use std::collections::HashMap;

use regex::Regex;

use crate::error::Result;
use crate::model::{Constraints, DataType, IdentifierKind};

use super::{GuardCondition, ValidationSet, Validator};

const NAME: &str = "[A-Z][a-zA-Z0-9]*";
const DOMAIN: &str = "[a-z][a-z0-9]*(\\.[a-z][a-z0-9]*)*";

pub struct IdentifierValidator {
    patterns: HashMap<IdentifierKind, Regex>,
}

impl Default for IdentifierValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdentifierValidator {
    pub fn new() -> Self {
        let feature = format!("{DOMAIN}/{DOMAIN}/{NAME}/v[0-9]+");
        let command = format!("{feature}/Command/{NAME}");

        let kinds = [
            (IdentifierKind::FeatureIdentifier, feature.clone()),
            (IdentifierKind::CommandIdentifier, command.clone()),
            (
                IdentifierKind::CommandParameterIdentifier,
                format!("{command}/Parameter/{NAME}"),
            ),
            (
                IdentifierKind::CommandResponseIdentifier,
                format!("{command}/Response/{NAME}"),
            ),
            (
                IdentifierKind::IntermediateResponseIdentifier,
                format!("{command}/IntermediateResponse/{NAME}"),
            ),
            (
                IdentifierKind::DefinedExecutionErrorIdentifier,
                format!("{feature}/DefinedExecutionError/{NAME}"),
            ),
            (
                IdentifierKind::PropertyIdentifier,
                format!("{feature}/Property/{NAME}"),
            ),
            (
                IdentifierKind::TypeIdentifier,
                format!("{feature}/DataType/{NAME}"),
            ),
            (
                IdentifierKind::MetadataIdentifier,
                format!("{feature}/Metadata/{NAME}"),
            ),
        ];

        let patterns = kinds
            .into_iter()
            .map(|(kind, body)| {
                // Grammar fragments are static; an invalid pattern is a bug
                (kind, Regex::new(&format!("^{}$", body)).unwrap())
            })
            .collect();

        Self { patterns }
    }

    /// The anchored pattern for an identifier kind
    pub fn pattern(&self, kind: IdentifierKind) -> &Regex {
        &self.patterns[&kind]
    }

    /// Check a candidate against the grammar for `kind`
    pub fn is_valid(&self, kind: IdentifierKind, candidate: &str) -> bool {
        self.pattern(kind).is_match(candidate)
    }
}

impl Validator for IdentifierValidator {
    fn name(&self) -> &'static str {
        "identifier"
    }

    fn create_validations(
        &self,
        property: &str,
        data_type: &DataType,
        constraints: &Constraints,
    ) -> Result<Vec<ValidationSet>> {
        if !matches!(data_type, DataType::String) {
            return Ok(Vec::new());
        }
        let Some(tag) = &constraints.fully_qualified_identifier else {
            return Ok(Vec::new());
        };

        let kind = IdentifierKind::parse(tag, property)?;
        let pattern = self.pattern(kind).as_str().to_string();

        Ok(vec![ValidationSet {
            condition: GuardCondition::NotIdentifier { kind, pattern },
            message: format!(
                "Invalid value {{}} for {}: value is not a valid {}",
                property, kind
            ),
        }])
    }
}
