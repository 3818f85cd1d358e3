//! Constraint-to-guard synthesis
//!
//! Pluggable validators, each declaring "given a property of type T with
//! constraints C, produce zero or more guard clauses". Every property is
//! offered to every registered validator regardless of its type; a validator
//! that does not apply yields zero results. Guards compose as "if any
//! condition is true, the property is invalid", evaluated in registration
//! order, first failing message wins.
//!
//! The core never executes guards. Conditions are a small structured
//! vocabulary; `GuardCondition::render` produces the reference textual form
//! a downstream emitter may rewrite into its target language.

pub mod identifier;
pub mod length;
pub mod number;
pub mod regex;

pub use identifier::IdentifierValidator;
pub use length::LengthValidator;
pub use number::NumberValidator;
pub use regex::PatternValidator;

use crate::coercion::Literal;
use crate::error::Result;
use crate::model::{Constraints, DataType, Feature, IdentifierKind};

// =============================================================================
// Guard clauses
// =============================================================================

/// Comparison operator of a violation condition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Lt,
    Le,
    Gt,
    Ge,
}

impl CompareOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            CompareOp::Lt => "<",
            CompareOp::Le => "<=",
            CompareOp::Gt => ">",
            CompareOp::Ge => ">=",
        }
    }

    /// Violation-direction wording. This exact vocabulary is part of the
    /// generated diagnostic contract and downstream consumers parse against
    /// it.
    pub fn violation_phrase(&self) -> &'static str {
        match self {
            CompareOp::Lt => "at least",
            CompareOp::Le => "at least more than",
            CompareOp::Gt => "at most",
            CompareOp::Ge => "at most less than",
        }
    }
}

/// A boolean violation condition over a property's runtime value
#[derive(Debug, Clone, PartialEq)]
pub enum GuardCondition {
    /// length > n (String: character count, List: element count)
    LengthExceeds(u64),
    /// length < n
    LengthBelow(u64),
    /// length != n
    LengthDiffers(u64),
    /// value `op` bound, compared on the typed value
    Compare { op: CompareOp, bound: Literal },
    /// value does not match the regular expression
    NotMatches { pattern: String },
    /// value is not a fully qualified identifier of the given kind
    NotIdentifier { kind: IdentifierKind, pattern: String },
}

impl GuardCondition {
    /// Render the reference textual form of this condition over `ident`
    pub fn render(&self, ident: &str) -> String {
        match self {
            GuardCondition::LengthExceeds(n) => format!("len({}) > {}", ident, n),
            GuardCondition::LengthBelow(n) => format!("len({}) < {}", ident, n),
            GuardCondition::LengthDiffers(n) => format!("len({}) != {}", ident, n),
            GuardCondition::Compare { op, bound } => {
                format!("{} {} {}", ident, op.symbol(), bound)
            }
            GuardCondition::NotMatches { pattern } => {
                format!("!matches({}, {:?})", ident, pattern)
            }
            GuardCondition::NotIdentifier { pattern, .. } => {
                format!("!matches({}, {:?})", ident, pattern)
            }
        }
    }
}

/// The atomic output unit: a violation condition plus the message template
/// formatted with the offending value (`{}`) at guard-evaluation time
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationSet {
    pub condition: GuardCondition,
    pub message: String,
}

// =============================================================================
// Validator contract
// =============================================================================

/// A pluggable guard synthesizer.
///
/// Validators are pure with respect to the schema and are selected
/// irrespective of type; the type-applicability check is validator-internal.
pub trait Validator {
    fn name(&self) -> &'static str;

    /// Produce zero or more guard clauses for one property
    fn create_validations(
        &self,
        property: &str,
        data_type: &DataType,
        constraints: &Constraints,
    ) -> Result<Vec<ValidationSet>>;
}

// =============================================================================
// Registry
// =============================================================================

/// Guard clauses accumulated for one schema member
#[derive(Debug, Clone)]
pub struct MemberValidations {
    /// Member path within the feature (e.g. "Commands/SetTarget/Target")
    pub member: String,
    pub validations: Vec<ValidationSet>,
}

/// An explicit, enumerated validator set.
///
/// Registration replaces plugin discovery: the validator set is auditable
/// and deterministic, and registration order fixes message precedence.
#[derive(Default)]
pub struct ValidationRegistry {
    validators: Vec<Box<dyn Validator>>,
}

impl ValidationRegistry {
    /// An empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// The reference validator set, in its fixed order
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(LengthValidator));
        registry.register(Box::new(NumberValidator));
        registry.register(Box::new(PatternValidator));
        registry.register(Box::new(IdentifierValidator::new()));
        registry
    }

    /// Append a validator; later registrations run after earlier ones
    pub fn register(&mut self, validator: Box<dyn Validator>) {
        self.validators.push(validator);
    }

    /// Registered validator names, in registration order
    pub fn validator_names(&self) -> Vec<&'static str> {
        self.validators.iter().map(|v| v.name()).collect()
    }

    /// Offer one property to every registered validator and merge the guard
    /// clauses in registration order
    pub fn validations_for(
        &self,
        property: &str,
        data_type: &DataType,
        constraints: &Constraints,
    ) -> Result<Vec<ValidationSet>> {
        let mut merged = Vec::new();
        for validator in &self.validators {
            merged.extend(validator.create_validations(property, data_type, constraints)?);
        }
        Ok(merged)
    }

    /// Run guard synthesis over every property and command parameter of a
    /// feature. Members without constraints produce no entry.
    pub fn validate_feature(&self, feature: &Feature) -> Result<Vec<MemberValidations>> {
        let mut results = Vec::new();

        for property in &feature.properties {
            if let Some(constraints) = &property.constraints {
                let validations =
                    self.validations_for(&property.name, &property.data_type, constraints)?;
                if !validations.is_empty() {
                    results.push(MemberValidations {
                        member: format!("Properties/{}", property.name),
                        validations,
                    });
                }
            }
        }

        for command in &feature.commands {
            for parameter in &command.parameters {
                if let Some(constraints) = &parameter.constraints {
                    let validations =
                        self.validations_for(&parameter.name, &parameter.data_type, constraints)?;
                    if !validations.is_empty() {
                        results.push(MemberValidations {
                            member: format!("Commands/{}/{}", command.name, parameter.name),
                            validations,
                        });
                    }
                }
            }
        }

        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Command, Parameter, Property};

    fn string_property(name: &str, constraints: Constraints) -> Property {
        Property {
            name: name.to_string(),
            description: None,
            data_type: DataType::String,
            constraints: Some(constraints),
        }
    }

    #[test]
    fn test_default_registration_order() {
        let registry = ValidationRegistry::with_defaults();
        assert_eq!(
            registry.validator_names(),
            vec!["length", "number", "pattern", "identifier"]
        );
    }

    #[test]
    fn test_merge_preserves_registration_order() {
        // Length guards come before pattern guards because the length
        // validator is registered first
        let registry = ValidationRegistry::with_defaults();
        let constraints = Constraints {
            maximal_length: Some("5".to_string()),
            pattern: Some("^[a-z]+$".to_string()),
            ..Default::default()
        };

        let sets = registry
            .validations_for("Name", &DataType::String, &constraints)
            .unwrap();
        assert_eq!(sets.len(), 2);
        assert!(matches!(sets[0].condition, GuardCondition::LengthExceeds(5)));
        assert!(matches!(sets[1].condition, GuardCondition::NotMatches { .. }));
    }

    #[test]
    fn test_every_member_offered() {
        let registry = ValidationRegistry::with_defaults();
        let feature = Feature {
            identifier: None,
            name: "Thermostat".to_string(),
            description: None,
            commands: vec![Command {
                name: "SetLabel".to_string(),
                description: None,
                parameters: vec![Parameter {
                    name: "Label".to_string(),
                    description: None,
                    data_type: DataType::String,
                    constraints: Some(Constraints {
                        minimal_length: Some("1".to_string()),
                        ..Default::default()
                    }),
                }],
                responses: vec![],
            }],
            properties: vec![string_property(
                "Label",
                Constraints {
                    maximal_length: Some("32".to_string()),
                    ..Default::default()
                },
            )],
        };

        let results = registry.validate_feature(&feature).unwrap();
        let members: Vec<&str> = results.iter().map(|m| m.member.as_str()).collect();
        assert_eq!(members, vec!["Properties/Label", "Commands/SetLabel/Label"]);
    }

    #[test]
    fn test_inapplicable_type_yields_no_guards() {
        let registry = ValidationRegistry::with_defaults();
        let constraints = Constraints {
            pattern: Some("^x$".to_string()),
            ..Default::default()
        };
        // Pattern only applies to String
        let sets = registry
            .validations_for("Count", &DataType::Integer, &constraints)
            .unwrap();
        assert!(sets.is_empty());
    }

    #[test]
    fn test_render_forms() {
        let c = GuardCondition::LengthExceeds(10);
        assert_eq!(c.render("name"), "len(name) > 10");

        let c = GuardCondition::Compare {
            op: CompareOp::Lt,
            bound: Literal::Integer(3),
        };
        assert_eq!(c.render("count"), "count < 3");

        let c = GuardCondition::NotMatches { pattern: "^[A-Z]+$".to_string() };
        assert_eq!(c.render("code"), "!matches(code, \"^[A-Z]+$\")");
    }
}
