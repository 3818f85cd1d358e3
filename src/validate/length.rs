//! Length validator
//!
//! Applies to String values (character count) and List values (element
//! count). Length bounds are structural schema input: a bound that does not
//! parse as an integer is a malformed schema and fails the generation pass.

use crate::error::{GeneratorError, Result};
use crate::model::{Constraints, DataType};

use super::{GuardCondition, ValidationSet, Validator};

/// Emits up to three checks per property: maximal length, minimal length,
/// exact length.
pub struct LengthValidator;

/// What a length bound counts, for diagnostics
enum Counted {
    Characters,
    Elements,
}

impl Counted {
    fn unit(&self) -> &'static str {
        match self {
            Counted::Characters => "characters",
            Counted::Elements => "elements",
        }
    }
}

impl Validator for LengthValidator {
    fn name(&self) -> &'static str {
        "length"
    }

    fn create_validations(
        &self,
        property: &str,
        data_type: &DataType,
        constraints: &Constraints,
    ) -> Result<Vec<ValidationSet>> {
        let counted = match data_type {
            DataType::String => Counted::Characters,
            DataType::List(_) => Counted::Elements,
            _ => return Ok(Vec::new()),
        };

        let mut sets = Vec::new();

        if let Some(text) = &constraints.maximal_length {
            let bound = parse_bound(property, "MaximalLength", text)?;
            sets.push(ValidationSet {
                condition: GuardCondition::LengthExceeds(bound),
                message: format!(
                    "Invalid value {{}} for {}: must contain at most {} {}",
                    property,
                    bound,
                    counted.unit()
                ),
            });
        }

        if let Some(text) = &constraints.minimal_length {
            let bound = parse_bound(property, "MinimalLength", text)?;
            sets.push(ValidationSet {
                condition: GuardCondition::LengthBelow(bound),
                message: format!(
                    "Invalid value {{}} for {}: must contain at least {} {}",
                    property,
                    bound,
                    counted.unit()
                ),
            });
        }

        if let Some(text) = &constraints.length {
            let bound = parse_bound(property, "Length", text)?;
            sets.push(ValidationSet {
                condition: GuardCondition::LengthDiffers(bound),
                message: format!(
                    "Invalid value {{}} for {}: must contain exactly {} {}",
                    property,
                    bound,
                    counted.unit()
                ),
            });
        }

        Ok(sets)
    }
}

fn parse_bound(property: &str, constraint: &'static str, text: &str) -> Result<u64> {
    text.trim()
        .parse::<u64>()
        .map_err(|_| GeneratorError::MalformedConstraint {
            property: property.to_string(),
            constraint,
            value: text.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(data_type: DataType, constraints: Constraints) -> Result<Vec<ValidationSet>> {
        LengthValidator.create_validations("Name", &data_type, &constraints)
    }

    #[test]
    fn test_emits_all_three_checks() {
        let sets = run(
            DataType::String,
            Constraints {
                maximal_length: Some("10".to_string()),
                minimal_length: Some("2".to_string()),
                length: Some("5".to_string()),
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(sets.len(), 3);
        assert_eq!(sets[0].condition, GuardCondition::LengthExceeds(10));
        assert_eq!(sets[1].condition, GuardCondition::LengthBelow(2));
        assert_eq!(sets[2].condition, GuardCondition::LengthDiffers(5));
    }

    #[test]
    fn test_list_counts_elements() {
        let sets = run(
            DataType::List(Box::new(DataType::Integer)),
            Constraints {
                length: Some("3".to_string()),
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(sets.len(), 1);
        assert!(sets[0].message.contains("exactly 3 elements"));
    }

    #[test]
    fn test_inapplicable_types_skipped() {
        let constraints = Constraints {
            maximal_length: Some("10".to_string()),
            ..Default::default()
        };
        assert!(run(DataType::Integer, constraints.clone()).unwrap().is_empty());
        assert!(run(DataType::Timestamp, constraints).unwrap().is_empty());
    }

    #[test]
    fn test_malformed_bound_is_fatal() {
        let err = run(
            DataType::String,
            Constraints {
                maximal_length: Some("lots".to_string()),
                ..Default::default()
            },
        )
        .unwrap_err();

        match err {
            GeneratorError::MalformedConstraint { property, constraint, value } => {
                assert_eq!(property, "Name");
                assert_eq!(constraint, "MaximalLength");
                assert_eq!(value, "lots");
            }
            other => panic!("Expected MalformedConstraint, got {:?}", other),
        }
    }
}
