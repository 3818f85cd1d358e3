//! Pattern validator
//!
//! Applies to String values carrying a `Pattern` constraint. Emits a single
//! "value does not match" guard; the literal pattern text is part of the
//! message so the generated diagnostic names the expected shape.

use crate::error::Result;
use crate::model::{Constraints, DataType};

use super::{GuardCondition, ValidationSet, Validator};

pub struct PatternValidator;

impl Validator for PatternValidator {
    fn name(&self) -> &'static str {
        "pattern"
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
        let Some(pattern) = &constraints.pattern else {
            return Ok(Vec::new());
        };

        Ok(vec![ValidationSet {
            condition: GuardCondition::NotMatches {
                pattern: pattern.clone(),
            },
            message: format!(
                "Invalid value {{}} for {}: value must match pattern {}",
                property, pattern
            ),
        }])
    }
}
