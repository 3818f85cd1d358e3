//! Number validator
//!
//! Applies to the scalar-like kinds (String, Integer, Real, Boolean, Date,
//! Time, Timestamp); List and Structure are excluded. Each of the four bound
//! kinds present is coerced to a typed literal and emitted as a comparison
//! guard. An unparseable challenge skips only that one bound (fail-open,
//! logged); an unsupported kind for numeric comparison is fatal.

use tracing::warn;

use crate::coercion::coerce;
use crate::error::Result;
use crate::model::{Constraints, DataType};

use super::{CompareOp, GuardCondition, ValidationSet, Validator};

/// Emits range guards for the four bound kinds.
pub struct NumberValidator;

impl Validator for NumberValidator {
    fn name(&self) -> &'static str {
        "number"
    }

    fn create_validations(
        &self,
        property: &str,
        data_type: &DataType,
        constraints: &Constraints,
    ) -> Result<Vec<ValidationSet>> {
        let Some(kind) = data_type.basic_kind() else {
            return Ok(Vec::new());
        };

        // Violation operator per bound kind: a MinimalInclusive bound is
        // violated by value < bound, and so on.
        let bounds = [
            (&constraints.minimal_inclusive, CompareOp::Lt),
            (&constraints.minimal_exclusive, CompareOp::Le),
            (&constraints.maximal_inclusive, CompareOp::Gt),
            (&constraints.maximal_exclusive, CompareOp::Ge),
        ];

        let mut sets = Vec::new();
        for (challenge, op) in bounds {
            let Some(challenge) = challenge else { continue };

            let literal = match coerce(challenge, kind) {
                Ok(literal) => literal,
                Err(err) if err.is_unparseable_challenge() => {
                    warn!(
                        property = %property,
                        challenge = %challenge,
                        kind = %kind,
                        "skipping bound with unparseable challenge"
                    );
                    continue;
                }
                Err(err) => return Err(err),
            };

            let message = format!(
                "Invalid value {{}} for {}: value must be {} {}",
                property,
                op.violation_phrase(),
                literal
            );
            sets.push(ValidationSet {
                condition: GuardCondition::Compare { op, bound: literal },
                message,
            });
        }

        Ok(sets)
    }
}
