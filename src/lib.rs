//! Featuregen Generator Core
//!
//! Turns declarative feature descriptions (commands and properties with
//! typed parameters carrying optional constraints) into executable
//! validation guard metadata for generated client/server stubs.
//!
//! ## Features
//!
//! - **Guard Synthesis**: length, range, pattern, and identifier
//!   constraints become condition + message pairs, merged per property in
//!   validator-registration order
//! - **Literal Coercion**: textual challenge values become typed literals
//!   for the concrete basic kind (integers, reals, dates, times,
//!   timestamps)
//! - **Type Closure**: every anonymous structure type reachable from a
//!   schema is visited exactly once, self- and mutually-referential types
//!   included
//! - **Emission Helpers**: naming conventions, setter detection, and
//!   structured documentation blocks for the downstream emitter
//!
//! ## Architecture
//!
//! ```text
//! feature graph (external front end)
//!   ├── ValidationRegistry ── validators ──> ValidationSet per member
//!   │         └── LiteralCoercion
//!   ├── AnonymousTypeCloser ──> closed structure-type set
//!   └── emit helpers ──> names + documentation blocks
//! ```
//!
//! The wire client, any GUI, the schema front end, and the final source
//! serialization are external collaborators; this crate only synthesizes
//! guards and structural metadata.

pub mod closer;
pub mod coercion;
pub mod config;
pub mod emit;
pub mod error;
pub mod model;
pub mod validate;

pub use closer::{register_feature_structures, AnonymousTypeCloser};
pub use coercion::{coerce, Literal};
pub use config::{OverrideConfig, TypeMetadata};
pub use error::{GeneratorError, Result};
pub use model::{
    BasicType, Command, Constraints, DataType, Feature, IdentifierKind, Parameter, Property,
    StructureField, StructureType,
};
pub use validate::{
    GuardCondition, MemberValidations, ValidationRegistry, ValidationSet, Validator,
};
