//! Anonymous structure type closure
//!
//! Every anonymous structure type encountered while walking a feature graph
//! is registered here, then visited exactly once through `process_all`.
//! Processing a type may discover and register further types (a field's type
//! is itself an anonymous structure not yet seen), so the traversal is a
//! worklist fixpoint over a seen-set rather than recursion; direct and
//! mutual self-references terminate.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::error::Result;
use crate::model::{DataType, Feature, StructureType};

/// Registry of anonymous structure types for one generation pass.
///
/// Created fresh per pass and discarded once `process_all` completes.
/// Single-writer: concurrent registration/processing on the same pass must
/// be serialized by the caller.
#[derive(Debug, Default)]
pub struct AnonymousTypeCloser {
    /// Registration order; drives the visit preference
    order: Vec<String>,
    types: HashMap<String, StructureType>,
}

impl AnonymousTypeCloser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an anonymous structure type under its synthesized name.
    ///
    /// First registration wins: a later registration of the same name is
    /// silently ignored. Idempotence here is what keeps re-walks of shared
    /// subtrees harmless.
    pub fn register_anonymous_type(&mut self, name: impl Into<String>, ty: StructureType) {
        let name = name.into();
        if self.types.contains_key(&name) {
            debug!(name = %name, "anonymous type already registered, keeping first definition");
            return;
        }
        self.order.push(name.clone());
        self.types.insert(name, ty);
    }

    /// Number of registered types
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&StructureType> {
        self.types.get(name)
    }

    /// Registered names in registration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Visit every registered type exactly once.
    ///
    /// The callback receives the closer itself so that processing can
    /// register newly discovered types; those are picked up before the
    /// fixpoint terminates. Visits follow registration order among the types
    /// known at each step; beyond that the order is unspecified. The seen
    /// check happens before the callback runs, so a type that registers
    /// itself (directly or through a cycle) is never re-entered.
    pub fn process_all<F>(&mut self, mut callback: F) -> Result<()>
    where
        F: FnMut(&mut AnonymousTypeCloser, &str, &StructureType) -> Result<()>,
    {
        let mut seen: HashSet<String> = HashSet::new();
        loop {
            let next = self
                .order
                .iter()
                .find(|name| !seen.contains(*name))
                .cloned();
            let Some(name) = next else {
                return Ok(());
            };
            seen.insert(name.clone());
            // Cloned out so the callback can take the registry mutably
            if let Some(ty) = self.types.get(&name).cloned() {
                callback(self, &name, &ty)?;
            }
        }
    }
}

/// Register every structure type reachable from a feature's properties,
/// command parameters, and command responses.
pub fn register_feature_structures(feature: &Feature, closer: &mut AnonymousTypeCloser) {
    for property in &feature.properties {
        register_data_type(&property.data_type, closer);
    }
    for command in &feature.commands {
        for parameter in &command.parameters {
            register_data_type(&parameter.data_type, closer);
        }
        for response in &command.responses {
            register_data_type(&response.data_type, closer);
        }
    }
}

/// Register every structure type nested inside one data type.
///
/// Recursion here is over the in-memory value tree, which is finite; cyclic
/// types reference each other by name and are resolved by `process_all`.
pub fn register_data_type(data_type: &DataType, closer: &mut AnonymousTypeCloser) {
    match data_type {
        DataType::List(element) => register_data_type(element, closer),
        DataType::Structure(structure) => {
            closer.register_anonymous_type(structure.name.clone(), structure.clone());
            for field in &structure.fields {
                register_data_type(&field.data_type, closer);
            }
        }
        _ => {}
    }
}
