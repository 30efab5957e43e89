//! Module dependency resolution
//!
//! Converts a mapping of module identifier to declared dependency
//! identifiers into a deterministic, dependency-respecting activation
//! order.

use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

use crate::module::traits::ModuleError;

/// Dependency resolution result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyResolution {
    /// Identifiers in activation order (dependencies first)
    pub order: Vec<String>,
    /// Identifiers grouped by the pass in which they became ready
    pub layers: Vec<Vec<String>>,
}

/// Dependency resolver
pub struct ModuleDependencies;

impl ModuleDependencies {
    /// Resolve the dependency mapping into an activation order.
    ///
    /// The returned order contains every identifier that appears as a key
    /// or as a dependency value, exactly once, with every dependency
    /// strictly before its dependents. An identifier referenced as a
    /// dependency but never present as a key is treated as a
    /// dependency-free node and still receives a position. Identifiers
    /// that become ready in the same pass are emitted in lexicographic
    /// order, so the same mapping always resolves to the same sequence.
    ///
    /// Fails with [`ModuleError::CyclicDependency`] when a full pass
    /// produces no ready identifier while keys remain.
    pub fn resolve(
        mapping: &BTreeMap<String, BTreeSet<String>>,
    ) -> Result<DependencyResolution, ModuleError> {
        let mut remaining = mapping.clone();
        let mut order = Vec::new();
        let mut layers = Vec::new();

        while !remaining.is_empty() {
            // Ready in this pass: dependency values with no key of their
            // own, plus keys whose dependency set has drained.
            let mut ready: BTreeSet<String> = remaining
                .values()
                .flatten()
                .filter(|dep| !remaining.contains_key(dep.as_str()))
                .cloned()
                .collect();
            ready.extend(
                remaining
                    .iter()
                    .filter(|(_, deps)| deps.is_empty())
                    .map(|(id, _)| id.clone()),
            );

            // A full pass with no ready identifier means every remaining
            // key waits on another remaining key: a cycle.
            if ready.is_empty() {
                return Err(ModuleError::CyclicDependency(
                    remaining.keys().cloned().collect(),
                ));
            }

            remaining.retain(|_, deps| !deps.is_empty());
            for deps in remaining.values_mut() {
                for resolved in &ready {
                    deps.remove(resolved);
                }
            }

            order.extend(ready.iter().cloned());
            layers.push(ready.into_iter().collect());
        }

        debug!("Dependency resolution complete: {:?}", order);

        Ok(DependencyResolution { order, layers })
    }
}
