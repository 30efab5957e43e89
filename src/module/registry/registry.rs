//! Module registry
//!
//! Owns the discovered modules, keyed by identifier, and orders them by
//! their declared dependencies.

use std::collections::BTreeMap;
use tracing::{debug, info};

use crate::module::registry::dependencies::{DependencyResolution, ModuleDependencies};
use crate::module::registry::discovery::ModuleDiscovery;
use crate::module::traits::{Module, ModuleError};

/// Policy for dependency identifiers that match no registered module
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownDependencyPolicy {
    /// Treat the identifier as an implicit dependency-free node. This is
    /// the historical behavior; it lets a module depend on a capability
    /// the host provides without registering a module for it.
    #[default]
    Implicit,
    /// Fail resolution with [`ModuleError::UnknownDependency`].
    Strict,
}

/// Module registry
///
/// Construct one explicitly, register (or discover) every module, call
/// [`resolve`](Self::resolve) once discovery is complete, then iterate
/// [`all`](Self::all) in activation order.
pub struct ModuleRegistry {
    /// Registered modules keyed by identifier
    modules: BTreeMap<String, Box<dyn Module>>,
    /// Identifiers in activation order once resolved; registration order
    /// before the first successful resolve
    order: Vec<String>,
    policy: UnknownDependencyPolicy,
    resolved: bool,
}

impl ModuleRegistry {
    /// Create an empty registry with the default permissive policy
    pub fn new() -> Self {
        Self::with_policy(UnknownDependencyPolicy::default())
    }

    /// Create an empty registry with an explicit unknown-dependency policy
    pub fn with_policy(policy: UnknownDependencyPolicy) -> Self {
        Self {
            modules: BTreeMap::new(),
            order: Vec::new(),
            policy,
            resolved: false,
        }
    }

    /// Drain a discovery source into a fresh registry and resolve it.
    pub fn from_discovery<D: ModuleDiscovery>(
        mut discovery: D,
        policy: UnknownDependencyPolicy,
    ) -> Result<Self, ModuleError> {
        let mut registry = Self::with_policy(policy);
        for module in discovery.discover()? {
            registry.register(module)?;
        }
        registry.resolve()?;
        Ok(registry)
    }

    /// Register a module under its identifier.
    ///
    /// Fails with [`ModuleError::DuplicateModule`] when the identifier is
    /// already registered; the registry is unchanged on failure.
    pub fn register(&mut self, module: Box<dyn Module>) -> Result<(), ModuleError> {
        let id = module.identifier().to_string();
        if self.modules.contains_key(&id) {
            return Err(ModuleError::DuplicateModule(id));
        }

        debug!("Registered module: {}", id);
        self.order.push(id.clone());
        self.modules.insert(id, module);
        Ok(())
    }

    /// Build the dependency mapping from every registered module, resolve
    /// it, and reorder the stored collection to match.
    ///
    /// Under [`UnknownDependencyPolicy::Strict`] a declared dependency
    /// with no registered module fails the whole resolution; under the
    /// default permissive policy it becomes an implicit dependency-free
    /// node. Implicit nodes have no handle to store, so they appear in
    /// the returned [`DependencyResolution`] but not in
    /// [`all`](Self::all).
    ///
    /// Not reentrant; callers that re-resolve after registering more
    /// modules serialize calls externally.
    pub fn resolve(&mut self) -> Result<DependencyResolution, ModuleError> {
        let mut mapping = BTreeMap::new();
        for (id, module) in &self.modules {
            mapping.insert(id.clone(), module.depends_on());
        }

        if self.policy == UnknownDependencyPolicy::Strict {
            for (id, deps) in &mapping {
                for dep in deps {
                    if !self.modules.contains_key(dep) {
                        return Err(ModuleError::UnknownDependency {
                            module: id.clone(),
                            dependency: dep.clone(),
                        });
                    }
                }
            }
        }

        let resolution = ModuleDependencies::resolve(&mapping)?;

        self.order = resolution
            .order
            .iter()
            .filter(|id| self.modules.contains_key(id.as_str()))
            .cloned()
            .collect();
        self.resolved = true;

        info!("Resolved {} modules into activation order", self.order.len());
        Ok(resolution)
    }

    /// All registered modules in activation order.
    ///
    /// Only meaningful after [`resolve`](Self::resolve) has succeeded at
    /// least once; before that, iteration follows registration order.
    pub fn all(&self) -> impl Iterator<Item = &dyn Module> {
        self.order
            .iter()
            .filter_map(|id| self.modules.get(id).map(|m| m.as_ref()))
    }

    /// Look up a registered module by identifier
    pub fn get(&self, identifier: &str) -> Option<&dyn Module> {
        self.modules.get(identifier).map(|m| m.as_ref())
    }

    /// Whether a successful resolve has happened
    pub fn is_resolved(&self) -> bool {
        self.resolved
    }

    pub fn policy(&self) -> UnknownDependencyPolicy {
        self.policy
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

impl Default for ModuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}
