//! Module system traits and interfaces
//!
//! Defines the contract every feature module satisfies and the error
//! taxonomy shared by discovery, registration and resolution.

use std::collections::BTreeSet;
use thiserror::Error;

/// Module trait that all feature modules implement
///
/// A module is an opaque unit identified by a unique string identifier.
/// The registry only needs the identifier and the declared dependency
/// identifiers; how the module's code is located and loaded is the
/// discovery collaborator's concern.
pub trait Module {
    /// Stable unique identifier for this module.
    fn identifier(&self) -> &str;

    /// Identifiers of the modules this module depends on.
    ///
    /// Every listed identifier is ordered strictly before this module in
    /// the resolved activation order.
    fn depends_on(&self) -> BTreeSet<String>;
}

impl std::fmt::Debug for dyn Module {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Module")
            .field("identifier", &self.identifier())
            .finish()
    }
}

/// Module system errors
#[derive(Debug, Error)]
pub enum ModuleError {
    #[error("module {0} is already registered")]
    DuplicateModule(String),

    /// No remaining identifier could become ready in a full resolution
    /// pass; carries the identifiers still stuck in the cycle.
    #[error("cyclic dependency between modules: {0:?}")]
    CyclicDependency(Vec<String>),

    /// Strict mode only: a declared dependency matches no registered
    /// module. The default permissive mode instead treats such an
    /// identifier as an implicit dependency-free node.
    #[error("module {module} depends on unknown module {dependency}")]
    UnknownDependency { module: String, dependency: String },

    #[error("invalid module manifest: {0}")]
    InvalidManifest(String),

    #[error("module discovery failed: {0}")]
    Discovery(String),
}
