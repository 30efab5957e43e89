//! modkit - module registry with dependency-ordered activation
//!
//! This crate provides the module-hosting core of a pluggable editor
//! application: independently packaged feature modules advertise
//! themselves through a discovery collaborator, declare which other
//! modules they depend on, and are handed back in an activation order
//! that respects those dependencies.
//!
//! ## Design Principles
//!
//! 1. **Explicit registry object**: no ambient global module state; the
//!    assembling component owns the registry and calls resolve
//! 2. **Guaranteed termination**: cyclic declarations fail with a
//!    diagnostic naming the stuck modules, never an unbounded loop
//! 3. **Deterministic ordering**: unrelated modules are ordered
//!    lexicographically, so the same input always yields the same order
//! 4. **Decoupled discovery**: the resolver knows nothing about how
//!    modules are physically located or loaded

pub mod module;

pub use module::{
    DeclaredModule, DependencyResolution, ManifestDiscovery, Module, ModuleDependencies,
    ModuleDiscovery, ModuleError, ModuleManifest, ModuleRegistry, StaticDiscovery,
    UnknownDependencyPolicy,
};
