//! Module system for pluggable editor features
//!
//! Feature modules advertise themselves through a discovery collaborator,
//! declare which other modules they depend on, and are activated in an
//! order that respects those dependencies.
//!
//! ## Architecture
//!
//! - **Discovery boundary**: anything that can enumerate module handles
//!   satisfies the discovery contract; the core never prescribes how
//!   module code is located or loaded
//! - **Dependency resolution**: a layered topological sort turns the
//!   declared dependency mapping into one deterministic activation order,
//!   failing cleanly on cycles instead of looping
//! - **Registry**: owns the modules, resolves once after discovery, and
//!   exposes the collection in activation order

pub mod registry;
pub mod traits;

pub use registry::{
    DeclaredModule, DependencyResolution, ManifestDiscovery, ModuleDependencies,
    ModuleDiscovery, ModuleManifest, ModuleRegistry, StaticDiscovery, UnknownDependencyPolicy,
};
pub use traits::{Module, ModuleError};
