//! Module registry and discovery
//!
//! Handles module discovery, manifest parsing, and dependency-ordered
//! registration.

pub mod dependencies;
pub mod discovery;
pub mod manifest;
pub mod registry;

pub use dependencies::{DependencyResolution, ModuleDependencies};
pub use discovery::{ManifestDiscovery, ModuleDiscovery, StaticDiscovery};
pub use manifest::{DeclaredModule, ModuleManifest};
pub use registry::{ModuleRegistry, UnknownDependencyPolicy};
