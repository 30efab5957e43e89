//! Module manifest parsing
//!
//! Modules advertise their identity and declared dependencies through a
//! small `module.toml` document.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

use crate::module::traits::{Module, ModuleError};

/// Module manifest (`module.toml` structure)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleManifest {
    /// Module name (unique identifier)
    pub name: String,
    /// Module version
    pub version: String,
    /// Human-readable description
    pub description: Option<String>,
    /// Module author
    pub author: Option<String>,
    /// Identifiers of the modules this module depends on
    #[serde(default)]
    pub depends_on: BTreeSet<String>,
}

impl ModuleManifest {
    /// Load manifest from file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ModuleError> {
        let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ModuleError::InvalidManifest(format!("failed to read manifest file: {e}"))
        })?;
        Self::from_toml(&contents)
    }

    /// Parse manifest from a TOML string
    pub fn from_toml(contents: &str) -> Result<Self, ModuleError> {
        let manifest: ModuleManifest = toml::from_str(contents).map_err(|e| {
            ModuleError::InvalidManifest(format!("failed to parse manifest TOML: {e}"))
        })?;

        if manifest.name.is_empty() {
            return Err(ModuleError::InvalidManifest(
                "module name cannot be empty".to_string(),
            ));
        }

        Ok(manifest)
    }
}

/// Module handle backed purely by its manifest declaration
///
/// Carries no code; it exists so declaration-only discovery can hand the
/// registry something satisfying the [`Module`] contract.
#[derive(Debug, Clone)]
pub struct DeclaredModule {
    manifest: ModuleManifest,
}

impl DeclaredModule {
    pub fn new(manifest: ModuleManifest) -> Self {
        Self { manifest }
    }

    pub fn manifest(&self) -> &ModuleManifest {
        &self.manifest
    }
}

impl Module for DeclaredModule {
    fn identifier(&self) -> &str {
        &self.manifest.name
    }

    fn depends_on(&self) -> BTreeSet<String> {
        self.manifest.depends_on.clone()
    }
}
