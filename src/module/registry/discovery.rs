//! Module discovery boundary
//!
//! The registry does not prescribe how candidate modules are located;
//! anything that can enumerate module handles satisfies
//! [`ModuleDiscovery`]. Two reference implementations are provided: a
//! static in-memory list and a manifest-directory scanner.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::module::registry::manifest::{DeclaredModule, ModuleManifest};
use crate::module::traits::{Module, ModuleError};

/// Discovery collaborator: enumerates the candidate modules for a host.
///
/// Discovery must complete fully before the registry resolves; a
/// discovery source is drained once and not consulted again.
pub trait ModuleDiscovery {
    /// Produce the discovered module handles.
    fn discover(&mut self) -> Result<Vec<Box<dyn Module>>, ModuleError>;
}

/// Static discovery over a pre-assembled module list
#[derive(Default)]
pub struct StaticDiscovery {
    modules: Vec<Box<dyn Module>>,
}

impl StaticDiscovery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a module handle, builder style.
    pub fn with(mut self, module: Box<dyn Module>) -> Self {
        self.modules.push(module);
        self
    }

    pub fn push(&mut self, module: Box<dyn Module>) {
        self.modules.push(module);
    }
}

impl ModuleDiscovery for StaticDiscovery {
    fn discover(&mut self) -> Result<Vec<Box<dyn Module>>, ModuleError> {
        Ok(std::mem::take(&mut self.modules))
    }
}

/// Manifest discovery scanner
///
/// Scans a directory for `<module>/module.toml` manifests and yields one
/// declaration-only handle per manifest. No module code is located or
/// loaded here.
pub struct ManifestDiscovery {
    /// Base directory to scan for modules
    modules_dir: PathBuf,
}

impl ManifestDiscovery {
    /// Create a new manifest discovery scanner
    pub fn new<P: AsRef<Path>>(modules_dir: P) -> Self {
        Self {
            modules_dir: modules_dir.as_ref().to_path_buf(),
        }
    }
}

impl ModuleDiscovery for ManifestDiscovery {
    fn discover(&mut self) -> Result<Vec<Box<dyn Module>>, ModuleError> {
        info!("Discovering modules in {:?}", self.modules_dir);

        if !self.modules_dir.exists() {
            debug!("Modules directory does not exist: {:?}", self.modules_dir);
            return Ok(Vec::new());
        }

        let entries = fs::read_dir(&self.modules_dir).map_err(|e| {
            ModuleError::Discovery(format!("failed to read modules directory: {e}"))
        })?;

        let mut modules: Vec<Box<dyn Module>> = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| {
                ModuleError::Discovery(format!("failed to read directory entry: {e}"))
            })?;

            let path = entry.path();
            if !path.is_dir() {
                continue;
            }

            let manifest_path = path.join("module.toml");
            if !manifest_path.exists() {
                debug!("No module.toml found in {:?}, skipping", path);
                continue;
            }

            let manifest = ModuleManifest::from_file(&manifest_path)?;
            debug!("Discovered module: {}", manifest.name);
            modules.push(Box::new(DeclaredModule::new(manifest)));
        }

        // Directory iteration order is platform-dependent; keep discovery
        // output stable.
        modules.sort_by(|a, b| a.identifier().cmp(b.identifier()));

        info!("Discovered {} modules", modules.len());
        Ok(modules)
    }
}
