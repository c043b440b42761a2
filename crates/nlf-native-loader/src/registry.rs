//! Thread-safe collection of loaded curve functions.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use nlf_abi::FunctionId;
use parking_lot::RwLock;
use tracing::{debug, warn};

use crate::config::LoaderConfig;
use crate::error::{NlfError, NlfResult};
use crate::function::NativeFunction;
use crate::loader::NativeFunctionLoader;

/// Loaded curve functions keyed by their `f<N>` id.
///
/// Ids are unique within a registry; a second library claiming the same id
/// is rejected.
#[derive(Debug, Default)]
pub struct FunctionRegistry {
    loader: NativeFunctionLoader,
    functions: RwLock<BTreeMap<FunctionId, Arc<NativeFunction>>>,
}

impl FunctionRegistry {
    /// Create an empty registry.
    ///
    /// # Errors
    ///
    /// Returns [`NlfError::Config`] if `config` fails validation.
    pub fn new(config: LoaderConfig) -> NlfResult<Self> {
        Ok(Self {
            loader: NativeFunctionLoader::new(config)?,
            functions: RwLock::new(BTreeMap::new()),
        })
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &LoaderConfig {
        self.loader.config()
    }

    /// Add a function.
    ///
    /// # Errors
    ///
    /// Returns [`NlfError::DuplicateFunctionId`] if the id is taken.
    pub fn register(&self, function: NativeFunction) -> NlfResult<Arc<NativeFunction>> {
        let id = function.id();
        let mut functions = self.functions.write();
        if let Some(existing) = functions.get(&id) {
            return Err(NlfError::DuplicateFunctionId {
                id,
                existing: existing.name().to_string(),
            });
        }
        let function = Arc::new(function);
        functions.insert(id, Arc::clone(&function));
        Ok(function)
    }

    /// Load a library and register its function.
    ///
    /// # Errors
    ///
    /// Any error from [`NativeFunctionLoader::load`] or [`register`](Self::register).
    pub fn load(&self, path: &Path) -> NlfResult<FunctionId> {
        let function = self.loader.load(path)?;
        Ok(self.register(function)?.id())
    }

    /// Load every library in `dir` with the platform's library extension.
    ///
    /// Files that fail to load or collide with a registered id are logged
    /// and skipped. Returns the ids registered by this call, in file-name
    /// order.
    ///
    /// # Errors
    ///
    /// Returns [`NlfError::Io`] if the directory cannot be read.
    pub fn load_dir(&self, dir: &Path) -> NlfResult<Vec<FunctionId>> {
        let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)?
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| is_library(path))
            .collect();
        paths.sort();

        let mut loaded = Vec::with_capacity(paths.len());
        for path in paths {
            match self.load(&path) {
                Ok(id) => loaded.push(id),
                Err(err) => warn!(
                    path = %path.display(),
                    error = %err,
                    "Skipping curve function library"
                ),
            }
        }
        Ok(loaded)
    }

    /// Look up by id.
    #[must_use]
    pub fn get(&self, id: FunctionId) -> Option<Arc<NativeFunction>> {
        self.functions.read().get(&id).cloned()
    }

    /// Remove by id. The library stays mapped until the last handle drops.
    pub fn unregister(&self, id: FunctionId) -> Option<Arc<NativeFunction>> {
        let removed = self.functions.write().remove(&id);
        if removed.is_some() {
            debug!(function_id = %id, "Curve function unregistered");
        }
        removed
    }

    /// All functions, ordered by id.
    #[must_use]
    pub fn list(&self) -> Vec<Arc<NativeFunction>> {
        self.functions.read().values().cloned().collect()
    }

    /// Number of registered functions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.functions.read().len()
    }

    /// `true` when nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.functions.read().is_empty()
    }
}

fn is_library(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .is_some_and(|ext| ext == std::env::consts::DLL_EXTENSION)
}
