use std::any::Any;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::binding::Binding;
use crate::error::ModuleError;

/// Outcome of a module loader run.
pub type LoadResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

/// A module's loader. Runs on demand, at most once per successful load, and
/// exports the module's global bindings through the given context.
///
/// Plain function pointer on purpose: modules are wired up at process
/// initialization, not built from captured state.
pub type ModuleLoader = fn(&mut ModuleContext) -> LoadResult;

/// A named module as known to a [`Registry`] before it is loaded.
#[derive(Debug, Clone)]
pub struct ModuleDef {
    name: String,
    loader: ModuleLoader,
}

impl ModuleDef {
    pub fn new(name: impl Into<String>, loader: ModuleLoader) -> Self {
        Self {
            name: name.into(),
            loader,
        }
    }
}

/// Export sink handed to a loader while its module loads.
///
/// Exports become visible through [`Registry::resolve`] only after the
/// loader returns `Ok`; a failed load publishes nothing.
pub struct ModuleContext {
    module: String,
    exports: HashMap<String, Arc<dyn Any + Send + Sync>>,
}

impl ModuleContext {
    fn new(module: String) -> Self {
        Self {
            module,
            exports: HashMap::new(),
        }
    }

    /// Name of the module being loaded.
    pub fn module(&self) -> &str {
        &self.module
    }

    /// Exports `value` under `name`. A later export under the same name
    /// replaces the earlier one.
    pub fn export<T: Any + Send + Sync>(&mut self, name: impl Into<String>, value: T) {
        self.exports.insert(name.into(), Arc::new(value));
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum LoadState {
    Registered,
    Loading,
    Loaded,
}

struct ModuleEntry {
    loader:  ModuleLoader,
    state:   LoadState,
    exports: HashMap<String, Arc<dyn Any + Send + Sync>>,
}

/// Registry of late-bound modules, keyed by symbolic name.
///
/// Loading is idempotent: the first successful [`ensure_loaded`] runs the
/// module's loader, later calls short-circuit. A failed load leaves the
/// module unloaded, so a later call retries it.
///
/// Loaders run with the registry lock released, so a loader may itself
/// ensure other modules are loaded; asking for the module currently being
/// loaded reports [`ModuleError::LoadCycle`].
///
/// [`ensure_loaded`]: Registry::ensure_loaded
pub struct Registry {
    modules: Mutex<HashMap<String, ModuleEntry>>,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            modules: Mutex::new(HashMap::new()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, ModuleEntry>> {
        // A panicking loader poisons nothing here: the lock is never held
        // across a loader call, only across map edits.
        self.modules.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Registers a module definition. Fails if the name is taken.
    pub fn register(&self, def: ModuleDef) -> Result<(), ModuleError> {
        let mut modules = self.lock();
        if modules.contains_key(&def.name) {
            return Err(ModuleError::AlreadyRegistered { module: def.name });
        }
        modules.insert(
            def.name,
            ModuleEntry {
                loader:  def.loader,
                state:   LoadState::Registered,
                exports: HashMap::new(),
            },
        );
        Ok(())
    }

    /// Returns `true` if a module with this name is registered.
    pub fn contains(&self, module: &str) -> bool {
        self.lock().contains_key(module)
    }

    /// Returns `true` if the module has completed a successful load.
    pub fn is_loaded(&self, module: &str) -> bool {
        self.lock()
            .get(module)
            .is_some_and(|entry| entry.state == LoadState::Loaded)
    }

    /// Makes the named module available for use, loading it on demand.
    ///
    /// Returns immediately if the module already loaded. Otherwise the
    /// loader runs synchronously on the calling thread; on success its
    /// exports are published and the module is marked loaded.
    pub fn ensure_loaded(&self, module: &str) -> Result<(), ModuleError> {
        let loader = {
            let mut modules = self.lock();
            let entry = modules
                .get_mut(module)
                .ok_or_else(|| ModuleError::NotRegistered {
                    module: module.to_string(),
                })?;
            match entry.state {
                LoadState::Loaded => return Ok(()),
                LoadState::Loading => {
                    return Err(ModuleError::LoadCycle {
                        module: module.to_string(),
                    });
                }
                LoadState::Registered => {
                    entry.state = LoadState::Loading;
                    entry.loader
                }
            }
        };

        // Lock released: the loader may load further modules.
        let mut ctx = ModuleContext::new(module.to_string());
        let outcome = loader(&mut ctx);

        let mut modules = self.lock();
        let Some(entry) = modules.get_mut(module) else {
            return Err(ModuleError::NotRegistered {
                module: module.to_string(),
            });
        };
        match outcome {
            Ok(()) => {
                entry.state = LoadState::Loaded;
                entry.exports = ctx.exports;
                Ok(())
            }
            Err(err) => {
                entry.state = LoadState::Registered;
                Err(ModuleError::LoadFailed {
                    module: module.to_string(),
                    reason: err.to_string(),
                })
            }
        }
    }

    /// Resolves a global binding exported by a loaded module.
    pub fn resolve(&self, module: &str, binding: &str) -> Result<Binding, ModuleError> {
        let modules = self.lock();
        let entry = modules
            .get(module)
            .ok_or_else(|| ModuleError::NotRegistered {
                module: module.to_string(),
            })?;
        if entry.state != LoadState::Loaded {
            return Err(ModuleError::NotLoaded {
                module: module.to_string(),
            });
        }
        let value = entry
            .exports
            .get(binding)
            .cloned()
            .ok_or_else(|| ModuleError::BindingNotFound {
                module: module.to_string(),
                binding: binding.to_string(),
            })?;
        Ok(Binding::new(module, binding, value))
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
