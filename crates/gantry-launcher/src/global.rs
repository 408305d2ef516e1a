use gantry_registry::Registry;
use state::InitCell;

static GLOBAL: InitCell<Registry> = InitCell::new();

/// The process-wide default registry.
///
/// Game modules register here at process initialization; the launcher
/// loads out of it. The cell initializes on first access and lives for the
/// rest of the process. Loaded modules are one-shot, process-global state,
/// same as the bindings they export.
pub fn global_registry() -> &'static Registry {
    if let Some(registry) = GLOBAL.try_get() {
        return registry;
    }
    // Racing first callers are harmless: set() keeps the winner and the
    // loser re-reads it.
    let _ = GLOBAL.set(Registry::new());
    GLOBAL.get()
}
