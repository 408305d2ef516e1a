use std::fmt;

/// An error from module registration, loading, or binding resolution.
///
/// `LoadFailed` carries the loader's error rendered to a string so the type
/// stays `Clone` and comparable; callers that own a diagnostic sink log the
/// original before it is erased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModuleError {
    /// No module with this name has been registered.
    NotRegistered { module: String },
    /// A module with this name is already registered.
    AlreadyRegistered { module: String },
    /// The module's loader asked for its own module while it was loading.
    LoadCycle { module: String },
    /// The module's loader returned an error; the module stays unloaded.
    LoadFailed { module: String, reason: String },
    /// The module is registered but has not been loaded yet.
    NotLoaded { module: String },
    /// The module loaded but never exported this binding.
    BindingNotFound { module: String, binding: String },
}

impl fmt::Display for ModuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModuleError::NotRegistered { module } => {
                write!(f, "module '{module}' is not registered")
            }
            ModuleError::AlreadyRegistered { module } => {
                write!(f, "module '{module}' is already registered")
            }
            ModuleError::LoadCycle { module } => {
                write!(f, "module '{module}' asked for itself while loading")
            }
            ModuleError::LoadFailed { module, reason } => {
                write!(f, "module '{module}' failed to load: {reason}")
            }
            ModuleError::NotLoaded { module } => {
                write!(f, "module '{module}' has not been loaded")
            }
            ModuleError::BindingNotFound { module, binding } => {
                write!(f, "module '{module}' does not export a binding named '{binding}'")
            }
        }
    }
}

impl std::error::Error for ModuleError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_module() {
        let err = ModuleError::LoadFailed {
            module: "demo.core".to_string(),
            reason: "asset pack missing".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("demo.core"));
        assert!(text.contains("asset pack missing"));
    }

    #[test]
    fn display_names_the_binding() {
        let err = ModuleError::BindingNotFound {
            module: "demo.core".to_string(),
            binding: "game".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("demo.core"));
        assert!(text.contains("'game'"));
    }
}
