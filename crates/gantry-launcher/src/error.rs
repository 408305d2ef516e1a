use std::fmt;

use gantry_host::shell::HostError;
use gantry_registry::ModuleError;

/// A failure inside the bootstrap scope, from module load through game
/// wiring.
///
/// Every variant is swallowed identically at the startup boundary; the
/// split exists for diagnostics and tests, not for divergent handling.
#[derive(Debug)]
pub enum BootError {
    /// Module registration, loading, or binding resolution failed.
    Module(ModuleError),
    /// The binding resolved, but its value is not a game factory.
    CapabilityMismatch { module: String, binding: String },
    /// The game factory ran and reported a construction failure.
    Construction {
        module:  String,
        binding: String,
        source:  Box<dyn std::error::Error + Send + Sync>,
    },
    /// The host refused to take the game object.
    Host(HostError),
}

impl fmt::Display for BootError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BootError::Module(err) => write!(f, "{err}"),
            BootError::CapabilityMismatch { module, binding } => write!(
                f,
                "binding '{binding}' in module '{module}' is not a game factory"
            ),
            BootError::Construction {
                module,
                binding,
                source,
            } => write!(
                f,
                "constructing the game from '{module}' binding '{binding}' failed: {source}"
            ),
            BootError::Host(err) => write!(f, "host rejected the game object: {err}"),
        }
    }
}

impl std::error::Error for BootError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BootError::Module(err) => Some(err),
            BootError::Construction { source, .. } => {
                let source: &(dyn std::error::Error + 'static) = source.as_ref();
                Some(source)
            }
            BootError::Host(err) => Some(err),
            BootError::CapabilityMismatch { .. } => None,
        }
    }
}

impl From<ModuleError> for BootError {
    fn from(err: ModuleError) -> Self {
        BootError::Module(err)
    }
}

impl From<HostError> for BootError {
    fn from(err: HostError) -> Self {
        BootError::Host(err)
    }
}
