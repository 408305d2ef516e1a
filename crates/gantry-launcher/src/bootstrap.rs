use gantry_host::core::{Game, GameFactory};
use gantry_host::shell::{HostError, SavedState, Shell};
use gantry_registry::Registry;

use crate::error::BootError;

/// Symbolic names of the module and binding the launcher resolves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchSpec {
    pub module:  String,
    pub binding: String,
}

impl LaunchSpec {
    pub fn new(module: impl Into<String>, binding: impl Into<String>) -> Self {
        Self {
            module:  module.into(),
            binding: binding.into(),
        }
    }
}

/// The host-framework surface the bootstrap consumes.
///
/// Production code uses [`Shell`]; tests substitute a recording stub.
pub trait GameHost {
    /// The framework's own startup routine; runs before anything else.
    fn startup(&mut self, saved: Option<SavedState>);

    /// Wires a game object into the framework's scheduling.
    fn initialize(&mut self, game: Box<dyn Game>) -> Result<(), HostError>;
}

impl GameHost for Shell {
    fn startup(&mut self, saved: Option<SavedState>) {
        Shell::startup(self, saved);
    }

    fn initialize(&mut self, game: Box<dyn Game>) -> Result<(), HostError> {
        Shell::initialize(self, game)
    }
}

/// Platform bootstrap.
///
/// [`on_start`] runs the startup sequence the platform contract
/// prescribes: host startup first and unconditionally, then module load,
/// binding resolution, game construction, and host wiring inside a single
/// fallible scope. A failure in that scope is logged once and swallowed;
/// the host stays started with no game wired in, and the failure is kept
/// for inspection through [`last_failure`].
///
/// [`on_start`]: Launcher::on_start
/// [`last_failure`]: Launcher::last_failure
pub struct Launcher {
    spec:    LaunchSpec,
    failure: Option<BootError>,
}

impl Launcher {
    pub fn new(spec: LaunchSpec) -> Self {
        Self {
            spec,
            failure: None,
        }
    }

    /// The platform's startup callback.
    ///
    /// Infallible from the platform's point of view. A repeated start runs
    /// host startup again but does not reload an already-loaded module; a
    /// start after a failed attempt retries the whole scope.
    pub fn on_start<H: GameHost>(
        &mut self,
        host: &mut H,
        registry: &Registry,
        saved: Option<SavedState>,
    ) {
        // Host startup happens before and independent of game wiring.
        host.startup(saved);

        match self.wire(host, registry) {
            Ok(()) => {
                log::info!(
                    "game module '{}' wired in via binding '{}'",
                    self.spec.module,
                    self.spec.binding
                );
                self.failure = None;
            }
            Err(err) => {
                // The single diagnostic for the swallowed failure; the
                // application stays up with no game wired in.
                log::error!("game bootstrap failed: {err}");
                self.failure = Some(err);
            }
        }
    }

    /// The fallible part of startup: load, resolve, construct, wire.
    fn wire<H: GameHost>(&self, host: &mut H, registry: &Registry) -> Result<(), BootError> {
        registry.ensure_loaded(&self.spec.module)?;

        let binding = registry.resolve(&self.spec.module, &self.spec.binding)?;

        let factory = binding
            .downcast_ref::<GameFactory>()
            .copied()
            .ok_or_else(|| BootError::CapabilityMismatch {
                module:  self.spec.module.clone(),
                binding: self.spec.binding.clone(),
            })?;

        let game = factory().map_err(|err| BootError::Construction {
            module:  self.spec.module.clone(),
            binding: self.spec.binding.clone(),
            source:  err.into(),
        })?;

        host.initialize(game)?;
        Ok(())
    }

    /// The most recently swallowed bootstrap failure, if any. Cleared by a
    /// later successful start.
    pub fn last_failure(&self) -> Option<&BootError> {
        self.failure.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use gantry_host::core::{FrameCtx, GameControl};
    use gantry_registry::{LoadResult, ModuleContext, ModuleDef, ModuleError, ModuleLoader};

    // ── stubs ────────────────────────────────────────────────────────────

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum HostCall {
        Startup { with_saved: bool },
        Initialize,
    }

    #[derive(Default)]
    struct StubHost {
        calls:             Vec<HostCall>,
        reject_initialize: bool,
    }

    impl GameHost for StubHost {
        fn startup(&mut self, saved: Option<SavedState>) {
            self.calls.push(HostCall::Startup {
                with_saved: saved.is_some(),
            });
        }

        fn initialize(&mut self, _game: Box<dyn Game>) -> Result<(), HostError> {
            if self.reject_initialize {
                return Err(HostError::NotStarted);
            }
            self.calls.push(HostCall::Initialize);
            Ok(())
        }
    }

    struct StubGame;

    impl Game for StubGame {
        fn on_frame(&mut self, _ctx: &mut FrameCtx<'_, '_>) -> GameControl {
            GameControl::Exit
        }
    }

    fn build_stub_game() -> anyhow::Result<Box<dyn Game>> {
        Ok(Box::new(StubGame))
    }

    fn refuse_to_build() -> anyhow::Result<Box<dyn Game>> {
        Err(anyhow::anyhow!("no save directory"))
    }

    fn load_game(ctx: &mut ModuleContext) -> LoadResult {
        ctx.export("game", build_stub_game as GameFactory);
        Ok(())
    }

    fn load_fails(_ctx: &mut ModuleContext) -> LoadResult {
        Err("asset pack missing".into())
    }

    fn load_wrong_type(ctx: &mut ModuleContext) -> LoadResult {
        ctx.export("game", "not a factory".to_string());
        Ok(())
    }

    fn load_nothing(_ctx: &mut ModuleContext) -> LoadResult {
        Ok(())
    }

    fn load_failing_factory(ctx: &mut ModuleContext) -> LoadResult {
        ctx.export("game", refuse_to_build as GameFactory);
        Ok(())
    }

    fn launcher() -> Launcher {
        Launcher::new(LaunchSpec::new("stub.mod", "game"))
    }

    fn registry_with(loader: ModuleLoader) -> Registry {
        let registry = Registry::new();
        registry
            .register(ModuleDef::new("stub.mod", loader))
            .unwrap();
        registry
    }

    // ── startup ordering ─────────────────────────────────────────────────

    #[test]
    fn host_startup_runs_first() {
        let registry = registry_with(load_game);
        let mut host = StubHost::default();
        launcher().on_start(&mut host, &registry, None);
        assert_eq!(
            host.calls.first(),
            Some(&HostCall::Startup { with_saved: false })
        );
    }

    #[test]
    fn host_startup_runs_even_when_the_module_is_missing() {
        let registry = Registry::new();
        let mut host = StubHost::default();
        launcher().on_start(&mut host, &registry, Some(SavedState::from_bytes([7])));
        assert_eq!(host.calls, vec![HostCall::Startup { with_saved: true }]);
    }

    #[test]
    fn startup_precedes_the_module_load() {
        static EVENTS: Mutex<Vec<&'static str>> = Mutex::new(Vec::new());

        struct OrderHost;

        impl GameHost for OrderHost {
            fn startup(&mut self, _saved: Option<SavedState>) {
                EVENTS.lock().unwrap().push("startup");
            }

            fn initialize(&mut self, _game: Box<dyn Game>) -> Result<(), HostError> {
                EVENTS.lock().unwrap().push("initialize");
                Ok(())
            }
        }

        fn logged_load(ctx: &mut ModuleContext) -> LoadResult {
            EVENTS.lock().unwrap().push("load");
            ctx.export("game", build_stub_game as GameFactory);
            Ok(())
        }

        let registry = registry_with(logged_load);
        let mut launcher = launcher();

        launcher.on_start(&mut OrderHost, &registry, None);

        assert!(launcher.last_failure().is_none());
        assert_eq!(*EVENTS.lock().unwrap(), ["startup", "load", "initialize"]);
    }

    // ── the happy path ───────────────────────────────────────────────────

    #[test]
    fn game_is_wired_exactly_once() {
        let registry = registry_with(load_game);
        let mut host = StubHost::default();
        let mut launcher = launcher();

        launcher.on_start(&mut host, &registry, None);

        assert_eq!(
            host.calls,
            vec![
                HostCall::Startup { with_saved: false },
                HostCall::Initialize
            ]
        );
        assert!(launcher.last_failure().is_none());
    }

    #[test]
    fn repeated_start_does_not_reload_the_module() {
        static LOADS: AtomicUsize = AtomicUsize::new(0);
        fn counting_load(ctx: &mut ModuleContext) -> LoadResult {
            LOADS.fetch_add(1, Ordering::SeqCst);
            ctx.export("game", build_stub_game as GameFactory);
            Ok(())
        }

        let registry = registry_with(counting_load);
        let mut host = StubHost::default();
        let mut launcher = launcher();

        launcher.on_start(&mut host, &registry, None);
        launcher.on_start(&mut host, &registry, None);

        assert_eq!(LOADS.load(Ordering::SeqCst), 1);
        assert_eq!(
            host.calls
                .iter()
                .filter(|c| **c == HostCall::Initialize)
                .count(),
            2
        );
        assert!(launcher.last_failure().is_none());
    }

    // ── the failure scope ────────────────────────────────────────────────

    #[test]
    fn missing_module_is_swallowed() {
        let registry = Registry::new();
        let mut host = StubHost::default();
        let mut launcher = launcher();

        launcher.on_start(&mut host, &registry, None);

        assert!(!host.calls.contains(&HostCall::Initialize));
        assert!(matches!(
            launcher.last_failure(),
            Some(BootError::Module(ModuleError::NotRegistered { .. }))
        ));
    }

    #[test]
    fn failed_load_leaves_the_host_without_a_game() {
        let registry = registry_with(load_fails);
        let mut host = StubHost::default();
        let mut launcher = launcher();

        launcher.on_start(&mut host, &registry, None);

        assert!(!host.calls.contains(&HostCall::Initialize));
        assert!(matches!(
            launcher.last_failure(),
            Some(BootError::Module(ModuleError::LoadFailed { .. }))
        ));
    }

    #[test]
    fn missing_binding_is_swallowed() {
        let registry = registry_with(load_nothing);
        let mut host = StubHost::default();
        let mut launcher = launcher();

        launcher.on_start(&mut host, &registry, None);

        assert!(matches!(
            launcher.last_failure(),
            Some(BootError::Module(ModuleError::BindingNotFound { .. }))
        ));
    }

    #[test]
    fn binding_that_is_not_a_factory_is_rejected() {
        let registry = registry_with(load_wrong_type);
        let mut host = StubHost::default();
        let mut launcher = launcher();

        launcher.on_start(&mut host, &registry, None);

        assert!(!host.calls.contains(&HostCall::Initialize));
        assert!(matches!(
            launcher.last_failure(),
            Some(BootError::CapabilityMismatch { .. })
        ));
    }

    #[test]
    fn construction_failure_is_swallowed() {
        let registry = registry_with(load_failing_factory);
        let mut host = StubHost::default();
        let mut launcher = launcher();

        launcher.on_start(&mut host, &registry, None);

        assert!(!host.calls.contains(&HostCall::Initialize));
        assert!(matches!(
            launcher.last_failure(),
            Some(BootError::Construction { .. })
        ));
    }

    #[test]
    fn host_rejection_is_recorded() {
        let registry = registry_with(load_game);
        let mut host = StubHost {
            reject_initialize: true,
            ..StubHost::default()
        };
        let mut launcher = launcher();

        launcher.on_start(&mut host, &registry, None);

        assert!(matches!(
            launcher.last_failure(),
            Some(BootError::Host(HostError::NotStarted))
        ));
    }

    #[test]
    fn start_after_a_failed_load_retries() {
        static ATTEMPTS: AtomicUsize = AtomicUsize::new(0);
        fn flaky_load(ctx: &mut ModuleContext) -> LoadResult {
            if ATTEMPTS.fetch_add(1, Ordering::SeqCst) == 0 {
                return Err("asset pack missing".into());
            }
            ctx.export("game", build_stub_game as GameFactory);
            Ok(())
        }

        let registry = registry_with(flaky_load);
        let mut host = StubHost::default();
        let mut launcher = launcher();

        launcher.on_start(&mut host, &registry, None);
        assert!(launcher.last_failure().is_some());
        assert!(!host.calls.contains(&HostCall::Initialize));

        launcher.on_start(&mut host, &registry, None);
        assert!(launcher.last_failure().is_none());
        assert!(host.calls.contains(&HostCall::Initialize));
        assert_eq!(ATTEMPTS.load(Ordering::SeqCst), 2);
    }
}
