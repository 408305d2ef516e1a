//! Host shell lifecycle.
//!
//! [`Shell`] is the object a launcher drives: start it, wire a game in,
//! enter the loop. Startup and wiring are cheap and windowless; the window,
//! GPU surface, and loop come into existence inside [`Shell::run`].

use std::fmt;

use crate::config::HostConfig;
use crate::core::Game;
use crate::window::runtime;

/// Opaque startup context handed over by the platform.
///
/// The shell never interprets the payload; it is retained and offered back
/// to the game's `on_start`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SavedState(Vec<u8>);

impl SavedState {
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Error from host lifecycle operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    /// A game was offered before the shell's own startup ran.
    NotStarted,
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostError::NotStarted => write!(f, "host shell has not been started"),
        }
    }
}

impl std::error::Error for HostError {}

/// The application shell.
///
/// A launcher drives it in three steps: [`startup`] (platform lifecycle,
/// unconditional), [`initialize`] (wire the game object in), [`run`] (own
/// the calling thread until the loop exits). A shell that was started but
/// never given a game still runs; it presents idle frames in the configured
/// clear color.
///
/// [`startup`]: Shell::startup
/// [`initialize`]: Shell::initialize
/// [`run`]: Shell::run
pub struct Shell {
    config:  HostConfig,
    saved:   Option<SavedState>,
    started: bool,
    game:    Option<Box<dyn Game>>,
}

impl Shell {
    pub fn new(config: HostConfig) -> Self {
        Self {
            config,
            saved: None,
            started: false,
            game: None,
        }
    }

    /// The host framework's own startup routine.
    ///
    /// Records the platform's startup context and marks the shell started.
    /// The platform may deliver startup again; the newest context wins.
    pub fn startup(&mut self, saved: Option<SavedState>) {
        if self.started {
            log::debug!("shell startup repeated; replacing startup context");
        }
        self.saved = saved;
        self.started = true;
        log::info!("host shell started (title: '{}')", self.config.title);
    }

    /// Wires a game object into the shell's scheduling slot.
    ///
    /// The shell owns the game from here on. Wiring a second game replaces
    /// the first.
    pub fn initialize(&mut self, game: Box<dyn Game>) -> Result<(), HostError> {
        if !self.started {
            return Err(HostError::NotStarted);
        }
        if self.game.replace(game).is_some() {
            log::warn!("shell re-initialized; previous game replaced");
        } else {
            log::info!("game wired into host shell");
        }
        Ok(())
    }

    /// True once [`Shell::startup`] has run.
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// True once a game has been wired in.
    pub fn is_initialized(&self) -> bool {
        self.game.is_some()
    }

    /// The retained startup context, if the platform provided one.
    pub fn saved_state(&self) -> Option<&SavedState> {
        self.saved.as_ref()
    }

    /// Enters the render/update loop on the calling thread.
    ///
    /// Returns when the loop exits. Consumes the shell; the game's
    /// `on_stop` has run by the time this returns.
    pub fn run(self) -> anyhow::Result<()> {
        anyhow::ensure!(self.started, HostError::NotStarted);
        if self.game.is_none() {
            log::warn!("running with no game wired in; presenting idle frames");
        }
        runtime::run(self.config, self.saved, self.game)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    use crate::core::{FrameCtx, GameControl};

    struct NullGame;

    impl Game for NullGame {
        fn on_frame(&mut self, _ctx: &mut FrameCtx<'_, '_>) -> GameControl {
            GameControl::Exit
        }
    }

    #[test]
    fn initialize_before_startup_is_rejected() {
        let mut shell = Shell::new(HostConfig::default());
        let err = shell.initialize(Box::new(NullGame)).unwrap_err();
        assert_eq!(err, HostError::NotStarted);
        assert!(!shell.is_initialized());
    }

    #[test]
    fn startup_then_initialize() {
        let mut shell = Shell::new(HostConfig::default());
        shell.startup(None);
        assert!(shell.is_started());
        shell.initialize(Box::new(NullGame)).unwrap();
        assert!(shell.is_initialized());
    }

    #[test]
    fn startup_retains_the_saved_state() {
        let mut shell = Shell::new(HostConfig::default());
        shell.startup(Some(SavedState::from_bytes([1, 2, 3])));
        assert_eq!(
            shell.saved_state().map(SavedState::as_bytes),
            Some(&[1u8, 2, 3][..])
        );
    }

    #[test]
    fn repeated_startup_replaces_the_context() {
        let mut shell = Shell::new(HostConfig::default());
        shell.startup(Some(SavedState::from_bytes([1])));
        shell.startup(None);
        assert!(shell.is_started());
        assert!(shell.saved_state().is_none());
    }

    #[test]
    fn reinitialize_drops_the_replaced_game() {
        struct FlaggedGame {
            dropped: Arc<AtomicBool>,
        }

        impl Game for FlaggedGame {
            fn on_frame(&mut self, _ctx: &mut FrameCtx<'_, '_>) -> GameControl {
                GameControl::Exit
            }
        }

        impl Drop for FlaggedGame {
            fn drop(&mut self) {
                self.dropped.store(true, Ordering::SeqCst);
            }
        }

        let first = Arc::new(AtomicBool::new(false));
        let second = Arc::new(AtomicBool::new(false));

        let mut shell = Shell::new(HostConfig::default());
        shell.startup(None);
        shell
            .initialize(Box::new(FlaggedGame {
                dropped: first.clone(),
            }))
            .unwrap();
        shell
            .initialize(Box::new(FlaggedGame {
                dropped: second.clone(),
            }))
            .unwrap();

        assert!(shell.is_initialized());
        assert!(first.load(Ordering::SeqCst));
        assert!(!second.load(Ordering::SeqCst));
    }

    #[test]
    fn saved_state_reports_emptiness() {
        assert!(SavedState::default().is_empty());
        assert!(!SavedState::from_bytes([0u8]).is_empty());
    }
}
