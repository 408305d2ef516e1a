//! Platform bootstrap for gantry hosts.
//!
//! The launcher is the glue the platform invokes at startup. It starts the
//! host shell, makes the configured game module available, resolves the
//! module's game binding, constructs the game, and hands it to the host.
//! Any failure past host startup is logged once and swallowed; the
//! application comes up with no game wired in rather than not coming up at
//! all.
//!
//! ```
//! use gantry_launcher::{GameHost, Launcher, LaunchSpec};
//! use gantry_registry::Registry;
//! # use gantry_host::core::Game;
//! # use gantry_host::shell::{HostError, SavedState};
//! # struct Headless;
//! # impl GameHost for Headless {
//! #     fn startup(&mut self, _saved: Option<SavedState>) {}
//! #     fn initialize(&mut self, _game: Box<dyn Game>) -> Result<(), HostError> { Ok(()) }
//! # }
//!
//! let registry = Registry::new();
//! let mut host = Headless;
//! let mut launcher = Launcher::new(LaunchSpec::new("demo.core", "game"));
//!
//! // The module was never registered, so the failure is swallowed and the
//! // host stays up without a game.
//! launcher.on_start(&mut host, &registry, None);
//! assert!(launcher.last_failure().is_some());
//! ```

pub mod bootstrap;
pub mod error;

mod global;

pub use bootstrap::{GameHost, Launcher, LaunchSpec};
pub use error::BootError;
pub use global::global_registry;
