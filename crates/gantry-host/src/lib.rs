//! Gantry host framework.
//!
//! The application shell a launcher hands a game object to. Once started,
//! the shell owns the platform window, the GPU surface, and the
//! render/update loop; the game is driven through the callbacks in
//! [`core`]. Lifecycle wiring lives in [`shell`], everything below it is
//! loop plumbing.

pub mod color;
pub mod config;
pub mod core;
pub mod device;
pub mod logging;
pub mod shell;
pub mod time;

mod window;
