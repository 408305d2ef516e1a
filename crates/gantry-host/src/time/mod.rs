//! Frame timing.
//!
//! One [`FrameClock`] per render loop; tick it once per presented frame and
//! hand the resulting [`FrameTime`] to the game.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
