//! Host-facing contracts.
//!
//! The stable boundary between the runtime loop and the game object a
//! launcher wires in. Games see these types plus the per-frame context and
//! nothing of the loop internals.

mod ctx;
mod game;

pub use ctx::{FrameCtx, WindowCtx};
pub use game::{Game, GameControl, GameFactory};
