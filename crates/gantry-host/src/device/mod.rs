//! GPU device and surface management.
//!
//! Owns the wgpu device, queue, and configured surface for one window and
//! hands out per-frame encoders and views; the instance and adapter are
//! used during init only. Everything above this module renders through
//! [`Gpu::begin_frame`] / [`Gpu::submit`].

mod error;
mod gpu;

pub use error::SurfaceErrorAction;
pub use gpu::{Gpu, GpuFrame, GpuInit};
