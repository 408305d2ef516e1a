use winit::dpi::LogicalSize;

use crate::color::Color;
use crate::device::GpuInit;

/// Host shell configuration.
///
/// Plain data with chainable setters; the default is a working windowed
/// host.
#[derive(Debug, Clone)]
pub struct HostConfig {
    /// Window title.
    pub title: String,
    /// Initial logical window size.
    pub initial_size: LogicalSize<f64>,
    /// Clear color for idle frames (no game wired in) and the conventional
    /// backdrop games clear to.
    pub clear_color: Color,
    /// GPU layer options.
    pub gpu: GpuInit,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            title: "gantry".to_string(),
            initial_size: LogicalSize::new(1280.0, 720.0),
            clear_color: Color::rgb(0.07, 0.07, 0.09),
            gpu: GpuInit::default(),
        }
    }
}

impl HostConfig {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.initial_size = LogicalSize::new(width, height);
        self
    }

    pub fn with_clear_color(mut self, color: Color) -> Self {
        self.clear_color = color;
        self
    }

    pub fn with_gpu(mut self, gpu: GpuInit) -> Self {
        self.gpu = gpu;
        self
    }
}
