use winit::window::{Window, WindowId};

use super::game::GameControl;
use crate::color::Color;
use crate::device::{Gpu, SurfaceErrorAction};
use crate::time::FrameTime;

/// Handles and metadata for the window the frame targets.
pub struct WindowCtx<'a> {
    pub id:     WindowId,
    pub window: &'a Window,
}

impl WindowCtx<'_> {
    /// Window size in logical pixels.
    pub fn logical_size(&self) -> (f32, f32) {
        let physical = self.window.inner_size();
        let logical: winit::dpi::LogicalSize<f64> =
            physical.to_logical(self.window.scale_factor());
        (logical.width as f32, logical.height as f32)
    }

    /// Window size in physical pixels.
    pub fn physical_size(&self) -> (u32, u32) {
        let size = self.window.inner_size();
        (size.width, size.height)
    }
}

/// Per-frame context passed to [`Game::on_frame`].
///
/// `'a` is the callback invocation, `'w` the window borrow carried by
/// [`Gpu`].
///
/// [`Game::on_frame`]: super::Game::on_frame
pub struct FrameCtx<'a, 'w> {
    pub window: WindowCtx<'a>,
    pub gpu:    &'a mut Gpu<'w>,
    pub time:   FrameTime,
}

impl FrameCtx<'_, '_> {
    /// Clears the surface to `clear`, hands `draw` a render pass targeting
    /// the frame, then submits and presents.
    ///
    /// Games that only want a cleared frame pass an empty closure. Surface
    /// errors are absorbed here: recoverable ones skip or reconfigure, an
    /// unrecoverable one exits the loop.
    pub fn render<F>(&mut self, clear: Color, draw: F) -> GameControl
    where
        F: FnOnce(&wgpu::Device, &wgpu::Queue, &mut wgpu::RenderPass<'_>),
    {
        let mut frame = match self.gpu.begin_frame() {
            Ok(frame) => frame,
            Err(err) => {
                return match self.gpu.handle_surface_error(err) {
                    SurfaceErrorAction::Fatal => GameControl::Exit,
                    _ => GameControl::Continue,
                };
            }
        };

        // The pass borrows the encoder; it must drop before submit.
        {
            let mut pass = frame.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("gantry frame"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &frame.view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load:  wgpu::LoadOp::Clear(clear.clamped().to_wgpu()),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });
            draw(self.gpu.device(), self.gpu.queue(), &mut pass);
        }

        self.window.window.pre_present_notify();
        self.gpu.submit(frame);

        GameControl::Continue
    }
}
