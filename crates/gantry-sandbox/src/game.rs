use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::WindowId;

use gantry_host::color::Color;
use gantry_host::core::{FrameCtx, Game, GameControl};
use gantry_host::shell::SavedState;

/// Smoke-test game: pulses the clear color and exits on Escape.
///
/// Exists to prove the load, resolve, wire and run path end to end.
pub struct SandboxGame {
    base: Color,
}

impl SandboxGame {
    pub fn new() -> Self {
        Self {
            base: Color::rgb(0.10, 0.16, 0.24),
        }
    }

    fn pulse(&self, elapsed: f32) -> Color {
        let s = 0.5 + 0.5 * (elapsed * 0.8).sin();
        Color::rgb(
            self.base.r + 0.10 * s,
            self.base.g + 0.12 * s,
            self.base.b + 0.18 * s,
        )
    }
}

impl Default for SandboxGame {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for SandboxGame {
    fn on_start(&mut self, saved: Option<&SavedState>) {
        match saved {
            Some(state) => log::info!(
                "sandbox game started ({} bytes of saved state)",
                state.as_bytes().len()
            ),
            None => log::info!("sandbox game started"),
        }
    }

    fn on_window_event(&mut self, _window_id: WindowId, event: &WindowEvent) -> GameControl {
        if let WindowEvent::KeyboardInput {
            event:
                KeyEvent {
                    physical_key: PhysicalKey::Code(KeyCode::Escape),
                    state: ElementState::Pressed,
                    ..
                },
            ..
        } = event
        {
            log::info!("escape pressed; exiting");
            return GameControl::Exit;
        }
        GameControl::Continue
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> GameControl {
        let clear = self.pulse(ctx.time.elapsed);
        ctx.render(clear, |_, _, _| {})
    }

    fn on_suspend(&mut self) {
        log::debug!("sandbox game suspended");
    }

    fn on_resume(&mut self) {
        log::debug!("sandbox game resumed");
    }

    fn on_stop(&mut self) {
        log::info!("sandbox game stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pulse_stays_inside_the_unit_range() {
        let game = SandboxGame::new();
        for i in 0..200 {
            let c = game.pulse(i as f32 * 0.13);
            assert!((0.0..=1.0).contains(&c.r));
            assert!((0.0..=1.0).contains(&c.g));
            assert!((0.0..=1.0).contains(&c.b));
        }
    }

    #[test]
    fn pulse_varies_over_time() {
        let game = SandboxGame::new();
        let a = game.pulse(0.0);
        let b = game.pulse(2.0);
        assert_ne!(a, b);
    }
}
