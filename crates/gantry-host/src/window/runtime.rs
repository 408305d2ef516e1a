use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::config::HostConfig;
use crate::core::{FrameCtx, Game, GameControl, WindowCtx};
use crate::device::Gpu;
use crate::shell::SavedState;
use crate::time::FrameClock;

/// Enters the event loop and blocks until it exits.
pub(crate) fn run(
    config: HostConfig,
    saved: Option<SavedState>,
    game: Option<Box<dyn Game>>,
) -> Result<()> {
    let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
    let mut host = HostLoop::new(config, saved, game);

    event_loop
        .run_app(&mut host)
        .context("winit event loop terminated with error")?;

    Ok(())
}

#[self_referencing]
struct WindowEntry {
    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

/// Event-loop state for the single host window.
///
/// The window and surface live in `entry` and exist only between a
/// `resumed` and the next `suspended`; mobile-style lifecycles destroy the
/// surface on suspend and hand us a fresh `resumed` later. The frame clock
/// lives outside the entry so elapsed time and the frame counter survive
/// those teardowns; only the next delta is re-baselined.
struct HostLoop {
    config: HostConfig,
    saved:  Option<SavedState>,
    game:   Option<Box<dyn Game>>,
    clock:  FrameClock,

    entry:          Option<WindowEntry>,
    game_started:   bool,
    game_stopped:   bool,
    suspended:      bool,
    exit_requested: bool,
}

impl HostLoop {
    fn new(config: HostConfig, saved: Option<SavedState>, game: Option<Box<dyn Game>>) -> Self {
        Self {
            config,
            saved,
            game,
            clock: FrameClock::new(),
            entry: None,
            game_started: false,
            game_stopped: false,
            suspended: false,
            exit_requested: false,
        }
    }

    fn request_exit(&mut self) {
        self.exit_requested = true;
    }

    fn create_window_entry(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let gpu_init = self.config.gpu.clone();

        let entry = WindowEntryTryBuilder {
            window,
            gpu_builder: |w| pollster::block_on(Gpu::new(w, gpu_init)),
        }
        .try_build()
        .context("GPU initialization failed")?;

        self.entry = Some(entry);
        // Fresh surface: the next delta starts here, elapsed keeps counting.
        self.clock.reset();
        Ok(())
    }

    /// Drives one frame. The game's `on_start` fires here, right before its
    /// first `on_frame`; with no game wired in the frame is an idle clear.
    fn drive_frame(&mut self, window_id: WindowId) {
        let clear = self.config.clear_color;
        let mut control = GameControl::Continue;

        // Split borrows to avoid `self` capture inside `ouroboros` closures.
        let HostLoop {
            entry,
            game,
            saved,
            game_started,
            clock,
            ..
        } = self;
        let Some(entry) = entry.as_mut() else {
            return;
        };

        let time = clock.tick();
        entry.with_mut(|fields| {
            let mut ctx = FrameCtx {
                window: WindowCtx {
                    id: window_id,
                    window: fields.window,
                },
                gpu: fields.gpu,
                time,
            };

            control = match game.as_mut() {
                Some(game) => {
                    if !*game_started {
                        game.on_start(saved.as_ref());
                        *game_started = true;
                    }
                    game.on_frame(&mut ctx)
                }
                // Nothing wired in: keep the window alive with idle clears.
                None => ctx.render(clear, |_, _, _| {}),
            };
        });

        if control == GameControl::Exit {
            self.request_exit();
        }
    }

    /// Hands a raw event to the game. Nothing is forwarded until `on_start`
    /// has run; the platform may deliver events before the first frame.
    fn forward_window_event(&mut self, window_id: WindowId, event: &WindowEvent) {
        if !self.game_started {
            return;
        }
        if let Some(game) = self.game.as_mut() {
            if game.on_window_event(window_id, event) == GameControl::Exit {
                self.request_exit();
            }
        }
    }

    fn suspend_game(&mut self) {
        self.suspended = true;
        if self.game_started {
            if let Some(game) = self.game.as_mut() {
                game.on_suspend();
            }
        }
        // Surface drops before the window inside the entry.
        self.entry = None;
    }

    fn resume_game(&mut self) {
        if !self.suspended {
            return;
        }
        self.suspended = false;
        self.clock.reset();
        if self.game_started {
            if let Some(game) = self.game.as_mut() {
                game.on_resume();
            }
        }
    }

    fn stop_game(&mut self) {
        if self.game_started && !self.game_stopped {
            self.game_stopped = true;
            if let Some(game) = self.game.as_mut() {
                game.on_stop();
            }
        }
    }
}

impl ApplicationHandler for HostLoop {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.entry.is_none() {
            if let Err(e) = self.create_window_entry(event_loop) {
                log::error!("failed to create window: {e:#}");
                self.request_exit();
                event_loop.exit();
                return;
            }
        }

        self.resume_game();

        if let Some(entry) = self.entry.as_ref() {
            entry.with_window(|w| w.request_redraw());
        }
    }

    fn suspended(&mut self, _event_loop: &ActiveEventLoop) {
        log::debug!("platform suspended; dropping window and surface");
        self.suspend_game();
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        event_loop.set_control_flow(ControlFlow::Wait);

        // Game pacing: continuous redraw while a surface exists.
        if let Some(entry) = self.entry.as_ref() {
            entry.with_window(|w| w.request_redraw());
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        let Some(entry) = self.entry.as_ref() else {
            return;
        };
        if entry.with_window(|w| w.id()) != window_id {
            return;
        }

        // The game gets first look at raw events.
        self.forward_window_event(window_id, &event);
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        match &event {
            WindowEvent::CloseRequested => {
                log::info!("window close requested; shutting down");
                self.request_exit();
                event_loop.exit();
            }

            WindowEvent::Resized(new_size) => {
                if let Some(entry) = self.entry.as_mut() {
                    entry.with_gpu_mut(|gpu| gpu.resize(*new_size));
                    entry.with_window(|w| w.request_redraw());
                }
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                if let Some(entry) = self.entry.as_mut() {
                    let new_size = entry.with_window(|w| w.inner_size());
                    entry.with_gpu_mut(|gpu| gpu.resize(new_size));
                    entry.with_window(|w| w.request_redraw());
                }
            }

            WindowEvent::RedrawRequested => {
                self.drive_frame(window_id);
            }

            _ => {}
        }

        if self.exit_requested {
            event_loop.exit();
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.stop_game();
        self.entry = None;
    }
}
