use winit::event::WindowEvent;
use winit::window::WindowId;

use super::ctx::FrameCtx;
use crate::shell::SavedState;

/// Control directive returned by game callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum GameControl {
    Continue,
    Exit,
}

/// The contract a game object satisfies to be driven by the host.
///
/// The host owns the loop; the game is called. Only [`on_frame`] is
/// required, lifecycle notifications default to no-ops so trivial games
/// stay trivial.
///
/// Call order over a process: [`on_start`] once before the first frame,
/// then any interleaving of [`on_window_event`], [`on_frame`],
/// [`on_suspend`] and [`on_resume`], then [`on_stop`] once as the loop
/// winds down.
///
/// [`on_frame`]: Game::on_frame
/// [`on_start`]: Game::on_start
/// [`on_window_event`]: Game::on_window_event
/// [`on_suspend`]: Game::on_suspend
/// [`on_resume`]: Game::on_resume
/// [`on_stop`]: Game::on_stop
pub trait Game {
    /// Called once before the first frame, with the platform's retained
    /// startup context if one was provided.
    fn on_start(&mut self, saved: Option<&SavedState>) {
        let _ = saved;
    }

    /// Called for each raw window event. Input interpretation is the
    /// game's concern; the host only forwards, and forwards nothing until
    /// [`Game::on_start`] has run.
    fn on_window_event(&mut self, window_id: WindowId, event: &WindowEvent) -> GameControl {
        let _ = (window_id, event);
        GameControl::Continue
    }

    /// Called once per presented frame.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> GameControl;

    /// Called when the platform suspends the application. The window and
    /// surface are gone until [`Game::on_resume`].
    fn on_suspend(&mut self) {}

    /// Called when the platform resumes the application.
    fn on_resume(&mut self) {}

    /// Called once as the host loop exits.
    fn on_stop(&mut self) {}
}

/// Constructor for a game object, resolved out of a module binding.
///
/// A plain function pointer: game modules export one of these under a
/// well-known binding name and the launcher invokes it after resolution.
/// Construction may fail; that failure belongs to the bootstrap failure
/// scope, not to the host.
pub type GameFactory = fn() -> anyhow::Result<Box<dyn Game>>;
