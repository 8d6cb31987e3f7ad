use winit::event::WindowEvent;
use winit::window::WindowId;

use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by higher layers.
///
/// For every window the runtime calls `on_window_created` exactly once before
/// its first frame and `on_window_destroyed` exactly once after its last,
/// including when the event loop shuts down with the window still open.
pub trait App {
    /// Called after the window and its GPU context exist.
    fn on_window_created(&mut self, window_id: WindowId) -> AppControl {
        let _ = window_id;
        AppControl::Continue
    }

    /// Called before the window's GPU context is released.
    fn on_window_destroyed(&mut self, window_id: WindowId) {
        let _ = window_id;
    }

    /// Called for raw window events, before the runtime handles them.
    fn on_window_event(&mut self, window_id: WindowId, event: &WindowEvent) -> AppControl {
        let _ = (window_id, event);
        AppControl::Continue
    }

    /// Called once per rendered frame per window.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}
