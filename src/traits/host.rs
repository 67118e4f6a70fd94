use futures::channel::oneshot;

use crate::types::{WindowConfig, WindowHandle, WindowLabel, WindowLifecycleEvent};

/// A window whose creation has been requested but not yet confirmed
#[derive(Debug)]
pub struct PendingWindow {
    pub handle: WindowHandle,
    /// Resolves exactly once with the outcome of the creation request
    pub lifecycle: oneshot::Receiver<WindowLifecycleEvent>,
}

/// Windowing host - creates OS windows and reports their lifecycle
pub trait WindowHost {
    /// Request a new window. Returns immediately; the window is not live until
    /// `Created` arrives on the pending window's lifecycle channel.
    fn create_window(&self, label: &WindowLabel, config: &WindowConfig) -> PendingWindow;
}

/// Accessor for whichever window is current at call time
pub trait CurrentWindow {
    fn current_window(&self) -> WindowHandle;
}

impl<F> CurrentWindow for F
where
    F: Fn() -> WindowHandle,
{
    fn current_window(&self) -> WindowHandle {
        self()
    }
}
