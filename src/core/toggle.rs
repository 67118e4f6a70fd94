use std::rc::Rc;

use futures::future::LocalBoxFuture;
use futures::FutureExt;

use crate::command::BackendCommand;
use crate::error::CommandError;
use crate::traits::{Backend, CurrentWindow};
use crate::types::{Ack, RenderToggleRequest, WindowLabel};

/// Starts and stops rendering on a window by label.
///
/// Keeps no render state: the backend decides what a repeated or redundant
/// toggle means.
pub struct RenderToggleController<B: ?Sized, C: ?Sized> {
    backend: Rc<B>,
    current: Rc<C>,
}

impl<B, C> RenderToggleController<B, C>
where
    B: Backend + ?Sized,
    C: CurrentWindow + ?Sized,
{
    pub fn new(backend: Rc<B>, current: Rc<C>) -> Self {
        Self { backend, current }
    }

    /// Resolve the target window: the explicit label, otherwise whichever
    /// window is current right now.
    pub fn resolve_label(&self, window_label: Option<WindowLabel>) -> WindowLabel {
        window_label.unwrap_or_else(|| self.current.current_window().label().clone())
    }

    /// Send `toggle_rendering` for the resolved window.
    ///
    /// The label is resolved and the request sent before this returns.
    pub fn set_rendering(
        &self,
        enable: bool,
        window_label: Option<WindowLabel>,
    ) -> LocalBoxFuture<'static, Result<Ack, CommandError>> {
        let request = RenderToggleRequest::new(self.resolve_label(window_label), enable);
        self.send(request)
    }

    /// Send a fully resolved toggle request
    pub fn send(
        &self,
        request: RenderToggleRequest,
    ) -> LocalBoxFuture<'static, Result<Ack, CommandError>> {
        log::debug!(
            "toggle_rendering -> `{}` state={}",
            request.window_label,
            request.enable
        );
        let label = request.window_label.clone();
        let enable = request.enable;
        let reply = self.backend.invoke(BackendCommand::from(request));

        async move {
            let result = reply.await;
            match &result {
                Ok(ack) => log::info!(
                    "rendering {} on `{}`: {}",
                    if enable { "enabled" } else { "disabled" },
                    label,
                    ack
                ),
                Err(err) => log::error!("toggle on `{}` failed: {}", label, err),
            }
            result
        }
        .boxed_local()
    }
}
