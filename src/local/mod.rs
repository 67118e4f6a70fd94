//! In-process stand-ins for the windowing host, the native backend and the
//! UI surface. Used by the `render-shell` binary and the integration tests.

mod backend;
mod host;
mod ui;

pub use backend::{LocalBackend, RenderContext};
pub use host::{run_until_idle, LocalHost, MAIN_WINDOW_LABEL};
pub use ui::TextCell;
