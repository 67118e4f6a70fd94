pub mod cli;
pub mod command;
pub mod core;
pub mod error;
pub mod local;
pub mod logging;
pub mod traits;
pub mod types;

pub use command::BackendCommand;
pub use crate::core::{
    RenderToggleController, SecondaryWindow, ShellController, SpawnFailure, SpawnOutcome,
    SpawnState, UiBindings, WindowSpawner, SPAWN_HISTORY_LIMIT,
};
pub use error::{CommandError, ShellError};
pub use types::{Ack, RenderToggleRequest, WindowConfig, WindowHandle, WindowLabel};
