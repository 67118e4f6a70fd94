pub mod shell;
pub mod spawner;
pub mod toggle;

pub use shell::{
    SecondaryWindow, ShellController, SpawnAttemptId, UiBindings, SPAWN_HISTORY_LIMIT,
};
pub use spawner::{SpawnFailure, SpawnOutcome, SpawnState, WindowSpawner};
pub use toggle::RenderToggleController;
