use std::rc::Rc;

use futures::future::LocalBoxFuture;
use futures::FutureExt;

use crate::command::BackendCommand;
use crate::error::CommandError;
use crate::traits::{Backend, WindowHost};
use crate::types::{Ack, WindowConfig, WindowLabel, WindowLifecycleEvent};

/// Why a spawn attempt did not end with an initialized render context
#[derive(Debug, Clone, PartialEq)]
pub enum SpawnFailure {
    /// The host reported an error instead of creating the window
    Creation(String),
    /// The window exists but the backend refused to set up its render context
    Initialization(CommandError),
}

/// Terminal result of one spawn attempt
#[derive(Debug, Clone, PartialEq)]
pub enum SpawnOutcome {
    Initialized { label: WindowLabel, ack: Ack },
    Failed { label: WindowLabel, failure: SpawnFailure },
}

impl SpawnOutcome {
    pub fn label(&self) -> &WindowLabel {
        match self {
            Self::Initialized { label, .. } | Self::Failed { label, .. } => label,
        }
    }

    pub fn is_initialized(&self) -> bool {
        matches!(self, Self::Initialized { .. })
    }
}

/// Observable state of a spawn attempt
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SpawnState {
    #[default]
    Pending,
    Initialized(Ack),
    Failed(SpawnFailure),
}

impl From<SpawnOutcome> for SpawnState {
    fn from(outcome: SpawnOutcome) -> Self {
        match outcome {
            SpawnOutcome::Initialized { ack, .. } => Self::Initialized(ack),
            SpawnOutcome::Failed { failure, .. } => Self::Failed(failure),
        }
    }
}

/// Opens secondary windows and initializes their render context once the
/// host confirms creation.
pub struct WindowSpawner<H: ?Sized, B: ?Sized> {
    host: Rc<H>,
    backend: Rc<B>,
}

impl<H, B> WindowSpawner<H, B>
where
    H: WindowHost + ?Sized,
    B: Backend + ?Sized + 'static,
{
    pub fn new(host: Rc<H>, backend: Rc<B>) -> Self {
        Self { host, backend }
    }

    /// Request a window labeled `label` and return a future that drives the
    /// attempt to its outcome.
    ///
    /// The creation request is issued before this returns. The render context
    /// is initialized only after the host reports `Created`, and at most once.
    /// Failures are logged and reported through the outcome, never retried.
    pub fn open_secondary_window(
        &self,
        label: WindowLabel,
        config: WindowConfig,
    ) -> LocalBoxFuture<'static, SpawnOutcome> {
        log::info!(
            "opening window `{}` ({}x{}, url: {})",
            label,
            config.width,
            config.height,
            config.url
        );
        let pending = self.host.create_window(&label, &config);
        let backend = Rc::clone(&self.backend);

        async move {
            let event = pending.lifecycle.await.unwrap_or_else(|_| {
                WindowLifecycleEvent::Error("host dropped the lifecycle channel".to_string())
            });

            match event {
                WindowLifecycleEvent::Created => {
                    log::info!("window `{}` created", label);
                    initialize(&*backend, label).await
                }
                WindowLifecycleEvent::Error(message) => {
                    log::error!("window `{}` creation failed: {}", label, message);
                    SpawnOutcome::Failed {
                        label,
                        failure: SpawnFailure::Creation(message),
                    }
                }
            }
        }
        .boxed_local()
    }
}

async fn initialize<B>(backend: &B, label: WindowLabel) -> SpawnOutcome
where
    B: Backend + ?Sized,
{
    let command = BackendCommand::InitWindowWgpu {
        window_label: label.clone(),
    };

    match backend.invoke(command).await {
        Ok(ack) => {
            log::info!("render context for `{}` initialized: {}", label, ack);
            SpawnOutcome::Initialized { label, ack }
        }
        Err(err) => {
            log::error!("render context for `{}` failed to initialize: {}", label, err);
            SpawnOutcome::Failed {
                label,
                failure: SpawnFailure::Initialization(err),
            }
        }
    }
}
