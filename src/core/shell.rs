use std::cell::RefCell;
use std::collections::VecDeque;
use std::future::Future;
use std::rc::Rc;

use futures::executor::LocalSpawner;
use futures::task::LocalSpawnExt;

use super::spawner::{SpawnState, WindowSpawner};
use super::toggle::RenderToggleController;
use crate::command::BackendCommand;
use crate::traits::{Backend, CurrentWindow, TextElement, WindowHost};
use crate::types::{WindowConfig, WindowLabel};

/// Element handles the shell reads from and writes to
pub struct UiBindings {
    pub greet_input: Rc<dyn TextElement>,
    pub greet_msg: Rc<dyn TextElement>,
}

/// The window opened by the "new window" button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecondaryWindow {
    pub label: WindowLabel,
    pub config: WindowConfig,
}

/// How many recent spawn attempts stay queryable
pub const SPAWN_HISTORY_LIMIT: usize = 64;

/// Index of a spawn attempt made through [`ShellController::on_new_window_click`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpawnAttemptId(usize);

/// Most recent spawn attempts; older ones are forgotten
#[derive(Debug, Default)]
struct AttemptLog {
    first: usize,
    states: VecDeque<SpawnState>,
}

impl AttemptLog {
    fn push(&mut self) -> SpawnAttemptId {
        self.states.push_back(SpawnState::Pending);
        let id = SpawnAttemptId(self.first + self.states.len() - 1);
        if self.states.len() > SPAWN_HISTORY_LIMIT {
            self.states.pop_front();
            self.first += 1;
        }
        id
    }

    fn get(&self, id: SpawnAttemptId) -> Option<&SpawnState> {
        id.0
            .checked_sub(self.first)
            .and_then(|index| self.states.get(index))
    }

    fn settle(&mut self, id: SpawnAttemptId, state: SpawnState) {
        let slot = id
            .0
            .checked_sub(self.first)
            .and_then(|index| self.states.get_mut(index));
        match slot {
            Some(slot) => *slot = state,
            None => log::debug!("spawn attempt {} settled after leaving the history", id.0),
        }
    }

    fn total(&self) -> usize {
        self.first + self.states.len()
    }
}

/// Routes UI events to the spawner and the toggle controller.
///
/// Constructed once at startup. Every handler schedules its work as an
/// independent task on the local executor and returns immediately.
pub struct ShellController<H: ?Sized, B: ?Sized, C: ?Sized> {
    ui: UiBindings,
    backend: Rc<B>,
    spawner: WindowSpawner<H, B>,
    toggle: RenderToggleController<B, C>,
    secondary: SecondaryWindow,
    attempts: Rc<RefCell<AttemptLog>>,
    tasks: LocalSpawner,
}

impl<H, B, C> ShellController<H, B, C>
where
    H: WindowHost + ?Sized,
    B: Backend + ?Sized + 'static,
    C: CurrentWindow + ?Sized,
{
    pub fn new(
        ui: UiBindings,
        host: Rc<H>,
        backend: Rc<B>,
        current: Rc<C>,
        secondary: SecondaryWindow,
        tasks: LocalSpawner,
    ) -> Self {
        Self {
            ui,
            spawner: WindowSpawner::new(host, Rc::clone(&backend)),
            toggle: RenderToggleController::new(Rc::clone(&backend), current),
            backend,
            secondary,
            attempts: Rc::new(RefCell::new(AttemptLog::default())),
            tasks,
        }
    }

    pub fn secondary(&self) -> &SecondaryWindow {
        &self.secondary
    }

    /// Greet whoever is typed in the input and show the reply
    pub fn on_greet(&self) {
        let name = self.ui.greet_input.text();
        let reply = self.backend.invoke(BackendCommand::Greet { name });
        let msg = Rc::clone(&self.ui.greet_msg);

        self.schedule(async move {
            match reply.await {
                Ok(ack) => msg.set_text(&ack.to_string()),
                Err(err) => log::error!("greet failed: {}", err),
            }
        });
    }

    /// Key handler for the greet input
    pub fn on_greet_key(&self, key: &str) {
        if key == "Enter" {
            self.on_greet();
        }
    }

    /// Open the secondary window. The returned id tracks the attempt while it
    /// is among the last [`SPAWN_HISTORY_LIMIT`] attempts.
    pub fn on_new_window_click(&self) -> SpawnAttemptId {
        let id = self.attempts.borrow_mut().push();

        let attempt = self
            .spawner
            .open_secondary_window(self.secondary.label.clone(), self.secondary.config.clone());
        let attempts = Rc::clone(&self.attempts);

        self.schedule(async move {
            let outcome = attempt.await;
            attempts.borrow_mut().settle(id, outcome.into());
        });

        id
    }

    pub fn on_enable_render_click(&self) {
        self.schedule_toggle(true);
    }

    pub fn on_disable_render_click(&self) {
        self.schedule_toggle(false);
    }

    /// State of a spawn attempt, `None` for an id this controller never
    /// issued or one that has dropped out of the history
    pub fn spawn_state(&self, id: SpawnAttemptId) -> Option<SpawnState> {
        self.attempts.borrow().get(id).cloned()
    }

    /// Number of spawn attempts made so far
    pub fn spawn_attempts(&self) -> usize {
        self.attempts.borrow().total()
    }

    fn schedule_toggle(&self, enable: bool) {
        let reply = self.toggle.set_rendering(enable, None);
        // Outcome is already logged by the toggle controller
        self.schedule(async move {
            let _ = reply.await;
        });
    }

    fn schedule(&self, task: impl Future<Output = ()> + 'static) {
        if let Err(err) = self.tasks.spawn_local(task) {
            log::error!("failed to schedule ui task: {}", err);
        }
    }
}
