use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;

use futures::FutureExt;

use super::host::LocalHost;
use crate::command::BackendCommand;
use crate::error::CommandError;
use crate::traits::{Backend, CommandFuture};
use crate::types::{Ack, WindowLabel};

/// Backend-side render state of one window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderContext {
    pub rendering: bool,
    pub toggles: u32,
}

#[derive(Default)]
struct BackendState {
    contexts: BTreeMap<WindowLabel, RenderContext>,
    calls: Vec<BackendCommand>,
    rejections: HashMap<&'static str, String>,
    disconnected: bool,
}

/// In-process backend keeping one render context per window label.
///
/// Commands are recorded in issue order when invoked and executed when the
/// returned future is polled.
#[derive(Clone)]
pub struct LocalBackend {
    state: Rc<RefCell<BackendState>>,
    host: Rc<LocalHost>,
}

impl LocalBackend {
    pub fn new(host: Rc<LocalHost>) -> Self {
        Self {
            state: Rc::new(RefCell::new(BackendState::default())),
            host,
        }
    }

    /// Every command invoked so far, in issue order
    pub fn calls(&self) -> Vec<BackendCommand> {
        self.state.borrow().calls.clone()
    }

    /// Invoked commands with the given name
    pub fn calls_named(&self, name: &str) -> Vec<BackendCommand> {
        self.state
            .borrow()
            .calls
            .iter()
            .filter(|cmd| cmd.name() == name)
            .cloned()
            .collect()
    }

    pub fn render_context(&self, label: &WindowLabel) -> Option<RenderContext> {
        self.state.borrow().contexts.get(label).copied()
    }

    /// Reject every later invocation of `command` with `message`
    pub fn reject(&self, command: &'static str, message: impl Into<String>) {
        self.state
            .borrow_mut()
            .rejections
            .insert(command, message.into());
    }

    /// Stop answering; pending and later invocations report `Disconnected`
    pub fn disconnect(&self) {
        self.state.borrow_mut().disconnected = true;
    }

    fn execute(&self, command: BackendCommand) -> Result<Ack, CommandError> {
        let name = command.name();
        let mut state = self.state.borrow_mut();

        if state.disconnected {
            return Err(CommandError::Disconnected { command: name });
        }
        if let Some(message) = state.rejections.get(name) {
            return Err(CommandError::rejected(name, message.clone()));
        }

        match command {
            BackendCommand::Greet { name } => Ok(Ack::new(
                format!("Hello, {}! You've been greeted from Rust!", name).into(),
            )),
            BackendCommand::InitWindowWgpu { window_label } => {
                if !self.host.is_live(&window_label) {
                    return Err(CommandError::rejected(
                        name,
                        format!("no window labeled `{}`", window_label),
                    ));
                }
                log::debug!("render context for `{}` created", window_label);
                state.contexts.insert(window_label, RenderContext::default());
                Ok(Ack::default())
            }
            BackendCommand::ToggleRendering {
                window_label,
                state: enable,
            } => match state.contexts.get_mut(&window_label) {
                Some(context) => {
                    context.rendering = enable;
                    context.toggles += 1;
                    Ok(Ack::default())
                }
                None => Err(CommandError::rejected(
                    name,
                    format!("no render context for `{}`", window_label),
                )),
            },
        }
    }
}

impl Backend for LocalBackend {
    fn invoke(&self, command: BackendCommand) -> CommandFuture {
        log::trace!("invoke {}", command.name());
        self.state.borrow_mut().calls.push(command.clone());
        let backend = self.clone();
        async move { backend.execute(command) }.boxed_local()
    }
}
