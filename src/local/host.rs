use std::cell::RefCell;
use std::collections::{BTreeMap, VecDeque};

use futures::channel::oneshot;
use futures::executor::LocalPool;

use crate::traits::{CurrentWindow, PendingWindow, WindowHost};
use crate::types::{WindowConfig, WindowHandle, WindowLabel, WindowLifecycleEvent};

/// Label the host gives the primary window
pub const MAIN_WINDOW_LABEL: &str = "main";

struct QueuedEvent {
    label: WindowLabel,
    event: WindowLifecycleEvent,
    sender: oneshot::Sender<WindowLifecycleEvent>,
}

struct HostState {
    primary: WindowLabel,
    windows: BTreeMap<WindowLabel, WindowConfig>,
    /// Requested but not yet created; holds the label against duplicates
    reserved: BTreeMap<WindowLabel, WindowConfig>,
    current: WindowLabel,
    queued: VecDeque<QueuedEvent>,
    fail_next: Option<String>,
}

/// In-process window host.
///
/// Tracks live windows and focus. Lifecycle events are queued when a window is
/// requested and only delivered by [`LocalHost::dispatch_pending`], the way a
/// real host reports them from its own event loop after the request returns.
/// A requested window becomes live when its `Created` event is delivered.
pub struct LocalHost {
    state: RefCell<HostState>,
}

impl LocalHost {
    /// Host with a primary window labeled `main`, which starts out current
    pub fn new(primary: WindowConfig) -> Self {
        Self::with_primary(WindowLabel::from_static(MAIN_WINDOW_LABEL), primary)
    }

    pub fn with_primary(label: WindowLabel, config: WindowConfig) -> Self {
        let mut windows = BTreeMap::new();
        windows.insert(label.clone(), config);
        Self {
            state: RefCell::new(HostState {
                primary: label.clone(),
                windows,
                reserved: BTreeMap::new(),
                current: label,
                queued: VecDeque::new(),
                fail_next: None,
            }),
        }
    }

    pub fn primary(&self) -> WindowHandle {
        WindowHandle::new(self.state.borrow().primary.clone())
    }

    pub fn is_live(&self, label: &WindowLabel) -> bool {
        self.state.borrow().windows.contains_key(label)
    }

    pub fn live_windows(&self) -> Vec<WindowLabel> {
        self.state.borrow().windows.keys().cloned().collect()
    }

    /// Config of a live window
    pub fn window_config(&self, label: &WindowLabel) -> Option<WindowConfig> {
        self.state.borrow().windows.get(label).cloned()
    }

    /// Make `label` the current window. Returns false for unknown windows.
    pub fn focus(&self, label: &WindowLabel) -> bool {
        let mut state = self.state.borrow_mut();
        if !state.windows.contains_key(label) {
            return false;
        }
        log::debug!("focus -> `{}`", label);
        state.current = label.clone();
        true
    }

    /// Close a secondary window; focus falls back to the primary one.
    /// The primary window cannot be closed.
    pub fn close_window(&self, label: &WindowLabel) -> bool {
        let mut state = self.state.borrow_mut();
        if *label == state.primary || state.windows.remove(label).is_none() {
            return false;
        }
        if state.current == *label {
            state.current = state.primary.clone();
        }
        log::debug!("window `{}` closed", label);
        true
    }

    /// Make the next creation request fail with `message`
    pub fn fail_next_creation(&self, message: impl Into<String>) {
        self.state.borrow_mut().fail_next = Some(message.into());
    }

    /// Number of lifecycle events waiting for delivery
    pub fn pending_events(&self) -> usize {
        self.state.borrow().queued.len()
    }

    /// Deliver every queued lifecycle event. Returns how many were delivered.
    pub fn dispatch_pending(&self) -> usize {
        let queued: Vec<QueuedEvent> = self.state.borrow_mut().queued.drain(..).collect();
        let count = queued.len();

        for QueuedEvent {
            label,
            event,
            sender,
        } in queued
        {
            log::trace!("lifecycle `{}`: {:?}", label, event);
            if event == WindowLifecycleEvent::Created {
                let mut state = self.state.borrow_mut();
                if let Some(config) = state.reserved.remove(&label) {
                    state.windows.insert(label.clone(), config);
                }
            }
            if sender.send(event).is_err() {
                log::debug!("nobody listening for lifecycle of `{}`", label);
            }
        }

        count
    }
}

impl WindowHost for LocalHost {
    fn create_window(&self, label: &WindowLabel, config: &WindowConfig) -> PendingWindow {
        let (sender, receiver) = oneshot::channel();
        let mut state = self.state.borrow_mut();

        let event = if let Some(message) = state.fail_next.take() {
            WindowLifecycleEvent::Error(message)
        } else if state.windows.contains_key(label) || state.reserved.contains_key(label) {
            WindowLifecycleEvent::Error(format!("a window with label `{}` already exists", label))
        } else {
            state.reserved.insert(label.clone(), config.clone());
            WindowLifecycleEvent::Created
        };

        state.queued.push_back(QueuedEvent {
            label: label.clone(),
            event,
            sender,
        });

        PendingWindow {
            handle: WindowHandle::new(label.clone()),
            lifecycle: receiver,
        }
    }
}

impl CurrentWindow for LocalHost {
    fn current_window(&self) -> WindowHandle {
        WindowHandle::new(self.state.borrow().current.clone())
    }
}

/// Run tasks and deliver lifecycle events until neither makes progress
pub fn run_until_idle(pool: &mut LocalPool, host: &LocalHost) {
    loop {
        pool.run_until_stalled();
        if host.dispatch_pending() == 0 {
            break;
        }
    }
}
