use std::rc::Rc;

use futures::executor::LocalPool;

use render_shell::local::{run_until_idle, LocalBackend, LocalHost, TextCell};
use render_shell::traits::{Backend, TextElement};
use render_shell::{
    BackendCommand, SecondaryWindow, ShellController, SpawnFailure, SpawnState, UiBindings,
    WindowConfig, WindowLabel, SPAWN_HISTORY_LIMIT,
};

fn label(s: &str) -> WindowLabel {
    WindowLabel::new(s).unwrap()
}

struct Shell {
    pool: LocalPool,
    host: Rc<LocalHost>,
    backend: Rc<LocalBackend>,
    greet_input: Rc<TextCell>,
    greet_msg: Rc<TextCell>,
    controller: ShellController<LocalHost, LocalBackend, LocalHost>,
}

impl Shell {
    fn new() -> Self {
        let pool = LocalPool::new();
        let host = Rc::new(LocalHost::new(WindowConfig::new("index.html", "Main", 800, 600)));
        let backend = Rc::new(LocalBackend::new(host.clone()));
        pollster::block_on(backend.invoke(BackendCommand::InitWindowWgpu {
            window_label: label("main"),
        }))
        .unwrap();

        let greet_input = Rc::new(TextCell::new("Ferris"));
        let greet_msg = Rc::new(TextCell::default());
        let ui = UiBindings {
            greet_input: greet_input.clone(),
            greet_msg: greet_msg.clone(),
        };
        let secondary = SecondaryWindow {
            label: label("second-window"),
            config: WindowConfig::new("index.html", "New Window", 800, 600),
        };

        let controller = ShellController::new(
            ui,
            host.clone(),
            backend.clone(),
            host.clone(),
            secondary,
            pool.spawner(),
        );

        Self {
            pool,
            host,
            backend,
            greet_input,
            greet_msg,
            controller,
        }
    }

    fn settle(&mut self) {
        run_until_idle(&mut self.pool, &self.host);
    }
}

// ============================================================================
// Greeting
// ============================================================================

#[test]
fn test_greet_writes_reply() {
    let mut shell = Shell::new();

    shell.controller.on_greet();
    shell.settle();

    assert_eq!(
        shell.greet_msg.text(),
        "Hello, Ferris! You've been greeted from Rust!"
    );
}

#[test]
fn test_greet_key_only_reacts_to_enter() {
    let mut shell = Shell::new();
    shell.greet_input.set_text("Tauri");

    shell.controller.on_greet_key("a");
    shell.settle();
    assert_eq!(shell.greet_msg.text(), "");

    shell.controller.on_greet_key("Enter");
    shell.settle();
    assert_eq!(
        shell.greet_msg.text(),
        "Hello, Tauri! You've been greeted from Rust!"
    );
}

#[test]
fn test_greet_failure_leaves_message_untouched() {
    let mut shell = Shell::new();
    shell.greet_msg.set_text("previous");
    shell.backend.reject(BackendCommand::GREET, "offline");

    shell.controller.on_greet();
    shell.settle();

    assert_eq!(shell.greet_msg.text(), "previous");
}

// ============================================================================
// Window spawning
// ============================================================================

#[test]
fn test_spawn_attempt_goes_pending_then_initialized() {
    let mut shell = Shell::new();

    let id = shell.controller.on_new_window_click();
    assert_eq!(shell.controller.spawn_state(id), Some(SpawnState::Pending));

    shell.settle();

    assert!(matches!(
        shell.controller.spawn_state(id),
        Some(SpawnState::Initialized(_))
    ));
    assert!(shell
        .backend
        .render_context(&label("second-window"))
        .is_some());
}

#[test]
fn test_second_click_fails_with_existing_label() {
    let mut shell = Shell::new();

    let first = shell.controller.on_new_window_click();
    let second = shell.controller.on_new_window_click();
    shell.settle();

    assert!(matches!(
        shell.controller.spawn_state(first),
        Some(SpawnState::Initialized(_))
    ));
    match shell.controller.spawn_state(second) {
        Some(SpawnState::Failed(SpawnFailure::Creation(message))) => {
            assert!(message.contains("already exists"))
        }
        other => panic!("unexpected state: {other:?}"),
    }
    assert_eq!(shell.controller.spawn_attempts(), 2);
    assert_eq!(
        shell
            .backend
            .calls_named(BackendCommand::INIT_WINDOW_WGPU)
            .len(),
        2 // main at startup + second-window
    );
}

#[test]
fn test_spawn_history_keeps_only_recent_attempts() {
    let mut shell = Shell::new();

    let ids: Vec<_> = (0..=SPAWN_HISTORY_LIMIT)
        .map(|_| shell.controller.on_new_window_click())
        .collect();
    shell.settle();

    assert_eq!(shell.controller.spawn_attempts(), SPAWN_HISTORY_LIMIT + 1);
    assert_eq!(shell.controller.spawn_state(ids[0]), None);
    assert!(matches!(
        shell.controller.spawn_state(ids[1]),
        Some(SpawnState::Failed(SpawnFailure::Creation(_)))
    ));
    match shell.controller.spawn_state(ids[SPAWN_HISTORY_LIMIT]) {
        Some(SpawnState::Failed(SpawnFailure::Creation(message))) => {
            assert!(message.contains("already exists"))
        }
        other => panic!("unexpected state: {other:?}"),
    }
    // The evicted first attempt still opened and initialized the window
    assert!(shell
        .backend
        .render_context(&label("second-window"))
        .is_some());
}

// ============================================================================
// Render toggles
// ============================================================================

#[test]
fn test_enable_on_main_then_disable_on_second() {
    let mut shell = Shell::new();

    shell.controller.on_new_window_click();
    shell.settle();

    shell.controller.on_enable_render_click();
    shell.settle();
    assert!(shell.host.focus(&label("second-window")));
    shell.controller.on_disable_render_click();
    shell.settle();

    assert_eq!(
        shell.backend.calls_named(BackendCommand::TOGGLE_RENDERING),
        vec![
            BackendCommand::ToggleRendering {
                window_label: label("main"),
                state: true,
            },
            BackendCommand::ToggleRendering {
                window_label: label("second-window"),
                state: false,
            },
        ]
    );
}

#[test]
fn test_toggle_before_settle_targets_focus_at_click_time() {
    let mut shell = Shell::new();
    shell.controller.on_new_window_click();
    shell.settle();

    // Clicked while `main` is current, focus moves before the task runs
    shell.controller.on_enable_render_click();
    assert!(shell.host.focus(&label("second-window")));
    shell.settle();

    assert_eq!(
        shell.backend.calls_named(BackendCommand::TOGGLE_RENDERING),
        vec![BackendCommand::ToggleRendering {
            window_label: label("main"),
            state: true,
        }]
    );
    assert!(shell.backend.render_context(&label("main")).unwrap().rendering);
    assert!(!shell
        .backend
        .render_context(&label("second-window"))
        .unwrap()
        .rendering);
}

#[test]
fn test_double_enable_click_sends_two_toggles() {
    let mut shell = Shell::new();

    shell.controller.on_enable_render_click();
    shell.controller.on_enable_render_click();
    shell.settle();

    let context = shell.backend.render_context(&label("main")).unwrap();
    assert!(context.rendering);
    assert_eq!(context.toggles, 2);
}

#[test]
fn test_toggle_without_render_context_is_logged_only() {
    let mut shell = Shell::new();
    shell.backend.reject(BackendCommand::INIT_WINDOW_WGPU, "device lost");

    shell.controller.on_new_window_click();
    shell.settle();
    shell.host.focus(&label("second-window"));
    shell.controller.on_enable_render_click();
    shell.settle();

    assert!(shell
        .backend
        .render_context(&label("second-window"))
        .is_none());
    assert_eq!(
        shell
            .backend
            .calls_named(BackendCommand::TOGGLE_RENDERING)
            .len(),
        1
    );
}
