use std::rc::Rc;

use anyhow::{Context, Result};
use clap::Parser;
use futures::executor::LocalPool;

use render_shell::cli::Cli;
use render_shell::local::{run_until_idle, LocalBackend, LocalHost, TextCell};
use render_shell::logging::{init_logging, LoggingConfig};
use render_shell::traits::{Backend, TextElement};
use render_shell::{
    BackendCommand, SecondaryWindow, ShellController, SpawnState, UiBindings, WindowConfig,
    WindowLabel,
};

// === Constants ===

const MAIN_WINDOW_TITLE: &str = "render-shell";
const MAIN_WINDOW_WIDTH: u32 = 800;
const MAIN_WINDOW_HEIGHT: u32 = 600;
const GREET_NAME: &str = "render-shell";

fn secondary_window(cli: &Cli) -> Result<SecondaryWindow> {
    let label = WindowLabel::new(cli.label.clone()).context("invalid --label")?;
    let config = match &cli.window_config {
        Some(path) => WindowConfig::from_json_file(path)?,
        None => cli.flag_window_config(),
    };
    Ok(SecondaryWindow { label, config })
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(LoggingConfig {
        env_filter: cli.log_filter.clone(),
        ..Default::default()
    });

    let secondary = secondary_window(&cli)?;
    let second_label = secondary.label.clone();

    let host = Rc::new(LocalHost::new(WindowConfig::new(
        "index.html",
        MAIN_WINDOW_TITLE,
        MAIN_WINDOW_WIDTH,
        MAIN_WINDOW_HEIGHT,
    )));
    let backend = Rc::new(LocalBackend::new(host.clone()));
    if let Some(message) = &cli.fail_create {
        host.fail_next_creation(message.clone());
    }

    // The primary window exists before the shell starts, so its render
    // context is set up here rather than by the spawner
    let main_label = host.primary().label().clone();
    pollster::block_on(backend.invoke(BackendCommand::InitWindowWgpu {
        window_label: main_label.clone(),
    }))
    .with_context(|| format!("failed to initialize render context for `{}`", main_label))?;

    let greet_msg = Rc::new(TextCell::default());
    let ui = UiBindings {
        greet_input: Rc::new(TextCell::new(GREET_NAME)),
        greet_msg: greet_msg.clone(),
    };

    let mut pool = LocalPool::new();
    let shell = ShellController::new(
        ui,
        host.clone(),
        backend.clone(),
        host.clone(),
        secondary,
        pool.spawner(),
    );

    shell.on_greet_key("Enter");
    let attempts: Vec<_> = (0..cli.spawn_count)
        .map(|_| shell.on_new_window_click())
        .collect();
    run_until_idle(&mut pool, &host);

    shell.on_enable_render_click();
    run_until_idle(&mut pool, &host);

    if host.focus(&second_label) {
        shell.on_disable_render_click();
        run_until_idle(&mut pool, &host);
    } else {
        log::warn!("window `{}` is not live, skipping disable", second_label);
    }

    // === Report ===

    log::info!("greeting: {}", greet_msg.text());
    for (n, id) in attempts.into_iter().enumerate() {
        match shell.spawn_state(id) {
            Some(SpawnState::Initialized(_)) => log::info!("spawn #{}: initialized", n + 1),
            Some(SpawnState::Failed(failure)) => log::info!("spawn #{}: failed ({:?})", n + 1, failure),
            Some(SpawnState::Pending) | None => log::warn!("spawn #{}: never settled", n + 1),
        }
    }
    for label in host.live_windows() {
        match backend.render_context(&label) {
            Some(context) => log::info!(
                "`{}`: rendering={} toggles={}",
                label,
                context.rendering,
                context.toggles
            ),
            None => log::info!("`{}`: no render context", label),
        }
    }
    log::info!("{} backend calls issued", backend.calls().len());

    Ok(())
}
