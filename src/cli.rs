// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

use crate::types::WindowConfig;

#[derive(Parser, Debug, Clone)]
#[command(name = "render-shell")]
#[command(about = "Multi-window render shell", long_about = None)]
pub struct Cli {
    /// Label of the secondary window
    #[arg(long, default_value = "second-window")]
    pub label: String,

    /// Page loaded by the secondary window
    #[arg(long, default_value = "index.html")]
    pub url: String,

    /// Secondary window title
    #[arg(long, default_value = "New Window")]
    pub title: String,

    #[arg(long, default_value_t = 800)]
    pub width: u32,

    #[arg(long, default_value_t = 600)]
    pub height: u32,

    /// JSON file with the secondary window config; overrides url/title/size
    #[arg(long = "window-config", value_name = "PATH")]
    pub window_config: Option<PathBuf>,

    /// How many times the "new window" button is clicked
    #[arg(long = "spawn-count", default_value_t = 1)]
    pub spawn_count: u32,

    /// Make the host fail the first window creation with this message
    #[arg(long = "fail-create", value_name = "MESSAGE")]
    pub fail_create: Option<String>,

    /// Log filter, e.g. "debug" or "render_shell=trace"
    #[arg(long = "log-filter")]
    pub log_filter: Option<String>,
}

impl Cli {
    /// Secondary window config from the command-line flags alone
    pub fn flag_window_config(&self) -> WindowConfig {
        WindowConfig::new(self.url.clone(), self.title.clone(), self.width, self.height)
    }
}
