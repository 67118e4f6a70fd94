use serde::{Deserialize, Serialize};

use crate::types::{RenderToggleRequest, WindowLabel};

/// Commands the native backend understands.
///
/// Serialized the way the backend's invoke bridge expects them:
/// `{"cmd": "toggle_rendering", "args": {"windowLabel": "main", "state": true}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "cmd", content = "args", rename_all = "snake_case")]
pub enum BackendCommand {
    Greet {
        name: String,
    },
    #[serde(rename_all = "camelCase")]
    InitWindowWgpu {
        window_label: WindowLabel,
    },
    #[serde(rename_all = "camelCase")]
    ToggleRendering {
        window_label: WindowLabel,
        state: bool,
    },
}

impl BackendCommand {
    pub const GREET: &'static str = "greet";
    pub const INIT_WINDOW_WGPU: &'static str = "init_window_wgpu";
    pub const TOGGLE_RENDERING: &'static str = "toggle_rendering";

    /// Command name as the backend registers it
    pub fn name(&self) -> &'static str {
        match self {
            Self::Greet { .. } => Self::GREET,
            Self::InitWindowWgpu { .. } => Self::INIT_WINDOW_WGPU,
            Self::ToggleRendering { .. } => Self::TOGGLE_RENDERING,
        }
    }

    /// Window this command is scoped to, if any
    pub fn window_label(&self) -> Option<&WindowLabel> {
        match self {
            Self::Greet { .. } => None,
            Self::InitWindowWgpu { window_label } | Self::ToggleRendering { window_label, .. } => {
                Some(window_label)
            }
        }
    }
}

impl From<RenderToggleRequest> for BackendCommand {
    fn from(request: RenderToggleRequest) -> Self {
        Self::ToggleRendering {
            window_label: request.window_label,
            state: request.enable,
        }
    }
}
