use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ShellError;

/// Unique, immutable identity of a window
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WindowLabel(String);

impl WindowLabel {
    /// Create a label, rejecting the empty string
    pub fn new(label: impl Into<String>) -> Result<Self, ShellError> {
        let label = label.into();
        if label.is_empty() {
            return Err(ShellError::EmptyLabel);
        }
        Ok(Self(label))
    }

    /// Label from a known non-empty literal
    pub(crate) fn from_static(label: &'static str) -> Self {
        debug_assert!(!label.is_empty());
        Self(label.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for WindowLabel {
    type Error = ShellError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<WindowLabel> for String {
    fn from(label: WindowLabel) -> Self {
        label.0
    }
}

impl fmt::Display for WindowLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Handle to a window known to the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowHandle {
    label: WindowLabel,
}

impl WindowHandle {
    pub fn new(label: WindowLabel) -> Self {
        Self { label }
    }

    pub fn label(&self) -> &WindowLabel {
        &self.label
    }
}

/// Parameters for a new window, all supplied by the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WindowConfig {
    pub url: String,
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl WindowConfig {
    pub fn new(url: impl Into<String>, title: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
            width,
            height,
        }
    }

    /// Load a config from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ShellError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ShellError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ShellError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Outcome of a window creation request, delivered once by the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WindowLifecycleEvent {
    Created,
    Error(String),
}

/// Start or stop rendering on one window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderToggleRequest {
    pub window_label: WindowLabel,
    pub enable: bool,
}

impl RenderToggleRequest {
    pub fn new(window_label: WindowLabel, enable: bool) -> Self {
        Self {
            window_label,
            enable,
        }
    }
}

/// Opaque backend acknowledgment
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Ack(serde_json::Value);

impl Ack {
    pub fn new(value: serde_json::Value) -> Self {
        Self(value)
    }

    pub fn value(&self) -> &serde_json::Value {
        &self.0
    }

    /// The acknowledgment as text, when the backend answered with a string
    pub fn as_str(&self) -> Option<&str> {
        self.0.as_str()
    }
}

impl fmt::Display for Ack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            serde_json::Value::Null => f.write_str("ok"),
            serde_json::Value::String(text) => f.write_str(text),
            other => write!(f, "{other}"),
        }
    }
}
