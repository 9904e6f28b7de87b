use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowId(pub String);

impl WindowId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WindowId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for WindowId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Closed set of hosted application kinds a window may render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComponentKind {
    Explorer,
    Terminal,
    Notepad,
    ApiDemo,
    RpaLab,
    ControlPanel,
    TestApp,
    CodeSamples,
    Apibee,
    BillingApp,
    InteractiveLab,
}

impl ComponentKind {
    pub const ALL: [ComponentKind; 11] = [
        Self::Explorer,
        Self::Terminal,
        Self::Notepad,
        Self::ApiDemo,
        Self::RpaLab,
        Self::ControlPanel,
        Self::TestApp,
        Self::CodeSamples,
        Self::Apibee,
        Self::BillingApp,
        Self::InteractiveLab,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Explorer => "Explorer",
            Self::Terminal => "Terminal",
            Self::Notepad => "Notepad",
            Self::ApiDemo => "ApiDemo",
            Self::RpaLab => "RpaLab",
            Self::ControlPanel => "ControlPanel",
            Self::TestApp => "TestApp",
            Self::CodeSamples => "CodeSamples",
            Self::Apibee => "Apibee",
            Self::BillingApp => "BillingApp",
            Self::InteractiveLab => "InteractiveLab",
        }
    }

    /// Geometry a window of this kind gets when the open request leaves it unset.
    pub fn default_geometry(self) -> (Position, Size) {
        match self {
            Self::Explorer => (Position::new(50.0, 50.0), Size::new(1000.0, 700.0)),
            Self::RpaLab => (Position::new(100.0, 100.0), Size::new(900.0, 650.0)),
            Self::Terminal
            | Self::Notepad
            | Self::ApiDemo
            | Self::ControlPanel
            | Self::TestApp
            | Self::CodeSamples
            | Self::Apibee
            | Self::BillingApp
            | Self::InteractiveLab => (Position::new(100.0, 100.0), Size::new(700.0, 500.0)),
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown component kind `{0}`")]
pub struct UnknownComponentKind(pub String);

impl FromStr for ComponentKind {
    type Err = UnknownComponentKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownComponentKind(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowRecord {
    pub id: WindowId,
    pub title: String,
    pub component: ComponentKind,
    pub position: Position,
    pub size: Size,
    pub is_minimized: bool,
    pub is_maximized: bool,
    pub z_index: u64,
    pub previous_position: Option<Position>,
    pub previous_size: Option<Size>,
}

/// Request accepted by [`crate::WindowManagerStore::open`].
///
/// `component` stays a raw tag until the store validates it against
/// [`ComponentKind`], so callers forwarding untrusted input go through the same
/// whitelist as typed callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenWindowRequest {
    pub id: String,
    pub title: String,
    pub component: String,
    pub position: Option<Position>,
    pub size: Option<Size>,
}

impl OpenWindowRequest {
    pub fn new(id: impl Into<String>, title: impl Into<String>, component: ComponentKind) -> Self {
        Self::from_tag(id, title, component.as_str())
    }

    pub fn from_tag(
        id: impl Into<String>,
        title: impl Into<String>,
        component: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            component: component.into(),
            position: None,
            size: None,
        }
    }

    pub fn with_position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    pub fn with_size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }
}
