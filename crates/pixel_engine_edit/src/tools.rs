//! Tool definitions for pixel grid editing
//!
//! Tools are a closed set; adding one means adding a variant here and a
//! match arm in the controller's click handler.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Available editing tools
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    /// Paint the clicked cell
    #[default]
    Pencil,
    /// Flood fill the same-colored region around the clicked cell
    Bucket,
}

impl Tool {
    pub const ALL: [Tool; 2] = [Tool::Pencil, Tool::Bucket];

    /// Identifier used by toolbars and scripts
    pub fn id(&self) -> &'static str {
        match self {
            Tool::Pencil => "pencil",
            Tool::Bucket => "bucket",
        }
    }

    /// Get the display name
    pub fn name(&self) -> &'static str {
        match self {
            Tool::Pencil => "Pencil",
            Tool::Bucket => "Bucket",
        }
    }
}

impl std::fmt::Display for Tool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Tool {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tool::ALL
            .into_iter()
            .find(|tool| tool.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown tool '{s}'"))
    }
}

/// What a toolbar button can ask for: a tool, or wiping the drawing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToolbarAction {
    Select(Tool),
    Clear,
}

impl FromStr for ToolbarAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("clear") {
            return Ok(ToolbarAction::Clear);
        }
        s.parse().map(ToolbarAction::Select)
    }
}
