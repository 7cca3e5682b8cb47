use pixel_engine::Color;
use serde::{Deserialize, Serialize};

use crate::Tool;

pub const DEFAULT_RESOLUTION: usize = 8;
pub const DEFAULT_SURFACE_SIZE: u32 = 512;
pub const DEFAULT_RESOLUTIONS: [usize; 4] = [8, 16, 32, 64];
/// Largest side length a drawing surface may have, in pixels.
pub const MAX_SURFACE_SIZE: u32 = 8192;

/// Initial state of an editing session.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct EditorSettings {
    /// Cells per side of a new grid
    pub resolution: usize,
    /// Side length of the square drawing surface in pixels
    pub surface_size: u32,
    pub selected_color: Color,
    pub grid_line_color: Color,
    pub tool: Tool,
    /// Resolutions a UI offers; resolution changes outside this list are refused
    pub resolutions: Vec<usize>,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            resolution: DEFAULT_RESOLUTION,
            surface_size: DEFAULT_SURFACE_SIZE,
            selected_color: Color::BLACK,
            grid_line_color: Color::BLACK,
            tool: Tool::Pencil,
            resolutions: DEFAULT_RESOLUTIONS.to_vec(),
        }
    }
}

impl EditorSettings {
    /// Resolutions offered for selection, the defaults if none are configured.
    pub fn offered_resolutions(&self) -> Vec<usize> {
        if self.resolutions.is_empty() {
            DEFAULT_RESOLUTIONS.to_vec()
        } else {
            self.resolutions.clone()
        }
    }
}
