mod controller;
pub use controller::*;

mod fill;
pub use fill::flood_fill;

mod palette;
pub use palette::*;

mod settings;
pub use settings::*;

pub mod tools;
pub use tools::{Tool, ToolbarAction};

// Re-export the engine types a front end needs
pub use pixel_engine::{
    AlwaysConfirm, Cell, Color, ConfirmGate, EngineError, Grid, GridPosition, ImageFormat, NeverConfirm, PixelBuffer, RenderSurface, Result, RgbaSurface,
    hit_test,
};
