//! Editing session over one grid and one rendering surface.
//!
//! The UI layer forwards its events as plain method calls (`on_click`,
//! `on_tool_select`, ...). Every handler that changes the grid repaints the
//! whole surface before it returns, so the surface never shows a stale frame.

use std::path::Path;

use pixel_engine::{
    Color, ConfirmGate, EngineError, Grid, GridPosition, ImageFormat, PixelBuffer, RenderSurface, Result, RgbaSurface, hit_test,
};

use crate::{EditorSettings, MAX_SURFACE_SIZE, Tool, ToolbarAction, flood_fill};

pub struct CanvasController<S: RenderSurface> {
    surface: S,
    grid: Grid,
    resolutions: Vec<usize>,
    selected_tool: Tool,
    selected_color: Color,
    grid_line_color: Color,
}

impl<S: RenderSurface> CanvasController<S> {
    /// Starts a session on `surface` and paints the initial grid.
    ///
    /// # Errors
    ///
    /// A non-square surface is cut down to a square of its shorter side.
    ///
    /// Returns [`EngineError::SurfaceUnavailable`] if the surface has no
    /// pixels to draw on.
    pub fn new(mut surface: S, settings: &EditorSettings) -> Result<Self> {
        if surface.width() == 0 || surface.height() == 0 {
            return Err(EngineError::SurfaceUnavailable {
                message: format!("surface is {}x{}", surface.width(), surface.height()),
            });
        }
        let size = surface.width().min(surface.height());
        if surface.width() != surface.height() {
            log::debug!("squaring {}x{} surface to {size}x{size}", surface.width(), surface.height());
            surface.resize(size, size);
        }
        let mut controller = Self {
            grid: Grid::new(settings.resolution, size as f32),
            resolutions: settings.offered_resolutions(),
            surface,
            selected_tool: settings.tool,
            selected_color: settings.selected_color,
            grid_line_color: settings.grid_line_color,
        };
        controller.render(true);
        Ok(controller)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn selected_tool(&self) -> Tool {
        self.selected_tool
    }

    pub fn selected_color(&self) -> Color {
        self.selected_color
    }

    pub fn resolutions(&self) -> &[usize] {
        &self.resolutions
    }

    /// Applies the selected tool to the cell under `(x, y)`.
    ///
    /// Returns the cell that was hit; clicks outside the grid do nothing.
    pub fn on_click(&mut self, x: f32, y: f32) -> Option<GridPosition> {
        let Some(pos) = hit_test::locate(&self.grid, x, y) else {
            log::debug!("click at ({x}, {y}) hit no cell");
            return None;
        };
        match self.selected_tool {
            Tool::Pencil => {
                self.paint_cell(pos);
            }
            Tool::Bucket => {
                self.fill_region(pos);
            }
        }
        Some(pos)
    }

    /// Sets one cell to the selected color.
    pub fn paint_cell(&mut self, pos: GridPosition) -> bool {
        let color = self.selected_color;
        let Some(cell) = self.grid.get_mut(pos) else {
            return false;
        };
        cell.fill_color = color;
        self.render(true);
        true
    }

    /// Flood fills the region around `pos` with the selected color.
    pub fn fill_region(&mut self, pos: GridPosition) -> usize {
        let filled = flood_fill(&mut self.grid, pos, self.selected_color);
        self.render(true);
        filled
    }

    pub fn on_tool_select(&mut self, tool: Tool) {
        log::debug!("tool {tool} selected");
        self.selected_tool = tool;
    }

    pub fn on_toolbar_action(&mut self, action: ToolbarAction) {
        match action {
            ToolbarAction::Select(tool) => self.on_tool_select(tool),
            ToolbarAction::Clear => self.on_clear(),
        }
    }

    pub fn on_color_select(&mut self, color: Color) {
        self.selected_color = color;
    }

    /// Rebuilds the grid with `resolution` cells per side once `gate` agreed.
    /// Resolutions that are not offered are refused without asking.
    ///
    /// Returns whether the change was applied so the caller can keep its
    /// resolution selector in sync.
    pub fn on_resolution_select(&mut self, resolution: usize, gate: &mut impl ConfirmGate) -> bool {
        let applied = if self.resolutions.contains(&resolution) {
            self.grid.change_resolution(resolution, gate)
        } else {
            log::warn!("resolution {resolution} is not one of {:?}", self.resolutions);
            false
        };
        self.render(true);
        applied
    }

    /// Wipes the drawing. Unlike a resolution change this is not confirmed.
    pub fn on_clear(&mut self) {
        self.grid.clear();
        self.render(true);
    }

    /// Follows a change of the drawing area to `size` x `size` pixels,
    /// keeping the drawing.
    pub fn on_resize(&mut self, size: u32) {
        if size == 0 || size > MAX_SURFACE_SIZE {
            log::warn!("ignoring resize to {size}px, the surface side must be 1..={MAX_SURFACE_SIZE}");
            return;
        }
        self.surface.resize(size, size);
        self.grid.reposition(size as f32);
        self.render(true);
    }

    /// Repaints every cell, with grid lines unless `show_grid` is false.
    pub fn render(&mut self, show_grid: bool) {
        for (_, cell) in self.grid.cells() {
            self.surface.fill_rect(cell.pos_x, cell.pos_y, cell.width, cell.width, cell.fill_color);
            if show_grid {
                self.surface.stroke_rect(cell.pos_x, cell.pos_y, cell.width, cell.width, self.grid_line_color);
            }
        }
    }

    /// Grid-line free copy of the surface pixels.
    ///
    /// Renders without grid lines, reads the pixels back and restores the
    /// normal view before returning.
    pub fn export_buffer(&mut self) -> PixelBuffer {
        self.render(false);
        let buffer = self.surface.read_pixels(0, 0, self.surface.width(), self.surface.height());
        self.render(true);
        buffer
    }

    /// Encodes the drawing through an off-screen surface of equal size.
    ///
    /// # Errors
    ///
    /// Fails if the off-screen surface can not be created or the encoder
    /// rejects the data.
    pub fn export_image(&mut self, format: ImageFormat) -> Result<Vec<u8>> {
        let buffer = self.export_buffer();
        let mut offscreen = RgbaSurface::new(buffer.width(), buffer.height())?;
        offscreen.write_pixels(&buffer, 0, 0);
        let bytes = offscreen.encode_image(format)?;
        log::info!("exported {}x{} drawing as {}", buffer.width(), buffer.height(), format);
        Ok(bytes)
    }

    /// Like [`Self::export_image`] but packed into a `data:` URL.
    pub fn export_data_url(&mut self, format: ImageFormat) -> Result<String> {
        format.to_data_url(&self.export_buffer())
    }

    /// Writes the exported drawing to `path`.
    ///
    /// # Errors
    ///
    /// Fails if encoding fails or the file can't be written.
    pub fn export_to_file(&mut self, format: ImageFormat, path: &Path) -> Result<()> {
        format.save(&self.export_buffer(), path)
    }
}
