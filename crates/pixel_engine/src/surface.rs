//! Rendering surface abstraction and an in-memory RGBA implementation.
//!
//! The editor only ever talks to a [`RenderSurface`]: rectangle fills and
//! outlines for painting the grid, raw pixel reads/writes for assembling
//! the export buffer and image encoding for the final download. A browser
//! canvas, a GPU texture or the bundled [`RgbaSurface`] can all sit behind it.

use crate::{Color, EngineError, ImageFormat, Result};

/// Tightly packed RGBA8 pixels, row-major, origin top-left.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Wraps raw RGBA bytes.
    ///
    /// # Errors
    ///
    /// Fails if `data` is not exactly `width * height * 4` bytes long.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * 4;
        if data.len() != expected {
            return Err(EngineError::PixelBufferSize { expected, actual: data.len() });
        }
        Ok(Self { width, height, data })
    }

    /// A fully transparent buffer.
    pub fn blank(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; width as usize * height as usize * 4],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }

    pub fn get(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let o = self.offset(x, y);
        Some(Color::rgba(self.data[o], self.data[o + 1], self.data[o + 2], self.data[o + 3]))
    }

    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        if x >= self.width || y >= self.height {
            return;
        }
        let o = self.offset(x, y);
        self.data[o..o + 4].copy_from_slice(&color.to_rgba_array());
    }
}

/// The drawing primitives the editor needs from a platform surface.
///
/// Coordinates are surface pixels, origin top-left, x right, y down.
pub trait RenderSurface {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// Changes the surface dimensions. Content is undefined afterwards;
    /// callers repaint.
    fn resize(&mut self, width: u32, height: u32);

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color);

    fn stroke_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color);

    fn read_pixels(&self, x: u32, y: u32, width: u32, height: u32) -> PixelBuffer;

    fn write_pixels(&mut self, buffer: &PixelBuffer, x: u32, y: u32);

    /// Encodes the whole surface.
    ///
    /// # Errors
    ///
    /// Returns an error if the encoder rejects the pixel data.
    fn encode_image(&self, format: ImageFormat) -> Result<Vec<u8>>;
}

/// Software surface backed by an [`image::RgbaImage`].
#[derive(Clone, Debug)]
pub struct RgbaSurface {
    image: image::RgbaImage,
}

impl RgbaSurface {
    /// Creates a transparent surface.
    ///
    /// # Errors
    ///
    /// A surface without pixels cannot be drawn on, so zero dimensions
    /// yield [`EngineError::SurfaceUnavailable`].
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(EngineError::SurfaceUnavailable {
                message: format!("cannot create a {width}x{height} surface"),
            });
        }
        Ok(Self {
            image: image::RgbaImage::new(width, height),
        })
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.image.get_pixel_checked(x, y).map(|p| Color::from(p.0))
    }

    pub fn as_image(&self) -> &image::RgbaImage {
        &self.image
    }

    /// Snaps `[start, start + len)` to whole pixels inside `[0, limit)`.
    fn span(start: f32, len: f32, limit: u32) -> Option<(u32, u32)> {
        if !start.is_finite() || !len.is_finite() || len <= 0.0 {
            return None;
        }
        let from = start.round().max(0.0);
        let to = (start + len).round().min(limit as f32);
        if to <= from {
            return None;
        }
        Some((from as u32, to as u32))
    }

    fn put(&mut self, x: u32, y: u32, color: Color) {
        self.image.put_pixel(x, y, color.into());
    }
}

impl RenderSurface for RgbaSurface {
    fn width(&self) -> u32 {
        self.image.width()
    }

    fn height(&self) -> u32 {
        self.image.height()
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.image = image::RgbaImage::new(width.max(1), height.max(1));
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        let (Some((x0, x1)), Some((y0, y1))) = (Self::span(x, width, self.width()), Self::span(y, height, self.height())) else {
            return;
        };
        for py in y0..y1 {
            for px in x0..x1 {
                self.put(px, py, color);
            }
        }
    }

    fn stroke_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        let (Some((x0, x1)), Some((y0, y1))) = (Self::span(x, width, self.width()), Self::span(y, height, self.height())) else {
            return;
        };
        // one pixel outline on the inner edge
        for px in x0..x1 {
            self.put(px, y0, color);
            self.put(px, y1 - 1, color);
        }
        for py in y0..y1 {
            self.put(x0, py, color);
            self.put(x1 - 1, py, color);
        }
    }

    fn read_pixels(&self, x: u32, y: u32, width: u32, height: u32) -> PixelBuffer {
        let mut buffer = PixelBuffer::blank(width, height);
        for dy in 0..height {
            for dx in 0..width {
                if let Some(color) = self.pixel(x.saturating_add(dx), y.saturating_add(dy)) {
                    buffer.set(dx, dy, color);
                }
            }
        }
        buffer
    }

    fn write_pixels(&mut self, buffer: &PixelBuffer, x: u32, y: u32) {
        for dy in 0..buffer.height() {
            for dx in 0..buffer.width() {
                let (px, py) = (x.saturating_add(dx), y.saturating_add(dy));
                if px < self.width() && py < self.height() {
                    if let Some(color) = buffer.get(dx, dy) {
                        self.put(px, py, color);
                    }
                }
            }
        }
    }

    fn encode_image(&self, format: ImageFormat) -> Result<Vec<u8>> {
        format.encode(&self.read_pixels(0, 0, self.width(), self.height()))
    }
}
