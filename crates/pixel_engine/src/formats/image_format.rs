//! Image format registry for exporting the drawing.
//!
//! # Example
//!
//! ```no_run
//! use pixel_engine::{ImageFormat, PixelBuffer};
//! use std::path::Path;
//!
//! let buffer = PixelBuffer::blank(64, 64);
//! ImageFormat::Png.save(&buffer, Path::new("output.png")).unwrap();
//! let url = ImageFormat::Gif.to_data_url(&buffer).unwrap();
//! assert!(url.starts_with("data:image/gif;base64,"));
//! ```

use std::{io::Cursor, path::Path};

use base64::{Engine, engine::general_purpose};

use crate::{EngineError, PixelBuffer, Result};

/// Export formats offered for a finished drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    /// Lossless, keeps transparency
    Png,
    /// Lossy, alpha channel is dropped
    Jpeg,
    /// Palette based, single frame
    Gif,
}

impl ImageFormat {
    /// Get the file extension for this image format.
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Jpeg => "jpg",
            ImageFormat::Gif => "gif",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ImageFormat::Png => "image/png",
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::Gif => "image/gif",
        }
    }

    /// Get a human-readable name for this format.
    pub fn name(&self) -> &'static str {
        match self {
            ImageFormat::Png => "PNG Image",
            ImageFormat::Jpeg => "JPEG Image",
            ImageFormat::Gif => "GIF Image",
        }
    }

    /// Detect image format from file extension.
    pub fn from_extension(ext: &str) -> Option<ImageFormat> {
        match ext.to_ascii_lowercase().as_str() {
            "png" => Some(ImageFormat::Png),
            "jpg" | "jpeg" => Some(ImageFormat::Jpeg),
            "gif" => Some(ImageFormat::Gif),
            _ => None,
        }
    }

    /// Detect image format from file path.
    pub fn from_path(path: &Path) -> Option<ImageFormat> {
        path.extension().and_then(|ext| ext.to_str()).and_then(ImageFormat::from_extension)
    }

    /// Encodes `buffer` into the bytes of an image file.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ImageEncodingFailed`] if the encoder rejects the data.
    pub fn encode(&self, buffer: &PixelBuffer) -> Result<Vec<u8>> {
        let img = image::RgbaImage::from_raw(buffer.width(), buffer.height(), buffer.data().to_vec()).ok_or(EngineError::PixelBufferSize {
            expected: buffer.width() as usize * buffer.height() as usize * 4,
            actual: buffer.data().len(),
        })?;
        let img = image::DynamicImage::ImageRgba8(img);

        let mut bytes = Cursor::new(Vec::new());
        let result = match self {
            ImageFormat::Png => img.write_to(&mut bytes, image::ImageFormat::Png),
            // JPEG has no alpha channel
            ImageFormat::Jpeg => image::DynamicImage::ImageRgb8(img.to_rgb8()).write_to(&mut bytes, image::ImageFormat::Jpeg),
            ImageFormat::Gif => img.write_to(&mut bytes, image::ImageFormat::Gif),
        };
        result.map_err(|e| EngineError::ImageEncodingFailed { message: e.to_string() })?;

        log::debug!("encoded {}x{} {} ({} bytes)", buffer.width(), buffer.height(), self.name(), bytes.get_ref().len());
        Ok(bytes.into_inner())
    }

    /// Encodes `buffer` as a `data:` URL, ready to be used as a download link.
    pub fn to_data_url(&self, buffer: &PixelBuffer) -> Result<String> {
        let bytes = self.encode(buffer)?;
        Ok(format!("data:{};base64,{}", self.mime_type(), general_purpose::STANDARD.encode(bytes)))
    }

    /// Encodes `buffer` and writes it to `path`.
    pub fn save(&self, buffer: &PixelBuffer, path: &Path) -> Result<()> {
        let bytes = self.encode(buffer)?;
        std::fs::write(path, bytes)?;
        log::info!("exported {} to {}", self.name(), path.display());
        Ok(())
    }
}

impl std::fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for ImageFormat {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        ImageFormat::from_extension(s).ok_or_else(|| EngineError::UnsupportedFormat {
            name: s.to_string(),
            operation: "export".to_string(),
        })
    }
}
