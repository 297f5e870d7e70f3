/// Paper size. Letter is the only size resumes are exported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageFormat {
    Letter,
}

impl PageFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            PageFormat::Letter => "Letter",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Portrait,
}

impl Orientation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Portrait => "Portrait",
        }
    }
}

/// Everything the rasterizer is told about the output document.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportConfig {
    /// Uniform page margin, in inches.
    pub margin_in: f32,
    /// JPEG quality of embedded images, 0.0 – 1.0.
    pub image_quality: f32,
    /// Raster scale relative to screen resolution (2.0 = twice 96 dpi).
    pub scale: f32,
    pub page_format: PageFormat,
    pub orientation: Orientation,
}

impl Default for ExportConfig {
    /// US letter, portrait, half-inch margins, JPEG at 0.98, 2x raster scale.
    fn default() -> Self {
        Self {
            margin_in: 0.5,
            image_quality: 0.98,
            scale: 2.0,
            page_format: PageFormat::Letter,
            orientation: Orientation::Portrait,
        }
    }
}

impl ExportConfig {
    /// Image quality as a 0 – 100 percentage.
    pub fn image_quality_percent(&self) -> u8 {
        (self.image_quality.clamp(0.0, 1.0) * 100.0).round() as u8
    }

    /// Rasterization resolution: 96 dpi times the scale factor.
    pub fn dpi(&self) -> u32 {
        (96.0 * self.scale).round() as u32
    }
}
