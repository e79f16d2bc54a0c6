use std::io::Cursor;
use std::path::Path;

use anyhow::Context as _;

use crate::foundation::error::{DuelvizError, DuelvizResult};
use crate::render::raster::{RasterOptions, rasterize};
use crate::template::dom::SvgDocument;

/// File format of a rendered chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// The bound SVG document, as text.
    Svg,
    /// Rasterized PNG.
    Png,
}

impl OutputFormat {
    /// Infer the format from a file extension (case-insensitive).
    pub fn from_path(path: &Path) -> DuelvizResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("svg") => Ok(Self::Svg),
            Some("png") => Ok(Self::Png),
            _ => Err(DuelvizError::validation(format!(
                "cannot infer output format from '{}' (expected .svg or .png)",
                path.display()
            ))),
        }
    }
}

/// Serialize a bound document to SVG text.
pub fn render_svg(doc: &SvgDocument) -> DuelvizResult<String> {
    doc.to_svg_string()
}

/// Rasterize a bound document and encode it as PNG bytes.
pub fn render_png(doc: &SvgDocument, opts: &RasterOptions) -> DuelvizResult<Vec<u8>> {
    let raster = rasterize(&render_svg(doc)?, opts)?;
    let img = image::RgbaImage::from_raw(raster.width, raster.height, raster.rgba8)
        .ok_or_else(|| DuelvizError::render("raster buffer does not match its dimensions"))?;
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .map_err(|e| DuelvizError::render(format!("encode png: {e}")))?;
    Ok(buf)
}

/// Write `doc` to `path` in the format its extension names, creating parent directories.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn write_output(path: &Path, doc: &SvgDocument, opts: &RasterOptions) -> DuelvizResult<()> {
    let bytes = match OutputFormat::from_path(path)? {
        OutputFormat::Svg => render_svg(doc)?.into_bytes(),
        OutputFormat::Png => render_png(doc, opts)?,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(path, &bytes).with_context(|| format!("write '{}'", path.display()))?;

    tracing::info!(bytes = bytes.len(), "chart written");
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/output.rs"]
mod tests;
