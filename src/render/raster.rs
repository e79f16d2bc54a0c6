use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::assets::color::Color;
use crate::foundation::core::Canvas;
use crate::foundation::error::{DuelvizError, DuelvizResult};

/// Largest raster side we are willing to allocate.
const MAX_DIM: u32 = 16_384;

/// Rasterization settings.
#[derive(Debug, Clone)]
pub struct RasterOptions {
    /// Pixels per SVG user unit.
    pub scale: f64,
    /// Fill painted under the SVG; transparent when unset.
    pub background: Option<Color>,
    /// Extra directory scanned for `.ttf` / `.otf` / `.ttc` fonts.
    pub fonts_dir: Option<PathBuf>,
    /// Base directory for relative `href`s in the SVG.
    pub resources_dir: Option<PathBuf>,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self {
            scale: 2.0,
            background: None,
            fonts_dir: None,
            resources_dir: None,
        }
    }
}

/// Straight-alpha RGBA8 pixels.
#[derive(Clone, Debug)]
pub struct Raster {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major, not premultiplied.
    pub rgba8: Vec<u8>,
}

/// Parse SVG text into a `usvg` tree with system fonts plus any configured font directory.
pub fn parse_svg_tree(svg: &str, opts: &RasterOptions) -> DuelvizResult<usvg::Tree> {
    let fontdb = build_fontdb(opts.fonts_dir.as_deref(), opts.resources_dir.as_deref());
    let usvg_opts = usvg::Options {
        resources_dir: opts.resources_dir.clone(),
        fontdb,
        ..Default::default()
    };
    usvg::Tree::from_str(svg, &usvg_opts)
        .map_err(|e| DuelvizError::render(format!("parse bound svg: {e}")))
}

/// Rasterize SVG text at `opts.scale`.
#[tracing::instrument(skip_all, fields(scale = opts.scale))]
pub fn rasterize(svg: &str, opts: &RasterOptions) -> DuelvizResult<Raster> {
    let tree = parse_svg_tree(svg, opts)?;
    rasterize_tree(&tree, opts)
}

/// Rasterize an already parsed tree.
pub fn rasterize_tree(tree: &usvg::Tree, opts: &RasterOptions) -> DuelvizResult<Raster> {
    let size = tree.size();
    let base = Canvas::new(
        size.width().ceil().max(1.0) as u32,
        size.height().ceil().max(1.0) as u32,
    )?;
    let out = base
        .scaled(opts.scale)
        .map_err(|e| DuelvizError::render(e.to_string()))?;
    if out.width > MAX_DIM || out.height > MAX_DIM {
        return Err(DuelvizError::render(format!(
            "raster size too large: {}x{} (max {MAX_DIM}x{MAX_DIM})",
            out.width, out.height
        )));
    }

    let mut pixmap = resvg::tiny_skia::Pixmap::new(out.width, out.height)
        .ok_or_else(|| DuelvizError::render("failed to allocate pixmap"))?;
    if let Some(bg) = opts.background {
        let [r, g, b, a] = bg.to_rgba8();
        pixmap.fill(resvg::tiny_skia::Color::from_rgba8(r, g, b, a));
    }

    let sx = out.width as f32 / size.width();
    let sy = out.height as f32 / size.height();
    resvg::render(
        tree,
        resvg::tiny_skia::Transform::from_scale(sx, sy),
        &mut pixmap.as_mut(),
    );

    let mut rgba8 = Vec::with_capacity(pixmap.pixels().len() * 4);
    for px in pixmap.pixels() {
        let c = px.demultiply();
        rgba8.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }

    tracing::debug!(width = out.width, height = out.height, "rasterized svg");
    Ok(Raster {
        width: out.width,
        height: out.height,
        rgba8,
    })
}

fn build_fontdb(
    fonts_dir: Option<&Path>,
    resources_dir: Option<&Path>,
) -> Arc<usvg::fontdb::Database> {
    let mut db = usvg::fontdb::Database::new();
    db.load_system_fonts();

    if let Some(dir) = fonts_dir {
        load_fonts_from_dir(&mut db, dir);
    }
    if let Some(dir) = resources_dir {
        load_fonts_from_dir(&mut db, &dir.join("fonts"));
    }

    tracing::debug!(faces = db.faces().count(), "font database ready");
    Arc::new(db)
}

fn load_fonts_from_dir(db: &mut usvg::fontdb::Database, dir: &Path) {
    let Ok(rd) = std::fs::read_dir(dir) else {
        return;
    };

    for entry in rd.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(ext) = path.extension().and_then(|s| s.to_str()) else {
            continue;
        };
        let ext = ext.to_ascii_lowercase();
        if ext != "ttf" && ext != "otf" && ext != "ttc" {
            continue;
        }
        if let Err(e) = db.load_font_file(&path) {
            tracing::warn!(path = %path.display(), error = %e, "skipping unreadable font");
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
