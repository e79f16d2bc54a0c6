use std::path::Path;

use crate::foundation::core::{Canvas, Rect};
use crate::foundation::error::{DuelvizError, DuelvizResult};
use crate::template::dom::{Element, SvgDocument};

const BUILTIN_SVG: &str = include_str!("../../assets/duels_template.svg");

/// Relative aspect-ratio drift tolerated before a warning is logged.
const ASPECT_TOLERANCE: f64 = 0.01;

/// Player row prototype; cloned once per player.
pub const ROW_ID: &str = "row";

/// Element ids nested inside the [`ROW_ID`] prototype.
pub const ROW_CHILD_IDS: [&str; 7] = [
    "row-name",
    "row-minutes",
    "row-won",
    "row-lost",
    "row-won-label",
    "row-lost-label",
    "row-total",
];

/// Element ids outside the row prototype that binding writes to.
pub const FRAME_IDS: [&str; 11] = [
    "background",
    "title",
    "subtitle",
    "bar-area",
    "legend-title",
    "legend-area",
    "legend-team",
    "legend-opponent",
    "legend-team-label",
    "legend-opponent-label",
    "legend-total",
];

/// A validated chart template.
///
/// Designers draw the chart in any SVG editor and name the bindable shapes through their `id`.
/// The two `*-area` rectangles define where bars may extend; the `row` group is drawn once,
/// centred on `y = 0`, and repeated for every player.
#[derive(Debug, Clone)]
pub struct Template {
    doc: SvgDocument,
    canvas: Canvas,
}

impl Template {
    /// The 1015×570 template shipped with the crate.
    pub fn builtin() -> DuelvizResult<Self> {
        Self::from_svg(BUILTIN_SVG)
    }

    /// Load a template file.
    pub fn from_path(path: impl AsRef<Path>) -> DuelvizResult<Self> {
        let path = path.as_ref();
        let src = std::fs::read_to_string(path).map_err(|e| {
            DuelvizError::template(format!("read template '{}': {e}", path.display()))
        })?;
        Self::from_svg(&src)
    }

    /// Parse and validate template source.
    pub fn from_svg(src: &str) -> DuelvizResult<Self> {
        let doc = SvgDocument::parse(src)?;
        validate_ids(&doc)?;
        let canvas = canvas_of(doc.root())?;
        if !canvas.matches_aspect(Canvas::TARGET, ASPECT_TOLERANCE) {
            tracing::warn!(
                width = canvas.width,
                height = canvas.height,
                target_width = Canvas::TARGET.width,
                target_height = Canvas::TARGET.height,
                "template aspect ratio differs from the target frame"
            );
        }
        let tpl = Self { doc, canvas };
        tpl.rect_of("bar-area")?;
        tpl.rect_of("legend-area")?;
        Ok(tpl)
    }

    /// Nominal output size in SVG user units.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// The parsed document.
    pub fn document(&self) -> &SvgDocument {
        &self.doc
    }

    /// Every element id, document order.
    pub fn ids(&self) -> Vec<String> {
        self.doc.ids()
    }

    /// Geometry of the `<rect>` named `id`.
    pub fn rect_of(&self, id: &str) -> DuelvizResult<Rect> {
        let el = self
            .doc
            .find(id)
            .ok_or_else(|| DuelvizError::template(format!("no element with id '{id}'")))?;
        rect_geometry(el)
    }
}

/// `x`, `y`, `width`, `height` of a `<rect>`; `x`/`y` default to 0.
pub(crate) fn rect_geometry(el: &Element) -> DuelvizResult<Rect> {
    let id = el.id().unwrap_or("?");
    if el.local_name() != "rect" {
        return Err(DuelvizError::template(format!(
            "element '{id}' must be a <rect>, found <{}>",
            el.name
        )));
    }
    let num = |key: &str, default: Option<f64>| -> DuelvizResult<f64> {
        match el.attr(key) {
            Some(v) => parse_length(v).ok_or_else(|| {
                DuelvizError::template(format!("'{id}' has non-numeric {key}=\"{v}\""))
            }),
            None => default
                .ok_or_else(|| DuelvizError::template(format!("'{id}' lacks attribute {key}"))),
        }
    };
    let x = num("x", Some(0.0))?;
    let y = num("y", Some(0.0))?;
    let w = num("width", None)?;
    let h = num("height", None)?;
    if w < 0.0 || h < 0.0 {
        return Err(DuelvizError::template(format!(
            "'{id}' has negative size {w}x{h}"
        )));
    }
    Ok(Rect::new(x, y, x + w, y + h))
}

/// Unitless or `px` length.
fn parse_length(v: &str) -> Option<f64> {
    let v = v.trim();
    let v = v.strip_suffix("px").unwrap_or(v).trim();
    v.parse::<f64>().ok().filter(|x| x.is_finite())
}

fn canvas_of(root: &Element) -> DuelvizResult<Canvas> {
    let size = |key: &str| root.attr(key).and_then(parse_length);
    let (w, h) = match (size("width"), size("height")) {
        (Some(w), Some(h)) => (w, h),
        _ => {
            let vb = root.attr("viewBox").ok_or_else(|| {
                DuelvizError::template("<svg> needs width/height or a viewBox")
            })?;
            let parts: Vec<f64> = vb
                .split(|c: char| c.is_whitespace() || c == ',')
                .filter(|s| !s.is_empty())
                .map(str::parse)
                .collect::<Result<_, _>>()
                .map_err(|_| DuelvizError::template(format!("invalid viewBox \"{vb}\"")))?;
            match parts.as_slice() {
                [_, _, w, h] => (*w, *h),
                _ => return Err(DuelvizError::template(format!("invalid viewBox \"{vb}\""))),
            }
        }
    };
    if !(w >= 1.0 && h >= 1.0) {
        return Err(DuelvizError::template(format!(
            "<svg> size must be at least 1x1, got {w}x{h}"
        )));
    }
    Canvas::new(w.round() as u32, h.round() as u32)
}

fn validate_ids(doc: &SvgDocument) -> DuelvizResult<()> {
    let mut missing: Vec<&str> = FRAME_IDS
        .iter()
        .chain(std::iter::once(&ROW_ID))
        .copied()
        .filter(|id| doc.find(id).is_none())
        .collect();

    let mut misplaced = Vec::new();
    for id in ROW_CHILD_IDS {
        match (doc.find(id), doc.find(ROW_ID)) {
            (None, _) => missing.push(id),
            (Some(_), Some(row)) if row.find(id).is_none() => misplaced.push(id),
            _ => {}
        }
    }

    if !missing.is_empty() {
        return Err(DuelvizError::template(format!(
            "template lacks element ids: {}",
            missing.join(", ")
        )));
    }
    if !misplaced.is_empty() {
        return Err(DuelvizError::template(format!(
            "elements must be inside '{ROW_ID}': {}",
            misplaced.join(", ")
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/template/loader.rs"]
mod tests;
