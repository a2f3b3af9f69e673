use std::fmt::{self, Write as _};

use crate::animation::pose::RenderPose;
use crate::foundation::core::{Point, Rect};
use crate::framing::view::{flip_point, fmt_num, viewbox_of};
use crate::orientation::glyph::glyph_of;
use crate::render::scene::DiagramScene;

/// Drawing parameters for [`render_svg`]. Sizes are in floor units.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SvgStyle {
    /// Output width in pixels; height follows the view aspect ratio.
    pub width_px: u32,
    /// Radius of a regular step dot.
    pub step_radius: f64,
    /// Radius of an emphasized step dot.
    pub emphasis_radius: f64,
    /// Stroke width of the path and outlines.
    pub stroke_width: f64,
    /// Label font size.
    pub font_size: f64,
    /// Length of the pose marker from tip to base.
    pub marker_size: f64,
}

impl Default for SvgStyle {
    fn default() -> Self {
        Self {
            width_px: 512,
            step_radius: 0.35,
            emphasis_radius: 0.55,
            stroke_width: 0.08,
            font_size: 0.6,
            marker_size: 1.2,
        }
    }
}

const BACKGROUND: &str = "#fafaf9";
const PATH: &str = "#a8a29e";
const STEP: &str = "#44403c";
const EMPHASIS: &str = "#b91c1c";
const CURRENT: &str = "#2563eb";
const MARKER: &str = "#dc2626";

/// Render a scene as a standalone SVG document.
///
/// Every plotted coordinate goes through [`flip_point`] so the stored up-positive floor maps
/// onto SVG's down-positive axis, matching the region's `viewBox`. A region with a zero extent
/// (no padding around a single point or a straight line) is widened to stay drawable.
pub fn render_svg(scene: &DiagramScene<'_>, style: &SvgStyle) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    if write_document(&mut out, scene, style).is_err() {
        out.clear();
    }
    out
}

fn write_document(out: &mut String, scene: &DiagramScene<'_>, style: &SvgStyle) -> fmt::Result {
    let rect = drawable_rect(scene.region.view_rect());
    let width_px = style.width_px.max(1);
    let height_px = ((f64::from(width_px) * rect.height() / rect.width()).round() as u32).max(1);

    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width_px}" height="{height_px}" viewBox="{}">"#,
        viewbox_of(rect)
    )?;
    writeln!(
        out,
        r#"  <rect x="{}" y="{}" width="{}" height="{}" fill="{BACKGROUND}"/>"#,
        fmt_num(rect.x0),
        fmt_num(rect.y0),
        fmt_num(rect.width()),
        fmt_num(rect.height())
    )?;

    let plotted: Vec<(usize, Point)> = scene
        .steps
        .iter()
        .enumerate()
        .filter_map(|(i, s)| s.position.map(|p| (i, flip_point(p))))
        .collect();

    if plotted.len() > 1 {
        let points = plotted
            .iter()
            .map(|(_, p)| format!("{},{}", fmt_num(p.x), fmt_num(p.y)))
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(
            out,
            r#"  <polyline points="{points}" fill="none" stroke="{PATH}" stroke-width="{}" stroke-linejoin="round"/>"#,
            fmt_num(style.stroke_width)
        )?;
    }

    for (i, p) in &plotted {
        let step = &scene.steps[*i];
        let is_current = scene.current == Some(*i);
        let (r, fill) = if step.emphasis_marker {
            (style.emphasis_radius, EMPHASIS)
        } else {
            (style.step_radius, STEP)
        };
        let stroke = if is_current { CURRENT } else { fill };
        writeln!(
            out,
            r#"  <circle cx="{}" cy="{}" r="{}" fill="{fill}" stroke="{stroke}" stroke-width="{}"/>"#,
            fmt_num(p.x),
            fmt_num(p.y),
            fmt_num(r),
            fmt_num(style.stroke_width * if is_current { 2.0 } else { 1.0 })
        )?;

        let label = match step.guard.as_deref() {
            Some(guard) => format!("{} {}", i + 1, glyph_of(guard)),
            None => (i + 1).to_string(),
        };
        writeln!(
            out,
            r#"  <text x="{}" y="{}" font-size="{}" fill="{STEP}">{}</text>"#,
            fmt_num(p.x + r + style.stroke_width),
            fmt_num(p.y - r),
            fmt_num(style.font_size),
            escape_text(&label)
        )?;
    }

    if let Some(pose) = scene.pose {
        write_marker(out, pose, style)?;
    }

    out.push_str("</svg>\n");
    Ok(())
}

/// A zero extent takes the other extent, or one floor unit when both are zero.
fn drawable_rect(rect: Rect) -> Rect {
    let (w, h) = (rect.width(), rect.height());
    if w > 0.0 && h > 0.0 {
        return rect;
    }
    let fallback = if w > 0.0 {
        w
    } else if h > 0.0 {
        h
    } else {
        1.0
    };
    Rect::from_center_size(
        rect.center(),
        (
            if w > 0.0 { w } else { fallback },
            if h > 0.0 { h } else { fallback },
        ),
    )
}

fn write_marker(out: &mut String, pose: RenderPose, style: &SvgStyle) -> fmt::Result {
    let at = flip_point(pose.position());
    let tip = style.marker_size * 0.6;
    let base = style.marker_size * 0.4;
    let half = style.marker_size * 0.35;
    // Pointing up (north) before rotation; SVG rotation is clockwise like headings.
    writeln!(
        out,
        r#"  <g transform="translate({} {}) rotate({})"><polygon points="0,{} {},{} {},{}" fill="{MARKER}"/></g>"#,
        fmt_num(at.x),
        fmt_num(at.y),
        fmt_num(pose.heading),
        fmt_num(-tip),
        fmt_num(half),
        fmt_num(base),
        fmt_num(-half),
        fmt_num(base)
    )
}

fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
