//! Resolution-independent draw list and its SVG serialization.
//!
//! Renderers build a [`DrawList`] of primitives in logical units; the
//! [`crate::rasterizer::Rasterizer`] turns it into pixels. Serialization is
//! fully deterministic: gradient and filter ids come from a per-document
//! counter and every number is printed with fixed precision.

use std::fmt::Write as _;

use glam::DVec2;
use logo_forge_core::color::Srgb;
use logo_forge_core::contract::FontFace;
use logo_forge_core::export::escape_xml;
use logo_forge_core::geometry::{Outline, Segment};

/// One color stop of a gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    /// Position in [0, 1].
    pub offset: f64,
    pub color: Srgb,
    pub opacity: f64,
}

impl GradientStop {
    pub fn new(offset: f64, color: Srgb) -> Self {
        Self {
            offset,
            color,
            opacity: 1.0,
        }
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }
}

/// How a region is colored.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Srgb),
    Linear {
        from: DVec2,
        to: DVec2,
        stops: Vec<GradientStop>,
    },
    Radial {
        center: DVec2,
        radius: f64,
        stops: Vec<GradientStop>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub paint: Paint,
    pub width: f64,
}

impl Stroke {
    pub fn solid(color: Srgb, width: f64) -> Self {
        Self {
            paint: Paint::Solid(color),
            width,
        }
    }
}

/// Fill, stroke, opacity, and blur shared by every shape primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    pub fill: Option<Paint>,
    pub stroke: Option<Stroke>,
    /// Alpha of the fill alone; the stroke stays opaque.
    pub fill_opacity: f64,
    pub opacity: f64,
    /// Gaussian blur standard deviation in logical units; 0 disables.
    pub blur: f64,
}

impl Style {
    pub fn fill(paint: Paint) -> Self {
        Self {
            fill: Some(paint),
            stroke: None,
            fill_opacity: 1.0,
            opacity: 1.0,
            blur: 0.0,
        }
    }

    pub fn stroke(stroke: Stroke) -> Self {
        Self {
            fill: None,
            stroke: Some(stroke),
            fill_opacity: 1.0,
            opacity: 1.0,
            blur: 0.0,
        }
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn with_blur(mut self, blur: f64) -> Self {
        self.blur = blur;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

impl TextAnchor {
    fn as_svg(self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

/// A single line of text.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    /// Baseline anchor point.
    pub position: DVec2,
    pub face: FontFace,
    pub size: f64,
    pub letter_spacing: f64,
    pub fill: Srgb,
    pub anchor: TextAnchor,
    /// Clockwise rotation about `position`.
    pub rotation_deg: f64,
    pub opacity: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Rect {
        origin: DVec2,
        size: DVec2,
        radius: f64,
        style: Style,
    },
    Circle {
        center: DVec2,
        radius: f64,
        style: Style,
    },
    Path {
        outline: Outline,
        style: Style,
    },
    Text(TextRun),
}

/// Ordered primitives on a `width` x `height` logical canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawList {
    width: f64,
    height: f64,
    items: Vec<Primitive>,
}

impl DrawList {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            items: Vec::new(),
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn push(&mut self, primitive: Primitive) {
        self.items.push(primitive);
    }

    pub fn extend(&mut self, primitives: impl IntoIterator<Item = Primitive>) {
        self.items.extend(primitives);
    }

    pub fn items(&self) -> &[Primitive] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Serializes the list as a standalone SVG document in logical units.
    pub fn to_svg(&self) -> String {
        let mut w = SvgWriter::default();
        let _ = writeln!(
            w.out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
            num(self.width),
            num(self.height),
            num(self.width),
            num(self.height)
        );
        for item in &self.items {
            w.primitive(item);
        }
        w.out.push_str("</svg>\n");
        w.out
    }
}

/// Formats a number with fixed precision, trimming trailing zeros.
fn num(v: f64) -> String {
    let v = if v.is_finite() { v } else { 0.0 };
    let s = format!("{v:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" || s.is_empty() {
        "0".to_string()
    } else {
        s.to_string()
    }
}

/// Path data (`d` attribute) for an outline.
pub fn path_data(outline: &Outline) -> String {
    let mut d = String::new();
    for seg in outline.segments() {
        if !d.is_empty() {
            d.push(' ');
        }
        match *seg {
            Segment::MoveTo(p) => {
                let _ = write!(d, "M{} {}", num(p.x), num(p.y));
            }
            Segment::LineTo(p) => {
                let _ = write!(d, "L{} {}", num(p.x), num(p.y));
            }
            Segment::CubicTo { ctrl1, ctrl2, to } => {
                let _ = write!(
                    d,
                    "C{} {} {} {} {} {}",
                    num(ctrl1.x),
                    num(ctrl1.y),
                    num(ctrl2.x),
                    num(ctrl2.y),
                    num(to.x),
                    num(to.y)
                );
            }
            Segment::Close => d.push('Z'),
        }
    }
    d
}

#[derive(Default)]
struct SvgWriter {
    out: String,
    next_id: usize,
}

impl SvgWriter {
    fn fresh_id(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("{prefix}{}", self.next_id)
    }

    /// Emits any `<defs>` a paint needs and returns the attribute value.
    fn paint(&mut self, paint: &Paint) -> String {
        match paint {
            Paint::Solid(c) => c.to_hex(),
            Paint::Linear { from, to, stops } => {
                let id = self.fresh_id("lg");
                let _ = writeln!(
                    self.out,
                    r#"<defs><linearGradient id="{id}" gradientUnits="userSpaceOnUse" x1="{}" y1="{}" x2="{}" y2="{}">{}</linearGradient></defs>"#,
                    num(from.x),
                    num(from.y),
                    num(to.x),
                    num(to.y),
                    stops_xml(stops)
                );
                format!("url(#{id})")
            }
            Paint::Radial {
                center,
                radius,
                stops,
            } => {
                let id = self.fresh_id("rg");
                let _ = writeln!(
                    self.out,
                    r#"<defs><radialGradient id="{id}" gradientUnits="userSpaceOnUse" cx="{}" cy="{}" r="{}">{}</radialGradient></defs>"#,
                    num(center.x),
                    num(center.y),
                    num(*radius),
                    stops_xml(stops)
                );
                format!("url(#{id})")
            }
        }
    }

    fn blur_filter(&mut self, blur: f64) -> Option<String> {
        if blur <= 0.0 {
            return None;
        }
        let id = self.fresh_id("bl");
        let _ = writeln!(
            self.out,
            r#"<defs><filter id="{id}" x="-50%" y="-50%" width="200%" height="200%"><feGaussianBlur stdDeviation="{}"/></filter></defs>"#,
            num(blur)
        );
        Some(id)
    }

    fn style_attrs(&mut self, style: &Style) -> String {
        let fill = match &style.fill {
            Some(p) => self.paint(p),
            None => "none".to_string(),
        };
        let mut attrs = format!(r#"fill="{fill}""#);
        if style.fill.is_some() && style.fill_opacity < 1.0 {
            let _ = write!(attrs, r#" fill-opacity="{}""#, num(style.fill_opacity.max(0.0)));
        }
        if let Some(stroke) = &style.stroke {
            let paint = self.paint(&stroke.paint);
            let _ = write!(
                attrs,
                r#" stroke="{paint}" stroke-width="{}" stroke-linejoin="round" stroke-linecap="round""#,
                num(stroke.width)
            );
        }
        if style.opacity < 1.0 {
            let _ = write!(attrs, r#" opacity="{}""#, num(style.opacity.max(0.0)));
        }
        if let Some(id) = self.blur_filter(style.blur) {
            let _ = write!(attrs, r#" filter="url(#{id})""#);
        }
        attrs
    }

    fn primitive(&mut self, item: &Primitive) {
        match item {
            Primitive::Rect {
                origin,
                size,
                radius,
                style,
            } => {
                let attrs = self.style_attrs(style);
                let _ = writeln!(
                    self.out,
                    r#"<rect x="{}" y="{}" width="{}" height="{}" rx="{}" {attrs}/>"#,
                    num(origin.x),
                    num(origin.y),
                    num(size.x),
                    num(size.y),
                    num(*radius)
                );
            }
            Primitive::Circle {
                center,
                radius,
                style,
            } => {
                let attrs = self.style_attrs(style);
                let _ = writeln!(
                    self.out,
                    r#"<circle cx="{}" cy="{}" r="{}" {attrs}/>"#,
                    num(center.x),
                    num(center.y),
                    num(*radius)
                );
            }
            Primitive::Path { outline, style } => {
                if outline.segments().is_empty() {
                    return;
                }
                let attrs = self.style_attrs(style);
                let _ = writeln!(self.out, r#"<path d="{}" {attrs}/>"#, path_data(outline));
            }
            Primitive::Text(run) => self.text(run),
        }
    }

    fn text(&mut self, run: &TextRun) {
        if run.text.is_empty() {
            return;
        }
        let face = &run.face;
        let mut attrs = format!(
            r#"x="{}" y="{}" font-family="{}" font-size="{}" font-weight="{}" letter-spacing="{}" text-anchor="{}" fill="{}""#,
            num(run.position.x),
            num(run.position.y),
            face.family,
            num(run.size),
            face.weight,
            num(run.letter_spacing),
            run.anchor.as_svg(),
            run.fill.to_hex()
        );
        if face.italic {
            attrs.push_str(r#" font-style="italic""#);
        }
        if run.rotation_deg != 0.0 {
            let _ = write!(
                attrs,
                r#" transform="rotate({} {} {})""#,
                num(run.rotation_deg),
                num(run.position.x),
                num(run.position.y)
            );
        }
        if run.opacity < 1.0 {
            let _ = write!(attrs, r#" opacity="{}""#, num(run.opacity.max(0.0)));
        }
        let _ = writeln!(
            self.out,
            "<text {attrs}>{}</text>",
            escape_xml(&face.apply_case(&run.text))
        );
    }
}

fn stops_xml(stops: &[GradientStop]) -> String {
    let mut s = String::new();
    for stop in stops {
        let _ = write!(
            s,
            r#"<stop offset="{}" stop-color="{}" stop-opacity="{}"/>"#,
            num(stop.offset.clamp(0.0, 1.0)),
            stop.color.to_hex(),
            num(stop.opacity.clamp(0.0, 1.0))
        );
    }
    s
}
