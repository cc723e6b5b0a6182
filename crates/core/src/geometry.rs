//! Shape-to-geometry mapping shared by every 2D consumer.
//!
//! [`shape_outline`] turns a [`Shape`] into a closed [`Outline`] of move /
//! line / cubic segments around a center point. Polygonal shapes use the
//! vertex formula `angle_i = 2π·i/n − π/2 + rotation`; the star alternates
//! outer and inner radius over `2n` vertices; shield, infinity, and arch are
//! fixed cubic-Bezier sequences scaled by the radius.

use glam::DVec2;
use std::f64::consts::{FRAC_PI_2, PI, TAU};

use crate::style::Shape;

/// Cubic approximation constant for a quarter circle.
const KAPPA: f64 = 0.552_284_749_830_793_4;

/// Inner radius of the star as a fraction of the outer radius.
pub const STAR_INNER_RATIO: f64 = 0.45;

/// Number of star points.
pub const STAR_POINTS: usize = 5;

/// One path command, in absolute coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Segment {
    MoveTo(DVec2),
    LineTo(DVec2),
    CubicTo {
        ctrl1: DVec2,
        ctrl2: DVec2,
        to: DVec2,
    },
    Close,
}

/// A path made of [`Segment`]s.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Outline {
    segments: Vec<Segment>,
}

impl Outline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, p: DVec2) -> &mut Self {
        self.segments.push(Segment::MoveTo(p));
        self
    }

    pub fn line_to(&mut self, p: DVec2) -> &mut Self {
        self.segments.push(Segment::LineTo(p));
        self
    }

    pub fn cubic_to(&mut self, ctrl1: DVec2, ctrl2: DVec2, to: DVec2) -> &mut Self {
        self.segments.push(Segment::CubicTo { ctrl1, ctrl2, to });
        self
    }

    pub fn close(&mut self) -> &mut Self {
        self.segments.push(Segment::Close);
        self
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Closed polygon through `points`.
    pub fn polygon(points: &[DVec2]) -> Self {
        let mut outline = Self::new();
        if let Some((first, rest)) = points.split_first() {
            outline.move_to(*first);
            for p in rest {
                outline.line_to(*p);
            }
            outline.close();
        }
        outline
    }

    /// Every on-curve point (segment end points), in order.
    pub fn anchors(&self) -> Vec<DVec2> {
        self.segments
            .iter()
            .filter_map(|s| match *s {
                Segment::MoveTo(p) | Segment::LineTo(p) => Some(p),
                Segment::CubicTo { to, .. } => Some(to),
                Segment::Close => None,
            })
            .collect()
    }

    /// Returns a copy with every point mapped through `f`.
    pub fn map_points(&self, f: impl Fn(DVec2) -> DVec2) -> Self {
        let segments = self
            .segments
            .iter()
            .map(|s| match *s {
                Segment::MoveTo(p) => Segment::MoveTo(f(p)),
                Segment::LineTo(p) => Segment::LineTo(f(p)),
                Segment::CubicTo { ctrl1, ctrl2, to } => Segment::CubicTo {
                    ctrl1: f(ctrl1),
                    ctrl2: f(ctrl2),
                    to: f(to),
                },
                Segment::Close => Segment::Close,
            })
            .collect();
        Self { segments }
    }
}

/// Vertices of a regular `n`-gon: `angle_i = 2π·i/n − π/2 + rotation`.
pub fn polygon_vertices(center: DVec2, radius: f64, n: usize, rotation: f64) -> Vec<DVec2> {
    (0..n)
        .map(|i| {
            let angle = TAU * i as f64 / n as f64 - FRAC_PI_2 + rotation;
            center + radius * DVec2::new(angle.cos(), angle.sin())
        })
        .collect()
}

/// Vertices of a star with `points` tips: `2·points` vertices alternating
/// between `outer` and `inner` radius.
pub fn star_vertices(
    center: DVec2,
    outer: f64,
    inner: f64,
    points: usize,
    rotation: f64,
) -> Vec<DVec2> {
    (0..points * 2)
        .map(|i| {
            let angle = PI * i as f64 / points as f64 - FRAC_PI_2 + rotation;
            let r = if i % 2 == 0 { outer } else { inner };
            center + r * DVec2::new(angle.cos(), angle.sin())
        })
        .collect()
}

/// Full revolution as four quarter-circle cubics, starting at the top.
pub fn circle_outline(center: DVec2, radius: f64) -> Outline {
    let k = KAPPA * radius;
    let top = center + DVec2::new(0.0, -radius);
    let right = center + DVec2::new(radius, 0.0);
    let bottom = center + DVec2::new(0.0, radius);
    let left = center + DVec2::new(-radius, 0.0);

    let mut o = Outline::new();
    o.move_to(top)
        .cubic_to(top + DVec2::new(k, 0.0), right + DVec2::new(0.0, -k), right)
        .cubic_to(right + DVec2::new(0.0, k), bottom + DVec2::new(k, 0.0), bottom)
        .cubic_to(bottom + DVec2::new(-k, 0.0), left + DVec2::new(0.0, k), left)
        .cubic_to(left + DVec2::new(0.0, -k), top + DVec2::new(-k, 0.0), top)
        .close();
    o
}

/// Number of polygon sides for polygonal shapes, `None` for curved ones.
pub fn polygon_sides(shape: Shape) -> Option<usize> {
    match shape {
        Shape::Hexagon => Some(6),
        Shape::Diamond => Some(4),
        Shape::Badge => Some(8),
        Shape::Circle | Shape::Shield | Shape::Star | Shape::Infinity | Shape::Arch => None,
    }
}

/// Closed outline of `shape` centered at `center` with nominal `radius`.
///
/// `rotation_deg` rotates polygons and the star; the circle is rotation
/// invariant and the Bezier shapes are always drawn upright.
pub fn shape_outline(shape: Shape, center: DVec2, radius: f64, rotation_deg: f64) -> Outline {
    let rotation = rotation_deg.to_radians();
    match shape {
        Shape::Hexagon | Shape::Diamond | Shape::Badge => {
            let sides = polygon_sides(shape).unwrap_or(6);
            Outline::polygon(&polygon_vertices(center, radius, sides, rotation))
        }
        Shape::Circle => circle_outline(center, radius),
        Shape::Star => Outline::polygon(&star_vertices(
            center,
            radius,
            radius * STAR_INNER_RATIO,
            STAR_POINTS,
            rotation,
        )),
        Shape::Shield => shield_outline(center, radius),
        Shape::Infinity => infinity_outline(center, radius),
        Shape::Arch => arch_outline(center, radius),
    }
}

fn shield_outline(c: DVec2, r: f64) -> Outline {
    let p = |x: f64, y: f64| c + DVec2::new(x * r, y * r);
    let mut o = Outline::new();
    o.move_to(p(0.0, -1.0))
        .cubic_to(p(0.35, -0.82), p(0.7, -0.78), p(0.85, -0.8))
        .cubic_to(p(0.88, -0.2), p(0.8, 0.45), p(0.0, 1.0))
        .cubic_to(p(-0.8, 0.45), p(-0.88, -0.2), p(-0.85, -0.8))
        .cubic_to(p(-0.7, -0.78), p(-0.35, -0.82), p(0.0, -1.0))
        .close();
    o
}

fn infinity_outline(c: DVec2, r: f64) -> Outline {
    let p = |x: f64, y: f64| c + DVec2::new(x * r, y * r);
    let mut o = Outline::new();
    o.move_to(p(0.0, 0.0))
        .cubic_to(p(0.25, -0.55), p(1.0, -0.55), p(1.0, 0.0))
        .cubic_to(p(1.0, 0.55), p(0.25, 0.55), p(0.0, 0.0))
        .cubic_to(p(-0.25, -0.55), p(-1.0, -0.55), p(-1.0, 0.0))
        .cubic_to(p(-1.0, 0.55), p(-0.25, 0.55), p(0.0, 0.0))
        .close();
    o
}

fn arch_outline(c: DVec2, r: f64) -> Outline {
    let p = |x: f64, y: f64| c + DVec2::new(x * r, y * r);
    let k = KAPPA;
    let mut o = Outline::new();
    o.move_to(p(-0.8, 1.0))
        .line_to(p(-0.8, -0.2))
        .cubic_to(p(-0.8, -0.2 - 0.8 * k), p(-0.8 * k, -1.0), p(0.0, -1.0))
        .cubic_to(p(0.8 * k, -1.0), p(0.8, -0.2 - 0.8 * k), p(0.8, -0.2))
        .line_to(p(0.8, 1.0))
        .close();
    o
}
