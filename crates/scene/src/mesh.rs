//! Shape-to-primitive mapping and wireframe geometry.
//!
//! Every mesh is generated around the origin with an extent of roughly one
//! unit, so the scene can place and scale them uniformly.

use glam::Vec3;
use std::f32::consts::{PI, TAU};

use logo_forge_core::style::Shape;

/// Parametric 3D primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MeshKind {
    Sphere,
    /// Short prism with `sides` faces around the Y axis.
    Cylinder { sides: u32 },
    Octahedron,
    Box,
    /// `(p, q)` torus knot.
    TorusKnot { p: u32, q: u32 },
    /// Upper half of a torus (an arch).
    HalfTorus,
    /// Full torus with the given major/minor radius.
    Torus { major: f32, minor: f32 },
}

impl MeshKind {
    /// The primitive that stands in for `shape` in 3D.
    pub fn for_shape(shape: Shape) -> Self {
        match shape {
            Shape::Circle => MeshKind::Sphere,
            Shape::Hexagon => MeshKind::Cylinder { sides: 6 },
            Shape::Badge => MeshKind::Cylinder { sides: 8 },
            Shape::Diamond => MeshKind::Octahedron,
            Shape::Shield => MeshKind::Box,
            Shape::Star => MeshKind::TorusKnot { p: 2, q: 5 },
            Shape::Infinity => MeshKind::TorusKnot { p: 2, q: 3 },
            Shape::Arch => MeshKind::HalfTorus,
        }
    }

    pub fn wireframe(self) -> Wireframe {
        match self {
            MeshKind::Sphere => sphere(8, 12),
            MeshKind::Cylinder { sides } => cylinder(sides.max(3), 0.35),
            MeshKind::Octahedron => octahedron(),
            MeshKind::Box => cuboid(Vec3::new(0.9, 1.1, 0.35)),
            MeshKind::TorusKnot { p, q } => torus_knot(p, q, 160),
            MeshKind::HalfTorus => torus(0.8, 0.22, PI, 16, 8),
            MeshKind::Torus { major, minor } => torus(major, minor, TAU, 32, 6),
        }
    }
}

/// Vertices and the index pairs that connect them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Wireframe {
    pub vertices: Vec<Vec3>,
    pub edges: Vec<[u32; 2]>,
}

impl Wireframe {
    fn push(&mut self, v: Vec3) -> u32 {
        self.vertices.push(v);
        (self.vertices.len() - 1) as u32
    }

    fn connect(&mut self, a: u32, b: u32) {
        self.edges.push([a, b]);
    }

    /// End points of every edge.
    pub fn segments(&self) -> impl Iterator<Item = (Vec3, Vec3)> + '_ {
        self.edges.iter().filter_map(|&[a, b]| {
            Some((*self.vertices.get(a as usize)?, *self.vertices.get(b as usize)?))
        })
    }
}

fn sphere(rings: u32, segments: u32) -> Wireframe {
    let mut w = Wireframe::default();
    let top = w.push(Vec3::Y);
    let mut prev_ring: Vec<u32> = Vec::new();
    for ring in 1..rings {
        let phi = PI * ring as f32 / rings as f32;
        let (y, r) = (phi.cos(), phi.sin());
        let ids: Vec<u32> = (0..segments)
            .map(|s| {
                let theta = TAU * s as f32 / segments as f32;
                w.push(Vec3::new(r * theta.cos(), y, r * theta.sin()))
            })
            .collect();
        for s in 0..segments as usize {
            w.connect(ids[s], ids[(s + 1) % ids.len()]);
            let above = if prev_ring.is_empty() { top } else { prev_ring[s] };
            w.connect(above, ids[s]);
        }
        prev_ring = ids;
    }
    let bottom = w.push(-Vec3::Y);
    for &id in &prev_ring {
        w.connect(id, bottom);
    }
    w
}

fn cylinder(sides: u32, half_height: f32) -> Wireframe {
    let mut w = Wireframe::default();
    let ring = |w: &mut Wireframe, y: f32| -> Vec<u32> {
        (0..sides)
            .map(|i| {
                let a = TAU * i as f32 / sides as f32 - PI / 2.0;
                w.push(Vec3::new(a.cos(), y, a.sin()))
            })
            .collect()
    };
    let top = ring(&mut w, half_height);
    let bottom = ring(&mut w, -half_height);
    let n = sides as usize;
    for i in 0..n {
        w.connect(top[i], top[(i + 1) % n]);
        w.connect(bottom[i], bottom[(i + 1) % n]);
        w.connect(top[i], bottom[i]);
    }
    w
}

fn octahedron() -> Wireframe {
    let mut w = Wireframe::default();
    let up = w.push(Vec3::Y);
    let down = w.push(-Vec3::Y);
    let equator: Vec<u32> = [Vec3::X, Vec3::Z, -Vec3::X, -Vec3::Z]
        .into_iter()
        .map(|v| w.push(v * 0.8))
        .collect();
    for i in 0..4 {
        w.connect(equator[i], equator[(i + 1) % 4]);
        w.connect(up, equator[i]);
        w.connect(down, equator[i]);
    }
    w
}

fn cuboid(size: Vec3) -> Wireframe {
    let mut w = Wireframe::default();
    let h = size / 2.0;
    for i in 0..8u32 {
        let sx = if i & 1 == 0 { -h.x } else { h.x };
        let sy = if i & 2 == 0 { -h.y } else { h.y };
        let sz = if i & 4 == 0 { -h.z } else { h.z };
        w.push(Vec3::new(sx, sy, sz));
    }
    for a in 0..8u32 {
        for bit in [1u32, 2, 4] {
            let b = a | bit;
            if b != a {
                w.connect(a, b);
            }
        }
    }
    w
}

/// Centerline of a `(p, q)` torus knot as a closed polyline.
fn torus_knot(p: u32, q: u32, steps: u32) -> Wireframe {
    let mut w = Wireframe::default();
    let (p, q) = (p as f32, q as f32);
    for i in 0..steps {
        let t = TAU * i as f32 / steps as f32;
        let r = 0.6 + 0.25 * (q * t).cos();
        w.push(Vec3::new(r * (p * t).cos(), r * (p * t).sin(), 0.25 * (q * t).sin()));
    }
    for i in 0..steps {
        w.connect(i, (i + 1) % steps);
    }
    w
}

/// Torus (or a `sweep`-radian section of one) in the XY plane.
fn torus(major: f32, minor: f32, sweep: f32, segments: u32, sides: u32) -> Wireframe {
    let mut w = Wireframe::default();
    let closed = sweep >= TAU - f32::EPSILON;
    let rings = if closed { segments } else { segments + 1 };
    let mut ids: Vec<Vec<u32>> = Vec::with_capacity(rings as usize);
    for s in 0..rings {
        let u = sweep * s as f32 / segments as f32;
        let center = Vec3::new(major * u.cos(), major * u.sin(), 0.0);
        let radial = Vec3::new(u.cos(), u.sin(), 0.0);
        let ring: Vec<u32> = (0..sides)
            .map(|k| {
                let v = TAU * k as f32 / sides as f32;
                w.push(center + minor * (v.cos() * radial + v.sin() * Vec3::Z))
            })
            .collect();
        ids.push(ring);
    }
    let n = sides as usize;
    for s in 0..ids.len() {
        for k in 0..n {
            w.connect(ids[s][k], ids[s][(k + 1) % n]);
            let next = if s + 1 < ids.len() {
                Some(s + 1)
            } else if closed {
                Some(0)
            } else {
                None
            };
            if let Some(next) = next {
                w.connect(ids[s][k], ids[next][k]);
            }
        }
    }
    w
}

#[cfg(test)]
mod tests {
    use super::*;
    use logo_forge_core::style::ClosedSet;

    fn valid(w: &Wireframe) -> bool {
        let n = w.vertices.len() as u32;
        w.edges.iter().all(|&[a, b]| a < n && b < n && a != b)
    }

    #[test]
    fn shape_mapping() {
        assert_eq!(MeshKind::for_shape(Shape::Circle), MeshKind::Sphere);
        assert_eq!(MeshKind::for_shape(Shape::Hexagon), MeshKind::Cylinder { sides: 6 });
        assert_eq!(MeshKind::for_shape(Shape::Badge), MeshKind::Cylinder { sides: 8 });
        assert_eq!(MeshKind::for_shape(Shape::Diamond), MeshKind::Octahedron);
        assert_eq!(MeshKind::for_shape(Shape::Shield), MeshKind::Box);
        assert_eq!(MeshKind::for_shape(Shape::Star), MeshKind::TorusKnot { p: 2, q: 5 });
        assert_eq!(MeshKind::for_shape(Shape::Infinity), MeshKind::TorusKnot { p: 2, q: 3 });
        assert_eq!(MeshKind::for_shape(Shape::Arch), MeshKind::HalfTorus);
    }

    #[test]
    fn every_shape_mesh_is_well_formed() {
        for &shape in Shape::ALL {
            let w = MeshKind::for_shape(shape).wireframe();
            assert!(!w.edges.is_empty(), "{shape:?}");
            assert!(valid(&w), "{shape:?}");
            for v in &w.vertices {
                assert!(v.length() <= 1.2, "{shape:?} vertex {v:?} too far out");
            }
        }
    }

    #[test]
    fn octahedron_counts() {
        let w = octahedron();
        assert_eq!(w.vertices.len(), 6);
        assert_eq!(w.edges.len(), 12);
    }

    #[test]
    fn cuboid_counts() {
        let w = cuboid(Vec3::ONE);
        assert_eq!(w.vertices.len(), 8);
        assert_eq!(w.edges.len(), 12);
    }

    #[test]
    fn cylinder_counts() {
        let w = cylinder(6, 0.3);
        assert_eq!(w.vertices.len(), 12);
        assert_eq!(w.edges.len(), 18);
    }

    #[test]
    fn torus_knot_is_closed_loop() {
        let w = torus_knot(2, 3, 40);
        assert_eq!(w.vertices.len(), 40);
        assert_eq!(w.edges.len(), 40);
        assert_eq!(w.edges.last(), Some(&[39, 0]));
    }

    #[test]
    fn half_torus_stays_above_axis() {
        let w = MeshKind::HalfTorus.wireframe();
        assert!(valid(&w));
        for v in &w.vertices {
            assert!(v.y >= -0.23, "{v:?}");
        }
    }

    #[test]
    fn full_torus_wraps() {
        let w = MeshKind::Torus {
            major: 1.0,
            minor: 0.05,
        }
        .wireframe();
        assert!(valid(&w));
        assert_eq!(w.vertices.len(), 32 * 6);
        assert_eq!(w.edges.len(), 32 * 6 * 2);
    }

    #[test]
    fn segments_match_edges() {
        let w = octahedron();
        assert_eq!(w.segments().count(), w.edges.len());
    }
}
