//! Scene rendering backends.
//!
//! A [`SceneBackend`] turns a [`Scene`] into pixels. [`HeadlessBackend`]
//! projects wireframes, particles and the label through the camera into a
//! 2D draw list and rasterizes it, so it works anywhere the flat renderer
//! does. [`UnavailableBackend`] stands in for a platform without 3D support
//! and always fails with [`SceneError::Unsupported`].

use glam::{DVec2, Mat4, Vec3};

use logo_forge_core::contract::FontFace;
use logo_forge_core::geometry::Outline;
use logo_forge_core::style::FontStyle;
use logo_forge_raster::draw::{
    DrawList, GradientStop, Paint, Primitive, Stroke, Style, TextAnchor, TextRun,
};
use logo_forge_raster::rasterizer::{Rasterizer, RenderedImage};

use crate::error::SceneError;
use crate::mesh::Wireframe;
use crate::scene::Scene;

pub trait SceneBackend {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// Renders the scene's current pose on a `size` x `size` canvas at
    /// `size · dpr` physical pixels.
    fn render(&self, scene: &Scene, size: u32, dpr: f64) -> Result<RenderedImage, SceneError>;
}

/// Software projection onto the 2D rasterizer.
pub struct HeadlessBackend<'a> {
    rasterizer: &'a Rasterizer,
}

impl<'a> HeadlessBackend<'a> {
    pub fn new(rasterizer: &'a Rasterizer) -> Self {
        Self { rasterizer }
    }

    /// Builds the projected draw list without rasterizing it.
    pub fn project(&self, scene: &Scene, size: f64) -> Result<DrawList, SceneError> {
        if !size.is_finite() || size <= 0.0 {
            return Err(SceneError::Degenerate(format!("target size {size}")));
        }
        let view = Projector {
            matrix: scene
                .camera
                .view_projection(scene.controls.eye(), scene.controls.target(), 1.0),
            near: scene.camera.near,
            size,
        };
        let pose = scene.pose();
        let mut list = DrawList::new(size, size);

        let center = DVec2::splat(size * 0.5);
        let backdrop = match scene.environment {
            Some(env) => vec![
                GradientStop::new(0.0, env.zenith),
                GradientStop::new(1.0, env.horizon),
            ],
            None => vec![
                GradientStop::new(0.0, scene.background.lighten(0.05)),
                GradientStop::new(1.0, scene.background.darken(0.2)),
            ],
        };
        list.push(Primitive::Rect {
            origin: DVec2::ZERO,
            size: DVec2::splat(size),
            radius: 0.0,
            style: Style::fill(Paint::Radial {
                center,
                radius: size * 0.75,
                stops: backdrop,
            }),
        });

        let ring_model = Mat4::from_scale_rotation_translation(
            Vec3::splat(scene.ring.scale),
            pose.ring,
            Vec3::ZERO,
        );
        let ring = view.wireframe(&scene.ring.mesh.wireframe(), ring_model);
        if let Some(outline) = ring {
            list.push(Primitive::Path {
                outline,
                style: Style::stroke(Stroke::solid(
                    scene.ring.material.apparent_color(),
                    size / 300.0,
                ))
                .with_opacity(0.7),
            });
        }

        let main_model = Mat4::from_scale_rotation_translation(
            Vec3::splat(scene.main.scale),
            pose.main,
            Vec3::ZERO,
        );
        let main = view
            .wireframe(&scene.main.mesh.wireframe(), main_model)
            .ok_or_else(|| SceneError::Degenerate("main mesh is behind the camera".into()))?;
        let material = scene.main.material;
        let mut style = Style::stroke(Stroke::solid(
            material.apparent_color(),
            if material.wireframe { size / 150.0 } else { size / 250.0 },
        ))
        .with_opacity(material.opacity.max(0.35).into());
        if material.emissive_intensity > 0.0 {
            // a blurred copy underneath reads as emission
            list.push(Primitive::Path {
                outline: main.clone(),
                style: style
                    .clone()
                    .with_blur(size / 100.0 * f64::from(material.emissive_intensity))
                    .with_opacity(0.6),
            });
            style = style.with_opacity(1.0);
        }
        list.push(Primitive::Path {
            outline: main,
            style,
        });

        for (particle, position) in scene.particles.iter().zip(&pose.particles) {
            if let Some((point, depth)) = view.project(*position) {
                list.push(Primitive::Circle {
                    center: point,
                    radius: (f64::from(particle.size) * size / depth).max(1.0),
                    style: Style::fill(Paint::Solid(particle.material.apparent_color())),
                });
            }
        }

        list.push(Primitive::Text(TextRun {
            text: scene.label.clone(),
            position: DVec2::new(size * 0.5, size * 0.92),
            face: FontFace::for_style(FontStyle::Sans),
            size: size * 0.07,
            letter_spacing: 0.0,
            fill: scene.label_color,
            anchor: TextAnchor::Middle,
            rotation_deg: 0.0,
            opacity: 1.0,
        }));
        Ok(list)
    }
}

impl SceneBackend for HeadlessBackend<'_> {
    fn name(&self) -> &'static str {
        "headless"
    }

    fn render(&self, scene: &Scene, size: u32, dpr: f64) -> Result<RenderedImage, SceneError> {
        let list = self.project(scene, f64::from(size))?;
        Ok(self.rasterizer.render_list(&list, dpr)?)
    }
}

/// A platform with no 3D capability.
#[derive(Debug, Clone)]
pub struct UnavailableBackend {
    reason: String,
}

impl UnavailableBackend {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl SceneBackend for UnavailableBackend {
    fn name(&self) -> &'static str {
        "unavailable"
    }

    fn render(&self, _scene: &Scene, _size: u32, _dpr: f64) -> Result<RenderedImage, SceneError> {
        Err(SceneError::Unsupported(self.reason.clone()))
    }
}

struct Projector {
    matrix: Mat4,
    near: f32,
    size: f64,
}

impl Projector {
    /// Screen position and view depth of a world point, or `None` behind the
    /// near plane.
    fn project(&self, p: Vec3) -> Option<(DVec2, f64)> {
        let clip = self.matrix * p.extend(1.0);
        if clip.w <= self.near {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        let x = (f64::from(ndc.x) * 0.5 + 0.5) * self.size;
        let y = (0.5 - f64::from(ndc.y) * 0.5) * self.size;
        Some((DVec2::new(x, y), f64::from(clip.w)))
    }

    /// One move/line pair per visible edge; `None` if no edge is visible.
    fn wireframe(&self, mesh: &Wireframe, model: Mat4) -> Option<Outline> {
        let mut outline = Outline::new();
        let mut any = false;
        for (a, b) in mesh.segments() {
            let a = self.project(model.transform_point3(a));
            let b = self.project(model.transform_point3(b));
            if let (Some((a, _)), Some((b, _))) = (a, b) {
                outline.move_to(a).line_to(b);
                any = true;
            }
        }
        any.then_some(outline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use logo_forge_core::filters::FilterSelection;
    use logo_forge_core::generator::generate_with;
    use logo_forge_core::prng::Xorshift64;
    use logo_forge_core::style::{ClosedSet, Effect, Shape};

    fn scene(filters: FilterSelection) -> Scene {
        Scene::build(&generate_with("Acme", &filters, &mut Xorshift64::new(5)).unwrap())
    }

    #[test]
    fn every_shape_projects() {
        let r = Rasterizer::new();
        let backend = HeadlessBackend::new(&r);
        for &shape in Shape::ALL {
            let list = backend
                .project(&scene(FilterSelection::random().with_shape(shape)), 200.0)
                .unwrap();
            let paths = list
                .items()
                .iter()
                .filter(|p| matches!(p, Primitive::Path { .. }))
                .count();
            assert!(paths >= 2, "{shape:?}");
        }
    }

    #[test]
    fn particles_and_label_are_drawn() {
        let r = Rasterizer::new();
        let list = HeadlessBackend::new(&r)
            .project(&scene(FilterSelection::random()), 200.0)
            .unwrap();
        let circles = list
            .items()
            .iter()
            .filter(|p| matches!(p, Primitive::Circle { .. }))
            .count();
        assert_eq!(circles, 8);
        assert!(matches!(list.items().last(), Some(Primitive::Text(run)) if run.text == "Acme"));
    }

    #[test]
    fn projected_points_fall_on_canvas() {
        let r = Rasterizer::new();
        let list = HeadlessBackend::new(&r)
            .project(&scene(FilterSelection::random()), 300.0)
            .unwrap();
        for item in list.items() {
            if let Primitive::Circle { center, .. } = item {
                assert!((0.0..=300.0).contains(&center.x), "{center:?}");
                assert!((0.0..=300.0).contains(&center.y), "{center:?}");
            }
        }
    }

    #[test]
    fn emissive_effects_add_blurred_underlay() {
        let r = Rasterizer::new();
        let backend = HeadlessBackend::new(&r);
        let blurred = |effect| {
            backend
                .project(&scene(FilterSelection::random().with_effect(effect)), 200.0)
                .unwrap()
                .items()
                .iter()
                .filter(|p| matches!(p, Primitive::Path { style, .. } if style.blur > 0.0))
                .count()
        };
        assert_eq!(blurred(Effect::Neon), 1);
        assert_eq!(blurred(Effect::Shadow), 0);
    }

    #[test]
    fn zero_size_is_degenerate() {
        let r = Rasterizer::new();
        let err = HeadlessBackend::new(&r)
            .render(&scene(FilterSelection::random()), 0, 1.0)
            .unwrap_err();
        assert!(matches!(err, SceneError::Degenerate(_)));
    }

    #[test]
    fn headless_renders_pixels() {
        let r = Rasterizer::new();
        let img = HeadlessBackend::new(&r)
            .render(&scene(FilterSelection::random()), 64, 1.0)
            .unwrap();
        assert_eq!((img.width(), img.height()), (64, 64));
    }

    #[test]
    fn unavailable_backend_fails() {
        let err = UnavailableBackend::new("no GPU")
            .render(&scene(FilterSelection::random()), 64, 1.0)
            .unwrap_err();
        assert!(matches!(err, SceneError::Unsupported(ref m) if m == "no GPU"));
    }
}
