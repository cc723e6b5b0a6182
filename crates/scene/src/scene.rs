//! Scene model and time-based animation.
//!
//! [`Scene::build`] lays out lights, camera, the main mesh, an accent ring,
//! orbiting particles and a label from a configuration. Motion is a pure
//! function of elapsed seconds ([`Scene::pose_at`]); [`Scene::advance`] only
//! accumulates time and caches the resulting pose, so animation speed does not
//! depend on frame rate.

use glam::{Mat4, Quat, Vec3};
use std::f32::consts::TAU;

use logo_forge_core::color::Srgb;
use logo_forge_core::config::LogoConfiguration;
use logo_forge_core::contract::flat_label;

use crate::controls::OrbitControls;
use crate::material::{needs_environment, Material};
use crate::mesh::MeshKind;

/// Vertical field of view in degrees.
pub const FOV_DEG: f32 = 50.0;
pub const NEAR: f32 = 0.1;
pub const FAR: f32 = 100.0;
/// Camera distance from the origin.
pub const CAMERA_DISTANCE: f32 = 6.0;

/// Number of orbiting particles.
pub const PARTICLE_COUNT: usize = 8;

/// Main mesh spin about +Y, rad/s.
pub const MAIN_SPIN: f32 = 0.5;
/// Accent ring spin about +X, rad/s (opposite direction to the mesh).
pub const RING_SPIN: f32 = -0.8;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LightKind {
    Ambient,
    Point { position: Vec3 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub kind: LightKind,
    pub color: Srgb,
    pub intensity: f32,
}

/// Reflective backdrop for metallic and glass effects.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Environment {
    pub horizon: Srgb,
    pub zenith: Srgb,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub fov_deg: f32,
    pub near: f32,
    pub far: f32,
}

impl Camera {
    /// Combined projection and view matrix looking from `eye` at `target`.
    pub fn view_projection(&self, eye: Vec3, target: Vec3, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov_deg.to_radians(), aspect, self.near, self.far)
            * Mat4::look_at_rh(eye, target, Vec3::Y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node {
    pub mesh: MeshKind,
    pub material: Material,
    pub scale: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub material: Material,
    /// Starting angle in radians.
    pub phase: f32,
    /// Mean orbit radius.
    pub radius: f32,
    /// Angular speed, rad/s.
    pub speed: f32,
    pub size: f32,
}

/// Time-dependent transforms.
#[derive(Debug, Clone, PartialEq)]
pub struct Pose {
    pub main: Quat,
    pub ring: Quat,
    pub particles: Vec<Vec3>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub background: Srgb,
    pub lights: Vec<Light>,
    pub environment: Option<Environment>,
    pub camera: Camera,
    pub controls: OrbitControls,
    pub main: Node,
    pub ring: Node,
    pub particles: Vec<Particle>,
    pub label: String,
    pub label_color: Srgb,
    elapsed: f32,
    pose: Pose,
}

impl Scene {
    pub fn build(config: &LogoConfiguration) -> Self {
        let palette = config.palette();
        let params = config.params();

        let lights = vec![
            Light {
                kind: LightKind::Ambient,
                color: Srgb::WHITE,
                intensity: 0.4,
            },
            Light {
                kind: LightKind::Point {
                    position: Vec3::new(5.0, 5.0, 5.0),
                },
                color: palette.primary,
                intensity: 1.0,
            },
            Light {
                kind: LightKind::Point {
                    position: Vec3::new(-5.0, -3.0, 4.0),
                },
                color: palette.secondary,
                intensity: 0.6,
            },
            Light {
                kind: LightKind::Point {
                    position: Vec3::new(0.0, 3.0, -5.0),
                },
                color: palette.accent,
                intensity: 0.8,
            },
        ];

        let environment = needs_environment(config.effect()).then(|| Environment {
            horizon: palette.background.mix(palette.secondary, 0.3),
            zenith: palette.background.lighten(0.2),
        });

        // unit scale at a 160px shape
        let main_scale = (params.shape_size / 160.0 * params.scale) as f32;

        let particles = (0..PARTICLE_COUNT)
            .map(|i| {
                let f = i as f32 / PARTICLE_COUNT as f32;
                let color = if i % 2 == 0 {
                    palette.accent
                } else {
                    palette.secondary
                };
                Particle {
                    material: Material::glowing(color, 1.0),
                    phase: TAU * f,
                    radius: 1.6 + 0.2 * (i % 3) as f32,
                    speed: 0.3 + 0.05 * i as f32,
                    size: 0.05 + 0.01 * (i % 4) as f32,
                }
            })
            .collect();

        let mut scene = Self {
            background: palette.background,
            lights,
            environment,
            camera: Camera {
                fov_deg: FOV_DEG,
                near: NEAR,
                far: FAR,
            },
            controls: OrbitControls::new(Vec3::ZERO, CAMERA_DISTANCE),
            main: Node {
                mesh: MeshKind::for_shape(config.shape()),
                material: Material::for_effect(config.effect(), palette),
                scale: main_scale,
            },
            ring: Node {
                mesh: MeshKind::Torus {
                    major: 1.0,
                    minor: 0.02,
                },
                material: Material::glowing(palette.accent, 0.5),
                scale: 1.7,
            },
            particles,
            label: flat_label(config).to_string(),
            label_color: palette.primary,
            elapsed: 0.0,
            pose: Pose {
                main: Quat::IDENTITY,
                ring: Quat::IDENTITY,
                particles: Vec::new(),
            },
        };
        scene.pose = scene.pose_at(0.0);
        scene
    }

    /// Transforms at `t` seconds since the scene started.
    pub fn pose_at(&self, t: f32) -> Pose {
        let main = Quat::from_rotation_y(MAIN_SPIN * t) * Quat::from_rotation_x(0.15 * (0.7 * t).sin());
        let ring = Quat::from_rotation_x(RING_SPIN * t) * Quat::from_rotation_z(0.4);
        let particles = self
            .particles
            .iter()
            .map(|p| {
                let angle = p.phase + p.speed * t;
                let r = p.radius + 0.3 * (1.3 * t + p.phase).sin();
                Vec3::new(r * angle.cos(), 0.5 * (0.9 * t + p.phase).sin(), r * angle.sin())
            })
            .collect();
        Pose {
            main,
            ring,
            particles,
        }
    }

    /// Advances the animation by `dt` seconds. Negative or non-finite steps
    /// are ignored.
    pub fn advance(&mut self, dt: f32) {
        if !dt.is_finite() || dt <= 0.0 {
            return;
        }
        self.elapsed += dt;
        self.pose = self.pose_at(self.elapsed);
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn pose(&self) -> &Pose {
        &self.pose
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use logo_forge_core::filters::FilterSelection;
    use logo_forge_core::generator::generate_with;
    use logo_forge_core::prng::Xorshift64;
    use logo_forge_core::style::{Effect, Layout, Shape};

    fn scene(filters: FilterSelection) -> Scene {
        Scene::build(&generate_with("Nexus Labs", &filters, &mut Xorshift64::new(17)).unwrap())
    }

    fn quat_close(a: Quat, b: Quat) -> bool {
        a.abs_diff_eq(b, 1e-5) || a.abs_diff_eq(-b, 1e-5)
    }

    #[test]
    fn lights_use_palette_roles() {
        let c = generate_with("Acme", &FilterSelection::random(), &mut Xorshift64::new(3)).unwrap();
        let s = Scene::build(&c);
        assert_eq!(s.lights.len(), 4);
        assert_eq!(s.lights[0].kind, LightKind::Ambient);
        let colors: Vec<Srgb> = s.lights[1..].iter().map(|l| l.color).collect();
        let p = c.palette();
        assert_eq!(colors, vec![p.primary, p.secondary, p.accent]);
    }

    #[test]
    fn camera_setup() {
        let s = scene(FilterSelection::random());
        assert_eq!(s.camera.fov_deg, 50.0);
        assert_eq!(s.camera.near, 0.1);
        assert_eq!(s.camera.far, 100.0);
        assert!((s.controls.eye() - Vec3::new(0.0, 0.0, 6.0)).length() < 1e-5);
    }

    #[test]
    fn environment_only_for_metallic_and_glass() {
        assert!(scene(FilterSelection::random().with_effect(Effect::Metallic)).environment.is_some());
        assert!(scene(FilterSelection::random().with_effect(Effect::Glass)).environment.is_some());
        assert!(scene(FilterSelection::random().with_effect(Effect::Neon)).environment.is_none());
    }

    #[test]
    fn mesh_follows_shape() {
        let s = scene(FilterSelection::random().with_shape(Shape::Star));
        assert_eq!(s.main.mesh, MeshKind::TorusKnot { p: 2, q: 5 });
    }

    #[test]
    fn label_follows_layout() {
        assert_eq!(scene(FilterSelection::random().with_layout(Layout::Monogram)).label, "NL");
        assert_eq!(
            scene(FilterSelection::random().with_layout(Layout::Centered)).label,
            "Nexus Labs"
        );
    }

    #[test]
    fn eight_particles() {
        let s = scene(FilterSelection::random());
        assert_eq!(s.particles.len(), PARTICLE_COUNT);
        assert_eq!(s.pose().particles.len(), PARTICLE_COUNT);
    }

    #[test]
    fn ring_counter_rotates_on_another_axis() {
        let s = scene(FilterSelection::random());
        let pose = s.pose_at(1.0);
        let (main_axis, _) = (pose.main * Quat::from_rotation_x(-0.15 * 0.7f32.sin())).to_axis_angle();
        let (ring_axis, _) = (pose.ring * Quat::from_rotation_z(-0.4)).to_axis_angle();
        assert!(main_axis.abs_diff_eq(Vec3::Y, 1e-4), "{main_axis:?}");
        assert!(ring_axis.abs_diff_eq(-Vec3::X, 1e-4), "{ring_axis:?}");
    }

    #[test]
    fn two_half_steps_equal_one_step() {
        let mut a = scene(FilterSelection::random());
        let mut b = a.clone();
        a.advance(1.0 / 30.0);
        a.advance(1.0 / 30.0);
        b.advance(2.0 / 30.0);
        assert!((a.elapsed() - b.elapsed()).abs() < 1e-6);
        assert!(quat_close(a.pose().main, b.pose().main));
        assert!(quat_close(a.pose().ring, b.pose().ring));
        for (pa, pb) in a.pose().particles.iter().zip(&b.pose().particles) {
            assert!(pa.abs_diff_eq(*pb, 1e-4));
        }
    }

    #[test]
    fn advance_ignores_bad_steps() {
        let mut s = scene(FilterSelection::random());
        let before = s.clone();
        s.advance(-1.0);
        s.advance(f32::NAN);
        s.advance(0.0);
        assert_eq!(s, before);
    }

    #[test]
    fn pose_at_zero_is_initial_pose() {
        let s = scene(FilterSelection::random());
        assert_eq!(&s.pose_at(0.0), s.pose());
    }

    #[test]
    fn view_projection_puts_origin_at_center() {
        let s = scene(FilterSelection::random());
        let vp = s.camera.view_projection(s.controls.eye(), Vec3::ZERO, 1.0);
        let clip = vp * Vec3::ZERO.extend(1.0);
        let ndc = clip.truncate() / clip.w;
        assert!(ndc.x.abs() < 1e-5 && ndc.y.abs() < 1e-5);
    }
}
