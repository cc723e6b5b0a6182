//! Orbit camera controls with a clamped polar band.

use glam::Vec3;
use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

/// Lowest polar angle (measured from +Y) the camera may reach.
pub const MIN_POLAR: f32 = FRAC_PI_4;
/// Highest polar angle the camera may reach.
pub const MAX_POLAR: f32 = 3.0 * FRAC_PI_4;

/// Camera orbiting a fixed target at a fixed distance.
///
/// Only rotation is exposed: distance and target are fixed at construction,
/// so the camera can neither zoom nor pan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitControls {
    target: Vec3,
    distance: f32,
    azimuth: f32,
    polar: f32,
}

impl OrbitControls {
    /// Looks at `target` from `distance` along +Z.
    pub fn new(target: Vec3, distance: f32) -> Self {
        Self {
            target,
            distance,
            azimuth: 0.0,
            polar: FRAC_PI_2,
        }
    }

    pub fn azimuth(&self) -> f32 {
        self.azimuth
    }

    pub fn polar(&self) -> f32 {
        self.polar
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// Drags the camera by the given angles (radians). Polar motion stops at
    /// the band edges.
    pub fn rotate(&mut self, d_azimuth: f32, d_polar: f32) {
        if d_azimuth.is_finite() {
            self.azimuth = (self.azimuth + d_azimuth).rem_euclid(std::f32::consts::TAU);
        }
        if d_polar.is_finite() {
            self.polar = (self.polar + d_polar).clamp(MIN_POLAR, MAX_POLAR);
        }
    }

    /// Camera position for the current angles.
    pub fn eye(&self) -> Vec3 {
        let (sin_p, cos_p) = self.polar.sin_cos();
        let (sin_a, cos_a) = self.azimuth.sin_cos();
        self.target + self.distance * Vec3::new(sin_p * sin_a, cos_p, sin_p * cos_a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn starts_on_positive_z() {
        let c = OrbitControls::new(Vec3::ZERO, 6.0);
        assert!((c.eye() - Vec3::new(0.0, 0.0, 6.0)).length() < EPS);
    }

    #[test]
    fn polar_is_clamped() {
        let mut c = OrbitControls::new(Vec3::ZERO, 6.0);
        c.rotate(0.0, 10.0);
        assert_eq!(c.polar(), MAX_POLAR);
        c.rotate(0.0, -10.0);
        assert_eq!(c.polar(), MIN_POLAR);
    }

    #[test]
    fn azimuth_wraps() {
        let mut c = OrbitControls::new(Vec3::ZERO, 6.0);
        c.rotate(std::f32::consts::TAU + 0.5, 0.0);
        assert!((c.azimuth() - 0.5).abs() < EPS);
    }

    #[test]
    fn rotation_keeps_distance_and_target() {
        let mut c = OrbitControls::new(Vec3::new(1.0, 0.0, 0.0), 6.0);
        c.rotate(1.2, -0.4);
        assert_eq!(c.target(), Vec3::new(1.0, 0.0, 0.0));
        assert!(((c.eye() - c.target()).length() - 6.0).abs() < 1e-4);
    }

    #[test]
    fn non_finite_input_is_ignored() {
        let mut c = OrbitControls::new(Vec3::ZERO, 6.0);
        c.rotate(f32::NAN, f32::INFINITY);
        assert_eq!(c, OrbitControls::new(Vec3::ZERO, 6.0));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn eye_keeps_distance_and_band(
                drags in proptest::collection::vec((-5.0_f32..5.0, -5.0_f32..5.0), 0..20),
            ) {
                let mut c = OrbitControls::new(Vec3::ZERO, 6.0);
                for (a, p) in drags {
                    c.rotate(a, p);
                }
                prop_assert!((MIN_POLAR..=MAX_POLAR).contains(&c.polar()));
                prop_assert!((c.eye().length() - 6.0).abs() < 1e-3);
                // the band keeps the camera off the poles
                prop_assert!(c.eye().y.abs() <= 6.0 * MIN_POLAR.cos() + 1e-3);
            }
        }
    }
}
