//! Logarithmic spiral generation
//!
//! The spiral is sampled at a fixed number of parameter steps:
//! `phi = phi_start + i * phi_step`, `radius = scale_a * e^(growth_k * phi)`.
//! Base geometry depends only on the spec and the canvas center, so it is
//! cached and regenerated only when the spec changes.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Spiral shape parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpiralSpec {
    /// Number of samples along the curve
    pub point_count: usize,
    /// Radial scale (`a` in `r = a * e^(k * phi)`)
    pub scale_a: f32,
    /// Exponential growth factor (`k`)
    pub growth_k: f32,
    /// Parameter value of the first sample (radians)
    pub phi_start: f32,
    /// Parameter step between samples (radians)
    pub phi_step: f32,
}

impl Default for SpiralSpec {
    fn default() -> Self {
        Self {
            point_count: crate::consts::SPIRAL_POINT_COUNT,
            scale_a: 1.0,
            growth_k: 0.2,
            phi_start: 1.0,
            phi_step: 0.1,
        }
    }
}

/// Sample the spiral in canvas space around `center`.
///
/// Pure function of the spec and center; a zero `point_count` yields an
/// empty sequence, which downstream treats as "no path to draw".
pub fn generate_spiral(spec: &SpiralSpec, center: Vec2) -> Vec<Vec2> {
    (0..spec.point_count)
        .map(|i| {
            let phi = spec.phi_start + i as f32 * spec.phi_step;
            let radius = spec.scale_a * (spec.growth_k * phi).exp();
            center + radius * Vec2::new(phi.cos(), phi.sin())
        })
        .collect()
}

/// Cached base (unrotated) spiral geometry
#[derive(Debug, Clone)]
pub struct SpiralPath {
    spec: SpiralSpec,
    center: Vec2,
    points: Vec<Vec2>,
}

impl SpiralPath {
    pub fn new(spec: SpiralSpec, center: Vec2) -> Self {
        let points = generate_spiral(&spec, center);
        Self {
            spec,
            center,
            points,
        }
    }

    #[inline]
    pub fn spec(&self) -> &SpiralSpec {
        &self.spec
    }

    /// Base points in generation order
    #[inline]
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Swap in a new spec, regenerating only if it differs
    pub fn reconfigure(&mut self, spec: SpiralSpec, center: Vec2) {
        if spec != self.spec || center != self.center {
            self.spec = spec;
            self.center = center;
            self.points = generate_spiral(&self.spec, center);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_is_deterministic() {
        let spec = SpiralSpec::default();
        let center = Vec2::new(320.0, 240.0);
        let a = generate_spiral(&spec, center);
        let b = generate_spiral(&spec, center);
        assert_eq!(a.len(), spec.point_count);
        // Bit-identical, not merely close
        for (p, q) in a.iter().zip(&b) {
            assert_eq!(p.x.to_bits(), q.x.to_bits());
            assert_eq!(p.y.to_bits(), q.y.to_bits());
        }
    }

    #[test]
    fn test_sample_matches_closed_form() {
        let spec = SpiralSpec::default();
        let center = Vec2::new(320.0, 240.0);
        let points = generate_spiral(&spec, center);

        // phi at index 230 = 1 + 230 * 0.1 = 24
        let phi = 24.0_f32;
        let r = (0.2 * phi).exp();
        let expected = Vec2::new(320.0 + r * phi.cos(), 240.0 + r * phi.sin());
        assert!((points[230] - expected).length() < 1e-3);
    }

    #[test]
    fn test_empty_spec_yields_empty_sequence() {
        let spec = SpiralSpec {
            point_count: 0,
            ..Default::default()
        };
        assert!(generate_spiral(&spec, Vec2::ZERO).is_empty());
    }

    #[test]
    fn test_path_cache_regenerates_on_change() {
        let center = Vec2::new(320.0, 240.0);
        let mut path = SpiralPath::new(SpiralSpec::default(), center);
        let before = path.points()[0];

        // Same spec: cache untouched
        path.reconfigure(SpiralSpec::default(), center);
        assert_eq!(path.points()[0], before);

        let wider = SpiralSpec {
            scale_a: 2.0,
            ..Default::default()
        };
        path.reconfigure(wider, center);
        assert_ne!(path.points()[0], before);
        assert_eq!(path.points().len(), wider.point_count);
    }
}
