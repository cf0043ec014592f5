//! Rigid 2D rotation about a pivot
//!
//! A thin wrapper over `glam::Affine2` composing translate-rotate-translate,
//! the same map a canvas matrix `setRotate(angle, px, py)` builds. Applying
//! it preserves sequence length, order, and pairwise distances.

use glam::{Affine2, Vec2};

/// A rotation by `angle_deg` around `pivot`
#[derive(Debug, Clone, Copy)]
pub struct Rotation {
    transform: Affine2,
}

impl Rotation {
    pub fn new(angle_deg: f32, pivot: Vec2) -> Self {
        let transform = Affine2::from_translation(pivot)
            * Affine2::from_angle(angle_deg.to_radians())
            * Affine2::from_translation(-pivot);
        Self { transform }
    }

    /// Map a single point
    #[inline]
    pub fn apply_point(&self, point: Vec2) -> Vec2 {
        self.transform.transform_point2(point)
    }

    /// Map a point sequence, preserving length and order
    pub fn apply(&self, points: &[Vec2]) -> Vec<Vec2> {
        points.iter().map(|&p| self.apply_point(p)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_about_pivot() {
        let rot = Rotation::new(90.0, Vec2::new(10.0, 10.0));
        // Point one unit right of the pivot swings one unit "down" in y
        let p = rot.apply_point(Vec2::new(11.0, 10.0));
        assert!((p - Vec2::new(10.0, 11.0)).length() < 1e-5);
    }

    #[test]
    fn test_zero_rotation_is_identity() {
        let rot = Rotation::new(0.0, Vec2::new(320.0, 240.0));
        let p = Vec2::new(123.0, 456.0);
        assert!((rot.apply_point(p) - p).length() < 1e-5);
    }

    #[test]
    fn test_apply_preserves_length_and_order() {
        let points: Vec<Vec2> = (0..50)
            .map(|i| Vec2::new(i as f32, (i * i) as f32 * 0.1))
            .collect();
        let rot = Rotation::new(-137.0, Vec2::new(5.0, 5.0));
        let rotated = rot.apply(&points);
        assert_eq!(rotated.len(), points.len());

        // Pairwise distances survive within float tolerance
        for i in 0..points.len() {
            for j in (i + 1)..points.len() {
                let before = (points[i] - points[j]).length();
                let after = (rotated[i] - rotated[j]).length();
                assert!((before - after).abs() < 1e-3, "pair ({i}, {j}) drifted");
            }
        }
    }
}
