//! Pointer-tracking compass arcs
//!
//! Two 30-degree dashed sectors ride the concentric rings, both anchored at
//! the pointer angle. Each arc's `moveTo` anchor is the "12 o'clock" point
//! of its ring swung to the pointer angle about the canvas center.

use glam::Vec2;

use super::rotation::Rotation;
use crate::consts::{ARC_LEAD_DEG, ARC_SWEEP_DEG, RING_INNER_RADIUS, RING_OUTER_RADIUS};

/// One arc sector on a ring, in the oval-bounding-box convention:
/// the sector lies on the circle inscribed in the square of the given
/// half-extent around `center`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcParams {
    pub center: Vec2,
    pub half_extent: f32,
    pub start_angle_deg: f32,
    pub sweep_deg: f32,
}

/// The per-frame pair of pointer-tracking arcs and their anchor points
#[derive(Debug, Clone, Copy)]
pub struct CompassArcs {
    pub outer: ArcParams,
    pub inner: ArcParams,
    /// Path anchor on the outer ring (rotated top-of-ring point)
    pub outer_anchor: Vec2,
    /// Path anchor on the inner ring
    pub inner_anchor: Vec2,
}

/// Build both arcs for the given pointer angle.
///
/// Both sectors share `start = pointer_angle - 90 - ARC_LEAD_DEG` and a
/// fixed sweep; they differ only in ring radius.
pub fn build_compass_arcs(pointer_angle_deg: f32, center: Vec2) -> CompassArcs {
    let start_angle_deg = pointer_angle_deg - 90.0 - ARC_LEAD_DEG;

    let swing = Rotation::new(pointer_angle_deg, center);
    let outer_anchor = swing.apply_point(Vec2::new(center.x, center.y - RING_OUTER_RADIUS));
    let inner_anchor = swing.apply_point(Vec2::new(center.x, center.y - RING_INNER_RADIUS));

    let sector = |half_extent: f32| ArcParams {
        center,
        half_extent,
        start_angle_deg,
        sweep_deg: ARC_SWEEP_DEG,
    };

    CompassArcs {
        outer: sector(RING_OUTER_RADIUS),
        inner: sector(RING_INNER_RADIUS),
        outer_anchor,
        inner_anchor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CENTER: Vec2 = Vec2::new(320.0, 240.0);

    #[test]
    fn test_arcs_share_start_and_sweep() {
        let arcs = build_compass_arcs(90.0, CENTER);
        // pointer due right: start = 90 - 90 - 15 = -15
        assert!((arcs.outer.start_angle_deg + 15.0).abs() < 1e-4);
        assert_eq!(arcs.outer.start_angle_deg, arcs.inner.start_angle_deg);
        assert_eq!(arcs.outer.sweep_deg, 30.0);
        assert_eq!(arcs.inner.sweep_deg, 30.0);
    }

    #[test]
    fn test_arc_extents_are_ring_radii() {
        let arcs = build_compass_arcs(37.0, CENTER);
        assert_eq!(arcs.outer.half_extent, 160.0);
        assert_eq!(arcs.inner.half_extent, 128.0);
        assert_eq!(arcs.outer.center, CENTER);
    }

    #[test]
    fn test_anchors_ride_the_rings() {
        // At angle 0 the anchors sit straight above the center
        let arcs = build_compass_arcs(0.0, CENTER);
        assert!((arcs.outer_anchor - Vec2::new(320.0, 80.0)).length() < 1e-3);
        assert!((arcs.inner_anchor - Vec2::new(320.0, 112.0)).length() < 1e-3);

        // Swinging by 90 degrees moves them to the side, same distance out
        let swung = build_compass_arcs(90.0, CENTER);
        assert!(((swung.outer_anchor - CENTER).length() - 160.0).abs() < 1e-3);
        assert!(((swung.inner_anchor - CENTER).length() - 128.0).abs() < 1e-3);
        assert!((swung.outer_anchor - Vec2::new(480.0, 240.0)).length() < 1e-2);
    }
}
