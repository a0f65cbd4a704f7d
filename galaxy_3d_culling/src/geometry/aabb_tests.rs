use glam::{Mat4, Quat, Vec3};
use serial_test::serial;
use crate::error::Error;
use crate::log::{CaptureLogger, LogSeverity, reset_logger};
use super::*;

fn unit_box() -> AABB {
    AABB::new(Vec3::ZERO, Vec3::ONE)
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_aabb_default_is_point_box_at_origin() {
    let aabb = AABB::default();
    assert_eq!(aabb.min, Vec3::ZERO);
    assert_eq!(aabb.max, Vec3::ZERO);
    assert!(!aabb.is_empty());
}

#[test]
fn test_aabb_set_from_points() {
    let mut aabb = AABB::default();
    aabb.set(&[
        Vec3::new(1.0, -2.0, 3.0),
        Vec3::new(-4.0, 5.0, 0.5),
        Vec3::new(2.0, 0.0, -6.0),
    ]);

    assert_eq!(aabb.min, Vec3::new(-4.0, -2.0, -6.0));
    assert_eq!(aabb.max, Vec3::new(2.0, 5.0, 3.0));
}

#[test]
fn test_aabb_set_empty_yields_inverted_infinite_box() {
    let mut aabb = unit_box();
    aabb.set(&[]);

    assert_eq!(aabb.min, Vec3::splat(f32::INFINITY));
    assert_eq!(aabb.max, Vec3::splat(f32::NEG_INFINITY));
    assert!(aabb.is_empty());
    assert_eq!(aabb, AABB::empty());
}

#[test]
fn test_aabb_single_point() {
    let p = Vec3::new(3.0, 4.0, 5.0);
    let aabb = AABB::from_points(&[p]);
    assert_eq!(aabb.min, p);
    assert_eq!(aabb.max, p);
}

#[test]
#[serial]
fn test_aabb_try_from_points_rejects_empty() {
    let capture = CaptureLogger::install();

    assert_eq!(AABB::try_from_points(&[]), Err(Error::EmptyBoundingBox));
    assert_eq!(capture.with_severity(LogSeverity::Error).len(), 1);

    reset_logger();
}

#[test]
fn test_aabb_try_from_points_accepts_points() {
    let aabb = AABB::try_from_points(&[Vec3::ZERO, Vec3::ONE]).unwrap();
    assert_eq!(aabb, unit_box());
}

// ============================================================================
// AABB::transform
// ============================================================================

#[test]
fn test_transform_identity_reproduces_box() {
    let src = AABB::new(Vec3::new(-1.0, 2.0, -3.0), Vec3::new(4.0, 5.0, 6.0));
    let mut dst = AABB::default();
    dst.transform(&src, &Mat4::IDENTITY);

    assert!(dst.min.abs_diff_eq(src.min, 1e-6));
    assert!(dst.max.abs_diff_eq(src.max, 1e-6));
}

#[test]
fn test_transform_translation_shifts_without_resizing() {
    let src = AABB::new(Vec3::new(-1.0, -1.0, -1.0), Vec3::new(1.0, 2.0, 3.0));
    let offset = Vec3::new(10.0, -20.0, 30.0);
    let dst = src.transformed(&Mat4::from_translation(offset));

    assert!(dst.min.abs_diff_eq(src.min + offset, 1e-5));
    assert!(dst.max.abs_diff_eq(src.max + offset, 1e-5));
    assert!((dst.max - dst.min).abs_diff_eq(src.max - src.min, 1e-5));
}

#[test]
fn test_transform_rotation_z_90() {
    // (x, y) → (-y, x)
    let src = AABB::new(Vec3::ZERO, Vec3::new(1.0, 2.0, 3.0));
    let dst = src.transformed(&Mat4::from_rotation_z(std::f32::consts::FRAC_PI_2));

    assert!(dst.min.abs_diff_eq(Vec3::new(-2.0, 0.0, 0.0), 1e-5));
    assert!(dst.max.abs_diff_eq(Vec3::new(0.0, 1.0, 3.0), 1e-5));
}

#[test]
fn test_transform_negative_scale_swaps_bounds() {
    let src = AABB::new(Vec3::new(1.0, 1.0, 1.0), Vec3::new(2.0, 3.0, 4.0));
    let dst = src.transformed(&Mat4::from_scale(Vec3::new(-2.0, 1.0, 1.0)));

    assert!(dst.min.abs_diff_eq(Vec3::new(-4.0, 1.0, 1.0), 1e-6));
    assert!(dst.max.abs_diff_eq(Vec3::new(-2.0, 3.0, 4.0), 1e-6));
}

#[test]
fn test_transform_matches_corner_enumeration() {
    let src = AABB::new(Vec3::new(-1.0, 0.5, -2.0), Vec3::new(3.0, 1.5, 0.0));
    let m = Mat4::from_scale_rotation_translation(
        Vec3::new(2.0, 0.5, 1.5),
        Quat::from_euler(glam::EulerRot::XYZ, 0.3, -1.1, 2.0),
        Vec3::new(5.0, -7.0, 1.0),
    );

    let corners: Vec<Vec3> = (0..8)
        .map(|i| Vec3::new(
            if i & 1 == 0 { src.min.x } else { src.max.x },
            if i & 2 == 0 { src.min.y } else { src.max.y },
            if i & 4 == 0 { src.min.z } else { src.max.z },
        ))
        .map(|c| m.transform_point3(c))
        .collect();
    let expected = AABB::from_points(&corners);

    let dst = src.transformed(&m);
    assert!(dst.min.abs_diff_eq(expected.min, 1e-4));
    assert!(dst.max.abs_diff_eq(expected.max, 1e-4));
}

#[test]
fn test_transform_in_place_through_transformed() {
    let mut aabb = unit_box();
    aabb = aabb.transformed(&Mat4::from_translation(Vec3::X));
    assert_eq!(aabb, AABB::new(Vec3::new(1.0, 0.0, 0.0), Vec3::new(2.0, 1.0, 1.0)));
}

// ============================================================================
// AABB::intersect
// ============================================================================

#[test]
fn test_intersect_overlapping() {
    let a = unit_box();
    let b = AABB::new(Vec3::splat(0.5), Vec3::splat(1.5));
    assert!(AABB::intersect(&a, &b));
    assert!(a.intersects(&b));
}

#[test]
fn test_intersect_is_symmetric() {
    let boxes = [
        unit_box(),
        AABB::new(Vec3::splat(0.5), Vec3::splat(1.5)),
        AABB::new(Vec3::new(2.0, 0.0, 0.0), Vec3::new(3.0, 1.0, 1.0)),
        AABB::new(Vec3::new(1.0, 1.0, 1.0), Vec3::new(2.0, 2.0, 2.0)),
        AABB::new(Vec3::splat(-10.0), Vec3::splat(10.0)),
        AABB::empty(),
    ];

    for a in &boxes {
        for b in &boxes {
            assert_eq!(AABB::intersect(a, b), AABB::intersect(b, a), "{:?} vs {:?}", a, b);
        }
    }
}

#[test]
fn test_intersect_touching_counts() {
    let a = unit_box();
    // Shared face
    let face = AABB::new(Vec3::new(1.0, 0.0, 0.0), Vec3::new(2.0, 1.0, 1.0));
    // Shared edge
    let edge = AABB::new(Vec3::new(1.0, 1.0, 0.0), Vec3::new(2.0, 2.0, 1.0));
    // Shared corner
    let corner = AABB::new(Vec3::ONE, Vec3::splat(2.0));

    assert!(AABB::intersect(&a, &face));
    assert!(AABB::intersect(&a, &edge));
    assert!(AABB::intersect(&a, &corner));
}

#[test]
fn test_intersect_separated_on_single_axis() {
    let a = unit_box();
    assert!(!AABB::intersect(&a, &AABB::new(Vec3::new(1.1, 0.0, 0.0), Vec3::new(2.0, 1.0, 1.0))));
    assert!(!AABB::intersect(&a, &AABB::new(Vec3::new(0.0, -2.0, 0.0), Vec3::new(1.0, -0.1, 1.0))));
    assert!(!AABB::intersect(&a, &AABB::new(Vec3::new(0.0, 0.0, 5.0), Vec3::new(1.0, 1.0, 6.0))));
}

#[test]
fn test_intersect_empty_never_overlaps() {
    assert!(!AABB::intersect(&AABB::empty(), &AABB::new(Vec3::splat(-1e30), Vec3::splat(1e30))));
}

// ============================================================================
// Union / contains / helpers
// ============================================================================

#[test]
fn test_union_encloses_both() {
    let a = unit_box();
    let b = AABB::new(Vec3::new(-1.0, 0.5, 2.0), Vec3::new(0.5, 3.0, 4.0));
    let u = a.union(&b);

    assert_eq!(u.min, Vec3::new(-1.0, 0.0, 0.0));
    assert_eq!(u.max, Vec3::new(1.0, 3.0, 4.0));
    assert!(u.contains(&a));
    assert!(u.contains(&b));
}

#[test]
fn test_union_with_empty_is_identity() {
    let a = AABB::new(Vec3::new(-1.0, 2.0, 3.0), Vec3::new(4.0, 5.0, 6.0));
    assert_eq!(a.union(&AABB::empty()), a);
    assert_eq!(AABB::empty().union(&a), a);
}

#[test]
fn test_contains() {
    let outer = AABB::new(Vec3::splat(-2.0), Vec3::splat(2.0));
    assert!(outer.contains(&unit_box()));
    assert!(outer.contains(&outer));
    assert!(!unit_box().contains(&outer));
}

#[test]
fn test_center_and_extents() {
    let aabb = AABB::new(Vec3::new(-1.0, 0.0, 2.0), Vec3::new(3.0, 4.0, 2.0));
    assert_eq!(aabb.center(), Vec3::new(1.0, 2.0, 2.0));
    assert_eq!(aabb.extents(), Vec3::new(2.0, 2.0, 0.0));
}

#[test]
fn test_aabb_pod_layout() {
    assert_eq!(std::mem::size_of::<AABB>(), 24);
    let boxes = [AABB::new(Vec3::new(1.0, 2.0, 3.0), Vec3::new(4.0, 5.0, 6.0))];
    let floats: &[f32] = bytemuck::cast_slice(&boxes);
    assert_eq!(floats, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
}
