use strata_geom::{Aabb, IVec3, Vec3};

fn approx_eq(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() <= eps
}

fn vec3_approx_eq(a: Vec3, b: Vec3, eps: f32) -> bool {
    approx_eq(a.x, b.x, eps) && approx_eq(a.y, b.y, eps) && approx_eq(a.z, b.z, eps)
}

#[test]
fn cross_of_basis_vectors() {
    let i = Vec3::new(1.0, 0.0, 0.0);
    let j = Vec3::new(0.0, 1.0, 0.0);
    let k = Vec3::new(0.0, 0.0, 1.0);
    assert!(vec3_approx_eq(i.cross(j), k, 1e-6));
    assert!(vec3_approx_eq(j.cross(k), i, 1e-6));
    assert!(vec3_approx_eq(k.cross(i), j, 1e-6));
}

#[test]
fn normalized_zero_stays_zero() {
    let n = Vec3::ZERO.normalized();
    assert!(vec3_approx_eq(n, Vec3::ZERO, 1e-6));
    let v = Vec3::new(3.0, 4.0, 0.0).normalized();
    assert!(vec3_approx_eq(v, Vec3::new(0.6, 0.8, 0.0), 1e-6));
}

#[test]
fn floor_to_voxel_rounds_toward_negative_infinity() {
    assert_eq!(Vec3::new(0.5, 1.99, 2.0).floor_to_voxel(), IVec3::new(0, 1, 2));
    assert_eq!(Vec3::new(-0.5, -1.0, -1.01).floor_to_voxel(), IVec3::new(-1, -1, -2));
}

#[test]
fn aabb_around_feet_spans_expected_voxels() {
    let b = Aabb::around_feet(Vec3::new(4.5, 10.0, 4.5), 0.3, 1.8);
    let (lo, hi) = b.voxel_span();
    assert_eq!(lo, IVec3::new(4, 10, 4));
    assert_eq!(hi, IVec3::new(4, 11, 4));
}
