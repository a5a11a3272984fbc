use glam::{Mat4, Vec3};
use super::*;

#[test]
fn test_new_derives_frustum() {
    let projection = Mat4::perspective_rh(1.0, 1.5, 0.1, 50.0);
    let view = Mat4::look_at_rh(Vec3::new(0.0, -10.0, 2.0), Vec3::ZERO, Vec3::Z);
    let camera = Camera::new(Vec3::new(0.0, -10.0, 2.0), view, projection);

    let expected = Frustum::from_view_projection(&(projection * view));
    assert_eq!(*camera.frustum(), expected);
    assert_eq!(camera.view_projection_matrix(), projection * view);
}

#[test]
fn test_look_at_sees_target() {
    let camera = Camera::look_at(
        Vec3::new(0.0, -20.0, 5.0),
        Vec3::ZERO,
        std::f32::consts::FRAC_PI_3,
        16.0 / 9.0,
        0.1,
        500.0,
    );

    assert_eq!(camera.position(), Vec3::new(0.0, -20.0, 5.0));
    assert!(camera.frustum().contains_point(Vec3::ZERO));
    assert!(!camera.frustum().contains_point(Vec3::new(0.0, -40.0, 5.0)));
}

#[test]
fn test_default_camera() {
    let camera = Camera::default();
    assert_eq!(camera.position(), Vec3::ZERO);
    assert_eq!(*camera.view_matrix(), Mat4::IDENTITY);
    assert_eq!(*camera.projection_matrix(), Mat4::IDENTITY);
}

#[test]
fn test_clone_is_snapshot() {
    let camera = Camera::look_at(Vec3::ONE, Vec3::ZERO, 1.0, 1.0, 0.1, 10.0);
    let snapshot = camera.clone();
    assert_eq!(snapshot.position(), camera.position());
    assert_eq!(*snapshot.frustum(), *camera.frustum());
}
