use glam::Vec3;
use super::*;

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_point_light_defaults() {
    let light = RenderLight::point(Vec3::new(1.0, 2.0, 3.0), 8.0, Vec3::new(1.0, 0.5, 0.25));

    assert_eq!(light.origin, Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(light.radius, 8.0);
    assert_eq!(light.flags, LightFlags::POINT);
    assert_eq!(light.stencil_refs, [AFFECTS_EVERYTHING_STENCIL_REF, INACTIVE_VOLUME_STENCIL_REF]);
    assert!(!light.is_projector());
}

#[test]
fn test_projector_direction_is_normalized() {
    let light = RenderLight::projector(Vec3::ZERO, 10.0, Vec3::ONE, Vec3::new(0.0, 0.0, -4.0), 30.0);

    assert!(light.is_projector());
    assert!((light.projector_direction() - Vec3::NEG_Z).length() < 1e-5);
    assert_eq!(light.frustum_angle, 30.0);
}

#[test]
fn test_projector_with_degenerate_direction() {
    let light = RenderLight::projector(Vec3::ZERO, 10.0, Vec3::ONE, Vec3::ZERO, 30.0);
    assert!((light.projector_direction().length() - 1.0).abs() < 1e-5);
}

#[test]
fn test_builders() {
    let light = RenderLight::point(Vec3::ZERO, 1.0, Vec3::ONE)
        .with_flags(LightFlags::AREA_LIGHT)
        .with_bulb_size(0.5)
        .with_stencil_refs(3, 4);

    assert_eq!(light.flags, LightFlags::AREA_LIGHT);
    assert_eq!(light.attenuation_bulb_size, 0.5);
    assert_eq!(light.stencil_refs, [3, 4]);
}

// ============================================================================
// Flags
// ============================================================================

#[test]
fn test_light_volume_candidate() {
    let base = RenderLight::point(Vec3::ZERO, 1.0, Vec3::ONE);
    assert!(base.is_light_volume_candidate());

    for excluded in [
        LightFlags::DISABLED,
        LightFlags::FAKE,
        LightFlags::AMBIENT,
        LightFlags::DEFERRED_CUBEMAPS,
    ] {
        let light = base.clone().with_flags(LightFlags::POINT | excluded);
        assert!(!light.is_light_volume_candidate(), "{:?} should be excluded", excluded);
    }

    let shadowed = base.with_flags(LightFlags::POINT | LightFlags::CAST_SHADOW_MAPS);
    assert!(shadowed.is_light_volume_candidate());
}

// ============================================================================
// Clip volumes
// ============================================================================

#[test]
fn test_affects_everything_sentinel() {
    let light = RenderLight::point(Vec3::ZERO, 1.0, Vec3::ONE);
    assert!(light.affects_clip_volume(0));
    assert!(light.affects_clip_volume(17));
}

#[test]
fn test_affects_either_stencil_ref() {
    let light = RenderLight::point(Vec3::ZERO, 1.0, Vec3::ONE).with_stencil_refs(3, 9);
    assert!(light.affects_clip_volume(3));
    assert!(light.affects_clip_volume(9));
    assert!(!light.affects_clip_volume(4));
}

// ============================================================================
// Intensity
// ============================================================================

#[test]
fn test_intensity_scale_point_light() {
    let light = RenderLight::point(Vec3::ZERO, 1.0, Vec3::ONE).with_bulb_size(0.5);
    let (scale, bulb) = light.intensity_scale(0.001);
    assert!((scale - 9.0).abs() < 1e-5); // (1 + 1/0.5)^2
    assert_eq!(bulb, 0.5);
}

#[test]
fn test_intensity_scale_clamps_bulb() {
    let light = RenderLight::point(Vec3::ZERO, 1.0, Vec3::ONE).with_bulb_size(0.0);
    let (scale, bulb) = light.intensity_scale(0.001);
    assert_eq!(bulb, 0.001);
    assert!((scale - 1001.0 * 1001.0).abs() / (1001.0 * 1001.0) < 1e-5);
}

#[test]
fn test_intensity_scale_area_and_ambient_unscaled() {
    for flags in [LightFlags::AREA_LIGHT, LightFlags::AMBIENT | LightFlags::POINT] {
        let light = RenderLight::point(Vec3::ZERO, 1.0, Vec3::ONE)
            .with_flags(flags)
            .with_bulb_size(0.0);
        assert_eq!(light.intensity_scale(0.001), (1.0, 0.0));
    }
}
