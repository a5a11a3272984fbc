use super::*;
use crate::camera::{Camera, PassKind, RenderView};
use crate::config::LightVolumeSettings;
use crate::light::RenderLight;

#[derive(Debug, PartialEq)]
enum DrawCall {
    Sphere(Vec3, f32, Vec4),
    Line(Vec3, Vec3),
    Label(Vec3, String),
}

#[derive(Default)]
struct RecordingRenderer {
    calls: Vec<DrawCall>,
}

impl DebugRenderer for RecordingRenderer {
    fn draw_wire_sphere(&mut self, center: Vec3, radius: f32, color: Vec4) {
        self.calls.push(DrawCall::Sphere(center, radius, color));
    }

    fn draw_line(&mut self, from: Vec3, to: Vec3, _color: Vec4) {
        self.calls.push(DrawCall::Line(from, to));
    }

    fn draw_label(&mut self, position: Vec3, text: &str, _color: Vec4) {
        self.calls.push(DrawCall::Label(position, text.to_string()));
    }
}

fn scene_view() -> RenderView {
    let camera = Camera::look_at(
        Vec3::new(0.0, -20.0, 5.0),
        Vec3::ZERO,
        std::f32::consts::FRAC_PI_3,
        1.0,
        0.1,
        500.0,
    );
    let mut view = RenderView::new(camera);
    view.add_deferred_light(RenderLight::point(Vec3::new(5.0, 0.0, 0.0), 8.0, Vec3::ONE));
    view
}

/// Origin volume (lit, near), far volume (unlit), volume behind the camera
fn prepared_manager(view: &RenderView, debug: bool) -> LightVolumeManager {
    let settings = LightVolumeSettings { debug, ..LightVolumeSettings::default() };
    let mut manager = LightVolumeManager::new(settings);
    let pass = PassInfo::general(0, view);

    manager.clear(&pass);
    manager.register_volume(Vec3::ZERO, 10.0, 0).unwrap();
    manager.register_volume(Vec3::new(0.0, 100.0, 0.0), 4.0, 0).unwrap();
    manager.register_volume(Vec3::new(0.0, -60.0, 0.0), 4.0, 0).unwrap();
    manager.register_view_lights(&pass);
    manager.update(&pass);
    manager
}

#[test]
fn test_draw_debug_disabled_draws_nothing() {
    let view = scene_view();
    let manager = prepared_manager(&view, false);
    let mut renderer = RecordingRenderer::default();

    assert_eq!(manager.draw_debug(&PassInfo::general(0, &view), &mut renderer), 0);
    assert!(renderer.calls.is_empty());
}

#[test]
fn test_draw_debug_skips_other_passes() {
    let view = scene_view();
    let manager = prepared_manager(&view, true);
    let mut renderer = RecordingRenderer::default();

    let pass = PassInfo::new(PassKind::Recursive, 0, 0, &view).unwrap();
    assert_eq!(manager.draw_debug(&pass, &mut renderer), 0);
    assert!(renderer.calls.is_empty());
}

#[test]
fn test_draw_debug_draws_visible_volumes() {
    let view = scene_view();
    let manager = prepared_manager(&view, true);
    let mut renderer = RecordingRenderer::default();

    let drawn = manager.draw_debug(&PassInfo::general(0, &view), &mut renderer);

    assert_eq!(drawn, 2);
    let fill = 1.0 / MAX_LIGHTS_PER_VOLUME as f32;
    assert_eq!(
        renderer.calls,
        vec![
            DrawCall::Sphere(Vec3::ZERO, 10.0, EMPTY_COLOR.lerp(FULL_COLOR, fill)),
            DrawCall::Line(Vec3::ZERO, Vec3::new(5.0, 0.0, 0.0)),
            DrawCall::Label(Vec3::ZERO, "1".to_string()),
            // Far volume: no lights, beyond label distance
            DrawCall::Sphere(Vec3::new(0.0, 100.0, 0.0), 4.0, EMPTY_COLOR),
        ]
    );
}

#[test]
fn test_draw_debug_uses_pass_slot() {
    let view = scene_view();
    let manager = prepared_manager(&view, true);
    let mut renderer = RecordingRenderer::default();

    // Slot 1 was never updated
    manager.draw_debug(&PassInfo::general(1, &view), &mut renderer);
    assert!(renderer.calls.is_empty());
}
