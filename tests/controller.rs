//! Camera controller behaviour through the public input API.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use vao_demos::camera::KeyResponse;
use vao_demos::input::ButtonSet;
use vao_demos::math::Vec3;
use vao_demos::mesh::icosahedron;
use vao_demos::{CameraController, CameraState, InputEvent, InputProcessor, KeyAction, MouseButton};

const EPS: f32 = 1e-4;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPS
}

/// Drag with `button` from `start`, visiting each point in `path`.
fn drag(
    input: &mut InputProcessor,
    c: &mut CameraController,
    button: MouseButton,
    start: (f64, f64),
    path: &[(f64, f64)],
) {
    let _ = input.handle_event(InputEvent::CursorMoved { x: start.0, y: start.1 }, c);
    let _ = input.handle_event(InputEvent::MouseButton { button, pressed: true }, c);
    for &(x, y) in path {
        assert!(input.handle_event(InputEvent::CursorMoved { x, y }, c));
    }
    let _ = input.handle_event(InputEvent::MouseButton { button, pressed: false }, c);
}

/// A random walk from `start` that ends at `start + (dx, dy)`.
fn chunked_path(rng: &mut StdRng, start: (i32, i32), dx: i32, dy: i32) -> Vec<(f64, f64)> {
    let steps = rng.random_range(1..12);
    let mut path: Vec<(f64, f64)> = (0..steps)
        .map(|_| {
            (
                f64::from(start.0 + rng.random_range(-40..40)),
                f64::from(start.1 + rng.random_range(-40..40)),
            )
        })
        .collect();
    path.push((f64::from(start.0 + dx), f64::from(start.1 + dy)));
    path
}

#[test]
fn rotation_is_additive_over_any_chunking() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..50 {
        let dx = rng.random_range(-200..200);
        let dy = rng.random_range(-200..200);
        let path = chunked_path(&mut rng, (300, 200), dx, dy);

        let mut input = InputProcessor::new();
        let mut c = CameraController::default();
        drag(&mut input, &mut c, MouseButton::Left, (300.0, 200.0), &path);

        assert!(approx(c.state().yaw_deg, 0.5 * dx as f32), "yaw for dx {dx}");
        assert!(approx(c.state().pitch_deg, 0.5 * dy as f32), "pitch for dy {dy}");
        assert!(!c.drag().rotating);
    }
}

#[test]
fn pan_inverts_y() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..20 {
        let dx = rng.random_range(-100..100);
        let dy = rng.random_range(-100..100);
        let mut input = InputProcessor::new();
        let mut c = CameraController::default();
        drag(
            &mut input,
            &mut c,
            MouseButton::Right,
            (50.0, 50.0),
            &[(f64::from(50 + dx), f64::from(50 + dy))],
        );
        let pan = c.state().pan_offset;
        assert!(approx(pan.x, 0.01 * dx as f32));
        assert!(approx(pan.y, -0.01 * dy as f32));
        assert_eq!(pan.z, 0.0);
        assert_eq!(c.state().yaw_deg, 0.0);
    }
}

#[test]
fn space_always_resets_to_zero() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut c = CameraController::default();
    for _ in 0..10 {
        c.on_pointer_down(MouseButton::Left, 0, 0);
        let _ = c.on_pointer_move(
            rng.random_range(-500..500),
            rng.random_range(-500..500),
            ButtonSet::only(MouseButton::Left),
        );
        c.on_pointer_up(MouseButton::Left);
        let _ = c.on_scroll(rng.random_range(-3.0..3.0));

        assert_eq!(c.on_key(KeyAction::ResetCamera), KeyResponse::Redraw);
        assert_eq!(*c.state(), CameraState::default());
        assert_eq!(c.state().pan_offset, Vec3::ZERO);
    }
}

#[test]
fn transform_is_pure() {
    let mut c = CameraController::default();
    c.on_pointer_down(MouseButton::Left, 10, 10);
    let _ = c.on_pointer_move(37, -4, ButtonSet::only(MouseButton::Left));
    let a = c.compute_transform();
    let b = c.compute_transform();
    assert_eq!(a.to_cols_array_2d(), b.to_cols_array_2d());
}

#[test]
fn drag_scenario() {
    let mut input = InputProcessor::new();
    let mut c = CameraController::default();
    drag(&mut input, &mut c, MouseButton::Left, (100.0, 100.0), &[(110.0, 115.0)]);
    assert_eq!(c.state().yaw_deg, 5.0);
    assert_eq!(c.state().pitch_deg, 7.5);
}

#[test]
fn horizontal_scroll_zooms_and_vertical_does_not() {
    let mut input = InputProcessor::new();
    let mut c = CameraController::default();
    let scroll = |h: f32, v: f32| InputEvent::Scroll {
        horizontal: h,
        vertical: v,
    };

    assert!(input.handle_event(scroll(1.0, 0.0), &mut c));
    assert!(approx(c.state().zoom_delta, 0.1));
    assert!(input.handle_event(scroll(1.0, 0.0), &mut c));
    assert!(approx(c.state().zoom_delta, 0.2));

    // Vertical wheel motion is ignored for zoom.
    let _ = input.handle_event(scroll(0.0, 5.0), &mut c);
    assert!(approx(c.state().zoom_delta, 0.2));
}

#[test]
fn both_buttons_held_moves_nothing() {
    let mut input = InputProcessor::new();
    let mut c = CameraController::default();
    let _ = input.handle_event(InputEvent::CursorMoved { x: 0.0, y: 0.0 }, &mut c);
    for button in [MouseButton::Left, MouseButton::Right] {
        let _ = input.handle_event(InputEvent::MouseButton { button, pressed: true }, &mut c);
    }
    assert!(!input.handle_event(InputEvent::CursorMoved { x: 40.0, y: 40.0 }, &mut c));
    assert_eq!(*c.state(), CameraState::default());
}

#[test]
fn icosahedron_tables() {
    let data = icosahedron::mesh();
    assert_eq!(icosahedron::POSITIONS.len(), 12);
    assert_eq!(icosahedron::COLOURS.len(), 12);
    assert_eq!(icosahedron::INDICES.len(), 60);
    assert!(icosahedron::INDICES.iter().all(|&i| i <= 11));
    assert_eq!(data.element_count(), 60);
}

#[test]
fn transform_applies_pitch_before_yaw() {
    let mut input = InputProcessor::new();
    let mut c = CameraController::default();
    drag(&mut input, &mut c, MouseButton::Left, (0.0, 0.0), &[(70.0, 50.0)]);
    drag(&mut input, &mut c, MouseButton::Right, (0.0, 0.0), &[(30.0, -20.0)]);
    let _ = c.on_scroll(1.0);
    let state = *c.state();
    assert_eq!((state.yaw_deg, state.pitch_deg), (35.0, 25.0));

    let mut expected = glam::Mat4::from_rotation_y(state.yaw_deg.to_radians())
        * glam::Mat4::from_rotation_x(state.pitch_deg.to_radians());
    expected.w_axis = glam::Vec4::new(
        state.pan_offset.x,
        state.pan_offset.y,
        state.pan_offset.z + state.zoom_delta,
        1.0,
    );

    let ours = c.compute_transform().to_cols_array_2d();
    let theirs = expected.to_cols_array_2d();
    for (col_ours, col_theirs) in ours.iter().zip(&theirs) {
        for (a, b) in col_ours.iter().zip(col_theirs) {
            assert!(approx(*a, *b), "{ours:?} vs {theirs:?}");
        }
    }
}

#[test]
fn angles_are_not_wrapped() {
    let mut input = InputProcessor::new();
    let mut c = CameraController::default();
    let path: Vec<(f64, f64)> = (1..=10).map(|i| (f64::from(i * 100), f64::from(i * 90))).collect();
    drag(&mut input, &mut c, MouseButton::Left, (0.0, 0.0), &path);
    assert_eq!(c.state().yaw_deg, 500.0);
    assert_eq!(c.state().pitch_deg, 450.0);
}
