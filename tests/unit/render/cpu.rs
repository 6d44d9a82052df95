use super::*;
use crate::foundation::core::Canvas;

fn canvas() -> Canvas {
    Canvas {
        width: 64,
        height: 64,
    }
}

fn opaque_style() -> SceneStyle {
    SceneStyle {
        background_rgba8: [10, 10, 10, 255],
        circle_rgba8: [0, 0, 255, 255],
        arm_rgba8: [0, 255, 0, 255],
        trail_rgba8: [255, 0, 0, 255],
        line_width_px: 3.0,
    }
}

#[test]
fn empty_scene_is_background_only() {
    let mut sink = CpuSink::new(opaque_style()).unwrap();
    let frame = sink.draw(&FrameScene::empty(canvas())).unwrap();
    assert_eq!(frame.width, 64);
    assert_eq!(frame.height, 64);
    assert_eq!(frame.data.len(), 64 * 64 * 4);
    assert!(frame.premultiplied);
    assert_eq!(frame.pixel(0, 0), Some([10, 10, 10, 255]));
    assert_eq!(frame.pixel(63, 63), Some([10, 10, 10, 255]));
    assert_eq!(frame.pixel(64, 0), None);
}

#[test]
fn trail_is_painted_over_background() {
    let mut scene = FrameScene::empty(canvas());
    scene.trail = vec![Point::new(4.0, 32.0), Point::new(60.0, 32.0)];
    let frame = CpuSink::new(opaque_style()).unwrap().draw(&scene).unwrap();

    let on_trail = frame.pixel(32, 32).unwrap();
    assert!(on_trail[0] > 128, "trail pixel {on_trail:?}");
    assert_eq!(frame.pixel(32, 4), Some([10, 10, 10, 255]));
}

#[test]
fn circles_and_arms_are_painted() {
    let mut scene = FrameScene::empty(canvas());
    scene.circles = vec![crate::render::scene::Circle {
        center: Point::new(32.0, 32.0),
        radius: 20.0,
    }];
    scene.arms = vec![crate::render::scene::Segment {
        from: Point::new(32.0, 32.0),
        to: Point::new(32.0, 12.0),
    }];
    let frame = CpuSink::new(opaque_style()).unwrap().draw(&scene).unwrap();

    let on_circle = frame.pixel(52, 32).unwrap();
    assert!(on_circle[2] > 128, "circle pixel {on_circle:?}");
    let on_arm = frame.pixel(32, 22).unwrap();
    assert!(on_arm[1] > 128, "arm pixel {on_arm:?}");
    assert_eq!(frame.pixel(2, 2), Some([10, 10, 10, 255]));
}

#[test]
fn oversized_canvas_is_rejected() {
    let scene = FrameScene::empty(Canvas {
        width: 70_000,
        height: 10,
    });
    assert!(CpuSink::default().draw(&scene).is_err());
}

#[test]
fn invalid_line_width_is_rejected() {
    let style = SceneStyle {
        line_width_px: 0.0,
        ..SceneStyle::default()
    };
    assert!(CpuSink::new(style).is_err());
}
