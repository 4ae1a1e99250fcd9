use crate::*;

use carousel::{CarouselOptions, ManualDirection};

/// 4 cards x 200 px => copy width 800, track 2400, seeded offset 800.
fn controller() -> Controller {
    let mut c = Controller::new(CarouselOptions::new(4, |_| 200));
    c.on_viewport_width(1200);
    c
}

#[test]
fn auto_advances_one_step_per_frame() {
    let mut c = controller();
    assert_eq!(c.tick(0), 801);
    assert_eq!(c.tick(16), 802);
    assert_eq!(c.tick(32), 803);
}

#[test]
fn pointer_hover_gates_auto_advance() {
    let mut c = controller();
    c.on_pointer_enter();
    assert_eq!(c.tick(0), 800);
    assert_eq!(c.tick(16), 800);
    c.on_pointer_leave();
    assert_eq!(c.tick(32), 801);
}

#[test]
fn manual_scroll_left_precorrects_before_the_tween() {
    let mut c = controller();
    c.carousel_mut().set_offset(3);

    let target = c.scroll(ManualDirection::Left, 0);
    // The instantaneous pre-correction fires first; the animated scroll
    // starts from inside the middle copy.
    let start = c.carousel().offset();
    assert_eq!(start, 803);
    assert!(start >= c.carousel().copy_width());
    // Wide viewport: the travel is 30% of 1200 px.
    assert_eq!(target, 803 - 360);
    assert!(c.is_animating());
}

#[test]
fn manual_scroll_right_precorrects_at_the_second_boundary() {
    let mut c = controller();
    c.carousel_mut().set_offset(1600);

    let target = c.scroll(ManualDirection::Right, 0);
    assert_eq!(c.carousel().offset(), 800);
    assert_eq!(target, 1160);
}

#[test]
fn tween_drives_the_offset_monotonically_to_target() {
    let mut c = controller();
    let target = c.scroll(ManualDirection::Right, 0);
    assert_eq!(target, 1160);

    let mut last = c.carousel().offset();
    for now_ms in [16u64, 80, 160, 240, 320, 400, 480] {
        let off = c.tick(now_ms);
        assert!(off >= last);
        assert!(off <= target);
        last = off;
    }
    assert_eq!(c.carousel().offset(), target);
    assert!(!c.is_animating());

    // Auto-advance resumes on the next frame.
    assert_eq!(c.tick(496), target + 1);
}

#[test]
fn completed_tween_is_wrap_corrected() {
    let mut c = controller();
    // Park just below the boundary so the manual travel crosses it.
    c.carousel_mut().set_offset(1500);
    let target = c.scroll(ManualDirection::Right, 0);
    assert_eq!(target, 1860);

    let off = c.tick(480);
    // 1860 is inside the third copy; completion snaps back by one copy.
    assert_eq!(off, 1060);
    assert!(!c.is_animating());
}

#[test]
fn second_click_retargets_the_running_tween() {
    let mut c = controller();
    let first = c.scroll(ManualDirection::Right, 0);
    c.tick(100);
    let mid = c.carousel().offset();
    assert!(mid > 800 && mid < first);

    let second = c.scroll(ManualDirection::Right, 100);
    assert_eq!(second, mid + 360);
    assert!(c.is_animating());

    c.tick(100 + 480);
    assert_eq!(c.carousel().offset(), second);
}

#[test]
fn second_click_midflight_keeps_the_precorrected_start() {
    let mut c = controller();
    c.carousel_mut().set_offset(100);

    // First left click: instant +copy_width jump, then a tween 900 -> 540.
    let first = c.scroll(ManualDirection::Left, 0);
    assert_eq!(c.carousel().offset(), 900);
    assert_eq!(first, 540);

    // Sample mid-flight; the offset has descended into the first copy.
    c.tick(240);
    assert!(c.carousel().offset() < c.carousel().copy_width());

    // Second left click: the pre-correction fires again, and the replacement
    // tween must start from the corrected offset, not the stale sample.
    let second = c.scroll(ManualDirection::Left, 240);
    let start = c.carousel().offset();
    assert!(start >= c.carousel().copy_width());
    assert_eq!(second, start - 360);

    // The animation travels leftward (downward) from the corrected start.
    let mut last = start;
    for now_ms in [256u64, 360, 480, 600, 720] {
        let off = c.tick(now_ms);
        assert!(off <= last);
        assert!(off >= second);
        last = off;
    }
    assert_eq!(c.carousel().offset(), second);
    assert!(!c.is_animating());
}

#[test]
fn cancel_animation_returns_control_to_the_loop() {
    let mut c = controller();
    c.scroll(ManualDirection::Right, 0);
    c.tick(100);
    let parked = c.carousel().offset();

    c.cancel_animation();
    assert!(!c.is_animating());
    assert_eq!(c.tick(116), parked + 1);
}

#[test]
fn frame_task_stops_after_cancellation() {
    let (task, handle) = FrameTask::new();
    let mut c = controller();

    assert_eq!(task.step(&mut c, 0), Some(801));
    assert_eq!(task.step(&mut c, 16), Some(802));
    assert!(!handle.is_cancelled());

    handle.cancel();
    assert!(task.is_cancelled());
    assert_eq!(task.step(&mut c, 32), None);
    // The offset no longer moves once the task is revoked.
    assert_eq!(c.carousel().offset(), 802);
}

#[test]
fn easing_curves_hit_both_endpoints() {
    for easing in [Easing::Linear, Easing::SmoothStep, Easing::EaseOutCubic] {
        assert_eq!(easing.sample(0.0), 0.0);
        assert_eq!(easing.sample(1.0), 1.0);
    }
}

#[test]
fn tween_samples_exactly_at_endpoints() {
    let t = Tween::new(800, 1160, 0, 480, Easing::EaseOutCubic);
    assert_eq!(t.sample(0), 800);
    assert_eq!(t.sample(480), 1160);
    assert_eq!(t.sample(10_000), 1160);
    assert!(!t.is_done(479));
    assert!(t.is_done(480));
}

#[test]
fn tween_interpolates_downward() {
    let t = Tween::new(1160, 800, 0, 480, Easing::Linear);
    assert_eq!(t.sample(0), 1160);
    assert_eq!(t.sample(240), 980);
    assert_eq!(t.sample(480), 800);
}
