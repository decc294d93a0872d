use crate::*;

use alloc::string::String;
use alloc::vec::Vec;
use overlay::{DrawerAnchor, DrawerOptions, Locale, NormalizedOffsets, Offset, PlacementState};
use overlay::{Placement, RawOffset};

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

#[test]
fn easing_curves_fix_endpoints() {
    for e in [Easing::Linear, Easing::SmoothStep, Easing::EaseInOutCubic] {
        assert!(approx(e.sample(0.0), 0.0), "{e:?}");
        assert!(approx(e.sample(1.0), 1.0), "{e:?}");
        assert!(approx(e.sample(0.5), 0.5), "{e:?}");
    }
    assert!(Easing::EaseInOutCubic.sample(0.25) < Easing::Linear.sample(0.25));
}

#[test]
fn tween_samples_and_finishes() {
    let t = Tween::new(0.0, 1.0, 100, 200, Easing::Linear);
    assert_eq!(t.sample(0), 0.0);
    assert!(approx(t.sample(200), 0.5));
    assert!(!t.is_done(299));
    assert!(t.is_done(300));
    assert_eq!(t.sample(10_000), 1.0);

    let zero = Tween::new(1.0, 0.0, 0, 0, Easing::Linear);
    assert_eq!(zero.duration_ms, 1);
}

#[test]
fn retarget_reverses_from_current_progress() {
    let mut t = Tween::new(0.0, 1.0, 0, 400, Easing::Linear);
    t.retarget(200, 0.0, 400);
    assert!(approx(t.from, 0.5));
    assert_eq!(t.start_ms, 200);
    assert_eq!(t.duration_ms, 200);
    assert!(approx(t.sample(300), 0.25));
    assert!(t.is_done(400));
}

#[test]
fn instant_transition_jumps() {
    let mut p = PanelTransition::instant();
    p.set_visible(true, 50);
    assert_eq!(p.progress(50), 1.0);
    assert!(!p.is_running(50));
    p.set_visible(false, 60);
    assert_eq!(p.progress(60), 0.0);
}

#[test]
fn controller_runs_open_close_cycle() {
    let mut c = DrawerController::new(DrawerOptions::new(), InlineStyle::new());
    c.mount(0);
    c.set_open(true, 0);
    assert_eq!(c.drawer().host().get("overflow"), Some("hidden"));
    assert!(!c.drawer().is_visible());
    assert!(c.needs_frame(0));
    assert_eq!(c.next_wakeup_ms(0), Some(0));

    assert!(c.tick(16));
    assert!(c.drawer().is_visible());
    assert_eq!(c.progress(16), 0.0);
    assert!(approx(c.progress(266), 0.5));
    assert!(c.is_animating(266));

    assert!(!c.tick(516));
    assert!(approx(c.progress(516), 1.0));
    assert!(!c.needs_frame(516));
    assert_eq!(c.next_wakeup_ms(516), None);

    c.set_open(false, 600);
    assert_eq!(c.drawer().host().get("overflow"), None);
    assert!(c.is_animating(600));
    assert!(c.progress(850) < 1.0);

    assert!(!c.tick(1_099));
    assert!(c.drawer().is_visible());
    assert!(c.tick(1_100));
    assert!(!c.drawer().is_visible());
    assert!(approx(c.progress(1_100), 0.0));
    assert_eq!(c.next_wakeup_ms(1_100), None);
    assert_eq!(c.render(&Locale::default()), overlay::RenderPlan::Nothing);
}

#[test]
fn controller_reverses_when_reopened_mid_close() {
    let mut c = DrawerController::new(DrawerOptions::new(), InlineStyle::new());
    c.mount(0);
    c.set_open(true, 0);
    c.tick(16);

    c.set_open(false, 266);
    let at_close = c.progress(266);
    assert!(approx(at_close, 0.5));

    c.set_open(true, 300);
    let at_reopen = c.progress(300);
    assert!(at_reopen > 0.0 && at_reopen < at_close);

    let mut last = at_reopen;
    for now_ms in (300..=700).step_by(16) {
        c.tick(now_ms);
        assert!(c.drawer().is_visible());
        let p = c.progress(now_ms);
        assert!(p + 1e-6 >= last, "t={now_ms}: {p} < {last}");
        last = p;
    }
    assert!(approx(last, 1.0));
    assert_eq!(c.drawer().next_deadline_ms(), None);
}

#[test]
fn controller_close_before_first_frame_stays_closed() {
    let mut c = DrawerController::new(DrawerOptions::new(), InlineStyle::new());
    c.mount(0);
    c.set_open(true, 0);
    c.set_open(false, 5);
    assert!(!c.tick(16));
    assert_eq!(c.progress(16), 0.0);
    assert_eq!(c.next_wakeup_ms(16), None);
    assert_eq!(c.drawer().host().overflow_writes(), ["hidden", ""]);
}

#[test]
fn controller_remount_slides_in_from_closed() {
    let mut c = DrawerController::new(DrawerOptions::new(), InlineStyle::new());
    c.mount(0);
    c.set_open(true, 0);
    c.tick(16);
    c.tick(516);
    c.set_open(false, 600);

    c.unmount();
    assert_eq!(c.progress(700), 0.0);
    assert!(!c.needs_frame(700));
    assert_eq!(c.next_wakeup_ms(700), None);

    c.set_open(true, 700);
    c.mount(700);
    assert_eq!(c.progress(700), 0.0);
    assert!(c.tick(716));
    assert!(c.is_animating(800));
    assert!(approx(c.progress(1_216), 1.0));
}

#[test]
fn controller_without_animation_jumps() {
    let opts = DrawerOptions::new().with_animate(false);
    let mut c = DrawerController::new(opts, InlineStyle::new());
    c.mount(0);
    c.set_open(true, 0);
    c.tick(16);
    assert_eq!(c.progress(16), 1.0);
    assert!(!c.is_animating(16));
    // Content still waits for the close delay.
    c.set_open(false, 20);
    assert_eq!(c.progress(20), 0.0);
    assert_eq!(c.next_wakeup_ms(20), Some(520));
}

#[test]
fn inline_style_restores_previous_overflow() {
    let mut host = InlineStyle::new();
    host.set("overflow", "scroll");
    host.set("color", "red");

    let mut c = DrawerController::new(DrawerOptions::new(), &mut host);
    c.mount(0);
    c.set_open(true, 0);
    c.tick(16);
    c.set_open(false, 100);
    c.tick(600);
    c.unmount();
    drop(c);

    assert_eq!(host.get("overflow"), Some("scroll"));
    assert_eq!(host.overflow_writes(), ["hidden", "scroll"]);
    assert_eq!(host.scroll_resets(), 1);
    assert_eq!(host.to_css_text(), "color: red; overflow: scroll;");
}

#[test]
fn inline_style_empty_value_removes() {
    let mut s = InlineStyle::new();
    s.set("top", "4px");
    assert!(!s.is_empty());
    s.set("top", "");
    assert!(s.is_empty());
    assert_eq!(s.to_css_text(), String::new());
    assert_eq!(s.remove("top"), None);
}

#[test]
fn popper_and_arrow_styles_use_top_left_px() {
    let offsets = PlacementState {
        placement: Placement::Bottom,
        popper_offsets: RawOffset::new(12.6, -0.5),
        arrow: Some(RawOffset::new(30.2, 0.0)),
    }
    .normalize();
    assert_eq!(offsets.popper, Offset::new(-1, 12));

    let popper: Vec<(&str, String)> = popper_style(&offsets).into_iter().collect();
    assert_eq!(
        popper,
        [("top", String::from("-1px")), ("left", String::from("12px"))]
    );

    let mut style = InlineStyle::new();
    apply_popper_style(&mut style, &offsets);
    assert_eq!(style.to_css_text(), "left: 12px; top: -1px;");

    let mut arrow = InlineStyle::new();
    apply_arrow_style(&mut arrow, &NormalizedOffsets::default());
    assert_eq!(arrow.get("top"), Some("0px"));
    assert_eq!(arrow_style(&offsets)[1].1, "30px");
}

#[test]
fn panel_transform_slides_from_anchor() {
    assert_eq!(panel_transform(DrawerAnchor::Right, 0.0), "translateX(100.0%)");
    assert_eq!(panel_transform(DrawerAnchor::Left, 0.5), "translateX(-50.0%)");
    assert_eq!(panel_transform(DrawerAnchor::Top, 0.0), "translateY(-100.0%)");
    assert_eq!(panel_transform(DrawerAnchor::Bottom, 0.75), "translateY(25.0%)");
    assert_eq!(panel_transform(DrawerAnchor::Right, 1.0), "none");
    assert_eq!(px(-3), "-3px");
}
