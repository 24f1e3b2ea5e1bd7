use crate::*;

use std::sync::{Arc, Mutex};

use revealer::{
    Cascade, Direction, Geometry, Phase, RevealOptions, Trigger, Visibility,
};

fn in_view() -> Geometry {
    Geometry {
        height: 100,
        top: 0,
        scroll_y: 50,
        viewport_height: 500,
        document_hidden: false,
    }
}

fn options() -> RevealOptions {
    let cell = Arc::new(Mutex::new(Some(in_view())));
    RevealOptions::new()
        .with_in_effect(Direction::named("fadeIn"))
        .with_geometry(move || *cell.lock().unwrap())
}

#[test]
fn render_merges_machine_style_over_user_style() {
    let mut base = revealer::Style::default();
    base.extra.insert("color".into(), "red".into());
    let mut lc = Lifecycle::new(
        options().with_base_style(base).with_class_name(Some("hero")),
        Children::Text("hi".into()),
    );
    lc.mount(0);

    let frame = lc.render();
    assert_eq!(frame.style.visibility, Some(Visibility::Visible));
    assert!(frame.style.animation.is_some());
    assert_eq!(frame.style.extra.get("color").map(String::as_str), Some("red"));
    // No out direction and no legacy effect: only the user class applies.
    assert_eq!(frame.class_name.as_deref(), Some("hero"));
    assert_eq!(frame.children, RenderedChildren::PassThrough);
}

#[test]
fn render_applies_namespace_class_when_out_direction_exists() {
    let mut lc = Lifecycle::new(
        options()
            .with_out_effect(Direction::named("fadeOut"))
            .with_class_name(Some("hero")),
        Children::Nodes(3),
    );
    lc.mount(0);
    let frame = lc.render();
    assert_eq!(frame.class_name.as_deref(), Some("revealer hero"));
}

#[test]
fn legacy_effect_renders_class_only() {
    let mut lc = Lifecycle::new(
        options()
            .with_effect(Some("fade-up"))
            .with_class_name(Some("hero")),
        Children::Text("hi".into()),
    );
    lc.mount(0);
    assert!(lc.revealer().legacy_mode());

    let frame = lc.render();
    assert_eq!(frame.class_name.as_deref(), Some("fade-up hero"));
    // Legacy mode: CSS owns the animation, user style passes through.
    assert_eq!(frame.style, revealer::Style::default());
}

#[test]
fn cascade_explodes_text_into_monotonic_glyph_durations() {
    let mut lc = Lifecycle::new(
        options().with_cascade(Cascade::On),
        Children::Text("reveal".into()),
    );
    lc.mount(0);

    let frame = lc.render();
    // Only children animate.
    assert!(frame.style.animation.is_none());
    let RenderedChildren::Cascade(children) = frame.children else {
        panic!("expected cascade children");
    };
    assert_eq!(children.len(), 6);
    assert_eq!(children[0].glyph, Some('r'));
    assert_eq!(children[5].glyph, Some('l'));

    let durations: Vec<u32> = children
        .iter()
        .map(|c| c.style.animation_duration_ms.unwrap())
        .collect();
    assert_eq!(durations[0], 1000);
    assert_eq!(durations[5], 2000);
    assert!(durations.windows(2).all(|w| w[0] < w[1]));
    // Each child keeps the parent's animation shorthand.
    assert!(children.iter().all(|c| c.style.animation.is_some()));
}

#[test]
fn cascade_reverse_flips_text_durations_only() {
    let mut reversed = Lifecycle::new(
        options().with_cascade(Cascade::On).with_reverse(true),
        Children::Text("abc".into()),
    );
    reversed.mount(0);
    let RenderedChildren::Cascade(children) = reversed.render().children else {
        panic!("expected cascade children");
    };
    let durations: Vec<u32> = children
        .iter()
        .map(|c| c.style.animation_duration_ms.unwrap())
        .collect();
    assert!(durations.windows(2).all(|w| w[0] > w[1]));

    // Node content ignores `reverse`.
    let mut nodes = Lifecycle::new(
        options().with_cascade(Cascade::On).with_reverse(true),
        Children::Nodes(3),
    );
    nodes.mount(0);
    let RenderedChildren::Cascade(children) = nodes.render().children else {
        panic!("expected cascade children");
    };
    let durations: Vec<u32> = children
        .iter()
        .map(|c| c.style.animation_duration_ms.unwrap())
        .collect();
    assert!(durations.windows(2).all(|w| w[0] < w[1]));
    assert!(children.iter().all(|c| c.glyph.is_none()));
}

#[test]
fn cascade_respects_explicit_extra_total() {
    let mut lc = Lifecycle::new(
        options().with_cascade(Cascade::ExtraMs(500)),
        Children::Text("ab".into()),
    );
    lc.mount(0);
    let RenderedChildren::Cascade(children) = lc.render().children else {
        panic!("expected cascade children");
    };
    assert_eq!(children[0].style.animation_duration_ms, Some(1000));
    assert_eq!(children[1].style.animation_duration_ms, Some(1500));
}

#[test]
fn cascade_waits_for_an_active_animation() {
    // Trigger false with an out direction: hidden, nothing animating yet.
    let mut lc = Lifecycle::new(
        options()
            .with_when(false)
            .with_out_effect(Direction::named("fadeOut"))
            .with_cascade(Cascade::On),
        Children::Text("hi".into()),
    );
    lc.mount(0);
    let frame = lc.render();
    assert_eq!(frame.style.visibility, Some(Visibility::Hidden));
    assert_eq!(frame.children, RenderedChildren::PassThrough);
}

#[test]
fn cascade_of_empty_text_passes_through() {
    let mut lc = Lifecycle::new(
        options().with_cascade(Cascade::On),
        Children::Text(String::new()),
    );
    lc.mount(0);
    assert_eq!(lc.render().children, RenderedChildren::PassThrough);
}

#[test]
fn lifecycle_drives_reveal_then_conceal() {
    let mut lc = Lifecycle::new(
        options().with_out_effect(Direction::named("fadeOut")),
        Children::Text("hi".into()),
    );
    lc.mount(0);
    assert_eq!(lc.revealer().phase(), Phase::Animating);
    assert_eq!(lc.render().style.visibility, Some(Visibility::Visible));

    lc.update_options(2_000, |o| o.when = Trigger::When(false));
    lc.tick(3_000);
    assert_eq!(lc.revealer().phase(), Phase::SettledHidden);
    assert_eq!(lc.render().style.visibility, Some(Visibility::Hidden));
}

#[test]
fn unmount_then_render_keeps_last_frame_stable() {
    let mut lc = Lifecycle::new(options(), Children::Text("hi".into()));
    lc.mount(0);
    let before = lc.render();
    lc.unmount();
    assert_eq!(lc.render(), before);
}
