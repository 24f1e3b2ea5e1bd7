// Example: a simulated page scroll driving a reveal.
use std::sync::{Arc, Mutex};

use revealer::{Direction, Geometry, Phase, RevealOptions, Revealer, ViewportEvent};

fn main() {
    let scroll = Arc::new(Mutex::new(0i64));
    let provider_scroll = Arc::clone(&scroll);

    let mut r = Revealer::new(
        RevealOptions::new()
            .with_in_effect(Direction::named("fadeIn"))
            .with_geometry(move || {
                Some(Geometry {
                    height: 120,
                    top: 2_000,
                    scroll_y: *provider_scroll.lock().unwrap(),
                    viewport_height: 800,
                    document_hidden: false,
                })
            }),
    );

    r.mount(0);
    println!("after mount: {:?}", r.phase());

    // Scroll the element into view, one wheel event per 16ms frame.
    let mut now_ms = 0u64;
    while r.phase() != Phase::Animating && now_ms < 5_000 {
        now_ms += 16;
        *scroll.lock().unwrap() += 40;
        r.handle_event(ViewportEvent::Scroll, now_ms);
        r.tick(now_ms);
    }
    println!("animating at t={now_ms}ms: {:?}", r.style().animation);

    // Let the completion deadline pass.
    if let Some(deadline) = r.next_deadline() {
        r.tick(deadline);
    }
    println!("settled: {:?}, style={:?}", r.phase(), r.style());

    r.unmount();
}
