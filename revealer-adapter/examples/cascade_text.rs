// Example: cascade-exploded text with per-glyph durations.
use revealer::{Cascade, Direction, Geometry, RevealOptions};
use revealer_adapter::{Children, Lifecycle, RenderedChildren};

fn main() {
    let mut lc = Lifecycle::new(
        RevealOptions::new()
            .with_in_effect(Direction::named("fadeInUp"))
            .with_cascade(Cascade::On)
            .with_geometry(|| {
                Some(Geometry {
                    height: 60,
                    top: 100,
                    scroll_y: 0,
                    viewport_height: 600,
                    document_hidden: false,
                })
            }),
        Children::Text("cascade!".into()),
    );

    lc.mount(0);
    let frame = lc.render();
    println!("class = {:?}", frame.class_name);
    println!("parent animation = {:?}", frame.style.animation);

    if let RenderedChildren::Cascade(children) = frame.children {
        for child in children {
            println!(
                "{:>2} {:?} -> {}ms",
                child.index,
                child.glyph,
                child.style.animation_duration_ms.unwrap_or(0)
            );
        }
    }
}
