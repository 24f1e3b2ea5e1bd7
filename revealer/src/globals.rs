use std::sync::atomic::{AtomicBool, Ordering};

/// Class-name namespace applied to non-legacy rendering.
pub const NAMESPACE: &str = "revealer";

static PRERENDER: AtomicBool = AtomicBool::new(false);
static FRACTION: AtomicBool = AtomicBool::new(false);

/// Returns whether server-prerender mode is currently active.
///
/// When active, elements that are already within one viewport height of the
/// scroll position at mount get a low-opacity placeholder and a delayed
/// reveal instead of animating content the server already painted.
pub fn prerender_enabled() -> bool {
    PRERENDER.load(Ordering::Relaxed)
}

/// Enables/disables server-prerender mode. Hosts that hydrate prerendered
/// markup should set this before mounting the first instance.
pub fn set_prerender(enabled: bool) {
    PRERENDER.store(enabled, Ordering::Relaxed);
}

/// Turns prerender bookkeeping off. Called once per unmounting instance;
/// idempotent.
pub fn disable_prerender() {
    if PRERENDER.swap(false, Ordering::Relaxed) {
        rdebug!("prerender mode disabled");
    }
}

/// Returns whether the visible-fraction threshold is applied by the viewport
/// probe. Off by default; flipped on when any instance can hide content.
pub fn fraction_enabled() -> bool {
    FRACTION.load(Ordering::Relaxed)
}

pub fn set_fraction_enabled(enabled: bool) {
    FRACTION.store(enabled, Ordering::Relaxed);
}
