//! A headless reveal-on-scroll animation engine inspired by react-reveal.
//!
//! For adapter-level utilities (lifecycle wiring, render projection,
//! cascade explosion), see the `revealer-adapter` crate.
//!
//! This crate decides *when* an element transitions between hidden and
//! visible presentation and with which timing: viewport-intersection math,
//! debounced multi-event coordination, logarithmic cascade timing, and an
//! at-most-once animation lifecycle per trigger. It owns timing and state
//! decisions, not rendering primitives.
//!
//! It is UI-agnostic. A DOM/TUI/GUI layer is expected to provide:
//! - element and viewport geometry (via a [`GeometryProvider`])
//! - scroll/resize/orientation/visibility events as they happen
//! - a monotonic clock (`now_ms`) passed into event and tick entry points
//!
//! The engine never spawns timers: debounce windows, completion deadlines
//! and the prerender grace period are plain deadlines advanced by
//! [`Revealer::tick`].
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod cascade;
mod debounce;
mod globals;
mod machine;
mod options;
mod probe;
mod sequencer;
mod style;
mod types;


pub use cascade::{DEFAULT_CASCADE_EXTRA_MS, delay_for};
pub use debounce::Debouncer;
pub use globals::{
    NAMESPACE, disable_prerender, fraction_enabled, prerender_enabled, set_fraction_enabled,
    set_prerender,
};
pub use machine::{PRERENDER_GRACE_MS, PROBE_DEBOUNCE_MS, RESIZE_DEBOUNCE_MS, Revealer};
pub use options::{Cascade, OnChangeCallback, OnRevealCallback, RevealOptions, SpyToken};
pub use probe::{Geometry, GeometryProvider, OffsetTree, absolute_top, in_viewport};
pub use sequencer::{RevealerId, Sequencer, Trigger};
pub use style::{
    Animation, AnimationFactory, Direction, Iterations, Style, StylePatch, Visibility,
};
pub use types::{Phase, ViewportEvent};
