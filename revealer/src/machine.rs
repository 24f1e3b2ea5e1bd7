use std::cell::Cell;

use crate::debounce::Debouncer;
use crate::globals;
use crate::options::RevealOptions;
use crate::probe::{Geometry, in_viewport};
use crate::sequencer::{RevealerId, Trigger, next_id};
use crate::style::{Animation, Iterations, Style, Visibility};
use crate::types::{Phase, ViewportEvent};

/// Quiet window for debounced scroll/orientation/visibility probing.
pub const PROBE_DEBOUNCE_MS: u64 = 66;
/// Quiet window for debounced resize probing.
pub const RESIZE_DEBOUNCE_MS: u64 = 500;
/// Grace period before the first reveal attempt on server-prerendered
/// content.
pub const PRERENDER_GRACE_MS: u64 = 1000;

/// Completion work scheduled for after the current animation run ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Completion {
    /// Drop the animation shorthand so re-renders don't restart it.
    ClearAnimation,
    /// Fire the `on_reveal` hook.
    InvokeOnReveal,
    /// Force hidden visibility if the trigger has since flipped false and an
    /// out direction exists (guards the conceal-mid-animation race).
    FallbackHide,
}

/// The reveal/conceal controller for one bound element.
///
/// This type is intentionally UI-agnostic:
/// - It never touches a real DOM; geometry comes from the options'
///   [`crate::GeometryProvider`], fresh on every probe.
/// - Your adapter forwards viewport events via [`Revealer::handle_event`]
///   and advances time via [`Revealer::tick`]; all timers (debounce windows,
///   completion deadlines, the prerender grace period) are plain deadlines.
/// - The emitted [`Style`] is the only state the renderer consumes; the
///   `on_change` callback fires whenever it (or the phase) changes.
#[derive(Clone, Debug)]
pub struct Revealer {
    id: RevealerId,
    options: RevealOptions,
    phase: Phase,
    style: Style,
    legacy_mode: bool,
    mounted: bool,
    probe_debounce: Debouncer,
    resize_debounce: Debouncer,
    grace_deadline_ms: Option<u64>,
    completions: Vec<(u64, Completion)>,

    notify_depth: Cell<usize>,
    notify_pending: Cell<bool>,
}

impl Revealer {
    /// Creates a new revealer from options.
    ///
    /// The initial style is hidden iff the trigger resolves false *and* an
    /// out direction exists; otherwise content starts unstyled (visible).
    pub fn new(options: RevealOptions) -> Self {
        let style = if options.when.resolve() || !options.out_effect.is_enabled() {
            Style::default()
        } else {
            Style::hidden()
        };
        if options.out_effect.is_enabled() {
            // Something on this page can hide content, so viewport checks
            // start honoring the visible-fraction threshold.
            globals::set_fraction_enabled(true);
        }
        rdebug!(
            when = options.when.resolve(),
            force = options.force,
            "Revealer::new"
        );
        Self {
            id: next_id(),
            options,
            phase: Phase::Idle,
            style,
            legacy_mode: false,
            mounted: false,
            probe_debounce: Debouncer::new(PROBE_DEBOUNCE_MS),
            resize_debounce: Debouncer::new(RESIZE_DEBOUNCE_MS),
            grace_deadline_ms: None,
            completions: Vec::new(),
            notify_depth: Cell::new(0),
            notify_pending: Cell::new(false),
        }
    }

    pub fn id(&self) -> RevealerId {
        self.id
    }

    pub fn options(&self) -> &RevealOptions {
        &self.options
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The current style, the only state exposed to the renderer.
    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Whether legacy single-class-name rendering is active.
    pub fn legacy_mode(&self) -> bool {
        self.legacy_mode
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Whether the transition for the current trigger has already been
    /// issued (at-most-once guard).
    pub fn has_animated(&self) -> bool {
        matches!(
            self.phase,
            Phase::Animating | Phase::SettledVisible | Phase::SettledHidden
        )
    }

    pub fn is_listening(&self) -> bool {
        matches!(self.phase, Phase::ListeningForward | Phase::ListeningBackward)
    }

    /// The earliest pending deadline, so hosts know when to call
    /// [`Revealer::tick`] next.
    pub fn next_deadline(&self) -> Option<u64> {
        [
            self.probe_debounce.deadline(),
            self.resize_debounce.deadline(),
            self.grace_deadline_ms,
            self.completions.iter().map(|(due, _)| *due).min(),
        ]
        .into_iter()
        .flatten()
        .min()
    }

    fn geometry(&self) -> Option<Geometry> {
        self.options.geometry.as_ref().and_then(|provider| provider())
    }

    fn bound(&self) -> bool {
        self.mounted && self.geometry().is_some()
    }

    fn in_viewport_now(&self) -> bool {
        match self.geometry() {
            Some(geometry) => in_viewport(
                &geometry,
                self.options.fraction,
                globals::fraction_enabled(),
            ),
            None => false,
        }
    }

    fn notify_now(&self) {
        if let Some(cb) = &self.options.on_change {
            cb(self);
        }
    }

    fn notify(&self) {
        if self.notify_depth.get() > 0 {
            self.notify_pending.set(true);
            return;
        }
        self.notify_now();
    }

    /// Batches multiple updates into a single `on_change` notification.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        let depth = self.notify_depth.get();
        self.notify_depth.set(depth.saturating_add(1));

        f(self);

        let depth = self.notify_depth.get();
        debug_assert!(depth > 0, "notify_depth underflow");
        let next = depth.saturating_sub(1);
        self.notify_depth.set(next);

        if next == 0 && self.notify_pending.replace(false) {
            self.notify_now();
        }
    }

    fn set_style(&mut self, style: Style) {
        if self.style == style {
            return;
        }
        self.style = style;
        self.notify();
    }

    fn set_phase(&mut self, phase: Phase) {
        if self.phase == phase {
            return;
        }
        rtrace!(?phase, "phase transition");
        self.phase = phase;
        self.notify();
    }

    /// Wires initial state. No-op when the element is unbound or already
    /// mounted; registers with the sequencer chain exactly once.
    ///
    /// When prerender mode is active and the element is already within one
    /// viewport height of the scroll position, content that the server has
    /// painted gets a low-opacity placeholder and a delayed reveal attempt
    /// instead of animating immediately.
    pub fn mount(&mut self, now_ms: u64) {
        self.batch_update(|r| r.mount_inner(now_ms));
    }

    fn mount_inner(&mut self, now_ms: u64) {
        if self.mounted || self.options.geometry.is_none() {
            return;
        }
        self.mounted = true;
        if let Trigger::Chain(sequencer) = &self.options.when {
            sequencer.push(self.id);
        }
        let prerender_candidate =
            self.options.out_effect.is_enabled() || self.options.effect.is_some();
        if globals::prerender_enabled() && prerender_candidate {
            if let Some(geometry) = self.geometry() {
                if geometry.top < geometry.scroll_y + i64::from(geometry.viewport_height) {
                    let style = Style {
                        opacity: Some(0.0),
                        transition: Some(format!("opacity {PRERENDER_GRACE_MS}ms")),
                        ..Style::default()
                    };
                    self.set_style(style);
                    self.grace_deadline_ms = Some(now_ms.saturating_add(PRERENDER_GRACE_MS));
                    rdebug!(id = self.id, "mount: prerender grace scheduled");
                    return;
                }
            }
        }
        self.reveal_inner(now_ms);
    }

    /// Arms the forward transition and animates once the viewport condition
    /// holds (immediately under `force`). No-op if unbound, already
    /// animated, or the trigger is false.
    pub fn reveal(&mut self, now_ms: u64) {
        self.batch_update(|r| r.reveal_inner(now_ms));
    }

    fn reveal_inner(&mut self, now_ms: u64) {
        if !self.bound() || !self.options.when.resolve() || self.has_animated() {
            return;
        }
        self.listen(Phase::ListeningForward);
        if self.options.force || self.in_viewport_now() {
            self.animate(now_ms);
        }
    }

    /// Mirror of [`Revealer::reveal`] for the out direction. No-op unless
    /// the trigger is false and an out descriptor exists.
    pub fn conceal(&mut self, now_ms: u64) {
        self.batch_update(|r| r.conceal_inner(now_ms));
    }

    fn conceal_inner(&mut self, now_ms: u64) {
        if !self.bound() || self.options.when.resolve() || self.has_animated() {
            return;
        }
        if !self.options.out_effect.is_enabled() {
            return;
        }
        self.listen(Phase::ListeningBackward);
        if self.in_viewport_now() {
            self.animate(now_ms);
        }
    }

    fn listen(&mut self, phase: Phase) {
        if self.is_listening() || self.options.force {
            return;
        }
        self.set_phase(phase);
    }

    /// Removes all armed listeners and cancels pending debounce windows.
    fn clean(&mut self) {
        if !self.is_listening() {
            return;
        }
        self.probe_debounce.cancel();
        self.resize_debounce.cancel();
        self.set_phase(Phase::Idle);
    }

    fn animate(&mut self, now_ms: u64) {
        self.clean();
        if self.options.effect.is_some() {
            // Legacy mode delegates the whole animation to a CSS class; the
            // engine stops emitting style from here on.
            if !self.legacy_mode {
                self.legacy_mode = true;
                self.notify();
            }
        } else {
            let when = self.options.when.resolve();
            let direction = if when {
                self.options.in_effect.clone()
            } else {
                self.options.out_effect.clone()
            };
            if !direction.is_enabled() {
                return;
            }
            let animation = direction.resolve_name().map(|name| Animation {
                name,
                duration_ms: self.options.duration_ms,
                delay_ms: self.options.delay_ms,
                iterations: if self.options.forever {
                    Iterations::Infinite
                } else {
                    Iterations::Count(self.options.count)
                },
            });
            // The transition for this trigger was already issued; re-running
            // it must not change style or double-schedule completions.
            if animation.is_some() && animation == self.style.animation {
                return;
            }
            let mut style = Style {
                animation,
                visibility: Some(Visibility::Visible),
                ..Style::default()
            };
            if let Some(patch) = direction.patch() {
                style.merge_patch(patch);
            }
            rtrace!(id = self.id, forward = when, "animate");
            self.set_style(style);
            if !self.options.out_effect.is_enabled() || (when && self.options.spy.is_some()) {
                self.animation_end(now_ms, Completion::ClearAnimation);
            } else if !when {
                self.animation_end(now_ms, Completion::FallbackHide);
            }
        }
        self.set_phase(Phase::Animating);
        if self.options.on_reveal.is_some() && self.options.when.resolve() {
            self.animation_end(now_ms, Completion::InvokeOnReveal);
        }
    }

    fn animation_end(&mut self, now_ms: u64, completion: Completion) {
        if self.options.forever {
            return;
        }
        let extra = u64::from(self.options.cascade.extra_ms().unwrap_or(0));
        let run = u64::from(self.options.count) * (u64::from(self.options.duration_ms) + extra);
        let due = now_ms
            .saturating_add(u64::from(self.options.delay_ms))
            .saturating_add(run);
        self.completions.push((due, completion));
    }

    /// Routes a viewport event into the matching debounce window. Ignored
    /// unless the machine is mounted and armed.
    pub fn handle_event(&mut self, event: ViewportEvent, now_ms: u64) {
        if !self.mounted || !self.is_listening() {
            return;
        }
        match event {
            ViewportEvent::Resize => self.resize_debounce.call(now_ms, ()),
            ViewportEvent::Scroll
            | ViewportEvent::OrientationChange
            | ViewportEvent::VisibilityChange => self.probe_debounce.call(now_ms, ()),
        }
    }

    /// Advances the machine's clock: fires elapsed debounce windows, the
    /// prerender grace deadline, and due completion deadlines.
    ///
    /// Pending completion deadlines past unmount are guarded (this returns
    /// without touching them), not cancelled.
    pub fn tick(&mut self, now_ms: u64) {
        if !self.mounted {
            return;
        }
        self.batch_update(|r| r.tick_inner(now_ms));
    }

    fn tick_inner(&mut self, now_ms: u64) {
        if !self.bound() {
            return;
        }
        if let Some(deadline) = self.grace_deadline_ms {
            if now_ms >= deadline {
                self.grace_deadline_ms = None;
                self.reveal_inner(now_ms);
            }
        }
        if self.probe_debounce.poll(now_ms).is_some() {
            match self.phase {
                Phase::ListeningForward => self.reveal_inner(now_ms),
                Phase::ListeningBackward => self.conceal_inner(now_ms),
                _ => {}
            }
        }
        if self.resize_debounce.poll(now_ms).is_some() {
            self.resize_attempt(now_ms);
        }
        self.run_completions(now_ms);
    }

    /// A resize can bring an armed element into the viewport without any
    /// scroll: show it without an animation shorthand.
    fn resize_attempt(&mut self, now_ms: u64) {
        if !self.bound() || !self.options.when.resolve() || self.has_animated() {
            return;
        }
        if self.options.force || self.in_viewport_now() {
            self.clean();
            self.set_style(Style::visible());
            self.set_phase(Phase::SettledVisible);
            if self.options.on_reveal.is_some() {
                self.animation_end(now_ms, Completion::InvokeOnReveal);
            }
        }
    }

    fn run_completions(&mut self, now_ms: u64) {
        if self.completions.is_empty() {
            return;
        }
        let mut due = Vec::new();
        let mut i = 0;
        while i < self.completions.len() {
            if self.completions[i].0 <= now_ms {
                due.push(self.completions.remove(i).1);
            } else {
                i += 1;
            }
        }
        for completion in due {
            match completion {
                Completion::ClearAnimation => {
                    if self.style.animation.is_some() {
                        let mut style = self.style.clone();
                        style.animation = None;
                        self.set_style(style);
                    }
                }
                Completion::InvokeOnReveal => {
                    if let Some(on_reveal) = self.options.on_reveal.clone() {
                        rtrace!(id = self.id, "on_reveal");
                        on_reveal();
                    }
                }
                Completion::FallbackHide => {
                    if !self.options.when.resolve() && self.options.out_effect.is_enabled() {
                        let mut style = self.style.clone();
                        style.visibility = Some(Visibility::Hidden);
                        self.set_style(style);
                    }
                }
            }
        }
        if self.completions.is_empty() && self.phase == Phase::Animating {
            let settled = if self.style.is_hidden() {
                Phase::SettledHidden
            } else {
                Phase::SettledVisible
            };
            self.set_phase(settled);
        }
    }

    /// Replaces the options. A `when`/`spy` change resets the animated
    /// state, tears down armed listeners *before* re-arming, and
    /// immediately re-invokes reveal or conceal per the new trigger value.
    /// Pending completion deadlines survive (they are guarded, not
    /// cancelled).
    pub fn set_options(&mut self, options: RevealOptions, now_ms: u64) {
        let when_changed = self.options.when != options.when;
        let spy_changed = self.options.spy != options.spy;
        self.options = options;
        rtrace!(when_changed, spy_changed, "Revealer::set_options");
        if self.mounted && (when_changed || spy_changed) {
            self.batch_update(|r| r.rearm(now_ms));
        } else {
            self.notify();
        }
    }

    /// Clones the current options, applies `f`, then delegates to
    /// `set_options`.
    pub fn update_options(&mut self, now_ms: u64, f: impl FnOnce(&mut RevealOptions)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next, now_ms);
    }

    fn rearm(&mut self, now_ms: u64) {
        self.clean();
        self.set_phase(Phase::Idle);
        if self.options.when.resolve() {
            self.reveal_inner(now_ms);
        } else {
            self.conceal_inner(now_ms);
        }
    }

    /// Tears down listeners and debounce windows, marks the element
    /// unbound, and disables prerender bookkeeping. Idempotent; the single
    /// required cleanup action.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.batch_update(|r| {
            r.clean();
            r.grace_deadline_ms = None;
            r.mounted = false;
            globals::disable_prerender();
            r.notify();
        });
        rdebug!(id = self.id, "unmounted");
    }
}
