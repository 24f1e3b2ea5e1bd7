use std::sync::Arc;

use crate::cascade::DEFAULT_CASCADE_EXTRA_MS;
use crate::machine::Revealer;
use crate::probe::GeometryProvider;
use crate::style::{Direction, Style};
use crate::Trigger;

/// A callback fired when the revealer's state (style, phase, legacy flag)
/// changes.
pub type OnChangeCallback = Arc<dyn Fn(&Revealer) + Send + Sync>;

/// The reveal-completion hook: invoked once per successful reveal, never for
/// conceal and never while `forever` holds.
pub type OnRevealCallback = Arc<dyn Fn() + Send + Sync>;

/// An opaque comparison value. Any change to it re-arms the state machine
/// even when the trigger is unchanged; hosts typically hash whatever data
/// invalidates the current animation into it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpyToken(pub u64);

/// Per-child staggered animation across the element's children.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cascade {
    #[default]
    Off,
    /// Cascade with the default extra total of 1000 ms.
    On,
    /// Cascade with an explicit extra total.
    ExtraMs(u32),
}

impl Cascade {
    pub fn is_on(&self) -> bool {
        !matches!(self, Self::Off)
    }

    /// Extra milliseconds spread across the cascade, if enabled.
    pub fn extra_ms(&self) -> Option<u32> {
        match self {
            Self::Off => None,
            Self::On => Some(DEFAULT_CASCADE_EXTRA_MS),
            Self::ExtraMs(ms) => Some(*ms),
        }
    }
}

/// Configuration for [`crate::Revealer`].
///
/// Cheap to clone: callbacks are stored in `Arc`s so adapters can tweak a
/// few fields and call `Revealer::set_options` without reallocating
/// closures. Defaults mirror react-reveal's: `duration=1000`, `delay=0`,
/// `count=1`, `fraction=0.2`, `when=true`.
#[derive(Clone)]
pub struct RevealOptions {
    /// The reveal/conceal trigger: a boolean or a shared sequencer chain.
    pub when: Trigger,
    /// Auxiliary re-arm signal, compared for equality on option updates.
    pub spy: Option<SpyToken>,
    /// Legacy single-class-name mode: the animation is delegated to a CSS
    /// class of this name and the engine stops emitting style.
    pub effect: Option<String>,
    pub duration_ms: u32,
    pub delay_ms: u32,
    /// Animation repeat count.
    pub count: u32,
    /// Infinite repeat; suppresses all completion handling.
    pub forever: bool,
    pub cascade: Cascade,
    /// Reverse cascade order (string content only).
    pub reverse: bool,
    /// Bypasses viewport gating entirely: reveal/conceal animate without
    /// listening for events.
    pub force: bool,
    /// Portion (0–1) of the element that must clear the viewport edge
    /// before it counts as intersecting.
    pub fraction: f32,
    /// Direction descriptor for the hidden → visible transition.
    pub in_effect: Direction,
    /// Direction descriptor for the visible → hidden transition.
    pub out_effect: Direction,
    pub on_reveal: Option<OnRevealCallback>,
    /// Optional callback fired when the revealer's internal state changes.
    pub on_change: Option<OnChangeCallback>,
    /// Pass-through presentation: user class name appended to the computed
    /// one.
    pub class_name: Option<String>,
    /// Pass-through presentation: user style merged under the computed one.
    pub base_style: Style,
    /// Supplies fresh element/viewport geometry; `None` while unbound.
    pub geometry: Option<GeometryProvider>,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            when: Trigger::When(true),
            spy: None,
            effect: None,
            duration_ms: 1000,
            delay_ms: 0,
            count: 1,
            forever: false,
            cascade: Cascade::Off,
            reverse: false,
            force: false,
            fraction: 0.2,
            in_effect: Direction::Disabled,
            out_effect: Direction::Disabled,
            on_reveal: None,
            on_change: None,
            class_name: None,
            base_style: Style::default(),
            geometry: None,
        }
    }
}

impl RevealOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_when(mut self, when: impl Into<Trigger>) -> Self {
        self.when = when.into();
        self
    }

    pub fn with_spy(mut self, spy: Option<SpyToken>) -> Self {
        self.spy = spy;
        self
    }

    pub fn with_effect(mut self, effect: Option<impl Into<String>>) -> Self {
        self.effect = effect.map(Into::into);
        self
    }

    pub fn with_duration_ms(mut self, duration_ms: u32) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn with_delay_ms(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn with_count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    pub fn with_forever(mut self, forever: bool) -> Self {
        self.forever = forever;
        self
    }

    pub fn with_cascade(mut self, cascade: Cascade) -> Self {
        self.cascade = cascade;
        self
    }

    pub fn with_reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    pub fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    pub fn with_fraction(mut self, fraction: f32) -> Self {
        self.fraction = fraction;
        self
    }

    pub fn with_in_effect(mut self, in_effect: Direction) -> Self {
        self.in_effect = in_effect;
        self
    }

    pub fn with_out_effect(mut self, out_effect: Direction) -> Self {
        self.out_effect = out_effect;
        self
    }

    pub fn with_on_reveal(
        mut self,
        on_reveal: Option<impl Fn() + Send + Sync + 'static>,
    ) -> Self {
        self.on_reveal = on_reveal.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&Revealer) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_class_name(mut self, class_name: Option<impl Into<String>>) -> Self {
        self.class_name = class_name.map(Into::into);
        self
    }

    pub fn with_base_style(mut self, base_style: Style) -> Self {
        self.base_style = base_style;
        self
    }

    pub fn with_geometry(
        mut self,
        geometry: impl Fn() -> Option<crate::Geometry> + Send + Sync + 'static,
    ) -> Self {
        self.geometry = Some(Arc::new(geometry));
        self
    }
}

impl std::fmt::Debug for RevealOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RevealOptions")
            .field("when", &self.when)
            .field("spy", &self.spy)
            .field("effect", &self.effect)
            .field("duration_ms", &self.duration_ms)
            .field("delay_ms", &self.delay_ms)
            .field("count", &self.count)
            .field("forever", &self.forever)
            .field("cascade", &self.cascade)
            .field("reverse", &self.reverse)
            .field("force", &self.force)
            .field("fraction", &self.fraction)
            .field("in_effect", &self.in_effect)
            .field("out_effect", &self.out_effect)
            .field("class_name", &self.class_name)
            .field("base_style", &self.base_style)
            .finish_non_exhaustive()
    }
}
