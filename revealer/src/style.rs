use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Visibility {
    Visible,
    Hidden,
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Visible => f.write_str("visible"),
            Self::Hidden => f.write_str("hidden"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Iterations {
    Count(u32),
    Infinite,
}

impl fmt::Display for Iterations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Count(n) => write!(f, "{n}"),
            Self::Infinite => f.write_str("infinite"),
        }
    }
}

/// A structured animation shorthand.
///
/// `Display` renders the CSS form the renderer ultimately paints:
/// `"{name} {duration}ms ease {delay}ms {iterations} normal both"`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Animation {
    pub name: String,
    pub duration_ms: u32,
    pub delay_ms: u32,
    pub iterations: Iterations,
}

impl fmt::Display for Animation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}ms ease {}ms {} normal both",
            self.name, self.duration_ms, self.delay_ms, self.iterations
        )
    }
}

/// Extra key/value declarations carried by a direction descriptor and merged
/// into the emitted style.
pub type StylePatch = BTreeMap<String, String>;

/// The style the engine hands to the renderer.
///
/// Only the fields the engine actually decides are typed; descriptor patches
/// land in `extra`. The renderer merges this over the user's base style.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Style {
    pub visibility: Option<Visibility>,
    pub animation: Option<Animation>,
    /// Per-child duration override, used by cascade rendering.
    pub animation_duration_ms: Option<u32>,
    pub opacity: Option<f32>,
    pub transition: Option<String>,
    pub extra: StylePatch,
}

impl Style {
    pub fn hidden() -> Self {
        Self {
            visibility: Some(Visibility::Hidden),
            ..Self::default()
        }
    }

    pub fn visible() -> Self {
        Self {
            visibility: Some(Visibility::Visible),
            ..Self::default()
        }
    }

    pub fn is_hidden(&self) -> bool {
        self.visibility == Some(Visibility::Hidden)
    }

    pub fn merge_patch(&mut self, patch: &StylePatch) {
        for (key, value) in patch {
            self.extra.insert(key.clone(), value.clone());
        }
    }

    /// Returns `self` layered over `base` (self wins on conflicts).
    pub fn over(&self, base: &Style) -> Style {
        let mut out = base.clone();
        if self.visibility.is_some() {
            out.visibility = self.visibility;
        }
        if self.animation.is_some() {
            out.animation = self.animation.clone();
        }
        if self.animation_duration_ms.is_some() {
            out.animation_duration_ms = self.animation_duration_ms;
        }
        if self.opacity.is_some() {
            out.opacity = self.opacity;
        }
        if self.transition.is_some() {
            out.transition = self.transition.clone();
        }
        out.merge_patch(&self.extra);
        out
    }
}

/// Produces an animation identifier on demand (for effect catalogs that
/// generate keyframe names lazily).
pub type AnimationFactory = Arc<dyn Fn() -> String + Send + Sync>;

/// What to do when a direction (`in`/`out`) is reached.
#[derive(Clone, Default)]
pub enum Direction {
    /// Direction disabled; reaching it is a no-op.
    #[default]
    Disabled,
    /// No named animation, only a style patch.
    StyleOnly(StylePatch),
    /// A named animation from the effect catalog, plus an optional patch.
    Named { name: String, patch: StylePatch },
    /// A lazily produced animation identifier, plus an optional patch.
    Factory {
        make: AnimationFactory,
        patch: StylePatch,
    },
}

impl Direction {
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named {
            name: name.into(),
            patch: StylePatch::new(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        !matches!(self, Self::Disabled)
    }

    /// The animation identifier for this direction, if it has one.
    pub fn resolve_name(&self) -> Option<String> {
        match self {
            Self::Disabled | Self::StyleOnly(_) => None,
            Self::Named { name, .. } => Some(name.clone()),
            Self::Factory { make, .. } => Some(make()),
        }
    }

    pub fn patch(&self) -> Option<&StylePatch> {
        match self {
            Self::Disabled => None,
            Self::StyleOnly(patch)
            | Self::Named { patch, .. }
            | Self::Factory { patch, .. } => Some(patch),
        }
    }
}

impl fmt::Debug for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Disabled => f.write_str("Disabled"),
            Self::StyleOnly(patch) => f.debug_tuple("StyleOnly").field(patch).finish(),
            Self::Named { name, patch } => f
                .debug_struct("Named")
                .field("name", name)
                .field("patch", patch)
                .finish(),
            Self::Factory { patch, .. } => f
                .debug_struct("Factory")
                .field("make", &"..")
                .field("patch", patch)
                .finish(),
        }
    }
}
