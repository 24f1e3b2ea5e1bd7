use revealer::{NAMESPACE, Revealer, Style, delay_for};

/// The content bound to a revealer instance.
///
/// String content can be exploded into per-glyph display units for cascade
/// rendering; node content is addressed by position and cloned by the host.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Children {
    Text(String),
    Nodes(usize),
}

/// One exploded cascade child.
///
/// Hosts should render text glyphs as inline-block spans with
/// `white-space: pre` so whitespace survives the explosion.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CascadeChild {
    pub index: usize,
    /// The glyph for text content; `None` for node content (the host clones
    /// its own child at `index`).
    pub glyph: Option<char>,
    pub style: Style,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RenderedChildren {
    /// Paint the original children unchanged.
    PassThrough,
    /// Paint these instead; the parent's own animation is suppressed.
    Cascade(Vec<CascadeChild>),
}

/// What the renderer paints for one instance.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame {
    pub style: Style,
    pub class_name: Option<String>,
    pub children: RenderedChildren,
}

/// Projects the current machine state and props into what to paint.
///
/// Pure: call it whenever `on_change` fires (or any time after) and paint
/// the result. The core never paints directly.
pub fn render(revealer: &Revealer, children: &Children) -> Frame {
    let options = revealer.options();
    let class_name = class_name_for(revealer);

    if revealer.legacy_mode() {
        // Legacy class mode: the effect class owns the animation and the
        // user style passes through untouched.
        return Frame {
            style: options.base_style.clone(),
            class_name,
            children: RenderedChildren::PassThrough,
        };
    }

    let mut style = revealer.style().over(&options.base_style);
    let mut rendered = RenderedChildren::PassThrough;
    if options.cascade.is_on() && revealer.style().animation.is_some() {
        if let Some(exploded) = explode(revealer, children) {
            rendered = RenderedChildren::Cascade(exploded);
            // Only the children animate.
            style.animation = None;
        }
    }

    Frame {
        style,
        class_name,
        children: rendered,
    }
}

fn class_name_for(revealer: &Revealer) -> Option<String> {
    let options = revealer.options();
    let base = if revealer.legacy_mode() {
        options.effect.clone()
    } else if options.out_effect.is_enabled() || options.effect.is_some() {
        Some(NAMESPACE.to_string())
    } else {
        None
    };
    match (base, options.class_name.clone()) {
        (Some(base), Some(user)) => Some(format!("{base} {user}")),
        (Some(base), None) => Some(base),
        (None, user) => user,
    }
}

/// Splits children into an ordered sequence and assigns each a duration
/// from the logarithmic cascade curve between `duration` and
/// `duration + cascade extra`. Reverse order applies to text only.
fn explode(revealer: &Revealer, children: &Children) -> Option<Vec<CascadeChild>> {
    let options = revealer.options();
    let glyphs: Vec<Option<char>> = match children {
        Children::Text(text) => text.chars().map(Some).collect(),
        Children::Nodes(count) => vec![None; *count],
    };
    if glyphs.is_empty() {
        return None;
    }

    let reverse = options.reverse && matches!(children, Children::Text(_));
    let last = glyphs.len() - 1;
    let total = options
        .duration_ms
        .saturating_add(options.cascade.extra_ms().unwrap_or(0));

    let mut out = Vec::with_capacity(glyphs.len());
    for (index, glyph) in glyphs.into_iter().enumerate() {
        let curve_index = if reverse { last - index } else { index };
        let mut style = revealer.style().clone();
        style.animation_duration_ms = Some(delay_for(
            curve_index,
            0,
            last,
            options.duration_ms,
            total,
        ));
        out.push(CascadeChild {
            index,
            glyph,
            style,
        });
    }
    Some(out)
}
