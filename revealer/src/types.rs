/// The visibility state machine's phase.
///
/// `Idle` covers both the freshly constructed machine (hidden style when the
/// trigger starts false with an out direction) and a machine whose animated
/// state was reset by a trigger/spy change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    Idle,
    /// Armed to reveal on viewport entry.
    ListeningForward,
    /// Armed to conceal on viewport entry.
    ListeningBackward,
    /// Transition issued; completion deadlines may be pending.
    Animating,
    SettledVisible,
    SettledHidden,
}

/// Host events the state machine reacts to while armed.
///
/// Scroll, orientation, and document-visibility changes share one debounce
/// window; resize has its own, longer one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ViewportEvent {
    Scroll,
    Resize,
    OrientationChange,
    VisibilityChange,
}
