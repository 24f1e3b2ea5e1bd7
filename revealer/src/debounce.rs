/// A clock-driven debouncer.
///
/// This is the headless equivalent of wrapping a callback in a trailing-edge
/// debounce: every `call` records a payload and pushes the deadline out to
/// `now_ms + window_ms`; `poll` fires at most once per quiet window, yielding
/// the payload of the *last* call. Nothing fires while calls keep arriving
/// faster than the window.
///
/// The engine never spawns timers. Your adapter forwards events via `call`
/// and advances time via `poll(now_ms)` (typically from the same tick that
/// drives the state machine).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Debouncer<T = ()> {
    window_ms: u64,
    pending: Option<(u64, T)>,
}

impl<T> Debouncer<T> {
    pub fn new(window_ms: u64) -> Self {
        Self {
            window_ms,
            pending: None,
        }
    }

    pub fn window_ms(&self) -> u64 {
        self.window_ms
    }

    /// Records a call at `now_ms`, replacing any pending payload and
    /// rescheduling the deadline.
    pub fn call(&mut self, now_ms: u64, value: T) {
        self.pending = Some((now_ms.saturating_add(self.window_ms), value));
    }

    /// Fires the pending call if its quiet window has elapsed.
    pub fn poll(&mut self, now_ms: u64) -> Option<T> {
        match &self.pending {
            Some((deadline, _)) if now_ms >= *deadline => {
                self.pending.take().map(|(_, v)| v)
            }
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// The deadline of the pending call, if any.
    pub fn deadline(&self) -> Option<u64> {
        self.pending.as_ref().map(|(d, _)| *d)
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }
}
