use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

/// Stable identity of a [`crate::Revealer`] instance, used for sequencer
/// registration.
pub type RevealerId = u64;

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

pub(crate) fn next_id() -> RevealerId {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}

/// Coordinates grouped reveals across multiple registered instances.
///
/// Instances whose trigger is a chain register themselves exactly once at
/// mount. The sequencer itself does not decide timing; the host walks the
/// registered ids (in registration order) and drives each instance's
/// `reveal`/`conceal` externally.
#[derive(Default)]
pub struct Sequencer {
    registered: Mutex<Vec<RevealerId>>,
}

impl Sequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an instance. Re-pushing an already registered id is
    /// ignored, so mount-time registration stays exactly-once.
    pub fn push(&self, id: RevealerId) {
        let mut registered = self.lock();
        if !registered.contains(&id) {
            registered.push(id);
        }
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn contains(&self, id: RevealerId) -> bool {
        self.lock().contains(&id)
    }

    /// Visits registered ids in registration order.
    pub fn for_each(&self, mut f: impl FnMut(RevealerId)) {
        for id in self.lock().iter() {
            f(*id);
        }
    }

    pub fn ids(&self) -> Vec<RevealerId> {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<RevealerId>> {
        self.registered.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for Sequencer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sequencer")
            .field("registered", &self.ids())
            .finish()
    }
}

/// The signal controlling reveal vs conceal.
///
/// A plain boolean flips one instance; a shared [`Sequencer`] chain counts
/// as `true` for gating while the host flips registered instances
/// collectively.
#[derive(Clone, Debug)]
pub enum Trigger {
    When(bool),
    Chain(Arc<Sequencer>),
}

impl Default for Trigger {
    fn default() -> Self {
        Self::When(true)
    }
}

impl Trigger {
    /// The boolean gate this trigger currently resolves to.
    pub fn resolve(&self) -> bool {
        match self {
            Self::When(value) => *value,
            Self::Chain(_) => true,
        }
    }

    pub fn chain(&self) -> Option<&Arc<Sequencer>> {
        match self {
            Self::When(_) => None,
            Self::Chain(sequencer) => Some(sequencer),
        }
    }
}

impl PartialEq for Trigger {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::When(a), Self::When(b)) => a == b,
            (Self::Chain(a), Self::Chain(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<bool> for Trigger {
    fn from(value: bool) -> Self {
        Self::When(value)
    }
}
