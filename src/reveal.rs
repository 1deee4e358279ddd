/// One-shot visibility latch: `Pending` until the first intersection, then
/// `Revealed` for good.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealLatch {
    #[default]
    Pending,
    Revealed,
}

impl RevealLatch {
    /// Feed one observation. Returns `true` only on the transition.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        match (*self, intersecting) {
            (RevealLatch::Pending, true) => {
                *self = RevealLatch::Revealed;
                true
            }
            _ => false,
        }
    }

    pub fn is_revealed(&self) -> bool {
        matches!(self, RevealLatch::Revealed)
    }
}

/// Tailwind classes for the fade/slide-in transition.
pub fn reveal_classes(revealed: bool) -> &'static str {
    if revealed {
        "transition-all duration-1000 transform opacity-100 translate-y-0"
    } else {
        "transition-all duration-1000 transform opacity-0 translate-y-10"
    }
}
