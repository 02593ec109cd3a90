/// Where the table is in its shuffle sequence.
///
/// A shuffle walks `Idle -> Dealing -> Revealing -> Idle`. `Dealing` covers
/// the old cards animating out; the new hand lands on entry to `Revealing`.
/// `Closed` is terminal and entered only on teardown.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Dealing,
    Revealing,
    Closed,
}

impl Phase {
    /// Cards are mid-transition and the shuffle button is disabled.
    pub fn animating(&self) -> bool {
        matches!(self, Phase::Dealing | Phase::Revealing)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Phase::Idle => write!(f, "idle"),
            Phase::Dealing => write!(f, "dealing"),
            Phase::Revealing => write!(f, "revealing"),
            Phase::Closed => write!(f, "closed"),
        }
    }
}
