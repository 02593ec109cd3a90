use super::phase::Phase;
use std::time::Duration;

/// A timer firing, addressed to one phase of one shuffle.
///
/// Ticks that no longer match the table (a newer shuffle, a closed table)
/// are dropped on delivery.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Tick {
    epoch: u64,
    phase: Phase,
}

impl Tick {
    pub fn epoch(&self) -> u64 {
        self.epoch
    }
    /// The phase this tick ends.
    pub fn phase(&self) -> Phase {
        self.phase
    }
}

impl From<(u64, Phase)> for Tick {
    fn from((epoch, phase): (u64, Phase)) -> Self {
        Self { epoch, phase }
    }
}

/// A request to deliver `tick` back to the table after `delay`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wait {
    delay: Duration,
    tick: Tick,
}

impl Wait {
    pub fn new(delay: Duration, tick: Tick) -> Self {
        Self { delay, tick }
    }
    pub fn delay(&self) -> Duration {
        self.delay
    }
    pub fn tick(&self) -> Tick {
        self.tick
    }
}

impl std::fmt::Display for Tick {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "#{} {}", self.epoch, self.phase)
    }
}
