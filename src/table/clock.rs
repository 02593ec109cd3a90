use super::scheduler::Scheduler;
use super::tick::Tick;
use super::tick::Wait;
use std::time::Duration;

/// Manually driven scheduler. Time only moves when asked to.
#[derive(Debug, Default, Clone)]
pub struct Clock {
    now: Duration,
    pending: Vec<(Duration, Tick)>,
}

impl Clock {
    pub fn now(&self) -> Duration {
        self.now
    }
    pub fn pending(&self) -> usize {
        self.pending.len()
    }
    /// Earliest tick due no later than `until`, moving the clock up to it.
    pub fn pop(&mut self, until: Duration) -> Option<Tick> {
        let (i, &(due, tick)) = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, (due, _))| *due <= until)
            .min_by_key(|(_, (due, _))| *due)?;
        self.pending.remove(i);
        self.now = self.now.max(due);
        Some(tick)
    }
    /// Jump to `until` once nothing else is due.
    pub fn settle(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }
}

impl Scheduler for Clock {
    fn schedule(&mut self, wait: Wait) {
        self.pending.push((self.now + wait.delay(), wait.tick()));
    }
    fn cancel(&mut self) {
        self.pending.clear();
    }
}
