use super::tick::Wait;

/// Something that can hold a [`Wait`] and later hand its tick back.
///
/// Implementations deliver ticks to a [`Table`] on their own terms: the
/// browser through `setTimeout`, tests through a manual [`Clock`]. At most one
/// wait is pending at a time because the table ignores shuffles mid-animation.
///
/// [`Table`]: super::state::Table
/// [`Clock`]: super::clock::Clock
pub trait Scheduler {
    /// Arrange for `wait.tick()` to come back after `wait.delay()`.
    fn schedule(&mut self, wait: Wait);
    /// Drop anything still pending.
    fn cancel(&mut self);
}
