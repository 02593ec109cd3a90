use super::phase::Phase;
use super::scheduler::Scheduler;
use super::tick::Tick;
use super::tick::Wait;
use crate::DEAL_DELAY;
use crate::REVEAL_DELAY;
use crate::cards::Hand;

/// View state of the card table: the current hand and the shuffle phase.
///
/// Table never sleeps or spawns anything. Each transition that needs time to
/// pass returns a [`Wait`], and whoever owns the table hands the enclosed
/// [`Tick`] back through [`Table::advance`] when the delay is up.
/// [`Table::trigger`], [`Table::deliver`] and [`Table::teardown`] do that
/// hand-off against any [`Scheduler`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Table {
    hand: Option<Hand>,
    phase: Phase,
    epoch: u64,
}

impl Table {
    /// `None` until the first deal lands.
    pub fn hand(&self) -> Option<&Hand> {
        self.hand.as_ref()
    }
    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn epoch(&self) -> u64 {
        self.epoch
    }
    pub fn animating(&self) -> bool {
        self.phase.animating()
    }
    pub fn closed(&self) -> bool {
        self.phase == Phase::Closed
    }

    /// Start animating the current hand out.
    /// Ignored while a shuffle is already running or after teardown.
    pub fn shuffle(&mut self) -> Option<Wait> {
        match self.phase {
            Phase::Idle => {
                self.epoch += 1;
                self.phase = Phase::Dealing;
                log::debug!("{:<32}{}", "shuffle accepted", self.epoch);
                Some(self.wait(DEAL_DELAY))
            }
            phase => {
                log::debug!("{:<32}{}", "shuffle ignored", phase);
                None
            }
        }
    }

    /// Deliver a timer. Stale ticks are dropped.
    pub fn advance<R: rand::Rng + ?Sized>(&mut self, tick: Tick, rng: &mut R) -> Option<Wait> {
        if tick != Tick::from((self.epoch, self.phase)) {
            log::debug!("{:<32}{}", "stale tick", tick);
            return None;
        }
        match self.phase {
            Phase::Dealing => {
                let hand = Hand::deal(rng);
                log::debug!("{:<32}{}", "dealt hand", hand);
                self.hand = Some(hand);
                self.phase = Phase::Revealing;
                Some(self.wait(REVEAL_DELAY))
            }
            Phase::Revealing => {
                self.phase = Phase::Idle;
                None
            }
            Phase::Idle | Phase::Closed => None,
        }
    }

    /// Tear down. Every later call is a no-op.
    pub fn close(&mut self) {
        log::debug!("{:<32}{}", "closing table", self.phase);
        self.phase = Phase::Closed;
    }

    /// The "new cards" button: shuffle and hand the deal delay to `scheduler`.
    pub fn trigger<S: Scheduler + ?Sized>(&mut self, scheduler: &mut S) {
        if let Some(wait) = self.shuffle() {
            scheduler.schedule(wait);
        }
    }

    /// A fired timer: advance and hand any follow-up delay to `scheduler`.
    pub fn deliver<S, R>(&mut self, tick: Tick, rng: &mut R, scheduler: &mut S)
    where
        S: Scheduler + ?Sized,
        R: rand::Rng + ?Sized,
    {
        if let Some(wait) = self.advance(tick, rng) {
            scheduler.schedule(wait);
        }
    }

    /// Cancel whatever `scheduler` still holds, then close.
    pub fn teardown<S: Scheduler + ?Sized>(&mut self, scheduler: &mut S) {
        scheduler.cancel();
        self.close();
    }

    fn wait(&self, delay: std::time::Duration) -> Wait {
        Wait::new(delay, Tick::from((self.epoch, self.phase)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Clock;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(0)
    }

    #[test]
    fn empty_until_dealt() {
        let mut table = Table::default();
        assert!(table.hand().is_none());
        let wait = table.shuffle().expect("idle table shuffles");
        assert!(table.animating());
        assert!(table.hand().is_none());
        assert!(wait.delay() == DEAL_DELAY);
    }

    #[test]
    fn full_sequence() {
        let ref mut rng = rng();
        let mut table = Table::default();
        let deal = table.shuffle().expect("shuffle");
        let reveal = table.advance(deal.tick(), rng).expect("reveal");
        assert!(table.phase() == Phase::Revealing);
        assert!(table.hand().map(Hand::size) == Some(4));
        assert!(reveal.delay() == REVEAL_DELAY);
        assert!(table.advance(reveal.tick(), rng).is_none());
        assert!(table.phase() == Phase::Idle);
        assert!(!table.animating());
    }

    #[test]
    fn shuffle_ignored_while_animating() {
        let ref mut rng = rng();
        let mut table = Table::default();
        let deal = table.shuffle().expect("shuffle");
        assert!(table.shuffle().is_none());
        let reveal = table.advance(deal.tick(), rng).expect("reveal");
        let hand = table.hand().copied();
        assert!(table.shuffle().is_none());
        assert!(table.hand().copied() == hand);
        assert!(table.epoch() == 1);
        table.advance(reveal.tick(), rng);
        assert!(table.shuffle().is_some());
    }

    #[test]
    fn stale_ticks_dropped() {
        let ref mut rng = rng();
        let mut table = Table::default();
        let deal = table.shuffle().expect("shuffle");
        let reveal = table.advance(deal.tick(), rng).expect("reveal");
        let before = table.clone();
        assert!(table.advance(deal.tick(), rng).is_none());
        assert!(table == before);
        table.advance(reveal.tick(), rng);
        table.shuffle().expect("second shuffle");
        let before = table.clone();
        assert!(table.advance(deal.tick(), rng).is_none());
        assert!(table == before);
    }

    #[test]
    fn closed_table_ignores_everything() {
        let ref mut rng = rng();
        let mut table = Table::default();
        let deal = table.shuffle().expect("shuffle");
        table.close();
        assert!(table.advance(deal.tick(), rng).is_none());
        assert!(table.hand().is_none());
        assert!(table.shuffle().is_none());
        assert!(table.closed());
        assert!(!table.animating());
    }

    #[test]
    fn driven_through_scheduler() {
        let ref mut rng = rng();
        let mut clock = Clock::default();
        let mut table = Table::default();
        table.trigger(&mut clock);
        table.trigger(&mut clock);
        assert!(clock.pending() == 1);
        let deal = clock.pop(DEAL_DELAY).expect("deal due");
        table.deliver(deal, rng, &mut clock);
        assert!(table.hand().is_some());
        let reveal = clock.pop(DEAL_DELAY + REVEAL_DELAY).expect("reveal due");
        table.deliver(reveal, rng, &mut clock);
        assert!(table.phase() == Phase::Idle);
        assert!(clock.pending() == 0);
    }

    #[test]
    fn teardown_cancels_pending() {
        let ref mut rng = rng();
        let mut clock = Clock::default();
        let mut table = Table::default();
        table.trigger(&mut clock);
        let deal = Tick::from((table.epoch(), Phase::Dealing));
        table.teardown(&mut clock);
        assert!(clock.pending() == 0);
        table.deliver(deal, rng, &mut clock);
        assert!(table.hand().is_none());
        assert!(clock.pending() == 0);
        assert!(table.closed());
    }
}
