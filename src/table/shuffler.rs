use super::clock::Clock;
use super::scheduler::Scheduler;
use super::state::Table;
use super::tick::Tick;
use std::time::Duration;

/// Owns a [`Table`] together with the scheduler that paces it and the
/// random source that deals it.
///
/// This is the headless counterpart of the browser view. Both go through
/// [`Table::trigger`], [`Table::deliver`] and [`Table::teardown`]; only the
/// scheduler differs.
#[derive(Debug)]
pub struct Shuffler<S, R> {
    table: Table,
    scheduler: S,
    rng: R,
}

impl<S, R> Shuffler<S, R>
where
    S: Scheduler,
    R: rand::Rng,
{
    /// Build the table and run the first shuffle.
    pub fn mount(scheduler: S, rng: R) -> Self {
        let mut this = Self {
            table: Table::default(),
            scheduler,
            rng,
        };
        log::info!("{:<32}", "mounting table");
        this.trigger();
        this
    }
    pub fn table(&self) -> &Table {
        &self.table
    }
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }
    /// The "new cards" button.
    pub fn trigger(&mut self) {
        self.table.trigger(&mut self.scheduler);
    }
    /// Hand a fired timer back to the table.
    pub fn deliver(&mut self, tick: Tick) {
        self.table.deliver(tick, &mut self.rng, &mut self.scheduler);
    }
    /// Tear down: cancel pending timers and close the table.
    pub fn unmount(&mut self) {
        self.table.teardown(&mut self.scheduler);
    }
}

impl<R> Shuffler<Clock, R>
where
    R: rand::Rng,
{
    /// Let `dt` pass, delivering every tick that falls due on the way,
    /// including ones scheduled by earlier deliveries.
    pub fn elapse(&mut self, dt: Duration) {
        let until = self.scheduler.now() + dt;
        while let Some(tick) = self.scheduler.pop(until) {
            self.deliver(tick);
        }
        self.scheduler.settle(until);
    }
}
