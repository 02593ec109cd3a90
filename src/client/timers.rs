use crate::table::Scheduler;
use crate::table::Table;
use crate::table::Tick;
use crate::table::Wait;
use leptos::prelude::*;

/// Browser scheduler: each wait becomes a `setTimeout` whose callback feeds
/// the tick back into the table signal.
///
/// Both handles are owned by the reactive owner that created them. If the
/// view is gone by the time a timeout fires, `try_update` turns the delivery
/// into a no-op.
#[derive(Clone, Copy)]
pub struct Timers {
    table: RwSignal<Table>,
    pending: StoredValue<Option<TimeoutHandle>>,
}

impl Timers {
    pub fn new(table: RwSignal<Table>) -> Self {
        Self {
            table,
            pending: StoredValue::new(None),
        }
    }
    /// A timeout is registered and has not fired yet.
    pub fn pending(&self) -> bool {
        self.pending.try_with_value(Option::is_some).unwrap_or(false)
    }
    /// The "new cards" button.
    pub fn trigger(mut self) {
        let table = self.table;
        table.try_update(|table| table.trigger(&mut self));
    }
    /// Cancel the pending timeout and close the table.
    pub fn teardown(mut self) {
        let table = self.table;
        if table.try_update(|table| table.teardown(&mut self)).is_none() {
            self.cancel();
        }
    }

    fn fire(mut self, tick: Tick) {
        self.take();
        let table = self.table;
        table.try_update(|table| table.deliver(tick, &mut rand::rng(), &mut self));
    }

    fn take(&self) -> Option<TimeoutHandle> {
        self.pending.try_update_value(Option::take).flatten()
    }
}

impl Scheduler for Timers {
    fn schedule(&mut self, wait: Wait) {
        let timers = *self;
        let tick = wait.tick();
        match set_timeout_with_handle(move || timers.fire(tick), wait.delay()) {
            Ok(handle) => {
                self.pending.try_update_value(|pending| pending.replace(handle));
            }
            Err(e) => log::warn!("{:<32}{} {:?}", "failed to schedule", tick, e),
        }
    }
    fn cancel(&mut self) {
        if let Some(handle) = self.take() {
            handle.clear();
        }
    }
}
