//! Stale response guard
//!
//! Requests are never cancelled once sent. Instead every fetch cycle takes
//! a ticket, and its result is applied only if no newer cycle started and
//! the view was not torn down in the meantime.

use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug, Default)]
struct Counter {
    current: Cell<u64>,
    closed: Cell<bool>,
}

#[derive(Debug, Clone, Default)]
pub struct FetchGeneration {
    counter: Rc<Counter>,
}

impl FetchGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new cycle, superseding every ticket handed out before
    pub fn begin(&self) -> FetchTicket {
        let next = self.counter.current.get() + 1;
        self.counter.current.set(next);
        self.ticket()
    }

    /// Ticket for the cycle already running. Mutations use this so their
    /// result is dropped if the view reloads or goes away.
    pub fn ticket(&self) -> FetchTicket {
        FetchTicket {
            generation: self.counter.current.get(),
            counter: Rc::clone(&self.counter),
        }
    }

    /// View teardown: no ticket, old or new, is current afterwards
    pub fn close(&self) {
        self.counter.closed.set(true);
    }

    pub fn is_open(&self) -> bool {
        !self.counter.closed.get()
    }
}

#[derive(Debug, Clone)]
pub struct FetchTicket {
    generation: u64,
    counter: Rc<Counter>,
}

impl FetchTicket {
    pub fn is_current(&self) -> bool {
        !self.counter.closed.get() && self.counter.current.get() == self.generation
    }

    /// `value` if this ticket is still current
    pub fn accept<T>(&self, value: T) -> Option<T> {
        if self.is_current() {
            Some(value)
        } else {
            tracing::debug!(generation = self.generation, "discarding stale response");
            None
        }
    }
}
