//! Repository trait definitions for data persistence

use std::cell::RefCell;
use std::collections::HashMap;

use chrono::NaiveDate;

use crate::model::DailyCounter;
use courier_types::{Error, Result, SequenceKind};

/// Daily AWB / bag / truck counters
pub trait SequenceRepository {
    /// Issue the next sequence number for `kind` on `date` (starts at 1).
    ///
    /// Fails with [`Error::Sequence`] once `u32::MAX` numbers were issued that day.
    fn next_sequence(&self, kind: SequenceKind, date: NaiveDate) -> Result<u32>;

    /// Last sequence number issued for `kind` on `date`, 0 if none
    fn current_sequence(&self, kind: SequenceKind, date: NaiveDate) -> Result<u32>;
}

pub fn counter_exhausted(kind: SequenceKind, date: NaiveDate) -> Error {
    Error::Sequence(format!("{} counter exhausted for {}", kind, date))
}

/// Process-local counters, lost on exit
#[derive(Debug, Default)]
pub struct InMemorySequenceRepository {
    counters: RefCell<HashMap<SequenceKind, DailyCounter>>,
}

impl InMemorySequenceRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SequenceRepository for InMemorySequenceRepository {
    fn next_sequence(&self, kind: SequenceKind, date: NaiveDate) -> Result<u32> {
        let mut counters = self.counters.borrow_mut();
        let counter = counters.entry(kind).or_insert_with(|| DailyCounter::new(date));
        counter.advance(date).ok_or_else(|| counter_exhausted(kind, date))
    }

    fn current_sequence(&self, kind: SequenceKind, date: NaiveDate) -> Result<u32> {
        Ok(self
            .counters
            .borrow()
            .get(&kind)
            .map(|c| c.current(date))
            .unwrap_or(0))
    }
}
