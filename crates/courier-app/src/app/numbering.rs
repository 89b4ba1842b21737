//! AWB / bag / truck number issuing

use chrono::{Local, NaiveDate};
use tracing::info;

use courier_domain::repository::SequenceRepository;
use courier_domain::service::format_sequence_number;
use courier_types::{Result, SequenceKind};

/// Issues printed document numbers from a daily counter store
pub struct NumberingService<R: SequenceRepository> {
    repo: R,
}

impl<R: SequenceRepository> NumberingService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Next number for today's local date
    pub fn issue(&self, kind: SequenceKind) -> Result<String> {
        self.issue_on(kind, Local::now().date_naive())
    }

    pub fn issue_on(&self, kind: SequenceKind, date: NaiveDate) -> Result<String> {
        let seq = self.repo.next_sequence(kind, date)?;
        let number = format_sequence_number(kind, date, seq);
        info!(%kind, %number, "issued document number");
        Ok(number)
    }

    /// Most recently issued number on `date`, if any
    pub fn last_issued(&self, kind: SequenceKind, date: NaiveDate) -> Result<Option<String>> {
        let seq = self.repo.current_sequence(kind, date)?;
        Ok((seq > 0).then(|| format_sequence_number(kind, date, seq)))
    }
}
