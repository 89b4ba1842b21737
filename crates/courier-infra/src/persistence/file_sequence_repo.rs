//! File-based sequence counter repository

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::{debug, warn};

use courier_domain::model::DailyCounter;
use courier_domain::repository::{counter_exhausted, SequenceRepository};
use courier_types::{Error, Result, SequenceKind};

const STORE_FILE: &str = "sequences.json";

/// Counters kept in `sequences.json` under the store directory.
///
/// Every issued number is flushed before it is returned, so a restart never
/// hands out the same number twice on the same day.
pub struct FileSequenceRepository {
    store_path: PathBuf,
    counters: RefCell<HashMap<SequenceKind, DailyCounter>>,
}

impl FileSequenceRepository {
    /// Create or load the counter file
    pub fn open(store_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&store_dir)?;
        let store_path = store_dir.join(STORE_FILE);

        let counters: HashMap<SequenceKind, DailyCounter> = if store_path.exists() {
            let file = File::open(&store_path)?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).map_err(|e| {
                Error::Sequence(format!("{} is corrupted: {}", store_path.display(), e))
            })?
        } else {
            HashMap::new()
        };
        debug!(path = %store_path.display(), "opened sequence store");

        Ok(Self {
            store_path,
            counters: RefCell::new(counters),
        })
    }

    pub fn store_path(&self) -> &Path {
        &self.store_path
    }

    fn restore(&self, kind: SequenceKind, previous: Option<DailyCounter>) {
        let mut counters = self.counters.borrow_mut();
        match previous {
            Some(counter) => {
                counters.insert(kind, counter);
            }
            None => {
                counters.remove(&kind);
            }
        }
    }

    /// Written to a temp file, then renamed over the store
    fn persist(&self) -> Result<()> {
        let tmp_path = self.store_path.with_extension("json.tmp");
        {
            let file = File::create(&tmp_path)?;
            let writer = BufWriter::new(file);
            serde_json::to_writer_pretty(writer, &*self.counters.borrow())?;
        }
        fs::rename(&tmp_path, &self.store_path)?;
        Ok(())
    }
}

impl SequenceRepository for FileSequenceRepository {
    fn next_sequence(&self, kind: SequenceKind, date: NaiveDate) -> Result<u32> {
        let (previous, seq) = {
            let mut counters = self.counters.borrow_mut();
            let previous = counters.get(&kind).copied();
            let counter = counters.entry(kind).or_insert_with(|| DailyCounter::new(date));
            (previous, counter.advance(date))
        };

        let Some(seq) = seq else {
            self.restore(kind, previous);
            return Err(counter_exhausted(kind, date));
        };

        // A number that never reached disk is not handed out
        if let Err(e) = self.persist() {
            self.restore(kind, previous);
            warn!(%kind, %date, error = %e, "failed to persist sequence store");
            return Err(e);
        }
        debug!(%kind, %date, seq, "issued sequence number");
        Ok(seq)
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
