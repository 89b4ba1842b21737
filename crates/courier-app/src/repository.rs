//! Repository adapters for persistence layer

use courier_infra::persistence::FileSequenceRepository;
use courier_types::Result;

use crate::config::Config;

/// Open the file-based sequence counters in the configured store directory
pub fn open_sequence_repo(config: &Config) -> Result<FileSequenceRepository> {
    let store_dir = config.store_dir()?;
    FileSequenceRepository::open(store_dir)
}
