//! Persistence implementations
//!
//! File-based implementations of the domain repository traits.

mod file_sequence_repo;

pub use file_sequence_repo::FileSequenceRepository;
