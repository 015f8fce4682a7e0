//! Writer implementations

pub mod memory;
pub mod rotating_file;

pub use memory::{MemoryWriter, SharedRecords};
pub use rotating_file::{RotatingFileWriter, RotationLimits, BYTES_PER_MB};

pub use crate::core::Writer;
