//! Writer trait for log output destinations

use super::{error::Result, record::Record};

/// A sink that receives every record dispatched by a [`Logger`](super::Logger).
///
/// `write` performs the side effect and hands the record back unchanged, or
/// returns the failure; the logger does not catch it.
pub trait Writer: Send {
    fn write<'r>(&mut self, record: &'r Record) -> Result<&'r Record>;
    fn name(&self) -> &str;
}

impl<W: Writer + ?Sized> Writer for Box<W> {
    fn write<'r>(&mut self, record: &'r Record) -> Result<&'r Record> {
        (**self).write(record)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
