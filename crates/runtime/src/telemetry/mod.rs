//! Per-tick telemetry.
//!
//! A [`TickRecord`] is captured from post-tick state and handed to a
//! [`TelemetrySink`]. Sinks are read-only observers: nothing they do can
//! influence the next tick.

mod csv;
mod jsonl;
mod memory;
mod record;

pub use csv::CsvTelemetry;
pub use jsonl::JsonLinesTelemetry;
pub use memory::{InMemoryTelemetry, NullTelemetry};
pub use record::{ActionLabel, TickRecord};

use crate::error::Result;

/// Destination for tick records.
pub trait TelemetrySink {
    /// Appends one record.
    fn record(&mut self, record: &TickRecord) -> Result<()>;

    /// Flushes buffered output.
    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

impl<S: TelemetrySink + ?Sized> TelemetrySink for &mut S {
    fn record(&mut self, record: &TickRecord) -> Result<()> {
        (**self).record(record)
    }

    fn flush(&mut self) -> Result<()> {
        (**self).flush()
    }
}

impl<S: TelemetrySink + ?Sized> TelemetrySink for Box<S> {
    fn record(&mut self, record: &TickRecord) -> Result<()> {
        (**self).record(record)
    }

    fn flush(&mut self) -> Result<()> {
        (**self).flush()
    }
}
