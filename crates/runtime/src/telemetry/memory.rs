use super::{TelemetrySink, TickRecord};
use crate::error::Result;

/// Keeps every record in memory, for tests and post-run inspection.
#[derive(Debug, Default)]
pub struct InMemoryTelemetry {
    records: Vec<TickRecord>,
}

impl InMemoryTelemetry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[TickRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<TickRecord> {
        self.records
    }
}

impl TelemetrySink for InMemoryTelemetry {
    fn record(&mut self, record: &TickRecord) -> Result<()> {
        self.records.push(record.clone());
        Ok(())
    }
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullTelemetry;

impl TelemetrySink for NullTelemetry {
    fn record(&mut self, _record: &TickRecord) -> Result<()> {
        Ok(())
    }
}
