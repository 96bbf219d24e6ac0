use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::{TelemetrySink, TickRecord};
use crate::error::Result;

const HEADER: &str = "Tick,Position_Row,Position_Col,Current_Action,Target,Node_Status,Items_Collected,Exploration_Percent";

/// Comma-separated tick log with a fixed header row.
///
/// Targets are written as a quoted `"(row, col)"` pair or `None`; the
/// explored share is written with two decimals and a trailing `%`.
pub struct CsvTelemetry<W: Write> {
    writer: W,
}

impl CsvTelemetry<BufWriter<File>> {
    /// Creates (or truncates) `path` and writes the header.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::create(path.as_ref())?;
        tracing::debug!("Created telemetry log: {}", path.as_ref().display());
        Self::new(BufWriter::new(file))
    }
}

impl<W: Write> CsvTelemetry<W> {
    pub fn new(mut writer: W) -> Result<Self> {
        writeln!(writer, "{HEADER}")?;
        Ok(Self { writer })
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> TelemetrySink for CsvTelemetry<W> {
    fn record(&mut self, record: &TickRecord) -> Result<()> {
        let target = match record.target {
            Some(cell) => format!("\"{cell}\""),
            None => "None".to_owned(),
        };
        writeln!(
            self.writer,
            "{},{},{},{},{},{},{},{:.2}%",
            record.tick,
            record.row,
            record.col,
            record.action,
            target,
            record.status,
            record.items_collected,
            record.explored_percent,
        )?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
