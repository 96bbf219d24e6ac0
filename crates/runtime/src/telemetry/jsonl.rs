use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::{TelemetrySink, TickRecord};
use crate::error::Result;

/// One JSON object per line.
pub struct JsonLinesTelemetry<W: Write> {
    writer: W,
}

impl JsonLinesTelemetry<BufWriter<File>> {
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::create(path.as_ref())?;
        tracing::debug!("Created telemetry log: {}", path.as_ref().display());
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> JsonLinesTelemetry<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> TelemetrySink for JsonLinesTelemetry<W> {
    fn record(&mut self, record: &TickRecord) -> Result<()> {
        serde_json::to_writer(&mut self.writer, record)?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
