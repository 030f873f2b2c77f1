//! JSON-lines sink: one serialized record per line

use crate::model::Meeting;
use crate::output::traits::{OutputResult, RecordSink};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub struct JsonlSink {
    writer: BufWriter<File>,
    records_written: usize,
}

impl JsonlSink {
    /// Creates (truncating) the records file at `path`
    pub fn create(path: &Path) -> OutputResult<Self> {
        let file = File::create(path)?;
        Ok(Self {
            writer: BufWriter::new(file),
            records_written: 0,
        })
    }

    pub fn records_written(&self) -> usize {
        self.records_written
    }
}

impl RecordSink for JsonlSink {
    fn emit(&mut self, meeting: &Meeting) -> OutputResult<()> {
        serde_json::to_writer(&mut self.writer, meeting)?;
        self.writer.write_all(b"\n")?;
        self.records_written += 1;
        Ok(())
    }

    fn finalize(&mut self) -> OutputResult<()> {
        self.writer.flush()?;
        Ok(())
    }
}
