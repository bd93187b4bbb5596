use crate::application::payoff::PayoffSchedule;
use crate::error::Result;
use std::io::Write;

const HEADER: [&str; 5] = ["month", "interest", "payment", "principal", "balance"];

/// Writes a debt payoff schedule as CSV, one row per billed month.
pub struct ScheduleWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> ScheduleWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::WriterBuilder::new()
                .has_headers(false)
                .from_writer(sink),
        }
    }

    /// Writes the header and every step, then flushes.
    ///
    /// A schedule with no steps (nothing owed) still gets its header.
    pub fn write_schedule(&mut self, schedule: &PayoffSchedule) -> Result<()> {
        self.writer.write_record(HEADER)?;
        for step in schedule.steps() {
            self.writer.serialize(step)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
