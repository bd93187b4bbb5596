use std::fs::File;
use std::io::Error;
use std::path::Path;

pub const HEADER: [&str; 7] = ["operation", "a", "b", "principal", "rate", "months", "payment"];

/// Writes a batch request file with the standard header.
pub fn write_requests(path: &Path, rows: &[[&str; 7]]) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(HEADER)?;
    for row in rows {
        wtr.write_record(row)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Writes `count` debt payoff requests with growing principals.
pub fn write_payoff_requests(path: &Path, count: usize) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);
    wtr.write_record(HEADER)?;

    for i in 1..=count {
        let principal = (i * 100).to_string();
        wtr.write_record(["debt_payoff", "", "", &principal, "1,5", "", "1000"])?;
    }

    wtr.flush()?;
    Ok(())
}
