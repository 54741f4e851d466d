use crate::error::HurdatResult;
use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use std::io::{Read, Write};
use tracing::debug;

/// Column names of the raw HURDAT2 rows, in file order.
pub const RAW_COLUMNS: [&str; 20] = [
    "date",
    "time",
    "record_id",
    "status",
    "latitude",
    "longitude",
    "max_wind",
    "min_pressure",
    "ne34ktr",
    "se34ktr",
    "sw34ktr",
    "nw34ktr",
    "ne50ktr",
    "se50ktr",
    "sw50ktr",
    "nw50ktr",
    "ne64ktr",
    "se64ktr",
    "sw64ktr",
    "nw64ktr",
];

/// Number of wind-radii columns trailing `min_pressure`.
pub const WIND_RADII_COLUMNS: usize = 12;

/// One source row, padded (or truncated) to the 20-column raw schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    /// 1-based line in the source text, for error messages.
    pub line: usize,
    pub fields: [String; 20],
}

impl RawRecord {
    pub fn from_fields<'a, I>(line: usize, values: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut fields: [String; 20] = Default::default();
        for (slot, value) in fields.iter_mut().zip(values) {
            *slot = value.to_string();
        }
        Self { line, fields }
    }

    pub fn date(&self) -> &str {
        &self.fields[0]
    }

    pub fn time(&self) -> &str {
        &self.fields[1]
    }

    pub fn record_id(&self) -> &str {
        &self.fields[2]
    }

    pub fn status(&self) -> &str {
        &self.fields[3]
    }

    pub fn latitude(&self) -> &str {
        &self.fields[4]
    }

    pub fn longitude(&self) -> &str {
        &self.fields[5]
    }

    pub fn max_wind(&self) -> &str {
        &self.fields[6]
    }

    pub fn min_pressure(&self) -> &str {
        &self.fields[7]
    }

    pub fn wind_radii(&self) -> &[String] {
        &self.fields[8..8 + WIND_RADII_COLUMNS]
    }
}

fn is_column_row(record: &StringRecord) -> bool {
    record.len() >= RAW_COLUMNS.len()
        && record
            .iter()
            .zip(RAW_COLUMNS.iter())
            .all(|(field, name)| field.trim() == *name)
}

/// Read every row of a headerless or column-named raw file.
///
/// Rows are kept in source order. A leading row equal to [`RAW_COLUMNS`] is the
/// cache's column-name row and is skipped.
pub fn read_raw_records<R: Read>(reader: R) -> HurdatResult<Vec<RawRecord>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut records = Vec::new();
    for (idx, result) in rdr.records().enumerate() {
        let record = result?;
        if idx == 0 && is_column_row(&record) {
            debug!("skipping column-name row");
            continue;
        }
        let line = record
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(idx + 1);
        records.push(RawRecord::from_fields(line, record.iter()));
    }

    debug!(rows = records.len(), "read raw records");
    Ok(records)
}

/// Write rows in the cache layout: column-name row first, no index column.
pub fn write_raw_records<W: Write>(writer: W, records: &[RawRecord]) -> HurdatResult<()> {
    let mut wtr = WriterBuilder::new().from_writer(writer);
    wtr.write_record(RAW_COLUMNS)?;
    for record in records {
        wtr.write_record(&record.fields)?;
    }
    wtr.flush().map_err(csv::Error::from)?;
    Ok(())
}
