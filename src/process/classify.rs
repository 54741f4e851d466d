use crate::error::{HurdatError, HurdatResult};
use crate::process::raw_table::RawRecord;
use crate::process::utils::clean_str;

/// The two row shapes that share the raw 20-column layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Header,
    Observation,
}

impl RecordKind {
    /// Inspect the first two characters of the `date` field: letters mark a
    /// storm header (`AL011851`), digits an observation (`18510625`).
    pub fn classify(date: &str) -> Option<Self> {
        let mut chars = date.chars();
        let prefix = [chars.next()?, chars.next()?];
        if prefix.iter().all(char::is_ascii_alphabetic) {
            Some(RecordKind::Header)
        } else if prefix.iter().all(char::is_ascii_digit) {
            Some(RecordKind::Observation)
        } else {
            None
        }
    }
}

/// Storm-level metadata carried down onto every observation that follows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StormHeader {
    pub identifier: String,
    pub name: String,
    pub num_pts: u32,
    /// Source line of the header row.
    pub line: usize,
}

impl StormHeader {
    /// Header rows overload the observation columns: `date` holds the
    /// identifier, `time` the name, `record_id` the observation count.
    pub fn from_record(record: &RawRecord) -> HurdatResult<Self> {
        let count = clean_str(record.record_id());
        let num_pts = count.parse().map_err(|_| HurdatError::MalformedHeader {
            line: record.line,
            value: count.to_string(),
        })?;

        Ok(Self {
            identifier: record.date().to_string(),
            name: clean_str(record.time()).to_string(),
            num_pts,
            line: record.line,
        })
    }
}

/// A raw row after classification.
#[derive(Debug, Clone, PartialEq)]
pub enum Record<'a> {
    Header(StormHeader),
    Observation(&'a RawRecord),
}

/// Tag every row, in source order. Rows matching neither shape abort the run.
pub fn classify_records(records: &[RawRecord]) -> HurdatResult<Vec<Record<'_>>> {
    records
        .iter()
        .map(|raw| match RecordKind::classify(raw.date()) {
            Some(RecordKind::Header) => StormHeader::from_record(raw).map(Record::Header),
            Some(RecordKind::Observation) => Ok(Record::Observation(raw)),
            None => Err(HurdatError::UnrecognizedRecord {
                line: raw.line,
                field: raw.date().to_string(),
            }),
        })
        .collect()
}
