// src/process/mod.rs
pub mod classify;
pub mod convert;
pub mod coords;
pub mod date_parser;
pub mod flags;
pub mod observation;
pub mod raw_table;
pub mod utils;

use crate::error::{HurdatError, HurdatResult};
use tracing::{debug, info, instrument, warn};

use classify::{classify_records, Record, StormHeader};
use convert::normalize_observation;
use observation::Observation;
use raw_table::RawRecord;

/// The normalized table plus per-run counts.
#[derive(Debug, Default)]
pub struct StormTable {
    pub observations: Vec<Observation>,
    /// Number of storm headers seen.
    pub storms: usize,
    /// Headers whose declared count disagrees with the rows that followed.
    pub count_mismatches: usize,
}

/// Fold state: the storm whose metadata is being carried forward.
#[derive(Default)]
struct Propagation {
    current: Option<StormHeader>,
    observed: u32,
    table: StormTable,
}

impl Propagation {
    fn open_storm(&mut self, header: StormHeader) {
        self.close_storm();
        debug!(id = %header.identifier, name = %header.name, "storm header");
        self.table.storms += 1;
        self.current = Some(header);
    }

    fn push(&mut self, raw: &RawRecord) -> HurdatResult<()> {
        let header = self
            .current
            .as_ref()
            .ok_or(HurdatError::OrphanObservation { line: raw.line })?;
        let obs = normalize_observation(header, raw)?;
        self.table.observations.push(obs);
        self.observed += 1;
        Ok(())
    }

    fn close_storm(&mut self) {
        if let Some(header) = self.current.take() {
            if header.num_pts != self.observed {
                warn!(
                    id = %header.identifier,
                    line = header.line,
                    declared = header.num_pts,
                    found = self.observed,
                    "observation count disagrees with storm header"
                );
                self.table.count_mismatches += 1;
            }
        }
        self.observed = 0;
    }

    fn finish(mut self) -> StormTable {
        self.close_storm();
        self.table
    }
}

/// Classify the raw rows, carry each storm header forward onto its
/// observations and normalize every observation, in source order.
#[instrument(level = "info", skip(records), fields(rows = records.len()))]
pub fn build_storm_table(records: &[RawRecord]) -> HurdatResult<StormTable> {
    let tagged = classify_records(records)?;

    let state = tagged
        .into_iter()
        .try_fold(
            Propagation::default(),
            |mut state, record| -> HurdatResult<Propagation> {
                match record {
                    Record::Header(header) => state.open_storm(header),
                    Record::Observation(raw) => state.push(raw)?,
                }
                Ok(state)
            },
        )?;

    let table = state.finish();
    info!(
        storms = table.storms,
        observations = table.observations.len(),
        mismatches = table.count_mismatches,
        "built storm table"
    );
    Ok(table)
}
