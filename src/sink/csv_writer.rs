use crate::error::HurdatResult;
use crate::process::flags::IntensityFlags;
use crate::process::observation::{Observation, OUTPUT_COLUMNS};
use csv::WriterBuilder;
use std::io::Write;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn fmt_bool(v: bool) -> String {
    let s = if v { "True" } else { "False" };
    s.to_string()
}

fn fmt_opt<T: ToString>(v: Option<T>) -> String {
    v.map(|x| x.to_string()).unwrap_or_default()
}

/// Degrees always carry a decimal point, so `28.0` does not collapse to `28`.
fn fmt_degrees(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{:.1}", v)
    } else {
        v.to_string()
    }
}

fn fmt_flags(flags: &IntensityFlags) -> impl Iterator<Item = String> {
    flags.as_array().into_iter().map(|f| fmt_opt(f.map(fmt_bool)))
}

/// Render one row: positional index first, then [`OUTPUT_COLUMNS`] in order.
pub fn row_fields(index: usize, obs: &Observation) -> Vec<String> {
    let mut row = Vec::with_capacity(OUTPUT_COLUMNS.len() + 1);
    row.push(index.to_string());
    row.push(obs.identifier.clone());
    row.push(obs.name.clone());
    row.push(obs.num_pts.to_string());
    row.push(obs.year.to_string());
    row.push(obs.month.to_string());
    row.push(obs.day.to_string());
    row.push(obs.hour.to_string());
    row.push(obs.timestamp.format(TIMESTAMP_FORMAT).to_string());
    row.push(obs.date.clone());
    row.push(obs.time.clone());
    row.push(obs.record_id.clone());
    row.push(obs.status.clone());
    row.push(obs.latitude.clone());
    row.push(obs.longitude.clone());
    row.push(fmt_opt(obs.max_wind));
    row.push(fmt_opt(obs.min_pressure));
    row.extend(obs.wind_radii.iter().map(|r| fmt_opt(*r)));
    row.push(fmt_degrees(obs.lat_f));
    row.push(fmt_degrees(obs.lon_f));
    row.push(fmt_bool(obs.is_tropical));
    row.extend(fmt_flags(&obs.flags));
    row
}

/// Write the table as CSV with an unnamed leading index column.
pub fn write_csv<W: Write>(writer: W, observations: &[Observation]) -> HurdatResult<()> {
    let mut wtr = WriterBuilder::new().from_writer(writer);

    wtr.write_record(std::iter::once("").chain(OUTPUT_COLUMNS))?;
    for (idx, obs) in observations.iter().enumerate() {
        wtr.write_record(row_fields(idx, obs))?;
    }
    wtr.flush().map_err(csv::Error::from)?;
    Ok(())
}
