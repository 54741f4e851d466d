use crate::process::observation::{Observation, OUTPUT_COLUMNS};
use crate::process::raw_table::WIND_RADII_COLUMNS;
use anyhow::{Context, Result};
use arrow::{
    array::{
        ArrayRef, BooleanArray, Float64Array, Int32Array, StringArray, TimestampSecondArray,
        UInt32Array, UInt64Array,
    },
    datatypes::{DataType, Field, Schema, TimeUnit},
    record_batch::RecordBatch,
};
use parquet::{arrow::ArrowWriter, basic::Compression, file::properties::WriterProperties};
use std::{io::Write, sync::Arc};

/// Name of the positional index column; parquet columns need a name.
pub const INDEX_COLUMN: &str = "index";

/// Arrow type of each entry in [`OUTPUT_COLUMNS`].
fn column_type(name: &str) -> (DataType, bool) {
    match name {
        "identifier" | "name" | "date" | "time" | "record_id" | "status" | "latitude"
        | "longitude" => (DataType::Utf8, false),
        "num_pts" | "month" | "day" | "hour" => (DataType::UInt32, false),
        "year" => (DataType::Int32, false),
        "timestamp" => (DataType::Timestamp(TimeUnit::Second, None), false),
        "lat_f" | "lon_f" => (DataType::Float64, false),
        "is_tropical" => (DataType::Boolean, false),
        "ts_flag" | "cat1" | "cat2" | "cat3" | "cat4" | "cat5" => (DataType::Boolean, true),
        // max_wind, min_pressure and the wind radii
        _ => (DataType::Int32, true),
    }
}

pub fn build_schema() -> Schema {
    let mut fields = Vec::with_capacity(OUTPUT_COLUMNS.len() + 1);
    fields.push(Field::new(INDEX_COLUMN, DataType::UInt64, false));
    for name in OUTPUT_COLUMNS {
        let (ty, nullable) = column_type(name);
        fields.push(Field::new(name, ty, nullable));
    }
    Schema::new(fields)
}

fn strings<'a>(obs: &'a [Observation], f: impl Fn(&'a Observation) -> &'a str) -> ArrayRef {
    Arc::new(StringArray::from(obs.iter().map(f).collect::<Vec<_>>()))
}

fn u32s(obs: &[Observation], f: impl Fn(&Observation) -> u32) -> ArrayRef {
    Arc::new(UInt32Array::from(obs.iter().map(f).collect::<Vec<_>>()))
}

fn ints(obs: &[Observation], f: impl Fn(&Observation) -> Option<i32>) -> ArrayRef {
    Arc::new(Int32Array::from(obs.iter().map(f).collect::<Vec<_>>()))
}

fn flags(obs: &[Observation], f: impl Fn(&Observation) -> Option<bool>) -> ArrayRef {
    Arc::new(BooleanArray::from(obs.iter().map(f).collect::<Vec<_>>()))
}

/// Assemble the whole table into a single record batch.
pub fn build_batch(obs: &[Observation]) -> Result<RecordBatch> {
    let mut cols: Vec<ArrayRef> = Vec::with_capacity(OUTPUT_COLUMNS.len() + 1);

    cols.push(Arc::new(UInt64Array::from_iter_values(0..obs.len() as u64)));
    cols.push(strings(obs, |o| o.identifier.as_str()));
    cols.push(strings(obs, |o| o.name.as_str()));
    cols.push(u32s(obs, |o| o.num_pts));
    cols.push(Arc::new(Int32Array::from(
        obs.iter().map(|o| o.year).collect::<Vec<_>>(),
    )));
    cols.push(u32s(obs, |o| o.month));
    cols.push(u32s(obs, |o| o.day));
    cols.push(u32s(obs, |o| o.hour));
    cols.push(Arc::new(TimestampSecondArray::from(
        obs.iter()
            .map(|o| o.timestamp.and_utc().timestamp())
            .collect::<Vec<_>>(),
    )));
    cols.push(strings(obs, |o| o.date.as_str()));
    cols.push(strings(obs, |o| o.time.as_str()));
    cols.push(strings(obs, |o| o.record_id.as_str()));
    cols.push(strings(obs, |o| o.status.as_str()));
    cols.push(strings(obs, |o| o.latitude.as_str()));
    cols.push(strings(obs, |o| o.longitude.as_str()));
    cols.push(ints(obs, |o| o.max_wind));
    cols.push(ints(obs, |o| o.min_pressure));
    for i in 0..WIND_RADII_COLUMNS {
        cols.push(ints(obs, |o| o.wind_radii[i]));
    }
    cols.push(Arc::new(Float64Array::from(
        obs.iter().map(|o| o.lat_f).collect::<Vec<_>>(),
    )));
    cols.push(Arc::new(Float64Array::from(
        obs.iter().map(|o| o.lon_f).collect::<Vec<_>>(),
    )));
    cols.push(Arc::new(BooleanArray::from(
        obs.iter().map(|o| o.is_tropical).collect::<Vec<_>>(),
    )));
    cols.push(flags(obs, |o| o.flags.ts));
    cols.push(flags(obs, |o| o.flags.cat1));
    cols.push(flags(obs, |o| o.flags.cat2));
    cols.push(flags(obs, |o| o.flags.cat3));
    cols.push(flags(obs, |o| o.flags.cat4));
    cols.push(flags(obs, |o| o.flags.cat5));

    RecordBatch::try_new(Arc::new(build_schema()), cols).context("building observation batch")
}

/// Write the table as a single-row-group, Snappy-compressed parquet file.
pub fn write_parquet<W: Write + Send>(writer: W, observations: &[Observation]) -> Result<()> {
    let batch = build_batch(observations)?;

    let props = WriterProperties::builder()
        .set_compression(Compression::SNAPPY)
        .set_max_row_group_size(observations.len().max(1))
        .build();

    let mut writer = ArrowWriter::try_new(writer, batch.schema(), Some(props))
        .context("creating parquet writer")?;
    writer.write(&batch).context("writing observation batch")?;
    writer.close().context("closing parquet writer")?;
    Ok(())
}
