use crate::process::flags::IntensityFlags;
use crate::process::raw_table::WIND_RADII_COLUMNS;
use chrono::NaiveDateTime;

/// Output columns, in order. Sinks prepend a positional index column.
pub const OUTPUT_COLUMNS: [&str; 37] = [
    "identifier",
    "name",
    "num_pts",
    "year",
    "month",
    "day",
    "hour",
    "timestamp",
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
    "lat_f",
    "lon_f",
    "is_tropical",
    "ts_flag",
    "cat1",
    "cat2",
    "cat3",
    "cat4",
    "cat5",
];

/// One storm fix with its storm's metadata filled in.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub identifier: String,
    pub name: String,
    pub num_pts: u32,
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub timestamp: NaiveDateTime,
    /// `date`, `time` and `record_id` keep their source text verbatim.
    pub date: String,
    pub time: String,
    pub record_id: String,
    pub status: String,
    pub latitude: String,
    pub longitude: String,
    pub max_wind: Option<i32>,
    pub min_pressure: Option<i32>,
    pub wind_radii: [Option<i32>; WIND_RADII_COLUMNS],
    pub lat_f: f64,
    pub lon_f: f64,
    pub is_tropical: bool,
    pub flags: IntensityFlags,
}
