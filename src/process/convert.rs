use crate::error::HurdatResult;
use crate::process::classify::StormHeader;
use crate::process::coords::Coords;
use crate::process::date_parser::parse_observation_time;
use crate::process::flags::{is_tropical, IntensityFlags};
use crate::process::observation::Observation;
use crate::process::raw_table::{RawRecord, WIND_RADII_COLUMNS};
use crate::process::utils::{clean_str, parse_optional_int};

/// Turn one observation row into its final typed shape under `header`.
///
/// Only `status`, `latitude` and `longitude` are stripped here; `date`, `time`
/// and `record_id` pass through untouched.
pub fn normalize_observation(header: &StormHeader, raw: &RawRecord) -> HurdatResult<Observation> {
    let when = parse_observation_time(raw.line, raw.date(), raw.time())?;

    let status = clean_str(raw.status()).to_string();
    let latitude = clean_str(raw.latitude()).to_string();
    let longitude = clean_str(raw.longitude()).to_string();
    let coords = Coords::parse(raw.line, &latitude, &longitude)?;

    let max_wind = parse_optional_int(raw.max_wind());
    let mut wind_radii = [None; WIND_RADII_COLUMNS];
    for (slot, field) in wind_radii.iter_mut().zip(raw.wind_radii()) {
        *slot = parse_optional_int(field);
    }

    Ok(Observation {
        identifier: header.identifier.clone(),
        name: header.name.clone(),
        num_pts: header.num_pts,
        year: when.year,
        month: when.month,
        day: when.day,
        hour: when.hour,
        timestamp: when.timestamp,
        date: raw.date().to_string(),
        time: raw.time().to_string(),
        record_id: raw.record_id().to_string(),
        is_tropical: is_tropical(&status),
        status,
        latitude,
        longitude,
        max_wind,
        min_pressure: parse_optional_int(raw.min_pressure()),
        wind_radii,
        lat_f: coords.lat,
        lon_f: coords.lon,
        flags: IntensityFlags::from_max_wind(max_wind),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HurdatError;

    fn header() -> StormHeader {
        StormHeader {
            identifier: "AL011851".into(),
            name: "UNNAMED".into(),
            num_pts: 14,
            line: 1,
        }
    }

    fn raw(line: &str) -> RawRecord {
        RawRecord::from_fields(2, line.split(','))
    }

    #[test]
    fn normalizes_a_full_row() {
        let row = raw("18510625, 0000,  , HU, 28.0N,  94.8W,  80, -999,  10,  20,  30,  40, -999, -999, -999, -999, -999, -999, -999, -999,");
        let obs = normalize_observation(&header(), &row).unwrap();

        assert_eq!(obs.identifier, "AL011851");
        assert_eq!(obs.name, "UNNAMED");
        assert_eq!(obs.num_pts, 14);
        assert_eq!((obs.year, obs.month, obs.day, obs.hour), (1851, 6, 25, 0));
        assert_eq!(obs.time, " 0000");
        assert_eq!(obs.record_id, "  ");
        assert_eq!(obs.status, "HU");
        assert_eq!(obs.latitude, "28.0N");
        assert_eq!(obs.longitude, "94.8W");
        assert_eq!(obs.lat_f, 28.0);
        assert_eq!(obs.lon_f, -94.8);
        assert_eq!(obs.max_wind, Some(80));
        assert_eq!(obs.min_pressure, Some(-999));
        assert_eq!(&obs.wind_radii[..4], &[Some(10), Some(20), Some(30), Some(40)]);
        assert!(obs.is_tropical);
        assert_eq!(obs.flags.cat1, Some(true));
        assert_eq!(obs.flags.cat2, Some(false));
    }

    #[test]
    fn missing_wind_leaves_flags_undefined() {
        let row = raw("18510625, 0600,  , TD, 28.0N,  94.8W,    , -999");
        let obs = normalize_observation(&header(), &row).unwrap();
        assert_eq!(obs.max_wind, None);
        assert_eq!(obs.flags.ts, None);
        assert!(!obs.is_tropical);
        assert!(obs.wind_radii.iter().all(Option::is_none));
    }

    #[test]
    fn bad_coordinate_aborts() {
        let row = raw("18510625, 0600,  , HU, 28.0Q,  94.8W,  80, -999");
        assert!(matches!(
            normalize_observation(&header(), &row),
            Err(HurdatError::MalformedCoordinate { line: 2, .. })
        ));
    }
}
