use crate::error::{HurdatError, HurdatResult};
use chrono::{NaiveDate, NaiveDateTime};

/// Calendar fields of one observation plus the composed timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObservationTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub timestamp: NaiveDateTime,
}

fn all_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

/// Parse `YYYYMMDD` + `HMM`/`HHMM` into an hour-resolution timestamp.
///
/// The `time` field keeps its source padding; it is only trimmed here for
/// parsing. Minutes are not part of the timestamp.
pub fn parse_observation_time(
    line: usize,
    date: &str,
    time: &str,
) -> HurdatResult<ObservationTime> {
    let malformed = || HurdatError::MalformedDate {
        line,
        value: format!("{} {}", date, time),
    };

    if date.len() != 8 || !all_digits(date) {
        return Err(malformed());
    }
    let clock = time.trim();
    if !(3..=4).contains(&clock.len()) || !all_digits(clock) {
        return Err(malformed());
    }

    // fixed-width digits, so these cannot fail
    let year: i32 = date[0..4].parse().map_err(|_| malformed())?;
    let month: u32 = date[4..6].parse().map_err(|_| malformed())?;
    let day: u32 = date[6..8].parse().map_err(|_| malformed())?;
    let hour: u32 = clock[..clock.len() - 2].parse().map_err(|_| malformed())?;

    let timestamp = NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(hour, 0, 0))
        .ok_or_else(|| HurdatError::InvalidDate {
            line,
            value: format!("{} {}", date, clock),
        })?;

    Ok(ObservationTime {
        year,
        month,
        day,
        hour,
        timestamp,
    })
}
