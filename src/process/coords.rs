//! Hemisphere-suffixed coordinate strings (`28.0N`, `94.8W`) to signed degrees.

use crate::error::{HurdatError, HurdatResult};

/// The latitude and longitude of one fix, in signed decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coords {
    pub lat: f64,
    pub lon: f64,
}

impl Coords {
    /// Both fields must already be stripped of padding.
    pub fn parse(line: usize, latitude: &str, longitude: &str) -> HurdatResult<Self> {
        Ok(Self {
            lat: parse_latitude(line, latitude)?,
            lon: parse_longitude(line, longitude)?,
        })
    }
}

pub fn parse_latitude(line: usize, s: &str) -> HurdatResult<f64> {
    parse_signed(line, s, ('N', 'S'), 90.0)
}

pub fn parse_longitude(line: usize, s: &str) -> HurdatResult<f64> {
    parse_signed(line, s, ('E', 'W'), 180.0)
}

fn parse_signed(line: usize, s: &str, (pos, neg): (char, char), limit: f64) -> HurdatResult<f64> {
    let malformed = || HurdatError::MalformedCoordinate {
        line,
        value: s.to_string(),
    };

    let suffix = s.chars().last().ok_or_else(malformed)?;
    let magnitude = &s[..s.len() - suffix.len_utf8()];

    // plain decimal only: no sign, exponent, inf or nan
    if magnitude.is_empty()
        || !magnitude.bytes().all(|b| b.is_ascii_digit() || b == b'.')
        || !magnitude.bytes().any(|b| b.is_ascii_digit())
    {
        return Err(malformed());
    }
    let degrees: f64 = magnitude.parse().map_err(|_| malformed())?;
    if degrees > limit {
        return Err(malformed());
    }

    let signed = if suffix == pos {
        degrees
    } else if suffix == neg {
        -degrees
    } else {
        return Err(malformed());
    };

    // keep 0.0W / 0.0S from turning into -0.0
    Ok(if signed == 0.0 { 0.0 } else { signed })
}
