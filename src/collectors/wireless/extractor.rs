//! Link metric extraction from diagnostic output
//!
//! This module turns the line-oriented text printed by wireless diagnostic tools
//! (`iwconfig` and compatible) into a [`Sample`]. A typical block looks like:
//!
//! ```text
//!           Bit Rate=65 Mb/s   Tx-Power=20 dBm
//!           Link Quality=51/70  Signal level=-59 dBm
//! ```

use once_cell::sync::Lazy;
use regex::Regex;
use std::num::ParseFloatError;
use thiserror::Error;

static BIT_RATE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Bit Rate=([0-9.]+) Mb/s").expect("bit rate pattern is valid"));

static LINK_QUALITY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"Link Quality=([0-9.]+)/([0-9.]+)").expect("link quality pattern is valid")
});

/// Link metrics sampled during a single poll cycle
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Sample {
    /// Current bit rate in Mb/s
    pub bit_rate: f64,
    /// Link quality normalized to [0, 1]
    pub link_quality: f64,
}

/// Why a matched numeral was rejected
#[derive(Debug, Error)]
pub enum NumeralError {
    #[error(transparent)]
    Malformed(#[from] ParseFloatError),

    #[error("value out of range")]
    OutOfRange,
}

/// Errors raised when a matched numeral cannot be parsed
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Couldn't parse bit rate {value:?}, {source}")]
    BitRateParse {
        value: String,
        #[source]
        source: NumeralError,
    },

    #[error("Couldn't parse link quality {value:?}, {source}")]
    LinkQualityParse {
        value: String,
        #[source]
        source: NumeralError,
    },
}

/// Extracts bit rate and link quality from diagnostic text
///
/// Every line is checked against both patterns independently; when several lines
/// match, the last one wins. A pattern that never matches leaves its field at 0.
/// Only a matched numeral that fails to parse (e.g. `1.2.3`) is an error.
pub fn extract(text: &str) -> Result<Sample, ExtractError> {
    let mut sample = Sample::default();

    for line in text.lines() {
        if let Some(caps) = BIT_RATE_PATTERN.captures(line) {
            sample.bit_rate = parse_bit_rate(&caps[1])?;
        }

        if let Some(caps) = LINK_QUALITY_PATTERN.captures(line) {
            let numerator = parse_link_quality(&caps[1])?;
            let denominator = parse_link_quality(&caps[2])?;

            if denominator > 0.0 {
                let quality = numerator / denominator;
                // A tiny denominator can still overflow the ratio
                if !quality.is_finite() {
                    return Err(ExtractError::LinkQualityParse {
                        value: format!("{}/{}", &caps[1], &caps[2]),
                        source: NumeralError::OutOfRange,
                    });
                }
                sample.link_quality = quality;
            }
        }
    }

    Ok(sample)
}

/// Extracts a sample from raw command output, decoding it lossily as UTF-8
pub fn extract_bytes(output: &[u8]) -> Result<Sample, ExtractError> {
    extract(&String::from_utf8_lossy(output))
}

/// Parses a numeral, rejecting values that overflow to infinity
fn parse_numeral(value: &str) -> Result<f64, NumeralError> {
    let parsed = value.parse::<f64>()?;
    if parsed.is_finite() {
        Ok(parsed)
    } else {
        Err(NumeralError::OutOfRange)
    }
}

fn parse_bit_rate(value: &str) -> Result<f64, ExtractError> {
    parse_numeral(value).map_err(|source| ExtractError::BitRateParse {
        value: value.to_string(),
        source,
    })
}

fn parse_link_quality(value: &str) -> Result<f64, ExtractError> {
    parse_numeral(value).map_err(|source| ExtractError::LinkQualityParse {
        value: value.to_string(),
        source,
    })
}
