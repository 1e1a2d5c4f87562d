//! Line Extraction
//!
//! Pulls the records of one schema out of a heterogeneous, newline-delimited
//! event log. A line belongs to the schema when its text contains the schema's
//! discriminator; no JSON-aware filtering happens before that test.
//!
//! Records of a schema are expected to sit in one contiguous block. Extraction
//! stops at the first non-matching line after a match. Discriminator lines past
//! that point are counted and reported with a warning, never decoded.


use crate::error::{PredictionError, Result};
use crate::schema::Prediction;
use std::io::Read;
use tracing::{debug, warn};

/// Decode every record of schema `P` from the first contiguous run of
/// matching lines in `reader`, preserving source order.
pub fn extract_records<P: Prediction, R: Read>(mut reader: R) -> Result<Vec<P>> {
    let mut data = Vec::new();
    reader
        .read_to_end(&mut data)
        .map_err(PredictionError::ReadStream)?;

    extract_from_bytes(&data)
}

pub fn extract_from_bytes<P: Prediction>(data: &[u8]) -> Result<Vec<P>> {
    let needle = P::DISCRIMINATOR.as_bytes();
    let mut records = Vec::new();
    let mut lines = data.split(|b| *b == b'\n').enumerate();

    for (idx, line) in lines.by_ref() {
        if !contains(line, needle) {
            if records.is_empty() {
                continue;
            }
            debug!(
                schema = P::DISCRIMINATOR,
                line = idx + 1,
                "contiguous run ended"
            );
            break;
        }

        let record = serde_json::from_slice::<P>(line).map_err(|source| {
            PredictionError::Decode {
                schema: P::DISCRIMINATOR,
                line: idx + 1,
                source,
            }
        })?;
        records.push(record);
    }

    let dropped = lines.filter(|(_, line)| contains(line, needle)).count();
    if dropped > 0 {
        warn!(
            schema = P::DISCRIMINATOR,
            dropped, "matching lines found after the contiguous run were skipped"
        );
    }

    Ok(records)
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    needle.is_empty() || haystack.windows(needle.len()).any(|w| w == needle)
}
