//! Prediction record schemas.
//!
//! Each schema is a plain serde struct plus a [`Prediction`] impl that tells the
//! rest of the pipeline how to find its lines in the event log (the
//! discriminator), what to call the chart, and which probability dimensions to
//! plot. [`ChartSchema`] is the tagged list of every schema the tool knows,
//! iterated in pass order.

mod age;
mod gender;
mod model_version;
mod nullable;

pub use age::AgePrediction;
pub use gender::GenderPrediction;
pub use model_version::{ModelVersion, zero_model_version};

use crate::error::Result;
use crate::extract::extract_records;
use crate::series::Series;
use crate::sort::sort_by_model_version;
use serde::de::DeserializeOwned;
use std::io::Read;

/// One named sub-probability of a single record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbabilityDimension {
    pub label: &'static str,
    pub value: f64,
}

impl ProbabilityDimension {
    pub fn new(label: &'static str, value: f64) -> Self {
        Self { label, value }
    }
}

pub trait Prediction: DeserializeOwned {
    /// Substring marking a log line as belonging to this schema.
    const DISCRIMINATOR: &'static str;

    const TITLE: &'static str;

    /// Dimension names, in the order [`Prediction::dimensions`] yields them.
    const LABELS: &'static [&'static str];

    fn model_version(&self) -> ModelVersion;

    fn dimensions(&self) -> Vec<ProbabilityDimension>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartSchema {
    Gender,
    Age,
}

impl ChartSchema {
    pub const ALL: [ChartSchema; 2] = [ChartSchema::Gender, ChartSchema::Age];

    pub fn name(self) -> &'static str {
        match self {
            ChartSchema::Gender => "gender",
            ChartSchema::Age => "age",
        }
    }

    pub fn discriminator(self) -> &'static str {
        match self {
            ChartSchema::Gender => GenderPrediction::DISCRIMINATOR,
            ChartSchema::Age => AgePrediction::DISCRIMINATOR,
        }
    }

    pub fn file_name(self) -> &'static str {
        match self {
            ChartSchema::Gender => "gender.html",
            ChartSchema::Age => "age.html",
        }
    }

    /// Extract, sort and adapt this schema's records from `reader`.
    pub fn series_from_reader<R: Read>(self, reader: R) -> Result<Series> {
        match self {
            ChartSchema::Gender => build_series::<GenderPrediction, R>(reader),
            ChartSchema::Age => build_series::<AgePrediction, R>(reader),
        }
    }
}

fn build_series<P: Prediction, R: Read>(reader: R) -> Result<Series> {
    let mut records = extract_records::<P, R>(reader)?;
    sort_by_model_version(&mut records);
    Ok(Series::from_records(&records))
}
