//! Series adaptation.
//!
//! Reshapes a sorted record list into the backend-neutral chart shape: a title,
//! one X value per record and one named Y group per probability dimension.


use crate::schema::{ModelVersion, Prediction};

/// Display form of X-axis timestamps.
pub const X_AXIS_DATE_FORMAT: &str = "%Y-%m-%d";

/// Values of one probability dimension, index-aligned with [`Series::x_axis`].
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesGroup {
    pub label: &'static str,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub title: &'static str,
    pub x_axis: Vec<ModelVersion>,
    pub groups: Vec<SeriesGroup>,
}

impl Series {
    /// Every group has exactly `records.len()` values, also when there are no
    /// records at all.
    pub fn from_records<P: Prediction>(records: &[P]) -> Self {
        let mut groups: Vec<SeriesGroup> = P::LABELS
            .iter()
            .map(|&label| SeriesGroup {
                label,
                values: Vec::with_capacity(records.len()),
            })
            .collect();

        for record in records {
            for (group, dimension) in groups.iter_mut().zip(record.dimensions()) {
                debug_assert_eq!(group.label, dimension.label);
                group.values.push(dimension.value);
            }
        }

        Self {
            title: P::TITLE,
            x_axis: records.iter().map(P::model_version).collect(),
            groups,
        }
    }

    pub fn len(&self) -> usize {
        self.x_axis.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x_axis.is_empty()
    }

    /// X-axis as `YYYY-MM-DD` strings in each timestamp's own offset.
    pub fn x_axis_labels(&self) -> Vec<String> {
        format_dates(&self.x_axis)
    }
}

pub fn format_dates(times: &[ModelVersion]) -> Vec<String> {
    times
        .iter()
        .map(|t| t.format(X_AXIS_DATE_FORMAT).to_string())
        .collect()
}
