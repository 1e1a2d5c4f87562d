use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime};
use serde::{Deserialize, Deserializer};

pub type ModelVersion = DateTime<FixedOffset>;

/// `0001-01-01T00:00:00Z`, used when a record carries no model version.
pub fn zero_model_version() -> ModelVersion {
    NaiveDate::from_ymd_opt(1, 1, 1)
        .unwrap_or_default()
        .and_time(NaiveTime::MIN)
        .and_utc()
        .fixed_offset()
}

/// Accepts an RFC 3339 string or `null`.
pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<ModelVersion, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<ModelVersion>::deserialize(deserializer)?.unwrap_or_else(zero_model_version))
}
