use crate::schema::Prediction;

/// Order records by model version, oldest first. Equal timestamps keep their
/// source order.
pub fn sort_by_model_version<P: Prediction>(records: &mut [P]) {
    records.sort_by_key(|record| record.model_version());
}

#[cfg(test)]
mod tests {
    use super::sort_by_model_version;
    use crate::schema::{GenderPrediction, zero_model_version};
    use chrono::DateTime;
    use pretty_assertions::assert_eq;

    fn gender(user_id: &str, model_version: &str) -> GenderPrediction {
        GenderPrediction {
            user_id: user_id.to_string(),
            model_version: DateTime::parse_from_rfc3339(model_version).unwrap(),
            ..GenderPrediction::default()
        }
    }

    fn ids(records: &[GenderPrediction]) -> Vec<&str> {
        records.iter().map(|r| r.user_id.as_str()).collect()
    }

    #[test]
    fn sorts_ascending_by_model_version() {
        let mut records = vec![
            gender("c", "2021-03-01T00:00:00Z"),
            gender("a", "2021-01-01T00:00:00Z"),
            gender("b", "2021-02-01T00:00:00Z"),
        ];

        sort_by_model_version(&mut records);

        assert_eq!(ids(&records), vec!["a", "b", "c"]);
    }

    #[test]
    fn sorting_is_idempotent() {
        let mut records = vec![
            gender("a", "2021-01-01T00:00:00Z"),
            gender("b", "2021-02-01T00:00:00Z"),
        ];
        sort_by_model_version(&mut records);
        let once = records.clone();

        sort_by_model_version(&mut records);

        assert_eq!(records, once);
    }

    #[test]
    fn equal_timestamps_keep_source_order() {
        let mut records = vec![
            gender("later", "2021-05-01T00:00:00Z"),
            gender("first", "2021-01-01T00:00:00Z"),
            gender("second", "2021-01-01T00:00:00Z"),
            gender("third", "2021-01-01T00:00:00Z"),
        ];

        sort_by_model_version(&mut records);

        assert_eq!(ids(&records), vec!["first", "second", "third", "later"]);
    }

    #[test]
    fn compares_instants_across_offsets() {
        // 01:00+02:00 is 23:00Z the previous day.
        let mut records = vec![
            gender("utc", "2021-01-01T00:00:00Z"),
            gender("plus_two", "2021-01-01T01:00:00+02:00"),
        ];

        sort_by_model_version(&mut records);

        assert_eq!(ids(&records), vec!["plus_two", "utc"]);
    }

    #[test]
    fn missing_model_version_sorts_first() {
        let mut records = vec![
            gender("dated", "2021-01-01T00:00:00Z"),
            GenderPrediction {
                user_id: "undated".to_string(),
                ..GenderPrediction::default()
            },
        ];

        sort_by_model_version(&mut records);

        assert_eq!(ids(&records), vec!["undated", "dated"]);
        assert_eq!(records[0].model_version, zero_model_version());
    }

    #[test]
    fn empty_input_is_a_no_op() {
        let mut records: Vec<GenderPrediction> = Vec::new();

        sort_by_model_version(&mut records);

        assert!(records.is_empty());
    }
}
