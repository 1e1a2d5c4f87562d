use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// An events.json file in its own temp directory, which doubles as the chart
/// output directory.
pub struct EventLog {
    dir: TempDir,
    path: PathBuf,
}

impl EventLog {
    pub fn write(lines: &[String]) -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join("events.json");
        fs::write(&path, lines.join("\n")).expect("failed to write events.json");
        Self { dir, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    pub fn output(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}

pub fn gender_line(user_id: &str, model_version: &str, male: f64, female: f64) -> String {
    format!(
        r#"{{"user_id":"{user_id}","predicted_gender":"male","probability":{male},"prob_male":{male},"prob_female":{female},"prob_non_binary_gender_expansive":0.05,"model_version":"{model_version}","day_pt":"2021-01-01"}}"#
    )
}

pub fn age_line(user_id: &str, model_version: &str, prob_18_24: f64) -> String {
    format!(
        r#"{{"user_id":"{user_id}","predicted_age":"18-24","probability":{prob_18_24},"prob_13_17":0.1,"prob_18_24":{prob_18_24},"prob_25_34":0.1,"prob_35_over":0.1,"model_version":"{model_version}","day_pt":"2021-01-01"}}"#
    )
}
