use super::{ModelVersion, Prediction, ProbabilityDimension, model_version, nullable};
use serde::Deserialize;

const AGE_13_17: &str = "Age 13-17";
const AGE_18_24: &str = "Age 18-24";
const AGE_25_34: &str = "Age 25-34";
const AGE_35_PLUS: &str = "Age 35+";

/// Predicted age bracket of a user at one model version.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AgePrediction {
    #[serde(deserialize_with = "nullable::deserialize")]
    pub user_id: String,
    #[serde(deserialize_with = "nullable::deserialize")]
    pub predicted_age: String,
    #[serde(deserialize_with = "nullable::deserialize")]
    pub probability: f64,
    #[serde(deserialize_with = "nullable::deserialize")]
    pub prob_13_17: f64,
    #[serde(deserialize_with = "nullable::deserialize")]
    pub prob_18_24: f64,
    #[serde(deserialize_with = "nullable::deserialize")]
    pub prob_25_34: f64,
    #[serde(deserialize_with = "nullable::deserialize")]
    pub prob_35_over: f64,
    #[serde(deserialize_with = "model_version::deserialize")]
    pub model_version: ModelVersion,
    #[serde(deserialize_with = "nullable::deserialize")]
    pub day_pt: String,
}

impl Default for AgePrediction {
    fn default() -> Self {
        Self {
            user_id: String::new(),
            predicted_age: String::new(),
            probability: 0.0,
            prob_13_17: 0.0,
            prob_18_24: 0.0,
            prob_25_34: 0.0,
            prob_35_over: 0.0,
            model_version: model_version::zero_model_version(),
            day_pt: String::new(),
        }
    }
}

impl Prediction for AgePrediction {
    const DISCRIMINATOR: &'static str = "predicted_age";
    const TITLE: &'static str = "Predicted Age";
    const LABELS: &'static [&'static str] = &[AGE_13_17, AGE_18_24, AGE_25_34, AGE_35_PLUS];

    fn model_version(&self) -> ModelVersion {
        self.model_version
    }

    fn dimensions(&self) -> Vec<ProbabilityDimension> {
        vec![
            ProbabilityDimension::new(AGE_13_17, self.prob_13_17),
            ProbabilityDimension::new(AGE_18_24, self.prob_18_24),
            ProbabilityDimension::new(AGE_25_34, self.prob_25_34),
            ProbabilityDimension::new(AGE_35_PLUS, self.prob_35_over),
        ]
    }
}
