use super::{ModelVersion, Prediction, ProbabilityDimension, model_version, nullable};
use serde::Deserialize;

const MALE: &str = "Male";
const FEMALE: &str = "Female";
const NONBINARY: &str = "Nonbinary";

/// Predicted gender of a user at one model version.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GenderPrediction {
    #[serde(deserialize_with = "nullable::deserialize")]
    pub user_id: String,
    #[serde(deserialize_with = "nullable::deserialize")]
    pub predicted_gender: String,
    #[serde(deserialize_with = "nullable::deserialize")]
    pub probability: f64,
    #[serde(deserialize_with = "nullable::deserialize")]
    pub prob_male: f64,
    #[serde(deserialize_with = "nullable::deserialize")]
    pub prob_female: f64,
    #[serde(deserialize_with = "nullable::deserialize")]
    pub prob_non_binary_gender_expansive: f64,
    #[serde(deserialize_with = "model_version::deserialize")]
    pub model_version: ModelVersion,
    #[serde(deserialize_with = "nullable::deserialize")]
    pub day_pt: String,
}

impl Default for GenderPrediction {
    fn default() -> Self {
        Self {
            user_id: String::new(),
            predicted_gender: String::new(),
            probability: 0.0,
            prob_male: 0.0,
            prob_female: 0.0,
            prob_non_binary_gender_expansive: 0.0,
            model_version: model_version::zero_model_version(),
            day_pt: String::new(),
        }
    }
}

impl Prediction for GenderPrediction {
    const DISCRIMINATOR: &'static str = "predicted_gender";
    const TITLE: &'static str = "Predicted Gender";
    const LABELS: &'static [&'static str] = &[MALE, FEMALE, NONBINARY];

    fn model_version(&self) -> ModelVersion {
        self.model_version
    }

    fn dimensions(&self) -> Vec<ProbabilityDimension> {
        vec![
            ProbabilityDimension::new(MALE, self.prob_male),
            ProbabilityDimension::new(FEMALE, self.prob_female),
            ProbabilityDimension::new(NONBINARY, self.prob_non_binary_gender_expansive),
        ]
    }
}
