pub mod chart;
pub mod config;
pub mod error;
pub mod extract;
pub mod logging;
pub mod pipeline;
pub mod schema;
pub mod series;
pub mod sort;

pub use config::RunConfig;
pub use error::PredictionError;
pub use pipeline::{run, run_with};
