use crate::schema::ChartSchema;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Newline-delimited event log to read.
    pub source: PathBuf,

    /// Directory the chart files are written into.
    pub out_dir: PathBuf,
}

/// One chart to produce: which schema, and where it goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartTarget {
    pub schema: ChartSchema,
    pub path: PathBuf,
}

impl RunConfig {
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            out_dir: PathBuf::from("."),
        }
    }

    pub fn with_out_dir(mut self, out_dir: impl Into<PathBuf>) -> Self {
        self.out_dir = out_dir.into();
        self
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Charts in pass order.
    pub fn targets(&self) -> Vec<ChartTarget> {
        ChartSchema::ALL
            .into_iter()
            .map(|schema| ChartTarget {
                schema,
                path: self.out_dir.join(schema.file_name()),
            })
            .collect()
    }
}
