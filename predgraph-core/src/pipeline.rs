//! Per-schema chart passes.
//!
//! For every [`ChartTarget`] in order: read the whole source log, build the
//! series, create the output file and render a fresh chart into it. The source
//! is reopened for each pass. The first error aborts the run; charts already
//! written stay on disk.

use crate::chart::{HtmlLineChart, LineChart, plot};
use crate::config::{ChartTarget, RunConfig};
use crate::error::{PredictionError, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use tracing::info;

/// Render every chart with the default HTML backend.
pub fn run(config: &RunConfig) -> Result<()> {
    run_with(config, HtmlLineChart::new)
}

/// Render every chart with charts produced by `new_chart`, one per pass.
pub fn run_with<C, F>(config: &RunConfig, mut new_chart: F) -> Result<()>
where
    C: LineChart,
    F: FnMut() -> C,
{
    for target in config.targets() {
        let mut chart = new_chart();
        chart_pass(config, &target, &mut chart)?;
    }
    Ok(())
}

fn chart_pass<C: LineChart>(
    config: &RunConfig,
    target: &ChartTarget,
    chart: &mut C,
) -> Result<()> {
    let schema = target.schema;
    info!(
        schema = schema.name(),
        source = %config.source.display(),
        "parsing predicted {} data",
        schema.name()
    );

    let source = File::open(config.source())
        .map_err(|e| PredictionError::read_source(config.source(), e))?;
    let series = schema.series_from_reader(source).map_err(|e| match e {
        PredictionError::ReadStream(source) => {
            PredictionError::read_source(config.source(), source)
        }
        other => other,
    })?;

    info!(
        schema = schema.name(),
        records = series.len(),
        "got {} items",
        series.len()
    );

    let file = File::create(&target.path)
        .map_err(|e| PredictionError::create_output(&target.path, e))?;
    let mut out = BufWriter::new(file);

    plot(&series, chart);
    chart.render(&mut out)?;
    out.flush()
        .map_err(|e| PredictionError::render(series.title, e))?;

    info!(
        schema = schema.name(),
        path = %target.path.display(),
        "wrote '{}' graph to '{}'",
        series.title,
        target.path.display()
    );
    Ok(())
}
