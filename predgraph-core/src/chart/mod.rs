//! Chart rendering.
//!
//! [`LineChart`] is the only thing the pipeline knows about a chart backend.
//! [`plot`] feeds a [`Series`] into any implementation; [`HtmlLineChart`] is the
//! backend the CLI uses.

mod html;
#[cfg(test)]
mod tests;

pub use html::HtmlLineChart;

use crate::error::Result;
use crate::series::Series;
use std::io::Write;

pub trait LineChart {
    fn set_title(&mut self, title: &str);

    fn set_x_axis(&mut self, labels: Vec<String>);

    /// Add one named line. `values` is index-aligned with the X-axis labels.
    fn add_series(&mut self, name: &str, values: &[f64]);

    fn render(&self, out: &mut dyn Write) -> Result<()>;
}

/// Populate `chart` from `series`. Empty groups are still added so every
/// dimension appears in the legend.
pub fn plot<C: LineChart + ?Sized>(series: &Series, chart: &mut C) {
    chart.set_title(series.title);
    chart.set_x_axis(series.x_axis_labels());

    for group in &series.groups {
        chart.add_series(group.label, &group.values);
    }
}
