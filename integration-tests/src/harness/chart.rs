use predgraph_core::chart::LineChart;
use predgraph_core::error::Result;
use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

/// What one chart received before it was rendered.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartCall {
    pub title: String,
    pub x_axis: Vec<String>,
    pub series: Vec<(String, Vec<f64>)>,
    pub rendered: bool,
}

impl ChartCall {
    pub fn values(&self, name: &str) -> Option<&[f64]> {
        self.series
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_slice())
    }
}

/// Shared log of every chart a pipeline run created, in creation order.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    calls: Rc<RefCell<Vec<ChartCall>>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Chart factory for `predgraph_core::run_with`.
    pub fn factory(&self) -> impl FnMut() -> RecordingChart + '_ {
        move || {
            let mut calls = self.calls.borrow_mut();
            calls.push(ChartCall::default());
            RecordingChart {
                index: calls.len() - 1,
                calls: Rc::clone(&self.calls),
            }
        }
    }

    pub fn calls(&self) -> Vec<ChartCall> {
        self.calls.borrow().clone()
    }
}

pub struct RecordingChart {
    index: usize,
    calls: Rc<RefCell<Vec<ChartCall>>>,
}

impl RecordingChart {
    fn with_call(&self, f: impl FnOnce(&mut ChartCall)) {
        f(&mut self.calls.borrow_mut()[self.index]);
    }
}

impl LineChart for RecordingChart {
    fn set_title(&mut self, title: &str) {
        self.with_call(|c| c.title = title.to_string());
    }

    fn set_x_axis(&mut self, labels: Vec<String>) {
        self.with_call(|c| c.x_axis = labels);
    }

    fn add_series(&mut self, name: &str, values: &[f64]) {
        self.with_call(|c| c.series.push((name.to_string(), values.to_vec())));
    }

    fn render(&self, out: &mut dyn Write) -> Result<()> {
        self.with_call(|c| c.rendered = true);
        out.write_all(b"recorded")
            .map_err(|e| predgraph_core::PredictionError::render("recorded", e))
    }
}
