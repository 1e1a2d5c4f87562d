use crate::chart::{HtmlLineChart, LineChart, plot};
use crate::error::Result;
use crate::schema::{GenderPrediction, Prediction};
use crate::series::Series;
use chrono::DateTime;
use pretty_assertions::assert_eq;
use std::io::Write;

#[derive(Default)]
struct RecordingChart {
    title: String,
    x_axis: Vec<String>,
    series: Vec<(String, Vec<f64>)>,
}

impl LineChart for RecordingChart {
    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn set_x_axis(&mut self, labels: Vec<String>) {
        self.x_axis = labels;
    }

    fn add_series(&mut self, name: &str, values: &[f64]) {
        self.series.push((name.to_string(), values.to_vec()));
    }

    fn render(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "{}", self.title).unwrap();
        Ok(())
    }
}

fn gender_series() -> Series {
    let records = vec![
        GenderPrediction {
            prob_male: 0.7,
            prob_female: 0.2,
            prob_non_binary_gender_expansive: 0.1,
            model_version: DateTime::parse_from_rfc3339("2021-01-01T00:00:00Z").unwrap(),
            ..GenderPrediction::default()
        },
        GenderPrediction {
            prob_male: 0.3,
            prob_female: 0.6,
            prob_non_binary_gender_expansive: 0.1,
            model_version: DateTime::parse_from_rfc3339("2021-02-01T00:00:00Z").unwrap(),
            ..GenderPrediction::default()
        },
    ];
    Series::from_records(&records)
}

#[test]
fn plot_forwards_title_axis_and_every_group() {
    let mut chart = RecordingChart::default();

    plot(&gender_series(), &mut chart);

    assert_eq!(chart.title, "Predicted Gender");
    assert_eq!(chart.x_axis, vec!["2021-01-01", "2021-02-01"]);
    assert_eq!(
        chart.series,
        vec![
            ("Male".to_string(), vec![0.7, 0.3]),
            ("Female".to_string(), vec![0.2, 0.6]),
            ("Nonbinary".to_string(), vec![0.1, 0.1]),
        ]
    );
}

#[test]
fn plot_adds_empty_groups_for_empty_series() {
    let mut chart = RecordingChart::default();

    plot(&Series::from_records::<GenderPrediction>(&[]), &mut chart);

    assert!(chart.x_axis.is_empty());
    let names: Vec<_> = chart.series.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(names, GenderPrediction::LABELS);
    assert!(chart.series.iter().all(|(_, v)| v.is_empty()));
}

#[test]
fn html_chart_embeds_svg_with_title() {
    let mut chart = HtmlLineChart::new();
    plot(&gender_series(), &mut chart);
    let mut out = Vec::new();

    chart.render(&mut out).unwrap();

    let html = String::from_utf8(out).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>Predicted Gender</title>"));
    assert!(html.contains("<svg"));
    assert!(html.contains("Male"));
}

#[test]
fn html_chart_renders_empty_series() {
    let mut chart = HtmlLineChart::new();
    plot(&Series::from_records::<GenderPrediction>(&[]), &mut chart);
    let mut out = Vec::new();

    chart.render(&mut out).unwrap();

    let html = String::from_utf8(out).unwrap();
    assert!(html.contains("<svg"));
    assert!(html.trim_end().ends_with("</html>"));
}

#[test]
fn html_chart_renders_single_point() {
    let mut chart = HtmlLineChart::new();
    chart.set_title("one");
    chart.set_x_axis(vec!["2021-01-01".to_string()]);
    chart.add_series("only", &[0.5]);
    let mut out = Vec::new();

    chart.render(&mut out).unwrap();

    assert!(String::from_utf8(out).unwrap().contains("<svg"));
}
