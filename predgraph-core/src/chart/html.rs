use super::LineChart;
use crate::error::{PredictionError, Result};
use plotters::prelude::*;
use std::io::Write;

const WIDTH: u32 = 960;
const HEIGHT: u32 = 540;
const MAX_X_LABELS: usize = 12;

/// Line chart drawn with plotters and written out as a standalone HTML page
/// with the SVG inlined.
#[derive(Debug, Default, Clone)]
pub struct HtmlLineChart {
    title: String,
    x_labels: Vec<String>,
    series: Vec<(String, Vec<f64>)>,
}

impl HtmlLineChart {
    pub fn new() -> Self {
        Self::default()
    }

    fn draw_svg(&self) -> Result<String> {
        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, (WIDTH, HEIGHT)).into_drawing_area();
            root.fill(&WHITE).map_err(|e| self.draw_error(e))?;

            // A single point still needs a non-empty range.
            let x_max = self.x_labels.len().saturating_sub(1).max(1);
            let x_labels = &self.x_labels;
            let format_x = |i: &usize| x_labels.get(*i).cloned().unwrap_or_default();

            let mut chart = ChartBuilder::on(&root)
                .caption(&self.title, ("sans-serif", 28).into_font())
                .margin(20)
                .x_label_area_size(40)
                .y_label_area_size(50)
                .build_cartesian_2d(0..x_max, 0f64..1f64)
                .map_err(|e| self.draw_error(e))?;

            chart
                .configure_mesh()
                .x_labels(self.x_labels.len().clamp(1, MAX_X_LABELS))
                .x_label_formatter(&format_x)
                .y_desc("probability")
                .draw()
                .map_err(|e| self.draw_error(e))?;

            for (idx, (name, values)) in self.series.iter().enumerate() {
                let color = Palette99::pick(idx).to_rgba();
                chart
                    .draw_series(LineSeries::new(
                        values.iter().enumerate().map(|(i, v)| (i, *v)),
                        color.stroke_width(2),
                    ))
                    .map_err(|e| self.draw_error(e))?
                    .label(name.as_str())
                    .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
            }

            if !self.series.is_empty() {
                chart
                    .configure_series_labels()
                    .background_style(WHITE.mix(0.8))
                    .border_style(BLACK)
                    .draw()
                    .map_err(|e| self.draw_error(e))?;
            }

            root.present().map_err(|e| self.draw_error(e))?;
        }
        Ok(svg)
    }

    fn draw_error(&self, err: impl std::fmt::Display) -> PredictionError {
        PredictionError::render(&self.title, err)
    }
}

impl LineChart for HtmlLineChart {
    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn set_x_axis(&mut self, labels: Vec<String>) {
        self.x_labels = labels;
    }

    fn add_series(&mut self, name: &str, values: &[f64]) {
        self.series.push((name.to_string(), values.to_vec()));
    }

    fn render(&self, out: &mut dyn Write) -> Result<()> {
        let svg = self.draw_svg()?;
        let title = escape_html(&self.title);

        write!(
            out,
            "<!DOCTYPE html>\n\
             <html>\n\
             <head>\n\
             <meta charset=\"utf-8\">\n\
             <title>{title}</title>\n\
             </head>\n\
             <body>\n\
             {svg}\n\
             </body>\n\
             </html>\n"
        )
        .and_then(|_| out.flush())
        .map_err(|e| self.draw_error(e))
    }
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::escape_html;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(
            escape_html("<b>\"A&B\"</b>"),
            "&lt;b&gt;&quot;A&amp;B&quot;&lt;/b&gt;"
        );
    }
}
