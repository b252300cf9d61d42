//! Chart windows for landfill analysis results.
//!
//! [`PlotApp`] is a small builder over `egui_plot`; the [`charts`] module
//! turns model results into the three standard views.

pub mod charts;

use eframe::egui::{self, Color32};
use egui_plot::{Bar, BarChart, HLine, Legend, Line, LineStyle, Plot, PlotPoint, Polygon};

/// A runnable egui application showing one chart.
#[derive(Default)]
pub struct PlotApp {
    series: Vec<Series>,
    bars: Vec<BarSeries>,
    thresholds: Vec<Threshold>,
    x_label: Option<String>,
    y_label: Option<String>,
    y_max: Option<f64>,
}

struct Series {
    name: String,
    points: Vec<PlotPoint>,
    color: Option<Color32>,
    fill: Option<Color32>,
}

struct BarSeries {
    name: String,
    x: f64,
    height: f64,
    color: Color32,
}

struct Threshold {
    name: String,
    y: f64,
    color: Color32,
}

impl PlotApp {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a line through `points`.
    #[must_use]
    pub fn add_series(mut self, name: &str, points: &[[f64; 2]], color: Option<Color32>) -> Self {
        self.series.push(Series {
            name: name.to_string(),
            points: points.iter().copied().map(Into::into).collect(),
            color,
            fill: None,
        });

        self
    }

    /// Adds a closed, filled polygon with an outline.
    #[must_use]
    pub fn add_filled(
        mut self,
        name: &str,
        points: &[[f64; 2]],
        outline: Color32,
        fill: Color32,
    ) -> Self {
        self.series.push(Series {
            name: name.to_string(),
            points: points.iter().copied().map(Into::into).collect(),
            color: Some(outline),
            fill: Some(fill),
        });

        self
    }

    /// Adds a single bar centered on `x`.
    #[must_use]
    pub fn add_bar(mut self, name: &str, x: f64, height: f64, color: Color32) -> Self {
        self.bars.push(BarSeries {
            name: name.to_string(),
            x,
            height,
            color,
        });

        self
    }

    /// Adds a dashed horizontal reference line.
    #[must_use]
    pub fn add_threshold(mut self, name: &str, y: f64, color: Color32) -> Self {
        self.thresholds.push(Threshold {
            name: name.to_string(),
            y,
            color,
        });

        self
    }

    #[must_use]
    pub fn x_label(mut self, label: &str) -> Self {
        self.x_label = Some(label.to_string());
        self
    }

    #[must_use]
    pub fn y_label(mut self, label: &str) -> Self {
        self.y_label = Some(label.to_string());
        self
    }

    /// Keeps `y_max` inside the visible range.
    #[must_use]
    pub fn include_y(mut self, y_max: f64) -> Self {
        self.y_max = Some(y_max);
        self
    }

    /// Number of lines, polygons, bars, and thresholds in the chart.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.series.len() + self.bars.len() + self.thresholds.len()
    }

    #[allow(clippy::missing_errors_doc)]
    pub fn run(self, name: &str) -> Result<(), eframe::Error> {
        eframe::run_native(
            name,
            eframe::NativeOptions::default(),
            Box::new(|_cc| Ok(Box::new(self))),
        )
    }
}

impl eframe::App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let mut plot = Plot::new("plot-id").legend(Legend::default());
            if let Some(label) = &self.x_label {
                plot = plot.x_axis_label(label.clone());
            }
            if let Some(label) = &self.y_label {
                plot = plot.y_axis_label(label.clone());
            }
            if let Some(y_max) = self.y_max {
                plot = plot.include_y(0.0).include_y(y_max);
            }

            plot.show(ui, |plot_ui| {
                for series in &self.series {
                    let points = series.points.as_slice();
                    let name = &series.name;

                    match series.fill {
                        Some(fill) => {
                            let mut polygon = Polygon::new(points).name(name).fill_color(fill);
                            if let Some(color) = series.color {
                                polygon = polygon.stroke((3.0, color));
                            }
                            plot_ui.polygon(polygon);
                        }
                        None => {
                            let mut line = Line::new(points).name(name);
                            if let Some(color) = series.color {
                                line = line.color(color);
                            }
                            plot_ui.line(line);
                        }
                    }
                }

                for bar in &self.bars {
                    let chart = BarChart::new(vec![
                        Bar::new(bar.x, bar.height).width(0.5).fill(bar.color),
                    ])
                    .name(&bar.name)
                    .color(bar.color);
                    plot_ui.bar_chart(chart);
                }

                for threshold in &self.thresholds {
                    plot_ui.hline(
                        HLine::new(threshold.y)
                            .name(&threshold.name)
                            .color(threshold.color)
                            .style(LineStyle::Dashed { length: 10.0 }),
                    );
                }
            });
        });
    }
}
