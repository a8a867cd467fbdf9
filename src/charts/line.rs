use iced::mouse;
use iced::widget::canvas::{self, Cache, Frame, Geometry, Path, Stroke, Text};
use iced::{Point, Rectangle, Renderer, Theme};

use super::axes::{self, PlotArea};
use super::model::{ChartConfig, Orientation, Series};
use crate::message::Message;

/// Category line chart; every series is drawn over the same labels.
pub struct LineChart {
    cache: Cache,
    title: String,
    labels: Vec<String>,
    series: Vec<Series>,
    filled: bool,
    config: ChartConfig,
}

impl LineChart {
    pub fn new(title: impl Into<String>, labels: Vec<String>, series: Vec<Series>) -> Self {
        Self {
            cache: Cache::new(),
            title: title.into(),
            labels,
            series,
            filled: false,
            config: ChartConfig::default(),
        }
    }

    /// Shades the area between each line and the value axis.
    pub fn filled(mut self) -> Self {
        self.filled = true;
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    #[cfg(test)]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    #[cfg(test)]
    pub fn series(&self) -> &[Series] {
        &self.series
    }

    fn y_max(&self) -> f32 {
        axes::axis_max(axes::series_max(&self.series, false))
    }
}

/// Splits a series into unbroken runs of points; a gap ends the current run.
pub fn runs(positions: &[f32], values: &[Option<f32>], to_y: impl Fn(f32) -> f32) -> Vec<Vec<Point>> {
    let mut runs = Vec::new();
    let mut current = Vec::new();

    for (x, value) in positions.iter().zip(values) {
        match value {
            Some(value) => current.push(Point::new(*x, to_y(*value))),
            None if !current.is_empty() => runs.push(std::mem::take(&mut current)),
            None => {}
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }

    runs
}

/// Horizontal position of each category; the first and last sit on the
/// plot edges.
pub fn point_positions(area: &PlotArea, count: usize) -> Vec<f32> {
    match count {
        0 => Vec::new(),
        1 => vec![area.left + area.width() / 2.0],
        _ => (0..count)
            .map(|index| area.left + index as f32 / (count - 1) as f32 * area.width())
            .collect(),
    }
}

impl canvas::Program<Message> for LineChart {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: &canvas::Event,
        _bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Option<canvas::Action<Message>> {
        match event {
            canvas::Event::Mouse(mouse::Event::CursorMoved { .. })
            | canvas::Event::Mouse(mouse::Event::CursorEntered)
            | canvas::Event::Mouse(mouse::Event::CursorLeft) => {
                Some(canvas::Action::request_redraw())
            }
            _ => None,
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut geometries = Vec::new();
        let Some(area) = PlotArea::new(bounds.size(), &self.config) else {
            return geometries;
        };
        let y_max = self.y_max();
        let positions = point_positions(&area, self.labels.len());
        let to_y = |value: f32| area.bottom - (value.max(0.0) / y_max) * area.height();

        let geometry = self.cache.draw(renderer, bounds.size(), |frame| {
            let palette = theme.extended_palette();

            axes::draw_title(frame, &self.title, theme);
            if self.config.show_legend {
                axes::draw_legend(
                    frame,
                    self.series.iter().map(|s| (s.name.as_str(), s.color)),
                    theme,
                );
            }
            axes::draw_value_grid(
                frame,
                area,
                Orientation::Vertical,
                y_max,
                self.config.grid_lines,
                theme,
            );

            for (label, x) in self.labels.iter().zip(&positions) {
                frame.fill_text(Text {
                    content: label.clone(),
                    position: Point::new(*x, area.bottom + 8.0),
                    color: palette.background.base.text,
                    size: 11.0.into(),
                    align_x: iced::alignment::Horizontal::Center.into(),
                    ..Text::default()
                });
            }

            for series in &self.series {
                for points in runs(&positions, &series.values, &to_y) {
                    let (Some(first), Some(last)) = (points.first(), points.last()) else {
                        continue;
                    };

                    if self.filled && points.len() > 1 {
                        let area_path = Path::new(|builder| {
                            builder.move_to(Point::new(first.x, area.bottom));
                            for point in &points {
                                builder.line_to(*point);
                            }
                            builder.line_to(Point::new(last.x, area.bottom));
                            builder.close();
                        });
                        frame.fill(&area_path, series.color.scale_alpha(0.1));
                    }

                    let line = Path::new(|builder| {
                        builder.move_to(*first);
                        for point in &points[1..] {
                            builder.line_to(*point);
                        }
                    });
                    frame.stroke(
                        &line,
                        Stroke::default().with_width(2.0).with_color(series.color),
                    );

                    for point in &points {
                        frame.fill(&Path::circle(*point, 3.0), series.color);
                    }
                }
            }
        });

        geometries.push(geometry);

        if let Some(cursor_pos) = cursor.position_in(bounds) {
            if area.contains(cursor_pos) {
                if let Some(index) = axes::nearest_index(&positions, cursor_pos.x) {
                    let mut overlay = Frame::new(renderer, bounds.size());
                    let palette = theme.extended_palette();
                    let x = positions[index];

                    overlay.stroke(
                        &Path::line(Point::new(x, area.top), Point::new(x, area.bottom)),
                        Stroke::default()
                            .with_width(1.0)
                            .with_color(palette.background.strong.color),
                    );

                    let mut lines = vec![self.labels[index].clone()];
                    for series in &self.series {
                        if let Some(value) = series.value(index) {
                            overlay.fill(&Path::circle(Point::new(x, to_y(value)), 4.5), series.color);
                            lines.push(format!("{}: {}", series.name, axes::format_tick(value)));
                        }
                    }

                    axes::draw_tooltip(&mut overlay, cursor_pos, &lines, bounds.size(), theme);
                    geometries.push(overlay.into_geometry());
                }
            }
        }

        geometries
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if cursor.position_in(bounds).is_some() {
            mouse::Interaction::Crosshair
        } else {
            mouse::Interaction::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::{Color, Size};

    #[test]
    fn test_point_positions_span_plot() {
        let area = PlotArea::new(Size::new(400.0, 300.0), &ChartConfig::default()).unwrap();
        let positions = point_positions(&area, 6);
        assert_eq!(positions.len(), 6);
        assert_eq!(positions[0], area.left);
        assert!((positions[5] - area.right).abs() < 0.001);

        assert_eq!(point_positions(&area, 1), vec![area.left + area.width() / 2.0]);
        assert!(point_positions(&area, 0).is_empty());
    }

    #[test]
    fn test_y_max_begins_at_zero_scale() {
        let chart = LineChart::new(
            "Representation",
            vec!["2018".into(), "2019".into()],
            vec![
                Series::new("White", Color::BLACK, vec![62.0, 70.0]),
                Series::new("Underrepresented", Color::WHITE, vec![38.0, 30.0]),
            ],
        );
        assert_eq!(chart.y_max(), 100.0);
        assert_eq!(chart.series().len(), 2);
        assert_eq!(chart.labels().len(), 2);
    }

    #[test]
    fn test_runs_break_at_gaps() {
        let positions = [0.0, 10.0, 20.0, 30.0, 40.0];
        let values = [Some(1.0), None, Some(3.0), Some(4.0), None];

        let runs = runs(&positions, &values, |value| value * 2.0);
        assert_eq!(
            runs,
            vec![
                vec![Point::new(0.0, 2.0)],
                vec![Point::new(20.0, 6.0), Point::new(30.0, 8.0)],
            ]
        );
        assert!(super::runs(&positions, &[None, None], |value| value).is_empty());
    }
}
