use iced::mouse;
use iced::widget::canvas::{self, Cache, Frame, Geometry, Path, Stroke, Text};
use iced::{Point, Rectangle, Renderer, Size, Theme};

use super::axes::{self, PlotArea};
use super::model::{ChartConfig, Orientation, Series};
use crate::message::Message;

/// Category bar chart. Multiple series stack on top of each other.
pub struct BarChart {
    cache: Cache,
    title: String,
    labels: Vec<String>,
    series: Vec<Series>,
    orientation: Orientation,
    config: ChartConfig,
}

/// A drawn bar segment, in canvas coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub category: usize,
    pub series: usize,
    pub origin: Point,
    pub size: Size,
}

impl Segment {
    fn contains(&self, point: Point) -> bool {
        point.x >= self.origin.x
            && point.x <= self.origin.x + self.size.width
            && point.y >= self.origin.y
            && point.y <= self.origin.y + self.size.height
    }
}

impl BarChart {
    pub fn new(title: impl Into<String>, labels: Vec<String>, series: Vec<Series>) -> Self {
        Self {
            cache: Cache::new(),
            title: title.into(),
            labels,
            series,
            orientation: Orientation::Vertical,
            config: ChartConfig::default(),
        }
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_config(mut self, config: ChartConfig) -> Self {
        self.config = config;
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    #[cfg(test)]
    pub fn series(&self) -> &[Series] {
        &self.series
    }

    #[cfg(test)]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    fn value_max(&self) -> f32 {
        axes::axis_max(axes::series_max(&self.series, true))
    }

    /// Lays out every non-empty segment. Categories get equal bands along the
    /// category axis; each bar fills 80% of its band.
    pub fn segments(&self, area: &PlotArea) -> Vec<Segment> {
        let categories = self.labels.len();
        if categories == 0 {
            return Vec::new();
        }

        let max = self.value_max();
        let (band_extent, value_extent) = match self.orientation {
            Orientation::Vertical => (area.width(), area.height()),
            Orientation::Horizontal => (area.height(), area.width()),
        };
        let band = band_extent / categories as f32;
        let thickness = band * 0.8;

        let mut segments = Vec::new();
        for category in 0..categories {
            let band_start = category as f32 * band + (band - thickness) / 2.0;
            let mut offset = 0.0;

            for (index, series) in self.series.iter().enumerate() {
                let Some(value) = series.value(category) else {
                    continue;
                };
                let length = (value.max(0.0) / max) * value_extent;
                if length <= 0.0 {
                    continue;
                }

                let (origin, size) = match self.orientation {
                    Orientation::Vertical => (
                        Point::new(area.left + band_start, area.bottom - offset - length),
                        Size::new(thickness, length),
                    ),
                    Orientation::Horizontal => (
                        Point::new(area.left + offset, area.top + band_start),
                        Size::new(length, thickness),
                    ),
                };
                segments.push(Segment {
                    category,
                    series: index,
                    origin,
                    size,
                });
                offset += length;
            }
        }

        segments
    }
}

impl canvas::Program<Message> for BarChart {
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
        let segments = self.segments(&area);

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
                self.orientation,
                self.value_max(),
                self.config.grid_lines,
                theme,
            );

            let categories = self.labels.len().max(1) as f32;
            for (index, label) in self.labels.iter().enumerate() {
                let center = index as f32 + 0.5;
                let (position, align_x) = match self.orientation {
                    Orientation::Vertical => (
                        Point::new(
                            area.left + center * area.width() / categories,
                            area.bottom + 8.0,
                        ),
                        iced::alignment::Horizontal::Center,
                    ),
                    Orientation::Horizontal => (
                        Point::new(
                            area.left - 8.0,
                            area.top + center * area.height() / categories - 6.0,
                        ),
                        iced::alignment::Horizontal::Right,
                    ),
                };
                frame.fill_text(Text {
                    content: label.clone(),
                    position,
                    color: palette.background.base.text,
                    size: 11.0.into(),
                    align_x: align_x.into(),
                    ..Text::default()
                });
            }

            for segment in &segments {
                let color = self.series[segment.series].color;
                let rect = Path::rectangle(segment.origin, segment.size);
                frame.fill(&rect, color.scale_alpha(0.85));
                frame.stroke(&rect, Stroke::default().with_width(1.0).with_color(color));
            }
        });

        geometries.push(geometry);

        if let Some(cursor_pos) = cursor.position_in(bounds) {
            if let Some(segment) = segments.iter().find(|segment| segment.contains(cursor_pos)) {
                let mut overlay = Frame::new(renderer, bounds.size());
                let series = &self.series[segment.series];
                let value = series.value(segment.category).unwrap_or_default();

                overlay.stroke(
                    &Path::rectangle(segment.origin, segment.size),
                    Stroke::default()
                        .with_width(2.0)
                        .with_color(theme.extended_palette().background.base.text),
                );

                let lines = vec![
                    self.labels[segment.category].clone(),
                    format!("{}: {}", series.name, axes::format_tick(value)),
                ];
                axes::draw_tooltip(&mut overlay, cursor_pos, &lines, bounds.size(), theme);
                geometries.push(overlay.into_geometry());
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
            mouse::Interaction::Pointer
        } else {
            mouse::Interaction::default()
        }
    }
}
