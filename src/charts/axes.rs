//! Layout and decoration shared by the cartesian charts.

use iced::widget::canvas::{Frame, Path, Stroke, Text};
use iced::{Color, Point, Size, Theme};

use super::model::{ChartConfig, Orientation, Series};

pub const TITLE_HEIGHT: f32 = 28.0;
pub const LEGEND_HEIGHT: f32 = 22.0;

/// Inner rectangle the data is drawn into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl PlotArea {
    /// `None` when the canvas is too small to hold anything.
    pub fn new(size: Size, config: &ChartConfig) -> Option<Self> {
        let header = TITLE_HEIGHT + if config.show_legend { LEGEND_HEIGHT } else { 0.0 };
        let area = Self {
            left: config.padding,
            top: config.padding.max(header + 8.0),
            right: size.width - config.padding / 2.0,
            bottom: size.height - config.padding / 1.5,
        };

        (area.width() > 1.0 && area.height() > 1.0).then_some(area)
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left && point.x <= self.right && point.y >= self.top && point.y <= self.bottom
    }
}

/// Rounds `max` up to a 1/2/5 step so grid labels read cleanly.
pub fn axis_max(max: f32) -> f32 {
    if !max.is_finite() || max <= 0.0 {
        return 1.0;
    }

    let magnitude = 10f32.powf(max.log10().floor());
    let normalized = max / magnitude;
    let step = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };

    step * magnitude
}

pub fn format_tick(value: f32) -> String {
    if value.fract().abs() < f32::EPSILON {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

pub fn draw_title(frame: &mut Frame, title: &str, theme: &Theme) {
    let palette = theme.extended_palette();
    frame.fill_text(Text {
        content: title.to_owned(),
        position: Point::new(frame.width() / 2.0, 6.0),
        color: palette.background.base.text,
        size: 16.0.into(),
        align_x: iced::alignment::Horizontal::Center.into(),
        ..Text::default()
    });
}

/// Draws one colored swatch plus label per entry, centered under the title.
pub fn draw_legend<'a>(
    frame: &mut Frame,
    entries: impl IntoIterator<Item = (&'a str, Color)>,
    theme: &Theme,
) {
    let palette = theme.extended_palette();
    let entries: Vec<_> = entries.into_iter().collect();
    let widths: Vec<f32> = entries
        .iter()
        .map(|(label, _)| 18.0 + label.len() as f32 * 7.0 + 16.0)
        .collect();
    let total: f32 = widths.iter().sum();
    let mut x = (frame.width() - total) / 2.0;
    let y = TITLE_HEIGHT;

    for ((label, color), width) in entries.into_iter().zip(widths) {
        frame.fill_rectangle(Point::new(x, y + 2.0), Size::new(12.0, 12.0), color);
        frame.fill_text(Text {
            content: label.to_owned(),
            position: Point::new(x + 18.0, y),
            color: palette.background.base.text,
            size: 12.0.into(),
            ..Text::default()
        });
        x += width;
    }
}

/// Draws the axis lines, the value grid and its tick labels.
///
/// Values grow upwards for `Vertical` and rightwards for `Horizontal`.
pub fn draw_value_grid(
    frame: &mut Frame,
    area: PlotArea,
    orientation: Orientation,
    max: f32,
    grid_lines: usize,
    theme: &Theme,
) {
    let palette = theme.extended_palette();
    let stroke = Stroke::default()
        .with_width(1.0)
        .with_color(palette.background.weak.color);

    frame.stroke(
        &Path::line(
            Point::new(area.left, area.bottom),
            Point::new(area.right, area.bottom),
        ),
        stroke,
    );
    frame.stroke(
        &Path::line(
            Point::new(area.left, area.bottom),
            Point::new(area.left, area.top),
        ),
        stroke,
    );

    let grid_lines = grid_lines.max(1);
    for i in 0..=grid_lines {
        let t = i as f32 / grid_lines as f32;
        let label = format_tick(t * max);

        match orientation {
            Orientation::Vertical => {
                let y = area.bottom - t * area.height();
                frame.stroke(
                    &Path::line(Point::new(area.left, y), Point::new(area.right, y)),
                    stroke,
                );
                frame.fill_text(Text {
                    content: label,
                    position: Point::new(area.left - 8.0, y - 6.0),
                    color: palette.background.base.text,
                    size: 11.0.into(),
                    align_x: iced::alignment::Horizontal::Right.into(),
                    ..Text::default()
                });
            }
            Orientation::Horizontal => {
                let x = area.left + t * area.width();
                frame.stroke(
                    &Path::line(Point::new(x, area.top), Point::new(x, area.bottom)),
                    stroke,
                );
                frame.fill_text(Text {
                    content: label,
                    position: Point::new(x, area.bottom + 6.0),
                    color: palette.background.base.text,
                    size: 11.0.into(),
                    align_x: iced::alignment::Horizontal::Center.into(),
                    ..Text::default()
                });
            }
        }
    }
}

/// Largest value any series reaches, or the largest per-category sum when
/// the series are stacked.
pub fn series_max(series: &[Series], stacked: bool) -> f32 {
    if stacked {
        let categories = series.iter().map(|s| s.values.len()).max().unwrap_or(0);
        (0..categories)
            .map(|index| {
                series
                    .iter()
                    .filter_map(|s| s.value(index))
                    .map(|value| value.max(0.0))
                    .sum::<f32>()
            })
            .fold(0.0_f32, f32::max)
    } else {
        series
            .iter()
            .flat_map(|s| s.present())
            .fold(0.0_f32, f32::max)
    }
}

/// Boxed multi-line tooltip next to `anchor`, flipped to stay inside `bounds`.
pub fn draw_tooltip(frame: &mut Frame, anchor: Point, lines: &[String], bounds: Size, theme: &Theme) {
    if lines.is_empty() {
        return;
    }

    let palette = theme.extended_palette();
    let padding = 6.0;
    let line_height = 16.0;
    let longest = lines.iter().map(|line| line.chars().count()).max().unwrap_or(0);
    let width = longest as f32 * 7.0 + padding * 2.0;
    let height = lines.len() as f32 * line_height + padding * 2.0 - 4.0;

    let mut x = anchor.x + 10.0;
    let mut y = anchor.y - height - 10.0;
    if x + width > bounds.width {
        x = anchor.x - width - 10.0;
    }
    if y < 0.0 {
        y = anchor.y + 10.0;
    }

    let rect = Path::rectangle(Point::new(x, y), Size::new(width, height));
    frame.fill(&rect, palette.background.strong.color);
    frame.stroke(
        &rect,
        Stroke::default()
            .with_width(1.0)
            .with_color(palette.background.weak.color),
    );

    for (index, line) in lines.iter().enumerate() {
        frame.fill_text(Text {
            content: line.clone(),
            position: Point::new(x + padding, y + padding - 2.0 + index as f32 * line_height),
            color: palette.background.strong.text,
            size: 12.0.into(),
            ..Text::default()
        });
    }
}

/// Index of the position closest to `target`.
pub fn nearest_index(positions: &[f32], target: f32) -> Option<usize> {
    positions
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| (*a - target).abs().total_cmp(&(*b - target).abs()))
        .map(|(index, _)| index)
}
