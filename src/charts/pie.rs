use iced::mouse;
use iced::widget::canvas::{self, Cache, Frame, Geometry, Path, Stroke};
use iced::{Color, Point, Radians, Rectangle, Renderer, Size, Theme};

use super::axes::{self, LEGEND_HEIGHT, TITLE_HEIGHT};
use super::model::PieSlice;
use crate::message::Message;

pub struct PieChart {
    cache: Cache,
    title: String,
    slices: Vec<PieSlice>,
    border: Color,
}

impl PieChart {
    pub fn new(title: impl Into<String>, slices: Vec<PieSlice>) -> Self {
        Self {
            cache: Cache::new(),
            title: title.into(),
            slices,
            border: Color::WHITE,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    #[cfg(test)]
    pub fn slices(&self) -> &[PieSlice] {
        &self.slices
    }

    fn total(&self) -> f32 {
        self.slices.iter().map(|slice| slice.value.max(0.0)).sum()
    }
}

/// Center and radius of the pie inside a canvas of `size`, below the title
/// and legend.
fn layout(size: Size) -> (Point, f32) {
    let header = TITLE_HEIGHT + LEGEND_HEIGHT;
    let available = Size::new(size.width, (size.height - header).max(0.0));
    let center = Point::new(available.width / 2.0, header + available.height / 2.0);
    let radius = available.width.min(available.height) * 0.42;
    (center, radius)
}

impl canvas::Program<Message> for PieChart {
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
        let total = self.total();

        let geometry = self.cache.draw(renderer, bounds.size(), |frame| {
            axes::draw_title(frame, &self.title, theme);
            axes::draw_legend(
                frame,
                self.slices.iter().map(|slice| (slice.label.as_str(), slice.color)),
                theme,
            );

            if total <= 0.0 {
                return;
            }

            let (center, radius) = layout(frame.size());
            if radius <= 1.0 {
                return;
            }

            let mut start = -std::f32::consts::FRAC_PI_2;
            for slice in &self.slices {
                let sweep = (slice.value.max(0.0) / total) * std::f32::consts::TAU;
                let end = start + sweep;

                let path = Path::new(|builder| {
                    builder.move_to(center);
                    builder.arc(canvas::path::Arc {
                        center,
                        radius,
                        start_angle: Radians(start),
                        end_angle: Radians(end),
                    });
                    builder.close();
                });

                frame.fill(&path, slice.color);
                frame.stroke(
                    &path,
                    Stroke::default().with_width(2.0).with_color(self.border),
                );
                start = end;
            }
        });

        geometries.push(geometry);

        if let Some(cursor_pos) = cursor.position_in(bounds) {
            if let Some(index) = hit_test_slice(&self.slices, bounds.size(), cursor_pos) {
                let mut overlay = Frame::new(renderer, bounds.size());
                let slice = &self.slices[index];
                let share = slice.value.max(0.0) / total * 100.0;
                let lines = vec![format!(
                    "{}: {} ({share:.1}%)",
                    slice.label,
                    axes::format_tick(slice.value)
                )];

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

fn hit_test_slice(slices: &[PieSlice], size: Size, cursor_pos: Point) -> Option<usize> {
    let total: f32 = slices.iter().map(|slice| slice.value.max(0.0)).sum();
    if total <= 0.0 {
        return None;
    }

    let (center, radius) = layout(size);
    let dx = cursor_pos.x - center.x;
    let dy = cursor_pos.y - center.y;
    if (dx * dx + dy * dy).sqrt() > radius {
        return None;
    }

    let mut angle = dy.atan2(dx);
    if angle < -std::f32::consts::FRAC_PI_2 {
        angle += std::f32::consts::TAU;
    }

    let mut start = -std::f32::consts::FRAC_PI_2;
    for (index, slice) in slices.iter().enumerate() {
        let end = start + (slice.value.max(0.0) / total) * std::f32::consts::TAU;
        if angle >= start && angle <= end {
            return Some(index);
        }
        start = end;
    }

    None
}
