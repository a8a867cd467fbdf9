use iced::Color;

/// One named run of values, aligned with the chart's category labels.
/// A `None` value leaves a gap at that category.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    pub color: Color,
    pub values: Vec<Option<f32>>,
}

impl Series {
    pub fn new<V>(name: impl Into<String>, color: Color, values: impl IntoIterator<Item = V>) -> Self
    where
        V: Into<Option<f32>>,
    {
        Self {
            name: name.into(),
            color,
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn value(&self, index: usize) -> Option<f32> {
        self.values.get(index).copied().flatten()
    }

    pub fn present(&self) -> impl Iterator<Item = f32> + '_ {
        self.values.iter().flatten().copied()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub value: f32,
    pub color: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Vertical,
    Horizontal,
}

#[derive(Debug, Clone, Copy)]
pub struct ChartConfig {
    pub padding: f32,
    pub grid_lines: usize,
    pub show_legend: bool,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            padding: 40.0,
            grid_lines: 5,
            show_legend: true,
        }
    }
}
