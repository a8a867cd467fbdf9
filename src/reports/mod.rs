//! The four dashboard widgets and the table that binds each one to the
//! record field it draws.

pub mod gender_score_bar;
pub mod gender_stacked_bar;
pub mod overtime_line;
pub mod racial_pie;

use iced::Color;

use crate::charts::{BarChart, LineChart, PieChart};
use crate::data::DistributorRecord;

use gender_score_bar::GenderScoreBarReport;
use gender_stacked_bar::GenderStackedBarReport;
use overtime_line::OvertimeLineReport;
use racial_pie::RacialPieReport;

/// First series of every chart: white crew, men, the inclusion score.
pub const PRIMARY_SERIES: Color = Color::from_rgb8(0x99, 0x00, 0x00);
/// Second series: underrepresented crew, women.
pub const SECONDARY_SERIES: Color = Color::from_rgb8(0xff, 0xcc, 0x00);

/// Categories shared by every year-based chart.
pub const YEAR_LABELS: [&str; 6] = ["2018", "2019", "2020", "2021", "2022", "2023"];

pub fn year_labels() -> Vec<String> {
    YEAR_LABELS.iter().map(|year| year.to_string()).collect()
}

/// Chart categories, named after the record field that feeds them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartKind {
    Overtime,
    GenderLine,
    Racial,
    Gender,
}

impl ChartKind {
    /// Field name in the dataset.
    pub fn field(self) -> &'static str {
        match self {
            ChartKind::Overtime => "overtimeChart",
            ChartKind::GenderLine => "genderLineChart",
            ChartKind::Racial => "racialChart",
            ChartKind::Gender => "genderChart",
        }
    }

    /// Identifier of the canvas the widget draws into.
    pub fn canvas_id(self) -> &'static str {
        match self {
            ChartKind::Overtime => "overtimeChart",
            ChartKind::GenderLine => "genderChart",
            ChartKind::Racial => "racialPieChart",
            ChartKind::Gender => "genderBarChart",
        }
    }

    pub fn is_present(self, record: &DistributorRecord) -> bool {
        match self {
            ChartKind::Overtime => record.overtime_chart.is_some(),
            ChartKind::GenderLine => record.gender_line_chart.is_some(),
            ChartKind::Racial => record.racial_chart.is_some(),
            ChartKind::Gender => record.gender_chart.is_some(),
        }
    }
}

/// A built chart, owned by exactly one widget slot.
pub enum ChartInstance {
    Line(LineChart),
    Bar(BarChart),
    Pie(PieChart),
}

impl ChartInstance {
    pub fn title(&self) -> &str {
        match self {
            ChartInstance::Line(chart) => chart.title(),
            ChartInstance::Bar(chart) => chart.title(),
            ChartInstance::Pie(chart) => chart.title(),
        }
    }
}

impl std::fmt::Debug for ChartInstance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self {
            ChartInstance::Line(_) => "Line",
            ChartInstance::Bar(_) => "Bar",
            ChartInstance::Pie(_) => "Pie",
        };
        f.debug_tuple(kind).field(&self.title()).finish()
    }
}

/// Builds a fresh chart for a studio, or `None` when the record lacks the
/// widget's field.
pub type Render = fn(&str, &DistributorRecord) -> Option<ChartInstance>;

pub struct Widget {
    pub kind: ChartKind,
    pub render: Render,
}

/// Dashboard widgets in display order.
pub static WIDGETS: [Widget; 4] = [
    Widget {
        kind: ChartKind::Overtime,
        render: OvertimeLineReport::render,
    },
    Widget {
        kind: ChartKind::GenderLine,
        render: GenderStackedBarReport::render,
    },
    Widget {
        kind: ChartKind::Racial,
        render: RacialPieReport::render,
    },
    Widget {
        kind: ChartKind::Gender,
        render: GenderScoreBarReport::render,
    },
];
