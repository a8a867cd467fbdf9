use crate::charts::{LineChart, Series};
use crate::data::DistributorRecord;

use super::{year_labels, ChartInstance, PRIMARY_SERIES, SECONDARY_SERIES};

pub struct OvertimeLineReport;

impl OvertimeLineReport {
    pub fn title(studio: &str) -> String {
        format!("Representation Over Time: {studio}")
    }

    pub fn chart(studio: &str, record: &DistributorRecord) -> Option<LineChart> {
        let data = record.overtime_chart.as_ref()?;

        let series = vec![
            Series::new("White", PRIMARY_SERIES, data.white.clone()),
            Series::new("Underrepresented", SECONDARY_SERIES, data.underrepresented.clone()),
        ];

        Some(LineChart::new(Self::title(studio), year_labels(), series).filled())
    }

    pub fn render(studio: &str, record: &DistributorRecord) -> Option<ChartInstance> {
        Self::chart(studio, record).map(ChartInstance::Line)
    }
}
