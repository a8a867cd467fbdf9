use crate::charts::{BarChart, Series};
use crate::data::DistributorRecord;

use super::{year_labels, ChartInstance, PRIMARY_SERIES, SECONDARY_SERIES};

pub struct GenderStackedBarReport;

impl GenderStackedBarReport {
    pub fn title(studio: &str) -> String {
        format!("Gender Representation Over Time: {studio}")
    }

    pub fn chart(studio: &str, record: &DistributorRecord) -> Option<BarChart> {
        let data = record.gender_line_chart.as_ref()?;

        let series = vec![
            Series::new("Men BTS", PRIMARY_SERIES, data.men_bts.clone()),
            Series::new("Women BTS", SECONDARY_SERIES, data.women_bts.clone()),
        ];

        Some(BarChart::new(Self::title(studio), year_labels(), series))
    }

    pub fn render(studio: &str, record: &DistributorRecord) -> Option<ChartInstance> {
        Self::chart(studio, record).map(ChartInstance::Bar)
    }
}
