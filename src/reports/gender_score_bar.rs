use crate::charts::{BarChart, ChartConfig, Orientation, Series};
use crate::data::DistributorRecord;

use super::{year_labels, ChartInstance, PRIMARY_SERIES};

pub struct GenderScoreBarReport;

impl GenderScoreBarReport {
    pub fn title(studio: &str) -> String {
        format!("Gender Inclusion Score Over Time: {studio}")
    }

    pub fn chart(studio: &str, record: &DistributorRecord) -> Option<BarChart> {
        let values = record.gender_chart.as_ref()?;

        let series = vec![Series::new("Gender Inclusion Score", PRIMARY_SERIES, values.clone())];

        Some(
            BarChart::new(Self::title(studio), year_labels(), series)
                .with_orientation(Orientation::Horizontal)
                .with_config(ChartConfig {
                    padding: 48.0,
                    grid_lines: 4,
                    show_legend: false,
                }),
        )
    }

    pub fn render(studio: &str, record: &DistributorRecord) -> Option<ChartInstance> {
        Self::chart(studio, record).map(ChartInstance::Bar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_chart() {
        let record: DistributorRecord = serde_json::from_value(json!({
            "genderChart": [2.1, 2.4, 2.9, 3.3, 3.8, 4.0]
        }))
        .unwrap();

        let chart = GenderScoreBarReport::chart("Lionsgate", &record).unwrap();
        assert_eq!(
            chart.title(),
            "Gender Inclusion Score Over Time: Lionsgate"
        );
        assert_eq!(chart.orientation(), Orientation::Horizontal);
        assert_eq!(chart.series().len(), 1);
        assert_eq!(chart.series()[0].values.len(), 6);
    }
}
