use crate::charts::{PieChart, PieSlice};
use crate::data::DistributorRecord;

use super::{ChartInstance, PRIMARY_SERIES, SECONDARY_SERIES};

pub struct RacialPieReport;

impl RacialPieReport {
    pub fn title(studio: &str) -> String {
        format!("Racial Representation: {studio}")
    }

    pub fn chart(studio: &str, record: &DistributorRecord) -> Option<PieChart> {
        let values = record.racial_chart.as_ref()?;
        let labels = ["White", "Underrepresented"];
        let palette = [PRIMARY_SERIES, SECONDARY_SERIES];

        // Values beyond the two known groups have no label and are dropped,
        // as are null values.
        let slices = values
            .iter()
            .zip(labels)
            .zip(palette)
            .filter_map(|((value, label), color)| {
                value.map(|value| PieSlice {
                    label: label.to_string(),
                    value,
                    color,
                })
            })
            .collect();

        Some(PieChart::new(Self::title(studio), slices))
    }

    pub fn render(studio: &str, record: &DistributorRecord) -> Option<ChartInstance> {
        Self::chart(studio, record).map(ChartInstance::Pie)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_chart() {
        let record: DistributorRecord =
            serde_json::from_value(json!({ "racialChart": [72, 28, 5] })).unwrap();

        let chart = RacialPieReport::chart("A24", &record).unwrap();
        assert_eq!(chart.title(), "Racial Representation: A24");
        let slices = chart.slices();
        assert_eq!(slices.len(), 2);
        assert_eq!(slices[0].label, "White");
        assert_eq!(slices[1].label, "Underrepresented");
        assert_eq!(slices[1].value, 28.0);
    }

    #[test]
    fn test_null_value_has_no_slice() {
        let record: DistributorRecord =
            serde_json::from_value(json!({ "racialChart": [null, 28] })).unwrap();

        let chart = RacialPieReport::chart("A24", &record).unwrap();
        let slices = chart.slices();
        assert_eq!(slices.len(), 1);
        assert_eq!(slices[0].label, "Underrepresented");
        assert_eq!(slices[0].color, SECONDARY_SERIES);
    }
}
