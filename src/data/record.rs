use serde::de::{DeserializeOwned, Deserializer};
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

/// Statistics for a single distributor, as found in the dataset.
///
/// The scalar fields are display-only and kept as raw JSON so whatever the
/// dataset carries (`12`, `"42%"`, `87.5`) is shown verbatim. A chart field
/// that does not have the expected shape is treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DistributorRecord {
    #[serde(rename = "totalFilms")]
    pub total_films: Option<Value>,
    #[serde(rename = "womenBTS")]
    pub women_bts: Option<Value>,
    #[serde(rename = "underrepresentedBTS")]
    pub underrepresented_bts: Option<Value>,
    #[serde(rename = "inclusionScore")]
    pub inclusion_score: Option<Value>,

    #[serde(rename = "overtimeChart", default, deserialize_with = "lenient")]
    pub overtime_chart: Option<RaceSeries>,
    #[serde(rename = "genderLineChart", default, deserialize_with = "lenient")]
    pub gender_line_chart: Option<GenderSeries>,
    #[serde(rename = "racialChart", default, deserialize_with = "lenient")]
    pub racial_chart: Option<Vec<Option<f32>>>,
    #[serde(rename = "genderChart", default, deserialize_with = "lenient")]
    pub gender_chart: Option<Vec<Option<f32>>>,
}

/// Yearly share of white and underrepresented crew. `None` entries are gaps.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RaceSeries {
    #[serde(default)]
    pub white: Vec<Option<f32>>,
    #[serde(default)]
    pub underrepresented: Vec<Option<f32>>,
}

/// Yearly behind-the-scenes headcount split by gender.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GenderSeries {
    #[serde(rename = "menBTS", default)]
    pub men_bts: Vec<Option<f32>>,
    #[serde(rename = "womenBTS", default)]
    pub women_bts: Vec<Option<f32>>,
}

// `null` and malformed chart data both read as absent; only the latter warns.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }

    match serde_json::from_value(value) {
        Ok(parsed) => Ok(Some(parsed)),
        Err(err) => {
            warn!(error = %err, "Ignoring malformed chart data");
            Ok(None)
        }
    }
}

/// Renders a display-only scalar, falling back to `placeholder` when the
/// value is missing, `null` or an empty string.
pub fn display_scalar(value: Option<&Value>, placeholder: &str) -> String {
    match value {
        None | Some(Value::Null) => placeholder.to_owned(),
        Some(Value::String(text)) if text.trim().is_empty() => placeholder.to_owned(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tracing_test::traced_test;

    #[test]
    fn test_record_field_names() {
        let record: DistributorRecord = serde_json::from_value(json!({
            "totalFilms": 12,
            "womenBTS": "24%",
            "underrepresentedBTS": 31.5,
            "inclusionScore": "B+",
            "overtimeChart": { "white": [70, 68], "underrepresented": [30, 32] },
            "genderLineChart": { "menBTS": [1, 2], "womenBTS": [3, 4] },
            "racialChart": [65, 35],
            "genderChart": [2.5, 3.0]
        }))
        .unwrap();

        assert_eq!(record.total_films, Some(json!(12)));
        assert_eq!(record.women_bts, Some(json!("24%")));
        assert_eq!(
            record.overtime_chart.unwrap().underrepresented,
            vec![Some(30.0), Some(32.0)]
        );
        let gender = record.gender_line_chart.unwrap();
        assert_eq!(gender.men_bts, vec![Some(1.0), Some(2.0)]);
        assert_eq!(gender.women_bts, vec![Some(3.0), Some(4.0)]);
        assert_eq!(record.racial_chart, Some(vec![Some(65.0), Some(35.0)]));
        assert_eq!(record.gender_chart, Some(vec![Some(2.5), Some(3.0)]));
    }

    #[test]
    fn test_missing_fields_are_none() {
        let record: DistributorRecord =
            serde_json::from_value(json!({ "unrelated": true })).unwrap();
        assert_eq!(record, DistributorRecord::default());
    }

    #[test]
    fn test_partial_chart_object() {
        let record: DistributorRecord =
            serde_json::from_value(json!({ "genderLineChart": { "menBTS": [5] } })).unwrap();
        let gender = record.gender_line_chart.unwrap();
        assert_eq!(gender.men_bts, vec![Some(5.0)]);
        assert!(gender.women_bts.is_empty());
    }

    #[test]
    fn test_null_chart_values_are_gaps() {
        let record: DistributorRecord = serde_json::from_value(json!({
            "overtimeChart": { "white": [70, null, 66], "underrepresented": [30, 31, 34] },
            "racialChart": [60, null]
        }))
        .unwrap();

        assert_eq!(
            record.overtime_chart.unwrap().white,
            vec![Some(70.0), None, Some(66.0)]
        );
        assert_eq!(record.racial_chart, Some(vec![Some(60.0), None]));
    }

    #[test]
    #[traced_test]
    fn test_malformed_chart_field_is_absent() {
        let record: DistributorRecord = serde_json::from_value(json!({
            "totalFilms": 9,
            "genderChart": "n/a",
            "genderLineChart": { "menBTS": "many" },
            "racialChart": null
        }))
        .unwrap();

        assert_eq!(record.total_films, Some(json!(9)));
        assert!(record.gender_chart.is_none());
        assert!(record.gender_line_chart.is_none());
        assert!(record.racial_chart.is_none());
        assert!(logs_contain("Ignoring malformed chart data"));
    }

    #[test]
    fn test_display_scalar() {
        assert_eq!(display_scalar(None, "N/A"), "N/A");
        assert_eq!(display_scalar(Some(&Value::Null), "N/A"), "N/A");
        assert_eq!(display_scalar(Some(&json!("")), "N/A"), "N/A");
        assert_eq!(display_scalar(Some(&json!(12)), "N/A"), "12");
        assert_eq!(display_scalar(Some(&json!(0)), "N/A"), "0");
        assert_eq!(display_scalar(Some(&json!(87.5)), "N/A"), "87.5");
        assert_eq!(display_scalar(Some(&json!("42%")), "N/A"), "42%");
    }
}
