use std::collections::HashMap;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::warn;

use super::record::DistributorRecord;

/// Read-only mapping from studio name to its record, in document order.
#[derive(Debug, Clone, Default)]
pub struct DataStore {
    entries: Vec<(String, DistributorRecord)>,
    index: HashMap<String, usize>,
}

impl DataStore {
    pub fn get(&self, name: &str) -> Option<&DistributorRecord> {
        self.index.get(name).map(|&position| &self.entries[position].1)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // A repeated key keeps its first position and takes the later value.
    fn insert(&mut self, name: String, record: DistributorRecord) {
        match self.index.get(&name) {
            Some(&position) => self.entries[position].1 = record,
            None => {
                self.index.insert(name.clone(), self.entries.len());
                self.entries.push((name, record));
            }
        }
    }
}

struct DataStoreVisitor;

impl<'de> Visitor<'de> for DataStoreVisitor {
    type Value = DataStore;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an object mapping studio names to distributor records")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut store = DataStore::default();
        while let Some((name, value)) = access.next_entry::<String, Value>()? {
            let record = serde_json::from_value(value).unwrap_or_else(|err| {
                warn!(studio = %name, error = %err, "Distributor record is not an object");
                DistributorRecord::default()
            });
            store.insert(name, record);
        }
        Ok(store)
    }
}

impl<'de> Deserialize<'de> for DataStore {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(DataStoreVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tracing_test::traced_test;

    #[test]
    fn test_names_keep_document_order() {
        let store: DataStore = serde_json::from_str(
            r#"{"Warner Bros.": {}, "A24": {}, "Universal Pictures": {}, "Lionsgate": {}}"#,
        )
        .unwrap();
        assert_eq!(
            store.names().collect::<Vec<_>>(),
            vec!["Warner Bros.", "A24", "Universal Pictures", "Lionsgate"]
        );
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn test_get() {
        let store: DataStore =
            serde_json::from_str(r#"{"Universal Pictures": {"totalFilms": 12}}"#).unwrap();
        let record = store.get("Universal Pictures").unwrap();
        assert_eq!(record.total_films, Some(json!(12)));
        assert!(store.get("Paramount").is_none());
    }

    #[test]
    fn test_duplicate_key_keeps_first_position() {
        let store: DataStore = serde_json::from_str(
            r#"{"A24": {"totalFilms": 1}, "Neon": {}, "A24": {"totalFilms": 2}}"#,
        )
        .unwrap();
        assert_eq!(store.names().collect::<Vec<_>>(), vec!["A24", "Neon"]);
        assert_eq!(store.get("A24").unwrap().total_films, Some(json!(2)));
    }

    #[test]
    fn test_empty_document() {
        let store: DataStore = serde_json::from_str("{}").unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_rejects_non_object() {
        assert!(serde_json::from_str::<DataStore>("[1, 2, 3]").is_err());
    }

    #[test]
    fn test_bad_chart_data_keeps_other_studios() {
        let store: DataStore = serde_json::from_str(
            r#"{
                "Universal Pictures": {"totalFilms": 12, "racialChart": [70, 30]},
                "A24": {"racialChart": [60, null]},
                "Neon": {"genderChart": "n/a", "totalFilms": 4}
            }"#,
        )
        .unwrap();

        assert_eq!(
            store.names().collect::<Vec<_>>(),
            vec!["Universal Pictures", "A24", "Neon"]
        );
        assert_eq!(
            store.get("Universal Pictures").unwrap().racial_chart,
            Some(vec![Some(70.0), Some(30.0)])
        );
        assert_eq!(
            store.get("A24").unwrap().racial_chart,
            Some(vec![Some(60.0), None])
        );
        let neon = store.get("Neon").unwrap();
        assert!(neon.gender_chart.is_none());
        assert_eq!(neon.total_films, Some(json!(4)));
    }

    #[test]
    #[traced_test]
    fn test_non_object_record_is_empty() {
        let store: DataStore =
            serde_json::from_str(r#"{"A24": 5, "Neon": {"totalFilms": 2}}"#).unwrap();

        assert_eq!(store.names().collect::<Vec<_>>(), vec!["A24", "Neon"]);
        assert_eq!(store.get("A24"), Some(&DistributorRecord::default()));
        assert!(logs_contain("Distributor record is not an object"));
    }
}
