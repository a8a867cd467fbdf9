//! Dashboard controller: owns the dataset, the current selection, the four
//! summary metrics and one chart slot per widget.

use tracing::{debug, error, info, warn};

use crate::data::{display_scalar, DataStore, DistributorRecord};
use crate::reports::{ChartInstance, ChartKind, Widget, WIDGETS};

/// Summary values shown above the charts, already formatted for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metrics {
    pub total_films: String,
    pub women_bts: String,
    pub underrepresented_bts: String,
    pub inclusion_score: String,
}

impl Metrics {
    pub fn placeholder(placeholder: &str) -> Self {
        Self {
            total_films: placeholder.to_owned(),
            women_bts: placeholder.to_owned(),
            underrepresented_bts: placeholder.to_owned(),
            inclusion_score: placeholder.to_owned(),
        }
    }

    pub fn from_record(record: &DistributorRecord, placeholder: &str) -> Self {
        Self {
            total_films: display_scalar(record.total_films.as_ref(), placeholder),
            women_bts: display_scalar(record.women_bts.as_ref(), placeholder),
            underrepresented_bts: display_scalar(record.underrepresented_bts.as_ref(), placeholder),
            inclusion_score: display_scalar(record.inclusion_score.as_ref(), placeholder),
        }
    }

    /// Label/value pairs in display order.
    pub fn entries(&self) -> [(&'static str, &str); 4] {
        [
            ("Total Films", self.total_films.as_str()),
            ("Women BTS", self.women_bts.as_str()),
            ("Underrepresented BTS", self.underrepresented_bts.as_str()),
            ("Inclusion Score", self.inclusion_score.as_str()),
        ]
    }
}

/// Holds the live chart of one widget. Rendering replaces the previous
/// instance, so a slot never holds more than one.
pub struct ChartSlot {
    widget: &'static Widget,
    instance: Option<ChartInstance>,
    renders: u64,
}

impl ChartSlot {
    fn new(widget: &'static Widget) -> Self {
        Self {
            widget,
            instance: None,
            renders: 0,
        }
    }

    pub fn kind(&self) -> ChartKind {
        self.widget.kind
    }

    pub fn instance(&self) -> Option<&ChartInstance> {
        self.instance.as_ref()
    }

    #[cfg(test)]
    pub fn is_rendered(&self) -> bool {
        self.instance.is_some()
    }

    /// Number of instances built over the slot's lifetime.
    #[cfg(test)]
    pub fn renders(&self) -> u64 {
        self.renders
    }

    /// Rebuilds the chart for `studio`. Leaves the slot untouched and returns
    /// `false` when the record lacks this widget's field.
    pub fn render(&mut self, studio: &str, record: &DistributorRecord) -> bool {
        let kind = self.kind();
        let Some(instance) = (self.widget.render)(studio, record) else {
            error!("No {} data available for {studio}", kind.field());
            return false;
        };

        self.instance = Some(instance);
        self.renders += 1;
        debug!(canvas = kind.canvas_id(), studio, renders = self.renders, "Rendered chart");
        true
    }

    pub fn clear(&mut self) {
        self.instance = None;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SidebarEntry<'a> {
    pub name: &'a str,
    pub active: bool,
}

pub struct Dashboard {
    store: DataStore,
    installed: bool,
    sidebar: Vec<String>,
    selection: Option<String>,
    metrics: Metrics,
    slots: Vec<ChartSlot>,
    placeholder: String,
}

impl Dashboard {
    pub fn new(placeholder: impl Into<String>) -> Self {
        let placeholder = placeholder.into();
        Self {
            store: DataStore::default(),
            installed: false,
            sidebar: Vec::new(),
            selection: None,
            metrics: Metrics::placeholder(&placeholder),
            slots: WIDGETS.iter().map(ChartSlot::new).collect(),
            placeholder,
        }
    }

    /// Takes ownership of the loaded dataset and rebuilds the sidebar from it.
    /// The dataset is fixed from then on; later calls are ignored.
    pub fn install(&mut self, store: DataStore) {
        if self.installed {
            warn!("Distributor data already loaded; ignoring new dataset");
            return;
        }

        self.store = store;
        self.installed = true;
        self.rebuild_sidebar();
    }

    fn rebuild_sidebar(&mut self) {
        self.sidebar.clear();

        if self.store.is_empty() {
            warn!("No distributors data available.");
            return;
        }

        self.sidebar.extend(self.store.names().map(str::to_owned));
        info!(studios = self.sidebar.len(), "Sidebar populated");
    }

    /// Makes `studio` the active distributor and redraws everything for it.
    ///
    /// Unknown names change nothing and return `false`.
    pub fn select(&mut self, studio: &str) -> bool {
        let Some(record) = self.store.get(studio) else {
            return false;
        };

        debug!(studio, "Selecting distributor");
        self.selection = Some(studio.to_owned());
        self.metrics = Metrics::from_record(record, &self.placeholder);

        for slot in &mut self.slots {
            let kind = slot.kind();
            if kind.is_present(record) {
                slot.render(studio, record);
            } else {
                warn!("No {} data available for {studio}", kind.field());
                slot.clear();
            }
        }

        true
    }

    pub fn store(&self) -> &DataStore {
        &self.store
    }

    #[cfg(test)]
    pub fn is_installed(&self) -> bool {
        self.installed
    }

    pub fn selection(&self) -> Option<&str> {
        self.selection.as_deref()
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub fn slots(&self) -> &[ChartSlot] {
        &self.slots
    }

    #[cfg(test)]
    pub fn slot(&self, kind: ChartKind) -> Option<&ChartSlot> {
        self.slots.iter().find(|slot| slot.kind() == kind)
    }

    pub fn sidebar(&self) -> impl Iterator<Item = SidebarEntry<'_>> {
        self.sidebar.iter().map(|name| SidebarEntry {
            name,
            active: self.selection.as_deref() == Some(name.as_str()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    fn store(json: &str) -> DataStore {
        serde_json::from_str(json).unwrap()
    }

    fn loaded(json: &str) -> Dashboard {
        let mut dashboard = Dashboard::new("N/A");
        dashboard.install(store(json));
        dashboard
    }

    const FULL: &str = r#"{
        "Universal Pictures": {
            "totalFilms": 12,
            "womenBTS": "24%",
            "underrepresentedBTS": "31%",
            "inclusionScore": 62,
            "overtimeChart": { "white": [70, 68], "underrepresented": [30, 32] },
            "genderLineChart": { "menBTS": [1, 2], "womenBTS": [3, 4] },
            "racialChart": [65, 35],
            "genderChart": [2.5, 3.0]
        },
        "A24": {
            "totalFilms": 9,
            "racialChart": [55, 45]
        },
        "Neon": {
            "womenBTS": "40%",
            "overtimeChart": { "white": [60], "underrepresented": [40] }
        }
    }"#;

    #[test]
    #[traced_test]
    fn test_single_studio_scenario() {
        let mut dashboard = loaded(
            r#"{"Universal Pictures": {"totalFilms": 12, "genderLineChart": {"menBTS":[1,2],"womenBTS":[3,4]}}}"#,
        );
        assert!(dashboard.select("Universal Pictures"));

        let entries: Vec<_> = dashboard.sidebar().collect();
        assert_eq!(
            entries,
            vec![SidebarEntry {
                name: "Universal Pictures",
                active: true
            }]
        );
        assert_eq!(dashboard.metrics().total_films, "12");

        let gender = dashboard.slot(ChartKind::GenderLine).unwrap();
        let Some(ChartInstance::Bar(chart)) = gender.instance() else {
            panic!("expected a bar chart in the genderLineChart slot");
        };
        assert_eq!(chart.series().len(), 2);
        assert!(chart.series().iter().all(|series| series.values.len() == 2));

        for kind in [ChartKind::Overtime, ChartKind::Racial, ChartKind::Gender] {
            assert!(!dashboard.slot(kind).unwrap().is_rendered());
        }
        assert!(logs_contain("No overtimeChart data available for Universal Pictures"));
        assert!(logs_contain("No racialChart data available for Universal Pictures"));
        assert!(logs_contain("No genderChart data available for Universal Pictures"));
    }

    #[test]
    #[traced_test]
    fn test_empty_dataset() {
        let mut dashboard = loaded("{}");
        assert!(dashboard.is_installed());
        assert_eq!(dashboard.sidebar().count(), 0);
        assert!(logs_contain("No distributors data available."));

        assert!(!dashboard.select("Universal Pictures"));
        assert!(dashboard.slots().iter().all(|slot| !slot.is_rendered()));
        assert_eq!(dashboard.metrics(), &Metrics::placeholder("N/A"));
    }

    #[test]
    fn test_select_updates_metrics_and_present_widgets() {
        let mut dashboard = loaded(FULL);
        let names: Vec<String> = dashboard.store().names().map(str::to_owned).collect();

        for name in &names {
            assert!(dashboard.select(name));
            let record = dashboard.store().get(name).unwrap().clone();

            assert_eq!(dashboard.metrics(), &Metrics::from_record(&record, "N/A"));
            for slot in dashboard.slots() {
                assert_eq!(slot.is_rendered(), slot.kind().is_present(&record));
                if let Some(instance) = slot.instance() {
                    assert!(instance.title().ends_with(name.as_str()));
                }
            }
        }
    }

    #[test]
    fn test_select_unknown_studio_is_noop() {
        let mut dashboard = loaded(FULL);
        dashboard.select("A24");
        let metrics = dashboard.metrics().clone();
        let renders: Vec<u64> = dashboard.slots().iter().map(ChartSlot::renders).collect();

        assert!(!dashboard.select("Paramount"));
        assert_eq!(dashboard.selection(), Some("A24"));
        assert_eq!(dashboard.metrics(), &metrics);
        assert_eq!(
            dashboard.slots().iter().map(ChartSlot::renders).collect::<Vec<_>>(),
            renders
        );
        assert!(dashboard.slot(ChartKind::Racial).unwrap().is_rendered());
    }

    #[test]
    fn test_consecutive_selections_keep_one_instance() {
        let mut dashboard = loaded(FULL);
        dashboard.select("Universal Pictures");
        dashboard.select("A24");

        let racial = dashboard.slot(ChartKind::Racial).unwrap();
        assert!(racial.is_rendered());
        assert_eq!(racial.renders(), 2);
        assert_eq!(
            racial.instance().unwrap().title(),
            "Racial Representation: A24"
        );
    }

    #[test]
    fn test_absent_data_clears_stale_chart() {
        let mut dashboard = loaded(FULL);
        dashboard.select("Universal Pictures");
        assert!(dashboard.slot(ChartKind::Gender).unwrap().is_rendered());

        dashboard.select("Neon");
        assert!(!dashboard.slot(ChartKind::Gender).unwrap().is_rendered());
        assert!(!dashboard.slot(ChartKind::GenderLine).unwrap().is_rendered());
        assert!(dashboard.slot(ChartKind::Overtime).unwrap().is_rendered());
    }

    #[test]
    fn test_missing_scalar_shows_placeholder() {
        let mut dashboard = loaded(FULL);
        dashboard.select("Neon");

        let metrics = dashboard.metrics();
        assert_eq!(metrics.total_films, "N/A");
        assert_eq!(metrics.women_bts, "40%");
        assert_eq!(metrics.inclusion_score, "N/A");
    }

    #[test]
    fn test_sidebar_tracks_selection() {
        let mut dashboard = loaded(FULL);
        assert!(dashboard.sidebar().all(|entry| !entry.active));

        dashboard.select("A24");
        dashboard.select("Neon");
        let active: Vec<_> = dashboard
            .sidebar()
            .filter(|entry| entry.active)
            .map(|entry| entry.name)
            .collect();
        assert_eq!(active, vec!["Neon"]);
        assert_eq!(
            dashboard.sidebar().map(|entry| entry.name).collect::<Vec<_>>(),
            vec!["Universal Pictures", "A24", "Neon"]
        );
    }

    #[test]
    #[traced_test]
    fn test_slot_render_without_data_has_no_side_effects() {
        let mut dashboard = loaded(FULL);
        dashboard.select("Universal Pictures");

        let slot = dashboard
            .slots
            .iter_mut()
            .find(|slot| slot.kind() == ChartKind::Overtime)
            .unwrap();
        assert!(!slot.render("Universal Pictures", &DistributorRecord::default()));
        assert!(slot.is_rendered());
        assert_eq!(slot.renders(), 1);
        assert!(logs_contain("No overtimeChart data available for Universal Pictures"));
    }

    #[test]
    #[traced_test]
    fn test_install_is_one_shot() {
        let mut dashboard = loaded(FULL);
        dashboard.install(DataStore::default());
        assert_eq!(dashboard.store().len(), 3);
        assert!(logs_contain("already loaded"));
    }
}
