use metrics_exporter_prometheus::PrometheusHandle;
use school_search::pipeline::{PageInfo, RawSchool};
use school_search::upstream::{load_export, DirectoryClient, DirectoryError, DirectoryPage};
use std::fs::File;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) directory: Arc<dyn DirectoryClient>,
}

/// Directory backed by an in-memory record set; serves both the bundled
/// fixture data and loaded CSV exports.
#[derive(Debug, Clone, Default)]
pub(crate) struct InMemoryDirectory {
    records: Vec<RawSchool>,
}

impl InMemoryDirectory {
    pub(crate) fn new(records: Vec<RawSchool>) -> Self {
        Self { records }
    }

    pub(crate) fn from_export_path<P: AsRef<Path>>(path: P) -> Result<Self, DirectoryError> {
        let file = File::open(path)?;
        let records = load_export(file)?;
        Ok(Self::new(records))
    }

    /// A small campus directory with the duplicate shapes the pipeline is
    /// built to resolve: article variants, legacy region codes, and a
    /// branch campus.
    pub(crate) fn sample() -> Self {
        Self::new(sample_records())
    }
}

impl DirectoryClient for InMemoryDirectory {
    fn search(&self, query: &str) -> Result<DirectoryPage, DirectoryError> {
        let needle = query.to_lowercase();
        let records: Vec<RawSchool> = self
            .records
            .iter()
            .filter(|record| record.name.to_lowercase().contains(&needle))
            .cloned()
            .collect();

        let page_info = records.last().map(|last| PageInfo {
            has_next_page: false,
            end_cursor: last.cursor.clone(),
        });

        Ok(DirectoryPage { records, page_info })
    }
}

fn sample_records() -> Vec<RawSchool> {
    let rows: [(&str, &str, &str, &str, Option<&str>); 7] = [
        ("1", "The University of Springfield", "Springfield", "IL", Some("US-IL")),
        ("2", "University of Springfield", "Springfield", "IL", Some("US-IL")),
        (
            "3",
            "University of Springfield at Shelbyville",
            "Shelbyville",
            "IL",
            Some("US-IL"),
        ),
        ("4", "Boston College", "Chestnut Hill", "MA", Some("US-MA")),
        ("5", "Boston University", "Boston", "MA", Some("US-MA")),
        ("6", "Capital City Community College", "Capital City", "KS", Some("US")),
        ("7", "Springfield Technical Institute", "Springfield", "OR", Some("US-OR")),
    ];

    rows.into_iter()
        .map(|(id, name, city, state, country)| RawSchool {
            id: id.to_string(),
            cursor: format!("cursor-{id}"),
            name: name.to_string(),
            city: city.to_string(),
            state: state.to_string(),
            country: country.map(str::to_string),
        })
        .collect()
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// Directory stub that always fails, for exercising the empty-result
    /// substitution path.
    #[derive(Debug, Default, Clone)]
    pub(crate) struct FailingDirectory;

    impl DirectoryClient for FailingDirectory {
        fn search(&self, _query: &str) -> Result<DirectoryPage, DirectoryError> {
            Err(DirectoryError::Unreachable(
                "stubbed directory is offline".to_string(),
            ))
        }
    }
}
