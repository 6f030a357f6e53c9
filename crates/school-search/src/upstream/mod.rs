mod export;

pub use export::load_export;

use crate::pipeline::{PageInfo, RawSchool};

/// One page of raw results from the upstream directory search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryPage {
    pub records: Vec<RawSchool>,
    pub page_info: Option<PageInfo>,
}

/// Failure surface of the upstream fetch. The resolution pipeline is never
/// invoked when a search fails; the request layer substitutes an empty
/// result instead.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("directory endpoint unreachable: {0}")]
    Unreachable(String),
    #[error("directory returned a malformed payload: {0}")]
    MalformedPayload(String),
    #[error("failed to read directory export: {0}")]
    Export(#[from] csv::Error),
    #[error("failed to open directory export: {0}")]
    ExportIo(#[from] std::io::Error),
}

/// Boundary to the upstream institution directory. Implementations own all
/// blocking I/O; the pipeline itself never fetches.
pub trait DirectoryClient: Send + Sync {
    fn search(&self, query: &str) -> Result<DirectoryPage, DirectoryError>;
}
