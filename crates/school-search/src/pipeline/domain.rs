use serde::{Deserialize, Serialize};

/// One institution record exactly as the upstream directory returned it.
///
/// `country` carries the upstream's legacy compound code (e.g. `US-NY`) and
/// may be absent entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawSchool {
    pub id: String,
    pub cursor: String,
    pub name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub country: Option<String>,
}

/// A raw record after field normalization. One `CleanSchool` corresponds to
/// exactly one `RawSchool`; downstream stages only ever read it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanSchool {
    pub id: String,
    pub cursor: String,
    pub name: String,
    pub city: String,
    pub state: String,
    pub country: Option<String>,
}

/// One original record preserved inside a canonical school.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchoolBranch {
    pub id: String,
    pub name: String,
    pub city: String,
    pub state: String,
    pub cursor: String,
}

impl From<CleanSchool> for SchoolBranch {
    fn from(school: CleanSchool) -> Self {
        Self {
            id: school.id,
            name: school.name,
            city: school.city,
            state: school.state,
            cursor: school.cursor,
        }
    }
}

/// The deduplicated, display-ready institution grouping its branch records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalSchool {
    pub canonical_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canonical_country: Option<String>,
    pub branches: Vec<SchoolBranch>,
}

/// Upstream pagination state, passed through unmodified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub has_next_page: bool,
    pub end_cursor: String,
}

/// The response body handed back to the request layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchoolSearchResult {
    pub schools: Vec<CanonicalSchool>,
    pub page_info: Option<PageInfo>,
}

impl SchoolSearchResult {
    /// The substitute result the request layer returns when the upstream
    /// fetch fails; the pipeline itself is never invoked in that case.
    pub fn empty() -> Self {
        Self {
            schools: Vec::new(),
            page_info: None,
        }
    }
}
