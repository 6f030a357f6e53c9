mod canonical;
mod dedupe;
mod domain;
mod grouper;
mod normalizer;
mod similarity;

pub use canonical::{canonicalize_group, infer_country, synthesize_name};
pub use dedupe::{dedupe_canonical, dedupe_exact};
pub use domain::{
    CanonicalSchool, CleanSchool, PageInfo, RawSchool, SchoolBranch, SchoolSearchResult,
};
pub use grouper::group_schools;
pub use normalizer::{clean_school, clean_school_country, clean_school_name};
pub use similarity::{normalize_for_similarity, scrub_name, token_overlap};

use tracing::debug;

/// Runs the full entity-resolution pipeline over one page of raw records:
/// normalize, exact dedup, similarity grouping, canonicalization, and a
/// final canonical-level dedup. Total over its input; a malformed record
/// degrades field by field instead of aborting the batch.
pub fn resolve_schools(records: Vec<RawSchool>) -> Vec<CanonicalSchool> {
    let received = records.len();

    let cleaned: Vec<CleanSchool> = records.into_iter().map(clean_school).collect();
    let deduped = dedupe_exact(cleaned);
    let groups = group_schools(deduped);
    let canonical: Vec<CanonicalSchool> = groups.into_iter().map(canonicalize_group).collect();
    let schools = dedupe_canonical(canonical);

    debug!(received, resolved = schools.len(), "resolved school records");
    schools
}
