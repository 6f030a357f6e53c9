use std::collections::HashMap;

use tracing::trace;

use super::domain::CleanSchool;
use super::similarity::{normalize_for_similarity, scrub_name, token_overlap};

const STRING_SIMILARITY_THRESHOLD: f64 = 0.9;
const TOKEN_OVERLAP_THRESHOLD: f64 = 0.7;

/// Disjoint-set over record indices with path compression.
struct DisjointSet {
    parent: Vec<usize>,
}

impl DisjointSet {
    fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
        }
    }

    fn find(&mut self, x: usize) -> usize {
        let parent = self.parent[x];
        if parent == x {
            return x;
        }

        let root = self.find(parent);
        self.parent[x] = root;
        root
    }

    fn union(&mut self, a: usize, b: usize) {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a != root_b {
            self.parent[root_b] = root_a;
        }
    }
}

/// Clusters records that denote the same institution.
///
/// Every unordered index pair is scored with two independent signals and
/// merged only when both clear their threshold:
/// - Jaro-Winkler over the scrubbed names, stopwords retained, so that a
///   single distinguishing token ("Boston College" vs "Boston University")
///   keeps the pair apart;
/// - token overlap over the stopword-stripped token sets, so that one
///   shared long word is not enough on its own.
///
/// The scan is O(n²); record counts are bounded by the upstream page size.
/// Groups come out in order of their first member.
pub fn group_schools(records: Vec<CleanSchool>) -> Vec<Vec<CleanSchool>> {
    let scrubbed: Vec<String> = records.iter().map(|r| scrub_name(&r.name)).collect();
    let stripped: Vec<String> = records
        .iter()
        .map(|r| normalize_for_similarity(&r.name))
        .collect();

    let mut sets = DisjointSet::new(records.len());

    for i in 0..records.len() {
        for j in (i + 1)..records.len() {
            let string_similarity = strsim::jaro_winkler(&scrubbed[i], &scrubbed[j]);
            let overlap = token_overlap(&stripped[i], &stripped[j]);

            if string_similarity > STRING_SIMILARITY_THRESHOLD
                && overlap > TOKEN_OVERLAP_THRESHOLD
            {
                trace!(
                    left = %records[i].name,
                    right = %records[j].name,
                    string_similarity,
                    overlap,
                    "merging records"
                );
                sets.union(i, j);
            }
        }
    }

    let mut group_slots: HashMap<usize, usize> = HashMap::new();
    let mut groups: Vec<Vec<CleanSchool>> = Vec::new();

    for (index, record) in records.into_iter().enumerate() {
        let root = sets.find(index);
        let slot = *group_slots.entry(root).or_insert_with(|| {
            groups.push(Vec::new());
            groups.len() - 1
        });
        groups[slot].push(record);
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn school(id: &str, name: &str) -> CleanSchool {
        CleanSchool {
            id: id.to_string(),
            cursor: format!("cursor-{id}"),
            name: name.to_string(),
            city: "Town".to_string(),
            state: "TS".to_string(),
            country: None,
        }
    }

    fn group_names(groups: &[Vec<CleanSchool>]) -> Vec<Vec<&str>> {
        groups
            .iter()
            .map(|group| group.iter().map(|r| r.id.as_str()).collect())
            .collect()
    }

    #[test]
    fn every_record_lands_in_exactly_one_group() {
        let records = vec![
            school("1", "University Of Springfield"),
            school("2", "University Of Springfield At Shelbyville"),
            school("3", "Capital City Conservatory"),
        ];

        let groups = group_schools(records);
        let total: usize = groups.iter().map(Vec::len).sum();
        assert_eq!(total, 3);
        assert_eq!(groups.len(), 2);
    }

    #[test]
    fn branch_campus_merges_with_main_campus() {
        let records = vec![
            school("1", "University Of Springfield"),
            school("2", "University Of Springfield At Shelbyville"),
        ];

        let groups = group_schools(records);
        assert_eq!(group_names(&groups), vec![vec!["1", "2"]]);
    }

    #[test]
    fn boston_college_and_boston_university_stay_separate() {
        let records = vec![
            school("1", "Boston College"),
            school("2", "Boston University"),
        ];

        // Token overlap after stopword removal is 1.0, but the string
        // signal on the full scrubbed names stays below threshold.
        let groups = group_schools(records);
        assert_eq!(groups.len(), 2);
    }

    #[test]
    fn grouping_is_transitive_across_a_chain() {
        // 1~2 and 2~3 clear both thresholds; 1~3 alone would fail the
        // string signal. All three must still share one group.
        let records = vec![
            school("1", "Springfield Armory"),
            school("2", "Springfield Armory Annex"),
            school("3", "Springfield Armory Annex North Campus Yard"),
        ];

        let groups = group_schools(records);
        assert_eq!(group_names(&groups), vec![vec!["1", "2", "3"]]);
    }

    #[test]
    fn singleton_records_form_their_own_groups() {
        let records = vec![school("1", "Alpha Academy"), school("2", "Beta Seminary")];
        let groups = group_schools(records);
        assert_eq!(group_names(&groups), vec![vec!["1"], vec!["2"]]);
    }

    #[test]
    fn empty_input_yields_no_groups() {
        assert!(group_schools(Vec::new()).is_empty());
    }
}
