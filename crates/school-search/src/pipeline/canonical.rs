use std::collections::HashMap;

use super::domain::{CanonicalSchool, CleanSchool, SchoolBranch};

/// Collapses one equivalence group into its display-ready school. Every
/// member survives as a branch entry.
pub fn canonicalize_group(group: Vec<CleanSchool>) -> CanonicalSchool {
    let canonical_name = synthesize_name(&group).unwrap_or_else(|| shortest_member_name(&group));
    let canonical_country = infer_country(&group);

    CanonicalSchool {
        canonical_name,
        canonical_country,
        branches: group.into_iter().map(SchoolBranch::from).collect(),
    }
}

/// The longest phrase shared by every member name.
///
/// The member with the fewest normalized tokens serves as the base; every
/// contiguous token window of the base is tested as a literal substring of
/// each other member's joined normalized name. Longer windows win, the
/// first window found wins among equals. Returns `None` when the members
/// share no phrase at all.
pub fn synthesize_name(group: &[CleanSchool]) -> Option<String> {
    let names: Vec<Vec<String>> = group
        .iter()
        .map(|school| school.name.trim())
        .filter(|name| !name.is_empty())
        .map(letter_tokens)
        .collect();

    let base = names.iter().min_by_key(|tokens| tokens.len())?;
    let joined: Vec<String> = names.iter().map(|tokens| tokens.join(" ")).collect();

    let mut best: &[String] = &[];
    for start in 0..base.len() {
        for end in (start + 1)..=base.len() {
            let phrase = base[start..end].join(" ");
            let shared_by_all = joined.iter().all(|name| name.contains(&phrase));

            if shared_by_all && end - start > best.len() {
                best = &base[start..end];
            }
        }
    }

    if best.is_empty() {
        return None;
    }

    Some(
        best.iter()
            .map(|token| capitalize_first(token))
            .collect::<Vec<_>>()
            .join(" "),
    )
}

/// Majority vote over the members' inferred countries, ignoring absent
/// values. Ties break to the first-encountered maximum in group order.
pub fn infer_country(group: &[CleanSchool]) -> Option<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for school in group {
        if let Some(country) = school.country.as_deref() {
            *counts.entry(country).or_insert(0) += 1;
        }
    }

    let mut max_country = None;
    let mut max_count = 0;
    for school in group {
        let Some(country) = school.country.as_deref() else {
            continue;
        };
        let count = counts[country];
        if count > max_count {
            max_count = count;
            max_country = Some(country.to_string());
        }
    }

    max_country
}

/// Fallback when no common phrase exists: the shortest member name.
fn shortest_member_name(group: &[CleanSchool]) -> String {
    group
        .iter()
        .map(|school| school.name.as_str())
        .min_by_key(|name| name.chars().count())
        .unwrap_or_default()
        .to_string()
}

fn letter_tokens(name: &str) -> Vec<String> {
    name.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphabetic() || c.is_whitespace())
        .collect::<String>()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Upper-cases only the first character; the remainder is left as-is.
fn capitalize_first(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
