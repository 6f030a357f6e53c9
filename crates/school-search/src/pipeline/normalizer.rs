use super::domain::{CleanSchool, RawSchool};

/// Normalizes one raw record. Total: malformed fields degrade to empty
/// strings or `None`, never an error.
pub fn clean_school(raw: RawSchool) -> CleanSchool {
    CleanSchool {
        name: clean_school_name(&raw.name),
        city: raw.city.trim().to_string(),
        state: raw.state.trim().to_string(),
        country: clean_school_country(raw.country.as_deref()),
        id: raw.id,
        cursor: raw.cursor,
    }
}

/// Fixes the spacing and capitalization of a school name: drops a leading
/// "The " prefix, trims, then title-cases each space-separated token while
/// keeping token count and order intact.
pub fn clean_school_name(name: &str) -> String {
    let without_article = name.strip_prefix("The ").unwrap_or(name);

    without_article
        .trim()
        .split(' ')
        .map(title_case_token)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Splits the upstream's legacy compound country field (e.g. `US-NY`) and
/// keeps the second part. Garbled codes without a second part are discarded
/// rather than guessed.
pub fn clean_school_country(country: Option<&str>) -> Option<String> {
    let country = country?;
    let mut parts = country.split('-');
    parts.next()?;
    parts.next().map(str::to_string)
}

fn title_case_token(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}
