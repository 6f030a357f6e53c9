use serde::{Deserialize, Deserializer};
use std::io::Read;

use crate::pipeline::RawSchool;

/// Reads raw institution records from a directory export CSV. Rows without
/// a cursor fall back to their ordinal position.
pub fn load_export<R: Read>(reader: R) -> Result<Vec<RawSchool>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for (index, row) in csv_reader.deserialize::<ExportRow>().enumerate() {
        let row = row?;
        records.push(RawSchool {
            cursor: row.cursor.unwrap_or_else(|| index.to_string()),
            id: row.id,
            name: row.name,
            city: row.city,
            state: row.state,
            country: row.country,
        });
    }

    Ok(records)
}

#[derive(Debug, Deserialize)]
struct ExportRow {
    #[serde(rename = "Id")]
    id: String,
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "City", default)]
    city: String,
    #[serde(rename = "State", default)]
    state: String,
    #[serde(rename = "Country", default, deserialize_with = "empty_string_as_none")]
    country: Option<String>,
    #[serde(rename = "Cursor", default, deserialize_with = "empty_string_as_none")]
    cursor: Option<String>,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
