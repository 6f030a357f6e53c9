use crate::infra::InMemoryDirectory;
use clap::Args;
use school_search::error::AppError;
use school_search::pipeline::{resolve_schools, CanonicalSchool, SchoolSearchResult};
use school_search::upstream::DirectoryClient;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct SearchArgs {
    /// Search query matched against institution names
    pub(crate) query: String,
    /// Directory export CSV to search; defaults to the bundled fixture data
    #[arg(long)]
    pub(crate) export: Option<PathBuf>,
    /// Emit the raw JSON response body instead of a readable listing
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_search(args: SearchArgs) -> Result<(), AppError> {
    let SearchArgs {
        query,
        export,
        json,
    } = args;

    let directory = match export {
        Some(path) => InMemoryDirectory::from_export_path(path)?,
        None => InMemoryDirectory::sample(),
    };

    let page = directory.search(&query)?;
    let result = SchoolSearchResult {
        schools: resolve_schools(page.records),
        page_info: page.page_info,
    };

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&result).unwrap_or_else(|_| "{}".to_string())
        );
    } else {
        render_listing(&query, &result.schools);
    }

    Ok(())
}

fn render_listing(query: &str, schools: &[CanonicalSchool]) {
    if schools.is_empty() {
        println!("No schools matched '{query}'.");
        return;
    }

    println!("{} canonical school(s) for '{query}':", schools.len());
    for school in schools {
        match &school.canonical_country {
            Some(country) => println!("- {} [{}]", school.canonical_name, country),
            None => println!("- {}", school.canonical_name),
        }
        for branch in &school.branches {
            println!("    {} ({}, {})", branch.name, branch.city, branch.state);
        }
    }
}
