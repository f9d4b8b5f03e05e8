use std::{
    fs,
    path::{Path, PathBuf},
};

use color_eyre::{Section, eyre::eyre};
use itertools::{Either, Itertools};
use tracing::{info, warn};
use walkdir::{DirEntry, WalkDir};

use crate::{
    config::OUTPUT_DIR,
    error::MetaError,
    persist::write_record,
    record::assemble,
    types::{Locale, Slug},
};

/// Projects written by one run, in processing order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BuildSummary {
    pub projects: Vec<(Slug, Vec<Locale>)>,
}

/// Write metadata for every project under OUTPUT_DIR of the current working directory.
pub fn build_once() -> color_eyre::Result<BuildSummary> {
    let root =
        std::env::current_dir().with_note(|| "While getting the current working directory")?;
    build_at(&root)
}

pub fn build_at(root: &Path) -> color_eyre::Result<BuildSummary> {
    let output_dir = root.join(OUTPUT_DIR);
    let projects = discover_projects(&output_dir)
        .with_note(|| format!("While listing projects in {}", output_dir.display()))?;

    let mut summary = BuildSummary::default();
    for (slug, project_dir) in projects {
        let record = assemble(&slug, &project_dir)
            .with_note(|| format!("While building metadata for project {slug}"))?;
        let path = write_record(&record, &project_dir)
            .with_note(|| format!("While writing metadata for project {slug}"))?;

        let languages = record.languages();
        info!(
            slug = record.slug.as_str(),
            languages = ?languages,
            path = %path.display(),
            "metadata written"
        );
        summary.projects.push((slug, languages));
    }

    Ok(summary)
}

/// Direct children of `output_dir` that are directories with a usable name,
/// sorted by name. Anything else is skipped.
fn discover_projects(output_dir: &Path) -> color_eyre::Result<Vec<(Slug, PathBuf)>> {
    fs::metadata(output_dir).map_err(|e| MetaError::file_access(output_dir, e))?;

    let (entries, errors): (Vec<DirEntry>, Vec<walkdir::Error>) = WalkDir::new(output_dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .partition_map(|r| match r {
            Ok(v) => Either::Left(v),
            Err(e) => Either::Right(e),
        });

    if !errors.is_empty() {
        return Err(eyre!("Failed to open some directory entries: {errors:?}"));
    }

    let projects = entries
        .into_iter()
        .filter_map(|entry| {
            if !entry.file_type().is_dir() {
                warn!(path = %entry.path().display(), "skipping non-directory entry");
                return None;
            }
            match Slug::from_os(entry.file_name()) {
                Some(slug) => Some((slug, entry.into_path())),
                None => {
                    warn!(path = %entry.path().display(), "skipping entry with unusable name");
                    None
                }
            }
        })
        .collect();

    Ok(projects)
}
