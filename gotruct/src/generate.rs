//! @ai:module:intent Drive the scan, match, extract, aggregate, emit pipeline for one directory
//! @ai:module:layer application
//! @ai:module:public_api list_source_files, scan_directory, generate, ScanResult, GenerationSummary
//! @ai:module:depends_on extractor, groups, emitter, config, error
//! @ai:module:stateless true

use crate::config::GeneratorConfig;
use crate::emitter::{render, write_output, EmitOptions};
use crate::error::Result;
use crate::extractor::extract_file;
use crate::groups::ConverterGroups;
use crate::matcher::Matcher;
use serde::Serialize;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// @ai:intent Outcome of scanning a directory: how many files were read and what was grouped
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScanResult {
    pub files_scanned: usize,
    pub groups: ConverterGroups,
}

/// @ai:intent Counts reported after a completed generation run
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct GenerationSummary {
    pub files_scanned: usize,
    pub groups: usize,
    pub records: usize,
    pub output: Option<PathBuf>,
}

/// @ai:intent List non-directory entries directly inside `dir`, sorted by file name
/// @ai:post subdirectories are skipped and never descended into
/// @ai:post an unreadable directory yields an empty list
/// @ai:post an entry that cannot be inspected is still listed so reading it reports the failure
/// @ai:effects fs:read
pub fn list_source_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        match entry {
            Ok(entry) if entry.file_type().is_dir() => {
                tracing::debug!("Skipping directory {}", entry.path().display());
            }
            Ok(entry) => files.push(entry.into_path()),
            Err(e) if e.depth() == 0 => {
                tracing::warn!("Cannot list {}: {}", dir.display(), e);
            }
            Err(e) => match e.path() {
                Some(path) => {
                    tracing::debug!("Cannot inspect {}: {}", path.display(), e);
                    files.push(path.to_path_buf());
                }
                None => tracing::warn!("Skipping unreadable entry in {}: {}", dir.display(), e),
            },
        }
    }

    files
}

/// @ai:intent Parse every file in the directory and fold matched records into groups
/// @ai:pre files are visited in file-name order
/// @ai:post on Err no groups are returned; the first parse failure ends the scan
/// @ai:effects fs:read
pub fn scan_directory(dir: &Path, matcher: &Matcher) -> Result<ScanResult> {
    let files = list_source_files(dir);
    tracing::info!("Scanning {} files in {}", files.len(), dir.display());

    let groups = files
        .iter()
        .try_fold(ConverterGroups::new(), |mut groups, path| {
            tracing::debug!("Parsing {}", path.display());
            groups.merge(extract_file(path, matcher)?);
            Ok::<_, crate::error::Error>(groups)
        })?;

    Ok(ScanResult {
        files_scanned: files.len(),
        groups,
    })
}

/// @ai:intent Scan the configured directory without writing anything
/// @ai:effects fs:read
pub fn plan(config: &GeneratorConfig) -> Result<ScanResult> {
    let matcher = Matcher::new(config.default_group.clone());
    scan_directory(&config.path, &matcher)
}

/// @ai:intent Run the whole pipeline and write the generated file exactly once
/// @ai:post on Err the destination has not been written
/// @ai:effects fs:read, fs:write
pub fn generate(config: &GeneratorConfig) -> Result<GenerationSummary> {
    let scan = plan(config)?;
    let rendered = render(&scan.groups, &EmitOptions::from_config(config));

    write_output(&rendered, config.output.as_deref())?;

    let summary = GenerationSummary {
        files_scanned: scan.files_scanned,
        groups: scan.groups.group_count(),
        records: scan.groups.record_count(),
        output: config.output.clone(),
    };

    tracing::info!(
        "Generated {} converters with {} fields from {} files",
        summary.groups,
        summary.records,
        summary.files_scanned
    );

    Ok(summary)
}
