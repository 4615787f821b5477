//! Files and directories: read, traverse, scan.

use crate::error::{Result, ScanError};
use crate::model::Intel;
use crate::options::{ScanOptions, WalkOptions};
use crate::scanner::scan_accumulate;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};
use walkdir::WalkDir;

/// Read a file as text, replacing invalid UTF-8.
pub fn read_source(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| ScanError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

pub fn scan_file(path: &Path, options: &ScanOptions) -> Result<Intel> {
    scan_file_into(path, options, Intel::default())
}

/// Scan one file, appending to `intel`.
pub fn scan_file_into(path: &Path, options: &ScanOptions, intel: Intel) -> Result<Intel> {
    let text = read_source(path)?;
    let before = (intel.functions.len(), intel.macros.len(), intel.enums.len());
    let intel = scan_accumulate(&text, options, intel);
    debug!(
        path = %path.display(),
        functions = intel.functions.len() - before.0,
        macros = intel.macros.len() - before.1,
        enums = intel.enums.len() - before.2,
        "scanned file"
    );
    Ok(intel)
}

/// Every regular file under `root` whose extension is allowed, depth-first,
/// siblings sorted by file name.
pub fn source_files(root: &Path, walk: &WalkOptions) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(ScanError::NotADirectory {
            path: root.to_path_buf(),
        });
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|source| ScanError::Walk {
            path: source
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| root.to_path_buf()),
            source,
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let accepted = entry
            .path()
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| walk.accepts(ext));
        if accepted {
            files.push(entry.into_path());
        } else {
            trace!(path = %entry.path().display(), "skipping file");
        }
    }
    Ok(files)
}

/// Scan every source file under `root` into one [`Intel`].
pub fn scan_dir(root: &Path, options: &ScanOptions, walk: &WalkOptions) -> Result<Intel> {
    scan_dir_into(root, options, walk, Intel::default())
}

pub fn scan_dir_into(
    root: &Path,
    options: &ScanOptions,
    walk: &WalkOptions,
    intel: Intel,
) -> Result<Intel> {
    source_files(root, walk)?
        .iter()
        .try_fold(intel, |intel, path| scan_file_into(path, options, intel))
}
