use camino::{Utf8Path, Utf8PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::types::InputSource;
use crate::utils::{MergeError, Result};

const CSV_EXTENSION: &str = "csv";

/// Turn an [`InputSource`] into the ordered list of CSV files to merge.
///
/// Nothing is read here, only checked: every listed file must exist, or the
/// directory must exist and contain at least one `*.csv` file.
pub fn resolve(source: &InputSource) -> Result<Vec<Utf8PathBuf>> {
    let files = match source {
        InputSource::Files(paths) => resolve_files(paths)?,
        InputSource::Directory(dir) => resolve_directory(dir)?,
    };

    if files.is_empty() {
        return Err(MergeError::NoInputFiles(source.describe()));
    }

    info!("Resolved {} input file(s) from {}", files.len(), source.describe());
    Ok(files)
}

fn resolve_files(paths: &[Utf8PathBuf]) -> Result<Vec<Utf8PathBuf>> {
    paths
        .iter()
        .map(|path| {
            if path.is_file() {
                Ok(path.clone())
            } else {
                Err(MergeError::MissingFile(path.clone()))
            }
        })
        .collect()
}

fn resolve_directory(dir: &Utf8Path) -> Result<Vec<Utf8PathBuf>> {
    if !dir.is_dir() {
        return Err(MergeError::MissingDirectory(dir.to_path_buf()));
    }

    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name();

    let mut files = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            // a broken entry inside the directory, e.g. a dangling symlink
            Err(err) if err.depth() > 0 => {
                warn!("Skipping unreadable entry in {}: {}", dir, err);
                continue;
            }
            Err(source) => {
                return Err(MergeError::Scan {
                    path: dir.to_path_buf(),
                    source,
                })
            }
        };

        if !entry.file_type().is_file() || !has_csv_extension(entry.path()) {
            debug!("Skipping {}", entry.path().display());
            continue;
        }

        let path = Utf8PathBuf::try_from(entry.into_path())
            .map_err(|e| MergeError::InvalidPath(e.into_path_buf().display().to_string()))?;
        files.push(path);
    }

    Ok(files)
}

fn has_csv_extension(path: &std::path::Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(CSV_EXTENSION))
}
