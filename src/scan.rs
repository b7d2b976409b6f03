use anyhow::{Context, Result};
use std::collections::{BTreeMap, BTreeSet};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const PDF_SUFFIX: &str = ".pdf";

#[derive(Debug, Default, Clone, Copy)]
pub struct ScanOptions {
    /// Do not skip directories that already contain digit-named files
    pub force: bool,
}

/// A PDF file eligible for splitting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub directory: PathBuf,
    pub base_name: String,
}

impl Candidate {
    pub fn new(directory: impl Into<PathBuf>, base_name: impl Into<String>) -> Self {
        Candidate {
            directory: directory.into(),
            base_name: base_name.into(),
        }
    }

    /// `<directory>/<base>.pdf`
    pub fn source_path(&self) -> PathBuf {
        self.directory.join(self.file_name())
    }

    /// `<directory>/<base>_<page>.pdf`, page is 1-based
    pub fn page_path(&self, page: u32) -> PathBuf {
        self.directory
            .join(format!("{}_{}{}", self.base_name, page, PDF_SUFFIX))
    }

    pub fn file_name(&self) -> String {
        format!("{}{}", self.base_name, PDF_SUFFIX)
    }
}

#[derive(Debug, Default)]
pub struct Scan {
    pub candidates: Vec<Candidate>,
    /// Directories left alone because they look already extracted
    pub skipped: BTreeSet<PathBuf>,
}

/// Whether `name` holds an ASCII decimal digit. Fractions, roman numerals
/// and other numeric symbols do not count.
pub fn contains_digit(name: &str) -> bool {
    name.chars().any(|c| c.is_ascii_digit())
}

/// Scan `root` recursively for PDF files to split.
///
/// The traversal is done once and the results grouped per directory, so the
/// skip decision for a directory always sees all of its files before any of
/// them is considered as a candidate. Directories and files are visited in
/// file-name order.
pub fn scan<P: AsRef<Path>>(root: P, options: &ScanOptions) -> Result<Scan> {
    let root = root.as_ref();
    let metadata = std::fs::metadata(root)
        .with_context(|| format!("Failed to read directory: {}", root.display()))?;
    if !metadata.is_dir() {
        anyhow::bail!("Not a directory: {}", root.display());
    }

    let listings = list_files(root);

    let skipped: BTreeSet<PathBuf> = if options.force {
        BTreeSet::new()
    } else {
        listings
            .iter()
            .filter(|(_, files)| {
                files
                    .iter()
                    .any(|name| contains_digit(&name.to_string_lossy()))
            })
            .map(|(dir, _)| dir.clone())
            .collect()
    };

    for dir in &skipped {
        log::debug!("skipping already extracted directory {}", dir.display());
    }

    let mut candidates = Vec::new();
    for (dir, files) in &listings {
        if skipped.contains(dir) {
            continue;
        }
        for name in files {
            let Some(name) = name.to_str() else {
                log::debug!("ignoring non UTF-8 file name in {}", dir.display());
                continue;
            };
            if let Some(base_name) = candidate_base_name(name) {
                candidates.push(Candidate::new(dir, base_name));
            }
        }
    }

    Ok(Scan {
        candidates,
        skipped,
    })
}

fn candidate_base_name(file_name: &str) -> Option<&str> {
    if contains_digit(file_name) {
        return None;
    }
    file_name
        .strip_suffix(PDF_SUFFIX)
        .filter(|base| !base.is_empty())
}

/// Every directory under `root` (including `root`) mapped to the names of the
/// files it directly contains.
fn list_files(root: &Path) -> BTreeMap<PathBuf, Vec<OsString>> {
    let mut listings: BTreeMap<PathBuf, Vec<OsString>> = BTreeMap::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                log::warn!("skipping unreadable entry: {}", e);
                continue;
            }
        };

        if entry.file_type().is_dir() {
            listings.entry(entry.path().to_path_buf()).or_default();
            continue;
        }

        // Symlinked directories are never descended into
        if entry.path_is_symlink() && entry.path().is_dir() {
            continue;
        }

        if let Some(parent) = entry.path().parent() {
            listings
                .entry(parent.to_path_buf())
                .or_default()
                .push(entry.file_name().to_os_string());
        }
    }

    listings
}
