use super::{ErrorRecord, ErrorSearcher};
use crate::error::{CoreError, Result};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// 默认扫描的源码扩展名
pub const DEFAULT_EXTENSIONS: &[&str] = &["go"];

/// Where the list of files to scan comes from.
#[derive(Debug, Clone)]
pub enum FileSource {
    /// A text file with one path per line.
    List(PathBuf),
    /// Every supported source file under a directory.
    Walk(PathBuf),
}

#[derive(Debug, Clone)]
pub struct FileScan {
    pub file_path: String,
    pub records: Vec<ErrorRecord>,
}

#[derive(Debug, Clone)]
pub struct SkippedFile {
    pub file_path: String,
    pub reason: String,
}

/// Per-file results, in the order the files were listed.
#[derive(Debug, Clone, Default)]
pub struct ScanOutcome {
    pub scanned: Vec<FileScan>,
    pub skipped: Vec<SkippedFile>,
}

impl ScanOutcome {
    pub fn files_scanned(&self) -> usize {
        self.scanned.len()
    }

    pub fn record_count(&self) -> usize {
        self.scanned.iter().map(|f| f.records.len()).sum()
    }

    pub fn records(&self) -> impl Iterator<Item = &ErrorRecord> {
        self.scanned.iter().flat_map(|f| f.records.iter())
    }
}

#[derive(Clone)]
pub struct FileProcessor {
    base_dir: PathBuf,
    searcher: Arc<ErrorSearcher>,
}

impl FileProcessor {
    pub fn new(base_dir: impl Into<PathBuf>, searcher: Arc<ErrorSearcher>) -> Self {
        Self {
            base_dir: base_dir.into(),
            searcher,
        }
    }

    /// Entries of a file list: trimmed, without blank lines or `#` comments.
    pub fn read_file_list(path: &Path) -> Result<Vec<String>> {
        let content = fs::read_to_string(path).map_err(|source| CoreError::FileList {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
            .collect())
    }

    /// Supported source files under `root`, sorted, relative to the base dir
    /// when `root` lives inside it.
    pub fn walk_sources(&self, root: &Path) -> Result<Vec<String>> {
        if !root.is_dir() {
            return Err(CoreError::Scanner(format!(
                "directory not found: {}",
                root.display()
            )));
        }

        let mut entries = Vec::new();
        // 使用 ignore 库遍历目录，遵循 .gitignore
        for result in ignore::WalkBuilder::new(root).build() {
            let entry = match result {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("Skipping unreadable entry under {}: {}", root.display(), e);
                    continue;
                }
            };
            if !entry.file_type().map_or(false, |ft| ft.is_file()) {
                continue;
            }
            let path = entry.path();
            if !is_supported_file(path) {
                continue;
            }
            let shown = path.strip_prefix(&self.base_dir).unwrap_or(path);
            entries.push(shown.to_string_lossy().to_string());
        }

        entries.sort();
        Ok(entries)
    }

    pub fn collect_entries(&self, source: &FileSource) -> Result<Vec<String>> {
        match source {
            FileSource::List(path) => Self::read_file_list(path),
            FileSource::Walk(root) => self.walk_sources(root),
        }
    }

    pub fn resolve(&self, entry: &str) -> PathBuf {
        let path = Path::new(entry);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }

    /// Read and scan one listed file. Records carry `entry` as written.
    pub fn scan_file(&self, entry: &str) -> Result<Vec<ErrorRecord>> {
        let path = self.resolve(entry);
        let bytes = fs::read(&path).map_err(|source| CoreError::Io {
            path: path.clone(),
            source,
        })?;
        let content = String::from_utf8_lossy(&bytes);

        let records = self.searcher.search(&content, entry);
        tracing::debug!("{}: {} messages", entry, records.len());
        Ok(records)
    }

    /// Scan every entry in parallel; results keep the order of `entries`.
    pub fn process(&self, entries: &[String]) -> ScanOutcome {
        let results: Vec<(String, Result<Vec<ErrorRecord>>)> = entries
            .par_iter()
            .map(|entry| (entry.clone(), self.scan_file(entry)))
            .collect();

        let mut outcome = ScanOutcome::default();
        for (file_path, result) in results {
            match result {
                Ok(records) => outcome.scanned.push(FileScan { file_path, records }),
                Err(e) => {
                    tracing::warn!("Skipping {}: {}", file_path, e);
                    outcome.skipped.push(SkippedFile {
                        file_path,
                        reason: e.to_string(),
                    });
                }
            }
        }

        outcome
    }

    pub fn process_source(&self, source: &FileSource) -> Result<ScanOutcome> {
        let entries = self.collect_entries(source)?;
        tracing::info!("Scanning {} files", entries.len());
        Ok(self.process(&entries))
    }
}

fn is_supported_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map_or(false, |ext| {
            DEFAULT_EXTENSIONS.iter().any(|e| e.eq_ignore_ascii_case(ext))
        })
}
