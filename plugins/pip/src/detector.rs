use granska_core::Result;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const SKIP_DIRS: &[&str] = &[".venv", "venv", "site-packages", "node_modules", ".git"];

pub struct PipDetector;

impl PipDetector {
    pub fn new() -> Self {
        Self
    }

    /// Finds every `requirements.txt` under `path`, skipping virtualenv
    /// and vendored directories. Results are sorted for stable output.
    pub fn detect(&self, path: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        let walker = WalkDir::new(path)
            .follow_links(true)
            .into_iter()
            .filter_entry(|entry| !is_skipped(entry));

        for entry in walker {
            let entry = match entry {
                Ok(e) => e,
                Err(_) => continue,
            };

            if entry.file_type().is_file() && entry.file_name() == "requirements.txt" {
                files.push(entry.path().to_path_buf());
            }
        }

        files.sort();
        Ok(files)
    }
}

fn is_skipped(entry: &walkdir::DirEntry) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .map(|name| SKIP_DIRS.contains(&name))
            .unwrap_or(false)
}
