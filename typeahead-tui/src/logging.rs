//! File logging.
//!
//! stdout belongs to the terminal UI, so the log goes to `typeahead.log` in
//! the platform cache directory (or `--log-dir`). The previous run's log is
//! archived under a timestamped name at startup and old archives are pruned.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use directories::ProjectDirs;
use log::info;
use simplelog::{Config, LevelFilter, WriteLogger};

use crate::error::AppError;

const LATEST: &str = "typeahead.log";
const ARCHIVE_PREFIX: &str = "typeahead-";

/// Archived logs kept besides the current one.
const KEEP_ARCHIVES: usize = 10;

/// The directory holding the current log and its archives.
#[derive(Debug, Clone)]
pub struct LogFiles {
    dir: PathBuf,
}

impl LogFiles {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// `$XDG_CACHE_HOME/typeahead` on Linux, the platform cache dir elsewhere.
    pub fn platform() -> Option<Self> {
        ProjectDirs::from("dev", "typeahead", "typeahead").map(|dirs| Self::new(dirs.cache_dir()))
    }

    pub fn latest(&self) -> PathBuf {
        self.dir.join(LATEST)
    }

    /// Archive names embed the timestamp, so they sort oldest first.
    fn archive_path(&self, at: DateTime<Local>) -> PathBuf {
        self.dir
            .join(format!("{ARCHIVE_PREFIX}{}.log", at.format("%Y%m%d_%H%M%S")))
    }

    /// Move the previous log aside and prune archives beyond the limit.
    pub fn rotate(&self, now: DateTime<Local>) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;

        let latest = self.latest();
        if latest.exists() {
            fs::rename(&latest, self.archive_path(now))?;
        }

        let archives = self.archives()?;
        let excess = archives.len().saturating_sub(KEEP_ARCHIVES);
        for old in &archives[..excess] {
            fs::remove_file(old)?;
        }
        Ok(())
    }

    fn archives(&self) -> io::Result<Vec<PathBuf>> {
        let mut archives: Vec<PathBuf> = fs::read_dir(&self.dir)?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| is_archive(path))
            .collect();
        archives.sort();
        Ok(archives)
    }
}

fn is_archive(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with(ARCHIVE_PREFIX) && name.ends_with(".log"))
}

/// Rotate and install the file logger. Returns the log path.
pub fn init(level: LevelFilter, dir: Option<PathBuf>) -> Result<PathBuf, AppError> {
    let files = dir
        .map(LogFiles::new)
        .or_else(LogFiles::platform)
        .unwrap_or_else(|| LogFiles::new("."));

    files.rotate(Local::now())?;

    let path = files.latest();
    WriteLogger::init(level, Config::default(), File::create(&path)?)?;
    info!("Logging to {}", path.display());
    Ok(path)
}
