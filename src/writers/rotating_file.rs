//! Rotating file writer with numbered backups
//!
//! The active file lives at the configured path. When it reaches the size
//! limit, every file is shifted one suffix up (`app.log` becomes
//! `app.log.1`, `app.log.1` becomes `app.log.2`, ...) and files that would
//! exceed the retention count are deleted before a fresh active file is
//! opened.

use crate::core::error::{LoggerError, Result};
use crate::core::record::Record;
use crate::core::writer::Writer;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Bytes per configured megabyte
pub const BYTES_PER_MB: u64 = 1_048_576;

/// Size and count limits for a [`RotatingFileWriter`]
///
/// # Examples
///
/// ```
/// use rotating_logger::RotationLimits;
///
/// // Rotate at 10 MB, keep the active file plus 2 backups
/// let limits = RotationLimits::new().with_max_size_mb(10).with_max_count(3);
/// assert_eq!(limits.max_size_bytes, 10 * 1_048_576);
///
/// // Never rotate
/// let unbounded = RotationLimits::new().with_max_size_bytes(0);
/// assert!(!unbounded.rotates());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotationLimits {
    /// Size at which the active file is rotated; 0 disables rotation
    pub max_size_bytes: u64,
    /// Files retained, the active file included
    pub max_count: usize,
}

impl Default for RotationLimits {
    fn default() -> Self {
        Self {
            max_size_bytes: BYTES_PER_MB,
            max_count: 5,
        }
    }
}

impl RotationLimits {
    /// Create limits with default settings (1 MB, 5 files)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the size limit in megabytes
    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_max_size_mb(mut self, megabytes: u64) -> Self {
        self.max_size_bytes = megabytes.saturating_mul(BYTES_PER_MB);
        self
    }

    /// Set the size limit in bytes
    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_max_size_bytes(mut self, bytes: u64) -> Self {
        self.max_size_bytes = bytes;
        self
    }

    /// Set how many files are retained, the active file included
    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_max_count(mut self, count: usize) -> Self {
        self.max_count = count;
        self
    }

    /// Whether size-based rotation is enabled
    #[must_use]
    pub fn rotates(&self) -> bool {
        self.max_size_bytes > 0
    }

    fn validate(&self) -> Result<()> {
        if self.max_count == 0 {
            return Err(LoggerError::config(
                "RotationLimits",
                "max_count must be at least 1",
            ));
        }
        Ok(())
    }
}

/// Writer that persists records to a size- and count-bounded set of files.
///
/// Each instance owns its file handle. Two writers on the same path, or one
/// writer used from several threads without external locking, can race on
/// the size check and the rotation.
///
/// # Examples
///
/// ```no_run
/// use rotating_logger::{Logger, RotatingFileWriter, RotationLimits};
///
/// let writer = RotatingFileWriter::with_limits(
///     "/var/log/app.log",
///     RotationLimits::new().with_max_size_mb(5).with_max_count(10),
///     true,
/// )
/// .unwrap();
///
/// let logger = Logger::builder().level("info").writer(writer).build().unwrap();
/// logger.info("service started", None).unwrap();
/// ```
#[derive(Debug)]
pub struct RotatingFileWriter {
    path: PathBuf,
    limits: RotationLimits,
    append: bool,
    file: Option<File>,
}

impl RotatingFileWriter {
    /// Create a writer with default limits in append mode
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be created or opened
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::with_limits(path, RotationLimits::default(), true)
    }

    /// Create a writer with explicit limits; `append == false` truncates
    /// the active file when it is opened.
    ///
    /// # Errors
    ///
    /// Returns error if the limits are invalid or the file cannot be opened
    pub fn with_limits<P: AsRef<Path>>(
        path: P,
        limits: RotationLimits,
        append: bool,
    ) -> Result<Self> {
        limits.validate()?;
        let path = path.as_ref().to_path_buf();
        if path.file_name().is_none() {
            return Err(LoggerError::config(
                "RotatingFileWriter",
                format!("'{}' does not name a file", path.display()),
            ));
        }

        let file = Self::open(&path, append)?;
        Ok(Self {
            path,
            limits,
            append,
            file: Some(file),
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn limits(&self) -> &RotationLimits {
        &self.limits
    }

    #[must_use]
    pub fn append_mode(&self) -> bool {
        self.append
    }

    fn open(path: &Path, append: bool) -> Result<File> {
        let mut options = OpenOptions::new();
        options.create(true);
        if append {
            options.append(true);
        } else {
            options.write(true).truncate(true);
        }
        options.open(path).map_err(|e| {
            LoggerError::io_operation(
                "opening log file",
                format!("cannot open '{}'", path.display()),
                e,
            )
        })
    }

    /// Size of the active file on disk, `None` if it does not exist
    fn size_on_disk(&self) -> Option<u64> {
        fs::metadata(&self.path).ok().map(|m| m.len())
    }

    fn should_rotate(&self) -> bool {
        self.limits.rotates()
            && self
                .size_on_disk()
                .is_some_and(|size| size >= self.limits.max_size_bytes)
    }

    fn directory(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    fn file_name(&self) -> &OsStr {
        self.path.file_name().unwrap_or_default()
    }

    /// Get backup file path for given suffix
    fn backup_path(&self, suffix: usize) -> PathBuf {
        let mut name = self.file_name().to_os_string();
        name.push(format!(".{}", suffix));
        self.path.with_file_name(name)
    }

    fn suffix_path(&self, suffix: usize) -> PathBuf {
        if suffix == 0 {
            self.path.clone()
        } else {
            self.backup_path(suffix)
        }
    }

    /// Suffixes present on disk, highest first. The active file is suffix 0;
    /// only names of the form `<name>.<N>` with `N >= 1` count as backups.
    fn existing_suffixes(&self) -> Result<Vec<usize>> {
        let base = self.file_name().to_string_lossy().into_owned();
        let entries = fs::read_dir(self.directory()).map_err(|e| {
            LoggerError::file_rotation(
                self.path.display().to_string(),
                "cannot list log directory",
                e,
            )
        })?;

        let mut suffixes = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| {
                LoggerError::file_rotation(
                    self.path.display().to_string(),
                    "cannot read log directory entry",
                    e,
                )
            })?;
            let name = entry.file_name();
            let Some(name) = name.to_str() else {
                continue;
            };
            if let Some(suffix) = parse_suffix(&base, name) {
                suffixes.push(suffix);
            }
        }

        suffixes.sort_unstable_by(|a, b| b.cmp(a));
        Ok(suffixes)
    }

    /// Shift every retained file one suffix up and delete the ones that age
    /// out of `max_count`. Not crash-atomic.
    fn rotate(&mut self) -> Result<()> {
        // Close the handle before renaming the file it points at
        self.file.take();

        for suffix in self.existing_suffixes()? {
            let from = self.suffix_path(suffix);
            let next = suffix + 1;

            if next >= self.limits.max_count {
                fs::remove_file(&from).map_err(|e| {
                    LoggerError::file_rotation(
                        from.display().to_string(),
                        "cannot delete expired log file",
                        e,
                    )
                })?;
                log::debug!("rotation removed {}", from.display());
            } else {
                let to = self.backup_path(next);
                fs::rename(&from, &to).map_err(|e| {
                    LoggerError::file_rotation(
                        from.display().to_string(),
                        format!("cannot rename to '{}'", to.display()),
                        e,
                    )
                })?;
            }
        }

        Ok(())
    }

    fn active_file(&mut self) -> Result<&mut File> {
        let file = match self.file.take() {
            Some(file) => file,
            None => Self::open(&self.path, self.append)?,
        };
        Ok(self.file.insert(file))
    }
}

/// `0` for the active file name, `N` for `<base>.<N>` with `N >= 1`
fn parse_suffix(base: &str, name: &str) -> Option<usize> {
    let rest = name.strip_prefix(base)?;
    if rest.is_empty() {
        return Some(0);
    }
    let digits = rest.strip_prefix('.')?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok().filter(|n| *n > 0)
}

impl Writer for RotatingFileWriter {
    fn write<'r>(&mut self, record: &'r Record) -> Result<&'r Record> {
        if self.should_rotate() {
            self.rotate()?;
            log::debug!("rotated {}", self.path.display());
            self.file = Some(Self::open(&self.path, self.append)?);
        }

        let mut line = record.format_line();
        line.push('\n');

        let path = self.path.display().to_string();
        let file = self.active_file()?;
        file.write_all(line.as_bytes())
            .and_then(|()| file.flush())
            .map_err(|e| {
                LoggerError::io_operation(
                    "writing log record",
                    format!("cannot write to '{}'", path),
                    e,
                )
            })?;

        Ok(record)
    }

    fn name(&self) -> &str {
        "rotating_file"
    }
}
