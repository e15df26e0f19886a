//! Append-only line writer with size-based rotation.
//!
//! When the active file grows past [`RotationPolicy::max_bytes`] it is renamed
//! to `<name>.<timestamp>` and a fresh file is started. Only the newest
//! [`RotationPolicy::max_backups`] rotated files are kept.

use chrono::Utc;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Size and retention limits for a [`FileWriter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationPolicy {
    pub max_bytes: u64,
    pub max_backups: usize,
}

impl Default for RotationPolicy {
    fn default() -> Self {
        Self { max_bytes: 10 * 1024 * 1024, max_backups: 3 }
    }
}

pub struct FileWriter {
    file_path: PathBuf,
    policy: RotationPolicy,
    writer: Mutex<Option<File>>,
}

impl FileWriter {
    pub const fn new(file_path: PathBuf, policy: RotationPolicy) -> Self {
        Self { file_path, policy, writer: Mutex::new(None) }
    }

    /// Appends `line` and a newline, rotating first if the file is too large.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("writer lock poisoned: {e}")))?;

        if self.needs_rotation() {
            *writer = None;
            self.rotate()?;
        }

        let file = match writer.as_mut() {
            Some(file) => file,
            None => writer.insert(OpenOptions::new().create(true).append(true).open(&self.file_path)?),
        };

        writeln!(file, "{line}")?;
        file.flush()
    }

    fn needs_rotation(&self) -> bool {
        fs::metadata(&self.file_path).is_ok_and(|m| m.len() > self.policy.max_bytes)
    }

    fn rotate(&self) -> io::Result<()> {
        let stamp = Utc::now().format("%Y%m%dT%H%M%S%.9f");
        let backup_path = PathBuf::from(format!("{}.{stamp}", self.file_path.display()));
        fs::rename(&self.file_path, backup_path)?;
        self.prune_backups()
    }

    /// Rotated files for this writer, newest first.
    fn backups(&self) -> io::Result<Vec<PathBuf>> {
        let parent = self.file_path.parent().unwrap_or_else(|| Path::new("."));
        let Some(file_name) = self.file_path.file_name().and_then(|n| n.to_str()) else {
            return Err(io::Error::new(io::ErrorKind::InvalidInput, "trace file name is not UTF-8"));
        };
        let prefix = format!("{file_name}.");

        let mut backups: Vec<PathBuf> = fs::read_dir(parent)?
            .filter_map(std::result::Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.starts_with(&prefix))
            })
            .collect();

        // Timestamps sort lexicographically.
        backups.sort_unstable_by(|a, b| b.cmp(a));
        Ok(backups)
    }

    fn prune_backups(&self) -> io::Result<()> {
        for old in self.backups()?.iter().skip(self.policy.max_backups) {
            if let Err(e) = fs::remove_file(old) {
                tracing::debug!(path = %old.display(), error = %e, "failed to remove old trace file");
            }
        }
        Ok(())
    }
}

impl std::fmt::Debug for FileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWriter")
            .field("file_path", &self.file_path)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_lines() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("trace.json");
        let writer = FileWriter::new(path.clone(), RotationPolicy::default());

        writer.write_line("{\"a\":1}").expect("write");
        writer.write_line("{\"b\":2}").expect("write");

        let contents = fs::read_to_string(&path).expect("read");
        assert_eq!(contents, "{\"a\":1}\n{\"b\":2}\n");
    }

    #[test]
    fn rotates_and_keeps_newest_backups() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("trace.json");
        let writer = FileWriter::new(path.clone(), RotationPolicy { max_bytes: 8, max_backups: 2 });

        for i in 0..6 {
            writer.write_line(&format!("line-number-{i}")).expect("write");
        }

        assert_eq!(fs::read_to_string(&path).expect("read"), "line-number-5\n");
        let backups = writer.backups().expect("backups");
        assert_eq!(backups.len(), 2);
        assert_eq!(fs::read_to_string(&backups[0]).expect("read"), "line-number-4\n");
        assert_eq!(fs::read_to_string(&backups[1]).expect("read"), "line-number-3\n");
    }
}
