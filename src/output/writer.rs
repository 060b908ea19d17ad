//! Report file writer

use super::CollisionPolicy;
use crate::error::{ReportError, Result};
use crate::models::{Report, Timestamp};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const FILE_PREFIX: &str = "spec-vs-sim-";
const FILE_EXTENSION: &str = "md";

/// Upper bound on `-N` suffixes tried before giving up
const MAX_SUFFIX: u32 = 9_999;

/// Create the dist directory and any missing parents.
/// A directory that already exists (or appears concurrently) is fine.
pub fn ensure_dist_dir(dist_dir: &Path) -> Result<()> {
    fs::create_dir_all(dist_dir).map_err(|source| ReportError::CreateDir {
        path: dist_dir.to_path_buf(),
        source,
    })
}

/// `dist/spec-vs-sim-<stamp>.md`
pub fn report_path(dist_dir: &Path, timestamp: &Timestamp) -> PathBuf {
    dist_dir.join(format!(
        "{FILE_PREFIX}{}.{FILE_EXTENSION}",
        timestamp.file_stamp()
    ))
}

fn suffixed_path(dist_dir: &Path, timestamp: &Timestamp, n: u32) -> PathBuf {
    dist_dir.join(format!(
        "{FILE_PREFIX}{}-{n}.{FILE_EXTENSION}",
        timestamp.file_stamp()
    ))
}

/// Write the report into `dist_dir`, creating the directory first.
/// Returns the path actually written.
pub fn write_report(
    dist_dir: &Path,
    timestamp: &Timestamp,
    report: &Report,
    policy: CollisionPolicy,
) -> Result<PathBuf> {
    ensure_dist_dir(dist_dir)?;

    let path = report_path(dist_dir, timestamp);
    debug!(path = %path.display(), %policy, "writing report");

    match policy {
        CollisionPolicy::Overwrite => {
            fs::write(&path, report.content()).map_err(|source| ReportError::Write {
                path: path.clone(),
                source,
            })?;
            Ok(path)
        }
        CollisionPolicy::Error => match write_new(&path, report.content()) {
            Ok(()) => Ok(path),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                Err(ReportError::Collision { path })
            }
            Err(source) => Err(ReportError::Write { path, source }),
        },
        CollisionPolicy::Suffix => write_with_suffix(dist_dir, timestamp, path, report),
    }
}

fn write_with_suffix(
    dist_dir: &Path,
    timestamp: &Timestamp,
    base: PathBuf,
    report: &Report,
) -> Result<PathBuf> {
    let mut candidate = base;
    let mut n = 0;

    loop {
        match write_new(&candidate, report.content()) {
            Ok(()) => return Ok(candidate),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                if n >= MAX_SUFFIX {
                    return Err(ReportError::Collision { path: candidate });
                }
                n += 1;
                let next = suffixed_path(dist_dir, timestamp, n);
                warn!(
                    taken = %candidate.display(),
                    next = %next.display(),
                    "report path already exists, adding suffix"
                );
                candidate = next;
            }
            Err(source) => {
                return Err(ReportError::Write {
                    path: candidate,
                    source,
                })
            }
        }
    }
}

/// Create-and-write in one step; fails with `AlreadyExists` instead of truncating
fn write_new(path: &Path, content: &str) -> io::Result<()> {
    let mut file = OpenOptions::new().write(true).create_new(true).open(path)?;
    file.write_all(content.as_bytes())?;
    file.flush()
}
