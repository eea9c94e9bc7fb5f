//! # File Sink Capability
//!
//! Filesystem half of the dispatch path: resolving the log file location at
//! construction time and appending finished lines to it. The file handle is
//! opened and closed around every append rather than held across calls:
//! one logger writes a handful of lines, and scoped acquisition means there
//! is never a handle to leak, even when a write fails mid-call.

use chrono::Local;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::LogError;

/// Resolve the log file path for a new logger, creating the directory on
/// demand.
///
/// `dir` is made absolute by joining it onto the current working directory
/// when relative. The file name is `template` formatted with the local time
/// (strftime tokens) plus `ext`, computed once here; the path is fixed for
/// the logger's lifetime.
///
/// ## Errors
///
/// [`LogError::Io`] when the working directory cannot be read or the
/// directory cannot be created. Construction must fail in that case; there
/// is no silent fallback to console-only logging.
pub fn prepare_log_path(dir: &Path, template: &str, ext: &str) -> Result<PathBuf, LogError> {
    // Path::join discards its base when the argument is already absolute,
    // so this handles both relative and absolute dirs.
    let abs_dir = std::env::current_dir()?.join(dir);
    if !abs_dir.is_dir() {
        std::fs::create_dir_all(&abs_dir)?;
    }
    let file_name = format!("{}{}", Local::now().format(template), ext);
    Ok(abs_dir.join(file_name))
}

/// Append one line plus a terminator to the log file.
///
/// Opens for append (creating the file on first use), writes, and releases
/// the handle on scope exit whether or not the write succeeded. Failures
/// surface as [`LogError::Io`].
pub fn append_line(path: &Path, line: &str) -> Result<(), LogError> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{}", line)?;
    Ok(())
}
