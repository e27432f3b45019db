//! Atomic JSON document output.
//!
//! Each table document is staged in a hidden file next to `<table>.json`
//! and renamed into place, so readers never observe a partial document.

use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use camino::{Utf8Component, Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs::{Dir, OpenOptions};

use crate::error::OutputError;
use crate::schema::TableBatch;

/// Output directory used when none is configured.
pub const DEFAULT_OUTPUT_DIR: &str = "data";

static STAGING_SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Open (creating if needed) the output directory.
///
/// # Errors
///
/// Returns [`OutputError::Directory`] when the directory cannot be created or
/// opened.
pub fn open_output_dir(path: &Utf8Path) -> Result<Dir, OutputError> {
    let directory_error = |err: io::Error| OutputError::Directory {
        path: path.to_path_buf(),
        message: err.to_string(),
    };
    Dir::create_ambient_dir_all(path, ambient_authority()).map_err(directory_error)?;
    Dir::open_ambient_dir(path, ambient_authority()).map_err(directory_error)
}

/// Write a table's JSON document to `<output_dir>/<table>.json`.
///
/// Returns the path that was written.
///
/// # Errors
///
/// Returns [`OutputError`] when the directory cannot be opened or the
/// document cannot be written.
///
/// # Example
///
/// ```no_run
/// use camino::Utf8Path;
/// use campus_data::{GenerationConfig, generate_dataset, write_table_document};
/// use chrono::Utc;
///
/// let dataset = generate_dataset(&GenerationConfig::new(1, Utc::now())).expect("generated");
/// for batch in dataset.batches().expect("serialisable") {
///     write_table_document(Utf8Path::new("data"), &batch).expect("written");
/// }
/// ```
pub fn write_table_document(
    output_dir: &Utf8Path,
    batch: &TableBatch,
) -> Result<Utf8PathBuf, OutputError> {
    let dir = open_output_dir(output_dir)?;
    let file_name = batch.file_name();
    write_atomic(&dir, Utf8Path::new(&file_name), batch.document()).map_err(|err| match err {
        OutputError::Write { path, message } => OutputError::Write {
            path: output_dir.join(path),
            message,
        },
        other @ OutputError::Directory { .. } => other,
    })?;
    Ok(output_dir.join(file_name))
}

/// Write `contents` to `path` inside `dir` atomically.
///
/// The document is staged in a hidden sibling file, flushed, and renamed
/// over the target. A failed write leaves any previous document untouched.
///
/// # Errors
///
/// Returns [`OutputError::Write`] when `path` is not a bare file name or the
/// file cannot be written.
pub fn write_atomic(dir: &Dir, path: &Utf8Path, contents: &str) -> Result<(), OutputError> {
    let file_name = bare_file_name(path)?;
    let staging = staging_name(file_name);

    if let Err(err) = stage(dir, &staging, contents) {
        drop(dir.remove_file(&staging));
        return Err(write_error(&path.with_file_name(&staging), &err));
    }
    if let Err(err) = replace(dir, &staging, file_name) {
        drop(dir.remove_file(&staging));
        return Err(write_error(path, &err));
    }

    // Best effort: persist the rename itself.
    drop(dir.open(".").and_then(|handle| handle.sync_all()));
    Ok(())
}

fn bare_file_name(path: &Utf8Path) -> Result<&str, OutputError> {
    let mut components = path.components();
    match (components.next(), components.next()) {
        (Some(Utf8Component::Normal(name)), None) => Ok(name),
        _ => Err(OutputError::Write {
            path: path.to_path_buf(),
            message: "output path must be a file name".to_owned(),
        }),
    }
}

fn staging_name(file_name: &str) -> String {
    let sequence = STAGING_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_nanos());
    format!(
        ".{file_name}.{}-{nanos}-{sequence}.partial",
        std::process::id()
    )
}

fn write_error(path: &Utf8Path, err: &io::Error) -> OutputError {
    OutputError::Write {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}

fn stage(dir: &Dir, staging: &str, contents: &str) -> io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    let mut file = dir.open_with(staging, &options)?;
    file.write_all(contents.as_bytes())?;
    file.sync_all()
}

#[cfg(windows)]
fn replace(dir: &Dir, staging: &str, target: &str) -> io::Result<()> {
    // Rename does not overwrite on Windows.
    match dir.remove_file(target) {
        Err(err) if err.kind() != io::ErrorKind::NotFound => return Err(err),
        _ => {}
    }
    dir.rename(staging, dir, target)
}

#[cfg(not(windows))]
fn replace(dir: &Dir, staging: &str, target: &str) -> io::Result<()> {
    dir.rename(staging, dir, target)
}
