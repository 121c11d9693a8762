//! Handing text files to the user.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use leadform_types::{ExportError, ExportTarget, Lead};

use crate::serialize::{lead_file_name, to_plain_text};

/// Prefix of the inline fallback URI.
pub const TEXT_DATA_URI_PREFIX: &str = "data:text/plain;charset=utf-8,";

/// File the inline fallback of [`DirectoryTarget`] appends to.
pub const INLINE_SPOOL_FILE_NAME: &str = "leadform-inline.uri";

/// How an export ended up being delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportOutcome {
    /// Saved under its file name.
    Saved,
    /// Saving failed; the content was opened inline instead.
    OpenedInline,
    /// Both paths failed. Nothing was delivered.
    Failed,
}

impl ExportOutcome {
    pub fn is_delivered(self) -> bool {
        !matches!(self, Self::Failed)
    }
}

/// Percent-encode `text` into a `data:text/plain` URI.
pub fn text_data_uri(text: &str) -> String {
    format!("{TEXT_DATA_URI_PREFIX}{}", urlencoding::encode(text))
}

/// Save `text` as `file_name`, falling back to an inline open.
///
/// Never returns an error: a failure of the fallback is logged and reported
/// as [`ExportOutcome::Failed`].
pub fn download_text(target: &dyn ExportTarget, file_name: &str, text: &str) -> ExportOutcome {
    match target.save(file_name, text) {
        Ok(()) => {
            tracing::info!(file_name, bytes = text.len(), "export saved");
            ExportOutcome::Saved
        }
        Err(save_err) => {
            tracing::warn!(file_name, error = %save_err, "save failed, opening inline");
            match target.open_inline(&text_data_uri(text)) {
                Ok(()) => ExportOutcome::OpenedInline,
                Err(inline_err) => {
                    tracing::warn!(
                        file_name,
                        error = %inline_err,
                        "inline open failed, export dropped"
                    );
                    ExportOutcome::Failed
                }
            }
        }
    }
}

/// Export a single lead as `lead_YYYYMMDDHHMMSS.txt`.
pub fn export_lead(target: &dyn ExportTarget, lead: &Lead) -> ExportOutcome {
    download_text(target, &lead_file_name(lead), &to_plain_text(std::slice::from_ref(lead)))
}

/// Export target writing files into a directory.
///
/// The inline fallback appends each data URI as one line to
/// [`INLINE_SPOOL_FILE_NAME`] inside `fallback_dir`.
#[derive(Debug, Clone)]
pub struct DirectoryTarget {
    dir: PathBuf,
    fallback_dir: PathBuf,
}

impl DirectoryTarget {
    /// Create a target saving into `dir`, with the system temp dir as fallback.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            fallback_dir: std::env::temp_dir(),
        }
    }

    /// Set the directory used by the inline fallback.
    pub fn with_fallback_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.fallback_dir = dir.into();
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn fallback_dir(&self) -> &Path {
        &self.fallback_dir
    }

    /// Path of the inline spool file.
    pub fn spool_path(&self) -> PathBuf {
        self.fallback_dir.join(INLINE_SPOOL_FILE_NAME)
    }
}

impl ExportTarget for DirectoryTarget {
    fn save(&self, file_name: &str, contents: &str) -> Result<(), ExportError> {
        if file_name.is_empty() || file_name.contains(['/', '\\']) {
            return Err(ExportError::Unavailable(format!(
                "refusing file name {file_name:?}"
            )));
        }
        fs::create_dir_all(&self.dir)?;
        let (path, mut file) = create_unique(&self.dir, file_name)?;
        file.write_all(contents.as_bytes())?;
        tracing::debug!(path = %path.display(), "export written");
        Ok(())
    }

    fn open_inline(&self, data_uri: &str) -> Result<(), ExportError> {
        fs::create_dir_all(&self.fallback_dir)?;
        let mut spool = OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.spool_path())?;
        writeln!(spool, "{data_uri}")?;
        Ok(())
    }
}

/// `name (n).ext`, the name a second download of `name.ext` gets.
pub fn numbered_file_name(file_name: &str, n: u32) -> String {
    match file_name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => format!("{stem} ({n}).{ext}"),
        _ => format!("{file_name} ({n})"),
    }
}

/// Create `file_name` in `dir` without touching existing files. Taken names
/// are retried as `name (1).ext`, `name (2).ext` and so on.
fn create_unique(dir: &Path, file_name: &str) -> io::Result<(PathBuf, File)> {
    let mut candidate = file_name.to_string();
    for n in 1..=u32::MAX {
        let path = dir.join(&candidate);
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => return Ok((path, file)),
            Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
                candidate = numbered_file_name(file_name, n);
            }
            Err(err) => return Err(err),
        }
    }
    Err(io::Error::new(
        io::ErrorKind::AlreadyExists,
        format!("no free name for {file_name:?}"),
    ))
}
