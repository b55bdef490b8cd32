//! ``src/fs/concat.rs``
//!
//! # Concatenation Writer
//!
//! Streams an ordered list of files into one artifact. Each member gets a
//! banner with its display name, then its contents, then a blank separator:
//!
//! ```text
//!
//! ================================================================================
//! FILE: main.rs
//! ================================================================================
//!
//! <contents>
//!
//! ```
//!
//! A member that cannot be read is skipped and reported; nothing of it reaches
//! the output, not even its banner. Destination failures abort the whole run.

use std::{
    fmt::Write as _,
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use bytesize::ByteSize;
use chrono::{DateTime, Local};
use tracing::{info, warn};

use crate::error::AppError;

pub const RULE_WIDTH: usize = 80;

const DEFAULT_TIMESTAMP: &str = "%Y%m%d_%H%M%S";

/// Banner written before each member.
#[must_use]
pub fn banner(name: &str) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    format!("\n{rule}\nFILE: {name}\n{rule}\n\n")
}

#[derive(Debug)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: io::Error,
}

/// What made it into the artifact and what did not.
#[derive(Debug, Default)]
pub struct ConcatReport {
    pub written: Vec<PathBuf>,
    pub skipped: Vec<SkippedFile>,
    pub bytes: u64,
}

impl ConcatReport {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }

    /// One-line summary for the status bar.
    #[must_use]
    pub fn summary(&self, target: &str) -> String {
        let mut line = format!(
            "Concatenated {} file{} into {target} ({})",
            self.written.len(),
            if self.written.len() == 1 { "" } else { "s" },
            ByteSize::b(self.bytes),
        );
        if !self.skipped.is_empty() {
            let _ = write!(line, ", skipped {} unreadable", self.skipped.len());
        }
        line
    }
}

/// Writes every readable member of `paths`, in order, to `out`.
///
/// The only errors returned are errors writing to `out`.
pub fn write_concatenated<W, F>(
    paths: &[PathBuf],
    name_for: F,
    out: &mut W,
) -> io::Result<ConcatReport>
where
    W: Write,
    F: Fn(&Path) -> String,
{
    let mut report = ConcatReport::default();

    for path in paths {
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(reason) => {
                warn!(
                    marker = "CONCAT_SKIP",
                    path = %path.display(),
                    error = %reason,
                    "Skipping unreadable file"
                );
                report.skipped.push(SkippedFile {
                    path: path.clone(),
                    reason,
                });
                continue;
            }
        };

        let head = banner(&name_for(path));
        let body = String::from_utf8_lossy(&bytes);

        out.write_all(head.as_bytes())?;
        out.write_all(body.as_bytes())?;
        out.write_all(b"\n\n")?;

        report.bytes += (head.len() + body.len() + 2) as u64;
        report.written.push(path.clone());
    }

    out.flush()?;
    Ok(report)
}

/// Creates (or truncates) `dest` and writes the artifact into it.
pub fn concatenate_to_file<F>(
    paths: &[PathBuf],
    name_for: F,
    dest: &Path,
) -> Result<ConcatReport, AppError>
where
    F: Fn(&Path) -> String,
{
    let file = File::create(dest).map_err(|e| AppError::output_write(dest, e))?;
    let mut writer = BufWriter::new(file);

    let report = write_concatenated(paths, name_for, &mut writer)
        .map_err(|e| AppError::output_write(dest, e))?;

    info!(
        marker = "CONCAT_DONE",
        dest = %dest.display(),
        written = report.written.len(),
        skipped = report.skipped.len(),
        bytes = report.bytes,
        "Concatenation written"
    );
    Ok(report)
}

/// The artifact as a string, for the clipboard.
#[must_use]
pub fn concatenate_to_string<F>(paths: &[PathBuf], name_for: F) -> (String, ConcatReport)
where
    F: Fn(&Path) -> String,
{
    let mut buf: Vec<u8> = Vec::new();
    // Writing into a Vec cannot fail.
    let report = write_concatenated(paths, name_for, &mut buf).unwrap_or_default();
    (String::from_utf8_lossy(&buf).into_owned(), report)
}

/// Where the artifact goes: the custom name if set, else
/// `<prefix>_<timestamp>.txt`. Relative names are joined to `dir`.
#[must_use]
pub fn output_path(
    dir: &Path,
    custom: Option<&str>,
    prefix: &str,
    timestamp_format: &str,
    now: DateTime<Local>,
) -> PathBuf {
    match custom.map(str::trim).filter(|name| !name.is_empty()) {
        Some(name) => dir.join(name),
        None => dir.join(format!("{prefix}_{}.txt", timestamp(now, timestamp_format))),
    }
}

fn timestamp(now: DateTime<Local>, format: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", now.format(format)).is_ok() {
        return out;
    }
    warn!(format, "Invalid timestamp format, using default");
    now.format(DEFAULT_TIMESTAMP).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn file_name(path: &Path) -> String {
        path.file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    #[test]
    fn banner_layout_is_exact() {
        let rule = "=".repeat(80);
        assert_eq!(banner("a.txt"), format!("\n{rule}\nFILE: a.txt\n{rule}\n\n"));
    }

    #[test]
    fn members_are_written_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.txt");
        let b = dir.path().join("b.txt");
        fs::write(&a, "alpha").unwrap();
        fs::write(&b, "beta").unwrap();

        let (text, report) = concatenate_to_string(&[b.clone(), a.clone()], file_name);

        let expected = format!("{}beta\n\n{}alpha\n\n", banner("b.txt"), banner("a.txt"));
        assert_eq!(text, expected);
        assert_eq!(report.written, vec![b, a]);
        assert_eq!(report.bytes, expected.len() as u64);
        assert!(report.is_complete());
    }

    #[test]
    fn unreadable_member_is_skipped_without_banner() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.txt");
        let gone = dir.path().join("gone.txt");
        fs::write(&a, "alpha").unwrap();

        let (text, report) = concatenate_to_string(&[gone.clone(), a], file_name);

        assert!(!text.contains("gone.txt"));
        assert!(text.contains("FILE: a.txt"));
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].path, gone);
        assert!(report.summary("out.txt").contains("skipped 1 unreadable"));
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let odd = dir.path().join("odd.txt");
        fs::write(&odd, [b'o', 0xff, b'k']).unwrap();

        let (text, _) = concatenate_to_string(&[odd], file_name);
        assert!(text.contains("o\u{fffd}k"));
    }

    #[test]
    fn file_destination_receives_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.txt");
        fs::write(&a, "alpha").unwrap();
        let dest = dir.path().join("out.txt");

        let report = concatenate_to_file(&[a], file_name, &dest).unwrap();

        assert_eq!(report.written.len(), 1);
        assert_eq!(
            fs::read_to_string(&dest).unwrap(),
            format!("{}alpha\n\n", banner("a.txt"))
        );
    }

    #[test]
    fn unwritable_destination_aborts() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("missing").join("out.txt");

        let err = concatenate_to_file(&[], file_name, &dest).unwrap_err();
        assert!(matches!(err, AppError::OutputWrite { .. }));
    }

    #[test]
    fn output_path_uses_custom_name_or_timestamp() {
        let now = Local.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap();
        let dir = Path::new("/work");

        assert_eq!(
            output_path(dir, None, "concatenated", "%Y%m%d_%H%M%S", now),
            PathBuf::from("/work/concatenated_20240309_140507.txt")
        );
        assert_eq!(
            output_path(dir, Some("bundle.md"), "concatenated", "%Y", now),
            PathBuf::from("/work/bundle.md")
        );
        assert_eq!(
            output_path(dir, Some("  "), "out", "%Y", now),
            PathBuf::from("/work/out_2024.txt")
        );
    }
}
