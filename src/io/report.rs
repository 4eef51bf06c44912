//! JSON run report read/write operations
//!
//! A report is the [`WalkSummary`] of one successful walk, written as pretty
//! JSON so it can be diffed or fed to other tools.

use crate::WalkSummary;
use std::fs::File;
use std::io::{BufReader, BufWriter, Error, ErrorKind, Result, Write};
use std::path::Path;

/// Write a report, creating parent directories as needed.
pub fn write_report<P: AsRef<Path>>(path: P, summary: &WalkSummary) -> Result<()> {
    let file_path = path.as_ref();

    if let Some(parent) = file_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let mut writer = BufWriter::new(File::create(file_path)?);
    serde_json::to_writer_pretty(&mut writer, summary).map_err(Error::other)?;
    writer.write_all(b"\n")?;
    writer.flush()
}

/// Read a report previously produced by [`write_report`].
pub fn read_report<P: AsRef<Path>>(path: P) -> Result<WalkSummary> {
    let reader = BufReader::new(File::open(path)?);
    serde_json::from_reader(reader).map_err(|e| Error::new(ErrorKind::InvalidData, e))
}
