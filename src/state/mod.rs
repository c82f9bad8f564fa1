//! State persistence module
//!
//! Loads and saves the single tracker record as pretty-printed JSON.
//! A missing data file means no tracker has been started yet.
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Result, StreakError};
use crate::models::{TrackerRecord, TrackerState};

/// Load the tracker from `path`, or `None` if the file does not exist
pub fn load(path: &Path) -> Result<Option<TrackerState>> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no tracker record found");
        return Ok(None);
    }

    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::InvalidData => StreakError::MalformedRecord {
            path: path.to_path_buf(),
            reason: e.to_string(),
        },
        _ => StreakError::Io(e),
    })?;
    let record: TrackerRecord =
        serde_json::from_str(&content).map_err(|e| StreakError::MalformedRecord {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
    let state = TrackerState::from_record(&record)?;

    tracing::debug!(
        path = %path.display(),
        start_date = %state.start_date,
        relapses = state.relapses.len(),
        "loaded tracker record"
    );
    Ok(Some(state))
}

/// Write the tracker to `path`, replacing any previous record
pub fn save(state: &TrackerState, path: &Path) -> Result<()> {
    let mut json = serde_json::to_string_pretty(&state.to_record())?;
    json.push('\n');

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    // Write to a sibling then rename so readers never see a partial record
    let temp_path = temp_path_for(path);
    fs::write(&temp_path, json)?;
    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(e.into());
    }

    tracing::debug!(path = %path.display(), "saved tracker record");
    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
