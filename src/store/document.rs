//! Whole-document collection I/O
//!
//! Each collection is one pretty-printed JSON array on disk, read and
//! rewritten wholesale. Saves go through a temp-file rename so a
//! successful save never leaves a partial document behind: a concurrent
//! lock-free read sees either the old or the new complete document.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{Result, ShelfError};

/// Load a full collection into an ordered sequence of records.
///
/// Record fields are lenient (see [`crate::model::de`]); only an
/// unparseable root document fails, with `MalformedStore`.
pub(crate) fn load<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let bytes = fs::read(path)?;
    serde_json::from_slice(&bytes).map_err(|e| ShelfError::MalformedStore {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// Persist a full collection, replacing the prior file contents.
///
/// Writes a `.tmp` sibling, syncs it, then renames over the target.
pub(crate) fn save<T: Serialize>(path: &Path, records: &[T]) -> Result<()> {
    let json = serde_json::to_vec_pretty(records)?;

    let tmp_path = path.with_extension("json.tmp");
    {
        let mut file = open_truncated(&tmp_path)?;
        file.write_all(&json)?;
        file.sync_all()?;
    }
    fs::rename(&tmp_path, path)?;

    Ok(())
}

fn open_truncated(path: &Path) -> Result<File> {
    Ok(OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)?)
}
