//! Catalog copy utility
//!
//! Straight-line recursive copy of the built catalog file tree into a
//! destination directory. Exists because shell-level copy tooling is not
//! portable across platforms when the catalog holds many files.

use std::fs;
use std::io;
use std::path::Path;

use walkdir::WalkDir;

use crate::error::{Result, TypegenError};

/// Copy the catalog tree at `src` into `dest`, creating directories as
/// needed. Returns the number of files copied.
pub fn copy_catalog(src: &Path, dest: &Path) -> Result<usize> {
    if !src.exists() {
        return Err(TypegenError::FileNotFound {
            path: src.to_path_buf(),
        });
    }
    fs::create_dir_all(dest)?;

    let mut copied = 0;
    for entry in WalkDir::new(src) {
        let entry = entry.map_err(io::Error::from)?;
        let Ok(relative) = entry.path().strip_prefix(src) else {
            continue;
        };
        let target = dest.join(relative);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &target)?;
            copied += 1;
        }
    }
    tracing::debug!(
        src = %src.display(),
        dest = %dest.display(),
        copied,
        "copied catalog files"
    );
    Ok(copied)
}
