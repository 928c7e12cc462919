use anyhow::Result;
use std::{fs, path::PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The URL was downloaded to the path, which now holds this many bytes.
    Written(u64),

    /// A file was already present at the path; no request was made.
    Exists(u64),
}

pub async fn fetch_if_needed(url: impl AsRef<str>, path: impl Into<PathBuf>) -> Result<FetchOutcome> {
    let path = path.into();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    if fs::exists(&path)? {
        return Ok(FetchOutcome::Exists(fs::metadata(&path)?.len()));
    }

    println!("fetching {}", url.as_ref());

    let body = reqwest::get(url.as_ref())
        .await?
        .error_for_status()?
        .bytes()
        .await?;

    fs::write(&path, body)?;

    Ok(FetchOutcome::Written(fs::metadata(&path)?.len()))
}
