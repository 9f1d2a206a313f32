use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

pub fn moodspend_home() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".moodspend"))
}

pub fn ensure_moodspend_home() -> Result<PathBuf> {
    let dir = moodspend_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}

pub fn default_ledger_path() -> Result<PathBuf> {
    Ok(ensure_moodspend_home()?.join("purchase_log.csv"))
}
