use anyhow::{Result, anyhow};
use std::fs;
use std::path::PathBuf;

pub fn get_doc_tui_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| anyhow!("Could not find home directory"))?;
    Ok(home.join(".doc-tui"))
}

pub fn get_config_path() -> Result<PathBuf> {
    Ok(get_doc_tui_dir()?.join("config.toml"))
}

pub fn get_log_path() -> Result<PathBuf> {
    Ok(get_doc_tui_dir()?.join("doctui.log"))
}

pub fn ensure_directories_exist() -> Result<()> {
    let dir = get_doc_tui_dir()?;
    if !dir.exists() {
        fs::create_dir_all(&dir)?;
    }
    Ok(())
}
