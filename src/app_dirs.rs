//! Application directories anchored to a single `.dragdrop` folder.
//!
//! Config and log files live under the OS config directory unless
//! `DRAGDROP_CONFIG_HOME` points somewhere else (tests, portable setups).

use std::{
    path::PathBuf,
    sync::{LazyLock, Mutex},
};

use directories::BaseDirs;
use thiserror::Error;

/// Name of the application directory that lives under the config root.
pub const APP_DIR_NAME: &str = ".dragdrop";
/// Environment variable overriding the config root.
pub const CONFIG_HOME_ENV: &str = "DRAGDROP_CONFIG_HOME";

static CONFIG_BASE_OVERRIDE: LazyLock<Mutex<Option<PathBuf>>> = LazyLock::new(|| Mutex::new(None));

#[derive(Debug, Error)]
pub enum AppDirError {
    /// No config root could be resolved for this platform.
    #[error("No suitable base config directory available for application files")]
    NoBaseDir,
    #[error("Failed to create application directory at {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Return the `.dragdrop` directory, creating it if needed.
pub fn app_root_dir() -> Result<PathBuf, AppDirError> {
    let base = config_base_dir().ok_or(AppDirError::NoBaseDir)?;
    ensure_dir(base.join(APP_DIR_NAME))
}

/// Return the `logs` directory inside the app root, creating it if needed.
pub fn logs_dir() -> Result<PathBuf, AppDirError> {
    ensure_dir(app_root_dir()?.join("logs"))
}

fn ensure_dir(path: PathBuf) -> Result<PathBuf, AppDirError> {
    std::fs::create_dir_all(&path).map_err(|source| AppDirError::CreateDir {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

fn config_base_dir() -> Option<PathBuf> {
    if let Some(path) = CONFIG_BASE_OVERRIDE
        .lock()
        .ok()
        .and_then(|guard| guard.clone())
    {
        return Some(path);
    }
    if let Ok(path) = std::env::var(CONFIG_HOME_ENV) {
        return Some(PathBuf::from(path));
    }
    BaseDirs::new().map(|dirs| dirs.config_dir().to_path_buf())
}

/// Redirects the config root for the lifetime of the guard.
///
/// Guards are serialised so tests touching the override never interleave.
#[cfg(test)]
pub(crate) struct ConfigBaseOverride {
    _lock: std::sync::MutexGuard<'static, ()>,
}

#[cfg(test)]
impl ConfigBaseOverride {
    pub(crate) fn set(path: &std::path::Path) -> Self {
        static LOCK: Mutex<()> = Mutex::new(());
        let lock = LOCK.lock().unwrap_or_else(|err| err.into_inner());
        *CONFIG_BASE_OVERRIDE
            .lock()
            .unwrap_or_else(|err| err.into_inner()) = Some(path.to_path_buf());
        Self { _lock: lock }
    }
}

#[cfg(test)]
impl Drop for ConfigBaseOverride {
    fn drop(&mut self) {
        *CONFIG_BASE_OVERRIDE
            .lock()
            .unwrap_or_else(|err| err.into_inner()) = None;
    }
}
