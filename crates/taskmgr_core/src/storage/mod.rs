use crate::error::AppError;
use crate::model::Task;
use std::path::{Path, PathBuf};

const STORE_FILE_NAME: &str = "tasks.json";
const STORE_ENV_VAR: &str = "TASKMGR_STORE_PATH";

/// Capability seam for persisting a session's tasks. The in-memory manager
/// never touches storage itself; the driver hands the task list to a store
/// on exit and seeds the session from one at startup.
pub trait TaskStore {
    fn save(&self, path: &Path, tasks: &[Task]) -> Result<(), AppError>;
    fn load(&self, path: &Path) -> Result<Vec<Task>, AppError>;
}

/// Placeholder backend until real persistence lands: saving succeeds without
/// writing anything and loading yields an empty session.
pub struct NoopStore;

impl TaskStore for NoopStore {
    fn save(&self, _path: &Path, _tasks: &[Task]) -> Result<(), AppError> {
        Ok(())
    }

    fn load(&self, _path: &Path) -> Result<Vec<Task>, AppError> {
        Ok(Vec::new())
    }
}

pub fn store_path() -> Result<PathBuf, AppError> {
    if let Ok(path) = std::env::var(STORE_ENV_VAR)
        && !path.trim().is_empty()
    {
        return Ok(PathBuf::from(path));
    }

    if cfg!(windows) {
        let appdata =
            std::env::var("APPDATA").map_err(|_| AppError::invalid_data("APPDATA is not set"))?;
        Ok(PathBuf::from(appdata).join("taskmgr").join(STORE_FILE_NAME))
    } else {
        let home = std::env::var("HOME").map_err(|_| AppError::invalid_data("HOME is not set"))?;
        Ok(PathBuf::from(home)
            .join(".config")
            .join("taskmgr")
            .join(STORE_FILE_NAME))
    }
}
