use crate::ShellError;
use std::env;
use std::path::{Path, PathBuf};

/// Changes the process working directory, which every later child inherits.
///
/// No target, or `~`, means the home directory.
pub fn change_directory(target: Option<&str>, home: Option<&Path>) -> Result<PathBuf, ShellError> {
    let path = match target {
        None | Some("~") => home.ok_or(ShellError::HomeNotSet)?.to_path_buf(),
        Some(target) => PathBuf::from(target),
    };

    env::set_current_dir(&path).map_err(|source| ShellError::ChangeDirectory {
        path: path.clone(),
        source,
    })?;
    tracing::debug!(path = %path.display(), "changed directory");

    Ok(path)
}
