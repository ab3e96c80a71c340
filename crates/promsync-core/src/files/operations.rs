//! Config file writes.
//!
//! Files are replaced atomically: content goes to a sibling temp file which
//! is then renamed over the target, so Prometheus never observes a partial
//! file.

use std::fs;
use std::path::{Path, PathBuf};

use super::errors::FileError;

/// Permission bits for written config files (rw-r--r--).
pub const CONFIG_FILE_MODE: u32 = 0o644;

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

fn cleanup_temp_file(temp_file: &Path, original_error: &std::io::Error) {
    if let Err(cleanup_err) = fs::remove_file(temp_file) {
        tracing::warn!(
            event = "core.files.temp_file_cleanup_failed",
            temp_file = %temp_file.display(),
            original_error = %original_error,
            cleanup_error = %cleanup_err,
            message = "Failed to clean up temp file after write error"
        );
    }
}

#[cfg(unix)]
fn set_mode(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(CONFIG_FILE_MODE))
}

#[cfg(not(unix))]
fn set_mode(_path: &Path) -> std::io::Result<()> {
    Ok(())
}

/// Replace the file at `path` with `contents`.
pub fn write_config_file(path: &Path, contents: &[u8]) -> Result<(), FileError> {
    let temp_file = temp_path_for(path);
    let fail = |source: std::io::Error| FileError::WriteFailed {
        path: path.display().to_string(),
        source,
    };

    if let Err(e) = fs::write(&temp_file, contents).and_then(|()| set_mode(&temp_file)) {
        cleanup_temp_file(&temp_file, &e);
        return Err(fail(e));
    }

    if let Err(e) = fs::rename(&temp_file, path) {
        cleanup_temp_file(&temp_file, &e);
        return Err(fail(e));
    }

    tracing::debug!(
        event = "core.files.write_completed",
        path = %path.display(),
        bytes = contents.len()
    );

    Ok(())
}

/// [`write_config_file`] on the blocking thread pool, for callers on an
/// async task.
pub async fn write_config_file_async(path: &Path, contents: Vec<u8>) -> Result<(), FileError> {
    let target = path.to_path_buf();
    tokio::task::spawn_blocking(move || write_config_file(&target, &contents))
        .await
        .unwrap_or_else(|join_err| {
            Err(FileError::WriteFailed {
                path: path.display().to_string(),
                source: std::io::Error::other(join_err),
            })
        })
}
