use std::fs;
use std::io::Write;
use std::path::Path;

use rdag_core::{log_debug, log_info};
use tempfile::{Builder, NamedTempFile};

use crate::error::{CliError, CliResult};

fn write_error(path: &Path, message: String) -> CliError {
    CliError::OutputWrite {
        path: path.to_path_buf(),
        message,
    }
}

/// Uniquely named temporary file next to `path`, e.g. `.runners.hh.a1B2c3.tmp`.
fn sibling_temp(path: &Path) -> CliResult<NamedTempFile> {
    let dir = match path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) => {
            fs::create_dir_all(parent).map_err(|e| {
                write_error(path, format!("Failed to create {}: {e}", parent.display()))
            })?;
            parent
        }
        None => Path::new("."),
    };
    let stem = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "out".to_string());
    Builder::new()
        .prefix(&format!(".{stem}."))
        .suffix(".tmp")
        .tempfile_in(dir)
        .map_err(|e| write_error(path, format!("Failed to create temporary file: {e}")))
}

/// Write `contents` to `path` all-or-nothing.
///
/// The text goes to a uniquely named sibling temporary file which is then
/// renamed over the target. On any failure the temporary file is removed and
/// the target is left as it was.
pub fn atomic_write(path: &Path, contents: &str) -> CliResult<()> {
    let mut tmp = sibling_temp(path)?;
    log_debug!("cli", "Staging {} in {}", path.display(), tmp.path().display());

    tmp.write_all(contents.as_bytes())
        .and_then(|()| tmp.flush())
        .map_err(|e| write_error(path, format!("Failed to write {}: {e}", tmp.path().display())))?;

    // A failed persist hands the temporary file back; dropping it deletes it.
    tmp.persist(path).map_err(|e| {
        write_error(
            path,
            format!("Failed to move {} into place: {}", e.file.path().display(), e.error),
        )
    })?;

    log_info!("cli", "Wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}
