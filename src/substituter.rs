//! Placeholder substitution and output writing.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{ConfigureError, Result};
use crate::placeholder::PlaceholderSet;
use crate::version::VersionSet;

/// Replaces every occurrence of each placeholder in `set` with its value.
///
/// Replacement follows the order of `PlaceholderSet::placeholders`. Text that
/// is not a known token is copied unchanged.
pub fn substitute(
    content: &str,
    versions: &VersionSet,
    set: PlaceholderSet,
    prefix: &str,
) -> String {
    set.placeholders()
        .iter()
        .fold(content.to_string(), |text, placeholder| {
            text.replace(&placeholder.token(prefix), &placeholder.value(versions))
        })
}

/// Reads `template` and returns its substituted text.
///
/// # Errors
/// Returns `ConfigureError::Read` if the template is missing or unreadable.
pub fn render(
    template: &Path,
    versions: &VersionSet,
    set: PlaceholderSet,
    prefix: &str,
) -> Result<String> {
    let content = fs::read_to_string(template).map_err(|e| ConfigureError::read(template, e))?;
    Ok(substitute(&content, versions, set, prefix))
}

/// Replaces the file at `path` with `content`.
///
/// The text is written to a temporary file next to the destination and renamed
/// over it, so the destination is either untouched or fully written. An
/// existing destination is resolved first, so a symlinked output is written
/// through to its target. Permissions of an existing destination are kept.
pub fn write_output(path: &Path, content: &str) -> Result<()> {
    let target = if path.exists() {
        fs::canonicalize(path).map_err(|e| ConfigureError::write(path, e))?
    } else {
        path.to_path_buf()
    };

    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir).map_err(|e| ConfigureError::write(path, e))?;
    temp.write_all(content.as_bytes())
        .map_err(|e| ConfigureError::write(path, e))?;

    let permissions = match fs::metadata(&target) {
        Ok(meta) => Some(meta.permissions()),
        Err(_) => default_permissions(),
    };
    if let Some(permissions) = permissions {
        temp.as_file()
            .set_permissions(permissions)
            .map_err(|e| ConfigureError::write(path, e))?;
    }

    temp.persist(&target)
        .map_err(|e| ConfigureError::write(path, e.error))?;
    Ok(())
}

/// Mode for newly created outputs.
///
/// Fixed at 0644 and not masked by the process umask. Without it the output
/// would keep the temp file's 0600 mode.
#[cfg(unix)]
fn default_permissions() -> Option<fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn default_permissions() -> Option<fs::Permissions> {
    None
}

/// Stamps one template into its output file.
pub fn generate(
    template: &Path,
    output: &Path,
    versions: &VersionSet,
    set: PlaceholderSet,
    prefix: &str,
) -> Result<()> {
    let content = render(template, versions, set, prefix)?;
    write_output(output, &content)
}
