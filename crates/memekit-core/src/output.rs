//! Output helpers: atomic file writes and manifest JSON formatting.
//!
//! Every file memekit produces is written to a temporary file in the target
//! directory first and renamed over the final path, so a failed run never
//! leaves a half-written image or manifest behind.

use serde::Serialize;
use std::io::{self, Write};
use std::path::Path;

/// Write `bytes` to `path`, replacing any existing file in a single rename.
///
/// The parent directory must already exist.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = tempfile::Builder::new()
        .prefix(".memekit-")
        .suffix(".tmp")
        .tempfile_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.flush()?;

    // Temp files are created owner-only; outputs are served to others
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tmp.as_file()
            .set_permissions(std::fs::Permissions::from_mode(0o644))?;
    }

    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Serialize `item` as UTF-8 JSON with 2-space indentation.
///
/// Non-ASCII characters are emitted literally and no trailing newline is
/// added, so identical input always yields identical bytes.
pub fn to_pretty_json<T: Serialize + ?Sized>(item: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(item)
}
