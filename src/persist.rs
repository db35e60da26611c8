//! Raw key persistence
//!
//! Keys are written verbatim: no header, no length prefix, no encoding.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use kemgen_api::error::ResultExt;
use kemgen_api::Result;
use tracing::{debug, warn};

/// Create or truncate `path` and write exactly `bytes` to it.
pub fn write_key_file(path: &Path, bytes: &[u8]) -> Result<()> {
    warn_if_present(path);
    let file = File::create(path).for_file(path)?;
    write_all_synced(file, path, bytes)
}

/// Like [`write_key_file`], but a newly created file is readable by the
/// owner only on Unix.
pub fn write_secret_key_file(path: &Path, bytes: &[u8]) -> Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    warn_if_present(path);
    let file = options.open(path).for_file(path)?;
    write_all_synced(file, path, bytes)
}

fn warn_if_present(path: &Path) {
    if path.exists() {
        warn!(path = %path.display(), "overwriting existing key file");
    }
}

fn write_all_synced(mut file: File, path: &Path, bytes: &[u8]) -> Result<()> {
    file.write_all(bytes).for_file(path)?;
    file.sync_all().for_file(path)?;
    debug!(path = %path.display(), len = bytes.len(), "wrote key file");
    Ok(())
}
