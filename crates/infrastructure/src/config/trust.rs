//! Filesystem trust gate for the configuration file
//!
//! The listener daemon usually runs as root, so a configuration file that a
//! non-root user can modify is a privilege-escalation path. Before parsing,
//! the loader requires that only root can write the file - unless the
//! invoking process itself is root, which trusts its own filesystem.
//!
//! The mode-bit predicates are pure functions of `(owner UID, mode)` so the
//! policy can be tested without touching the filesystem; the path-level
//! wrappers read fresh metadata on every call (permissions may change
//! between checks, nothing is cached).

use std::fs;
use std::io;
use std::os::unix::fs::MetadataExt;
use std::path::Path;

use super::error::ConfigError;

/// UID of the superuser
pub const ROOT_UID: u32 = 0;

const WRITE_OTHER: u32 = 0o002;
const WRITE_GROUP_OTHER: u32 = 0o022;
const WRITE_ANY: u32 = 0o222;

/// Whether a mode grants write access to "other"
pub fn mode_world_writable(mode: u32) -> bool {
    mode & WRITE_OTHER != 0
}

/// Whether a file with this owner and mode can only be modified by root
///
/// True when the owner is root and group/other cannot write, or when the
/// owner is not root but no write bit is set at all (an immutable,
/// provisioned file that nobody can modify).
pub fn mode_only_root_write(owner_uid: u32, mode: u32) -> bool {
    if owner_uid == ROOT_UID {
        mode & WRITE_GROUP_OTHER == 0
    } else {
        mode & WRITE_ANY == 0
    }
}

/// Whether the file at `path` is world-writable
///
/// Follows symlinks: the permission bits of the target are what matter.
pub fn world_writable(path: &Path) -> io::Result<bool> {
    let metadata = fs::metadata(path)?;
    Ok(mode_world_writable(metadata.mode()))
}

/// Whether the file at `path` can only be modified by root
pub fn only_root_write(path: &Path) -> io::Result<bool> {
    let metadata = fs::metadata(path)?;
    Ok(mode_only_root_write(metadata.uid(), metadata.mode()))
}

/// Gate a configuration file before it is parsed
///
/// `uid` is the effective UID of the invoking process, passed explicitly so
/// the gate stays a pure decision over its inputs. Root (UID 0) bypasses
/// the permission check entirely.
pub fn ensure_trusted(path: &Path, uid: u32) -> Result<(), ConfigError> {
    if uid == ROOT_UID {
        tracing::debug!(path = %path.display(), "Running as root, skipping permission check");
        return Ok(());
    }

    let trusted = only_root_write(path).map_err(|source| ConfigError::from_io(path, source))?;
    if trusted {
        Ok(())
    } else {
        Err(ConfigError::InsecurePermissions {
            path: path.to_path_buf(),
        })
    }
}
