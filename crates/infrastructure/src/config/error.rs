//! Configuration loading errors

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors raised while loading the configuration file
///
/// The loader fails closed: every variant aborts the load and no partial
/// configuration is ever returned. Callers branch on the variant to decide
/// how to report the failure.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file does not exist
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    /// The file is writable by a principal other than root
    #[error(
        "Configuration file {path} can be modified by non-root users, refusing to load \
         (fix with chown root:root and chmod go-w)"
    )]
    InsecurePermissions { path: PathBuf },

    /// The file content is not a valid configuration document
    #[error("Invalid configuration in {path}: {source}")]
    Invalid {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// Reading file content or metadata failed
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ConfigError {
    /// Map an I/O error for `path`, folding missing-file errors into
    /// [`ConfigError::NotFound`]
    pub(crate) fn from_io(path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            Self::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_io_error_becomes_not_found() {
        let err = ConfigError::from_io(
            Path::new("config.yml"),
            io::Error::from(io::ErrorKind::NotFound),
        );
        assert!(matches!(err, ConfigError::NotFound { .. }));
    }

    #[test]
    fn other_io_errors_are_preserved() {
        let err = ConfigError::from_io(
            Path::new("config.yml"),
            io::Error::from(io::ErrorKind::PermissionDenied),
        );
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn insecure_permissions_message_suggests_a_fix() {
        let err = ConfigError::InsecurePermissions {
            path: PathBuf::from("/etc/buttond/config.yml"),
        };
        let message = err.to_string();
        assert!(message.contains("chmod go-w"));
        assert!(message.contains("/etc/buttond/config.yml"));
    }
}
