//! Error types for uideploy
//!
//! Uses `thiserror` for library errors; the binary wraps these in `anyhow`.

use thiserror::Error;

/// Result type alias for deploy operations
pub type DeployResult<T> = Result<T, DeployError>;

/// Main error type for deploy operations
#[derive(Error, Debug)]
pub enum DeployError {
    /// IO error (missing directory, permission denied, disk errors)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Account lookup found no such user on this host
    #[error("unknown account '{name}' on this host")]
    UnknownAccount { name: String },

    /// Account lookup or chown syscall failed
    #[error("system call failed: {0}")]
    Sys(#[from] nix::errno::Errno),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_unknown_account() {
        let err = DeployError::UnknownAccount {
            name: "pbx-web".to_string(),
        };
        assert_eq!(err.to_string(), "unknown account 'pbx-web' on this host");
    }

    #[test]
    fn test_error_display_io() {
        let err = DeployError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "no such directory",
        ));
        assert_eq!(err.to_string(), "IO error: no such directory");
    }
}
