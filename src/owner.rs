//! File ownership
//!
//! Setting ownership is the one privileged operation in the deployer, so it
//! sits behind a trait. Production uses [`SystemOwnership`] (getpwnam +
//! chown); tests substitute a recording implementation.

use std::path::Path;

use nix::unistd::{chown, User};

use crate::error::{DeployError, DeployResult};

/// Applies an owner account to a file
pub trait OwnershipSetter {
    /// Change `path`'s owner and group to those of `account`
    fn set_owner(&self, path: &Path, account: &str) -> DeployResult<()>;
}

/// Resolve an account name to its passwd entry
pub fn resolve_account(name: &str) -> DeployResult<User> {
    User::from_name(name)?.ok_or_else(|| DeployError::UnknownAccount {
        name: name.to_string(),
    })
}

/// Real ownership setter backed by the host account database
///
/// Re-resolves the account on every call; the deployer only ever uses two
/// accounts, so caching would buy nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemOwnership;

impl OwnershipSetter for SystemOwnership {
    fn set_owner(&self, path: &Path, account: &str) -> DeployResult<()> {
        let user = resolve_account(account)?;
        chown(path, Some(user.uid), Some(user.gid))?;
        Ok(())
    }
}

/// Recording ownership setter for tests
///
/// Uses `Arc<Mutex<>>` internally so it can be cloned and shared.
#[cfg(test)]
#[derive(Clone, Default)]
pub struct RecordingOwnership {
    pub records:
        std::sync::Arc<std::sync::Mutex<Vec<(std::path::PathBuf, String)>>>,
}

#[cfg(test)]
impl RecordingOwnership {
    pub fn new() -> Self {
        Self::default()
    }

    /// Account most recently applied to `path`, if any
    pub fn owner_of(&self, path: &Path) -> Option<String> {
        let records = self.records.lock().unwrap();
        records
            .iter()
            .rev()
            .find(|(p, _)| p == path)
            .map(|(_, account)| account.clone())
    }

    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }
}

#[cfg(test)]
impl OwnershipSetter for RecordingOwnership {
    fn set_owner(&self, path: &Path, account: &str) -> DeployResult<()> {
        let mut records = self.records.lock().unwrap();
        records.push((path.to_path_buf(), account.to_string()));
        Ok(())
    }
}
