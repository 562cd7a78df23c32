//! uideploy - UI artifact deployment tool
//!
//! Takes the CSS/JS bundles produced under `ui/dist` and fans each one out
//! into the static directories it is served from: the owning application's
//! static tree, the project-shared static tree, and the public nginx static
//! tree. Each destination is emptied first, and copied files are chowned to
//! the account that serves them.

pub mod config;
pub mod error;
pub mod fs;
pub mod owner;
pub mod sync;

// Re-exports for convenience
pub use config::DeployConfig;
pub use error::{DeployError, DeployResult};
pub use owner::{OwnershipSetter, SystemOwnership};
pub use sync::{deploy_all, sync_class, ArtifactClass, Destination};
