//! Artifact synchronization
//!
//! One routine per artifact class: empty the class's destination
//! directories, then replicate every matching dist file into each of them
//! with the owner that destination requires. Errors propagate immediately;
//! a failed run leaves whatever it already cleared or copied in place.

use std::path::PathBuf;

use crate::config::DeployConfig;
use crate::error::DeployResult;
use crate::owner::OwnershipSetter;

/// A directory receiving artifacts, and the account owning them there
#[derive(Debug, Clone)]
pub struct Destination {
    pub dir: PathBuf,
    pub owner: String,
}

/// One category of build output with its own source directory and filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactClass {
    /// Stylesheets shared by every application
    CommonCss,
    /// Stylesheets of the client application
    ClientCss,
    /// Scripts of the client application
    ClientJs,
}

impl ArtifactClass {
    /// Deployment order: shared CSS, client CSS, client JS
    pub const ALL: [ArtifactClass; 3] =
        [Self::CommonCss, Self::ClientCss, Self::ClientJs];

    /// Dist directory the class's files are read from
    pub fn source_dir(&self, config: &DeployConfig) -> PathBuf {
        let dist = config.dist_dir();
        match self {
            Self::CommonCss => dist.join("css").join("common"),
            Self::ClientCss => dist.join("css").join("client"),
            Self::ClientJs => dist.join("js"),
        }
    }

    /// Filename prefix a source entry must carry to be deployed
    ///
    /// The CSS dist directories also hold map files and intermediate
    /// bundles; only the `common*`/`client*` entries ship. JS ships whole.
    pub fn prefix(&self) -> Option<&'static str> {
        match self {
            Self::CommonCss => Some("common"),
            Self::ClientCss => Some("client"),
            Self::ClientJs => None,
        }
    }

    /// The three directories the class fans out to, with their owners
    ///
    /// App-local and project-shared trees belong to the web application;
    /// the public tree belongs to the web server.
    pub fn destinations(&self, config: &DeployConfig) -> Vec<Destination> {
        let (app, project, public) = match self {
            Self::CommonCss => (
                config.app_common_static().join("css"),
                config.project_common_static().join("css"),
                config.static_dir().join("common").join("css"),
            ),
            Self::ClientCss => (
                config.app_client_static().join("css"),
                config.project_client_static().join("css"),
                config.static_dir().join(&config.app).join("css"),
            ),
            Self::ClientJs => (
                config.app_client_static().join("js"),
                config.project_client_static().join("js"),
                config.static_dir().join(&config.app).join("js"),
            ),
        };
        vec![
            Destination { dir: app, owner: config.app_owner.clone() },
            Destination { dir: project, owner: config.app_owner.clone() },
            Destination { dir: public, owner: config.web_owner.clone() },
        ]
    }
}

/// Clear and repopulate every destination of one artifact class.
pub fn sync_class(
    class: ArtifactClass,
    config: &DeployConfig,
    owners: &dyn OwnershipSetter,
) -> DeployResult<()> {
    let destinations = class.destinations(config);
    for destination in &destinations {
        crate::fs::clear_dir(&destination.dir)?;
    }

    let source = class.source_dir(config);
    for entry in std::fs::read_dir(&source)? {
        let entry = entry?;
        let name = entry.file_name();
        if let Some(prefix) = class.prefix() {
            if !name.to_string_lossy().starts_with(prefix) {
                continue;
            }
        }
        let src = entry.path();
        for destination in &destinations {
            let dst = destination.dir.join(&name);
            crate::fs::copy_with_metadata(&src, &dst)?;
            owners.set_owner(&dst, &destination.owner)?;
            println!("Copied {}", dst.display());
        }
    }
    Ok(())
}

/// Deploy every artifact class in fixed order.
pub fn deploy_all(
    config: &DeployConfig,
    owners: &dyn OwnershipSetter,
) -> DeployResult<()> {
    for class in ArtifactClass::ALL {
        sync_class(class, config, owners)?;
    }
    Ok(())
}
