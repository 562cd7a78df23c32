//! Deployment configuration
//!
//! All paths derive from a single root so tests can point the deployer at a
//! temp directory. There is no config file and no environment lookup; the
//! defaults are the production layout.

use std::path::PathBuf;

/// Where artifacts come from, where they go, and who owns them there.
#[derive(Debug, Clone)]
pub struct DeployConfig {
    /// Installation root (`/opt/pbx` in production)
    pub root: PathBuf,
    /// Name of the client application whose assets are deployed
    pub app: String,
    /// Account owning files in application/project static trees
    pub app_owner: String,
    /// Account owning files in the public web-server static tree
    pub web_owner: String,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("/opt/pbx"),
            app: "intercom".to_string(),
            app_owner: "pbx-web".to_string(),
            web_owner: "www-data".to_string(),
        }
    }
}

impl DeployConfig {
    /// Default configuration rooted at an arbitrary directory
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// Webpack output directory
    pub fn dist_dir(&self) -> PathBuf {
        self.root.join("ui").join("dist")
    }

    /// Public static tree served directly by the web server
    pub fn static_dir(&self) -> PathBuf {
        self.root.join("static")
    }

    /// Root of the web applications
    pub fn web_dir(&self) -> PathBuf {
        self.root.join("web")
    }

    /// Static tree inside the shared `common` application
    pub fn app_common_static(&self) -> PathBuf {
        self.web_dir().join("common").join("static").join("common")
    }

    /// Static tree inside the client application
    pub fn app_client_static(&self) -> PathBuf {
        self.web_dir().join(&self.app).join("static").join(&self.app)
    }

    /// Project-shared static tree for common assets
    pub fn project_common_static(&self) -> PathBuf {
        self.web_dir().join("static").join("common")
    }

    /// Project-shared static tree for client assets
    pub fn project_client_static(&self) -> PathBuf {
        self.web_dir().join("static").join(&self.app)
    }
}
