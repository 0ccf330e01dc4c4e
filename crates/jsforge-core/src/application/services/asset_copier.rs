//! Copies the static boilerplate bundle into a new project.

use std::path::Path;

use tracing::{debug, instrument};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{Placeholder, substitute},
    error::JsforgeResult,
};

/// File inside the bundle that receives the deployment domain.
pub const DOMAIN_CONFIG_FILE: &str = "gulpfile.js";

/// Duplicates the asset tree verbatim, then rewrites the domain token in
/// [`DOMAIN_CONFIG_FILE`]. Any failure is an [`ApplicationError::AssetCopy`].
pub struct AssetCopier<'a> {
    filesystem: &'a dyn Filesystem,
}

impl<'a> AssetCopier<'a> {
    pub fn new(filesystem: &'a dyn Filesystem) -> Self {
        Self { filesystem }
    }

    /// Returns the number of files copied.
    #[instrument(skip(self), fields(source = %source.display()))]
    pub fn copy(&self, source: &Path, destination: &Path, domain: &str) -> JsforgeResult<usize> {
        if !self.filesystem.exists(source) {
            return Err(ApplicationError::AssetCopy {
                path: source.to_path_buf(),
                reason: "boilerplate directory not found".into(),
            }
            .into());
        }

        let copied = self
            .filesystem
            .copy_dir_all(source, destination)
            .map_err(|e| ApplicationError::AssetCopy {
                path: source.to_path_buf(),
                reason: e.to_string(),
            })?;
        debug!(files = copied, "Boilerplate copied");

        self.rewrite_domain(source, destination, domain)?;
        Ok(copied)
    }

    fn rewrite_domain(&self, source: &Path, destination: &Path, domain: &str) -> JsforgeResult<()> {
        let config_path = destination.join(DOMAIN_CONFIG_FILE);
        let contents = self
            .filesystem
            .read_to_string(&config_path)
            .map_err(|e| ApplicationError::AssetCopy {
                path: source.join(DOMAIN_CONFIG_FILE),
                reason: e.to_string(),
            })?;

        let rewritten = substitute(&contents, &[(Placeholder::Domain, domain)]);
        self.filesystem.write_file(&config_path, &rewritten)?;
        debug!(file = DOMAIN_CONFIG_FILE, "Domain token rewritten");
        Ok(())
    }
}
