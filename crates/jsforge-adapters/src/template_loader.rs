//! Filesystem-based template loader.
//!
//! Resolves a template name to `<templates_dir>/<name>.json` and parses it
//! into a [`ProjectDescriptor`].
//!
//! # Template format
//!
//! ```json
//! {
//!   "projectName": "Demo",
//!   "author": "A",
//!   "domain": "demo.test",
//!   "sassIncludes": ["_vars", "buttons"],
//!   "classes": {
//!     "models": [
//!       { "name": "User", "properties": ["email:string"], "methods": ["save"] }
//!     ]
//!   }
//! }
//! ```
//!
//! Only well-formedness is checked here. Missing `sassIncludes` or `classes`
//! are treated as empty.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use tracing::{debug, instrument};

use jsforge_core::{
    application::{ApplicationError, ports::TemplateLoader},
    domain::ProjectDescriptor,
    error::JsforgeResult,
};

/// File extension of template files.
pub const TEMPLATE_EXTENSION: &str = "json";

/// Loads [`ProjectDescriptor`]s from JSON files in one directory.
///
/// # Example
///
/// ```no_run
/// use jsforge_adapters::JsonTemplateLoader;
/// use jsforge_core::application::ports::TemplateLoader;
///
/// let loader = JsonTemplateLoader::new("./templates");
/// if loader.exists("demo") {
///     let descriptor = loader.load("demo")?;
///     println!("Loaded {}", descriptor.project_name);
/// }
/// # Ok::<(), jsforge_core::error::JsforgeError>(())
/// ```
#[derive(Debug, Clone)]
pub struct JsonTemplateLoader {
    templates_dir: PathBuf,
}

impl JsonTemplateLoader {
    /// Create a loader pointed at `templates_dir`.
    ///
    /// The directory does not need to exist yet; lookups simply report the
    /// template as missing.
    pub fn new(templates_dir: impl Into<PathBuf>) -> Self {
        Self {
            templates_dir: templates_dir.into(),
        }
    }

    pub fn templates_dir(&self) -> &Path {
        &self.templates_dir
    }

    /// Parse template text that was read from `path`.
    pub fn parse(path: &Path, raw: &str) -> JsforgeResult<ProjectDescriptor> {
        serde_json::from_str(raw).map_err(|e| {
            ApplicationError::TemplateParse {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }
            .into()
        })
    }
}

impl TemplateLoader for JsonTemplateLoader {
    fn template_path(&self, name: &str) -> PathBuf {
        self.templates_dir
            .join(format!("{name}.{TEMPLATE_EXTENSION}"))
    }

    fn exists(&self, name: &str) -> bool {
        self.template_path(name).is_file()
    }

    #[instrument(skip(self), fields(dir = %self.templates_dir.display()))]
    fn load(&self, name: &str) -> JsforgeResult<ProjectDescriptor> {
        let path = self.template_path(name);

        let raw = fs::read_to_string(&path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ApplicationError::TemplateNotFound {
                name: name.to_string(),
                path: path.clone(),
            },
            _ => ApplicationError::FileWrite {
                path: path.clone(),
                reason: format!("Failed to read template: {e}"),
            },
        })?;

        let descriptor = Self::parse(&path, &raw)?;
        debug!(
            project = %descriptor.project_name,
            groups = descriptor.class_groups.len(),
            classes = descriptor.class_count(),
            "loaded template"
        );
        Ok(descriptor)
    }
}
