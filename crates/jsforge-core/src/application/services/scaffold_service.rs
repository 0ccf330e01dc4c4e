//! Scaffold Service - main application orchestrator.
//!
//! This service drives one generation run through a fixed sequence:
//! 1. Validate the descriptor and check the project root does not exist
//! 2. Create the directory skeleton
//! 3. Copy the boilerplate bundle and rewrite its domain token
//! 4. Emit every class, recording each into the import manifest
//! 5. Emit the entry file from the manifest
//! 6. Emit style partials and the aggregated include file
//!
//! Nothing happens before step 1 finishes, and any failure stops the run.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, ProgressReporter},
        progress::ScaffoldEvent,
        services::asset_copier::AssetCopier,
    },
    domain::{
        ClassEmitter, DomainValidator as validator, EntryEmitter, ImportManifest, Placeholder,
        ProjectContext, ProjectDescriptor, StyleIncludeEmitter, substitute,
        emit::STYLE_PARTIAL_BODY,
    },
    error::JsforgeResult,
};

/// Directory for class sources, relative to the project root.
pub const SCRIPT_DIR: &str = "src/js";
/// Directory for style sources, relative to the project root.
pub const STYLE_DIR: &str = "src/scss";
/// Entry file, inside [`SCRIPT_DIR`].
pub const ENTRY_FILE: &str = "main.js";
/// Aggregated style file shipped in the bundle, inside [`STYLE_DIR`].
pub const STYLE_ROOT_FILE: &str = "project.scss";

/// What to do with a half-written project when a step fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RollbackPolicy {
    /// Leave whatever was written in place.
    #[default]
    KeepPartial,
    /// Best-effort removal of the project root.
    RemoveProject,
}

/// Where a run reads from and writes to.
#[derive(Debug, Clone)]
pub struct ScaffoldOptions {
    /// Parent of every generated project.
    pub output_root: PathBuf,
    /// Static bundle copied into each project.
    pub boilerplate_root: PathBuf,
    pub rollback: RollbackPolicy,
}

impl ScaffoldOptions {
    pub fn new(output_root: impl Into<PathBuf>, boilerplate_root: impl Into<PathBuf>) -> Self {
        Self {
            output_root: output_root.into(),
            boilerplate_root: boilerplate_root.into(),
            rollback: RollbackPolicy::default(),
        }
    }

    pub fn with_rollback(mut self, rollback: RollbackPolicy) -> Self {
        self.rollback = rollback;
        self
    }

    /// Root of the project `project_name` would be generated into.
    pub fn project_root(&self, project_name: &str) -> PathBuf {
        self.output_root.join(project_name)
    }
}

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldSummary {
    pub run_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub project_root: PathBuf,
    pub classes: usize,
    pub style_includes: usize,
    pub assets_copied: usize,
}

/// State owned by a single run and dropped when it ends.
struct ScaffoldRun<'a> {
    id: Uuid,
    started_at: DateTime<Utc>,
    descriptor: &'a ProjectDescriptor,
    root: PathBuf,
    manifest: ImportManifest,
    assets_copied: usize,
    style_includes: usize,
}

impl<'a> ScaffoldRun<'a> {
    fn new(descriptor: &'a ProjectDescriptor, root: PathBuf) -> Self {
        Self {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            descriptor,
            root,
            manifest: ImportManifest::new(),
            assets_copied: 0,
            style_includes: 0,
        }
    }

    fn context(&self) -> ProjectContext<'a> {
        let descriptor: &'a ProjectDescriptor = self.descriptor;
        ProjectContext {
            project_name: &descriptor.project_name,
            author: &descriptor.author,
        }
    }

    fn script_dir(&self) -> PathBuf {
        self.root.join(SCRIPT_DIR)
    }

    fn style_dir(&self) -> PathBuf {
        self.root.join(STYLE_DIR)
    }

    fn into_summary(self) -> ScaffoldSummary {
        ScaffoldSummary {
            run_id: self.id,
            started_at: self.started_at,
            project_root: self.root,
            classes: self.manifest.len(),
            style_includes: self.style_includes,
            assets_copied: self.assets_copied,
        }
    }
}

/// Main scaffolding service.
///
/// Holds no per-run state; one instance can serve any number of runs.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
    classes: ClassEmitter,
    entry: EntryEmitter,
    styles: StyleIncludeEmitter,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given filesystem adapter.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use jsforge_core::application::{ScaffoldService, ports::*};
    ///
    /// let service = ScaffoldService::new(filesystem); // impl Filesystem
    /// ```
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            filesystem,
            classes: ClassEmitter,
            entry: EntryEmitter,
            styles: StyleIncludeEmitter,
        }
    }

    /// Generate a new project from `descriptor`.
    #[instrument(
        skip_all,
        fields(
            project = %descriptor.project_name,
            output_root = %options.output_root.display()
        )
    )]
    pub fn scaffold(
        &self,
        descriptor: &ProjectDescriptor,
        options: &ScaffoldOptions,
        reporter: &dyn ProgressReporter,
    ) -> JsforgeResult<ScaffoldSummary> {
        validator::validate_descriptor(descriptor)?;

        let root = options.project_root(&descriptor.project_name);
        if self.filesystem.exists(&root) {
            return Err(ApplicationError::ProjectExists { path: root }.into());
        }

        let mut run = ScaffoldRun::new(descriptor, root);
        info!(
            run_id = %run.id,
            classes = descriptor.class_count(),
            style_includes = descriptor.sass_includes.len(),
            "Scaffolding project"
        );

        match self.generate(&mut run, options, reporter) {
            Ok(()) => {
                info!(run_id = %run.id, "Scaffold completed successfully");
                Ok(run.into_summary())
            }
            Err(e) => {
                warn!(run_id = %run.id, error = %e, "Scaffold failed");
                if options.rollback == RollbackPolicy::RemoveProject {
                    self.rollback(&run.root);
                }
                Err(e)
            }
        }
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn generate(
        &self,
        run: &mut ScaffoldRun<'_>,
        options: &ScaffoldOptions,
        reporter: &dyn ProgressReporter,
    ) -> JsforgeResult<()> {
        self.create_skeleton(run, reporter)?;

        run.assets_copied = AssetCopier::new(self.filesystem.as_ref()).copy(
            &options.boilerplate_root,
            &run.root,
            &run.descriptor.domain,
        )?;
        reporter.report(&ScaffoldEvent::AssetsCopied {
            count: run.assets_copied,
        });

        self.emit_classes(run, reporter)?;
        self.emit_entry_file(run, reporter)?;
        self.emit_style_includes(run, reporter)
    }

    fn create_skeleton(
        &self,
        run: &ScaffoldRun<'_>,
        reporter: &dyn ProgressReporter,
    ) -> JsforgeResult<()> {
        self.filesystem.create_dir_all(&run.root)?;
        self.filesystem.create_dir_all(&run.script_dir())?;
        self.filesystem.create_dir_all(&run.style_dir())?;

        info!(path = %run.root.display(), "Project directory created");
        reporter.report(&ScaffoldEvent::ProjectDirectoryCreated {
            path: run.root.clone(),
        });
        Ok(())
    }

    fn emit_classes(
        &self,
        run: &mut ScaffoldRun<'_>,
        reporter: &dyn ProgressReporter,
    ) -> JsforgeResult<()> {
        let descriptor = run.descriptor;
        let ctx = run.context();
        let script_dir = run.script_dir();

        for (group, classes) in &descriptor.class_groups {
            let group_dir = script_dir.join(group);
            let mut group_created = false;

            for class in classes {
                if !group_created {
                    self.filesystem.create_dir_all(&group_dir)?;
                    reporter.report(&ScaffoldEvent::GroupCreated {
                        group: group.clone(),
                    });
                    group_created = true;
                }

                let emitted = self.classes.emit(group, class, ctx);
                self.filesystem
                    .write_file(&group_dir.join(&emitted.file_name), &emitted.source)?;
                debug!(class = %emitted.import_path, "Class emitted");

                reporter.report(&ScaffoldEvent::ClassCreated {
                    import_path: emitted.import_path.clone(),
                });
                run.manifest.record(emitted.import_path);
            }
        }

        Ok(())
    }

    fn emit_entry_file(
        &self,
        run: &ScaffoldRun<'_>,
        reporter: &dyn ProgressReporter,
    ) -> JsforgeResult<()> {
        let path = run.script_dir().join(ENTRY_FILE);
        let code = self.entry.emit(&run.manifest.render(), run.context());
        self.filesystem.write_file(&path, &code)?;

        debug!(imports = run.manifest.len(), "Entry file written");
        reporter.report(&ScaffoldEvent::EntryFileWritten { path });
        Ok(())
    }

    fn emit_style_includes(
        &self,
        run: &mut ScaffoldRun<'_>,
        reporter: &dyn ProgressReporter,
    ) -> JsforgeResult<()> {
        let style_dir = run.style_dir();
        let partials = self.styles.plan(&run.descriptor.sass_includes);

        for partial in &partials {
            let path = style_dir.join(&partial.relative_path);
            self.ensure_parent(&path)?;
            self.filesystem.write_file(&path, STYLE_PARTIAL_BODY)?;
            reporter.report(&ScaffoldEvent::StyleIncludeCreated {
                include: partial.include.clone(),
            });
        }
        run.style_includes = partials.len();

        let root_file = style_dir.join(STYLE_ROOT_FILE);
        let contents = self.filesystem.read_to_string(&root_file)?;
        let directives = self.styles.render(&partials);
        self.filesystem.write_file(
            &root_file,
            &substitute(&contents, &[(Placeholder::Includes, directives.as_str())]),
        )?;

        if !partials.is_empty() {
            reporter.report(&ScaffoldEvent::StyleImportsAdded {
                count: partials.len(),
            });
        }
        Ok(())
    }

    /// Nested include names (`components/_card`) need their directory.
    fn ensure_parent(&self, path: &Path) -> JsforgeResult<()> {
        match path.parent() {
            Some(parent) if !self.filesystem.exists(parent) => {
                self.filesystem.create_dir_all(parent)
            }
            _ => Ok(()),
        }
    }

    /// Best-effort rollback on failure.
    fn rollback(&self, root: &Path) {
        if !self.filesystem.exists(root) {
            return;
        }
        if let Err(e) = self.filesystem.remove_dir_all(root) {
            warn!(
                error = %e,
                path = %root.display(),
                "Rollback failed"
            );
        } else {
            info!("Rollback successful");
        }
    }
}
