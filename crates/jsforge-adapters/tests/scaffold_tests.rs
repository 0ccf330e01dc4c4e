//! End-to-end generation through the real adapters.

use std::path::{Path, PathBuf};

use jsforge_adapters::{JsonTemplateLoader, LocalFilesystem, MemoryFilesystem};
use jsforge_core::{
    application::{
        ApplicationError, NoopReporter, RollbackPolicy, ScaffoldOptions, ScaffoldService,
        ports::{Filesystem, TemplateLoader},
    },
    domain::{ClassDescriptor, DomainError, ProjectDescriptor, PropertySpec},
    error::JsforgeError,
};
use tempfile::TempDir;

const ROUND_TRIP: &str = r#"{
    "projectName": "Demo",
    "author": "A",
    "domain": "d.test",
    "sassIncludes": ["_vars", "buttons"],
    "classes": {
        "models": [
            {"name": "User", "properties": ["email:string", "active:boolean"], "methods": ["save"]}
        ]
    }
}"#;

fn shipped_boilerplate() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../boilerplate")
}

fn count_files(root: &Path) -> usize {
    walkdir::WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .count()
}

/// Memory filesystem with a two-file bundle under `bundle/`.
fn memory_fs() -> MemoryFilesystem {
    let fs = MemoryFilesystem::new();
    fs.seed_file("bundle/gulpfile.js", "proxy: '[_DOMAIN_]'\n");
    fs.seed_file("bundle/src/scss/project.scss", "// root\n[_INCLUDES_]");
    fs
}

fn memory_options() -> ScaffoldOptions {
    ScaffoldOptions::new("generated", "bundle")
}

#[test]
fn round_trip_scenario_on_disk() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("demo.json"), ROUND_TRIP).unwrap();

    let loader = JsonTemplateLoader::new(temp.path());
    assert!(loader.exists("demo"));
    let descriptor = loader.load("demo").unwrap();

    let output = temp.path().join("generated");
    let options = ScaffoldOptions::new(&output, shipped_boilerplate());
    let service = ScaffoldService::new(Box::new(LocalFilesystem::new()));
    let summary = service
        .scaffold(&descriptor, &options, &NoopReporter)
        .unwrap();

    let root = output.join("Demo");
    assert_eq!(summary.project_root, root);

    let user = std::fs::read_to_string(root.join("src/js/models/User.js")).unwrap();
    assert!(user.contains("constructor() {"));
    assert!(user.contains("this.email = '';"));
    assert!(user.contains("this.active = false;"));
    assert_eq!(user.matches("save() {").count(), 1);

    let main = std::fs::read_to_string(root.join("src/js/main.js")).unwrap();
    assert!(main.contains("import User from './models/User';"));

    assert!(root.join("src/scss/vars.scss").is_file());
    assert!(root.join("src/scss/buttons.scss").is_file());

    let project_scss = std::fs::read_to_string(root.join("src/scss/project.scss")).unwrap();
    let vars = project_scss.find("@import \"vars\";").unwrap();
    let buttons = project_scss.find("@import \"buttons\";").unwrap();
    assert!(vars < buttons);
    assert!(!project_scss.contains("[_INCLUDES_]"));

    let gulpfile = std::fs::read_to_string(root.join("gulpfile.js")).unwrap();
    assert!(gulpfile.contains("proxy: 'd.test'"));
    assert!(!gulpfile.contains("[_DOMAIN_]"));
}

#[test]
fn produces_exactly_the_expected_file_count() {
    let temp = TempDir::new().unwrap();
    let bundle = shipped_boilerplate();
    let bundle_files = count_files(&bundle);

    let descriptor = ProjectDescriptor::new("Counted")
        .with_sass_include("_a")
        .with_sass_include("b")
        .with_sass_include("c")
        .with_class("models", ClassDescriptor::new("One"))
        .with_class("models", ClassDescriptor::new("Two"))
        .with_class("views", ClassDescriptor::new("Three"));

    let options = ScaffoldOptions::new(temp.path(), &bundle);
    let summary = ScaffoldService::new(Box::new(LocalFilesystem::new()))
        .scaffold(&descriptor, &options, &NoopReporter)
        .unwrap();

    assert_eq!(summary.assets_copied, bundle_files);
    // k classes + 1 entry + m partials + copied bundle (project.scss is part of it)
    assert_eq!(count_files(&temp.path().join("Counted")), 3 + 1 + 3 + bundle_files);
}

#[test]
fn rerun_fails_without_touching_anything() {
    let fs = memory_fs();
    let descriptor = ProjectDescriptor::new("Demo");
    let service = ScaffoldService::new(Box::new(fs.clone()));

    service
        .scaffold(&descriptor, &memory_options(), &NoopReporter)
        .unwrap();
    let snapshot: Vec<_> = fs
        .files_under("generated")
        .into_iter()
        .map(|p| (fs.read_file(&p), p))
        .collect();
    let mutations = fs.mutation_count();

    let err = service
        .scaffold(&descriptor, &memory_options(), &NoopReporter)
        .unwrap_err();

    assert!(matches!(
        err,
        JsforgeError::Application(ApplicationError::ProjectExists { .. })
    ));
    assert_eq!(fs.mutation_count(), mutations);
    let after: Vec<_> = fs
        .files_under("generated")
        .into_iter()
        .map(|p| (fs.read_file(&p), p))
        .collect();
    assert_eq!(snapshot, after);
}

#[test]
fn import_order_follows_group_then_class_order() {
    let fs = memory_fs();
    let descriptor = ProjectDescriptor::new("Ordered")
        .with_class("zeta", ClassDescriptor::new("Zed"))
        .with_class("alpha", ClassDescriptor::new("Beta"))
        .with_class("alpha", ClassDescriptor::new("Alpha"))
        .with_class("zeta", ClassDescriptor::new("Ant"));

    ScaffoldService::new(Box::new(fs.clone()))
        .scaffold(&descriptor, &memory_options(), &NoopReporter)
        .unwrap();

    let main = fs.read_file("generated/Ordered/src/js/main.js").unwrap();
    let imports: Vec<_> = main.lines().filter(|l| l.starts_with("import ")).collect();
    assert_eq!(
        imports,
        vec![
            "import Zed from './zeta/Zed';",
            "import Ant from './zeta/Ant';",
            "import Beta from './alpha/Beta';",
            "import Alpha from './alpha/Alpha';",
        ]
    );
}

#[test]
fn import_order_ignores_unrelated_fields() {
    let render = |author: &str, props: &[&str]| {
        let fs = memory_fs();
        let mut first = ClassDescriptor::new("First");
        for p in props {
            first = first.with_property(PropertySpec::parse(p));
        }
        let descriptor = ProjectDescriptor::new("Same")
            .with_author(author)
            .with_class("g", first)
            .with_class("g", ClassDescriptor::new("Second").with_method("x"));
        ScaffoldService::new(Box::new(fs.clone()))
            .scaffold(&descriptor, &memory_options(), &NoopReporter)
            .unwrap();
        let main = fs.read_file("generated/Same/src/js/main.js").unwrap();
        main.lines()
            .filter(|l| l.starts_with("import "))
            .map(str::to_owned)
            .collect::<Vec<_>>()
    };

    assert_eq!(render("A", &[]), render("B", &["z:array", "y"]));
}

#[test]
fn style_include_order_follows_input() {
    let fs = memory_fs();
    let descriptor = ProjectDescriptor::new("Styled")
        .with_sass_include("zz")
        .with_sass_include("_aa")
        .with_sass_include("components/_mm");

    ScaffoldService::new(Box::new(fs.clone()))
        .scaffold(&descriptor, &memory_options(), &NoopReporter)
        .unwrap();

    assert_eq!(
        fs.read_file("generated/Styled/src/scss/project.scss").unwrap(),
        "// root\n@import \"zz\";\n@import \"aa\";\n@import \"components/mm\";\n"
    );
    assert_eq!(
        fs.read_file("generated/Styled/src/scss/components/mm.scss").as_deref(),
        Some("// ...")
    );
}

#[test]
fn include_shadowing_root_stylesheet_writes_nothing() {
    let fs = memory_fs();
    let mutations = fs.mutation_count();
    let descriptor = ProjectDescriptor::new("Shadow")
        .with_sass_include("project")
        .with_sass_include("a");

    let err = ScaffoldService::new(Box::new(fs.clone()))
        .scaffold(&descriptor, &memory_options(), &NoopReporter)
        .unwrap_err();

    assert!(matches!(
        err,
        JsforgeError::Domain(DomainError::InvalidDescriptor(_))
    ));
    assert_eq!(fs.mutation_count(), mutations);
    assert!(!fs.exists(Path::new("generated/Shadow")));
    assert_eq!(
        fs.read_file("bundle/src/scss/project.scss").as_deref(),
        Some("// root\n[_INCLUDES_]")
    );
}

#[test]
fn zero_classes_and_includes_is_legal() {
    let fs = memory_fs();
    let summary = ScaffoldService::new(Box::new(fs.clone()))
        .scaffold(&ProjectDescriptor::new("Empty"), &memory_options(), &NoopReporter)
        .unwrap();

    assert_eq!(summary.classes, 0);
    assert_eq!(summary.style_includes, 0);
    let main = fs.read_file("generated/Empty/src/js/main.js").unwrap();
    assert!(!main.contains("import "));
    assert_eq!(
        fs.read_file("generated/Empty/src/scss/project.scss").as_deref(),
        Some("// root\n")
    );
}

#[test]
fn class_without_properties_has_no_constructor_block() {
    let fs = memory_fs();
    let descriptor = ProjectDescriptor::new("NoProps")
        .with_class("util", ClassDescriptor::new("Logger").with_method("log"));

    ScaffoldService::new(Box::new(fs.clone()))
        .scaffold(&descriptor, &memory_options(), &NoopReporter)
        .unwrap();

    let logger = fs.read_file("generated/NoProps/src/js/util/Logger.js").unwrap();
    assert!(!logger.contains("constructor"));
    assert!(logger.contains("log() {"));
}

#[test]
fn missing_bundle_leaves_partial_output_by_default() {
    let fs = MemoryFilesystem::new();
    let err = ScaffoldService::new(Box::new(fs.clone()))
        .scaffold(&ProjectDescriptor::new("Broken"), &memory_options(), &NoopReporter)
        .unwrap_err();

    assert!(matches!(
        err,
        JsforgeError::Application(ApplicationError::AssetCopy { .. })
    ));
    assert!(fs.exists(Path::new("generated/Broken/src/js")));
}

#[test]
fn missing_bundle_with_rollback_removes_project() {
    let fs = MemoryFilesystem::new();
    let options = memory_options().with_rollback(RollbackPolicy::RemoveProject);

    let err = ScaffoldService::new(Box::new(fs.clone()))
        .scaffold(&ProjectDescriptor::new("Broken"), &options, &NoopReporter)
        .unwrap_err();

    assert!(matches!(
        err,
        JsforgeError::Application(ApplicationError::AssetCopy { .. })
    ));
    assert!(!fs.exists(Path::new("generated/Broken")));
    // The generated-output root itself is left alone.
    assert!(fs.exists(Path::new("generated")));
}

#[test]
fn malformed_template_fails_before_any_directory_exists() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("bad.json"), &ROUND_TRIP[..40]).unwrap();

    let loader = JsonTemplateLoader::new(temp.path());
    let err = loader.load("bad").unwrap_err();

    assert!(matches!(
        err,
        JsforgeError::Application(ApplicationError::TemplateParse { .. })
    ));
    assert!(!temp.path().join("generated").exists());
}
