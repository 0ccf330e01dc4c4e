//! Source emitters: class files, the entry file and style partials.
//!
//! Emitters are pure. They turn descriptors into text and relative paths;
//! writing is the orchestrator's job.

use crate::domain::{
    entities::descriptor::{ClassDescriptor, PropertySpec},
    placeholder::{Placeholder, substitute},
};

const CLASS_TEMPLATE: &str = include_str!("../../templates/class.js");
const ENTRY_TEMPLATE: &str = include_str!("../../templates/main.js");

/// One indentation step in emitted JavaScript.
const TAB: &str = "    ";

/// Extension of emitted class files.
pub const CLASS_EXTENSION: &str = "js";

/// Extension of emitted style partials.
pub const STYLE_EXTENSION: &str = "scss";

/// Public name of the aggregated style file shipped in the bundle. No
/// partial may take it.
pub const STYLE_ROOT_NAME: &str = "project";

/// Body written into every generated style partial.
pub const STYLE_PARTIAL_BODY: &str = "// ...";

/// Read-only project metadata available to every emitter.
#[derive(Debug, Clone, Copy)]
pub struct ProjectContext<'a> {
    pub project_name: &'a str,
    pub author: &'a str,
}

/// A rendered class, not yet written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmittedClass {
    /// `<group>/<Class>`, used as the import path.
    pub import_path: String,
    /// `<Class>.js`
    pub file_name: String,
    pub source: String,
}

/// Renders class descriptors with the built-in class template.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassEmitter;

impl ClassEmitter {
    pub fn emit(
        &self,
        group: &str,
        class: &ClassDescriptor,
        ctx: ProjectContext<'_>,
    ) -> EmittedClass {
        let props = constructor_block(&class.properties);
        let methods = methods_block(&class.methods);

        let source = substitute(
            CLASS_TEMPLATE,
            &[
                (Placeholder::ClassName, class.name.as_str()),
                (Placeholder::Props, props.as_str()),
                (Placeholder::Methods, methods.as_str()),
                (Placeholder::ProjectName, ctx.project_name),
                (Placeholder::Author, ctx.author),
            ],
        );

        EmittedClass {
            import_path: format!("{group}/{}", class.name),
            file_name: format!("{}.{CLASS_EXTENSION}", class.name),
            source,
        }
    }
}

/// Constructor initializing every property, or nothing at all when there
/// are no properties.
fn constructor_block(properties: &[PropertySpec]) -> String {
    if properties.is_empty() {
        return String::new();
    }

    let mut block = format!("{TAB}constructor() {{\n");
    for prop in properties {
        block.push_str(&format!(
            "{TAB}{TAB}this.{} = {};\n",
            prop.name,
            prop.property_type().default_literal()
        ));
    }
    block.push_str(&format!("{TAB}}}\n"));
    block
}

fn methods_block(methods: &[String]) -> String {
    methods
        .iter()
        .map(|method| format!("{TAB}{method}() {{\n{TAB}{TAB}// ...\n{TAB}}}\n\n"))
        .collect()
}

/// Renders `main.js` from the collected imports.
#[derive(Debug, Clone, Copy, Default)]
pub struct EntryEmitter;

impl EntryEmitter {
    pub fn emit(&self, imports: &str, ctx: ProjectContext<'_>) -> String {
        substitute(
            ENTRY_TEMPLATE,
            &[
                (Placeholder::ProjectName, ctx.project_name),
                (Placeholder::Author, ctx.author),
                (Placeholder::Imports, imports),
            ],
        )
    }
}

/// A style partial to create plus the directive that pulls it in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StylePartial {
    /// Include name as written in the descriptor.
    pub include: String,
    /// Path relative to the style source directory.
    pub relative_path: String,
    /// `@import "<public name>";`
    pub directive: String,
}

/// Plans style partials and the aggregated include text.
#[derive(Debug, Clone, Copy, Default)]
pub struct StyleIncludeEmitter;

impl StyleIncludeEmitter {
    /// One partial per include, in input order.
    pub fn plan(&self, includes: &[String]) -> Vec<StylePartial> {
        includes
            .iter()
            .map(|include| {
                let public = public_name(include);
                StylePartial {
                    include: include.clone(),
                    relative_path: format!("{public}.{STYLE_EXTENSION}"),
                    directive: format!("@import \"{public}\";"),
                }
            })
            .collect()
    }

    /// Directives joined in order, one per line. Empty for no partials.
    pub fn render(&self, partials: &[StylePartial]) -> String {
        partials
            .iter()
            .map(|partial| format!("{}\n", partial.directive))
            .collect()
    }
}

/// Drop the private-partial marker (`_`) from each path segment.
pub(crate) fn public_name(include: &str) -> String {
    let unmarked = include.replace("/_", "/");
    match unmarked.strip_prefix('_') {
        Some(rest) => rest.to_owned(),
        None => unmarked,
    }
}
