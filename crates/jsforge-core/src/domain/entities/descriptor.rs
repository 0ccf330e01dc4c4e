//! Parsed project descriptors.
//!
//! A [`ProjectDescriptor`] is built once per run from the template file and is
//! read-only afterwards. Group and class order are preserved exactly as they
//! appear in the document.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};

use crate::domain::{
    emit::{STYLE_ROOT_NAME, public_name},
    error::DomainError,
    value_objects::PropertyType,
};

/// Separator between property name and type tag in the inline form.
const TYPE_SEPARATOR: char = ':';

/// The whole project description.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDescriptor {
    #[serde(default, deserialize_with = "null_as_default")]
    pub project_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub author: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub domain: String,
    /// Style partial names, in include order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub sass_includes: Vec<String>,
    /// Group name to classes, in document order.
    #[serde(default, rename = "classes", deserialize_with = "null_as_default")]
    pub class_groups: IndexMap<String, Vec<ClassDescriptor>>,
}

impl ProjectDescriptor {
    pub fn new(project_name: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
            author: String::new(),
            domain: String::new(),
            sass_includes: Vec::new(),
            class_groups: IndexMap::new(),
        }
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = domain.into();
        self
    }

    pub fn with_sass_include(mut self, include: impl Into<String>) -> Self {
        self.sass_includes.push(include.into());
        self
    }

    /// Append a class to `group`, creating the group on first use.
    pub fn with_class(mut self, group: impl Into<String>, class: ClassDescriptor) -> Self {
        self.class_groups.entry(group.into()).or_default().push(class);
        self
    }

    /// Total number of classes across all groups.
    pub fn class_count(&self) -> usize {
        self.class_groups.values().map(Vec::len).sum()
    }

    /// Classes in emission order: group order, then order within the group.
    pub fn classes(&self) -> impl Iterator<Item = (&str, &ClassDescriptor)> {
        self.class_groups
            .iter()
            .flat_map(|(group, classes)| classes.iter().map(move |c| (group.as_str(), c)))
    }

    /// Check the fields that name things on disk.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.project_name.is_empty() {
            return Err(DomainError::MissingRequiredField {
                field: "projectName",
            });
        }

        if let Some(reason) = path_segment_problem(&self.project_name) {
            return Err(DomainError::InvalidProjectName {
                name: self.project_name.clone(),
                reason,
            });
        }

        for include in &self.sass_includes {
            if let Some(reason) = include_path_problem(include) {
                return Err(DomainError::InvalidDescriptor(format!(
                    "sass include '{include}' {reason}"
                )));
            }
        }

        for (group, classes) in &self.class_groups {
            if let Some(reason) = path_segment_problem(group) {
                return Err(DomainError::InvalidDescriptor(format!(
                    "class group '{group}' {reason}"
                )));
            }
            for class in classes {
                if let Some(reason) = path_segment_problem(&class.name) {
                    return Err(DomainError::InvalidDescriptor(format!(
                        "class '{}' in group '{group}' {reason}",
                        class.name
                    )));
                }
            }
        }

        Ok(())
    }
}

/// One class to emit.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ClassDescriptor {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub properties: Vec<PropertySpec>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub methods: Vec<String>,
}

impl ClassDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: Vec::new(),
            methods: Vec::new(),
        }
    }

    pub fn with_property(mut self, property: PropertySpec) -> Self {
        self.properties.push(property);
        self
    }

    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.methods.push(method.into());
        self
    }
}

/// A class property and its declared type tag.
///
/// Deserializes from `"name"`, `"name:type"` or `{ "name": ..., "type": ... }`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawPropertySpec")]
pub struct PropertySpec {
    pub name: String,
    pub type_tag: Option<String>,
}

impl PropertySpec {
    pub fn new(name: impl Into<String>, type_tag: Option<&str>) -> Self {
        Self {
            name: name.into(),
            type_tag: type_tag.map(str::to_owned),
        }
    }

    /// Parse the inline form. Only the first two `:`-separated segments are
    /// significant.
    pub fn parse(raw: &str) -> Self {
        let mut segments = raw.split(TYPE_SEPARATOR);
        let name = segments.next().unwrap_or_default();
        Self::new(name, segments.next())
    }

    pub fn property_type(&self) -> PropertyType {
        PropertyType::from_tag(self.type_tag.as_deref())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPropertySpec {
    Inline(String),
    Structured {
        name: String,
        #[serde(default, rename = "type")]
        type_tag: Option<String>,
    },
}

impl From<RawPropertySpec> for PropertySpec {
    fn from(raw: RawPropertySpec) -> Self {
        match raw {
            RawPropertySpec::Inline(s) => Self::parse(&s),
            RawPropertySpec::Structured { name, type_tag } => Self { name, type_tag },
        }
    }
}

/// An explicit `null` reads the same as an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Why `segment` cannot be used as a single path component, if it can't.
fn path_segment_problem(segment: &str) -> Option<&'static str> {
    if segment.is_empty() {
        Some("must not be empty")
    } else if segment == "." || segment == ".." {
        Some("must not be '.' or '..'")
    } else if segment.contains(['/', '\\']) {
        Some("must not contain path separators")
    } else {
        None
    }
}

/// Style includes may be nested (`components/_card`), but every segment
/// must still be a plain name.
fn include_path_problem(include: &str) -> Option<&'static str> {
    if include.contains('\\') {
        return Some("must use '/' as separator");
    }
    if let Some(problem) = include.split('/').find_map(path_segment_problem) {
        return Some(problem);
    }
    if public_name(include) == STYLE_ROOT_NAME {
        return Some("is reserved for the aggregated style file");
    }
    None
}
