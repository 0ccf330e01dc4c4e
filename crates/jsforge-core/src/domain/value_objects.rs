//! Value objects: property type tags and their default initializers.

use std::fmt;

/// Declared type of a class property.
///
/// Closed set of recognized tags plus an explicit fallback. Any tag outside
/// the set (including a missing one) is [`PropertyType::Untyped`]; this is a
/// fallback, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PropertyType {
    String,
    Object,
    Array,
    Boolean,
    #[default]
    Untyped,
}

impl PropertyType {
    /// Map a raw type tag to a property type. Matching is exact.
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag {
            Some("string") => Self::String,
            Some("object") => Self::Object,
            Some("array") => Self::Array,
            Some("boolean") => Self::Boolean,
            _ => Self::Untyped,
        }
    }

    /// Literal expression used to initialize a property of this type.
    pub const fn default_literal(self) -> &'static str {
        match self {
            Self::String => "''",
            Self::Object => "{}",
            Self::Array => "[]",
            Self::Boolean => "false",
            Self::Untyped => "null",
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Object => "object",
            Self::Array => "array",
            Self::Boolean => "boolean",
            Self::Untyped => "untyped",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolves a property's type tag to its initializer literal.
///
/// Total and pure: every input yields a literal.
pub struct DefaultValueResolver;

impl DefaultValueResolver {
    pub fn resolve(tag: Option<&str>) -> &'static str {
        PropertyType::from_tag(tag).default_literal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tags_resolve_to_their_literals() {
        assert_eq!(DefaultValueResolver::resolve(Some("string")), "''");
        assert_eq!(DefaultValueResolver::resolve(Some("object")), "{}");
        assert_eq!(DefaultValueResolver::resolve(Some("array")), "[]");
        assert_eq!(DefaultValueResolver::resolve(Some("boolean")), "false");
    }

    #[test]
    fn unknown_and_missing_tags_fall_back_to_null() {
        assert_eq!(DefaultValueResolver::resolve(None), "null");
        assert_eq!(DefaultValueResolver::resolve(Some("number")), "null");
        assert_eq!(DefaultValueResolver::resolve(Some("")), "null");
        // Case-sensitive on purpose.
        assert_eq!(DefaultValueResolver::resolve(Some("String")), "null");
    }

    #[test]
    fn from_tag_is_exact() {
        assert_eq!(PropertyType::from_tag(Some("array")), PropertyType::Array);
        assert_eq!(PropertyType::from_tag(Some(" array")), PropertyType::Untyped);
        assert_eq!(PropertyType::default(), PropertyType::Untyped);
    }

    #[test]
    fn display_uses_tag_name() {
        assert_eq!(PropertyType::Boolean.to_string(), "boolean");
        assert_eq!(PropertyType::Untyped.to_string(), "untyped");
    }
}
