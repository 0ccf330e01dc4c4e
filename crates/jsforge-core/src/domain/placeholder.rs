//! Literal placeholder substitution.
//!
//! Templates carry tokens of the form `[_NAME_]`. Substitution is a single
//! left-to-right pass: replacement text is copied to the output and never
//! scanned again, so a value that happens to contain a token stays as-is.
//! Unknown tokens are left untouched.

use std::fmt;

const TOKEN_OPEN: &str = "[_";

/// Every token the generator knows how to fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    ClassName,
    Props,
    Methods,
    ProjectName,
    Author,
    Imports,
    Domain,
    Includes,
}

impl Placeholder {
    pub const fn token(self) -> &'static str {
        match self {
            Self::ClassName => "[_CLASSNAME_]",
            Self::Props => "[_PROPS_]",
            Self::Methods => "[_METHODS_]",
            Self::ProjectName => "[_PROJECT_NAME_]",
            Self::Author => "[_AUTHOR_]",
            Self::Imports => "[_IMPORTS_]",
            Self::Domain => "[_DOMAIN_]",
            Self::Includes => "[_INCLUDES_]",
        }
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Replace every bound token in `template` with its value.
pub fn substitute(template: &str, bindings: &[(Placeholder, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find(TOKEN_OPEN) {
        out.push_str(&rest[..start]);
        let candidate = &rest[start..];

        match bindings
            .iter()
            .find(|(placeholder, _)| candidate.starts_with(placeholder.token()))
        {
            Some((placeholder, value)) => {
                out.push_str(value);
                rest = &candidate[placeholder.token().len()..];
            }
            None => {
                out.push_str(TOKEN_OPEN);
                rest = &candidate[TOKEN_OPEN.len()..];
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_all_occurrences() {
        let out = substitute(
            "[_PROJECT_NAME_] by [_AUTHOR_] ([_PROJECT_NAME_])",
            &[(Placeholder::ProjectName, "Demo"), (Placeholder::Author, "A")],
        );
        assert_eq!(out, "Demo by A (Demo)");
    }

    #[test]
    fn unbound_tokens_are_left_alone() {
        let out = substitute(
            "proxy: '[_DOMAIN_]', [_OTHER_] [_",
            &[(Placeholder::Author, "x")],
        );
        assert_eq!(out, "proxy: '[_DOMAIN_]', [_OTHER_] [_");
    }

    #[test]
    fn replacement_values_are_not_rescanned() {
        let out = substitute(
            "class [_CLASSNAME_] / [_AUTHOR_]",
            &[
                (Placeholder::ClassName, "[_AUTHOR_]"),
                (Placeholder::Author, "Ann"),
            ],
        );
        assert_eq!(out, "class [_AUTHOR_] / Ann");
    }

    #[test]
    fn binding_order_does_not_matter() {
        let template = "[_CLASSNAME_]:[_METHODS_]:[_PROPS_]";
        let a = substitute(
            template,
            &[
                (Placeholder::ClassName, "C"),
                (Placeholder::Methods, "M"),
                (Placeholder::Props, "P"),
            ],
        );
        let b = substitute(
            template,
            &[
                (Placeholder::Props, "P"),
                (Placeholder::ClassName, "C"),
                (Placeholder::Methods, "M"),
            ],
        );
        assert_eq!(a, "C:M:P");
        assert_eq!(a, b);
    }

    #[test]
    fn empty_value_removes_token() {
        assert_eq!(
            substitute("a[_INCLUDES_]b", &[(Placeholder::Includes, "")]),
            "ab"
        );
    }

    #[test]
    fn non_ascii_text_survives() {
        assert_eq!(
            substitute("é[_AUTHOR_]ü", &[(Placeholder::Author, "Åsa")]),
            "éÅsaü"
        );
    }
}
