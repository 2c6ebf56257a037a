//! Mapping fully-qualified type names onto javadoc page paths.

use crate::error::{JavadocError, Result};

/// Relative path of the documentation page for a type:
/// `com.example.Foo` -> `com/example/Foo.html`.
///
/// Array types resolve through their component type, with the `[]`
/// marker kept ahead of the suffix: `com.example.Foo[]` ->
/// `com/example/Foo[].html`.
///
/// Nested types are rejected. Javadoc publishes `Outer.Inner` pages, but
/// the binary name `Outer$Inner` cannot be split back into package and
/// type segments without guessing, so resolution fails instead.
pub fn doc_path(type_name: &str) -> Result<String> {
    Ok(format!("{}.html", doc_stem(type_name)?))
}

fn doc_stem(type_name: &str) -> Result<String> {
    if let Some(component) = type_name.strip_suffix("[]") {
        return Ok(format!("{}[]", doc_stem(component)?));
    }
    if type_name.contains('$') {
        return Err(JavadocError::UnsupportedType {
            type_name: type_name.to_string(),
        });
    }
    Ok(type_name.replace('.', "/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_type() {
        assert_eq!(doc_path("com.example.Foo").unwrap(), "com/example/Foo.html");
    }

    #[test]
    fn test_default_package_type() {
        assert_eq!(doc_path("Foo").unwrap(), "Foo.html");
    }

    #[test]
    fn test_array_type_resolves_component_first() {
        assert_eq!(
            doc_path("com.example.Foo[]").unwrap(),
            "com/example/Foo[].html"
        );
        assert_eq!(doc_path("int[][]").unwrap(), "int[][].html");
    }

    #[test]
    fn test_nested_type_fails() {
        let err = doc_path("java.util.Map$Entry").unwrap_err();
        assert!(matches!(err, JavadocError::UnsupportedType { .. }));
    }

    #[test]
    fn test_nested_array_type_fails() {
        assert!(doc_path("java.util.Map$Entry[]").is_err());
    }
}
