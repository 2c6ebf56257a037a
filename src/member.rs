//! Reflective member descriptions used as lookup queries.

/// Whether a callable is an instance/static method or a constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallableKind {
    Method,
    Constructor,
}

/// One method or constructor, identified by its declaring type, simple
/// name (methods only) and ordered parameter type names.
///
/// Parameter type names are the erased reflective names, e.g.
/// `java.lang.String`, `int`, `java.util.Map`, `byte[]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Callable {
    pub kind: CallableKind,
    pub declaring_type: String,
    pub name: String,
    pub parameter_types: Vec<String>,
}

impl Callable {
    pub fn method(
        declaring_type: impl Into<String>,
        name: impl Into<String>,
        parameter_types: Vec<String>,
    ) -> Self {
        Self {
            kind: CallableKind::Method,
            declaring_type: declaring_type.into(),
            name: name.into(),
            parameter_types,
        }
    }

    pub fn constructor(declaring_type: impl Into<String>, parameter_types: Vec<String>) -> Self {
        Self {
            kind: CallableKind::Constructor,
            declaring_type: declaring_type.into(),
            name: String::new(),
            parameter_types,
        }
    }

    pub fn arity(&self) -> usize {
        self.parameter_types.len()
    }

    /// Human-readable form used in error messages and cache keys:
    /// `com.example.Foo#process(java.lang.String,int)`.
    pub fn describe(&self) -> String {
        let name = match self.kind {
            CallableKind::Method => self.name.as_str(),
            CallableKind::Constructor => "<init>",
        };
        format!(
            "{}#{}({})",
            self.declaring_type,
            name,
            self.parameter_types.join(",")
        )
    }

    /// Parse a member spec as accepted on the command line:
    /// `com.example.Foo#process(java.lang.String,int)` for methods,
    /// `com.example.Foo#<init>(int)` for constructors.
    pub fn parse_spec(spec: &str) -> std::result::Result<Self, String> {
        let (type_name, rest) = spec
            .split_once('#')
            .ok_or_else(|| format!("Invalid member spec (missing '#'): {}", spec))?;
        if type_name.is_empty() {
            return Err(format!("Invalid member spec (empty type name): {}", spec));
        }

        let open = rest
            .find('(')
            .ok_or_else(|| format!("Invalid member spec (missing '('): {}", spec))?;
        if !rest.ends_with(')') {
            return Err(format!("Invalid member spec (missing ')'): {}", spec));
        }
        let name = &rest[..open];
        let args = &rest[open + 1..rest.len() - 1];

        let parameter_types = split_type_list(args);

        if name.is_empty() || name == "<init>" {
            Ok(Callable::constructor(type_name, parameter_types))
        } else {
            Ok(Callable::method(type_name, name, parameter_types))
        }
    }
}

/// The part of a type name after the last package separator.
/// `com.example.Foo` -> `Foo`; binary nested names split on `$` too.
pub fn simple_type_name(type_name: &str) -> &str {
    type_name
        .rsplit(['.', '$'])
        .next()
        .unwrap_or(type_name)
}

/// Split a comma-separated type list, keeping commas nested inside
/// generic brackets with their type.
fn split_type_list(args: &str) -> Vec<String> {
    let args = args.trim();
    if args.is_empty() {
        return Vec::new();
    }

    let mut out = Vec::new();
    let mut depth = 0usize;
    let mut current = String::new();
    for c in args.chars() {
        match c {
            '<' => {
                depth += 1;
                current.push(c);
            }
            '>' => {
                depth = depth.saturating_sub(1);
                current.push(c);
            }
            ',' if depth == 0 => {
                out.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(c),
        }
    }
    out.push(current.trim().to_string());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_method_spec() {
        let callable =
            Callable::parse_spec("com.example.Foo#process(java.lang.String,int)").unwrap();
        assert_eq!(callable.kind, CallableKind::Method);
        assert_eq!(callable.declaring_type, "com.example.Foo");
        assert_eq!(callable.name, "process");
        assert_eq!(callable.parameter_types, vec!["java.lang.String", "int"]);
    }

    #[test]
    fn test_parse_constructor_spec() {
        let callable = Callable::parse_spec("com.example.Foo#<init>(int)").unwrap();
        assert_eq!(callable.kind, CallableKind::Constructor);
        assert_eq!(callable.name, "");
        assert_eq!(callable.parameter_types, vec!["int"]);
    }

    #[test]
    fn test_parse_zero_arg_spec() {
        let callable = Callable::parse_spec("com.example.Foo#close()").unwrap();
        assert!(callable.parameter_types.is_empty());
    }

    #[test]
    fn test_parse_spec_keeps_generic_commas_together() {
        let callable =
            Callable::parse_spec("com.example.Foo#put(java.util.Map<java.lang.String,java.lang.Integer>,int)")
                .unwrap();
        assert_eq!(callable.parameter_types.len(), 2);
        assert_eq!(
            callable.parameter_types[0],
            "java.util.Map<java.lang.String,java.lang.Integer>"
        );
    }

    #[test]
    fn test_parse_spec_rejects_malformed() {
        assert!(Callable::parse_spec("com.example.Foo.process").is_err());
        assert!(Callable::parse_spec("#process(int)").is_err());
        assert!(Callable::parse_spec("com.example.Foo#process(int").is_err());
    }

    #[test]
    fn test_describe_round_trips_spec() {
        let spec = "com.example.Foo#process(java.lang.String,int)";
        let callable = Callable::parse_spec(spec).unwrap();
        assert_eq!(callable.describe(), spec);
    }

    #[test]
    fn test_simple_type_name() {
        assert_eq!(simple_type_name("com.example.Foo"), "Foo");
        assert_eq!(simple_type_name("Foo"), "Foo");
        assert_eq!(simple_type_name("java.util.Map$Entry"), "Entry");
    }
}
