//! Option descriptors and their compact text form.
//!
//! A spec string names one option the way it is written on a command line:
//! `--name` or `-x`, with a trailing `=` when the option requires an
//! argument. Tables are newline-separated lists of specs.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Which namespace an option lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionKind {
    /// Multi-character name (`--name`, DOS `/name:value`).
    Long,
    /// Single-character name (`-x`, DOS `/x`), bundleable.
    Short,
}

impl OptionKind {
    /// The GNU-style prefix used when rendering this kind of option.
    pub fn prefix(self) -> &'static str {
        match self {
            OptionKind::Long => "--",
            OptionKind::Short => "-",
        }
    }
}

/// Whether an option takes an argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ArgumentType {
    #[default]
    None,
    Required,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OptionDescriptor {
    name: String,
    kind: OptionKind,
    argument_type: ArgumentType,
}

impl OptionDescriptor {
    pub fn long(name: &str) -> Self {
        OptionDescriptor {
            name: name.to_string(),
            kind: OptionKind::Long,
            argument_type: ArgumentType::None,
        }
    }

    pub fn short(c: char) -> Self {
        OptionDescriptor {
            name: c.to_string(),
            kind: OptionKind::Short,
            argument_type: ArgumentType::None,
        }
    }

    pub fn argument_type(mut self, t: ArgumentType) -> Self {
        self.argument_type = t;
        self
    }

    /// Shorthand for `.argument_type(ArgumentType::Required)`.
    pub fn required(self) -> Self {
        self.argument_type(ArgumentType::Required)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> OptionKind {
        self.kind
    }

    pub fn arg_type(&self) -> ArgumentType {
        self.argument_type
    }

    pub fn takes_arg(&self) -> bool {
        self.argument_type == ArgumentType::Required
    }
}

impl fmt::Display for OptionDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.kind.prefix(), self.name)?;
        if self.takes_arg() {
            write!(f, "=")?;
        }
        Ok(())
    }
}

fn bad_spec(spec: &str, reason: &str) -> Error {
    Error::BadSpec {
        line: None,
        spec: spec.to_string(),
        reason: reason.to_string(),
    }
}

impl FromStr for OptionDescriptor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let spec = s.trim();
        if spec.is_empty() {
            return Err(bad_spec(s, "empty option spec"));
        }

        let (body, argument_type) = match spec.strip_suffix('=') {
            Some(body) => (body, ArgumentType::Required),
            None => (spec, ArgumentType::None),
        };

        if body.chars().any(char::is_whitespace) {
            return Err(bad_spec(s, "option names cannot contain whitespace"));
        }

        if let Some(name) = body.strip_prefix("--") {
            if name.is_empty() {
                return Err(bad_spec(s, "long option name is empty"));
            }
            if name.contains(['=', ':']) {
                return Err(bad_spec(s, "long option names cannot contain '=' or ':'"));
            }
            return Ok(OptionDescriptor::long(name).argument_type(argument_type));
        }

        if let Some(name) = body.strip_prefix('-') {
            let mut chars = name.chars();
            return match (chars.next(), chars.next()) {
                (Some(c), None) => Ok(OptionDescriptor::short(c).argument_type(argument_type)),
                (None, _) => Err(bad_spec(s, "short option name is empty")),
                (Some(_), Some(_)) => Err(bad_spec(
                    s,
                    "short option names are a single character",
                )),
            };
        }

        Err(bad_spec(s, "option spec must start with '-' or '--'"))
    }
}

/// Parse an option table: one spec per line.
///
/// Blank lines and lines starting with `#` are skipped. Errors carry the
/// 1-based line number of the offending line.
pub fn parse_table(text: &str) -> Result<Vec<OptionDescriptor>> {
    let mut descriptors = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let l = line.trim();
        if l.is_empty() || l.starts_with('#') {
            continue;
        }
        let descriptor = l.parse::<OptionDescriptor>().map_err(|e| match e {
            Error::BadSpec { spec, reason, .. } => Error::BadSpec {
                line: Some(idx + 1),
                spec,
                reason,
            },
            other => other,
        })?;
        descriptors.push(descriptor);
    }
    Ok(descriptors)
}

/// Read an option table file and parse it with [`parse_table`].
pub fn read_table(path: &Path) -> Result<Vec<OptionDescriptor>> {
    let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_table(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_long_flag() {
        let d: OptionDescriptor = "--verbose".parse().unwrap();
        assert_eq!(d, OptionDescriptor::long("verbose"));
        assert_eq!(d.kind(), OptionKind::Long);
        assert!(!d.takes_arg());
    }

    #[test]
    fn parse_long_with_argument() {
        let d: OptionDescriptor = "  --out=  ".parse().unwrap();
        assert_eq!(d.name(), "out");
        assert_eq!(d.arg_type(), ArgumentType::Required);
    }

    #[test]
    fn parse_short_specs() {
        let d: OptionDescriptor = "-x".parse().unwrap();
        assert_eq!(d, OptionDescriptor::short('x'));
        let d: OptionDescriptor = "-o=".parse().unwrap();
        assert_eq!(d, OptionDescriptor::short('o').required());
    }

    #[test]
    fn parse_short_multibyte() {
        let d: OptionDescriptor = "-é".parse().unwrap();
        assert_eq!(d.name(), "é");
        assert_eq!(d.kind(), OptionKind::Short);
    }

    #[test]
    fn parse_rejects_bad_specs() {
        for spec in ["", "   ", "out", "--", "--=", "-", "-xy", "--a:b", "--a=b=", "--a b"] {
            assert!(
                spec.parse::<OptionDescriptor>().is_err(),
                "spec {:?} should be rejected",
                spec
            );
        }
    }

    #[test]
    fn display_matches_spec_form() {
        assert_eq!(OptionDescriptor::long("out").required().to_string(), "--out=");
        assert_eq!(OptionDescriptor::short('v').to_string(), "-v");
    }

    #[test]
    fn table_skips_comments_and_blanks() {
        let table = "# connection\n--host=\n\n  -v\n# trailing comment\n";
        let ds = parse_table(table).unwrap();
        assert_eq!(
            ds,
            vec![
                OptionDescriptor::long("host").required(),
                OptionDescriptor::short('v'),
            ]
        );
    }

    #[test]
    fn table_error_reports_line() {
        let err = parse_table("--ok\n\nbogus\n").unwrap_err();
        match err {
            Error::BadSpec { line, spec, .. } => {
                assert_eq!(line, Some(3));
                assert_eq!(spec, "bogus");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn read_table_missing_file() {
        let err = read_table(Path::new("/nonexistent/optscan/table")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
