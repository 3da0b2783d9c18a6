use std::io;
use std::path::PathBuf;

use crate::descriptor::OptionKind;

/// Failures outside the scan itself: reading and understanding option specs.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{}bad option spec {:?}: {}", line_prefix(.line), .spec, .reason)]
    BadSpec {
        line: Option<usize>,
        spec: String,
        reason: String,
    },

    #[error("cannot read option table {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

fn line_prefix(line: &Option<usize>) -> String {
    line.map(|n| format!("line {}: ", n)).unwrap_or_default()
}

pub type Result<T> = std::result::Result<T, Error>;

/// Discriminant of a [`ParseError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Unknown,
    Missing,
    Extraneous,
}

/// A malformed option occurrence, reported as a scan outcome.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Option \"{}{}\" is unknown.", .kind.prefix(), .name)]
    Unknown { name: String, kind: OptionKind },

    #[error("Option \"{}{}\" expects an argument.", .kind.prefix(), .name)]
    Missing { name: String, kind: OptionKind },

    #[error(
        "Extraneous argument \"{}\" passed to option \"{}{}\".",
        .argument,
        .kind.prefix(),
        .name
    )]
    Extraneous {
        name: String,
        kind: OptionKind,
        argument: String,
    },
}

impl ParseError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ParseError::Unknown { .. } => ErrorKind::Unknown,
            ParseError::Missing { .. } => ErrorKind::Missing,
            ParseError::Extraneous { .. } => ErrorKind::Extraneous,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            ParseError::Unknown { name, .. }
            | ParseError::Missing { name, .. }
            | ParseError::Extraneous { name, .. } => name,
        }
    }

    pub fn option_kind(&self) -> OptionKind {
        match self {
            ParseError::Unknown { kind, .. }
            | ParseError::Missing { kind, .. }
            | ParseError::Extraneous { kind, .. } => *kind,
        }
    }

    /// The rejected argument text, for `Extraneous` only.
    pub fn argument(&self) -> Option<&str> {
        match self {
            ParseError::Extraneous { argument, .. } => Some(argument),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_messages() {
        let long = ParseError::Unknown {
            name: "foo".into(),
            kind: OptionKind::Long,
        };
        assert_eq!(long.to_string(), "Option \"--foo\" is unknown.");
        let short = ParseError::Unknown {
            name: "x".into(),
            kind: OptionKind::Short,
        };
        assert_eq!(short.to_string(), "Option \"-x\" is unknown.");
    }

    #[test]
    fn missing_message() {
        let e = ParseError::Missing {
            name: "out".into(),
            kind: OptionKind::Long,
        };
        assert_eq!(e.to_string(), "Option \"--out\" expects an argument.");
        assert_eq!(e.kind(), ErrorKind::Missing);
        assert_eq!(e.argument(), None);
    }

    #[test]
    fn extraneous_message() {
        let e = ParseError::Extraneous {
            name: "x".into(),
            kind: OptionKind::Short,
            argument: "123".into(),
        };
        assert_eq!(
            e.to_string(),
            "Extraneous argument \"123\" passed to option \"-x\"."
        );
        assert_eq!(e.kind(), ErrorKind::Extraneous);
        assert_eq!(e.name(), "x");
        assert_eq!(e.option_kind(), OptionKind::Short);
        assert_eq!(e.argument(), Some("123"));
    }

    #[test]
    fn bad_spec_display() {
        let e = Error::BadSpec {
            line: Some(4),
            spec: "x".into(),
            reason: "option spec must start with '-' or '--'".into(),
        };
        assert_eq!(
            e.to_string(),
            "line 4: bad option spec \"x\": option spec must start with '-' or '--'"
        );
        let e = Error::BadSpec {
            line: None,
            spec: "-xy".into(),
            reason: "short option names are a single character".into(),
        };
        assert_eq!(
            e.to_string(),
            "bad option spec \"-xy\": short option names are a single character"
        );
    }
}
