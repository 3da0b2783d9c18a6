use crate::descriptor::{ArgumentType, OptionKind};
use crate::error::ParseError;

/// An option occurrence that matched its descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedValue {
    pub name: String,
    pub kind: OptionKind,
    pub argument_type: ArgumentType,
    /// Inline (`--out=x`, `-ox`, `/o:x`) or next-token argument.
    pub argument: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedOption {
    Value(ParsedValue),
    Error(ParseError),
}

impl ParsedOption {
    pub fn is_error(&self) -> bool {
        matches!(self, ParsedOption::Error(_))
    }

    pub fn as_value(&self) -> Option<&ParsedValue> {
        match self {
            ParsedOption::Value(v) => Some(v),
            ParsedOption::Error(_) => None,
        }
    }

    pub fn as_error(&self) -> Option<&ParseError> {
        match self {
            ParsedOption::Value(_) => None,
            ParsedOption::Error(e) => Some(e),
        }
    }
}

impl From<ParsedValue> for ParsedOption {
    fn from(v: ParsedValue) -> Self {
        ParsedOption::Value(v)
    }
}

impl From<ParseError> for ParsedOption {
    fn from(e: ParseError) -> Self {
        ParsedOption::Error(e)
    }
}

/// Everything one scan produced.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScanResult {
    /// Outcomes in the order the options appeared on the command line.
    pub outcomes: Vec<ParsedOption>,
    /// Tokens from the final cursor position to the end, verbatim.
    pub remaining: Vec<String>,
}

impl ScanResult {
    pub fn values(&self) -> impl Iterator<Item = &ParsedValue> + '_ {
        self.outcomes.iter().filter_map(ParsedOption::as_value)
    }

    pub fn errors(&self) -> impl Iterator<Item = &ParseError> + '_ {
        self.outcomes.iter().filter_map(ParsedOption::as_error)
    }

    pub fn has_errors(&self) -> bool {
        self.outcomes.iter().any(ParsedOption::is_error)
    }

    /// The last successful occurrence of an option.
    pub fn value(&self, kind: OptionKind, name: &str) -> Option<&ParsedValue> {
        self.values()
            .filter(|v| v.kind == kind && v.name == name)
            .last()
    }

    pub fn is_present(&self, kind: OptionKind, name: &str) -> bool {
        self.value(kind, name).is_some()
    }
}
