//! GNU- and DOS-style command-line option scanning.
//!
//! Register options on an [`Options`] table, then scan a token sequence:
//!
//! ```
//! use optscan::{OptionDescriptor, OptionKind, Options};
//!
//! let mut options = Options::new();
//! options.register(OptionDescriptor::long("out").required());
//! options.register(OptionDescriptor::short('v'));
//!
//! let mut engine = options.scan(["-v", "--out", "file.txt", "--", "rest"]);
//! let result = engine.run();
//! assert!(!result.has_errors());
//! let out = result.value(OptionKind::Long, "out").unwrap();
//! assert_eq!(out.argument.as_deref(), Some("file.txt"));
//! assert_eq!(result.remaining, vec!["rest"]);
//! ```
//!
//! Malformed options never abort a scan: each one becomes a
//! [`ParsedOption::Error`] in the result and scanning carries on.
//!
//! Whether `/x` and `/name:value` are recognised is decided by the caller
//! through [`Options::dos_mode`]; nothing here inspects the host platform.

pub mod descriptor;
pub mod error;
pub mod outcome;
pub mod registry;
pub mod scanner;

pub use descriptor::{parse_table, read_table, ArgumentType, OptionDescriptor, OptionKind};
pub use error::{Error, ErrorKind, ParseError, Result};
pub use outcome::{ParsedOption, ParsedValue, ScanResult};
pub use registry::Registry;
pub use scanner::ScanEngine;

/// An option table plus the syntax convention to scan with.
#[derive(Debug, Clone, Default)]
pub struct Options {
    registry: Registry,
    dos_mode: bool,
}

impl Options {
    /// An empty table scanning GNU syntax only.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Options::set_dos_mode`].
    pub fn dos_mode(mut self, on: bool) -> Self {
        self.dos_mode = on;
        self
    }

    pub fn set_dos_mode(&mut self, on: bool) {
        self.dos_mode = on;
    }

    /// Whether scans created from this table recognise DOS syntax.
    pub fn is_dos_mode(&self) -> bool {
        self.dos_mode
    }

    /// Builder form of [`Options::register`].
    pub fn option(mut self, descriptor: OptionDescriptor) -> Self {
        self.register(descriptor);
        self
    }

    pub fn register(&mut self, descriptor: OptionDescriptor) {
        self.registry.register(descriptor);
    }

    pub fn register_all<I>(&mut self, descriptors: I)
    where
        I: IntoIterator<Item = OptionDescriptor>,
    {
        self.registry.register_all(descriptors);
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Bind `tokens` to a snapshot of the current table and DOS mode.
    ///
    /// Nothing is parsed until [`ScanEngine::run`] is called.
    pub fn scan<I, S>(&self, tokens: I) -> ScanEngine
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScanEngine::new(self.registry.clone(), tokens, self.dos_mode)
    }
}
