use std::path::PathBuf;

use optscan::{OptionDescriptor, OptionKind, Options, ParsedOption, ParsedValue};

use crate::error::{CliError, Result};

pub const USAGE: &str = r#"Usage: optscan [OPTION]... [--] [ARG]...
Scan ARGs against an option table and report each outcome.

Option table:
  -o, --option SPEC      Register an option.  Can be repeated.
  -t, --table FILE       Register every option listed in FILE.

      SPEC is --name or -x, with a trailing '=' when the option
      requires an argument: --out=, -o=.  FILE holds one SPEC per
      line; blank lines and lines starting with '#' are ignored.

Syntax:
  -d, --dos              Also accept /x, /x:value and /name:value.
  -g, --gnu              Accept only -x, --name and --name=value.

Output:
  -q, --quiet            Only print errors and the remaining ARGs.
  -v, --verbose          Print the option table before the outcomes.
  -H, --help             This help.
      --version          Print the version.

Put '--' before ARGs that start with '-'.

Environment variables:
  OPTSCAN_DOS_MODE       1|true|yes|on or 0|false|no|off.  Used when
                         neither --dos nor --gnu is given.
  RUST_LOG               Log filter, e.g. RUST_LOG=optscan=trace.

Exit status: 0 if every option scanned cleanly, 1 if any option was
unknown or had a missing or extraneous argument, 2 on usage errors.
"#;

/// Where an option table entry came from, in command-line order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Spec(OptionDescriptor),
    Table(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cmdline {
    pub sources: Vec<Source>,
    /// Last of `--dos` (true) / `--gnu` (false), if any.
    pub dos: Option<bool>,
    pub quiet: bool,
    pub verbose: bool,
    pub args: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Help,
    Version,
    Scan(Cmdline),
}

// (short name, long name, takes an argument)
const FLAGS: &[(Option<char>, &str, bool)] = &[
    (Some('o'), "option", true),
    (Some('t'), "table", true),
    (Some('d'), "dos", false),
    (Some('g'), "gnu", false),
    (Some('q'), "quiet", false),
    (Some('v'), "verbose", false),
    (Some('H'), "help", false),
    (None, "version", false),
];

fn build_options() -> Options {
    let mut options = Options::new();
    for &(short, long, takes_arg) in FLAGS {
        let mut descriptors = vec![OptionDescriptor::long(long)];
        if let Some(c) = short {
            descriptors.push(OptionDescriptor::short(c));
        }
        for d in descriptors {
            options.register(if takes_arg { d.required() } else { d });
        }
    }
    options
}

/// Map a parsed flag to its long name.
fn canonical(value: &ParsedValue) -> &str {
    match value.kind {
        OptionKind::Long => value.name.as_str(),
        OptionKind::Short => FLAGS
            .iter()
            .find(|(short, _, _)| short.map(String::from).as_deref() == Some(value.name.as_str()))
            .map(|(_, long, _)| *long)
            .unwrap_or(value.name.as_str()),
    }
}

/// Parse optscan's own command line (without the program name).
///
/// The command line is always read with GNU syntax so that `/`-prefixed
/// paths pass through untouched.
pub fn parse_args<I, S>(argv: I) -> Result<Action>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let result = build_options().scan(argv).into_result();

    let mut cmdline = Cmdline {
        sources: Vec::new(),
        dos: None,
        quiet: false,
        verbose: false,
        args: result.remaining.clone(),
    };
    let mut first_error = None;
    let mut version = false;

    for outcome in &result.outcomes {
        let value = match outcome {
            ParsedOption::Value(value) => value,
            ParsedOption::Error(e) => {
                if first_error.is_none() {
                    first_error = Some(e.clone());
                }
                continue;
            }
        };
        let argument = value.argument.clone().unwrap_or_default();
        match canonical(value) {
            "option" => cmdline.sources.push(Source::Spec(argument.parse()?)),
            "table" => cmdline.sources.push(Source::Table(PathBuf::from(argument))),
            "dos" => cmdline.dos = Some(true),
            "gnu" => cmdline.dos = Some(false),
            "quiet" => cmdline.quiet = true,
            "verbose" => cmdline.verbose = true,
            "help" => return Ok(Action::Help),
            "version" => version = true,
            other => log::warn!("unhandled option {:?}", other),
        }
    }

    if let Some(e) = first_error {
        return Err(CliError::Usage(e));
    }
    if version {
        return Ok(Action::Version);
    }
    Ok(Action::Scan(cmdline))
}

/// Build the option table the user asked for, in command-line order.
pub fn load_options(cmdline: &Cmdline, dos_mode: bool) -> Result<Options> {
    let mut options = Options::new().dos_mode(dos_mode);
    for source in &cmdline.sources {
        match source {
            Source::Spec(d) => options.register(d.clone()),
            Source::Table(path) => {
                let table = optscan::read_table(path)?;
                log::debug!("{}: {} option(s)", path.display(), table.len());
                options.register_all(table);
            }
        }
    }
    Ok(options)
}
