use std::io;

use optscan::ParseError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}\nTry 'optscan --help' for more information.")]
    Usage(#[from] ParseError),

    #[error(transparent)]
    Table(#[from] optscan::Error),

    #[error("invalid {var} value {value:?}: expected 1, true, yes, on, 0, false, no or off")]
    Config { var: &'static str, value: String },

    #[error("cannot write report: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, CliError>;
