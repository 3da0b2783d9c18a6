//! Decide which syntax convention the scan of the user's ARGs uses.
//!
//! Precedence: `--dos`/`--gnu` on the command line, then the
//! `OPTSCAN_DOS_MODE` environment variable, then the host platform.

use crate::error::{CliError, Result};

pub const DOS_MODE_ENV: &str = "OPTSCAN_DOS_MODE";

fn parse_switch(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

pub fn host_default() -> bool {
    cfg!(windows)
}

/// `flag` is the last of `--dos`/`--gnu` given, `env` the raw variable.
pub fn resolve_dos_mode(flag: Option<bool>, env: Option<&str>) -> Result<bool> {
    if let Some(on) = flag {
        return Ok(on);
    }
    match env {
        Some(value) => parse_switch(value).ok_or_else(|| CliError::Config {
            var: DOS_MODE_ENV,
            value: value.to_string(),
        }),
        None => Ok(host_default()),
    }
}
