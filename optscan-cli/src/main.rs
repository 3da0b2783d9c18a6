mod arguments;
mod config;
mod error;
mod report;

use std::io::{self, Write};
use std::process;

use arguments::{Action, Cmdline};
use error::Result;

fn scan(cmdline: &Cmdline) -> Result<i32> {
    let env = std::env::var(config::DOS_MODE_ENV).ok();
    let dos_mode = config::resolve_dos_mode(cmdline.dos, env.as_deref())?;
    let options = arguments::load_options(cmdline, dos_mode)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if cmdline.verbose {
        report::write_table(&mut out, options.registry(), dos_mode)?;
    }

    let result = options.scan(cmdline.args.iter().cloned()).into_result();
    report::write_report(&mut out, &result, cmdline.quiet)?;
    out.flush()?;

    Ok(if result.has_errors() { 1 } else { 0 })
}

fn run() -> Result<i32> {
    match arguments::parse_args(std::env::args().skip(1))? {
        Action::Help => {
            print!("{}", arguments::USAGE);
            Ok(0)
        }
        Action::Version => {
            println!("optscan {}", env!("CARGO_PKG_VERSION"));
            Ok(0)
        }
        Action::Scan(cmdline) => scan(&cmdline),
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run() {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("optscan: {}", e);
            process::exit(2);
        }
    }
}
