use std::io::{self, Write};

use optscan::{ParsedOption, Registry, ScanResult};

/// Write one line per outcome, then the remaining tokens.
pub fn write_report<W: Write>(out: &mut W, result: &ScanResult, quiet: bool) -> io::Result<()> {
    for outcome in &result.outcomes {
        match outcome {
            ParsedOption::Value(v) => {
                if quiet {
                    continue;
                }
                write!(out, "ok {}{}", v.kind.prefix(), v.name)?;
                if let Some(ref argument) = v.argument {
                    write!(out, " {:?}", argument)?;
                }
                writeln!(out)?;
            }
            ParsedOption::Error(e) => writeln!(out, "error: {}", e)?,
        }
    }

    if !result.remaining.is_empty() {
        write!(out, "remaining:")?;
        for token in &result.remaining {
            write!(out, " {:?}", token)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Echo the registered option table, one spec per line.
pub fn write_table<W: Write>(out: &mut W, registry: &Registry, dos_mode: bool) -> io::Result<()> {
    writeln!(
        out,
        "# {} option(s), {} syntax",
        registry.len(),
        if dos_mode { "DOS" } else { "GNU" }
    )?;
    for descriptor in registry.iter() {
        writeln!(out, "{}", descriptor)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use optscan::{OptionDescriptor, Options};

    fn render(options: &Options, args: &[&str], quiet: bool) -> String {
        let result = options.scan(args.iter().copied()).into_result();
        let mut buf = Vec::new();
        write_report(&mut buf, &result, quiet).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn sample_options() -> Options {
        Options::new()
            .option(OptionDescriptor::long("out").required())
            .option(OptionDescriptor::short('v'))
    }

    #[test]
    fn report_lines() {
        let text = render(
            &sample_options(),
            &["-v", "--out", "a b.txt", "-y", "--", "rest", "x"],
            false,
        );
        assert_eq!(
            text,
            "ok -v\n\
             ok --out \"a b.txt\"\n\
             error: Option \"-y\" is unknown.\n\
             remaining: \"rest\" \"x\"\n"
        );
    }

    #[test]
    fn quiet_report_keeps_errors() {
        let text = render(&sample_options(), &["-v", "-vx"], true);
        assert_eq!(
            text,
            "error: Extraneous argument \"x\" passed to option \"-v\".\n"
        );
    }

    #[test]
    fn empty_report() {
        assert_eq!(render(&Options::new(), &[], false), "");
    }

    #[test]
    fn table_listing() {
        let options = sample_options();
        let mut buf = Vec::new();
        write_table(&mut buf, options.registry(), true).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "# 2 option(s), DOS syntax\n--out=\n-v\n"
        );
    }
}
