//! reltrack CLI: line-oriented relation tracker.
//!
//! Reads commands from stdin (or `--input FILE`), one per line, executes
//! each against a single session, and writes every `report` line to stdout.
//! Exits with success after `end`, or at end of input. Malformed lines are
//! dropped without output; logs go to stderr so stdout stays a pure report
//! channel.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};

use anyhow::Context;
use clap::{Arg, Command as ClapCommand};
use tracing::trace;
use tracing_subscriber::EnvFilter;

use reltrack_executor::{parse_line, render_report, Output, Session};

fn main() -> anyhow::Result<()> {
    let matches = build_cli().get_matches();
    init_tracing(matches.get_one::<String>("log").map(String::as_str));

    let mut session = Session::new();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match matches.get_one::<String>("input") {
        Some(path) => {
            let file =
                File::open(path).with_context(|| format!("failed to open input file '{path}'"))?;
            run(BufReader::new(file), &mut session, &mut out)?;
        }
        None => {
            let stdin = io::stdin();
            run(stdin.lock(), &mut session, &mut out)?;
        }
    }

    out.flush().context("failed to flush stdout")?;
    Ok(())
}

fn build_cli() -> ClapCommand {
    ClapCommand::new("reltrack")
        .about("In-memory relation tracker with per-type top-destination reports")
        .arg(
            Arg::new("input")
                .long("input")
                .short('i')
                .value_name("FILE")
                .help("Read commands from FILE instead of stdin"),
        )
        .arg(
            Arg::new("log")
                .long("log")
                .value_name("FILTER")
                .help("Tracing filter, e.g. reltrack_engine=debug"),
        )
}

fn init_tracing(filter: Option<&str>) {
    let filter = match filter {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::from_default_env(),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(
    mut reader: impl BufRead,
    session: &mut Session,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let mut buf = Vec::new();
    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .context("failed to read input line")?;
        if read == 0 {
            break;
        }
        // Well-formed commands are ASCII; a line that is not valid UTF-8 is
        // dropped like any other malformed line.
        let Ok(line) = std::str::from_utf8(&buf) else {
            trace!("ignoring line with invalid encoding");
            continue;
        };
        let command = match parse_line(line) {
            Ok(command) => command,
            Err(err) => {
                trace!(%err, line = %line.trim_end(), "ignoring malformed line");
                continue;
            }
        };
        match session.execute(command) {
            Output::Unit => {}
            Output::Report(entries) => {
                out.write_all(render_report(&entries).as_bytes())
                    .context("failed to write report")?;
            }
            Output::Shutdown => break,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_emits_one_line_per_report() {
        let input = b"addent \"alice\"\naddent \"bob\"\naddrel \"alice\" \"bob\" \"follows\"\nreport\nend\n";
        let mut session = Session::new();
        let mut out = Vec::new();
        run(&input[..], &mut session, &mut out).unwrap();
        assert_eq!(out, b"\"follows\" \"bob\" 1; \n");
        assert!(session.is_finished());
    }

    #[test]
    fn test_run_stops_at_end_command() {
        let input = b"end\nreport\n";
        let mut session = Session::new();
        let mut out = Vec::new();
        run(&input[..], &mut session, &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_malformed_lines_are_dropped() {
        let input = b"addent \"a\"\nbogus line\nreport\n";
        let mut session = Session::new();
        let mut out = Vec::new();
        run(&input[..], &mut session, &mut out).unwrap();
        assert_eq!(out, b"none\n");
    }

    #[test]
    fn test_invalid_encoding_lines_are_dropped() {
        let input: &[u8] = b"addent \"a\"\n\xff\xfe bogus\naddent \"b\"\naddrel \"a\" \"b\" \"r\"\nreport\n";
        let mut session = Session::new();
        let mut out = Vec::new();
        run(input, &mut session, &mut out).unwrap();
        assert_eq!(out, b"\"r\" \"b\" 1; \n");
    }
}
