use clap::Parser;
use jsniff::cli::{Cli, OutputFormat};
use jsniff::error::{Result, SniffError};
use jsniff::input::{read_records, InputFormat, Record};
use jsniff::render::{render_jsonl, Report, ReportRow, TableRenderer};
use jsniff::sniff::ValueKind;
use std::io::{self, BufReader};

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    // Check for stdin without input
    if cli.file.is_none() && atty::is(atty::Stream::Stdin) {
        eprintln!("Usage: jsniff [OPTIONS] [FILE]");
        eprintln!("Try 'jsniff --help' for more information.");
        std::process::exit(1);
    }

    let records = read_input(&cli)?;
    let report = build_report(&records, &cli)?;

    if cli.summary {
        let renderer = TableRenderer::new(cli.style);
        let summary = report.summary();
        match cli.output {
            OutputFormat::Table => print_nonempty(renderer.render_summary(&summary)),
            OutputFormat::Jsonl => {
                println!("{}", serde_json::to_string(&summary)?);
            }
        }
        return Ok(());
    }

    match cli.output {
        OutputFormat::Table => print_nonempty(TableRenderer::new(cli.style).render(&report)),
        OutputFormat::Jsonl => {
            print_nonempty(render_jsonl(&report)?);
        }
    }

    Ok(())
}

fn read_input(cli: &Cli) -> Result<Vec<Record>> {
    let format = cli.lines.then_some(InputFormat::JsonLines);
    if let Some(ref path) = cli.file {
        let file = std::fs::File::open(path)?;
        read_records(BufReader::new(file), format)
    } else {
        let stdin = io::stdin();
        read_records(BufReader::new(stdin.lock()), format)
    }
}

fn build_report(records: &[Record], cli: &Cli) -> Result<Report> {
    let strict = cli.is_strict();
    // Asking for unknown values by name reports them instead of rejecting them
    let keep_unknown = cli
        .kind
        .as_ref()
        .is_some_and(|kinds| kinds.contains(&ValueKind::Unknown));
    let mut report = Report::new();

    for record in records {
        let row = ReportRow::from_record(record);
        log::trace!("record {}: {}", row.record, row.kind);

        if row.kind == ValueKind::Unknown && !keep_unknown {
            if strict {
                return Err(SniffError::Unrecognized {
                    record: record.number,
                });
            }
            eprintln!(
                "jsniff: warning: record {}: unrecognized JSON value, skipping",
                record.number
            );
            continue;
        }

        if cli.wants(row.kind) {
            report.push(row);
        }
    }

    Ok(report)
}

fn print_nonempty(output: String) {
    if !output.is_empty() {
        println!("{}", output);
    }
}
