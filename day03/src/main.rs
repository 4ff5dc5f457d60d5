// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! Crossed wires: find the crossing closest to the central port, and the one
//! both wires reach in the fewest combined steps.

mod geom;
mod path;

use ariadne::{Color, Fmt, Label, Report, ReportKind, Source};
use chumsky::error::{Rich, RichPattern};
use clap::Parser;
use geom::{Wire, crossings};
use itertools::Itertools;
use path::parse_path;
use std::fs::read_to_string;
use std::path::PathBuf;
use std::process::ExitCode;

const VERSION: &str = concat!(env!("CARGO_CRATE_NAME"), '-', env!("CARGO_PKG_VERSION"));

#[derive(Parser)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_version = VERSION)]
#[command(about = "Crossed wires", long_about = None)]
struct Args {
    #[arg(help = "File containing the two wire paths, one per line")]
    input: PathBuf,
}

fn report_path_error(err: Rich<'_, char>, file: &str, source: &str, line_offset: usize) {
    use std::fmt::Write;

    let span = err.span().into_range();
    let span = (line_offset + span.start)..(line_offset + span.end);

    let mut builder = Report::build(ReportKind::Error, (file, span.clone()))
        .with_message(format!("Failed to parse {}", file.fg(Color::Red)));

    if let Some(found) = err.found() {
        builder = builder.with_label(
            Label::new((file, span))
                .with_message(format!(
                    "Found token \'{}\'",
                    found.escape_default().fg(Color::Cyan)
                ))
                .with_color(Color::Yellow),
        );
    } else {
        builder = builder.with_label(Label::new((file, span)).with_color(Color::Yellow));
    }

    let mut expected: Vec<_> = err.expected().collect();
    // no need to explicitly mention whitespace
    expected.retain(|pat| !matches!(pat, RichPattern::Label(s) if *s == "inline whitespace"));

    // make sure that "something else" is the last listed entry
    expected.sort_unstable_by(|&a, &b| {
        use std::cmp::Ordering;
        match (a, b) {
            (RichPattern::SomethingElse, _) => Ordering::Greater,
            (_, RichPattern::SomethingElse) => Ordering::Less,
            (a, b) => a.cmp(b),
        }
    });

    match &expected[..] {
        &[] => (),
        &[pat] => {
            builder = builder.with_note(format!("Expected \"{}\"", pat.fg(Color::Blue)));
        }
        pats => {
            let mut note = String::from("Expected one of the following:\n");
            for pat in pats {
                writeln!(&mut note, "- {}", pat.fg(Color::Blue)).expect("can write to &mut String");
            }
            builder = builder.with_note(note);
        }
    }

    builder
        .finish()
        .eprint((file, Source::from(source)))
        .expect("failed to print to stderr");
}

fn main() -> ExitCode {
    let args = Args::parse();

    let source = match read_to_string(&args.input) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("failed to read {}: {err}", args.input.display());
            return ExitCode::FAILURE;
        }
    };

    let mut wires = Vec::new();
    let mut offset = 0;
    for raw in source.split('\n') {
        let line = raw.strip_suffix('\r').unwrap_or(raw);
        if !line.trim().is_empty() {
            match parse_path(line) {
                Ok(moves) => wires.push(Wire::trace(&moves)),
                Err(errs) => {
                    let file = args.input.to_string_lossy();
                    for err in errs {
                        report_path_error(err, &file, &source, offset);
                    }
                    return ExitCode::FAILURE;
                }
            }
        }
        // +1 for the newline this line ended with
        offset += raw.len() + 1;
    }

    let Some((first, second)) = wires.into_iter().collect_tuple() else {
        eprintln!("expected exactly two wire paths in {}", args.input.display());
        return ExitCode::FAILURE;
    };

    let found = crossings(&first, &second);
    let closest = found.iter().map(|c| c.point.manhattan()).min();
    let fewest = found.iter().map(|c| c.steps).min();
    let (Some(closest), Some(fewest)) = (closest, fewest) else {
        eprintln!("the wires never cross");
        return ExitCode::FAILURE;
    };

    println!("part 1: {closest}");
    println!("part 2: {fewest}");
    ExitCode::SUCCESS
}
