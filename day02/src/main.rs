// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! Gravity assist: restore a program's noun and verb and run it, then search
//! for the noun and verb that leave a target value at address 0.

mod interp;
mod load;
mod trace;

use ariadne::{Color, Fmt, Label, Report, ReportKind, Source};
use clap::Parser;
use interp::{Interpreter, InterpreterError};
use itertools::Itertools;
use load::LoadError;
use std::fs::read_to_string;
use std::path::PathBuf;
use std::process::ExitCode;
use trace::Trace;

const VERSION: &str = concat!(env!("CARGO_CRATE_NAME"), '-', env!("CARGO_PKG_VERSION"));

#[derive(Parser)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_version = VERSION)]
#[command(about = "Gravity assist computer", long_about = None)]
struct Args {
    #[arg(help = "File containing the program as comma-separated integers")]
    program: PathBuf,
    #[arg(long, default_value_t = 12)]
    #[arg(help = "Value restored to address 1 before the part 1 run")]
    noun: i64,
    #[arg(long, default_value_t = 2)]
    #[arg(help = "Value restored to address 2 before the part 1 run")]
    verb: i64,
    #[arg(long, default_value_t = 19_690_720)]
    #[arg(help = "Output to search for in the part 2 calibration")]
    target: i64,
    #[arg(long)]
    #[arg(help = "Print each instruction executed during the part 1 run to stderr")]
    trace: bool,
}

fn report_parse_error(err: &LoadError, file: &str, source: &str) {
    let LoadError::ParseError { index, span, err } = err else {
        eprintln!("{err}");
        return;
    };
    Report::build(ReportKind::Error, (file, span.clone()))
        .with_message(format!("Failed to parse {}", file.fg(Color::Red)))
        .with_label(
            Label::new((file, span.clone()))
                .with_message(format!(
                    "cell {} is not a valid integer: {err}",
                    index.fg(Color::Cyan)
                ))
                .with_color(Color::Yellow),
        )
        .finish()
        .eprint((file, Source::from(source)))
        .expect("failed to print to stderr");
}

/// Run the program with the noun and verb from the command line restored,
/// returning its output. The trace, if enabled, goes to stderr even when the
/// run faults.
fn part1(mut interp: Interpreter, args: &Args) -> Result<i64, InterpreterError> {
    interp[1] = args.noun;
    interp[2] = args.verb;
    if args.trace {
        interp.start_trace();
    }
    let outcome = interp.run();
    if let Some(Trace(steps)) = interp.end_trace() {
        for step in &steps {
            eprintln!("{step}");
        }
    }
    outcome?;
    Ok(interp.output())
}

/// Search every noun and verb in 0..=99 for the pair that leaves `target` at
/// address 0, each candidate starting from its own pristine copy of the
/// program. A candidate whose run faults is simply not the answer.
fn part2(pristine: &Interpreter, target: i64) -> Option<i64> {
    (0..=99)
        .cartesian_product(0..=99)
        .find(|&(noun, verb)| {
            let mut interp = pristine.clone();
            interp[1] = noun;
            interp[2] = verb;
            interp.run().is_ok() && interp.mem_get(0) == Some(target)
        })
        .map(|(noun, verb)| 100 * noun + verb)
}

fn main() -> ExitCode {
    let args = Args::parse();

    let source = match read_to_string(&args.program) {
        Ok(source) => source,
        Err(err) => {
            let err = LoadError::SourceUnavailable {
                path: args.program,
                err,
            };
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let code = match load::parse_program(&source) {
        Ok(code) => code,
        Err(err) => {
            report_parse_error(&err, &args.program.to_string_lossy(), &source);
            return ExitCode::FAILURE;
        }
    };

    if code.len() < 3 {
        eprintln!(
            "program has only {} cells; addresses 1 and 2 must exist to restore the noun and verb",
            code.len()
        );
        return ExitCode::FAILURE;
    }

    let pristine = Interpreter::new(code);

    match part1(pristine.clone(), &args) {
        Ok(output) => println!("part 1: {output}"),
        Err(err) => {
            eprintln!("part 1 failed: {err}");
            return ExitCode::FAILURE;
        }
    }

    match part2(&pristine, args.target) {
        Some(answer) => println!("part 2: {answer}"),
        None => {
            eprintln!("no noun and verb in 0..=99 leave {} at address 0", args.target);
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}
