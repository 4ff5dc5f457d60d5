// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! Fuel counter-upper: total fuel needed to launch every module, before and
//! after accounting for the mass of the fuel itself.

use clap::Parser;
use either::Either;
use itertools::iterate;
use std::error::Error;
use std::fmt::{self, Debug, Display};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::num::ParseIntError;
use std::path::{Path, PathBuf};

const VERSION: &str = concat!(env!("CARGO_CRATE_NAME"), '-', env!("CARGO_PKG_VERSION"));

const INPUT_HELP: &str =
    "File containing one module mass per line\nuses stdin if unset or set to '-'";

#[derive(Parser)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_version = VERSION)]
#[command(about = "Fuel counter-upper", long_about = None)]
struct Args {
    #[arg(help = INPUT_HELP.split_once("\n").unwrap().0)]
    #[arg(long_help = INPUT_HELP)]
    input: Option<PathBuf>,
}

/// Fuel needed to launch a module of the given mass, ignoring the fuel's own
/// mass.
fn fuel(mass: i64) -> i64 {
    mass / 3 - 2
}

/// Fuel needed to launch a module of the given mass, plus the fuel needed to
/// launch that fuel, iterated until the correction stops being positive.
fn stabilized_fuel(mass: i64) -> i64 {
    iterate(fuel(mass), |&f| fuel(f))
        .take_while(|&f| f > 0)
        .sum()
}

#[derive(Debug)]
enum InputError {
    Unreadable(io::Error),
    BadMass { line: usize, err: ParseIntError },
}

impl Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::Unreadable(e) => write!(f, "an I/O error occured: {e}"),
            InputError::BadMass { line, err } => {
                write!(f, "line {line} is not a valid module mass: {err}")
            }
        }
    }
}
impl Error for InputError {}

/// Sum both fuel measures over every module mass in `input`, one mass per
/// line. Blank lines are skipped.
fn total_fuel(input: impl BufRead) -> Result<(i64, i64), InputError> {
    let mut simple = 0;
    let mut stabilized = 0;
    for (num, line) in input.lines().enumerate() {
        let line = line.map_err(InputError::Unreadable)?;
        let mass = line.trim();
        if mass.is_empty() {
            continue;
        }
        let mass: i64 = mass
            .parse()
            .map_err(|err| InputError::BadMass { line: num + 1, err })?;
        simple += fuel(mass);
        stabilized += stabilized_fuel(mass);
    }
    Ok((simple, stabilized))
}

fn main() -> Result<(), DisplayedError> {
    let args = Args::parse();

    let input = match args.input.as_deref() {
        Some(path) if path != Path::new("-") => {
            Either::Left(BufReader::new(File::open(path).map_err(InputError::Unreadable)?))
        }
        _ => Either::Right(io::stdin().lock()),
    };

    let (simple, stabilized) = total_fuel(input)?;
    println!("part 1: {simple}");
    println!("part 2: {stabilized}");
    Ok(())
}

/// a wrapper around a [`Box`ed][Box] [dyn Error][Error] that uses its implementation of [Display]
/// for the [Debug] impl, to display the Error if returned from `main`
struct DisplayedError(Box<dyn Error>);
impl<E: Error + 'static> From<E> for DisplayedError {
    fn from(e: E) -> Self {
        Self(Box::from(e))
    }
}

impl Debug for DisplayedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}
