// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! Secure container: count the passwords in a range that meet the venus fuel
//! depot's adjacency rules.

mod password;

use clap::Parser;
use password::{count_valid, parse_range};
use std::error::Error;
use std::fmt::{self, Debug, Display};
use std::fs::read_to_string;
use std::path::PathBuf;

const VERSION: &str = concat!(env!("CARGO_CRATE_NAME"), '-', env!("CARGO_PKG_VERSION"));

const INPUT_HELP: &str =
    "File containing the password range\nformatted as low-high, both bounds six digits";

#[derive(Parser)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_version = VERSION)]
#[command(about = "Secure container password counter", long_about = None)]
struct Args {
    #[arg(help = INPUT_HELP.split_once("\n").unwrap().0)]
    #[arg(long_help = INPUT_HELP)]
    input: PathBuf,
}

fn main() -> Result<(), DisplayedError> {
    let args = Args::parse();

    let text = read_to_string(&args.input)?;
    let (low, high) = parse_range(&text)?;
    let (pairs, isolated) = count_valid(low, high);
    println!("part 1: {pairs}");
    println!("part 2: {isolated}");
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
