// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! Reading a program image from its textual form: comma-separated decimal
//! integers, with whitespace around each cell ignored.

use std::error::Error;
use std::fmt::{self, Display};
use std::io;
use std::num::ParseIntError;
use std::ops::Range;
use std::path::PathBuf;

#[derive(Debug)]
/// An error occured while loading the program image
pub enum LoadError {
    /// The program file could not be read at all
    SourceUnavailable {
        /// the file that was being read
        path: PathBuf,
        /// the underlying I/O error
        err: io::Error,
    },
    /// A cell of the program text failed to parse as an integer
    ParseError {
        /// zero-based index of the unparsable cell
        index: usize,
        /// byte range of the unparsable cell within the source text
        span: Range<usize>,
        /// the underlying integer parsing error
        err: ParseIntError,
    },
}

impl Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::SourceUnavailable { path, err } => {
                write!(f, "failed to read {}: {err}", path.display())
            }
            LoadError::ParseError { index, err, .. } => {
                write!(f, "cell {index} of the program is not a valid integer: {err}")
            }
        }
    }
}

impl Error for LoadError {}

/// Parse program text into the sequence of integers it spells out. The memory
/// image is sized to hold exactly those cells, nothing more.
pub fn parse_program(text: &str) -> Result<Vec<i64>, LoadError> {
    let mut code = Vec::new();
    let mut offset = 0;
    for (index, token) in text.split(',').enumerate() {
        let cell = token.trim();
        match cell.parse::<i64>() {
            Ok(value) => code.push(value),
            Err(err) => {
                let start = offset + (token.len() - token.trim_start().len());
                return Err(LoadError::ParseError {
                    index,
                    span: start..start + cell.len(),
                    err,
                });
            }
        }
        // +1 for the comma between tokens
        offset += token.len() + 1;
    }
    Ok(code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interp::Interpreter;
    use itertools::Itertools;
    use proptest::prelude::*;

    #[test]
    fn parses_a_simple_program() {
        assert_eq!(parse_program("1,0,0,0,99").unwrap(), vec![1, 0, 0, 0, 99]);
    }

    #[test]
    fn whitespace_around_cells_is_ignored() {
        assert_eq!(
            parse_program(" 1, 9,10,3 ,99\n").unwrap(),
            vec![1, 9, 10, 3, 99]
        );
    }

    #[test]
    fn negative_cells_parse() {
        assert_eq!(
            parse_program("-1,-1125899906842624").unwrap(),
            vec![-1, -1125899906842624]
        );
    }

    #[test]
    fn bad_cell_is_located() {
        let Err(LoadError::ParseError { index, span, .. }) = parse_program("1,two,3") else {
            panic!("expected a ParseError");
        };
        assert_eq!(index, 1);
        assert_eq!(span, 2..5);
    }

    #[test]
    fn empty_cell_is_an_error() {
        assert!(matches!(
            parse_program("1,,3"),
            Err(LoadError::ParseError { index: 1, .. })
        ));
    }

    #[test]
    fn empty_input_is_an_error() {
        assert!(matches!(
            parse_program(""),
            Err(LoadError::ParseError { index: 0, .. })
        ));
    }

    proptest! {
        /// loading followed by immediate inspection reproduces the written cells
        #[test]
        fn load_then_inspect_round_trips(cells in proptest::collection::vec(any::<i64>(), 1..64)) {
            let text = cells.iter().join(",");
            let code = parse_program(&text).unwrap();
            prop_assert_eq!(&code, &cells);
            let interp = Interpreter::new(code);
            for (addr, &cell) in cells.iter().enumerate() {
                prop_assert_eq!(interp.mem_get(addr as i64), Some(cell));
            }
        }
    }
}
