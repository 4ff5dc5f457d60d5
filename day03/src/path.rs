// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! Parsing for wire paths like `R8,U5,L5,D3`.

use chumsky::prelude::*;

macro_rules! padded {
    ($inner: expr) => {{ $inner.padded_by(text::inline_whitespace()) }};
}

type RichErr<'a> = chumsky::extra::Err<Rich<'a, char>>;

/// One of the four axis-aligned directions a wire can run in.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// A single movement command: a direction, and how far to run in it.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Move {
    pub dir: Direction,
    pub dist: i64,
}

fn direction<'a>() -> impl Parser<'a, &'a str, Direction, RichErr<'a>> {
    choice((
        just('U').to(Direction::Up),
        just('D').to(Direction::Down),
        just('L').to(Direction::Left),
        just('R').to(Direction::Right),
    ))
    .labelled("direction ('U', 'D', 'L', or 'R')")
}

fn distance<'a>() -> impl Parser<'a, &'a str, i64, RichErr<'a>> {
    text::int(10)
        .try_map(|s: &str, span| {
            s.parse::<i64>()
                .map_err(|e| Rich::custom(span, format!("error parsing {s} as i64: {e}")))
        })
        .labelled("distance")
}

fn wire_move<'a>() -> impl Parser<'a, &'a str, Move, RichErr<'a>> {
    direction()
        .then(distance())
        .map(|(dir, dist)| Move { dir, dist })
        .labelled("move")
        .as_context()
}

fn moves<'a>() -> impl Parser<'a, &'a str, Vec<Move>, RichErr<'a>> {
    padded!(wire_move())
        .separated_by(just(','))
        .at_least(1)
        .collect()
}

/// Parse one line of puzzle input as a wire path.
pub fn parse_path(line: &str) -> Result<Vec<Move>, Vec<Rich<'_, char>>> {
    moves().parse(line).into_result()
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! mv {
        ($dir: ident, $dist: literal) => {
            Move {
                dir: Direction::$dir,
                dist: $dist,
            }
        };
    }

    #[test]
    fn parses_a_simple_path() {
        assert_eq!(
            parse_path("R8,U5,L5,D3").unwrap(),
            vec![mv!(Right, 8), mv!(Up, 5), mv!(Left, 5), mv!(Down, 3)]
        );
    }

    #[test]
    fn whitespace_between_moves_is_ignored() {
        assert_eq!(
            parse_path(" R8, U5 ,L5,\tD3").unwrap(),
            vec![mv!(Right, 8), mv!(Up, 5), mv!(Left, 5), mv!(Down, 3)]
        );
    }

    #[test]
    fn rejects_an_unknown_direction() {
        assert!(parse_path("R8,X5").is_err());
    }

    #[test]
    fn rejects_a_move_without_a_distance() {
        assert!(parse_path("R8,U").is_err());
    }

    #[test]
    fn rejects_trailing_garbage() {
        assert!(parse_path("R8,U5;").is_err());
    }

    #[test]
    fn rejects_an_empty_line() {
        assert!(parse_path("").is_err());
    }
}
