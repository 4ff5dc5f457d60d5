// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! Wire geometry: walking a move list out into segments, and finding the
//! points where two wires cross.

use crate::path::{Direction, Move};
use itertools::Itertools;

/// A point on the panel grid. Both wires start at the origin.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    /// Manhattan distance from the origin.
    pub fn manhattan(self) -> i64 {
        self.x.abs() + self.y.abs()
    }

    fn step(self, dir: Direction, dist: i64) -> Point {
        match dir {
            Direction::Up => Point { x: self.x, y: self.y + dist },
            Direction::Down => Point { x: self.x, y: self.y - dist },
            Direction::Left => Point { x: self.x - dist, y: self.y },
            Direction::Right => Point { x: self.x + dist, y: self.y },
        }
    }
}

/// An axis-aligned run of wire, remembering how many steps of wire were laid
/// before its start.
#[derive(Debug, Clone, Copy)]
struct Segment {
    start: Point,
    end: Point,
    steps_before: i64,
}

impl Segment {
    fn is_horizontal(&self) -> bool {
        self.start.y == self.end.y
    }

    /// Steps along this segment to reach `p`. Only meaningful for points that
    /// lie on the segment.
    fn steps_to(&self, p: Point) -> i64 {
        (p.x - self.start.x).abs() + (p.y - self.start.y).abs()
    }
}

/// A wire: the segments its move list traces out from the origin.
#[derive(Debug, Clone)]
pub struct Wire {
    segments: Vec<Segment>,
}

impl Wire {
    pub fn trace(moves: &[Move]) -> Wire {
        let mut segments = Vec::with_capacity(moves.len());
        let mut pos = Point::ORIGIN;
        let mut steps = 0;
        for &Move { dir, dist } in moves {
            let end = pos.step(dir, dist);
            segments.push(Segment {
                start: pos,
                end,
                steps_before: steps,
            });
            steps += dist;
            pos = end;
        }
        Wire { segments }
    }
}

/// A place where two wires touch, other than the origin they share.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Crossing {
    pub point: Point,
    /// combined length of both wires up to the crossing
    pub steps: i64,
}

fn between(value: i64, bound_a: i64, bound_b: i64) -> bool {
    value >= bound_a.min(bound_b) && value <= bound_a.max(bound_b)
}

/// Where two perpendicular segments touch, if they do at all. Parallel
/// segments never cross.
fn crosspoint(a: &Segment, b: &Segment) -> Option<Point> {
    let (h, v) = match (a.is_horizontal(), b.is_horizontal()) {
        (true, false) => (a, b),
        (false, true) => (b, a),
        _ => return None,
    };
    let p = Point {
        x: v.start.x,
        y: h.start.y,
    };
    (between(p.x, h.start.x, h.end.x) && between(p.y, v.start.y, v.end.y)).then_some(p)
}

/// Every point where the two wires cross, with the combined steps both wires
/// take to first reach it. The shared origin never counts as a crossing.
pub fn crossings(first: &Wire, second: &Wire) -> Vec<Crossing> {
    first
        .segments
        .iter()
        .cartesian_product(&second.segments)
        .filter_map(|(a, b)| {
            let p = crosspoint(a, b)?;
            (p != Point::ORIGIN).then(|| Crossing {
                point: p,
                steps: a.steps_before + a.steps_to(p) + b.steps_before + b.steps_to(p),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::parse_path;

    fn wire(line: &str) -> Wire {
        Wire::trace(&parse_path(line).unwrap())
    }

    fn closest(first: &str, second: &str) -> i64 {
        crossings(&wire(first), &wire(second))
            .iter()
            .map(|c| c.point.manhattan())
            .min()
            .unwrap()
    }

    fn fewest_steps(first: &str, second: &str) -> i64 {
        crossings(&wire(first), &wire(second))
            .iter()
            .map(|c| c.steps)
            .min()
            .unwrap()
    }

    /// the pair of wires walked through in the problem description
    #[test]
    fn illustrated_example() {
        let found = crossings(&wire("R8,U5,L5,D3"), &wire("U7,R6,D4,L4"));
        let mut points: Vec<_> = found.iter().map(|c| (c.point.x, c.point.y, c.steps)).collect();
        points.sort_unstable();
        assert_eq!(points, vec![(3, 3, 40), (6, 5, 30)]);
    }

    #[test]
    fn closest_crossing_examples() {
        assert_eq!(closest("R8,U5,L5,D3", "U7,R6,D4,L4"), 6);
        assert_eq!(
            closest(
                "R75,D30,R83,U83,L12,D49,R71,U7,L72",
                "U62,R66,U55,R34,D71,R55,D58,R83"
            ),
            159
        );
        assert_eq!(
            closest(
                "R98,U47,R26,D63,R33,U87,L62,D20,R33,U53,R51",
                "U98,R91,D20,R16,D67,R40,U7,R15,U6,R7"
            ),
            135
        );
    }

    #[test]
    fn fewest_steps_examples() {
        assert_eq!(fewest_steps("R8,U5,L5,D3", "U7,R6,D4,L4"), 30);
        assert_eq!(
            fewest_steps(
                "R75,D30,R83,U83,L12,D49,R71,U7,L72",
                "U62,R66,U55,R34,D71,R55,D58,R83"
            ),
            610
        );
        assert_eq!(
            fewest_steps(
                "R98,U47,R26,D63,R33,U87,L62,D20,R33,U53,R51",
                "U98,R91,D20,R16,D67,R40,U7,R15,U6,R7"
            ),
            410
        );
    }

    /// wires that only touch where they both begin never cross
    #[test]
    fn origin_is_not_a_crossing() {
        assert!(crossings(&wire("R5"), &wire("U5")).is_empty());
    }

    /// a wire ending on another wire still counts as a crossing
    #[test]
    fn endpoint_touch_counts() {
        let found = crossings(&wire("R2,U2"), &wire("U1,R2"));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].point, Point { x: 2, y: 1 });
    }

    #[test]
    fn parallel_segments_never_cross() {
        assert!(crossings(&wire("R5"), &wire("R5")).is_empty());
    }
}
