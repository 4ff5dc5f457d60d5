// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! The tracing
use std::fmt::{self, Debug, Display};

use crate::interp::Interpreter;

#[derive(Clone, Copy)]
enum TracedOp {
    Add((i64, i64), (i64, i64), (i64, i64)),
    Mul((i64, i64), (i64, i64), (i64, i64)),
    Halt,
}

#[derive(Clone)]
/// Information about one executed instruction, convertible into a [String] using its
/// [Display] impl.
pub struct TracedInstr {
    op: TracedOp,
    op_int: i64,
    instr_ptr: i64,
}

impl TracedInstr {
    pub(crate) fn build(op_int: i64, instr_ptr: i64, resolved_params: &[(i64, i64)]) -> Self {
        macro_rules! op {
            {$id: ident(_, _, _)} => {{
                debug_assert_eq!(resolved_params.len(), 3);
                TracedOp::$id(resolved_params[0], resolved_params[1], resolved_params[2])
            }};
            {$id: ident} => {{
                debug_assert_eq!(resolved_params.len(), 0);
                TracedOp::$id
            }}
        }

        let op = match op_int {
            1 => op! { Add(_, _, _) },
            2 => op! { Mul(_, _, _) },
            99 => op! { Halt },
            _ => unreachable!("only successfully decoded instructions are traced"),
        };
        Self {
            op,
            op_int,
            instr_ptr,
        }
    }
}

impl Interpreter {
    /// Begin a [Trace] of executed instructions. If a trace is already running, this replaces that
    /// trace and returns it in a [`Some`], otherwise, it returns [`None`].
    pub fn start_trace(&mut self) -> Option<Trace> {
        self.trace.replace(Trace::new())
    }

    /// Stop tracing executed instructions into a [Trace]. If no trace was active, returns [`None`]
    ///
    /// see [Interpreter::start_trace]
    pub fn end_trace(&mut self) -> Option<Trace> {
        self.trace.take()
    }
}

#[derive(Debug, Default, Clone)]
/// A log of instructions that an [Interpreter] has executed since a call to
/// [Interpreter::start_trace]
///
/// see [Interpreter::start_trace]
pub struct Trace(pub Vec<TracedInstr>);

impl Trace {
    pub(crate) fn push(&mut self, op_int: i64, instr_ptr: i64, resolved_params: &[(i64, i64)]) {
        self.0
            .push(TracedInstr::build(op_int, instr_ptr, resolved_params))
    }

    pub(crate) fn new() -> Self {
        Self(Vec::new())
    }
}

impl Debug for TracedOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        macro_rules! arg {
            ($arg: ident) => {
                format_args!("{} => {}", $arg.0, $arg.1)
            };
        }
        match self {
            Self::Add(a0, a1, a2) => f
                .debug_tuple("Add")
                .field(&arg!(a0))
                .field(&arg!(a1))
                .field(&arg!(a2))
                .finish(),
            Self::Mul(a0, a1, a2) => f
                .debug_tuple("Mul")
                .field(&arg!(a0))
                .field(&arg!(a1))
                .field(&arg!(a2))
                .finish(),
            Self::Halt => write!(f, "Halt"),
        }
    }
}

impl Debug for TracedInstr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TracedInstr")
            .field("op", &self.op)
            .field("op_int", &self.op_int)
            .field("instr_ptr", &self.instr_ptr)
            .finish()
    }
}

impl Display for TracedInstr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ran instruction at {:0>4}: op int {: <5} | ",
            self.instr_ptr, self.op_int
        )?;

        match self.op {
            TracedOp::Add((pa, va), (pb, vb), (dest, val)) => {
                write!(
                    f,
                    "[ADD {pa} (resolves to {va}), {pb} (resolves to {vb}), {dest} (stored {val})]"
                )
            }
            TracedOp::Mul((pa, va), (pb, vb), (dest, val)) => {
                write!(
                    f,
                    "[MUL {pa} (resolves to {va}), {pb} (resolves to {vb}), {dest} (stored {val})]"
                )
            }
            TracedOp::Halt => {
                write!(f, "[HALT]")
            }
        }
    }
}
