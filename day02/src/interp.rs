// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! The fetch-decode-execute core of the gravity assist computer.

use crate::trace::Trace;
use std::error::Error;
use std::fmt::{self, Display};
use std::ops::{Index, IndexMut};

/// What a successfully executed instruction did to the machine.
///
/// [Running](StepOutcome::Running) means the instruction completed and there are more to execute.
///
/// [Halted](StepOutcome::Halted) means a `HALT` instruction was executed. The instruction pointer
/// is left pointing at it, so stepping again re-reads the same `HALT`.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum StepOutcome {
    /// More instructions remain to execute
    Running,
    /// Execution has halted
    Halted,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
/// An error occured when executing an instruction
pub enum InterpreterError {
    /// An invalid opcode was encountered
    UnknownOpcode {
        /// the value that failed to decode as an opcode
        value: i64,
        /// address of the instruction that faulted
        at: i64,
    },
    /// An instruction referred to an address outside of memory
    OutOfBounds {
        /// the out-of-range address
        addr: i64,
        /// address of the instruction that faulted
        at: i64,
    },
}

impl Display for InterpreterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InterpreterError::UnknownOpcode { value, at } => {
                write!(f, "encountered unknown opcode {value} at address {at}")
            }
            InterpreterError::OutOfBounds { addr, at } => {
                write!(f, "address {addr} is out of bounds (instruction at {at})")
            }
        }
    }
}

impl Error for InterpreterError {}

#[derive(Debug, Clone)]
/// A gravity assist computer: a program image loaded into memory, and an instruction pointer.
///
/// Memory is sized to hold exactly the loaded program. Any access outside it, by the program
/// counter or by an instruction's parameters, is an [InterpreterError::OutOfBounds] fault.
pub struct Interpreter {
    ip: i64,
    mem: Vec<i64>,
    pub(crate) trace: Option<Trace>,
}

impl Index<i64> for Interpreter {
    type Output = i64;

    fn index(&self, i: i64) -> &Self::Output {
        &self.mem[usize::try_from(i).expect("address does not fit in usize")]
    }
}

impl IndexMut<i64> for Interpreter {
    fn index_mut(&mut self, i: i64) -> &mut Self::Output {
        &mut self.mem[usize::try_from(i).expect("address does not fit in usize")]
    }
}

impl Interpreter {
    /// Create a new interpreter with its memory initialized from `code`.
    pub fn new(code: impl IntoIterator<Item = i64>) -> Self {
        Self {
            ip: 0,
            mem: code.into_iter().collect(),
            trace: None,
        }
    }

    /// Get the memory at `address`, or [`None`] if it's outside of memory
    #[doc(alias = "peek")]
    pub fn mem_get(&self, address: i64) -> Option<i64> {
        usize::try_from(address)
            .ok()
            .and_then(|i| self.mem.get(i))
            .copied()
    }

    /// The program's output: whatever value is left at address 0.
    pub fn output(&self) -> i64 {
        self[0]
    }

    /// Bounds-check `addr`, resolving it to a concrete index into memory.
    fn checked(&self, addr: i64) -> Result<usize, InterpreterError> {
        match usize::try_from(addr) {
            Ok(i) if i < self.mem.len() => Ok(i),
            _ => Err(InterpreterError::OutOfBounds { addr, at: self.ip }),
        }
    }

    /// Fetch the value in the memory cell that `addr` points to.
    fn cell(&self, addr: i64) -> Result<i64, InterpreterError> {
        self.checked(addr).map(|i| self.mem[i])
    }

    /// common logic of the two instructions that take 3 parameters
    fn op3(
        &mut self,
        op_int: i64,
        operation: impl Fn(i64, i64) -> i64,
    ) -> Result<StepOutcome, InterpreterError> {
        let a_addr = self.cell(self.ip + 1)?;
        let b_addr = self.cell(self.ip + 2)?;
        let d_addr = self.cell(self.ip + 3)?;
        let a = self.cell(a_addr)?;
        let b = self.cell(b_addr)?;
        let dest = self.checked(d_addr)?;
        let val = operation(a, b);
        self.record(op_int, &[(a_addr, a), (b_addr, b), (d_addr, val)]);
        self.mem[dest] = val;
        self.ip += 4;
        Ok(StepOutcome::Running)
    }

    /// Execute a single instruction.
    ///
    /// A fault leaves memory and the instruction pointer exactly as they were, so the faulting
    /// instruction can be inspected, and re-stepping reports the same fault again.
    pub fn exec_instruction(&mut self) -> Result<StepOutcome, InterpreterError> {
        // An instruction is an opcode followed by its parameters: ADD and MUL take the addresses
        // of their two operands and of the destination, HALT takes none.
        let op = self.cell(self.ip)?;
        match op {
            1 => self.op3(op, i64::wrapping_add),
            2 => self.op3(op, i64::wrapping_mul),
            99 => {
                self.record(op, &[]);
                Ok(StepOutcome::Halted)
            }
            value => Err(InterpreterError::UnknownOpcode { value, at: self.ip }),
        }
    }

    /// Run instructions until the program halts or faults.
    pub fn run(&mut self) -> Result<(), InterpreterError> {
        loop {
            match self.exec_instruction()? {
                StepOutcome::Running => (),
                StepOutcome::Halted => return Ok(()),
            }
        }
    }

    fn record(&mut self, op_int: i64, resolved_params: &[(i64, i64)]) {
        let at = self.ip;
        if let Some(trace) = self.trace.as_mut() {
            trace.push(op_int, at, resolved_params);
        }
    }
}
