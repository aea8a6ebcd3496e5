/*
    dis-ia32
    Copyright 2025-2026 the dis-ia32 authors

    Permission is hereby granted, free of charge, to any person obtaining a
    copy of this software and associated documentation files (the “Software”),
    to deal in the Software without restriction, including without limitation
    the rights to use, copy, modify, merge, publish, distribute, sublicense,
    and/or sell copies of the Software, and to permit persons to whom the
    Software is furnished to do so, subject to the following conditions:

    The above copyright notice and this permission notice shall be included in
    all copies or substantial portions of the Software.

    THE SOFTWARE IS PROVIDED “AS IS”, WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
    IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
    FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
    AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
    LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING
    FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER
    DEALINGS IN THE SOFTWARE.
*/
//! Decode and format error types.

use thiserror::Error;

use crate::{cpu_common::SizeClass, optable::OperandKind};

/// Errors surfaced by the decode entry point.
///
/// `EndOfStream` doubles as the clean termination condition for a decode
/// loop: callers that need to distinguish a truncated instruction from a
/// clean end must compare the cursor offset against the instruction start.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// The byte source could not supply enough bytes at the given offset.
    #[error("end of stream at offset {offset:#x}")]
    EndOfStream { offset: u64 },

    /// The primary or two-byte table has no descriptor for this opcode.
    #[error("no such opcode {opcode:#x}")]
    UnknownOpcode { opcode: u32 },

    /// A group opcode's composite key (opcode + ModR/M reg field) has no
    /// entry in the group table.
    #[error("group instruction key {key:#x} lookup failed")]
    GroupLookupFailed { key: u32 },
}

/// Errors surfaced by the format entry point.
///
/// These indicate either a gap in the implemented instruction-set subset
/// (16-bit effective addresses) or a drift between the static opcode tables
/// and the formatter's rendering rules. They are programming errors, not
/// data errors, and are never produced by well-formed table entries.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatError {
    /// Rendering of 16-bit effective-address memory operands is not
    /// implemented.
    #[error("16-bit effective address rendering is not implemented")]
    Unsupported16BitAddress,

    /// An operand tag reached the formatter with no rendering rule.
    #[error("no rendering rule for operand type {0:?}")]
    UnhandledOperand(OperandKind),

    /// A register selector resolved to a size class with no register name
    /// table.
    #[error("register size class {0:?} cannot be rendered")]
    BadRegisterSize(SizeClass),

    /// A memory-expression operand resolved to an address size outside
    /// {word, long}.
    #[error("address size class {0:?} cannot reach the memory renderer")]
    BadAddressSize(SizeClass),
}
