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
//! Instruction decoder and AT&T-syntax formatter for 32-bit x86
//! general-purpose code.
//!
//! The decoder walks a [ByteSource] one instruction at a time, resolving
//! legacy prefixes, one- and two-byte opcodes, group opcodes keyed on the
//! ModR/M reg field, and the 16/32-bit addressing forms. Output text follows
//! GNU objdump's AT&T conventions.
//!
//! ```
//! use dis_ia32::DecodeContext;
//!
//! let code: &[u8] = &[0x83, 0xec, 0x1c];
//! let mut ctx = DecodeContext::new(code);
//! let insn = ctx.decode_next().unwrap();
//! assert_eq!(ctx.format_instruction(&insn).unwrap(), "sub $0x1c,%esp");
//! ```

pub mod byte_source;
pub mod cpu_common;
pub mod decoder;
pub mod error;
pub mod formatter;
pub mod instruction;
pub mod mnemonic;
pub mod modrm;
pub mod optable;
pub mod prefix;

pub use byte_source::{ByteCursor, ByteSource};
pub use cpu_common::{SizeClass, SizeDefaults};
pub use decoder::DecodeContext;
pub use error::{DecodeError, FormatError};
pub use instruction::Instruction;
pub use mnemonic::Mnemonic;
