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
//! The decoded-instruction record handed from the decoder to the formatter.

use crate::{
    cpu_common::SizeClass,
    optable::{self, InsnDescriptor},
};

/// One fully decoded instruction.
///
/// `opcode` is the composite table key: the raw opcode byte (with two-byte
/// opcodes biased by `0x0f00`), shifted up a byte and combined with the
/// ModR/M reg field when the opcode is a group. `disp` and `imm_off` hold
/// the displacement and immediate exactly as extracted; their
/// interpretation (signedness, width) is the formatter's business via
/// `disp_size` and the descriptor's operand tags.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Instruction {
    pub desc: &'static InsnDescriptor,
    pub opcode: u32,
    pub prefixes: u32,
    /// Address offset where the first prefix or opcode byte sits.
    pub start: u64,
    /// Encoded length in bytes, prefixes included. Wider than any sane
    /// encoding because the prefix run itself is unbounded.
    pub size: u32,
    pub modrm_mod: u8,
    pub modrm_reg: u8,
    pub modrm_rm: u8,
    /// SIB scale factor (1, 2, 4 or 8); zero when no SIB byte was present.
    pub scale: u8,
    pub index: u8,
    pub base: u8,
    pub disp: i32,
    pub disp_size: SizeClass,
    pub imm_off: i32,
    /// Instruction-intrinsic size overrides: address-size nibble in the
    /// high half, operand-size nibble in the low half. Zero means none.
    pub size_override: u8,
}

impl Default for Instruction {
    fn default() -> Instruction {
        Instruction {
            desc: &optable::NOP_DESC,
            opcode: 0,
            prefixes: 0,
            start: 0,
            size: 0,
            modrm_mod: 0,
            modrm_reg: 0,
            modrm_rm: 0,
            scale: 0,
            index: 0,
            base: 0,
            disp: 0,
            disp_size: SizeClass::None,
            imm_off: 0,
            size_override: 0,
        }
    }
}

impl Instruction {
    /// Clear the per-instruction accumulators ahead of the next decode.
    /// Fields written unconditionally on every path stay as they are.
    pub fn reset(&mut self) {
        self.prefixes = 0;
        self.scale = 0;
        self.disp = 0;
        self.disp_size = SizeClass::None;
        self.size_override = 0;
    }

    /// True when the memory operand has a displacement but no base or
    /// index register, i.e. a bare absolute address.
    #[inline]
    pub fn is_absolute_address(&self) -> bool {
        self.modrm_mod == 0 && self.modrm_rm == 0b101
    }
}
