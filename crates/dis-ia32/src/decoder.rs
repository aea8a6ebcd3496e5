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
//! The instruction decoder: prefixes, opcode lookup, group resolution,
//! ModR/M parsing and immediate extraction, stitched over a [ByteCursor].

use crate::{
    byte_source::{ByteCursor, ByteSource},
    cpu_common::SizeDefaults,
    error::{DecodeError, FormatError},
    formatter::{att::AttFormatter, Format},
    instruction::Instruction,
    modrm,
    optable::{self, OperandKind},
    prefix,
};

/// Streaming decoder over a byte source, carrying the processor-mode
/// context that fixes default operand and address sizes.
pub struct DecodeContext<S> {
    cursor: ByteCursor<S>,
    protected: bool,
    dflag: bool,
    sizes: SizeDefaults,
    insn: Instruction,
}

impl<S: ByteSource> DecodeContext<S> {
    /// Decoder for 32-bit protected-mode code (protected mode on, segment
    /// D flag set).
    pub fn new(source: S) -> DecodeContext<S> {
        DecodeContext {
            cursor: ByteCursor::new(source),
            protected: true,
            dflag: true,
            sizes: SizeDefaults::for_mode(true, true),
            insn: Instruction::default(),
        }
    }

    pub fn set_protected(&mut self, protected: bool) {
        self.protected = protected;
        self.sizes = SizeDefaults::for_mode(self.protected, self.dflag);
    }

    pub fn set_dflag(&mut self, dflag: bool) {
        self.dflag = dflag;
        self.sizes = SizeDefaults::for_mode(self.protected, self.dflag);
    }

    /// Default operand/address sizes currently in force.
    pub fn sizes(&self) -> SizeDefaults {
        self.sizes
    }

    /// Offset of the next byte the decoder will consume.
    pub fn offset(&self) -> u64 {
        self.cursor.offset()
    }

    /// Decode the instruction at the current offset. On error the cursor is
    /// left wherever the failure happened; callers that want to resync must
    /// reposition by other means.
    pub fn decode_next(&mut self) -> Result<Instruction, DecodeError> {
        self.cursor.begin_instruction();
        self.insn.reset();

        // Prefix accumulation. Repeats collapse; conflicting segment
        // overrides simply pile up and the formatter picks the first set bit.
        loop {
            let byte = self.cursor.read_u8()?;
            match prefix::prefix_flag(byte) {
                Some(flag) => self.insn.prefixes |= flag,
                None => {
                    self.cursor.step_back();
                    break;
                }
            }
        }
        let opcode_byte = self.cursor.read_u8()?;

        let (raw, mut desc) = if opcode_byte == 0x0f {
            let second = self.cursor.read_u8()?;
            (0x0f00 | second as u32, &optable::TWO_BYTE_OPS[second as usize])
        }
        else {
            (opcode_byte as u32, &optable::ONE_BYTE_OPS[opcode_byte as usize])
        };

        // 0x90 is nop only when no operand-size prefix demotes it back to
        // xchg ax,ax.
        if raw == 0x90 && self.insn.prefixes & prefix::PrefixFlags::OPERAND_SIZE == 0 {
            desc = &optable::NOP_DESC;
        }

        if !desc.is_valid() {
            return Err(DecodeError::UnknownOpcode { opcode: raw });
        }

        self.insn.opcode = raw << 8;
        self.insn.size_override = desc.size_override;

        if desc.needs_modrm() {
            let address_size = self.sizes.effective_address(&self.insn);
            modrm::parse_modrm(&mut self.cursor, &mut self.insn, address_size)?;
        }

        if desc.is_group() {
            let key = self.insn.opcode | self.insn.modrm_reg as u32;
            desc = optable::group_lookup(key)?;
            self.insn.opcode = key;
            self.insn.size_override = desc.size_override;
        }
        self.insn.desc = desc;

        for kind in desc.operands {
            self.extract_operand(kind)?;
        }

        self.insn.start = self.cursor.start();
        self.insn.size = (self.cursor.offset() - self.cursor.start()) as u32;
        Ok(self.insn)
    }

    fn extract_operand(&mut self, kind: OperandKind) -> Result<(), DecodeError> {
        match kind {
            OperandKind::Imm8 => {
                self.insn.imm_off = self.cursor.read_u8()? as i32;
            }
            OperandKind::Imm16 => {
                self.insn.imm_off = self.cursor.read_u16()? as i32;
            }
            OperandKind::ImmFull => {
                let size = self.sizes.effective_operand(&self.insn);
                self.insn.imm_off = self.cursor.read_size(size)?;
            }
            OperandKind::SignExtImm8 | OperandKind::RelByte => {
                self.insn.imm_off = self.cursor.read_i8()? as i32;
            }
            OperandKind::Moffs8 | OperandKind::MoffsFull | OperandKind::RelFull => {
                let size = self.sizes.effective_address(&self.insn);
                self.insn.imm_off = self.cursor.read_size(size)?;
            }
            _ => {}
        }
        Ok(())
    }

    /// Render a previously decoded instruction in AT&T syntax.
    pub fn format_instruction(&self, insn: &Instruction) -> Result<String, FormatError> {
        let mut text = String::new();
        AttFormatter::new(self.sizes).format(insn, &mut text)?;
        Ok(text)
    }
}
