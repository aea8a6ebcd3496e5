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
//! AT&T-syntax renderer, matching GNU objdump conventions: operands in
//! source-first order, `$` immediates, `%` registers, signed displacements
//! except for bare absolute addresses, and `b`/`l` width suffixes on the
//! opcodes whose memory form is otherwise ambiguous.

use num_traits::AsPrimitive;

use crate::{
    cpu_common::{
        SizeClass, SizeDefaults, EAX, REGISTER16_NAMES, REGISTER32_NAMES, REGISTER64_NAMES,
        REGISTER8_NAMES, SEGMENT_NAMES,
    },
    error::FormatError,
    formatter::{Format, FormatterOutput},
    instruction::Instruction,
    optable::OperandKind,
    prefix,
};

/// Hex with a leading minus for negative values, the way objdump prints
/// displacements.
fn signed_hex<T: AsPrimitive<i64>>(value: T) -> String {
    let v: i64 = value.as_();
    if v < 0 {
        format!("-0x{:x}", -v)
    }
    else {
        format!("0x{:x}", v)
    }
}

/// Opcodes that take a width suffix when their r/m operand is memory.
fn wants_width_suffix(opcode: u32) -> bool {
    matches!(
        opcode,
        0x8000..=0x8007
            | 0x8100..=0x8107
            | 0x8200..=0x8207
            | 0x8300..=0x8307
            | 0xc600
            | 0xc700
            | 0xf600
            | 0xf602..=0xf607
            | 0xf700
            | 0xf702..=0xf707
            | 0x0f0100
            | 0x0f0102
    )
}

pub struct AttFormatter {
    sizes: SizeDefaults,
}

impl AttFormatter {
    pub fn new(sizes: SizeDefaults) -> AttFormatter {
        AttFormatter { sizes }
    }

    fn full_register(
        &self,
        insn: &Instruction,
        selector: u8,
    ) -> Result<&'static str, FormatError> {
        let idx = selector as usize;
        match self.sizes.effective_operand(insn) {
            SizeClass::Word => Ok(REGISTER16_NAMES[idx]),
            SizeClass::Long => Ok(REGISTER32_NAMES[idx]),
            SizeClass::Quad => Ok(REGISTER64_NAMES[idx]),
            other => Err(FormatError::BadRegisterSize(other)),
        }
    }

    /// The string-family opcodes render as fixed text rather than through
    /// operand tags. Only the 32-bit index registers are spelled out here,
    /// so 16-bit addressing must fail the same way the memory renderer does.
    fn string_op_text(&self, raw: u32, insn: &Instruction) -> Result<String, FormatError> {
        match self.sizes.effective_address(insn) {
            SizeClass::Long => {}
            SizeClass::Word => return Err(FormatError::Unsupported16BitAddress),
            other => return Err(FormatError::BadAddressSize(other)),
        }
        let acc = self.full_register(insn, EAX)?;
        let wl = match self.sizes.effective_operand(insn) {
            SizeClass::Word => 'w',
            SizeClass::Long => 'l',
            SizeClass::Quad => 'q',
            other => return Err(FormatError::BadRegisterSize(other)),
        };
        Ok(match raw {
            0xa4 => "movsb %ds:(%esi),%es:(%edi)".to_string(),
            0xa5 => format!("movs{wl} %ds:(%esi),%es:(%edi)"),
            0xa6 => "cmpsb %es:(%edi),%ds:(%esi)".to_string(),
            0xa7 => format!("cmps{wl} %es:(%edi),%ds:(%esi)"),
            0xaa => "stos %al,%es:(%edi)".to_string(),
            0xab => format!("stos %{acc},%es:(%edi)"),
            0xac => "lods %ds:(%esi),%al".to_string(),
            0xad => format!("lods %ds:(%esi),%{acc}"),
            0xae => "scas %es:(%edi),%al".to_string(),
            _ => format!("scas %es:(%edi),%{acc}"),
        })
    }

    fn write_memory(
        &self,
        insn: &Instruction,
        output: &mut impl FormatterOutput,
        eiz_placeholder: bool,
    ) -> Result<(), FormatError> {
        match self.sizes.effective_address(insn) {
            SizeClass::Long => {}
            SizeClass::Word => return Err(FormatError::Unsupported16BitAddress),
            other => return Err(FormatError::BadAddressSize(other)),
        }
        output.write_str(prefix::segment_text(insn.prefixes));

        if insn.scale == 0 {
            // A bare disp32 prints unsigned; everything else signed.
            if insn.is_absolute_address() {
                output.write_str(&format!("0x{:x}", insn.disp as u32));
                return Ok(());
            }
            if insn.disp_size != SizeClass::None {
                output.write_str(&signed_hex(insn.disp));
            }
            output.write_char('(');
            output.write_char('%');
            output.write_str(REGISTER32_NAMES[insn.modrm_rm as usize]);
            output.write_char(')');
            return Ok(());
        }

        // SIB form. An ebp base slot under mod=00 means no base register,
        // and esp can never be an index.
        let has_base = !(insn.modrm_mod == 0b00 && insn.base == 0b101);
        let has_index = insn.index != 0b100;
        if insn.disp_size != SizeClass::None {
            output.write_str(&signed_hex(insn.disp));
        }
        if !has_base && !has_index && !eiz_placeholder {
            return Ok(());
        }
        output.write_char('(');
        if has_base {
            output.write_char('%');
            output.write_str(REGISTER32_NAMES[insn.base as usize]);
        }
        if has_index {
            output.write_str(&format!(
                ",%{},{}",
                REGISTER32_NAMES[insn.index as usize],
                insn.scale
            ));
        }
        else if eiz_placeholder {
            output.write_str(&format!(",%eiz,{}", insn.scale));
        }
        output.write_char(')');
        Ok(())
    }

    fn write_operand(
        &self,
        insn: &Instruction,
        kind: OperandKind,
        output: &mut impl FormatterOutput,
    ) -> Result<(), FormatError> {
        let register_form = insn.modrm_mod == 0b11;
        match kind {
            OperandKind::Rm8 if register_form => {
                output.write_char('%');
                output.write_str(REGISTER8_NAMES[insn.modrm_rm as usize]);
            }
            OperandKind::Rm16 if register_form => {
                output.write_char('%');
                output.write_str(REGISTER16_NAMES[insn.modrm_rm as usize]);
            }
            OperandKind::RmFull
            | OperandKind::RFullM16
            | OperandKind::Mem
            | OperandKind::DescTableMem
                if register_form =>
            {
                output.write_char('%');
                output.write_str(self.full_register(insn, insn.modrm_rm)?);
            }
            OperandKind::Rm8
            | OperandKind::Rm16
            | OperandKind::RmFull
            | OperandKind::RFullM16
            | OperandKind::DescTableMem => {
                self.write_memory(insn, output, false)?;
            }
            OperandKind::Mem => {
                // The %eiz index placeholder is an objdump lea quirk.
                self.write_memory(insn, output, insn.opcode == 0x8d00)?;
            }
            OperandKind::Reg8 => {
                output.write_char('%');
                output.write_str(REGISTER8_NAMES[insn.modrm_reg as usize]);
            }
            OperandKind::Reg16 => {
                output.write_char('%');
                output.write_str(REGISTER16_NAMES[insn.modrm_reg as usize]);
            }
            OperandKind::RegFull => {
                output.write_char('%');
                output.write_str(self.full_register(insn, insn.modrm_reg)?);
            }
            OperandKind::SegReg => {
                let name = SEGMENT_NAMES
                    .get(insn.modrm_reg as usize)
                    .ok_or(FormatError::UnhandledOperand(kind))?;
                output.write_char('%');
                output.write_str(name);
            }
            OperandKind::Acc8 => output.write_str("%al"),
            OperandKind::AccFull => {
                output.write_char('%');
                output.write_str(self.full_register(insn, EAX)?);
            }
            OperandKind::RegCl => output.write_str("%cl"),
            OperandKind::RegDi => output.write_str("%edi"),
            OperandKind::RegInOpcodeByte => {
                output.write_char('%');
                output.write_str(REGISTER8_NAMES[(insn.opcode >> 8) as usize & 0b111]);
            }
            OperandKind::RegInOpcodeFull => {
                output.write_char('%');
                output.write_str(self.full_register(insn, (insn.opcode >> 8) as u8 & 0b111)?);
            }
            OperandKind::SegInOpcode => {
                output.write_char('%');
                output.write_str(SEGMENT_NAMES[(insn.opcode >> 11) as usize & 0b11]);
            }
            OperandKind::Imm8 | OperandKind::Imm16 | OperandKind::ImmFull => {
                output.write_str(&format!("$0x{:x}", insn.imm_off as u32));
            }
            OperandKind::SignExtImm8 => {
                let value = insn.imm_off as u32;
                let masked = match self.sizes.effective_operand(insn) {
                    SizeClass::Byte => value & 0xff,
                    SizeClass::Word => value & 0xffff,
                    _ => value,
                };
                output.write_str(&format!("$0x{masked:x}"));
            }
            OperandKind::Moffs8 | OperandKind::MoffsFull => {
                output.write_str(prefix::segment_text(insn.prefixes));
                output.write_str(&format!("0x{:x}", insn.imm_off as u32));
            }
            // Relative branch targets render empty; resolving them needs a
            // symbolizer this layer does not have.
            OperandKind::RelByte | OperandKind::RelFull => {}
            OperandKind::None => return Err(FormatError::UnhandledOperand(kind)),
        }
        Ok(())
    }
}

impl Format for AttFormatter {
    fn format(
        &mut self,
        insn: &Instruction,
        output: &mut impl FormatterOutput,
    ) -> Result<(), FormatError> {
        output.write_str(prefix::prefix_text(insn.prefixes));

        let raw = insn.opcode >> 8;
        if matches!(raw, 0xa4..=0xa7 | 0xaa..=0xaf) {
            output.write_str(&self.string_op_text(raw, insn)?);
            return Ok(());
        }

        output.write_str(insn.desc.mnemonic.to_str());
        if wants_width_suffix(insn.opcode) && insn.modrm_mod != 0b11 {
            match insn.desc.operands[0] {
                OperandKind::Rm8 => output.write_char('b'),
                OperandKind::RmFull | OperandKind::DescTableMem => output.write_char('l'),
                _ => {}
            }
        }
        output.write_char(' ');

        match insn.desc.operand_count() {
            1 => {
                if matches!(insn.opcode, 0xff02 | 0xff04) {
                    output.write_char('*');
                }
                self.write_operand(insn, insn.desc.operands[0], output)?;
            }
            2 => {
                // AT&T order: source first.
                self.write_operand(insn, insn.desc.operands[1], output)?;
                output.write_char(',');
                self.write_operand(insn, insn.desc.operands[0], output)?;
            }
            _ => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_hex_matches_objdump_spelling() {
        assert_eq!(signed_hex(0x211i32), "0x211");
        assert_eq!(signed_hex(-0xdi32), "-0xd");
        assert_eq!(signed_hex(0i32), "0x0");
        assert_eq!(signed_hex(i32::MIN), "-0x80000000");
    }

    #[test]
    fn width_suffix_set_covers_immediate_groups() {
        assert!(wants_width_suffix(0x8305));
        assert!(wants_width_suffix(0xf600));
        assert!(wants_width_suffix(0x0f0102));
        assert!(!wants_width_suffix(0xff02));
        assert!(!wants_width_suffix(0x8b00));
    }
}
