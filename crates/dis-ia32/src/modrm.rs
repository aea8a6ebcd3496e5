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
//! ModR/M, SIB and displacement parsing.
//!
//! Dispatch between the 16- and 32-bit addressing forms follows the
//! *effective* address size of the instruction being decoded, so an `0x67`
//! prefix in a 32-bit context consumes a 16-bit displacement.

use crate::{
    byte_source::{ByteCursor, ByteSource},
    cpu_common::SizeClass,
    error::DecodeError,
    instruction::Instruction,
};

/// Split a ModR/M (or SIB) byte into its 2/3/3 bit fields.
#[inline]
pub fn split_bitfields(byte: u8) -> (u8, u8, u8) {
    (byte >> 6, (byte >> 3) & 0b111, byte & 0b111)
}

/// Read the ModR/M byte and whatever SIB byte and displacement it implies,
/// recording the fields on `insn`.
pub fn parse_modrm<S: ByteSource>(
    cursor: &mut ByteCursor<S>,
    insn: &mut Instruction,
    address_size: SizeClass,
) -> Result<(), DecodeError> {
    let (modb, reg, rm) = split_bitfields(cursor.read_u8()?);
    insn.modrm_mod = modb;
    insn.modrm_reg = reg;
    insn.modrm_rm = rm;

    if modb == 0b11 {
        // Register form, nothing further to consume.
        return Ok(());
    }

    match address_size {
        SizeClass::Long => parse_disp32(cursor, insn, modb, rm),
        SizeClass::Word => parse_disp16(cursor, insn, modb, rm),
        other => unreachable!("effective address size {other:?}"),
    }
}

fn parse_disp32<S: ByteSource>(
    cursor: &mut ByteCursor<S>,
    insn: &mut Instruction,
    modb: u8,
    rm: u8,
) -> Result<(), DecodeError> {
    let mut sib_base = None;
    if rm == 0b100 {
        let (scale_code, index, base) = split_bitfields(cursor.read_u8()?);
        insn.scale = 1 << scale_code;
        insn.index = index;
        insn.base = base;
        sib_base = Some(base);
    }

    match modb {
        0b00 => {
            // Absolute disp32: either rm=101, or a SIB whose base slot
            // encodes ebp.
            if rm == 0b101 || sib_base == Some(0b101) {
                insn.disp = cursor.read_u32()? as i32;
                insn.disp_size = SizeClass::Long;
            }
        }
        0b01 => {
            insn.disp = cursor.read_i8()? as i32;
            insn.disp_size = SizeClass::Byte;
        }
        0b10 => {
            insn.disp = cursor.read_u32()? as i32;
            insn.disp_size = SizeClass::Long;
        }
        _ => unreachable!(),
    }
    Ok(())
}

fn parse_disp16<S: ByteSource>(
    cursor: &mut ByteCursor<S>,
    insn: &mut Instruction,
    modb: u8,
    rm: u8,
) -> Result<(), DecodeError> {
    match modb {
        0b00 => {
            if rm == 0b110 {
                insn.disp = cursor.read_u16()? as i16 as i32;
                insn.disp_size = SizeClass::Word;
            }
        }
        0b01 => {
            insn.disp = cursor.read_i8()? as i32;
            insn.disp_size = SizeClass::Byte;
        }
        0b10 => {
            insn.disp = cursor.read_u16()? as i16 as i32;
            insn.disp_size = SizeClass::Word;
        }
        _ => unreachable!(),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(bytes: &[u8], address_size: SizeClass) -> (Instruction, u64) {
        let mut cursor = ByteCursor::new(bytes);
        let mut insn = Instruction::default();
        parse_modrm(&mut cursor, &mut insn, address_size).unwrap();
        (insn, cursor.offset())
    }

    #[test]
    fn register_form_consumes_one_byte_for_every_reg() {
        for reg in 0..8u8 {
            for rm in 0..8u8 {
                let byte = 0b11 << 6 | reg << 3 | rm;
                let (insn, used) = parse(&[byte, 0xaa, 0xbb], SizeClass::Long);
                assert_eq!(used, 1);
                assert_eq!(insn.modrm_mod, 0b11);
                assert_eq!(insn.modrm_reg, reg);
                assert_eq!(insn.modrm_rm, rm);
                assert_eq!(insn.scale, 0);
            }
        }
    }

    #[test]
    fn mod0_rm5_is_absolute_disp32() {
        let (insn, used) = parse(&[0x05, 0x78, 0x56, 0x34, 0x12], SizeClass::Long);
        assert_eq!(used, 5);
        assert_eq!(insn.disp, 0x12345678);
        assert_eq!(insn.disp_size, SizeClass::Long);
    }

    #[test]
    fn sib_scale_is_power_of_two() {
        // 0x04 0x8d: mod=0 rm=100, sib scale=2 index=ecx base=ebp, so the
        // ebp base slot means absolute disp32.
        let (insn, used) = parse(&[0x04, 0x8d, 0x80, 0xa0, 0x2c, 0xc0], SizeClass::Long);
        assert_eq!(used, 6);
        assert_eq!(insn.scale, 4);
        assert_eq!(insn.index, 1);
        assert_eq!(insn.base, 0b101);
        assert_eq!(insn.disp, 0xc02ca080u32 as i32);
        assert_eq!(insn.disp_size, SizeClass::Long);
    }

    #[test]
    fn mod1_sign_extends_disp8() {
        let (insn, used) = parse(&[0x45, 0xf3], SizeClass::Long);
        assert_eq!(used, 2);
        assert_eq!(insn.disp, -0xd);
        assert_eq!(insn.disp_size, SizeClass::Byte);
        assert_eq!(insn.base, 0);
        assert_eq!(insn.scale, 0);
    }

    #[test]
    fn mod1_with_sib_keeps_base_and_index() {
        let (insn, used) = parse(&[0x54, 0x28, 0xe5], SizeClass::Long);
        assert_eq!(used, 3);
        assert_eq!(insn.scale, 1);
        assert_eq!(insn.index, 0b101);
        assert_eq!(insn.base, 0);
        assert_eq!(insn.disp, -0x1b);
    }

    #[test]
    fn word_addressing_uses_disp16_forms() {
        let (insn, used) = parse(&[0x06, 0x34, 0x12], SizeClass::Word);
        assert_eq!(used, 3);
        assert_eq!(insn.disp, 0x1234);
        assert_eq!(insn.disp_size, SizeClass::Word);

        // rm=100 is si in 16-bit addressing, never a SIB escape.
        let (insn, used) = parse(&[0x44, 0x7f], SizeClass::Word);
        assert_eq!(used, 2);
        assert_eq!(insn.scale, 0);
        assert_eq!(insn.disp, 0x7f);

        let (_, used) = parse(&[0x84, 0xcd, 0xab], SizeClass::Word);
        assert_eq!(used, 3);
    }
}
