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
//! Shared vocabulary: size classes, register selector codes and name tables,
//! and the per-context default size attributes.

use crate::{instruction::Instruction, prefix::PrefixFlags};

/// Size attribute of an operand or address.
///
/// `Full` is a placeholder resolved dynamically against the effective
/// operand or address size of the instruction being rendered.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum SizeClass {
    #[default]
    None = 0,
    Byte = 1,
    Word = 2,
    Long = 3,
    Quad = 4,
    Full = 5,
}

impl SizeClass {
    /// Decode a size class from its 4-bit override-nibble encoding.
    /// Values outside the known range decode as `None` (unset).
    pub fn from_nibble(code: u8) -> SizeClass {
        match code {
            1 => SizeClass::Byte,
            2 => SizeClass::Word,
            3 => SizeClass::Long,
            4 => SizeClass::Quad,
            5 => SizeClass::Full,
            _ => SizeClass::None,
        }
    }
}

/* General-purpose register selector codes. Order matches Table B-2 of
   Section B.1.4.2 in Intel SDM Vol 2C, which is also the order implied by
   the +rb/+rw/+rd opcode column. */
pub const EAX: u8 = 0;
pub const ECX: u8 = 1;
pub const EDX: u8 = 2;
pub const EBX: u8 = 3;
pub const ESP: u8 = 4;
pub const EBP: u8 = 5;
pub const ESI: u8 = 6;
pub const EDI: u8 = 7;

/* 8-bit register selector codes. */
pub const AL: u8 = 0;
pub const CL: u8 = 1;
pub const DL: u8 = 2;
pub const BL: u8 = 3;
pub const AH: u8 = 4;
pub const CH: u8 = 5;
pub const DH: u8 = 6;
pub const BH: u8 = 7;

/* Segment register selector codes, per Table B-8 in Intel SDM Vol 2C. */
pub const ES: u8 = 0;
pub const CS: u8 = 1;
pub const SS: u8 = 2;
pub const DS: u8 = 3;
pub const FS: u8 = 4;
pub const GS: u8 = 5;

pub const REGISTER8_NAMES: [&str; 8] = ["al", "cl", "dl", "bl", "ah", "ch", "dh", "bh"];
pub const REGISTER16_NAMES: [&str; 8] = ["ax", "cx", "dx", "bx", "sp", "bp", "si", "di"];
pub const REGISTER32_NAMES: [&str; 8] = ["eax", "ecx", "edx", "ebx", "esp", "ebp", "esi", "edi"];
pub const REGISTER64_NAMES: [&str; 8] = ["rax", "rcx", "rdx", "rbx", "rsp", "rbp", "rsi", "rdi"];
pub const SEGMENT_NAMES: [&str; 6] = ["es", "cs", "ss", "ds", "fs", "gs"];

/// The context's default operand/address size attributes, recomputed
/// eagerly whenever a mode bit changes. Resolution of *effective* sizes is
/// a pure function of these defaults plus the instruction's prefix mask and
/// override nibble, which is what makes formatting independent of the
/// cursor.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SizeDefaults {
    pub operand: SizeClass,
    pub address: SizeClass,
}

/// Operand/address size toggled by a size-override prefix.
#[inline]
fn override_size(size: SizeClass) -> SizeClass {
    match size {
        SizeClass::Word => SizeClass::Long,
        SizeClass::Long => SizeClass::Word,
        other => other,
    }
}

impl SizeDefaults {
    /// Default sizes for a processor mode, exactly as the Intel manual
    /// specifies for the D-flag/mode combination: long only when protected
    /// mode is on and the D flag is set, word otherwise.
    pub fn for_mode(protected: bool, dflag: bool) -> SizeDefaults {
        let size = if protected && dflag { SizeClass::Long } else { SizeClass::Word };
        SizeDefaults {
            operand: size,
            address: size,
        }
    }

    /// Effective operand size for one instruction. An instruction-intrinsic
    /// override always wins over the prefix-driven toggle.
    pub fn effective_operand(&self, insn: &Instruction) -> SizeClass {
        match SizeClass::from_nibble(insn.size_override & 0x0f) {
            SizeClass::None => {
                if insn.prefixes & PrefixFlags::OPERAND_SIZE != 0 {
                    override_size(self.operand)
                }
                else {
                    self.operand
                }
            }
            fixed => fixed,
        }
    }

    /// Effective address size for one instruction; identical rule to
    /// [SizeDefaults::effective_operand] against the address-size prefix and
    /// the high override nibble.
    pub fn effective_address(&self, insn: &Instruction) -> SizeClass {
        match SizeClass::from_nibble(insn.size_override >> 4) {
            SizeClass::None => {
                if insn.prefixes & PrefixFlags::ADDRESS_SIZE != 0 {
                    override_size(self.address)
                }
                else {
                    self.address
                }
            }
            fixed => fixed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_defaults() {
        assert_eq!(
            SizeDefaults::for_mode(true, true),
            SizeDefaults {
                operand: SizeClass::Long,
                address: SizeClass::Long
            }
        );
        assert_eq!(SizeDefaults::for_mode(true, false).operand, SizeClass::Word);
        // Real mode floors at word regardless of the D flag.
        assert_eq!(SizeDefaults::for_mode(false, true).operand, SizeClass::Word);
        assert_eq!(SizeDefaults::for_mode(false, false).address, SizeClass::Word);
    }

    #[test]
    fn effective_sizes_cover_both_prefix_flags() {
        let sizes = SizeDefaults::for_mode(true, true);
        let mut insn = Instruction::default();

        // No prefixes: context defaults.
        assert_eq!(sizes.effective_operand(&insn), SizeClass::Long);
        assert_eq!(sizes.effective_address(&insn), SizeClass::Long);

        // Operand-size override toggles the operand attribute only.
        insn.prefixes = PrefixFlags::OPERAND_SIZE;
        assert_eq!(sizes.effective_operand(&insn), SizeClass::Word);
        assert_eq!(sizes.effective_address(&insn), SizeClass::Long);

        // Address-size override toggles the address attribute only.
        insn.prefixes = PrefixFlags::ADDRESS_SIZE;
        assert_eq!(sizes.effective_operand(&insn), SizeClass::Long);
        assert_eq!(sizes.effective_address(&insn), SizeClass::Word);

        // Both prefixes toggle both attributes.
        insn.prefixes = PrefixFlags::OPERAND_SIZE | PrefixFlags::ADDRESS_SIZE;
        assert_eq!(sizes.effective_operand(&insn), SizeClass::Word);
        assert_eq!(sizes.effective_address(&insn), SizeClass::Word);
    }

    #[test]
    fn intrinsic_override_beats_prefix_toggle() {
        let sizes = SizeDefaults::for_mode(true, true);
        let mut insn = Instruction::default();
        insn.prefixes = PrefixFlags::OPERAND_SIZE | PrefixFlags::ADDRESS_SIZE;
        insn.size_override = (SizeClass::Long as u8) << 4 | SizeClass::Byte as u8;
        assert_eq!(sizes.effective_operand(&insn), SizeClass::Byte);
        assert_eq!(sizes.effective_address(&insn), SizeClass::Long);
    }
}
