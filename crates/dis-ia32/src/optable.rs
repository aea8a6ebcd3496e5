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
//! Opcode descriptor tables for the 80386 general-purpose instruction set.
//!
//! Two flat 256-entry tables cover the one-byte and `0x0f`-escaped opcode
//! spaces. Opcodes whose meaning depends on the ModR/M reg field carry the
//! `GROUP` flag and resolve through [group_lookup] with a composite key of
//! `(opcode << 8) | reg`. Operand tags are stored in Intel order; the
//! formatter reverses them.

use crate::{error::DecodeError, mnemonic::Mnemonic};

/// How to extract and render one operand.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum OperandKind {
    #[default]
    None,
    /// ModR/M r/m field, byte-sized.
    Rm8,
    /// ModR/M r/m field, always word-sized.
    Rm16,
    /// ModR/M r/m field at the effective operand size.
    RmFull,
    /// ModR/M r/m field: full-size register form, word-sized memory form.
    RFullM16,
    /// ModR/M r/m field, memory form only, rendered as a bare address.
    Mem,
    /// Memory operand of the descriptor-table loads and stores.
    DescTableMem,
    /// ModR/M reg field, byte-sized.
    Reg8,
    /// ModR/M reg field, always word-sized.
    Reg16,
    /// ModR/M reg field at the effective operand size.
    RegFull,
    /// ModR/M reg field selecting a segment register.
    SegReg,
    /// Implicit al.
    Acc8,
    /// Implicit accumulator at the effective operand size.
    AccFull,
    /// Implicit cl (shift counts).
    RegCl,
    /// Implicit string destination index (edi).
    RegDi,
    /// Register selector in the low three opcode bits, byte-sized.
    RegInOpcodeByte,
    /// Register selector in the low three opcode bits, full-sized.
    RegInOpcodeFull,
    /// Segment selector in opcode bits 3..5.
    SegInOpcode,
    /// Immediate byte, zero-extended.
    Imm8,
    /// Immediate word, zero-extended.
    Imm16,
    /// Immediate at the effective operand size.
    ImmFull,
    /// Immediate byte, sign-extended to the effective operand size.
    SignExtImm8,
    /// Absolute byte-sized memory offset at the effective address size.
    Moffs8,
    /// Absolute full-sized memory offset at the effective address size.
    MoffsFull,
    /// Relative branch displacement, one byte.
    RelByte,
    /// Relative branch displacement at the effective address size.
    RelFull,
}

impl OperandKind {
    /// True for tags whose extraction requires a ModR/M byte.
    pub fn uses_modrm(self) -> bool {
        matches!(
            self,
            OperandKind::Rm8
                | OperandKind::Rm16
                | OperandKind::RmFull
                | OperandKind::RFullM16
                | OperandKind::Mem
                | OperandKind::DescTableMem
                | OperandKind::Reg8
                | OperandKind::Reg16
                | OperandKind::RegFull
                | OperandKind::SegReg
        )
    }
}

/// One opcode-table entry.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct InsnDescriptor {
    pub mnemonic: Mnemonic,
    pub flags: u64,
    /// Intrinsic size overrides, same nibble packing as
    /// `Instruction::size_override`. Zero for almost every opcode.
    pub size_override: u8,
    /// Operand tags in Intel (destination-first) order, terminated by the
    /// first `None` slot.
    pub operands: [OperandKind; 4],
}

impl InsnDescriptor {
    pub const VALID: u64 = 0b01;
    pub const GROUP: u64 = 0b10;

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.flags & Self::VALID != 0
    }

    #[inline]
    pub fn is_group(&self) -> bool {
        self.flags & Self::GROUP != 0
    }

    pub fn needs_modrm(&self) -> bool {
        self.is_group() || self.operands.iter().any(|op| op.uses_modrm())
    }

    pub fn operand_count(&self) -> usize {
        self.operands.iter().take_while(|op| **op != OperandKind::None).count()
    }
}

macro_rules! inst {
    () => {
        InsnDescriptor {
            mnemonic: Mnemonic::NOP,
            flags: 0,
            size_override: 0,
            operands: [OperandKind::None; 4],
        }
    };
    ($mn:ident) => {
        InsnDescriptor {
            mnemonic: Mnemonic::$mn,
            flags: InsnDescriptor::VALID,
            size_override: 0,
            operands: [OperandKind::None; 4],
        }
    };
    ($mn:ident, [$a:ident]) => {
        InsnDescriptor {
            mnemonic: Mnemonic::$mn,
            flags: InsnDescriptor::VALID,
            size_override: 0,
            operands: [OperandKind::$a, OperandKind::None, OperandKind::None, OperandKind::None],
        }
    };
    ($mn:ident, [$a:ident, $b:ident]) => {
        InsnDescriptor {
            mnemonic: Mnemonic::$mn,
            flags: InsnDescriptor::VALID,
            size_override: 0,
            operands: [OperandKind::$a, OperandKind::$b, OperandKind::None, OperandKind::None],
        }
    };
}

macro_rules! grp {
    () => {
        InsnDescriptor {
            mnemonic: Mnemonic::NOP,
            flags: InsnDescriptor::VALID | InsnDescriptor::GROUP,
            size_override: 0,
            operands: [OperandKind::None; 4],
        }
    };
}

/// Placeholder descriptor, also the one the 0x90 special case resolves to.
pub static NOP_DESC: InsnDescriptor = inst!(NOP);

#[rustfmt::skip]
pub static ONE_BYTE_OPS: [InsnDescriptor; 256] = [
    inst!(ADD, [Rm8, Reg8]),            // 0x00
    inst!(ADD, [RmFull, RegFull]),      // 0x01
    inst!(ADD, [Reg8, Rm8]),            // 0x02
    inst!(ADD, [RegFull, RmFull]),      // 0x03
    inst!(ADD, [Acc8, Imm8]),           // 0x04
    inst!(ADD, [AccFull, ImmFull]),     // 0x05
    inst!(PUSH, [SegInOpcode]),         // 0x06
    inst!(POP, [SegInOpcode]),          // 0x07
    inst!(OR, [Rm8, Reg8]),             // 0x08
    inst!(OR, [RmFull, RegFull]),       // 0x09
    inst!(OR, [Reg8, Rm8]),             // 0x0a
    inst!(OR, [RegFull, RmFull]),       // 0x0b
    inst!(OR, [Acc8, Imm8]),            // 0x0c
    inst!(OR, [AccFull, ImmFull]),      // 0x0d
    inst!(PUSH, [SegInOpcode]),         // 0x0e
    inst!(),                            // 0x0f escape, handled before lookup
    inst!(ADC, [Rm8, Reg8]),            // 0x10
    inst!(ADC, [RmFull, RegFull]),      // 0x11
    inst!(ADC, [Reg8, Rm8]),            // 0x12
    inst!(ADC, [RegFull, RmFull]),      // 0x13
    inst!(ADC, [Acc8, Imm8]),           // 0x14
    inst!(ADC, [AccFull, ImmFull]),     // 0x15
    inst!(PUSH, [SegInOpcode]),         // 0x16
    inst!(POP, [SegInOpcode]),          // 0x17
    inst!(SBB, [Rm8, Reg8]),            // 0x18
    inst!(SBB, [RmFull, RegFull]),      // 0x19
    inst!(SBB, [Reg8, Rm8]),            // 0x1a
    inst!(SBB, [RegFull, RmFull]),      // 0x1b
    inst!(SBB, [Acc8, Imm8]),           // 0x1c
    inst!(SBB, [AccFull, ImmFull]),     // 0x1d
    inst!(PUSH, [SegInOpcode]),         // 0x1e
    inst!(POP, [SegInOpcode]),          // 0x1f
    inst!(AND, [Rm8, Reg8]),            // 0x20
    inst!(AND, [RmFull, RegFull]),      // 0x21
    inst!(AND, [Reg8, Rm8]),            // 0x22
    inst!(AND, [RegFull, RmFull]),      // 0x23
    inst!(AND, [Acc8, Imm8]),           // 0x24
    inst!(AND, [AccFull, ImmFull]),     // 0x25
    inst!(),                            // 0x26 es prefix
    inst!(DAA),                         // 0x27
    inst!(SUB, [Rm8, Reg8]),            // 0x28
    inst!(SUB, [RmFull, RegFull]),      // 0x29
    inst!(SUB, [Reg8, Rm8]),            // 0x2a
    inst!(SUB, [RegFull, RmFull]),      // 0x2b
    inst!(SUB, [Acc8, Imm8]),           // 0x2c
    inst!(SUB, [AccFull, ImmFull]),     // 0x2d
    inst!(),                            // 0x2e cs prefix
    inst!(DAS),                         // 0x2f
    inst!(XOR, [Rm8, Reg8]),            // 0x30
    inst!(XOR, [RmFull, RegFull]),      // 0x31
    inst!(XOR, [Reg8, Rm8]),            // 0x32
    inst!(XOR, [RegFull, RmFull]),      // 0x33
    inst!(XOR, [Acc8, Imm8]),           // 0x34
    inst!(XOR, [AccFull, ImmFull]),     // 0x35
    inst!(),                            // 0x36 ss prefix
    inst!(AAA),                         // 0x37
    inst!(CMP, [Rm8, Reg8]),            // 0x38
    inst!(CMP, [RmFull, RegFull]),      // 0x39
    inst!(CMP, [Reg8, Rm8]),            // 0x3a
    inst!(CMP, [RegFull, RmFull]),      // 0x3b
    inst!(CMP, [Acc8, Imm8]),           // 0x3c
    inst!(CMP, [AccFull, ImmFull]),     // 0x3d
    inst!(),                            // 0x3e ds prefix
    inst!(AAS),                         // 0x3f
    inst!(INC, [RegInOpcodeFull]),      // 0x40
    inst!(INC, [RegInOpcodeFull]),      // 0x41
    inst!(INC, [RegInOpcodeFull]),      // 0x42
    inst!(INC, [RegInOpcodeFull]),      // 0x43
    inst!(INC, [RegInOpcodeFull]),      // 0x44
    inst!(INC, [RegInOpcodeFull]),      // 0x45
    inst!(INC, [RegInOpcodeFull]),      // 0x46
    inst!(INC, [RegInOpcodeFull]),      // 0x47
    inst!(DEC, [RegInOpcodeFull]),      // 0x48
    inst!(DEC, [RegInOpcodeFull]),      // 0x49
    inst!(DEC, [RegInOpcodeFull]),      // 0x4a
    inst!(DEC, [RegInOpcodeFull]),      // 0x4b
    inst!(DEC, [RegInOpcodeFull]),      // 0x4c
    inst!(DEC, [RegInOpcodeFull]),      // 0x4d
    inst!(DEC, [RegInOpcodeFull]),      // 0x4e
    inst!(DEC, [RegInOpcodeFull]),      // 0x4f
    inst!(PUSH, [RegInOpcodeFull]),     // 0x50
    inst!(PUSH, [RegInOpcodeFull]),     // 0x51
    inst!(PUSH, [RegInOpcodeFull]),     // 0x52
    inst!(PUSH, [RegInOpcodeFull]),     // 0x53
    inst!(PUSH, [RegInOpcodeFull]),     // 0x54
    inst!(PUSH, [RegInOpcodeFull]),     // 0x55
    inst!(PUSH, [RegInOpcodeFull]),     // 0x56
    inst!(PUSH, [RegInOpcodeFull]),     // 0x57
    inst!(POP, [RegInOpcodeFull]),      // 0x58
    inst!(POP, [RegInOpcodeFull]),      // 0x59
    inst!(POP, [RegInOpcodeFull]),      // 0x5a
    inst!(POP, [RegInOpcodeFull]),      // 0x5b
    inst!(POP, [RegInOpcodeFull]),      // 0x5c
    inst!(POP, [RegInOpcodeFull]),      // 0x5d
    inst!(POP, [RegInOpcodeFull]),      // 0x5e
    inst!(POP, [RegInOpcodeFull]),      // 0x5f
    inst!(PUSHA),                       // 0x60
    inst!(POPA),                        // 0x61
    inst!(BOUND, [RegFull, Mem]),       // 0x62
    inst!(ARPL, [Rm16, Reg16]),         // 0x63
    inst!(),                            // 0x64 fs prefix
    inst!(),                            // 0x65 gs prefix
    inst!(),                            // 0x66 operand-size prefix
    inst!(),                            // 0x67 address-size prefix
    inst!(PUSH, [ImmFull]),             // 0x68
    inst!(),                            // 0x69 three-operand imul, unsupported
    inst!(PUSH, [SignExtImm8]),         // 0x6a
    inst!(),                            // 0x6b three-operand imul, unsupported
    inst!(),                            // 0x6c ins
    inst!(),                            // 0x6d ins
    inst!(),                            // 0x6e outs
    inst!(),                            // 0x6f outs
    inst!(JO, [RelByte]),               // 0x70
    inst!(JNO, [RelByte]),              // 0x71
    inst!(JB, [RelByte]),               // 0x72
    inst!(JNB, [RelByte]),              // 0x73
    inst!(JZ, [RelByte]),               // 0x74
    inst!(JNZ, [RelByte]),              // 0x75
    inst!(JBE, [RelByte]),              // 0x76
    inst!(JNBE, [RelByte]),             // 0x77
    inst!(JS, [RelByte]),               // 0x78
    inst!(JNS, [RelByte]),              // 0x79
    inst!(JP, [RelByte]),               // 0x7a
    inst!(JNP, [RelByte]),              // 0x7b
    inst!(JL, [RelByte]),               // 0x7c
    inst!(JNL, [RelByte]),              // 0x7d
    inst!(JLE, [RelByte]),              // 0x7e
    inst!(JNLE, [RelByte]),             // 0x7f
    grp!(),                             // 0x80 group 1
    grp!(),                             // 0x81 group 1
    grp!(),                             // 0x82 group 1 alias
    grp!(),                             // 0x83 group 1
    inst!(TEST, [Rm8, Reg8]),           // 0x84
    inst!(TEST, [RmFull, RegFull]),     // 0x85
    inst!(XCHG, [Reg8, Rm8]),           // 0x86
    inst!(XCHG, [RegFull, RmFull]),     // 0x87
    inst!(MOV, [Rm8, Reg8]),            // 0x88
    inst!(MOV, [RmFull, RegFull]),      // 0x89
    inst!(MOV, [Reg8, Rm8]),            // 0x8a
    inst!(MOV, [RegFull, RmFull]),      // 0x8b
    inst!(MOV, [RFullM16, SegReg]),     // 0x8c
    inst!(LEA, [RegFull, Mem]),         // 0x8d
    inst!(MOV, [SegReg, RFullM16]),     // 0x8e
    inst!(POP, [RmFull]),               // 0x8f
    inst!(XCHG, [RegInOpcodeFull, AccFull]), // 0x90, nop when un-prefixed
    inst!(XCHG, [RegInOpcodeFull, AccFull]), // 0x91
    inst!(XCHG, [RegInOpcodeFull, AccFull]), // 0x92
    inst!(XCHG, [RegInOpcodeFull, AccFull]), // 0x93
    inst!(XCHG, [RegInOpcodeFull, AccFull]), // 0x94
    inst!(XCHG, [RegInOpcodeFull, AccFull]), // 0x95
    inst!(XCHG, [RegInOpcodeFull, AccFull]), // 0x96
    inst!(XCHG, [RegInOpcodeFull, AccFull]), // 0x97
    inst!(CWDE),                        // 0x98
    inst!(CDQ),                         // 0x99
    inst!(),                            // 0x9a far call, unsupported
    inst!(WAIT),                        // 0x9b
    inst!(PUSHF),                       // 0x9c
    inst!(POPF),                        // 0x9d
    inst!(SAHF),                        // 0x9e
    inst!(LAHF),                        // 0x9f
    inst!(MOV, [Acc8, Moffs8]),         // 0xa0
    inst!(MOV, [AccFull, MoffsFull]),   // 0xa1
    inst!(MOV, [Moffs8, Acc8]),         // 0xa2
    inst!(MOV, [MoffsFull, AccFull]),   // 0xa3
    inst!(MOVS),                        // 0xa4
    inst!(MOVS),                        // 0xa5
    inst!(CMPS),                        // 0xa6
    inst!(CMPS),                        // 0xa7
    inst!(TEST, [Acc8, Imm8]),          // 0xa8
    inst!(TEST, [AccFull, ImmFull]),    // 0xa9
    inst!(STOS),                        // 0xaa
    inst!(STOS),                        // 0xab
    inst!(LODS),                        // 0xac
    inst!(LODS),                        // 0xad
    inst!(SCAS),                        // 0xae
    inst!(SCAS),                        // 0xaf
    inst!(MOV, [RegInOpcodeByte, Imm8]), // 0xb0
    inst!(MOV, [RegInOpcodeByte, Imm8]), // 0xb1
    inst!(MOV, [RegInOpcodeByte, Imm8]), // 0xb2
    inst!(MOV, [RegInOpcodeByte, Imm8]), // 0xb3
    inst!(MOV, [RegInOpcodeByte, Imm8]), // 0xb4
    inst!(MOV, [RegInOpcodeByte, Imm8]), // 0xb5
    inst!(MOV, [RegInOpcodeByte, Imm8]), // 0xb6
    inst!(MOV, [RegInOpcodeByte, Imm8]), // 0xb7
    inst!(MOV, [RegInOpcodeFull, ImmFull]), // 0xb8
    inst!(MOV, [RegInOpcodeFull, ImmFull]), // 0xb9
    inst!(MOV, [RegInOpcodeFull, ImmFull]), // 0xba
    inst!(MOV, [RegInOpcodeFull, ImmFull]), // 0xbb
    inst!(MOV, [RegInOpcodeFull, ImmFull]), // 0xbc
    inst!(MOV, [RegInOpcodeFull, ImmFull]), // 0xbd
    inst!(MOV, [RegInOpcodeFull, ImmFull]), // 0xbe
    inst!(MOV, [RegInOpcodeFull, ImmFull]), // 0xbf
    grp!(),                             // 0xc0 group 2
    grp!(),                             // 0xc1 group 2
    inst!(RET, [Imm16]),                // 0xc2
    inst!(RET),                         // 0xc3
    inst!(LES, [RegFull, Mem]),         // 0xc4
    inst!(LDS, [RegFull, Mem]),         // 0xc5
    grp!(),                             // 0xc6 group 11
    grp!(),                             // 0xc7 group 11
    inst!(),                            // 0xc8 enter, unsupported
    inst!(LEAVE),                       // 0xc9
    inst!(RETF, [Imm16]),               // 0xca
    inst!(RETF),                        // 0xcb
    inst!(INT3),                        // 0xcc
    inst!(INT, [Imm8]),                 // 0xcd
    inst!(INTO),                        // 0xce
    inst!(IRET),                        // 0xcf
    grp!(),                             // 0xd0 group 2
    grp!(),                             // 0xd1 group 2
    grp!(),                             // 0xd2 group 2
    grp!(),                             // 0xd3 group 2
    inst!(AAM, [Imm8]),                 // 0xd4
    inst!(AAD, [Imm8]),                 // 0xd5
    inst!(SALC),                        // 0xd6
    inst!(XLAT),                        // 0xd7
    inst!(),                            // 0xd8 x87
    inst!(),                            // 0xd9 x87
    inst!(),                            // 0xda x87
    inst!(),                            // 0xdb x87
    inst!(),                            // 0xdc x87
    inst!(),                            // 0xdd x87
    inst!(),                            // 0xde x87
    inst!(),                            // 0xdf x87
    inst!(LOOPNZ, [RelByte]),           // 0xe0
    inst!(LOOPZ, [RelByte]),            // 0xe1
    inst!(LOOP, [RelByte]),             // 0xe2
    inst!(JECXZ, [RelByte]),            // 0xe3
    inst!(IN, [Acc8, Imm8]),            // 0xe4
    inst!(IN, [AccFull, Imm8]),         // 0xe5
    inst!(OUT, [Imm8, Acc8]),           // 0xe6
    inst!(OUT, [Imm8, AccFull]),        // 0xe7
    inst!(CALL, [RelFull]),             // 0xe8
    inst!(JMP, [RelFull]),              // 0xe9
    inst!(),                            // 0xea far jmp, unsupported
    inst!(JMP, [RelByte]),              // 0xeb
    inst!(),                            // 0xec in from dx
    inst!(),                            // 0xed in from dx
    inst!(),                            // 0xee out to dx
    inst!(),                            // 0xef out to dx
    inst!(),                            // 0xf0 lock prefix
    inst!(INT1),                        // 0xf1
    inst!(),                            // 0xf2 repne prefix
    inst!(),                            // 0xf3 rep prefix
    inst!(HLT),                         // 0xf4
    inst!(CMC),                         // 0xf5
    grp!(),                             // 0xf6 group 3
    grp!(),                             // 0xf7 group 3
    inst!(CLC),                         // 0xf8
    inst!(STC),                         // 0xf9
    inst!(CLI),                         // 0xfa
    inst!(STI),                         // 0xfb
    inst!(CLD),                         // 0xfc
    inst!(STD),                         // 0xfd
    grp!(),                             // 0xfe group 4
    grp!(),                             // 0xff group 5
];

#[rustfmt::skip]
pub static TWO_BYTE_OPS: [InsnDescriptor; 256] = [
    grp!(),                             // 0x0f00 group 6
    grp!(),                             // 0x0f01 group 7
    inst!(),                            // 0x0f02 lar
    inst!(),                            // 0x0f03 lsl
    inst!(),                            // 0x0f04
    inst!(),                            // 0x0f05
    inst!(CLTS),                        // 0x0f06
    inst!(),                            // 0x0f07
    inst!(INVD),                        // 0x0f08
    inst!(WBINVD),                      // 0x0f09
    inst!(),                            // 0x0f0a
    inst!(),                            // 0x0f0b
    inst!(),                            // 0x0f0c
    inst!(),                            // 0x0f0d
    inst!(),                            // 0x0f0e
    inst!(),                            // 0x0f0f
    inst!(), inst!(), inst!(), inst!(), // 0x0f10-0x0f13
    inst!(), inst!(), inst!(), inst!(), // 0x0f14-0x0f17
    inst!(), inst!(), inst!(), inst!(), // 0x0f18-0x0f1b
    inst!(), inst!(), inst!(), inst!(), // 0x0f1c-0x0f1f
    inst!(), inst!(), inst!(), inst!(), // 0x0f20-0x0f23 mov cr/dr, unsupported
    inst!(), inst!(), inst!(), inst!(), // 0x0f24-0x0f27
    inst!(), inst!(), inst!(), inst!(), // 0x0f28-0x0f2b
    inst!(), inst!(), inst!(), inst!(), // 0x0f2c-0x0f2f
    inst!(WRMSR),                       // 0x0f30
    inst!(RDTSC),                       // 0x0f31
    inst!(RDMSR),                       // 0x0f32
    inst!(),                            // 0x0f33
    inst!(), inst!(), inst!(), inst!(), // 0x0f34-0x0f37
    inst!(), inst!(), inst!(), inst!(), // 0x0f38-0x0f3b
    inst!(), inst!(), inst!(), inst!(), // 0x0f3c-0x0f3f
    inst!(), inst!(), inst!(), inst!(), // 0x0f40-0x0f43
    inst!(), inst!(), inst!(), inst!(), // 0x0f44-0x0f47
    inst!(), inst!(), inst!(), inst!(), // 0x0f48-0x0f4b
    inst!(), inst!(), inst!(), inst!(), // 0x0f4c-0x0f4f
    inst!(), inst!(), inst!(), inst!(), // 0x0f50-0x0f53
    inst!(), inst!(), inst!(), inst!(), // 0x0f54-0x0f57
    inst!(), inst!(), inst!(), inst!(), // 0x0f58-0x0f5b
    inst!(), inst!(), inst!(), inst!(), // 0x0f5c-0x0f5f
    inst!(), inst!(), inst!(), inst!(), // 0x0f60-0x0f63
    inst!(), inst!(), inst!(), inst!(), // 0x0f64-0x0f67
    inst!(), inst!(), inst!(), inst!(), // 0x0f68-0x0f6b
    inst!(), inst!(), inst!(), inst!(), // 0x0f6c-0x0f6f
    inst!(), inst!(), inst!(), inst!(), // 0x0f70-0x0f73
    inst!(), inst!(), inst!(), inst!(), // 0x0f74-0x0f77
    inst!(), inst!(), inst!(), inst!(), // 0x0f78-0x0f7b
    inst!(), inst!(), inst!(), inst!(), // 0x0f7c-0x0f7f
    inst!(JO, [RelFull]),               // 0x0f80
    inst!(JNO, [RelFull]),              // 0x0f81
    inst!(JB, [RelFull]),               // 0x0f82
    inst!(JNB, [RelFull]),              // 0x0f83
    inst!(JZ, [RelFull]),               // 0x0f84
    inst!(JNZ, [RelFull]),              // 0x0f85
    inst!(JBE, [RelFull]),              // 0x0f86
    inst!(JNBE, [RelFull]),             // 0x0f87
    inst!(JS, [RelFull]),               // 0x0f88
    inst!(JNS, [RelFull]),              // 0x0f89
    inst!(JP, [RelFull]),               // 0x0f8a
    inst!(JNP, [RelFull]),              // 0x0f8b
    inst!(JL, [RelFull]),               // 0x0f8c
    inst!(JNL, [RelFull]),              // 0x0f8d
    inst!(JLE, [RelFull]),              // 0x0f8e
    inst!(JNLE, [RelFull]),             // 0x0f8f
    inst!(SETO, [Rm8]),                 // 0x0f90
    inst!(SETNO, [Rm8]),                // 0x0f91
    inst!(SETB, [Rm8]),                 // 0x0f92
    inst!(SETNB, [Rm8]),                // 0x0f93
    inst!(SETZ, [Rm8]),                 // 0x0f94
    inst!(SETNZ, [Rm8]),                // 0x0f95
    inst!(SETBE, [Rm8]),                // 0x0f96
    inst!(SETNBE, [Rm8]),               // 0x0f97
    inst!(SETS, [Rm8]),                 // 0x0f98
    inst!(SETNS, [Rm8]),                // 0x0f99
    inst!(SETP, [Rm8]),                 // 0x0f9a
    inst!(SETNP, [Rm8]),                // 0x0f9b
    inst!(SETL, [Rm8]),                 // 0x0f9c
    inst!(SETNL, [Rm8]),                // 0x0f9d
    inst!(SETLE, [Rm8]),                // 0x0f9e
    inst!(SETNLE, [Rm8]),               // 0x0f9f
    inst!(),                            // 0x0fa0 push fs, unsupported
    inst!(),                            // 0x0fa1 pop fs, unsupported
    inst!(CPUID),                       // 0x0fa2
    inst!(BT, [RmFull, RegFull]),       // 0x0fa3
    inst!(),                            // 0x0fa4 shld
    inst!(),                            // 0x0fa5 shld
    inst!(),                            // 0x0fa6
    inst!(),                            // 0x0fa7
    inst!(),                            // 0x0fa8 push gs, unsupported
    inst!(),                            // 0x0fa9 pop gs, unsupported
    inst!(),                            // 0x0faa
    inst!(BTS, [RmFull, RegFull]),      // 0x0fab
    inst!(),                            // 0x0fac shrd
    inst!(),                            // 0x0fad shrd
    inst!(),                            // 0x0fae
    inst!(IMUL, [RegFull, RmFull]),     // 0x0faf
    inst!(), inst!(),                   // 0x0fb0-0x0fb1 cmpxchg
    inst!(),                            // 0x0fb2 lss
    inst!(BTR, [RmFull, RegFull]),      // 0x0fb3
    inst!(),                            // 0x0fb4 lfs
    inst!(),                            // 0x0fb5 lgs
    inst!(MOVZX, [RegFull, Rm8]),       // 0x0fb6
    inst!(MOVZX, [RegFull, Rm16]),      // 0x0fb7
    inst!(),                            // 0x0fb8
    inst!(),                            // 0x0fb9
    grp!(),                             // 0x0fba group 8
    inst!(BTC, [RmFull, RegFull]),      // 0x0fbb
    inst!(BSF, [RegFull, RmFull]),      // 0x0fbc
    inst!(BSR, [RegFull, RmFull]),      // 0x0fbd
    inst!(MOVSX, [RegFull, Rm8]),       // 0x0fbe
    inst!(MOVSX, [RegFull, Rm16]),      // 0x0fbf
    inst!(), inst!(),                   // 0x0fc0-0x0fc1 xadd
    inst!(), inst!(), inst!(), inst!(), // 0x0fc2-0x0fc5
    inst!(), inst!(),                   // 0x0fc6-0x0fc7
    inst!(BSWAP, [RegInOpcodeFull]),    // 0x0fc8
    inst!(BSWAP, [RegInOpcodeFull]),    // 0x0fc9
    inst!(BSWAP, [RegInOpcodeFull]),    // 0x0fca
    inst!(BSWAP, [RegInOpcodeFull]),    // 0x0fcb
    inst!(BSWAP, [RegInOpcodeFull]),    // 0x0fcc
    inst!(BSWAP, [RegInOpcodeFull]),    // 0x0fcd
    inst!(BSWAP, [RegInOpcodeFull]),    // 0x0fce
    inst!(BSWAP, [RegInOpcodeFull]),    // 0x0fcf
    inst!(), inst!(), inst!(), inst!(), // 0x0fd0-0x0fd3
    inst!(), inst!(), inst!(), inst!(), // 0x0fd4-0x0fd7
    inst!(), inst!(), inst!(), inst!(), // 0x0fd8-0x0fdb
    inst!(), inst!(), inst!(), inst!(), // 0x0fdc-0x0fdf
    inst!(), inst!(), inst!(), inst!(), // 0x0fe0-0x0fe3
    inst!(), inst!(), inst!(), inst!(), // 0x0fe4-0x0fe7
    inst!(), inst!(), inst!(), inst!(), // 0x0fe8-0x0feb
    inst!(), inst!(), inst!(), inst!(), // 0x0fec-0x0fef
    inst!(), inst!(), inst!(), inst!(), // 0x0ff0-0x0ff3
    inst!(), inst!(), inst!(), inst!(), // 0x0ff4-0x0ff7
    inst!(), inst!(), inst!(), inst!(), // 0x0ff8-0x0ffb
    inst!(), inst!(), inst!(), inst!(), // 0x0ffc-0x0fff
];

/// Group-resolved descriptors, keyed by `(opcode << 8) | reg` and kept in
/// ascending key order for binary search. Missing reg encodings are simply
/// absent and surface as [DecodeError::GroupLookupFailed].
#[rustfmt::skip]
pub static GROUP_OPS: [(u32, InsnDescriptor); 113] = [
    (0x8000, inst!(ADD, [Rm8, Imm8])),
    (0x8001, inst!(OR, [Rm8, Imm8])),
    (0x8002, inst!(ADC, [Rm8, Imm8])),
    (0x8003, inst!(SBB, [Rm8, Imm8])),
    (0x8004, inst!(AND, [Rm8, Imm8])),
    (0x8005, inst!(SUB, [Rm8, Imm8])),
    (0x8006, inst!(XOR, [Rm8, Imm8])),
    (0x8007, inst!(CMP, [Rm8, Imm8])),
    (0x8100, inst!(ADD, [RmFull, ImmFull])),
    (0x8101, inst!(OR, [RmFull, ImmFull])),
    (0x8102, inst!(ADC, [RmFull, ImmFull])),
    (0x8103, inst!(SBB, [RmFull, ImmFull])),
    (0x8104, inst!(AND, [RmFull, ImmFull])),
    (0x8105, inst!(SUB, [RmFull, ImmFull])),
    (0x8106, inst!(XOR, [RmFull, ImmFull])),
    (0x8107, inst!(CMP, [RmFull, ImmFull])),
    (0x8200, inst!(ADD, [Rm8, Imm8])),
    (0x8201, inst!(OR, [Rm8, Imm8])),
    (0x8202, inst!(ADC, [Rm8, Imm8])),
    (0x8203, inst!(SBB, [Rm8, Imm8])),
    (0x8204, inst!(AND, [Rm8, Imm8])),
    (0x8205, inst!(SUB, [Rm8, Imm8])),
    (0x8206, inst!(XOR, [Rm8, Imm8])),
    (0x8207, inst!(CMP, [Rm8, Imm8])),
    (0x8300, inst!(ADD, [RmFull, SignExtImm8])),
    (0x8301, inst!(OR, [RmFull, SignExtImm8])),
    (0x8302, inst!(ADC, [RmFull, SignExtImm8])),
    (0x8303, inst!(SBB, [RmFull, SignExtImm8])),
    (0x8304, inst!(AND, [RmFull, SignExtImm8])),
    (0x8305, inst!(SUB, [RmFull, SignExtImm8])),
    (0x8306, inst!(XOR, [RmFull, SignExtImm8])),
    (0x8307, inst!(CMP, [RmFull, SignExtImm8])),
    (0xc000, inst!(ROL, [Rm8, Imm8])),
    (0xc001, inst!(ROR, [Rm8, Imm8])),
    (0xc002, inst!(RCL, [Rm8, Imm8])),
    (0xc003, inst!(RCR, [Rm8, Imm8])),
    (0xc004, inst!(SHL, [Rm8, Imm8])),
    (0xc005, inst!(SHR, [Rm8, Imm8])),
    (0xc007, inst!(SAR, [Rm8, Imm8])),
    (0xc100, inst!(ROL, [RmFull, Imm8])),
    (0xc101, inst!(ROR, [RmFull, Imm8])),
    (0xc102, inst!(RCL, [RmFull, Imm8])),
    (0xc103, inst!(RCR, [RmFull, Imm8])),
    (0xc104, inst!(SHL, [RmFull, Imm8])),
    (0xc105, inst!(SHR, [RmFull, Imm8])),
    (0xc107, inst!(SAR, [RmFull, Imm8])),
    (0xc600, inst!(MOV, [Rm8, Imm8])),
    (0xc700, inst!(MOV, [RmFull, ImmFull])),
    (0xd000, inst!(ROL, [Rm8])),
    (0xd001, inst!(ROR, [Rm8])),
    (0xd002, inst!(RCL, [Rm8])),
    (0xd003, inst!(RCR, [Rm8])),
    (0xd004, inst!(SHL, [Rm8])),
    (0xd005, inst!(SHR, [Rm8])),
    (0xd007, inst!(SAR, [Rm8])),
    (0xd100, inst!(ROL, [RmFull])),
    (0xd101, inst!(ROR, [RmFull])),
    (0xd102, inst!(RCL, [RmFull])),
    (0xd103, inst!(RCR, [RmFull])),
    (0xd104, inst!(SHL, [RmFull])),
    (0xd105, inst!(SHR, [RmFull])),
    (0xd107, inst!(SAR, [RmFull])),
    (0xd200, inst!(ROL, [Rm8, RegCl])),
    (0xd201, inst!(ROR, [Rm8, RegCl])),
    (0xd202, inst!(RCL, [Rm8, RegCl])),
    (0xd203, inst!(RCR, [Rm8, RegCl])),
    (0xd204, inst!(SHL, [Rm8, RegCl])),
    (0xd205, inst!(SHR, [Rm8, RegCl])),
    (0xd207, inst!(SAR, [Rm8, RegCl])),
    (0xd300, inst!(ROL, [RmFull, RegCl])),
    (0xd301, inst!(ROR, [RmFull, RegCl])),
    (0xd302, inst!(RCL, [RmFull, RegCl])),
    (0xd303, inst!(RCR, [RmFull, RegCl])),
    (0xd304, inst!(SHL, [RmFull, RegCl])),
    (0xd305, inst!(SHR, [RmFull, RegCl])),
    (0xd307, inst!(SAR, [RmFull, RegCl])),
    (0xf600, inst!(TEST, [Rm8, Imm8])),
    (0xf602, inst!(NOT, [Rm8])),
    (0xf603, inst!(NEG, [Rm8])),
    (0xf604, inst!(MUL, [Rm8])),
    (0xf605, inst!(IMUL, [Rm8])),
    (0xf606, inst!(DIV, [Rm8])),
    (0xf607, inst!(IDIV, [Rm8])),
    (0xf700, inst!(TEST, [RmFull, ImmFull])),
    (0xf702, inst!(NOT, [RmFull])),
    (0xf703, inst!(NEG, [RmFull])),
    (0xf704, inst!(MUL, [RmFull])),
    (0xf705, inst!(IMUL, [RmFull])),
    (0xf706, inst!(DIV, [RmFull])),
    (0xf707, inst!(IDIV, [RmFull])),
    (0xfe00, inst!(INC, [Rm8])),
    (0xfe01, inst!(DEC, [Rm8])),
    (0xff00, inst!(INC, [RmFull])),
    (0xff01, inst!(DEC, [RmFull])),
    (0xff02, inst!(CALL, [RmFull])),
    (0xff04, inst!(JMP, [RmFull])),
    (0xff06, inst!(PUSH, [RmFull])),
    (0x0f0000, inst!(SLDT, [RFullM16])),
    (0x0f0001, inst!(STR, [RFullM16])),
    (0x0f0002, inst!(LLDT, [Rm16])),
    (0x0f0003, inst!(LTR, [Rm16])),
    (0x0f0004, inst!(VERR, [Rm16])),
    (0x0f0005, inst!(VERW, [Rm16])),
    (0x0f0100, inst!(SGDT, [DescTableMem])),
    (0x0f0101, inst!(SIDT, [DescTableMem])),
    (0x0f0102, inst!(LGDT, [DescTableMem])),
    (0x0f0103, inst!(LIDT, [DescTableMem])),
    (0x0f0104, inst!(SMSW, [RFullM16])),
    (0x0f0106, inst!(LMSW, [Rm16])),
    (0x0fba04, inst!(BT, [RmFull, Imm8])),
    (0x0fba05, inst!(BTS, [RmFull, Imm8])),
    (0x0fba06, inst!(BTR, [RmFull, Imm8])),
    (0x0fba07, inst!(BTC, [RmFull, Imm8])),
];

/// Resolve a group opcode through its composite key.
pub fn group_lookup(key: u32) -> Result<&'static InsnDescriptor, DecodeError> {
    GROUP_OPS
        .binary_search_by_key(&key, |&(k, _)| k)
        .map(|idx| &GROUP_OPS[idx].1)
        .map_err(|_| DecodeError::GroupLookupFailed { key })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_keys_strictly_ascending() {
        for window in GROUP_OPS.windows(2) {
            assert!(
                window[0].0 < window[1].0,
                "keys {:#x} and {:#x} out of order",
                window[0].0,
                window[1].0
            );
        }
    }

    #[test]
    fn group_lookup_hits_and_misses() {
        assert_eq!(group_lookup(0x8305).unwrap().mnemonic, Mnemonic::SUB);
        assert_eq!(group_lookup(0x0f0102).unwrap().mnemonic, Mnemonic::LGDT);
        assert_eq!(
            group_lookup(0xff07).unwrap_err(),
            DecodeError::GroupLookupFailed { key: 0xff07 }
        );
        assert_eq!(
            group_lookup(0xff03).unwrap_err(),
            DecodeError::GroupLookupFailed { key: 0xff03 }
        );
        assert_eq!(
            group_lookup(0xc006).unwrap_err(),
            DecodeError::GroupLookupFailed { key: 0xc006 }
        );
    }

    #[test]
    fn every_group_flagged_entry_has_members() {
        for (byte, desc) in ONE_BYTE_OPS.iter().enumerate() {
            if desc.is_group() {
                let base = (byte as u32) << 8;
                assert!(
                    (0..8).any(|reg| group_lookup(base | reg).is_ok()),
                    "group {byte:#x} has no members"
                );
            }
        }
        for (byte, desc) in TWO_BYTE_OPS.iter().enumerate() {
            if desc.is_group() {
                let base = (0x0f00 | byte as u32) << 8;
                assert!(
                    (0..8).any(|reg| group_lookup(base | reg).is_ok()),
                    "group 0f {byte:#x} has no members"
                );
            }
        }
    }

    #[test]
    fn descriptor_shape_spot_checks() {
        let mov = &ONE_BYTE_OPS[0x8b];
        assert_eq!(mov.mnemonic, Mnemonic::MOV);
        assert_eq!(mov.operands[..2], [OperandKind::RegFull, OperandKind::RmFull]);
        assert!(mov.needs_modrm());
        assert_eq!(mov.operand_count(), 2);

        let ret = &ONE_BYTE_OPS[0xc3];
        assert!(!ret.needs_modrm());
        assert_eq!(ret.operand_count(), 0);

        let movzx = &TWO_BYTE_OPS[0xb6];
        assert_eq!(movzx.mnemonic, Mnemonic::MOVZX);
        assert!(movzx.needs_modrm());

        // Prefix bytes and recognized-but-unsupported encodings are invalid.
        assert!(!ONE_BYTE_OPS[0x66].is_valid());
        assert!(!ONE_BYTE_OPS[0x9a].is_valid());
        assert!(!ONE_BYTE_OPS[0xd8].is_valid());
        assert!(!TWO_BYTE_OPS[0x05].is_valid());
    }
}
