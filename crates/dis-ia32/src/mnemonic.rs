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

use std::fmt;

/// All mnemonics reachable from the opcode tables.
#[allow(clippy::upper_case_acronyms)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Mnemonic {
    AAA,
    AAD,
    AAM,
    AAS,
    ADC,
    ADD,
    AND,
    ARPL,
    BOUND,
    BSF,
    BSR,
    BSWAP,
    BT,
    BTC,
    BTR,
    BTS,
    CALL,
    CDQ,
    CLC,
    CLD,
    CLI,
    CLTS,
    CMC,
    CMP,
    CMPS,
    CPUID,
    CWDE,
    DAA,
    DAS,
    DEC,
    DIV,
    HLT,
    IDIV,
    IMUL,
    IN,
    INC,
    INT,
    INT1,
    INT3,
    INTO,
    INVD,
    IRET,
    JB,
    JBE,
    JECXZ,
    JL,
    JLE,
    JMP,
    JNB,
    JNBE,
    JNL,
    JNLE,
    JNO,
    JNP,
    JNS,
    JNZ,
    JO,
    JP,
    JS,
    JZ,
    LAHF,
    LDS,
    LEA,
    LEAVE,
    LES,
    LGDT,
    LIDT,
    LLDT,
    LMSW,
    LODS,
    LOOP,
    LOOPNZ,
    LOOPZ,
    LTR,
    MOV,
    MOVS,
    MOVSX,
    MOVZX,
    MUL,
    NEG,
    NOP,
    NOT,
    OR,
    OUT,
    POP,
    POPA,
    POPF,
    PUSH,
    PUSHA,
    PUSHF,
    RCL,
    RCR,
    RDMSR,
    RDTSC,
    RET,
    RETF,
    ROL,
    ROR,
    SAHF,
    SALC,
    SAR,
    SBB,
    SCAS,
    SETB,
    SETBE,
    SETL,
    SETLE,
    SETNB,
    SETNBE,
    SETNL,
    SETNLE,
    SETNO,
    SETNP,
    SETNS,
    SETNZ,
    SETO,
    SETP,
    SETS,
    SETZ,
    SGDT,
    SHL,
    SHR,
    SIDT,
    SLDT,
    SMSW,
    STC,
    STD,
    STI,
    STOS,
    STR,
    SUB,
    TEST,
    VERR,
    VERW,
    WAIT,
    WBINVD,
    WRMSR,
    XCHG,
    XLAT,
    XOR,
}

impl Mnemonic {
    pub fn to_str(self) -> &'static str {
        match self {
            Mnemonic::AAA => "aaa",
            Mnemonic::AAD => "aad",
            Mnemonic::AAM => "aam",
            Mnemonic::AAS => "aas",
            Mnemonic::ADC => "adc",
            Mnemonic::ADD => "add",
            Mnemonic::AND => "and",
            Mnemonic::ARPL => "arpl",
            Mnemonic::BOUND => "bound",
            Mnemonic::BSF => "bsf",
            Mnemonic::BSR => "bsr",
            Mnemonic::BSWAP => "bswap",
            Mnemonic::BT => "bt",
            Mnemonic::BTC => "btc",
            Mnemonic::BTR => "btr",
            Mnemonic::BTS => "bts",
            Mnemonic::CALL => "call",
            Mnemonic::CDQ => "cdq",
            Mnemonic::CLC => "clc",
            Mnemonic::CLD => "cld",
            Mnemonic::CLI => "cli",
            Mnemonic::CLTS => "clts",
            Mnemonic::CMC => "cmc",
            Mnemonic::CMP => "cmp",
            Mnemonic::CMPS => "cmps",
            Mnemonic::CPUID => "cpuid",
            Mnemonic::CWDE => "cwde",
            Mnemonic::DAA => "daa",
            Mnemonic::DAS => "das",
            Mnemonic::DEC => "dec",
            Mnemonic::DIV => "div",
            Mnemonic::HLT => "hlt",
            Mnemonic::IDIV => "idiv",
            Mnemonic::IMUL => "imul",
            Mnemonic::IN => "in",
            Mnemonic::INC => "inc",
            Mnemonic::INT => "int",
            Mnemonic::INT1 => "int1",
            Mnemonic::INT3 => "int3",
            Mnemonic::INTO => "into",
            Mnemonic::INVD => "invd",
            Mnemonic::IRET => "iret",
            Mnemonic::JB => "jb",
            Mnemonic::JBE => "jbe",
            Mnemonic::JECXZ => "jecxz",
            Mnemonic::JL => "jl",
            Mnemonic::JLE => "jle",
            Mnemonic::JMP => "jmp",
            Mnemonic::JNB => "jnb",
            Mnemonic::JNBE => "jnbe",
            Mnemonic::JNL => "jnl",
            Mnemonic::JNLE => "jnle",
            Mnemonic::JNO => "jno",
            Mnemonic::JNP => "jnp",
            Mnemonic::JNS => "jns",
            Mnemonic::JNZ => "jnz",
            Mnemonic::JO => "jo",
            Mnemonic::JP => "jp",
            Mnemonic::JS => "js",
            Mnemonic::JZ => "jz",
            Mnemonic::LAHF => "lahf",
            Mnemonic::LDS => "lds",
            Mnemonic::LEA => "lea",
            Mnemonic::LEAVE => "leave",
            Mnemonic::LES => "les",
            Mnemonic::LGDT => "lgdt",
            Mnemonic::LIDT => "lidt",
            Mnemonic::LLDT => "lldt",
            Mnemonic::LMSW => "lmsw",
            Mnemonic::LODS => "lods",
            Mnemonic::LOOP => "loop",
            Mnemonic::LOOPNZ => "loopnz",
            Mnemonic::LOOPZ => "loopz",
            Mnemonic::LTR => "ltr",
            Mnemonic::MOV => "mov",
            Mnemonic::MOVS => "movs",
            Mnemonic::MOVSX => "movsx",
            Mnemonic::MOVZX => "movzx",
            Mnemonic::MUL => "mul",
            Mnemonic::NEG => "neg",
            Mnemonic::NOP => "nop",
            Mnemonic::NOT => "not",
            Mnemonic::OR => "or",
            Mnemonic::OUT => "out",
            Mnemonic::POP => "pop",
            Mnemonic::POPA => "popa",
            Mnemonic::POPF => "popf",
            Mnemonic::PUSH => "push",
            Mnemonic::PUSHA => "pusha",
            Mnemonic::PUSHF => "pushf",
            Mnemonic::RCL => "rcl",
            Mnemonic::RCR => "rcr",
            Mnemonic::RDMSR => "rdmsr",
            Mnemonic::RDTSC => "rdtsc",
            Mnemonic::RET => "ret",
            Mnemonic::RETF => "retf",
            Mnemonic::ROL => "rol",
            Mnemonic::ROR => "ror",
            Mnemonic::SAHF => "sahf",
            Mnemonic::SALC => "salc",
            Mnemonic::SAR => "sar",
            Mnemonic::SBB => "sbb",
            Mnemonic::SCAS => "scas",
            Mnemonic::SETB => "setb",
            Mnemonic::SETBE => "setbe",
            Mnemonic::SETL => "setl",
            Mnemonic::SETLE => "setle",
            Mnemonic::SETNB => "setnb",
            Mnemonic::SETNBE => "setnbe",
            Mnemonic::SETNL => "setnl",
            Mnemonic::SETNLE => "setnle",
            Mnemonic::SETNO => "setno",
            Mnemonic::SETNP => "setnp",
            Mnemonic::SETNS => "setns",
            Mnemonic::SETNZ => "setnz",
            Mnemonic::SETO => "seto",
            Mnemonic::SETP => "setp",
            Mnemonic::SETS => "sets",
            Mnemonic::SETZ => "setz",
            Mnemonic::SGDT => "sgdt",
            Mnemonic::SHL => "shl",
            Mnemonic::SHR => "shr",
            Mnemonic::SIDT => "sidt",
            Mnemonic::SLDT => "sldt",
            Mnemonic::SMSW => "smsw",
            Mnemonic::STC => "stc",
            Mnemonic::STD => "std",
            Mnemonic::STI => "sti",
            Mnemonic::STOS => "stos",
            Mnemonic::STR => "str",
            Mnemonic::SUB => "sub",
            Mnemonic::TEST => "test",
            Mnemonic::VERR => "verr",
            Mnemonic::VERW => "verw",
            Mnemonic::WAIT => "wait",
            Mnemonic::WBINVD => "wbinvd",
            Mnemonic::WRMSR => "wrmsr",
            Mnemonic::XCHG => "xchg",
            Mnemonic::XLAT => "xlat",
            Mnemonic::XOR => "xor",
        }
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}
