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
//! End-to-end decode-and-format checks against objdump reference output.

use dis_ia32::{DecodeContext, DecodeError, FormatError};

fn disasm(bytes: &[u8]) -> String {
    let mut ctx = DecodeContext::new(bytes);
    let insn = ctx.decode_next().unwrap();
    assert_eq!(insn.size as usize, bytes.len(), "bytes left over after {bytes:02x?}");
    ctx.format_instruction(&insn).unwrap()
}

struct Case {
    bytes: &'static [u8],
    text: &'static str,
}

fn check(cases: &[Case]) {
    for case in cases {
        assert_eq!(disasm(case.bytes), case.text, "for bytes {:02x?}", case.bytes);
    }
}

#[test]
fn arithmetic_and_mov_forms() {
    check(&[
        Case { bytes: &[0x00, 0x00], text: "add %al,(%eax)" },
        Case { bytes: &[0x00, 0x45, 0xf3], text: "add %al,-0xd(%ebp)" },
        Case { bytes: &[0x02, 0x54, 0x28, 0xe5], text: "add -0x1b(%eax,%ebp,1),%dl" },
        Case { bytes: &[0x03, 0x05, 0x01, 0x00, 0x00, 0x00], text: "add 0x1,%eax" },
        Case {
            bytes: &[0x03, 0x04, 0x8d, 0x80, 0xa0, 0x2c, 0xc0],
            text: "add -0x3fd35f80(,%ecx,4),%eax",
        },
        Case { bytes: &[0x31, 0xc0], text: "xor %eax,%eax" },
        Case { bytes: &[0x85, 0xc0], text: "test %eax,%eax" },
        Case { bytes: &[0x89, 0xe5], text: "mov %esp,%ebp" },
        Case { bytes: &[0x8b, 0x1d, 0xa8, 0x6b, 0x25, 0xc0], text: "mov 0xc0256ba8,%ebx" },
        Case { bytes: &[0xb0, 0xeb], text: "mov $0xeb,%al" },
        Case { bytes: &[0xb8, 0x78, 0x56, 0x34, 0x12], text: "mov $0x12345678,%eax" },
        Case { bytes: &[0x63, 0xc8], text: "arpl %cx,%ax" },
    ])
}

#[test]
fn immediate_groups_and_width_suffixes() {
    check(&[
        Case { bytes: &[0x83, 0xec, 0x1c], text: "sub $0x1c,%esp" },
        Case { bytes: &[0x83, 0xc4, 0xfc], text: "add $0xfffffffc,%esp" },
        Case { bytes: &[0xf0, 0x83, 0x04, 0x24, 0x00], text: "lock addl $0x0,(%esp)" },
        Case {
            bytes: &[0xf6, 0x86, 0x11, 0x02, 0x00, 0x00, 0x40],
            text: "testb $0x40,0x211(%esi)",
        },
        Case { bytes: &[0xc7, 0x00, 0x01, 0x00, 0x00, 0x00], text: "movl $0x1,(%eax)" },
        Case { bytes: &[0xc6, 0x40, 0x04, 0x2a], text: "movb $0x2a,0x4(%eax)" },
        Case { bytes: &[0xd3, 0xe0], text: "shl %cl,%eax" },
        Case { bytes: &[0xf7, 0xd8], text: "neg %eax" },
    ])
}

#[test]
fn segment_registers_and_overrides() {
    check(&[
        Case { bytes: &[0x8c, 0xd0], text: "mov %ss,%eax" },
        Case { bytes: &[0x8e, 0xd8], text: "mov %eax,%ds" },
        Case { bytes: &[0x06], text: "push %es" },
        Case { bytes: &[0x1f], text: "pop %ds" },
        Case { bytes: &[0x64, 0xa1, 0x40, 0xce, 0x2f, 0xc0], text: "mov %fs:0xc02fce40,%eax" },
        Case { bytes: &[0x65, 0xa3, 0x00, 0x00, 0x00, 0x00], text: "mov %eax,%gs:0x0" },
        Case {
            bytes: &[0x36, 0x8b, 0x44, 0x24, 0x08],
            text: "mov %ss:0x8(%esp),%eax",
        },
    ])
}

#[test]
fn lea_keeps_the_index_placeholder() {
    check(&[
        Case { bytes: &[0x8d, 0xa1, 0x00, 0x00, 0x00, 0x40], text: "lea 0x40000000(%ecx),%esp" },
        Case { bytes: &[0x8d, 0x74, 0x26, 0x00], text: "lea 0x0(%esi,%eiz,1),%esi" },
    ])
}

#[test]
fn stack_and_flow_control() {
    check(&[
        Case { bytes: &[0x40], text: "inc %eax" },
        Case { bytes: &[0x53], text: "push %ebx" },
        Case { bytes: &[0x5d], text: "pop %ebp" },
        Case { bytes: &[0x68, 0x80, 0x00, 0x00, 0x00], text: "push $0x80" },
        Case { bytes: &[0x6a, 0x10], text: "push $0x10" },
        Case { bytes: &[0xc3], text: "ret " },
        Case { bytes: &[0xcd, 0x80], text: "int $0x80" },
        Case { bytes: &[0xff, 0x75, 0xfc], text: "push -0x4(%ebp)" },
    ])
}

#[test]
fn relative_branches_render_without_a_target() {
    check(&[
        Case { bytes: &[0xe8, 0x12, 0x00, 0x00, 0x00], text: "call " },
        Case { bytes: &[0x75, 0x16], text: "jnz " },
        Case { bytes: &[0x74, 0x10], text: "jz " },
        Case { bytes: &[0x0f, 0x85, 0x00, 0x01, 0x00, 0x00], text: "jnz " },
    ])
}

#[test]
fn indirect_branches_take_a_star() {
    check(&[
        Case { bytes: &[0xff, 0x15, 0x5c, 0xb7, 0x30, 0xc0], text: "call *0xc030b75c" },
        Case { bytes: &[0xff, 0x25, 0x00, 0x10, 0x00, 0x00], text: "jmp *0x1000" },
        Case { bytes: &[0xff, 0xd0], text: "call *%eax" },
    ])
}

#[test]
fn nop_and_prefixed_xchg() {
    check(&[
        Case { bytes: &[0x90], text: "nop " },
        Case { bytes: &[0x66, 0x90], text: "xchg %ax,%ax" },
        Case { bytes: &[0x66, 0xb8, 0x34, 0x12], text: "mov $0x1234,%ax" },
    ])
}

#[test]
fn string_family_is_fixed_text() {
    check(&[
        Case { bytes: &[0xa4], text: "movsb %ds:(%esi),%es:(%edi)" },
        Case { bytes: &[0xf3, 0xa5], text: "rep movsl %ds:(%esi),%es:(%edi)" },
        Case { bytes: &[0xf3, 0xab], text: "rep stos %eax,%es:(%edi)" },
        Case { bytes: &[0xf2, 0xae], text: "rep scas %es:(%edi),%al" },
        Case { bytes: &[0xac], text: "lods %ds:(%esi),%al" },
    ])
}

#[test]
fn system_and_two_byte_opcodes() {
    check(&[
        Case { bytes: &[0x0f, 0x01, 0x15, 0xd2, 0xcd, 0x2b, 0x00], text: "lgdtl 0x2bcdd2" },
        Case { bytes: &[0x0f, 0xa2], text: "cpuid " },
        Case { bytes: &[0x0f, 0x95, 0xc0], text: "setnz %al" },
        Case { bytes: &[0x0f, 0xaf, 0xc3], text: "imul %ebx,%eax" },
        Case { bytes: &[0x0f, 0xb6, 0x45, 0x08], text: "movzx 0x8(%ebp),%eax" },
        Case { bytes: &[0x0f, 0xc8], text: "bswap %eax" },
        Case { bytes: &[0x0f, 0xba, 0xe0, 0x07], text: "bt $0x7,%eax" },
        Case { bytes: &[0xe4, 0x60], text: "in $0x60,%al" },
        Case { bytes: &[0xe6, 0x60], text: "out %al,$0x60" },
    ])
}

#[test]
fn a_function_prologue_decodes_as_a_stream() {
    let bytes: &[u8] = &[
        0x55, // push %ebp
        0x89, 0xe5, // mov %esp,%ebp
        0x83, 0xec, 0x18, // sub $0x18,%esp
        0x8b, 0x45, 0x08, // mov 0x8(%ebp),%eax
        0xc9, // leave
        0xc3, // ret
    ];
    let expected = [
        (0u64, 1u32, "push %ebp"),
        (1, 2, "mov %esp,%ebp"),
        (3, 3, "sub $0x18,%esp"),
        (6, 3, "mov 0x8(%ebp),%eax"),
        (9, 1, "leave "),
        (10, 1, "ret "),
    ];

    let mut ctx = DecodeContext::new(bytes);
    for (start, size, text) in expected {
        let insn = ctx.decode_next().unwrap();
        assert_eq!(insn.start, start);
        assert_eq!(insn.size, size);
        assert_eq!(ctx.format_instruction(&insn).unwrap(), text);
    }
    assert_eq!(ctx.decode_next().unwrap_err(), DecodeError::EndOfStream { offset: 11 });
}

#[test]
fn decode_failures() {
    let mut ctx = DecodeContext::new(&[0x9a, 0x00, 0x00, 0x00, 0x00, 0x08, 0x00][..]);
    assert_eq!(ctx.decode_next().unwrap_err(), DecodeError::UnknownOpcode { opcode: 0x9a });

    let mut ctx = DecodeContext::new(&[0xd8, 0xc1][..]);
    assert_eq!(ctx.decode_next().unwrap_err(), DecodeError::UnknownOpcode { opcode: 0xd8 });

    let mut ctx = DecodeContext::new(&[0x0f, 0x0b][..]);
    assert_eq!(ctx.decode_next().unwrap_err(), DecodeError::UnknownOpcode { opcode: 0xf0b });

    // d0 /6 is the one hole in group 2.
    let mut ctx = DecodeContext::new(&[0xd0, 0xf0][..]);
    assert_eq!(
        ctx.decode_next().unwrap_err(),
        DecodeError::GroupLookupFailed { key: 0xd006 }
    );

    // Truncated mid-instruction.
    let mut ctx = DecodeContext::new(&[0x8b][..]);
    assert_eq!(ctx.decode_next().unwrap_err(), DecodeError::EndOfStream { offset: 1 });
}

#[test]
fn sixteen_bit_memory_decodes_but_does_not_render() {
    // The 0x67 prefix flips the addressing form, so the displacement is two
    // bytes; rendering the operand is out of scope and errors cleanly.
    let bytes: &[u8] = &[0x67, 0x8b, 0x06, 0x34, 0x12];
    let mut ctx = DecodeContext::new(bytes);
    let insn = ctx.decode_next().unwrap();
    assert_eq!(insn.size, 5);
    assert_eq!(
        ctx.format_instruction(&insn).unwrap_err(),
        FormatError::Unsupported16BitAddress
    );

    // String ops spell their index registers inline, so they fail the same
    // way instead of printing the 32-bit forms.
    let mut ctx = DecodeContext::new(&[0x67, 0xaa][..]);
    let insn = ctx.decode_next().unwrap();
    assert_eq!(insn.size, 2);
    assert_eq!(
        ctx.format_instruction(&insn).unwrap_err(),
        FormatError::Unsupported16BitAddress
    );

    let mut ctx = DecodeContext::new(&[0x67, 0xf3, 0xa5][..]);
    let insn = ctx.decode_next().unwrap();
    assert_eq!(
        ctx.format_instruction(&insn).unwrap_err(),
        FormatError::Unsupported16BitAddress
    );
}

#[test]
fn memory_only_tags_still_render_register_forms() {
    // Degenerate encodings with mod=3 under a memory-shaped operand render
    // the bare register rather than fabricating a memory expression.
    check(&[
        Case { bytes: &[0x8d, 0xc0], text: "lea %eax,%eax" },
        Case { bytes: &[0x0f, 0x01, 0xd0], text: "lgdt %eax" },
    ])
}

#[test]
fn unrenderable_segment_selector_is_an_error() {
    // 8e /7 selects a segment register that does not exist.
    let mut ctx = DecodeContext::new(&[0x8e, 0xf8][..]);
    let insn = ctx.decode_next().unwrap();
    assert!(matches!(
        ctx.format_instruction(&insn).unwrap_err(),
        FormatError::UnhandledOperand(_)
    ));
}
