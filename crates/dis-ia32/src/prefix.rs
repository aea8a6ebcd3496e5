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
//! Legacy instruction prefixes: byte recognition, the accumulated prefix
//! bitmask, and their printable spellings.

/// Bit positions for prefixes accumulated on an instruction. Repeats of the
/// same prefix collapse into one bit.
pub struct PrefixFlags;

impl PrefixFlags {
    pub const LOCK: u32 = 0b0000_0000_0001;
    pub const REPNE: u32 = 0b0000_0000_0010;
    pub const REP: u32 = 0b0000_0000_0100;
    pub const SEG_CS: u32 = 0b0000_0000_1000;
    pub const SEG_SS: u32 = 0b0000_0001_0000;
    pub const SEG_DS: u32 = 0b0000_0010_0000;
    pub const SEG_ES: u32 = 0b0000_0100_0000;
    pub const SEG_FS: u32 = 0b0000_1000_0000;
    pub const SEG_GS: u32 = 0b0001_0000_0000;
    pub const OPERAND_SIZE: u32 = 0b0010_0000_0000;
    pub const ADDRESS_SIZE: u32 = 0b0100_0000_0000;

    pub const SEG_MASK: u32 = Self::SEG_CS
        | Self::SEG_SS
        | Self::SEG_DS
        | Self::SEG_ES
        | Self::SEG_FS
        | Self::SEG_GS;
}

/// Map a prefix byte to its flag bit, or `None` for a non-prefix byte.
pub fn prefix_flag(byte: u8) -> Option<u32> {
    match byte {
        0xf0 => Some(PrefixFlags::LOCK),
        0xf2 => Some(PrefixFlags::REPNE),
        0xf3 => Some(PrefixFlags::REP),
        0x2e => Some(PrefixFlags::SEG_CS),
        0x36 => Some(PrefixFlags::SEG_SS),
        0x3e => Some(PrefixFlags::SEG_DS),
        0x26 => Some(PrefixFlags::SEG_ES),
        0x64 => Some(PrefixFlags::SEG_FS),
        0x65 => Some(PrefixFlags::SEG_GS),
        0x66 => Some(PrefixFlags::OPERAND_SIZE),
        0x67 => Some(PrefixFlags::ADDRESS_SIZE),
        _ => None,
    }
}

/// Printable spelling of the prefixes that render ahead of a mnemonic.
/// Size overrides never print; they act through the effective sizes.
pub fn prefix_text(prefixes: u32) -> &'static str {
    if prefixes & PrefixFlags::LOCK != 0 {
        "lock "
    }
    else if prefixes & (PrefixFlags::REPNE | PrefixFlags::REP) != 0 {
        // The reference output spells both repeat prefixes "rep".
        "rep "
    }
    else {
        ""
    }
}

/// Segment-override spelling for a memory operand, colon included. The
/// empty string means no segment override is active.
pub fn segment_text(prefixes: u32) -> &'static str {
    if prefixes & PrefixFlags::SEG_CS != 0 {
        "%cs:"
    }
    else if prefixes & PrefixFlags::SEG_SS != 0 {
        "%ss:"
    }
    else if prefixes & PrefixFlags::SEG_DS != 0 {
        "%ds:"
    }
    else if prefixes & PrefixFlags::SEG_ES != 0 {
        "%es:"
    }
    else if prefixes & PrefixFlags::SEG_FS != 0 {
        "%fs:"
    }
    else if prefixes & PrefixFlags::SEG_GS != 0 {
        "%gs:"
    }
    else {
        ""
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_prefix_byte_recognized() {
        let bytes = [0xf0, 0xf2, 0xf3, 0x2e, 0x36, 0x3e, 0x26, 0x64, 0x65, 0x66, 0x67];
        let mut seen = 0u32;
        for byte in bytes {
            let flag = prefix_flag(byte).unwrap();
            assert_eq!(seen & flag, 0, "flag collision for byte {byte:#x}");
            seen |= flag;
        }
        assert_eq!(prefix_flag(0x90), None);
        assert_eq!(prefix_flag(0x00), None);
    }

    #[test]
    fn repeat_prefixes_render_with_trailing_space() {
        assert_eq!(prefix_text(PrefixFlags::LOCK), "lock ");
        assert_eq!(prefix_text(PrefixFlags::REP), "rep ");
        assert_eq!(prefix_text(PrefixFlags::REPNE), "rep ");
        assert_eq!(prefix_text(PrefixFlags::OPERAND_SIZE), "");
    }

    #[test]
    fn segment_overrides_render_with_colon() {
        assert_eq!(segment_text(PrefixFlags::SEG_FS), "%fs:");
        assert_eq!(segment_text(PrefixFlags::SEG_SS), "%ss:");
        assert_eq!(segment_text(0), "");
    }
}
