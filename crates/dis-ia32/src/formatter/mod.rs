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
//! Instruction text rendering.

pub mod att;

use crate::{error::FormatError, instruction::Instruction};

/// Sink for rendered instruction text.
pub trait FormatterOutput {
    fn write_str(&mut self, text: &str);
    fn write_char(&mut self, c: char);
}

impl FormatterOutput for String {
    fn write_str(&mut self, text: &str) {
        self.push_str(text);
    }

    fn write_char(&mut self, c: char) {
        self.push(c);
    }
}

/// A syntax renderer for decoded instructions.
pub trait Format {
    fn format(
        &mut self,
        insn: &Instruction,
        output: &mut impl FormatterOutput,
    ) -> Result<(), FormatError>;
}
