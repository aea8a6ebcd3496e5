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
//! Random-access byte supply for the decoder.
//!
//! [ByteSource] abstracts where instruction bytes come from; [ByteCursor]
//! layers a running offset and little-endian integer reads on top, turning
//! short reads into [DecodeError::EndOfStream] at the offset that failed.

use crate::{cpu_common::SizeClass, error::DecodeError};

/// Anything the decoder can pull instruction bytes from.
pub trait ByteSource {
    /// Copy up to `buf.len()` bytes starting at `offset` into `buf`,
    /// returning the number of bytes actually available there.
    fn read_at(&self, offset: u64, buf: &mut [u8]) -> usize;
}

impl ByteSource for [u8] {
    fn read_at(&self, offset: u64, buf: &mut [u8]) -> usize {
        let Ok(start) = usize::try_from(offset)
        else {
            return 0;
        };
        if start >= self.len() {
            return 0;
        }
        let n = buf.len().min(self.len() - start);
        buf[..n].copy_from_slice(&self[start..start + n]);
        n
    }
}

impl ByteSource for Vec<u8> {
    fn read_at(&self, offset: u64, buf: &mut [u8]) -> usize {
        self.as_slice().read_at(offset, buf)
    }
}

impl<T: ByteSource + ?Sized> ByteSource for &T {
    fn read_at(&self, offset: u64, buf: &mut [u8]) -> usize {
        (**self).read_at(offset, buf)
    }
}

/// Consuming reader over a [ByteSource]. Tracks the offset where the
/// current instruction began so callers can recover the encoded span.
#[derive(Clone, Debug)]
pub struct ByteCursor<S> {
    source: S,
    offset: u64,
    start: u64,
}

impl<S: ByteSource> ByteCursor<S> {
    pub fn new(source: S) -> ByteCursor<S> {
        ByteCursor {
            source,
            offset: 0,
            start: 0,
        }
    }

    /// Current read offset.
    #[inline]
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Offset where the instruction currently being decoded began.
    #[inline]
    pub fn start(&self) -> u64 {
        self.start
    }

    /// Mark the current offset as the start of a new instruction.
    #[inline]
    pub fn begin_instruction(&mut self) {
        self.start = self.offset;
    }

    /// Un-consume the most recently read byte.
    #[inline]
    pub fn step_back(&mut self) {
        debug_assert!(self.offset > self.start);
        self.offset -= 1;
    }

    fn fill(&mut self, buf: &mut [u8]) -> Result<(), DecodeError> {
        let got = self.source.read_at(self.offset, buf);
        if got < buf.len() {
            return Err(DecodeError::EndOfStream {
                offset: self.offset + got as u64,
            });
        }
        self.offset += buf.len() as u64;
        Ok(())
    }

    pub fn read_u8(&mut self) -> Result<u8, DecodeError> {
        let mut buf = [0u8; 1];
        self.fill(&mut buf)?;
        Ok(buf[0])
    }

    pub fn read_i8(&mut self) -> Result<i8, DecodeError> {
        Ok(self.read_u8()? as i8)
    }

    pub fn read_u16(&mut self) -> Result<u16, DecodeError> {
        let mut buf = [0u8; 2];
        self.fill(&mut buf)?;
        Ok(u16::from_le_bytes(buf))
    }

    pub fn read_u32(&mut self) -> Result<u32, DecodeError> {
        let mut buf = [0u8; 4];
        self.fill(&mut buf)?;
        Ok(u32::from_le_bytes(buf))
    }

    /// Read a zero-extended little-endian value of the given size class.
    /// Only byte and word sizes reach here besides long; the tables never
    /// ask for anything else.
    pub fn read_size(&mut self, size: SizeClass) -> Result<i32, DecodeError> {
        match size {
            SizeClass::Byte => Ok(self.read_u8()? as i32),
            SizeClass::Word => Ok(self.read_u16()? as i32),
            SizeClass::Long => Ok(self.read_u32()? as i32),
            _ => unreachable!("no {size:?}-sized field in the opcode tables"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn little_endian_reads() {
        let bytes: [u8; 6] = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06];
        let mut cursor = ByteCursor::new(&bytes[..]);
        assert_eq!(cursor.read_u8().unwrap(), 0x01);
        assert_eq!(cursor.read_u16().unwrap(), 0x0302);
        assert_eq!(cursor.read_u32().unwrap_err(), DecodeError::EndOfStream { offset: 6 });
    }

    #[test]
    fn end_of_stream_reports_first_missing_offset() {
        let bytes: [u8; 2] = [0xaa, 0xbb];
        let mut cursor = ByteCursor::new(&bytes[..]);
        assert_eq!(cursor.read_u32().unwrap_err(), DecodeError::EndOfStream { offset: 2 });
        // A failed read consumes nothing.
        assert_eq!(cursor.offset(), 0);
        assert_eq!(cursor.read_u16().unwrap(), 0xbbaa);
    }

    #[test]
    fn step_back_rewinds_one_byte() {
        let bytes: [u8; 3] = [0x90, 0x91, 0x92];
        let mut cursor = ByteCursor::new(&bytes[..]);
        cursor.begin_instruction();
        assert_eq!(cursor.read_u8().unwrap(), 0x90);
        assert_eq!(cursor.read_u8().unwrap(), 0x91);
        cursor.step_back();
        assert_eq!(cursor.read_u8().unwrap(), 0x91);
        assert_eq!(cursor.offset(), 2);
        assert_eq!(cursor.start(), 0);
    }

    #[test]
    fn sized_reads_zero_extend() {
        let bytes: [u8; 4] = [0xff, 0xff, 0xff, 0xff];
        let mut cursor = ByteCursor::new(&bytes[..]);
        assert_eq!(cursor.read_size(SizeClass::Byte).unwrap(), 0xff);
        assert_eq!(cursor.read_size(SizeClass::Word).unwrap(), 0xffff);
        cursor = ByteCursor::new(&bytes[..]);
        assert_eq!(cursor.read_size(SizeClass::Long).unwrap(), -1);
    }
}
