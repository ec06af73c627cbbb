//! Binary codec for wire messages.
//!
//! Integers are big-endian.
//! A text field is a u16 byte count followed by the text in modified UTF-8:
//! - U+0000 is written as `C0 80`, so a raw `00` never appears;
//! - other chars up to U+FFFF use the usual 1 to 3 byte UTF-8 forms;
//! - a char above U+FFFF is written as a UTF-16 surrogate pair, 3 bytes per surrogate.
//!
//! A bool is a single byte: `01` for true, `00` for false. Decoding rejects other values.
//!
//! Decoding never reads past the end of a buffer: a short buffer is reported as
//! `MessageError::Malformed`.

use bytes::{Buf, BufMut};

use crate::MessageError;

/// Codec defines how a message is written to and read from a byte buffer.
pub trait Codec: Sized {
    /// encoded_len returns the number of bytes `encode` writes.
    fn encoded_len(&self) -> usize;

    fn encode<B: BufMut>(&self, buf: &mut B) -> Result<(), MessageError>;

    /// decode reads one message from the head of `buf`.
    /// Bytes following the message are left in `buf`.
    fn decode<B: Buf>(buf: &mut B) -> Result<Self, MessageError>;

    fn to_bytes(&self) -> Result<Vec<u8>, MessageError> {
        let mut buf: Vec<u8> = Vec::with_capacity(self.encoded_len());
        self.encode(&mut buf)?;
        Ok(buf)
    }

    /// from_bytes decodes a frame that holds exactly one message.
    fn from_bytes(mut bs: &[u8]) -> Result<Self, MessageError> {
        let v = Self::decode(&mut bs)?;
        if bs.has_remaining() {
            return Err(MessageError::Trailing(bs.remaining()));
        }
        Ok(v)
    }
}

/// utf_len returns the encoded length of `s`, without the length prefix.
pub fn utf_len(s: &str) -> usize {
    s.chars()
        .map(|c| match c as u32 {
            0 => 2,
            0x01..=0x7f => 1,
            0x80..=0x7ff => 2,
            0x800..=0xffff => 3,
            _ => 6,
        })
        .sum()
}

pub fn write_utf<B: BufMut>(buf: &mut B, field: &'static str, s: &str) -> Result<(), MessageError> {
    let n = utf_len(s);
    if n > u16::MAX as usize {
        return Err(MessageError::FieldTooLong(field, n));
    }

    buf.put_u16(n as u16);

    let mut units = [0u16; 2];
    for c in s.chars() {
        for u in c.encode_utf16(&mut units).iter() {
            put_unit(buf, *u);
        }
    }
    Ok(())
}

fn put_unit<B: BufMut>(buf: &mut B, u: u16) {
    match u {
        0x01..=0x7f => buf.put_u8(u as u8),
        0x00 | 0x80..=0x7ff => {
            buf.put_u8(0xc0 | (u >> 6) as u8);
            buf.put_u8(0x80 | (u & 0x3f) as u8);
        }
        _ => {
            buf.put_u8(0xe0 | (u >> 12) as u8);
            buf.put_u8(0x80 | ((u >> 6) & 0x3f) as u8);
            buf.put_u8(0x80 | (u & 0x3f) as u8);
        }
    }
}

pub fn read_utf<B: Buf>(buf: &mut B, field: &'static str) -> Result<String, MessageError> {
    let n = read_u16(buf, field)? as usize;
    if buf.remaining() < n {
        return Err(MessageError::truncated(field, n, buf.remaining()));
    }

    let mut raw = vec![0u8; n];
    buf.copy_to_slice(&mut raw);

    decode_utf(&raw, field)
}

fn decode_utf(raw: &[u8], field: &'static str) -> Result<String, MessageError> {
    let mut units: Vec<u16> = Vec::with_capacity(raw.len());
    let mut i = 0;

    while i < raw.len() {
        let b = raw[i];
        match b >> 4 {
            0x0..=0x7 => {
                if b == 0 {
                    return Err(MessageError::bad_text(field, i, b));
                }
                units.push(b as u16);
                i += 1;
            }
            0xc | 0xd => {
                let b2 = continuation(raw, i, 1, field)?;
                let u = ((b & 0x1f) as u16) << 6 | (b2 & 0x3f) as u16;
                // overlong, except the NUL form `C0 80`
                if u != 0 && u < 0x80 {
                    return Err(MessageError::bad_text(field, i, b));
                }
                units.push(u);
                i += 2;
            }
            0xe => {
                let b2 = continuation(raw, i, 1, field)?;
                let b3 = continuation(raw, i, 2, field)?;
                let u = ((b & 0x0f) as u16) << 12 | ((b2 & 0x3f) as u16) << 6 | (b3 & 0x3f) as u16;
                if u < 0x800 {
                    return Err(MessageError::bad_text(field, i, b));
                }
                units.push(u);
                i += 3;
            }
            _ => return Err(MessageError::bad_text(field, i, b)),
        }
    }

    std::char::decode_utf16(units.into_iter())
        .collect::<Result<String, _>>()
        .map_err(|e| {
            MessageError::Malformed(
                field,
                format!("unpaired surrogate 0x{:04x}", e.unpaired_surrogate()),
            )
        })
}

/// continuation returns the `nth` byte after the lead byte at `i`.
fn continuation(raw: &[u8], i: usize, nth: usize, field: &'static str) -> Result<u8, MessageError> {
    let pos = i + nth;
    let b = *raw.get(pos).ok_or_else(|| {
        MessageError::Malformed(field, format!("incomplete char at {}", i))
    })?;

    if b & 0xc0 != 0x80 {
        return Err(MessageError::bad_text(field, pos, b));
    }
    Ok(b)
}

pub fn read_u16<B: Buf>(buf: &mut B, field: &'static str) -> Result<u16, MessageError> {
    if buf.remaining() < 2 {
        return Err(MessageError::truncated(field, 2, buf.remaining()));
    }
    Ok(buf.get_u16())
}

pub fn write_bool<B: BufMut>(buf: &mut B, v: bool) {
    buf.put_u8(v as u8);
}

pub fn read_bool<B: Buf>(buf: &mut B, field: &'static str) -> Result<bool, MessageError> {
    if !buf.has_remaining() {
        return Err(MessageError::truncated(field, 1, 0));
    }

    match buf.get_u8() {
        0 => Ok(false),
        1 => Ok(true),
        b => Err(MessageError::bad_bool(field, b)),
    }
}
