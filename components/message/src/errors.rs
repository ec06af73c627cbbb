quick_error! {
    /// MessageError is an error encountered when encoding or decoding a wire message.
    #[derive(Debug, PartialEq, Eq)]
    pub enum MessageError {
        /// The bytes do not form a valid message: a field is cut short or holds an invalid value.
        Malformed(field: &'static str, reason: String) {
            display("malformed message: field:{}, {}", field, reason)
        }

        /// A whole frame is decoded but some bytes are left unread.
        Trailing(n: usize) {
            display("malformed message: {} trailing bytes", n)
        }

        /// A text field is too long for its u16 length prefix.
        FieldTooLong(field: &'static str, len: usize) {
            display("field:{} is {} bytes, at most {} allowed", field, len, u16::MAX)
        }

        UnexpectedVerb(want: &'static str, got: &'static str) {
            display("expect verb:{}, but:{}", want, got)
        }
    }
}

impl MessageError {
    pub fn truncated(field: &'static str, want: usize, remaining: usize) -> Self {
        Self::Malformed(
            field,
            format!("need {} bytes, but:{} remaining", want, remaining),
        )
    }

    pub fn bad_text(field: &'static str, pos: usize, byte: u8) -> Self {
        Self::Malformed(field, format!("invalid text byte 0x{:02x} at {}", byte, pos))
    }

    pub fn bad_bool(field: &'static str, byte: u8) -> Self {
        Self::Malformed(field, format!("invalid bool byte 0x{:02x}", byte))
    }

    /// is_malformed returns true if the error is caused by bad input bytes.
    pub fn is_malformed(&self) -> bool {
        match self {
            Self::Malformed(..) | Self::Trailing(_) => true,
            _ => false,
        }
    }
}
