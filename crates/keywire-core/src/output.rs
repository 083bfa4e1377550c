#![forbid(unsafe_code)]

//! Encoder output: the bytes (or out-of-band signal) for one key event.

use smallvec::SmallVec;

/// Byte payload storage. Nearly every key encodes to eight bytes or fewer,
/// so the common case stays on the stack.
pub type ByteSeq = SmallVec<[u8; 8]>;

/// Charset the output bytes are encoded in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Charset {
    /// ISO-8859-1. All escape sequences and control bytes use this.
    Latin1,
    /// UTF-8, for text re-encoded into a UTF-8 session.
    Utf8,
    /// Untranslated passthrough for direct-to-font legacy sessions.
    DirectToFont,
}

/// Out-of-band session control signals that bypass the input byte channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecialSignal {
    /// Serial/telnet Break (Ctrl+Break).
    Break,
}

/// Literal bytes plus the charset they are encoded in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByteOutput {
    /// Charset of `data`.
    pub charset: Charset,
    /// The bytes to transmit.
    pub data: ByteSeq,
    /// Set for Return's bare CR so the line discipline treats it as a
    /// discrete submission rather than literal data. Never set together
    /// with CR LF output.
    pub submit: bool,
}

impl ByteOutput {
    /// Plain data bytes in the given charset.
    #[must_use]
    pub fn new(charset: Charset, data: impl Into<ByteSeq>) -> Self {
        Self {
            charset,
            data: data.into(),
            submit: false,
        }
    }

    /// Mark as a discrete line submission.
    #[must_use]
    pub const fn submitting(mut self) -> Self {
        self.submit = true;
        self
    }
}

/// The result of encoding one key event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodedOutput {
    /// Nothing should be transmitted (modifier-only press, consumed compose
    /// digit, or a key reserved for local UI).
    None,
    /// Literal bytes for the session's input channel.
    Bytes(ByteOutput),
    /// An out-of-band control signal for the backend.
    Special(SpecialSignal),
}

impl EncodedOutput {
    /// Bytes in the given charset.
    #[must_use]
    pub fn bytes(charset: Charset, data: impl Into<ByteSeq>) -> Self {
        Self::Bytes(ByteOutput::new(charset, data))
    }

    /// A single Latin-1 byte (control bytes, letters from fixed tables).
    #[must_use]
    pub fn byte(b: u8) -> Self {
        Self::bytes(Charset::Latin1, [b].as_slice())
    }

    /// A Latin-1 byte sequence (escape sequences).
    #[must_use]
    pub fn seq(data: &[u8]) -> Self {
        Self::bytes(Charset::Latin1, data)
    }

    /// The `ESC [ <code> ~` form shared by the editing and function-key
    /// encoders. Codes are at most two decimal digits.
    #[must_use]
    pub(crate) fn csi_tilde(code: u8) -> Self {
        debug_assert!(code < 100);
        let mut data = ByteSeq::new();
        data.extend_from_slice(b"\x1b[");
        if code >= 10 {
            data.push(b'0' + code / 10);
        }
        data.push(b'0' + code % 10);
        data.push(b'~');
        Self::bytes(Charset::Latin1, data)
    }

    /// Whether nothing is to be transmitted.
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// The payload bytes, if any.
    #[must_use]
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Bytes(out) => Some(&out.data),
            Self::None | Self::Special(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_helper_is_latin1() {
        let out = EncodedOutput::byte(0x0D);
        match out {
            EncodedOutput::Bytes(b) => {
                assert_eq!(b.charset, Charset::Latin1);
                assert_eq!(&b.data[..], &[0x0D]);
                assert!(!b.submit);
            }
            other => panic!("expected bytes, got {other:?}"),
        }
    }

    #[test]
    fn submitting_sets_flag() {
        let out = ByteOutput::new(Charset::Latin1, [0x0D].as_slice()).submitting();
        assert!(out.submit);
    }

    #[test]
    fn csi_tilde_formats_one_and_two_digit_codes() {
        assert_eq!(
            EncodedOutput::csi_tilde(3).as_bytes(),
            Some(b"\x1b[3~".as_slice())
        );
        assert_eq!(
            EncodedOutput::csi_tilde(34).as_bytes(),
            Some(b"\x1b[34~".as_slice())
        );
    }

    #[test]
    fn as_bytes_views_payload() {
        assert_eq!(EncodedOutput::seq(b"\x1b[A").as_bytes(), Some(b"\x1b[A".as_slice()));
        assert_eq!(EncodedOutput::None.as_bytes(), None);
        assert_eq!(
            EncodedOutput::Special(SpecialSignal::Break).as_bytes(),
            None
        );
    }
}
