#![forbid(unsafe_code)]

//! Plain-text encoding and output charset dispatch.
//!
//! Printable input arrives either as platform-decoded text (preferred) or
//! as a unicode hint derived from the key identity. Either way the result
//! is re-encoded into the negotiated session charset, with a best-effort
//! `?` substitution for code points a legacy page cannot represent:
//! keyboard input is not worth failing an event over.

use crate::control::{apply_meta_prefix, ctrl_char_rule};
use crate::event::{KeyEvent, KeyIdentity, Modifiers};
use crate::modes::{SessionCharset, TerminalModes};
use crate::output::{ByteOutput, ByteSeq, Charset, EncodedOutput};

/// Replacement byte for code points a single-byte charset cannot carry.
const REPLACEMENT: u8 = b'?';

/// Re-encode text into the session charset.
pub(crate) fn transcode(text: &str, session: SessionCharset) -> (Charset, ByteSeq) {
    match session {
        SessionCharset::Utf8 => (Charset::Utf8, ByteSeq::from_slice(text.as_bytes())),
        SessionCharset::LegacyCodePage(_) => (Charset::Latin1, narrow(text)),
        SessionCharset::DirectToFont => (Charset::DirectToFont, narrow(text)),
    }
}

/// Squeeze text into single bytes: Latin-1 code points pass through,
/// everything else degrades to the replacement byte.
fn narrow(text: &str) -> ByteSeq {
    text.chars()
        .map(|c| u8::try_from(u32::from(c)).unwrap_or(REPLACEMENT))
        .collect()
}

/// Encode ordinary printable input.
#[must_use]
pub fn encode(event: &KeyEvent, modes: &TerminalModes) -> EncodedOutput {
    // The hand-maintained Ctrl table outranks the generic path.
    if event.modifiers.contains(Modifiers::CTRL) {
        if let KeyIdentity::Char(c) = event.identity {
            if let Some(out) = encode_ctrl(c, event.modifiers, modes) {
                return out;
            }
        }
    }

    if let Some(text) = event.text.as_deref() {
        if !text.is_empty() {
            let (charset, data) = transcode(text, modes.session_charset);
            return apply_meta_prefix(
                EncodedOutput::Bytes(ByteOutput::new(charset, data)),
                event.modifiers,
            );
        }
    }

    // No decoded text: fall back to the identity-derived code point, sent
    // with a leading ESC (this path only exists for Meta compensation).
    if let Some(hint) = event.unicode_hint {
        let mut buf = [0u8; 4];
        let s = hint.encode_utf8(&mut buf);
        let (charset, encoded) = transcode(s, modes.session_charset);
        let mut data = ByteSeq::new();
        data.push(0x1B);
        data.extend_from_slice(&encoded);
        return EncodedOutput::Bytes(ByteOutput::new(charset, data));
    }

    EncodedOutput::None
}

/// Encode a key whose printable character is synthesized rather than
/// platform-decoded (keypad fall-through). Subject to the same Ctrl rules
/// and Meta prefixing as decoded text.
pub(crate) fn encode_char(c: char, modifiers: Modifiers, modes: &TerminalModes) -> EncodedOutput {
    if modifiers.contains(Modifiers::CTRL) {
        if let Some(out) = encode_ctrl(c, modifiers, modes) {
            return out;
        }
    }
    let mut buf = [0u8; 4];
    let (charset, data) = transcode(c.encode_utf8(&mut buf), modes.session_charset);
    apply_meta_prefix(
        EncodedOutput::Bytes(ByteOutput::new(charset, data)),
        modifiers,
    )
}

fn encode_ctrl(
    c: char,
    modifiers: Modifiers,
    modes: &TerminalModes,
) -> Option<EncodedOutput> {
    let rule = ctrl_char_rule(c, modifiers.contains(Modifiers::SHIFT))?;
    let charset = if rule.force_latin1 {
        // Ctrl+Shift+Space is NBSP in ISO-8859-1 no matter what the
        // session negotiated.
        Charset::Latin1
    } else {
        match modes.session_charset {
            SessionCharset::DirectToFont => Charset::DirectToFont,
            // Control bytes are plain ASCII in both remaining cases.
            SessionCharset::Utf8 | SessionCharset::LegacyCodePage(_) => Charset::Latin1,
        }
    };
    Some(apply_meta_prefix(
        EncodedOutput::bytes(charset, [rule.byte].as_slice()),
        modifiers,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(c: char, mods: Modifiers) -> KeyEvent {
        KeyEvent::new(KeyIdentity::Char(c))
            .with_modifiers(mods)
            .with_text(c.to_string())
    }

    #[test]
    fn utf8_session_passes_text_through() {
        let modes = TerminalModes::new();
        let out = encode(&press('a', Modifiers::NONE), &modes);
        match out {
            EncodedOutput::Bytes(b) => {
                assert_eq!(b.charset, Charset::Utf8);
                assert_eq!(&b.data[..], b"a");
            }
            other => panic!("expected bytes, got {other:?}"),
        }
    }

    #[test]
    fn multibyte_text_stays_utf8() {
        let modes = TerminalModes::new();
        let out = encode(&press('é', Modifiers::NONE), &modes);
        assert_eq!(out.as_bytes(), Some("é".as_bytes()));
    }

    #[test]
    fn legacy_page_narrows_to_latin1() {
        let mut modes = TerminalModes::new();
        modes.session_charset = SessionCharset::LegacyCodePage(1252);
        let out = encode(&press('é', Modifiers::NONE), &modes);
        match out {
            EncodedOutput::Bytes(b) => {
                assert_eq!(b.charset, Charset::Latin1);
                assert_eq!(&b.data[..], &[0xE9]);
            }
            other => panic!("expected bytes, got {other:?}"),
        }
    }

    #[test]
    fn unrepresentable_chars_degrade_to_replacement() {
        let mut modes = TerminalModes::new();
        modes.session_charset = SessionCharset::LegacyCodePage(1252);
        let out = encode(&press('€', Modifiers::NONE), &modes);
        assert_eq!(out.as_bytes(), Some(b"?".as_slice()));
    }

    #[test]
    fn direct_to_font_is_untranslated() {
        let mut modes = TerminalModes::new();
        modes.session_charset = SessionCharset::DirectToFont;
        let out = encode(&press('a', Modifiers::NONE), &modes);
        match out {
            EncodedOutput::Bytes(b) => {
                assert_eq!(b.charset, Charset::DirectToFont);
                assert_eq!(&b.data[..], b"a");
            }
            other => panic!("expected bytes, got {other:?}"),
        }
    }

    #[test]
    fn meta_prefixes_a_literal_escape() {
        let modes = TerminalModes::new();
        let out = encode(&press('x', Modifiers::META), &modes);
        assert_eq!(out.as_bytes(), Some(b"\x1bx".as_slice()));
    }

    #[test]
    fn manual_meta_means_no_extra_escape() {
        let modes = TerminalModes::new();
        let out = encode(&press('x', Modifiers::META | Modifiers::MANUAL_META), &modes);
        assert_eq!(out.as_bytes(), Some(b"x".as_slice()));
    }

    #[test]
    fn hint_fallback_carries_escape_prefix() {
        let modes = TerminalModes::new();
        let ev = KeyEvent::new(KeyIdentity::Char('q'))
            .with_modifiers(Modifiers::META | Modifiers::MANUAL_META)
            .with_hint('q');
        let out = encode(&ev, &modes);
        assert_eq!(out.as_bytes(), Some(b"\x1bq".as_slice()));
    }

    #[test]
    fn empty_text_falls_to_hint() {
        let modes = TerminalModes::new();
        let ev = KeyEvent::new(KeyIdentity::Char('q'))
            .with_text("")
            .with_hint('q');
        let out = encode(&ev, &modes);
        assert_eq!(out.as_bytes(), Some(b"\x1bq".as_slice()));
    }

    #[test]
    fn no_text_and_no_hint_is_nothing() {
        let modes = TerminalModes::new();
        let ev = KeyEvent::new(KeyIdentity::Char('q'));
        assert!(encode(&ev, &modes).is_none());
    }

    #[test]
    fn ctrl_rules_outrank_decoded_text() {
        let modes = TerminalModes::new();
        // Platform decoded Ctrl+C as "c"; the control byte still wins.
        let out = encode(&press('c', Modifiers::CTRL), &modes);
        assert_eq!(out.as_bytes(), Some([0x03].as_slice()));
    }

    #[test]
    fn ctrl_shift_space_forces_latin1_nbsp() {
        let modes = TerminalModes::new();
        let out = encode(&press(' ', Modifiers::CTRL | Modifiers::SHIFT), &modes);
        match out {
            EncodedOutput::Bytes(b) => {
                assert_eq!(b.charset, Charset::Latin1);
                assert_eq!(&b.data[..], &[0xA0]);
            }
            other => panic!("expected bytes, got {other:?}"),
        }
    }

    #[test]
    fn alt_ctrl_chord_gets_both_treatments() {
        let modes = TerminalModes::new();
        let out = encode(&press('c', Modifiers::CTRL | Modifiers::META), &modes);
        assert_eq!(out.as_bytes(), Some([0x1B, 0x03].as_slice()));
    }

    #[test]
    fn unmatched_ctrl_char_falls_to_text() {
        let modes = TerminalModes::new();
        let out = encode(&press('1', Modifiers::CTRL), &modes);
        assert_eq!(out.as_bytes(), Some(b"1".as_slice()));
    }

    #[test]
    fn encode_char_applies_ctrl_rules() {
        let modes = TerminalModes::new();
        let out = encode_char('3', Modifiers::CTRL, &modes);
        assert_eq!(out.as_bytes(), Some([0x1B].as_slice()));
        let out = encode_char('7', Modifiers::NONE, &modes);
        assert_eq!(out.as_bytes(), Some(b"7".as_slice()));
    }
}
