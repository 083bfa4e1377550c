#![forbid(unsafe_code)]

//! Hand-maintained control-key special cases.
//!
//! Two rule sets live here:
//!
//! - [`encode`]: the keys that are inherently special (Return, Tab,
//!   Backspace, Escape, Break) plus bare modifier transitions.
//! - [`ctrl_char_rule`]: the ordered Ctrl+character table consulted by the
//!   plain-text encoder before its generic path.
//!
//! Rule order within each set is part of the contract: a more specific rule
//! always fires before the generic `0x40..=0x7E` masking.

use crate::event::{KeyEvent, KeyIdentity, Modifiers};
use crate::modes::TerminalModes;
use crate::output::{ByteOutput, ByteSeq, Charset, EncodedOutput, SpecialSignal};

/// A fired Ctrl+character rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CtrlByte {
    pub byte: u8,
    /// Ctrl+Shift+Space forces ISO-8859-1 regardless of the session
    /// charset; everything else follows the session.
    pub force_latin1: bool,
}

/// The ordered Ctrl+character special cases. Returns `None` when no rule
/// matches and the event should continue down the plain-text path.
pub(crate) fn ctrl_char_rule(c: char, shift: bool) -> Option<CtrlByte> {
    let plain = |byte| Some(CtrlByte {
        byte,
        force_latin1: false,
    });
    match c {
        ' ' if shift => Some(CtrlByte {
            byte: 0xA0, // non-breaking space
            force_latin1: true,
        }),
        ' ' | '2' | '@' => plain(0x00),
        '`' => plain(0x1C),
        '3'..='7' => plain(0x1B + (c as u8 - b'3')),
        '8' => plain(0x7F),
        '/' => plain(0x1F),
        _ if ('\x40'..='\x7E').contains(&c) => plain(c as u8 & 0x1F),
        _ => None,
    }
}

/// CR, or CR LF when the session asked for it. The bare CR carries the
/// submit flag so the line discipline can treat it as a discrete
/// submission.
pub(crate) fn encode_return(modes: &TerminalModes) -> EncodedOutput {
    if modes.cr_lf_return {
        EncodedOutput::seq(b"\r\n")
    } else {
        EncodedOutput::Bytes(ByteOutput::new(Charset::Latin1, [0x0D].as_slice()).submitting())
    }
}

/// Encode the control-special keys.
#[must_use]
pub fn encode(event: &KeyEvent, modes: &TerminalModes) -> EncodedOutput {
    let mods = event.modifiers;
    let out = match event.identity {
        KeyIdentity::Break => {
            if mods.contains(Modifiers::CTRL) {
                return EncodedOutput::Special(SpecialSignal::Break);
            }
            EncodedOutput::None
        }
        KeyIdentity::Return => encode_return(modes),
        KeyIdentity::Backspace => {
            // The configured byte, or the other one under Shift.
            let delete = modes.backspace_is_delete ^ mods.contains(Modifiers::SHIFT);
            EncodedOutput::byte(if delete { 0x7F } else { 0x08 })
        }
        KeyIdentity::Tab => {
            if mods.contains(Modifiers::SHIFT) {
                EncodedOutput::seq(b"\x1b[Z")
            } else {
                EncodedOutput::byte(0x09)
            }
        }
        KeyIdentity::Escape => EncodedOutput::byte(0x1B),
        // Bare modifier transitions transmit nothing.
        KeyIdentity::Modifier(_) => EncodedOutput::None,
        // Other identities never classify as ControlSpecial.
        _ => EncodedOutput::None,
    };
    apply_meta_prefix(out, mods)
}

/// Alt+special chords get the literal ESC prefix, same as plain text,
/// unless the platform already folded Meta into the event.
pub(crate) fn apply_meta_prefix(out: EncodedOutput, mods: Modifiers) -> EncodedOutput {
    if !mods.contains(Modifiers::META) || mods.contains(Modifiers::MANUAL_META) {
        return out;
    }
    match out {
        EncodedOutput::Bytes(inner) => {
            let mut data = ByteSeq::new();
            data.push(0x1B);
            data.extend_from_slice(&inner.data);
            EncodedOutput::Bytes(ByteOutput {
                charset: inner.charset,
                data,
                submit: inner.submit,
            })
        }
        other => other,
    }
}
