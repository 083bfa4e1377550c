#![forbid(unsafe_code)]

//! Editing-key encoding (Home, Insert, Delete, End, PageUp, PageDown).

use crate::event::{EditKey, Modifiers};
use crate::modes::{FunkyType, TerminalModes};
use crate::output::EncodedOutput;

/// Logical tilde codes: Home=1 .. PageDown=6.
const fn tilde_code(key: EditKey) -> u8 {
    match key {
        EditKey::Home => 1,
        EditKey::Insert => 2,
        EditKey::Delete => 3,
        EditKey::End => 4,
        EditKey::PageUp => 5,
        EditKey::PageDown => 6,
    }
}

/// VT400 keyboards number the editing cluster in physical order; the
/// logical code is remapped through this table before tilde coding.
/// Index 0 is a sentinel.
const VT400_REORDER: [u8; 7] = [0, 2, 1, 4, 5, 3, 6];

/// Single-letter forms for VT52/VT100+. Index 0 (space) is a sentinel.
const LETTER_FORMS: &[u8; 7] = b" HLMEIG";

/// Encode an editing key.
///
/// Ctrl+editing-key never generates terminal input; those chords are
/// reserved for local UI actions upstream of the encoder.
#[must_use]
pub fn encode(key: EditKey, modifiers: Modifiers, modes: &TerminalModes) -> EncodedOutput {
    if modifiers.contains(Modifiers::CTRL) {
        return EncodedOutput::None;
    }

    let mut code = tilde_code(key);
    if modes.funky_type == FunkyType::Vt400 {
        code = VT400_REORDER[code as usize];
    }

    if modes.vt52_mode || modes.funky_type == FunkyType::Vt100Plus {
        return EncodedOutput::seq(&[0x1B, LETTER_FORMS[code as usize]]);
    }

    if modes.rxvt_homeend {
        match key {
            EditKey::Home => return EncodedOutput::seq(b"\x1b[H"),
            EditKey::End => return EncodedOutput::seq(b"\x1bOw"),
            _ => {}
        }
    }

    EncodedOutput::csi_tilde(code)
}
