#![forbid(unsafe_code)]

//! Cursor-key encoding.

use crate::event::{ArrowKey, Modifiers};
use crate::modes::TerminalModes;
use crate::output::EncodedOutput;

const fn direction_letter(dir: ArrowKey) -> u8 {
    match dir {
        ArrowKey::Up => b'A',
        ArrowKey::Down => b'B',
        ArrowKey::Right => b'C',
        ArrowKey::Left => b'D',
        ArrowKey::Begin => b'G',
    }
}

/// Encode a cursor key.
///
/// VT52 uses the two-byte `ESC <letter>` form regardless of other modes.
/// Otherwise the prefix is `ESC [` (normal) or `ESC O` (application cursor
/// mode), and a held Ctrl requests the *other* prefix from whichever would
/// apply: the choice is an XOR, not an override in one direction.
#[must_use]
pub fn encode(dir: ArrowKey, modifiers: Modifiers, modes: &TerminalModes) -> EncodedOutput {
    let letter = direction_letter(dir);
    if modes.vt52_mode {
        return EncodedOutput::seq(&[0x1B, letter]);
    }
    let application = modes.app_cursor_keys ^ modifiers.contains(Modifiers::CTRL);
    let prefix = if application { b'O' } else { b'[' };
    EncodedOutput::seq(&[0x1B, prefix, letter])
}
