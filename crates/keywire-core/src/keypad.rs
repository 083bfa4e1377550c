#![forbid(unsafe_code)]

//! Numeric-keypad encoding.
//!
//! Two independent keypad modes can be active at once; they are evaluated
//! in a fixed order and the first match wins:
//!
//! 1. Nethack remapping (digits 1–4 and 6–9 become vi direction letters).
//! 2. Application keypad (letter-coded `ESC O` sequences).
//! 3. Neither: the key degrades to its printable character, or to the
//!    Return path for keypad Enter.
//!
//! NumLock is resolved upstream: the encoder only ever sees the logical
//! identity the platform settled on.

use crate::control;
use crate::event::{KeyEvent, KeypadKey, Modifiers};
use crate::modes::{FunkyType, TerminalModes};
use crate::output::EncodedOutput;
use crate::text;

/// Vi direction letter for a nethack-mode digit; digits 0 and 5 and the
/// operator keys are not covered.
const fn nethack_letter(digit: u8) -> Option<u8> {
    match digit {
        1 => Some(b'b'),
        2 => Some(b'j'),
        3 => Some(b'n'),
        4 => Some(b'h'),
        6 => Some(b'l'),
        7 => Some(b'y'),
        8 => Some(b'k'),
        9 => Some(b'u'),
        _ => None,
    }
}

/// Application-keypad letter for a key. The `+` key stands for two
/// different VT100 keys depending on Shift, and the letters additionally
/// differ between the xterm scheme and everything else.
const fn app_letter(key: KeypadKey, shift: bool, funky: FunkyType) -> Option<u8> {
    match key {
        KeypadKey::Digit(d) => Some(b'p' + d),
        KeypadKey::Decimal => Some(b'n'),
        KeypadKey::Plus => Some(match (matches!(funky, FunkyType::Xterm), shift) {
            (true, true) => b'l',
            (true, false) => b'k',
            (false, true) => b'm',
            (false, false) => b'l',
        }),
        KeypadKey::Minus => Some(b'm'),
        KeypadKey::Multiply => Some(b'j'),
        KeypadKey::Divide => Some(b'o'),
        KeypadKey::Enter => Some(b'M'),
        KeypadKey::NumLock => Some(b'P'),
    }
}

const fn is_operator(key: KeypadKey) -> bool {
    matches!(
        key,
        KeypadKey::Plus | KeypadKey::Minus | KeypadKey::Multiply | KeypadKey::Divide
    )
}

/// Encode a numeric-keypad key.
///
/// `Digit` payloads above 9 clamp to 9.
#[must_use]
pub fn encode(key: KeypadKey, event: &KeyEvent, modes: &TerminalModes) -> EncodedOutput {
    let key = match key {
        KeypadKey::Digit(d) => KeypadKey::Digit(d.min(9)),
        other => other,
    };
    let mods = event.modifiers;

    if modes.nethack_keypad {
        if let KeypadKey::Digit(d) = key {
            if d == 5 {
                // Nethack's "stay put": always the bare dot, whatever the
                // modifiers. Only the eight direction letters take Shift
                // and Ctrl variants.
                return EncodedOutput::byte(b'.');
            }
            if let Some(letter) = nethack_letter(d) {
                let b = if mods.contains(Modifiers::CTRL) {
                    letter & 0x1F
                } else if mods.contains(Modifiers::SHIFT) {
                    letter.to_ascii_uppercase()
                } else {
                    letter
                };
                return EncodedOutput::byte(b);
            }
            // Digit 0 falls through.
        }
    }

    if modes.app_keypad_keys {
        if let Some(letter) = app_letter(key, mods.contains(Modifiers::SHIFT), modes.funky_type)
        {
            return if modes.vt52_mode {
                if is_operator(key) {
                    EncodedOutput::seq(&[0x1B, b'?', letter])
                } else {
                    EncodedOutput::seq(&[0x1B, letter])
                }
            } else {
                EncodedOutput::seq(&[0x1B, b'O', letter])
            };
        }
    }

    match key {
        KeypadKey::Enter => control::encode_return(modes),
        KeypadKey::NumLock => EncodedOutput::None,
        other => match other.printable() {
            Some(c) => text::encode_char(c, mods, modes),
            None => EncodedOutput::None,
        },
    }
}
