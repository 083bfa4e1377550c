#![forbid(unsafe_code)]

//! Alt+keypad compose accumulator.
//!
//! While Meta is held, consecutive numeric-keypad digits build a decimal
//! value that is emitted as a single byte when Meta is released. This is the
//! encoder's only stateful component: one [`ComposeState`] per live input
//! source, owned by its [`crate::encoder::KeyEncoder`].
//!
//! The state machine:
//!
//! ```text
//! Idle ──Meta press──▶ Accumulating{0,0}
//! Accumulating ──keypad digit──▶ Accumulating{v*10+d, n+1}   (consumed)
//! Accumulating ──other key (Meta held)──▶ Invalid            (not consumed)
//! Accumulating{v, n>1} ──Meta release──▶ emit v & 0xFF, Idle
//! Accumulating{_, n≤1} ──Meta release──▶ discard, Idle
//! Invalid ──Meta release──▶ Idle
//! ```
//!
//! The single-digit discard is intentional: one keypad press under Alt is
//! assumed to be ordinary Alt+keypad navigation, not a composition.

use crate::event::{KeyEvent, KeyIdentity, KeyPhase, KeypadKey, ModifierKey, Modifiers};
use crate::modes::{SessionCharset, TerminalModes};
use crate::output::{Charset, EncodedOutput};

/// Compose accumulator state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComposeState {
    /// No composition in progress.
    #[default]
    Idle,
    /// Meta is held and only keypad digits have been seen so far.
    Accumulating {
        /// Decimal value built so far.
        value: u32,
        /// Number of accepted keypad digits.
        digits: u32,
    },
    /// A non-keypad key poisoned the composition; stays poisoned until
    /// Meta is released.
    Invalid,
}

impl ComposeState {
    /// Feed one event. `Some(output)` means the event was fully consumed
    /// and nothing else may encode it; `None` means the event falls through
    /// to normal encoding.
    ///
    /// The encoder calls this before anything else, for every event where
    /// Meta participates (held or released).
    pub fn feed(&mut self, event: &KeyEvent, modes: &TerminalModes) -> Option<EncodedOutput> {
        // Meta key's own transitions drive the lifecycle.
        if event.identity == KeyIdentity::Modifier(ModifierKey::Meta) {
            return match event.phase {
                KeyPhase::Press => {
                    if *self == Self::Idle {
                        *self = Self::Accumulating {
                            value: 0,
                            digits: 0,
                        };
                    }
                    // Consuming the press suppresses the leading-ESC
                    // behavior a bare Meta press would otherwise trigger.
                    Some(EncodedOutput::None)
                }
                KeyPhase::Release => Some(self.finish(modes)),
            };
        }

        if event.phase == KeyPhase::Release || !event.modifiers.contains(Modifiers::META) {
            return None;
        }

        match *self {
            Self::Accumulating { value, digits } => {
                if let KeyIdentity::Keypad(KeypadKey::Digit(d)) = event.identity {
                    *self = Self::Accumulating {
                        value: value.wrapping_mul(10).wrapping_add(u32::from(d.min(9))),
                        digits: digits + 1,
                    };
                    Some(EncodedOutput::None)
                } else {
                    // Meta composition is not exclusive of Alt+key chords;
                    // the offending key still encodes normally.
                    *self = Self::Invalid;
                    None
                }
            }
            Self::Invalid | Self::Idle => None,
        }
    }

    /// Meta released: emit the accumulated byte (if any) and reset.
    fn finish(&mut self, modes: &TerminalModes) -> EncodedOutput {
        let state = core::mem::take(self);
        match state {
            Self::Accumulating { value, digits } if digits > 1 => {
                let charset = match modes.session_charset {
                    SessionCharset::DirectToFont => Charset::DirectToFont,
                    SessionCharset::Utf8 | SessionCharset::LegacyCodePage(_) => Charset::Latin1,
                };
                EncodedOutput::bytes(charset, [(value & 0xFF) as u8].as_slice())
            }
            _ => EncodedOutput::None,
        }
    }
}
