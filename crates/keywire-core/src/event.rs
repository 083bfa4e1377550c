#![forbid(unsafe_code)]

//! Canonical key-event types.
//!
//! A [`KeyEvent`] is one observed hardware key transition, already lifted out
//! of platform event-loop types by the embedder. The encoder never sees raw
//! hardware key codes; platform adapters resolve those into a [`KeyIdentity`]
//! first (see [`crate::platform`]).

use bitflags::bitflags;

bitflags! {
    /// Modifier keys held during a key event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// No modifiers.
        const NONE  = 0b0000;
        /// Shift key.
        const SHIFT = 0b0001;
        /// Control key.
        const CTRL  = 0b0010;
        /// Meta/Alt key.
        const META  = 0b0100;
        /// The platform already folded Meta into the decoded text and the
        /// adapter compensated by re-deriving the unmodified key. The
        /// plain-text encoder must not add its own ESC prefix on top.
        const MANUAL_META = 0b1000;
    }
}

impl Default for Modifiers {
    fn default() -> Self {
        Self::NONE
    }
}

/// Press or release transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeyPhase {
    /// Key went down (also used for auto-repeat; repeat suppression is the
    /// event source's concern).
    #[default]
    Press,
    /// Key came back up. Only Meta releases matter to the encoder.
    Release,
}

/// The five cursor directions (Begin is the keypad `5` navigation key).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArrowKey {
    Up,
    Down,
    Left,
    Right,
    Begin,
}

/// The six editing keys of the standard navigation cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditKey {
    Home,
    Insert,
    Delete,
    End,
    PageUp,
    PageDown,
}

/// Keys of the numeric keypad, after the embedder has resolved NumLock.
///
/// The encoder is NumLock-agnostic: on platforms where one physical key can
/// produce either a digit or a navigation keysym, the adapter must pick the
/// logical identity (digit vs. [`ArrowKey`]/[`EditKey`]) before building the
/// event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeypadKey {
    /// Keypad digit 0–9.
    Digit(u8),
    /// Decimal point.
    Decimal,
    Plus,
    Minus,
    Multiply,
    Divide,
    /// Keypad Enter (distinct from the main Return key).
    Enter,
    /// The Num Lock key itself.
    NumLock,
}

impl KeypadKey {
    /// The printable character this key produces when no keypad mode is
    /// active. `Enter` and `NumLock` have no printable form; digit payloads
    /// above 9 clamp to `'9'`.
    #[must_use]
    pub const fn printable(self) -> Option<char> {
        match self {
            Self::Digit(d) => {
                let d = if d > 9 { 9 } else { d };
                Some((b'0' + d) as char)
            }
            Self::Decimal => Some('.'),
            Self::Plus => Some('+'),
            Self::Minus => Some('-'),
            Self::Multiply => Some('*'),
            Self::Divide => Some('/'),
            Self::Enter | Self::NumLock => None,
        }
    }
}

/// Modifier keys observed as their own press/release events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModifierKey {
    Shift,
    Control,
    /// Meta/Alt. Its press and release transitions drive the Alt+keypad
    /// compose accumulator.
    Meta,
}

/// Abstract logical key identity.
///
/// This enum is closed: adding a key means adding a variant here and a
/// classification arm in [`crate::classify`], which the compiler then forces
/// through every encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyIdentity {
    /// An ordinary letter, digit, or symbol key (main keyboard area).
    Char(char),
    /// Function key F1–F20.
    F(u8),
    Arrow(ArrowKey),
    Edit(EditKey),
    Keypad(KeypadKey),
    Modifier(ModifierKey),
    Return,
    Tab,
    Backspace,
    Escape,
    /// Pause/Break.
    Break,
}

/// One observed key transition plus everything the platform decoded from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    /// Abstract logical key.
    pub identity: KeyIdentity,
    /// Press or release.
    pub phase: KeyPhase,
    /// Modifiers held during the transition.
    pub modifiers: Modifiers,
    /// Text already decoded by the platform input method, if any. This is
    /// the preferred source for ordinary printable input.
    pub text: Option<String>,
    /// Code point derived independently from the key identity; fallback
    /// when `text` is absent or empty.
    pub unicode_hint: Option<char>,
}

impl KeyEvent {
    /// A bare key press with no modifiers and no decoded text.
    #[must_use]
    pub const fn new(identity: KeyIdentity) -> Self {
        Self {
            identity,
            phase: KeyPhase::Press,
            modifiers: Modifiers::NONE,
            text: None,
            unicode_hint: None,
        }
    }

    /// Same key as a release transition.
    #[must_use]
    pub const fn released(mut self) -> Self {
        self.phase = KeyPhase::Release;
        self
    }

    /// Attach modifiers.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Attach platform-decoded text.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Attach a unicode fallback hint.
    #[must_use]
    pub const fn with_hint(mut self, hint: char) -> Self {
        self.unicode_hint = Some(hint);
        self
    }

    /// Whether Ctrl is held.
    #[must_use]
    pub const fn ctrl(&self) -> bool {
        self.modifiers.contains(Modifiers::CTRL)
    }

    /// Whether Shift is held.
    #[must_use]
    pub const fn shift(&self) -> bool {
        self.modifiers.contains(Modifiers::SHIFT)
    }

    /// Whether Meta/Alt is held.
    #[must_use]
    pub const fn meta(&self) -> bool {
        self.modifiers.contains(Modifiers::META)
    }
}
