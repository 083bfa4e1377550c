#![forbid(unsafe_code)]

//! Key classification: one category per logical key identity.
//!
//! [`classify`] is a total function over the closed [`KeyIdentity`] enum and
//! deliberately contains no wildcard arm: adding a key identity fails to
//! compile until it is classified, which routes it into exactly one scheme
//! encoder.

use crate::event::{ArrowKey, EditKey, KeyIdentity, KeypadKey};

/// The encoder family a key belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Cursor keys, including Begin.
    Arrow(ArrowKey),
    /// The six-key editing cluster.
    Editing(EditKey),
    /// Function key F1–F20 (logical number).
    Function(u8),
    /// Numeric keypad key.
    NumericKeypad(KeypadKey),
    /// Keys with hand-maintained special cases (Return, Tab, Backspace,
    /// Escape, Break) and bare modifier transitions.
    ControlSpecial,
    /// Ordinary printable input.
    PlainText,
}

/// Map a logical key identity to its category.
#[must_use]
pub const fn classify(identity: KeyIdentity) -> Category {
    match identity {
        KeyIdentity::Char(_) => Category::PlainText,
        KeyIdentity::F(n) => Category::Function(n),
        KeyIdentity::Arrow(dir) => Category::Arrow(dir),
        KeyIdentity::Edit(key) => Category::Editing(key),
        KeyIdentity::Keypad(key) => Category::NumericKeypad(key),
        KeyIdentity::Modifier(_)
        | KeyIdentity::Return
        | KeyIdentity::Tab
        | KeyIdentity::Backspace
        | KeyIdentity::Escape
        | KeyIdentity::Break => Category::ControlSpecial,
    }
}

/// Every representative identity, one per shape. Used by the exhaustiveness
/// tests here and in the encoder.
#[cfg(test)]
pub(crate) fn all_identities() -> Vec<KeyIdentity> {
    use crate::event::ModifierKey;

    let mut keys = vec![
        KeyIdentity::Char('a'),
        KeyIdentity::Char('2'),
        KeyIdentity::Char(' '),
        KeyIdentity::Return,
        KeyIdentity::Tab,
        KeyIdentity::Backspace,
        KeyIdentity::Escape,
        KeyIdentity::Break,
        KeyIdentity::Modifier(ModifierKey::Shift),
        KeyIdentity::Modifier(ModifierKey::Control),
        KeyIdentity::Modifier(ModifierKey::Meta),
    ];
    for n in 1..=20 {
        keys.push(KeyIdentity::F(n));
    }
    for dir in [
        ArrowKey::Up,
        ArrowKey::Down,
        ArrowKey::Left,
        ArrowKey::Right,
        ArrowKey::Begin,
    ] {
        keys.push(KeyIdentity::Arrow(dir));
    }
    for key in [
        EditKey::Home,
        EditKey::Insert,
        EditKey::Delete,
        EditKey::End,
        EditKey::PageUp,
        EditKey::PageDown,
    ] {
        keys.push(KeyIdentity::Edit(key));
    }
    for d in 0..=9 {
        keys.push(KeyIdentity::Keypad(KeypadKey::Digit(d)));
    }
    for key in [
        KeypadKey::Decimal,
        KeypadKey::Plus,
        KeypadKey::Minus,
        KeypadKey::Multiply,
        KeypadKey::Divide,
        KeypadKey::Enter,
        KeypadKey::NumLock,
    ] {
        keys.push(KeyIdentity::Keypad(key));
    }
    keys
}
