#![forbid(unsafe_code)]

//! JSON-friendly record/replay schema for key events and encoder output.
//!
//! Deterministic and intentionally small: a `kind`/string tag plus the
//! minimum semantic fields needed to replay a keyboard session against the
//! encoder and diff the byte streams. Available behind the `serde` feature.

use serde::{Deserialize, Serialize};

use crate::event::{
    ArrowKey, EditKey, KeyEvent, KeyIdentity, KeyPhase, KeypadKey, ModifierKey, Modifiers,
};
use crate::output::{ByteOutput, ByteSeq, Charset, EncodedOutput, SpecialSignal};

/// Stable string form of a key identity.
#[must_use]
pub fn identity_to_string(identity: KeyIdentity) -> String {
    match identity {
        KeyIdentity::Char(c) => c.to_string(),
        KeyIdentity::F(n) => format!("F{n}"),
        KeyIdentity::Arrow(dir) => match dir {
            ArrowKey::Up => "Up".to_string(),
            ArrowKey::Down => "Down".to_string(),
            ArrowKey::Left => "Left".to_string(),
            ArrowKey::Right => "Right".to_string(),
            ArrowKey::Begin => "Begin".to_string(),
        },
        KeyIdentity::Edit(key) => match key {
            EditKey::Home => "Home".to_string(),
            EditKey::Insert => "Insert".to_string(),
            EditKey::Delete => "Delete".to_string(),
            EditKey::End => "End".to_string(),
            EditKey::PageUp => "PageUp".to_string(),
            EditKey::PageDown => "PageDown".to_string(),
        },
        KeyIdentity::Keypad(key) => match key {
            KeypadKey::Digit(d) => format!("KP{d}"),
            KeypadKey::Decimal => "KPDecimal".to_string(),
            KeypadKey::Plus => "KPPlus".to_string(),
            KeypadKey::Minus => "KPMinus".to_string(),
            KeypadKey::Multiply => "KPMultiply".to_string(),
            KeypadKey::Divide => "KPDivide".to_string(),
            KeypadKey::Enter => "KPEnter".to_string(),
            KeypadKey::NumLock => "NumLock".to_string(),
        },
        KeyIdentity::Modifier(key) => match key {
            ModifierKey::Shift => "Shift".to_string(),
            ModifierKey::Control => "Control".to_string(),
            ModifierKey::Meta => "Meta".to_string(),
        },
        KeyIdentity::Return => "Return".to_string(),
        KeyIdentity::Tab => "Tab".to_string(),
        KeyIdentity::Backspace => "Backspace".to_string(),
        KeyIdentity::Escape => "Escape".to_string(),
        KeyIdentity::Break => "Break".to_string(),
    }
}

/// Parse the stable string form back into an identity.
#[must_use]
pub fn identity_from_string(s: &str) -> Option<KeyIdentity> {
    let named = match s {
        "Up" => Some(KeyIdentity::Arrow(ArrowKey::Up)),
        "Down" => Some(KeyIdentity::Arrow(ArrowKey::Down)),
        "Left" => Some(KeyIdentity::Arrow(ArrowKey::Left)),
        "Right" => Some(KeyIdentity::Arrow(ArrowKey::Right)),
        "Begin" => Some(KeyIdentity::Arrow(ArrowKey::Begin)),
        "Home" => Some(KeyIdentity::Edit(EditKey::Home)),
        "Insert" => Some(KeyIdentity::Edit(EditKey::Insert)),
        "Delete" => Some(KeyIdentity::Edit(EditKey::Delete)),
        "End" => Some(KeyIdentity::Edit(EditKey::End)),
        "PageUp" => Some(KeyIdentity::Edit(EditKey::PageUp)),
        "PageDown" => Some(KeyIdentity::Edit(EditKey::PageDown)),
        "KPDecimal" => Some(KeyIdentity::Keypad(KeypadKey::Decimal)),
        "KPPlus" => Some(KeyIdentity::Keypad(KeypadKey::Plus)),
        "KPMinus" => Some(KeyIdentity::Keypad(KeypadKey::Minus)),
        "KPMultiply" => Some(KeyIdentity::Keypad(KeypadKey::Multiply)),
        "KPDivide" => Some(KeyIdentity::Keypad(KeypadKey::Divide)),
        "KPEnter" => Some(KeyIdentity::Keypad(KeypadKey::Enter)),
        "NumLock" => Some(KeyIdentity::Keypad(KeypadKey::NumLock)),
        "Shift" => Some(KeyIdentity::Modifier(ModifierKey::Shift)),
        "Control" => Some(KeyIdentity::Modifier(ModifierKey::Control)),
        "Meta" => Some(KeyIdentity::Modifier(ModifierKey::Meta)),
        "Return" => Some(KeyIdentity::Return),
        "Tab" => Some(KeyIdentity::Tab),
        "Backspace" => Some(KeyIdentity::Backspace),
        "Escape" => Some(KeyIdentity::Escape),
        "Break" => Some(KeyIdentity::Break),
        _ => None,
    };
    if let Some(identity) = named {
        return Some(identity);
    }

    if let Some(rest) = s.strip_prefix("KP") {
        if let Ok(d) = rest.parse::<u8>() {
            if d <= 9 {
                return Some(KeyIdentity::Keypad(KeypadKey::Digit(d)));
            }
        }
    }
    if let Some(rest) = s.strip_prefix('F') {
        if let Ok(n) = rest.parse::<u8>() {
            if (1..=20).contains(&n) {
                return Some(KeyIdentity::F(n));
            }
        }
    }

    let mut chars = s.chars();
    let first = chars.next()?;
    if chars.next().is_none() {
        return Some(KeyIdentity::Char(first));
    }
    None
}

/// JSON record of one key event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct KeyEventRecord {
    /// Stable identity string (see [`identity_to_string`]).
    pub key: String,
    /// `press` or `release`.
    pub phase: String,
    /// Modifier bitset (same bits as [`Modifiers`]).
    pub mods: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<char>,
}

impl From<&KeyEvent> for KeyEventRecord {
    fn from(event: &KeyEvent) -> Self {
        Self {
            key: identity_to_string(event.identity),
            phase: match event.phase {
                KeyPhase::Press => "press".to_string(),
                KeyPhase::Release => "release".to_string(),
            },
            mods: event.modifiers.bits(),
            text: event.text.clone(),
            hint: event.unicode_hint,
        }
    }
}

impl KeyEventRecord {
    /// Rebuild the event. `None` when the identity or phase string does
    /// not parse.
    #[must_use]
    pub fn to_event(&self) -> Option<KeyEvent> {
        let identity = identity_from_string(&self.key)?;
        let phase = match self.phase.as_str() {
            "press" => KeyPhase::Press,
            "release" => KeyPhase::Release,
            _ => return None,
        };
        Some(KeyEvent {
            identity,
            phase,
            modifiers: Modifiers::from_bits_truncate(self.mods),
            text: self.text.clone(),
            unicode_hint: self.hint,
        })
    }
}

/// JSON record of one encoder output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OutputRecord {
    None,
    Bytes {
        charset: String,
        data: Vec<u8>,
        #[serde(default, skip_serializing_if = "std::ops::Not::not")]
        submit: bool,
    },
    Special {
        signal: String,
    },
}

impl From<&EncodedOutput> for OutputRecord {
    fn from(out: &EncodedOutput) -> Self {
        match out {
            EncodedOutput::None => Self::None,
            EncodedOutput::Bytes(b) => Self::Bytes {
                charset: match b.charset {
                    Charset::Latin1 => "latin1".to_string(),
                    Charset::Utf8 => "utf8".to_string(),
                    Charset::DirectToFont => "direct".to_string(),
                },
                data: b.data.to_vec(),
                submit: b.submit,
            },
            EncodedOutput::Special(SpecialSignal::Break) => Self::Special {
                signal: "break".to_string(),
            },
        }
    }
}

impl OutputRecord {
    /// Rebuild the output. `None` when a tag string does not parse.
    #[must_use]
    pub fn to_output(&self) -> Option<EncodedOutput> {
        Some(match self {
            Self::None => EncodedOutput::None,
            Self::Bytes {
                charset,
                data,
                submit,
            } => {
                let charset = match charset.as_str() {
                    "latin1" => Charset::Latin1,
                    "utf8" => Charset::Utf8,
                    "direct" => Charset::DirectToFont,
                    _ => return None,
                };
                EncodedOutput::Bytes(ByteOutput {
                    charset,
                    data: ByteSeq::from_slice(data),
                    submit: *submit,
                })
            }
            Self::Special { signal } => match signal.as_str() {
                "break" => EncodedOutput::Special(SpecialSignal::Break),
                _ => return None,
            },
        })
    }
}

impl KeyEvent {
    /// Encode this event as a stable JSON string.
    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&KeyEventRecord::from(self))
    }

    /// Decode a previously recorded event. `None` for schema-valid JSON
    /// whose identity/phase strings do not parse.
    pub fn from_json_str(s: &str) -> Result<Option<Self>, serde_json::Error> {
        let record: KeyEventRecord = serde_json::from_str(s)?;
        Ok(record.to_event())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::all_identities;

    #[test]
    fn identity_strings_round_trip() {
        for identity in all_identities() {
            let s = identity_to_string(identity);
            assert_eq!(identity_from_string(&s), Some(identity), "{s}");
        }
    }

    #[test]
    fn unknown_identity_strings_are_rejected() {
        assert_eq!(identity_from_string("F99"), None);
        assert_eq!(identity_from_string("KP12"), None);
        assert_eq!(identity_from_string("NotAKey"), None);
        assert_eq!(identity_from_string(""), None);
    }

    #[test]
    fn event_json_round_trip_is_stable() {
        let ev = KeyEvent::new(KeyIdentity::Char('a'))
            .with_modifiers(Modifiers::CTRL)
            .with_text("a");
        let j1 = ev.to_json_string().expect("serialize");
        let j2 = ev.to_json_string().expect("serialize");
        assert_eq!(j1, j2);
        let back = KeyEvent::from_json_str(&j1).expect("deserialize");
        assert_eq!(back, Some(ev));
    }

    #[test]
    fn output_record_round_trips() {
        let outs = [
            EncodedOutput::None,
            EncodedOutput::seq(b"\x1b[A"),
            EncodedOutput::Special(SpecialSignal::Break),
            EncodedOutput::Bytes(
                ByteOutput::new(Charset::Latin1, [0x0D].as_slice()).submitting(),
            ),
        ];
        for out in outs {
            let record = OutputRecord::from(&out);
            assert_eq!(record.to_output(), Some(out));
        }
    }

    #[test]
    fn bad_tags_fail_closed() {
        let record = OutputRecord::Special {
            signal: "nonsense".to_string(),
        };
        assert_eq!(record.to_output(), None);
    }
}
