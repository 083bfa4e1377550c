#![forbid(unsafe_code)]

//! Terminal compatibility modes consumed by the encoder.
//!
//! This is pure read-only configuration: a snapshot of the session's
//! terminal-compatibility settings, owned by the caller and passed by
//! reference on every encode call. The encoder never mutates it; mode
//! toggles (DECCKM, DECKPAM, ...) are applied by whatever owns the terminal
//! state machine.

/// Function-key and editing-key numbering scheme.
///
/// The historical conventions are mutually incompatible; each variant
/// selects a different escape-sequence family in the function-key and
/// editing-key encoders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FunkyType {
    /// xterm-style: `ESC O P`..`ESC O S` for F1–F4, tilde codes elsewhere.
    #[default]
    Xterm,
    /// VT100+: letter-coded function keys `ESC O <letter>`.
    Vt100Plus,
    /// Linux console: `ESC [ [ <letter>` for F1–F5.
    Linux,
    /// SCO console: flat `ESC [ <letter>` table with Shift/Ctrl strides.
    Sco,
    /// VT400: editing keys reordered to physical layout before tilde coding.
    Vt400,
}

/// The charset negotiated for the session's input byte channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SessionCharset {
    /// UTF-8 session.
    #[default]
    Utf8,
    /// A legacy single-byte code page, identified by the platform's id.
    /// Transcoding is best-effort: the built-in mapping covers the
    /// Latin-1 range and substitutes `?` beyond it.
    LegacyCodePage(u16),
    /// Direct-to-font: bytes are passed through untranslated.
    DirectToFont,
}

/// Snapshot of the terminal-compatibility settings that influence key
/// encoding. Immutable per encode call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalModes {
    /// DECCKM: application cursor keys (`ESC O` prefix for arrows).
    pub app_cursor_keys: bool,
    /// DECKPAM: application keypad (letter-coded keypad sequences).
    pub app_keypad_keys: bool,
    /// VT52 emulation. Overrides most other sequence families.
    pub vt52_mode: bool,
    /// Nethack-style vi-letter remapping of keypad digits.
    pub nethack_keypad: bool,
    /// Function-key/editing-key numbering scheme.
    pub funky_type: FunkyType,
    /// rxvt-style Home/End (`ESC [ H` / `ESC O w`).
    pub rxvt_homeend: bool,
    /// Backspace sends DEL (0x7F) when set, BS (0x08) when clear.
    /// Shift+Backspace always sends the other one.
    pub backspace_is_delete: bool,
    /// Return sends CR LF instead of a bare CR.
    pub cr_lf_return: bool,
    /// Opaque platform bitmask identifying the Meta modifier; consumed only
    /// by platform adapters (see [`crate::platform::KeyResolver`]).
    pub meta_modifier_mask: u32,
    /// Charset of the session's input byte channel.
    pub session_charset: SessionCharset,
}

impl TerminalModes {
    /// Typical power-on defaults: xterm numbering, UTF-8, Backspace = DEL.
    #[must_use]
    pub fn new() -> Self {
        Self {
            app_cursor_keys: false,
            app_keypad_keys: false,
            vt52_mode: false,
            nethack_keypad: false,
            funky_type: FunkyType::Xterm,
            rxvt_homeend: false,
            backspace_is_delete: true,
            cr_lf_return: false,
            meta_modifier_mask: 0,
            session_charset: SessionCharset::Utf8,
        }
    }
}

impl Default for TerminalModes {
    fn default() -> Self {
        Self::new()
    }
}
