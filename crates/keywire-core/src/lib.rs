#![forbid(unsafe_code)]

//! Host-agnostic terminal key-input encoder.
//!
//! Turns one raw keyboard event (logical key identity, press/release,
//! modifier state) into the literal byte sequence — or out-of-band signal —
//! the remote session expects, honoring the terminal-compatibility modes
//! that interact here: application cursor/keypad modes, VT52 emulation,
//! nethack keypad remapping, five function-key numbering schemes,
//! Alt+keypad code-point composition, and the hand-maintained Ctrl special
//! cases.
//!
//! Everything is synchronous and single-threaded: the embedder's event loop
//! calls [`KeyEncoder::encode`] once per observed key event, in observation
//! order. The only mutable state is the Alt+keypad compose accumulator,
//! owned by the [`KeyEncoder`] — one per live input source.
//!
//! Out of scope: rendering, fonts, clipboard, scrollback, session
//! lifecycle, and platform event loops. The encoder's job ends at "produce
//! bytes for this one key event"; the transport frames them.
//!
//! # Example
//!
//! ```
//! use keywire_core::{ArrowKey, KeyEncoder, KeyEvent, KeyIdentity, Modifiers, TerminalModes};
//!
//! let modes = TerminalModes::new();
//! let mut encoder = KeyEncoder::new();
//!
//! let up = KeyEvent::new(KeyIdentity::Arrow(ArrowKey::Up));
//! let out = encoder.encode(&up, &modes);
//! assert_eq!(out.as_bytes(), Some(b"\x1b[A".as_slice()));
//!
//! // Ctrl requests the opposite cursor-mode prefix.
//! let ctrl_up = KeyEvent::new(KeyIdentity::Arrow(ArrowKey::Up)).with_modifiers(Modifiers::CTRL);
//! let out = encoder.encode(&ctrl_up, &modes);
//! assert_eq!(out.as_bytes(), Some(b"\x1bOA".as_slice()));
//! ```

mod arrow;
mod classify;
mod compose;
mod control;
mod editing;
mod encoder;
mod event;
mod function;
mod keypad;
mod modes;
mod output;
pub mod platform;
mod text;

#[cfg(feature = "serde")]
pub mod trace;

pub use classify::{Category, classify};
pub use compose::ComposeState;
pub use encoder::KeyEncoder;
pub use event::{
    ArrowKey, EditKey, KeyEvent, KeyIdentity, KeyPhase, KeypadKey, ModifierKey, Modifiers,
};
pub use modes::{FunkyType, SessionCharset, TerminalModes};
pub use output::{ByteOutput, ByteSeq, Charset, EncodedOutput, SpecialSignal};
