#![forbid(unsafe_code)]

//! The session key encoder: compose short-circuit, classification, and
//! scheme dispatch.
//!
//! One [`KeyEncoder`] per live keyboard input source (one per session
//! window). It owns the only mutable state in the crate — the compose
//! accumulator — so two windows never share composition progress. Events
//! must be fed in observation order; compose correctness depends on it.

use crate::arrow;
use crate::classify::{Category, classify};
use crate::compose::ComposeState;
use crate::control;
use crate::editing;
use crate::event::{KeyEvent, KeyIdentity, KeyPhase, ModifierKey, Modifiers};
use crate::function;
use crate::keypad;
use crate::modes::TerminalModes;
use crate::output::EncodedOutput;
use crate::text;

/// Stateful encoder for one keyboard input source.
#[derive(Debug, Clone, Default)]
pub struct KeyEncoder {
    compose: ComposeState,
}

impl KeyEncoder {
    /// A fresh encoder with no composition in progress.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current compose accumulator state (diagnostics and tests).
    #[must_use]
    pub const fn compose_state(&self) -> &ComposeState {
        &self.compose
    }

    /// Encode one key event under the given mode snapshot.
    ///
    /// Total: every event yields exactly one [`EncodedOutput`], possibly
    /// [`EncodedOutput::None`]. Identical `(event, modes)` pairs yield
    /// identical output except through the documented compose state.
    pub fn encode(&mut self, event: &KeyEvent, modes: &TerminalModes) -> EncodedOutput {
        // Compose sees every event in which Meta participates, before any
        // other encoder gets a say.
        if event.modifiers.contains(Modifiers::META)
            || event.identity == KeyIdentity::Modifier(ModifierKey::Meta)
        {
            if let Some(out) = self.compose.feed(event, modes) {
                #[cfg(feature = "tracing")]
                tracing::trace!(state = ?self.compose, "compose consumed key event");
                return out;
            }
        }

        // Only presses encode; the Meta release above is the one exception.
        if event.phase == KeyPhase::Release {
            return EncodedOutput::None;
        }

        let category = classify(event.identity);
        #[cfg(feature = "tracing")]
        tracing::trace!(?category, identity = ?event.identity, "dispatching key event");

        match category {
            Category::Arrow(dir) => arrow::encode(dir, event.modifiers, modes),
            Category::Editing(key) => editing::encode(key, event.modifiers, modes),
            Category::Function(n) => function::encode(n, event.modifiers, modes),
            Category::NumericKeypad(key) => keypad::encode(key, event, modes),
            Category::ControlSpecial => control::encode(event, modes),
            Category::PlainText => text::encode(event, modes),
        }
    }
}
