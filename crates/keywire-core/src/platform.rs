#![forbid(unsafe_code)]

//! Platform adapter seam.
//!
//! Some platforms fold the Meta modifier into the decoded text before the
//! event ever reaches the embedder (the "manual Meta" situation). The fix
//! is to re-derive the key identity from the raw hardware code with the
//! Meta bits stripped, attach it as the event's `unicode_hint`, and set
//! [`Modifiers::MANUAL_META`](crate::event::Modifiers::MANUAL_META). The
//! core encoder never touches raw hardware key codes; this trait is where
//! that capability lives.

use crate::event::KeyIdentity;

/// Resolves raw platform key codes into logical identities.
///
/// Implemented by platform adapters, consumed by embedders when building
/// [`KeyEvent`](crate::event::KeyEvent)s on manual-Meta platforms. `mask`
/// is the platform's opaque modifier bitmask to strip (typically
/// [`TerminalModes::meta_modifier_mask`](crate::modes::TerminalModes::meta_modifier_mask)).
pub trait KeyResolver {
    /// Re-derive the logical key for `raw_key` as if the masked modifiers
    /// were not held. `None` when the raw code has no logical mapping.
    fn resolve_without_modifier(&self, raw_key: u32, mask: u32) -> Option<KeyIdentity>;
}
