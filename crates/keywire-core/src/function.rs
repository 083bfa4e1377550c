#![forbid(unsafe_code)]

//! Function-key encoding (F1–F20) across the five numbering schemes.

use crate::event::Modifiers;
use crate::modes::{FunkyType, TerminalModes};
use crate::output::EncodedOutput;

/// SCO console letter table. Index = (n-1) + 12*shift + 24*ctrl for F1–F12.
const SCO_LETTERS: &[u8; 48] = b"MNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz@[\\]^_`{";

/// Tilde code for a logical function number 1–20.
///
/// The historical sequence skips 16, 22, 27 and 30, so the offset grows in
/// steps as the number climbs.
const fn tilde_code(n: u8) -> u8 {
    match n {
        1..=5 => n + 10,
        6..=10 => n + 11,
        11..=14 => n + 12,
        15..=16 => n + 13,
        _ => n + 14,
    }
}

/// Encode a function key.
///
/// F1–F10 use Shift to select the F11–F20 code tier; F11–F20 have no Shift
/// alternates. Scheme branches are tried in a fixed order (SCO, VT52/VT100+,
/// Linux, xterm) with the tilde form as the universal fallback.
///
/// Numbers outside 1–20 clamp to the nearest real key.
#[must_use]
pub fn encode(n: u8, modifiers: Modifiers, modes: &TerminalModes) -> EncodedOutput {
    let n = n.clamp(1, 20);
    let shift = modifiers.contains(Modifiers::SHIFT);
    let ctrl = modifiers.contains(Modifiers::CTRL);

    if modes.funky_type == FunkyType::Sco && (1..=12).contains(&n) {
        let mut index = usize::from(n - 1);
        if shift {
            index += 12;
        }
        if ctrl {
            index += 24;
        }
        return EncodedOutput::seq(&[0x1B, b'[', SCO_LETTERS[index]]);
    }

    let code = if shift && (1..=10).contains(&n) {
        tilde_code(n + 10)
    } else {
        tilde_code(n)
    };

    if (modes.vt52_mode || modes.funky_type == FunkyType::Vt100Plus)
        && (11..=24).contains(&code)
    {
        // Two letters are reserved elsewhere in the alphabet, so the offset
        // grows past codes 15 and 21.
        let mut offset = 0;
        if code > 15 {
            offset += 1;
        }
        if code > 21 {
            offset += 1;
        }
        let letter = code + b'P' - 11 - offset;
        return if modes.vt52_mode {
            EncodedOutput::seq(&[0x1B, letter])
        } else {
            EncodedOutput::seq(&[0x1B, b'O', letter])
        };
    }

    if modes.funky_type == FunkyType::Linux && (11..=15).contains(&code) {
        // Double bracket is a Linux-console quirk, not a typo.
        return EncodedOutput::seq(&[0x1B, b'[', b'[', code - 11 + b'A']);
    }

    if modes.funky_type == FunkyType::Xterm && (11..=14).contains(&code) {
        let letter = code + b'P' - 11;
        return if modes.vt52_mode {
            EncodedOutput::seq(&[0x1B, letter])
        } else {
            EncodedOutput::seq(&[0x1B, b'O', letter])
        };
    }

    EncodedOutput::csi_tilde(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn modes_with(funky: FunkyType) -> TerminalModes {
        let mut modes = TerminalModes::new();
        modes.funky_type = funky;
        modes
    }

    #[test]
    fn tilde_codes_match_the_historical_sequence() {
        let expect = [
            11, 12, 13, 14, 15, 17, 18, 19, 20, 21, 23, 24, 25, 26, 28, 29, 31, 32, 33, 34,
        ];
        for (n, want) in (1..=20).zip(expect) {
            assert_eq!(tilde_code(n), want, "F{n}");
        }
    }

    #[test]
    fn xterm_f1_to_f4_are_ss3_letters() {
        let modes = modes_with(FunkyType::Xterm);
        let expect: [&[u8]; 4] = [b"\x1bOP", b"\x1bOQ", b"\x1bOR", b"\x1bOS"];
        for (n, want) in (1..=4).zip(expect) {
            let out = encode(n, Modifiers::NONE, &modes);
            assert_eq!(out.as_bytes(), Some(want), "F{n}");
        }
    }

    #[test]
    fn xterm_f5_falls_to_tilde_form() {
        let modes = modes_with(FunkyType::Xterm);
        let out = encode(5, Modifiers::NONE, &modes);
        assert_eq!(out.as_bytes(), Some(b"\x1b[15~".as_slice()));
    }

    #[test]
    fn shifted_f1_under_xterm_is_generic_f11_code() {
        // Shift-adjusted number is 23; xterm only covers 11-14, so the
        // generic tilde form applies.
        let modes = modes_with(FunkyType::Xterm);
        let out = encode(1, Modifiers::SHIFT, &modes);
        assert_eq!(out.as_bytes(), Some(b"\x1b[23~".as_slice()));
    }

    #[test]
    fn shift_has_no_effect_on_f11_and_up() {
        let modes = modes_with(FunkyType::Xterm);
        for n in 11..=20 {
            assert_eq!(
                encode(n, Modifiers::SHIFT, &modes),
                encode(n, Modifiers::NONE, &modes),
                "F{n}"
            );
        }
    }

    #[test]
    fn shifted_fn_matches_the_higher_key() {
        let modes = modes_with(FunkyType::Xterm);
        for n in 1..=10 {
            assert_eq!(
                encode(n, Modifiers::SHIFT, &modes),
                encode(n + 10, Modifiers::NONE, &modes),
                "Shift+F{n}"
            );
        }
    }

    #[test]
    fn sco_table_with_shift_and_ctrl_strides() {
        let modes = modes_with(FunkyType::Sco);
        let f1 = encode(1, Modifiers::NONE, &modes);
        assert_eq!(f1.as_bytes(), Some(b"\x1b[M".as_slice()));
        let f12 = encode(12, Modifiers::NONE, &modes);
        assert_eq!(f12.as_bytes(), Some(b"\x1b[X".as_slice()));

        let shift_f1 = encode(1, Modifiers::SHIFT, &modes);
        assert_eq!(shift_f1.as_bytes(), Some(b"\x1b[Y".as_slice()));
        let ctrl_f1 = encode(1, Modifiers::CTRL, &modes);
        assert_eq!(ctrl_f1.as_bytes(), Some(b"\x1b[k".as_slice()));
        let ctrl_shift_f1 = encode(1, Modifiers::CTRL | Modifiers::SHIFT, &modes);
        assert_eq!(ctrl_shift_f1.as_bytes(), Some(b"\x1b[w".as_slice()));
        let ctrl_shift_f12 = encode(12, Modifiers::CTRL | Modifiers::SHIFT, &modes);
        assert_eq!(ctrl_shift_f12.as_bytes(), Some(b"\x1b[{".as_slice()));
    }

    #[test]
    fn sco_beyond_f12_uses_tilde_form() {
        let modes = modes_with(FunkyType::Sco);
        let out = encode(13, Modifiers::NONE, &modes);
        assert_eq!(out.as_bytes(), Some(b"\x1b[25~".as_slice()));
    }

    #[test]
    fn vt100_plus_letter_derivation_skips_reserved_letters() {
        let modes = modes_with(FunkyType::Vt100Plus);
        // Codes 11..15 → P..T, gap, 17..21 → U..Y, gap, 23..24 → Z...
        let cases: [(u8, &[u8]); 6] = [
            (1, b"\x1bOP"),
            (5, b"\x1bOT"),
            (6, b"\x1bOU"),
            (10, b"\x1bOY"),
            (11, b"\x1bOZ"),
            (12, b"\x1bO["),
        ];
        for (n, want) in cases {
            let out = encode(n, Modifiers::NONE, &modes);
            assert_eq!(out.as_bytes(), Some(want), "F{n}");
        }
    }

    #[test]
    fn vt52_uses_bare_escape_letters() {
        let mut modes = modes_with(FunkyType::Xterm);
        modes.vt52_mode = true;
        let out = encode(1, Modifiers::NONE, &modes);
        assert_eq!(out.as_bytes(), Some(b"\x1bP".as_slice()));
        let out = encode(5, Modifiers::NONE, &modes);
        assert_eq!(out.as_bytes(), Some(b"\x1bT".as_slice()));
    }

    #[test]
    fn linux_console_double_bracket_for_low_codes() {
        let modes = modes_with(FunkyType::Linux);
        let expect: [&[u8]; 5] = [b"\x1b[[A", b"\x1b[[B", b"\x1b[[C", b"\x1b[[D", b"\x1b[[E"];
        for (n, want) in (1..=5).zip(expect) {
            let out = encode(n, Modifiers::NONE, &modes);
            assert_eq!(out.as_bytes(), Some(want), "F{n}");
        }
        // F6 (code 17) is outside 11-15 and falls through.
        let out = encode(6, Modifiers::NONE, &modes);
        assert_eq!(out.as_bytes(), Some(b"\x1b[17~".as_slice()));
    }

    #[test]
    fn out_of_range_numbers_clamp_to_the_nearest_key() {
        let modes = modes_with(FunkyType::Xterm);
        assert_eq!(
            encode(0, Modifiers::NONE, &modes),
            encode(1, Modifiers::NONE, &modes)
        );
        assert_eq!(
            encode(250, Modifiers::NONE, &modes),
            encode(20, Modifiers::NONE, &modes)
        );
        // Still clamped under the scheme branches.
        let sco = modes_with(FunkyType::Sco);
        assert_eq!(
            encode(u8::MAX, Modifiers::SHIFT, &sco),
            encode(20, Modifiers::SHIFT, &sco)
        );
    }

    #[test]
    fn vt400_has_no_letter_scheme_for_function_keys() {
        let modes = modes_with(FunkyType::Vt400);
        let out = encode(1, Modifiers::NONE, &modes);
        assert_eq!(out.as_bytes(), Some(b"\x1b[11~".as_slice()));
        let out = encode(20, Modifiers::NONE, &modes);
        assert_eq!(out.as_bytes(), Some(b"\x1b[34~".as_slice()));
    }
}
