// SPDX-License-Identifier: Apache-2.0

//! The value automaton: literals, strings (with the UTF-8 / escape /
//! surrogate sub-machine) and numbers (strict RFC 8259 grammar).
//!
//! Containers are not handled here; `[` and `{` at a value position are
//! intercepted by the composer before this table is consulted.

use super::{set, set_each, span, Class, HEX_DIGITS, NUM_TERMINATORS};
use crate::error::ErrorKind;

use self::ValueState as S;

/// States of the value automaton. Error states are absorbing; `class()`
/// maps them onto the public error taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub(crate) enum ValueState {
    Start,
    // null
    NullN,
    NullU,
    NullL1,
    NullDone,
    // true
    TrueT,
    TrueR,
    TrueU,
    TrueDone,
    // false
    FalseF,
    FalseA,
    FalseL,
    FalseS,
    FalseDone,
    // string body; entered from the opening quote and re-entered after
    // every completed character, escape or unicode escape
    StrBody,
    // n continuation bytes still owed for a multi-byte UTF-8 sequence
    StrCont1,
    StrCont2,
    StrCont3,
    // backslash seen
    Escape,
    // \u seen
    EscapeU,
    // plain \uXXXX, counted by hex digits consumed
    Hex1,
    Hex2,
    Hex3,
    // first hex digit was d/D: possibly a surrogate
    MaybeHs,
    HsHex2,
    HsHex3,
    HsHex4,
    // low-surrogate tail: \uD8xx consumed, now requiring \uDCxx-\uDFxx
    LsSlash,
    LsU,
    LsHex1,
    LsHex2,
    LsHex3,
    StrDone,
    // numbers
    NumMinus,
    NumZero,
    NumInt,
    NumDecimal,
    NumFrac,
    NumExp,
    NumExpSign,
    NumExpDigit,
    NumEnd,
    // absorbing rejections
    ErrInvalidStart,
    ErrExpectedNull,
    ErrExpectedTrue,
    ErrExpectedFalse,
    ErrInvalidUtf8,
    ErrInvalidEscapeChar,
    ErrInvalidUnicodeEscape,
    ErrLoneSurrogate,
    ErrUnpairedSurrogate,
    ErrLeadingZeroes,
    ErrPlusSign,
    ErrNoDigitBeforeDecimal,
    ErrNoDigitBeforeExponent,
    ErrNotANumber,
    ErrDoubleDecimal,
    ErrDoubleExponent,
}

pub(crate) const COUNT: usize = S::ErrDoubleExponent as usize + 1;

type Row = [ValueState; 256];

const fn self_row(state: ValueState) -> Row {
    [state; 256]
}

/// Shared row for every state that expects the next character of string
/// content: printable ASCII, a multi-byte lead, an escape, or the closing
/// quote. Control bytes and stray continuation/invalid bytes reject.
const fn body_row() -> Row {
    let mut r = self_row(S::ErrInvalidUtf8);
    r = span(r, 0x20, 0x7F, S::StrBody);
    r = set(r, b'"', S::StrDone);
    r = set(r, b'\\', S::Escape);
    r = span(r, 0xC0, 0xDF, S::StrCont1);
    r = span(r, 0xE0, 0xEF, S::StrCont2);
    r = span(r, 0xF0, 0xF7, S::StrCont3);
    r
}

const fn cont_row(next: ValueState) -> Row {
    span(self_row(S::ErrInvalidUtf8), 0x80, 0xBF, next)
}

const fn literal_row(expect: u8, then: ValueState, err: ValueState) -> Row {
    set(self_row(err), expect, then)
}

const fn hex_row(next: ValueState, err: ValueState) -> Row {
    set_each(self_row(err), HEX_DIGITS, next)
}

const fn start_row() -> Row {
    let mut r = self_row(S::ErrInvalidStart);
    r = set(r, b'n', S::NullN);
    r = set(r, b't', S::TrueT);
    r = set(r, b'f', S::FalseF);
    r = set(r, b'"', S::StrBody);
    r = set(r, b'0', S::NumZero);
    r = span(r, b'1', b'9', S::NumInt);
    r = set(r, b'-', S::NumMinus);
    r = set(r, b'.', S::ErrNoDigitBeforeDecimal);
    r = set_each(r, b"eE", S::ErrNoDigitBeforeExponent);
    r = set(r, b'+', S::ErrPlusSign);
    r
}

const fn escape_row() -> Row {
    let mut r = self_row(S::ErrInvalidEscapeChar);
    r = set_each(r, b"\"\\/bfnrt", S::StrBody);
    r = set(r, b'u', S::EscapeU);
    r
}

const fn escape_u_row() -> Row {
    let mut r = set_each(self_row(S::ErrInvalidUnicodeEscape), HEX_DIGITS, S::Hex1);
    // d/D may open a surrogate, decided by the next nibble
    r = set_each(r, b"dD", S::MaybeHs);
    r
}

const fn maybe_hs_row() -> Row {
    let mut r = set_each(self_row(S::ErrInvalidUnicodeEscape), HEX_DIGITS, S::Hex2);
    r = set_each(r, b"89abAB", S::HsHex2);
    r = set_each(r, b"cdefCDEF", S::ErrLoneSurrogate);
    r
}

const fn num_zero_row() -> Row {
    let mut r = self_row(S::ErrNotANumber);
    r = span(r, b'0', b'9', S::ErrLeadingZeroes);
    r = set(r, b'.', S::NumDecimal);
    r = set_each(r, b"eE", S::NumExp);
    r = set_each(r, NUM_TERMINATORS, S::NumEnd);
    r
}

const fn num_int_row() -> Row {
    let mut r = self_row(S::ErrNotANumber);
    r = span(r, b'0', b'9', S::NumInt);
    r = set(r, b'.', S::NumDecimal);
    r = set_each(r, b"eE", S::NumExp);
    r = set_each(r, NUM_TERMINATORS, S::NumEnd);
    r
}

const fn num_decimal_row() -> Row {
    let mut r = self_row(S::ErrNotANumber);
    r = span(r, b'0', b'9', S::NumFrac);
    r = set(r, b'.', S::ErrDoubleDecimal);
    r
}

const fn num_frac_row() -> Row {
    let mut r = self_row(S::ErrNotANumber);
    r = span(r, b'0', b'9', S::NumFrac);
    r = set_each(r, b"eE", S::NumExp);
    r = set(r, b'.', S::ErrDoubleDecimal);
    r = set_each(r, NUM_TERMINATORS, S::NumEnd);
    r
}

const fn num_exp_row() -> Row {
    let mut r = self_row(S::ErrNotANumber);
    r = set_each(r, b"+-", S::NumExpSign);
    r = span(r, b'0', b'9', S::NumExpDigit);
    r = set_each(r, b"eE", S::ErrDoubleExponent);
    r
}

const fn num_exp_sign_row() -> Row {
    let mut r = self_row(S::ErrNotANumber);
    r = span(r, b'0', b'9', S::NumExpDigit);
    r = set_each(r, b"eE", S::ErrDoubleExponent);
    r
}

const fn num_exp_digit_row() -> Row {
    let mut r = self_row(S::ErrNotANumber);
    r = span(r, b'0', b'9', S::NumExpDigit);
    r = set_each(r, NUM_TERMINATORS, S::NumEnd);
    r = set_each(r, b"eE", S::ErrDoubleExponent);
    r
}

const fn build() -> [Row; COUNT] {
    let mut t = [self_row(S::Start); COUNT];
    t[S::Start as usize] = start_row();

    t[S::NullN as usize] = literal_row(b'u', S::NullU, S::ErrExpectedNull);
    t[S::NullU as usize] = literal_row(b'l', S::NullL1, S::ErrExpectedNull);
    t[S::NullL1 as usize] = literal_row(b'l', S::NullDone, S::ErrExpectedNull);
    t[S::NullDone as usize] = self_row(S::NullDone);

    t[S::TrueT as usize] = literal_row(b'r', S::TrueR, S::ErrExpectedTrue);
    t[S::TrueR as usize] = literal_row(b'u', S::TrueU, S::ErrExpectedTrue);
    t[S::TrueU as usize] = literal_row(b'e', S::TrueDone, S::ErrExpectedTrue);
    t[S::TrueDone as usize] = self_row(S::TrueDone);

    t[S::FalseF as usize] = literal_row(b'a', S::FalseA, S::ErrExpectedFalse);
    t[S::FalseA as usize] = literal_row(b'l', S::FalseL, S::ErrExpectedFalse);
    t[S::FalseL as usize] = literal_row(b's', S::FalseS, S::ErrExpectedFalse);
    t[S::FalseS as usize] = literal_row(b'e', S::FalseDone, S::ErrExpectedFalse);
    t[S::FalseDone as usize] = self_row(S::FalseDone);

    t[S::StrBody as usize] = body_row();
    t[S::StrCont1 as usize] = cont_row(S::StrBody);
    t[S::StrCont2 as usize] = cont_row(S::StrCont1);
    t[S::StrCont3 as usize] = cont_row(S::StrCont2);

    t[S::Escape as usize] = escape_row();
    t[S::EscapeU as usize] = escape_u_row();
    t[S::Hex1 as usize] = hex_row(S::Hex2, S::ErrInvalidUnicodeEscape);
    t[S::Hex2 as usize] = hex_row(S::Hex3, S::ErrInvalidUnicodeEscape);
    t[S::Hex3 as usize] = hex_row(S::StrBody, S::ErrInvalidUnicodeEscape);

    t[S::MaybeHs as usize] = maybe_hs_row();
    t[S::HsHex2 as usize] = hex_row(S::HsHex3, S::ErrInvalidUnicodeEscape);
    t[S::HsHex3 as usize] = hex_row(S::HsHex4, S::ErrInvalidUnicodeEscape);
    t[S::HsHex4 as usize] = set(self_row(S::ErrUnpairedSurrogate), b'\\', S::LsSlash);
    t[S::LsSlash as usize] = set(self_row(S::ErrUnpairedSurrogate), b'u', S::LsU);
    t[S::LsU as usize] = set_each(self_row(S::ErrUnpairedSurrogate), b"dD", S::LsHex1);
    t[S::LsHex1 as usize] = set_each(self_row(S::ErrUnpairedSurrogate), b"cdefCDEF", S::LsHex2);
    t[S::LsHex2 as usize] = hex_row(S::LsHex3, S::ErrUnpairedSurrogate);
    t[S::LsHex3 as usize] = hex_row(S::StrBody, S::ErrUnpairedSurrogate);

    t[S::StrDone as usize] = self_row(S::StrDone);

    t[S::NumMinus as usize] = {
        let r = set(self_row(S::ErrNotANumber), b'0', S::NumZero);
        span(r, b'1', b'9', S::NumInt)
    };
    t[S::NumZero as usize] = num_zero_row();
    t[S::NumInt as usize] = num_int_row();
    t[S::NumDecimal as usize] = num_decimal_row();
    t[S::NumFrac as usize] = num_frac_row();
    t[S::NumExp as usize] = num_exp_row();
    t[S::NumExpSign as usize] = num_exp_sign_row();
    t[S::NumExpDigit as usize] = num_exp_digit_row();
    t[S::NumEnd as usize] = self_row(S::NumEnd);

    t[S::ErrInvalidStart as usize] = self_row(S::ErrInvalidStart);
    t[S::ErrExpectedNull as usize] = self_row(S::ErrExpectedNull);
    t[S::ErrExpectedTrue as usize] = self_row(S::ErrExpectedTrue);
    t[S::ErrExpectedFalse as usize] = self_row(S::ErrExpectedFalse);
    t[S::ErrInvalidUtf8 as usize] = self_row(S::ErrInvalidUtf8);
    t[S::ErrInvalidEscapeChar as usize] = self_row(S::ErrInvalidEscapeChar);
    t[S::ErrInvalidUnicodeEscape as usize] = self_row(S::ErrInvalidUnicodeEscape);
    t[S::ErrLoneSurrogate as usize] = self_row(S::ErrLoneSurrogate);
    t[S::ErrUnpairedSurrogate as usize] = self_row(S::ErrUnpairedSurrogate);
    t[S::ErrLeadingZeroes as usize] = self_row(S::ErrLeadingZeroes);
    t[S::ErrPlusSign as usize] = self_row(S::ErrPlusSign);
    t[S::ErrNoDigitBeforeDecimal as usize] = self_row(S::ErrNoDigitBeforeDecimal);
    t[S::ErrNoDigitBeforeExponent as usize] = self_row(S::ErrNoDigitBeforeExponent);
    t[S::ErrNotANumber as usize] = self_row(S::ErrNotANumber);
    t[S::ErrDoubleDecimal as usize] = self_row(S::ErrDoubleDecimal);
    t[S::ErrDoubleExponent as usize] = self_row(S::ErrDoubleExponent);
    t
}

/// The full value-automaton transition table.
pub(crate) static TABLE: [Row; COUNT] = build();

impl ValueState {
    pub(crate) const fn class(self) -> Class {
        match self {
            S::NullDone | S::TrueDone | S::FalseDone | S::StrDone | S::NumEnd => Class::Terminal,
            S::ErrInvalidStart => Class::Error(ErrorKind::InvalidStart),
            S::ErrExpectedNull => Class::Error(ErrorKind::ExpectedNull),
            S::ErrExpectedTrue => Class::Error(ErrorKind::ExpectedTrue),
            S::ErrExpectedFalse => Class::Error(ErrorKind::ExpectedFalse),
            S::ErrInvalidUtf8 => Class::Error(ErrorKind::InvalidUtf8),
            S::ErrInvalidEscapeChar => Class::Error(ErrorKind::InvalidEscapeChar),
            S::ErrInvalidUnicodeEscape => Class::Error(ErrorKind::InvalidUnicodeEscape),
            S::ErrLoneSurrogate => Class::Error(ErrorKind::LoneSurrogate),
            S::ErrUnpairedSurrogate => Class::Error(ErrorKind::UnpairedSurrogate),
            S::ErrLeadingZeroes => Class::Error(ErrorKind::LeadingZeroes),
            S::ErrPlusSign => Class::Error(ErrorKind::PlusSign),
            S::ErrNoDigitBeforeDecimal => Class::Error(ErrorKind::NoDigitBeforeDecimal),
            S::ErrNoDigitBeforeExponent => Class::Error(ErrorKind::NoDigitBeforeExponent),
            S::ErrNotANumber => Class::Error(ErrorKind::NotANumber),
            S::ErrDoubleDecimal => Class::Error(ErrorKind::DoubleDecimal),
            S::ErrDoubleExponent => Class::Error(ErrorKind::DoubleExponent),
            _ => Class::Live,
        }
    }

    /// `NumEnd` is reached *on* the terminator byte, which still belongs
    /// to the parent frame.
    pub(crate) const fn replays_delimiter(self) -> bool {
        matches!(self, S::NumEnd)
    }

    /// Number states that form a complete number if the input ends here.
    /// A bare top-level number has no closing delimiter.
    pub(crate) const fn accepts_eof(self) -> bool {
        matches!(self, S::NumZero | S::NumInt | S::NumFrac | S::NumExpDigit)
    }
}

/// Every state, for exhaustive table sweeps in tests.
#[cfg(test)]
pub(crate) static ALL: [ValueState; COUNT] = [
    S::Start,
    S::NullN,
    S::NullU,
    S::NullL1,
    S::NullDone,
    S::TrueT,
    S::TrueR,
    S::TrueU,
    S::TrueDone,
    S::FalseF,
    S::FalseA,
    S::FalseL,
    S::FalseS,
    S::FalseDone,
    S::StrBody,
    S::StrCont1,
    S::StrCont2,
    S::StrCont3,
    S::Escape,
    S::EscapeU,
    S::Hex1,
    S::Hex2,
    S::Hex3,
    S::MaybeHs,
    S::HsHex2,
    S::HsHex3,
    S::HsHex4,
    S::LsSlash,
    S::LsU,
    S::LsHex1,
    S::LsHex2,
    S::LsHex3,
    S::StrDone,
    S::NumMinus,
    S::NumZero,
    S::NumInt,
    S::NumDecimal,
    S::NumFrac,
    S::NumExp,
    S::NumExpSign,
    S::NumExpDigit,
    S::NumEnd,
    S::ErrInvalidStart,
    S::ErrExpectedNull,
    S::ErrExpectedTrue,
    S::ErrExpectedFalse,
    S::ErrInvalidUtf8,
    S::ErrInvalidEscapeChar,
    S::ErrInvalidUnicodeEscape,
    S::ErrLoneSurrogate,
    S::ErrUnpairedSurrogate,
    S::ErrLeadingZeroes,
    S::ErrPlusSign,
    S::ErrNoDigitBeforeDecimal,
    S::ErrNoDigitBeforeExponent,
    S::ErrNotANumber,
    S::ErrDoubleDecimal,
    S::ErrDoubleExponent,
];
