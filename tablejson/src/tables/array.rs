// SPDX-License-Identifier: Apache-2.0

//! The array automaton: `[` elem `,` elem `]` structure.
//!
//! A frame enters at `Open` with the `[` already consumed by the composer.
//! Element content never reaches this table; the composer pushes a child
//! frame on any value-start byte and records it here as `Value`.

use super::{set, set_each, Class, VALUE_START};
use crate::error::ErrorKind;

use self::ArrayState as S;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub(crate) enum ArrayState {
    /// Right after `[`: first element or immediate `]`.
    Open,
    /// An element just completed; expecting `,` or `]`.
    Value,
    /// A `,` was consumed; the next element is mandatory.
    Comma,
    Done,
    ErrTrailingComma,
    ErrInvalidValue,
}

pub(crate) const COUNT: usize = S::ErrInvalidValue as usize + 1;

type Row = [ArrayState; 256];

const fn build() -> [Row; COUNT] {
    let mut t = [[S::ErrInvalidValue; 256]; COUNT];

    t[S::Open as usize] = {
        let r = set_each([S::ErrInvalidValue; 256], VALUE_START, S::Value);
        set(r, b']', S::Done)
    };
    t[S::Value as usize] = {
        let r = set([S::ErrInvalidValue; 256], b',', S::Comma);
        set(r, b']', S::Done)
    };
    // a `]` directly after the comma is the one true trailing comma
    t[S::Comma as usize] = {
        let r = set_each([S::ErrInvalidValue; 256], VALUE_START, S::Value);
        set(r, b']', S::ErrTrailingComma)
    };
    t[S::Done as usize] = [S::Done; 256];
    t[S::ErrTrailingComma as usize] = [S::ErrTrailingComma; 256];
    t[S::ErrInvalidValue as usize] = [S::ErrInvalidValue; 256];
    t
}

pub(crate) static TABLE: [Row; COUNT] = build();

impl ArrayState {
    pub(crate) const fn class(self) -> Class {
        match self {
            S::Done => Class::Terminal,
            S::ErrTrailingComma => Class::Error(ErrorKind::TrailingComma),
            S::ErrInvalidValue => Class::Error(ErrorKind::InvalidValue),
            _ => Class::Live,
        }
    }
}

#[cfg(test)]
pub(crate) static ALL: [ArrayState; COUNT] = [
    S::Open,
    S::Value,
    S::Comma,
    S::Done,
    S::ErrTrailingComma,
    S::ErrInvalidValue,
];
