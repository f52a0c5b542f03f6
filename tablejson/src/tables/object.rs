// SPDX-License-Identifier: Apache-2.0

//! The object automaton: `{` "key" `:` value `,` ... `}` structure.
//!
//! A frame enters at `Open` with the `{` already consumed. Key strings and
//! member values run in child frames; this table sees only the structural
//! bytes between them.

use super::{set, set_each, Class, VALUE_START};
use crate::error::ErrorKind;

use self::ObjectState as S;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub(crate) enum ObjectState {
    /// Right after `{`: first key or immediate `}`.
    Open,
    /// A key string just completed; expecting `:`.
    Key,
    /// `:` consumed; the member value is mandatory.
    Sep,
    /// A member value just completed; expecting `,` or `}`.
    Value,
    /// `,` consumed; the next key is mandatory.
    Comma,
    Done,
    ErrKeyNotString,
    ErrColonNotFound,
    ErrMultipleColon,
    ErrInvalidObjValue,
    ErrValueEnd,
    ErrTrailingComma,
}

pub(crate) const COUNT: usize = S::ErrTrailingComma as usize + 1;

type Row = [ObjectState; 256];

const fn build() -> [Row; COUNT] {
    let mut t = [[S::ErrKeyNotString; 256]; COUNT];

    t[S::Open as usize] = {
        let r = set([S::ErrKeyNotString; 256], b'"', S::Key);
        set(r, b'}', S::Done)
    };
    t[S::Key as usize] = set([S::ErrColonNotFound; 256], b':', S::Sep);
    t[S::Sep as usize] = {
        let r = set_each([S::ErrInvalidObjValue; 256], VALUE_START, S::Value);
        set(r, b':', S::ErrMultipleColon)
    };
    t[S::Value as usize] = {
        let r = set([S::ErrValueEnd; 256], b',', S::Comma);
        set(r, b'}', S::Done)
    };
    // a `}` directly after the comma is the trailing comma; anything else
    // that is not a quote failed to start a key
    t[S::Comma as usize] = {
        let r = set([S::ErrKeyNotString; 256], b'"', S::Key);
        set(r, b'}', S::ErrTrailingComma)
    };
    t[S::Done as usize] = [S::Done; 256];
    t[S::ErrKeyNotString as usize] = [S::ErrKeyNotString; 256];
    t[S::ErrColonNotFound as usize] = [S::ErrColonNotFound; 256];
    t[S::ErrMultipleColon as usize] = [S::ErrMultipleColon; 256];
    t[S::ErrInvalidObjValue as usize] = [S::ErrInvalidObjValue; 256];
    t[S::ErrValueEnd as usize] = [S::ErrValueEnd; 256];
    t[S::ErrTrailingComma as usize] = [S::ErrTrailingComma; 256];
    t
}

pub(crate) static TABLE: [Row; COUNT] = build();

impl ObjectState {
    pub(crate) const fn class(self) -> Class {
        match self {
            S::Done => Class::Terminal,
            S::ErrKeyNotString => Class::Error(ErrorKind::KeyNotString),
            S::ErrColonNotFound => Class::Error(ErrorKind::ColonNotFound),
            S::ErrMultipleColon => Class::Error(ErrorKind::MultipleColon),
            S::ErrInvalidObjValue => Class::Error(ErrorKind::InvalidObjValue),
            S::ErrValueEnd => Class::Error(ErrorKind::ValueEnd),
            S::ErrTrailingComma => Class::Error(ErrorKind::TrailingComma),
            _ => Class::Live,
        }
    }
}

#[cfg(test)]
pub(crate) static ALL: [ObjectState; COUNT] = [
    S::Open,
    S::Key,
    S::Sep,
    S::Value,
    S::Comma,
    S::Done,
    S::ErrKeyNotString,
    S::ErrColonNotFound,
    S::ErrMultipleColon,
    S::ErrInvalidObjValue,
    S::ErrValueEnd,
    S::ErrTrailingComma,
];

#[cfg(test)]
mod tests {
    use super::*;

    fn next(state: ObjectState, byte: u8) -> ObjectState {
        TABLE[state as usize][byte as usize]
    }

    #[test]
    fn all_covers_every_discriminant_once() {
        for (i, &state) in ALL.iter().enumerate() {
            assert_eq!(state as usize, i);
        }
    }

    #[test]
    fn empty_object_closes_from_open() {
        assert_eq!(next(ObjectState::Open, b'}'), ObjectState::Done);
    }

    #[test]
    fn member_sequence() {
        assert_eq!(next(ObjectState::Open, b'"'), ObjectState::Key);
        assert_eq!(next(ObjectState::Key, b':'), ObjectState::Sep);
        assert_eq!(next(ObjectState::Sep, b'1'), ObjectState::Value);
        assert_eq!(next(ObjectState::Value, b','), ObjectState::Comma);
        assert_eq!(next(ObjectState::Comma, b'"'), ObjectState::Key);
        assert_eq!(next(ObjectState::Value, b'}'), ObjectState::Done);
    }

    #[test]
    fn structural_errors() {
        assert_eq!(next(ObjectState::Open, b'1'), ObjectState::ErrKeyNotString);
        assert_eq!(next(ObjectState::Key, b','), ObjectState::ErrColonNotFound);
        assert_eq!(next(ObjectState::Sep, b':'), ObjectState::ErrMultipleColon);
        assert_eq!(next(ObjectState::Sep, b'}'), ObjectState::ErrInvalidObjValue);
        assert_eq!(next(ObjectState::Value, b':'), ObjectState::ErrValueEnd);
        assert_eq!(next(ObjectState::Comma, b'}'), ObjectState::ErrTrailingComma);
        assert_eq!(next(ObjectState::Comma, b'x'), ObjectState::ErrKeyNotString);
    }

    #[test]
    fn nested_containers_start_member_values() {
        assert_eq!(next(ObjectState::Sep, b'{'), ObjectState::Value);
        assert_eq!(next(ObjectState::Sep, b'['), ObjectState::Value);
    }
}
