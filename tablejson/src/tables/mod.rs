// SPDX-License-Identifier: Apache-2.0

//! Dense transition tables for the three validation automata.
//!
//! Each automaton is a `state x 256` matrix of next-state identifiers,
//! built once at compile time by `const` row fills. Totality is enforced
//! by construction: every cell of every row holds a state, so no
//! (state, byte) pair can be undefined.

pub(crate) mod array;
pub(crate) mod object;
pub(crate) mod value;

use crate::error::ErrorKind;

/// What the composer does when an automaton lands in a state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Class {
    /// Keep feeding bytes.
    Live,
    /// The automaton finished its job; the frame pops.
    Terminal,
    /// Absorbing rejection state.
    Error(ErrorKind),
}

/// Overwrite an inclusive byte range of a row.
pub(crate) const fn span<T: Copy>(mut row: [T; 256], lo: u8, hi: u8, to: T) -> [T; 256] {
    let mut b = lo as usize;
    while b <= hi as usize {
        row[b] = to;
        b += 1;
    }
    row
}

/// Overwrite a single byte of a row.
pub(crate) const fn set<T: Copy>(mut row: [T; 256], byte: u8, to: T) -> [T; 256] {
    row[byte as usize] = to;
    row
}

/// Overwrite a list of bytes of a row.
pub(crate) const fn set_each<T: Copy>(mut row: [T; 256], bytes: &[u8], to: T) -> [T; 256] {
    let mut i = 0;
    while i < bytes.len() {
        row[bytes[i] as usize] = to;
        i += 1;
    }
    row
}

/// Hex digits as accepted after `\u`.
pub(crate) const HEX_DIGITS: &[u8] = b"0123456789abcdefABCDEF";

/// Bytes that may begin a JSON value, containers included.
pub(crate) const VALUE_START: &[u8] = b"{[\"-0123456789ntf";

/// Bytes that terminate a number: whitespace or a structural close/comma.
pub(crate) const NUM_TERMINATORS: &[u8] = b" \t\r\n,]}";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_is_inclusive() {
        let row = span([0u8; 256], 0x30, 0x39, 7);
        assert_eq!(row[0x2F], 0);
        assert_eq!(row[0x30], 7);
        assert_eq!(row[0x39], 7);
        assert_eq!(row[0x3A], 0);
    }

    #[test]
    fn set_each_hits_only_listed_bytes() {
        let row = set_each([0u8; 256], b"af", 1);
        assert_eq!(row[b'a' as usize], 1);
        assert_eq!(row[b'f' as usize], 1);
        assert_eq!(row[b'b' as usize], 0);
    }

    #[test]
    fn absorption_value_table() {
        for &state in value::ALL.iter() {
            if matches!(state.class(), Class::Terminal | Class::Error(_)) {
                for byte in 0..=255u8 {
                    assert_eq!(
                        value::TABLE[state as usize][byte as usize],
                        state,
                        "{state:?} must self-loop on {byte:#04x}"
                    );
                }
            }
        }
    }

    #[test]
    fn absorption_array_table() {
        for &state in array::ALL.iter() {
            if matches!(state.class(), Class::Terminal | Class::Error(_)) {
                for byte in 0..=255u8 {
                    assert_eq!(array::TABLE[state as usize][byte as usize], state);
                }
            }
        }
    }

    #[test]
    fn absorption_object_table() {
        for &state in object::ALL.iter() {
            if matches!(state.class(), Class::Terminal | Class::Error(_)) {
                for byte in 0..=255u8 {
                    assert_eq!(object::TABLE[state as usize][byte as usize], state);
                }
            }
        }
    }

    #[test]
    fn totality_every_cell_reaches_a_classified_state() {
        // The array type already guarantees a state per cell; this sweep
        // additionally proves classification is total over what the tables
        // can actually produce.
        for &state in value::ALL.iter() {
            for byte in 0..=255u8 {
                let _ = value::TABLE[state as usize][byte as usize].class();
            }
        }
        for &state in array::ALL.iter() {
            for byte in 0..=255u8 {
                let _ = array::TABLE[state as usize][byte as usize].class();
            }
        }
        for &state in object::ALL.iter() {
            for byte in 0..=255u8 {
                let _ = object::TABLE[state as usize][byte as usize].class();
            }
        }
    }
}
