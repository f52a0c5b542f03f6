// SPDX-License-Identifier: Apache-2.0

//! A table-driven JSON validator.
//!
//! Validation is three dense DFA transition tables (values, arrays,
//! objects) composed over a nesting stack. One byte, one table lookup; no
//! value tree, no recovery, no recursion. Input may arrive in arbitrary
//! chunks and the verdict is a byte count or an [`Error`] with the exact
//! offset of the rejected byte.
//!
//! ```
//! use tablejson::{validate, ErrorKind};
//!
//! assert!(validate(b"{\"a\": [1, 2.5e3, null]}").is_ok());
//!
//! let err = validate(b"[1,2,]").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::TrailingComma);
//! assert_eq!(err.offset(), 5);
//! ```

#![cfg_attr(not(test), no_std)]

extern crate alloc;

mod error;
mod tables;
mod validator;

pub use error::{Error, ErrorKind};
pub use validator::{validate, Validator};
