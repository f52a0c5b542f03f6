// SPDX-License-Identifier: Apache-2.0

//! Validation errors: a closed kind taxonomy plus the byte and offset
//! where the automaton rejected.

/// Everything that can make a document invalid.
///
/// Table-produced kinds map one-to-one onto absorbing table states; the
/// last four are produced by the composer itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidStart,
    ExpectedNull,
    ExpectedTrue,
    ExpectedFalse,
    InvalidUtf8,
    InvalidEscapeChar,
    InvalidUnicodeEscape,
    LoneSurrogate,
    UnpairedSurrogate,
    LeadingZeroes,
    PlusSign,
    NoDigitBeforeDecimal,
    NoDigitBeforeExponent,
    NotANumber,
    DoubleDecimal,
    DoubleExponent,
    TrailingComma,
    InvalidValue,
    ObjCurlyStart,
    KeyNotString,
    ColonNotFound,
    MultipleColon,
    InvalidObjValue,
    ValueEnd,
    MaxDepthReached,
    ContentEnded,
    UnfinishedStream,
    EmptyStream,
}

impl ErrorKind {
    /// Human-readable description, suitable for a CLI report.
    pub fn message(self) -> &'static str {
        match self {
            ErrorKind::InvalidStart => "unexpected starting character for a value",
            ErrorKind::ExpectedNull => "did you mean null?",
            ErrorKind::ExpectedTrue => "did you mean true?",
            ErrorKind::ExpectedFalse => "did you mean false?",
            ErrorKind::InvalidUtf8 => "invalid UTF-8 or unescaped control byte in string",
            ErrorKind::InvalidEscapeChar => "invalid escape character",
            ErrorKind::InvalidUnicodeEscape => "only hexadecimal digits are allowed after \\u",
            ErrorKind::LoneSurrogate => "lone low surrogate is not allowed",
            ErrorKind::UnpairedSurrogate => "unpaired high surrogate is not allowed",
            ErrorKind::LeadingZeroes => "leading zeroes are not allowed in numbers",
            ErrorKind::PlusSign => "a number cannot start with a plus sign",
            ErrorKind::NoDigitBeforeDecimal => "at least one digit is required before the decimal point",
            ErrorKind::NoDigitBeforeExponent => "at least one digit is required before the exponent",
            ErrorKind::NotANumber => "malformed number",
            ErrorKind::DoubleDecimal => "more than one decimal point in a number",
            ErrorKind::DoubleExponent => "more than one exponent in a number",
            ErrorKind::TrailingComma => "trailing commas are not allowed",
            ErrorKind::InvalidValue => "expected an array element",
            ErrorKind::ObjCurlyStart => "objects must start with a curly bracket",
            ErrorKind::KeyNotString => "object key is not a string",
            ErrorKind::ColonNotFound => "colon not found between key and value",
            ErrorKind::MultipleColon => "multiple colons between key and value",
            ErrorKind::InvalidObjValue => "expected an object member value",
            ErrorKind::ValueEnd => "object value can only be followed by a comma or closing bracket",
            ErrorKind::MaxDepthReached => "maximum nesting depth exceeded",
            ErrorKind::ContentEnded => "content after the top-level value",
            ErrorKind::UnfinishedStream => "input ended before the value completed",
            ErrorKind::EmptyStream => "no value in input",
        }
    }
}

/// A rejection: what went wrong, on which byte, at which offset.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
    byte: u8,
    offset: usize,
}

impl Error {
    /// Builds the error pre-wrapped in `Err`, so rejection sites read as
    /// a single `return Error::new(...)`.
    pub(crate) fn new<T>(kind: ErrorKind, byte: u8, offset: usize) -> Result<T, Self> {
        Err(Self { kind, byte, offset })
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The byte the automaton rejected on. End-of-input kinds carry a
    /// space, since no real byte was seen.
    pub fn byte(&self) -> u8 {
        self.byte
    }

    /// Offset of the rejected byte from the start of the input.
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{:?}({}) at {}",
            self.kind, self.byte as char, self.offset
        )
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} (byte offset {})", self.kind.message(), self.offset)
    }
}
