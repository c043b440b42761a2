//! Function identity strings.
//!
//! The host parses the leading `f<N>:` token of every name to tell loaded
//! functions apart, so the shape is part of the wire format. Everything after
//! the colon is free text for the user.

use core::fmt;
use core::num::NonZeroU32;
use core::str::FromStr;

use crate::constants::{NAME_BUFFER_LEN, NAME_ID_SEPARATOR, NAME_PREFIX};
use crate::error::NameError;

/// Numeric id from the `f<N>:` prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct FunctionId(NonZeroU32);

impl FunctionId {
    /// Wrap a raw id, rejecting zero.
    #[must_use]
    pub const fn new(id: u32) -> Option<Self> {
        match NonZeroU32::new(id) {
            Some(id) => Some(Self(id)),
            None => None,
        }
    }

    /// The id as an integer.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }
}

impl fmt::Display for FunctionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{NAME_PREFIX}{}", self.0)
    }
}

/// A validated function identity.
///
/// # Grammar
///
/// ```text
/// name        := 'f' digits ':' description
/// digits      := [0-9]+          (value in 1..=u32::MAX)
/// description := any text without NUL
/// ```
///
/// The encoded name plus its NUL terminator fits in [`NAME_BUFFER_LEN`] bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct FunctionName {
    text: String,
    id: FunctionId,
    description_start: usize,
}

impl FunctionName {
    /// Largest name length in bytes, terminator excluded.
    pub const MAX_LEN: usize = NAME_BUFFER_LEN - 1;

    /// Parse and validate a name.
    ///
    /// # Errors
    ///
    /// Returns the first [`NameError`] the text violates.
    pub fn parse(text: &str) -> Result<Self, NameError> {
        if let Some(offset) = text.find('\0') {
            return Err(NameError::InteriorNul(offset));
        }
        if text.len() > Self::MAX_LEN {
            return Err(NameError::TooLong {
                len: text.len(),
                max: Self::MAX_LEN,
            });
        }

        let rest = text
            .strip_prefix(NAME_PREFIX)
            .ok_or(NameError::MissingPrefix)?;

        let digit_count = rest.bytes().take_while(u8::is_ascii_digit).count();
        if digit_count == 0 {
            return Err(NameError::MissingId);
        }
        let (digits, tail) = rest.split_at(digit_count);

        let id = digits
            .parse::<u32>()
            .ok()
            .and_then(FunctionId::new)
            .ok_or_else(|| NameError::InvalidId(digits.to_string()))?;

        let description = tail
            .strip_prefix(NAME_ID_SEPARATOR)
            .ok_or(NameError::MissingColon)?;

        Ok(Self {
            text: text.to_string(),
            id,
            description_start: text.len() - description.len(),
        })
    }

    /// Parse a name from a C buffer, reading up to the first NUL.
    ///
    /// # Errors
    ///
    /// [`NameError::Unterminated`] if the buffer has no NUL,
    /// [`NameError::InvalidUtf8`] for non UTF-8 bytes, otherwise any error of
    /// [`FunctionName::parse`].
    pub fn from_c_bytes(buffer: &[u8]) -> Result<Self, NameError> {
        let end = buffer
            .iter()
            .position(|&b| b == 0)
            .ok_or(NameError::Unterminated(buffer.len()))?;
        let (bytes, _) = buffer.split_at(end);
        match core::str::from_utf8(bytes) {
            Ok(text) => Self::parse(text),
            Err(_) => Err(NameError::InvalidUtf8),
        }
    }

    /// The numeric id.
    #[must_use]
    pub fn id(&self) -> FunctionId {
        self.id
    }

    /// Text after the colon, leading whitespace removed.
    #[must_use]
    pub fn description(&self) -> &str {
        self.text
            .get(self.description_start..)
            .unwrap_or_default()
            .trim_start()
    }

    /// The full name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Bytes needed to store the name with its terminator.
    #[must_use]
    pub fn encoded_len(&self) -> usize {
        self.text.len() + 1
    }
}

impl fmt::Display for FunctionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl FromStr for FunctionName {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for FunctionName {
    type Error = NameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<FunctionName> for String {
    fn from(name: FunctionName) -> Self {
        name.text
    }
}

impl AsRef<str> for FunctionName {
    fn as_ref(&self) -> &str {
        &self.text
    }
}
