use crate::consts::{DAY_CHAR, MONTH_CHAR, YEAR_CHAR};
use crate::prelude::*;
use crate::schema::SchemaError;

/// The numeric date component a field token stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
pub enum FieldKind {
    #[display(fmt = "m")]
    #[serde(rename = "m")]
    Month,
    #[display(fmt = "d")]
    #[serde(rename = "d")]
    Day,
    #[display(fmt = "y")]
    #[serde(rename = "y")]
    Year,
}

impl FieldKind {
    /// Classifies a format character, ignoring case.
    /// Returns `None` for anything that is not `m`, `d` or `y`.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            MONTH_CHAR => Some(Self::Month),
            DAY_CHAR => Some(Self::Day),
            YEAR_CHAR => Some(Self::Year),
            _ => None,
        }
    }

    /// Returns the lowercase format letter
    #[inline]
    pub const fn as_char(self) -> char {
        match self {
            Self::Month => MONTH_CHAR,
            Self::Day => DAY_CHAR,
            Self::Year => YEAR_CHAR,
        }
    }

    #[inline]
    const fn slot(self) -> usize {
        match self {
            Self::Month => 0,
            Self::Day => 1,
            Self::Year => 2,
        }
    }
}

/// One run of identical characters from a format string.
/// Never empty; every character is the same.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Deref, Into, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Token(String);

impl Token {
    /// Creates a token, validating that it is a non-empty run of one character
    ///
    /// # Errors
    /// Returns `SchemaError::EmptyToken` for an empty string and
    /// `SchemaError::MixedToken` when the characters differ.
    pub fn new(text: impl Into<String>) -> Result<Self, SchemaError> {
        let text = text.into();
        let head = text.chars().next().ok_or(SchemaError::EmptyToken)?;
        if text.chars().any(|c| c != head) {
            return Err(SchemaError::MixedToken(text));
        }
        Ok(Self(text))
    }

    /// Starts a run with a single character
    pub(crate) fn start(c: char) -> Self {
        Self(c.to_string())
    }

    /// Extends the run when `c` matches it; returns whether it did
    pub(crate) fn extend(&mut self, c: char) -> bool {
        if self.head() == c {
            self.0.push(c);
            true
        } else {
            false
        }
    }

    /// The character the run is made of
    pub fn head(&self) -> char {
        // Tokens are never empty, see `new` and `start`.
        self.0.chars().next().unwrap_or_default()
    }

    /// The field this token renders, or `None` for a literal
    pub fn field(&self) -> Option<FieldKind> {
        FieldKind::from_char(self.head())
    }

    pub fn is_literal(&self) -> bool {
        self.field().is_none()
    }

    /// Number of characters in the run; for field tokens this is the display width
    pub fn width(&self) -> usize {
        self.0.chars().count()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Token {
    type Error = SchemaError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Token {
    type Error = SchemaError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// A slot per field kind. The renderer uses it to remember which fields of
/// the current date it already wrote, the parser to hold captured digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldMap<T>([Option<T>; 3]);

impl<T> Default for FieldMap<T> {
    fn default() -> Self {
        Self([None, None, None])
    }
}

impl<T> FieldMap<T> {
    pub(crate) fn insert(&mut self, kind: FieldKind, value: T) {
        self.0[kind.slot()] = Some(value);
    }

    pub(crate) const fn contains(&self, kind: FieldKind) -> bool {
        self.0[kind.slot()].is_some()
    }

    pub(crate) fn clear(&mut self) {
        *self = Self::default();
    }
}

impl<T: Copy> FieldMap<T> {
    pub(crate) const fn get(&self, kind: FieldKind) -> Option<T> {
        self.0[kind.slot()]
    }
}
