use std::{fmt, str::FromStr};

use tracing::debug;

use crate::{prelude::*, types::Token};

/// A format string split into runs of identical characters.
///
/// `mm/dd/yyyy` becomes `["mm", "/", "dd", "/", "yyyy"]`. Runs are grouped by
/// character identity, not by class, so `Mm` is two tokens. A schema always
/// holds at least one token.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deref, Serialize, Deserialize)]
#[serde(try_from = "Vec<Token>", into = "Vec<Token>")]
pub struct Schema(Vec<Token>);

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum SchemaError {
    #[display(fmt = "Empty format string")]
    EmptyFormat,
    #[display(fmt = "Empty schema token")]
    EmptyToken,
    #[display(fmt = "Schema token mixes characters: {}", _0)]
    MixedToken(String),
    #[display(fmt = "Schema has no tokens")]
    EmptySchema,
}

impl std::error::Error for SchemaError {}

/// Compiles a format string into a schema.
///
/// Returns `None` when no format is given or the format is empty; that is the
/// "no text editing" mode rather than a schema with nothing in it.
pub fn compile_schema(format: Option<&str>) -> Option<Schema> {
    let format = format.filter(|f| !f.is_empty())?;

    let tokens = format.chars().fold(Vec::<Token>::new(), |mut tokens, c| {
        let extended = tokens.last_mut().is_some_and(|last| last.extend(c));
        if !extended {
            tokens.push(Token::start(c));
        }
        tokens
    });

    debug!(format, tokens = tokens.len(), "compiled date schema");
    Some(Schema(tokens))
}

impl Schema {
    /// The tokens in format order
    pub fn tokens(&self) -> &[Token] {
        &self.0
    }

    /// Number of field tokens (`m`, `d`, `y` runs)
    pub fn field_count(&self) -> usize {
        self.0.iter().filter(|token| !token.is_literal()).count()
    }
}

impl FromStr for Schema {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        compile_schema(Some(s)).ok_or(SchemaError::EmptyFormat)
    }
}

impl TryFrom<Vec<Token>> for Schema {
    type Error = SchemaError;

    fn try_from(tokens: Vec<Token>) -> Result<Self, Self::Error> {
        if tokens.is_empty() {
            return Err(SchemaError::EmptySchema);
        }
        Ok(Self(tokens))
    }
}

impl From<Schema> for Vec<Token> {
    fn from(schema: Schema) -> Self {
        schema.0
    }
}

/// Writes the format string the schema was compiled from
impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|token| f.write_str(token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FieldKind;

    fn texts(schema: &Schema) -> Vec<&str> {
        schema.iter().map(Token::as_str).collect()
    }

    #[test]
    fn test_compile_single_date() {
        let schema = compile_schema(Some("mm/dd/yyyy")).expect("failed to compile single-date format");
        assert_eq!(texts(&schema), ["mm", "/", "dd", "/", "yyyy"]);
    }

    #[test]
    fn test_compile_range() {
        let schema = compile_schema(Some("mm/dd/yyyy-mm/dd/yyyy")).expect("failed to compile range format");
        assert_eq!(
            texts(&schema),
            ["mm", "/", "dd", "/", "yyyy", "-", "mm", "/", "dd", "/", "yyyy"]
        );
    }

    #[test]
    fn test_compile_absent_or_empty() {
        assert_eq!(compile_schema(None), None);
        assert_eq!(compile_schema(Some("")), None);
    }

    #[test]
    fn test_compile_groups_by_identity() {
        struct TestCase {
            format:      &'static str,
            expected:    &'static [&'static str],
            description: &'static str,
        }

        let cases = [
            TestCase {
                format:      "Mm",
                expected:    &["M", "m"],
                description: "case differences split runs",
            },
            TestCase {
                format:      "m.d.yy",
                expected:    &["m", ".", "d", ".", "yy"],
                description: "unpadded fields",
            },
            TestCase {
                format:      "yyyy--mm",
                expected:    &["yyyy", "--", "mm"],
                description: "multi-character literal",
            },
            TestCase {
                format:      "dd. mm",
                expected:    &["dd", ".", " ", "mm"],
                description: "adjacent different literals",
            },
            TestCase {
                format:      "x",
                expected:    &["x"],
                description: "single literal character",
            },
        ];

        for case in &cases {
            let schema = compile_schema(Some(case.format)).expect("failed to compile format");
            assert_eq!(texts(&schema), case.expected, "{}", case.description);
        }
    }

    #[test]
    fn test_compile_multibyte_literal() {
        let schema = compile_schema(Some("dd→→mm")).expect("failed to compile format");
        assert_eq!(texts(&schema), ["dd", "→→", "mm"]);
    }

    #[test]
    fn test_token_kinds() {
        let schema: Schema = "MM/dd/yyyy".parse().expect("failed to parse schema");
        let kinds: Vec<_> = schema.iter().map(Token::field).collect();
        assert_eq!(
            kinds,
            [
                Some(FieldKind::Month),
                None,
                Some(FieldKind::Day),
                None,
                Some(FieldKind::Year)
            ]
        );
        assert_eq!(schema.field_count(), 3);
    }

    #[test]
    fn test_from_str_empty() {
        let result = "".parse::<Schema>();
        assert_eq!(result, Err(SchemaError::EmptyFormat));
    }

    #[test]
    fn test_display_restores_format() {
        for format in ["mm/dd/yyyy", "m/d/yy-m/d/yy", "yyyy. mm. dd"] {
            let schema: Schema = format.parse().expect("failed to parse schema");
            assert_eq!(schema.to_string(), format);
        }
    }

    #[test]
    fn test_serde_round_trip() {
        let schema: Schema = "mm/dd/yyyy".parse().expect("failed to parse schema");
        let json = serde_json::to_string(&schema).expect("failed to serialize schema");
        assert_eq!(json, r#"["mm","/","dd","/","yyyy"]"#);

        let parsed: Schema = serde_json::from_str(&json).expect("failed to deserialize schema");
        assert_eq!(parsed, schema);
    }

    #[test]
    fn test_serde_rejects_invalid() {
        let result: Result<Schema, _> = serde_json::from_str("[]");
        assert!(result.is_err());

        let result: Result<Schema, _> = serde_json::from_str(r#"["mm",""]"#);
        assert!(result.is_err());

        let result: Result<Schema, _> = serde_json::from_str(r#"["m/d"]"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_error_display() {
        assert_eq!(SchemaError::EmptyFormat.to_string(), "Empty format string");
        assert_eq!(
            SchemaError::MixedToken("md".to_owned()).to_string(),
            "Schema token mixes characters: md"
        );
    }
}
