use crate::{prelude::*, schema::Schema, types::Token};

/// Describes what a masked input accepts at one schema position.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaskPart {
    /// Text that must appear verbatim, such as `/`
    Fixed(String),
    /// Digits for a date field; `placeholder` is the field token shown while empty
    Slot {
        placeholder: String,
        min_len:     usize,
        max_len:     usize,
    },
}

impl MaskPart {
    /// Checks whether `segment` is acceptable input for this part
    pub fn accepts(&self, segment: &str) -> bool {
        match self {
            Self::Fixed(text) => segment == text.as_str(),
            Self::Slot { min_len, max_len, .. } => {
                (*min_len..=*max_len).contains(&segment.len()) && segment.bytes().all(|b| b.is_ascii_digit())
            },
        }
    }

    pub const fn is_fixed(&self) -> bool {
        matches!(self, Self::Fixed(_))
    }
}

impl From<&Token> for MaskPart {
    fn from(token: &Token) -> Self {
        if token.is_literal() {
            Self::Fixed(token.as_str().to_owned())
        } else {
            Self::Slot {
                placeholder: token.as_str().to_owned(),
                min_len:     1,
                max_len:     token.width(),
            }
        }
    }
}

impl Schema {
    /// The input mask for this schema, one part per token
    pub fn mask(&self) -> Vec<MaskPart> {
        self.iter().map(MaskPart::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(placeholder: &str, max_len: usize) -> MaskPart {
        MaskPart::Slot {
            placeholder: placeholder.to_owned(),
            min_len: 1,
            max_len,
        }
    }

    #[test]
    fn test_mask_for_single_date() {
        let schema: Schema = "mm/dd/yyyy".parse().expect("failed to parse schema");
        assert_eq!(
            schema.mask(),
            [
                slot("mm", 2),
                MaskPart::Fixed("/".to_owned()),
                slot("dd", 2),
                MaskPart::Fixed("/".to_owned()),
                slot("yyyy", 4),
            ]
        );
    }

    #[test]
    fn test_mask_keeps_placeholder_case() {
        let schema: Schema = "D.M.YY".parse().expect("failed to parse schema");
        let mask = schema.mask();
        assert_eq!(mask[0], slot("D", 1));
        assert_eq!(mask[4], slot("YY", 2));
        assert!(mask[1].is_fixed());
    }

    #[test]
    fn test_slot_accepts() {
        struct TestCase {
            segment:  &'static str,
            accepted: bool,
        }

        let part = slot("yyyy", 4);
        let cases = [
            TestCase { segment: "2", accepted: true },
            TestCase { segment: "2020", accepted: true },
            TestCase { segment: "", accepted: false },
            TestCase { segment: "20201", accepted: false },
            TestCase { segment: "20a0", accepted: false },
            TestCase { segment: "２０", accepted: false },
        ];

        for case in &cases {
            assert_eq!(part.accepts(case.segment), case.accepted, "segment {:?}", case.segment);
        }
    }

    #[test]
    fn test_fixed_accepts() {
        let part = MaskPart::Fixed("-".to_owned());
        assert!(part.accepts("-"));
        assert!(!part.accepts("/"));
        assert!(!part.accepts("--"));
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_string(&slot("mm", 2)).expect("failed to serialize mask part");
        assert_eq!(json, r#"{"slot":{"placeholder":"mm","min_len":1,"max_len":2}}"#);

        let json = serde_json::to_string(&MaskPart::Fixed("/".to_owned())).expect("failed to serialize mask part");
        assert_eq!(json, r#"{"fixed":"/"}"#);
    }
}
