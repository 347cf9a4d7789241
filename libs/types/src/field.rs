//! TLV field representation for EMV Merchant Presented Mode payloads
//!
//! A field is either a leaf (id + textual value) or a nested template whose
//! value is the concatenation of its children's encodings. The two cases are
//! collapsed into one tagged variant so the codec can encode both with a
//! single recursive function.

use serde::{Deserialize, Serialize};

/// A single tag-length-value unit of an MPM payload.
///
/// Invariants enforced by the codec at encode time (not by construction):
/// - `id` is exactly 2 ASCII digits
/// - the encoded value is at most 99 characters (the 2-digit decimal length
///   field cannot represent more)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Field {
    /// Terminal field carrying a textual value.
    Leaf { id: String, value: String },
    /// Template field whose value is the concatenation of its children.
    Nested { id: String, children: Vec<Field> },
}

impl Field {
    /// Construct a leaf field.
    pub fn leaf(id: impl Into<String>, value: impl Into<String>) -> Self {
        Field::Leaf {
            id: id.into(),
            value: value.into(),
        }
    }

    /// Construct a nested template field.
    pub fn nested(id: impl Into<String>, children: Vec<Field>) -> Self {
        Field::Nested {
            id: id.into(),
            children,
        }
    }

    /// The field's 2-digit identifier.
    pub fn id(&self) -> &str {
        match self {
            Field::Leaf { id, .. } => id,
            Field::Nested { id, .. } => id,
        }
    }

    /// The leaf value, or None for nested templates.
    pub fn value(&self) -> Option<&str> {
        match self {
            Field::Leaf { value, .. } => Some(value),
            Field::Nested { .. } => None,
        }
    }

    /// Child fields, or an empty slice for leaves.
    pub fn children(&self) -> &[Field] {
        match self {
            Field::Leaf { .. } => &[],
            Field::Nested { children, .. } => children,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_accessors() {
        let field = Field::leaf("00", "01");
        assert_eq!(field.id(), "00");
        assert_eq!(field.value(), Some("01"));
        assert!(field.children().is_empty());
    }

    #[test]
    fn test_nested_accessors() {
        let field = Field::nested("26", vec![Field::leaf("00", "br.gov.bcb.pix")]);
        assert_eq!(field.id(), "26");
        assert_eq!(field.value(), None);
        assert_eq!(field.children().len(), 1);
        assert_eq!(field.children()[0].id(), "00");
    }

    #[test]
    fn test_serde_round_trip() {
        let field = Field::nested(
            "62",
            vec![Field::leaf("05", "***")],
        );
        let json = serde_json::to_string(&field).unwrap();
        let back: Field = serde_json::from_str(&json).unwrap();
        assert_eq!(field, back);
    }
}
