//! Scalar field paths as a closed tagged union.
//!
//! The wire still speaks `"name"` / `"contact.email"` strings, but parsing
//! happens exactly once at the edge: a constructed `FieldPath` can only name
//! a leaf that exists, so the editors take no invalid-path branch at all.

use std::fmt;
use std::str::FromStr;

use crate::document::editor::EditError;
use crate::document::model::ContactField;

/// Every legal scalar-field path: the top-level `name`, or one contact leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldPath {
    Name,
    Contact(ContactField),
}

impl FromStr for ContactField {
    type Err = EditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContactField::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| EditError::InvalidFieldPath(format!("contact.{s}")))
    }
}

impl FromStr for FieldPath {
    type Err = EditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "name" {
            return Ok(FieldPath::Name);
        }
        match s.split_once('.') {
            Some(("contact", inner)) => inner.parse::<ContactField>().map(FieldPath::Contact),
            _ => Err(EditError::InvalidFieldPath(s.to_string())),
        }
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldPath::Name => write!(f, "name"),
            FieldPath::Contact(field) => write!(f, "contact.{}", field.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_top_level_name() {
        assert_eq!("name".parse::<FieldPath>().unwrap(), FieldPath::Name);
    }

    #[test]
    fn test_parse_every_contact_leaf() {
        for field in ContactField::ALL {
            let path: FieldPath = format!("contact.{}", field.as_str()).parse().unwrap();
            assert_eq!(path, FieldPath::Contact(field));
        }
    }

    #[test]
    fn test_parse_rejects_unknown_paths() {
        for bad in ["salary", "contact.fax", "headings.skills", "contact", ""] {
            let err = bad.parse::<FieldPath>().unwrap_err();
            assert!(
                matches!(err, EditError::InvalidFieldPath(_)),
                "{bad:?} should be InvalidFieldPath, got {err:?}"
            );
        }
    }

    #[test]
    fn test_display_roundtrips_through_parse() {
        for path in [FieldPath::Name, FieldPath::Contact(ContactField::Github)] {
            assert_eq!(path.to_string().parse::<FieldPath>().unwrap(), path);
        }
    }
}
