//! Canonical player and club tags.

use serde::{Deserialize, Serialize};

/// A tag in the form the club API expects: one leading `#`, no other `#`,
/// upper-case.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[display("{}", _0)]
#[serde(transparent)]
pub struct Tag(String);

impl Tag {
    /// Canonicalize user input.
    ///
    /// Strips surrounding whitespace, drops every `#`, upper-cases the rest
    /// and prepends a single `#`. Whitespace exposed by removing a `#` is
    /// trimmed too, so normalizing a canonical tag returns it unchanged. Never fails; empty input yields `"#"`,
    /// which the club API later rejects as not found.
    ///
    /// # Examples
    ///
    /// ```
    /// use clubgate_core::Tag;
    ///
    /// assert_eq!(Tag::normalize("  #8ljyq9u2 ").as_str(), "#8LJYQ9U2");
    /// assert_eq!(Tag::normalize("").as_str(), "#");
    /// ```
    pub fn normalize(raw: &str) -> Self {
        let body = raw.trim().replace('#', "");
        let body = body.trim().to_uppercase();
        Self(format!("#{body}"))
    }

    /// The canonical string, including the leading `#`.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Tag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Tag {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Tag {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_normalize_strips_hashes_and_uppercases() {
        assert_eq!(Tag::normalize("8ljyq9u2"), "#8LJYQ9U2");
        assert_eq!(Tag::normalize("##8l#jy"), "#8LJY");
        assert_eq!(Tag::normalize("\t#abc \n"), "#ABC");
    }

    #[test]
    fn test_normalize_empty_and_hash_only() {
        assert_eq!(Tag::normalize(""), "#");
        assert_eq!(Tag::normalize("   "), "#");
        assert_eq!(Tag::normalize("###"), "#");
    }

    #[test]
    fn test_inner_whitespace_is_kept() {
        // Only surrounding whitespace is trimmed.
        assert_eq!(Tag::normalize(" ab cd "), "#AB CD");
    }

    #[test]
    fn test_whitespace_next_to_hash_is_trimmed() {
        assert_eq!(Tag::normalize("abc #"), "#ABC");
        assert_eq!(Tag::normalize("# abc"), "#ABC");
    }

    proptest! {
        #[test]
        fn normalize_is_idempotent(raw in "[#a-zA-Z0-9 \t\u{e9}\u{df}]{0,32}") {
            let once = Tag::normalize(&raw);
            let twice = Tag::normalize(once.as_str());
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn normalize_has_exactly_one_leading_hash(raw in "[#a-zA-Z0-9 ]{0,24}") {
            let tag = Tag::normalize(&raw);
            prop_assert!(tag.as_str().starts_with('#'));
            prop_assert_eq!(tag.as_str().matches('#').count(), 1);
        }
    }
}
