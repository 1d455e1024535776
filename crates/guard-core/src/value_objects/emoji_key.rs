//! Emoji key - canonical string encoding of a reaction symbol
//!
//! A remove notification must match an add that may have been recorded before
//! a process restart, so the key has to be a stable string the database can
//! compare byte-for-byte:
//!
//! - unicode emoji encode as lowercase hex codepoints joined by `-`
//!   (`👍` → `1f44d`, `🇰🇷` → `1f1f0-1f1f7`);
//! - platform-custom emoji encode as `name-id`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Canonical, restart-stable encoding of a reaction symbol
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmojiKey(String);

impl EmojiKey {
    /// Canonicalize a unicode emoji string
    pub fn from_unicode(emoji: &str) -> Result<Self, EmojiKeyError> {
        if emoji.is_empty() {
            return Err(EmojiKeyError::Empty);
        }

        let key = emoji
            .chars()
            .map(|c| format!("{:x}", u32::from(c)))
            .collect::<Vec<_>>()
            .join("-");

        Ok(Self(key))
    }

    /// Canonicalize a platform-custom emoji as `name-id`
    pub fn from_custom(name: &str, id: i64) -> Result<Self, EmojiKeyError> {
        if name.is_empty() {
            return Err(EmojiKeyError::Empty);
        }

        Ok(Self(format!("{name}-{id}")))
    }

    /// Rehydrate a key that was previously stored
    ///
    /// Stored keys are trusted as-is; canonicalization only happens at the
    /// ingestion boundary.
    pub fn from_stored(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Get the key as a string slice
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmojiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Error canonicalizing a raw emoji representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EmojiKeyError {
    #[error("empty emoji representation")]
    Empty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unicode_single_codepoint() {
        let key = EmojiKey::from_unicode("👍").unwrap();
        assert_eq!(key.as_str(), "1f44d");
    }

    #[test]
    fn test_unicode_multi_codepoint() {
        // Regional indicator pair (flag)
        let key = EmojiKey::from_unicode("🇰🇷").unwrap();
        assert_eq!(key.as_str(), "1f1f0-1f1f7");
    }

    #[test]
    fn test_custom_emoji() {
        let key = EmojiKey::from_custom("peaky", 175928847299117063).unwrap();
        assert_eq!(key.as_str(), "peaky-175928847299117063");
    }

    #[test]
    fn test_empty_is_rejected() {
        assert_eq!(EmojiKey::from_unicode(""), Err(EmojiKeyError::Empty));
        assert_eq!(EmojiKey::from_custom("", 1), Err(EmojiKeyError::Empty));
    }

    #[test]
    fn test_round_trips_through_storage() {
        let key = EmojiKey::from_unicode("👍").unwrap();
        let stored = key.as_str().to_string();
        assert_eq!(EmojiKey::from_stored(stored), key);
    }

    #[test]
    fn test_canonicalization_is_deterministic() {
        assert_eq!(
            EmojiKey::from_unicode("👍").unwrap(),
            EmojiKey::from_unicode("👍").unwrap()
        );
    }
}
