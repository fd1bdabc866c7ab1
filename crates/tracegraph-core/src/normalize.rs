// Rust guideline compliant 2026-10-16

//! Canonical graph keys for tracker identifiers.

/// Maps a raw tracker identifier or label to its canonical graph key.
///
/// Every space becomes an underscore; no other character is touched, so the
/// mapping is total and idempotent. Distinct raw ids that differ only by
/// space vs underscore collapse onto the same key.
pub fn normalize_id(raw: &str) -> String {
    raw.replace(' ', "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spaces_become_underscores() {
        assert_eq!(normalize_id("New Feature"), "New_Feature");
        assert_eq!(normalize_id("  a  b "), "__a__b_");
    }

    #[test]
    fn test_other_whitespace_untouched() {
        assert_eq!(normalize_id("a\tb\nc"), "a\tb\nc");
    }

    #[test]
    fn test_empty() {
        assert_eq!(normalize_id(""), "");
    }

    #[test]
    fn test_idempotent() {
        let once = normalize_id("PIR 12 x");
        assert_eq!(normalize_id(&once), once);
    }
}
