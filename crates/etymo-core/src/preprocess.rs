use unicode_normalization::UnicodeNormalization;

/// Canonical query form: NFKC, trimmed, lowercase.
/// All dataset keys and all lookups go through this.
pub fn normalize(text: &str) -> String {
    text.nfkc().collect::<String>().trim().to_lowercase()
}

/// Affix parts carry hyphen markers ("uni-", "-able"); matching
/// against plain words uses the bare text.
pub fn strip_hyphens(part: &str) -> String {
    part.replace('-', "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims_and_lowercases() {
        assert_eq!(normalize("  Unique \n"), "unique");
        assert_eq!(normalize("UNDER"), "under");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn normalize_applies_nfkc() {
        // fullwidth latin collapses to ascii
        assert_eq!(normalize("ｕｎｉｑｕｅ"), "unique");
    }

    #[test]
    fn strip_hyphens_removes_markers() {
        assert_eq!(strip_hyphens("uni-"), "uni");
        assert_eq!(strip_hyphens("-able"), "able");
        assert_eq!(strip_hyphens("spect"), "spect");
    }
}
