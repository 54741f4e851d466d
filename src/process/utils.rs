/// Strip the fixed-width padding around a raw field.
pub fn clean_str(raw: &str) -> &str {
    raw.trim()
}

/// Coerce a padded integer field; empty or non-integer text is undefined.
pub fn parse_optional_int(raw: &str) -> Option<i32> {
    clean_str(raw).parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_int_keeps_sentinels() {
        assert_eq!(parse_optional_int("  80"), Some(80));
        assert_eq!(parse_optional_int(" -999"), Some(-999));
        assert_eq!(parse_optional_int("   "), None);
        assert_eq!(parse_optional_int("n/a"), None);
    }
}
